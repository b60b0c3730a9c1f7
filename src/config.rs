//! Covering and rendering configuration types.
//!
//! All of these are plain parameters handed to the covering call or to the renderer;
//! nothing here is process-wide state.

use crate::constants::{ARC_POINTS_PER_LEVEL, BASE_ARC_POINTS, MAX_LEVEL};
use crate::types::{CellError, Result};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Constraints passed to a [`crate::regions::RegionCoverer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CoveringConfig {
  /// Minimum cell level (0-30). Lower = coarser cells.
  pub min_level: u8,

  /// Maximum cell level (0-30). Higher = finer cells.
  pub max_level: u8,

  /// Maximum number of cells returned per shape.
  pub max_cells: usize,
}

impl Default for CoveringConfig {
  fn default() -> Self {
    Self {
      min_level: 0,
      max_level: MAX_LEVEL,
      max_cells: 200,
    }
  }
}

impl CoveringConfig {
  /// Set the maximum level.
  pub fn with_max_level(mut self, max_level: u8) -> Self {
    self.max_level = max_level;
    self
  }

  /// Set the minimum level.
  pub fn with_min_level(mut self, min_level: u8) -> Self {
    self.min_level = min_level;
    self
  }

  /// Set the maximum number of cells. Zero is raised to one.
  pub fn with_max_cells(mut self, max_cells: usize) -> Self {
    self.max_cells = max_cells.max(1);
    self
  }

  /// Checks that both levels are in range and ordered.
  pub fn validate(&self) -> Result<()> {
    if self.max_level > MAX_LEVEL {
      return Err(CellError::LevelOutOfRange(self.max_level));
    }
    if self.min_level > self.max_level {
      return Err(CellError::LevelOutOfRange(self.min_level));
    }
    Ok(())
  }
}

/// Colour scheme of the rendered covering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Theme {
  /// Light basemap, dark cells.
  #[default]
  Day,
  /// Dark basemap, bright cells.
  Night,
}

impl Theme {
  /// Name of the theme.
  #[must_use]
  pub const fn name(self) -> &'static str {
    match self {
      Theme::Day => "day",
      Theme::Night => "night",
    }
  }

  /// Basemap flavour matching the theme.
  #[must_use]
  pub const fn basemap(self) -> &'static str {
    match self {
      Theme::Day => "white",
      Theme::Night => "black",
    }
  }

  /// Fill and stroke colour for cells.
  #[must_use]
  pub const fn cell_color(self) -> &'static str {
    match self {
      Theme::Day => "darkslategray",
      Theme::Night => "yellow",
    }
  }
}

/// Boundary rendering parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RenderConfig {
  /// Points per edge for leaf cells.
  pub base_arc_points: usize,

  /// Extra points per edge for every level above the leaf level.
  pub arc_points_per_level: usize,

  /// Styling attached to the feature collection.
  pub theme: Theme,
}

impl Default for RenderConfig {
  fn default() -> Self {
    Self {
      base_arc_points: BASE_ARC_POINTS,
      arc_points_per_level: ARC_POINTS_PER_LEVEL,
      theme: Theme::Day,
    }
  }
}

impl RenderConfig {
  /// Set the theme.
  pub fn with_theme(mut self, theme: Theme) -> Self {
    self.theme = theme;
    self
  }

  /// Set the interpolation granularity.
  pub fn with_arc_points(mut self, base_arc_points: usize, arc_points_per_level: usize) -> Self {
    self.base_arc_points = base_arc_points;
    self.arc_points_per_level = arc_points_per_level;
    self
  }

  /// Points requested per edge for a cell at `level`: coarser cells get more points.
  #[inline]
  #[must_use]
  pub fn arc_points(&self, level: u8) -> usize {
    let depth = usize::from(MAX_LEVEL.saturating_sub(level));
    self.base_arc_points + depth * self.arc_points_per_level
  }
}
