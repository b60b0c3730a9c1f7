// src/render/mod.rs

//! Boundary rendering: turns the four corners of a cell into a closed planar ring whose
//! edges follow great circles, with poles, false seams, polar faces and the antimeridian
//! corrected.
//!
//! The stages run in a fixed order for every cell:
//! 1. [`resolve_poles`]
//! 2. [`normalize_false_seam`]
//! 3. [`assemble_arcs`]
//! 4. [`remove_redundant_segments`] and, for polar faces, [`patch_polar_face`]
//! 5. [`unwrap_antimeridian`] and [`assemble_ring`]
//!
//! Cells are independent of each other; nothing is carried between calls.

pub mod arc;
pub mod cleanup;
pub mod fixers;
pub mod unwrap;

pub use arc::{assemble_arcs, split_at_antimeridian, ArcInterpolator, GreatCircle};
pub use cleanup::{patch_polar_face, remove_redundant_segments};
pub use fixers::{normalize_false_seam, resolve_poles};
pub use unwrap::{assemble_ring, flatten_arcs, unwrap_antimeridian};

use crate::cell::Cell;
use crate::config::{RenderConfig, Theme};
use crate::constants::{EPSILON_DEG, NUM_CELL_VERTS};
use crate::feature::{to_feature_collection, CellFeature};
use crate::types::{CellId, Result, Ring, Vertex};
#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// The four corners of a cell and its level: everything the renderer needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellCorners {
  /// Corners in the cell's counter-clockwise order.
  pub verts: [Vertex; NUM_CELL_VERTS],
  /// Subdivision level (0-30), drives the interpolation density.
  pub level: u8,
}

impl CellCorners {
  /// Corners supplied directly.
  #[must_use]
  pub const fn new(verts: [Vertex; NUM_CELL_VERTS], level: u8) -> Self {
    Self { verts, level }
  }

  /// Corners of a resolved cell.
  #[must_use]
  pub fn from_cell(cell: &Cell) -> Self {
    Self {
      verts: cell.vertices(),
      level: cell.level(),
    }
  }

  /// Whether all four corners share a non-equatorial latitude, as on the two polar faces.
  #[must_use]
  pub fn is_polar_face(&self) -> bool {
    let lat = self.verts[0].lat;
    lat.abs() > EPSILON_DEG && self.verts.iter().all(|v| (v.lat - lat).abs() < EPSILON_DEG)
  }
}

/// Counters for a batch of rendered cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
  /// Cells turned into features.
  pub cells_rendered: usize,
  /// Cells dropped because they could not be resolved.
  pub cells_skipped: usize,
}

/// Features of a batch, in input order, with the batch counters.
#[derive(Debug, Clone, Default)]
pub struct RenderOutput {
  /// One feature per successfully rendered cell.
  pub features: Vec<CellFeature>,
  /// Batch counters.
  pub stats: RenderStats,
  /// Theme of the renderer that produced the batch.
  pub theme: Theme,
}

impl RenderOutput {
  /// Packages the features as a GeoJSON feature collection styled with the batch theme.
  #[must_use]
  pub fn to_feature_collection(&self) -> geojson::FeatureCollection {
    to_feature_collection(&self.features, self.theme)
  }
}

/// Renders cell boundaries with a pluggable arc interpolator.
#[derive(Debug, Clone, Default)]
pub struct BoundaryRenderer<I = GreatCircle> {
  interpolator: I,
  config: RenderConfig,
}

impl BoundaryRenderer<GreatCircle> {
  /// A renderer using the great-circle interpolator.
  #[must_use]
  pub fn new(config: RenderConfig) -> Self {
    Self {
      interpolator: GreatCircle,
      config,
    }
  }
}

impl<I: ArcInterpolator> BoundaryRenderer<I> {
  /// A renderer using a custom interpolator.
  pub fn with_interpolator(interpolator: I, config: RenderConfig) -> Self {
    Self { interpolator, config }
  }

  /// The rendering parameters.
  #[inline]
  #[must_use]
  pub fn config(&self) -> &RenderConfig {
    &self.config
  }

  /// Runs the correction pipeline on four corners and returns the closed ring.
  #[must_use]
  pub fn render_corners(&self, corners: &CellCorners) -> Ring {
    let polar = corners.is_polar_face();
    let mut verts = corners.verts;
    resolve_poles(&mut verts);
    normalize_false_seam(&mut verts);

    let num_points = self.config.arc_points(corners.level);
    let arcs = assemble_arcs(&self.interpolator, &verts, num_points).map(|arc| {
      let arc = remove_redundant_segments(arc);
      if polar {
        patch_polar_face(arc)
      } else {
        arc
      }
    });

    let mut segments = flatten_arcs(arcs);
    unwrap_antimeridian(&mut segments);
    let mut ring = Ring {
      verts: assemble_ring(&segments),
    };
    ring.close();
    ring
  }

  /// Resolves a cell id and renders it into a feature.
  ///
  /// # Returns
  /// `Ok(CellFeature)` on success, or `CellError::InvalidCell` if `id` is not a valid cell.
  pub fn render_cell(&self, id: CellId) -> Result<CellFeature> {
    let cell = Cell::from_cell_id(id)?;
    let ring = self.render_corners(&CellCorners::from_cell(&cell));
    Ok(CellFeature::new(&cell, ring))
  }

  /// Renders a batch of cells in order.
  ///
  /// A cell that fails is logged and counted in `stats.cells_skipped`; it never aborts
  /// the batch.
  pub fn render_cells(&self, ids: &[CellId]) -> RenderOutput {
    let results = ids.iter().map(|&id| (id, self.render_cell(id)));
    collect_output(results, self.config.theme)
  }

  /// Parallel [`BoundaryRenderer::render_cells`]; features keep the input order.
  #[cfg(feature = "rayon")]
  pub fn render_cells_par(&self, ids: &[CellId]) -> RenderOutput
  where
    I: Sync,
  {
    let results: Vec<(CellId, Result<CellFeature>)> = ids.par_iter().map(|&id| (id, self.render_cell(id))).collect();
    collect_output(results, self.config.theme)
  }
}

fn collect_output<R>(results: R, theme: Theme) -> RenderOutput
where
  R: IntoIterator<Item = (CellId, Result<CellFeature>)>,
{
  let mut output = RenderOutput {
    theme,
    ..RenderOutput::default()
  };
  for (id, result) in results {
    match result {
      Ok(feature) => {
        output.stats.cells_rendered += 1;
        output.features.push(feature);
      }
      Err(e) => {
        output.stats.cells_skipped += 1;
        tracing::warn!(cell = %id.to_token(), error = %e, "skipping cell");
      }
    }
  }
  tracing::debug!(
    rendered = output.stats.cells_rendered,
    skipped = output.stats.cells_skipped,
    "rendered cell batch"
  );
  output
}
