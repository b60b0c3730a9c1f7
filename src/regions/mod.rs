// src/regions/mod.rs

//! Regions built from drawn shapes, the covering seam, and the union of coverings.

pub mod builder;
pub mod union;

pub use builder::{polygon_from_ring, rect_from_ring, shapes_from_geojson, ShapeMode};
pub use union::{covering_union, normalize_cells};

use crate::config::CoveringConfig;
use crate::types::{CellId, Vertex};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A latitude/longitude rectangle in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LatLngRect {
  /// Southern edge.
  pub lat_lo: f64,
  /// Northern edge.
  pub lat_hi: f64,
  /// Western edge.
  pub lng_lo: f64,
  /// Eastern edge.
  pub lng_hi: f64,
}

impl LatLngRect {
  /// Whether the point lies inside or on the edge of the rectangle.
  #[must_use]
  pub fn contains(&self, v: &Vertex) -> bool {
    (self.lat_lo..=self.lat_hi).contains(&v.lat) && (self.lng_lo..=self.lng_hi).contains(&v.lng)
  }

  /// Center of the rectangle.
  #[must_use]
  pub fn center(&self) -> Vertex {
    Vertex::new((self.lng_lo + self.lng_hi) / 2.0, (self.lat_lo + self.lat_hi) / 2.0)
  }
}

/// A region to be covered with cells.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Region {
  /// Axis-aligned latitude/longitude rectangle.
  Rect(LatLngRect),
  /// Open loop of vertices (no repeated closing vertex), counter-clockwise.
  Polygon(Vec<Vertex>),
}

impl Region {
  /// Bounding rectangle of the region.
  #[must_use]
  pub fn bounds(&self) -> LatLngRect {
    match self {
      Region::Rect(rect) => *rect,
      Region::Polygon(verts) => verts.iter().fold(
        LatLngRect {
          lat_lo: f64::INFINITY,
          lat_hi: f64::NEG_INFINITY,
          lng_lo: f64::INFINITY,
          lng_hi: f64::NEG_INFINITY,
        },
        |acc, v| LatLngRect {
          lat_lo: acc.lat_lo.min(v.lat),
          lat_hi: acc.lat_hi.max(v.lat),
          lng_lo: acc.lng_lo.min(v.lng),
          lng_hi: acc.lng_hi.max(v.lng),
        },
      ),
    }
  }
}

/// Computes the set of cells covering a region.
///
/// The crate does not ship a covering algorithm; callers plug one in. Any closure
/// `Fn(&Region, &CoveringConfig) -> Vec<CellId>` is a coverer.
pub trait RegionCoverer {
  /// Cells covering `region` under `config`.
  fn covering(&self, region: &Region, config: &CoveringConfig) -> Vec<CellId>;
}

impl<F> RegionCoverer for F
where
  F: Fn(&Region, &CoveringConfig) -> Vec<CellId>,
{
  fn covering(&self, region: &Region, config: &CoveringConfig) -> Vec<CellId> {
    self(region, config)
  }
}
