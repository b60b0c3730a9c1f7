//! Core data structures.

use crate::constants::NUM_FACES;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "serde")]
use serde_repr::{Deserialize_repr, Serialize_repr};
use thiserror::Error;

/// Identifier of a cell in the hierarchy.
/// This is a 64-bit unsigned integer: 3 face bits, two position bits per level and a
/// trailing marker bit.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CellId(pub u64);

/// Invalid cell id, used to signify missing data.
pub const CELL_NULL: CellId = CellId(0);

/// A longitude/latitude pair in degrees.
///
/// Longitudes produced by the antimeridian unwrap may lie outside `[-180, 180]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vertex {
  /// Longitude in degrees.
  pub lng: f64,
  /// Latitude in degrees.
  pub lat: f64,
}

impl Vertex {
  /// Creates a vertex from longitude and latitude in degrees.
  #[inline]
  #[must_use]
  pub const fn new(lng: f64, lat: f64) -> Self {
    Self { lng, lat }
  }

  /// Whether the vertex sits exactly on a pole.
  #[inline]
  #[must_use]
  pub fn is_pole(&self) -> bool {
    self.lat.abs() == crate::constants::POLE_LAT
  }

  /// Whether the vertex sits exactly on the antimeridian seam.
  #[inline]
  #[must_use]
  pub fn is_on_seam(&self) -> bool {
    self.lng.abs() == crate::constants::SEAM_LNG
  }
}

/// 3D floating-point vector.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vec3d {
  /// X component.
  pub x: f64,
  /// Y component.
  pub y: f64,
  /// Z component.
  pub z: f64,
}

/// One of the six root faces of the cube projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
pub enum Face {
  /// Centered on (0, 0).
  PosX = 0,
  /// Centered on (90E, 0).
  PosY = 1,
  /// Centered on the north pole.
  PosZ = 2,
  /// Centered on (180, 0).
  NegX = 3,
  /// Centered on (90W, 0).
  NegY = 4,
  /// Centered on the south pole.
  NegZ = 5,
}

impl TryFrom<u8> for Face {
  type Error = CellError;

  fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
    match value {
      0 => Ok(Face::PosX),
      1 => Ok(Face::PosY),
      2 => Ok(Face::PosZ),
      3 => Ok(Face::NegX),
      4 => Ok(Face::NegY),
      5 => Ok(Face::NegZ),
      _ => Err(CellError::FaceOutOfRange(value)),
    }
  }
}

impl From<Face> for u8 {
  fn from(face: Face) -> Self {
    face as u8
  }
}

/// A great-circle arc between two cell corners as returned by an interpolator.
///
/// An interpolator that detects the antimeridian inside the arc returns it as several
/// disjoint polylines whose concatenation is the logical arc.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GeodesicArc {
  /// The whole arc as one polyline.
  Single(Vec<Vertex>),
  /// The arc split at the seam, parts in traversal order.
  Split(Vec<Vec<Vertex>>),
}

impl GeodesicArc {
  /// Number of polylines the arc consists of.
  #[must_use]
  pub fn num_parts(&self) -> usize {
    match self {
      GeodesicArc::Single(_) => 1,
      GeodesicArc::Split(parts) => parts.len(),
    }
  }

  /// Total number of points over all parts.
  #[must_use]
  pub fn num_points(&self) -> usize {
    match self {
      GeodesicArc::Single(points) => points.len(),
      GeodesicArc::Split(parts) => parts.iter().map(Vec::len).sum(),
    }
  }

  /// Flattens the arc into its ordered polylines.
  #[must_use]
  pub fn into_parts(self) -> Vec<Vec<Vertex>> {
    match self {
      GeodesicArc::Single(points) => vec![points],
      GeodesicArc::Split(parts) => parts,
    }
  }
}

/// A closed boundary ring in (possibly overflowing) longitude/latitude degrees.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ring {
  /// Vertices of the ring. A closed ring repeats its first vertex at the end.
  pub verts: Vec<Vertex>,
}

/// Errors raised by cell, token and region operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CellError {
  /// Token text could not be parsed into a valid cell id.
  #[error("invalid cell token {token:?}")]
  InvalidToken {
    /// The offending token text.
    token: String,
  },
  /// The cell id is structurally invalid.
  #[error("invalid cell id {0:#018x}")]
  InvalidCell(u64),
  /// Subdivision level outside `0..=30`.
  #[error("level {0} is outside 0..=30")]
  LevelOutOfRange(u8),
  /// Face number outside `0..=5`.
  #[error("face {0} is outside 0..={max}", max = NUM_FACES - 1)]
  FaceOutOfRange(u8),
  /// A drawn shape could not be turned into a region.
  #[error("invalid region: {0}")]
  InvalidRegion(String),
}

/// Result type for cell operations.
pub type Result<T> = std::result::Result<T, CellError>;
