// src/cell.rs

//! Cell geometry: corner vertices, center and level of a cell id.

use crate::constants::{MAX_SIZE, NUM_CELL_VERTS};
use crate::coords::face_uv::{face_uv_to_xyz, ij_to_st_min, size_ij, st_to_uv};
use crate::math::vec3d::vec3d_to_vertex;
use crate::types::{CellError, CellId, Result, Vertex};

/// A cell resolved from its id: face, level and its (u, v) bounds on the face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
  id: CellId,
  face: u8,
  level: u8,
  /// `[u_lo, u_hi]`
  u: [f64; 2],
  /// `[v_lo, v_hi]`
  v: [f64; 2],
}

impl Cell {
  /// Resolves the geometry of a cell id.
  ///
  /// # Returns
  /// `Ok(Cell)` on success, or `CellError::InvalidCell` if the id is not a valid cell.
  pub fn from_cell_id(id: CellId) -> Result<Cell> {
    if !id.is_valid() {
      return Err(CellError::InvalidCell(id.0));
    }
    let level = id.level();
    let (face, i, j, _) = id.to_face_ij_orientation();
    let size = size_ij(level);
    let i_lo = i & !(size - 1);
    let j_lo = j & !(size - 1);
    let bound = |lo: u32| -> [f64; 2] { [st_to_uv(ij_to_st_min(lo)), st_to_uv(ij_to_st_min(lo + size))] };
    Ok(Cell {
      id,
      face,
      level,
      u: bound(i_lo),
      v: bound(j_lo),
    })
  }

  /// The cell id.
  #[inline]
  #[must_use]
  pub fn id(&self) -> CellId {
    self.id
  }

  /// Cube face (0-5).
  #[inline]
  #[must_use]
  pub fn face(&self) -> u8 {
    self.face
  }

  /// Subdivision level (0-30).
  #[inline]
  #[must_use]
  pub fn level(&self) -> u8 {
    self.level
  }

  /// Corner `k` (0-3) in degrees. Corners run counter-clockwise around the cell:
  /// (u_lo, v_lo), (u_hi, v_lo), (u_hi, v_hi), (u_lo, v_hi).
  #[must_use]
  pub fn vertex(&self, k: usize) -> Vertex {
    let (u, v) = match k % NUM_CELL_VERTS {
      0 => (self.u[0], self.v[0]),
      1 => (self.u[1], self.v[0]),
      2 => (self.u[1], self.v[1]),
      _ => (self.u[0], self.v[1]),
    };
    vec3d_to_vertex(&face_uv_to_xyz(self.face, u, v).normalize())
  }

  /// All four corners in order.
  #[must_use]
  pub fn vertices(&self) -> [Vertex; NUM_CELL_VERTS] {
    [self.vertex(0), self.vertex(1), self.vertex(2), self.vertex(3)]
  }

  /// Center of the cell in degrees (center of its (s, t) square).
  #[must_use]
  pub fn center(&self) -> Vertex {
    let (face, i, j, _) = self.id.to_face_ij_orientation();
    let size = size_ij(self.level);
    let half = f64::from(size) / 2.0;
    let center_st = |lo: u32| (f64::from(lo & !(size - 1)) + half) / f64::from(MAX_SIZE);
    let u = st_to_uv(center_st(i));
    let v = st_to_uv(center_st(j));
    vec3d_to_vertex(&face_uv_to_xyz(face, u, v).normalize())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_face_cell_corners() {
    // The north face has its corners at 45, 135, -135, -45 degrees longitude.
    let north = Cell::from_cell_id(CellId::from_face(2).expect("valid face")).expect("valid cell");
    let lngs: Vec<f64> = north.vertices().iter().map(|v| v.lng).collect();
    let expected = [45.0, 135.0, -135.0, -45.0];
    for (got, want) in lngs.iter().zip(expected.iter()) {
      assert!((got - want).abs() < 1e-9, "corner lng {} != {}", got, want);
    }
    let lat = 35.264_389_682_754_654; // atan(1 / sqrt(2))
    for v in north.vertices() {
      assert!((v.lat - lat).abs() < 1e-9, "corner lat {} != {}", v.lat, lat);
    }
    assert_eq!(north.center(), Vertex::new(0.0, 90.0));
  }

  #[test]
  fn test_pole_corner() {
    // Every level-1 child of the north face touches the pole with one corner.
    for child in CellId::from_face(2).expect("valid face").children().expect("non-leaf") {
      let cell = Cell::from_cell_id(child).expect("valid cell");
      let poles = cell.vertices().iter().filter(|v| v.lat == 90.0).count();
      assert_eq!(poles, 1, "child {} has one pole corner", child.to_token());
    }
  }

  #[test]
  fn test_center_maps_back_to_cell() {
    let cell_id = CellId::from_lat_lng(48.8566, 2.3522, 11).expect("valid level");
    let cell = Cell::from_cell_id(cell_id).expect("valid cell");
    assert_eq!(cell.level(), 11);
    let center = cell.center();
    assert_eq!(CellId::from_lat_lng(center.lat, center.lng, 11), Ok(cell_id));
    assert!((center.lat - 48.8566).abs() < 0.1 && (center.lng - 2.3522).abs() < 0.1);
  }

  #[test]
  fn test_invalid_cell() {
    assert_eq!(Cell::from_cell_id(CellId(0)), Err(CellError::InvalidCell(0)));
  }
}
