// src/cell_id/mod.rs

//! Cell id bit layout accessors, hierarchy navigation and (face, i, j) addressing.

pub mod token;

use crate::constants::{FACE_BITS, LSB_VALID_MASK, MAX_LEVEL, NUM_FACES, POS_BITS, SWAP_MASK};
use crate::coords::face_uv::{st_to_ij, uv_to_st, xyz_to_face_uv};
use crate::coords::hilbert::{IJ_TO_POS, POS_TO_IJ, POS_TO_ORIENTATION};
use crate::math::vec3d::vertex_to_vec3d;
use crate::types::{CellError, CellId, Face, Result, Vertex};

pub use token::{cells_from_tokens, cells_to_tokens};

/// Lowest set bit of a cell id at the given level.
#[inline(always)]
#[must_use]
pub const fn lsb_for_level(level: u8) -> u64 {
  1u64 << (2 * (MAX_LEVEL - level) as u32)
}

impl CellId {
  /// The level-0 cell covering a whole cube face.
  pub fn from_face(face: u8) -> Result<CellId> {
    if face >= NUM_FACES {
      return Err(CellError::FaceOutOfRange(face));
    }
    Ok(CellId((u64::from(face) << POS_BITS) + lsb_for_level(0)))
  }

  /// Builds a cell from a face, a Hilbert position (61 bits) and a level.
  pub fn from_face_pos_level(face: u8, pos: u64, level: u8) -> Result<CellId> {
    if face >= NUM_FACES {
      return Err(CellError::FaceOutOfRange(face));
    }
    if level > MAX_LEVEL {
      return Err(CellError::LevelOutOfRange(level));
    }
    let leaf = CellId(((u64::from(face) << POS_BITS) + pos) | 1);
    Ok(leaf.parent_unchecked(level))
  }

  /// Builds the leaf cell containing leaf coordinates (i, j) on a face.
  ///
  /// # Arguments
  /// * `face` - Cube face (0-5).
  /// * `i`, `j` - Leaf indices in `[0, 2^30)`.
  pub fn from_face_ij(face: u8, i: u32, j: u32) -> Result<CellId> {
    if face >= NUM_FACES {
      return Err(CellError::FaceOutOfRange(face));
    }
    let mut n = u64::from(face) << (POS_BITS - 1);
    let mut orientation = face & SWAP_MASK;
    for k in (0..u32::from(MAX_LEVEL)).rev() {
      let ij = ((((i >> k) & 1) << 1) | ((j >> k) & 1)) as usize;
      let pos = IJ_TO_POS[orientation as usize][ij];
      n |= u64::from(pos) << (2 * k);
      orientation ^= POS_TO_ORIENTATION[pos as usize];
    }
    Ok(CellId(n * 2 + 1))
  }

  /// Leaf cell containing the given point, in degrees.
  #[must_use]
  pub fn from_vertex(vertex: &Vertex) -> CellId {
    let p = vertex_to_vec3d(vertex);
    let (face, u, v) = xyz_to_face_uv(&p);
    let i = st_to_ij(uv_to_st(u));
    let j = st_to_ij(uv_to_st(v));
    // face comes from xyz_to_face and is always < 6.
    CellId::from_face_ij(face, i, j).unwrap_or_default()
  }

  /// Cell at `level` containing the given point, in degrees.
  pub fn from_lat_lng(lat: f64, lng: f64, level: u8) -> Result<CellId> {
    if level > MAX_LEVEL {
      return Err(CellError::LevelOutOfRange(level));
    }
    Ok(CellId::from_vertex(&Vertex::new(lng, lat)).parent_unchecked(level))
  }

  /// Cube face the cell belongs to. Meaningful only for valid ids.
  #[inline(always)]
  #[must_use]
  pub const fn face(self) -> u8 {
    (self.0 >> POS_BITS) as u8
  }

  /// Cube face as an enum.
  pub fn face_enum(self) -> Result<Face> {
    Face::try_from(self.face())
  }

  /// Hilbert position along the face, including the trailing marker bit.
  #[inline(always)]
  #[must_use]
  pub const fn pos(self) -> u64 {
    self.0 & (u64::MAX >> FACE_BITS)
  }

  /// Lowest set bit of the id.
  #[inline(always)]
  #[must_use]
  pub const fn lsb(self) -> u64 {
    self.0 & self.0.wrapping_neg()
  }

  /// Subdivision level (0-30). Meaningful only for valid ids; invalid ids whose lowest
  /// set bit lies above the marker range report level 0.
  #[inline]
  #[must_use]
  pub const fn level(self) -> u8 {
    if self.0 == 0 {
      return 0;
    }
    MAX_LEVEL.saturating_sub((self.0.trailing_zeros() >> 1) as u8)
  }

  /// Whether this id encodes a cell: face in range and marker bit on an even position.
  #[inline]
  #[must_use]
  pub const fn is_valid(self) -> bool {
    self.face() < NUM_FACES && (self.lsb() & LSB_VALID_MASK) != 0
  }

  /// Whether this is a leaf cell (level 30).
  #[inline]
  #[must_use]
  pub const fn is_leaf(self) -> bool {
    self.0 & 1 != 0
  }

  /// Whether this is a level-0 face cell.
  #[inline]
  #[must_use]
  pub const fn is_face(self) -> bool {
    self.0 & (lsb_for_level(0) - 1) == 0
  }

  fn parent_unchecked(self, level: u8) -> CellId {
    let lsb = lsb_for_level(level);
    CellId((self.0 & lsb.wrapping_neg()) | lsb)
  }

  /// Ancestor at `level`, which must not be deeper than the cell's own level.
  pub fn parent(self, level: u8) -> Result<CellId> {
    if !self.is_valid() {
      return Err(CellError::InvalidCell(self.0));
    }
    if level > self.level() {
      return Err(CellError::LevelOutOfRange(level));
    }
    Ok(self.parent_unchecked(level))
  }

  /// Direct parent. Fails for face cells.
  pub fn immediate_parent(self) -> Result<CellId> {
    if self.is_face() {
      return Err(CellError::LevelOutOfRange(0));
    }
    self.parent(self.level() - 1)
  }

  /// The four children in Hilbert order.
  pub fn children(self) -> Result<[CellId; 4]> {
    if !self.is_valid() {
      return Err(CellError::InvalidCell(self.0));
    }
    if self.is_leaf() {
      return Err(CellError::LevelOutOfRange(MAX_LEVEL + 1));
    }
    let mut lsb = self.lsb();
    let first = self.0 - lsb + (lsb >> 2);
    lsb >>= 1;
    Ok([
      CellId(first),
      CellId(first + lsb),
      CellId(first + 2 * lsb),
      CellId(first + 3 * lsb),
    ])
  }

  /// Child at Hilbert position `k` (0-3).
  pub fn child(self, k: usize) -> Result<CellId> {
    let children = self.children()?;
    children.get(k).copied().ok_or(CellError::InvalidCell(self.0))
  }

  /// Smallest leaf id contained in this cell.
  #[inline]
  #[must_use]
  pub const fn range_min(self) -> CellId {
    CellId(self.0 - (self.lsb() - 1))
  }

  /// Largest leaf id contained in this cell.
  #[inline]
  #[must_use]
  pub const fn range_max(self) -> CellId {
    CellId(self.0 + (self.lsb() - 1))
  }

  /// Whether `other` is this cell or one of its descendants.
  #[inline]
  #[must_use]
  pub fn contains(self, other: CellId) -> bool {
    other >= self.range_min() && other <= self.range_max()
  }

  /// Whether the two cells share any leaf.
  #[inline]
  #[must_use]
  pub fn intersects(self, other: CellId) -> bool {
    other.range_min() <= self.range_max() && other.range_max() >= self.range_min()
  }

  /// Decodes the face, the leaf (i, j) of the cell and the Hilbert orientation.
  ///
  /// For non-leaf cells, (i, j) is a leaf near the cell center; callers mask it down to
  /// the cell's lower-left corner with the cell size.
  #[must_use]
  pub fn to_face_ij_orientation(self) -> (u8, u32, u32, u8) {
    let face = self.face();
    let mut orientation = face & SWAP_MASK;
    let mut i = 0u32;
    let mut j = 0u32;
    for k in (0..u32::from(MAX_LEVEL)).rev() {
      let pos = ((self.0 >> (2 * k + 1)) & 3) as usize;
      let ij = POS_TO_IJ[orientation as usize][pos];
      i |= u32::from(ij >> 1) << k;
      j |= u32::from(ij & 1) << k;
      orientation ^= POS_TO_ORIENTATION[pos];
    }
    // The marker bit of a non-leaf cell reads as one extra position; undo its swap.
    if self.lsb() & 0x1111_1111_1111_1110 != 0 {
      orientation ^= SWAP_MASK;
    }
    (face, i, j, orientation)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_face_cells() {
    for face in 0..NUM_FACES {
      let id = CellId::from_face(face).expect("valid face");
      assert!(id.is_valid());
      assert!(id.is_face());
      assert_eq!(id.face(), face);
      assert_eq!(id.level(), 0);
    }
    assert_eq!(CellId::from_face(0), Ok(CellId(0x1000_0000_0000_0000)));
    assert_eq!(CellId::from_face(5), Ok(CellId(0xb000_0000_0000_0000)));
    assert_eq!(CellId::from_face(6), Err(CellError::FaceOutOfRange(6)));
  }

  #[test]
  fn test_validity() {
    assert!(!CellId(0).is_valid(), "zero id is invalid");
    assert!(!CellId(0xc000_0000_0000_0001).is_valid(), "face 6 is invalid");
    assert!(!CellId(0x1000_0000_0000_0002).is_valid(), "odd marker position is invalid");
    assert!(CellId(0x1000_0000_0000_0001).is_valid(), "leaf on face 0 is valid");
  }

  #[test]
  fn test_level_of_high_bit_ids() {
    // Marker bits above position 60 never occur in valid ids.
    for id in [CellId(1 << 62), CellId(1 << 63), CellId(3 << 62), CellId(1 << 61)] {
      assert!(!id.is_valid());
      assert_eq!(id.level(), 0, "{:#x}", id.0);
    }
    assert_eq!(CellId::from_face(5).expect("valid face").level(), 0);
  }

  #[test]
  fn test_parent_child() {
    let leaf = CellId::from_lat_lng(37.7749, -122.4194, 30).expect("valid level");
    assert!(leaf.is_leaf());
    assert_eq!(leaf.level(), 30);

    for level in 0..=30 {
      let parent = leaf.parent(level).expect("ancestor exists");
      assert_eq!(parent.level(), level);
      assert!(parent.contains(leaf), "level {} ancestor contains the leaf", level);
      assert_eq!(parent.face(), leaf.face());
    }

    let cell = leaf.parent(12).expect("ancestor exists");
    let children = cell.children().expect("non-leaf");
    for (k, child) in children.iter().enumerate() {
      assert_eq!(child.level(), 13);
      assert_eq!(child.immediate_parent(), Ok(cell));
      assert_eq!(cell.child(k), Ok(*child));
      assert!(cell.contains(*child));
    }
    assert!(children.contains(&leaf.parent(13).expect("ancestor exists")));
    assert_eq!(children[0].range_min(), cell.range_min());
    assert_eq!(children[3].range_max(), cell.range_max());

    assert!(leaf.children().is_err(), "leaf cells have no children");
    assert!(cell.parent(13).is_err(), "cannot ask for a deeper parent");
    assert!(CellId::from_face(3).expect("valid").immediate_parent().is_err());
  }

  #[test]
  fn test_face_ij_round_trip() {
    let samples = [(0u8, 0u32, 0u32), (1, 123_456, 987_654), (2, (1 << 30) - 1, 5), (5, 1 << 29, 1 << 29)];
    for &(face, i, j) in &samples {
      let id = CellId::from_face_ij(face, i, j).expect("valid face");
      assert!(id.is_leaf());
      let (f, i2, j2, _) = id.to_face_ij_orientation();
      assert_eq!((f, i2, j2), (face, i, j), "face/i/j round trip for {:x}", id.0);
    }
  }

  #[test]
  fn test_from_face_pos_level() {
    let leaf = CellId::from_lat_lng(-33.86, 151.21, 30).expect("valid level");
    let cell = CellId::from_face_pos_level(leaf.face(), leaf.pos(), 9).expect("valid");
    assert_eq!(cell, leaf.parent(9).expect("ancestor exists"));
    assert!(CellId::from_face_pos_level(1, 0, 31).is_err());
  }

  #[test]
  fn test_intersects() {
    let leaf = CellId::from_lat_lng(10.0, 10.0, 30).expect("valid level");
    let a = leaf.parent(5).expect("ancestor exists");
    let b = leaf.parent(8).expect("ancestor exists");
    assert!(a.intersects(b) && b.intersects(a));
    let other = CellId::from_lat_lng(-10.0, -100.0, 8).expect("valid level");
    assert!(!a.intersects(other));
  }
}
