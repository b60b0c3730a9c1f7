// src/coords/hilbert.rs

//! Hilbert curve tables used to map between cell positions and (i, j) leaf indices.
//!
//! Each face is traversed by a Hilbert curve whose orientation is given by the
//! `SWAP_MASK` and `INVERT_MASK` bits. Each table is indexed by orientation first.

use crate::constants::{INVERT_MASK, SWAP_MASK};

/// Child position (0..4) to packed `(i << 1) | j` sub-quadrant, per orientation.
pub(crate) const POS_TO_IJ: [[u8; 4]; 4] = [
  [0, 1, 3, 2], // canonical
  [0, 2, 3, 1], // axes swapped
  [3, 2, 0, 1], // bits inverted
  [3, 1, 0, 2], // swapped & inverted
];

/// Packed `(i << 1) | j` sub-quadrant to child position, per orientation.
pub(crate) const IJ_TO_POS: [[u8; 4]; 4] = [
  [0, 1, 3, 2], // canonical
  [0, 3, 1, 2], // axes swapped
  [2, 3, 1, 0], // bits inverted
  [2, 1, 3, 0], // swapped & inverted
];

/// Orientation change applied when descending into child position `pos`.
pub(crate) const POS_TO_ORIENTATION: [u8; 4] = [SWAP_MASK, 0, 0, INVERT_MASK | SWAP_MASK];
