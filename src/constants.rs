//! Cell hierarchy and rendering constants.

use std::f64::consts;

// Mathematical constants
/// pi
pub const M_PI: f64 = consts::PI;
/// pi / 180
pub const M_PI_180: f64 = consts::PI / 180.0;
/// 180 / pi
pub const M_180_PI: f64 = 180.0 / consts::PI;
/// One third
pub const M_ONETHIRD: f64 = 1.0 / 3.0;

/// Epsilon for floating point comparisons in degrees (~0.1mm).
pub const EPSILON_DEG: f64 = 0.000_000_001;
/// Epsilon for floating point comparisons in radians.
pub const EPSILON_RAD: f64 = EPSILON_DEG * M_PI_180;

// Cell hierarchy layout

/// Number of cube faces.
pub const NUM_FACES: u8 = 6;
/// Deepest subdivision level (leaf cells).
pub const MAX_LEVEL: u8 = 30;
/// Number of bits used to store the face.
pub const FACE_BITS: u32 = 3;
/// Number of position bits: two per level plus the trailing marker bit.
pub const POS_BITS: u32 = 2 * MAX_LEVEL as u32 + 1;
/// Number of leaf cells along one edge of a face.
pub const MAX_SIZE: u32 = 1 << MAX_LEVEL;
/// Mask selecting the bits a valid lowest set bit may occupy (even positions).
pub const LSB_VALID_MASK: u64 = 0x1555_5555_5555_5555;
/// Maximum number of hex digits in a token.
pub const MAX_TOKEN_LEN: usize = 16;
/// Token used for the invalid (zero) cell id.
pub const NULL_TOKEN: &str = "X";

// Hilbert curve orientation bits

/// Bit flag: the i and j axes are swapped.
pub const SWAP_MASK: u8 = 0x01;
/// Bit flag: both axes are inverted.
pub const INVERT_MASK: u8 = 0x02;

// Boundary rendering

/// Longitude of the antimeridian seam in degrees.
pub const SEAM_LNG: f64 = 180.0;
/// Latitude of the north pole in degrees.
pub const POLE_LAT: f64 = 90.0;
/// Longitude shift applied to wrapped segments.
pub const WRAP_SHIFT_DEG: f64 = 360.0;
/// Interpolated longitudes this close to the seam are snapped onto it.
pub const SEAM_SNAP_DEG: f64 = EPSILON_DEG;
/// Arc points used at the deepest level.
pub const BASE_ARC_POINTS: usize = 20;
/// Extra arc points per level above the deepest.
pub const ARC_POINTS_PER_LEVEL: usize = 3;
/// Number of corners (and edges) of every cell.
pub const NUM_CELL_VERTS: usize = 4;
