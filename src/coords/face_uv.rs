// src/coords/face_uv.rs

//! Cube-face projection between unit vectors and (face, u, v) / (s, t) / (i, j) coordinates.
//!
//! `u` and `v` are gnomonic coordinates in `[-1, 1]` on a cube face. `s` and `t` are the
//! same coordinates after the quadratic area-equalizing transform, in `[0, 1]`. `i` and `j`
//! are leaf-cell indices in `[0, 2^30)`.

use crate::constants::{MAX_LEVEL, MAX_SIZE, M_ONETHIRD};
use crate::types::Vec3d;

/// Converts an s or t value to the corresponding u or v value (quadratic transform).
#[inline]
#[must_use]
pub fn st_to_uv(s: f64) -> f64 {
  if s >= 0.5 {
    M_ONETHIRD * (4.0 * s * s - 1.0)
  } else {
    M_ONETHIRD * (1.0 - 4.0 * (1.0 - s) * (1.0 - s))
  }
}

/// Inverse of [`st_to_uv`].
#[inline]
#[must_use]
pub fn uv_to_st(u: f64) -> f64 {
  if u >= 0.0 {
    0.5 * (1.0 + 3.0 * u).sqrt()
  } else {
    1.0 - 0.5 * (1.0 - 3.0 * u).sqrt()
  }
}

/// Converts the lower edge of leaf index `i` to an s or t value.
#[inline]
#[must_use]
pub fn ij_to_st_min(i: u32) -> f64 {
  f64::from(i) / f64::from(MAX_SIZE)
}

/// Converts an s or t value to the leaf index containing it, clamped to the face.
#[inline]
#[must_use]
pub fn st_to_ij(s: f64) -> u32 {
  let scaled = (f64::from(MAX_SIZE) * s).floor();
  scaled.clamp(0.0, f64::from(MAX_SIZE - 1)) as u32
}

/// Edge length, in leaf cells, of a cell at `level`.
#[inline]
#[must_use]
pub const fn size_ij(level: u8) -> u32 {
  1 << (MAX_LEVEL - level)
}

/// Converts (face, u, v) to a direction vector (not necessarily unit length).
#[inline]
#[must_use]
pub fn face_uv_to_xyz(face: u8, u: f64, v: f64) -> Vec3d {
  match face {
    0 => Vec3d::new(1.0, u, v),
    1 => Vec3d::new(-u, 1.0, v),
    2 => Vec3d::new(-u, -v, 1.0),
    3 => Vec3d::new(-1.0, -v, -u),
    4 => Vec3d::new(v, -1.0, -u),
    _ => Vec3d::new(v, u, -1.0),
  }
}

/// Face whose axis has the largest absolute component of `p`.
#[inline]
#[must_use]
pub fn xyz_to_face(p: &Vec3d) -> u8 {
  let (ax, ay, az) = (p.x.abs(), p.y.abs(), p.z.abs());
  let (axis, value) = if ax > ay {
    if ax > az {
      (0, p.x)
    } else {
      (2, p.z)
    }
  } else if ay > az {
    (1, p.y)
  } else {
    (2, p.z)
  };
  if value < 0.0 {
    axis + 3
  } else {
    axis
  }
}

/// Projects `p` onto the given face. Only valid when `p` points into that face.
#[inline]
#[must_use]
pub fn valid_face_xyz_to_uv(face: u8, p: &Vec3d) -> (f64, f64) {
  match face {
    0 => (p.y / p.x, p.z / p.x),
    1 => (-p.x / p.y, p.z / p.y),
    2 => (-p.x / p.z, -p.y / p.z),
    3 => (p.z / p.x, p.y / p.x),
    4 => (p.z / p.y, -p.x / p.y),
    _ => (-p.y / p.z, -p.x / p.z),
  }
}

/// Converts a direction vector to (face, u, v).
#[inline]
#[must_use]
pub fn xyz_to_face_uv(p: &Vec3d) -> (u8, f64, f64) {
  let face = xyz_to_face(p);
  let (u, v) = valid_face_xyz_to_uv(face, p);
  (face, u, v)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_st_uv_inverse() {
    for k in 0..=20 {
      let s = f64::from(k) / 20.0;
      let u = st_to_uv(s);
      assert!((-1.0..=1.0).contains(&u), "u {} out of range for s {}", u, s);
      assert!((uv_to_st(u) - s).abs() < 1e-14, "uv_to_st(st_to_uv({})) != {}", s, s);
    }
    assert_eq!(st_to_uv(0.0), -1.0);
    assert_eq!(st_to_uv(0.5), 0.0);
    assert_eq!(st_to_uv(1.0), 1.0);
  }

  #[test]
  fn test_face_axes() {
    // The center of every face maps back to that face with (u, v) = (0, 0).
    for face in 0..6 {
      let p = face_uv_to_xyz(face, 0.0, 0.0);
      let (f, u, v) = xyz_to_face_uv(&p);
      assert_eq!(f, face, "face center of {} projects onto face {}", face, f);
      assert!(u.abs() < 1e-15 && v.abs() < 1e-15);
    }
  }

  #[test]
  fn test_face_uv_round_trip() {
    for face in 0..6 {
      for &(u, v) in &[(0.25, -0.5), (-0.9, 0.9), (0.99, 0.01)] {
        let p = face_uv_to_xyz(face, u, v);
        let (f, u2, v2) = xyz_to_face_uv(&p);
        assert_eq!(f, face);
        assert!((u - u2).abs() < 1e-15 && (v - v2).abs() < 1e-15);
      }
    }
  }

  #[test]
  fn test_st_to_ij_clamps() {
    assert_eq!(st_to_ij(-0.1), 0);
    assert_eq!(st_to_ij(0.0), 0);
    assert_eq!(st_to_ij(1.0), MAX_SIZE - 1);
    assert_eq!(st_to_ij(0.5), MAX_SIZE / 2);
    assert_eq!(size_ij(MAX_LEVEL), 1);
    assert_eq!(size_ij(0), MAX_SIZE);
  }
}
