// src/render/fixers.rs

//! Corner fixes applied before interpolation: pole longitudes and false seam signs.

use crate::constants::{NUM_CELL_VERTS, SEAM_LNG};
use crate::types::Vertex;

/// Replaces the longitude of every pole corner with the longitude of the corner before it.
///
/// Longitude is undefined at a pole; borrowing the previous corner's longitude turns the
/// edge into that corner into a meridian instead of a detour. Index -1 wraps to the last
/// corner. Idempotent.
pub fn resolve_poles(verts: &mut [Vertex; NUM_CELL_VERTS]) {
  for k in 0..NUM_CELL_VERTS {
    if verts[k].is_pole() {
      let prev = verts[(k + NUM_CELL_VERTS - 1) % NUM_CELL_VERTS].lng;
      tracing::trace!(vertex = k, from = verts[k].lng, to = prev, "resolved pole longitude");
      verts[k].lng = prev;
    }
  }
}

/// Forces seam corners reported with the wrong sign onto the side of the other corners.
///
/// Fires only when exactly two corners sit at the same signed seam longitude (both +180
/// or both -180) and the remaining two share a single sign that differs from theirs. Any
/// other arrangement is left untouched. The +180 group is examined first.
///
/// # Returns
/// `true` if the corners were changed.
pub fn normalize_false_seam(verts: &mut [Vertex; NUM_CELL_VERTS]) -> bool {
  for seam in [SEAM_LNG, -SEAM_LNG] {
    let on_seam: Vec<usize> = (0..NUM_CELL_VERTS).filter(|&k| verts[k].lng == seam).collect();
    if on_seam.len() != 2 {
      continue;
    }
    let interior: Vec<f64> = (0..NUM_CELL_VERTS)
      .filter(|k| !on_seam.contains(k))
      .map(|k| verts[k].lng)
      .collect();
    let interior_positive = interior.iter().all(|&lng| lng > 0.0);
    let interior_negative = interior.iter().all(|&lng| lng < 0.0);
    let target = if interior_negative && seam > 0.0 {
      -SEAM_LNG
    } else if interior_positive && seam < 0.0 {
      SEAM_LNG
    } else {
      continue;
    };
    tracing::debug!(from = seam, to = target, "normalized false seam corners");
    for k in on_seam {
      verts[k].lng = target;
    }
    return true;
  }
  false
}

#[cfg(test)]
mod tests {
  use super::*;

  fn quad(points: [(f64, f64); 4]) -> [Vertex; 4] {
    points.map(|(lng, lat)| Vertex::new(lng, lat))
  }

  #[test]
  fn test_resolve_poles() {
    let mut verts = quad([(-90.0, 45.0), (-135.0, 35.0), (180.0, 45.0), (0.0, 90.0)]);
    resolve_poles(&mut verts);
    assert_eq!(verts[3], Vertex::new(180.0, 90.0), "pole takes the previous longitude");
    assert_eq!(verts[0].lng, -90.0, "other corners are untouched");

    // The first corner wraps around to the last one.
    let mut verts = quad([(0.0, -90.0), (10.0, -80.0), (20.0, -80.0), (30.0, -80.0)]);
    resolve_poles(&mut verts);
    assert_eq!(verts[0], Vertex::new(30.0, -90.0));
  }

  #[test]
  fn test_resolve_poles_idempotent() {
    let original = quad([(-180.0, 90.0), (90.0, 45.0), (135.0, 35.0), (-180.0, 45.0)]);
    let mut once = original;
    resolve_poles(&mut once);
    let mut twice = once;
    resolve_poles(&mut twice);
    assert_eq!(once, twice);
    assert_eq!(once[0].lng, -180.0);
  }

  #[test]
  fn test_normalize_false_seam_fires() {
    let mut verts = quad([(90.0, 45.0), (135.0, 35.0), (-180.0, 45.0), (-180.0, 90.0)]);
    assert!(normalize_false_seam(&mut verts));
    assert_eq!(verts[2].lng, 180.0);
    assert_eq!(verts[3].lng, 180.0);
    assert_eq!(verts[0].lng, 90.0);

    let mut verts = quad([(180.0, 10.0), (-179.0, 10.0), (-179.0, 0.0), (180.0, 0.0)]);
    assert!(normalize_false_seam(&mut verts));
    assert_eq!(verts[0].lng, -180.0);
    assert_eq!(verts[3].lng, -180.0);
  }

  #[test]
  fn test_normalize_all_on_seam() {
    let mut verts = quad([(180.0, 10.0), (-180.0, 10.0), (-180.0, 0.0), (180.0, 0.0)]);
    assert!(normalize_false_seam(&mut verts));
    assert!(verts.iter().all(|v| v.lng == -180.0));
  }

  #[test]
  fn test_normalize_false_seam_leaves_other_patterns() {
    let cases = [
      // only one corner on the seam
      [(180.0, 10.0), (170.0, 10.0), (170.0, 0.0), (175.0, 0.0)],
      // seam corners already agree with the interior
      [(180.0, 10.0), (170.0, 10.0), (170.0, 0.0), (180.0, 0.0)],
      // interior corners with mixed signs
      [(180.0, 10.0), (-170.0, 10.0), (170.0, 0.0), (180.0, 0.0)],
      // three corners on the seam
      [(180.0, 10.0), (180.0, 5.0), (-170.0, 0.0), (180.0, 0.0)],
      // nowhere near the seam
      [(10.0, 80.0), (20.0, 80.0), (20.0, 70.0), (10.0, 70.0)],
    ];
    for case in cases {
      let mut verts = quad(case);
      assert!(!normalize_false_seam(&mut verts), "{:?} should not change", case);
      assert_eq!(verts, quad(case));
    }
  }
}
