// src/render/arc.rs

//! Great-circle interpolation of cell edges.

use crate::constants::{EPSILON_RAD, M_PI, NUM_CELL_VERTS, SEAM_LNG, SEAM_SNAP_DEG, WRAP_SHIFT_DEG};
use crate::math::vec3d::{vec3d_to_vertex, vertex_to_vec3d};
use crate::types::{GeodesicArc, Vertex};

/// Produces the great-circle arc between two points.
///
/// Implementations may return the arc split into several polylines when they detect the
/// antimeridian inside it.
pub trait ArcInterpolator {
  /// Interpolates `num_points` points from `start` to `end`, both included.
  fn interpolate(&self, start: Vertex, end: Vertex, num_points: usize) -> GeodesicArc;
}

impl<F> ArcInterpolator for F
where
  F: Fn(Vertex, Vertex, usize) -> GeodesicArc,
{
  fn interpolate(&self, start: Vertex, end: Vertex, num_points: usize) -> GeodesicArc {
    self(start, end, num_points)
  }
}

/// Spherical interpolation along the great circle, split at the antimeridian.
///
/// The first and last points are exactly `start` and `end`. Interior longitudes that land
/// within a hair of ±180 take the sign of the previous point so that meridians along the
/// seam do not flip sides. Coincident or antipodal endpoints, and fewer than two points,
/// yield the straight polyline `[start, end]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreatCircle;

impl ArcInterpolator for GreatCircle {
  fn interpolate(&self, start: Vertex, end: Vertex, num_points: usize) -> GeodesicArc {
    let a = vertex_to_vec3d(&start);
    let b = vertex_to_vec3d(&end);
    let omega = a.angle(&b);
    if num_points < 2 || omega < EPSILON_RAD || M_PI - omega < EPSILON_RAD {
      return split_at_antimeridian(vec![start, end]);
    }

    let sin_omega = omega.sin();
    let last = num_points - 1;
    let mut points = Vec::with_capacity(num_points + 2);
    points.push(start);
    for k in 1..last {
      let f = k as f64 / last as f64;
      let wa = ((1.0 - f) * omega).sin() / sin_omega;
      let wb = (f * omega).sin() / sin_omega;
      let mut v = vec3d_to_vertex(&a.scale(wa).add(&b.scale(wb)));
      if (v.lng.abs() - SEAM_LNG).abs() < SEAM_SNAP_DEG {
        let prev = points.last().map_or(v.lng, |p: &Vertex| p.lng);
        v.lng = SEAM_LNG.copysign(prev);
      }
      points.push(v);
    }
    points.push(end);
    split_at_antimeridian(points)
  }
}

/// Splits a polyline wherever consecutive longitudes jump by more than 180 degrees.
///
/// The crossing latitude is interpolated linearly in unwrapped longitude; the part before
/// the jump ends on the seam and the part after starts on the opposite side of it.
#[must_use]
pub fn split_at_antimeridian(points: Vec<Vertex>) -> GeodesicArc {
  let mut parts: Vec<Vec<Vertex>> = Vec::new();
  let mut current: Vec<Vertex> = Vec::with_capacity(points.len());
  for (k, &q) in points.iter().enumerate() {
    if let Some(&p) = k.checked_sub(1).and_then(|prev| points.get(prev)) {
      if (q.lng - p.lng).abs() > SEAM_LNG {
        let (edge, q_lng) = if p.lng > 0.0 {
          (SEAM_LNG, q.lng + WRAP_SHIFT_DEG)
        } else {
          (-SEAM_LNG, q.lng - WRAP_SHIFT_DEG)
        };
        let t = (edge - p.lng) / (q_lng - p.lng);
        let lat = p.lat + t * (q.lat - p.lat);
        current.push(Vertex::new(edge, lat));
        parts.push(std::mem::take(&mut current));
        current.push(Vertex::new(-edge, lat));
      }
    }
    current.push(q);
  }
  parts.push(current);

  if parts.len() == 1 {
    GeodesicArc::Single(parts.pop().unwrap_or_default())
  } else {
    GeodesicArc::Split(parts)
  }
}

/// Interpolates the four edges v0→v1, v1→v2, v2→v3, v3→v0 in order.
pub fn assemble_arcs<I: ArcInterpolator + ?Sized>(
  interpolator: &I,
  verts: &[Vertex; NUM_CELL_VERTS],
  num_points: usize,
) -> [GeodesicArc; NUM_CELL_VERTS] {
  std::array::from_fn(|k| interpolator.interpolate(verts[k], verts[(k + 1) % NUM_CELL_VERTS], num_points))
}
