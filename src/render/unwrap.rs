// src/render/unwrap.rs

use crate::constants::{SEAM_LNG, WRAP_SHIFT_DEG};
use crate::types::{GeodesicArc, Vertex};

/// Flattens the four (cleaned) arcs into one ordered list of segments.
#[must_use]
pub fn flatten_arcs<I>(arcs: I) -> Vec<Vec<Vertex>>
where
  I: IntoIterator<Item = GeodesicArc>,
{
  arcs.into_iter().flat_map(GeodesicArc::into_parts).collect()
}

/// Shifts segments lying past the seam by +360 so the ring is continuous in longitude.
///
/// Walking the segments cyclically, every boundary where the previous segment ends on one
/// side of the seam (+180 or -180) and the next starts on the other side toggles the
/// "wrapped" state. Every segment in the wrapped state gets 360 added to all of its
/// longitudes. All toggles are computed from the original longitudes before any shift.
///
/// Does nothing for four segments or fewer: an unsplit boundary needs no unwrapping.
pub fn unwrap_antimeridian(segments: &mut [Vec<Vertex>]) {
  let n = segments.len();
  if n <= 4 {
    return;
  }

  let mut wrapped = vec![false; n];
  let mut state = false;
  for i in 0..n {
    let prev_end = segments[(i + n - 1) % n].last().map(|v| v.lng);
    let start = segments[i].first().map(|v| v.lng);
    if let (Some(prev_end), Some(start)) = (prev_end, start) {
      let crosses = (prev_end == SEAM_LNG && start == -SEAM_LNG) || (prev_end == -SEAM_LNG && start == SEAM_LNG);
      if crosses {
        state = !state;
      }
    }
    wrapped[i] = state;
  }

  for (segment, &shift) in segments.iter_mut().zip(&wrapped) {
    if shift {
      segment.iter_mut().for_each(|v| v.lng += WRAP_SHIFT_DEG);
    }
  }
  tracing::trace!(
    segments = n,
    shifted = wrapped.iter().filter(|&&w| w).count(),
    "unwrapped antimeridian"
  );
}

/// Concatenates segments into one vertex sequence, skipping each point equal to the one
/// pushed just before it.
#[must_use]
pub fn assemble_ring(segments: &[Vec<Vertex>]) -> Vec<Vertex> {
  let mut verts: Vec<Vertex> = Vec::with_capacity(segments.iter().map(Vec::len).sum());
  for v in segments.iter().flatten() {
    if verts.last() != Some(v) {
      verts.push(*v);
    }
  }
  verts
}
