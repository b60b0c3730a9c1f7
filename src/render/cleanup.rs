// src/render/cleanup.rs

//! Repairs of split arcs: degenerate parts and the seam edge of a polar face.

use crate::constants::POLE_LAT;
use crate::types::{GeodesicArc, Vertex};

/// Drops zero-length parts from an arc split into exactly two parts.
///
/// A part is degenerate when it holds exactly two identical points, which happens when an
/// edge starts or ends on the seam. If only one part survives the arc becomes single. Arcs
/// with any other shape, or whose parts are both degenerate, are returned unchanged.
#[must_use]
pub fn remove_redundant_segments(arc: GeodesicArc) -> GeodesicArc {
  match arc {
    GeodesicArc::Split(parts) if parts.len() == 2 => {
      let degenerate: Vec<bool> = parts.iter().map(|p| is_degenerate(p)).collect();
      if degenerate.iter().all(|&d| d) || degenerate.iter().all(|&d| !d) {
        return GeodesicArc::Split(parts);
      }
      tracing::trace!("dropped degenerate arc part");
      let kept = parts.into_iter().zip(degenerate).find_map(|(part, d)| (!d).then_some(part));
      GeodesicArc::Single(kept.unwrap_or_default())
    }
    other => other,
  }
}

fn is_degenerate(part: &[Vertex]) -> bool {
  part.len() == 2 && part[0] == part[1]
}

/// Routes the seam crossing of a polar root face through its pole.
///
/// Without this the edge that crosses the antimeridian would close the ring straight
/// across the map instead of around the top (or bottom). The two halves are joined by a
/// detour along the seam to the pole on the side of the crossing's latitude, and the arc
/// becomes single.
///
/// # Arguments
/// * `arc` - A split arc; only exactly two parts meeting on the seam are patched.
///
/// # Returns
/// The patched arc, or `arc` unchanged when it does not have that shape.
#[must_use]
pub fn patch_polar_face(arc: GeodesicArc) -> GeodesicArc {
  let mut parts = match arc {
    GeodesicArc::Split(parts) if parts.len() == 2 => parts,
    other => return other,
  };
  let (Some(&a), Some(&b)) = (parts[0].last(), parts[1].first()) else {
    return GeodesicArc::Split(parts);
  };
  if !a.is_on_seam() || !b.is_on_seam() {
    tracing::debug!(a_lng = a.lng, b_lng = b.lng, "split arc does not meet on the seam, left as is");
    return GeodesicArc::Split(parts);
  }

  let pole = POLE_LAT.copysign(a.lat);
  tracing::debug!(pole, "patched polar face through the pole");
  let second = parts.pop().unwrap_or_default();
  let mut merged = parts.pop().unwrap_or_default();
  merged.reserve(second.len() + 2);
  merged.push(Vertex::new(a.lng, pole));
  merged.push(Vertex::new(b.lng, pole));
  merged.extend(second);
  GeodesicArc::Single(merged)
}
