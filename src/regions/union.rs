// src/regions/union.rs

use super::{Region, RegionCoverer};
use crate::config::CoveringConfig;
use crate::types::{CellId, Result};
use rustc_hash::FxHashSet;

/// Normalizes a set of cells into the smallest sorted set covering the same leaves.
///
/// Invalid ids and duplicates are dropped, cells contained in another cell of the set are
/// removed, and every complete group of four siblings is replaced by its parent,
/// repeatedly.
#[must_use]
pub fn normalize_cells(cells: impl IntoIterator<Item = CellId>) -> Vec<CellId> {
  let unique: FxHashSet<CellId> = cells.into_iter().filter(|c| c.is_valid()).collect();
  let mut sorted: Vec<CellId> = unique.into_iter().collect();
  sorted.sort_unstable();

  let mut out: Vec<CellId> = Vec::with_capacity(sorted.len());
  for mut id in sorted {
    if out.last().is_some_and(|last| last.contains(id)) {
      continue;
    }
    while out.last().is_some_and(|last| id.contains(*last)) {
      out.pop();
    }
    // Merge the last three kept cells with this one while they form a full sibling group.
    while out.len() >= 3 && !id.is_face() {
      let n = out.len();
      let (a, b, c) = (out[n - 3], out[n - 2], out[n - 1]);
      let Ok(parent) = id.immediate_parent() else {
        break;
      };
      if [a, b, c].iter().any(|s| s.level() != id.level() || s.immediate_parent() != Ok(parent)) {
        break;
      }
      out.truncate(n - 3);
      id = parent;
    }
    out.push(id);
  }
  out
}

/// Covers each region and unions the coverings into one normalized cell set.
///
/// # Arguments
/// * `coverer` - Covering algorithm.
/// * `regions` - Shapes to cover; one covering call each.
/// * `config` - Covering constraints, validated once up front.
///
/// # Returns
/// The normalized union, or `CellError::LevelOutOfRange` for an invalid `config`.
pub fn covering_union<C>(coverer: &C, regions: &[Region], config: &CoveringConfig) -> Result<Vec<CellId>>
where
  C: RegionCoverer + ?Sized,
{
  config.validate()?;
  let mut all = Vec::new();
  for (index, region) in regions.iter().enumerate() {
    let cells = coverer.covering(region, config);
    tracing::debug!(shape = index, cells = cells.len(), "covered shape");
    all.extend(cells);
  }
  let union = normalize_cells(all);
  tracing::debug!(shapes = regions.len(), cells = union.len(), "covering union");
  Ok(union)
}
