// src/cache.rs

//! Memoization of rendered rings across covering passes.

use crate::cell::Cell;
use crate::feature::CellFeature;
use crate::render::{ArcInterpolator, BoundaryRenderer, CellCorners, GreatCircle};
use crate::types::{CellId, Result, Ring};
use rustc_hash::FxHashMap;

/// Hit and miss counters of a [`BoundaryCache`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
  /// Lookups answered from the cache.
  pub hits: u64,
  /// Lookups that had to render.
  pub misses: u64,
}

/// Rings rendered by one renderer, keyed by cell id.
///
/// The cache owns its renderer, so every cached ring was produced by the same interpolator
/// at the same density. Use one cache per renderer.
#[derive(Debug)]
pub struct BoundaryCache<I = GreatCircle> {
  renderer: BoundaryRenderer<I>,
  rings: FxHashMap<CellId, Ring>,
  stats: CacheStats,
}

impl<I: ArcInterpolator> BoundaryCache<I> {
  /// An empty cache in front of `renderer`.
  #[must_use]
  pub fn new(renderer: BoundaryRenderer<I>) -> Self {
    Self {
      renderer,
      rings: FxHashMap::default(),
      stats: CacheStats::default(),
    }
  }

  /// The renderer filling the cache.
  #[inline]
  #[must_use]
  pub fn renderer(&self) -> &BoundaryRenderer<I> {
    &self.renderer
  }

  /// Number of cached rings.
  #[must_use]
  pub fn len(&self) -> usize {
    self.rings.len()
  }

  /// Whether nothing is cached.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.rings.is_empty()
  }

  /// Lookup counters so far.
  #[must_use]
  pub fn stats(&self) -> CacheStats {
    self.stats
  }

  /// Drops all rings and resets the counters.
  pub fn clear(&mut self) {
    self.rings.clear();
    self.stats = CacheStats::default();
  }

  /// Renders a cell, reusing the ring from an earlier call for the same cell.
  pub fn get_or_render(&mut self, id: CellId) -> Result<CellFeature> {
    let cell = Cell::from_cell_id(id)?;
    let ring = if let Some(ring) = self.rings.get(&id) {
      self.stats.hits += 1;
      ring.clone()
    } else {
      self.stats.misses += 1;
      let ring = self.renderer.render_corners(&CellCorners::from_cell(&cell));
      self.rings.insert(id, ring.clone());
      ring
    };
    tracing::trace!(cell = %id.to_token(), hits = self.stats.hits, misses = self.stats.misses, "boundary cache lookup");
    Ok(CellFeature::new(&cell, ring))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::config::RenderConfig;
  use crate::types::{CellError, GeodesicArc, Vertex};

  fn london() -> CellId {
    CellId::from_lat_lng(51.5, -0.12, 9).expect("valid level")
  }

  #[test]
  fn test_hits_and_misses() {
    let mut cache = BoundaryCache::new(BoundaryRenderer::new(RenderConfig::default()));
    let first = cache.get_or_render(london()).expect("valid cell");
    let second = cache.get_or_render(london()).expect("valid cell");
    assert_eq!(first, second);
    assert_eq!(first, cache.renderer().render_cell(london()).expect("valid cell"));
    assert_eq!(cache.stats(), CacheStats { hits: 1, misses: 1 });
    assert_eq!(cache.len(), 1);

    cache.clear();
    assert!(cache.is_empty());
    assert_eq!(cache.stats(), CacheStats::default());
  }

  #[test]
  fn test_caches_do_not_share_rings_across_interpolators() {
    let straight = |a: Vertex, b: Vertex, _n: usize| GeodesicArc::Single(vec![a, b]);
    let mut geodesic = BoundaryCache::new(BoundaryRenderer::new(RenderConfig::default()));
    let mut planar = BoundaryCache::new(BoundaryRenderer::with_interpolator(straight, RenderConfig::default()));

    let curved = geodesic.get_or_render(london()).expect("valid cell");
    let flat = planar.get_or_render(london()).expect("valid cell");
    assert_eq!(flat.ring.len(), 5, "four corners plus the closing point");
    assert_ne!(curved.ring.len(), flat.ring.len());
    assert_eq!(planar.get_or_render(london()).expect("valid cell"), flat);
    assert_eq!(planar.stats(), CacheStats { hits: 1, misses: 1 });
  }

  #[test]
  fn test_density_follows_the_renderer() {
    let coarse = RenderConfig::default().with_arc_points(2, 0);
    let mut cache = BoundaryCache::new(BoundaryRenderer::new(coarse));
    assert_eq!(cache.get_or_render(london()).expect("valid cell").ring.len(), 5);
  }

  #[test]
  fn test_invalid_cell_not_cached() {
    let mut cache = BoundaryCache::new(BoundaryRenderer::new(RenderConfig::default()));
    assert_eq!(cache.get_or_render(CellId(0)), Err(CellError::InvalidCell(0)));
    assert!(cache.is_empty());
  }
}
