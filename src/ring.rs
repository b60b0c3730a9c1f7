// src/ring.rs

//! Inspection helpers on rendered rings, backed by `geo` for winding and area.

use crate::types::{Ring, Vertex};
use geo::winding_order::WindingOrder;
use geo::{Area, Intersects, Winding};
use geo_types::{Coord, Line, LineString, Polygon};
use rustc_hash::FxHashSet;

impl Ring {
  /// Number of vertices, closing vertex included.
  #[inline]
  #[must_use]
  pub fn len(&self) -> usize {
    self.verts.len()
  }

  /// Whether the ring has no vertices.
  #[inline]
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.verts.is_empty()
  }

  /// Whether the last vertex repeats the first.
  #[must_use]
  pub fn is_closed(&self) -> bool {
    self.verts.len() > 1 && self.verts.first() == self.verts.last()
  }

  /// Appends the first vertex if the ring is not closed yet.
  pub fn close(&mut self) {
    if let Some(&first) = self.verts.first() {
      if !self.is_closed() {
        self.verts.push(first);
      }
    }
  }

  /// Whether two consecutive vertices are identical.
  #[must_use]
  pub fn has_consecutive_duplicates(&self) -> bool {
    self.verts.windows(2).any(|w| w[0] == w[1])
  }

  /// Number of distinct vertices.
  #[must_use]
  pub fn distinct_len(&self) -> usize {
    self
      .verts
      .iter()
      .map(|v| (v.lng.to_bits(), v.lat.to_bits()))
      .collect::<FxHashSet<_>>()
      .len()
  }

  /// The ring as a `geo` line string with x = longitude, y = latitude.
  #[must_use]
  pub fn to_line_string(&self) -> LineString<f64> {
    LineString::new(self.verts.iter().map(|v| Coord { x: v.lng, y: v.lat }).collect())
  }

  /// Winding order in the (lng, lat) plane, `None` for degenerate rings.
  #[must_use]
  pub fn winding_order(&self) -> Option<WindingOrder> {
    self.to_line_string().winding_order()
  }

  /// Planar signed area in square degrees; positive for counter-clockwise rings.
  #[must_use]
  pub fn signed_area(&self) -> f64 {
    Polygon::new(self.to_line_string(), vec![]).signed_area()
  }

  /// Whether no two non-adjacent edges of the ring touch or cross.
  #[must_use]
  pub fn is_simple(&self) -> bool {
    let lines: Vec<Line<f64>> = self.to_line_string().lines().collect();
    let n = lines.len();
    for i in 0..n {
      for j in (i + 2)..n {
        // The first and last edges share the closing vertex.
        if i == 0 && j == n - 1 && self.is_closed() {
          continue;
        }
        if lines[i].intersects(&lines[j]) {
          return false;
        }
      }
    }
    true
  }
}

impl From<Vec<Vertex>> for Ring {
  fn from(verts: Vec<Vertex>) -> Self {
    Ring { verts }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn ring(points: &[(f64, f64)]) -> Ring {
    points.iter().map(|&(lng, lat)| Vertex::new(lng, lat)).collect::<Vec<_>>().into()
  }

  #[test]
  fn test_close() {
    let mut r = ring(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]);
    assert!(!r.is_closed());
    r.close();
    assert!(r.is_closed());
    assert_eq!(r.len(), 4);
    r.close();
    assert_eq!(r.len(), 4, "closing twice is a no-op");

    let mut empty = Ring::default();
    empty.close();
    assert!(empty.is_empty());
  }

  #[test]
  fn test_duplicates_and_distinct() {
    let r = ring(&[(0.0, 0.0), (1.0, 0.0), (1.0, 0.0), (0.0, 0.0)]);
    assert!(r.has_consecutive_duplicates());
    assert_eq!(r.distinct_len(), 2);
    assert!(!ring(&[(0.0, 0.0), (1.0, 0.0), (0.0, 0.0)]).has_consecutive_duplicates());
  }

  #[test]
  fn test_winding_and_area() {
    let ccw = ring(&[(0.0, 0.0), (2.0, 0.0), (2.0, 1.0), (0.0, 1.0), (0.0, 0.0)]);
    assert_eq!(ccw.winding_order(), Some(WindingOrder::CounterClockwise));
    assert!((ccw.signed_area() - 2.0).abs() < 1e-12);

    let mut cw = ccw.clone();
    cw.verts.reverse();
    assert_eq!(cw.winding_order(), Some(WindingOrder::Clockwise));
    assert!(cw.signed_area() < 0.0);
  }

  #[test]
  fn test_is_simple() {
    let square = ring(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0)]);
    assert!(square.is_simple());
    let bowtie = ring(&[(0.0, 0.0), (1.0, 1.0), (1.0, 0.0), (0.0, 1.0), (0.0, 0.0)]);
    assert!(!bowtie.is_simple());
  }
}
