// src/regions/builder.rs

//! Conversion of drawn shapes (closed GeoJSON-style rings in degrees) into regions.

use super::{LatLngRect, Region};
use crate::types::{CellError, Result, Vertex};
use geo::Winding;
use geo_types::{Coord, LineString};
use geojson::{FeatureCollection, Value};

/// How the drawn shapes are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShapeMode {
  /// Each ring is a rectangle given by its first and third corner.
  #[default]
  Rectangle,
  /// Each ring is a free-form polygon.
  Polygon,
}

impl ShapeMode {
  /// Mode named by a drawing tool: `"rectangle"` selects rectangles, anything else polygons.
  #[must_use]
  pub fn from_name(name: &str) -> Self {
    if name == "rectangle" {
      ShapeMode::Rectangle
    } else {
      ShapeMode::Polygon
    }
  }

  /// Builds the region for one ring in this mode.
  pub fn build(self, ring: &[Vertex]) -> Result<Region> {
    match self {
      ShapeMode::Rectangle => rect_from_ring(ring),
      ShapeMode::Polygon => polygon_from_ring(ring),
    }
  }
}

/// Rectangle spanned by corners 0 and 2 of a drawn rectangle.
///
/// # Arguments
/// * `ring` - The drawn ring; only its first and third points are read.
///
/// # Returns
/// `Ok(Region::Rect)`, or `CellError::InvalidRegion` if the ring has fewer than 3 points.
pub fn rect_from_ring(ring: &[Vertex]) -> Result<Region> {
  let (Some(a), Some(c)) = (ring.first(), ring.get(2)) else {
    return Err(CellError::InvalidRegion(format!(
      "rectangle needs at least 3 points, got {}",
      ring.len()
    )));
  };
  Ok(Region::Rect(LatLngRect {
    lat_lo: a.lat.min(c.lat),
    lat_hi: a.lat.max(c.lat),
    lng_lo: a.lng.min(c.lng),
    lng_hi: a.lng.max(c.lng),
  }))
}

/// Polygon loop of a drawn ring.
///
/// The closing vertex is dropped, coordinates are normalized (latitude clamped to ±90,
/// longitude wrapped into ±180) and the loop is oriented counter-clockwise.
pub fn polygon_from_ring(ring: &[Vertex]) -> Result<Region> {
  let open = match ring.split_last() {
    Some((_, rest)) => rest,
    None => ring,
  };
  let mut verts: Vec<Vertex> = open.iter().map(normalize_vertex).collect();
  verts.dedup();
  if verts.len() < 3 {
    return Err(CellError::InvalidRegion(format!(
      "polygon needs at least 3 distinct vertices, got {}",
      verts.len()
    )));
  }

  let mut line = LineString::new(verts.iter().map(|v| Coord { x: v.lng, y: v.lat }).collect());
  line.close();
  line.make_ccw_winding();
  line.0.pop();
  Ok(Region::Polygon(line.0.into_iter().map(|c| Vertex::new(c.x, c.y)).collect()))
}

fn normalize_vertex(v: &Vertex) -> Vertex {
  let lat = v.lat.clamp(-90.0, 90.0);
  let lng = v.lng - 360.0 * (v.lng / 360.0).round();
  Vertex::new(lng, lat)
}

/// Extracts the polygon rings of a drawing snapshot.
///
/// Non-polygon geometries are ignored and only the exterior ring of each polygon is read.
/// The mode comes from the `mode` property of the first feature.
pub fn shapes_from_geojson(collection: &FeatureCollection) -> (ShapeMode, Vec<Vec<Vertex>>) {
  let mode = collection
    .features
    .first()
    .and_then(|f| f.property("mode"))
    .and_then(|m| m.as_str())
    .map_or(ShapeMode::default(), ShapeMode::from_name);

  let rings = collection
    .features
    .iter()
    .filter_map(|f| f.geometry.as_ref())
    .filter_map(|g| match &g.value {
      Value::Polygon(rings) => rings.first(),
      _ => None,
    })
    .map(|ring| {
      ring
        .iter()
        .filter(|p| p.len() >= 2)
        .map(|p| Vertex::new(p[0], p[1]))
        .collect()
    })
    .collect();
  (mode, rings)
}
