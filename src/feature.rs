// src/feature.rs

//! Packaging of rendered rings into GeoJSON features.

use crate::cell::Cell;
use crate::config::Theme;
use crate::types::{CellId, Ring, Vertex};
use geojson::{feature::Id, Feature, FeatureCollection, Geometry, JsonObject, Value};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A rendered cell: its closed ring plus the metadata shown alongside it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CellFeature {
  /// The rendered cell.
  pub id: CellId,
  /// Closed boundary ring, longitudes possibly past ±180.
  pub ring: Ring,
  /// Subdivision level (0-30).
  pub level: u8,
  /// Token of the cell id.
  pub token: String,
  /// Geometric center of the cell.
  pub center: Vertex,
}

impl CellFeature {
  /// Attaches the cell's metadata to its rendered ring.
  #[must_use]
  pub fn new(cell: &Cell, ring: Ring) -> Self {
    Self {
      id: cell.id(),
      ring,
      level: cell.level(),
      token: cell.id().to_token(),
      center: cell.center(),
    }
  }

  /// The feature as GeoJSON: a single-ring polygon with the decimal cell id as feature id
  /// and `level`, `token`, `centerLng`, `centerLat` as properties.
  #[must_use]
  pub fn to_geojson(&self) -> Feature {
    let exterior: Vec<Vec<f64>> = self.ring.verts.iter().map(|v| vec![v.lng, v.lat]).collect();
    let mut properties = JsonObject::new();
    properties.insert("level".to_string(), serde_json::json!(self.level));
    properties.insert("token".to_string(), serde_json::json!(self.token));
    properties.insert("centerLng".to_string(), serde_json::json!(self.center.lng));
    properties.insert("centerLat".to_string(), serde_json::json!(self.center.lat));
    Feature {
      bbox: None,
      geometry: Some(Geometry::new(Value::Polygon(vec![exterior]))),
      id: Some(Id::String(self.id.0.to_string())),
      properties: Some(properties),
      foreign_members: None,
    }
  }
}

/// Wraps features into a collection carrying the theme as foreign members
/// (`theme`, `basemap`, `cellColor`).
#[must_use]
pub fn to_feature_collection(features: &[CellFeature], theme: Theme) -> FeatureCollection {
  let mut styling = JsonObject::new();
  styling.insert("theme".to_string(), serde_json::json!(theme.name()));
  styling.insert("basemap".to_string(), serde_json::json!(theme.basemap()));
  styling.insert("cellColor".to_string(), serde_json::json!(theme.cell_color()));
  FeatureCollection {
    bbox: None,
    features: features.iter().map(CellFeature::to_geojson).collect(),
    foreign_members: Some(styling),
  }
}
