#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)] // Error variants are documented on `CellError`
#![allow(clippy::cast_possible_truncation)] // Bit-field extraction from cell ids
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::unreadable_literal)] // Hilbert and bit masks read better as written
#![allow(clippy::similar_names)] // u/v, i/j, lat/lng pairs
#![allow(clippy::float_cmp)] // Seam and pole tests compare exact sentinel values

//! `xs-s2viz` renders cells of the S2 cube-face hierarchy as polygons on an
//! equirectangular (longitude/latitude) map.
//!
//! Each cell edge is drawn as a great-circle arc. The renderer corrects the three places
//! where straight projection goes wrong: corners on a pole, the ±180 seam, and the two
//! polar faces whose corners all share one latitude. Rings that cross the antimeridian
//! are unwrapped into longitudes past 180 so every cell is one simple polygon.
//!
//! ```no_run
//! use xs_s2viz::{BoundaryRenderer, CellId, RenderConfig, Theme};
//!
//! let renderer = BoundaryRenderer::new(RenderConfig::default().with_theme(Theme::Night));
//! let cells = xs_s2viz::cells_from_tokens("89c25, 1").unwrap();
//! let output = renderer.render_cells(&cells);
//! let geojson = output.to_feature_collection().to_string();
//! # let _ = (geojson, CellId(0));
//! ```

// Declare modules
pub mod cache;
pub mod cell;
pub mod cell_id;
pub mod config;
pub mod constants;
pub mod coords;
pub mod feature;
pub mod math;
pub mod regions;
pub mod render;
pub mod ring;
pub mod types;

// Re-export key public types and functions for easier use
pub use cache::{BoundaryCache, CacheStats};
pub use cell::Cell;
pub use cell_id::{cells_from_tokens, cells_to_tokens};
pub use config::{CoveringConfig, RenderConfig, Theme};
pub use constants::MAX_LEVEL;
pub use feature::{to_feature_collection, CellFeature};
pub use regions::{covering_union, normalize_cells, LatLngRect, Region, RegionCoverer, ShapeMode};
pub use render::{ArcInterpolator, BoundaryRenderer, CellCorners, GreatCircle, RenderOutput, RenderStats};
pub use types::{CellError, CellId, Face, GeodesicArc, Result, Ring, Vec3d, Vertex, CELL_NULL};
