//! Bidirectional conversion between GeoJSON feature collections and map shape layers.
//!
//! GeoJSON stores coordinates as `[longitude, latitude]` positions, while map surfaces
//! typically work with `(latitude, longitude)` points grouped into pins, polylines and
//! polygons. This crate translates between the two models:
//!
//! * [`FeatureImporter`] adds a [`geojson::FeatureCollection`] to a [`Map`], one
//!   [`ShapeLayer`] per feature;
//! * [`DocumentExporter`] collects all shapes on a [`Map`] back into a
//!   [`geojson::FeatureCollection`].
//!
//! Both directions are built on two leaf functions, [`shapes_from_geometry`] and
//! [`geometry_from_shape`], which can be used on their own.
//!
//! Parsing and serializing GeoJSON text is left to the [`geojson`] crate, which is
//! re-exported for convenience.
//!
//! # Quick start
//!
//! ```
//! use geojson::{Feature, FeatureCollection, Geometry, Value};
//! use geojson_layers::{DocumentExporter, FeatureImporter, Map};
//!
//! let collection = FeatureCollection {
//!     bbox: None,
//!     features: vec![Feature {
//!         bbox: None,
//!         geometry: Some(Geometry::new(Value::Point(vec![10.0, 20.0]))),
//!         id: None,
//!         properties: None,
//!         foreign_members: None,
//!     }],
//!     foreign_members: None,
//! };
//!
//! let mut map = Map::new();
//! let layers = FeatureImporter::new().import_into(&collection, &mut map);
//! assert_eq!(layers.len(), 1);
//!
//! let document = DocumentExporter::new().export(&map);
//! assert_eq!(document.features.len(), 1);
//! ```

pub use geojson;

pub mod error;

mod point;
pub use point::MapPoint;

mod shape;
pub use shape::{Shape, ShapeKind};

mod layer;
pub use layer::ShapeLayer;

mod map;
pub use map::Map;

mod ring;

pub mod import;
pub use import::{shapes_from_geometry, FeatureImporter};

pub mod export;
pub use export::{geometry_from_shape, DocumentExporter, ExportOptions};
