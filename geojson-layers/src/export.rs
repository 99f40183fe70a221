//! Conversion from map shapes back to GeoJSON.

use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};

use crate::map::Map;
use crate::ring::rotate_closed;
use crate::shape::Shape;

/// Options controlling how shapes are converted to geometries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportOptions {
    /// Fill the coordinates of exported `LineString`s from the polyline's points.
    ///
    /// Off by default: historically polylines exported as a `LineString` shell with
    /// an empty coordinate sequence, and consumers of such documents may depend on
    /// that. Turn this on to get the polyline's points, axis-swapped back to
    /// `[longitude, latitude]` order.
    pub populate_polyline_coordinates: bool,
}

/// Converts one map shape into a GeoJSON geometry.
///
/// The conversion is total: every shape kind has a geometry counterpart. `on_geometry`
/// fires exactly once, with the produced geometry and the originating shape, before
/// the geometry is returned.
///
/// Every produced geometry carries an empty `properties` foreign member, matching
/// the document shape producers of this format have come to expect.
pub fn geometry_from_shape<F>(shape: &Shape, options: &ExportOptions, on_geometry: &mut F) -> Geometry
where
    F: FnMut(&Geometry, &Shape),
{
    let value = match shape {
        Shape::Pin(point) => Value::Point(point.to_position()),
        Shape::Polyline(points) => {
            let coordinates = if options.populate_polyline_coordinates {
                points.iter().map(|point| point.to_position()).collect()
            } else {
                Vec::new()
            };
            Value::LineString(coordinates)
        }
        Shape::Polygon(points) => {
            // Single ring only: holes were dropped on import and cannot reappear.
            let ring = rotate_closed(points)
                .iter()
                .map(|point| point.to_position())
                .collect();
            Value::Polygon(vec![ring])
        }
    };

    let geometry = with_empty_properties(Geometry::new(value));
    on_geometry(&geometry, shape);
    geometry
}

fn with_empty_properties(mut geometry: Geometry) -> Geometry {
    let mut members = JsonObject::new();
    members.insert(
        "properties".to_string(),
        serde_json::Value::Object(JsonObject::new()),
    );
    geometry.foreign_members = Some(members);
    geometry
}

/// Builds a GeoJSON document from all shapes currently on a map.
///
/// Layers are visited in map order. A layer with no shapes contributes no feature;
/// a layer with exactly one shape becomes a feature with that shape's geometry; a
/// layer with more shapes becomes a feature holding a `GeometryCollection` of its
/// shapes' geometries, in shape order.
///
/// ```
/// use geojson::Value;
/// use geojson_layers::{DocumentExporter, Map, MapPoint, Shape, ShapeLayer};
///
/// let mut map = Map::new();
/// map.add_layer(ShapeLayer::from(vec![Shape::Pin(MapPoint::latlon(20.0, 10.0))]));
///
/// let document = DocumentExporter::new().export(&map);
/// let geometry = document.features[0].geometry.as_ref().unwrap();
/// assert_eq!(geometry.value, Value::Point(vec![10.0, 20.0]));
/// ```
#[derive(Default)]
pub struct DocumentExporter<'a> {
    options: ExportOptions,
    on_geometry_created: Option<Box<dyn FnMut(&Geometry, &Shape) + 'a>>,
}

impl<'a> DocumentExporter<'a> {
    /// Creates an exporter with default options and no hook attached.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the export options.
    pub fn with_options(mut self, options: ExportOptions) -> Self {
        self.options = options;
        self
    }

    /// Sets a hook invoked once for every geometry converted from a shape.
    ///
    /// The hook is not invoked for the `GeometryCollection` wrapper built around
    /// multi-shape layers, only for the per-shape geometries inside it.
    pub fn on_geometry_created(mut self, hook: impl FnMut(&Geometry, &Shape) + 'a) -> Self {
        self.on_geometry_created = Some(Box::new(hook));
        self
    }

    /// Exports every layer on the map into a feature collection.
    pub fn export(&mut self, map: &Map) -> FeatureCollection {
        let mut features = Vec::new();

        for layer in map.layers() {
            let geometry = match layer.len() {
                0 => continue,
                1 => self.convert(&layer[0]),
                _ => {
                    let members = layer.iter().map(|shape| self.convert(shape)).collect();
                    with_empty_properties(Geometry::new(Value::GeometryCollection(members)))
                }
            };

            features.push(Feature {
                bbox: None,
                geometry: Some(geometry),
                id: None,
                properties: Some(JsonObject::new()),
                foreign_members: None,
            });
        }

        FeatureCollection {
            bbox: None,
            features,
            foreign_members: None,
        }
    }

    fn convert(&mut self, shape: &Shape) -> Geometry {
        let Self {
            options,
            on_geometry_created,
        } = self;

        geometry_from_shape(shape, options, &mut |geometry, shape| {
            if let Some(hook) = on_geometry_created.as_mut() {
                hook(geometry, shape);
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layer::ShapeLayer;
    use crate::point::MapPoint;

    fn no_hook(_: &Geometry, _: &Shape) {}

    fn empty_properties() -> Option<JsonObject> {
        let mut members = JsonObject::new();
        members.insert(
            "properties".to_string(),
            serde_json::Value::Object(JsonObject::new()),
        );
        Some(members)
    }

    #[test]
    fn pin_becomes_point_with_swapped_axes() {
        let pin = Shape::Pin(MapPoint::latlon(20.0, 10.0));

        let mut calls = 0;
        let geometry = geometry_from_shape(&pin, &ExportOptions::default(), &mut |_, _| calls += 1);

        assert_eq!(geometry.value, Value::Point(vec![10.0, 20.0]));
        assert_eq!(geometry.foreign_members, empty_properties());
        assert_eq!(calls, 1);
    }

    #[test]
    fn polygon_ring_leads_with_the_closing_point() {
        let polygon = Shape::Polygon(vec![
            MapPoint::latlon(0.0, 0.0),
            MapPoint::latlon(0.0, 1.0),
            MapPoint::latlon(1.0, 1.0),
            MapPoint::latlon(0.0, 0.0),
        ]);

        let geometry = geometry_from_shape(&polygon, &ExportOptions::default(), &mut no_hook);

        assert_eq!(
            geometry.value,
            Value::Polygon(vec![vec![
                vec![0.0, 0.0],
                vec![1.0, 0.0],
                vec![1.0, 1.0],
                vec![0.0, 0.0],
            ]])
        );
    }

    #[test]
    fn polyline_exports_an_empty_line_string_by_default() {
        let polyline = Shape::Polyline(vec![
            MapPoint::latlon(0.0, 0.0),
            MapPoint::latlon(1.0, 1.0),
        ]);

        let geometry = geometry_from_shape(&polyline, &ExportOptions::default(), &mut no_hook);

        assert_eq!(geometry.value, Value::LineString(Vec::new()));
    }

    #[test]
    fn polyline_coordinates_can_be_populated() {
        let polyline = Shape::Polyline(vec![
            MapPoint::latlon(0.0, 5.0),
            MapPoint::latlon(1.0, 6.0),
        ]);
        let options = ExportOptions {
            populate_polyline_coordinates: true,
        };

        let geometry = geometry_from_shape(&polyline, &options, &mut no_hook);

        assert_eq!(
            geometry.value,
            Value::LineString(vec![vec![5.0, 0.0], vec![6.0, 1.0]])
        );
    }

    #[test]
    fn empty_layers_contribute_no_feature() {
        let mut map = Map::new();
        map.add_layer(ShapeLayer::new());
        map.add_layer(ShapeLayer::from(vec![Shape::Pin(MapPoint::latlon(1.0, 2.0))]));

        let document = DocumentExporter::new().export(&map);

        assert_eq!(document.features.len(), 1);
    }

    #[test]
    fn single_shape_layer_exports_its_only_shape() {
        let mut map = Map::new();
        map.add_layer(ShapeLayer::from(vec![Shape::Pin(MapPoint::latlon(20.0, 10.0))]));

        let document = DocumentExporter::new().export(&map);
        let feature = &document.features[0];

        assert_eq!(feature.properties, Some(JsonObject::new()));
        let geometry = feature.geometry.as_ref().expect("geometry is set");
        assert_eq!(geometry.value, Value::Point(vec![10.0, 20.0]));
    }

    #[test]
    fn multi_shape_layer_exports_a_geometry_collection() {
        let mut map = Map::new();
        map.add_layer(ShapeLayer::from(vec![
            Shape::Pin(MapPoint::latlon(2.0, 1.0)),
            Shape::Pin(MapPoint::latlon(4.0, 3.0)),
        ]));

        let mut calls = 0;
        let document = DocumentExporter::new()
            .on_geometry_created(|_, _| calls += 1)
            .export(&map);

        // The hook fires per shape geometry, not for the collection wrapper.
        assert_eq!(calls, 2);

        let geometry = document.features[0].geometry.as_ref().expect("geometry is set");
        let Value::GeometryCollection(members) = &geometry.value else {
            panic!("expected a geometry collection, got {:?}", geometry.value);
        };
        assert_eq!(members.len(), 2);
        assert_eq!(members[0].value, Value::Point(vec![1.0, 2.0]));
        assert_eq!(members[1].value, Value::Point(vec![3.0, 4.0]));
    }

    #[test]
    fn layers_are_exported_in_map_order() {
        let mut map = Map::new();
        map.add_layer(ShapeLayer::from(vec![Shape::Pin(MapPoint::latlon(0.0, 1.0))]));
        map.add_layer(ShapeLayer::from(vec![Shape::Pin(MapPoint::latlon(0.0, 2.0))]));

        let document = DocumentExporter::new().export(&map);

        let lons: Vec<_> = document
            .features
            .iter()
            .map(|feature| {
                let geometry = feature.geometry.as_ref().expect("geometry is set");
                match &geometry.value {
                    Value::Point(position) => position[0],
                    other => panic!("expected a point, got {other:?}"),
                }
            })
            .collect();
        assert_eq!(lons, vec![1.0, 2.0]);
    }
}
