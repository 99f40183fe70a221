//! Conversion from GeoJSON geometries to map shapes.

use geojson::{Feature, FeatureCollection, Geometry, Position, Value};

use crate::layer::ShapeLayer;
use crate::map::Map;
use crate::point::MapPoint;
use crate::ring::rotate_closed;
use crate::shape::Shape;

/// Converts one GeoJSON geometry into map shapes.
///
/// Returns all produced shapes, in order, recursing through geometry collections.
/// `on_shape` is invoked once per shape as it is produced, with the geometry the
/// shape was built from: multi-part geometries pass the same parent geometry to
/// every invocation, while geometry collections pass the member geometry.
///
/// The mapping loses what the shape model cannot express:
///
/// * polygon inner rings (holes) are dropped, only ring 0 is kept;
/// * elevation and other extra ordinates are dropped;
/// * a position with fewer than two ordinates disqualifies its geometry (or, in a
///   multi-part geometry, that member), which is skipped with a logged warning.
pub fn shapes_from_geometry<F>(geometry: &Geometry, on_shape: &mut F) -> Vec<Shape>
where
    F: FnMut(&Geometry, &Shape),
{
    match &geometry.value {
        Value::Point(position) => single(geometry, pin(position), on_shape),
        Value::MultiPoint(positions) => multi(geometry, positions.iter().map(pin), on_shape),
        Value::LineString(positions) => single(geometry, polyline(positions), on_shape),
        Value::MultiLineString(lines) => {
            multi(geometry, lines.iter().map(|line| polyline(line)), on_shape)
        }
        Value::Polygon(rings) => single(geometry, polygon(rings), on_shape),
        Value::MultiPolygon(polygons) => {
            multi(geometry, polygons.iter().map(|rings| polygon(rings)), on_shape)
        }
        Value::GeometryCollection(members) => {
            let mut shapes = Vec::new();
            for member in members {
                shapes.extend(shapes_from_geometry(member, on_shape));
            }
            shapes
        }
    }
}

fn single<F>(geometry: &Geometry, shape: Option<Shape>, on_shape: &mut F) -> Vec<Shape>
where
    F: FnMut(&Geometry, &Shape),
{
    match shape {
        Some(shape) => {
            on_shape(geometry, &shape);
            vec![shape]
        }
        None => Vec::new(),
    }
}

fn multi<F, I>(geometry: &Geometry, shapes: I, on_shape: &mut F) -> Vec<Shape>
where
    F: FnMut(&Geometry, &Shape),
    I: Iterator<Item = Option<Shape>>,
{
    let mut converted = Vec::new();
    for shape in shapes.flatten() {
        on_shape(geometry, &shape);
        converted.push(shape);
    }
    converted
}

fn pin(position: &Position) -> Option<Shape> {
    match MapPoint::try_from(position) {
        Ok(point) => Some(Shape::Pin(point)),
        Err(err) => {
            log::warn!("skipping point: {err}");
            None
        }
    }
}

fn polyline(positions: &[Position]) -> Option<Shape> {
    Some(Shape::Polyline(points(positions)?))
}

fn polygon(rings: &[Vec<Position>]) -> Option<Shape> {
    let Some(outer) = rings.first() else {
        log::warn!("skipping polygon without an outer ring");
        return None;
    };

    // Inner rings (holes) have no shape counterpart and are dropped here.
    Some(Shape::Polygon(points(&rotate_closed(outer))?))
}

fn points(positions: &[Position]) -> Option<Vec<MapPoint>> {
    let converted: Option<Vec<MapPoint>> = positions
        .iter()
        .map(|position| MapPoint::try_from(position).ok())
        .collect();

    if converted.is_none() {
        log::warn!("skipping geometry with a malformed position");
    }

    converted
}

/// Binds the features of a GeoJSON document to map layers.
///
/// Every feature gets its own layer, no matter how many shapes its geometry expands
/// into; a feature without a geometry still produces an (empty) layer. Hooks fire
/// synchronously: `on_shape_created` for every shape before its layer is finished,
/// `on_layer_created` for every layer before it is registered on the map.
///
/// ```
/// use geojson::{Feature, FeatureCollection, Geometry, Value};
/// use geojson_layers::{FeatureImporter, Map};
///
/// let collection = FeatureCollection {
///     bbox: None,
///     features: vec![Feature {
///         bbox: None,
///         geometry: Some(Geometry::new(Value::MultiPoint(vec![
///             vec![10.0, 20.0],
///             vec![30.0, 40.0],
///         ]))),
///         id: None,
///         properties: None,
///         foreign_members: None,
///     }],
///     foreign_members: None,
/// };
///
/// let mut shapes = 0;
/// let mut map = Map::new();
/// let layers = FeatureImporter::new()
///     .on_shape_created(|_, _| shapes += 1)
///     .import_into(&collection, &mut map);
///
/// assert_eq!(layers, vec![0]);
/// assert_eq!(shapes, 2);
/// assert_eq!(map.layers()[0].len(), 2);
/// ```
#[derive(Default)]
pub struct FeatureImporter<'a> {
    on_shape_created: Option<Box<dyn FnMut(&Geometry, &Shape) + 'a>>,
    on_layer_created: Option<Box<dyn FnMut(&ShapeLayer, &Feature) + 'a>>,
}

impl<'a> FeatureImporter<'a> {
    /// Creates an importer with no hooks attached.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a hook invoked for every created shape, together with the geometry it
    /// was built from, before the shape's layer is finished.
    pub fn on_shape_created(mut self, hook: impl FnMut(&Geometry, &Shape) + 'a) -> Self {
        self.on_shape_created = Some(Box::new(hook));
        self
    }

    /// Sets a hook invoked for every created layer, together with the feature it
    /// was built from, before the layer is registered on the map.
    pub fn on_layer_created(mut self, hook: impl FnMut(&ShapeLayer, &Feature) + 'a) -> Self {
        self.on_layer_created = Some(Box::new(hook));
        self
    }

    /// Adds the document's features to the map, one new layer per feature.
    ///
    /// Returns the indices of the created layers on the map, 1:1 with the
    /// document's features and in the same order.
    pub fn import_into(&mut self, collection: &FeatureCollection, map: &mut Map) -> Vec<usize> {
        let mut indices = Vec::with_capacity(collection.features.len());

        for feature in &collection.features {
            let shapes = match &feature.geometry {
                Some(geometry) => shapes_from_geometry(geometry, &mut |geometry, shape| {
                    if let Some(hook) = self.on_shape_created.as_mut() {
                        hook(geometry, shape);
                    }
                }),
                None => Vec::new(),
            };

            let layer = ShapeLayer::from(shapes);
            if let Some(hook) = self.on_layer_created.as_mut() {
                hook(&layer, feature);
            }

            indices.push(map.layers().len());
            map.add_layer(layer);
        }

        indices
    }
}
