use serde::{Deserialize, Serialize};

use crate::point::MapPoint;

/// Kind of a [`Shape`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum ShapeKind {
    /// A single point marker.
    Pin,
    /// An open path.
    Polyline,
    /// A closed area.
    Polygon,
}

/// Renderable map primitive.
///
/// A shape holds an ordered sequence of [`MapPoint`]s in latitude/longitude order.
/// Shapes are values: once built by a conversion they are never mutated.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub enum Shape {
    /// A marker at a single point.
    Pin(MapPoint),
    /// An open path through the given points.
    Polyline(Vec<MapPoint>),
    /// A closed area bounded by the given points.
    ///
    /// Only the outer boundary is stored; holes are not representable.
    Polygon(Vec<MapPoint>),
}

impl Shape {
    /// Kind of the shape.
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Pin(_) => ShapeKind::Pin,
            Shape::Polyline(_) => ShapeKind::Polyline,
            Shape::Polygon(_) => ShapeKind::Polygon,
        }
    }

    /// Points of the shape, in order.
    pub fn points(&self) -> &[MapPoint] {
        match self {
            Shape::Pin(point) => std::slice::from_ref(point),
            Shape::Polyline(points) => points,
            Shape::Polygon(points) => points,
        }
    }
}
