use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::shape::Shape;

/// Ordered collection of shapes displayed as a single unit on a map.
///
/// Importing a GeoJSON feature produces one layer holding every shape its geometry
/// expands into; exporting groups all shapes of a layer back into one feature.
///
/// ```
/// use geojson_layers::{MapPoint, Shape, ShapeLayer};
///
/// let mut layer = ShapeLayer::new();
/// layer.push(Shape::Pin(MapPoint::latlon(55.0, 37.0)));
///
/// assert_eq!(layer.len(), 1);
/// assert_eq!(layer[0].points()[0].lat(), 55.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ShapeLayer(Vec<Shape>);

impl ShapeLayer {
    /// Creates an empty layer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the shape to the end of the layer.
    pub fn push(&mut self, shape: Shape) {
        self.0.push(shape)
    }

    /// Returns the count of shapes in the layer.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the layer contains zero shapes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns a shape at `index`, or `None` if index is out of bounds.
    pub fn get(&self, index: usize) -> Option<&Shape> {
        self.0.get(index)
    }

    /// Iterates over all shapes in the layer.
    pub fn iter(&self) -> impl Iterator<Item = &Shape> + '_ {
        self.0.iter()
    }
}

impl Index<usize> for ShapeLayer {
    type Output = Shape;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl From<Vec<Shape>> for ShapeLayer {
    fn from(shapes: Vec<Shape>) -> Self {
        Self(shapes)
    }
}
