use serde::{Deserialize, Serialize};

use crate::layer::ShapeLayer;

/// Map surface owning an ordered collection of shape layers.
///
/// The map itself does no conversion; it is the container that
/// [`FeatureImporter`](crate::FeatureImporter) registers layers on and that
/// [`DocumentExporter`](crate::DocumentExporter) reads layers from.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Map {
    layers: Vec<ShapeLayer>,
}

impl Map {
    /// Creates a map with no layers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the layer to the end of the map's layer list.
    pub fn add_layer(&mut self, layer: ShapeLayer) {
        self.layers.push(layer)
    }

    /// Returns the map's layers, in rendering order.
    pub fn layers(&self) -> &[ShapeLayer] {
        &self.layers
    }

    /// Returns a mutable reference to the map's layer list.
    pub fn layers_mut(&mut self) -> &mut Vec<ShapeLayer> {
        &mut self.layers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layers_are_registered_in_order() {
        let mut map = Map::new();
        assert!(map.layers().is_empty());

        map.add_layer(ShapeLayer::new());
        map.add_layer(ShapeLayer::new());
        assert_eq!(map.layers().len(), 2);

        map.layers_mut().clear();
        assert!(map.layers().is_empty());
    }
}
