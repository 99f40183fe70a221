//! Polygon ring rotation shared by the two conversion directions.

/// Rotates a closed ring into the point order used by polygon shapes.
///
/// The output starts with the closing point (the last element) and then walks the
/// ring from index 1 to the end; index 0 is never emitted on its own. For a ring
/// closed per GeoJSON convention (first and last points equal) this keeps every
/// vertex exactly once plus the closing duplicate, in a rotated order.
///
/// Import and export both apply this rotation, so a ring converted to a shape and
/// back comes out in its original order.
pub(crate) fn rotate_closed<T: Clone>(ring: &[T]) -> Vec<T> {
    let Some(last) = ring.last() else {
        return Vec::new();
    };

    let mut rotated = Vec::with_capacity(ring.len());
    rotated.push(last.clone());
    rotated.extend_from_slice(&ring[1..]);
    rotated
}
