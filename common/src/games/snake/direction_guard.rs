use super::types::Direction;

/// Filters a requested turn against the committed direction.
///
/// A reversal would put the head straight into the neck, so it yields `None` and the caller
/// keeps whatever turn it already accepted. Everything else, repeats included, is accepted.
pub fn apply(current: Direction, requested: Direction) -> Option<Direction> {
    if requested.is_opposite(&current) {
        None
    } else {
        Some(requested)
    }
}

/// Same as [`apply`] for a raw `(dx, dy)` vector coming from an input source.
/// Vectors other than the four unit directions are rejected.
pub fn apply_vector(current: Direction, dx: i32, dy: i32) -> Option<Direction> {
    Direction::from_vector(dx, dy).and_then(|requested| apply(current, requested))
}
