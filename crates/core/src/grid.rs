//! Grid adjacency primitives shared by link validation, movement and narration.

use crate::types::{Direction, GridPoint};

/// Classifies how `to` sits relative to `from`.
///
/// Returns `Some(Direction::Nowhere)` for the same point, the matching step for
/// points exactly one unit apart on a single axis, and `None` otherwise.
pub fn direction(from: GridPoint, to: GridPoint) -> Option<Direction> {
    let dx = i64::from(to.x) - i64::from(from.x);
    let dy = i64::from(to.y) - i64::from(from.y);
    match (dx, dy) {
        (0, 0) => Some(Direction::Nowhere),
        (-1, 0) => Some(Direction::Left),
        (1, 0) => Some(Direction::Right),
        (0, -1) => Some(Direction::Up),
        (0, 1) => Some(Direction::Down),
        _ => None,
    }
}

pub fn is_neighbour(a: GridPoint, b: GridPoint) -> bool {
    matches!(direction(a, b), Some(d) if d != Direction::Nowhere)
}

pub fn manhattan(a: GridPoint, b: GridPoint) -> u64 {
    u64::from(a.x.abs_diff(b.x)) + u64::from(a.y.abs_diff(b.y))
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn unit_steps_resolve_by_axis_and_sign() {
        let origin = GridPoint::new(0, 0);
        assert_eq!(direction(origin, GridPoint::new(-1, 0)), Some(Direction::Left));
        assert_eq!(direction(origin, GridPoint::new(1, 0)), Some(Direction::Right));
        assert_eq!(direction(origin, GridPoint::new(0, -1)), Some(Direction::Up));
        assert_eq!(direction(origin, GridPoint::new(0, 1)), Some(Direction::Down));
    }

    #[test]
    fn diagonal_and_distant_points_are_not_adjacent() {
        let origin = GridPoint::new(4, 4);
        assert_eq!(direction(origin, GridPoint::new(5, 5)), None);
        assert_eq!(direction(origin, GridPoint::new(6, 4)), None);
        assert_eq!(direction(origin, GridPoint::new(4, 1)), None);
    }

    #[test]
    fn opposite_edges_of_the_plane_are_far_apart() {
        let east = GridPoint::new(i32::MAX, 0);
        let west = GridPoint::new(i32::MIN, 0);
        assert_eq!(direction(east, west), None);
        assert_eq!(direction(west, east), None);
        assert!(!is_neighbour(GridPoint::new(0, i32::MIN), GridPoint::new(0, i32::MAX)));
        let far = manhattan(GridPoint::new(i32::MIN, i32::MIN), GridPoint::new(i32::MAX, i32::MAX));
        assert_eq!(far, 2 * u64::from(u32::MAX));
    }

    #[test]
    fn edge_points_still_resolve_unit_steps() {
        let corner = GridPoint::new(i32::MAX, i32::MIN);
        let left = GridPoint::new(i32::MAX - 1, i32::MIN);
        let down = GridPoint::new(i32::MAX, i32::MIN + 1);
        assert_eq!(direction(corner, left), Some(Direction::Left));
        assert_eq!(direction(corner, down), Some(Direction::Down));
    }

    proptest! {
        #[test]
        fn same_point_is_nowhere(x in -1000i32..1000, y in -1000i32..1000) {
            let p = GridPoint::new(x, y);
            prop_assert_eq!(direction(p, p), Some(Direction::Nowhere));
        }

        #[test]
        fn direction_agrees_with_manhattan_distance(
            x in -50i32..50, y in -50i32..50, dx in -3i32..=3, dy in -3i32..=3,
        ) {
            let from = GridPoint::new(x, y);
            let to = GridPoint::new(x + dx, y + dy);
            match manhattan(from, to) {
                0 => prop_assert_eq!(direction(from, to), Some(Direction::Nowhere)),
                1 => {
                    let resolved = direction(from, to);
                    prop_assert!(resolved.is_some());
                    prop_assert_eq!(from.step(resolved.unwrap()), Some(to));
                }
                _ => prop_assert_eq!(direction(from, to), None),
            }
        }
    }
}
