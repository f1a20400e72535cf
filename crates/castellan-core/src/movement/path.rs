//! Squares passed over along a ray.

use crate::direction::Direction;
use crate::square::Square;

/// Squares strictly between `from` and `to` when walking along `direction`.
///
/// The squares are in travel order, starting next to `from`; neither
/// endpoint is included, so adjacent squares give an empty path. If `to`
/// does not lie on the ray the result is empty as well.
pub fn path_between(from: Square, to: Square, direction: Direction) -> Vec<Square> {
    let mut path = Vec::new();
    let mut current = from;
    while let Some(next) = current.step(direction, 1) {
        if next == to {
            return path;
        }
        path.push(next);
        current = next;
    }
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::path_between;
    use crate::direction::Direction;
    use crate::square::Square;

    fn squares(names: &[&str]) -> Vec<Square> {
        names.iter().map(|s| s.parse().unwrap()).collect()
    }

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn diagonal_path_in_travel_order() {
        assert_eq!(
            path_between(sq("a1"), sq("d4"), Direction::NorthEast),
            squares(&["b2", "c3"])
        );
        assert_eq!(
            path_between(sq("d4"), sq("a1"), Direction::SouthWest),
            squares(&["c3", "b2"])
        );
    }

    #[test]
    fn orthogonal_path() {
        assert_eq!(
            path_between(sq("b2"), sq("f2"), Direction::East),
            squares(&["c2", "d2", "e2"])
        );
        assert_eq!(
            path_between(sq("a4"), sq("a1"), Direction::South),
            squares(&["a3", "a2"])
        );
    }

    #[test]
    fn adjacent_squares_have_empty_path() {
        assert!(path_between(sq("g5"), sq("f4"), Direction::SouthWest).is_empty());
        assert!(path_between(sq("g5"), sq("g4"), Direction::South).is_empty());
    }

    #[test]
    fn length_is_step_distance_minus_one() {
        let from = sq("a1");
        for steps in 1..8u8 {
            let to = from.step(Direction::North, steps).unwrap();
            assert_eq!(path_between(from, to, Direction::North).len(), steps as usize - 1);
        }
    }

    #[test]
    fn target_off_the_ray_gives_empty_path() {
        assert!(path_between(sq("a1"), sq("b3"), Direction::North).is_empty());
        assert!(path_between(sq("d4"), sq("a1"), Direction::NorthEast).is_empty());
    }
}
