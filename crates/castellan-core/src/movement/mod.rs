//! Move validation: reachability, path computation and obstruction checks.
//!
//! Every piece kind is described by a [`Pattern`]. Validation is the same
//! for all of them: find the vector that lands on the target, then (for
//! rays) require the squares in between to be empty. Pawns are the one
//! exception and live in [`pawns`].

mod path;
pub(crate) mod pawns;

pub use path::path_between;

use crate::board::Board;
use crate::direction::{Direction, Jump};
use crate::error::InvalidMovement;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// How a piece covers ground.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// Repeat one of `directions` between 1 and `max_steps` times. Every
    /// square passed over must be empty.
    Ray {
        directions: &'static [Direction],
        max_steps: u8,
    },
    /// Land on one of `jumps`, ignoring whatever stands in between.
    Jump { jumps: &'static [Jump] },
}

/// The vector that carries a piece from one square to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reach {
    /// `steps` repetitions of `direction`.
    Ray { direction: Direction, steps: u8 },
    /// A single jump.
    Jump(Jump),
}

impl Pattern {
    /// Find the vector of this pattern that leads from `from` to `to`.
    ///
    /// Returns `None` when `to` is not reachable, including when
    /// `from == to`. At most one direction can match a given offset, so the
    /// answer is unique.
    pub fn reach(&self, from: Square, to: Square) -> Option<Reach> {
        match *self {
            Pattern::Ray {
                directions,
                max_steps,
            } => {
                let steps = from
                    .file_distance(to)
                    .unsigned_abs()
                    .max(from.rank_distance(to).unsigned_abs());
                if steps == 0 || steps > max_steps {
                    return None;
                }
                directions
                    .iter()
                    .copied()
                    .find(|&direction| from.step(direction, steps) == Some(to))
                    .map(|direction| Reach::Ray { direction, steps })
            }
            Pattern::Jump { jumps } => jumps
                .iter()
                .copied()
                .find(|&jump| from.jump(jump) == Some(to))
                .map(Reach::Jump),
        }
    }
}

/// Validate a move and return the squares it passes over.
pub(crate) fn validate(
    piece: Piece,
    board: &Board,
    from: Square,
    to: Square,
) -> Result<Vec<Square>, InvalidMovement> {
    if piece.kind() == PieceKind::Pawn {
        return pawns::validate(piece.color(), board, from, to);
    }

    match piece.pattern(from).reach(from, to) {
        None => Err(InvalidMovement::no_viable_path(from, to)),
        Some(Reach::Jump(_)) => Ok(Vec::new()),
        Some(Reach::Ray { direction, .. }) => {
            let path = path_between(from, to, direction);
            ensure_clear(board, &path, from, to)?;
            Ok(path)
        }
    }
}

/// Fail with [`PathObstructed`](crate::MovementFailure::PathObstructed) if any
/// of `squares` is occupied.
pub(crate) fn ensure_clear(
    board: &Board,
    squares: &[Square],
    from: Square,
    to: Square,
) -> Result<(), InvalidMovement> {
    if squares.iter().any(|&sq| board.is_occupied(sq)) {
        return Err(InvalidMovement::path_obstructed(from, to));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{Pattern, Reach};
    use crate::board::Board;
    use crate::direction::{Direction, Jump};
    use crate::error::MovementFailure;
    use crate::piece::Piece;
    use crate::square::Square;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    fn reason(piece: Piece, board: &Board, from: &str, to: &str) -> Option<MovementFailure> {
        piece.validate_move(board, sq(from), sq(to)).err().map(|e| e.reason)
    }

    #[test]
    fn ray_reach_finds_direction_and_steps() {
        let bishop = Pattern::Ray {
            directions: &Direction::DIAGONAL,
            max_steps: 8,
        };
        assert_eq!(
            bishop.reach(sq("a1"), sq("d4")),
            Some(Reach::Ray {
                direction: Direction::NorthEast,
                steps: 3
            })
        );
        assert_eq!(bishop.reach(sq("d5"), sq("c5")), None);
        assert_eq!(bishop.reach(sq("d5"), sq("d5")), None);
    }

    #[test]
    fn ray_reach_respects_step_limit() {
        let king = Pattern::Ray {
            directions: &Direction::ALL,
            max_steps: 1,
        };
        assert!(king.reach(sq("d5"), sq("e6")).is_some());
        assert_eq!(king.reach(sq("d5"), sq("b5")), None);
    }

    #[test]
    fn jump_reach() {
        let knight = Pattern::Jump { jumps: &Jump::ALL };
        assert!(matches!(knight.reach(sq("g1"), sq("f3")), Some(Reach::Jump(_))));
        assert_eq!(knight.reach(sq("g1"), sq("g3")), None);
    }

    #[test]
    fn queen_moves_like_rook_and_bishop() {
        let board = Board::empty();
        assert_eq!(reason(Piece::WHITE_QUEEN, &board, "d1", "d8"), None);
        assert_eq!(reason(Piece::WHITE_QUEEN, &board, "d1", "h5"), None);
        assert_eq!(
            reason(Piece::WHITE_QUEEN, &board, "d1", "e3"),
            Some(MovementFailure::NoViablePath)
        );
    }

    #[test]
    fn knight_ignores_blockers() {
        let board = Board::starting_position();
        assert_eq!(reason(Piece::WHITE_KNIGHT, &board, "g1", "f3"), None);
        assert_eq!(reason(Piece::WHITE_KNIGHT, &board, "b1", "c3"), None);
        assert_eq!(
            reason(Piece::WHITE_KNIGHT, &board, "g1", "g3"),
            Some(MovementFailure::NoViablePath)
        );
    }

    #[test]
    fn sliders_are_blocked_in_the_starting_position() {
        let board = Board::starting_position();
        assert_eq!(
            reason(Piece::WHITE_ROOK, &board, "a1", "a3"),
            Some(MovementFailure::PathObstructed)
        );
        assert_eq!(
            reason(Piece::BLACK_BISHOP, &board, "c8", "f5"),
            Some(MovementFailure::PathObstructed)
        );
    }

    #[test]
    fn target_occupant_is_not_an_obstruction() {
        let board = Board::empty()
            .with_piece(sq("a1"), Piece::WHITE_ROOK)
            .with_piece(sq("a4"), Piece::BLACK_PAWN);
        assert_eq!(reason(Piece::WHITE_ROOK, &board, "a1", "a4"), None);
    }

    #[test]
    fn checked_path_returns_intermediate_squares() {
        let board = Board::empty();
        let path = Piece::WHITE_QUEEN
            .checked_path(&board, sq("h8"), sq("e5"))
            .unwrap();
        assert_eq!(path, vec![sq("g7"), sq("f6")]);
        let path = Piece::WHITE_KNIGHT
            .checked_path(&board, sq("b1"), sq("c3"))
            .unwrap();
        assert!(path.is_empty());
    }
}
