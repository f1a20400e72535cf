//! Pawn policy: advances go forward onto empty squares, captures go diagonally
//! forward onto enemy pieces.

use crate::board::Board;
use crate::color::Color;
use crate::direction::Direction;
use crate::error::InvalidMovement;
use crate::movement::{Pattern, Reach, ensure_clear, path_between};
use crate::square::Square;

/// The forward step followed by the two capture diagonals.
pub(crate) const fn directions(color: Color) -> &'static [Direction] {
    match color {
        Color::White => &[Direction::North, Direction::NorthEast, Direction::NorthWest],
        Color::Black => &[Direction::South, Direction::SouthEast, Direction::SouthWest],
    }
}

/// One step forward, or two from the starting rank.
pub(crate) fn advance(color: Color, from: Square) -> Pattern {
    let max_steps = if from.rank() == color.pawn_rank() { 2 } else { 1 };
    Pattern::Ray {
        directions: &directions(color)[..1],
        max_steps,
    }
}

pub(crate) fn validate(
    color: Color,
    board: &Board,
    from: Square,
    to: Square,
) -> Result<Vec<Square>, InvalidMovement> {
    if let Some(Reach::Ray { direction, .. }) = advance(color, from).reach(from, to) {
        let path = path_between(from, to, direction);
        ensure_clear(board, &path, from, to)?;
        // Advances never capture.
        ensure_clear(board, &[to], from, to)?;
        return Ok(path);
    }

    let capture = Pattern::Ray {
        directions: &directions(color)[1..],
        max_steps: 1,
    };
    let takes_enemy = board.piece_at(to).is_some_and(|piece| piece.is(!color));
    if capture.reach(from, to).is_some() && takes_enemy {
        return Ok(Vec::new());
    }

    Err(InvalidMovement::no_viable_path(from, to))
}
