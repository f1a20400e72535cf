//! Error types for coordinate parsing and move validation.

use crate::square::Square;

/// A string that is not a two-character algebraic coordinate (`a1`..`h8`).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed coordinate: \"{input}\"")]
pub struct SquareParseError {
    /// The rejected input.
    pub input: String,
}

/// Why a piece cannot make a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum MovementFailure {
    /// The target cannot be reached with the piece's movement pattern.
    #[error("no viable path")]
    NoViablePath,
    /// The target is reachable, but a square on the way is occupied.
    #[error("path obstructed")]
    PathObstructed,
}

/// A move rejected by a piece's movement rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("cannot move from {from} to {to}: {reason}")]
pub struct InvalidMovement {
    /// Square the piece was moving from.
    pub from: Square,
    /// Square the piece was moving to.
    pub to: Square,
    /// Which rule the move broke.
    pub reason: MovementFailure,
}

impl InvalidMovement {
    pub(crate) fn no_viable_path(from: Square, to: Square) -> InvalidMovement {
        InvalidMovement {
            from,
            to,
            reason: MovementFailure::NoViablePath,
        }
    }

    pub(crate) fn path_obstructed(from: Square, to: Square) -> InvalidMovement {
        InvalidMovement {
            from,
            to,
            reason: MovementFailure::PathObstructed,
        }
    }
}
