//! Chess rule core: squares, pieces, board snapshots and move validation.
//!
//! Everything here is a plain value. Boards are never mutated in place;
//! validation and scoring are pure functions of a snapshot.

mod board;
mod color;
mod direction;
mod error;
mod file;
mod movement;
mod piece;
mod piece_kind;
mod rank;
mod score;
mod square;

pub use board::{Board, Occupant};
pub use color::Color;
pub use direction::{Direction, Jump};
pub use error::{InvalidMovement, MovementFailure, SquareParseError};
pub use file::File;
pub use movement::{Pattern, Reach, path_between};
pub use piece::Piece;
pub use piece_kind::{PieceKind, SLIDER_STEPS};
pub use rank::Rank;
pub use score::Score;
pub use square::Square;
