//! Material scoring for castellan boards.

pub mod material;
pub mod pawns;
pub mod result;

pub use result::ChessResult;

use castellan_core::{Board, Color, Score};

/// Score one side of `board`, doubled-pawn penalty included.
pub fn score_of(board: &Board, color: Color) -> Score {
    material::material(
        &material::piece_counts(board, color),
        pawns::doubled_pawns(board, color),
    )
}
