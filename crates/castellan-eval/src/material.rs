//! Material counting.
//!
//! Sums the value of every piece a side owns, then takes half a pawn off for
//! each pawn standing on a file shared with another pawn of the same side.

use castellan_core::{Board, Color, PieceKind, Score};

/// Number of pieces of each kind, indexed by [`PieceKind::index()`].
pub type PieceCounts = [u32; PieceKind::COUNT];

/// Count the pieces `color` has on `board`.
pub fn piece_counts(board: &Board, color: Color) -> PieceCounts {
    let mut counts = [0; PieceKind::COUNT];
    for (_, piece) in board.pieces_of(color) {
        counts[piece.kind().index()] += 1;
    }
    counts
}

/// Material score from piece counts and a number of doubled pawns.
///
/// Every kind contributes `value * count`. Each of the `doubled_pawns`
/// counts half its value instead, so it takes half a pawn back off the total.
pub fn material(counts: &PieceCounts, doubled_pawns: u32) -> Score {
    let total: Score = PieceKind::ALL
        .into_iter()
        .map(|kind| kind.value() * counts[kind.index()])
        .sum();
    total - PieceKind::Pawn.value().halved() * doubled_pawns
}
