//! Pawn structure: doubled pawns per file.

use castellan_core::{Board, Color, File, PieceKind};

/// A file holding at least this many same-side pawns has all of them doubled.
pub const DOUBLED_PAWN_THRESHOLD: u32 = 2;

/// Number of `color` pawns on each file, indexed by [`File::index()`].
pub fn pawns_per_file(board: &Board, color: Color) -> [u32; File::COUNT] {
    File::ALL.map(|file| {
        board
            .pieces_on_file(file)
            .filter(|(_, piece)| piece.kind() == PieceKind::Pawn && piece.is(color))
            .count() as u32
    })
}

/// Number of `color` pawns standing on a file shared with another `color` pawn.
///
/// A file with a single pawn contributes nothing; a file with three pawns
/// contributes three.
pub fn doubled_pawns(board: &Board, color: Color) -> u32 {
    pawns_per_file(board, color)
        .into_iter()
        .filter(|&count| count >= DOUBLED_PAWN_THRESHOLD)
        .sum()
}
