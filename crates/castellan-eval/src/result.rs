//! Per-side material scores of a board snapshot.

use castellan_core::{Board, Color, Score};

use crate::score_of;

/// The material score of each side, computed once from a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChessResult {
    /// Indexed by [`Color::index()`].
    scores: [Score; Color::COUNT],
}

impl ChessResult {
    /// Score both sides of `board`.
    pub fn from_board(board: &Board) -> ChessResult {
        ChessResult {
            scores: Color::ALL.map(|color| score_of(board, color)),
        }
    }

    /// Build a result from known scores.
    pub const fn new(white: Score, black: Score) -> ChessResult {
        ChessResult {
            scores: [white, black],
        }
    }

    /// Return the score of `color`.
    #[inline]
    pub fn score(&self, color: Color) -> Score {
        self.scores[color.index()]
    }

    /// Return White's score.
    #[inline]
    pub fn white(&self) -> Score {
        self.score(Color::White)
    }

    /// Return Black's score.
    #[inline]
    pub fn black(&self) -> Score {
        self.score(Color::Black)
    }

    /// The side with strictly more material, or `None` on a tie.
    pub fn winner(&self) -> Option<Color> {
        match self.white().cmp(&self.black()) {
            std::cmp::Ordering::Greater => Some(Color::White),
            std::cmp::Ordering::Less => Some(Color::Black),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Iterate over `(color, score)` pairs, White first.
    pub fn iter(&self) -> impl Iterator<Item = (Color, Score)> + '_ {
        Color::ALL.into_iter().map(|color| (color, self.score(color)))
    }
}

impl From<&Board> for ChessResult {
    fn from(board: &Board) -> ChessResult {
        ChessResult::from_board(board)
    }
}
