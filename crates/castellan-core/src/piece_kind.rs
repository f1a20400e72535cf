//! Piece kinds and their per-kind data: name, material value, reach, home squares.

use std::fmt;

use crate::file::File;
use crate::rank::Rank;
use crate::score::Score;
use crate::square::Square;

/// The kind of a chess piece, without color information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum PieceKind {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

/// Longest ray on an 8x8 board, the step limit of sliding pieces.
pub const SLIDER_STEPS: u8 = 8;

const PAWN_HOME: [Square; 8] = [
    Square::new(File::A, Rank::Two),
    Square::new(File::B, Rank::Two),
    Square::new(File::C, Rank::Two),
    Square::new(File::D, Rank::Two),
    Square::new(File::E, Rank::Two),
    Square::new(File::F, Rank::Two),
    Square::new(File::G, Rank::Two),
    Square::new(File::H, Rank::Two),
];
const KNIGHT_HOME: [Square; 2] = [
    Square::new(File::B, Rank::One),
    Square::new(File::G, Rank::One),
];
const BISHOP_HOME: [Square; 2] = [
    Square::new(File::C, Rank::One),
    Square::new(File::F, Rank::One),
];
const ROOK_HOME: [Square; 2] = [
    Square::new(File::A, Rank::One),
    Square::new(File::H, Rank::One),
];
const QUEEN_HOME: [Square; 1] = [Square::new(File::D, Rank::One)];
const KING_HOME: [Square; 1] = [Square::new(File::E, Rank::One)];

impl PieceKind {
    /// Total number of piece kinds.
    pub const COUNT: usize = 6;

    /// All piece kinds in index order.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Return the index (0..5).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Return the one-letter name of this kind (lowercase).
    #[inline]
    pub const fn name(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    /// Material value of one piece of this kind.
    ///
    /// | Piece  | points |
    /// |--------|--------|
    /// | Pawn   | 1      |
    /// | Knight | 2.5    |
    /// | Bishop | 3      |
    /// | Rook   | 5      |
    /// | Queen  | 9      |
    /// | King   | 0      |
    #[inline]
    pub const fn value(self) -> Score {
        match self {
            PieceKind::Pawn => Score::from_points(1),
            PieceKind::Knight => Score::from_halves(5),
            PieceKind::Bishop => Score::from_points(3),
            PieceKind::Rook => Score::from_points(5),
            PieceKind::Queen => Score::from_points(9),
            PieceKind::King => Score::ZERO,
        }
    }

    /// How many times one movement vector may be repeated in a single move.
    #[inline]
    pub const fn max_steps(self) -> u8 {
        match self {
            PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => SLIDER_STEPS,
            PieceKind::Pawn | PieceKind::Knight | PieceKind::King => 1,
        }
    }

    /// Starting squares of White's pieces of this kind.
    pub const fn home_squares(self) -> &'static [Square] {
        match self {
            PieceKind::Pawn => &PAWN_HOME,
            PieceKind::Knight => &KNIGHT_HOME,
            PieceKind::Bishop => &BISHOP_HOME,
            PieceKind::Rook => &ROOK_HOME,
            PieceKind::Queen => &QUEEN_HOME,
            PieceKind::King => &KING_HOME,
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
