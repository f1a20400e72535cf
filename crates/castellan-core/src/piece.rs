//! Colored chess piece, bit-packed into a single byte.

use std::fmt;

use crate::board::Board;
use crate::color::Color;
use crate::direction::{Direction, Jump};
use crate::error::InvalidMovement;
use crate::movement::{self, Pattern, pawns};
use crate::piece_kind::PieceKind;
use crate::score::Score;
use crate::square::Square;

/// A colored chess piece, bit-packed into a single byte.
///
/// Bit layout:
/// - bits 0-2: [`PieceKind`] (values 0-5)
/// - bit 3: [`Color`] (0 = White, 1 = Black)
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece(u8);

impl Piece {
    /// Number of distinct pieces.
    pub const COUNT: usize = 12;

    pub const WHITE_PAWN: Piece = Piece::new(PieceKind::Pawn, Color::White);
    pub const WHITE_KNIGHT: Piece = Piece::new(PieceKind::Knight, Color::White);
    pub const WHITE_BISHOP: Piece = Piece::new(PieceKind::Bishop, Color::White);
    pub const WHITE_ROOK: Piece = Piece::new(PieceKind::Rook, Color::White);
    pub const WHITE_QUEEN: Piece = Piece::new(PieceKind::Queen, Color::White);
    pub const WHITE_KING: Piece = Piece::new(PieceKind::King, Color::White);

    pub const BLACK_PAWN: Piece = Piece::new(PieceKind::Pawn, Color::Black);
    pub const BLACK_KNIGHT: Piece = Piece::new(PieceKind::Knight, Color::Black);
    pub const BLACK_BISHOP: Piece = Piece::new(PieceKind::Bishop, Color::Black);
    pub const BLACK_ROOK: Piece = Piece::new(PieceKind::Rook, Color::Black);
    pub const BLACK_QUEEN: Piece = Piece::new(PieceKind::Queen, Color::Black);
    pub const BLACK_KING: Piece = Piece::new(PieceKind::King, Color::Black);

    /// All 12 pieces, White first.
    pub const ALL: [Piece; 12] = [
        Self::WHITE_PAWN,
        Self::WHITE_KNIGHT,
        Self::WHITE_BISHOP,
        Self::WHITE_ROOK,
        Self::WHITE_QUEEN,
        Self::WHITE_KING,
        Self::BLACK_PAWN,
        Self::BLACK_KNIGHT,
        Self::BLACK_BISHOP,
        Self::BLACK_ROOK,
        Self::BLACK_QUEEN,
        Self::BLACK_KING,
    ];

    /// Create a piece from a kind and a color.
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Piece {
        Piece((color as u8) << 3 | (kind as u8))
    }

    /// Return the piece kind.
    #[inline]
    pub const fn kind(self) -> PieceKind {
        PieceKind::ALL[(self.0 & 0x07) as usize]
    }

    /// Return the owning side.
    #[inline]
    pub const fn color(self) -> Color {
        match self.0 >> 3 {
            0 => Color::White,
            _ => Color::Black,
        }
    }

    /// Whether this piece belongs to `color`.
    #[inline]
    pub const fn is(self, color: Color) -> bool {
        self.0 >> 3 == color as u8
    }

    /// One-letter name, uppercase for White and lowercase for Black.
    #[inline]
    pub const fn name(self) -> char {
        let base = self.kind().name();
        match self.color() {
            Color::White => base.to_ascii_uppercase(),
            Color::Black => base,
        }
    }

    /// Material value of this piece.
    #[inline]
    pub const fn score(self) -> Score {
        self.kind().value()
    }

    /// How many times one movement vector may be repeated in a single move.
    #[inline]
    pub const fn max_steps(self) -> u8 {
        self.kind().max_steps()
    }

    /// Directions this piece may travel along.
    ///
    /// For pawns this is the forward step followed by the two forward
    /// diagonals; knights travel by [`Jump`] and have no directions.
    pub const fn directions(self) -> &'static [Direction] {
        match self.kind() {
            PieceKind::Pawn => pawns::directions(self.color()),
            PieceKind::Knight => &[],
            PieceKind::Bishop => &Direction::DIAGONAL,
            PieceKind::Rook => &Direction::ORTHOGONAL,
            PieceKind::Queen | PieceKind::King => &Direction::ALL,
        }
    }

    /// The movement pattern of a piece standing on `from`.
    ///
    /// A pawn's pattern covers its advance only (two steps from its starting
    /// rank); diagonal captures are checked separately.
    pub fn pattern(self, from: Square) -> Pattern {
        match self.kind() {
            PieceKind::Pawn => pawns::advance(self.color(), from),
            PieceKind::Knight => Pattern::Jump { jumps: &Jump::ALL },
            _ => Pattern::Ray {
                directions: self.directions(),
                max_steps: self.max_steps(),
            },
        }
    }

    /// This piece's starting squares, mirrored to the Black side for Black.
    pub fn starting_squares(self) -> impl Iterator<Item = Square> {
        let color = self.color();
        self.kind()
            .home_squares()
            .iter()
            .map(move |&sq| match color {
                Color::White => sq,
                Color::Black => sq.flip_rank(),
            })
    }

    /// Check that this piece may move from `from` to `to` on `board`.
    ///
    /// The board is not changed; apply an accepted move with
    /// [`Board::with_move`].
    pub fn validate_move(
        self,
        board: &Board,
        from: Square,
        to: Square,
    ) -> Result<(), InvalidMovement> {
        movement::validate(self, board, from, to).map(drop)
    }

    /// Like [`validate_move`](Self::validate_move), returning the squares the
    /// piece passes over on success (always empty for knights).
    pub fn checked_path(
        self,
        board: &Board,
        from: Square,
        to: Square,
    ) -> Result<Vec<Square>, InvalidMovement> {
        movement::validate(self, board, from, to)
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color_prefix = match self.color() {
            Color::White => 'W',
            Color::Black => 'B',
        };
        write!(f, "{}{}", color_prefix, self.kind().name().to_ascii_uppercase())
    }
}
