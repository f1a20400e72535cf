//! The board: an immutable snapshot mapping every square to its occupant.

use std::fmt;

use crate::color::Color;
use crate::file::File;
use crate::piece::Piece;
use crate::rank::Rank;
use crate::square::Square;

/// What stands on a square.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Occupant {
    /// Nothing.
    #[default]
    Empty,
    /// A piece.
    Piece(Piece),
}

impl Occupant {
    /// Return `true` if nothing stands on the square.
    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Occupant::Empty)
    }

    /// Return the piece, if any.
    #[inline]
    pub const fn piece(self) -> Option<Piece> {
        match self {
            Occupant::Empty => None,
            Occupant::Piece(piece) => Some(piece),
        }
    }
}

impl From<Piece> for Occupant {
    fn from(piece: Piece) -> Occupant {
        Occupant::Piece(piece)
    }
}

impl From<Option<Piece>> for Occupant {
    fn from(piece: Option<Piece>) -> Occupant {
        piece.map_or(Occupant::Empty, Occupant::Piece)
    }
}

/// A snapshot of all 64 squares.
///
/// Boards are values: every transformation returns a new board and leaves
/// the original untouched, so a board can be shared freely between threads.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// Occupant of each square, indexed by [`Square::index()`].
    squares: [Occupant; Square::COUNT],
}

impl Board {
    /// A board with no pieces on it.
    pub const fn empty() -> Board {
        Board {
            squares: [Occupant::Empty; Square::COUNT],
        }
    }

    /// The standard 32-piece starting position.
    pub fn starting_position() -> Board {
        Board::from_placements(
            Piece::ALL
                .into_iter()
                .flat_map(|piece| piece.starting_squares().map(move |sq| (sq, piece))),
        )
    }

    /// Build a board from `(square, piece)` placements on an empty board.
    ///
    /// If a square is listed more than once, the last placement wins.
    pub fn from_placements(placements: impl IntoIterator<Item = (Square, Piece)>) -> Board {
        let mut squares = [Occupant::Empty; Square::COUNT];
        for (sq, piece) in placements {
            squares[sq.index()] = Occupant::Piece(piece);
        }
        Board { squares }
    }

    /// Return the occupant of `sq`.
    #[inline]
    pub fn occupant_at(&self, sq: Square) -> Occupant {
        self.squares[sq.index()]
    }

    /// Return the piece on `sq`, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.occupant_at(sq).piece()
    }

    /// Return `true` if a piece stands on `sq`.
    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        !self.occupant_at(sq).is_empty()
    }

    /// A copy of this board with `piece` placed on `sq`, replacing any occupant.
    #[must_use]
    pub fn with_piece(&self, sq: Square, piece: Piece) -> Board {
        self.with_occupant(sq, Occupant::Piece(piece))
    }

    /// A copy of this board with `sq` emptied.
    #[must_use]
    pub fn without_piece(&self, sq: Square) -> Board {
        self.with_occupant(sq, Occupant::Empty)
    }

    /// A copy of this board with the occupant of `from` moved to `to`.
    ///
    /// Whatever stood on `to` is replaced and `from` is left empty. No
    /// legality check is made; use [`Piece::validate_move`] first. Moving a
    /// square onto itself returns an identical board.
    #[must_use]
    pub fn with_move(&self, from: Square, to: Square) -> Board {
        if from == to {
            return *self;
        }
        let mut board = *self;
        board.squares[to.index()] = self.squares[from.index()];
        board.squares[from.index()] = Occupant::Empty;
        board
    }

    fn with_occupant(&self, sq: Square, occupant: Occupant) -> Board {
        let mut board = *self;
        board.squares[sq.index()] = occupant;
        board
    }

    /// Iterate over every square and its occupant, in square order (a1, a2, ..., h8).
    pub fn occupants(&self) -> impl Iterator<Item = (Square, Occupant)> + '_ {
        File::ALL.into_iter().flat_map(move |file| {
            Rank::ALL.into_iter().map(move |rank| {
                let sq = Square::new(file, rank);
                (sq, self.occupant_at(sq))
            })
        })
    }

    /// Iterate over the occupied squares, in square order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupants()
            .filter_map(|(sq, occupant)| occupant.piece().map(|piece| (sq, piece)))
    }

    /// Iterate over the pieces of one side.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.is(color))
    }

    /// Iterate over the pieces on one file, from rank 1 up.
    pub fn pieces_on_file(&self, file: File) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Rank::ALL.into_iter().filter_map(move |rank| {
            let sq = Square::new(file, rank);
            self.piece_at(sq).map(|piece| (sq, piece))
        })
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::empty()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.pieces()).finish()
    }
}
