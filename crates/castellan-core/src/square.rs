//! Board squares, encoded in Little-Endian Rank-File (LERF) order.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::direction::{Direction, Jump};
use crate::error::SquareParseError;
use crate::file::File;
use crate::rank::Rank;

/// A square on the board, encoded as a `u8` in LERF format.
///
/// Index = rank * 8 + file, so a1 = 0, b1 = 1, ..., h8 = 63. Squares off
/// the 8x8 grid cannot be constructed; every stepping operation returns
/// `None` instead of wrapping or clamping.
///
/// Squares order by file first, then rank (a1 < a2 < ... < a8 < b1).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square(u8);

impl Square {
    /// Total number of squares.
    pub const COUNT: usize = 64;

    /// Create a square from a file and rank.
    #[inline]
    pub const fn new(file: File, rank: Rank) -> Square {
        Square(rank.index() as u8 * 8 + file.index() as u8)
    }

    /// Return the zero-based LERF index (0..63).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Return the file of this square.
    #[inline]
    pub const fn file(self) -> File {
        File::ALL[(self.0 % 8) as usize]
    }

    /// Return the rank of this square.
    #[inline]
    pub const fn rank(self) -> Rank {
        Rank::ALL[(self.0 / 8) as usize]
    }

    /// Shift by a raw (file, rank) offset.
    #[inline]
    pub const fn offset(self, file_delta: i8, rank_delta: i8) -> Option<Square> {
        let Some(file) = self.file().offset(file_delta) else {
            return None;
        };
        let Some(rank) = self.rank().offset(rank_delta) else {
            return None;
        };
        Some(Square::new(file, rank))
    }

    /// Take `steps` steps along `direction`.
    ///
    /// Returns `None` if any step would leave the board.
    #[inline]
    pub const fn step(self, direction: Direction, steps: u8) -> Option<Square> {
        if steps as usize >= File::COUNT {
            return None;
        }
        let steps = steps as i8;
        self.offset(direction.file_delta() * steps, direction.rank_delta() * steps)
    }

    /// Land a knight jump from this square.
    #[inline]
    pub const fn jump(self, jump: Jump) -> Option<Square> {
        self.offset(jump.file_delta(), jump.rank_delta())
    }

    /// Mirror the square across the middle of the board (a1 <-> a8).
    #[inline]
    pub const fn flip_rank(self) -> Square {
        Square::new(self.file(), self.rank().flip())
    }

    /// Files from `self` to `other` (positive toward the h-file).
    #[inline]
    pub const fn file_distance(self, other: Square) -> i8 {
        other.file() as i8 - self.file() as i8
    }

    /// Ranks from `self` to `other` (positive toward rank 8).
    #[inline]
    pub const fn rank_distance(self, other: Square) -> i8 {
        other.rank() as i8 - self.rank() as i8
    }

    /// Iterate over all 64 squares in LERF index order (a1, b1, ..., h8).
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(Square)
    }
}

impl Ord for Square {
    fn cmp(&self, other: &Square) -> Ordering {
        (self.file(), self.rank()).cmp(&(other.file(), other.rank()))
    }
}

impl PartialOrd for Square {
    fn partial_cmp(&self, other: &Square) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for Square {
    type Err = SquareParseError;

    /// Parse algebraic notation such as `"e4"` or `"E4"`.
    fn from_str(s: &str) -> Result<Square, SquareParseError> {
        let malformed = || SquareParseError {
            input: s.to_owned(),
        };

        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(malformed());
        };

        let file = File::from_char(file).ok_or_else(malformed)?;
        let rank = Rank::from_char(rank).ok_or_else(malformed)?;
        Ok(Square::new(file, rank))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::Square;
    use crate::direction::{Direction, Jump};
    use crate::file::File;
    use crate::rank::Rank;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn new_and_accessors() {
        let e4 = Square::new(File::E, Rank::Four);
        assert_eq!(e4.file(), File::E);
        assert_eq!(e4.rank(), Rank::Four);
        assert_eq!(e4.index(), 28);
    }

    #[test]
    fn file_rank_roundtrip() {
        for square in Square::all() {
            assert_eq!(Square::new(square.file(), square.rank()), square);
        }
        assert_eq!(Square::all().count(), Square::COUNT);
    }

    #[test]
    fn parse_algebraic() {
        assert_eq!(sq("a1"), Square::new(File::A, Rank::One));
        assert_eq!(sq("h8"), Square::new(File::H, Rank::Eight));
        assert_eq!(sq("D5"), sq("d5"));
        assert_eq!(sq("e4").to_string(), "e4");
    }

    #[test]
    fn parse_rejects_malformed() {
        for input in ["", "a", "a0", "a9", "i1", "11", "aa", "a1b", " a1", "é4"] {
            let err = input.parse::<Square>().unwrap_err();
            assert_eq!(err.input, input);
        }
    }

    #[test]
    fn ordering_is_file_then_rank() {
        assert!(sq("a8") < sq("b1"));
        assert!(sq("a1") < sq("a2"));
        let mut squares = vec![sq("b1"), sq("a2"), sq("a1")];
        squares.sort();
        assert_eq!(squares, vec![sq("a1"), sq("a2"), sq("b1")]);
    }

    #[test]
    fn step_along_direction() {
        assert_eq!(sq("a1").step(Direction::NorthEast, 3), Some(sq("d4")));
        assert_eq!(sq("d5").step(Direction::West, 3), Some(sq("a5")));
        assert_eq!(sq("d5").step(Direction::South, 1), Some(sq("d4")));
    }

    #[test]
    fn step_off_board_is_none() {
        assert_eq!(sq("a1").step(Direction::West, 1), None);
        assert_eq!(sq("h8").step(Direction::NorthEast, 1), None);
        assert_eq!(sq("d5").step(Direction::North, 4), None);
        // Must not wrap around to the next rank.
        assert_eq!(sq("h4").step(Direction::East, 1), None);
    }

    #[test]
    fn jump_off_board_is_none() {
        assert_eq!(sq("a1").jump(Jump::ALL[0]), Some(sq("b3")));
        let landings = Jump::ALL.iter().filter_map(|&j| sq("a1").jump(j)).count();
        assert_eq!(landings, 2);
    }

    #[test]
    fn flip_rank_mirrors() {
        assert_eq!(sq("c1").flip_rank(), sq("c8"));
        assert_eq!(sq("e2").flip_rank(), sq("e7"));
    }

    #[test]
    fn debug_shows_algebraic() {
        assert_eq!(format!("{:?}", sq("e4")), "Square(e4)");
    }
}
