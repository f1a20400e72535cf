//! Board ranks (rows 1–8).

use std::fmt;

/// A rank (row) on the board, from `One` (White's back rank) to `Eight`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    One = 0,
    Two = 1,
    Three = 2,
    Four = 3,
    Five = 4,
    Six = 5,
    Seven = 6,
    Eight = 7,
}

impl Rank {
    /// Total number of ranks.
    pub const COUNT: usize = 8;

    /// All ranks from bottom to top.
    pub const ALL: [Rank; 8] = [
        Rank::One,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
    ];

    /// Return the index (0..7).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Create a rank from a zero-based index (0 = One, 7 = Eight).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Rank> {
        if index < 8 {
            Some(Rank::ALL[index as usize])
        } else {
            None
        }
    }

    /// Parse a rank digit `1`-`8`.
    pub fn from_char(c: char) -> Option<Rank> {
        match c {
            '1'..='8' => Rank::from_index(c as u8 - b'1'),
            _ => None,
        }
    }

    /// Move `delta` ranks up the board (negative moves down).
    #[inline]
    pub const fn offset(self, delta: i8) -> Option<Rank> {
        let index = self as i16 + delta as i16;
        if index < 0 || index > 7 {
            None
        } else {
            Some(Rank::ALL[index as usize])
        }
    }

    /// The same rank seen from the other side of the board.
    #[inline]
    pub const fn flip(self) -> Rank {
        Rank::ALL[7 - self.index()]
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index() + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::Rank;

    #[test]
    fn from_char_accepts_digits_only() {
        assert_eq!(Rank::from_char('1'), Some(Rank::One));
        assert_eq!(Rank::from_char('8'), Some(Rank::Eight));
        assert_eq!(Rank::from_char('0'), None);
        assert_eq!(Rank::from_char('9'), None);
        assert_eq!(Rank::from_char('a'), None);
    }

    #[test]
    fn offset_stays_on_board() {
        assert_eq!(Rank::Two.offset(2), Some(Rank::Four));
        assert_eq!(Rank::Seven.offset(-2), Some(Rank::Five));
        assert_eq!(Rank::One.offset(-1), None);
        assert_eq!(Rank::Eight.offset(1), None);
    }

    #[test]
    fn flip_mirrors() {
        assert_eq!(Rank::One.flip(), Rank::Eight);
        assert_eq!(Rank::Two.flip(), Rank::Seven);
        for rank in Rank::ALL {
            assert_eq!(rank.flip().flip(), rank);
        }
    }

    #[test]
    fn display_is_one_based() {
        assert_eq!(Rank::One.to_string(), "1");
        assert_eq!(Rank::Eight.to_string(), "8");
    }
}
