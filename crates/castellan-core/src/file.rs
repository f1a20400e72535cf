//! Board files (columns a–h).

use std::fmt;

/// A file (column) on the board, from `A` on White's left to `H`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum File {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
    G = 6,
    H = 7,
}

impl File {
    /// Total number of files.
    pub const COUNT: usize = 8;

    /// All files from left to right.
    pub const ALL: [File; 8] = [
        File::A,
        File::B,
        File::C,
        File::D,
        File::E,
        File::F,
        File::G,
        File::H,
    ];

    /// Return the index (0..7).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Create a file from a zero-based index (0 = A, 7 = H).
    #[inline]
    pub const fn from_index(index: u8) -> Option<File> {
        if index < 8 {
            Some(File::ALL[index as usize])
        } else {
            None
        }
    }

    /// Parse a file letter, accepting both cases.
    pub fn from_char(c: char) -> Option<File> {
        match c.to_ascii_lowercase() {
            c @ 'a'..='h' => File::from_index(c as u8 - b'a'),
            _ => None,
        }
    }

    /// Move `delta` files to the right (negative moves left).
    ///
    /// Returns `None` when the result falls off the board.
    #[inline]
    pub const fn offset(self, delta: i8) -> Option<File> {
        let index = self as i16 + delta as i16;
        if index < 0 || index > 7 {
            None
        } else {
            Some(File::ALL[index as usize])
        }
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = (b'a' + self.index() as u8) as char;
        write!(f, "{c}")
    }
}
