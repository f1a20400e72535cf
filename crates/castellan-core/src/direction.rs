//! Movement vectors: the eight compass directions and the eight knight jumps.

/// One of the eight unit steps a piece can repeat along a ray.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// All eight directions, clockwise from north.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Rook lines.
    pub const ORTHOGONAL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Bishop lines.
    pub const DIAGONAL: [Direction; 4] = [
        Direction::NorthEast,
        Direction::SouthEast,
        Direction::SouthWest,
        Direction::NorthWest,
    ];

    /// Files moved per step (east is positive).
    #[inline]
    pub const fn file_delta(self) -> i8 {
        match self {
            Direction::North | Direction::South => 0,
            Direction::NorthEast | Direction::East | Direction::SouthEast => 1,
            Direction::SouthWest | Direction::West | Direction::NorthWest => -1,
        }
    }

    /// Ranks moved per step (north is positive).
    #[inline]
    pub const fn rank_delta(self) -> i8 {
        match self {
            Direction::East | Direction::West => 0,
            Direction::NorthWest | Direction::North | Direction::NorthEast => 1,
            Direction::SouthWest | Direction::South | Direction::SouthEast => -1,
        }
    }
}

/// A knight's L-shaped leap: two squares one way and one square the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Jump {
    file: i8,
    rank: i8,
}

impl Jump {
    /// All eight knight jumps.
    pub const ALL: [Jump; 8] = [
        Jump::new(1, 2),
        Jump::new(2, 1),
        Jump::new(2, -1),
        Jump::new(1, -2),
        Jump::new(-1, -2),
        Jump::new(-2, -1),
        Jump::new(-2, 1),
        Jump::new(-1, 2),
    ];

    const fn new(file: i8, rank: i8) -> Jump {
        Jump { file, rank }
    }

    /// Files moved by the jump.
    #[inline]
    pub const fn file_delta(self) -> i8 {
        self.file
    }

    /// Ranks moved by the jump.
    #[inline]
    pub const fn rank_delta(self) -> i8 {
        self.rank
    }
}
