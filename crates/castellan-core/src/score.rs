//! Material score in half-point units.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

/// Material score for one side.
///
/// Stored as a count of half points so that penalized pawns (worth 0.5)
/// stay exact. Two scores are equal iff their numeric values are equal.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct Score(i32);

impl Score {
    /// No material.
    pub const ZERO: Score = Score(0);

    /// Half a point, the value of a penalized pawn.
    pub const HALF: Score = Score(1);

    /// Build a score from a count of half points.
    #[inline]
    pub const fn from_halves(halves: i32) -> Score {
        Score(halves)
    }

    /// Build a score from whole points.
    #[inline]
    pub const fn from_points(points: i32) -> Score {
        Score(points * 2)
    }

    /// Build a score from a point value, rounding to the nearest half point.
    pub fn from_f64(points: f64) -> Score {
        Score((points * 2.0).round() as i32)
    }

    /// Return the number of half points.
    #[inline]
    pub const fn halves(self) -> i32 {
        self.0
    }

    /// Return the value in points.
    #[inline]
    pub fn value(self) -> f64 {
        f64::from(self.0) / 2.0
    }

    /// Return half of this score, rounded toward zero to the nearest half point.
    #[inline]
    pub const fn halved(self) -> Score {
        Score(self.0 / 2)
    }
}

impl From<i32> for Score {
    fn from(points: i32) -> Score {
        Score::from_points(points)
    }
}

impl From<f64> for Score {
    fn from(points: f64) -> Score {
        Score::from_f64(points)
    }
}

impl Add for Score {
    type Output = Score;

    #[inline]
    fn add(self, rhs: Score) -> Score {
        Score(self.0 + rhs.0)
    }
}

impl AddAssign for Score {
    #[inline]
    fn add_assign(&mut self, rhs: Score) {
        self.0 += rhs.0;
    }
}

impl Sub for Score {
    type Output = Score;

    #[inline]
    fn sub(self, rhs: Score) -> Score {
        Score(self.0 - rhs.0)
    }
}

impl SubAssign for Score {
    #[inline]
    fn sub_assign(&mut self, rhs: Score) {
        self.0 -= rhs.0;
    }
}

impl Mul<u32> for Score {
    type Output = Score;

    #[inline]
    fn mul(self, count: u32) -> Score {
        Score(self.0 * count as i32)
    }
}

impl Sum for Score {
    fn sum<I: Iterator<Item = Score>>(iter: I) -> Score {
        iter.fold(Score::ZERO, |total, score| total + score)
    }
}

impl fmt::Debug for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Score({self})")
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 % 2 == 0 {
            write!(f, "{}", self.0 / 2)
        } else {
            write!(f, "{:.1}", self.value())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Score;

    #[test]
    fn whole_and_fractional_constructors_agree() {
        assert_eq!(Score::from(38), Score::from(38.0));
        assert_eq!(Score::from(3.5), Score::from_halves(7));
        assert_eq!(Score::from_points(2) + Score::HALF, Score::from(2.5));
    }

    #[test]
    fn value_in_points() {
        assert_eq!(Score::from_halves(7).value(), 3.5);
        assert_eq!(Score::ZERO.value(), 0.0);
    }

    #[test]
    fn arithmetic() {
        let mut s = Score::from(5);
        s += Score::from(3);
        assert_eq!(s, Score::from(8));
        s -= Score::HALF;
        assert_eq!(s, Score::from(7.5));
        assert_eq!(Score::from(2.5) * 2, Score::from(5));
        assert_eq!(Score::from(1).halved(), Score::HALF);
    }

    #[test]
    fn sum_of_scores() {
        let total: Score = [Score::from(1), Score::from(2.5), Score::HALF].into_iter().sum();
        assert_eq!(total, Score::from(4));
        let empty: Score = std::iter::empty().sum();
        assert_eq!(empty, Score::ZERO);
    }

    #[test]
    fn display() {
        assert_eq!(Score::from(38).to_string(), "38");
        assert_eq!(Score::from(3.5).to_string(), "3.5");
        assert_eq!(Score::from(-0.5).to_string(), "-0.5");
    }
}
