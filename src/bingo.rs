//! Game variants and the B/I/N/G/O letter bands of 75-ball bingo.

use std::fmt;
use std::ops::RangeInclusive;

/// Width of each 75-ball letter band.
const BAND_WIDTH: u8 = 15;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BingoError {
    #[error("Number {0} is out of the 75-ball range (1-75)")]
    OutOfRange(u8),
}

/// The two bingo number-range conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameVariant {
    /// Numbers 1 to 90, spoken as-is.
    Ninety,
    /// Numbers 1 to 75, prefixed by their letter band.
    SeventyFive,
}

impl GameVariant {
    pub const ALL: [GameVariant; 2] = [GameVariant::Ninety, GameVariant::SeventyFive];

    pub fn max_number(self) -> u8 {
        match self {
            GameVariant::Ninety => crate::lexicon::MAX_NUMBER,
            GameVariant::SeventyFive => 75,
        }
    }

    /// Every callable number, in increasing order.
    pub fn numbers(self) -> RangeInclusive<u8> {
        1..=self.max_number()
    }

    /// Short tag used in log lines.
    pub fn tag(self) -> &'static str {
        match self {
            GameVariant::Ninety => "90",
            GameVariant::SeventyFive => "75",
        }
    }
}

impl fmt::Display for GameVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bingo {}", self.tag())
    }
}

/// Letter band of a 75-ball number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Letter {
    B,
    I,
    N,
    G,
    O,
}

impl Letter {
    /// Classify `n` into its 15-wide band. Fails outside 1..=75.
    pub fn for_number(n: u8) -> Result<Self, BingoError> {
        if !GameVariant::SeventyFive.numbers().contains(&n) {
            return Err(BingoError::OutOfRange(n));
        }
        Ok(match (n - 1) / BAND_WIDTH {
            0 => Letter::B,
            1 => Letter::I,
            2 => Letter::N,
            3 => Letter::G,
            _ => Letter::O,
        })
    }

    /// Upper-case form, as spoken.
    pub fn as_str(self) -> &'static str {
        match self {
            Letter::B => "B",
            Letter::I => "I",
            Letter::N => "N",
            Letter::G => "G",
            Letter::O => "O",
        }
    }

    /// Lower-case form, as used in file names.
    pub fn file_prefix(self) -> &'static str {
        match self {
            Letter::B => "b",
            Letter::I => "i",
            Letter::N => "n",
            Letter::G => "g",
            Letter::O => "o",
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::{BingoError, GameVariant, Letter};

    #[test]
    fn band_edges() {
        assert_eq!(Letter::for_number(1), Ok(Letter::B));
        assert_eq!(Letter::for_number(15), Ok(Letter::B));
        assert_eq!(Letter::for_number(16), Ok(Letter::I));
        assert_eq!(Letter::for_number(30), Ok(Letter::I));
        assert_eq!(Letter::for_number(31), Ok(Letter::N));
        assert_eq!(Letter::for_number(45), Ok(Letter::N));
        assert_eq!(Letter::for_number(46), Ok(Letter::G));
        assert_eq!(Letter::for_number(60), Ok(Letter::G));
        assert_eq!(Letter::for_number(61), Ok(Letter::O));
        assert_eq!(Letter::for_number(75), Ok(Letter::O));
    }

    #[test]
    fn rejects_numbers_outside_75_ball() {
        assert_eq!(Letter::for_number(0), Err(BingoError::OutOfRange(0)));
        assert_eq!(Letter::for_number(76), Err(BingoError::OutOfRange(76)));
        assert_eq!(Letter::for_number(90), Err(BingoError::OutOfRange(90)));
    }

    #[test]
    fn classification_is_monotonic() {
        let order = [Letter::B, Letter::I, Letter::N, Letter::G, Letter::O];
        let mut last = 0;
        for n in GameVariant::SeventyFive.numbers() {
            let letter = Letter::for_number(n).unwrap();
            let idx = order.iter().position(|l| *l == letter).unwrap();
            assert!(idx >= last, "band went backwards at {n}");
            assert_eq!(idx, usize::from((n - 1) / 15));
            last = idx;
        }
    }

    #[test]
    fn variant_ranges() {
        assert_eq!(GameVariant::Ninety.numbers().count(), 90);
        assert_eq!(GameVariant::SeventyFive.numbers().count(), 75);
        assert_eq!(GameVariant::SeventyFive.numbers().next(), Some(1));
    }

    #[test]
    fn letter_forms() {
        assert_eq!(Letter::O.as_str(), "O");
        assert_eq!(Letter::O.file_prefix(), "o");
        assert_eq!(Letter::G.to_string(), "G");
    }
}
