#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::ScaleError;

/// Symbolic step size between two scale degrees.
///
/// Patterns are written as strings of single-character codes, one per step:
/// `m` for a semitone, `M` for a whole tone, `A` for an augmented second.
/// The major scale, for example, is `"MMmMMMm"`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interval {
    /// Half step (`m`), 1 semitone.
    Semitone,
    /// Whole step (`M`), 2 semitones.
    WholeTone,
    /// Augmented second (`A`), 3 semitones.
    AugmentedSecond,
}

impl Interval {
    /// Number of semitones this step spans.
    pub const fn semitones(self) -> usize {
        match self {
            Interval::Semitone => 1,
            Interval::WholeTone => 2,
            Interval::AugmentedSecond => 3,
        }
    }

    /// The single-character pattern code for this step.
    pub const fn code(self) -> char {
        match self {
            Interval::Semitone => 'm',
            Interval::WholeTone => 'M',
            Interval::AugmentedSecond => 'A',
        }
    }

    /// Parse a single pattern code.
    pub fn from_code(code: char) -> Result<Self, ScaleError> {
        match code {
            'm' => Ok(Interval::Semitone),
            'M' => Ok(Interval::WholeTone),
            'A' => Ok(Interval::AugmentedSecond),
            _ => Err(ScaleError::InvalidInterval { code }),
        }
    }
}

/// Parse a whole pattern string into its interval steps.
///
/// Fails on the first character outside the `m`/`M`/`A` vocabulary, so an
/// invalid pattern is rejected before any notes are produced.
pub fn parse_pattern(pattern: &str) -> Result<Vec<Interval>, ScaleError> {
    pattern.chars().map(Interval::from_code).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for interval in [
            Interval::Semitone,
            Interval::WholeTone,
            Interval::AugmentedSecond,
        ] {
            assert_eq!(Interval::from_code(interval.code()).unwrap(), interval);
        }
    }

    #[test]
    fn semitone_counts() {
        assert_eq!(Interval::Semitone.semitones(), 1);
        assert_eq!(Interval::WholeTone.semitones(), 2);
        assert_eq!(Interval::AugmentedSecond.semitones(), 3);
    }

    #[test]
    fn test_parse_major_pattern() {
        let steps = parse_pattern("MMmMMMm").unwrap();
        assert_eq!(steps.len(), 7);
        assert_eq!(steps[0], Interval::WholeTone);
        assert_eq!(steps[2], Interval::Semitone);
        // The steps of any one-octave pattern sum to 12 semitones
        assert_eq!(steps.iter().map(|s| s.semitones()).sum::<usize>(), 12);
    }

    #[test]
    fn test_parse_rejects_unknown_codes() {
        assert_eq!(
            parse_pattern("MMX"),
            Err(ScaleError::InvalidInterval { code: 'X' })
        );
        // Case matters: lower-case a is not the augmented second
        assert!(parse_pattern("a").is_err());
    }

    #[test]
    fn empty_pattern_is_valid() {
        assert!(parse_pattern("").unwrap().is_empty());
    }
}
