/*
Note Spelling
=============

The 12 pitch classes each have exactly one canonical sharp spelling and one
canonical flat spelling ("C#" and "Db" name the same pitch). The two tables
below are the sole source of truth: index i in SHARP_NOTES and index i in
FLAT_NOTES always denote the same pitch class, so resolving an enharmonic
partner is a positional lookup, never arithmetic on letter names.

Spelling Convention:
- Sharp keys spell accidentals upward: C#, D#, F#, G#, A#
- Flat keys spell them downward: Db, Eb, Gb, Ab, Bb
- Which convention applies is a property of the key, listed in FLAT_KEYS

Tonic input is forgiving about case ("bb", "Bb" and "bB" all read as B-flat),
but key selection is not: FLAT_KEYS membership is an exact string match on the
caller's original spelling, because "d" (D minor) and "D" (D major) are
different keys with different conventions.
*/

use super::ScaleError;

/// Canonical sharp spellings of the 12 pitch classes, ascending from C.
pub const SHARP_NOTES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Canonical flat spellings, positionally aligned with [`SHARP_NOTES`].
pub const FLAT_NOTES: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// Keys whose scales are conventionally spelled with flats: the six flat
/// majors in both cases, plus the lower-case natural minors d, g and c.
pub const FLAT_KEYS: [&str; 15] = [
    "F", "Bb", "Eb", "Ab", "Db", "Gb", "f", "bb", "eb", "ab", "db", "gb", "d", "g", "c",
];

/// Whether scales rooted on this key are spelled with flats.
///
/// Matches the caller's original spelling exactly; call this before any
/// normalization so that "d" (flat-spelled D minor) and "D" (sharp-spelled
/// D major) stay distinct.
pub fn uses_flats(tonic: &str) -> bool {
    FLAT_KEYS.contains(&tonic)
}

/// Resolve a tonic in any documented spelling to its pitch-class index (0-11).
///
/// Accepts naturals, sharps and flats in any case. Fails with
/// [`ScaleError::InvalidNote`] when the base letter is not A-G or the name is
/// not a canonical spelling (e.g. "Fb", "C##").
pub fn pitch_class(tonic: &str) -> Result<usize, ScaleError> {
    let name = fold_case(tonic);
    if !matches!(name.chars().next(), Some('A'..='G')) {
        return Err(ScaleError::InvalidNote { name });
    }
    SHARP_NOTES
        .iter()
        .position(|&n| n == name)
        .or_else(|| FLAT_NOTES.iter().position(|&n| n == name))
        .ok_or(ScaleError::InvalidNote { name })
}

/// Normalize a tonic to its canonical sharp-or-natural spelling.
///
/// Capitalizes the letter and resolves flat spellings to the enharmonic sharp
/// partner, so "db" becomes "C#" and "bb" becomes "A#".
pub fn normalize_tonic(tonic: &str) -> Result<&'static str, ScaleError> {
    Ok(SHARP_NOTES[pitch_class(tonic)?])
}

/// Upper-case the letter, lower-case the rest ("bB" -> "Bb", "f#" -> "F#").
fn fold_case(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(letter) => {
            let mut name = letter.to_ascii_uppercase().to_string();
            name.push_str(&chars.as_str().to_ascii_lowercase());
            name
        }
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_positionally_aligned() {
        // Spot-check the accidentals; naturals are shared between the tables
        assert_eq!(SHARP_NOTES[1], "C#");
        assert_eq!(FLAT_NOTES[1], "Db");
        assert_eq!(SHARP_NOTES[10], "A#");
        assert_eq!(FLAT_NOTES[10], "Bb");
    }

    #[test]
    fn enharmonic_spellings_share_a_pitch_class() {
        assert_eq!(pitch_class("C#").unwrap(), pitch_class("Db").unwrap());
        assert_eq!(pitch_class("G#").unwrap(), pitch_class("Ab").unwrap());
        assert_eq!(pitch_class("A#").unwrap(), pitch_class("Bb").unwrap());
    }

    #[test]
    fn test_normalize_naturals_and_sharps() {
        assert_eq!(normalize_tonic("c").unwrap(), "C");
        assert_eq!(normalize_tonic("A").unwrap(), "A");
        assert_eq!(normalize_tonic("f#").unwrap(), "F#");
        assert_eq!(normalize_tonic("G#").unwrap(), "G#");
    }

    #[test]
    fn test_normalize_resolves_flats_to_sharps() {
        assert_eq!(normalize_tonic("Db").unwrap(), "C#");
        assert_eq!(normalize_tonic("eb").unwrap(), "D#");
        assert_eq!(normalize_tonic("bB").unwrap(), "A#");
        assert_eq!(normalize_tonic("Gb").unwrap(), "F#");
    }

    #[test]
    fn test_invalid_letters_rejected() {
        assert!(matches!(
            normalize_tonic("H"),
            Err(ScaleError::InvalidNote { .. })
        ));
        assert!(matches!(
            normalize_tonic(""),
            Err(ScaleError::InvalidNote { .. })
        ));
        assert!(matches!(
            normalize_tonic("#"),
            Err(ScaleError::InvalidNote { .. })
        ));
    }

    #[test]
    fn test_non_canonical_spellings_rejected() {
        // Valid base letters, but not spellings the tables document
        assert!(normalize_tonic("Fb").is_err());
        assert!(normalize_tonic("E#").is_err());
        assert!(normalize_tonic("C##").is_err());
    }

    #[test]
    fn flat_key_membership_is_exact() {
        assert!(uses_flats("F"));
        assert!(uses_flats("Bb"));
        assert!(uses_flats("gb"));
        assert!(uses_flats("d"));

        assert!(!uses_flats("D"));
        assert!(!uses_flats("G"));
        // Same pitch class as Eb, but spelled sharp: not a flat key
        assert!(!uses_flats("D#"));
        // No case folding before membership
        assert!(!uses_flats("BB"));
    }
}
