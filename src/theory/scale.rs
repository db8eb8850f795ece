/*
Scale Construction
==================

A scale is a walk over the cyclic 12-state space of pitch classes. The walk
starts at the tonic's position in one chromatic table, consumes one pattern
code per step (1-3 semitone edges each), and always runs the full pattern:
landing back on the tonic mid-pattern does not halt it. The tonic is restated
once at the end to close the octave, unless the final step already landed
there.

All stepping happens inside a single, consistently-spelled table. The table is
chosen from the caller's original tonic spelling (flat keys get the flat
table), and the tonic is respelled into that table's convention before the
walk, so a mixed-spelling lookup can never occur in this module.
*/

use super::interval::{parse_pattern, Interval};
use super::note::{self, FLAT_NOTES, SHARP_NOTES};
use super::ScaleError;

/// Interval patterns for the common scale families, ready to feed to [`scale`].
pub mod patterns {
    /// Major (ionian).
    pub const MAJOR: &str = "MMmMMMm";
    /// Natural minor (aeolian).
    pub const NATURAL_MINOR: &str = "MmMMmMM";
    /// Harmonic minor, with the augmented second before the leading tone.
    pub const HARMONIC_MINOR: &str = "MmMMmAm";
    /// Melodic minor, ascending form.
    pub const MELODIC_MINOR: &str = "MmMMMMm";
    /// Major pentatonic.
    pub const MAJOR_PENTATONIC: &str = "MMAMA";
    /// Minor pentatonic.
    pub const MINOR_PENTATONIC: &str = "AMMAM";
    /// Whole-tone hexatonic.
    pub const HEXATONIC: &str = "MMMMMM";
    /// All twelve semitones.
    pub const CHROMATIC: &str = "mmmmmmmmmmmm";
}

/// Step from `current` to the next note in `table`.
///
/// Locates the first occurrence of `current`, advances by the interval's
/// semitone count, and wraps modulo 12. `table` must hold the 12 pitch
/// classes in ascending semitone order; the 13-element output of
/// [`chromatic_scale`] also works, since the trailing octave duplicate is
/// never the first occurrence.
///
/// Fails with [`ScaleError::NoteNotFound`] when `current` is absent, which
/// means the caller mixed spellings between tables. That is a contract
/// violation worth surfacing, never a case to paper over.
pub fn step<'a>(table: &[&'a str], current: &str, interval: Interval) -> Result<&'a str, ScaleError> {
    let position = table
        .iter()
        .position(|&n| n == current)
        .ok_or_else(|| ScaleError::NoteNotFound {
            note: current.to_string(),
        })?;
    Ok(table[(position + interval.semitones()) % 12])
}

/// The 13-note chromatic scale on `tonic`, sharp-spelled.
///
/// Ascends through all 12 pitch classes from the tonic, then restates the
/// tonic as the octave. "C" is the conventional starting point.
pub fn chromatic_scale(tonic: &str) -> Result<Vec<&'static str>, ScaleError> {
    build_chromatic(tonic, &SHARP_NOTES)
}

/// The 13-note chromatic scale on `tonic`, flat-spelled.
pub fn flat_chromatic_scale(tonic: &str) -> Result<Vec<&'static str>, ScaleError> {
    build_chromatic(tonic, &FLAT_NOTES)
}

/// The 13-note chromatic scale on `tonic`, spelled per the key's convention.
///
/// Flat keys (see [`note::FLAT_KEYS`]) get the flat table, everything else the
/// sharp table.
pub fn find_chromatic_scale(tonic: &str) -> Result<Vec<&'static str>, ScaleError> {
    build_chromatic(tonic, table_for(tonic))
}

/// Build a scale on `tonic` by walking `pattern`.
///
/// The output opens with the tonic, holds one note per pattern code, and
/// closes with the tonic an octave up. The closing tonic is not duplicated
/// when the pattern itself already returns to it, so a full twelve-semitone
/// pattern yields 13 notes, not 14.
///
/// ```
/// use keyscale::{scale, theory::scale::patterns};
///
/// let d_major = scale("D", patterns::MAJOR).unwrap();
/// assert_eq!(d_major, ["D", "E", "F#", "G", "A", "B", "C#", "D"]);
///
/// // Flat keys come out flat-spelled
/// let f_major = scale("F", patterns::MAJOR).unwrap();
/// assert_eq!(f_major, ["F", "G", "A", "Bb", "C", "D", "E", "F"]);
/// ```
pub fn scale(tonic: &str, pattern: &str) -> Result<Vec<&'static str>, ScaleError> {
    let table = table_for(tonic);
    let steps = parse_pattern(pattern)?;
    let root = table[note::pitch_class(tonic)?];

    let mut notes = vec![root];
    let mut current = root;
    for interval in steps {
        current = step(table, current, interval)?;
        notes.push(current);
    }
    if current != root {
        notes.push(root);
    }
    Ok(notes)
}

/// Pick the spelling table from the tonic's original case and spelling.
fn table_for(tonic: &str) -> &'static [&'static str; 12] {
    if note::uses_flats(tonic) {
        &FLAT_NOTES
    } else {
        &SHARP_NOTES
    }
}

/// Shared body of the chromatic builders: 12 ascending pitch classes from the
/// tonic, wrapping cyclically, plus the restated tonic.
fn build_chromatic(
    tonic: &str,
    table: &'static [&'static str; 12],
) -> Result<Vec<&'static str>, ScaleError> {
    let start = note::pitch_class(tonic)?;
    let mut notes: Vec<&'static str> = (0..12).map(|offset| table[(start + offset) % 12]).collect();
    notes.push(table[start]);
    Ok(notes)
}
