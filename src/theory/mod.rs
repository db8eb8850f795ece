//! Note spelling and scale construction.
//!
//! Everything here is a pure function over two constant 12-entry chromatic
//! tables: no state, no allocation beyond the returned scale, safe to call
//! from any thread. Callers hand in a tonic string and an interval pattern
//! and get back an ordered sequence of note names.

/// Interval step codes and pattern parsing.
pub mod interval;
/// Chromatic spelling tables and tonic normalization.
pub mod note;
/// Scale walks over the chromatic tables.
pub mod scale;

pub use interval::{parse_pattern, Interval};
pub use note::{normalize_tonic, FLAT_NOTES, SHARP_NOTES};
pub use scale::{chromatic_scale, find_chromatic_scale, flat_chromatic_scale, scale, step};

/// Errors surfaced by tonic parsing and scale construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaleError {
    /// The tonic is not a documented note name: the base letter must be one
    /// of the seven naturals A-G, optionally followed by `#` or `b`.
    InvalidNote { name: String },
    /// A pattern character is not one of `m`, `M`, `A`.
    InvalidInterval { code: char },
    /// A note expected to exist in the active chromatic table was absent.
    /// Signals a spelling mix-up between tables, not a user input error.
    NoteNotFound { note: String },
}

impl std::fmt::Display for ScaleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScaleError::InvalidNote { name } => {
                write!(
                    f,
                    "Invalid note {name:?}: expected a letter A-G with an optional # or b"
                )
            }
            ScaleError::InvalidInterval { code } => {
                write!(
                    f,
                    "Invalid interval code {code:?}: expected one of m, M, A"
                )
            }
            ScaleError::NoteNotFound { note } => {
                write!(f, "Note {note:?} is not in the active chromatic table")
            }
        }
    }
}

impl std::error::Error for ScaleError {}
