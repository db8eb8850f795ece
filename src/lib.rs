pub mod theory; // Note spelling and scale construction

pub use theory::{
    chromatic_scale, find_chromatic_scale, flat_chromatic_scale, normalize_tonic, parse_pattern,
    scale, step, Interval, ScaleError,
};
