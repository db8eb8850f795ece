//! Print common scales across a few keys.
//!
//! Run with: cargo run --example print_scales

use keyscale::theory::scale::patterns;
use keyscale::{find_chromatic_scale, scale, ScaleError};

fn main() -> Result<(), ScaleError> {
    let families = [
        ("major", patterns::MAJOR),
        ("natural minor", patterns::NATURAL_MINOR),
        ("harmonic minor", patterns::HARMONIC_MINOR),
        ("major pentatonic", patterns::MAJOR_PENTATONIC),
    ];

    for tonic in ["C", "G", "F", "Bb", "f#"] {
        println!("== {tonic} ==");
        println!("  chromatic: {}", find_chromatic_scale(tonic)?.join(" "));
        for (name, pattern) in families {
            println!("  {name:>16}: {}", scale(tonic, pattern)?.join(" "));
        }
        println!();
    }

    Ok(())
}
