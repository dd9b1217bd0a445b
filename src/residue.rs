//! Static per-residue property tables
//!
//! Both tables are keyed by the uppercase one-letter amino acid code and are
//! built at compile time, so they can be shared freely and are never mutated
//! at runtime. Lookups fall back to 0.0 for any byte outside the 20 standard
//! residues; unknown symbols degrade scores instead of raising errors.

use phf::phf_map;

/// Kyte-Doolittle hydropathy scale, used for the GRAVY calculation.
pub static HYDROPATHY: phf::Map<u8, f64> = phf_map! {
    b'A' => 1.8,
    b'R' => -4.5,
    b'N' => -3.5,
    b'D' => -3.5,
    b'C' => 2.5,
    b'Q' => -3.5,
    b'E' => -3.5,
    b'G' => -0.4,
    b'H' => -3.2,
    b'I' => 4.5,
    b'L' => 3.8,
    b'K' => -3.9,
    b'M' => 1.9,
    b'F' => 2.8,
    b'P' => -1.6,
    b'S' => -0.8,
    b'T' => -0.7,
    b'W' => -0.9,
    b'Y' => -1.3,
    b'V' => 4.2,
};

/// Approximate side-chain ionization state at pH 7.
///
/// Histidine is fixed at 0.0 (a conservative estimate at neutral pH).
pub static CHARGE_AT_PH7: phf::Map<u8, f64> = phf_map! {
    // Basic (+1)
    b'R' => 1.0,
    b'K' => 1.0,
    // Acidic (-1)
    b'D' => -1.0,
    b'E' => -1.0,
    // Histidine, approximated as neutral
    b'H' => 0.0,
    // Neutral (0)
    b'A' => 0.0,
    b'C' => 0.0,
    b'G' => 0.0,
    b'I' => 0.0,
    b'L' => 0.0,
    b'M' => 0.0,
    b'F' => 0.0,
    b'P' => 0.0,
    b'S' => 0.0,
    b'T' => 0.0,
    b'W' => 0.0,
    b'Y' => 0.0,
    b'V' => 0.0,
    b'N' => 0.0,
    b'Q' => 0.0,
};

/// Hydropathy value for a residue code, 0.0 if unrecognized
#[must_use]
pub fn hydropathy(residue: u8) -> f64 {
    HYDROPATHY.get(&residue).copied().unwrap_or(0.0)
}

/// Charge at pH 7 for a residue code, 0.0 if unrecognized
#[must_use]
pub fn charge(residue: u8) -> f64 {
    CHARGE_AT_PH7.get(&residue).copied().unwrap_or(0.0)
}
