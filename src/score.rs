//! Per-sequence scoring reductions
//!
//! Both scores are pure functions of the sequence bytes and the static
//! tables in [`crate::residue`]. Sequences are expected to be trimmed and
//! uppercased by the caller; bytes outside the 20 standard residue codes
//! contribute 0.0 to either score.

use crate::residue;

/// GRAVY score: mean Kyte-Doolittle hydropathy over the whole sequence.
///
/// Unrecognized bytes contribute 0.0 to the sum but still count toward the
/// divisor, so the length is the raw byte count. An empty sequence scores
/// exactly 0.0.
#[must_use]
pub fn gravy(sequence: &[u8]) -> f64 {
    if sequence.is_empty() {
        return 0.0;
    }
    let total: f64 = sequence.iter().map(|&r| residue::hydropathy(r)).sum();
    #[allow(clippy::cast_precision_loss)]
    let len = sequence.len() as f64;
    total / len
}

/// Net charge at pH 7: sum of side-chain charges over the whole sequence.
///
/// Terminal charges (+1 N-terminus, -1 C-terminus) are not applied; the
/// result is the side-chain sum only.
#[must_use]
pub fn net_charge(sequence: &[u8]) -> f64 {
    sequence.iter().map(|&r| residue::charge(r)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_gravy_empty_sequence_is_zero() {
        assert!(close(gravy(b""), 0.0));
    }

    #[test]
    fn test_gravy_single_residue() {
        assert!(close(gravy(b"I"), 4.5));
        assert!(close(gravy(b"R"), -4.5));
    }

    #[test]
    fn test_gravy_is_the_mean() {
        // (1.8 + 2.5 - 3.5 - 3.5 + 2.8 - 0.4) / 6 = -0.05
        assert!(close(gravy(b"ACDEFG"), -0.05));
        // (-4.5 - 3.9 - 3.5 - 3.9) / 4 = -3.95
        assert!(close(gravy(b"RKDK"), -3.95));
    }

    #[test]
    fn test_gravy_unknown_bytes_count_toward_divisor() {
        // 'X' scores 0 but still divides: (1.8 + 0.0) / 2
        assert!(close(gravy(b"AX"), 0.9));
        assert!(close(gravy(b"A1-"), 0.6));
    }

    #[test]
    fn test_net_charge_empty_sequence_is_zero() {
        assert!(close(net_charge(b""), 0.0));
    }

    #[test]
    fn test_net_charge_sums_side_chains() {
        assert!(close(net_charge(b"ACDEFG"), -2.0));
        assert!(close(net_charge(b"RKDK"), 2.0));
    }

    #[test]
    fn test_net_charge_is_side_chain_sum_only() {
        assert!(close(net_charge(b"K"), 1.0));
        assert!(close(net_charge(b"G"), 0.0));
    }

    #[test]
    fn test_net_charge_histidine_is_neutral() {
        assert!(close(net_charge(b"HHHH"), 0.0));
    }
}
