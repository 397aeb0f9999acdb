// ============================================================================
// src/util/ct.rs – constant-time comparison of secret byte strings
// ============================================================================

use subtle::ConstantTimeEq;

/// Compare two byte strings without exiting early on the first difference.
///
/// Lengths are public (every key is 32 bytes), so a length mismatch returns
/// `false` straight away; equal-length inputs are always scanned in full.
pub fn ct_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}

#[cfg(test)]
mod tests {
    use super::ct_eq;
    use std::hint::black_box;
    use std::time::{Duration, Instant};

    #[test]
    fn equal_and_unequal() {
        assert!(ct_eq(b"", b""));
        assert!(ct_eq(&[7u8; 32], &[7u8; 32]));
        assert!(!ct_eq(&[7u8; 32], &[8u8; 32]));
        assert!(!ct_eq(&[7u8; 32], &[7u8; 31]));
    }

    #[test]
    fn single_bit_difference_anywhere_is_detected() {
        let base = [0x5au8; 32];
        for i in 0..32 {
            for bit in 0..8 {
                let mut other = base;
                other[i] ^= 1 << bit;
                assert!(!ct_eq(&base, &other), "byte {i} bit {bit}");
            }
        }
    }

    fn fastest_batch(expected: &[u8; 32], candidate: &[u8; 32]) -> Duration {
        const ROUNDS: usize = 40;
        const PER_ROUND: usize = 5_000;
        let mut best = Duration::MAX;
        for _ in 0..ROUNDS {
            let start = Instant::now();
            for _ in 0..PER_ROUND {
                black_box(ct_eq(black_box(expected), black_box(candidate)));
            }
            best = best.min(start.elapsed());
        }
        best
    }

    // Best effort: the fastest of many batches filters scheduler noise. An
    // early-exit comparison would make the first-byte case clearly faster.
    #[test]
    fn mismatch_position_does_not_change_timing() {
        let expected = [0xa5u8; 32];
        let mut near = expected;
        near[31] ^= 0xff;
        let mut far = expected;
        far[0] ^= 0xff;

        // warm up
        fastest_batch(&expected, &near);

        let near_t = fastest_batch(&expected, &near).as_nanos().max(1) as f64;
        let far_t = fastest_batch(&expected, &far).as_nanos().max(1) as f64;
        let ratio = near_t / far_t;
        assert!(
            (0.33..=3.0).contains(&ratio),
            "near={near_t}ns far={far_t}ns ratio={ratio:.2}"
        );
    }
}
