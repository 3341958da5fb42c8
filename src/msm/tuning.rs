//! Window-width lookup table.
//!
//! `arkworks`' `VariableBaseMSM::msm` picks its window size from a small
//! hard-coded table indexed by `log2(N)`, falling back to a formula outside
//! the table's range; this mirrors that shape for `(c, c0)`.

/// `(log2_n, c, c0)` entries for the sizes this engine is tuned for
/// (`N = 2^14 .. 2^18`).
const TABLE: &[(u32, u32, u32)] = &[
    (14, 13, 6),
    (15, 14, 7),
    (16, 15, 7),
    (17, 16, 8),
    (18, 16, 8),
];

/// Chooses `(c, c0)` for an MSM of size `n`. Falls back to `c = log2(n) - 1`,
/// `c0 = c / 2` outside the tuned range; untested for very large `n`, see
/// `DESIGN.md`.
pub fn choose_window(n: usize) -> (u32, u32) {
    let log2_n = if n <= 1 { 1 } else { (usize::BITS - (n - 1).leading_zeros()).max(1) };
    for &(bits, c, c0) in TABLE {
        if bits == log2_n {
            return (c, c0);
        }
    }
    let c = log2_n.saturating_sub(1).max(1);
    (c, (c / 2).max(1))
}
