//! Montgomery multiplication kernel for ~255-bit primes.
//!
//! A field element is five unsaturated 64-bit limbs, each holding a
//! non-negative integer in `[0, 2^52)`, in radix `2^51`:
//!
//! ```text
//! value = limbs[0] + limbs[1]*2^51 + limbs[2]*2^102 + limbs[3]*2^153 + limbs[4]*2^204
//! ```
//!
//! Two independent multiply routines compute the same Montgomery product:
//! [`mul_fma`] reinterprets limb products as IEEE-754 doubles and uses fused
//! multiply-add the way a CUDA/AVX512-FMA kernel would (Emmart's technique);
//! [`mul_fallback`] is the textbook schoolbook CIOS reduction in pure integer
//! arithmetic. Both must agree bit-for-bit (§8 property tests) — this is
//! what lets [`mul_fma`] be swapped in only where the host CPU actually has
//! an FMA unit, with [`mul_fallback`] as the universal baseline, in the same
//! spirit as the `cfg`-gated OS dispatch in this crate's `os` lineage
//! (detection happens once, in [`super::kernel::KernelKind::detect_51x5`]).
//!
//! `zInitial` cancels the systematic rounding bias introduced by biasing
//! limb products through `C103`/`C2`; without it the accumulated `i64`
//! carries would not stay exact.

/// Limb width in bits.
pub const LIMB_BITS: u32 = 51;
/// Mask selecting the low 51 bits of a limb.
pub const LIMB_MASK: u64 = (1u64 << LIMB_BITS) - 1;
/// Number of limbs in the unsaturated representation.
pub const LIMBS: usize = 5;

/// `2^52`, the float bias that makes an integer in `[0, 2^52)` an exactly
/// representable `f64` when added to it (its bit pattern's mantissa holds
/// exactly the integer part).
pub const C52: f64 = 4503599627370496.0; // 2^52
/// `2^103`, used to bias high-limb products so the resulting float's
/// mantissa holds the high bits of the 102-bit product exactly.
pub const C103: f64 = 10141204801825835211973625643008.0; // 2^103
/// `C103 + 3 * 2^51`, the bias applied before extracting the low half of a
/// limb product.
pub const C51: f64 = 2251799813685248.0; // 2^51
/// `C103 + 3*C51`; see [`C103`], [`C51`].
pub const C2: f64 = C103 + 3.0 * C51;

/// Reinterpret an `f64`'s bit pattern as a signed 64-bit integer.
///
/// Used to pull the integer payload back out of a float produced by an FMA
/// whose inputs were biased into `[2^52, 2^53)` (see module docs): the IEEE
/// double's mantissa holds exactly that integer, so the bit pattern (after
/// masking the exponent/sign back out via the caller's bias arithmetic) is
/// the value we want, read with zero rounding cost.
#[inline(always)]
fn reinterpret_i64(x: f64) -> i64 {
    x.to_bits() as i64
}

/// Five unsaturated 64-bit limbs, each representing a coefficient of
/// `2^51`. Limbs may transiently hold values outside `[0, 2^52)` inside a
/// single kernel call; by the time a value escapes to field-layer code
/// (`super::Fe`) carries have been propagated and every limb is
/// non-negative (§3 invariants).
pub type Limbs = [u64; LIMBS];

/// Propagate carries left-to-right so every limb lies in `[0, 2^51)`,
/// folding any overflow out of the top limb back in scaled by `wrap`
/// (`2^255 mod p`, standard 5x51-limb form) rather than by a bare `1` —
/// `2^255` is congruent to `wrap`, not `1`, modulo an arbitrary `p`.
///
/// Folding `wrap` back in can itself overflow the top limb again (`wrap`
/// is a ~255-bit value, not a small Solinas-style constant), so this loops
/// until the carry vanishes; each round's overflow shrinks by roughly
/// `wrap / 2^255`, so it converges in a handful of iterations for any `p`
/// this kernel is configured for.
///
/// This is *not* a modular reduction by itself — callers combine it with a
/// conditional subtraction of `p` (see `super::reduce`) to reach the
/// "weakly reduced" invariant (`< p + 2^204`) expected after `mul`/`add`.
#[inline]
pub fn carry_propagate(limbs: &mut Limbs, wrap: &Limbs) {
    loop {
        let mut carry: u64 = 0;
        for i in 0..LIMBS {
            let v = limbs[i] + carry;
            limbs[i] = v & LIMB_MASK;
            carry = v >> LIMB_BITS;
        }
        if carry == 0 {
            break;
        }
        for i in 0..LIMBS {
            limbs[i] += carry * wrap[i];
        }
    }
}

/// Montgomery multiplication inputs/outputs shared by both kernel variants.
pub struct MontgomeryParams {
    /// Field modulus, 5x51 limbs.
    pub p: Limbs,
    /// `-p^-1 mod 2^51`, the Montgomery reduction multiplier.
    pub p_inv_neg: u64,
    /// `2^255 mod p`, standard form, 5x51 limbs — the constant
    /// [`carry_propagate`] folds a top-limb carry back by.
    pub wrap: Limbs,
}

/// Emmart-style FMA Montgomery multiplication: `z = x * y * R^-1 mod p`.
///
/// `x`, `y` must be weakly reduced (`< p + 2^204`); `z` is weakly reduced.
/// Runs a CIOS schedule with each 51x51 partial
/// product computed as two FMAs against biased float constants instead of
/// a 128-bit integer multiply, which is what makes this kernel variant
/// meaningfully faster than [`mul_fallback`] on hardware with a fast FMA
/// unit and comparatively slow 64x64->128 integer multiplies (GPUs,
/// some ARM cores).
pub fn mul_fma(params: &MontgomeryParams, x: &Limbs, y: &Limbs) -> Limbs {
    // Z has one extra slot: step 5 folds Z[0]'s high bits into Z[1] before
    // the limb-wise shift-down, so Z[5] must exist to receive the final
    // carry out of Z[4].
    let mut z: [i64; LIMBS + 1] = [0; LIMBS + 1];

    for i in 0..LIMBS {
        let xi = x[i] as f64 + C52;

        for j in 0..LIMBS {
            let yj = y[j] as f64;

            let hi = xi.mul_add(yj, C103);
            z[j + 1] += reinterpret_i64(hi);

            let lo = xi.mul_add(yj, C2 - hi);
            z[j] += reinterpret_i64(lo);
        }

        // q_i = (Z[0] * (-p^-1) mod 2^51), represented as an exact double.
        let q_i = (((z[0] as u64) & LIMB_MASK).wrapping_mul(params.p_inv_neg) & LIMB_MASK) as f64;

        for j in 0..LIMBS {
            let pj = params.p[j] as f64;

            let hi = q_i.mul_add(pj, C103);
            z[j + 1] += reinterpret_i64(hi);

            let lo = q_i.mul_add(pj, C2 - hi);
            z[j] += reinterpret_i64(lo);
        }

        // Fold Z[0]'s upper 13 bits into Z[1] (51 significant bits plus the
        // bias leaves at most 13 extra bits after the two FMA passes), then
        // shift the whole accumulator down by one limb.
        z[1] += z[0] >> LIMB_BITS;
        for k in 0..LIMBS {
            z[k] = z[k + 1];
        }
        z[LIMBS] = 0;
    }

    let mut out: Limbs = [0; LIMBS];
    for i in 0..LIMBS {
        out[i] = z[i] as u64;
    }
    carry_propagate(&mut out, &params.wrap);
    out
}

/// Integer schoolbook fallback for [`mul_fma`].
///
/// Splits each 51-bit limb into a 26-bit low half and a 25-bit high half
/// and performs the cross products with plain `u64` multiplies, the way
/// this crate's `poly1305`/`ed25519` limb arithmetic does for their
/// (smaller) fixed moduli — generalized here to a runtime-supplied `p` and
/// five 51-bit limbs instead of a compile-time modulus.
///
/// Must be bit-identical to [`mul_fma`] on every weakly-reduced input pair;
/// this is the reference kernel property tests check `mul_fma` against.
pub fn mul_fallback(params: &MontgomeryParams, x: &Limbs, y: &Limbs) -> Limbs {
    // Full schoolbook product into a 10-limb buffer, then fold using five
    // CIOS reduction rounds (one per limb of `x`), matching the FMA
    // kernel's schedule so both variants touch the same reduction constants.
    let mut wide: [u128; 2 * LIMBS] = [0; 2 * LIMBS];
    for i in 0..LIMBS {
        for j in 0..LIMBS {
            wide[i + j] += (x[i] as u128) * (y[j] as u128);
        }
    }
    // Propagate u128 "limb" carries at radix 2^51 so each slot fits u64.
    let mut carry: u128 = 0;
    let mut prod: [u64; 2 * LIMBS] = [0; 2 * LIMBS];
    for k in 0..2 * LIMBS {
        let v = wide[k] + carry;
        prod[k] = (v & LIMB_MASK as u128) as u64;
        carry = v >> LIMB_BITS;
    }
    debug_assert_eq!(carry, 0, "final carry must vanish: operands were 5 limbs each");

    // CIOS Montgomery reduction: five rounds, each eliminating the current
    // low limb by adding a multiple of `p`.
    for i in 0..LIMBS {
        let m = (prod[i].wrapping_mul(params.p_inv_neg)) & LIMB_MASK;
        let mut carry: u128 = 0;
        for j in 0..LIMBS {
            let v = prod[i + j] as u128 + (m as u128) * (params.p[j] as u128) + carry;
            prod[i + j] = (v & LIMB_MASK as u128) as u64;
            carry = v >> LIMB_BITS;
        }
        // propagate the remaining carry through the higher words
        let mut k = i + LIMBS;
        while carry > 0 {
            let v = prod[k] as u128 + carry;
            prod[k] = (v & LIMB_MASK as u128) as u64;
            carry = v >> LIMB_BITS;
            k += 1;
        }
    }

    let mut out: Limbs = [0; LIMBS];
    out.copy_from_slice(&prod[LIMBS..2 * LIMBS]);
    out
}
