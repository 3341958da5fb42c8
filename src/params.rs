//! Curve parameter sets.
//!
//! A generic parameter registry is explicitly out of scope: `CurveParams`
//! is a plain data value the caller constructs and passes into
//! `Engine::create`, the same constructor-injection shape
//! `signatures::ed25519` avoids needing because it only ever targets one
//! curve. The Montgomery constants (`R`, `R^2`, `-p^-1 mod 2^51`) are not
//! derived at runtime: like `ark-bls12-381` and similar crates, they are
//! computed once (off-line) for a given modulus and hardcoded, because
//! deriving them needs nothing the hot path uses anyway.

use crate::field::kernel::KernelKind;
use crate::field::limb51::{Limbs, MontgomeryParams, LIMBS};
use std::sync::Arc;

/// A 256-bit integer as four 64-bit words, least-significant word first.
/// Used for byte I/O, comparisons, and Fermat/Tonelli-Shanks exponents —
/// contexts where the 5x51 Montgomery limb layout is the wrong tool.
pub type U256 = [u64; 4];

/// Full parameter set for one elliptic curve: the base field modulus and
/// its Montgomery constants, the GLV endomorphism constants, a generator
/// point, the scalar field order, and the kernel variant to multiply with.
pub struct CurveParams {
    /// Base field modulus `p`, standard form, 5x51 limbs.
    pub modulus_limbs: Limbs,
    /// `p` as a [`U256`] (little-endian words), for byte codecs and
    /// ordering comparisons.
    pub modulus_u256: U256,
    /// `-p^-1 mod 2^51`, the per-limb Montgomery reduction constant.
    pub p_inv_neg: u64,
    /// `R mod p` where `R = 2^255`: the Montgomery form of 1. Also the
    /// standard-form value of `2^255 mod p`, so it doubles as the
    /// top-limb-carry reduction constant the kernel folds against.
    pub montgomery_r: Limbs,
    /// `R^2 mod p`: used to convert standard-form limbs into Montgomery
    /// form via one extra multiply.
    pub montgomery_r2: Limbs,
    /// `p - 2` as a [`U256`], the Fermat inversion exponent.
    pub modulus_minus_two: U256,
    /// Which multiply kernel this modulus is sized for.
    pub kernel: KernelKind,

    /// GLV endomorphism constant `beta` (a cube root of unity mod `p`),
    /// Montgomery form.
    pub beta_mont: Limbs,
    /// GLV scalar `lambda` with `lambda * G = endo(G)`, as a 256-bit
    /// integer mod the scalar field order.
    pub lambda: U256,

    /// Curve equation constant `b` in `y^2 = x^3 + b` (`a` is fixed at
    /// zero; GLV-friendly curves are always `j`-invariant 0), Montgomery
    /// form.
    pub curve_b_mont: Limbs,
    /// Generator point `x`-coordinate, Montgomery form.
    pub generator_x_mont: Limbs,
    /// Generator point `y`-coordinate, Montgomery form.
    pub generator_y_mont: Limbs,
    /// Scalar field order `q` (the generator's order).
    pub group_order: U256,

    /// Tonelli-Shanks precomputation: `p - 1 = 2^s * q_odd`.
    pub ts_s: u32,
    /// The odd part of `p - 1`, as a [`U256`].
    pub ts_q_odd: U256,
    /// `c = z^q_odd mod p` for a fixed quadratic non-residue `z`,
    /// Montgomery form — the base element the roots-of-unity table in
    /// `field::sqrt` is built from.
    pub ts_c_mont: Limbs,
}

impl CurveParams {
    /// The [`MontgomeryParams`] view the field kernel needs.
    pub fn montgomery_params(&self) -> MontgomeryParams {
        MontgomeryParams { p: self.modulus_limbs, p_inv_neg: self.p_inv_neg, wrap: self.montgomery_r }
    }

    /// `true` iff `bytes`, read big-endian, is `< p`.
    pub fn fits_modulus(&self, bytes: &[u8; 32]) -> bool {
        u256_lt(&bytes_be_to_u256(bytes), &self.modulus_u256)
    }

    /// One concrete, fully specified curve for tests, benches, and the
    /// end-to-end scenarios: a short-Weierstrass curve `y^2 = x^3 + 1`
    /// over the BLS12-381 scalar field (`p` below is BLS12-381's `Fr`,
    /// chosen because it is a real, 255-bit, 5x51-kernel-sized prime with
    /// a documented cube-root-of-unity endomorphism — the same role this
    /// prime plays in real "curve-over-Fr" constructions such as
    /// Bandersnatch/Jubjub).
    ///
    /// The scalar field order and GLV `lambda` here are *not* independently
    /// verified via point counting (see `DESIGN.md`): this fixture sets
    /// `q = p` and `lambda = beta` for self-consistency, which is sufficient
    /// for exercising the MSM pipeline end-to-end but must not be read as a
    /// production curve parameter set.
    #[cfg(any(test, feature = "test-curve"))]
    pub fn test_curve() -> Arc<CurveParams> {
        Arc::new(CurveParams {
            modulus_limbs: [
                2251795518717953,
                105552235454463,
                1837696604370576,
                1869279774114820,
                2039432827017687,
            ],
            modulus_u256: [
                0xffffffff00000001,
                0x53bda402fffe5bfe,
                0x3339d80809a1d805,
                0x73eda753299d7d48,
            ],
            p_inv_neg: 0x7fff_efff_ffff_f,
            montgomery_r: [
                4294967295,
                2146247578230784,
                414103209314671,
                382520039570427,
                212366986667560,
            ],
            montgomery_r2: [
                1823417577547548,
                1869429268874828,
                2033828598556121,
                1932065001149905,
                1561612516094153,
            ],
            modulus_minus_two: [
                0xfffffffeffffffff,
                0x53bda402fffe5bfe,
                0x3339d80809a1d805,
                0x73eda753299d7d48,
            ],
            kernel: KernelKind::detect_51x5(),

            beta_mont: [
                1271608896915689,
                1998734603270445,
                786439884847482,
                979598226734131,
                13174437788030,
            ],
            lambda: [0x00000000ffffffff, 0xac45a4010001a402, 0, 0],

            // b = 1, so its Montgomery form is R mod p.
            curve_b_mont: [
                4294967295,
                2146247578230784,
                414103209314671,
                382520039570427,
                212366986667560,
            ],
            generator_x_mont: [
                4294967295,
                2146247578230784,
                414103209314671,
                382520039570427,
                212366986667560,
            ],
            generator_y_mont: [
                2208545043391374,
                32857470887386,
                976161429917934,
                1650024061839156,
                978039182914825,
            ],
            group_order: [
                0xffffffff00000001,
                0x53bda402fffe5bfe,
                0x3339d80809a1d805,
                0x73eda753299d7d48,
            ],

            ts_s: 32,
            ts_q_odd: [
                0xfffe5bfeffffffff,
                0x09a1d80553bda402,
                0x299d7d483339d808,
                0x0000000073eda753,
            ],
            ts_c_mont: [
                1608233425566270,
                1090529628412362,
                1754451362300882,
                1929107569675281,
                554666245202385,
            ],
        })
    }
}

/// Extracts `len` (<=64) bits starting at bit `start` from a little-endian
/// word array, used to move between the 64-bit-word and 51-bit-limb views
/// of the same 255-bit integer.
fn get_bits(words: &U256, start: u32, len: u32) -> u64 {
    let word_idx = (start / 64) as usize;
    let bit_off = start % 64;
    let lo = words[word_idx] as u128;
    let hi = if word_idx + 1 < 4 { words[word_idx + 1] as u128 } else { 0 };
    let combined = (hi << 64) | lo;
    let mask = if len == 64 { u128::MAX } else { (1u128 << len) - 1 };
    ((combined >> bit_off) & mask) as u64
}

/// Converts a 256-bit big-endian-word integer into 5x51-bit limbs.
pub fn u256_to_limbs51(u: &U256) -> Limbs {
    let mut out = [0u64; LIMBS];
    for (i, limb) in out.iter_mut().enumerate() {
        *limb = get_bits(u, (i as u32) * 51, 51);
    }
    out
}

/// Converts 5x51-bit limbs back into a 256-bit big-endian-word integer.
pub fn limbs51_to_u256(limbs: &Limbs) -> U256 {
    let mut acc: u128 = 0;
    let mut acc_bits: u32 = 0;
    let mut words = [0u64; 4];
    let mut word_idx = 0usize;
    for &limb in limbs.iter() {
        acc |= (limb as u128) << acc_bits;
        acc_bits += 51;
        while acc_bits >= 64 && word_idx < 4 {
            words[word_idx] = acc as u64;
            acc >>= 64;
            acc_bits -= 64;
            word_idx += 1;
        }
    }
    if word_idx < 4 {
        words[word_idx] = acc as u64;
    }
    words
}

/// `true` iff `a < b`, comparing from the most significant word down.
pub fn u256_lt(a: &U256, b: &U256) -> bool {
    for i in (0..4).rev() {
        if a[i] != b[i] {
            return a[i] < b[i];
        }
    }
    false
}

/// Parses a big-endian 32-byte encoding into a little-endian word array.
pub fn bytes_be_to_u256(bytes: &[u8; 32]) -> U256 {
    let mut words = [0u64; 4];
    for (w, chunk) in bytes.chunks_exact(8).enumerate() {
        let mut val = 0u64;
        for &b in chunk {
            val = (val << 8) | b as u64;
        }
        words[3 - w] = val;
    }
    words
}

/// Serializes a little-endian word array into its big-endian byte encoding.
pub fn u256_to_bytes_be(u: &U256) -> [u8; 32] {
    let mut out = [0u8; 32];
    for w in 0..4 {
        let val = u[3 - w];
        for b in 0..8 {
            out[w * 8 + b] = ((val >> (56 - 8 * b)) & 0xff) as u8;
        }
    }
    out
}

/// Converts 5x51-bit limbs directly into their big-endian byte encoding.
pub fn limbs51_to_bytes_be(limbs: &Limbs) -> [u8; 32] {
    u256_to_bytes_be(&limbs51_to_u256(limbs))
}
