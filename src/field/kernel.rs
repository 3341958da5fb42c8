//! Runtime selection between the FMA and integer Montgomery kernels.
//!
//! The choice is made once, in [`crate::params::CurveParams`] construction,
//! and stored as a plain enum rather than a trait object so the multiply
//! call inside the hot bucket-accumulation loop stays monomorphic — resolve
//! the host capability once via `cfg`/feature detection and never re-check
//! it per call.

use super::limb51::{self, Limbs, MontgomeryParams};

/// Which multiply routine a [`crate::params::CurveParams`] should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KernelKind {
    /// 5x51-bit unsaturated limbs, FMA-accelerated multiply.
    Fma51x5,
    /// 5x51-bit unsaturated limbs, integer schoolbook multiply.
    ///
    /// Bit-identical to `Fma51x5`; used on hosts without a fast FMA unit
    /// and as the reference kernel in property tests.
    Integer51x5,
}

impl KernelKind {
    /// Picks the fastest kernel available on the current host for a
    /// 5x51-limb-sized modulus, falling back to the portable integer
    /// kernel when the CPU (or target) lacks FMA.
    pub fn detect_51x5() -> Self {
        #[cfg(target_arch = "x86_64")]
        {
            if std::is_x86_64_feature_detected!("fma") {
                return KernelKind::Fma51x5;
            }
        }
        KernelKind::Integer51x5
    }

    /// Montgomery-multiplies `x` and `y` under this kernel.
    pub fn mul(self, params: &MontgomeryParams, x: &Limbs, y: &Limbs) -> Limbs {
        match self {
            KernelKind::Fma51x5 => limb51::mul_fma(params, x, y),
            KernelKind::Integer51x5 => limb51::mul_fallback(params, x, y),
        }
    }
}
