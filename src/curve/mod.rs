//! Short-Weierstrass curve points: affine storage, Jacobian accumulation,
//! and batch-friendly affine addition between the two.

pub mod affine;
pub mod batch;
pub mod projective;

pub use affine::PointAffine;
pub use projective::PointProjective;
