//! Multi-scalar multiplication engine for large-prime elliptic curves.
//!
//! Given `N` scalars and `N` curve points, computes `sum(s_i * G_i)` using
//! a Pippenger/bucket-method pipeline: a Montgomery multiplication kernel
//! over 5x51-bit limbs (`field`), batched affine curve arithmetic
//! (`curve`), and a sort-then-reduce MSM pipeline (`msm`) staged across a
//! fixed worker pool (`threadpool`). [`engine::Engine`] is the entry point.
//!
//! # Module overview
//!
//! - `field` — Montgomery multiplication kernel (FMA/integer), field
//!   add/sub/inverse/sqrt.
//! - `scalar` — GLV endomorphism decomposition and signed-window recoding.
//! - `curve` — affine/Jacobian short-Weierstrass points and batch addition.
//! - `msm` — the sort/prepare, bucket accumulation, reduction, and combine
//!   stages that turn (scalars, points) into one curve point.
//! - `arena` — index-based storage for points/field elements.
//! - `params` — curve parameter sets (modulus, GLV constants, generator).
//! - `threadpool` — the fixed worker pool phases run inside.
//! - `engine` — the public `Engine` API.
//! - `bigint` — 256-bit integer arithmetic backing scalar/GLV operations.
//! - `error` — the engine's error taxonomy.
//! - `log` — per-phase timing returned from each `msm` call.
//!
//! # Design goals
//!
//! - No dynamic curve registry: `Engine::create` takes a concrete
//!   `CurveParams` value.
//! - No constant-time guarantees; this is an MSM engine, not a
//!   side-channel-resistant signing primitive.
//! - Bulk-synchronous parallelism only: phases are separated by a full
//!   barrier, never by ad-hoc async tasks.

pub(crate) mod rng;

pub mod arena;
pub mod bigint;
pub mod curve;
pub mod engine;
pub mod error;
pub mod field;
pub mod log;
pub mod msm;
pub mod params;
pub mod scalar;
pub mod threadpool;

pub use engine::{Engine, MsmOptions};
pub use error::EngineError;
pub use log::MsmLog;
