//! Deterministic randomness for tests, benches, and `Engine`'s auxiliary
//! point/scalar generators. These utilities are out of scope for the core
//! multiplication engine, so this intentionally seeds from a
//! caller-supplied value rather than OS entropy — reproducible beats
//! unpredictable for repeatable end-to-end scenarios.

pub(crate) mod chacha20;
pub mod deterministic;
