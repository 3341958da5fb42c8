//! A seeded byte stream built on the crate's ChaCha20 block function.
//!
//! Same block-counter expansion `Csprng` used for OS-seeded randomness
//! (`rng::chacha20::block`, key + nonce + incrementing counter), but seeded
//! from a plain `u64` instead of the OS: this generator exists only to
//! produce reproducible test/bench inputs, not secrets, so there is nothing
//! here that needs unpredictability.

use super::chacha20::block;

/// A counter-mode byte stream seeded from a fixed `u64`.
pub struct DeterministicRng {
    key: [u8; 32],
    nonce: [u8; 12],
    counter: u32,
    buf: [u8; 64],
    pos: usize,
}

impl DeterministicRng {
    /// Builds a generator whose entire output is a pure function of `seed`.
    pub fn from_seed(seed: u64) -> Self {
        let mut key = [0u8; 32];
        key[0..8].copy_from_slice(&seed.to_le_bytes());
        DeterministicRng { key, nonce: [0u8; 12], counter: 0, buf: [0u8; 64], pos: 64 }
    }

    /// Fills `out` with the next bytes of the stream.
    pub fn fill_bytes(&mut self, out: &mut [u8]) {
        let mut written = 0;
        while written < out.len() {
            if self.pos == 64 {
                self.buf = block(&self.key, self.counter, &self.nonce);
                self.counter = self.counter.wrapping_add(1);
                self.pos = 0;
            }
            let take = (64 - self.pos).min(out.len() - written);
            out[written..written + take].copy_from_slice(&self.buf[self.pos..self.pos + take]);
            self.pos += take;
            written += take;
        }
    }
}
