//! Randomness capability
//!
//! RAND must come from a cryptographically secure source in
//! production, but tests need deterministic challenges. The source is
//! therefore an injectable trait rather than an ambient call.

use rand::RngCore;

use crate::error::{MilenageError, MilenageResult};

/// A source of random bytes for RAND generation.
pub trait RandSource {
    /// Fill `buf` entirely with random bytes.
    fn fill(&mut self, buf: &mut [u8]) -> MilenageResult<()>;
}

/// Default secure random source backed by the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRand;

impl RandSource for OsRand {
    fn fill(&mut self, buf: &mut [u8]) -> MilenageResult<()> {
        rand::thread_rng()
            .try_fill_bytes(buf)
            .map_err(|e| MilenageError::RandomUnavailable(e.to_string()))
    }
}
