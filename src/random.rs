//! Secure random byte source
//!
//! Generators never reach for a global RNG. They take a `RandomSource`
//! handle, so production code passes `OsRng` and tests can pass a seeded
//! or failing generator.

use rand::{CryptoRng, RngCore};

use crate::error::{GenError, Result};

/// A cryptographically secure source of random bytes
pub trait RandomSource {
    /// Fill `buf` entirely with random bytes
    ///
    /// Fails with [`GenError::EntropyUnavailable`] rather than leaving the
    /// buffer partially written or zeroed.
    fn fill(&mut self, buf: &mut [u8]) -> Result<()>;
}

impl<R> RandomSource for R
where
    R: RngCore + CryptoRng + ?Sized,
{
    fn fill(&mut self, buf: &mut [u8]) -> Result<()> {
        self.try_fill_bytes(buf)
            .map_err(|e| GenError::EntropyUnavailable(e.to_string()))
    }
}

/// Draw a fixed-size array from the source
pub fn random_array<const N: usize>(rng: &mut (impl RandomSource + ?Sized)) -> Result<[u8; N]> {
    let mut out = [0u8; N];
    rng.fill(&mut out)?;
    Ok(out)
}
