//! Uniform random draws backed by the OS entropy source.

use crate::error::Error;

/// A source of uniformly distributed integers in a closed range.
///
/// Abstracted as a trait so tests can substitute a scripted sequence
/// without touching the sampler's control flow.
pub trait RandomSource {
    /// Draw a value uniformly from `[min, max]`, inclusive on both ends.
    fn pick(&mut self, min: usize, max: usize) -> Result<usize, Error>;
}

/// Production source: the OS CSPRNG, one 64-bit word per draw attempt.
/// Stateless — every draw is independent.
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn pick(&mut self, min: usize, max: usize) -> Result<usize, Error> {
        if min > max {
            return Err(Error::InvalidRange);
        }
        if min == max {
            // Degenerate range: no entropy consumed.
            return Ok(min);
        }

        let span = (max - min) as u64 + 1;
        // 2^64 mod span: the count of top-end words that would skew the
        // distribution if reduced naively. Rejecting them removes modulo bias.
        let excess = (u64::MAX % span + 1) % span;

        loop {
            let word = next_word()?;
            if excess == 0 || word <= u64::MAX - excess {
                return Ok(min + (word % span) as usize);
            }
        }
    }
}

fn next_word() -> Result<u64, Error> {
    let mut buf = [0u8; 8];
    getrandom::fill(&mut buf).map_err(Error::RandomnessUnavailable)?;
    Ok(u64::from_ne_bytes(buf))
}
