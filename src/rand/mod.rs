//! Secure random number generation.

mod os;

pub use os::OsRandom;

use crate::{Error, Result};

/// A source of uniformly distributed integers.
///
/// Every random decision that shapes a password goes through this trait,
/// including the shuffle, so tests can script the sequence.
pub trait RandomSource {
    /// Next 64 uniformly random bits.
    fn next_u64(&mut self) -> Result<u64>;

    /// Uniform integer in `[0, n)`.
    ///
    /// Rejection sampling on the top of the `u64` range keeps the result
    /// free of modulo bias.
    fn uniform_int(&mut self, n: usize) -> Result<usize> {
        if n == 0 {
            return Err(Error::RandomSource("range must be positive".into()));
        }
        let n = n as u64;
        let zone = u64::MAX - (u64::MAX % n);
        loop {
            let v = self.next_u64()?;
            if v < zone {
                return Ok((v % n) as usize);
            }
        }
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_u64(&mut self) -> Result<u64> {
        (**self).next_u64()
    }

    fn uniform_int(&mut self, n: usize) -> Result<usize> {
        (**self).uniform_int(n)
    }
}

/// Fisher-Yates shuffle, one secure draw per swap.
pub fn shuffle<T, R: RandomSource + ?Sized>(items: &mut [T], rng: &mut R) -> Result<()> {
    for i in (1..items.len()).rev() {
        let j = rng.uniform_int(i + 1)?;
        items.swap(i, j);
    }
    Ok(())
}

/// Pick one element uniformly.
pub fn choose<T: Copy, R: RandomSource + ?Sized>(items: &[T], rng: &mut R) -> Result<T> {
    let idx = rng.uniform_int(items.len())?;
    Ok(items[idx])
}
