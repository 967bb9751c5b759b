//! OS CSPRNG source with a small zeroized pool.

use zeroize::Zeroize;

use super::RandomSource;
use crate::{Error, Result};

const POOL_SIZE: usize = 256;

/// Random source backed by the operating system CSPRNG.
///
/// Bytes are pulled in `POOL_SIZE` chunks; consumed and leftover bytes are
/// wiped on refill and on drop. One instance per concurrent caller.
pub struct OsRandom {
    pool: [u8; POOL_SIZE],
    pos: usize,
}

impl OsRandom {
    pub fn new() -> Self {
        Self {
            pool: [0; POOL_SIZE],
            pos: POOL_SIZE,
        }
    }

    #[cold]
    fn refill(&mut self) -> Result<()> {
        self.pool.zeroize();
        getrandom::fill(&mut self.pool).map_err(|e| Error::RandomSource(e.to_string()))?;
        self.pos = 0;
        Ok(())
    }
}

impl Default for OsRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for OsRandom {
    #[inline]
    fn next_u64(&mut self) -> Result<u64> {
        if self.pos + 8 > POOL_SIZE {
            self.refill()?;
        }
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&self.pool[self.pos..self.pos + 8]);
        self.pool[self.pos..self.pos + 8].zeroize();
        self.pos += 8;
        let v = u64::from_le_bytes(bytes);
        bytes.zeroize();
        Ok(v)
    }
}

impl Drop for OsRandom {
    fn drop(&mut self) {
        self.pool.zeroize();
    }
}
