//! Configuration for the threaded multiplier.

use std::num::NonZeroUsize;
use std::thread;

use crate::error::{Error, Result};

/// Configuration for row-partitioned multiplication.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MultiplyConfig {
    /// Number of worker threads spawned per multiplication.
    pub workers: NonZeroUsize,
}

impl MultiplyConfig {
    /// Uses exactly `workers` threads per call.
    pub fn with_workers(workers: usize) -> Result<Self> {
        let workers = NonZeroUsize::new(workers).ok_or(Error::InvalidWorkerCount)?;
        Ok(Self { workers })
    }
}

impl Default for MultiplyConfig {
    /// One worker per available hardware thread, or one if that cannot be
    /// determined.
    fn default() -> Self {
        Self {
            workers: thread::available_parallelism().unwrap_or(NonZeroUsize::MIN),
        }
    }
}
