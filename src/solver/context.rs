//! Execution context for guess scoring
//!
//! Owns the worker pool used by the best-guess selector. The context is
//! passed explicitly; there is no global pool.

use crate::error::WordleError;
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::ops::Range;
use std::thread;

/// Worker cap on platforms limited to 64 waitable handles per process
pub const MAX_WINDOWS_WORKERS: usize = 61;

/// Chunks handed out per worker, to smooth out uneven guess costs
pub const CHUNKS_PER_WORKER: usize = 4;

/// Available parallelism, capped where the platform requires it
#[must_use]
pub fn default_worker_count() -> usize {
    let available = thread::available_parallelism().map_or(1, std::num::NonZeroUsize::get);
    cap_for_platform(available)
}

fn cap_for_platform(workers: usize) -> usize {
    if cfg!(windows) {
        workers.min(MAX_WINDOWS_WORKERS)
    } else {
        workers
    }
}

/// Worker count plus the pool that runs scoring chunks
///
/// With one worker there is no pool and scoring runs on the calling thread.
pub struct ScoringContext {
    workers: usize,
    pool: Option<ThreadPool>,
}

impl std::fmt::Debug for ScoringContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScoringContext")
            .field("workers", &self.workers)
            .field("parallel", &self.pool.is_some())
            .finish()
    }
}

impl ScoringContext {
    /// Score guesses one after another, in vocabulary order
    #[must_use]
    pub const fn sequential() -> Self {
        Self {
            workers: 1,
            pool: None,
        }
    }

    /// Context with `workers` scoring threads (`0` is treated as `1`)
    ///
    /// # Errors
    /// Returns `WorkerPool` if the threads cannot be spawned.
    pub fn new(workers: usize) -> Result<Self, WordleError> {
        let workers = cap_for_platform(workers.max(1));
        if workers == 1 {
            return Ok(Self::sequential());
        }

        let pool = ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("scorer-{i}"))
            .build()
            .map_err(|e| WordleError::WorkerPool(e.to_string()))?;

        Ok(Self {
            workers,
            pool: Some(pool),
        })
    }

    #[inline]
    #[must_use]
    pub const fn workers(&self) -> usize {
        self.workers
    }

    #[inline]
    #[must_use]
    pub const fn is_parallel(&self) -> bool {
        self.pool.is_some()
    }

    pub(crate) const fn pool(&self) -> Option<&ThreadPool> {
        self.pool.as_ref()
    }

    /// Split `0..total` into contiguous chunks, a few per worker
    #[must_use]
    pub fn chunk_ranges(&self, total: usize) -> Vec<Range<usize>> {
        if total == 0 {
            return Vec::new();
        }
        let chunks = (self.workers * CHUNKS_PER_WORKER).clamp(1, total);
        let size = total.div_ceil(chunks);
        (0..total)
            .step_by(size)
            .map(|start| start..(start + size).min(total))
            .collect()
    }
}
