//! Reusable scratch state for the pooled codec.
//!
//! A [`ScratchPool`] is a mutex-guarded free list. [`ScratchPool::acquire`]
//! hands out a guard that derefs to [`Scratch`]; dropping the guard wipes the
//! scratch and puts it back, so it is returned on every path out of a call,
//! early returns and panics included. A scratch that grew past
//! [`MAX_RETAINED_BYTES`] is wiped and freed instead of kept.

use num_bigint::BigUint;
use num_traits::Zero;
use std::ops::{Deref, DerefMut};
use std::sync::{Mutex, PoisonError};

/// Idle scratch buffers kept by the shared pool.
pub const DEFAULT_MAX_IDLE: usize = 64;

/// Largest buffer, in bytes, a released scratch may hold and still go back
/// on the free list.
pub const MAX_RETAINED_BYTES: usize = 32 * 1024;

/// Scratch buffers borrowed by one encode or decode call.
#[derive(Debug, Default)]
pub struct Scratch {
    /// Decode accumulator
    pub acc: BigUint,
    /// Encode dividend as big-endian `u32` limbs
    pub limbs: Vec<u32>,
    /// Encode digit buffer, filled from the back
    pub digits: Vec<u8>,
}

impl Scratch {
    /// Zeroes all contents while keeping the allocations.
    fn reset(&mut self) {
        self.acc.set_zero();
        self.limbs.fill(0);
        self.limbs.clear();
        self.digits.fill(0);
        self.digits.clear();
    }

    /// Size of the largest buffer held, in bytes. The accumulator is
    /// measured by its current value.
    fn retained_bytes(&self) -> usize {
        let acc = usize::try_from(self.acc.bits().div_ceil(8)).unwrap_or(usize::MAX);
        let limbs = self.limbs.capacity().saturating_mul(size_of::<u32>());
        acc.max(limbs).max(self.digits.capacity())
    }

    fn is_clear(&self) -> bool {
        self.acc.is_zero() && self.limbs.is_empty() && self.digits.is_empty()
    }
}

/// Thread-safe free list of [`Scratch`] buffers.
#[derive(Debug)]
pub struct ScratchPool {
    free: Mutex<Vec<Scratch>>,
    max_idle: usize,
}

/// The pool used by [`encode_pooled`](super::pooled::encode_pooled) and
/// [`decode_pooled`](super::pooled::decode_pooled).
pub static SHARED_POOL: ScratchPool = ScratchPool::new(DEFAULT_MAX_IDLE);

impl ScratchPool {
    /// Creates an empty pool that keeps at most `max_idle` buffers around.
    pub const fn new(max_idle: usize) -> Self {
        ScratchPool {
            free: Mutex::new(Vec::new()),
            max_idle,
        }
    }

    /// Takes a scratch buffer from the free list, or makes a new one.
    pub fn acquire(&self) -> PooledScratch<'_> {
        let scratch = self
            .free
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop()
            .unwrap_or_default();
        debug_assert!(scratch.is_clear());

        PooledScratch {
            pool: self,
            scratch,
        }
    }

    /// Number of buffers currently waiting in the free list.
    pub fn idle(&self) -> usize {
        self.free
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn release(&self, mut scratch: Scratch) {
        let oversized = scratch.retained_bytes() > MAX_RETAINED_BYTES;
        scratch.reset();
        if oversized {
            return;
        }

        // A poisoned lock only means another thread panicked while holding
        // it; the free list itself is still a valid Vec of wiped buffers.
        let mut free = self.free.lock().unwrap_or_else(PoisonError::into_inner);
        if free.len() < self.max_idle {
            free.push(scratch);
        }
    }
}

impl Default for ScratchPool {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_IDLE)
    }
}

/// Scoped loan of a [`Scratch`]; returns it to the pool on drop.
#[derive(Debug)]
pub struct PooledScratch<'a> {
    pool: &'a ScratchPool,
    scratch: Scratch,
}

impl Deref for PooledScratch<'_> {
    type Target = Scratch;

    fn deref(&self) -> &Scratch {
        &self.scratch
    }
}

impl DerefMut for PooledScratch<'_> {
    fn deref_mut(&mut self) -> &mut Scratch {
        &mut self.scratch
    }
}

impl Drop for PooledScratch<'_> {
    fn drop(&mut self) {
        self.pool.release(std::mem::take(&mut self.scratch));
    }
}
