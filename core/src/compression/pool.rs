//! compression/pool.rs
//! Lock-free pool of reusable native codec contexts.
//!
//! Design notes:
//! - Contexts are created lazily on `acquire` when the pool is empty, and the
//!   pool grows without bound under load. Memory is traded for no contention.
//! - `acquire` hands out a `PoolGuard`; dropping the guard recycles the context
//!   and returns it, so release happens on every path, errors included.
//! - The pool owns every idle context. `clear()` or dropping the pool destroys
//!   them deterministically through the native free calls.
use std::ops::{Deref, DerefMut};
use std::sync::atomic::{AtomicUsize, Ordering};

use crossbeam::queue::SegQueue;

use crate::types::CodecError;

/// Reusable native state held by a `ContextPool`.
pub trait CodecContext: Send + Sized {
    /// Short name used in logs and errors.
    const KIND: &'static str;

    fn create() -> Result<Self, CodecError>;

    /// Called on release, before the context goes back to the pool.
    fn recycle(&mut self) {}
}

pub struct ContextPool<T: CodecContext> {
    idle: SegQueue<T>,
    created: AtomicUsize,
}

impl<T: CodecContext> Default for ContextPool<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: CodecContext> ContextPool<T> {
    pub fn new() -> Self {
        Self { idle: SegQueue::new(), created: AtomicUsize::new(0) }
    }

    /// Pool with `count` contexts created up front.
    pub fn with_prewarmed(count: usize) -> Result<Self, CodecError> {
        let pool = Self::new();
        pool.prewarm(count)?;
        Ok(pool)
    }

    pub fn prewarm(&self, count: usize) -> Result<(), CodecError> {
        for _ in 0..count {
            let ctx = self.create_one()?;
            self.idle.push(ctx);
        }
        Ok(())
    }

    /// Take an idle context, creating one if none is available.
    pub fn acquire(&self) -> Result<PoolGuard<'_, T>, CodecError> {
        let ctx = match self.idle.pop() {
            Some(ctx) => ctx,
            None => self.create_one()?,
        };
        Ok(PoolGuard { pool: self, ctx: Some(ctx) })
    }

    /// Destroy all idle contexts. In-flight guards are unaffected and will
    /// return their context to the (now empty) pool.
    pub fn clear(&self) -> usize {
        let mut destroyed = 0;
        while let Some(ctx) = self.idle.pop() {
            drop(ctx);
            destroyed += 1;
        }
        if destroyed > 0 {
            tracing::debug!(kind = T::KIND, destroyed, "destroyed idle contexts");
        }
        destroyed
    }

    pub fn idle(&self) -> usize {
        self.idle.len()
    }

    /// Total contexts ever created by this pool.
    pub fn created(&self) -> usize {
        self.created.load(Ordering::Relaxed)
    }

    fn create_one(&self) -> Result<T, CodecError> {
        let ctx = T::create()?;
        let total = self.created.fetch_add(1, Ordering::Relaxed) + 1;
        tracing::debug!(kind = T::KIND, total, "created native context");
        Ok(ctx)
    }

    fn release(&self, mut ctx: T) {
        ctx.recycle();
        self.idle.push(ctx);
    }
}

/// Exclusive handle on a pooled context for the duration of one call.
pub struct PoolGuard<'a, T: CodecContext> {
    pool: &'a ContextPool<T>,
    ctx: Option<T>,
}

impl<T: CodecContext> Deref for PoolGuard<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        match &self.ctx {
            Some(ctx) => ctx,
            None => unreachable!("pooled context released twice"),
        }
    }
}

impl<T: CodecContext> DerefMut for PoolGuard<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        match &mut self.ctx {
            Some(ctx) => ctx,
            None => unreachable!("pooled context released twice"),
        }
    }
}

impl<T: CodecContext> Drop for PoolGuard<'_, T> {
    fn drop(&mut self) {
        if let Some(ctx) = self.ctx.take() {
            self.pool.release(ctx);
        }
    }
}
