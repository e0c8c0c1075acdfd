//! Mount Scope
//!
//! Binds in-flight requests to the lifetime of a mounted view. When the view
//! unmounts, every request started through the scope is aborted and any
//! result that still makes it back is discarded.

use futures_util::future::{AbortHandle, Abortable};
use std::collections::HashMap;
use std::future::Future;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;

/// The view unmounted before its request completed
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("view unmounted before the request completed")]
pub struct Cancelled;

/// Cancellation scope for one view mount
///
/// Cloning yields a handle to the same scope.
#[derive(Debug, Clone, Default)]
pub struct MountScope {
    inner: Arc<ScopeInner>,
}

#[derive(Debug, Default)]
struct ScopeInner {
    unmounted: AtomicBool,
    next_id: AtomicU64,
    in_flight: Mutex<HashMap<u64, AbortHandle>>,
}

impl ScopeInner {
    fn in_flight(&self) -> MutexGuard<'_, HashMap<u64, AbortHandle>> {
        self.in_flight.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Drops the request's abort handle once it settles or is dropped
struct Registration<'a> {
    inner: &'a ScopeInner,
    id: u64,
}

impl Drop for Registration<'_> {
    fn drop(&mut self) {
        self.inner.in_flight().remove(&self.id);
    }
}

impl MountScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_mounted(&self) -> bool {
        !self.inner.unmounted.load(Ordering::Acquire)
    }

    /// Run `fut` inside the scope
    ///
    /// Returns [`Cancelled`] if the scope was already unmounted, was
    /// unmounted while `fut` was pending, or was unmounted in the same tick
    /// the result arrived.
    pub async fn run<F: Future>(&self, fut: F) -> Result<F::Output, Cancelled> {
        if !self.is_mounted() {
            return Err(Cancelled);
        }

        let (handle, abort_registration) = AbortHandle::new_pair();
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        self.inner.in_flight().insert(id, handle);
        let _registration = Registration {
            inner: &self.inner,
            id,
        };

        let output = Abortable::new(fut, abort_registration)
            .await
            .map_err(|_| Cancelled)?;

        if self.is_mounted() {
            Ok(output)
        } else {
            Err(Cancelled)
        }
    }

    /// Number of requests currently running in the scope
    pub fn in_flight(&self) -> usize {
        self.inner.in_flight().len()
    }

    /// End the mount: abort everything in flight
    pub fn unmount(&self) {
        self.inner.unmounted.store(true, Ordering::Release);

        let handles: Vec<AbortHandle> = self
            .inner
            .in_flight()
            .drain()
            .map(|(_, handle)| handle)
            .collect();

        if !handles.is_empty() {
            tracing::debug!(count = handles.len(), "Aborting in-flight requests");
        }
        for handle in handles {
            handle.abort();
        }
    }
}
