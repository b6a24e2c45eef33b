//! Remote snapshot synchronization.
//!
//! Client-side (`browser`): real HTTP calls via `gloo-net`.
//! Native builds: push is a no-op and pull reports the store as unavailable,
//! so the session logic runs and tests without a network.
//!
//! ERROR HANDLING
//! ==============
//! Sync is best-effort. A failed push or pull is logged and dropped: no retry,
//! nothing shown to the user, queue state untouched. Pushes are never awaited
//! by the caller, so several may be in flight and complete out of order; the
//! store keeps whichever completes last. [`PushTracker`] detects when an older
//! snapshot completes after a newer one so that case is at least visible in
//! the console.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "sync_test.rs"]
mod sync_test;

/// Why a push or pull did not complete.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyncError {
    #[error("no remote endpoint configured")]
    NoEndpoint,
    #[error("request failed: {0}")]
    Request(String),
    #[error("remote store responded with status {0}")]
    Status(u16),
    #[error("failed to read response body: {0}")]
    Body(String),
    #[error("network is not available in this build")]
    Unavailable,
}

/// Ordering of a completed push relative to the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushCompletion {
    /// Newest completion so far; the store now holds this snapshot or a newer one.
    Current,
    /// A newer push already completed; the store may now hold an older snapshot.
    Stale { newest_completed: u64 },
}

/// Sequence numbers for pushes, by send order.
#[derive(Debug, Clone, Default)]
pub struct PushTracker {
    sent: u64,
    newest_completed: u64,
}

impl PushTracker {
    /// Allocate the sequence number for a push about to be sent.
    pub fn begin(&mut self) -> u64 {
        self.sent += 1;
        self.sent
    }

    /// Record that push `seq` completed.
    pub fn complete(&mut self, seq: u64) -> PushCompletion {
        if seq < self.newest_completed {
            return PushCompletion::Stale { newest_completed: self.newest_completed };
        }
        self.newest_completed = seq;
        PushCompletion::Current
    }

    /// Number of pushes started.
    #[must_use]
    pub fn sent(&self) -> u64 {
        self.sent
    }
}

/// Pushes and pulls queue snapshots for one endpoint.
#[derive(Debug, Clone, Default)]
pub struct SyncClient {
    endpoint: String,
    tracker: std::rc::Rc<std::cell::RefCell<PushTracker>>,
}

impl SyncClient {
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into(), tracker: std::rc::Rc::default() }
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Whether an endpoint was configured. Without one, pushes are skipped
    /// and pulls return [`SyncError::NoEndpoint`].
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.endpoint.is_empty()
    }

    /// Number of pushes started so far.
    #[must_use]
    pub fn pushes_sent(&self) -> u64 {
        self.tracker.borrow().sent()
    }

    /// Send `snapshot` to the store in the background. Never blocks and never
    /// reports failure to the caller.
    pub fn push(&self, snapshot: String) {
        if !self.is_configured() {
            log::debug!("skipping push: {}", SyncError::NoEndpoint);
            return;
        }
        let seq = self.tracker.borrow_mut().begin();
        #[cfg(feature = "browser")]
        {
            let endpoint = self.endpoint.clone();
            let tracker = std::rc::Rc::clone(&self.tracker);
            wasm_bindgen_futures::spawn_local(async move {
                match post_snapshot(&endpoint, snapshot).await {
                    Ok(()) => {
                        if let PushCompletion::Stale { newest_completed } = tracker.borrow_mut().complete(seq) {
                            log::debug!("push #{seq} completed after newer push #{newest_completed}");
                        }
                    }
                    Err(err) => log::warn!("push #{seq} failed: {err}"),
                }
            });
        }
        #[cfg(not(feature = "browser"))]
        {
            log::trace!("push #{seq} dropped ({} bytes): {}", snapshot.len(), SyncError::Unavailable);
        }
    }

    /// Fetch the stored snapshot text.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError`] when no endpoint is configured, the request fails,
    /// the store answers with a non-OK status, or the body cannot be read.
    pub async fn pull(&self) -> Result<String, SyncError> {
        if !self.is_configured() {
            return Err(SyncError::NoEndpoint);
        }
        #[cfg(feature = "browser")]
        {
            let resp = gloo_net::http::Request::get(&self.endpoint)
                .send()
                .await
                .map_err(|e| SyncError::Request(e.to_string()))?;
            if !resp.ok() {
                return Err(SyncError::Status(resp.status()));
            }
            resp.text().await.map_err(|e| SyncError::Body(e.to_string()))
        }
        #[cfg(not(feature = "browser"))]
        {
            Err(SyncError::Unavailable)
        }
    }
}

#[cfg(feature = "browser")]
async fn post_snapshot(endpoint: &str, snapshot: String) -> Result<(), SyncError> {
    let resp = gloo_net::http::Request::post(endpoint)
        .header("Content-Type", "text/plain")
        .body(snapshot)
        .map_err(|e| SyncError::Request(e.to_string()))?
        .send()
        .await
        .map_err(|e| SyncError::Request(e.to_string()))?;
    if !resp.ok() {
        return Err(SyncError::Status(resp.status()));
    }
    Ok(())
}
