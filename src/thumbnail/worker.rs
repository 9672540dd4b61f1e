//! Background worker for frame extraction
//!
//! Processes extraction requests on a dedicated thread and sends results
//! back via channels. The worker owns its loader, so a decoder with a single
//! seek position is never shared between requests.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

/// Result of a background load operation
pub struct LoadResult<K, V> {
    /// The request that was processed, returned as its tag
    pub key: K,
    /// The loaded value, or None if loading failed
    pub value: Option<V>,
}

/// Background worker loop that processes load requests.
///
/// Receives keys from `request_rx`, calls `loader` for each key in arrival
/// order, and sends `LoadResult` back via `result_tx`. Exits when the
/// request channel is closed (all senders dropped).
pub fn worker_loop<K, V>(
    request_rx: Receiver<K>,
    result_tx: Sender<LoadResult<K, V>>,
    mut loader: impl FnMut(&K) -> Option<V>,
) {
    while let Ok(key) = request_rx.recv() {
        let value = loader(&key);
        // Ignore send errors (the cache may have been dropped)
        let _ = result_tx.send(LoadResult { key, value });
    }
}

/// Spawn a named worker thread running [`worker_loop`].
///
/// # Returns
/// The request sender and result receiver, or `None` if the thread could
/// not be started
pub fn spawn_worker<K, V, F>(
    name: &str,
    loader: F,
) -> Option<(Sender<K>, Receiver<LoadResult<K, V>>)>
where
    K: Send + 'static,
    V: Send + 'static,
    F: FnMut(&K) -> Option<V> + Send + 'static,
{
    let (request_tx, request_rx) = mpsc::channel();
    let (result_tx, result_rx) = mpsc::channel();

    match thread::Builder::new()
        .name(name.to_string())
        .spawn(move || worker_loop(request_rx, result_tx, loader))
    {
        Ok(_) => Some((request_tx, result_rx)),
        Err(e) => {
            tracing::warn!(error = %e, "failed to start {} worker", name);
            None
        }
    }
}
