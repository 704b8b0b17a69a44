//=========================================================================
// Asset Server
//=========================================================================
//
// Owns the asset cache and the loader worker.
//
// Request lifecycle:
//   request_image() ─┬─ cached    → LoadStatus::Cached  (no event)
//                    ├─ in flight → LoadStatus::InFlight (one event later)
//                    └─ new       → LoadStatus::Queued   (one event later)
//   poll() → AssetEvent::Loaded / AssetEvent::Failed per settled request
//
// Paths are resolved against the asset root. `..` segments are left to
// the filesystem, so locations outside the root are reachable.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::{debug, info, warn};

//=== Internal Dependencies ===============================================

use super::loader::{LoadRequest, LoadResult, LoaderWorker};
use super::{AssetKey, ImageAsset};
use crate::core::error::AssetError;

//=== LoadStatus ==========================================================

/// Outcome of a load request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    /// Already resident; nothing was queued and no event will follow.
    Cached,

    /// Queued for loading; an [`AssetEvent`] will follow.
    Queued,

    /// Another request for the same key is pending; its event covers this one.
    InFlight,
}

impl LoadStatus {
    /// Whether the caller must wait for an event before the key settles.
    pub fn is_pending(self) -> bool {
        !matches!(self, Self::Cached)
    }
}

//=== AssetEvent ==========================================================

/// Settled load, published on the message bus for one tick.
#[derive(Debug)]
pub enum AssetEvent {
    Loaded(AssetKey),
    Failed { key: AssetKey, error: AssetError },
}

impl AssetEvent {
    pub fn key(&self) -> &AssetKey {
        match self {
            Self::Loaded(key) | Self::Failed { key, .. } => key,
        }
    }
}

//=== AssetServer =========================================================

pub struct AssetServer {
    root: PathBuf,
    cache: HashMap<AssetKey, ImageAsset>,
    in_flight: HashSet<AssetKey>,
    worker: Option<LoaderWorker>,
    rejected: Vec<AssetEvent>,
}

impl AssetServer {
    /// Creates a server resolving paths against `root`.
    ///
    /// The loader thread is started on the first request.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            cache: HashMap::new(),
            in_flight: HashSet::new(),
            worker: None,
            rejected: Vec::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    //--- Requests ---------------------------------------------------------

    /// Queues an image for loading under `key`.
    ///
    /// A key that is already cached is not reloaded, even if `path` differs.
    pub fn request_image(&mut self, key: AssetKey, path: &Path) -> LoadStatus {
        if self.cache.contains_key(&key) {
            debug!(target: "assets", "{} already cached, skipping load", key);
            return LoadStatus::Cached;
        }

        if self.in_flight.contains(&key) {
            debug!(target: "assets", "{} already loading", key);
            return LoadStatus::InFlight;
        }

        let full_path = self.root.join(path);
        debug!(target: "assets", "Queueing {} from {}", key, full_path.display());

        let request = LoadRequest { key: key.clone(), path: full_path };
        let submitted = match self.ensure_worker() {
            Ok(worker) => worker
                .submit(request)
                .map_err(|_| AssetError::WorkerUnavailable("loader thread exited".into())),
            Err(error) => Err(error),
        };

        match submitted {
            Ok(()) => {
                self.in_flight.insert(key);
            }
            Err(error) => {
                self.rejected.push(AssetEvent::Failed { key, error });
                self.reset_worker("loader thread exited");
            }
        }

        LoadStatus::Queued
    }

    /// Places an already decoded image in the cache.
    pub fn insert(&mut self, key: AssetKey, asset: ImageAsset) {
        if self.cache.insert(key.clone(), asset).is_some() {
            warn!(target: "assets", "{} was already cached and has been replaced", key);
        }
    }

    //--- Completion -------------------------------------------------------

    /// Collects every request that settled since the last poll.
    pub fn poll(&mut self) -> Vec<AssetEvent> {
        let mut events = std::mem::take(&mut self.rejected);

        let results = self
            .worker
            .as_ref()
            .map(LoaderWorker::drain)
            .unwrap_or_default();

        for result in results {
            events.push(self.settle(result));
        }
        events
    }

    /// Like [`poll`](Self::poll), but waits up to `timeout` for the first
    /// result when loads are pending and nothing has settled yet.
    pub fn poll_timeout(&mut self, timeout: Duration) -> Vec<AssetEvent> {
        if self.rejected.is_empty() && !self.in_flight.is_empty() {
            let first = self.worker.as_ref().and_then(|worker| worker.recv_timeout(timeout));
            if let Some(result) = first {
                let mut events = vec![self.settle(result)];
                events.extend(self.poll());
                return events;
            }
        }
        self.poll()
    }

    //--- Queries ----------------------------------------------------------

    pub fn get(&self, key: &AssetKey) -> Option<&ImageAsset> {
        self.cache.get(key)
    }

    pub fn contains(&self, key: &AssetKey) -> bool {
        self.cache.contains_key(key)
    }

    /// Number of resident assets.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// True when no request is waiting to settle.
    pub fn is_idle(&self) -> bool {
        self.in_flight.is_empty() && self.rejected.is_empty()
    }

    //--- Internal Helpers -------------------------------------------------

    fn ensure_worker(&mut self) -> Result<&LoaderWorker, AssetError> {
        if self.worker.is_none() {
            let worker = LoaderWorker::spawn()
                .map_err(|err| AssetError::WorkerUnavailable(err.to_string()))?;
            self.worker = Some(worker);
        }

        self.worker
            .as_ref()
            .ok_or_else(|| AssetError::WorkerUnavailable("loader not started".into()))
    }

    /// Drops the worker so the next request spawns a fresh one.
    ///
    /// Requests still in flight on the old worker can no longer complete;
    /// each settles as [`AssetError::WorkerUnavailable`] on the next poll.
    fn reset_worker(&mut self, reason: &str) {
        self.worker = None;

        if !self.in_flight.is_empty() {
            warn!(
                target: "assets",
                "Loader reset with {} request(s) pending: {}",
                self.in_flight.len(),
                reason
            );
        }

        for key in self.in_flight.drain() {
            self.rejected.push(AssetEvent::Failed {
                key,
                error: AssetError::WorkerUnavailable(reason.to_string()),
            });
        }
    }

    fn settle(&mut self, LoadResult { key, result }: LoadResult) -> AssetEvent {
        self.in_flight.remove(&key);

        match result {
            Ok(asset) => {
                info!(
                    target: "assets",
                    "Loaded {} ({}x{})",
                    key,
                    asset.width(),
                    asset.height()
                );
                self.cache.insert(key.clone(), asset);
                AssetEvent::Loaded(key)
            }
            Err(error) => {
                warn!(target: "assets", "Failed to load {}: {}", key, error);
                AssetEvent::Failed { key, error }
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
