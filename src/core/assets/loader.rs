//=========================================================================
// Loader Worker
//=========================================================================
//
// Background thread that reads and decodes image files.
//
// Requests and results travel over unbounded crossbeam channels. Dropping
// the worker closes the request channel; the thread finishes the file it
// is on and exits, and the drop joins it.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{unbounded, Receiver, Sender};
use log::{debug, error, trace};

//=== Internal Dependencies ===============================================

use super::{AssetKey, ImageAsset};
use crate::core::error::AssetError;

//=== Messages ============================================================

pub(super) struct LoadRequest {
    pub key: AssetKey,
    pub path: PathBuf,
}

pub(super) struct LoadResult {
    pub key: AssetKey,
    pub result: Result<ImageAsset, AssetError>,
}

//=== LoaderWorker ========================================================

pub(super) struct LoaderWorker {
    requests: Option<Sender<LoadRequest>>,
    results: Receiver<LoadResult>,
    handle: Option<JoinHandle<()>>,
}

impl LoaderWorker {
    pub fn spawn() -> io::Result<Self> {
        let (request_tx, request_rx) = unbounded::<LoadRequest>();
        let (result_tx, result_rx) = unbounded::<LoadResult>();

        let handle = thread::Builder::new()
            .name("asset-loader".into())
            .spawn(move || run(request_rx, result_tx))?;

        debug!(target: "assets", "Loader thread started");

        Ok(Self {
            requests: Some(request_tx),
            results: result_rx,
            handle: Some(handle),
        })
    }

    /// Hands a request to the thread. Gives it back if the thread is gone.
    pub fn submit(&self, request: LoadRequest) -> Result<(), LoadRequest> {
        match &self.requests {
            Some(sender) => sender.send(request).map_err(|err| err.into_inner()),
            None => Err(request),
        }
    }

    /// Drains every result that is ready without blocking.
    pub fn drain(&self) -> Vec<LoadResult> {
        self.results.try_iter().collect()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<LoadResult> {
        self.results.recv_timeout(timeout).ok()
    }
}

impl Drop for LoaderWorker {
    fn drop(&mut self) {
        // Closing the request channel ends the worker loop
        self.requests.take();

        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                error!(target: "assets", "Loader thread panicked");
            }
        }
    }
}

//=== Worker Loop =========================================================

fn run(requests: Receiver<LoadRequest>, results: Sender<LoadResult>) {
    for LoadRequest { key, path } in requests.iter() {
        trace!(target: "assets", "Decoding {} from {}", key, path.display());
        let result = decode_image(&path);

        if results.send(LoadResult { key, result }).is_err() {
            break;
        }
    }

    debug!(target: "assets", "Loader thread exiting");
}

pub(super) fn decode_image(path: &Path) -> Result<ImageAsset, AssetError> {
    let bytes = fs::read(path).map_err(|source| AssetError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let decoded = image::load_from_memory(&bytes).map_err(|source| AssetError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(ImageAsset::new(decoded.to_rgba8()))
}

//=========================================================================
// Unit Tests
//=========================================================================
