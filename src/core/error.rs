//=========================================================================
// Error Types
//=========================================================================
//
// Host-side error taxonomy. Scenes never see these directly: asset
// failures reach them (if they care) as `AssetEvent::Failed` messages.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::path::PathBuf;

use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::core::platform_bridge::PlatformError;

//=== AssetError ==========================================================

/// Failure to bring an asset into the cache.
#[derive(Debug, Error)]
pub enum AssetError {
    /// The file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The bytes were read but are not a supported image.
    #[error("failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The loader thread could not be started or has gone away.
    #[error("asset loader unavailable: {0}")]
    WorkerUnavailable(String),
}

//=== EngineError =========================================================

/// Fatal runtime errors surfaced by [`crate::Engine::run`].
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error("failed to spawn core thread: {0}")]
    CoreThreadSpawn(#[source] std::io::Error),

    #[error("core thread panicked")]
    CoreThreadPanicked,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_names_the_path() {
        let err = AssetError::Io {
            path: PathBuf::from("public/assets/platform.png"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };

        let message = err.to_string();
        assert!(message.contains("public/assets/platform.png"), "{message}");
        assert!(message.contains("not found"), "{message}");
    }

    #[test]
    fn platform_errors_pass_through() {
        let err = EngineError::from(PlatformError::EventLoopCreation("no display".into()));
        assert_eq!(err.to_string(), "Event loop creation failed: no display");
    }
}
