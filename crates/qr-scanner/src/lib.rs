//! Camera QR/barcode scanner lifecycle.
//!
//! Wraps a one-shot scanning backend in a session state machine that defers
//! the camera permission prompt until the user opts in, starts the camera at
//! most once per mounted controller, hands the first decoded payload to the
//! caller and always releases the camera afterwards.

pub mod backend;
pub mod config;
pub mod controller;

// Re-exports for convenience
pub use backend::{DecodeEvent, DecodeSink, ScannerBackend, SurfaceId};
pub use config::{QrBox, ScannerConfig};
pub use controller::{ScanCallbacks, ScanController, ScanSession, ScanState};

/// Errors that can occur while driving a scan session.
#[derive(Debug, thiserror::Error)]
pub enum ScannerError {
    #[error("Scanning surface is not rendered")]
    SurfaceMissing,

    #[error("Camera permission denied")]
    PermissionDenied,

    #[error("Camera unavailable: {0}")]
    CameraUnavailable(String),

    #[error("Scanner backend error: {0}")]
    Backend(String),

    #[error("Scan session is not active")]
    NotActive,

    #[error("Scan session already closed")]
    Closed,
}

/// Result type alias for scanner operations.
pub type Result<T> = std::result::Result<T, ScannerError>;
