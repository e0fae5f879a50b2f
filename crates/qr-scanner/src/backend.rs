//! Scanning backend capability.
//!
//! The camera library is a black box behind [`ScannerBackend`]: `start` binds
//! it to a rendered surface and returns an opaque handle, `stop` releases the
//! camera. Decode results flow back through a [`DecodeSink`].

use std::fmt;
use std::future::Future;

use tokio::sync::mpsc;

use crate::Result;
use crate::config::ScannerConfig;

/// Element id the scanner UI renders into by default.
pub const DEFAULT_SURFACE_ID: &str = "qr-reader";

/// Identifier of the on-screen region the backend renders live video into.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SurfaceId(String);

impl SurfaceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SurfaceId {
    fn default() -> Self {
        Self::new(DEFAULT_SURFACE_ID)
    }
}

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One result from the backend's decode loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeEvent {
    /// A code was read from the frame.
    Decoded(String),
    /// No code found in the frame. Expected on most frames.
    Missed(String),
}

/// Channel the backend reports decode results on.
#[derive(Debug, Clone)]
pub struct DecodeSink {
    tx: mpsc::UnboundedSender<DecodeEvent>,
}

impl DecodeSink {
    pub(crate) fn new(tx: mpsc::UnboundedSender<DecodeEvent>) -> Self {
        Self { tx }
    }

    /// Report a decoded payload. Returns `false` once the session is gone.
    pub fn decoded(&self, text: impl Into<String>) -> bool {
        self.tx.send(DecodeEvent::Decoded(text.into())).is_ok()
    }

    /// Report a frame without a readable code.
    pub fn missed(&self, reason: impl Into<String>) -> bool {
        self.tx.send(DecodeEvent::Missed(reason.into())).is_ok()
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

/// A camera-based code scanner.
///
/// `start` may prompt the user for camera permission; a denial is reported as
/// an error and no handle is produced.
pub trait ScannerBackend: Send + Sync + 'static {
    /// Opaque handle owning the camera stream.
    type Handle: Send + 'static;

    fn start(
        &self,
        surface: &SurfaceId,
        config: &ScannerConfig,
        sink: DecodeSink,
    ) -> impl Future<Output = Result<Self::Handle>> + Send;

    fn stop(&self, handle: Self::Handle) -> impl Future<Output = Result<()>> + Send;
}
