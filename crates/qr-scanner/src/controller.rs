//! Scan session state machine.
//!
//! `Idle -> Requested -> Active -> Decoded`, with `Closed` reachable from any
//! state on cancel or unmount. The camera handle is owned by the controller
//! while `Active` and released on every exit path.


use std::sync::Arc;

use serde::Serialize;
use tokio::sync::mpsc;

use crate::backend::{DecodeEvent, DecodeSink, ScannerBackend, SurfaceId};
use crate::config::ScannerConfig;
use crate::{Result, ScannerError};

/// Lifecycle state of a scan session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanState {
    Idle,
    Requested,
    Active,
    Decoded,
    Closed,
}

/// One attempt to read a code with the camera.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanSession {
    state: ScanState,
    decoded_payload: Option<String>,
}

impl ScanSession {
    fn new() -> Self {
        Self {
            state: ScanState::Idle,
            decoded_payload: None,
        }
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Payload of the successful decode; only set in `Decoded`.
    pub fn decoded_payload(&self) -> Option<&str> {
        match self.state {
            ScanState::Decoded => self.decoded_payload.as_deref(),
            _ => None,
        }
    }
}

type SuccessFn = Box<dyn FnMut(String) + Send>;
type CloseFn = Box<dyn FnOnce() + Send>;

/// The two callbacks a caller hands to the controller.
pub struct ScanCallbacks {
    on_scan_success: SuccessFn,
    on_close: Option<CloseFn>,
}

impl ScanCallbacks {
    pub fn new(
        on_scan_success: impl FnMut(String) + Send + 'static,
        on_close: impl FnOnce() + Send + 'static,
    ) -> Self {
        Self {
            on_scan_success: Box::new(on_scan_success),
            on_close: Some(Box::new(on_close)),
        }
    }
}

/// Drives a single scan session against a [`ScannerBackend`].
pub struct ScanController<B: ScannerBackend> {
    backend: Arc<B>,
    surface: Option<SurfaceId>,
    config: ScannerConfig,
    callbacks: ScanCallbacks,
    session: ScanSession,
    initialized: bool,
    handle: Option<B::Handle>,
    events: Option<mpsc::UnboundedReceiver<DecodeEvent>>,
}

impl<B: ScannerBackend> ScanController<B> {
    /// Mount a controller in `Idle`. No camera access happens here.
    pub fn mount(
        backend: Arc<B>,
        surface: Option<SurfaceId>,
        config: ScannerConfig,
        callbacks: ScanCallbacks,
    ) -> Self {
        tracing::debug!(surface = ?surface, "Scanner mounted");
        Self {
            backend,
            surface,
            config,
            callbacks,
            session: ScanSession::new(),
            initialized: false,
            handle: None,
            events: None,
        }
    }

    pub fn session(&self) -> &ScanSession {
        &self.session
    }

    pub fn state(&self) -> ScanState {
        self.session.state
    }

    /// Whether the controller currently owns a camera handle.
    pub fn holds_camera(&self) -> bool {
        self.handle.is_some()
    }

    /// Record that the scanning region has been rendered.
    pub fn attach_surface(&mut self, surface: SurfaceId) {
        self.surface = Some(surface);
    }

    /// User opted in to camera use: `Idle -> Requested`.
    pub fn confirm_camera(&mut self) {
        if self.session.state == ScanState::Idle {
            self.session.state = ScanState::Requested;
            tracing::info!("Camera activation requested");
        }
    }

    /// Start the backend: `Requested -> Active`.
    ///
    /// Safe to call on every render; only the first call in `Requested`
    /// starts the camera. A start failure (permission denied, no device)
    /// leaves the session in `Requested`.
    pub async fn initialize(&mut self) -> Result<()> {
        match self.session.state {
            ScanState::Requested => {}
            ScanState::Closed => return Err(ScannerError::Closed),
            _ => return Ok(()),
        }
        if self.initialized {
            return Ok(());
        }

        let surface = self.surface.clone().ok_or(ScannerError::SurfaceMissing)?;
        self.initialized = true;

        let (tx, rx) = mpsc::unbounded_channel();
        match self
            .backend
            .start(&surface, &self.config, DecodeSink::new(tx))
            .await
        {
            Ok(handle) => {
                self.handle = Some(handle);
                self.events = Some(rx);
                self.session.state = ScanState::Active;
                tracing::info!(surface = %surface, fps = self.config.fps, "Scanner active");
                Ok(())
            }
            Err(e) => {
                self.initialized = false;
                tracing::warn!(error = %e, "Scanner failed to start");
                Err(e)
            }
        }
    }

    /// Wait for the first decoded payload: `Active -> Decoded`.
    ///
    /// Frames without a code are skipped. The success callback fires once,
    /// then the camera is released in the background.
    pub async fn wait_for_decode(&mut self) -> Result<String> {
        if self.session.state != ScanState::Active {
            return Err(ScannerError::NotActive);
        }
        let events = self.events.as_mut().ok_or(ScannerError::NotActive)?;

        let text = loop {
            match events.recv().await {
                Some(DecodeEvent::Decoded(text)) => break text,
                Some(DecodeEvent::Missed(reason)) => {
                    tracing::trace!(reason = %reason, "No code in frame");
                }
                None => {
                    return Err(ScannerError::Backend("decode stream ended".into()));
                }
            }
        };

        self.complete(text.clone());
        Ok(text)
    }

    fn complete(&mut self, text: String) {
        self.session.state = ScanState::Decoded;
        self.session.decoded_payload = Some(text.clone());
        self.events = None;

        tracing::info!(len = text.len(), "Code decoded");
        (self.callbacks.on_scan_success)(text);

        if let Some(handle) = self.handle.take() {
            tokio::spawn(release_handle(self.backend.clone(), handle));
        }
    }

    /// Explicit cancel: notify the caller, release the camera, `-> Closed`.
    pub async fn cancel(&mut self) {
        if self.session.state == ScanState::Closed {
            return;
        }
        if let Some(on_close) = self.callbacks.on_close.take() {
            on_close();
        }
        self.close().await;
    }

    /// Component teardown: release the camera, `-> Closed`.
    pub async fn unmount(mut self) {
        self.close().await;
    }

    async fn close(&mut self) {
        self.events = None;
        if let Some(handle) = self.handle.take() {
            release_handle(self.backend.clone(), handle).await;
        }
        self.session.state = ScanState::Closed;
        tracing::debug!("Scanner closed");
    }
}

impl<B: ScannerBackend> Drop for ScanController<B> {
    fn drop(&mut self) {
        let Some(handle) = self.handle.take() else {
            return;
        };
        match tokio::runtime::Handle::try_current() {
            Ok(rt) => {
                rt.spawn(release_handle(self.backend.clone(), handle));
            }
            Err(_) => {
                tracing::warn!("Scanner dropped outside a runtime; camera handle discarded");
            }
        }
    }
}

async fn release_handle<B: ScannerBackend>(backend: Arc<B>, handle: B::Handle) {
    if let Err(e) = backend.stop(handle).await {
        tracing::warn!(error = %e, "Failed to stop scanner");
    }
}
