//! Scanner configuration handed to the backend on start.
//!
//! Field names serialize in the camelCase shape browser scanning libraries
//! expect, so a backend can forward the struct as-is.

use serde::{Deserialize, Serialize};

/// Size of the detection box drawn over the video feed, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QrBox {
    pub width: u32,
    pub height: u32,
}

impl QrBox {
    pub fn square(side: u32) -> Self {
        Self {
            width: side,
            height: side,
        }
    }
}

/// Configuration options for a scan session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScannerConfig {
    /// Frames decoded per second.
    pub fps: u32,

    /// Region of the frame searched for a code.
    pub qrbox: QrBox,

    /// Width / height ratio of the video element.
    pub aspect_ratio: f32,

    /// Reopen the camera the user picked last time.
    pub remember_last_used_camera: bool,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            fps: 10,
            qrbox: QrBox::square(250),
            aspect_ratio: 1.0,
            remember_last_used_camera: true,
        }
    }
}

impl ScannerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the decode rate (minimum 1 fps).
    pub fn with_fps(mut self, fps: u32) -> Self {
        self.fps = fps.max(1);
        self
    }

    /// Builder: set a square detection box (minimum 50px).
    pub fn with_qrbox(mut self, side: u32) -> Self {
        self.qrbox = QrBox::square(side.max(50));
        self
    }

    /// Builder: set the video aspect ratio.
    ///
    /// # Panics
    /// Panics if the ratio is not a positive finite number.
    pub fn with_aspect_ratio(mut self, ratio: f32) -> Self {
        assert!(
            ratio.is_finite() && ratio > 0.0,
            "Aspect ratio must be a positive number, got {ratio}"
        );
        self.aspect_ratio = ratio;
        self
    }

    pub fn with_remember_last_used_camera(mut self, val: bool) -> Self {
        self.remember_last_used_camera = val;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ScannerConfig::default();
        assert_eq!(config.fps, 10);
        assert_eq!(config.qrbox, QrBox::square(250));
        assert!((config.aspect_ratio - 1.0).abs() < f32::EPSILON);
        assert!(config.remember_last_used_camera);
    }

    #[test]
    fn test_builder_enforces_minimums() {
        let config = ScannerConfig::new().with_fps(0).with_qrbox(10);
        assert_eq!(config.fps, 1);
        assert_eq!(config.qrbox, QrBox::square(50));
    }

    #[test]
    fn test_serializes_library_field_names() {
        let value = serde_json::to_value(ScannerConfig::default()).unwrap();
        assert_eq!(value["fps"], 10);
        assert_eq!(value["qrbox"]["width"], 250);
        assert_eq!(value["aspectRatio"], 1.0);
        assert_eq!(value["rememberLastUsedCamera"], true);
    }

    #[test]
    #[should_panic(expected = "Aspect ratio must be a positive number")]
    fn test_invalid_aspect_ratio() {
        ScannerConfig::new().with_aspect_ratio(0.0);
    }
}
