//! Stage two of capture: composite a camera frame with the rasterized
//! overlay and encode the result as a single PNG artifact.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::Utc;
use image::{ImageFormat, imageops};

use crate::capture::frame::CameraFrame;
use crate::capture::overlay::rasterize_overlay;
use crate::config::CaptureConfig;
use crate::error::{CompassError, Result};
use crate::face::VisualDescriptor;

const DATA_URL_PREFIX: &str = "data:image/png;base64,";

pub fn timestamp_millis() -> u64 {
    Utc::now().timestamp_millis() as u64
}

/// The single persisted capture: lossless PNG bytes plus a logical
/// timestamp. Exactly one artifact is retained by the session at a time;
/// producing a new one discards the previous.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureArtifact {
    png: Vec<u8>,
    timestamp_millis: u64,
}

impl CaptureArtifact {
    pub fn png_bytes(&self) -> &[u8] {
        &self.png
    }

    pub fn timestamp_millis(&self) -> u64 {
        self.timestamp_millis
    }

    /// Encoded text representation, suitable for the copy-as-text action
    pub fn data_url(&self) -> String {
        format!("{}{}", DATA_URL_PREFIX, BASE64.encode(&self.png))
    }

    /// Restore an artifact from its persisted data-URL form. The
    /// persisted form carries no timestamp, so the restore time serves as
    /// the logical one.
    pub fn from_data_url(url: &str) -> Result<Self> {
        let encoded = url
            .strip_prefix(DATA_URL_PREFIX)
            .ok_or_else(|| CompassError::Store("not a PNG data URL".to_string()))?;
        let png = BASE64
            .decode(encoded)
            .map_err(|e| CompassError::Store(format!("corrupt capture encoding: {}", e)))?;
        Ok(Self {
            png,
            timestamp_millis: timestamp_millis(),
        })
    }

    /// Download filename for this artifact
    pub fn filename(&self) -> String {
        format!("vastu-capture-{}.png", self.timestamp_millis)
    }

    /// Write the artifact into `dir` under its download filename
    pub fn save_to<P: AsRef<Path>>(&self, dir: P) -> Result<PathBuf> {
        let path = dir.as_ref().join(self.filename());
        std::fs::write(&path, &self.png)?;
        Ok(path)
    }
}

/// Composites frames with overlays.
///
/// The output surface always matches the frame's native resolution, never
/// a preview resolution, to preserve capture fidelity. The overlay is
/// sized to a fraction of the shorter frame dimension and centered.
pub struct Compositor {
    overlay_fraction: f32,
}

impl Compositor {
    pub fn new(config: &CaptureConfig) -> Self {
        Self {
            overlay_fraction: config.overlay_fraction,
        }
    }

    /// Produce one artifact from a frame and the descriptor in effect at
    /// the moment of the call.
    ///
    /// Overlay rasterization failure degrades to a base-frame-only
    /// artifact: a capture without its overlay beats no capture at all.
    /// Only PNG encoding of the output surface can fail the whole call.
    pub fn compose(
        &self,
        frame: &CameraFrame,
        descriptor: &VisualDescriptor,
    ) -> Result<CaptureArtifact> {
        let mut canvas = frame.pixels.clone();
        let (width, height) = (frame.width(), frame.height());

        let side = (width.min(height) as f32 * self.overlay_fraction).round() as u32;
        match rasterize_overlay(descriptor, side) {
            Ok(overlay) => {
                let x = (i64::from(width) - i64::from(side)) / 2;
                let y = (i64::from(height) - i64::from(side)) / 2;
                imageops::overlay(&mut canvas, &overlay, x, y);
            }
            Err(e) => {
                log::warn!("overlay rasterization failed, capturing base frame only: {}", e);
            }
        }

        let mut png = Vec::new();
        canvas
            .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
            .map_err(|e| CompassError::Encode(e.to_string()))?;

        Ok(CaptureArtifact {
            png,
            timestamp_millis: timestamp_millis(),
        })
    }
}
