use image::{Rgba, RgbaImage};

use crate::capture::{CameraFrame, FrameSource};

/// Deterministic gradient test frame standing in for a live camera frame.
pub fn test_frame(width: u32, height: u32) -> CameraFrame {
    let pixels = RgbaImage::from_fn(width, height, |x, y| {
        let r = (x * 255 / width.max(1)) as u8;
        let g = (y * 255 / height.max(1)) as u8;
        Rgba([r, g, 96, 255])
    });
    CameraFrame::new(pixels)
}

/// Frame source that always yields the same frame
pub struct StaticFrameSource {
    frame: CameraFrame,
}

impl StaticFrameSource {
    pub fn new(frame: CameraFrame) -> Self {
        Self { frame }
    }

    pub fn with_dimensions(width: u32, height: u32) -> Self {
        Self::new(test_frame(width, height))
    }
}

impl FrameSource for StaticFrameSource {
    fn frame(&mut self) -> Option<CameraFrame> {
        Some(self.frame.clone())
    }
}

/// Frame source that never yields a frame (camera warming up, stream
/// ended). Captures against it are silent no-ops.
pub struct EmptyFrameSource;

impl FrameSource for EmptyFrameSource {
    fn frame(&mut self) -> Option<CameraFrame> {
        None
    }
}
