use std::path::Path;

use image::RgbaImage;

/// One raster frame from the camera, at native resolution
#[derive(Debug, Clone)]
pub struct CameraFrame {
    pub pixels: RgbaImage,
}

impl CameraFrame {
    pub fn new(pixels: RgbaImage) -> Self {
        Self { pixels }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }
}

/// A live frame source (camera stream, file, synthetic pattern).
///
/// `frame()` returns the current frame, or `None` when no frame is
/// available yet; a missing frame makes capture a silent no-op.
pub trait FrameSource {
    fn frame(&mut self) -> Option<CameraFrame>;
}

/// Frame source backed by a still image on disk
pub struct ImageFileSource {
    frame: CameraFrame,
}

impl ImageFileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let pixels = image::open(path.as_ref())?.to_rgba8();
        Ok(Self {
            frame: CameraFrame::new(pixels),
        })
    }
}

impl FrameSource for ImageFileSource {
    fn frame(&mut self) -> Option<CameraFrame> {
        Some(self.frame.clone())
    }
}

/// Exclusive ownership of the camera stream.
///
/// The stream is a singleton resource: the session holds at most one
/// acquisition, and dropping it releases the underlying source (all tracks
/// stopped) even on abnormal exit paths.
pub struct CameraAcquisition {
    source: Box<dyn FrameSource>,
}

impl CameraAcquisition {
    pub fn new(source: Box<dyn FrameSource>) -> Self {
        log::info!("camera acquired");
        Self { source }
    }

    pub fn frame(&mut self) -> Option<CameraFrame> {
        self.source.frame()
    }
}

impl Drop for CameraAcquisition {
    fn drop(&mut self) {
        log::info!("camera released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    struct NoFrameSource;

    impl FrameSource for NoFrameSource {
        fn frame(&mut self) -> Option<CameraFrame> {
            None
        }
    }

    #[test]
    fn test_acquisition_forwards_frames() {
        let pixels = RgbaImage::from_pixel(4, 3, Rgba([10, 20, 30, 255]));
        struct OneFrame(CameraFrame);
        impl FrameSource for OneFrame {
            fn frame(&mut self) -> Option<CameraFrame> {
                Some(self.0.clone())
            }
        }

        let mut acq = CameraAcquisition::new(Box::new(OneFrame(CameraFrame::new(pixels))));
        let frame = acq.frame().unwrap();
        assert_eq!(frame.width(), 4);
        assert_eq!(frame.height(), 3);
    }

    #[test]
    fn test_acquisition_with_empty_source() {
        let mut acq = CameraAcquisition::new(Box::new(NoFrameSource));
        assert!(acq.frame().is_none());
    }
}
