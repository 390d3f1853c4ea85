pub mod compositor;
pub mod frame;
pub mod overlay;

pub use compositor::{CaptureArtifact, Compositor, timestamp_millis};
pub use frame::{CameraAcquisition, CameraFrame, FrameSource, ImageFileSource};
pub use overlay::rasterize_overlay;
