mod frames;
mod orientation;

pub use frames::{EmptyFrameSource, StaticFrameSource, test_frame};
pub use orientation::{ScriptedOrientation, sweep_readings};
