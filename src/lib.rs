pub mod capture;
pub mod compass;
pub mod config;
pub mod constants;
pub mod error;
pub mod face;
pub mod sensors;
pub mod session;
pub mod store;

#[cfg(feature = "simulation")]
pub mod simulation;

pub use compass::{ActiveZone, Heading, ZoneCount, classify, normalize};
pub use config::{Mode, SessionConfig};
pub use error::{CompassError, Result};
pub use face::{VisualDescriptor, render};
pub use session::{CaptureOutcome, CompassSession};
