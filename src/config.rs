//! Configuration for the Vastu compass session.
//!
//! ## Face modes
//!
//! The face mode is a session-level selection persisted between runs. Its
//! string form matches the persisted representation:
//!
//! ```ignore
//! let mode: Mode = "32".parse().unwrap();
//! assert_eq!(mode, Mode::ThirtyTwo);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::constants::{MAGNETIC_WARNING_THRESHOLD_UT, OVERLAY_FRACTION};
use crate::error::{CompassError, Result};

/// Compass face variant
///
/// Selects which face the renderer produces. Selection is held by the
/// session and changing it never mutates heading state.
///
/// # Example
/// ```
/// use vastucompass::config::Mode;
///
/// let mode: Mode = "chakra".parse().unwrap();
/// assert_eq!(mode.to_string(), "chakra");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Mode {
    /// Plain compass: needle, cardinal caption, no zone ticks
    #[default]
    Normal,
    /// 16-zone Vastu face
    Sixteen,
    /// 32-zone Vastu face
    ThirtyTwo,
    /// Stylized Applied Vastu Chakra face (32-way spokes, decorative)
    Chakra,
}

impl Mode {
    /// Persisted string form (the durable `mode` key value)
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Normal => "normal",
            Mode::Sixteen => "16",
            Mode::ThirtyTwo => "32",
            Mode::Chakra => "chakra",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            "normal" => Ok(Mode::Normal),
            "16" => Ok(Mode::Sixteen),
            "32" => Ok(Mode::ThirtyTwo),
            "chakra" => Ok(Mode::Chakra),
            other => Err(format!("unknown mode: {}", other)),
        }
    }
}

/// System-wide session configuration
///
/// Use `SessionConfig::default()` for the standard setup.
///
/// # Example
/// ```
/// use vastucompass::config::SessionConfig;
///
/// let mut config = SessionConfig::default();
/// config.capture.fallback_width = 1080;
/// ```
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    /// Capture compositing configuration
    pub capture: CaptureConfig,
    /// Magnetometer interpretation configuration
    pub magnetic: MagneticConfig,
    /// Sensor subscription configuration
    pub sensors: SensorConfig,
}

impl SessionConfig {
    /// Reject configurations the session cannot operate under.
    pub fn validate(&self) -> Result<()> {
        let fraction = self.capture.overlay_fraction;
        if !(fraction > 0.0 && fraction <= 1.0) {
            return Err(CompassError::Config(format!(
                "overlay fraction must be in (0, 1], got {}",
                fraction
            )));
        }
        if self.capture.fallback_width == 0 || self.capture.fallback_height == 0 {
            return Err(CompassError::Config(format!(
                "fallback frame dimensions must be non-zero, got {}x{}",
                self.capture.fallback_width, self.capture.fallback_height
            )));
        }
        if self.sensors.channel_capacity == 0 {
            return Err(CompassError::Config(
                "sensor channel capacity must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Capture compositing configuration
#[derive(Debug, Clone)]
pub struct CaptureConfig {
    /// Overlay size as a fraction of the shorter frame dimension
    pub overlay_fraction: f32,
    /// Frame width assumed when a source reports no native width
    pub fallback_width: u32,
    /// Frame height assumed when a source reports no native height
    pub fallback_height: u32,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            overlay_fraction: OVERLAY_FRACTION,
            // Portrait phone preview dimensions
            fallback_width: 720,
            fallback_height: 1280,
        }
    }
}

/// Magnetometer interpretation configuration
#[derive(Debug, Clone)]
pub struct MagneticConfig {
    /// Field strength above which a disturbance warning is raised, in µT
    pub warning_threshold_ut: f32,
}

impl Default for MagneticConfig {
    fn default() -> Self {
        Self {
            warning_threshold_ut: MAGNETIC_WARNING_THRESHOLD_UT,
        }
    }
}

/// Sensor subscription configuration
#[derive(Debug, Clone)]
pub struct SensorConfig {
    /// Bounded channel capacity per subscription
    pub channel_capacity: usize,
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 16,
        }
    }
}
