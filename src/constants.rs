//! Numeric constants for compass geometry and session thresholds
//!
//! These constants define the angular layout of the compass faces and the
//! fixed thresholds used by the session.

/// One full turn in degrees; all headings live in [0, FULL_CIRCLE).
pub const FULL_CIRCLE_DEGREES: f32 = 360.0;

/// Width of one 16-point cardinal sector (360 / 16).
pub const CARDINAL_SECTOR_DEGREES: f32 = 22.5;

/// Fraction of the shorter frame dimension used for the capture overlay.
/// The overlay is centered on the frame at this size.
pub const OVERLAY_FRACTION: f32 = 0.7;

/// Magnetic field strength above which a disturbance warning is raised, in µT.
/// The Earth's field is roughly 25-65 µT; sustained readings above this
/// usually mean a nearby ferrous object or electronics.
pub const MAGNETIC_WARNING_THRESHOLD_UT: f32 = 60.0;

/// Placeholder shown wherever a heading-derived value is unknown.
pub const UNKNOWN_PLACEHOLDER: &str = "\u{2014}";
