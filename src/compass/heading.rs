use crate::constants::FULL_CIRCLE_DEGREES;
use crate::sensors::OrientationReading;

/// Canonical compass heading
///
/// Either a known bearing in degrees, clockwise from north and invariantly
/// in `[0, 360)`, or explicitly unknown. Unknown is a first-class state: it
/// is what the session holds before the first valid reading arrives and
/// whenever the platform stops delivering orientation data.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Heading {
    /// Bearing in degrees, in `[0, 360)`
    Known(f32),
    /// No valid reading available
    #[default]
    Unknown,
}

impl Heading {
    /// Build a heading from degrees, normalizing into `[0, 360)`.
    ///
    /// Non-finite input degrades to `Unknown` rather than poisoning the
    /// session with NaN arithmetic.
    pub fn from_degrees(degrees: f32) -> Self {
        if !degrees.is_finite() {
            return Heading::Unknown;
        }
        let mut normalized = degrees.rem_euclid(FULL_CIRCLE_DEGREES);
        // rem_euclid of a tiny negative can round up to exactly 360.0
        if normalized >= FULL_CIRCLE_DEGREES {
            normalized -= FULL_CIRCLE_DEGREES;
        }
        Heading::Known(normalized)
    }

    /// Bearing in degrees, or `None` when unknown
    pub fn degrees(&self) -> Option<f32> {
        match self {
            Heading::Known(deg) => Some(*deg),
            Heading::Unknown => None,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Heading::Known(_))
    }

    /// Rotation applied to face geometry: the bearing, or 0 when unknown
    /// so the face stays visible before the first reading.
    pub fn rotation_degrees(&self) -> f32 {
        self.degrees().unwrap_or(0.0)
    }
}

/// Normalize a raw orientation reading into a canonical heading.
///
/// A north-referenced compass heading is used directly. A bare rotation
/// angle about the vertical axis increases counterclockwise with an
/// arbitrary zero, which is the opposite sense to compass convention, so
/// it is flipped: `heading = (360 - angle) mod 360`. A reading carrying
/// neither value yields `Unknown`; this never errors and never fabricates
/// a stale bearing.
pub fn normalize(reading: &OrientationReading) -> Heading {
    if let Some(compass) = reading.compass_heading_degrees {
        return Heading::from_degrees(compass);
    }
    if let Some(raw) = reading.raw_rotation_degrees {
        if !raw.is_finite() {
            return Heading::Unknown;
        }
        return Heading::from_degrees(FULL_CIRCLE_DEGREES - raw);
    }
    Heading::Unknown
}
