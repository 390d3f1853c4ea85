//! Sensor reading types and the uniform subscription interface.
//!
//! Every signal source (orientation, location, magnetometer) is delivered
//! through the same publish/subscribe pair over a bounded channel, so setup
//! and teardown are symmetric for all of them and cancellation is testable:
//! once the subscriber side is dropped, `publish` reports non-delivery and
//! the source knows to stop.

use flume::{Receiver, Sender, TrySendError, bounded};

/// Raw orientation signal as delivered by the platform.
///
/// Either field may be absent; a reading carrying neither normalizes to an
/// unknown heading.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OrientationReading {
    /// North-referenced compass heading, clockwise-positive, degrees
    pub compass_heading_degrees: Option<f32>,
    /// Rotation about the vertical axis, counterclockwise-increasing,
    /// arbitrary zero reference, degrees
    pub raw_rotation_degrees: Option<f32>,
}

/// A geolocation fix
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocationFix {
    pub latitude: f64,
    pub longitude: f64,
}

/// Magnetometer signal
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MagneticField {
    /// Total field strength in microtesla
    Reading(f32),
    /// Platform has no magnetometer or refuses access
    Unsupported,
}

/// Orientation permission state.
///
/// Distinct from "unsupported": `Prompt` and `Denied` are recoverable by an
/// explicit user-triggered grant request. Until granted, the heading stays
/// unknown. `NotRequired` covers platforms that deliver orientation without
/// asking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PermissionState {
    #[default]
    NotRequired,
    Prompt,
    Granted,
    Denied,
}

impl PermissionState {
    /// Whether orientation readings should be applied in this state
    pub fn allows_readings(self) -> bool {
        matches!(self, PermissionState::NotRequired | PermissionState::Granted)
    }
}

/// Create a connected publisher/subscription pair with a bounded buffer.
///
/// The publisher side belongs to the signal source, the subscription to the
/// session. Dropping (or explicitly cancelling) the subscription is the
/// teardown signal for the source.
pub fn subscription_pair<T>(capacity: usize) -> (Publisher<T>, Subscription<T>) {
    let (tx, rx) = bounded(capacity);
    (Publisher { tx }, Subscription { rx })
}

/// Sending half of a sensor subscription
pub struct Publisher<T> {
    tx: Sender<T>,
}

impl<T> Publisher<T> {
    /// Push one reading. Returns `false` when the reading was not
    /// delivered, either because the subscriber cancelled or because the
    /// buffer is full; a dropped reading is superseded by the next one.
    pub fn publish(&self, reading: T) -> bool {
        match self.tx.try_send(reading) {
            Ok(()) => true,
            Err(TrySendError::Full(_)) => {
                log::debug!("sensor buffer full, reading dropped");
                false
            }
            Err(TrySendError::Disconnected(_)) => false,
        }
    }

    /// Whether the subscriber is still attached
    pub fn is_live(&self) -> bool {
        self.tx.receiver_count() > 0
    }
}

/// Receiving half of a sensor subscription
pub struct Subscription<T> {
    rx: Receiver<T>,
}

impl<T> Subscription<T> {
    /// Drain the newest pending reading, if any, discarding older ones.
    pub fn latest(&self) -> Option<T> {
        let mut newest = None;
        while let Ok(reading) = self.rx.try_recv() {
            newest = Some(reading);
        }
        newest
    }

    /// Next pending reading in arrival order, if any
    pub fn poll(&self) -> Option<T> {
        self.rx.try_recv().ok()
    }

    /// Explicit teardown. Equivalent to dropping, spelled out so call
    /// sites show the lifecycle.
    pub fn cancel(self) {}
}
