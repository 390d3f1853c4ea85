//! The compass session: one explicit object owning all mutable state
//! (heading, location, field strength, camera, last capture) with defined
//! update entry points. Zone and descriptor values are pure functions of
//! the current snapshot and are recomputed on demand, never cached.
//!
//! Single logical thread of control: readings arrive as push callbacks and
//! each entry point runs to completion before the next, so no locking is
//! needed and captures cannot overlap — a capture request observes either
//! no other capture or a fully completed one.

use image::RgbaImage;

use crate::capture::{CameraAcquisition, CameraFrame, CaptureArtifact, Compositor, FrameSource};
use crate::compass::{Heading, normalize};
use crate::config::{Mode, SessionConfig};
use crate::error::Result;
use crate::face::{VisualDescriptor, render};
use crate::sensors::{LocationFix, MagneticField, OrientationReading, PermissionState};
use crate::store::{KeyValueStore, LAST_CAPTURE_KEY, MODE_KEY};

/// Result of a capture request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureOutcome {
    /// A new artifact was produced and persisted
    Captured,
    /// No frame was available; the previous artifact is untouched
    NoFrame,
}

pub struct CompassSession {
    config: SessionConfig,
    mode: Mode,
    heading: Heading,
    location: Option<LocationFix>,
    location_error: Option<String>,
    magnetic: Option<MagneticField>,
    permission: PermissionState,
    camera: Option<CameraAcquisition>,
    compositor: Compositor,
    store: Box<dyn KeyValueStore>,
    last_artifact: Option<CaptureArtifact>,
}

impl CompassSession {
    /// Build a session, restoring the persisted mode and last capture.
    ///
    /// Fails only on an unusable configuration. Corrupt persisted values
    /// are logged and discarded; the session starts from defaults rather
    /// than failing.
    pub fn new(config: SessionConfig, store: Box<dyn KeyValueStore>) -> Result<Self> {
        config.validate()?;
        let mode = match store.get(MODE_KEY) {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                log::warn!("ignoring persisted mode: {}", e);
                Mode::default()
            }),
            None => Mode::default(),
        };
        let last_artifact = store.get(LAST_CAPTURE_KEY).and_then(|url| {
            CaptureArtifact::from_data_url(&url)
                .map_err(|e| log::warn!("ignoring persisted capture: {}", e))
                .ok()
        });
        let compositor = Compositor::new(&config.capture);
        Ok(Self {
            config,
            mode,
            heading: Heading::Unknown,
            location: None,
            location_error: None,
            magnetic: None,
            permission: PermissionState::default(),
            camera: None,
            compositor,
            store,
            last_artifact,
        })
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Select a face mode and persist the selection. Never touches
    /// heading state.
    pub fn set_mode(&mut self, mode: Mode) -> Result<()> {
        self.mode = mode;
        self.store.put(MODE_KEY, mode.as_str())
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    /// Orientation push callback. Readings are dropped while permission
    /// has not been granted, keeping the heading unknown.
    pub fn on_orientation(&mut self, reading: OrientationReading) {
        if !self.permission.allows_readings() {
            log::debug!("orientation reading dropped, permission {:?}", self.permission);
            return;
        }
        self.heading = normalize(&reading);
    }

    pub fn on_location(&mut self, fix: LocationFix) {
        self.location = Some(fix);
        self.location_error = None;
    }

    pub fn on_location_error(&mut self, message: String) {
        log::debug!("location error: {}", message);
        self.location_error = Some(message);
    }

    pub fn location(&self) -> Option<LocationFix> {
        self.location
    }

    pub fn location_error(&self) -> Option<&str> {
        self.location_error.as_deref()
    }

    pub fn on_magnetic(&mut self, field: MagneticField) {
        self.magnetic = Some(field);
    }

    pub fn magnetic(&self) -> Option<MagneticField> {
        self.magnetic
    }

    /// Field strength beyond the disturbance threshold
    pub fn magnetic_warning(&self) -> bool {
        matches!(
            self.magnetic,
            Some(MagneticField::Reading(ut)) if ut > self.config.magnetic.warning_threshold_ut
        )
    }

    pub fn permission(&self) -> PermissionState {
        self.permission
    }

    /// Permission transition, e.g. after a user-triggered grant request.
    /// A revocation does not erase the current heading by itself; it only
    /// stops further readings from applying.
    pub fn set_permission_state(&mut self, state: PermissionState) {
        log::info!("orientation permission: {:?} -> {:?}", self.permission, state);
        self.permission = state;
    }

    /// Acquire the camera, replacing (and thereby releasing) any previous
    /// acquisition.
    pub fn set_camera(&mut self, source: Box<dyn FrameSource>) {
        self.camera = Some(CameraAcquisition::new(source));
    }

    /// Turn capture mode off: drops the acquisition, which stops the
    /// underlying tracks and cancels any pending frame.
    pub fn disable_camera(&mut self) {
        self.camera = None;
    }

    pub fn camera_enabled(&self) -> bool {
        self.camera.is_some()
    }

    /// Face descriptor for the current snapshot
    pub fn descriptor(&self) -> VisualDescriptor {
        render(self.mode, self.heading)
    }

    /// Capture: composite the current frame with the descriptor in effect
    /// now, persist the artifact, and replace the previous one.
    ///
    /// No frame available is a silent no-op. Captures run to completion
    /// on the session's single logical thread, so at most one is ever in
    /// flight.
    pub fn capture(&mut self) -> Result<CaptureOutcome> {
        // Snapshot the descriptor first: a heading update arriving while
        // the overlay is being rasterized must not alter this capture.
        let descriptor = self.descriptor();

        let Some(frame) = self.camera.as_mut().and_then(|camera| camera.frame()) else {
            log::debug!("capture requested without a frame, keeping previous artifact");
            return Ok(CaptureOutcome::NoFrame);
        };

        // A source that cannot report native dimensions still yields a
        // capture, on a blank canvas at the configured fallback size.
        let frame = if frame.width() == 0 || frame.height() == 0 {
            let width = self.config.capture.fallback_width;
            let height = self.config.capture.fallback_height;
            log::debug!("frame has no native dimensions, using {}x{} fallback", width, height);
            CameraFrame::new(RgbaImage::new(width, height))
        } else {
            frame
        };

        let artifact = self.compositor.compose(&frame, &descriptor)?;
        self.store.put(LAST_CAPTURE_KEY, &artifact.data_url())?;
        self.last_artifact = Some(artifact);
        log::info!("capture stored ({}x{})", frame.width(), frame.height());
        Ok(CaptureOutcome::Captured)
    }

    /// The single retained capture, if any
    pub fn last_capture(&self) -> Option<&CaptureArtifact> {
        self.last_artifact.as_ref()
    }
}
