//! Session lifecycle: persisted state across restarts, subscription
//! teardown, camera release.

use vastucompass::config::{Mode, SessionConfig};
use vastucompass::sensors::{
    LocationFix, MagneticField, OrientationReading, PermissionState, subscription_pair,
};
use vastucompass::session::CompassSession;
use vastucompass::simulation::StaticFrameSource;
use vastucompass::store::FileStore;

#[test]
fn test_mode_and_capture_survive_restart() {
    let dir = tempfile::tempdir().unwrap();

    {
        let store = FileStore::new(dir.path()).unwrap();
        let mut session = CompassSession::new(SessionConfig::default(), Box::new(store)).unwrap();
        session.set_mode(Mode::Chakra).unwrap();
        session.on_orientation(OrientationReading {
            compass_heading_degrees: Some(33.0),
            raw_rotation_degrees: None,
        });
        session.set_camera(Box::new(StaticFrameSource::with_dimensions(80, 80)));
        session.capture().unwrap();
    }

    let store = FileStore::new(dir.path()).unwrap();
    let session = CompassSession::new(SessionConfig::default(), Box::new(store)).unwrap();
    assert_eq!(session.mode(), Mode::Chakra);

    let artifact = session.last_capture().expect("capture restored");
    let decoded = image::load_from_memory(artifact.png_bytes()).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (80, 80));

    // Heading has no persisted identity
    assert!(session.heading().degrees().is_none());
}

#[test]
fn test_subscription_drives_session_and_cancels_cleanly() {
    let config = SessionConfig::default();
    let capacity = config.sensors.channel_capacity;
    let mut session = CompassSession::new(config, Box::new(vastucompass::store::MemoryStore::new())).unwrap();

    let (orientation_tx, orientation_rx) = subscription_pair(capacity);
    let (magnetic_tx, magnetic_rx) = subscription_pair(capacity);
    let (location_tx, location_rx) = subscription_pair(capacity);

    orientation_tx.publish(OrientationReading {
        compass_heading_degrees: Some(10.0),
        raw_rotation_degrees: None,
    });
    orientation_tx.publish(OrientationReading {
        compass_heading_degrees: Some(20.0),
        raw_rotation_degrees: None,
    });
    magnetic_tx.publish(MagneticField::Reading(72.0));
    location_tx.publish(LocationFix {
        latitude: 28.6139,
        longitude: 77.209,
    });

    // Event pump: apply the newest pending reading of each kind
    if let Some(reading) = orientation_rx.latest() {
        session.on_orientation(reading);
    }
    if let Some(field) = magnetic_rx.latest() {
        session.on_magnetic(field);
    }
    if let Some(fix) = location_rx.latest() {
        session.on_location(fix);
    }

    assert_eq!(session.heading().degrees(), Some(20.0));
    assert!(session.magnetic_warning());
    assert_eq!(session.location().unwrap().latitude, 28.6139);

    // Symmetric teardown: cancelled subscriptions stop delivery
    orientation_rx.cancel();
    magnetic_rx.cancel();
    location_rx.cancel();
    assert!(!orientation_tx.is_live());
    assert!(!magnetic_tx.publish(MagneticField::Unsupported));
    assert!(!location_tx.is_live());
}

#[test]
fn test_permission_flow_gates_heading() {
    let mut session =
        CompassSession::new(SessionConfig::default(), Box::new(vastucompass::store::MemoryStore::new())).unwrap();
    session.set_permission_state(PermissionState::Prompt);

    session.on_orientation(OrientationReading {
        compass_heading_degrees: Some(50.0),
        raw_rotation_degrees: None,
    });
    assert!(session.heading().degrees().is_none());
    // The face is still produced while waiting for the grant
    assert!(!session.descriptor().caption.is_empty());

    session.set_permission_state(PermissionState::Granted);
    session.on_orientation(OrientationReading {
        compass_heading_degrees: Some(50.0),
        raw_rotation_degrees: None,
    });
    assert_eq!(session.heading().degrees(), Some(50.0));
}

#[test]
fn test_camera_toggle_lifecycle() {
    let mut session =
        CompassSession::new(SessionConfig::default(), Box::new(vastucompass::store::MemoryStore::new())).unwrap();
    assert!(!session.camera_enabled());

    session.set_camera(Box::new(StaticFrameSource::with_dimensions(50, 50)));
    assert!(session.camera_enabled());

    session.disable_camera();
    assert!(!session.camera_enabled());
}
