mod common;

use infinitylib_camera::{CameraSession, CameraStatus};

use common::{as_dyn, target_pose, MockHost, RecordingController, PLAYER};

#[test]
fn no_camera_without_a_world() {
    let mut host = MockHost::new();
    host.ready = false;
    let mut session = CameraSession::default();
    let controller = RecordingController::new(5, target_pose());

    assert!(session.camera(&host).is_none());
    assert!(!session.start_controlling(&mut host, as_dyn(&controller)));
    assert!(!session.stop_controlling(&host));
    assert!(!session.toggle_control(&mut host, as_dyn(&controller), true));
    session.tick(&mut host);

    assert_eq!(session.status(), CameraStatus::Idle);
    assert_eq!(session.animation_frame(), 0);
    assert!(session.controller().is_none());
    assert!(!session.is_active());
    assert!(session.sampled_pose(0.5).is_none());
    assert!(!session.is_camera_in_subject(&host, &PLAYER, 1.0));
}

#[test]
fn camera_is_created_on_first_use() {
    let mut host = MockHost::new();
    let mut session = CameraSession::default();
    assert!(session.get().is_none());

    // queries do not create the camera
    assert_eq!(session.status(), CameraStatus::Idle);
    assert!(session.get().is_none());

    session.tick(&mut host);
    assert!(session.get().is_some());
    assert!(session.stop_controlling(&host));
}

#[test]
fn drives_a_full_cycle() {
    let mut host = MockHost::new();
    let mut session = CameraSession::default();
    let controller = RecordingController::new(3, target_pose());

    assert!(session.start_controlling(&mut host, as_dyn(&controller)));
    assert!(session.is_active());
    assert!(session.is_camera_in_subject(&host, &PLAYER, 1.0));

    session.tick(&mut host);
    assert_eq!(session.animation_frame(), 1);
    session.on_field_of_view_update(60.0);
    assert_eq!(controller.fov.get(), Some(60.0));

    session.tick(&mut host);
    session.tick(&mut host);
    assert_eq!(session.status(), CameraStatus::Observing);
    assert_eq!(session.get().map(|camera| camera.pose()), Some(target_pose()));
    assert!(!session.is_camera_in_subject(&host, &PLAYER, 1.0));

    assert!(session.toggle_control(&mut host, as_dyn(&controller), false));
    for _ in 0..4 {
        session.tick(&mut host);
    }
    assert_eq!(session.status(), CameraStatus::Idle);
    assert_eq!(controller.deactivated.get(), 1);
}

#[test]
fn invalidate_drops_the_camera() {
    let mut host = MockHost::new();
    let mut session = CameraSession::default();
    let controller = RecordingController::new(3, target_pose());

    session.start_controlling(&mut host, as_dyn(&controller));
    session.tick(&mut host);
    session.invalidate();

    assert!(session.get().is_none());
    assert_eq!(session.status(), CameraStatus::Idle);
    assert!(session.controller().is_none());

    let fresh = session.camera(&host).expect("world is loaded");
    assert_eq!(fresh.status(), CameraStatus::Idle);
    assert_eq!(fresh.animation_frame(), 0);
    assert!(session.start_controlling(&mut host, as_dyn(&controller)));
}
