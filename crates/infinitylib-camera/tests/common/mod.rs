#![allow(dead_code)]

use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;

use glam::DVec3;
use infinitylib_camera::{CameraHost, DynamicCameraController, PointOfView, Viewpoint};
use infinitylib_core::{Aabb, Pose};

pub const PLAYER: u32 = 1;
pub const OTHER: u32 = 2;

pub fn player_pose() -> Pose {
    Pose::new(DVec3::new(0.0, 65.62, 0.0), 0.0, 0.0)
}

pub fn target_pose() -> Pose {
    Pose::new(DVec3::new(10.0, 70.0, 10.0), 20.0, 90.0)
}

/// In-memory host with a handful of subjects
pub struct MockHost {
    pub ready: bool,
    pub viewpoint: Viewpoint<u32>,
    pub point_of_view: PointOfView,
    pub subjects: HashMap<u32, Pose>,
}

impl MockHost {
    pub fn new() -> Self {
        let mut subjects = HashMap::new();
        subjects.insert(PLAYER, player_pose());
        subjects.insert(OTHER, Pose::from_position(DVec3::new(-20.0, 64.0, 5.0)));
        Self {
            ready: true,
            viewpoint: Viewpoint::Subject(PLAYER),
            point_of_view: PointOfView::ThirdPersonBack,
            subjects,
        }
    }

    pub fn move_subject(&mut self, subject: u32, pose: Pose) {
        self.subjects.insert(subject, pose);
    }
}

impl CameraHost for MockHost {
    type Subject = u32;

    fn is_session_ready(&self) -> bool {
        self.ready
    }

    fn active_viewpoint(&self) -> Viewpoint<u32> {
        self.viewpoint.clone()
    }

    fn set_active_viewpoint(&mut self, viewpoint: Viewpoint<u32>) {
        self.viewpoint = viewpoint;
    }

    fn default_subject(&self) -> Option<u32> {
        Some(PLAYER)
    }

    fn point_of_view(&self) -> PointOfView {
        self.point_of_view
    }

    fn set_point_of_view(&mut self, point_of_view: PointOfView) {
        self.point_of_view = point_of_view;
    }

    fn sample_pose(&self, subject: &u32, _partial_tick: f32) -> Option<Pose> {
        self.subjects.get(subject).copied()
    }

    fn bounding_box(&self, subject: &u32) -> Option<Aabb> {
        self.subjects.get(subject).map(|pose| {
            Aabb::new(
                pose.position - DVec3::new(0.3, 1.62, 0.3),
                pose.position + DVec3::new(0.3, 0.18, 0.3),
            )
        })
    }
}

/// Controller that counts its callbacks
pub struct RecordingController {
    pub duration: u32,
    pub target: Cell<Pose>,
    pub observing: Cell<bool>,
    pub activated: Cell<u32>,
    pub started: Cell<u32>,
    pub ended: Cell<u32>,
    pub deactivated: Cell<u32>,
    pub fov: Cell<Option<f32>>,
}

impl RecordingController {
    pub fn new(duration: u32, target: Pose) -> Rc<Self> {
        Rc::new(Self {
            duration,
            target: Cell::new(target),
            observing: Cell::new(true),
            activated: Cell::new(0),
            started: Cell::new(0),
            ended: Cell::new(0),
            deactivated: Cell::new(0),
            fov: Cell::new(None),
        })
    }
}

impl DynamicCameraController for RecordingController {
    fn transition_duration(&self) -> u32 {
        self.duration
    }

    fn observer_pose(&self) -> Pose {
        self.target.get()
    }

    fn should_continue_observing(&self) -> bool {
        self.observing.get()
    }

    fn on_camera_activated(&self) {
        self.activated.set(self.activated.get() + 1);
    }

    fn on_observation_start(&self) {
        self.started.set(self.started.get() + 1);
    }

    fn on_observation_end(&self) {
        self.ended.set(self.ended.get() + 1);
    }

    fn on_camera_deactivated(&self) {
        self.deactivated.set(self.deactivated.get() + 1);
    }

    fn on_field_of_view_changed(&self, fov: f32) {
        self.fov.set(Some(fov));
    }
}

pub fn as_dyn(controller: &Rc<RecordingController>) -> Rc<dyn DynamicCameraController> {
    controller.clone()
}

pub fn assert_pose_close(actual: Pose, expected: Pose) {
    assert!(
        (actual.position - expected.position).length() < 1e-9,
        "position {:?} != {:?}",
        actual.position,
        expected.position
    );
    assert!(
        (actual.pitch - expected.pitch).abs() < 1e-3,
        "pitch {} != {}",
        actual.pitch,
        expected.pitch
    );
    assert!(
        (actual.yaw - expected.yaw).abs() < 1e-3,
        "yaw {} != {}",
        actual.yaw,
        expected.yaw
    );
}
