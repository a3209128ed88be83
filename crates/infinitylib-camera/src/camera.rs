//! The dynamic camera state machine

use std::fmt;
use std::rc::Rc;

use glam::DVec3;
use infinitylib_core::{Aabb, Pose};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::{debug, info, warn};

use crate::config::CameraConfig;
use crate::controller::DynamicCameraController;
use crate::host::{CameraHost, PointOfView, Viewpoint};
use crate::status::CameraStatus;

/// A free-moving viewpoint that travels to a controller's pose and back.
///
/// One camera exists per client session (see [`crate::CameraSession`]). The
/// host calls [`DynamicCamera::tick`] once per simulation step and samples
/// [`DynamicCamera::sampled_pose`] once per rendered frame.
pub struct DynamicCamera<S> {
    config: CameraConfig,
    status: CameraStatus,
    controller: Option<Rc<dyn DynamicCameraController>>,
    /// Viewpoint subject at activation; `None` means the host default
    original_camera: Option<S>,
    original_pose: Option<Pose>,
    original_pov: Option<PointOfView>,
    /// Ticks into the current phase
    counter: u32,
    pose: Pose,
    prev_pose: Pose,
}

impl<S: Clone> DynamicCamera<S> {
    /// Create an idle camera with the default configuration
    pub fn new() -> Self {
        Self::with_config(CameraConfig::default())
    }

    /// Create an idle camera with a custom configuration
    pub fn with_config(config: CameraConfig) -> Self {
        Self {
            config,
            status: CameraStatus::Idle,
            controller: None,
            original_camera: None,
            original_pose: None,
            original_pov: None,
            counter: 0,
            pose: Pose::default(),
            prev_pose: Pose::default(),
        }
    }

    pub fn status(&self) -> CameraStatus {
        self.status
    }

    /// Whether the camera owns the viewpoint and is moving or observing
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Tick counter of the current phase
    pub fn animation_frame(&self) -> u32 {
        self.counter
    }

    /// The controller in charge, if any
    pub fn controller(&self) -> Option<&Rc<dyn DynamicCameraController>> {
        self.controller.as_ref()
    }

    /// Whether `controller` is the one in charge (pointer identity)
    pub fn is_controlled_by(&self, controller: &Rc<dyn DynamicCameraController>) -> bool {
        self.controller
            .as_ref()
            .is_some_and(|current| Rc::ptr_eq(current, controller))
    }

    /// Pose captured when observation started
    pub fn original_pose(&self) -> Option<Pose> {
        self.original_pose
    }

    /// Pose as of the last tick
    pub fn pose(&self) -> Pose {
        self.pose
    }

    /// Pose between the previous and the last tick, for rendering
    pub fn sampled_pose(&self, partial_tick: f32) -> Pose {
        Pose::lerp(&self.prev_pose, &self.pose, partial_tick)
    }

    /// The camera's own bounding cube around its current position
    pub fn bounding_box(&self) -> Aabb {
        Aabb::from_center_size(self.pose.position, DVec3::splat(self.config.camera_size))
    }

    /// Forward a field of view change to the controller in charge
    pub fn on_field_of_view_update(&self, fov: f32) {
        if let Some(controller) = &self.controller {
            controller.on_field_of_view_changed(fov);
        }
    }

    /// Whether the camera is active and currently inside `subject`'s bounding
    /// box. Renderers use this to skip drawing a subject the camera is in.
    pub fn is_inside<H>(&self, host: &H, subject: &S, partial_tick: f32) -> bool
    where
        H: CameraHost<Subject = S>,
    {
        if !self.is_active() {
            return false;
        }
        let position = self.sampled_pose(partial_tick).position;
        host.bounding_box(subject)
            .is_some_and(|aabb| aabb.contains(position))
    }

    /// Take over the viewpoint on behalf of `controller`.
    ///
    /// Returns `false` without touching anything if another controller is
    /// already in charge.
    pub fn start_observing<H>(
        &mut self,
        host: &mut H,
        controller: Rc<dyn DynamicCameraController>,
    ) -> bool
    where
        H: CameraHost<Subject = S>,
    {
        if self.controller.is_some() {
            debug!("Dynamic camera already has a controller, ignoring start request");
            return false;
        }

        self.original_camera = match host.active_viewpoint() {
            Viewpoint::Subject(subject) => Some(subject),
            Viewpoint::DynamicCamera => None,
        };
        let original_pose = match self.original_subject(host) {
            Some(subject) => host.sample_pose(&subject, 1.0),
            None => None,
        };
        let original_pose = original_pose.unwrap_or_else(|| {
            warn!("No subject to start observing from, using the camera's last pose");
            self.pose
        });
        self.original_pose = Some(original_pose);
        self.hold(original_pose);

        self.original_pov = Some(host.point_of_view());
        host.set_point_of_view(self.config.observation_point_of_view);
        host.set_active_viewpoint(Viewpoint::DynamicCamera);

        self.controller = Some(controller);
        self.counter = 0;
        self.set_status(CameraStatus::Positioning);
        info!("Dynamic camera started observing");
        true
    }

    /// Ask the camera to head back to the original subject
    pub fn stop_observing(&mut self) {
        if let Some(controller) = &self.controller {
            controller.on_observation_end();
        }
        if self.status.is_active() {
            self.set_status(CameraStatus::Returning);
            info!("Dynamic camera stopped observing");
        }
    }

    /// Start or stop observing depending on `want_active`.
    ///
    /// While active, only the controller in charge may stop the camera and a
    /// second start is refused. While inactive, a stop request is refused.
    pub fn toggle_observing<H>(
        &mut self,
        host: &mut H,
        controller: Rc<dyn DynamicCameraController>,
        want_active: bool,
    ) -> bool
    where
        H: CameraHost<Subject = S>,
    {
        if self.is_active() {
            if want_active || !self.is_controlled_by(&controller) {
                return false;
            }
            self.stop_observing();
            true
        } else {
            want_active && self.start_observing(host, controller)
        }
    }

    /// Advance one simulation step
    pub fn tick<H>(&mut self, host: &mut H)
    where
        H: CameraHost<Subject = S>,
    {
        let Some(controller) = self.controller.clone() else {
            if self.status != CameraStatus::Idle {
                self.reset(host);
            }
            return;
        };

        let next = match self.status {
            CameraStatus::Idle => CameraStatus::Idle,
            CameraStatus::Positioning => self.tick_positioning(&*controller),
            CameraStatus::Observing => self.tick_observing(&*controller),
            CameraStatus::Returning => self.tick_returning(host, &*controller),
            CameraStatus::Finished => {
                self.counter = 0;
                controller.on_camera_deactivated();
                self.reset(host);
                CameraStatus::Idle
            }
        };
        self.set_status(next);
    }

    /// Drop the controller and hand the viewpoint back to the host default,
    /// or to the original subject when the host has none
    pub fn reset<H>(&mut self, host: &mut H)
    where
        H: CameraHost<Subject = S>,
    {
        self.status = CameraStatus::Idle;
        self.controller = None;
        self.counter = 0;
        match host.default_subject().or_else(|| self.original_camera.clone()) {
            Some(subject) => host.set_active_viewpoint(Viewpoint::Subject(subject)),
            None => warn!("Host has no subject to restore the viewpoint to"),
        }
        if let Some(point_of_view) = self.original_pov.take() {
            host.set_point_of_view(point_of_view);
        }
        self.original_camera = None;
        self.original_pose = None;
    }

    fn tick_positioning(&mut self, controller: &dyn DynamicCameraController) -> CameraStatus {
        if self.counter == 0 {
            controller.on_camera_activated();
        }
        self.counter += 1;

        if !controller.should_continue_observing() {
            // Mirror the progress so the way back starts where we are now
            self.counter = controller
                .transition_duration()
                .saturating_sub(self.counter);
            return CameraStatus::Returning;
        }

        let start = self.original_pose.unwrap_or(self.pose);
        let end = controller.observer_pose();
        if self.move_increment(controller.transition_duration(), &start, &end) {
            controller.on_observation_start();
            CameraStatus::Observing
        } else {
            CameraStatus::Positioning
        }
    }

    fn tick_observing(&mut self, controller: &dyn DynamicCameraController) -> CameraStatus {
        if controller.should_continue_observing() {
            self.counter = 0;
            // Pin instead of interpolating, a slowly drifting target would jitter
            self.hold(controller.observer_pose());
            CameraStatus::Observing
        } else {
            controller.on_observation_end();
            CameraStatus::Returning
        }
    }

    fn tick_returning<H>(
        &mut self,
        host: &H,
        controller: &dyn DynamicCameraController,
    ) -> CameraStatus
    where
        H: CameraHost<Subject = S>,
    {
        self.counter += 1;
        let start = controller.observer_pose();
        let end = self.return_pose(host);
        if self.move_increment(controller.transition_duration(), &start, &end) {
            CameraStatus::Finished
        } else {
            CameraStatus::Returning
        }
    }

    /// One interpolation step at the current counter. Returns `true` once the
    /// counter reaches `duration`, at which point the pose is exactly `end`.
    fn move_increment(&mut self, duration: u32, start: &Pose, end: &Pose) -> bool {
        if self.counter >= duration {
            self.set_pose(*end);
            return true;
        }
        let ratio = self.counter as f64 / duration as f64;
        self.set_pose(Pose::interpolate_towards(start, end, ratio));
        false
    }

    /// Live pose of the original subject; it may have moved while observing
    fn return_pose<H>(&self, host: &H) -> Pose
    where
        H: CameraHost<Subject = S>,
    {
        self.original_subject(host)
            .and_then(|subject| host.sample_pose(&subject, 1.0))
            .or(self.original_pose)
            .unwrap_or_else(|| {
                warn!("Original subject is gone, returning to the camera's last pose");
                self.pose
            })
    }

    fn original_subject<H>(&self, host: &H) -> Option<S>
    where
        H: CameraHost<Subject = S>,
    {
        self.original_camera
            .clone()
            .or_else(|| host.default_subject())
    }

    fn set_pose(&mut self, pose: Pose) {
        self.prev_pose = self.pose;
        self.pose = pose;
    }

    fn hold(&mut self, pose: Pose) {
        self.pose = pose;
        self.prev_pose = pose;
    }

    fn set_status(&mut self, status: CameraStatus) {
        if status != self.status {
            debug!(
                "Dynamic camera {} -> {} (frame {})",
                self.status.name(),
                status.name(),
                self.counter
            );
        }
        self.status = status;
    }
}

impl<S: Clone> Default for DynamicCamera<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> fmt::Debug for DynamicCamera<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicCamera")
            .field("status", &self.status)
            .field("counter", &self.counter)
            .field("has_controller", &self.controller.is_some())
            .field("pose", &self.pose)
            .finish_non_exhaustive()
    }
}

/// The camera carries no persistent data; it is rebuilt idle on load.
#[derive(Serialize, Deserialize)]
struct PersistedCamera {}

impl<S> Serialize for DynamicCamera<S> {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        PersistedCamera {}.serialize(serializer)
    }
}

impl<'de, S: Clone> Deserialize<'de> for DynamicCamera<S> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        PersistedCamera::deserialize(deserializer)?;
        Ok(Self::new())
    }
}
