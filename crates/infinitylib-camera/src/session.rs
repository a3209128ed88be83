//! Per-session ownership of the dynamic camera
//!
//! The camera can only exist while a world is loaded. The session slot
//! creates it on first use once the host reports a world, and drops it when
//! the world is unloaded so a fresh camera is built for the next one. Query
//! accessors never create the camera; a camera that does not exist yet
//! reports the same defaults an idle one would.

use std::rc::Rc;

use infinitylib_core::Pose;
use tracing::debug;

use crate::camera::DynamicCamera;
use crate::config::CameraConfig;
use crate::controller::DynamicCameraController;
use crate::host::CameraHost;
use crate::status::CameraStatus;

/// Lazily created camera slot, owned by the client session
#[derive(Debug)]
pub struct CameraSession<S> {
    config: CameraConfig,
    camera: Option<DynamicCamera<S>>,
}

impl<S: Clone> CameraSession<S> {
    /// Create an empty slot that will build cameras with `config`
    pub fn new(config: CameraConfig) -> Self {
        Self {
            config,
            camera: None,
        }
    }

    /// Get the camera, creating it if the host has a world loaded
    pub fn camera<H>(&mut self, host: &H) -> Option<&mut DynamicCamera<S>>
    where
        H: CameraHost<Subject = S>,
    {
        if self.camera.is_none() && host.is_session_ready() {
            debug!("Creating dynamic camera for the current session");
            self.camera = Some(DynamicCamera::with_config(self.config.clone()));
        }
        self.camera.as_mut()
    }

    /// The camera if it has been created
    pub fn get(&self) -> Option<&DynamicCamera<S>> {
        self.camera.as_ref()
    }

    /// Forget the camera; the next access creates a new one
    pub fn invalidate(&mut self) {
        if self.camera.take().is_some() {
            debug!("Dynamic camera invalidated");
        }
    }

    pub fn start_controlling<H>(
        &mut self,
        host: &mut H,
        controller: Rc<dyn DynamicCameraController>,
    ) -> bool
    where
        H: CameraHost<Subject = S>,
    {
        match self.camera(host) {
            Some(camera) => camera.start_observing(host, controller),
            None => false,
        }
    }

    /// Returns `true` if a camera exists to receive the request
    pub fn stop_controlling<H>(&mut self, host: &H) -> bool
    where
        H: CameraHost<Subject = S>,
    {
        match self.camera(host) {
            Some(camera) => {
                camera.stop_observing();
                true
            }
            None => false,
        }
    }

    pub fn toggle_control<H>(
        &mut self,
        host: &mut H,
        controller: Rc<dyn DynamicCameraController>,
        want_active: bool,
    ) -> bool
    where
        H: CameraHost<Subject = S>,
    {
        match self.camera(host) {
            Some(camera) => camera.toggle_observing(host, controller, want_active),
            None => false,
        }
    }

    pub fn tick<H>(&mut self, host: &mut H)
    where
        H: CameraHost<Subject = S>,
    {
        if let Some(camera) = self.camera(host) {
            camera.tick(host);
        }
    }

    pub fn controller(&self) -> Option<Rc<dyn DynamicCameraController>> {
        self.camera.as_ref()?.controller().cloned()
    }

    pub fn status(&self) -> CameraStatus {
        self.camera
            .as_ref()
            .map_or(CameraStatus::Idle, DynamicCamera::status)
    }

    pub fn animation_frame(&self) -> u32 {
        self.camera
            .as_ref()
            .map_or(0, DynamicCamera::animation_frame)
    }

    pub fn is_active(&self) -> bool {
        self.status().is_active()
    }

    pub fn sampled_pose(&self, partial_tick: f32) -> Option<Pose> {
        self.camera
            .as_ref()
            .map(|camera| camera.sampled_pose(partial_tick))
    }

    pub fn on_field_of_view_update(&self, fov: f32) {
        if let Some(camera) = &self.camera {
            camera.on_field_of_view_update(fov);
        }
    }

    /// Whether the active camera is inside `subject`'s bounding box
    pub fn is_camera_in_subject<H>(&self, host: &H, subject: &S, partial_tick: f32) -> bool
    where
        H: CameraHost<Subject = S>,
    {
        self.camera
            .as_ref()
            .is_some_and(|camera| camera.is_inside(host, subject, partial_tick))
    }
}

impl<S: Clone> Default for CameraSession<S> {
    fn default() -> Self {
        Self::new(CameraConfig::default())
    }
}
