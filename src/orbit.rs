//! Camera controller that circles a subject for a fixed number of ticks

use std::cell::Cell;

use glam::DVec3;
use infinitylib_camera::{CameraHost, DynamicCameraController};
use infinitylib_core::{EntityId, Pose};
use tracing::info;

use crate::settings::SimulationSettings;

/// Orbits a subject, looking at it, until its observation time runs out
pub struct OrbitController {
    subject: EntityId,
    duration: u32,
    radius: f64,
    height: f64,
    speed: f32,
    center: Cell<DVec3>,
    angle: Cell<f32>,
    observing: Cell<bool>,
    remaining: Cell<u32>,
    done: Cell<bool>,
}

impl OrbitController {
    pub fn new(settings: &SimulationSettings, subject: EntityId) -> Self {
        Self {
            subject,
            duration: settings.transition_ticks,
            radius: settings.orbit_radius,
            height: settings.orbit_height,
            speed: settings.orbit_speed,
            center: Cell::new(DVec3::ZERO),
            angle: Cell::new(0.0),
            observing: Cell::new(false),
            remaining: Cell::new(settings.observe_ticks),
            done: Cell::new(false),
        }
    }

    /// Follow the subject and spend observation time. Call once per tick
    /// before the camera ticks.
    pub fn update<H>(&self, host: &H)
    where
        H: CameraHost<Subject = EntityId>,
    {
        if let Some(pose) = host.sample_pose(&self.subject, 1.0) {
            self.center.set(pose.position);
        }
        self.angle.set((self.angle.get() + self.speed) % 360.0);
        if self.observing.get() {
            self.remaining.set(self.remaining.get().saturating_sub(1));
        }
    }

    /// The camera has handed the viewpoint back
    pub fn is_done(&self) -> bool {
        self.done.get()
    }
}

impl DynamicCameraController for OrbitController {
    fn transition_duration(&self) -> u32 {
        self.duration
    }

    fn observer_pose(&self) -> Pose {
        let center = self.center.get();
        let angle = (self.angle.get() as f64).to_radians();
        let offset = DVec3::new(
            angle.cos() * self.radius,
            self.height,
            angle.sin() * self.radius,
        );
        Pose::looking_at(center + offset, center)
    }

    fn should_continue_observing(&self) -> bool {
        self.remaining.get() > 0
    }

    fn on_camera_activated(&self) {
        info!("Orbit camera flying out");
    }

    fn on_observation_start(&self) {
        info!("Orbit camera in position, observing for {} ticks", self.remaining.get());
        self.observing.set(true);
    }

    fn on_observation_end(&self) {
        info!("Orbit camera heading back");
        self.observing.set(false);
    }

    fn on_camera_deactivated(&self) {
        info!("Orbit camera released the viewpoint");
        self.done.set(true);
    }

    fn on_field_of_view_changed(&self, fov: f32) {
        info!("Field of view changed to {fov}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::SimulatedHost;

    #[test]
    fn observer_pose_looks_at_center() {
        let settings = SimulationSettings::default();
        let orbit = OrbitController::new(&settings, EntityId::new());
        orbit.center.set(DVec3::new(10.0, 65.0, 10.0));

        let pose = orbit.observer_pose();
        let distance = (pose.position - orbit.center.get()).length();
        let expected = (settings.orbit_radius.powi(2) + settings.orbit_height.powi(2)).sqrt();
        assert!((distance - expected).abs() < 1e-9);
        // above the subject, so looking down
        assert!(pose.pitch > 0.0);
    }

    #[test]
    fn observation_time_only_counts_while_observing() {
        let settings = SimulationSettings {
            observe_ticks: 2,
            ..Default::default()
        };
        let mut host = SimulatedHost::new();
        let mob = host.load_world(0.0);
        let orbit = OrbitController::new(&settings, mob);

        orbit.update(&host);
        orbit.update(&host);
        assert!(orbit.should_continue_observing());

        orbit.on_observation_start();
        orbit.update(&host);
        assert!(orbit.should_continue_observing());
        orbit.update(&host);
        assert!(!orbit.should_continue_observing());

        assert!(!orbit.is_done());
        orbit.on_camera_deactivated();
        assert!(orbit.is_done());
    }
}
