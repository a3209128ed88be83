//! Headless stand-in for the game client
//!
//! Keeps a player and a few other entities, moves them every tick and
//! answers the camera's viewpoint and pose queries the way the client would.

use std::collections::HashMap;

use glam::DVec3;
use infinitylib_camera::{CameraHost, PointOfView, Viewpoint};
use infinitylib_core::{Aabb, EntityId, Pose};

/// Eye height of a standing humanoid
const EYE_HEIGHT: f64 = 1.62;
/// Humanoid hitbox width and height
const ENTITY_SIZE: DVec3 = DVec3::new(0.6, 1.8, 0.6);

/// An entity in the simulated world; `feet` is the bottom-centre of its box
#[derive(Debug, Clone, Copy)]
struct SimEntity {
    feet: DVec3,
    prev_feet: DVec3,
    pitch: f32,
    yaw: f32,
    velocity: DVec3,
}

impl SimEntity {
    fn at(feet: DVec3, yaw: f32, velocity: DVec3) -> Self {
        Self {
            feet,
            prev_feet: feet,
            pitch: 0.0,
            yaw,
            velocity,
        }
    }

    fn step(&mut self) {
        self.prev_feet = self.feet;
        self.feet += self.velocity;
    }

    fn eye_pose(&self, partial_tick: f32) -> Pose {
        let feet = self.prev_feet.lerp(self.feet, partial_tick as f64);
        Pose::new(feet + DVec3::new(0.0, EYE_HEIGHT, 0.0), self.pitch, self.yaw)
    }

    fn bounding_box(&self) -> Aabb {
        let half = DVec3::new(ENTITY_SIZE.x * 0.5, 0.0, ENTITY_SIZE.z * 0.5);
        Aabb::new(self.feet - half, self.feet + half + DVec3::new(0.0, ENTITY_SIZE.y, 0.0))
    }
}

/// Simulated client with a loadable world
pub struct SimulatedHost {
    world_loaded: bool,
    player: EntityId,
    entities: HashMap<EntityId, SimEntity>,
    viewpoint: Viewpoint<EntityId>,
    point_of_view: PointOfView,
}

impl SimulatedHost {
    /// Create a client with no world loaded
    pub fn new() -> Self {
        let player = EntityId::new();
        Self {
            world_loaded: false,
            player,
            entities: HashMap::new(),
            viewpoint: Viewpoint::Subject(player),
            point_of_view: PointOfView::ThirdPersonBack,
        }
    }

    /// Load a world with the player walking east and one wandering mob.
    /// Returns the mob's id.
    pub fn load_world(&mut self, player_speed: f64) -> EntityId {
        self.entities.insert(
            self.player,
            SimEntity::at(DVec3::new(0.5, 64.0, 0.5), 270.0, DVec3::new(player_speed, 0.0, 0.0)),
        );
        let mob = EntityId::new();
        self.entities.insert(
            mob,
            SimEntity::at(DVec3::new(12.5, 64.0, 8.5), 90.0, DVec3::new(0.0, 0.0, 0.02)),
        );
        self.viewpoint = Viewpoint::Subject(self.player);
        self.world_loaded = true;
        mob
    }

    /// Drop the world and everything in it
    pub fn unload_world(&mut self) {
        self.entities.clear();
        self.world_loaded = false;
    }

    pub fn player(&self) -> EntityId {
        self.player
    }

    pub fn is_viewing_through_camera(&self) -> bool {
        self.viewpoint == Viewpoint::DynamicCamera
    }

    /// Advance all entities by one tick
    pub fn step(&mut self) {
        for entity in self.entities.values_mut() {
            entity.step();
        }
    }
}

impl Default for SimulatedHost {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraHost for SimulatedHost {
    type Subject = EntityId;

    fn is_session_ready(&self) -> bool {
        self.world_loaded
    }

    fn active_viewpoint(&self) -> Viewpoint<EntityId> {
        self.viewpoint.clone()
    }

    fn set_active_viewpoint(&mut self, viewpoint: Viewpoint<EntityId>) {
        self.viewpoint = viewpoint;
    }

    fn default_subject(&self) -> Option<EntityId> {
        self.world_loaded.then_some(self.player)
    }

    fn point_of_view(&self) -> PointOfView {
        self.point_of_view
    }

    fn set_point_of_view(&mut self, point_of_view: PointOfView) {
        self.point_of_view = point_of_view;
    }

    fn sample_pose(&self, subject: &EntityId, partial_tick: f32) -> Option<Pose> {
        self.entities
            .get(subject)
            .map(|entity| entity.eye_pose(partial_tick))
    }

    fn bounding_box(&self, subject: &EntityId) -> Option<Aabb> {
        self.entities.get(subject).map(SimEntity::bounding_box)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_follows_world() {
        let mut host = SimulatedHost::new();
        assert!(!host.is_session_ready());
        assert!(host.default_subject().is_none());

        host.load_world(0.1);
        assert!(host.is_session_ready());
        assert_eq!(host.default_subject(), Some(host.player()));

        host.unload_world();
        assert!(!host.is_session_ready());
        assert!(host.sample_pose(&host.player(), 1.0).is_none());
    }

    #[test]
    fn player_walks_and_samples_between_ticks() {
        let mut host = SimulatedHost::new();
        host.load_world(0.5);
        host.step();

        let player = host.player();
        let before = host.sample_pose(&player, 0.0).unwrap();
        let after = host.sample_pose(&player, 1.0).unwrap();
        assert_eq!(after.position.x - before.position.x, 0.5);
        assert_eq!(after.position.y, 64.0 + EYE_HEIGHT);

        let aabb = host.bounding_box(&player).unwrap();
        assert!(aabb.contains(after.position));
    }
}
