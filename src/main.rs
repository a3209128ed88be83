//! InfinityLib - dynamic camera harness
//!
//! Runs the dynamic camera against a headless simulated client: loads a
//! world, flies the camera out to orbit a mob, brings it back to the walking
//! player and unloads the world again.

mod host;
mod orbit;
mod settings;

use std::rc::Rc;

use anyhow::{Context, Result};
use infinitylib_camera::{CameraSession, CameraStatus};
use infinitylib_core::TickClock;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use host::SimulatedHost;
use orbit::OrbitController;
use settings::Settings;

fn main() -> Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("Failed to set subscriber")?;

    info!("Starting InfinityLib camera harness...");

    let settings = Settings::load();
    settings.validate()?;
    if std::env::args().any(|arg| arg == "--save-settings") {
        settings.save().context("Failed to save settings")?;
    }

    let mut clock = TickClock::new(settings.time.clone());
    let mut host = SimulatedHost::new();
    let mut session = CameraSession::new(settings.camera.clone());

    // No world yet, so there is no camera to control
    session.tick(&mut host);
    debug!("Camera before world load: {:?}", session.status());

    let mob = host.load_world(settings.simulation.player_speed);
    let orbit = Rc::new(OrbitController::new(&settings.simulation, mob));
    orbit.update(&host);
    if !session.start_controlling(&mut host, orbit.clone()) {
        anyhow::bail!("Dynamic camera refused the orbit controller");
    }

    let mut last_status = session.status();
    let mut hid_player = false;
    let mut frames = 0;
    while !orbit.is_done() {
        frames += 1;
        if frames > settings.simulation.max_frames {
            anyhow::bail!(
                "Camera still {:?} after {} frames",
                session.status(),
                settings.simulation.max_frames
            );
        }

        for _ in 0..clock.advance(settings.simulation.frame_delta) {
            host.step();
            orbit.update(&host);
            session.tick(&mut host);
        }

        let status = session.status();
        if status != last_status {
            info!(
                "Camera {} at tick {} (frame {})",
                status.name(),
                clock.total_ticks,
                session.animation_frame()
            );
            if status == CameraStatus::Observing {
                session.on_field_of_view_update(70.0);
            }
            last_status = status;
        }

        // What the renderer would do each frame
        let partial_tick = clock.partial_tick();
        if host.is_viewing_through_camera() {
            if let Some(pose) = session.sampled_pose(partial_tick) {
                debug!(
                    "Render from ({:.2}, {:.2}, {:.2}) pitch {:.1} yaw {:.1}",
                    pose.position.x, pose.position.y, pose.position.z, pose.pitch, pose.yaw
                );
            }
        }
        let inside = session.is_camera_in_subject(&host, &host.player(), partial_tick);
        if inside != hid_player {
            debug!("Player model {}", if inside { "hidden" } else { "shown" });
            hid_player = inside;
        }
    }

    info!(
        "Observation finished after {} ticks over {} frames",
        clock.total_ticks, clock.frame_count
    );

    host.unload_world();
    session.invalidate();
    info!("World unloaded, camera status {:?}", session.status());
    Ok(())
}
