use rand::Rng;
use serde::Serialize;
use tracing::{debug, info, Level};

use tank_arena_server::config::SimConfig;
use tank_arena_server::game::constants::sim;
use tank_arena_server::game::events::GameEvent;
use tank_arena_server::game::game_loop::Simulation;
use tank_arena_server::game::state::EntityId;
use tank_arena_server::util::vec3::Vec3;

/// Chance per tick that an idle bot fires
const BOT_FIRE_CHANCE: f64 = 0.02;

/// Contact distance for the headless stand-in physics
const SHELL_CONTACT_RADIUS: f32 = 1.0;

/// Radius of the circle bots spawn on
const BOT_SPAWN_RADIUS: f32 = 15.0;

#[derive(Serialize)]
struct ScoreLine {
    name: String,
    kills: u32,
    deaths: u32,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();

    info!("Tank Arena Server v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = SimConfig::load_or_default();
    config.validate().map_err(anyhow::Error::msg)?;
    info!(
        "Configuration loaded: respawn_delay={}s, pickup_heal={}",
        config.respawn_delay_secs, config.pickup_heal
    );

    let bot_count: usize = std::env::var("BOT_TANKS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(4);

    let mut sim = Simulation::new(config);
    for i in 0..bot_count {
        let angle = i as f32 / bot_count as f32 * std::f32::consts::TAU;
        let position = Vec3::from_heading(angle) * BOT_SPAWN_RADIUS;
        sim.join(&format!("Bot{}", i + 1), position);
    }
    sim.initialize_camera();
    info!("Arena ready with {} tanks", bot_count);

    let mut interval =
        tokio::time::interval(std::time::Duration::from_millis(sim::TICK_DURATION_MS));
    let mut shutdown = Box::pin(tokio::signal::ctrl_c());

    loop {
        tokio::select! {
            _ = interval.tick() => {
                drive_bots(&mut sim);
                report_contacts(&mut sim);
                for event in sim.step() {
                    log_event(&event);
                }
            }
            _ = &mut shutdown => {
                info!("Shutdown signal received");
                break;
            }
        }
    }

    // Final scoreboard
    let mut scores: Vec<ScoreLine> = sim
        .state
        .tanks
        .values()
        .map(|t| ScoreLine {
            name: t.name.clone(),
            kills: t.kills,
            deaths: t.deaths,
        })
        .collect();
    scores.sort_by(|a, b| b.kills.cmp(&a.kills));
    info!("Scoreboard: {}", serde_json::to_string(&scores)?);
    info!("Server stopped");

    Ok(())
}

/// Bots occasionally loose a shot in a random direction.
fn drive_bots(sim: &mut Simulation) {
    let mut rng = rand::thread_rng();
    let shooters: Vec<_> = sim.state.alive_tanks().map(|t| t.id).collect();
    for id in shooters {
        if rng.gen_bool(BOT_FIRE_CHANCE) {
            let heading = rng.gen_range(0.0..std::f32::consts::TAU);
            let charge = rng.gen_range(0.0..1.0);
            let _ = sim.fire(id, Vec3::from_heading(heading), charge);
        }
    }
}

/// Stand-in for the physics collaborator: a shell touching a living tank
/// other than its owner detonates.
fn report_contacts(sim: &mut Simulation) {
    let mut contacts: Vec<EntityId> = Vec::new();
    for shell in &sim.state.shells {
        let touched = sim.state.alive_tanks().any(|tank| {
            tank.id != shell.owner
                && tank.position.distance_to(shell.position) <= SHELL_CONTACT_RADIUS
        });
        if touched {
            contacts.push(shell.id);
        }
    }
    for shell_id in contacts {
        sim.report_shell_contact(shell_id);
    }
}

fn log_event(event: &GameEvent) {
    match event {
        GameEvent::TankDied { tank, killer, .. } => {
            info!(%tank, ?killer, "tank destroyed");
        }
        GameEvent::TankRespawned { tank } => info!(%tank, "tank respawned"),
        GameEvent::PickupCollected { tank, .. } => info!(%tank, "health pack collected"),
        GameEvent::ShellExploded { position } => debug!(?position, "shell exploded"),
        other => debug!(?other, "event"),
    }
}
