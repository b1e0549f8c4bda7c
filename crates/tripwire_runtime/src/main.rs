//! Tripwire Runtime
//!
//! Headless tick loop that drives an in-memory animator and asset source
//! through the diagnostics layers. Pass a settings JSON path as the first
//! argument to override the defaults.

use anyhow::{Context, Result};
use tripwire_anim::{AnimatorExt, ParameterKey, ParameterTable, ParameterType, ValidKeySet};
use tripwire_asset::{AssetLoader, MemoryAssetSource};
use tripwire_core::{DiagnosticsSettings, SimulationTime};

const FRAMES: u64 = 10;

#[derive(Debug, Clone)]
struct SpriteSheet {
    frames: u32,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    tracing::info!("Tripwire v{}", tripwire_core::VERSION);

    let settings = match std::env::args().nth(1) {
        Some(path) => DiagnosticsSettings::load(&path)
            .with_context(|| format!("failed to load diagnostics settings from {path}"))?,
        None => DiagnosticsSettings::default(),
    };

    let mut time = SimulationTime::new();

    let mut animator = ParameterTable::new()
        .with_parameter("Speed", ParameterType::Float)
        .with_parameter("Jump", ParameterType::Trigger)
        .with_parameter("IsGrounded", ParameterType::Bool);
    let mut keys = ValidKeySet::new();
    let speed = register(&animator, &mut keys, "Speed", ParameterType::Float)?;
    let grounded = register(&animator, &mut keys, "IsGrounded", ParameterType::Bool)?;
    // Misspelled on purpose: registration warns, dispatch through it is a no-op.
    let crouch = register(&animator, &mut keys, "Crouching", ParameterType::Bool)?;
    tracing::info!(registered = keys.len(), "animator parameters registered");

    let source = MemoryAssetSource::new()
        .with_asset("sprites/hero", SpriteSheet { frames: 8 })
        .with_asset("fx/dust", SpriteSheet { frames: 4 });
    let mut loader = AssetLoader::new(source, time.reader()).with_settings(settings);

    let hero = loader.load::<SpriteSheet>("sprites/hero")?;
    tracing::info!(frames = hero.frames, "hero sprite sheet loaded");

    for _ in 0..FRAMES {
        time.advance_tick();
        let frame = time.tick_count();

        let speed_value = (frame as f32 * 0.1).min(1.0);
        animator.safe_set_value(speed_value, speed, &keys);
        animator.safe_set_value(frame % 4 != 0, grounded, &keys);
        if !animator.safe_set_value(false, crouch, &keys) {
            tracing::trace!(frame, "crouch parameter unavailable");
        }
        if frame % 3 == 0 && animator.try_fire_trigger("Jump") {
            tracing::debug!(frame, "jump fired");
        }

        // Reloaded every frame for a stretch: the tracker flags frames 5 and 6.
        if (4..=6).contains(&frame) {
            let dust = loader.load::<SpriteSheet>("fx/dust")?;
            tracing::debug!(frame, frames = dust.frames, "dust effect loaded");
        }
        if frame == 8 && loader.load::<SpriteSheet>("sprites/missing").is_err() {
            tracing::info!(frame, "continuing without missing sprite sheet");
        }

        animator.consume_trigger("Jump");
    }

    let stats = loader.stats();
    tracing::info!(
        ticks = time.tick_count(),
        elapsed_ms = time.total_time().as_millis() as u64,
        parameter_writes = animator.write_count(),
        loads = stats.loads,
        failures = stats.failures,
        consecutive_frame_warnings = stats.consecutive_frame_warnings,
        "run complete"
    );

    Ok(())
}

/// Register a parameter, treating a miss as a warning.
fn register(
    animator: &ParameterTable,
    keys: &mut ValidKeySet,
    name: &str,
    parameter_type: ParameterType,
) -> Result<ParameterKey> {
    let key = animator
        .register_parameter(name, parameter_type, keys)
        .context("parameter name must not be empty")?;
    if !keys.contains(key) {
        tracing::warn!(name, %parameter_type, "animator has no such parameter");
    }
    Ok(key)
}
