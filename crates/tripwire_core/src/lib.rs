//! Tripwire Core
//!
//! Shared pieces the diagnostics layers build on:
//! - Host frame clock (tick counter read by frame-scoped diagnostics)
//! - Diagnostics settings

pub mod settings;
pub mod time;

pub use settings::{DiagnosticsSettings, SettingsError};
pub use time::{FrameClock, SimulationTime, TickReader};

/// Tripwire version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
