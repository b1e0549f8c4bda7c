//! Deterministic time system
//!
//! Fixed 60Hz tick rate. The tick counter doubles as the frame id that
//! frame-scoped diagnostics compare against.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Fixed simulation tick rate (60 Hz = 16.666ms per tick)
pub const TICK_RATE_HZ: u32 = 60;
pub const TICK_DURATION: Duration = Duration::from_micros(16_666); // ~16.666ms

/// Read-only view of the host's monotonically increasing frame tick.
pub trait FrameClock {
    fn frame(&self) -> u64;
}

impl<F> FrameClock for F
where
    F: Fn() -> u64,
{
    fn frame(&self) -> u64 {
        self()
    }
}

/// Cloneable handle onto a [`SimulationTime`] tick counter.
///
/// Lets a consumer observe the frame while the host loop keeps ownership
/// of the clock and advances it.
#[derive(Debug, Clone)]
pub struct TickReader(Arc<AtomicU64>);

impl FrameClock for TickReader {
    fn frame(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }
}

/// Simulation time tracker
pub struct SimulationTime {
    tick_count: Arc<AtomicU64>,
    accumulated_time: Duration,
}

impl SimulationTime {
    pub fn new() -> Self {
        Self {
            tick_count: Arc::new(AtomicU64::new(0)),
            accumulated_time: Duration::ZERO,
        }
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count.load(Ordering::Relaxed)
    }

    pub fn advance_tick(&mut self) {
        self.tick_count.fetch_add(1, Ordering::Relaxed);
        self.accumulated_time += TICK_DURATION;
    }

    pub fn total_time(&self) -> Duration {
        self.accumulated_time
    }

    pub fn reader(&self) -> TickReader {
        TickReader(Arc::clone(&self.tick_count))
    }
}

impl FrameClock for SimulationTime {
    fn frame(&self) -> u64 {
        self.tick_count()
    }
}

impl Default for SimulationTime {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_tick_accumulates_fixed_steps() {
        let mut time = SimulationTime::new();
        time.advance_tick();
        time.advance_tick();
        assert_eq!(time.tick_count(), 2);
        assert_eq!(time.total_time(), TICK_DURATION * 2);
    }

    #[test]
    fn reader_follows_the_clock() {
        let mut time = SimulationTime::new();
        let reader = time.reader();
        assert_eq!(reader.frame(), 0);

        time.advance_tick();
        assert_eq!(reader.frame(), 1);
        assert_eq!(reader.clone().frame(), time.frame());
    }

    #[test]
    fn closures_are_clocks() {
        let clock = || 42_u64;
        assert_eq!(clock.frame(), 42);
    }
}
