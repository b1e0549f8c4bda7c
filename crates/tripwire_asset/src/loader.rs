//! Blocking asset loads with frame diagnostics
//!
//! [`AssetLoader::load`] turns the subsystem's asynchronous request into a
//! synchronous call: it blocks the calling thread until the request
//! completes. Before issuing the request the path goes through the frame
//! load tracker, which logs assets reloaded on consecutive frames. Neither
//! diagnostic changes the outcome of the load.
//!
//! Nothing is cached or retried. Loads take `&mut self`,
//! so tracker state has a single writer.

use crate::{AssetLoadError, AssetSource, FrameLoadTracker, LoadHandle, LoadStatus};
use tripwire_core::{DiagnosticsSettings, FrameClock};

/// Running totals for one loader.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadStats {
    pub loads: u64,
    pub failures: u64,
    pub consecutive_frame_warnings: u64,
}

pub struct AssetLoader<S, C> {
    source: S,
    clock: C,
    tracker: FrameLoadTracker,
    settings: DiagnosticsSettings,
    stats: LoadStats,
}

impl<S, C: FrameClock> AssetLoader<S, C> {
    pub fn new(source: S, clock: C) -> Self {
        Self {
            source,
            clock,
            tracker: FrameLoadTracker::new(),
            settings: DiagnosticsSettings::default(),
            stats: LoadStats::default(),
        }
    }

    pub fn with_settings(mut self, settings: DiagnosticsSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Load `path`, blocking until the subsystem finishes.
    pub fn load<T>(&mut self, path: &str) -> Result<T, AssetLoadError>
    where
        S: AssetSource<T>,
    {
        self.stats.loads += 1;
        if self.settings.track_frame_loads {
            self.track(path);
        }

        let mut handle = self.source.load_async(path);
        handle.wait_for_completion();

        let result = match handle.status() {
            LoadStatus::Succeeded => handle.take_result().ok_or_else(|| AssetLoadError::Failed {
                path: path.to_string(),
                reason: "subsystem reported success without a result".to_string(),
            }),
            LoadStatus::Failed => Err(AssetLoadError::Failed {
                path: path.to_string(),
                reason: handle
                    .failure_reason()
                    .unwrap_or_else(|| "subsystem reported failure".to_string()),
            }),
            LoadStatus::Pending => Err(AssetLoadError::Incomplete {
                path: path.to_string(),
            }),
        };

        if let Err(err) = &result {
            self.stats.failures += 1;
            if self.settings.log_load_failures {
                tracing::error!(path, error = %err, "asset load failed");
            }
        }
        result
    }

    fn track(&mut self, path: &str) {
        let frame = self.clock.frame();
        let Some(reload) = self.tracker.record_and_check(path, frame) else {
            return;
        };

        self.stats.consecutive_frame_warnings += 1;
        if self.settings.warn_consecutive_loads {
            tracing::warn!(
                path = %reload.path,
                frame = reload.frame,
                previous = reload.previous_count,
                current = reload.current_count,
                "asset loaded on consecutive frames; cache the loaded asset instead of reloading it"
            );
        }
    }

    pub fn stats(&self) -> LoadStats {
        self.stats
    }

    pub fn tracker(&self) -> &FrameLoadTracker {
        &self.tracker
    }

    pub fn settings(&self) -> &DiagnosticsSettings {
        &self.settings
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryAssetSource;
    use std::cell::Cell;
    use std::rc::Rc;

    fn loader(
        frame: &Rc<Cell<u64>>,
    ) -> AssetLoader<MemoryAssetSource<String>, impl FrameClock> {
        let frame = Rc::clone(frame);
        let source = MemoryAssetSource::new()
            .with_asset("sprites/hero", "hero".to_string())
            .with_asset("sprites/tree", "tree".to_string());
        AssetLoader::new(source, move || frame.get())
    }

    /// Subsystem whose requests never leave `Pending`.
    struct StuckSource;

    struct StuckHandle;

    impl LoadHandle<u32> for StuckHandle {
        fn status(&self) -> LoadStatus {
            LoadStatus::Pending
        }

        fn wait_for_completion(&mut self) {}

        fn take_result(&mut self) -> Option<u32> {
            None
        }
    }

    impl AssetSource<u32> for StuckSource {
        type Handle = StuckHandle;

        fn load_async(&self, _path: &str) -> StuckHandle {
            StuckHandle
        }
    }

    #[test]
    fn success_returns_the_subsystem_result_unchanged() {
        let frame = Rc::new(Cell::new(1));
        let mut loader = loader(&frame);

        assert_eq!(loader.load::<String>("sprites/hero"), Ok("hero".to_string()));
        assert_eq!(loader.stats().failures, 0);
    }

    #[test]
    fn failure_returns_an_error_and_counts_it() {
        let frame = Rc::new(Cell::new(1));
        let mut loader = loader(&frame);

        let err = loader.load::<String>("sprites/missing").unwrap_err();
        assert!(matches!(err, AssetLoadError::Failed { .. }));
        assert_eq!(err.path(), "sprites/missing");
        assert_eq!(loader.stats().failures, 1);
    }

    #[test]
    fn still_pending_after_wait_is_incomplete() {
        let mut loader = AssetLoader::new(StuckSource, || 0_u64);
        let err = loader.load::<u32>("anything").unwrap_err();
        assert_eq!(
            err,
            AssetLoadError::Incomplete {
                path: "anything".to_string()
            }
        );
    }

    #[test]
    fn consecutive_frame_reload_is_counted_but_still_loads() {
        let frame = Rc::new(Cell::new(5));
        let mut loader = loader(&frame);

        loader.load::<String>("sprites/hero").unwrap();
        loader.load::<String>("sprites/hero").unwrap();
        assert_eq!(loader.stats().consecutive_frame_warnings, 0);

        frame.set(6);
        assert_eq!(loader.load::<String>("sprites/hero"), Ok("hero".to_string()));
        assert_eq!(loader.stats().consecutive_frame_warnings, 1);

        frame.set(8);
        loader.load::<String>("sprites/hero").unwrap();
        assert_eq!(loader.stats().consecutive_frame_warnings, 1);
    }

    #[test]
    fn failed_loads_still_feed_the_tracker() {
        let frame = Rc::new(Cell::new(1));
        let mut loader = loader(&frame);

        let _ = loader.load::<String>("sprites/missing");
        frame.set(2);
        let _ = loader.load::<String>("sprites/missing");

        assert_eq!(loader.stats().consecutive_frame_warnings, 1);
        assert_eq!(loader.stats().failures, 2);
    }

    #[test]
    fn nothing_is_cached_between_loads() {
        let frame = Rc::new(Cell::new(1));
        let mut loader = loader(&frame);

        for _ in 0..3 {
            loader.load::<String>("sprites/tree").unwrap();
        }
        assert_eq!(loader.source().requests(), 3);
        assert_eq!(loader.stats().loads, 3);
    }

    #[test]
    fn tracking_can_be_switched_off() {
        let frame = Rc::new(Cell::new(1));
        let settings = DiagnosticsSettings {
            track_frame_loads: false,
            ..Default::default()
        };
        let mut loader = loader(&frame).with_settings(settings);

        loader.load::<String>("sprites/hero").unwrap();
        frame.set(2);
        loader.load::<String>("sprites/hero").unwrap();

        assert_eq!(loader.stats().consecutive_frame_warnings, 0);
        assert!(loader.tracker().current().is_empty());
    }

    #[test]
    fn silenced_warnings_are_still_counted() {
        let frame = Rc::new(Cell::new(1));
        let settings = DiagnosticsSettings {
            warn_consecutive_loads: false,
            ..Default::default()
        };
        let mut loader = loader(&frame).with_settings(settings);

        loader.load::<String>("sprites/hero").unwrap();
        frame.set(2);
        loader.load::<String>("sprites/hero").unwrap();

        assert_eq!(loader.stats().consecutive_frame_warnings, 1);
    }
}
