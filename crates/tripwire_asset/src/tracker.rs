//! Frame-scoped load tracking
//!
//! Keeps per-path load counts for the current and the previous frame. A
//! load is flagged when the same path was already loaded during the
//! immediately preceding frame.
//!
//! Only the previous generation is consulted, so repeated loads of a path
//! within a single frame are never flagged on their own, and a path loaded
//! in frame N and again in frame N + 2 is not flagged either.

use rustc_hash::FxHashMap;

/// Load counts per logical path for one frame.
#[derive(Debug, Default, Clone)]
pub struct FrameLoadStat {
    counts: FxHashMap<String, u32>,
}

impl FrameLoadStat {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bump the count for `path` and return the new value.
    pub fn increment(&mut self, path: &str) -> u32 {
        if let Some(count) = self.counts.get_mut(path) {
            *count = count.saturating_add(1);
            return *count;
        }
        self.counts.insert(path.to_string(), 1);
        1
    }

    pub fn get(&self, path: &str) -> u32 {
        self.counts.get(path).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn clear(&mut self) {
        self.counts.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(path, count)| (path.as_str(), *count))
    }
}

/// A path loaded in this frame after also being loaded in the previous one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsecutiveFrameLoad {
    pub path: String,
    pub previous_count: u32,
    pub current_count: u32,
    pub frame: u64,
}

#[derive(Debug, Default)]
pub struct FrameLoadTracker {
    current: FrameLoadStat,
    previous: FrameLoadStat,
    frame_id: u64,
}

impl FrameLoadTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a load of `path` during `frame`.
    ///
    /// Rotates the generations first when `frame` differs from the frame
    /// of the last recorded load. Only a one-tick advance keeps the old
    /// counts as the previous generation; any other jump starts both
    /// generations empty.
    pub fn record_and_check(&mut self, path: &str, frame: u64) -> Option<ConsecutiveFrameLoad> {
        if frame != self.frame_id {
            if frame == self.frame_id.wrapping_add(1) {
                self.previous = std::mem::take(&mut self.current);
            } else {
                // No load happened in the frame just before `frame`.
                self.previous.clear();
                self.current.clear();
            }
            self.frame_id = frame;
        }

        let current_count = self.current.increment(path);
        let previous_count = self.previous.get(path);
        if previous_count == 0 {
            return None;
        }

        Some(ConsecutiveFrameLoad {
            path: path.to_string(),
            previous_count,
            current_count,
            frame,
        })
    }

    pub fn frame_id(&self) -> u64 {
        self.frame_id
    }

    pub fn current_count(&self, path: &str) -> u32 {
        self.current.get(path)
    }

    pub fn previous_count(&self, path: &str) -> u32 {
        self.previous.get(path)
    }

    pub fn current(&self) -> &FrameLoadStat {
        &self.current
    }

    pub fn previous(&self) -> &FrameLoadStat {
        &self.previous
    }

    pub fn reset(&mut self) {
        self.current.clear();
        self.previous.clear();
        self.frame_id = 0;
    }
}
