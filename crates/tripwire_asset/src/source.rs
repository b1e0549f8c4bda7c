//! Asset-loading subsystem interface
//!
//! The subsystem resolves logical paths asynchronously; this crate only
//! starts a request, waits on it and reads the outcome.

use rustc_hash::FxHashMap;
use std::cell::Cell;

/// Completion state of an in-flight load.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LoadStatus {
    Pending,
    Succeeded,
    Failed,
}

/// Handle to one asynchronous load request.
pub trait LoadHandle<T> {
    fn status(&self) -> LoadStatus;

    /// Block the calling thread until the request leaves `Pending`.
    fn wait_for_completion(&mut self);

    /// Take the loaded value. Only meaningful once `status` is `Succeeded`.
    fn take_result(&mut self) -> Option<T>;

    /// Subsystem-provided description of a failed load, if any.
    fn failure_reason(&self) -> Option<String> {
        None
    }
}

/// Starts asynchronous loads of `T` by logical path.
pub trait AssetSource<T> {
    type Handle: LoadHandle<T>;

    fn load_async(&self, path: &str) -> Self::Handle;
}

/// Assets held in memory, keyed by path.
///
/// Handles stay `Pending` until waited on. Every request is served fresh
/// from the map; nothing is cached on the handle side.
#[derive(Debug)]
pub struct MemoryAssetSource<T> {
    assets: FxHashMap<String, T>,
    requests: Cell<usize>,
}

impl<T> MemoryAssetSource<T> {
    pub fn new() -> Self {
        Self {
            assets: FxHashMap::default(),
            requests: Cell::new(0),
        }
    }

    pub fn with_asset(mut self, path: impl Into<String>, asset: T) -> Self {
        self.insert(path, asset);
        self
    }

    pub fn insert(&mut self, path: impl Into<String>, asset: T) -> Option<T> {
        self.assets.insert(path.into(), asset)
    }

    /// Number of load requests issued so far.
    pub fn requests(&self) -> usize {
        self.requests.get()
    }
}

impl<T> Default for MemoryAssetSource<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> AssetSource<T> for MemoryAssetSource<T> {
    type Handle = MemoryLoadHandle<T>;

    fn load_async(&self, path: &str) -> Self::Handle {
        self.requests.set(self.requests.get() + 1);
        let outcome = self
            .assets
            .get(path)
            .cloned()
            .ok_or_else(|| format!("no asset registered at '{path}'"));
        MemoryLoadHandle {
            outcome: Some(outcome),
            completed: false,
        }
    }
}

#[derive(Debug)]
pub struct MemoryLoadHandle<T> {
    outcome: Option<Result<T, String>>,
    completed: bool,
}

impl<T> LoadHandle<T> for MemoryLoadHandle<T> {
    fn status(&self) -> LoadStatus {
        if !self.completed {
            return LoadStatus::Pending;
        }
        match &self.outcome {
            Some(Err(_)) => LoadStatus::Failed,
            _ => LoadStatus::Succeeded,
        }
    }

    fn wait_for_completion(&mut self) {
        self.completed = true;
    }

    fn take_result(&mut self) -> Option<T> {
        if !self.completed {
            return None;
        }
        match self.outcome.take() {
            Some(Ok(asset)) => Some(asset),
            other => {
                self.outcome = other;
                None
            }
        }
    }

    fn failure_reason(&self) -> Option<String> {
        match &self.outcome {
            Some(Err(reason)) => Some(reason.clone()),
            _ => None,
        }
    }
}
