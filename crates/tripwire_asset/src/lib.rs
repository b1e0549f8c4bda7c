//! Tripwire Asset Diagnostics
//!
//! Blocking loads over an asynchronous asset-loading subsystem, with
//! frame-scoped detection of assets reloaded on consecutive frames.

mod error;
pub mod loader;
pub mod source;
pub mod tracker;

pub use error::AssetLoadError;
pub use loader::{AssetLoader, LoadStats};
pub use source::{AssetSource, LoadHandle, LoadStatus, MemoryAssetSource, MemoryLoadHandle};
pub use tracker::{ConsecutiveFrameLoad, FrameLoadStat, FrameLoadTracker};
