use thiserror::Error;

/// Why a blocking load produced no asset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssetLoadError {
    #[error("failed to load asset '{path}': {reason}")]
    Failed { path: String, reason: String },

    #[error("asset '{path}' was still pending after waiting for completion")]
    Incomplete { path: String },
}

impl AssetLoadError {
    pub fn path(&self) -> &str {
        match self {
            AssetLoadError::Failed { path, .. } | AssetLoadError::Incomplete { path } => path,
        }
    }
}
