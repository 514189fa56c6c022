use std::io;
use std::path::PathBuf;

use oki_core::tables::TableConfigError;

/// Failure to set up an [`Engine`](super::Engine).
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("IO error: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid table: {0}")]
    Tables(#[from] TableConfigError),
}
