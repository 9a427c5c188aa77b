//! Error type for the editor's fallible edges
//!
//! Scene edits never fail: a rejected placement, move or resize is a
//! silent no-op. Errors only come from settings files, JSON I/O and
//! restoring a serialized scene.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while setting up an editor session or its scene
#[derive(Debug, Error)]
pub enum EditorError {
    #[error("Failed to read settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid settings: {0}")]
    InvalidConfig(String),

    #[error("Invalid scene: {0}")]
    InvalidScene(String),
}
