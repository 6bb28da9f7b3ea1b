use std::path::PathBuf;
use thiserror::Error;

/// The main error type for visdrone2yolo operations.
///
/// Per-line and per-file problems (malformed rows, missing or undecodable
/// images) are recovered locally and never surface here; an `Err` means
/// the run itself cannot continue (bad layout, failed write).
#[derive(Debug, Error)]
pub enum VisdroneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid dataset layout at {}: {message}", path.display())]
    LayoutInvalid { path: PathBuf, message: String },

    #[error("failed to serialize summary to JSON: {0}")]
    SummaryJson(#[from] serde_json::Error),
}
