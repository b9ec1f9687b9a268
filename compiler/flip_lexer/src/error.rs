//! Error types for the scan-and-assemble pipeline.

use thiserror::Error;

/// An unrecoverable condition flagged by the scanner.
///
/// Carries the scanner's diagnostic message and the byte offset at which
/// scanning stopped.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Error)]
#[error("{message} at byte {pos}")]
pub struct ScanError {
    pub message: String,
    pub pos: usize,
}

/// Failure of a [`parse`](crate::parse) call. No partial output is kept.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The scanner emitted an error segment.
    #[error("error processing the following {:?} at byte {}", .0.message, .0.pos)]
    Scan(#[from] ScanError),

    /// The segment stream ended without a terminal segment.
    #[error("segment stream ended before end of input was signaled")]
    Disconnected,

    /// The scanner thread panicked.
    #[error("scanner thread panicked")]
    ScannerPanicked,

    /// The scanner thread could not be started.
    #[error("failed to spawn scanner thread")]
    Spawn(#[source] std::io::Error),
}

impl ParseError {
    /// The scan error behind this failure, if the scanner reported one.
    pub fn scan_error(&self) -> Option<&ScanError> {
        match self {
            Self::Scan(err) => Some(err),
            Self::Disconnected | Self::ScannerPanicked | Self::Spawn(_) => None,
        }
    }
}
