//! Word-reversing lexer pipeline.
//!
//! [`parse`] reverses the codepoints of every maximal non-whitespace run
//! in its input and keeps every whitespace run byte-for-byte:
//!
//! ```text
//! "  which   is  harder"  ->  "  hcihw   si  redrah"
//! ```
//!
//! Internally a [`Scanner`] (from `flip_lexer_core`) runs on its own
//! thread and streams [`Segment`]s through a bounded channel to an
//! [`Assembler`] on the caller's thread. See [`pipeline`] for the
//! concurrency model and [`PipelineConfig`] for the knobs.
//!
//! Every call owns its scanner, channel and assembler; calls never share
//! mutable state and may run concurrently.

mod assembler;
mod error;
pub mod pipeline;
pub mod simple;

pub use assembler::{reverse_codepoints, Assembler};
pub use error::{ParseError, ScanError};
pub use flip_lexer_core::{is_whitespace, Scanner, Segment, SegmentKind};
pub use pipeline::{Execution, Pipeline, PipelineConfig, DEFAULT_CHANNEL_CAPACITY};

/// Reverse each word of `text`, preserving whitespace exactly.
///
/// Uses the default threaded pipeline. Returns the scanner's error,
/// wrapped with context, if scanning fails; never a partial result.
pub fn parse(text: &str) -> Result<String, ParseError> {
    Pipeline::default().run_str(text)
}

/// Like [`parse`], over bytes that may not be valid UTF-8.
///
/// A malformed sequence fails with [`ParseError::Scan`].
pub fn parse_bytes(bytes: &[u8]) -> Result<String, ParseError> {
    Pipeline::default().run_bytes(bytes)
}
