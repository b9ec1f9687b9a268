//! Scanner/assembler wiring.
//!
//! In threaded mode the scanner runs on its own scoped thread and hands
//! segments to the assembler (on the caller's thread) through a bounded
//! `crossbeam` channel:
//!
//! ```text
//! input ──► Scanner ──► bounded(capacity) ──► Assembler ──► String
//!           (flip-scanner thread)              (caller)
//! ```
//!
//! The scanner blocks when the channel is full, so it can never run more
//! than `capacity` segments ahead. The channel is FIFO and has exactly one
//! sender and one receiver. The sender is dropped after the terminal
//! segment, which closes the channel.
//!
//! Inline mode pulls segments straight from the scanner on the caller's
//! thread. Ordering and results are identical.

use std::ops::ControlFlow;
use std::thread;

use crossbeam::channel::{self, Sender};
use flip_lexer_core::{Scanner, Segment};

use crate::assembler::Assembler;
use crate::error::ParseError;

/// Segments buffered between scanner and assembler in threaded mode.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 4;

const SCANNER_THREAD_NAME: &str = "flip-scanner";

/// Where the scanner runs relative to the assembler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Execution {
    /// Scanner on a dedicated thread, connected by a bounded channel.
    ///
    /// A capacity of `0` makes every hand-off a rendezvous.
    Threaded { capacity: usize },
    /// Scanner pulled lazily on the caller's thread.
    Inline,
}

impl Default for Execution {
    fn default() -> Self {
        Self::Threaded {
            capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

/// Pipeline configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PipelineConfig {
    pub execution: Execution,
}

impl PipelineConfig {
    /// Threaded execution with the given channel capacity.
    pub fn threaded(capacity: usize) -> Self {
        Self {
            execution: Execution::Threaded { capacity },
        }
    }

    /// Single-threaded, pull-based execution.
    pub fn inline() -> Self {
        Self {
            execution: Execution::Inline,
        }
    }

    /// Switch to threaded execution with `capacity` buffered segments.
    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.execution = Execution::Threaded { capacity };
        self
    }
}

/// Runs one scanner and one assembler per call.
///
/// Holds no state besides its configuration; a single `Pipeline` can
/// serve any number of concurrent calls.
#[derive(Clone, Copy, Debug, Default)]
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Reverse every text run of `text`, keeping whitespace runs as-is.
    pub fn run_str(&self, text: &str) -> Result<String, ParseError> {
        self.drive(Scanner::new(text), text.len())
    }

    /// Like [`run_str()`](Self::run_str), over bytes that may not be UTF-8.
    pub fn run_bytes(&self, bytes: &[u8]) -> Result<String, ParseError> {
        self.drive(Scanner::from_bytes(bytes), bytes.len())
    }

    #[tracing::instrument(level = "debug", skip_all, fields(len = len, execution = ?self.config.execution))]
    fn drive(&self, scanner: Scanner<'_>, len: usize) -> Result<String, ParseError> {
        let assembler = Assembler::with_capacity(len);
        match self.config.execution {
            Execution::Inline => assembler.assemble(scanner),
            Execution::Threaded { capacity } => run_threaded(scanner, assembler, capacity),
        }
    }
}

fn run_threaded<'a>(
    scanner: Scanner<'a>,
    assembler: Assembler,
    capacity: usize,
) -> Result<String, ParseError> {
    let (tx, rx) = channel::bounded::<Segment<'a>>(capacity);
    let span = tracing::Span::current();

    thread::scope(|s| {
        let producer = thread::Builder::new()
            .name(SCANNER_THREAD_NAME.to_string())
            .spawn_scoped(s, move || {
                let _guard = span.enter();
                produce(scanner, &tx);
            })
            .map_err(ParseError::Spawn)?;

        let result = assembler.assemble(rx.iter());
        // Unblocks the producer if the assembler stopped before the
        // terminal segment was taken off the channel.
        drop(rx);

        if producer.join().is_err() {
            return Err(ParseError::ScannerPanicked);
        }
        result
    })
}

/// Producer loop: push every segment into the channel.
///
/// The caller owns `tx`; dropping it after this returns closes the channel.
fn produce<'a>(scanner: Scanner<'a>, tx: &Sender<Segment<'a>>) {
    let flow = scanner.run(|segment| {
        tracing::trace!(kind = %segment.kind, pos = segment.pos, len = segment.value.len(), "emit");
        match tx.send(segment) {
            Ok(()) => ControlFlow::Continue(()),
            Err(_) => ControlFlow::Break(()),
        }
    });
    if flow.is_break() {
        tracing::debug!("assembler hung up before the terminal segment");
    }
}

#[cfg(test)]
mod tests;
