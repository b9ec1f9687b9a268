//! Two-state scanner producing text and whitespace runs.
//!
//! # Design
//!
//! The scanner alternates between two states, `State::Text` and
//! `State::Whitespace`. A state handler reads codepoints while they
//! belong to its class. When it meets a codepoint of the other class it
//! steps back over it, emits the accumulated run (if non-empty) and returns
//! the other state. At end of input it emits the final run (if non-empty)
//! followed by [`SegmentKind::EndOfInput`] and returns `None`.
//!
//! The driver is a plain loop over `Option<State>`, so input length never
//! affects stack depth. Segments are produced on demand through
//! [`Iterator`]; the pipeline in `flip_lexer` pushes them through a
//! channel, while single-threaded callers pull them directly.

use std::collections::VecDeque;
use std::iter::FusedIterator;
use std::ops::ControlFlow;

use crate::char_class::is_whitespace;
use crate::cursor::{Cursor, Step};
use crate::segment::{Segment, SegmentKind};

/// Scanner state: which class of run is being accumulated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Text,
    Whitespace,
}

impl State {
    fn kind(self) -> SegmentKind {
        match self {
            Self::Text => SegmentKind::Text,
            Self::Whitespace => SegmentKind::Whitespace,
        }
    }

    fn accepts(self, c: char) -> bool {
        match self {
            Self::Text => !is_whitespace(c),
            Self::Whitespace => is_whitespace(c),
        }
    }

    fn other(self) -> Self {
        match self {
            Self::Text => Self::Whitespace,
            Self::Whitespace => Self::Text,
        }
    }
}

/// Splits an input into alternating text and whitespace [`Segment`]s.
///
/// Yields every run in input order, then exactly one terminal segment,
/// then `None` forever.
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    /// Offset where the current run began.
    start: usize,
    /// `None` once a terminal segment has been queued.
    state: Option<State>,
    /// Segments produced by the last state step, not yet handed out.
    /// Holds at most two (a final run and its terminal marker).
    pending: VecDeque<Segment<'a>>,
}

impl<'a> Scanner<'a> {
    /// Create a scanner over validated text.
    pub fn new(source: &'a str) -> Self {
        Self::with_cursor(Cursor::new(source))
    }

    /// Create a scanner over raw bytes.
    ///
    /// A malformed UTF-8 sequence ends the scan with an error segment.
    pub fn from_bytes(source: &'a [u8]) -> Self {
        Self::with_cursor(Cursor::from_bytes(source))
    }

    fn with_cursor(cursor: Cursor<'a>) -> Self {
        Self {
            cursor,
            start: 0,
            state: Some(State::Text),
            pending: VecDeque::with_capacity(2),
        }
    }

    /// Returns `true` once the terminal segment has been handed out.
    pub fn is_finished(&self) -> bool {
        self.state.is_none() && self.pending.is_empty()
    }

    /// Drive the scanner to completion, handing each segment to `sink`.
    ///
    /// Stops early if `sink` returns [`ControlFlow::Break`], and reports
    /// that back to the caller.
    pub fn run(self, mut sink: impl FnMut(Segment<'a>) -> ControlFlow<()>) -> ControlFlow<()> {
        for segment in self {
            sink(segment)?;
        }
        ControlFlow::Continue(())
    }

    fn step(&mut self, state: State) -> Option<State> {
        loop {
            match self.cursor.bump() {
                Step::Char(c) if state.accepts(c) => {}
                Step::Char(_) => {
                    self.cursor.back_up();
                    if self.cursor.pos() > self.start {
                        self.emit_run(state.kind())?;
                    }
                    return Some(state.other());
                }
                Step::Eof => return self.finish(state.kind()),
                Step::Invalid { byte } => {
                    return self.fail(format!("invalid UTF-8 sequence: {byte:#04x}"));
                }
            }
        }
    }

    /// Queue the run `start..pos` and start a new one at `pos`.
    ///
    /// Returns `None` (after queueing an error) if the run cannot be
    /// sliced as UTF-8.
    fn emit_run(&mut self, kind: SegmentKind) -> Option<()> {
        let pos = self.cursor.pos();
        let Some(value) = self.cursor.slice(self.start, pos) else {
            let start = self.start;
            return self.fail(format!(
                "internal scanner fault: {kind} run {start}..{pos} is not valid UTF-8"
            ));
        };
        self.pending.push_back(Segment::run(kind, value, self.start));
        self.start = pos;
        Some(())
    }

    fn finish(&mut self, kind: SegmentKind) -> Option<State> {
        if self.cursor.pos() > self.start {
            self.emit_run(kind)?;
        }
        self.pending
            .push_back(Segment::end_of_input(self.cursor.pos()));
        None
    }

    fn fail<T>(&mut self, message: String) -> Option<T> {
        self.pending
            .push_back(Segment::error(message, self.cursor.pos()));
        None
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(segment) = self.pending.pop_front() {
                return Some(segment);
            }
            let state = self.state.take()?;
            self.state = self.step(state);
        }
    }
}

impl FusedIterator for Scanner<'_> {}
