//! Low-level scanner for the flip pipeline.
//!
//! Walks an input codepoint by codepoint and partitions it into maximal
//! runs of text and whitespace. Each run is produced as a [`Segment`];
//! the sequence always ends with exactly one terminal segment
//! ([`SegmentKind::EndOfInput`] or [`SegmentKind::Error`]).
//!
//! This crate has no dependencies. The concurrent pipeline that moves
//! segments across threads lives in `flip_lexer`.

mod char_class;
mod cursor;
mod scanner;
mod segment;

pub use char_class::is_whitespace;
pub use cursor::{Cursor, Step};
pub use scanner::Scanner;
pub use segment::{Segment, SegmentKind};
