//! Segments: the unit handed from the scanner to its consumer.

use std::borrow::Cow;
use std::fmt;

/// Classification of a [`Segment`].
///
/// Closed set: consumers match exhaustively.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    /// A maximal run of non-whitespace codepoints.
    Text,
    /// A maximal run of whitespace codepoints.
    Whitespace,
    /// Terminal marker for a successful scan.
    EndOfInput,
    /// Terminal marker for a failed scan. The value holds the message.
    Error,
}

impl SegmentKind {
    /// Returns `true` for the kinds that end a scan.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::EndOfInput | Self::Error)
    }

    /// Returns `true` for the kinds that carry a slice of the input.
    #[inline]
    pub fn is_run(self) -> bool {
        matches!(self, Self::Text | Self::Whitespace)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Whitespace => "whitespace",
            Self::EndOfInput => "end of input",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified piece of the input.
///
/// Text and whitespace segments borrow the exact bytes they cover; error
/// segments own their message.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Segment<'a> {
    pub kind: SegmentKind,
    /// The run's text, the error message, or empty for end of input.
    pub value: Cow<'a, str>,
    /// Byte offset in the input where the segment starts. For errors,
    /// the offset at which scanning failed.
    pub pos: usize,
}

impl<'a> Segment<'a> {
    pub fn text(value: &'a str, pos: usize) -> Self {
        Self {
            kind: SegmentKind::Text,
            value: Cow::Borrowed(value),
            pos,
        }
    }

    pub fn whitespace(value: &'a str, pos: usize) -> Self {
        Self {
            kind: SegmentKind::Whitespace,
            value: Cow::Borrowed(value),
            pos,
        }
    }

    /// A run of the given kind.
    pub(crate) fn run(kind: SegmentKind, value: &'a str, pos: usize) -> Self {
        debug_assert!(kind.is_run(), "{kind} is not a run kind");
        Self {
            kind,
            value: Cow::Borrowed(value),
            pos,
        }
    }

    pub fn end_of_input(pos: usize) -> Self {
        Self {
            kind: SegmentKind::EndOfInput,
            value: Cow::Borrowed(""),
            pos,
        }
    }

    pub fn error(message: impl Into<String>, pos: usize) -> Self {
        Self {
            kind: SegmentKind::Error,
            value: Cow::Owned(message.into()),
            pos,
        }
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.kind.is_terminal()
    }

    /// Byte offset one past the end of the segment's input slice.
    ///
    /// Terminal segments cover no input, so this equals `pos` for them.
    pub fn end(&self) -> usize {
        if self.kind.is_run() {
            self.pos + self.value.len()
        } else {
            self.pos
        }
    }

    /// Detach the segment from the input it borrows.
    pub fn into_owned(self) -> Segment<'static> {
        Segment {
            kind: self.kind,
            value: Cow::Owned(self.value.into_owned()),
            pos: self.pos,
        }
    }
}
