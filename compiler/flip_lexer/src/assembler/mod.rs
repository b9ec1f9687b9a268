//! Assembler: the consumer side of the pipeline.
//!
//! Receives segments in emission order, reverses the codepoints of each
//! text run, copies whitespace runs through unchanged, and finishes on the
//! first terminal segment.

use std::ops::ControlFlow;

use flip_lexer_core::{Segment, SegmentKind};

use crate::error::{ParseError, ScanError};

/// Append the codepoints of `word` to `out` in reverse order.
///
/// Reverses `char`s, not bytes, so multi-byte codepoints stay intact.
#[inline]
pub fn reverse_codepoints(word: &str, out: &mut String) {
    out.extend(word.chars().rev());
}

/// Builds the output string from a stream of segments.
///
/// Discard the assembler once [`feed()`](Self::feed) has returned
/// [`ControlFlow::Break`].
#[derive(Debug, Default)]
pub struct Assembler {
    output: String,
}

impl Assembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-size the output buffer. The output is always exactly as long
    /// as the input, so the input length is the right capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            output: String::with_capacity(capacity),
        }
    }

    /// Consume one segment.
    ///
    /// Returns `Break` with the final result on a terminal segment.
    pub fn feed(&mut self, segment: Segment<'_>) -> ControlFlow<Result<String, ParseError>> {
        match segment.kind {
            SegmentKind::Text => {
                reverse_codepoints(&segment.value, &mut self.output);
                ControlFlow::Continue(())
            }
            SegmentKind::Whitespace => {
                self.output.push_str(&segment.value);
                ControlFlow::Continue(())
            }
            SegmentKind::EndOfInput => ControlFlow::Break(Ok(std::mem::take(&mut self.output))),
            SegmentKind::Error => {
                tracing::debug!(pos = segment.pos, message = %segment.value, "scan failed");
                self.output.clear();
                ControlFlow::Break(Err(ScanError {
                    message: segment.value.into_owned(),
                    pos: segment.pos,
                }
                .into()))
            }
        }
    }

    /// Feed segments until a terminal segment arrives.
    ///
    /// Fails with [`ParseError::Disconnected`] if `segments` runs out first.
    pub fn assemble<'a>(
        mut self,
        segments: impl IntoIterator<Item = Segment<'a>>,
    ) -> Result<String, ParseError> {
        for segment in segments {
            if let ControlFlow::Break(result) = self.feed(segment) {
                return result;
            }
        }
        Err(ParseError::Disconnected)
    }
}
