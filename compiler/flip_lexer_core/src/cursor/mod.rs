//! Codepoint cursor over a UTF-8 byte buffer.
//!
//! The cursor decodes one codepoint per [`bump()`](Cursor::bump) and
//! remembers how many bytes that codepoint occupied, so the scanner can
//! step back across a run boundary with [`back_up()`](Cursor::back_up).
//!
//! # Step Back
//!
//! Stepping back rewinds by the byte width of the last decoded codepoint,
//! never by a fixed single byte. Rewinding one byte after reading `é`
//! (2 bytes) or U+3000 (3 bytes) would leave the cursor in the middle of a
//! sequence and corrupt the next run.

/// Outcome of decoding one codepoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// A codepoint was decoded and the cursor moved past it.
    Char(char),
    /// The cursor is at the end of the buffer.
    Eof,
    /// The bytes at the cursor are not a valid UTF-8 sequence.
    /// The cursor does not move.
    Invalid {
        /// The leading byte of the malformed sequence.
        byte: u8,
    },
}

/// Cursor over a UTF-8 buffer, decoding one codepoint at a time.
///
/// The cursor is [`Copy`], so callers can snapshot and restore it.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Raw source bytes.
    buf: &'a [u8],
    /// Set when the cursor was built from `&str`, so slices skip revalidation.
    text: Option<&'a str>,
    /// Current read position (byte index into `buf`).
    pos: usize,
    /// Byte width of the most recently decoded codepoint. Zero after EOF,
    /// after an invalid sequence, and after [`back_up()`](Self::back_up).
    last_width: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at position 0 over validated text.
    pub fn new(text: &'a str) -> Self {
        Self {
            buf: text.as_bytes(),
            text: Some(text),
            pos: 0,
            last_width: 0,
        }
    }

    /// Create a cursor at position 0 over bytes that may not be valid UTF-8.
    ///
    /// Malformed sequences surface as [`Step::Invalid`] when reached.
    pub fn from_bytes(buf: &'a [u8]) -> Self {
        Self {
            buf,
            text: None,
            pos: 0,
            last_width: 0,
        }
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Length of the source in bytes.
    #[inline]
    pub fn source_len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if every byte has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.buf.len()
    }

    /// Byte width of the most recently decoded codepoint.
    #[inline]
    pub fn last_width(&self) -> usize {
        self.last_width
    }

    /// Returns the expected byte length of a UTF-8 sequence from its
    /// leading byte, or `0` if `byte` cannot start a sequence.
    ///
    /// - `0x00..=0x7F`: 1 byte
    /// - `0xC2..=0xDF`: 2 bytes
    /// - `0xE0..=0xEF`: 3 bytes
    /// - `0xF0..=0xF4`: 4 bytes
    /// - continuation bytes, overlong leads (`0xC0`, `0xC1`) and `0xF5..`: 0
    #[inline]
    pub fn utf8_char_width(byte: u8) -> usize {
        match byte {
            0x00..=0x7F => 1,
            0xC2..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF4 => 4,
            _ => 0,
        }
    }

    /// Decode the codepoint at the cursor and advance past it.
    pub fn bump(&mut self) -> Step {
        let Some(&lead) = self.buf.get(self.pos) else {
            self.last_width = 0;
            return Step::Eof;
        };

        if lead.is_ascii() {
            self.pos += 1;
            self.last_width = 1;
            return Step::Char(char::from(lead));
        }

        let width = Self::utf8_char_width(lead);
        let decoded = self
            .buf
            .get(self.pos..self.pos + width)
            .filter(|_| width > 0)
            .and_then(|bytes| std::str::from_utf8(bytes).ok())
            .and_then(|s| s.chars().next());

        if let Some(c) = decoded {
            self.pos += width;
            self.last_width = width;
            Step::Char(c)
        } else {
            self.last_width = 0;
            Step::Invalid { byte: lead }
        }
    }

    /// Step back over the codepoint returned by the last [`bump()`](Self::bump).
    ///
    /// Only one step back is possible per bump; a second call without an
    /// intervening bump does nothing, as does a call after `Eof` or
    /// `Invalid`.
    #[inline]
    pub fn back_up(&mut self) {
        self.pos -= self.last_width;
        self.last_width = 0;
    }

    /// Extract `start..end` as `&str`.
    ///
    /// Returns `None` if the range is out of bounds or does not fall on
    /// codepoint boundaries of valid UTF-8.
    pub fn slice(&self, start: usize, end: usize) -> Option<&'a str> {
        match self.text {
            Some(text) => text.get(start..end),
            None => self
                .buf
                .get(start..end)
                .and_then(|bytes| std::str::from_utf8(bytes).ok()),
        }
    }

    /// Extract a source substring from `start` to the current position.
    pub fn slice_from(&self, start: usize) -> Option<&'a str> {
        self.slice(start, self.pos)
    }
}
