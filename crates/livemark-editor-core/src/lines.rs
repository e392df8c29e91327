//! Line lookups for line-based visibility rules.
//!
//! Lines are split on `\n` only. Offsets are chars; anything outside
//! `0..=len` resolves to line 0 rather than erroring.

/// Line number (0-indexed) containing `offset`, computed by scanning `text`.
///
/// Prefer [`LineIndex`] when answering more than a handful of lookups
/// against the same text.
pub fn line_of(text: &str, offset: usize) -> usize {
    let mut chars = text.chars();
    let mut line = 0;
    for _ in 0..offset {
        match chars.next() {
            Some('\n') => line += 1,
            Some(_) => {}
            // Past the end of the text.
            None => return 0,
        }
    }
    line
}

/// Rope-backed line index over one text snapshot.
#[derive(Clone, Debug)]
pub struct LineIndex {
    rope: ropey::Rope,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        Self {
            rope: ropey::Rope::from_str(text),
        }
    }

    /// Text length in chars.
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// Line containing `offset`; out-of-range offsets clamp to line 0.
    pub fn line_of(&self, offset: usize) -> usize {
        if offset > self.rope.len_chars() {
            return 0;
        }
        self.rope.char_to_line(offset)
    }

    /// Lines covered by the span `start..end`, inclusive on both ends.
    ///
    /// The last line is the one holding the final char (`end - 1`), so a span
    /// ending just after a newline does not claim the following line.
    pub fn line_span(&self, start: usize, end: usize) -> (usize, usize) {
        let first = self.line_of(start);
        let last = if end > start {
            self.line_of(end - 1)
        } else {
            first
        };
        (first, last)
    }
}

impl From<&str> for LineIndex {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}
