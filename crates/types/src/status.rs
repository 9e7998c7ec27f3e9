//! Bounded status line text

use std::fmt;

/// Size of the status buffer in bytes, terminator included.
pub const STATUS_CAPACITY: usize = 512;

/// Status text that is guaranteed to fit in [`STATUS_CAPACITY`] bytes
/// once a NUL terminator is appended.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusString {
    text: String,
}

impl StatusString {
    /// Longest content accepted, in bytes
    pub const MAX_LEN: usize = STATUS_CAPACITY - 1;

    /// Wrap `text` if it fits; hand it back untouched otherwise.
    pub fn from_string(text: String) -> Result<Self, String> {
        if text.len() > Self::MAX_LEN {
            Err(text)
        } else {
            Ok(Self { text })
        }
    }

    /// Cut `text` down to the capacity.
    ///
    /// The cut lands on a UTF-8 boundary, and a markup escape left open by
    /// the cut (`^c#ff30`) is dropped so the window manager never sees half
    /// of one. The same input always yields the same output.
    pub fn truncate_from(mut text: String) -> Self {
        if text.len() <= Self::MAX_LEN {
            return Self { text };
        }

        let mut end = Self::MAX_LEN;
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        text.truncate(end);

        if text.matches('^').count() % 2 == 1 {
            if let Some(open) = text.rfind('^') {
                text.truncate(open);
            }
        }

        Self { text }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for StatusString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for StatusString {
    fn as_ref(&self) -> &str {
        &self.text
    }
}
