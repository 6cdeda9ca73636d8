//! Bounded, non-allocating text formatting.

use core::fmt::{self, Write};

/// Capacity of formatted widget labels, in bytes.
pub const LABEL_CAPACITY: usize = 128;

/// Fixed-capacity string that silently truncates on overflow.
///
/// Holds at most `N - 1` bytes, leaving room for the terminator a C display
/// driver would need. Truncation never splits a UTF-8 character.
#[derive(Debug, Clone, Default)]
pub struct FmtBuf<const N: usize> {
    inner: heapless::String<N>,
}

impl<const N: usize> FmtBuf<N> {
    /// Creates an empty buffer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            inner: heapless::String::new(),
        }
    }

    /// Formats `args` into a fresh buffer, truncating as needed.
    #[must_use]
    pub fn format(args: fmt::Arguments<'_>) -> Self {
        let mut buf = Self::new();
        // Writes never fail; overflow truncates instead.
        let _ = buf.write_fmt(args);
        buf
    }

    /// The text written so far.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.inner.as_str()
    }

    /// Number of bytes stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// True when nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Empties the buffer.
    pub fn clear(&mut self) {
        self.inner.clear();
    }
}

impl<const N: usize> Write for FmtBuf<N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let room = N.saturating_sub(1).saturating_sub(self.inner.len());
        let mut take = s.len().min(room);
        while !s.is_char_boundary(take) {
            take -= 1;
        }
        // `take` fits by construction.
        let _ = self.inner.push_str(&s[..take]);
        Ok(())
    }
}

impl<const N: usize> core::ops::Deref for FmtBuf<N> {
    type Target = str;

    fn deref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formats_within_capacity() {
        let buf = FmtBuf::<16>::format(format_args!("v={}", 42));
        assert_eq!(buf.as_str(), "v=42");
    }

    #[test]
    fn test_truncates_deterministically() {
        let buf = FmtBuf::<8>::format(format_args!("{}", "abcdefghijkl"));
        assert_eq!(buf.as_str(), "abcdefg");
        assert_eq!(buf.len(), 7);
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        let buf = FmtBuf::<5>::format(format_args!("ab\u{e9}\u{e9}"));
        assert_eq!(buf.as_str(), "ab\u{e9}");
    }

    #[test]
    fn test_label_capacity() {
        let long = "x".repeat(300);
        let buf = FmtBuf::<LABEL_CAPACITY>::format(format_args!("{long}"));
        assert_eq!(buf.len(), LABEL_CAPACITY - 1);
    }
}
