//! Frame-stable widget identity.
//!
//! An immediate-mode widget has no object that survives between frames, so
//! its identity is recomputed every frame from its label and the scope it
//! was declared in. Same scope plus same label gives the same id.

use serde::{Deserialize, Serialize};

/// Maximum number of nested id scopes.
pub const ID_STACK_DEPTH: usize = 8;

const FNV_OFFSET: u32 = 2_166_136_261;
const FNV_PRIME: u32 = 16_777_619;
const GOLDEN: u32 = 0x9e37_79b9;

/// 32-bit FNV-1a over raw bytes.
#[must_use]
pub const fn fnv1a(bytes: &[u8]) -> u32 {
    let mut hash = FNV_OFFSET;
    let mut i = 0;
    while i < bytes.len() {
        hash ^= bytes[i] as u32;
        hash = hash.wrapping_mul(FNV_PRIME);
        i += 1;
    }
    hash
}

/// FNV-1a over a label's UTF-8 bytes.
#[inline]
#[must_use]
pub const fn hash_label(label: &str) -> u32 {
    fnv1a(label.as_bytes())
}

/// Order-sensitive combination of two hashes.
#[inline]
#[must_use]
pub const fn mix(base: u32, extra: u32) -> u32 {
    base ^ extra
        .wrapping_add(GOLDEN)
        .wrapping_add(base << 6)
        .wrapping_add(base >> 2)
}

/// Identity of a widget within a frame. Zero means "no widget".
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WidgetId(pub u32);

impl WidgetId {
    /// The "nothing" id used for empty hot/active state and free slots.
    pub const NONE: Self = Self(0);

    /// Wraps a raw hash.
    #[inline]
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Raw hash value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// True for [`WidgetId::NONE`].
    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }

    /// Derives a sub-identity, e.g. a widget's animation channel.
    #[inline]
    #[must_use]
    pub const fn derive(self, salt: u32) -> Self {
        Self(mix(self.0, salt))
    }
}

/// Bounded stack of scope values.
///
/// Pushing past [`ID_STACK_DEPTH`] and popping an empty stack are silent
/// no-ops.
#[derive(Clone, Debug, Default)]
pub struct IdStack {
    entries: [u32; ID_STACK_DEPTH],
    depth: usize,
}

impl IdStack {
    /// Creates an empty stack.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: [0; ID_STACK_DEPTH],
            depth: 0,
        }
    }

    /// Pushes a raw scope value.
    pub fn push(&mut self, raw: u32) {
        if self.depth < ID_STACK_DEPTH {
            self.entries[self.depth] = raw;
            self.depth += 1;
        }
    }

    /// Pushes a scope named by a string.
    pub fn push_label(&mut self, label: &str) {
        self.push(hash_label(label));
    }

    /// Pushes a scope named by an ordinal (sign-extended).
    pub fn push_index(&mut self, index: i16) {
        self.push(i32::from(index) as u32);
    }

    /// Drops the innermost scope.
    pub fn pop(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Number of scopes currently pushed.
    #[inline]
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Combined value of every pushed scope, outermost first.
    #[must_use]
    pub fn current(&self) -> u32 {
        self.entries[..self.depth]
            .iter()
            .fold(0, |acc, &entry| mix(acc, entry))
    }

    /// Identity for `label` in the current scope.
    #[must_use]
    pub fn make(&self, label: &str) -> WidgetId {
        WidgetId(mix(self.current(), hash_label(label)))
    }

    /// Identity for a raw value in the current scope.
    #[must_use]
    pub fn make_raw(&self, raw: u32) -> WidgetId {
        WidgetId(mix(self.current(), raw))
    }

    /// Empties the stack.
    pub fn clear(&mut self) {
        self.depth = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fnv1a_reference_values() {
        assert_eq!(fnv1a(b""), 2_166_136_261);
        assert_eq!(fnv1a(b"a"), 0xe40c_292c);
        assert_eq!(hash_label("foobar"), 0xbf9c_f968);
    }

    #[test]
    fn test_mix_is_order_sensitive() {
        assert_ne!(mix(mix(0, 1), 2), mix(mix(0, 2), 1));
    }

    #[test]
    fn test_scope_changes_identity() {
        let mut ids = IdStack::new();
        ids.push_label("A");
        ids.push_label("B");
        let id1 = ids.make("x");

        ids.pop();
        ids.push_label("C");
        let id2 = ids.make("x");
        assert_ne!(id1, id2);

        ids.pop();
        ids.push_label("B");
        assert_eq!(ids.make("x"), id1);
    }

    #[test]
    fn test_empty_stack_identity() {
        let ids = IdStack::new();
        assert_eq!(ids.current(), 0);
        assert_eq!(ids.make("ok"), WidgetId(mix(0, hash_label("ok"))));
    }

    #[test]
    fn test_push_past_capacity_is_ignored() {
        let mut ids = IdStack::new();
        for i in 0..ID_STACK_DEPTH as i16 {
            ids.push_index(i);
        }
        let full = ids.current();

        ids.push_index(99);
        assert_eq!(ids.depth(), ID_STACK_DEPTH);
        assert_eq!(ids.current(), full);
    }

    #[test]
    fn test_pop_empty_is_ignored() {
        let mut ids = IdStack::new();
        ids.pop();
        assert_eq!(ids.depth(), 0);
    }

    #[test]
    fn test_push_index_sign_extends() {
        let mut ids = IdStack::new();
        ids.push_index(-1);
        assert_eq!(ids.current(), mix(0, u32::MAX));
    }

    #[test]
    fn test_derive() {
        let id = WidgetId(1234);
        assert_eq!(id.derive(0xA1), WidgetId(mix(1234, 0xA1)));
        assert!(WidgetId::NONE.is_none());
    }
}
