//! Single-pointer input history.
//!
//! The caller hands in one sample per frame. Edges (pressed, released) are
//! derived by comparing it with the previous frame's sample.

use glint_core::{Point, Rect};

/// One frame's pointer reading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointerSample {
    /// Pointer position. Meaningless while `down` is false.
    pub pos: Point,
    /// Touching / button held.
    pub down: bool,
}

impl PointerSample {
    /// A touching sample at `(x, y)`.
    #[must_use]
    pub const fn touch(x: i16, y: i16) -> Self {
        Self {
            pos: Point::new(x, y),
            down: true,
        }
    }

    /// The pointer is lifted.
    #[must_use]
    pub const fn lifted() -> Self {
        Self {
            pos: Point::ZERO,
            down: false,
        }
    }
}

/// Current and previous pointer samples.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputCache {
    current: PointerSample,
    previous: PointerSample,
}

impl InputCache {
    /// Creates an idle cache (pointer up, at the origin).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current: PointerSample::lifted(),
            previous: PointerSample::lifted(),
        }
    }

    /// Shifts in this frame's sample.
    ///
    /// A lifted pointer has no position of its own, so on release the last
    /// touched position is kept. "Released inside" is then judged where the
    /// finger actually left.
    pub fn update(&mut self, next: PointerSample) {
        self.previous = self.current;
        self.current = next;
        if !next.down {
            self.current.pos = self.previous.pos;
        }
    }

    /// Pointer went down this frame.
    #[inline]
    #[must_use]
    pub const fn pressed(&self) -> bool {
        self.current.down && !self.previous.down
    }

    /// Pointer went up this frame.
    #[inline]
    #[must_use]
    pub const fn released(&self) -> bool {
        !self.current.down && self.previous.down
    }

    /// Pointer down this frame and last frame.
    #[inline]
    #[must_use]
    pub const fn held(&self) -> bool {
        self.current.down && self.previous.down
    }

    /// Pointer down this frame.
    #[inline]
    #[must_use]
    pub const fn down(&self) -> bool {
        self.current.down
    }

    /// Current position.
    #[inline]
    #[must_use]
    pub const fn pos(&self) -> Point {
        self.current.pos
    }

    /// Previous frame's position.
    #[inline]
    #[must_use]
    pub const fn prev_pos(&self) -> Point {
        self.previous.pos
    }

    /// Pressed this frame inside `r`.
    #[must_use]
    pub const fn pressed_in(&self, r: &Rect) -> bool {
        self.pressed() && r.contains(self.current.pos)
    }

    /// Released this frame inside `r`.
    #[must_use]
    pub const fn released_in(&self, r: &Rect) -> bool {
        self.released() && r.contains(self.current.pos)
    }

    /// Held across frames inside `r`.
    #[must_use]
    pub const fn held_in(&self, r: &Rect) -> bool {
        self.held() && r.contains(self.current.pos)
    }

    /// Down this frame inside `r`.
    #[must_use]
    pub const fn down_in(&self, r: &Rect) -> bool {
        self.down() && r.contains(self.current.pos)
    }

    /// Touch screens have no hover; this is [`InputCache::down_in`].
    #[must_use]
    pub const fn hovering(&self, r: &Rect) -> bool {
        self.down_in(r)
    }
}
