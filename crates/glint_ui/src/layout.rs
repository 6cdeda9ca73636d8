//! Cursor-based layout allocator.
//!
//! A container hands out rectangles one after another along its axis. There
//! is no measure pass: each widget asks for its size and gets the rect at the
//! cursor. Containers nest up to [`LAYOUT_STACK_DEPTH`] deep.

use glint_core::{saturate_i16, saturate_u16, Extent, Point, Rect};

/// Maximum nesting of containers, root included.
pub const LAYOUT_STACK_DEPTH: usize = 8;

/// Stacking direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Top to bottom.
    #[default]
    Vertical,
    /// Left to right.
    Horizontal,
}

/// A region being filled by successive allocations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Container {
    /// Region the container may use. Not enforced by [`LayoutStack::allocate`].
    pub bounds: Rect,
    /// Where the next allocation lands.
    pub cursor: Point,
    /// Axis the cursor moves along.
    pub dir: Direction,
    /// Gap inserted after every allocation.
    pub spacing: i16,
    /// Allocations made so far.
    pub child_count: u16,
    /// The most recent allocation.
    pub last: Rect,
}

impl Container {
    /// A container whose cursor starts at the top-left of `bounds`.
    #[must_use]
    pub const fn new(bounds: Rect, dir: Direction, spacing: i16) -> Self {
        Self {
            bounds,
            cursor: bounds.pos,
            dir,
            spacing,
            child_count: 0,
            last: Rect::ZERO,
        }
    }

    /// Width left between the cursor and the right edge, never negative.
    #[must_use]
    pub const fn available_w(&self) -> u16 {
        saturate_u16(self.bounds.right() - self.cursor.x as i32)
    }

    /// Height left between the cursor and the bottom edge, never negative.
    #[must_use]
    pub const fn available_h(&self) -> u16 {
        saturate_u16(self.bounds.bottom() - self.cursor.y as i32)
    }

    fn advance(&mut self, px: i32) {
        match self.dir {
            Direction::Vertical => {
                self.cursor.y = saturate_i16(i32::from(self.cursor.y) + px);
            }
            Direction::Horizontal => {
                self.cursor.x = saturate_i16(i32::from(self.cursor.x) + px);
            }
        }
    }

    fn allocate(&mut self, w: u16, h: u16) -> Rect {
        let rect = Rect::from_parts(self.cursor, Extent::new(w, h));
        let along = match self.dir {
            Direction::Vertical => h,
            Direction::Horizontal => w,
        };
        self.advance(i32::from(along) + i32::from(self.spacing));
        self.child_count = self.child_count.saturating_add(1);
        self.last = rect;
        rect
    }
}

/// Bounded stack of nested containers.
#[derive(Debug, Clone, Default)]
pub struct LayoutStack {
    items: [Container; LAYOUT_STACK_DEPTH],
    depth: usize,
}

impl LayoutStack {
    /// Creates an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops every container.
    pub fn reset(&mut self) {
        self.depth = 0;
    }

    /// Opens a nested container. Ignored once the stack is full.
    pub fn push(&mut self, container: Container) {
        if self.depth < LAYOUT_STACK_DEPTH {
            self.items[self.depth] = container;
            self.depth += 1;
        }
    }

    /// Closes the innermost container. Ignored when empty.
    pub fn pop(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Number of open containers.
    #[inline]
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Innermost container.
    #[must_use]
    pub fn top(&self) -> Option<&Container> {
        self.depth.checked_sub(1).map(|i| &self.items[i])
    }

    /// Innermost container, mutably.
    pub fn top_mut(&mut self) -> Option<&mut Container> {
        self.depth.checked_sub(1).map(|i| &mut self.items[i])
    }

    /// Returns the rect at the cursor and advances by size plus spacing.
    ///
    /// The result is not clipped to the container; overflow lands off
    /// screen. With no container open the rect sits at the origin.
    pub fn allocate(&mut self, w: u16, h: u16) -> Rect {
        match self.top_mut() {
            Some(top) => top.allocate(w, h),
            None => Rect::new(0, 0, w, h),
        }
    }

    /// Moves the cursor `px` along the current axis.
    pub fn advance(&mut self, px: i16) {
        if let Some(top) = self.top_mut() {
            top.advance(i32::from(px));
        }
    }

    /// Remaining width of the innermost container.
    #[must_use]
    pub fn available_w(&self) -> u16 {
        self.top().map_or(0, Container::available_w)
    }

    /// Remaining height of the innermost container.
    #[must_use]
    pub fn available_h(&self) -> u16 {
        self.top().map_or(0, Container::available_h)
    }

    /// Current cursor, or the origin with no container open.
    #[must_use]
    pub fn cursor(&self) -> Point {
        self.top().map_or(Point::ZERO, |c| c.cursor)
    }

    /// Continues the current line horizontally: the next allocation lands
    /// `spacing` to the right of the previous one, top-aligned with it.
    ///
    /// Only acts in a vertical container that has allocated something.
    pub fn same_line(&mut self, spacing: i16) {
        if let Some(top) = self.top_mut() {
            if top.dir == Direction::Vertical && top.child_count > 0 {
                top.cursor = Point::new(
                    saturate_i16(top.last.right() + i32::from(spacing)),
                    top.last.y(),
                );
                top.dir = Direction::Horizontal;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizontal_allocation() {
        let mut layout = LayoutStack::new();
        layout.push(Container::new(
            Rect::new(0, 0, 100, 40),
            Direction::Horizontal,
            4,
        ));

        assert_eq!(layout.allocate(10, 20), Rect::new(0, 0, 10, 20));
        assert_eq!(layout.cursor(), Point::new(14, 0));
        assert_eq!(layout.allocate(5, 5), Rect::new(14, 0, 5, 5));
        assert_eq!(layout.top().map(|c| c.child_count), Some(2));
    }

    #[test]
    fn test_vertical_allocation_and_available() {
        let mut layout = LayoutStack::new();
        layout.push(Container::new(Rect::new(10, 10, 100, 50), Direction::Vertical, 2));

        let r = layout.allocate(30, 20);
        assert_eq!(r, Rect::new(10, 10, 30, 20));
        assert_eq!(layout.available_w(), 100);
        assert_eq!(layout.available_h(), 28);

        layout.allocate(30, 40);
        assert_eq!(layout.available_h(), 0);
    }

    #[test]
    fn test_allocate_does_not_clip() {
        let mut layout = LayoutStack::new();
        layout.push(Container::new(Rect::new(0, 0, 10, 10), Direction::Vertical, 0));
        layout.allocate(5, 8);
        assert_eq!(layout.allocate(5, 8), Rect::new(0, 8, 5, 8));
    }

    #[test]
    fn test_push_pop_bounds_are_silent() {
        let mut layout = LayoutStack::new();
        layout.pop();
        assert_eq!(layout.depth(), 0);
        assert_eq!(layout.allocate(3, 4), Rect::new(0, 0, 3, 4));
        assert_eq!(layout.available_w(), 0);

        for _ in 0..LAYOUT_STACK_DEPTH + 3 {
            layout.push(Container::default());
        }
        assert_eq!(layout.depth(), LAYOUT_STACK_DEPTH);
    }

    #[test]
    fn test_advance() {
        let mut layout = LayoutStack::new();
        layout.push(Container::new(Rect::new(0, 0, 50, 50), Direction::Vertical, 0));
        layout.advance(7);
        assert_eq!(layout.cursor(), Point::new(0, 7));
    }

    #[test]
    fn test_same_line() {
        let mut layout = LayoutStack::new();
        layout.push(Container::new(Rect::new(0, 0, 200, 200), Direction::Vertical, 4));

        // Nothing allocated yet: no effect.
        layout.same_line(4);
        assert_eq!(layout.top().map(|c| c.dir), Some(Direction::Vertical));

        layout.allocate(40, 24);
        layout.same_line(4);
        assert_eq!(layout.allocate(30, 24), Rect::new(44, 0, 30, 24));
        assert_eq!(layout.allocate(10, 24), Rect::new(78, 0, 10, 24));
    }
}
