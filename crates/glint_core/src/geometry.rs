//! Integer screen geometry.
//!
//! Coordinates are `i16` and sizes `u16`, matching what small display
//! controllers address. Derived edges (`right`, `bottom`) are widened to
//! `i32` so no combination of inputs can overflow.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// Clamps a wide intermediate into the `i16` coordinate domain.
#[inline]
#[must_use]
pub const fn saturate_i16(v: i32) -> i16 {
    if v > i16::MAX as i32 {
        i16::MAX
    } else if v < i16::MIN as i32 {
        i16::MIN
    } else {
        v as i16
    }
}

/// Clamps a wide intermediate into the `u16` size domain.
#[inline]
#[must_use]
pub const fn saturate_u16(v: i32) -> u16 {
    if v > u16::MAX as i32 {
        u16::MAX
    } else if v < 0 {
        0
    } else {
        v as u16
    }
}

/// Screen-space point.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable, Serialize, Deserialize)]
pub struct Point {
    /// X component
    pub x: i16,
    /// Y component
    pub y: i16,
}

impl Point {
    /// The origin.
    pub const ZERO: Self = Self::new(0, 0);

    /// Creates a new point.
    #[must_use]
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }
}

impl std::ops::Add for Point {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x.saturating_add(rhs.x), self.y.saturating_add(rhs.y))
    }
}

impl std::ops::Sub for Point {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x.saturating_sub(rhs.x), self.y.saturating_sub(rhs.y))
    }
}

/// Unsigned width/height pair.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable, Serialize, Deserialize)]
pub struct Extent {
    /// Width
    pub w: u16,
    /// Height
    pub h: u16,
}

impl Extent {
    /// Creates a new extent.
    #[must_use]
    pub const fn new(w: u16, h: u16) -> Self {
        Self { w, h }
    }

    /// Number of cells covered.
    #[must_use]
    pub const fn area(self) -> u32 {
        self.w as u32 * self.h as u32
    }
}

/// Axis-aligned rectangle covering `[pos, pos + size)`.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner.
    pub pos: Point,
    /// Width and height.
    pub size: Extent,
}

impl Rect {
    /// A zero-sized rect at the origin.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Creates a new rectangle.
    #[must_use]
    pub const fn new(x: i16, y: i16, w: u16, h: u16) -> Self {
        Self {
            pos: Point::new(x, y),
            size: Extent::new(w, h),
        }
    }

    /// Creates a rectangle from position and size.
    #[must_use]
    pub const fn from_parts(pos: Point, size: Extent) -> Self {
        Self { pos, size }
    }

    /// Left edge.
    #[inline]
    #[must_use]
    pub const fn x(&self) -> i16 {
        self.pos.x
    }

    /// Top edge.
    #[inline]
    #[must_use]
    pub const fn y(&self) -> i16 {
        self.pos.y
    }

    /// Width.
    #[inline]
    #[must_use]
    pub const fn w(&self) -> u16 {
        self.size.w
    }

    /// Height.
    #[inline]
    #[must_use]
    pub const fn h(&self) -> u16 {
        self.size.h
    }

    /// Exclusive right edge.
    #[inline]
    #[must_use]
    pub const fn right(&self) -> i32 {
        self.pos.x as i32 + self.size.w as i32
    }

    /// Exclusive bottom edge.
    #[inline]
    #[must_use]
    pub const fn bottom(&self) -> i32 {
        self.pos.y as i32 + self.size.h as i32
    }

    /// Horizontal center.
    #[must_use]
    pub const fn cx(&self) -> i16 {
        saturate_i16(self.pos.x as i32 + self.size.w as i32 / 2)
    }

    /// Vertical center.
    #[must_use]
    pub const fn cy(&self) -> i16 {
        saturate_i16(self.pos.y as i32 + self.size.h as i32 / 2)
    }

    /// True when the rect covers no cells.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size.w == 0 || self.size.h == 0
    }

    /// Half-open containment test.
    #[must_use]
    pub const fn contains(&self, p: Point) -> bool {
        let (x, y) = (p.x as i32, p.y as i32);
        x >= self.pos.x as i32 && x < self.right() && y >= self.pos.y as i32 && y < self.bottom()
    }

    /// Insets every side by `amount`. Sizes clamp to zero instead of going
    /// negative; a negative amount grows the rect.
    #[must_use]
    pub const fn shrink(&self, amount: i16) -> Self {
        let a = amount as i32;
        Self {
            pos: Point::new(
                saturate_i16(self.pos.x as i32 + a),
                saturate_i16(self.pos.y as i32 + a),
            ),
            size: Extent::new(
                saturate_u16(self.size.w as i32 - 2 * a),
                saturate_u16(self.size.h as i32 - 2 * a),
            ),
        }
    }

    /// Returns the overlap of two rectangles, or None if they don't intersect.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let x0 = self.pos.x.max(other.pos.x);
        let y0 = self.pos.y.max(other.pos.y);
        let x1 = self.right().min(other.right());
        let y1 = self.bottom().min(other.bottom());
        if i32::from(x0) >= x1 || i32::from(y0) >= y1 {
            return None;
        }
        Some(Self::new(
            x0,
            y0,
            saturate_u16(x1 - i32::from(x0)),
            saturate_u16(y1 - i32::from(y0)),
        ))
    }
}
