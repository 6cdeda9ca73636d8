//! 8.8 fixed-point scale factor.
//!
//! Widget metrics are authored for a 320x240 reference display and scaled
//! to the real one. `256` is 1.0x.

use crate::geometry::saturate_i16;

/// Reference display width the metrics are authored against.
pub const REFERENCE_WIDTH: i32 = 320;
/// Reference display height the metrics are authored against.
pub const REFERENCE_HEIGHT: i32 = 240;

/// Uniform UI scale in 8.8 fixed point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Scale(i32);

impl Scale {
    /// 1.0x
    pub const ONE: Self = Self(256);
    /// 0.25x, the smallest scale ever derived.
    pub const MIN: Self = Self(64);

    /// Wraps a raw 8.8 value, floored at [`Scale::MIN`].
    #[must_use]
    pub const fn from_raw(raw: i32) -> Self {
        if raw < Self::MIN.0 {
            Self::MIN
        } else {
            Self(raw)
        }
    }

    /// Raw 8.8 value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// `min(w/320, h/240)`, floored at 0.25x.
    #[must_use]
    pub const fn for_display(width: u16, height: u16) -> Self {
        let sx = ((width as i32) << 8) / REFERENCE_WIDTH;
        let sy = ((height as i32) << 8) / REFERENCE_HEIGHT;
        Self::from_raw(if sx < sy { sx } else { sy })
    }

    /// Scales a metric, saturating to the coordinate domain.
    #[inline]
    #[must_use]
    pub const fn apply(self, value: i16) -> i16 {
        saturate_i16((value as i32 * self.0) >> 8)
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self::ONE
    }
}
