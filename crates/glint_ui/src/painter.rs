//! Rendering seams.
//!
//! [`Painter`] is everything the drawing library and the widgets need from a
//! render target. [`Display`] is everything a [`crate::Canvas`] needs from
//! the physical panel. Real drivers live outside this crate.

use glint_core::{Rect, Rgb565};

/// A pixel render target.
///
/// Every method is total: coordinates off the target or outside the clip
/// are dropped, non-positive lengths draw nothing.
pub trait Painter {
    /// Target width in pixels.
    fn width(&self) -> u16;
    /// Target height in pixels.
    fn height(&self) -> u16;

    /// Solid rectangle.
    fn fill_rect(&mut self, x: i16, y: i16, w: i16, h: i16, color: Rgb565);
    /// Horizontal span of `len` pixels starting at `x`.
    fn hline(&mut self, x: i16, y: i16, len: i16, color: Rgb565);
    /// Vertical span of `len` pixels starting at `y`.
    fn vline(&mut self, x: i16, y: i16, len: i16, color: Rgb565);
    /// One pixel.
    fn pixel(&mut self, x: i16, y: i16, color: Rgb565);
    /// Solid circle of radius `r` centered on (`x`, `y`).
    fn fill_circle(&mut self, x: i16, y: i16, r: i16, color: Rgb565);

    /// Moves the text cursor.
    fn set_cursor(&mut self, x: i16, y: i16);
    /// Sets the text color.
    fn set_text_color(&mut self, color: Rgb565);
    /// Sets the glyph scale (1 = 6x8 cell).
    fn set_text_size(&mut self, size: u8);
    /// Draws `text` at the cursor and advances it. `'\n'` returns the
    /// cursor to column 0 of the next line.
    fn print(&mut self, text: &str);

    /// Restricts all drawing to `clip`.
    fn set_clip(&mut self, clip: Rect);
    /// Removes the clip.
    fn clear_clip(&mut self);
}

/// A physical panel that accepts pixel blocks.
pub trait Display {
    /// Panel width in its current orientation.
    fn width(&self) -> u16;
    /// Panel height in its current orientation.
    fn height(&self) -> u16;
    /// Sends a `w` x `h` block of row-major pixels to (`x`, `y`).
    fn blit(&mut self, x: u16, y: u16, w: u16, h: u16, pixels: &[Rgb565]);
}

impl<P: Painter + ?Sized> Painter for &mut P {
    fn width(&self) -> u16 {
        (**self).width()
    }
    fn height(&self) -> u16 {
        (**self).height()
    }
    fn fill_rect(&mut self, x: i16, y: i16, w: i16, h: i16, color: Rgb565) {
        (**self).fill_rect(x, y, w, h, color);
    }
    fn hline(&mut self, x: i16, y: i16, len: i16, color: Rgb565) {
        (**self).hline(x, y, len, color);
    }
    fn vline(&mut self, x: i16, y: i16, len: i16, color: Rgb565) {
        (**self).vline(x, y, len, color);
    }
    fn pixel(&mut self, x: i16, y: i16, color: Rgb565) {
        (**self).pixel(x, y, color);
    }
    fn fill_circle(&mut self, x: i16, y: i16, r: i16, color: Rgb565) {
        (**self).fill_circle(x, y, r, color);
    }
    fn set_cursor(&mut self, x: i16, y: i16) {
        (**self).set_cursor(x, y);
    }
    fn set_text_color(&mut self, color: Rgb565) {
        (**self).set_text_color(color);
    }
    fn set_text_size(&mut self, size: u8) {
        (**self).set_text_size(size);
    }
    fn print(&mut self, text: &str) {
        (**self).print(text);
    }
    fn set_clip(&mut self, clip: Rect) {
        (**self).set_clip(clip);
    }
    fn clear_clip(&mut self) {
        (**self).clear_clip();
    }
}
