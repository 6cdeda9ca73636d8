//! Framebuffer canvas with clipping and dirty-band tracking.
//!
//! The canvas rasterizes into a caller-owned buffer and remembers the
//! vertical band of rows touched since the last [`Canvas::flush`]. Only
//! that band is sent to the panel. Columns are not tracked: a band is
//! always full width, which keeps the bookkeeping to two integers.

use glint_core::{Point, Rect, Rgb565};

use crate::font;
use crate::painter::{Display, Painter};

/// Alpha of the soft edge drawn around scaled glyph pixels.
const GLYPH_EDGE_ALPHA: u8 = 80;

/// Software canvas over a borrowed framebuffer.
pub struct Canvas<'fb, D: Display> {
    display: D,
    buf: &'fb mut [Rgb565],
    w: u16,
    h: u16,
    clip: Option<Rect>,
    dirty_y0: i32,
    dirty_y1: i32,
    cursor: Point,
    text_color: Rgb565,
    text_size: u8,
}

impl<'fb, D: Display> Canvas<'fb, D> {
    /// Wraps a raw `u16` framebuffer (row-major, at least `width * height`
    /// cells for the largest orientation) and clears it to black.
    pub fn new(display: D, framebuffer: &'fb mut [u16]) -> Self {
        Self::from_pixels(display, bytemuck::cast_slice_mut(framebuffer))
    }

    /// Like [`Canvas::new`] for a buffer already typed as colors.
    pub fn from_pixels(display: D, buf: &'fb mut [Rgb565]) -> Self {
        let mut canvas = Self {
            display,
            buf,
            w: 0,
            h: 0,
            clip: None,
            dirty_y0: 0,
            dirty_y1: -1,
            cursor: Point::ZERO,
            text_color: Rgb565::WHITE,
            text_size: 1,
        };
        canvas.read_dimensions();
        tracing::debug!(width = canvas.w, height = canvas.h, "canvas created");
        canvas.fill_screen(Rgb565::BLACK);
        canvas
    }

    /// Re-reads the panel size (after rotation), drops the clip and clears
    /// the screen.
    pub fn reinit(&mut self) {
        self.read_dimensions();
        self.clip = None;
        self.reset_dirty();
        tracing::debug!(width = self.w, height = self.h, "canvas reinit");
        self.fill_screen(Rgb565::BLACK);
    }

    fn read_dimensions(&mut self) {
        let w = self.display.width();
        let h = self.display.height();
        let rows_held = if w == 0 {
            0
        } else {
            self.buf.len() / usize::from(w)
        };
        let drawable = usize::from(h).min(rows_held) as u16;
        if drawable < h {
            tracing::warn!(
                width = w,
                height = h,
                buffer = self.buf.len(),
                drawable,
                "framebuffer smaller than display, clamping height"
            );
        }
        self.w = w;
        self.h = drawable;
    }

    /// The panel this canvas flushes to.
    #[must_use]
    pub fn display(&self) -> &D {
        &self.display
    }

    /// The panel, mutably (e.g. to rotate it before [`Canvas::reinit`]).
    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    /// Fills the whole drawable area, ignoring the clip.
    pub fn fill_screen(&mut self, color: Rgb565) {
        let area = usize::from(self.w) * usize::from(self.h);
        self.buf[..area].fill(color);
        self.dirty_y0 = 0;
        self.dirty_y1 = i32::from(self.h) - 1;
    }

    /// Sends the dirty band to the display and empties it.
    pub fn flush(&mut self) {
        if let Some((y0, y1)) = self.dirty_band() {
            let w = usize::from(self.w);
            let start = usize::from(y0) * w;
            let end = (usize::from(y1) + 1) * w;
            self.display
                .blit(0, y0, self.w, y1 - y0 + 1, &self.buf[start..end]);
            self.reset_dirty();
        }
    }

    /// Rows `[first, last]` written since the last flush.
    #[must_use]
    pub fn dirty_band(&self) -> Option<(u16, u16)> {
        (self.dirty_y0 <= self.dirty_y1).then(|| (self.dirty_y0 as u16, self.dirty_y1 as u16))
    }

    /// Reads back one framebuffer cell.
    #[must_use]
    pub fn pixel_at(&self, x: i16, y: i16) -> Option<Rgb565> {
        self.index(i32::from(x), i32::from(y)).map(|i| self.buf[i])
    }

    /// Active clip rectangle.
    #[must_use]
    pub fn clip(&self) -> Option<Rect> {
        self.clip
    }

    /// Text cursor position.
    #[must_use]
    pub fn cursor(&self) -> Point {
        self.cursor
    }

    fn reset_dirty(&mut self) {
        self.dirty_y0 = i32::from(self.h);
        self.dirty_y1 = -1;
    }

    fn mark_dirty(&mut self, y0: i32, y1: i32) {
        self.dirty_y0 = self.dirty_y0.min(y0);
        self.dirty_y1 = self.dirty_y1.max(y1);
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if (0..i32::from(self.w)).contains(&x) && (0..i32::from(self.h)).contains(&y) {
            Some(y as usize * usize::from(self.w) + x as usize)
        } else {
            None
        }
    }

    fn put(&mut self, x: i32, y: i32, color: Rgb565) {
        let Some(i) = self.index(x, y) else {
            return;
        };
        if let Some(clip) = self.clip {
            if x < i32::from(clip.x()) || x >= clip.right() || y < i32::from(clip.y()) || y >= clip.bottom() {
                return;
            }
        }
        self.buf[i] = color;
        self.mark_dirty(y, y);
    }

    fn span_h(&mut self, x: i32, y: i32, len: i32, color: Rgb565) {
        if !(0..i32::from(self.h)).contains(&y) || len <= 0 {
            return;
        }
        let mut x0 = x.max(0);
        let mut x1 = (x + len - 1).min(i32::from(self.w) - 1);
        if let Some(clip) = self.clip {
            if y < i32::from(clip.y()) || y >= clip.bottom() {
                return;
            }
            x0 = x0.max(i32::from(clip.x()));
            x1 = x1.min(clip.right() - 1);
        }
        if x0 > x1 {
            return;
        }
        self.mark_dirty(y, y);
        let row = y as usize * usize::from(self.w);
        self.buf[row + x0 as usize..=row + x1 as usize].fill(color);
    }

    fn span_v(&mut self, x: i32, y: i32, len: i32, color: Rgb565) {
        if !(0..i32::from(self.w)).contains(&x) || len <= 0 {
            return;
        }
        let mut y0 = y.max(0);
        let mut y1 = (y + len - 1).min(i32::from(self.h) - 1);
        if let Some(clip) = self.clip {
            if x < i32::from(clip.x()) || x >= clip.right() {
                return;
            }
            y0 = y0.max(i32::from(clip.y()));
            y1 = y1.min(clip.bottom() - 1);
        }
        if y0 > y1 {
            return;
        }
        self.mark_dirty(y0, y1);
        let w = usize::from(self.w);
        for row in y0 as usize..=y1 as usize {
            self.buf[row * w + x as usize] = color;
        }
    }

    fn block(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgb565) {
        let y0 = y.max(0);
        let y1 = (y + h - 1).min(i32::from(self.h) - 1);
        for row in y0..=y1 {
            self.span_h(x, row, w, color);
        }
    }

    fn glyph(&mut self, x: i32, y: i32, c: u8, fg: Rgb565, size: u8) {
        let Some(columns) = font::glyph(c) else {
            return;
        };
        let sz = i32::from(size);

        for (col, &bits) in (0i32..).zip(columns.iter()) {
            for row in 0..i32::from(font::GLYPH_H) {
                if (bits >> row) & 1 == 0 {
                    continue;
                }
                if sz == 1 {
                    self.put(x + col, y + row, fg);
                } else {
                    self.block(x + col * sz, y + row * sz, sz, sz, fg);
                }
            }
        }

        if sz < 2 {
            return;
        }

        // Soften empty cells that border a filled one.
        for col in 0..font::GLYPH_W {
            for row in 0..font::GLYPH_H {
                if font::bit(c, col, row) {
                    continue;
                }
                let left = font::bit(c, col - 1, row);
                let right = font::bit(c, col + 1, row);
                let up = font::bit(c, col, row - 1);
                let down = font::bit(c, col, row + 1);

                let bx = x + i32::from(col) * sz;
                let by = y + i32::from(row) * sz;

                if left && !right {
                    self.soften(bx, by, fg);
                }
                if right && !left {
                    self.soften(bx + sz - 1, by, fg);
                }
                if up && !down {
                    self.soften(bx, by, fg);
                }
                if down && !up {
                    self.soften(bx, by + sz - 1, fg);
                }
            }
        }
    }

    fn soften(&mut self, x: i32, y: i32, fg: Rgb565) {
        let bg = self.index(x, y).map_or(Rgb565::BLACK, |i| self.buf[i]);
        self.put(x, y, fg.blend(bg, GLYPH_EDGE_ALPHA));
    }
}

impl<D: Display> Painter for Canvas<'_, D> {
    fn width(&self) -> u16 {
        self.w
    }

    fn height(&self) -> u16 {
        self.h
    }

    fn fill_rect(&mut self, x: i16, y: i16, w: i16, h: i16, color: Rgb565) {
        self.block(x.into(), y.into(), w.into(), h.into(), color);
    }

    fn hline(&mut self, x: i16, y: i16, len: i16, color: Rgb565) {
        self.span_h(x.into(), y.into(), len.into(), color);
    }

    fn vline(&mut self, x: i16, y: i16, len: i16, color: Rgb565) {
        self.span_v(x.into(), y.into(), len.into(), color);
    }

    fn pixel(&mut self, x: i16, y: i16, color: Rgb565) {
        self.put(x.into(), y.into(), color);
    }

    fn fill_circle(&mut self, x: i16, y: i16, r: i16, color: Rgb565) {
        let (x0, y0, r) = (i32::from(x), i32::from(y), i32::from(r));
        self.span_h(x0 - r, y0, 2 * r + 1, color);

        let mut f = 1 - r;
        let mut ddx = 1;
        let mut ddy = -2 * r;
        let mut px = 0;
        let mut py = r;
        while px < py {
            if f >= 0 {
                py -= 1;
                ddy += 2;
                f += ddy;
            }
            px += 1;
            ddx += 2;
            f += ddx;
            self.span_h(x0 - px, y0 + py, 2 * px + 1, color);
            self.span_h(x0 - px, y0 - py, 2 * px + 1, color);
            self.span_h(x0 - py, y0 + px, 2 * py + 1, color);
            self.span_h(x0 - py, y0 - px, 2 * py + 1, color);
        }
    }

    fn set_cursor(&mut self, x: i16, y: i16) {
        self.cursor = Point::new(x, y);
    }

    fn set_text_color(&mut self, color: Rgb565) {
        self.text_color = color;
    }

    fn set_text_size(&mut self, size: u8) {
        self.text_size = size;
    }

    fn print(&mut self, text: &str) {
        let size = self.text_size;
        let step_x = i32::from(font::ADVANCE_X) * i32::from(size);
        let step_y = i32::from(font::ADVANCE_Y) * i32::from(size);
        let mut cx = i32::from(self.cursor.x);
        let mut cy = i32::from(self.cursor.y);

        for ch in text.chars() {
            if ch == '\n' {
                cx = 0;
                cy += step_y;
                continue;
            }
            if let Ok(byte) = u8::try_from(ch) {
                self.glyph(cx, cy, byte, self.text_color, size);
            }
            cx += step_x;
        }

        self.cursor = Point::new(glint_core::saturate_i16(cx), glint_core::saturate_i16(cy));
    }

    fn set_clip(&mut self, clip: Rect) {
        self.clip = Some(clip);
    }

    fn clear_clip(&mut self) {
        self.clip = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::MemoryDisplay;

    fn canvas(buf: &mut [u16], w: u16, h: u16) -> Canvas<'_, MemoryDisplay> {
        Canvas::new(MemoryDisplay::new(w, h), buf)
    }

    #[test]
    fn test_new_clears_and_marks_full_band() {
        let mut buf = vec![0xABCDu16; 16 * 8];
        let c = canvas(&mut buf, 16, 8);
        assert_eq!(c.pixel_at(3, 3), Some(Rgb565::BLACK));
        assert_eq!(c.dirty_band(), Some((0, 7)));
    }

    #[test]
    fn test_flush_sends_band_then_empties() {
        let mut buf = vec![0u16; 16 * 8];
        let mut c = canvas(&mut buf, 16, 8);
        c.flush();
        assert_eq!(c.dirty_band(), None);

        c.pixel(2, 3, Rgb565::RED);
        c.hline(0, 5, 4, Rgb565::RED);
        assert_eq!(c.dirty_band(), Some((3, 5)));

        c.flush();
        assert_eq!(c.dirty_band(), None);
        let blits = c.display().blits();
        assert_eq!(blits.last(), Some(&(0, 3, 16, 3)));
        assert_eq!(c.display().pixel(2, 3), Some(Rgb565::RED));

        c.flush();
        assert_eq!(c.display().blits().len(), 2);
    }

    #[test]
    fn test_out_of_bounds_is_ignored() {
        let mut buf = vec![0u16; 8 * 8];
        let mut c = canvas(&mut buf, 8, 8);
        c.flush();

        c.pixel(-1, 0, Rgb565::RED);
        c.pixel(8, 0, Rgb565::RED);
        c.hline(0, 8, 4, Rgb565::RED);
        c.hline(0, 0, 0, Rgb565::RED);
        c.vline(-3, 0, 5, Rgb565::RED);
        c.fill_rect(0, 0, -4, 4, Rgb565::RED);
        assert_eq!(c.dirty_band(), None);
    }

    #[test]
    fn test_hline_clamps_to_edges() {
        let mut buf = vec![0u16; 8 * 4];
        let mut c = canvas(&mut buf, 8, 4);
        c.hline(-3, 1, 20, Rgb565::GREEN);
        for x in 0..8 {
            assert_eq!(c.pixel_at(x, 1), Some(Rgb565::GREEN));
        }
        assert_eq!(c.pixel_at(0, 0), Some(Rgb565::BLACK));
    }

    #[test]
    fn test_clip_restricts_writes() {
        let mut buf = vec![0u16; 10 * 10];
        let mut c = canvas(&mut buf, 10, 10);
        c.flush();
        c.set_clip(Rect::new(2, 2, 4, 4));
        c.fill_rect(0, 0, 10, 10, Rgb565::BLUE);

        assert_eq!(c.pixel_at(2, 2), Some(Rgb565::BLUE));
        assert_eq!(c.pixel_at(5, 5), Some(Rgb565::BLUE));
        assert_eq!(c.pixel_at(6, 5), Some(Rgb565::BLACK));
        assert_eq!(c.pixel_at(1, 3), Some(Rgb565::BLACK));
        assert_eq!(c.dirty_band(), Some((2, 5)));

        c.clear_clip();
        c.pixel(0, 0, Rgb565::BLUE);
        assert_eq!(c.pixel_at(0, 0), Some(Rgb565::BLUE));
    }

    #[test]
    fn test_vline_and_clip() {
        let mut buf = vec![0u16; 6 * 6];
        let mut c = canvas(&mut buf, 6, 6);
        c.set_clip(Rect::new(0, 1, 6, 3));
        c.vline(2, -5, 20, Rgb565::WHITE);
        assert_eq!(c.pixel_at(2, 0), Some(Rgb565::BLACK));
        assert_eq!(c.pixel_at(2, 1), Some(Rgb565::WHITE));
        assert_eq!(c.pixel_at(2, 3), Some(Rgb565::WHITE));
        assert_eq!(c.pixel_at(2, 4), Some(Rgb565::BLACK));
    }

    #[test]
    fn test_fill_circle_is_symmetric() {
        let mut buf = vec![0u16; 21 * 21];
        let mut c = canvas(&mut buf, 21, 21);
        c.fill_circle(10, 10, 6, Rgb565::WHITE);

        for dy in -7i16..=7 {
            for dx in -7i16..=7 {
                let a = c.pixel_at(10 + dx, 10 + dy);
                assert_eq!(a, c.pixel_at(10 - dx, 10 + dy));
                assert_eq!(a, c.pixel_at(10 + dx, 10 - dy));
            }
        }
        assert_eq!(c.pixel_at(10, 4), Some(Rgb565::WHITE));
        assert_eq!(c.pixel_at(16, 10), Some(Rgb565::WHITE));
        assert_eq!(c.pixel_at(16, 16), Some(Rgb565::BLACK));
    }

    #[test]
    fn test_print_advances_cursor() {
        let mut buf = vec![0u16; 64 * 32];
        let mut c = canvas(&mut buf, 64, 32);
        c.set_text_color(Rgb565::WHITE);
        c.set_cursor(1, 2);
        c.print("!!");
        assert_eq!(c.cursor(), Point::new(13, 2));
        // '!' lives in column 2, rows 0-4 and 6.
        assert_eq!(c.pixel_at(3, 2), Some(Rgb565::WHITE));
        assert_eq!(c.pixel_at(3, 7), Some(Rgb565::BLACK));
        assert_eq!(c.pixel_at(9, 8), Some(Rgb565::WHITE));

        c.print("\n");
        assert_eq!(c.cursor(), Point::new(0, 10));
    }

    #[test]
    fn test_scaled_glyph_soft_edge() {
        let mut buf = vec![0u16; 32 * 32];
        let mut c = canvas(&mut buf, 32, 32);
        c.set_text_color(Rgb565::WHITE);
        c.set_text_size(2);
        c.set_cursor(0, 0);
        c.print("!");

        // Filled cell (col 2, row 0) becomes a 2x2 block.
        assert_eq!(c.pixel_at(4, 0), Some(Rgb565::WHITE));
        assert_eq!(c.pixel_at(5, 1), Some(Rgb565::WHITE));
        // Empty cell to its right (col 3) has a filled left neighbor.
        let edge = Rgb565::WHITE.blend(Rgb565::BLACK, 80);
        assert_eq!(c.pixel_at(6, 0), Some(edge));
        assert_eq!(c.pixel_at(7, 0), Some(Rgb565::BLACK));
    }

    #[test]
    fn test_short_buffer_clamps_height() {
        let mut buf = vec![0u16; 10 * 4];
        let mut c = canvas(&mut buf, 10, 8);
        assert_eq!(c.height(), 4);
        c.fill_rect(0, 0, 10, 8, Rgb565::RED);
        assert_eq!(c.dirty_band(), Some((0, 3)));
    }

    #[test]
    fn test_reinit_after_rotation() {
        let mut buf = vec![0u16; 12 * 6];
        let mut c = canvas(&mut buf, 12, 6);
        c.set_clip(Rect::new(0, 0, 1, 1));
        c.display_mut().rotate();
        c.reinit();

        assert_eq!((c.width(), c.height()), (6, 12));
        assert_eq!(c.clip(), None);
        assert_eq!(c.dirty_band(), Some((0, 11)));
    }
}
