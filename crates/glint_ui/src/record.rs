//! Host-side render targets for tests, benches and simulators.
//!
//! [`PaintRecorder`] captures painter calls as [`PaintOp`]s instead of
//! rasterizing them. [`MemoryDisplay`] is a panel that keeps what it was
//! sent in RAM. Both allocate; neither belongs on a device frame path.

use glint_core::{Rect, Rgb565};

use crate::painter::{Display, Painter};

/// One recorded painter call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaintOp {
    /// [`Painter::fill_rect`]
    FillRect {
        /// Left.
        x: i16,
        /// Top.
        y: i16,
        /// Width.
        w: i16,
        /// Height.
        h: i16,
        /// Fill.
        color: Rgb565,
    },
    /// [`Painter::hline`]
    HLine {
        /// Start column.
        x: i16,
        /// Row.
        y: i16,
        /// Length.
        len: i16,
        /// Color.
        color: Rgb565,
    },
    /// [`Painter::vline`]
    VLine {
        /// Column.
        x: i16,
        /// Start row.
        y: i16,
        /// Length.
        len: i16,
        /// Color.
        color: Rgb565,
    },
    /// [`Painter::pixel`]
    Pixel {
        /// Column.
        x: i16,
        /// Row.
        y: i16,
        /// Color.
        color: Rgb565,
    },
    /// [`Painter::fill_circle`]
    FillCircle {
        /// Center column.
        x: i16,
        /// Center row.
        y: i16,
        /// Radius.
        r: i16,
        /// Fill.
        color: Rgb565,
    },
    /// [`Painter::set_cursor`]
    Cursor {
        /// Column.
        x: i16,
        /// Row.
        y: i16,
    },
    /// [`Painter::set_text_color`]
    TextColor(Rgb565),
    /// [`Painter::set_text_size`]
    TextSize(u8),
    /// [`Painter::print`]
    Print(String),
    /// [`Painter::set_clip`]
    SetClip(Rect),
    /// [`Painter::clear_clip`]
    ClearClip,
}

/// Painter that records every call.
#[derive(Debug, Clone)]
pub struct PaintRecorder {
    width: u16,
    height: u16,
    ops: Vec<PaintOp>,
}

impl PaintRecorder {
    /// A recorder reporting the given target size.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            ops: Vec::with_capacity(256),
        }
    }

    /// Every call so far, in order.
    #[must_use]
    pub fn ops(&self) -> &[PaintOp] {
        &self.ops
    }

    /// Forgets recorded calls.
    pub fn clear(&mut self) {
        self.ops.clear();
    }

    /// Takes the recorded calls, leaving the recorder empty.
    pub fn take(&mut self) -> Vec<PaintOp> {
        std::mem::take(&mut self.ops)
    }

    /// Concatenation of every printed string.
    #[must_use]
    pub fn printed(&self) -> String {
        self.ops
            .iter()
            .filter_map(|op| match op {
                PaintOp::Print(s) => Some(s.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Painter for PaintRecorder {
    fn width(&self) -> u16 {
        self.width
    }

    fn height(&self) -> u16 {
        self.height
    }

    fn fill_rect(&mut self, x: i16, y: i16, w: i16, h: i16, color: Rgb565) {
        self.ops.push(PaintOp::FillRect { x, y, w, h, color });
    }

    fn hline(&mut self, x: i16, y: i16, len: i16, color: Rgb565) {
        self.ops.push(PaintOp::HLine { x, y, len, color });
    }

    fn vline(&mut self, x: i16, y: i16, len: i16, color: Rgb565) {
        self.ops.push(PaintOp::VLine { x, y, len, color });
    }

    fn pixel(&mut self, x: i16, y: i16, color: Rgb565) {
        self.ops.push(PaintOp::Pixel { x, y, color });
    }

    fn fill_circle(&mut self, x: i16, y: i16, r: i16, color: Rgb565) {
        self.ops.push(PaintOp::FillCircle { x, y, r, color });
    }

    fn set_cursor(&mut self, x: i16, y: i16) {
        self.ops.push(PaintOp::Cursor { x, y });
    }

    fn set_text_color(&mut self, color: Rgb565) {
        self.ops.push(PaintOp::TextColor(color));
    }

    fn set_text_size(&mut self, size: u8) {
        self.ops.push(PaintOp::TextSize(size));
    }

    fn print(&mut self, text: &str) {
        self.ops.push(PaintOp::Print(text.to_owned()));
    }

    fn set_clip(&mut self, clip: Rect) {
        self.ops.push(PaintOp::SetClip(clip));
    }

    fn clear_clip(&mut self) {
        self.ops.push(PaintOp::ClearClip);
    }
}

/// In-memory panel. Keeps a mirror of everything blitted to it.
#[derive(Debug, Clone)]
pub struct MemoryDisplay {
    width: u16,
    height: u16,
    mirror: Vec<Rgb565>,
    blits: Vec<(u16, u16, u16, u16)>,
}

impl MemoryDisplay {
    /// A black panel of the given size.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            mirror: vec![Rgb565::BLACK; usize::from(width) * usize::from(height)],
            blits: Vec::new(),
        }
    }

    /// Swaps width and height, as a panel rotated by 90 degrees.
    pub fn rotate(&mut self) {
        std::mem::swap(&mut self.width, &mut self.height);
        self.mirror.fill(Rgb565::BLACK);
    }

    /// `(x, y, w, h)` of every blit received.
    #[must_use]
    pub fn blits(&self) -> &[(u16, u16, u16, u16)] {
        &self.blits
    }

    /// Panel pixel as last blitted.
    #[must_use]
    pub fn pixel(&self, x: u16, y: u16) -> Option<Rgb565> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.mirror
            .get(usize::from(y) * usize::from(self.width) + usize::from(x))
            .copied()
    }
}

impl Display for MemoryDisplay {
    fn width(&self) -> u16 {
        self.width
    }

    fn height(&self) -> u16 {
        self.height
    }

    fn blit(&mut self, x: u16, y: u16, w: u16, h: u16, pixels: &[Rgb565]) {
        self.blits.push((x, y, w, h));
        let stride = usize::from(self.width);
        for row in 0..usize::from(h) {
            for col in 0..usize::from(w) {
                let (px, py) = (usize::from(x) + col, usize::from(y) + row);
                if px >= stride || py >= usize::from(self.height) {
                    continue;
                }
                if let Some(&c) = pixels.get(row * usize::from(w) + col) {
                    self.mirror[py * stride + px] = c;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recorder_captures_in_order() {
        let mut rec = PaintRecorder::new(320, 240);
        rec.set_cursor(1, 2);
        rec.print("hi");
        rec.pixel(3, 4, Rgb565::RED);

        assert_eq!(
            rec.ops(),
            &[
                PaintOp::Cursor { x: 1, y: 2 },
                PaintOp::Print("hi".into()),
                PaintOp::Pixel { x: 3, y: 4, color: Rgb565::RED },
            ]
        );
        assert_eq!(rec.printed(), "hi");
        assert_eq!(rec.take().len(), 3);
        assert!(rec.ops().is_empty());
    }

    #[test]
    fn test_memory_display_blit() {
        let mut panel = MemoryDisplay::new(4, 4);
        panel.blit(0, 1, 4, 1, &[Rgb565::RED; 4]);
        assert_eq!(panel.pixel(3, 1), Some(Rgb565::RED));
        assert_eq!(panel.pixel(3, 2), Some(Rgb565::BLACK));
        assert_eq!(panel.pixel(4, 0), None);
        assert_eq!(panel.blits(), &[(0, 1, 4, 1)]);
    }
}
