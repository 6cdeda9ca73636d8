//! Non-interactive widgets: text, decorations and bitmaps.

use core::fmt;

use glint_core::{saturate_i16, saturate_u16, Rect, Rgb565};

use crate::context::Ui;
use crate::draw;
use crate::painter::Painter;
use crate::text::{FmtBuf, LABEL_CAPACITY};

impl<P: Painter> Ui<P> {
    /// Single line of text in the theme text color.
    pub fn label(&mut self, text: &str) {
        let color = self.theme.text;
        self.label_colored(text, color);
    }

    /// Single line of text in `color`.
    pub fn label_colored(&mut self, text: &str, color: Rgb565) {
        let fs = self.font_size();
        let pad = self.s(self.theme.padding);
        let tw = i32::from(draw::text_width(text, fs));
        let h = draw::text_height(fs).max(self.s(self.theme.widget_height));
        let w = (tw + 2 * i32::from(pad)).min(i32::from(self.layout.available_w()));
        let r = self.layout.allocate(saturate_u16(w), saturate_u16(i32::from(h)));
        draw::text_left(&mut self.painter, r, text, color, fs, pad);
    }

    /// Formatted label. Output past 127 bytes is cut off.
    ///
    /// ```ignore
    /// ui.label_fmt(format_args!("{} fps", fps));
    /// ```
    pub fn label_fmt(&mut self, args: fmt::Arguments<'_>) {
        let text = FmtBuf::<LABEL_CAPACITY>::format(args);
        self.label(&text);
    }

    /// Pill sized to its text.
    pub fn badge(&mut self, text: &str, color: Rgb565) {
        let fs = self.font_size();
        let tw = i32::from(draw::text_width(text, fs));
        let th = i32::from(draw::text_height(fs));
        let bw = tw + 2 * i32::from(self.s(6));
        let bh = th + 2 * i32::from(self.s(2));
        let r = self.layout.allocate(saturate_u16(bw), saturate_u16(bh));
        draw::rounded_rect_fill(&mut self.painter, r, saturate_i16(bh / 2), color);
        draw::text_centered(&mut self.painter, r, text, self.theme.text, fs);
    }

    /// Full-width title bar. `None` uses the accent.
    pub fn header(&mut self, text: &str, bg: Option<Rgb565>) {
        let fs = self.font_size();
        let h = i32::from(self.s(self.theme.widget_height)) + i32::from(self.s(4));
        let w = self.layout.available_w();
        let r = self.layout.allocate(w, saturate_u16(h));
        let radius = self.s(self.theme.corner_radius);
        draw::rounded_rect_fill(&mut self.painter, r, radius, bg.unwrap_or(self.theme.accent));
        draw::text_centered(&mut self.painter, r, text, self.theme.text, fs);
    }

    /// Card with a dim caption over a large value and an accent stripe.
    pub fn stat_card(&mut self, label: &str, value: &str, accent: Rgb565) {
        let fs = self.font_size();
        let vfs = fs.max(2);
        let lh = i32::from(draw::text_height(fs));
        let vh = i32::from(draw::text_height(vfs));
        let pad = i32::from(self.s(self.theme.padding));
        let gap = i32::from(self.s(2));
        let w = self.layout.available_w();
        let r = self
            .layout
            .allocate(w, saturate_u16(lh + vh + 2 * pad + gap));

        let radius = self.s(self.theme.corner_radius);
        draw::rounded_rect_fill(&mut self.painter, r, radius, self.theme.surface_alt);

        let bar_w = i32::from(self.s(3));
        self.painter.fill_rect(
            r.x(),
            saturate_i16(i32::from(r.y()) + gap),
            saturate_i16(bar_w),
            saturate_i16(i32::from(r.h()) - 2 * gap),
            accent,
        );

        let lx = saturate_i16(i32::from(r.x()) + bar_w + pad);
        let tw = saturate_u16(i32::from(r.w()) - bar_w - 2 * pad);
        let top = i32::from(r.y()) + pad;
        let label_r = Rect::new(lx, saturate_i16(top), tw, saturate_u16(lh));
        draw::text_left(&mut self.painter, label_r, label, self.theme.text_dim, fs, 0);
        let value_r = Rect::new(lx, saturate_i16(top + lh + gap), tw, saturate_u16(vh));
        draw::text_left(&mut self.painter, value_r, value, accent, vfs, 0);
    }

    /// One-pixel rule with spacing above and below.
    pub fn separator(&mut self) {
        let sp = self.s(self.theme.spacing);
        self.layout.advance(sp);
        let w = self.layout.available_w();
        let r = self.layout.allocate(w, 1);
        self.painter
            .hline(r.x(), r.y(), saturate_i16(i32::from(r.w())), self.theme.border);
        self.layout.advance(sp);
    }

    /// Row-major `w` x `h` bitmap. Black (zero) pixels are transparent.
    ///
    /// A bitmap shorter than `w * h` draws what it has.
    pub fn icon(&mut self, bitmap: &[Rgb565], w: u16, h: u16) {
        let r = self.layout.allocate(w, h);
        let rows = bitmap.chunks(usize::from(w).max(1)).take(usize::from(h));
        for (row, line) in rows.enumerate() {
            for (col, &px) in line.iter().enumerate() {
                if px != Rgb565::BLACK {
                    self.painter.pixel(
                        saturate_i16(i32::from(r.x()) + col as i32),
                        saturate_i16(i32::from(r.y()) + row as i32),
                        px,
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use glint_core::Rgb565;

    use crate::input::PointerSample;
    use crate::record::{PaintOp, PaintRecorder};
    use crate::style::Theme;
    use crate::Ui;

    fn frame() -> Ui<PaintRecorder> {
        let mut ui = Ui::new(PaintRecorder::new(320, 240), Theme::DARK);
        ui.begin_frame(PointerSample::lifted(), 0);
        ui.painter_mut().clear();
        ui
    }

    #[test]
    fn test_label_placement() {
        let mut ui = frame();
        ui.label("Hi");
        assert_eq!(
            ui.painter().ops(),
            &[
                PaintOp::TextSize(1),
                PaintOp::TextColor(Theme::DARK.text),
                PaintOp::Cursor { x: 12, y: 14 },
                PaintOp::Print("Hi".into()),
            ]
        );
        assert_eq!(ui.cursor().y, 6 + 24 + 4);
    }

    #[test]
    fn test_label_fmt_truncates() {
        let mut ui = frame();
        let long = "y".repeat(200);
        ui.label_fmt(format_args!("{long}!"));
        assert_eq!(ui.painter().printed().len(), 127);
    }

    #[test]
    fn test_header_default_bg() {
        let mut ui = frame();
        ui.header("Top", None);
        ui.header("Alt", Some(Rgb565::RED));
        let fills: Vec<Rgb565> = ui
            .painter()
            .ops()
            .iter()
            .filter_map(|op| match op {
                PaintOp::FillRect { color, .. } => Some(*color),
                _ => None,
            })
            .collect();
        assert!(fills.contains(&Theme::DARK.accent));
        assert!(fills.contains(&Rgb565::RED));
        assert_eq!(ui.cursor().y, 6 + 2 * (28 + 4));
    }

    #[test]
    fn test_separator_spacing() {
        let mut ui = frame();
        ui.separator();
        assert_eq!(
            ui.painter().ops(),
            &[PaintOp::HLine { x: 6, y: 10, len: 314, color: Theme::DARK.border }]
        );
        assert_eq!(ui.cursor().y, 6 + 4 + 1 + 4 + 4);
    }

    #[test]
    fn test_icon_skips_black() {
        let mut ui = frame();
        let bmp = [Rgb565::RED, Rgb565::BLACK, Rgb565::BLACK, Rgb565::GREEN];
        ui.icon(&bmp, 2, 2);
        assert_eq!(
            ui.painter().ops(),
            &[
                PaintOp::Pixel { x: 6, y: 6, color: Rgb565::RED },
                PaintOp::Pixel { x: 7, y: 7, color: Rgb565::GREEN },
            ]
        );
    }

    #[test]
    fn test_stat_card_value_is_large() {
        let mut ui = frame();
        ui.stat_card("CPU", "42%", Theme::DARK.success);
        assert!(ui.painter().ops().contains(&PaintOp::TextSize(2)));
        // 8 + 16 + 2 * 6 + 2
        assert_eq!(ui.cursor().y, 6 + 38 + 4);
    }
}
