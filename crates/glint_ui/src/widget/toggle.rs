//! Two-state and one-of-many selectors with animated indicators.

use glint_core::{saturate_i16, saturate_u16, Rect, WidgetId};

use super::salt;
use crate::animation::Easing;
use crate::context::Ui;
use crate::draw;
use crate::painter::Painter;

const TOGGLE_MS: i32 = 180;
const CHECK_MS: i32 = 150;
const RADIO_MS: i32 = 150;

/// Tween value at which checkbox and radio marks start to show.
const MARK_THRESHOLD: i32 = 32;

impl<P: Painter> Ui<P> {
    /// Heads the tween `id.derive(salt)` toward on/off and returns its
    /// current value, 0..=256.
    fn switch_frac(&mut self, id: WidgetId, salt: u32, on: bool, ms: i32) -> i32 {
        let anim = id.derive(salt);
        let target = if on { 256 } else { 0 };
        self.anims.ensure(anim, target, ms, Easing::OutCubic);
        self.anims.get(anim, target)
    }

    /// Label followed by a sliding switch. Flips `value` when clicked.
    pub fn toggle(&mut self, text: &str, value: &mut bool) -> bool {
        let id = self.ids.make(text);
        let fs = self.font_size();
        let h = i32::from(self.s(self.theme.widget_height));
        let pad = i32::from(self.s(self.theme.padding));
        let track_w = i32::from(self.s(28));
        let track_h = i32::from(self.s(14));
        let tw = i32::from(draw::text_width(text, fs));
        let r = self
            .layout
            .allocate(saturate_u16(tw + track_w + 3 * pad), saturate_u16(h));

        let fired = self.interact(id, r).clicked;
        if fired {
            *value = !*value;
        }

        draw::text_left(&mut self.painter, r, text, self.theme.text, fs, saturate_i16(pad));

        let track_x = i32::from(r.x()) + tw + 2 * pad;
        let track_y = i32::from(r.y()) + (h - track_h) / 2;
        let track = Rect::new(
            saturate_i16(track_x),
            saturate_i16(track_y),
            saturate_u16(track_w),
            saturate_u16(track_h),
        );
        let radius = saturate_i16(track_h / 2);

        let frac = self.switch_frac(id, salt::TOGGLE_KNOB, *value, TOGGLE_MS);
        let fill = self.theme.accent.blend(self.theme.surface_alt, frac.clamp(0, 255) as u8);
        draw::rounded_rect_fill(&mut self.painter, track, radius, fill);
        draw::rounded_rect_outline(&mut self.painter, track, radius, self.theme.border);

        let off_x = track_x + track_h / 2;
        let on_x = track_x + track_w - track_h / 2;
        let knob_x = off_x + (((on_x - off_x) * frac) >> 8);
        let knob_y = track_y + track_h / 2;
        self.painter.fill_circle(
            saturate_i16(knob_x),
            saturate_i16(knob_y),
            saturate_i16(track_h / 2 - 2),
            self.theme.text,
        );
        fired
    }

    /// Square box with a cross mark, then the label.
    pub fn checkbox(&mut self, text: &str, value: &mut bool) -> bool {
        let id = self.ids.make(text);
        let fs = self.font_size();
        let h = i32::from(self.s(self.theme.widget_height));
        let pad = i32::from(self.s(self.theme.padding));
        let box_sz = i32::from(self.s(14));
        let tw = i32::from(draw::text_width(text, fs));
        let r = self
            .layout
            .allocate(saturate_u16(box_sz + tw + 3 * pad), saturate_u16(h));

        let fired = self.interact(id, r).clicked;
        if fired {
            *value = !*value;
        }

        let bx = i32::from(r.x()) + pad;
        let by = i32::from(r.y()) + (h - box_sz) / 2;
        let bx_rect = Rect::new(
            saturate_i16(bx),
            saturate_i16(by),
            saturate_u16(box_sz),
            saturate_u16(box_sz),
        );

        let frac = self.switch_frac(id, salt::CHECK_FILL, *value, CHECK_MS);
        let fill = self.theme.accent.blend(self.theme.surface_alt, frac.clamp(0, 255) as u8);
        let radius = self.s(2);
        draw::rounded_rect_fill(&mut self.painter, bx_rect, radius, fill);
        draw::rounded_rect_outline(&mut self.painter, bx_rect, radius, self.theme.border);

        if frac > MARK_THRESHOLD {
            let cx = bx + box_sz / 2;
            let cy = by + box_sz / 2;
            let mark = ((box_sz / 4) * frac / 256).max(1);
            let len = saturate_i16(2 * mark + 1);
            self.painter
                .hline(saturate_i16(cx - mark), saturate_i16(cy), len, self.theme.text);
            self.painter
                .vline(saturate_i16(cx), saturate_i16(cy - mark), len, self.theme.text);
        }

        let text_r = Rect::new(
            saturate_i16(bx + box_sz + pad),
            r.y(),
            saturate_u16(tw),
            saturate_u16(h),
        );
        draw::text_left(&mut self.painter, text_r, text, self.theme.text, fs, 0);
        fired
    }

    /// One option of a group bound to `current`.
    ///
    /// Clicking selects `this_val`. Returns true only when that changes
    /// `current`.
    pub fn radio(&mut self, text: &str, current: &mut i16, this_val: i16) -> bool {
        let id = self.ids.make(text);
        let fs = self.font_size();
        let h = i32::from(self.s(self.theme.widget_height));
        let pad = i32::from(self.s(self.theme.padding));
        let circle_r = i32::from(self.s(6));
        let tw = i32::from(draw::text_width(text, fs));
        let r = self
            .layout
            .allocate(saturate_u16(2 * circle_r + tw + 3 * pad), saturate_u16(h));

        let mut changed = false;
        if self.interact(id, r).clicked && *current != this_val {
            *current = this_val;
            changed = true;
        }

        let selected = *current == this_val;
        let cx = saturate_i16(i32::from(r.x()) + pad + circle_r);
        let cy = saturate_i16(i32::from(r.y()) + h / 2);
        draw::circle_outline(&mut self.painter, cx, cy, saturate_i16(circle_r), self.theme.border);

        let frac = self.switch_frac(id, salt::RADIO_DOT, selected, RADIO_MS);
        if frac > MARK_THRESHOLD {
            let inner = ((circle_r - 3) * frac / 256).max(1);
            self.painter
                .fill_circle(cx, cy, saturate_i16(inner), self.theme.accent);
        }

        let text_r = Rect::new(
            saturate_i16(i32::from(cx) + circle_r + pad),
            r.y(),
            saturate_u16(tw),
            saturate_u16(h),
        );
        draw::text_left(&mut self.painter, text_r, text, self.theme.text, fs, 0);
        changed
    }
}

#[cfg(test)]
mod tests {
    use glint_core::Rgb565;

    use crate::input::PointerSample;
    use crate::record::{PaintOp, PaintRecorder};
    use crate::style::Theme;
    use crate::Ui;

    fn ui() -> Ui<PaintRecorder> {
        Ui::new(PaintRecorder::new(320, 240), Theme::DARK)
    }

    fn click<F: FnMut(&mut Ui<PaintRecorder>) -> bool>(ui: &mut Ui<PaintRecorder>, x: i16, y: i16, mut f: F) -> bool {
        ui.begin_frame(PointerSample::touch(x, y), 16);
        let a = f(ui);
        ui.end_frame();
        ui.begin_frame(PointerSample::lifted(), 16);
        let b = f(ui);
        ui.end_frame();
        a || b
    }

    fn circles(ui: &Ui<PaintRecorder>, color: Rgb565) -> Vec<(i16, i16)> {
        ui.painter()
            .ops()
            .iter()
            .filter_map(|op| match op {
                PaintOp::FillCircle { x, r, color: c, .. } if *c == color => Some((*x, *r)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_toggle_knob_slides() {
        let mut ui = ui();
        let mut on = false;
        ui.begin_frame(PointerSample::lifted(), 0);
        ui.toggle("Wifi", &mut on);
        // Track starts after 24 px of text and two paddings.
        let off_knob = 6 + 24 + 12 + 7;
        assert_eq!(circles(&ui, Theme::DARK.text), vec![(off_knob, 5)]);

        assert!(click(&mut ui, 10, 10, |ui| ui.toggle("Wifi", &mut on)));
        assert!(on);

        // Finished tween parks the knob at the far end.
        ui.painter_mut().clear();
        ui.begin_frame(PointerSample::lifted(), 1000);
        ui.toggle("Wifi", &mut on);
        assert_eq!(circles(&ui, Theme::DARK.text), vec![(off_knob + 14, 5)]);
    }

    #[test]
    fn test_checkbox_mark_only_when_checked() {
        let mut ui = ui();
        let mut checked = true;
        ui.begin_frame(PointerSample::lifted(), 0);
        ui.checkbox("Log", &mut checked);
        let marks = ui
            .painter()
            .ops()
            .iter()
            .filter(|op| matches!(op, PaintOp::VLine { color, .. } if *color == Theme::DARK.text))
            .count();
        assert_eq!(marks, 1);

        checked = false;
        ui.painter_mut().clear();
        ui.begin_frame(PointerSample::lifted(), 0);
        ui.checkbox("Log", &mut checked);
        ui.begin_frame(PointerSample::lifted(), 1000);
        ui.painter_mut().clear();
        ui.checkbox("Log", &mut checked);
        assert!(!ui
            .painter()
            .ops()
            .iter()
            .any(|op| matches!(op, PaintOp::VLine { color, .. } if *color == Theme::DARK.text)));
    }

    #[test]
    fn test_radio_group() {
        let mut ui = ui();
        let mut choice = 0i16;
        let mut group = |ui: &mut Ui<PaintRecorder>| {
            let a = ui.radio("Low", &mut choice, 0);
            let b = ui.radio("High", &mut choice, 1);
            a || b
        };

        // "High" is the second row: y 34..58.
        assert!(click(&mut ui, 10, 40, &mut group));
        assert!(!click(&mut ui, 10, 40, &mut group));
        assert_eq!(choice, 1);
    }

    #[test]
    fn test_radio_dot_follows_selection() {
        let mut ui = ui();
        let mut choice = 1i16;
        ui.begin_frame(PointerSample::lifted(), 0);
        ui.radio("A", &mut choice, 0);
        ui.radio("B", &mut choice, 1);
        let dots = circles(&ui, Theme::DARK.accent);
        assert_eq!(dots, vec![(6 + 6 + 6, 3)]);
    }
}
