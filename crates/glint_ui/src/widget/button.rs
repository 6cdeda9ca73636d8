//! Pressable widgets: buttons, tiles and list rows.
//!
//! All of them fire on release, and only when the release lands inside the
//! rect the press started in.

use glint_core::{saturate_u16, Rect, Rgb565, WidgetId};

use crate::context::{Response, Ui};
use crate::draw;
use crate::layout::Direction;
use crate::painter::Painter;

impl<P: Painter> Ui<P> {
    /// Sized to the label. Inside a row it shrinks to the space left.
    fn content_button_rect(&mut self, text: &str) -> Rect {
        let fs = self.font_size();
        let tw = i32::from(draw::text_width(text, fs));
        let h = self.s(self.theme.widget_height);
        let mut w = tw + 4 * i32::from(self.s(self.theme.padding));
        if self
            .layout
            .top()
            .is_some_and(|c| c.dir == Direction::Horizontal)
        {
            w = w.min(i32::from(self.layout.available_w()));
        }
        self.layout.allocate(saturate_u16(w), saturate_u16(i32::from(h)))
    }

    /// Full available width, one widget tall.
    pub(crate) fn full_width_rect(&mut self) -> Rect {
        let h = self.s(self.theme.widget_height);
        let w = self.layout.available_w();
        self.layout.allocate(w, saturate_u16(i32::from(h)))
    }

    /// Accent, hover or press color depending on `resp`.
    fn themed_bg(&self, id: WidgetId, resp: Response) -> Rgb565 {
        if self.active == id && resp.hovered {
            self.theme.accent_press
        } else if self.hot == id {
            self.theme.accent_hover
        } else {
            self.theme.accent
        }
    }

    /// `color`, darkened by `press` or lightened by `hover`.
    fn custom_bg(&self, id: WidgetId, resp: Response, color: Rgb565, press: u8, hover: u8) -> Rgb565 {
        if self.active == id && resp.hovered {
            color.darken(press)
        } else if self.hot == id {
            color.lighten(hover)
        } else {
            color
        }
    }

    fn gradient_button(&mut self, id: WidgetId, r: Rect, text: &str) -> bool {
        let resp = self.interact(id, r);
        let bg = self.themed_bg(id, resp);
        let radius = self.s(self.theme.corner_radius);
        let fs = self.font_size();
        draw::rounded_rect_gradient_v(&mut self.painter, r, radius, bg.lighten(60), bg.darken(40));
        draw::text_centered(&mut self.painter, r, text, self.theme.text, fs);
        resp.clicked
    }

    fn flat_button(&mut self, id: WidgetId, r: Rect, text: &str, color: Rgb565) -> bool {
        let resp = self.interact(id, r);
        let bg = self.custom_bg(id, resp, color, 80, 50);
        let radius = self.s(self.theme.corner_radius);
        let fs = self.font_size();
        draw::rounded_rect_fill(&mut self.painter, r, radius, bg);
        draw::text_centered(&mut self.painter, r, text, self.theme.text, fs);
        resp.clicked
    }

    /// Accent button sized to its label, with a vertical gradient.
    ///
    /// Returns true on the frame it is clicked.
    pub fn button(&mut self, text: &str) -> bool {
        let id = self.ids.make(text);
        let r = self.content_button_rect(text);
        self.gradient_button(id, r, text)
    }

    /// Flat button in `color`, sized to its label.
    pub fn button_colored(&mut self, text: &str, color: Rgb565) -> bool {
        let id = self.ids.make(text);
        let r = self.content_button_rect(text);
        self.flat_button(id, r, text, color)
    }

    /// [`Ui::button`] stretched across the available width.
    pub fn button_fill(&mut self, text: &str) -> bool {
        let id = self.ids.make(text);
        let r = self.full_width_rect();
        self.gradient_button(id, r, text)
    }

    /// [`Ui::button_colored`] stretched across the available width.
    pub fn button_fill_colored(&mut self, text: &str, color: Rgb565) -> bool {
        let id = self.ids.make(text);
        let r = self.full_width_rect();
        self.flat_button(id, r, text, color)
    }

    /// Fixed-size card with a centered caption.
    pub fn tile(&mut self, text: &str, color: Rgb565, w: u16, h: u16) -> bool {
        let id = self.ids.make(text);
        let r = self.layout.allocate(w, h);
        let resp = self.interact(id, r);
        let bg = self.custom_bg(id, resp, color, 60, 40);
        let radius = self.s(self.theme.corner_radius.saturating_add(2));
        let fs = self.font_size();
        draw::rounded_rect_fill(&mut self.painter, r, radius, bg);
        draw::text_centered(&mut self.painter, r, text, self.theme.text, fs);
        resp.clicked
    }

    /// Full-width selectable row. `selected` paints it in the accent.
    pub fn list_item(&mut self, text: &str, selected: bool) -> bool {
        let id = self.ids.make(text);
        let r = self.full_width_rect();
        let resp = self.interact(id, r);
        let bg = if selected {
            self.theme.accent
        } else if self.hot == id {
            self.theme.surface_alt
        } else {
            self.theme.surface
        };
        let (radius, pad, fs) = (self.s(2), self.s(self.theme.padding), self.font_size());
        draw::rounded_rect_fill(&mut self.painter, r, radius, bg);
        draw::text_left(&mut self.painter, r, text, self.theme.text, fs, pad);
        resp.clicked
    }
}

#[cfg(test)]
mod tests {
    use crate::input::PointerSample;
    use crate::record::{PaintOp, PaintRecorder};
    use crate::style::Theme;
    use crate::Ui;

    fn ui() -> Ui<PaintRecorder> {
        Ui::new(PaintRecorder::new(320, 240), Theme::DARK)
    }

    fn frame(ui: &mut Ui<PaintRecorder>, sample: PointerSample, f: impl FnOnce(&mut Ui<PaintRecorder>) -> bool) -> bool {
        ui.begin_frame(sample, 16);
        let fired = f(ui);
        ui.end_frame();
        fired
    }

    #[test]
    fn test_button_clicks_once() {
        let mut ui = ui();
        assert!(!frame(&mut ui, PointerSample::touch(10, 10), |ui| ui.button("Go")));
        assert!(ui.is_active(ui.make_id("Go")));
        assert!(frame(&mut ui, PointerSample::lifted(), |ui| ui.button("Go")));
        assert!(!frame(&mut ui, PointerSample::lifted(), |ui| ui.button("Go")));
    }

    #[test]
    fn test_button_release_outside_does_not_fire() {
        let mut ui = ui();
        frame(&mut ui, PointerSample::touch(10, 10), |ui| ui.button("Go"));
        frame(&mut ui, PointerSample::touch(200, 200), |ui| ui.button("Go"));
        assert!(!frame(&mut ui, PointerSample::lifted(), |ui| ui.button("Go")));
        assert!(!ui.is_active(ui.make_id("Go")));
    }

    #[test]
    fn test_button_sized_to_label() {
        let mut ui = ui();
        ui.begin_frame(PointerSample::lifted(), 0);
        ui.button("OK");
        // 2 chars * 6 px + 4 * padding, then spacing.
        assert_eq!(ui.cursor().y, 6 + 24 + 4);
        ui.same_line(None);
        assert_eq!(ui.cursor().x, 6 + 12 + 24 + 4);
    }

    #[test]
    fn test_press_color_only_while_inside() {
        let mut ui = ui();
        let theme = Theme::DARK;
        frame(&mut ui, PointerSample::touch(10, 10), |ui| ui.button_colored("B", theme.danger));
        ui.painter_mut().clear();
        frame(&mut ui, PointerSample::touch(11, 10), |ui| ui.button_colored("B", theme.danger));
        let pressed = theme.danger.darken(80);
        assert!(ui
            .painter()
            .ops()
            .iter()
            .any(|op| matches!(op, PaintOp::FillRect { color, .. } if *color == pressed)));
    }

    #[test]
    fn test_list_item_selected_uses_accent() {
        let mut ui = ui();
        ui.begin_frame(PointerSample::lifted(), 0);
        ui.painter_mut().clear();
        ui.list_item("Row", true);
        let accent = Theme::DARK.accent;
        assert_eq!(
            ui.painter().ops()[0],
            PaintOp::FillRect { x: 8, y: 6, w: 310, h: 24, color: accent }
        );
        assert_eq!(ui.painter().printed(), "Row");
    }

    #[test]
    fn test_tile_keeps_requested_size() {
        let mut ui = ui();
        ui.begin_frame(PointerSample::touch(50, 50), 0);
        ui.tile("T", Theme::DARK.success, 80, 60);
        assert!(ui.is_hot(ui.make_id("T")));
        assert_eq!(ui.cursor().y, 6 + 60 + 4);
    }
}
