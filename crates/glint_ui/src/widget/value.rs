//! Numeric controls and readouts.

use glint_core::{saturate_i16, saturate_u16, Rect, Rgb565, WidgetId};

use super::salt;
use crate::animation::Easing;
use crate::context::Ui;
use crate::draw;
use crate::painter::Painter;
use crate::text::FmtBuf;

const SLIDER_FILL_MS: i32 = 120;
const SLIDER_HALO_MS: i32 = 150;

/// Gauge arc: starts bottom-left and sweeps 270 degrees clockwise.
const GAUGE_START_DEG: i16 = 135;
const GAUGE_END_DEG: i16 = 45;
const GAUGE_SWEEP_DEG: f32 = 270.0;

/// Label on the left, a bar filling the rest of the row.
struct Bar {
    x: i32,
    y: i32,
    w: i32,
    h: i32,
}

impl Bar {
    fn rect(&self) -> Rect {
        Rect::new(
            saturate_i16(self.x),
            saturate_i16(self.y),
            saturate_u16(self.w),
            saturate_u16(self.h),
        )
    }

    fn filled(&self, w: i32) -> Rect {
        Rect::new(
            saturate_i16(self.x),
            saturate_i16(self.y),
            saturate_u16(w),
            saturate_u16(self.h),
        )
    }
}

impl<P: Painter> Ui<P> {
    /// Allocates a full-width row and lays a bar of height `bar_h` after
    /// the label.
    fn labelled_bar(&mut self, text: &str, bar_h: i16) -> (Rect, Bar) {
        let fs = self.font_size();
        let r = self.full_width_rect();
        let pad = i32::from(self.s(self.theme.padding));
        let label_w = i32::from(draw::text_width(text, fs)) + 2 * pad;
        let h = i32::from(r.h());
        let bar_h = i32::from(bar_h);
        let bar = Bar {
            x: i32::from(r.x()) + label_w,
            y: i32::from(r.y()) + (h - bar_h) / 2,
            w: i32::from(r.w()) - label_w - pad,
            h: bar_h,
        };
        (r, bar)
    }

    /// Draggable track bound to `value` in `min..=max`.
    ///
    /// The slider captures the pointer from the press until it lifts, so
    /// dragging past either end clamps instead of letting go. Returns true
    /// on frames where `value` changes.
    pub fn slider(&mut self, text: &str, value: &mut i16, min: i16, max: i16) -> bool {
        let id = self.ids.make(text);
        let track_h = self.s(6);
        let (r, track) = self.labelled_bar(text, track_h);
        let range = i32::from(max) - i32::from(min);

        let mut changed = false;
        if self.input.pressed_in(&r) {
            self.active = id;
        }
        if self.active == id {
            if self.input.down() && track.w > 0 {
                let rel = (i32::from(self.input.pos().x) - track.x).clamp(0, track.w);
                let next = saturate_i16(i32::from(min) + rel * range / track.w);
                if next != *value {
                    *value = next;
                    changed = true;
                }
            }
            if !self.input.down() {
                self.active = WidgetId::NONE;
            }
        }
        if self.input.down_in(&r) {
            self.hot = id;
        }

        let fs = self.font_size();
        let pad = self.s(self.theme.padding);
        let radius = self.s(3);
        draw::text_left(&mut self.painter, r, text, self.theme.text, fs, pad);
        draw::rounded_rect_fill(&mut self.painter, track.rect(), radius, self.theme.surface_alt);

        let track_w = track.w.max(0);
        let target = if range > 0 {
            ((i32::from(*value) - i32::from(min)) * track_w / range).clamp(0, track_w)
        } else {
            0
        };
        let fill_anim = id.derive(salt::SLIDER_FILL);
        self.anims.ensure(fill_anim, target, SLIDER_FILL_MS, Easing::OutCubic);
        let fill_w = self.anims.get(fill_anim, target).clamp(0, track_w);
        if fill_w > 0 {
            draw::rounded_rect_fill(&mut self.painter, track.filled(fill_w), radius, self.theme.accent);
        }

        let thumb_x = saturate_i16(track.x + fill_w);
        let thumb_y = saturate_i16(i32::from(r.y()) + i32::from(r.h()) / 2);
        let thumb_r = i32::from(self.s(5));
        let held = self.active == id;

        let halo_anim = id.derive(salt::SLIDER_HALO);
        self.anims
            .ensure(halo_anim, if held { 256 } else { 0 }, SLIDER_HALO_MS, Easing::OutQuad);
        let halo = self.anims.get(halo_anim, 0);
        if halo > 16 {
            let halo_r = thumb_r + i32::from(self.s(3)) * halo / 256;
            let alpha = (80 * halo / 256).clamp(0, 255) as u8;
            let color = self.theme.accent.blend(self.theme.bg, alpha);
            self.painter
                .fill_circle(thumb_x, thumb_y, saturate_i16(halo_r), color);
        }

        let thumb = if held {
            self.theme.accent_press
        } else {
            self.theme.accent
        };
        self.painter
            .fill_circle(thumb_x, thumb_y, saturate_i16(thumb_r), thumb);
        changed
    }

    /// `label  [-] value [+]`, stepping `value` by `step` within
    /// `min..=max`. Returns true when a button changed the value.
    pub fn spinner(&mut self, label: &str, value: &mut i16, min: i16, max: i16, step: i16) -> bool {
        let id = self.ids.make(label);
        let fs = self.font_size();
        let r = self.full_width_rect();
        let h = r.h();
        let pad = self.s(self.theme.padding);
        let label_w = i32::from(draw::text_width(label, fs)) + 2 * i32::from(pad);

        let minus_r = Rect::new(saturate_i16(i32::from(r.x()) + label_w), r.y(), h, h);
        let plus_r = Rect::new(saturate_i16(r.right() - i32::from(h)), r.y(), h, h);
        let val_r = Rect::new(
            saturate_i16(minus_r.right()),
            r.y(),
            saturate_u16(i32::from(plus_r.x()) - minus_r.right()),
            h,
        );

        let mut changed = false;
        let minus_id = id.derive(salt::SPIN_MINUS);
        if self.capture(minus_id, minus_r) && *value > min {
            *value = value.saturating_sub(step).max(min);
            changed = true;
        }
        let plus_id = id.derive(salt::SPIN_PLUS);
        if self.capture(plus_id, plus_r) && *value < max {
            *value = value.saturating_add(step).min(max);
            changed = true;
        }

        let radius = self.s(2);
        let (text, surface, surface_alt, press) = (
            self.theme.text,
            self.theme.surface,
            self.theme.surface_alt,
            self.theme.accent_press,
        );
        draw::text_left(&mut self.painter, r, label, text, fs, pad);

        let minus_bg = if self.active == minus_id { press } else { surface_alt };
        draw::rounded_rect_fill(&mut self.painter, minus_r, radius, minus_bg);
        draw::text_centered(&mut self.painter, minus_r, "-", text, fs);

        let plus_bg = if self.active == plus_id { press } else { surface_alt };
        draw::rounded_rect_fill(&mut self.painter, plus_r, radius, plus_bg);
        draw::text_centered(&mut self.painter, plus_r, "+", text, fs);

        draw::rounded_rect_fill(&mut self.painter, val_r, 0, surface);
        draw::rounded_rect_outline(&mut self.painter, val_r, 0, self.theme.border);
        let shown = FmtBuf::<16>::format(format_args!("{value}"));
        draw::text_centered(&mut self.painter, val_r, &shown, text, fs);
        changed
    }

    /// Read-only bar filled to `fraction` (clamped to 0..=1).
    pub fn progress(&mut self, text: &str, fraction: f32) {
        let bar_h = self.s(8);
        let (r, bar) = self.labelled_bar(text, bar_h);
        let fs = self.font_size();
        let pad = self.s(self.theme.padding);
        let radius = self.s(3);
        draw::text_left(&mut self.painter, r, text, self.theme.text, fs, pad);
        draw::rounded_rect_fill(&mut self.painter, bar.rect(), radius, self.theme.surface_alt);

        let f = fraction.clamp(0.0, 1.0);
        let fill_w = (bar.w as f32 * f) as i32;
        if fill_w > 0 {
            draw::rounded_rect_fill(&mut self.painter, bar.filled(fill_w), radius, self.theme.accent);
        }
    }

    /// Ring gauge centered on (`cx`, `cy`). Drawn in place; takes no
    /// layout space.
    #[allow(clippy::too_many_arguments)]
    pub fn gauge(
        &mut self,
        cx: i16,
        cy: i16,
        outer_r: i16,
        inner_r: i16,
        fraction: f32,
        fill: Rgb565,
        track: Rgb565,
    ) {
        draw::arc_fill(&mut self.painter, cx, cy, outer_r, inner_r, GAUGE_START_DEG, GAUGE_END_DEG, track);

        let f = fraction.clamp(0.0, 1.0);
        let mut end = GAUGE_START_DEG + (GAUGE_SWEEP_DEG * f) as i16;
        if end >= 360 {
            end -= 360;
        }
        if f > 0.001 {
            draw::arc_fill(&mut self.painter, cx, cy, outer_r, inner_r, GAUGE_START_DEG, end, fill);
        }
    }
}
