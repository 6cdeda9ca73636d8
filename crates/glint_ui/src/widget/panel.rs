//! Scrollable, clipped panels.
//!
//! A panel's scroll state is looked up by id in a small table that lives as
//! long as the context. Content height is measured at `panel_end`, so the
//! scrollbar appears one frame after the content outgrows the panel.

use glint_core::{saturate_i16, saturate_u16, Rect, WidgetId};
use tracing::trace;

use crate::context::Ui;
use crate::draw;
use crate::layout::{Container, Direction, LAYOUT_STACK_DEPTH};
use crate::painter::Painter;

/// Scrollable panels tracked at once.
pub(crate) const SCROLL_PANELS: usize = 4;

/// Panels open at once. Each one holds a layout level, so the layout
/// stack runs out first.
pub(crate) const PANEL_DEPTH: usize = LAYOUT_STACK_DEPTH;

/// Height of the virtual container a panel lays its content into.
const VIRTUAL_HEIGHT: u16 = 4096;

/// Momentum is stored at 4x the per-frame offset step.
const MOMENTUM_DIV: i32 = 4;

/// Scroll state of one panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollEntry {
    /// Owning panel; [`WidgetId::NONE`] marks a free entry.
    pub id: WidgetId,
    /// Pixels scrolled from the top.
    pub offset: i16,
    /// Content height measured last frame.
    pub content_h: i16,
    /// Momentum, in quarter pixels per frame.
    pub velocity: i16,
}

/// Bookkeeping for a panel between `panel_begin` and `panel_end`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PanelFrame {
    scroll: Option<usize>,
    clip: Rect,
    content_top: i16,
}

impl<P: Painter> Ui<P> {
    fn find_scroll(&mut self, id: WidgetId) -> Option<usize> {
        if let Some(i) = self.scroll.iter().position(|e| e.id == id) {
            return Some(i);
        }
        let free = self.scroll.iter().position(|e| e.id.is_none());
        match free {
            Some(i) => self.scroll[i] = ScrollEntry { id, ..ScrollEntry::default() },
            None => trace!(panel = id.raw(), "scroll table full, panel will not scroll"),
        }
        free
    }

    /// Opens a panel over the rest of the current container.
    ///
    /// Widgets until the matching [`Ui::panel_end`] are clipped to the
    /// panel and scroll with it. Returns the panel's id, usable with
    /// [`Ui::scroll_entry`].
    pub fn panel_begin(&mut self, title: Option<&str>, with_shadow: bool) -> WidgetId {
        let pad = self.s(self.theme.padding);
        let radius = self.s(self.theme.corner_radius);
        let w = self.layout.available_w();
        let h = self.layout.available_h();
        let r = self.layout.allocate(w, h);

        if with_shadow {
            let off = self.s(2);
            draw::shadow(&mut self.painter, r, radius, self.theme.bg, 3, (off, off));
        }
        draw::rounded_rect_fill(&mut self.painter, r, radius, self.theme.surface);
        draw::rounded_rect_outline(&mut self.painter, r, radius, self.theme.border);

        let mut inner = r.shrink(pad);
        if let Some(title) = title {
            let fs = self.font_size();
            let title_h = draw::text_height(fs).saturating_add(pad);
            let title_r = Rect::new(inner.x(), inner.y(), inner.w(), title_h.max(0) as u16);
            draw::text_left(&mut self.painter, title_r, title, self.theme.text, fs, 0);
            let rule_y = saturate_i16(i32::from(inner.y()) + i32::from(title_h));
            self.painter
                .hline(inner.x(), rule_y, saturate_i16(i32::from(inner.w())), self.theme.border);
            let used = i32::from(title_h) + i32::from(pad);
            inner.pos.y = saturate_i16(i32::from(inner.y()) + used);
            inner.size.h = saturate_u16(i32::from(inner.h()) - used);
        }

        let id = self.ids.make(title.unwrap_or("__panel__"));
        let slot = self.find_scroll(id);

        let mut content = inner;
        let mut cursor = inner.pos;
        if let Some(entry) = slot.map(|i| self.scroll[i]) {
            if i32::from(entry.content_h) > i32::from(inner.h()) {
                let bar_space = self.s(4).saturating_add(self.s(2));
                if i32::from(inner.w()) > i32::from(bar_space) {
                    content.size.w = inner.w() - bar_space as u16;
                }
            }
            cursor.y = saturate_i16(i32::from(cursor.y) - i32::from(entry.offset));
        }
        content.size.h = VIRTUAL_HEIGHT;

        self.painter.set_clip(inner);
        let spacing = self.s(self.theme.spacing);
        let mut container = Container::new(content, Direction::Vertical, spacing);
        container.cursor = cursor;
        self.layout.push(container);

        // Cannot overflow: the layout push above is bounded the same way.
        let _ = self.panels.push(PanelFrame {
            scroll: slot,
            clip: inner,
            content_top: inner.y(),
        });
        id
    }

    /// Closes the innermost panel: measures content, applies drag and
    /// momentum, draws the scrollbar and restores the clip.
    pub fn panel_end(&mut self) {
        let Some(frame) = self.panels.pop() else {
            self.end();
            return;
        };

        if let Some(slot) = frame.scroll {
            let cursor_y = i32::from(self.layout.cursor().y);
            self.scroll_step(slot, &frame, cursor_y);
        }

        match self.panels.last() {
            Some(outer) => self.painter.set_clip(outer.clip),
            None => self.painter.clear_clip(),
        }
        self.end();
    }

    fn scroll_step(&mut self, slot: usize, frame: &PanelFrame, cursor_y: i32) {
        let mut e = self.scroll[slot];
        let content_h = cursor_y - (i32::from(frame.content_top) - i32::from(e.offset));
        e.content_h = saturate_i16(content_h);
        let content_h = i32::from(e.content_h);
        let visible_h = i32::from(frame.clip.h());
        let max_scroll = (content_h - visible_h).max(0);

        let mut offset = i32::from(e.offset);
        if self.active.is_none() && self.input.held() {
            if frame.clip.contains(self.input.pos()) || frame.clip.contains(self.input.prev_pos()) {
                let dy = i32::from(self.input.pos().y) - i32::from(self.input.prev_pos().y);
                offset -= dy;
                e.velocity = saturate_i16(-dy * MOMENTUM_DIV);
            }
        } else if !self.input.down() && e.velocity != 0 {
            offset += i32::from(e.velocity) / MOMENTUM_DIV;
            e.velocity -= e.velocity.signum();
        }
        e.offset = saturate_i16(offset.clamp(0, max_scroll));
        self.scroll[slot] = e;

        if max_scroll > 0 {
            self.draw_scrollbar(frame.clip, e.offset, content_h, max_scroll);
        }
    }

    fn draw_scrollbar(&mut self, clip: Rect, offset: i16, content_h: i32, max_scroll: i32) {
        let bar_w = i32::from(self.s(3));
        let bar_x = clip.right() - bar_w;
        let bar_h = i32::from(clip.h());
        let thumb_h = (bar_h * bar_h / content_h.max(1)).max(i32::from(self.s(8)));
        let thumb_y = i32::from(clip.y()) + i32::from(offset) * (bar_h - thumb_h) / max_scroll;

        self.painter.fill_rect(
            saturate_i16(bar_x),
            clip.y(),
            saturate_i16(bar_w),
            saturate_i16(bar_h),
            self.theme.surface_alt,
        );
        let thumb = Rect::new(
            saturate_i16(bar_x),
            saturate_i16(thumb_y),
            bar_w.max(0) as u16,
            thumb_h.max(0) as u16,
        );
        draw::rounded_rect_fill(&mut self.painter, thumb, saturate_i16(bar_w / 2), self.theme.border);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::PointerSample;
    use crate::record::{PaintOp, PaintRecorder};
    use crate::style::Theme;

    fn ui() -> Ui<PaintRecorder> {
        Ui::new(PaintRecorder::new(320, 240), Theme::DARK)
    }

    #[test]
    fn test_panel_clips_and_restores() {
        let mut ui = ui();
        ui.begin_frame(PointerSample::lifted(), 0);
        ui.panel_begin(Some("Log"), false);
        ui.label("line");
        ui.panel_end();

        let ops = ui.painter().ops();
        let set = ops.iter().position(|op| matches!(op, PaintOp::SetClip(_)));
        let cleared = ops.iter().position(|op| *op == PaintOp::ClearClip);
        assert!(set.is_some() && cleared.is_some());
        assert!(set < cleared);
        assert_eq!(ui.layout.depth(), 1);
    }

    #[test]
    fn test_title_shrinks_content() {
        let mut ui = ui();
        ui.begin_frame(PointerSample::lifted(), 0);
        ui.panel_begin(Some("T"), false);
        // Panel (6,6) inset by 6, then 8 px title + 6 + 6.
        assert_eq!(ui.cursor(), glint_core::Point::new(12, 12 + 20));
        ui.panel_end();
    }

    #[test]
    fn test_panel_ids_get_scroll_slots() {
        let mut ui = ui();
        ui.begin_frame(PointerSample::lifted(), 0);
        let mut ids = Vec::new();
        for name in ["a", "b", "c", "d", "e"] {
            ui.row(40);
            ids.push(ui.panel_begin(Some(name), false));
            ui.panel_end();
            ui.end();
        }
        assert!(ids[..4].iter().all(|&id| ui.scroll_entry(id).is_some()));
        assert!(ui.scroll_entry(ids[4]).is_none());
    }

    #[test]
    fn test_no_scrollbar_when_content_fits() {
        let mut ui = ui();
        for _ in 0..2 {
            ui.begin_frame(PointerSample::lifted(), 0);
            ui.panel_begin(None, false);
            ui.label("short");
            ui.panel_end();
        }
        let id = ui.make_id("__panel__");
        let entry = ui.scroll_entry(id).unwrap_or_default();
        assert_eq!(entry.offset, 0);
        assert_eq!(entry.content_h, 24 + 4);
        assert!(!ui
            .painter()
            .ops()
            .iter()
            .any(|op| matches!(op, PaintOp::FillRect { color, .. } if *color == Theme::DARK.surface_alt)));
    }

    #[test]
    fn test_nested_panel_restores_outer_clip() {
        let mut ui = ui();
        ui.begin_frame(PointerSample::lifted(), 0);
        ui.panel_begin(Some("outer"), false);
        let outer_clip = match ui.painter().ops().last() {
            Some(PaintOp::SetClip(r)) => *r,
            other => panic!("expected clip, got {other:?}"),
        };
        ui.panel_begin(Some("inner"), false);
        ui.panel_end();
        assert_eq!(ui.painter().ops().last(), Some(&PaintOp::SetClip(outer_clip)));
        ui.panel_end();
        assert_eq!(ui.painter().ops().last(), Some(&PaintOp::ClearClip));
    }
}
