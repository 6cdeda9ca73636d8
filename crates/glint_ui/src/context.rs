//! # Interaction Context
//!
//! [`Ui`] is the per-frame orchestrator. It owns the render target and every
//! piece of cross-frame state: input history, the id stack, the layout
//! stack, the animation pool, the scroll table and the `hot`/`active` pair.
//!
//! ## Frame
//!
//! ```text
//! begin_frame(sample, dt)  input edges, tick tweens, reset hot + layout root
//!   widget calls           allocate -> id -> hot/active -> tween -> draw
//! end_frame()              drop `active` if the pointer is up
//! ```
//!
//! The widget catalog lives in [`crate::widget`]; it is implemented as more
//! `impl` blocks on [`Ui`].

use glint_core::{saturate_i16, saturate_u16, Extent, IdStack, Point, Rect, Scale, WidgetId};
use tracing::debug;

use crate::animation::AnimPool;
use crate::input::{InputCache, PointerSample};
use crate::layout::{Container, Direction, LayoutStack};
use crate::painter::Painter;
use crate::style::Theme;
use crate::widget::{PanelFrame, ScrollEntry, PANEL_DEPTH, SCROLL_PANELS};

/// Immediate-mode UI context over a painter `P`.
#[derive(Debug)]
pub struct Ui<P: Painter> {
    pub(crate) painter: P,
    pub(crate) theme: Theme,
    pub(crate) scale: Scale,
    pub(crate) input: InputCache,
    pub(crate) ids: IdStack,
    pub(crate) layout: LayoutStack,
    pub(crate) anims: AnimPool,
    pub(crate) hot: WidgetId,
    pub(crate) active: WidgetId,
    pub(crate) scroll: [ScrollEntry; SCROLL_PANELS],
    pub(crate) panels: heapless::Vec<PanelFrame, PANEL_DEPTH>,
}

/// Outcome of the shared press/release protocol for one widget.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Response {
    /// Pointer is down inside the widget this frame.
    pub hovered: bool,
    /// Pressed inside and released inside: the widget fired.
    pub clicked: bool,
}

impl<P: Painter> Ui<P> {
    /// Wraps `painter` and derives the scale from its size.
    #[must_use]
    pub fn new(painter: P, theme: Theme) -> Self {
        let mut ui = Self {
            painter,
            theme,
            scale: Scale::ONE,
            input: InputCache::new(),
            ids: IdStack::new(),
            layout: LayoutStack::new(),
            anims: AnimPool::new(),
            hot: WidgetId::NONE,
            active: WidgetId::NONE,
            scroll: [ScrollEntry::default(); SCROLL_PANELS],
            panels: heapless::Vec::new(),
        };
        ui.recalculate();
        ui
    }

    /// Replaces the theme. Tweens and scroll positions carry over.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// The theme in use.
    #[must_use]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Re-derives the scale from the painter size and forgets scroll state.
    ///
    /// Call after the display changes orientation, once the painter itself
    /// has been re-initialised.
    pub fn recalculate(&mut self) {
        self.scale = Scale::for_display(self.painter.width(), self.painter.height());
        self.scroll = [ScrollEntry::default(); SCROLL_PANELS];
        debug!(
            width = self.painter.width(),
            height = self.painter.height(),
            scale = self.scale.raw(),
            "ui scale recalculated"
        );
    }

    /// Returns to the state of a freshly built context, keeping the theme
    /// and the painter.
    pub fn reset(&mut self) {
        self.input = InputCache::new();
        self.ids.clear();
        self.layout.reset();
        self.anims.clear();
        self.hot = WidgetId::NONE;
        self.active = WidgetId::NONE;
        self.panels.clear();
        self.recalculate();
    }

    /// Starts a frame.
    ///
    /// `dt_ms` is the time since the previous frame. Clamp it after a stall:
    /// one large delta finishes every tween at once.
    pub fn begin_frame(&mut self, sample: PointerSample, dt_ms: i32) {
        self.input.update(sample);
        self.anims.tick(dt_ms);
        self.hot = WidgetId::NONE;
        self.panels.clear();

        let (pw, ph) = (self.painter.width(), self.painter.height());
        let pad = self.s(self.theme.padding);
        let mut root = Container::new(Rect::new(0, 0, pw, ph), Direction::Vertical, self.s(self.theme.spacing));
        root.cursor = Point::new(pad, pad);
        self.layout.reset();
        self.layout.push(root);

        // Repaint the outer band that widgets never cover.
        let (pw, ph) = (i32::from(pw), i32::from(ph));
        let edge = i32::from(pad) + i32::from(self.s(self.theme.corner_radius));
        let bg = self.theme.bg;
        let n = saturate_i16;
        self.painter.fill_rect(0, 0, n(pw), n(edge), bg);
        self.painter.fill_rect(0, n(ph - edge), n(pw), n(edge), bg);
        self.painter.fill_rect(0, n(edge), n(edge), n(ph - 2 * edge), bg);
        self.painter.fill_rect(n(pw - edge), n(edge), n(edge), n(ph - 2 * edge), bg);
    }

    /// Ends a frame. A widget that missed its release loses `active` here.
    pub fn end_frame(&mut self) {
        if !self.input.down() {
            self.active = WidgetId::NONE;
        }
    }

    // ------------------------------------------------------------------
    // Layout
    // ------------------------------------------------------------------

    /// Opens a horizontal container one row tall across the available width.
    ///
    /// `height <= 0` uses the theme widget height.
    pub fn row(&mut self, height: i16) {
        let h = if height > 0 {
            self.s(height)
        } else {
            self.s(self.theme.widget_height)
        };
        let w = self.layout.available_w();
        let r = self.layout.allocate(w, saturate_u16(i32::from(h)));
        let spacing = self.s(self.theme.spacing);
        self.layout.push(Container::new(r, Direction::Horizontal, spacing));
    }

    /// Opens a vertical container over the remaining height.
    ///
    /// `width <= 0` takes the whole available width.
    pub fn col(&mut self, width: i16) {
        let w = if width > 0 {
            saturate_u16(i32::from(self.s(width)))
        } else {
            self.layout.available_w()
        };
        let h = self.layout.available_h();
        let r = self.layout.allocate(w, h);
        let spacing = self.s(self.theme.spacing);
        self.layout.push(Container::new(r, Direction::Vertical, spacing));
    }

    /// Closes the innermost container. The root is never closed.
    pub fn end(&mut self) {
        if self.layout.depth() > 1 {
            self.layout.pop();
        }
    }

    /// Moves the cursor `px` (scaled) along the current axis.
    pub fn pad(&mut self, px: i16) {
        let px = self.s(px);
        self.layout.advance(px);
    }

    /// Same as [`Ui::pad`]; reads better for blank space.
    pub fn spacer(&mut self, px: i16) {
        self.pad(px);
    }

    /// Shifts the cursor `px` (scaled) to the right.
    pub fn indent(&mut self, px: i16) {
        let px = i32::from(self.s(px));
        if let Some(c) = self.layout.top_mut() {
            c.cursor.x = saturate_i16(i32::from(c.cursor.x) + px);
        }
    }

    /// Places the next widget beside the previous one.
    ///
    /// `None` uses the container's own spacing.
    pub fn same_line(&mut self, spacing: Option<i16>) {
        let sp = match spacing {
            Some(px) => self.s(px),
            None => self.layout.top().map_or(0, |c| c.spacing),
        };
        self.layout.same_line(sp);
    }

    // ------------------------------------------------------------------
    // Identity
    // ------------------------------------------------------------------

    /// Opens an id scope keyed by a loop index.
    pub fn push_id_index(&mut self, index: i16) {
        self.ids.push_index(index);
    }

    /// Opens an id scope keyed by a string.
    pub fn push_id(&mut self, label: &str) {
        self.ids.push_label(label);
    }

    /// Closes the innermost id scope.
    pub fn pop_id(&mut self) {
        self.ids.pop();
    }

    /// Identity a widget labelled `label` gets in the current scope.
    #[must_use]
    pub fn make_id(&self, label: &str) -> WidgetId {
        self.ids.make(label)
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// True if `id` holds hot this frame.
    #[must_use]
    pub fn is_hot(&self, id: WidgetId) -> bool {
        !id.is_none() && self.hot == id
    }

    /// True if `id` is capturing the pointer.
    #[must_use]
    pub fn is_active(&self, id: WidgetId) -> bool {
        !id.is_none() && self.active == id
    }

    /// Where the next widget will be placed.
    #[must_use]
    pub fn cursor(&self) -> Point {
        self.layout.cursor()
    }

    /// Space left in the innermost container.
    #[must_use]
    pub fn available(&self) -> Extent {
        Extent::new(self.layout.available_w(), self.layout.available_h())
    }

    /// The 8.8 scale applied to theme metrics.
    #[must_use]
    pub fn scale_value(&self) -> Scale {
        self.scale
    }

    /// Pointer history.
    #[must_use]
    pub fn input(&self) -> &InputCache {
        &self.input
    }

    /// The render target.
    #[must_use]
    pub fn painter(&self) -> &P {
        &self.painter
    }

    /// The render target, mutably (to flush a canvas, for instance).
    pub fn painter_mut(&mut self) -> &mut P {
        &mut self.painter
    }

    /// Consumes the context and hands back the render target.
    pub fn into_painter(self) -> P {
        self.painter
    }

    /// Scroll state of the panel `panel_id`, if it has a slot.
    #[must_use]
    pub fn scroll_entry(&self, panel_id: WidgetId) -> Option<ScrollEntry> {
        if panel_id.is_none() {
            return None;
        }
        self.scroll.iter().find(|e| e.id == panel_id).copied()
    }

    /// The tween pool.
    #[must_use]
    pub fn anims(&self) -> &AnimPool {
        &self.anims
    }

    /// The tween pool, mutably.
    pub fn anims_mut(&mut self) -> &mut AnimPool {
        &mut self.anims
    }

    // ------------------------------------------------------------------
    // Widget plumbing
    // ------------------------------------------------------------------

    /// Scales a theme-space length to display pixels.
    #[inline]
    pub(crate) fn s(&self, v: i16) -> i16 {
        self.scale.apply(v)
    }

    /// Text size in font cells after scaling, at least 1.
    pub(crate) fn font_size(&self) -> u8 {
        let scaled = self.s(i16::from(self.theme.font_size));
        scaled.clamp(1, i16::from(u8::MAX)) as u8
    }

    /// Tracks press and release for `id` without claiming hot.
    ///
    /// A press inside takes `active`. The release clears it and fires when
    /// it lands inside `r`.
    pub(crate) fn capture(&mut self, id: WidgetId, r: Rect) -> bool {
        if self.input.pressed_in(&r) {
            self.active = id;
        }
        if self.active == id && self.input.released() {
            self.active = WidgetId::NONE;
            return r.contains(self.input.pos());
        }
        false
    }

    /// [`Ui::capture`] plus hot tracking. Later widgets override earlier
    /// ones, so on overlap the last one drawn stays hot.
    pub(crate) fn interact(&mut self, id: WidgetId, r: Rect) -> Response {
        let clicked = self.capture(id, r);
        let hovered = self.input.down_in(&r);
        if hovered {
            self.hot = id;
        }
        Response { hovered, clicked }
    }
}
