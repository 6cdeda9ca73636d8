//! Shape and text drawing library.
//!
//! Everything here is a free function over any [`Painter`]: rounded
//! rectangles, gradients, arcs, circle outlines and text placement. Curves
//! use integer midpoint stepping; there is no floating point and no trig.
//!
//! Intermediates are computed in `i32` and narrowed once, right before the
//! painter call, so extreme rects never wrap.

use glint_core::{saturate_i16, Rect, Rgb565};

use crate::font;
use crate::painter::Painter;

/// Alpha numerator of the innermost shadow layer (`40 / layer`).
const SHADOW_ALPHA: u8 = 40;

#[inline]
fn n(v: i32) -> i16 {
    saturate_i16(v)
}

/// Midpoint-circle stepper shared by every rounded shape.
///
/// Yields `(px, py)` pairs from `(0, r)` while `px <= py`.
struct Midpoint {
    f: i32,
    ddx: i32,
    ddy: i32,
    px: i32,
    py: i32,
}

impl Midpoint {
    fn new(r: i32) -> Self {
        Self {
            f: 1 - r,
            ddx: 1,
            ddy: -2 * r,
            px: 0,
            py: r,
        }
    }

    fn step(&mut self) {
        if self.f >= 0 {
            self.py -= 1;
            self.ddy += 2;
            self.f += self.ddy;
        }
        self.px += 1;
        self.ddx += 2;
        self.f += self.ddx;
    }
}

impl Iterator for Midpoint {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<(i32, i32)> {
        if self.px > self.py {
            return None;
        }
        let out = (self.px, self.py);
        self.step();
        Some(out)
    }
}

/// True when `radius` cannot be honored and the shape degrades to square
/// corners.
fn square_corners(r: &Rect, radius: i16) -> bool {
    let rad = i32::from(radius);
    rad <= 0 || i32::from(r.w()) < 2 * rad || i32::from(r.h()) < 2 * rad
}

/// Solid rectangle with rounded corners.
///
/// A radius of zero, or one larger than half of either side, draws a plain
/// rectangle.
pub fn rounded_rect_fill<P: Painter + ?Sized>(p: &mut P, r: Rect, radius: i16, color: Rgb565) {
    let (x, y) = (i32::from(r.x()), i32::from(r.y()));
    let (w, h) = (i32::from(r.w()), i32::from(r.h()));
    if square_corners(&r, radius) {
        p.fill_rect(r.x(), r.y(), n(w), n(h), color);
        return;
    }
    let rad = i32::from(radius);

    p.fill_rect(n(x + rad), r.y(), n(w - 2 * rad), n(h), color);
    p.fill_rect(r.x(), n(y + rad), radius, n(h - 2 * rad), color);
    p.fill_rect(n(r.right() - rad), n(y + rad), radius, n(h - 2 * rad), color);

    let cx_l = x + rad;
    let cx_r = r.right() - rad - 1;
    let cy_t = y + rad;
    let cy_b = r.bottom() - rad - 1;
    let span = cx_r - cx_l;

    for (px, py) in Midpoint::new(rad) {
        p.hline(n(cx_l - px), n(cy_t - py), n(span + 2 * px + 1), color);
        p.hline(n(cx_l - py), n(cy_t - px), n(span + 2 * py + 1), color);
        p.hline(n(cx_l - px), n(cy_b + py), n(span + 2 * px + 1), color);
        p.hline(n(cx_l - py), n(cy_b + px), n(span + 2 * py + 1), color);
    }
}

/// One-pixel outline of a rounded rectangle.
pub fn rounded_rect_outline<P: Painter + ?Sized>(p: &mut P, r: Rect, radius: i16, color: Rgb565) {
    let (x, y) = (i32::from(r.x()), i32::from(r.y()));
    let (w, h) = (i32::from(r.w()), i32::from(r.h()));
    if square_corners(&r, radius) {
        p.hline(r.x(), r.y(), n(w), color);
        p.hline(r.x(), n(r.bottom() - 1), n(w), color);
        p.vline(r.x(), r.y(), n(h), color);
        p.vline(n(r.right() - 1), r.y(), n(h), color);
        return;
    }
    let rad = i32::from(radius);

    p.hline(n(x + rad), r.y(), n(w - 2 * rad), color);
    p.hline(n(x + rad), n(r.bottom() - 1), n(w - 2 * rad), color);
    p.vline(r.x(), n(y + rad), n(h - 2 * rad), color);
    p.vline(n(r.right() - 1), n(y + rad), n(h - 2 * rad), color);

    let cx_l = x + rad;
    let cx_r = r.right() - rad - 1;
    let cy_t = y + rad;
    let cy_b = r.bottom() - rad - 1;

    for (px, py) in Midpoint::new(rad) {
        p.pixel(n(cx_l - px), n(cy_t - py), color);
        p.pixel(n(cx_l - py), n(cy_t - px), color);
        p.pixel(n(cx_r + px), n(cy_t - py), color);
        p.pixel(n(cx_r + py), n(cy_t - px), color);
        p.pixel(n(cx_l - px), n(cy_b + py), color);
        p.pixel(n(cx_l - py), n(cy_b + px), color);
        p.pixel(n(cx_r + px), n(cy_b + py), color);
        p.pixel(n(cx_r + py), n(cy_b + px), color);
    }
}

/// Per-channel linear ramp between two colors over `steps` positions.
#[derive(Clone, Copy)]
struct Ramp {
    a: (i32, i32, i32),
    b: (i32, i32, i32),
    span: i32,
}

impl Ramp {
    fn new(from: Rgb565, to: Rgb565, steps: i32) -> Self {
        let (ar, ag, ab) = from.channels();
        let (br, bg, bb) = to.channels();
        Self {
            a: (ar.into(), ag.into(), ab.into()),
            b: (br.into(), bg.into(), bb.into()),
            span: (steps - 1).max(1),
        }
    }

    fn at(&self, i: i32) -> Rgb565 {
        let lerp = |a: i32, b: i32| a + (b - a) * i / self.span;
        Rgb565::from_channels(
            lerp(self.a.0, self.b.0) as u16,
            lerp(self.a.1, self.b.1) as u16,
            lerp(self.a.2, self.b.2) as u16,
        )
    }
}

/// Top-to-bottom gradient, one span per row.
pub fn gradient_v<P: Painter + ?Sized>(p: &mut P, r: Rect, top: Rgb565, bottom: Rgb565) {
    let h = i32::from(r.h());
    if h == 0 {
        return;
    }
    let ramp = Ramp::new(top, bottom, h);
    let w = n(r.w().into());
    for row in 0..h {
        p.hline(r.x(), n(i32::from(r.y()) + row), w, ramp.at(row));
    }
}

/// Left-to-right gradient, one span per column.
pub fn gradient_h<P: Painter + ?Sized>(p: &mut P, r: Rect, left: Rgb565, right: Rgb565) {
    let w = i32::from(r.w());
    if w == 0 {
        return;
    }
    let ramp = Ramp::new(left, right, w);
    let h = n(r.h().into());
    for col in 0..w {
        p.vline(n(i32::from(r.x()) + col), r.y(), h, ramp.at(col));
    }
}

/// Rounded rectangle filled with a vertical gradient.
pub fn rounded_rect_gradient_v<P: Painter + ?Sized>(
    p: &mut P,
    r: Rect,
    radius: i16,
    top: Rgb565,
    bottom: Rgb565,
) {
    if r.is_empty() {
        return;
    }
    if square_corners(&r, radius) {
        gradient_v(p, r, top, bottom);
        return;
    }

    let h = i32::from(r.h());
    let y = i32::from(r.y());
    let rad = i32::from(radius);
    let ramp = Ramp::new(top, bottom, h);

    for row in rad..h - rad {
        p.hline(r.x(), n(y + row), n(r.w().into()), ramp.at(row));
    }

    let cx_l = i32::from(r.x()) + rad;
    let span = r.right() - rad - 1 - cx_l;

    for (px, py) in Midpoint::new(rad) {
        let rows = [
            (rad - py, px),
            (rad - px, py),
            (h - 1 - rad + py, px),
            (h - 1 - rad + px, py),
        ];
        for (row, half) in rows {
            p.hline(n(cx_l - half), n(y + row), n(span + 2 * half + 1), ramp.at(row));
        }
    }
}

/// Layered drop shadow behind `r`, blended toward `bg`.
///
/// Layer `i` (outermost first) is offset by `(ox + i, oy + i)`, grown by
/// `2i` and drawn at alpha `40 / i`.
pub fn shadow<P: Painter + ?Sized>(
    p: &mut P,
    r: Rect,
    radius: i16,
    bg: Rgb565,
    layers: u8,
    offset: (i16, i16),
) {
    for i in (1..=i32::from(layers)).rev() {
        let alpha = (i32::from(SHADOW_ALPHA) / i) as u8;
        let color = Rgb565::BLACK.blend(bg, alpha);
        let layer = Rect::new(
            n(i32::from(r.x()) + i32::from(offset.0) + i),
            n(i32::from(r.y()) + i32::from(offset.1) + i),
            glint_core::saturate_u16(i32::from(r.w()) + 2 * i),
            glint_core::saturate_u16(i32::from(r.h()) + 2 * i),
        );
        rounded_rect_fill(p, layer, n(i32::from(radius) + i), color);
    }
}

/// Eight-way symmetric circle outline.
pub fn circle_outline<P: Painter + ?Sized>(p: &mut P, cx: i16, cy: i16, r: i16, color: Rgb565) {
    let (x0, y0, rad) = (i32::from(cx), i32::from(cy), i32::from(r));
    p.pixel(cx, n(y0 + rad), color);
    p.pixel(cx, n(y0 - rad), color);
    p.pixel(n(x0 + rad), cy, color);
    p.pixel(n(x0 - rad), cy, color);

    let mut mp = Midpoint::new(rad);
    while mp.px < mp.py {
        mp.step();
        let (px, py) = (mp.px, mp.py);
        for (dx, dy) in [(px, py), (-px, py), (px, -py), (-px, -py)] {
            p.pixel(n(x0 + dx), n(y0 + dy), color);
        }
        for (dx, dy) in [(py, px), (-py, px), (py, -px), (-py, -px)] {
            p.pixel(n(x0 + dx), n(y0 + dy), color);
        }
    }
}

/// Approximate angle of `(x, y)` around the origin in degrees, 0..360,
/// counter-clockwise on screen from the positive x axis.
///
/// Each octant is linearized (`45 * minor / major`); no trig.
#[must_use]
pub fn approx_angle(x: i32, y: i32) -> i32 {
    if x == 0 && y == 0 {
        return 0;
    }
    let (ax, ay) = (x.abs(), y.abs());
    let angle = if ax > ay { ay * 45 / ax } else { 90 - ax * 45 / ay };
    match (x < 0, y > 0) {
        (true, false) => 180 - angle,
        (true, true) => 180 + angle,
        (false, true) => 360 - angle,
        (false, false) => angle,
    }
}

/// Fills the ring `inner_r..=outer_r` between `start_deg` and `end_deg`.
///
/// The span wraps through 0 when `start_deg > end_deg`.
#[allow(clippy::too_many_arguments)]
pub fn arc_fill<P: Painter + ?Sized>(
    p: &mut P,
    cx: i16,
    cy: i16,
    outer_r: i16,
    inner_r: i16,
    start_deg: i16,
    end_deg: i16,
    color: Rgb565,
) {
    let or = i32::from(outer_r);
    let or2 = or * or;
    let ir2 = i32::from(inner_r) * i32::from(inner_r);
    let (start, end) = (i32::from(start_deg), i32::from(end_deg));

    for y in -or..=or {
        for x in -or..=or {
            let d2 = x * x + y * y;
            if d2 > or2 || d2 < ir2 {
                continue;
            }
            let deg = approx_angle(x, y);
            let inside = if start <= end {
                deg >= start && deg <= end
            } else {
                deg >= start || deg <= end
            };
            if inside {
                p.pixel(n(i32::from(cx) + x), n(i32::from(cy) + y), color);
            }
        }
    }
}

/// Width of `text` up to its first newline, in pixels.
#[must_use]
pub fn text_width(text: &str, size: u8) -> i16 {
    let chars = text.chars().take_while(|&c| c != '\n').count();
    n((chars as i32).saturating_mul(i32::from(font::ADVANCE_X) * i32::from(size)))
}

/// Height of one text line, in pixels.
#[must_use]
pub fn text_height(size: u8) -> i16 {
    font::ADVANCE_Y * i16::from(size)
}

fn emit_text<P: Painter + ?Sized>(p: &mut P, x: i32, y: i32, text: &str, color: Rgb565, size: u8) {
    p.set_text_size(size);
    p.set_text_color(color);
    p.set_cursor(n(x), n(y));
    p.print(text);
}

/// Text centered in `r` on both axes.
pub fn text_centered<P: Painter + ?Sized>(p: &mut P, r: Rect, text: &str, color: Rgb565, size: u8) {
    let tw = i32::from(text_width(text, size));
    let th = i32::from(text_height(size));
    let tx = i32::from(r.x()) + (i32::from(r.w()) - tw) / 2;
    let ty = i32::from(r.y()) + (i32::from(r.h()) - th) / 2;
    emit_text(p, tx, ty, text, color, size);
}

/// Text `pad_left` pixels in from the left of `r`, centered vertically.
pub fn text_left<P: Painter + ?Sized>(
    p: &mut P,
    r: Rect,
    text: &str,
    color: Rgb565,
    size: u8,
    pad_left: i16,
) {
    let th = i32::from(text_height(size));
    let tx = i32::from(r.x()) + i32::from(pad_left);
    let ty = i32::from(r.y()) + (i32::from(r.h()) - th) / 2;
    emit_text(p, tx, ty, text, color, size);
}
