//! Fixed-capacity tween pool with integer easing.
//!
//! Widgets own no state between frames, so every animated value lives here,
//! keyed by a [`WidgetId`]. All math is 8.8 fixed point: progress and eased
//! output are 0..=256.

use glint_core::WidgetId;

/// Number of tween slots.
pub const ANIM_SLOTS: usize = 32;

/// Easing curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Constant rate.
    Linear,
    /// Quadratic, accelerating.
    InQuad,
    /// Quadratic, decelerating.
    OutQuad,
    /// Quadratic both ends.
    InOutQuad,
    /// Cubic, accelerating.
    InCubic,
    /// Cubic, decelerating. The default for widget tweens.
    #[default]
    OutCubic,
    /// Cubic both ends.
    InOutCubic,
    /// Overshoots past the end, then settles. Output peaks above 256.
    OutBack,
    /// Bounces against the end value.
    OutBounce,
}

impl Easing {
    /// Eased progress of `t` ms into a `d` ms tween, 0..=256.
    ///
    /// `d <= 0` counts as finished. [`Easing::OutBack`] may return up to 280.
    #[must_use]
    pub fn apply(self, t: i32, d: i32) -> i32 {
        if d <= 0 {
            return 256;
        }
        if t <= 0 {
            return 0;
        }
        if t >= d {
            return 256;
        }

        let f = ((i64::from(t) << 8) / i64::from(d)) as i32;

        match self {
            Self::Linear => f,
            Self::InQuad => (f * f) >> 8,
            Self::OutQuad => {
                let inv = 256 - f;
                256 - ((inv * inv) >> 8)
            }
            Self::InOutQuad => {
                if f < 128 {
                    let h = f * 2;
                    (h * h) >> 9
                } else {
                    let h = (256 - f) * 2;
                    256 - ((h * h) >> 9)
                }
            }
            Self::InCubic => (((f * f) >> 8) * f) >> 8,
            Self::OutCubic => {
                let inv = 256 - f;
                256 - ((((inv * inv) >> 8) * inv) >> 8)
            }
            Self::InOutCubic => {
                if f < 128 {
                    let h = f * 2;
                    (((h * h) >> 8) * h) >> 9
                } else {
                    let h = (256 - f) * 2;
                    256 - ((((h * h) >> 8) * h) >> 9)
                }
            }
            Self::OutBack => {
                const OVERSHOOT: i32 = 434;
                let inv = 256 - f;
                let sq = (inv * inv) >> 8;
                let base = 256 - sq;
                let extra = (sq * OVERSHOOT) >> 8;
                (base + ((f * extra) >> 8)).clamp(0, 280)
            }
            Self::OutBounce => {
                let (shift, lift) = match f {
                    0..=91 => (0, 0),
                    92..=183 => (138, 192),
                    184..=229 => (207, 240),
                    _ => (243, 252),
                };
                let t2 = f - shift;
                ((t2 * t2 * 756) >> 16) + lift
            }
        }
    }
}

/// One tween.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnimSlot {
    /// Owner. [`WidgetId::NONE`] marks a never-used slot.
    pub target: WidgetId,
    /// Start value.
    pub from: i32,
    /// End value.
    pub to: i32,
    /// Value as of the last tick.
    pub current: i32,
    /// Milliseconds since (re)start.
    pub elapsed: i32,
    /// Total milliseconds.
    pub duration: i32,
    /// Curve.
    pub curve: Easing,
    /// Still moving.
    pub active: bool,
}

impl AnimSlot {
    const fn remaining(&self) -> i32 {
        self.duration.saturating_sub(self.elapsed)
    }

    fn restart(&mut self, target: WidgetId, from: i32, to: i32, duration: i32, curve: Easing) {
        *self = Self {
            target,
            from,
            to,
            current: from,
            elapsed: 0,
            duration,
            curve,
            active: true,
        };
    }
}

/// Fixed pool of [`ANIM_SLOTS`] tweens, looked up by target id.
///
/// A slot keeps its target after finishing, so [`AnimPool::get`] keeps
/// returning the settled value until the slot is evicted.
#[derive(Debug, Clone)]
pub struct AnimPool {
    slots: [AnimSlot; ANIM_SLOTS],
}

impl Default for AnimPool {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimPool {
    /// Creates an empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: [AnimSlot::default(); ANIM_SLOTS],
        }
    }

    /// Frees every slot.
    pub fn clear(&mut self) {
        self.slots = [AnimSlot::default(); ANIM_SLOTS];
    }

    fn find(&self, target: WidgetId) -> Option<usize> {
        self.slots.iter().position(|s| s.target == target)
    }

    /// Advances every running tween by `dt_ms`. Non-positive deltas are ignored.
    pub fn tick(&mut self, dt_ms: i32) {
        if dt_ms <= 0 {
            return;
        }
        for s in self.slots.iter_mut().filter(|s| s.active) {
            s.elapsed = s.elapsed.saturating_add(dt_ms);
            if s.elapsed >= s.duration {
                s.current = s.to;
                s.active = false;
            } else {
                let f = i64::from(s.curve.apply(s.elapsed, s.duration));
                let delta = (i64::from(s.to) - i64::from(s.from)) * f >> 8;
                s.current = (i64::from(s.from) + delta).clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
            }
        }
    }

    /// Current value of `target`'s tween, or `fallback` if it has none.
    #[must_use]
    pub fn get(&self, target: WidgetId, fallback: i32) -> i32 {
        self.find(target).map_or(fallback, |i| self.slots[i].current)
    }

    /// True while `target` has a tween still moving.
    #[must_use]
    pub fn running(&self, target: WidgetId) -> bool {
        self.slots.iter().any(|s| s.target == target && s.active)
    }

    /// Number of slots still moving.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|s| s.active).count()
    }

    /// Starts (or retargets) a tween.
    ///
    /// An existing tween for `target` continues from its current value and
    /// `from` is ignored. Otherwise a never-used slot is claimed; with none
    /// left, the first finished slot is reused, or failing that the running
    /// slot closest to finishing (lowest index on ties).
    pub fn start(&mut self, target: WidgetId, from: i32, to: i32, duration_ms: i32, curve: Easing) {
        if target.is_none() {
            return;
        }

        if let Some(i) = self.find(target) {
            let s = &mut self.slots[i];
            let current = s.current;
            s.restart(target, current, to, duration_ms, curve);
            return;
        }

        let victim = self
            .slots
            .iter()
            .position(|s| !s.active && s.target.is_none())
            .unwrap_or_else(|| self.victim());

        let evicted = self.slots[victim].target;
        if !evicted.is_none() {
            tracing::trace!(slot = victim, evicted = evicted.raw(), "anim pool full, evicting");
        }
        self.slots[victim].restart(target, from, to, duration_ms, curve);
    }

    fn victim(&self) -> usize {
        let mut victim = 0;
        let mut best = i32::MAX;
        for (i, s) in self.slots.iter().enumerate() {
            if !s.active {
                return i;
            }
            if i == 0 || s.remaining() < best {
                best = s.remaining();
                victim = i;
            }
        }
        victim
    }

    /// Heads `target` toward `to`, starting a tween only when `to` changes.
    ///
    /// A target seen for the first time snaps straight to `to`.
    pub fn ensure(&mut self, target: WidgetId, to: i32, duration_ms: i32, curve: Easing) {
        match self.find(target) {
            Some(i) if self.slots[i].to == to => {}
            Some(i) => {
                let current = self.slots[i].current;
                self.start(target, current, to, duration_ms, curve);
            }
            None => self.start(target, to, to, 0, curve),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 9] = [
        Easing::Linear,
        Easing::InQuad,
        Easing::OutQuad,
        Easing::InOutQuad,
        Easing::InCubic,
        Easing::OutCubic,
        Easing::InOutCubic,
        Easing::OutBack,
        Easing::OutBounce,
    ];

    #[test]
    fn test_easing_endpoints() {
        for e in ALL {
            for d in [1, 7, 100, 5000] {
                assert_eq!(e.apply(0, d), 0, "{e:?} at t=0");
                assert_eq!(e.apply(d, d), 256, "{e:?} at t=d");
            }
            assert_eq!(e.apply(5, 0), 256, "{e:?} with d=0");
            assert_eq!(e.apply(5, -3), 256);
        }
    }

    #[test]
    fn test_easing_midpoints() {
        assert_eq!(Easing::Linear.apply(50, 100), 128);
        assert_eq!(Easing::InQuad.apply(50, 100), 64);
        assert_eq!(Easing::OutQuad.apply(50, 100), 192);
        assert_eq!(Easing::OutCubic.apply(50, 100), 224);
        assert_eq!(Easing::InOutQuad.apply(50, 100), 128);
    }

    #[test]
    fn test_out_back_overshoots() {
        let peak = (1..100).map(|t| Easing::OutBack.apply(t, 100)).max();
        assert!(peak.is_some_and(|p| p > 256 && p <= 280));
    }

    #[test]
    fn test_linear_tween() {
        let mut pool = AnimPool::new();
        let id = WidgetId(7);
        pool.start(id, 0, 256, 100, Easing::Linear);

        pool.tick(50);
        assert!((pool.get(id, -1) - 128).abs() <= 1);
        assert!(pool.running(id));

        pool.tick(50);
        assert_eq!(pool.get(id, -1), 256);
        assert!(!pool.running(id));
    }

    #[test]
    fn test_non_positive_tick_is_ignored() {
        let mut pool = AnimPool::new();
        pool.start(WidgetId(1), 0, 100, 100, Easing::Linear);
        pool.tick(0);
        pool.tick(-20);
        assert_eq!(pool.get(WidgetId(1), -1), 0);
    }

    #[test]
    fn test_retarget_continues_from_current() {
        let mut pool = AnimPool::new();
        let id = WidgetId(3);
        pool.start(id, 0, 200, 100, Easing::Linear);
        pool.tick(50);
        assert_eq!(pool.get(id, 0), 100);

        pool.start(id, 999, 0, 100, Easing::Linear);
        assert_eq!(pool.get(id, 0), 100);
        pool.tick(50);
        assert_eq!(pool.get(id, 0), 50);
    }

    #[test]
    fn test_eviction_picks_least_remaining() {
        let mut pool = AnimPool::new();
        for i in 1..=ANIM_SLOTS as u32 {
            // Target 5 finishes first.
            let duration = if i == 5 { 40 } else { 100 + i as i32 };
            pool.start(WidgetId(i), 0, 10, duration, Easing::Linear);
        }
        pool.tick(10);
        assert_eq!(pool.active_count(), ANIM_SLOTS);

        pool.start(WidgetId(100), 0, 10, 100, Easing::Linear);

        assert_eq!(pool.get(WidgetId(5), -1), -1);
        assert!(pool.running(WidgetId(100)));
        for i in (1..=ANIM_SLOTS as u32).filter(|&i| i != 5) {
            assert_ne!(pool.get(WidgetId(i), -1), -1, "target {i} survived");
        }
    }

    #[test]
    fn test_eviction_ties_take_lowest_index() {
        let mut pool = AnimPool::new();
        for i in 1..=ANIM_SLOTS as u32 {
            pool.start(WidgetId(i), 0, 10, 100, Easing::Linear);
        }
        pool.start(WidgetId(500), 0, 10, 100, Easing::Linear);
        assert_eq!(pool.get(WidgetId(1), -1), -1);
        assert_ne!(pool.get(WidgetId(2), -1), -1);
    }

    #[test]
    fn test_eviction_prefers_finished_slot() {
        let mut pool = AnimPool::new();
        for i in 1..=ANIM_SLOTS as u32 {
            let duration = if i == 9 { 5 } else { 1000 };
            pool.start(WidgetId(i), 0, 10, duration, Easing::Linear);
        }
        pool.tick(10);
        assert!(!pool.running(WidgetId(9)));

        pool.start(WidgetId(77), 0, 10, 100, Easing::Linear);
        assert_eq!(pool.get(WidgetId(9), -1), -1);
    }

    #[test]
    fn test_ensure_first_sight_snaps() {
        let mut pool = AnimPool::new();
        let id = WidgetId(11);
        pool.ensure(id, 256, 180, Easing::OutCubic);
        assert_eq!(pool.get(id, -1), 256);
    }

    #[test]
    fn test_ensure_retargets_only_on_change() {
        let mut pool = AnimPool::new();
        let id = WidgetId(12);
        pool.ensure(id, 0, 100, Easing::Linear);
        pool.tick(16);

        pool.ensure(id, 256, 100, Easing::Linear);
        assert!(pool.running(id));
        pool.tick(50);
        let mid = pool.get(id, -1);
        assert_eq!(mid, 128);

        // Same target again: no restart, progress continues.
        pool.ensure(id, 256, 100, Easing::Linear);
        pool.tick(25);
        assert_eq!(pool.get(id, -1), 192);
    }

    #[test]
    fn test_none_target_is_ignored() {
        let mut pool = AnimPool::new();
        pool.start(WidgetId::NONE, 0, 10, 10, Easing::Linear);
        assert_eq!(pool.active_count(), 0);
    }
}
