// SPDX-License-Identifier: MPL-2.0
//! Enter/exit visual states for toast cards.
//!
//! A card entering grows from a shrunk, transparent state to full size; a card
//! leaving does the reverse while drifting up and collapsing its height. The
//! store never waits for any of this: removals are final the moment they
//! happen, and the leaving card is drawn from a snapshot.

use crate::ui::design_tokens::motion;
use std::time::{Duration, Instant};

/// Cubic Bézier timing curve from `(0, 0)` to `(1, 1)`, CSS style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Easing {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

impl Easing {
    pub const LINEAR: Easing = Easing::cubic_bezier(0.0, 0.0, 1.0, 1.0);

    /// The toast curve, overshooting slightly before settling.
    pub const STANDARD: Easing = Easing::cubic_bezier(
        motion::EASING.0,
        motion::EASING.1,
        motion::EASING.2,
        motion::EASING.3,
    );

    /// `x1` and `x2` must lie in `[0, 1]` for the curve to be a function of time.
    #[must_use]
    pub const fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Maps linear progress `t` in `[0, 1]` to eased progress.
    #[must_use]
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        if t == 0.0 || t == 1.0 {
            return t;
        }
        let s = self.solve_x(t);
        bezier(s, self.y1, self.y2)
    }

    /// Finds the curve parameter whose x coordinate is `x`.
    fn solve_x(&self, x: f32) -> f32 {
        // Newton-Raphson, then bisection if the slope is too flat.
        let mut s = x;
        for _ in 0..8 {
            let error = bezier(s, self.x1, self.x2) - x;
            if error.abs() < 1e-6 {
                return s;
            }
            let slope = bezier_slope(s, self.x1, self.x2);
            if slope.abs() < 1e-6 {
                break;
            }
            s -= error / slope;
        }

        let (mut low, mut high) = (0.0_f32, 1.0_f32);
        s = x;
        for _ in 0..32 {
            let value = bezier(s, self.x1, self.x2);
            if (value - x).abs() < 1e-6 {
                break;
            }
            if value < x {
                low = s;
            } else {
                high = s;
            }
            s = (low + high) / 2.0;
        }
        s
    }
}

impl Default for Easing {
    fn default() -> Self {
        Self::STANDARD
    }
}

fn bezier(s: f32, p1: f32, p2: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

fn bezier_slope(s: f32, p1: f32, p2: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

/// Which way a card is animating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Entering,
    Leaving,
}

/// How a card should be drawn at a given instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Visual {
    pub scale: f32,
    pub opacity: f32,
    /// Fraction of the card's natural height still occupied.
    pub height: f32,
    pub offset_y: f32,
}

impl Visual {
    pub const SETTLED: Visual = Visual {
        scale: 1.0,
        opacity: 1.0,
        height: 1.0,
        offset_y: 0.0,
    };

    pub const HIDDEN: Visual = Visual {
        scale: motion::ENTER_SCALE,
        opacity: 0.0,
        height: 1.0,
        offset_y: 0.0,
    };

    pub const GONE: Visual = Visual {
        scale: motion::ENTER_SCALE,
        opacity: 0.0,
        height: 0.0,
        offset_y: motion::EXIT_OFFSET_Y,
    };

    fn lerp(from: Visual, to: Visual, t: f32) -> Visual {
        let mix = |a: f32, b: f32| a + (b - a) * t;
        Visual {
            scale: mix(from.scale, to.scale).max(0.0),
            opacity: mix(from.opacity, to.opacity).clamp(0.0, 1.0),
            height: mix(from.height, to.height).max(0.0),
            offset_y: mix(from.offset_y, to.offset_y),
        }
    }
}

/// A running enter or exit animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    phase: Phase,
    started: Instant,
    duration: Duration,
    easing: Easing,
}

impl Transition {
    #[must_use]
    pub fn enter(now: Instant, duration: Duration, easing: Easing) -> Self {
        Self {
            phase: Phase::Entering,
            started: now,
            duration,
            easing,
        }
    }

    #[must_use]
    pub fn leave(now: Instant, duration: Duration, easing: Easing) -> Self {
        Self {
            phase: Phase::Leaving,
            started: now,
            duration,
            easing,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Linear progress in `[0, 1]`.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    #[must_use]
    pub fn visual(&self, now: Instant) -> Visual {
        let t = self.easing.apply(self.progress(now));
        match self.phase {
            Phase::Entering => Visual::lerp(Visual::HIDDEN, Visual::SETTLED, t),
            Phase::Leaving => Visual::lerp(Visual::SETTLED, Visual::GONE, t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const DURATION: Duration = Duration::from_millis(500);

    #[test]
    fn easing_fixes_endpoints() {
        assert_abs_diff_eq!(Easing::STANDARD.apply(0.0), 0.0);
        assert_abs_diff_eq!(Easing::STANDARD.apply(1.0), 1.0);
    }

    #[test]
    fn linear_easing_is_identity() {
        for step in 0..=10 {
            let t = step as f32 / 10.0;
            assert_abs_diff_eq!(Easing::LINEAR.apply(t), t, epsilon = 1e-4);
        }
    }

    #[test]
    fn standard_easing_overshoots() {
        let peak = (1..100)
            .map(|step| Easing::STANDARD.apply(step as f32 / 100.0))
            .fold(f32::MIN, f32::max);
        assert!(peak > 1.0, "expected overshoot, peak was {peak}");
    }

    #[test]
    fn enter_starts_hidden_and_ends_settled() {
        let start = Instant::now();
        let transition = Transition::enter(start, DURATION, Easing::STANDARD);

        assert_eq!(transition.visual(start), Visual::HIDDEN);
        assert_eq!(transition.visual(start + DURATION), Visual::SETTLED);
        assert!(transition.is_finished(start + DURATION));
        assert!(!transition.is_finished(start + DURATION / 2));
    }

    #[test]
    fn leave_collapses_height() {
        let start = Instant::now();
        let transition = Transition::leave(start, DURATION, Easing::STANDARD);

        assert_eq!(transition.visual(start), Visual::SETTLED);
        let end = transition.visual(start + DURATION);
        assert_abs_diff_eq!(end.height, 0.0);
        assert_abs_diff_eq!(end.opacity, 0.0);
        assert_abs_diff_eq!(end.offset_y, motion::EXIT_OFFSET_Y);
    }

    #[test]
    fn opacity_stays_in_range_during_overshoot() {
        let start = Instant::now();
        let transition = Transition::enter(start, DURATION, Easing::STANDARD);
        for step in 0..=50 {
            let visual = transition.visual(start + DURATION * step / 50);
            assert!((0.0..=1.0).contains(&visual.opacity));
        }
    }

    #[test]
    fn zero_duration_finishes_immediately() {
        let start = Instant::now();
        let transition = Transition::leave(start, Duration::ZERO, Easing::LINEAR);
        assert!(transition.is_finished(start));
    }
}
