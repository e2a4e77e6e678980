//! Easing Curves
//!
//! Maps linear progress (0.0 to 1.0) to eased progress. The "ease" family
//! follows the CSS/mobile convention: a cubic bezier `(0.42, 0, 1, 1)` as
//! the base ease-in curve, mirrored for ease-out and ease-in-out.

use serde::{Deserialize, Serialize};

/// Cubic bezier easing curve with control points (x1, y1) and (x2, y2)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CubicBezier {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl CubicBezier {
    /// Base curve of the "ease" family
    pub const EASE: Self = Self::new(0.42, 0.0, 1.0, 1.0);

    /// Strong deceleration used for entrance fades
    pub const ENTRANCE: Self = Self::new(0.2, 0.8, 0.2, 1.0);

    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    fn sample(a1: f32, a2: f32, t: f32) -> f32 {
        // B(t) for P0 = 0, P3 = 1
        let u = 1.0 - t;
        3.0 * u * u * t * a1 + 3.0 * u * t * t * a2 + t * t * t
    }

    fn slope(a1: f32, a2: f32, t: f32) -> f32 {
        let u = 1.0 - t;
        3.0 * u * u * a1 + 6.0 * u * t * (a2 - a1) + 3.0 * t * t * (1.0 - a2)
    }

    /// Solve for the curve parameter whose x equals `x`
    fn solve_t(&self, x: f32) -> f32 {
        let mut t = x;
        for _ in 0..8 {
            let err = Self::sample(self.x1, self.x2, t) - x;
            if err.abs() < 1e-5 {
                return t;
            }
            let d = Self::slope(self.x1, self.x2, t);
            if d.abs() < 1e-6 {
                break;
            }
            t -= err / d;
        }

        // Newton failed to converge (flat slope); fall back to bisection
        let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
        t = x;
        for _ in 0..32 {
            let value = Self::sample(self.x1, self.x2, t);
            if (value - x).abs() < 1e-5 {
                break;
            }
            if value < x {
                lo = t;
            } else {
                hi = t;
            }
            t = (lo + hi) / 2.0;
        }
        t
    }

    /// Eased value at linear progress `x`
    pub fn apply(&self, x: f32) -> f32 {
        let x = x.clamp(0.0, 1.0);
        if x == 0.0 || x == 1.0 {
            return x;
        }
        Self::sample(self.y1, self.y2, self.solve_t(x))
    }
}

/// Easing functions for smooth animation
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, Default)]
pub enum EasingFunction {
    /// No easing (constant speed)
    #[default]
    Linear,

    /// Slow start, fast end
    EaseIn,

    /// Fast start, slow end
    EaseOut,

    /// Slow start and end
    EaseInOut,

    /// Cubic ease out (scroll deceleration)
    EaseOutCubic,

    /// Arbitrary cubic bezier
    Bezier(CubicBezier),
}

impl EasingFunction {
    /// Apply the easing function to a progress value (0.0 to 1.0)
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Linear => t,
            Self::EaseIn => CubicBezier::EASE.apply(t),
            Self::EaseOut => 1.0 - CubicBezier::EASE.apply(1.0 - t),
            Self::EaseInOut => {
                if t < 0.5 {
                    CubicBezier::EASE.apply(t * 2.0) / 2.0
                } else {
                    1.0 - CubicBezier::EASE.apply((1.0 - t) * 2.0) / 2.0
                }
            }
            Self::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Self::Bezier(curve) => curve.apply(t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [EasingFunction; 6] = [
        EasingFunction::Linear,
        EasingFunction::EaseIn,
        EasingFunction::EaseOut,
        EasingFunction::EaseInOut,
        EasingFunction::EaseOutCubic,
        EasingFunction::Bezier(CubicBezier::ENTRANCE),
    ];

    #[test]
    fn test_easing_linear() {
        assert!((EasingFunction::Linear.apply(0.0)).abs() < f32::EPSILON);
        assert!((EasingFunction::Linear.apply(0.5) - 0.5).abs() < f32::EPSILON);
        assert!((EasingFunction::Linear.apply(1.0) - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_endpoints_are_fixed() {
        for easing in ALL {
            assert!(easing.apply(0.0).abs() < 1e-4, "{easing:?} at 0");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-4, "{easing:?} at 1");
        }
    }

    #[test]
    fn test_monotonic() {
        for easing in ALL {
            let mut last = 0.0;
            for step in 1..=50 {
                let v = easing.apply(step as f32 / 50.0);
                assert!(v + 1e-4 >= last, "{easing:?} decreased at step {step}");
                last = v;
            }
        }
    }

    #[test]
    fn test_ease_in_out_symmetric() {
        let a = EasingFunction::EaseInOut.apply(0.25);
        let b = EasingFunction::EaseInOut.apply(0.75);
        assert!((a + b - 1.0).abs() < 1e-3);
        assert!((EasingFunction::EaseInOut.apply(0.5) - 0.5).abs() < 1e-3);
    }

    #[test]
    fn test_entrance_curve_front_loaded() {
        // Most of the motion happens early
        assert!(EasingFunction::Bezier(CubicBezier::ENTRANCE).apply(0.3) > 0.7);
    }

    #[test]
    fn test_clamps_out_of_range() {
        assert_eq!(EasingFunction::EaseOut.apply(-1.0), 0.0);
        assert_eq!(EasingFunction::EaseOut.apply(2.0), 1.0);
    }
}
