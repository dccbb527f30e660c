/*
 * goalband-core: goal progress & banding engine.
 *
 * This source code is licensed under the Business Source License 1.1.
 * See LICENSE in the root directory for full details.
 */

//! Non-linear progress bar position.
//!
//! Each goal owns a fixed share of the bar regardless of how far apart the
//! goals are in absolute terms:
//!
//! ```text
//!  0                         75        85             100
//!  ├─────────── base ────────┼─ super ─┼──── ultra ────┤
//!  value/base × 75            +10        +15
//! ```
//!
//! | Segment | Value range | Display range |
//! |---|---|---|
//! | 1 | `[0, base]` | `[0, 75]` |
//! | 2 | `(base, super]` | `(75, 85]` |
//! | 3 | `(super, ultra]` | `(85, 100]` |
//! | - | `> ultra` | `100` |
//!
//! # Invariants
//!
//! - Output is always in `[0, 100]`.
//! - For ascending goals the output is monotonically non-decreasing in value.
//! - `base`, `super` and `ultra` land exactly on 75, 85 and 100.
//! - An empty segment (zero-width gap between two goals) saturates to its upper
//!   display bound instead of dividing by zero.

use crate::thresholds::ThresholdSet;

/// Display position of the base goal.
pub const BASE_MARK: f64 = 75.0;
/// Display position of the super goal.
pub const SUPER_MARK: f64 = 85.0;
/// Display position of the ultra goal (end of the bar).
pub const ULTRA_MARK: f64 = 100.0;

/// Map `value` to its position on the progress bar, in `[0, 100]`.
pub fn map_to_display_percent(value: f64, t: &ThresholdSet) -> f64 {
    if t.base <= 0.0 || value.is_nan() || value <= 0.0 {
        return 0.0;
    }

    let pos = if value <= t.base {
        (value / t.base) * BASE_MARK
    } else if value <= t.super_goal {
        // value in (base, super] implies super > base
        BASE_MARK + ((value - t.base) / (t.super_goal - t.base)) * (SUPER_MARK - BASE_MARK)
    } else if value <= t.ultra_goal {
        // value in (super, ultra] implies ultra > super
        SUPER_MARK
            + ((value - t.super_goal) / (t.ultra_goal - t.super_goal)) * (ULTRA_MARK - SUPER_MARK)
    } else {
        ULTRA_MARK
    };

    pos.clamp(0.0, ULTRA_MARK)
}

/// Where the three goal ticks sit on the bar.
///
/// The positions are fixed by the segment layout, so every renderer draws the
/// markers at the same place the mapper puts a value equal to that goal.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BarMarkers {
    /// Position of the base goal tick.
    pub base: f64,
    /// Position of the super goal tick.
    pub super_goal: f64,
    /// Position of the ultra goal tick.
    pub ultra_goal: f64,
}

impl BarMarkers {
    /// The standard 75 / 85 / 100 layout.
    pub const STANDARD: BarMarkers = BarMarkers {
        base: BASE_MARK,
        super_goal: SUPER_MARK,
        ultra_goal: ULTRA_MARK,
    };
}

impl Default for BarMarkers {
    fn default() -> Self {
        Self::STANDARD
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn goals() -> ThresholdSet {
        ThresholdSet::new(10.0, 15.0, 20.0)
    }

    #[test]
    fn test_scenarios() {
        let t = goals();
        let cases: &[(f64, f64)] = &[
            (8.0, 60.0),
            (9.0, 67.5),
            (12.0, 79.0),
            (18.0, 94.0),
            (25.0, 100.0),
        ];
        for &(value, expected) in cases {
            let got = map_to_display_percent(value, &t);
            assert!((got - expected).abs() < EPS, "value={} got={} expected={}", value, got, expected);
        }
    }

    #[test]
    fn test_goals_land_exactly_on_marks() {
        let t = goals();
        assert_eq!(map_to_display_percent(t.base, &t), BASE_MARK);
        assert_eq!(map_to_display_percent(t.super_goal, &t), SUPER_MARK);
        assert_eq!(map_to_display_percent(t.ultra_goal, &t), ULTRA_MARK);
    }

    #[test]
    fn test_non_positive_values_are_zero() {
        let t = goals();
        assert_eq!(map_to_display_percent(0.0, &t), 0.0);
        assert_eq!(map_to_display_percent(-4.0, &t), 0.0);
        assert_eq!(map_to_display_percent(f64::NAN, &t), 0.0);
    }

    #[test]
    fn test_zero_base_is_zero() {
        let t = ThresholdSet::new(0.0, 15.0, 20.0);
        for value in [0.0, 5.0, 18.0, 500.0] {
            assert_eq!(map_to_display_percent(value, &t), 0.0, "value={}", value);
        }
    }

    #[test]
    fn test_empty_super_segment_saturates() {
        // super == base: just past base skips segment 2 entirely
        let t = ThresholdSet::new(10.0, 10.0, 20.0);
        assert_eq!(map_to_display_percent(10.0, &t), BASE_MARK);
        let just_above = map_to_display_percent(10.5, &t);
        assert!(just_above > SUPER_MARK && just_above < ULTRA_MARK, "got {}", just_above);
    }

    #[test]
    fn test_empty_ultra_segment_saturates() {
        let t = ThresholdSet::new(10.0, 15.0, 15.0);
        assert_eq!(map_to_display_percent(15.0, &t), SUPER_MARK);
        assert_eq!(map_to_display_percent(15.01, &t), ULTRA_MARK);
    }

    #[test]
    fn test_all_goals_equal() {
        let t = ThresholdSet::new(10.0, 10.0, 10.0);
        assert_eq!(map_to_display_percent(10.0, &t), BASE_MARK);
        assert_eq!(map_to_display_percent(11.0, &t), ULTRA_MARK);
    }

    #[test]
    fn test_monotone_and_bounded_sweep() {
        let sets = [
            ThresholdSet::new(10.0, 15.0, 20.0),
            ThresholdSet::new(1.0, 100.0, 101.0),
            ThresholdSet::new(50_000.0, 60_000.0, 200_000.0),
            ThresholdSet::new(3.0, 3.0, 9.0),
        ];
        for t in &sets {
            let steps = 2_000;
            let mut prev = -1.0;
            for i in 0..=steps {
                let value = 2.0 * t.ultra_goal * (i as f64) / (steps as f64);
                let d = map_to_display_percent(value, t);
                assert!((0.0..=100.0).contains(&d), "out of range: {} at {}", d, value);
                assert!(d >= prev, "not monotone at value={} ({} < {})", value, d, prev);
                prev = d;
            }
        }
    }

    #[test]
    fn test_out_of_order_goals_stay_bounded() {
        let sets = [
            ThresholdSet::new(10.0, 5.0, 20.0),
            ThresholdSet::new(10.0, 20.0, 15.0),
            ThresholdSet::new(30.0, 20.0, 10.0),
        ];
        for t in &sets {
            for i in 0..=100 {
                let d = map_to_display_percent(i as f64, t);
                assert!((0.0..=100.0).contains(&d), "out of range: {} for {:?}", d, t);
            }
        }
    }

    #[test]
    fn test_standard_markers() {
        let m = BarMarkers::default();
        assert_eq!(m, BarMarkers::STANDARD);
        assert_eq!(m.base, 75.0);
        assert_eq!(m.super_goal, 85.0);
        assert_eq!(m.ultra_goal, 100.0);
    }
}
