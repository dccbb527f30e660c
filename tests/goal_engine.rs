//! Integration tests for the evaluation contract.
//!
//! Exercises `evaluate` through the public API only: scenario table, segment
//! boundaries, sweeps for monotonicity and range, and the degenerate base.

use goalband_core::{evaluate, BarMarkers, ColorToken, ThresholdSet, Tier};

const EPS: f64 = 1e-9;

// ─── helpers ─────────────────────────────────────────────────────────────────

fn reference_goals() -> ThresholdSet {
    ThresholdSet::new(10.0, 15.0, 20.0)
}

/// A spread of ascending goal sets, from tight to very uneven gaps.
fn ascending_sets() -> Vec<ThresholdSet> {
    vec![
        ThresholdSet::new(10.0, 15.0, 20.0),
        ThresholdSet::new(1.0, 1.5, 2.0),
        ThresholdSet::new(120.0, 121.0, 500.0),
        ThresholdSet::new(150_000.0, 180_000.0, 200_000.0),
        ThresholdSet::new(7.0, 7.0, 7.0),
        ThresholdSet::new(5.0, 5.0, 12.0),
        ThresholdSet::new(5.0, 9.0, 9.0),
    ]
}

// ─── scenarios ───────────────────────────────────────────────────────────────

#[test]
fn test_reference_scenarios() {
    let t = reference_goals();
    let cases: &[(f64, Tier, ColorToken, f64)] = &[
        (8.0, Tier::Below83, ColorToken::Orange, 60.0),
        (9.0, Tier::BelowBase, ColorToken::Amber, 67.5),
        (12.0, Tier::AboveBase, ColorToken::Green, 79.0),
        (18.0, Tier::AboveSuper, ColorToken::Purple, 94.0),
        (25.0, Tier::AboveUltra, ColorToken::Lime, 100.0),
    ];

    for &(value, tier, color, display) in cases {
        let r = evaluate(value, &t);
        assert_eq!(r.tier, tier, "value={}", value);
        assert_eq!(r.color, color, "value={}", value);
        assert!(
            (r.display_percent - display).abs() < EPS,
            "value={}: display {} expected {}",
            value,
            r.display_percent,
            display
        );
    }
}

#[test]
fn test_value_equal_to_base_meets_goal() {
    for t in ascending_sets().iter().filter(|t| t.super_goal > t.base) {
        let r = evaluate(t.base, t);
        assert_eq!(r.goal_percent.value(), 100.0, "{:?}", t);
        assert_eq!(r.tier, Tier::AboveBase, "{:?}", t);
    }
}

// ─── segment boundaries ──────────────────────────────────────────────────────

#[test]
fn test_goals_land_on_markers() {
    let m = BarMarkers::STANDARD;
    for t in ascending_sets()
        .iter()
        .filter(|t| t.base < t.super_goal && t.super_goal < t.ultra_goal)
    {
        assert_eq!(evaluate(t.base, t).display_percent, m.base, "{:?}", t);
        assert_eq!(evaluate(t.super_goal, t).display_percent, m.super_goal, "{:?}", t);
        assert_eq!(evaluate(t.ultra_goal, t).display_percent, m.ultra_goal, "{:?}", t);
    }
}

// ─── sweeps ──────────────────────────────────────────────────────────────────

#[test]
fn test_sweep_monotone_and_in_range() {
    for t in ascending_sets() {
        let steps = 5_000;
        let mut prev_display = f64::NEG_INFINITY;
        let mut prev_tier = Tier::Below83;
        for i in 0..=steps {
            let value = 2.0 * t.ultra_goal * i as f64 / steps as f64;
            let r = evaluate(value, &t);

            assert!(
                (0.0..=100.0).contains(&r.display_percent),
                "{:?} value={} display={}",
                t,
                value,
                r.display_percent
            );
            assert!(r.display_percent >= prev_display, "{:?} not monotone at {}", t, value);
            assert!(r.tier >= prev_tier, "{:?} tier went down at {}", t, value);
            assert_eq!(r.color, r.tier.color());

            prev_display = r.display_percent;
            prev_tier = r.tier;
        }
    }
}

#[test]
fn test_non_positive_values() {
    for t in ascending_sets() {
        for value in [0.0, -0.01, -5.0, -1e12] {
            let r = evaluate(value, &t);
            assert_eq!(r.display_percent, 0.0);
            assert_eq!(r.tier, Tier::Below83);
        }
    }
}

#[test]
fn test_idempotent_bitwise() {
    let t = ThresholdSet::new(333.0, 777.0, 1_001.0);
    for i in 0..500 {
        let value = i as f64 * 2.71;
        let a = evaluate(value, &t);
        let b = evaluate(value, &t);
        assert_eq!(a.tier, b.tier);
        assert_eq!(a.display_percent.to_bits(), b.display_percent.to_bits());
        assert_eq!(a.goal_percent.value().to_bits(), b.goal_percent.value().to_bits());
    }
}

// ─── degenerate input ────────────────────────────────────────────────────────

#[test]
fn test_zero_base_regardless_of_value() {
    let t = ThresholdSet::new(0.0, 15.0, 20.0);
    for value in [0.0, 1.0, 15.0, 20.0, 1e9] {
        let r = evaluate(value, &t);
        assert_eq!(r.display_percent, 0.0, "value={}", value);
        assert_eq!(r.tier, Tier::Below83, "value={}", value);
        assert_eq!(r.goal_percent.value(), 0.0, "value={}", value);
    }
}

#[test]
fn test_garbage_goal_input_renders_something() {
    let t = ThresholdSet::from_text("", "abc", "-5");
    assert_eq!(t, ThresholdSet::default());
    let r = evaluate(42.0, &t);
    assert_eq!(r.tier, Tier::Below83);
    assert_eq!(r.display_percent, 0.0);
}

#[test]
fn test_out_of_order_goals_are_flagged_not_fixed() {
    let t = ThresholdSet::new(20.0, 15.0, 10.0);
    assert!(t.check_order().is_err());
    // still evaluates and stays on the bar
    let r = evaluate(18.0, &t);
    assert_eq!(r.tier, Tier::BelowBase);
    assert!((0.0..=100.0).contains(&r.display_percent));
    assert_eq!(evaluate(30.0, &t).display_percent, 100.0);
}
