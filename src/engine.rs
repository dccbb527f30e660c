/*
 * goalband-core: goal progress & banding engine.
 *
 * This source code is licensed under the Business Source License 1.1.
 * See LICENSE in the root directory for full details.
 */

//! The single evaluation entry point every bar and ring in the dashboard uses.
//!
//! [`evaluate`] runs the tier classifier, then the progress mapper, then the
//! percent-of-goal label, and bundles the three into an [`EvaluationResult`].
//! It is a pure function: same inputs, bit-identical output, no I/O.

use crate::band::{percent_of_goal, sanitize_value, ColorToken, Tier};
use crate::progress::map_to_display_percent;
use crate::thresholds::ThresholdSet;

// ─── GoalPercent ────────────────────────────────────────────────────────────

/// Literal percent of the base goal, rounded to one decimal place.
///
/// Unlike the display percent this is not clamped: 250 % of goal reads `250.0%`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct GoalPercent(f64);

impl GoalPercent {
    /// Round `raw` half away from zero to one decimal place.
    pub fn new(raw: f64) -> Self {
        Self(round_one_decimal(raw))
    }

    /// The rounded percentage as a number.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl core::fmt::Display for GoalPercent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:.1}%", self.0)
    }
}

// `f64::round` lives in std; this stays usable under no_std.
fn round_one_decimal(x: f64) -> f64 {
    if !x.is_finite() || x >= 1e15 || x <= -1e15 {
        return x;
    }
    let scaled = x * 10.0;
    let rounded = if scaled >= 0.0 {
        (scaled + 0.5) as i64
    } else {
        (scaled - 0.5) as i64
    };
    rounded as f64 / 10.0
}

// ─── EvaluationResult ───────────────────────────────────────────────────────

/// Everything a renderer needs for one progress bar.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct EvaluationResult {
    /// Band the value occupies.
    pub tier: Tier,
    /// Color bound to `tier`.
    pub color: ColorToken,
    /// Position on the non-linear bar, in `[0, 100]`.
    pub display_percent: f64,
    /// Literal percent of the base goal, one decimal.
    pub goal_percent: GoalPercent,
}

impl EvaluationResult {
    /// How much is still missing to reach the next goal above the current tier.
    ///
    /// `value` and `t` must be the inputs this result was evaluated from.
    /// Returns `None` once the ultra goal is met, or when there is no base goal.
    pub fn remaining_to_next(&self, value: f64, t: &ThresholdSet) -> Option<f64> {
        if !t.has_base() {
            return None;
        }
        let next = match self.tier {
            Tier::Below83 | Tier::BelowBase => t.base,
            Tier::AboveBase => t.super_goal,
            Tier::AboveSuper => t.ultra_goal,
            Tier::AboveUltra => return None,
        };
        Some(next - sanitize_value(value))
    }
}

/// Evaluate `value` against `thresholds`.
///
/// A NaN `value` is treated as zero. Every other degenerate input is handled by
/// the classifier and mapper guards, so this never panics.
pub fn evaluate(value: f64, thresholds: &ThresholdSet) -> EvaluationResult {
    let value = sanitize_value(value);
    let tier = Tier::classify(value, thresholds);
    let display_percent = map_to_display_percent(value, thresholds);
    let goal_percent = GoalPercent::new(percent_of_goal(value, thresholds));

    EvaluationResult {
        tier,
        color: tier.color(),
        display_percent,
        goal_percent,
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
