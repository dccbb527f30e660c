/*
 * goalband-core: goal progress & banding engine.
 *
 * This source code is licensed under the Business Source License 1.1.
 * See LICENSE in the root directory for full details.
 */

//! Tier classification: which color band a value falls into.
//!
//! ```text
//!   percent of base   │ value vs. higher goals │ Tier        │ Color
//! ────────────────────┼────────────────────────┼─────────────┼────────
//!   < 83 %            │                        │ Below83     │ orange
//!   83 % ..< 100 %    │                        │ BelowBase   │ amber
//!   ≥ 100 %           │ value < super          │ AboveBase   │ green
//!   ≥ 100 %           │ super ≤ value < ultra  │ AboveSuper  │ purple
//!   ≥ 100 %           │ value ≥ ultra          │ AboveUltra  │ lime
//! ```
//!
//! Rules are checked top to bottom and the first match wins. Both upper
//! boundaries are strict (`<`), so a value exactly on a goal belongs to the
//! tier above it.
//!
//! # Invariants
//!
//! - `base == 0` forces [`Tier::Below83`] regardless of the value.
//! - A NaN value is read as `0.0`.
//! - Goals out of ascending order are not corrected; the inequalities decide.
//! - Color is a function of tier only ([`Tier::color`]).

use crate::thresholds::ThresholdSet;

/// Percent-of-base below which a value is "still far" from the goal.
pub const NEAR_GOAL_PERCENT: f64 = 83.0;

/// Percent-of-base at which the base goal is met.
pub const BASE_PERCENT: f64 = 100.0;

/// `value / base * 100`, or `0.0` when `base` is not positive.
pub fn percent_of_goal(value: f64, t: &ThresholdSet) -> f64 {
    if t.base > 0.0 {
        (value / t.base) * 100.0
    } else {
        0.0
    }
}

/// Read a NaN value as `0.0`; every other value passes through.
pub(crate) fn sanitize_value(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value
    }
}

// ─── ColorToken ─────────────────────────────────────────────────────────────

/// Symbolic color for a [`Tier`]. Renderers map these to their own palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ColorToken {
    /// Still far from the base goal.
    Orange,
    /// Close to the base goal.
    Amber,
    /// Base goal met.
    Green,
    /// Super goal met.
    Purple,
    /// Ultra goal met.
    Lime,
}

impl ColorToken {
    /// The token as a lowercase string (`"orange"`, `"amber"`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorToken::Orange => "orange",
            ColorToken::Amber => "amber",
            ColorToken::Green => "green",
            ColorToken::Purple => "purple",
            ColorToken::Lime => "lime",
        }
    }
}

impl core::fmt::Display for ColorToken {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Tier ───────────────────────────────────────────────────────────────────

/// The band a value occupies relative to its goals.
///
/// Variants are declared in ascending order, so `Ord` ranks them from
/// furthest-from-goal to beyond-ultra.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum Tier {
    /// Below 83 % of the base goal.
    #[cfg_attr(feature = "serde", serde(rename = "BELOW_83"))]
    Below83,
    /// Between 83 % (inclusive) and 100 % (exclusive) of the base goal.
    BelowBase,
    /// Base goal met, super goal not yet.
    AboveBase,
    /// Super goal met, ultra goal not yet.
    AboveSuper,
    /// Ultra goal met.
    AboveUltra,
}

impl Tier {
    /// All tiers, lowest first.
    pub const ALL: [Tier; 5] = [
        Tier::Below83,
        Tier::BelowBase,
        Tier::AboveBase,
        Tier::AboveSuper,
        Tier::AboveUltra,
    ];

    /// Classify `value` against `t`.
    pub fn classify(value: f64, t: &ThresholdSet) -> Tier {
        let value = sanitize_value(value);
        if !t.has_base() {
            tracing::trace!(value, "base goal is zero; classifying as Below83");
        }
        let percent = percent_of_goal(value, t);

        if percent < NEAR_GOAL_PERCENT {
            Tier::Below83
        } else if percent < BASE_PERCENT {
            Tier::BelowBase
        } else if value < t.super_goal {
            Tier::AboveBase
        } else if value < t.ultra_goal {
            Tier::AboveSuper
        } else {
            Tier::AboveUltra
        }
    }

    /// The color token bound to this tier.
    pub fn color(&self) -> ColorToken {
        match self {
            Tier::Below83 => ColorToken::Orange,
            Tier::BelowBase => ColorToken::Amber,
            Tier::AboveBase => ColorToken::Green,
            Tier::AboveSuper => ColorToken::Purple,
            Tier::AboveUltra => ColorToken::Lime,
        }
    }

    /// Short human label for legends and tooltips.
    pub fn label(&self) -> &'static str {
        match self {
            Tier::Below83 => "below 83% of goal",
            Tier::BelowBase => "almost at goal",
            Tier::AboveBase => "goal reached",
            Tier::AboveSuper => "super goal reached",
            Tier::AboveUltra => "ultra goal reached",
        }
    }

    /// `true` once the base goal has been met.
    pub fn goal_met(&self) -> bool {
        *self >= Tier::AboveBase
    }
}

/// Classify `value` and return the tier together with its color.
pub fn classify(value: f64, t: &ThresholdSet) -> (Tier, ColorToken) {
    let tier = Tier::classify(value, t);
    (tier, tier.color())
}

// ─── Tests ──────────────────────────────────────────────────────────────────
