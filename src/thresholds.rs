/*
 * goalband-core: goal progress & banding engine.
 *
 * This source code is licensed under the Business Source License 1.1.
 * See LICENSE in the root directory for full details.
 */

//! The three-goal threshold set and input coercion.
//!
//! - [`ThresholdSet`]: base ("meta"), super and ultra goals for one tracked metric.
//! - [`coerce_amount`] / [`coerce_text`]: turn user-edited input into a usable number.
//! - [`ThresholdOrderError`]: opt-in diagnostic for out-of-order goals.
//!
//! # Invariants
//!
//! - **Coercion only**: construction never rejects input. NaN, infinities,
//!   negatives and unparsable text all become `0.0`.
//! - **No repair**: goals out of ascending order are kept as given. Use
//!   [`ThresholdSet::check_order`] to flag them; evaluation never does.

extern crate alloc;

use alloc::string::String;

use crate::engine::{evaluate, EvaluationResult};

// ─── Coercion ───────────────────────────────────────────────────────────────

/// Coerce a single numeric input to a non-negative finite amount.
///
/// NaN, `±inf` and negative values map to `0.0`; everything else passes through.
pub fn coerce_amount(raw: f64) -> f64 {
    if raw.is_finite() && raw > 0.0 {
        raw
    } else {
        0.0
    }
}

/// Parse a form-field string into a non-negative amount.
///
/// Leading and trailing whitespace is ignored. A single decimal comma with no
/// dot (`"1500,5"`) is read as a decimal point. Empty or unparsable input is
/// `0.0`; this function never fails.
pub fn coerce_text(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    let parsed = if trimmed.matches(',').count() == 1 && !trimmed.contains('.') {
        let normalised: String = trimmed.replacen(',', ".", 1);
        normalised.parse::<f64>()
    } else {
        trimmed.parse::<f64>()
    };

    match parsed {
        Ok(v) => coerce_amount(v),
        Err(_) => {
            tracing::debug!(input = raw, "unparsable amount coerced to 0");
            0.0
        }
    }
}

// ─── ThresholdOrderError ────────────────────────────────────────────────────

/// Goals that are not in ascending order.
///
/// Returned only by [`ThresholdSet::check_order`]. The evaluation path accepts
/// out-of-order goals and never produces this error.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum ThresholdOrderError {
    /// The super goal is smaller than the base goal.
    #[error("super goal {super_goal} is below base goal {base}")]
    SuperBelowBase {
        /// Base goal as configured.
        base: f64,
        /// Super goal as configured.
        super_goal: f64,
    },
    /// The ultra goal is smaller than the super goal.
    #[error("ultra goal {ultra_goal} is below super goal {super_goal}")]
    UltraBelowSuper {
        /// Super goal as configured.
        super_goal: f64,
        /// Ultra goal as configured.
        ultra_goal: f64,
    },
}

// ─── ThresholdSet ───────────────────────────────────────────────────────────

/// The three ascending goals a metric is tracked against.
///
/// Built fresh from the persisted goals record whenever the user edits it, and
/// read-only for the duration of an evaluation.
///
/// Deserialising goes through [`ThresholdSet::new`], so stored negatives and
/// non-finite values are coerced the same way as constructed ones.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", from = "ThresholdFields"))]
pub struct ThresholdSet {
    /// Primary goal ("meta"). Percent-of-goal is only defined when this is > 0.
    pub base: f64,
    /// Secondary goal ("super meta"). Expected `>= base`, not enforced.
    pub super_goal: f64,
    /// Tertiary goal ("ultra meta"). Expected `>= super_goal`, not enforced.
    pub ultra_goal: f64,
}

/// Wire form of [`ThresholdSet`], before coercion.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct ThresholdFields {
    base: f64,
    super_goal: f64,
    ultra_goal: f64,
}

#[cfg(feature = "serde")]
impl From<ThresholdFields> for ThresholdSet {
    fn from(f: ThresholdFields) -> Self {
        Self::new(f.base, f.super_goal, f.ultra_goal)
    }
}

impl ThresholdSet {
    /// Construct from raw numbers, coercing each with [`coerce_amount`].
    pub fn new(base: f64, super_goal: f64, ultra_goal: f64) -> Self {
        Self {
            base: coerce_amount(base),
            super_goal: coerce_amount(super_goal),
            ultra_goal: coerce_amount(ultra_goal),
        }
    }

    /// Construct from form-field strings, coercing each with [`coerce_text`].
    pub fn from_text(base: &str, super_goal: &str, ultra_goal: &str) -> Self {
        Self {
            base: coerce_text(base),
            super_goal: coerce_text(super_goal),
            ultra_goal: coerce_text(ultra_goal),
        }
    }

    /// `true` when the base goal is positive, i.e. percentages are defined.
    pub fn has_base(&self) -> bool {
        self.base > 0.0
    }

    /// Report goals that are out of ascending order.
    ///
    /// The super/base pair is checked first.
    pub fn check_order(&self) -> Result<(), ThresholdOrderError> {
        if self.super_goal < self.base {
            return Err(ThresholdOrderError::SuperBelowBase {
                base: self.base,
                super_goal: self.super_goal,
            });
        }
        if self.ultra_goal < self.super_goal {
            return Err(ThresholdOrderError::UltraBelowSuper {
                super_goal: self.super_goal,
                ultra_goal: self.ultra_goal,
            });
        }
        Ok(())
    }

    /// Evaluate `value` against these goals. Shorthand for [`evaluate`].
    pub fn evaluate(&self, value: f64) -> EvaluationResult {
        evaluate(value, self)
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_amount_passes_positive() {
        assert_eq!(coerce_amount(12.5), 12.5);
    }

    #[test]
    fn test_coerce_amount_rejects_degenerate() {
        assert_eq!(coerce_amount(-3.0), 0.0);
        assert_eq!(coerce_amount(f64::NAN), 0.0);
        assert_eq!(coerce_amount(f64::INFINITY), 0.0);
        assert_eq!(coerce_amount(f64::NEG_INFINITY), 0.0);
    }

    #[test]
    fn test_coerce_text_plain_and_padded() {
        assert_eq!(coerce_text("150"), 150.0);
        assert_eq!(coerce_text("  42.5 "), 42.5);
    }

    #[test]
    fn test_coerce_text_decimal_comma() {
        assert_eq!(coerce_text("1500,5"), 1500.5);
    }

    #[test]
    fn test_coerce_text_invalid_is_zero() {
        assert_eq!(coerce_text(""), 0.0);
        assert_eq!(coerce_text("   "), 0.0);
        assert_eq!(coerce_text("abc"), 0.0);
        assert_eq!(coerce_text("1,000,000"), 0.0);
        assert_eq!(coerce_text("-20"), 0.0);
        assert_eq!(coerce_text("NaN"), 0.0);
    }

    #[test]
    fn test_new_coerces_each_field() {
        let t = ThresholdSet::new(-1.0, f64::NAN, 30.0);
        assert_eq!(t, ThresholdSet { base: 0.0, super_goal: 0.0, ultra_goal: 30.0 });
        assert!(!t.has_base());
    }

    #[test]
    fn test_from_text() {
        let t = ThresholdSet::from_text("10", "15,5", "");
        assert_eq!(t.base, 10.0);
        assert_eq!(t.super_goal, 15.5);
        assert_eq!(t.ultra_goal, 0.0);
    }

    #[test]
    fn test_default_is_all_zero() {
        let t = ThresholdSet::default();
        assert_eq!(t.base, 0.0);
        assert_eq!(t.super_goal, 0.0);
        assert_eq!(t.ultra_goal, 0.0);
    }

    #[test]
    fn test_check_order_ascending_ok() {
        assert_eq!(ThresholdSet::new(10.0, 15.0, 20.0).check_order(), Ok(()));
        // equal goals are still "ascending"
        assert_eq!(ThresholdSet::new(10.0, 10.0, 10.0).check_order(), Ok(()));
    }

    #[test]
    fn test_check_order_reports_super_first() {
        let t = ThresholdSet::new(10.0, 5.0, 2.0);
        assert_eq!(
            t.check_order(),
            Err(ThresholdOrderError::SuperBelowBase { base: 10.0, super_goal: 5.0 })
        );
    }

    #[test]
    fn test_check_order_reports_ultra() {
        let t = ThresholdSet::new(10.0, 15.0, 12.0);
        assert_eq!(
            t.check_order(),
            Err(ThresholdOrderError::UltraBelowSuper { super_goal: 15.0, ultra_goal: 12.0 })
        );
    }

    #[test]
    fn test_order_error_display() {
        let err = ThresholdOrderError::SuperBelowBase { base: 10.0, super_goal: 5.0 };
        assert_eq!(err.to_string(), "super goal 5 is below base goal 10");
    }
}
