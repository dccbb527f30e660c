//! Persisted goals record and serializable board snapshot.
//!
//! Requires the `serde` feature.
//!
//! # Goals record
//!
//! The goals document is edited through a form and stored as-is, so a field
//! may arrive as a JSON number, a numeric string, an empty string or `null`:
//!
//! ```json
//! { "meta": 150000, "superMeta": "180000", "ultraMeta": "" }
//! ```
//!
//! [`GoalsRecord::thresholds`] coerces every field with the same rules as
//! [`ThresholdSet::from_text`]; missing, null, unparsable and wrongly typed
//! values (`true`, `[]`, `{}`) become `0`. Loading a record never fails on a
//! field's content.
//!
//! # Snapshot
//!
//! [`GoalsSnapshot`] is a versioned, serializable copy of a [`TeamBoard`] for
//! export. It is derived data and is never read back into the engine.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::board::{KeyedProgress, TeamBoard};
use crate::engine::EvaluationResult;
use crate::thresholds::{coerce_amount, coerce_text, ThresholdSet};

/// Current [`GoalsSnapshot`] format version.
pub const SNAPSHOT_VERSION: u16 = 1;

/// A goal field as stored: number, text, or anything else.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum RawAmount {
    /// Stored as a JSON number.
    Number(f64),
    /// Stored as text straight from the form input.
    Text(String),
    /// Any other JSON value (bool, array, object). Reads as `0.0` and is
    /// never written back.
    #[serde(skip_serializing)]
    Other(serde::de::IgnoredAny),
}

impl RawAmount {
    /// Coerce to a non-negative amount (`0.0` on anything invalid).
    pub fn amount(&self) -> f64 {
        match self {
            RawAmount::Number(n) => coerce_amount(*n),
            RawAmount::Text(s) => coerce_text(s),
            RawAmount::Other(_) => {
                tracing::debug!("goal field of unexpected type coerced to 0");
                0.0
            }
        }
    }
}

impl From<f64> for RawAmount {
    fn from(n: f64) -> Self {
        RawAmount::Number(n)
    }
}

/// The persisted goals document for one metric.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalsRecord {
    /// Base goal ("meta").
    #[serde(default)]
    pub meta: Option<RawAmount>,
    /// Super goal ("super meta").
    #[serde(default)]
    pub super_meta: Option<RawAmount>,
    /// Ultra goal ("ultra meta").
    #[serde(default)]
    pub ultra_meta: Option<RawAmount>,
}

impl GoalsRecord {
    /// Record holding three numeric goals.
    pub fn from_amounts(meta: f64, super_meta: f64, ultra_meta: f64) -> Self {
        Self {
            meta: Some(meta.into()),
            super_meta: Some(super_meta.into()),
            ultra_meta: Some(ultra_meta.into()),
        }
    }

    /// Coerce the record into a [`ThresholdSet`].
    ///
    /// Out-of-order goals are kept as stored and logged at `warn`.
    pub fn thresholds(&self) -> ThresholdSet {
        let field = |raw: &Option<RawAmount>| raw.as_ref().map_or(0.0, RawAmount::amount);
        let t = ThresholdSet {
            base: field(&self.meta),
            super_goal: field(&self.super_meta),
            ultra_goal: field(&self.ultra_meta),
        };
        if let Err(err) = t.check_order() {
            tracing::warn!(%err, "goals record is out of ascending order");
        }
        t
    }
}

impl From<&ThresholdSet> for GoalsRecord {
    fn from(t: &ThresholdSet) -> Self {
        Self::from_amounts(t.base, t.super_goal, t.ultra_goal)
    }
}

/// Serializable view of a [`TeamBoard`].
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalsSnapshot {
    /// Always [`SNAPSHOT_VERSION`] for newly built snapshots.
    pub version: u16,
    /// Team grand total.
    pub team_total: f64,
    /// Team goals.
    pub team_goals: ThresholdSet,
    /// Team bar.
    pub team: EvaluationResult,
    /// Seller rows, best first.
    pub sellers: Vec<KeyedProgress>,
}

impl From<&TeamBoard> for GoalsSnapshot {
    fn from(board: &TeamBoard) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            team_total: board.team_total,
            team_goals: board.team_goals,
            team: board.team,
            sellers: board.sellers.clone(),
        }
    }
}

impl GoalsSnapshot {
    /// Look up a seller row by key.
    pub fn seller(&self, key: &str) -> Option<&KeyedProgress> {
        self.sellers.iter().find(|s| s.key == key)
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
