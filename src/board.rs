/*
 * goalband-core: goal progress & banding engine.
 *
 * This source code is licensed under the Business Source License 1.1.
 * See LICENSE in the root directory for full details.
 */

//! Keyed goal evaluation: per-seller bars, per-category goals, team board.
//!
//! - [`GoalBook`]: goals per key (seller, product, tag) with an optional fallback.
//! - [`KeyedProgress`]: one evaluated row.
//! - [`TeamBoard`]: team bar over the grand total plus ranked seller rows.
//!
//! # Invariants
//!
//! - Every ledger key and every goal key produces exactly one row.
//! - A key with sales but no goals (and no fallback) is reported as untracked,
//!   never dropped.
//! - A goal key with no sales is evaluated at `0.0`.
//! - Rows from [`GoalBook::evaluate_ledger`] are sorted by key.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::cmp::Ordering;

use hashbrown::{HashMap, HashSet};

use crate::band::Tier;
use crate::engine::{evaluate, EvaluationResult};
use crate::ledger::{normalise_key, Ledger};
use crate::thresholds::ThresholdSet;

// ─── GoalBook ───────────────────────────────────────────────────────────────

/// Goals keyed by the same open-ended keys a [`Ledger`] uses.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GoalBook {
    goals: HashMap<String, ThresholdSet>,
    fallback: Option<ThresholdSet>,
}

impl GoalBook {
    /// An empty book with no fallback.
    pub fn new() -> Self {
        Self {
            goals: HashMap::new(),
            fallback: None,
        }
    }

    /// Use `fallback` for any key without its own goals.
    pub fn with_fallback(mut self, fallback: ThresholdSet) -> Self {
        self.fallback = Some(fallback);
        self
    }

    /// Set (or replace) the goals for `key`.
    pub fn set(&mut self, key: &str, goals: ThresholdSet) {
        self.goals.insert(normalise_key(key).to_string(), goals);
    }

    /// Goals explicitly configured for `key`.
    pub fn get(&self, key: &str) -> Option<&ThresholdSet> {
        self.goals.get(normalise_key(key))
    }

    /// Goals that apply to `key`: its own, else the fallback.
    pub fn goals_for(&self, key: &str) -> Option<ThresholdSet> {
        self.get(key).copied().or(self.fallback)
    }

    /// The fallback goals, if any.
    pub fn fallback(&self) -> Option<ThresholdSet> {
        self.fallback
    }

    /// Number of keys with explicit goals.
    pub fn len(&self) -> usize {
        self.goals.len()
    }

    /// `true` if no key has explicit goals.
    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    /// Evaluate every key in `ledger` and every key in this book.
    pub fn evaluate_ledger(&self, ledger: &Ledger) -> Vec<KeyedProgress> {
        let mut keys: HashSet<&str> = ledger.iter().map(|(k, _)| k).collect();
        keys.extend(self.goals.keys().map(String::as_str));

        let mut rows: Vec<KeyedProgress> = keys
            .into_iter()
            .map(|key| {
                let value = ledger.total(key);
                let thresholds = self.goals_for(key);
                if thresholds.is_none() {
                    tracing::debug!(key, "no goals configured; row is untracked");
                }
                KeyedProgress {
                    key: key.to_string(),
                    value,
                    thresholds,
                    evaluation: thresholds.map(|t| evaluate(value, &t)),
                }
            })
            .collect();
        rows.sort_by(|a, b| a.key.cmp(&b.key));
        rows
    }
}

// ─── KeyedProgress ──────────────────────────────────────────────────────────

/// Evaluation of one key's total against its goals.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct KeyedProgress {
    /// Seller, product or tag.
    pub key: String,
    /// Total recorded for the key.
    pub value: f64,
    /// Goals the key was evaluated against.
    pub thresholds: Option<ThresholdSet>,
    /// `None` when no goals apply to the key.
    pub evaluation: Option<EvaluationResult>,
}

impl KeyedProgress {
    /// `true` if goals applied and the row was evaluated.
    pub fn is_tracked(&self) -> bool {
        self.evaluation.is_some()
    }

    /// Tier of the row, if tracked.
    pub fn tier(&self) -> Option<Tier> {
        self.evaluation.map(|e| e.tier)
    }

    /// Bar position of the row, if tracked.
    pub fn display_percent(&self) -> Option<f64> {
        self.evaluation.map(|e| e.display_percent)
    }
}

/// Tracked rows first, then display percent descending, then key.
fn rank_order(a: &KeyedProgress, b: &KeyedProgress) -> Ordering {
    match (a.display_percent(), b.display_percent()) {
        (Some(da), Some(db)) => db.total_cmp(&da).then_with(|| a.key.cmp(&b.key)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.key.cmp(&b.key),
    }
}

// ─── TeamBoard ──────────────────────────────────────────────────────────────

/// Team progress bar plus one ranked bar per seller.
#[derive(Clone, Debug, PartialEq)]
pub struct TeamBoard {
    /// Sum of every seller's total.
    pub team_total: f64,
    /// Goals the team total is measured against.
    pub team_goals: ThresholdSet,
    /// Team bar.
    pub team: EvaluationResult,
    /// Seller rows, best first.
    pub sellers: Vec<KeyedProgress>,
}

impl TeamBoard {
    /// Evaluate the team total and every seller in `ledger`.
    pub fn build(ledger: &Ledger, team_goals: &ThresholdSet, per_seller: &GoalBook) -> Self {
        let team_total = ledger.grand_total();
        let mut sellers = per_seller.evaluate_ledger(ledger);
        sellers.sort_by(rank_order);

        Self {
            team_total,
            team_goals: *team_goals,
            team: evaluate(team_total, team_goals),
            sellers,
        }
    }

    /// Number of sellers whose row sits in `tier`.
    pub fn count_in_tier(&self, tier: Tier) -> usize {
        self.sellers.iter().filter(|s| s.tier() == Some(tier)).count()
    }

    /// The top-ranked tracked seller.
    pub fn leader(&self) -> Option<&KeyedProgress> {
        self.sellers.first().filter(|s| s.is_tracked())
    }

    /// Sellers that have met at least their base goal.
    pub fn goal_met_count(&self) -> usize {
        self.sellers
            .iter()
            .filter(|s| s.tier().is_some_and(|t| t.goal_met()))
            .count()
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
