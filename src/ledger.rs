/*
 * goalband-core: goal progress & banding engine.
 *
 * This source code is licensed under the Business Source License 1.1.
 * See LICENSE in the root directory for full details.
 */

//! String-keyed running totals.
//!
//! Seller names, product names and tags come from data, not from a fixed enum,
//! so totals are kept in a map keyed by the raw string. A key seen for the
//! first time simply starts a new total.
//!
//! # Invariants
//!
//! - Unknown keys read as `0.0`; nothing is ever rejected.
//! - Blank keys (empty or whitespace) are pooled under [`UNASSIGNED_KEY`].
//! - Non-finite amounts are skipped so one bad record cannot poison a total.
//! - no_std compatible; uses `hashbrown::HashMap` with `alloc` strings.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use hashbrown::HashMap;

/// Key used for records whose key is blank.
pub const UNASSIGNED_KEY: &str = "(unassigned)";

/// Running totals keyed by an open-ended string key.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Ledger {
    totals: HashMap<String, f64>,
}

impl Ledger {
    /// Construct an empty ledger.
    pub fn new() -> Self {
        Self {
            totals: HashMap::new(),
        }
    }

    /// Build a ledger from `(key, amount)` records.
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        let mut ledger = Self::new();
        for (key, amount) in records {
            ledger.record(key, amount);
        }
        ledger
    }

    /// Add `amount` to the total for `key`.
    ///
    /// Negative amounts (refunds, chargebacks) are applied as-is.
    pub fn record(&mut self, key: &str, amount: f64) {
        if !amount.is_finite() {
            tracing::debug!(key, "skipping non-finite amount");
            return;
        }
        let key = normalise_key(key);
        match self.totals.get_mut(key) {
            Some(total) => *total += amount,
            None => {
                self.totals.insert(key.to_string(), amount);
            }
        }
    }

    /// Total recorded for `key`, or `0.0` if it was never seen.
    pub fn total(&self, key: &str) -> f64 {
        self.totals.get(normalise_key(key)).copied().unwrap_or(0.0)
    }

    /// `true` if at least one record was made under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.totals.contains_key(normalise_key(key))
    }

    /// Sum over every key.
    pub fn grand_total(&self) -> f64 {
        self.totals.values().sum()
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.totals.len()
    }

    /// `true` if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    /// Iterate over `(key, total)` in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.totals.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// All keys, sorted.
    pub fn keys_sorted(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.totals.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Fold another ledger into this one, key by key.
    pub fn merge(&mut self, other: &Ledger) {
        for (key, amount) in other.iter() {
            self.record(key, amount);
        }
    }
}

pub(crate) fn normalise_key(key: &str) -> &str {
    let trimmed = key.trim();
    if trimmed.is_empty() {
        UNASSIGNED_KEY
    } else {
        trimmed
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
