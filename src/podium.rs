/*
 * goalband-core: goal progress & banding engine.
 *
 * This source code is licensed under the Business Source License 1.1.
 * See LICENSE in the root directory for full details.
 */

//! Fixed-capacity top-K ranking for dashboard podiums.
//!
//! Enabled by `features = ["podium"]`. Keeps the K best `(id, value)` pairs in
//! descending order using `heapless::Vec`, with no heap allocation, so it
//! can run where [`crate::ledger::Ledger`] cannot.
//!
//! Seller keys are reduced to a `u32` id with [`key_id`] (FNV-1a).
//!
//! # Invariants
//!
//! - At most `K` entries; the lowest is evicted when a better one arrives.
//! - Entries are sorted by value descending; on ties the earlier offer stays ahead.
//! - An id appears at most once; re-offering replaces its value.
//! - NaN values are ignored.

use heapless::Vec as HVec;

/// FNV-1a hash of a key, trimmed, for use as a podium id.
pub fn key_id(key: &str) -> u32 {
    let mut h: u32 = 2_166_136_261;
    for &b in key.trim().as_bytes() {
        h ^= b as u32;
        h = h.wrapping_mul(16_777_619);
    }
    h
}

/// One place on the podium.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PodiumEntry {
    /// Caller-chosen id, usually [`key_id`] of the seller name.
    pub id: u32,
    /// Ranked value (total sold, display percent, ...).
    pub value: f64,
}

/// The best `K` entries seen so far.
#[derive(Clone, Debug, Default)]
pub struct Podium<const K: usize> {
    entries: HVec<PodiumEntry, K>,
}

impl<const K: usize> Podium<K> {
    /// An empty podium.
    pub fn new() -> Self {
        Self {
            entries: HVec::new(),
        }
    }

    /// Offer `value` for `id`. Returns `true` if the entry holds a place afterwards.
    pub fn offer(&mut self, id: u32, value: f64) -> bool {
        if value.is_nan() || K == 0 {
            return false;
        }
        if let Some(existing) = self.entries.iter().position(|e| e.id == id) {
            self.entries.remove(existing);
        }

        let pos = self
            .entries
            .iter()
            .position(|e| e.value < value)
            .unwrap_or(self.entries.len());
        if pos >= K {
            return false;
        }
        if self.entries.is_full() {
            self.entries.pop();
        }
        let _ = self.entries.insert(pos, PodiumEntry { id, value });
        true
    }

    /// Offer a named entry, using [`key_id`] for the id.
    pub fn offer_key(&mut self, key: &str, value: f64) -> bool {
        self.offer(key_id(key), value)
    }

    /// Entries, best first.
    pub fn entries(&self) -> &[PodiumEntry] {
        &self.entries
    }

    /// 1-based place of `id`, if it is on the podium.
    pub fn place_of(&self, id: u32) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id).map(|i| i + 1)
    }

    /// Number of occupied places.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` if nothing has been placed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
