//! # goalband-core
//!
//! Goal progress & banding engine for commercial dashboards.
//!
//! ---
//!
//! Every progress bar on a sales dashboard answers the same three questions
//! about a running total and its goals:
//!
//! - **Which band is it in?** Far from goal, almost there, goal met, super
//!   goal met, ultra goal met. Each band has one color.
//! - **Where does the bar end?** The bar is deliberately non-linear: the base
//!   goal always sits at 75 %, the super goal at 85 %, the ultra goal at 100 %,
//!   so crossing each goal is visible no matter how far apart the goals are.
//! - **What does the label say?** The literal percent of the base goal,
//!   unclamped, one decimal.
//!
//! [`evaluate`] answers all three in one pure call. Team bars, seller bars and
//! category rings all go through it, so they can never drift apart.
//!
//! ## The pipeline
//!
//! ```text
//! sales records → Ledger → GoalBook / TeamBoard → evaluate → EvaluationResult
//!                              ↑                    ↑   ↑
//!                        ThresholdSet      Tier::classify   map_to_display_percent
//!                              ↑
//!                    GoalsRecord (serde)
//! ```
//!
//! ## Module overview
//!
//! | Module | Key types | What it does |
//! |--------|-----------|--------------|
//! | [`thresholds`] | [`ThresholdSet`] | Three goals, input coercion, order check |
//! | [`band`] | [`Tier`], [`ColorToken`] | Tier classification with the 83 % "almost there" band |
//! | [`progress`] | [`map_to_display_percent`] | Three-segment non-linear bar position |
//! | [`engine`] | [`EvaluationResult`], [`evaluate`] | Single evaluation entry point |
//! | [`ledger`] | [`Ledger`] | String-keyed running totals |
//! | [`board`] | [`GoalBook`], [`TeamBoard`] | Per-key goals, team + ranked seller bars |
//! | `podium` | `Podium` | Heap-free top-K ranking (requires `podium` feature) |
//! | `config` | `GoalsRecord`, `GoalsSnapshot` | Persisted goals and exports (requires `serde` feature) |
//!
//! ## Example
//!
//! ```rust
//! use goalband_core::{evaluate, ThresholdSet, Tier};
//!
//! let goals = ThresholdSet::new(10.0, 15.0, 20.0);
//! let r = evaluate(18.0, &goals);
//! assert_eq!(r.tier, Tier::AboveSuper);
//! assert_eq!(r.color.as_str(), "purple");
//! assert!((r.display_percent - 94.0).abs() < 1e-9);
//! assert_eq!(r.goal_percent.to_string(), "180.0%");
//! ```
//!
//! ## `no_std`
//!
//! This crate is `#![no_std]` by default. [`ledger`] and [`board`] need `alloc`;
//! everything else, including `podium`, runs without a heap. Logging goes
//! through the `tracing` facade; no subscriber is installed by the library.
//!
//! ## License
//!
//! Business Source License 1.1.

#![cfg_attr(not(any(test, feature = "std", feature = "python-ffi")), no_std)]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(any(feature = "std", feature = "python-ffi"))]
extern crate std;

pub mod thresholds;
pub mod band;
pub mod progress;
pub mod engine;
pub mod ledger;
pub mod board;
#[cfg(feature = "podium")]
pub mod podium;
#[cfg(feature = "serde")]
pub mod config;

#[cfg(feature = "python-ffi")]
pub mod ffi;

pub use band::{classify, ColorToken, Tier};
pub use board::{GoalBook, KeyedProgress, TeamBoard};
pub use engine::{evaluate, EvaluationResult, GoalPercent};
pub use ledger::Ledger;
pub use progress::{map_to_display_percent, BarMarkers};
pub use thresholds::{ThresholdOrderError, ThresholdSet};
