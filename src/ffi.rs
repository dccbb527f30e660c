//! Python FFI bindings via PyO3.
//!
//! Exposes goal evaluation to Python so notebooks and report scripts band
//! values exactly like the dashboard does.
//!
//! # Building the Python extension
//!
//! ```bash
//! pip install maturin
//! maturin develop --features python-ffi
//! ```
//!
//! # Usage
//!
//! ```python
//! from goalband_core import ThresholdSet, Tier, evaluate
//!
//! goals = ThresholdSet(base=10, super_goal=15, ultra_goal=20)
//! r = evaluate(18, goals)
//! print(r.tier == Tier.AboveSuper)  # True
//! print(r.color)                    # "purple"
//! print(r.display_percent)          # 94.0
//! print(r.goal_percent_label)       # "180.0%"
//! ```

#![allow(non_snake_case)]

use pyo3::prelude::*;

use crate::band::Tier as RustTier;
use crate::engine::{evaluate as rust_evaluate, EvaluationResult};
use crate::thresholds::ThresholdSet as RustThresholdSet;

// ── ThresholdSet ──────────────────────────────────────────────────────────────

/// Base, super and ultra goals for one metric.
///
/// Negative, NaN and infinite inputs are coerced to 0.
#[pyclass(name = "ThresholdSet")]
#[derive(Clone)]
pub struct PyThresholdSet {
    inner: RustThresholdSet,
}

#[pymethods]
impl PyThresholdSet {
    /// Create a ThresholdSet.
    ///
    /// Args:
    ///     base:       primary goal ("meta")
    ///     super_goal: secondary goal
    ///     ultra_goal: tertiary goal
    #[new]
    #[pyo3(signature = (base=0.0, super_goal=0.0, ultra_goal=0.0))]
    pub fn new(base: f64, super_goal: f64, ultra_goal: f64) -> Self {
        Self {
            inner: RustThresholdSet::new(base, super_goal, ultra_goal),
        }
    }

    /// Build from form-field strings; invalid text becomes 0.
    #[staticmethod]
    pub fn from_text(base: &str, super_goal: &str, ultra_goal: &str) -> Self {
        Self {
            inner: RustThresholdSet::from_text(base, super_goal, ultra_goal),
        }
    }

    /// Returns the base goal.
    #[getter]
    pub fn base(&self) -> f64 {
        self.inner.base
    }
    /// Returns the super goal.
    #[getter]
    pub fn super_goal(&self) -> f64 {
        self.inner.super_goal
    }
    /// Returns the ultra goal.
    #[getter]
    pub fn ultra_goal(&self) -> f64 {
        self.inner.ultra_goal
    }

    /// `True` when the goals are in ascending order.
    pub fn is_ordered(&self) -> bool {
        self.inner.check_order().is_ok()
    }

    /// Python repr string.
    pub fn __repr__(&self) -> String {
        format!(
            "ThresholdSet(base={}, super_goal={}, ultra_goal={})",
            self.inner.base, self.inner.super_goal, self.inner.ultra_goal,
        )
    }
}

// ── Tier ──────────────────────────────────────────────────────────────────────

/// Color band of an evaluated value.
///
/// Tiers:
///     Below83    - under 83% of the base goal   (orange)
///     BelowBase  - 83% up to the base goal      (amber)
///     AboveBase  - base goal met                (green)
///     AboveSuper - super goal met               (purple)
///     AboveUltra - ultra goal met               (lime)
#[pyclass(name = "Tier")]
#[derive(Clone)]
pub struct PyTier {
    inner: RustTier,
}

#[pymethods]
impl PyTier {
    /// Below83 class attribute.
    #[classattr]
    pub fn Below83() -> Self {
        Self { inner: RustTier::Below83 }
    }

    /// BelowBase class attribute.
    #[classattr]
    pub fn BelowBase() -> Self {
        Self { inner: RustTier::BelowBase }
    }

    /// AboveBase class attribute.
    #[classattr]
    pub fn AboveBase() -> Self {
        Self { inner: RustTier::AboveBase }
    }

    /// AboveSuper class attribute.
    #[classattr]
    pub fn AboveSuper() -> Self {
        Self { inner: RustTier::AboveSuper }
    }

    /// AboveUltra class attribute.
    #[classattr]
    pub fn AboveUltra() -> Self {
        Self { inner: RustTier::AboveUltra }
    }

    /// Color token for this tier.
    pub fn color(&self) -> &'static str {
        self.inner.color().as_str()
    }

    /// Human label for this tier.
    pub fn label(&self) -> &'static str {
        self.inner.label()
    }

    /// Python repr string.
    pub fn __repr__(&self) -> &'static str {
        match self.inner {
            RustTier::Below83 => "Tier.Below83",
            RustTier::BelowBase => "Tier.BelowBase",
            RustTier::AboveBase => "Tier.AboveBase",
            RustTier::AboveSuper => "Tier.AboveSuper",
            RustTier::AboveUltra => "Tier.AboveUltra",
        }
    }

    /// Python equality comparison.
    pub fn __eq__(&self, other: &PyTier) -> bool {
        self.inner == other.inner
    }
}

// ── Evaluation ────────────────────────────────────────────────────────────────

/// Result of `evaluate`: tier, color, bar position and percent of goal.
#[pyclass(name = "Evaluation")]
#[derive(Clone)]
pub struct PyEvaluation {
    inner: EvaluationResult,
}

#[pymethods]
impl PyEvaluation {
    /// Tier the value falls into.
    #[getter]
    pub fn tier(&self) -> PyTier {
        PyTier { inner: self.inner.tier }
    }

    /// Color token string.
    #[getter]
    pub fn color(&self) -> &'static str {
        self.inner.color.as_str()
    }

    /// Bar position in [0, 100].
    #[getter]
    pub fn display_percent(&self) -> f64 {
        self.inner.display_percent
    }

    /// Percent of the base goal, one decimal, unclamped.
    #[getter]
    pub fn goal_percent(&self) -> f64 {
        self.inner.goal_percent.value()
    }

    /// Percent of goal formatted for display, e.g. "83.3%".
    #[getter]
    pub fn goal_percent_label(&self) -> String {
        self.inner.goal_percent.to_string()
    }

    /// Python repr string.
    pub fn __repr__(&self) -> String {
        format!(
            "Evaluation(tier={}, display_percent={}, goal_percent={})",
            PyTier { inner: self.inner.tier }.__repr__(),
            self.inner.display_percent,
            self.inner.goal_percent,
        )
    }
}

/// Evaluate a value against its goals.
///
/// Args:
///     value:      cumulative metric (sales count or revenue)
///     thresholds: ThresholdSet to measure against
#[pyfunction]
pub fn evaluate(value: f64, thresholds: &PyThresholdSet) -> PyEvaluation {
    PyEvaluation {
        inner: rust_evaluate(value, &thresholds.inner),
    }
}

// ── Module entry point ────────────────────────────────────────────────────────

/// goalband-core Python bindings.
#[pymodule]
pub fn goalband_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyThresholdSet>()?;
    m.add_class::<PyTier>()?;
    m.add_class::<PyEvaluation>()?;
    m.add_function(wrap_pyfunction!(evaluate, m)?)?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    Ok(())
}
