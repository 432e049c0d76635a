//! Measure registry mapping identifiers to scoring functions
//!
//! The registry is populated once (see [`default_registry`]) and read-only
//! afterwards; measures hold their functions behind `Arc` so resolving is a
//! cheap clone and safe from any thread.

use crate::io::error::{CurriculumError, Result};
use crate::measures::{distance, standalone};
use ndarray::ArrayView3;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, LazyLock};

/// Single-patch scoring function
pub type StandaloneFn = dyn for<'a> Fn(ArrayView3<'a, f64>) -> f64 + Send + Sync;

/// Two-patch scoring function, called as `f(reference, candidate)`
pub type DistanceFn =
    dyn for<'a, 'b> Fn(ArrayView3<'a, f64>, ArrayView3<'b, f64>) -> f64 + Send + Sync;

/// Whether a measure scores one patch or a pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeasureKind {
    /// Scores a single patch
    Standalone,
    /// Scores a pair of patches
    Distance,
}

impl fmt::Display for MeasureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standalone => write!(f, "standalone"),
            Self::Distance => write!(f, "distance"),
        }
    }
}

/// Scoring function tagged with its kind
#[derive(Clone)]
pub enum MeasureFunction {
    /// Single-patch function
    Standalone(Arc<StandaloneFn>),
    /// Patch-pair function
    Distance(Arc<DistanceFn>),
}

impl MeasureFunction {
    /// Kind of the wrapped function
    pub const fn kind(&self) -> MeasureKind {
        match self {
            Self::Standalone(_) => MeasureKind::Standalone,
            Self::Distance(_) => MeasureKind::Distance,
        }
    }
}

impl fmt::Debug for MeasureFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MeasureFunction::{:?}", self.kind())
    }
}

/// Named scoring function
#[derive(Debug, Clone)]
pub struct Measure {
    id: String,
    function: MeasureFunction,
}

impl Measure {
    /// Create a standalone measure
    pub fn standalone(
        id: impl Into<String>,
        function: impl Fn(ArrayView3<'_, f64>) -> f64 + Send + Sync + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            function: MeasureFunction::Standalone(Arc::new(function)),
        }
    }

    /// Create a distance measure
    pub fn distance(
        id: impl Into<String>,
        function: impl Fn(ArrayView3<'_, f64>, ArrayView3<'_, f64>) -> f64 + Send + Sync + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            function: MeasureFunction::Distance(Arc::new(function)),
        }
    }

    /// Registry identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Standalone or distance
    pub const fn kind(&self) -> MeasureKind {
        self.function.kind()
    }

    /// The scoring function
    pub const fn function(&self) -> &MeasureFunction {
        &self.function
    }
}

/// Identifier-keyed collection of measures
#[derive(Debug, Clone, Default)]
pub struct MeasureRegistry {
    entries: HashMap<String, Measure>,
}

impl MeasureRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every built-in measure
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        standalone::register_builtins(&mut registry);
        distance::register_builtins(&mut registry);
        registry
    }

    /// Add a measure, returning the entry it replaced under the same id
    pub fn register(&mut self, measure: Measure) -> Option<Measure> {
        self.entries.insert(measure.id.clone(), measure)
    }

    /// Register a single-patch function under `id`
    pub fn register_standalone(
        &mut self,
        id: impl Into<String>,
        function: impl Fn(ArrayView3<'_, f64>) -> f64 + Send + Sync + 'static,
    ) -> Option<Measure> {
        self.register(Measure::standalone(id, function))
    }

    /// Register a patch-pair function under `id`
    pub fn register_distance(
        &mut self,
        id: impl Into<String>,
        function: impl Fn(ArrayView3<'_, f64>, ArrayView3<'_, f64>) -> f64 + Send + Sync + 'static,
    ) -> Option<Measure> {
        self.register(Measure::distance(id, function))
    }

    /// Look up a measure by identifier
    ///
    /// # Errors
    ///
    /// Returns [`CurriculumError::UnknownMeasure`] if nothing is registered under `id`
    pub fn resolve(&self, id: &str) -> Result<Measure> {
        self.entries
            .get(id)
            .cloned()
            .ok_or_else(|| CurriculumError::UnknownMeasure { id: id.to_string() })
    }

    /// Check whether `id` is registered
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Registered identifiers in sorted order
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Number of registered measures
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

static DEFAULT_REGISTRY: LazyLock<MeasureRegistry> = LazyLock::new(MeasureRegistry::builtin);

/// Process-wide registry of built-in measures, built on first use
pub fn default_registry() -> &'static MeasureRegistry {
    &DEFAULT_REGISTRY
}
