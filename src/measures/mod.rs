//! Patch measures and the registry that resolves them by identifier
//!
//! A measure is either standalone (one patch to a score) or distance (two
//! patches to a score). The registry is open: any function with one of the
//! two signatures can be registered under a new identifier.

/// Built-in two-patch distance measures
pub mod distance;
/// Measure identifiers, kinds, and the registry
pub mod registry;
/// Built-in single-patch measures
pub mod standalone;

pub use registry::{
    DistanceFn, Measure, MeasureFunction, MeasureKind, MeasureRegistry, StandaloneFn,
    default_registry,
};
