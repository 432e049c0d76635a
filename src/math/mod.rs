//! Mathematical utilities shared by the built-in measures

/// Discrete entropy and histogram helpers
pub mod information;
