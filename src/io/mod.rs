//! Input/output operations, configuration, and error handling

/// Command-line interface and batch file processing
pub mod cli;
/// Constants and runtime configuration defaults
pub mod configuration;
/// Error types and result alias
pub mod error;
/// PNG loading and export of normalised image arrays
pub mod image;
/// Progress display for batch runs
pub mod progress;
