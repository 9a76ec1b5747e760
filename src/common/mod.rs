//! Common types, traits, and utilities shared across the engine and the writers.
//!
//! This module provides the unified error type, unit conversions, colours and
//! XML helpers used by both the deck model and the PPTX serializer.

// Submodule declarations
pub mod error;
pub mod style;
pub mod unit;
pub mod xml;

// Re-exports for convenience
pub use error::{Error, ErrorKind, Result};
pub use style::RGBColor;
pub use unit::Length;
