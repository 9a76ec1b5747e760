//! Unified error types for deckwright.
//!
//! Every failure surfaces as one [`Error`], which can be classified into the two
//! kinds the engine distinguishes: configuration errors raised while building
//! pages and I/O errors raised while persisting the finished deck.

// Submodule declarations
pub mod conversions;
pub mod types;

// Re-exports
pub use types::{Error, ErrorKind, Result};
