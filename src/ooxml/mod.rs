//! Office Open XML (OOXML) output.
//!
//! Two layers:
//!
//! 1. **OPC Layer** (`opc`): package parts, relationships, content types and
//!    the ZIP container.
//! 2. **Format Layer** (`pptx`): PresentationML serialization of a finished
//!    deck.

pub mod error;
pub mod opc;
pub mod pptx;

pub use error::{OoxmlError, Result};
