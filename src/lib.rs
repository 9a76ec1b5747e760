//! Deckwright - declarative slide deck assembly
//!
//! Pages are composed from a small set of styled primitives (filled
//! rectangles, text blocks, tables) on top of a fixed page template, then
//! handed to a document writer. The bundled writer produces PowerPoint
//! (.pptx) files.
//!
//! # Features
//!
//! - **Style Palette**: semantic colour roles resolved once per theme
//! - **Page Template**: accent bar, sidebar, title, underline and page footer
//! - **Content Blocks**: cards, code snippets and highlight boxes
//! - **Deck Assembler**: ordered page building with progress reporting
//! - **PPTX Writer**: OPC packaging with atomic replacement of the output file
//!
//! # Example
//!
//! ```no_run
//! use deckwright::content::builtin_pages;
//! use deckwright::deck::{Assembler, DeckMetadata, LogObserver, Palette};
//! use deckwright::ooxml::pptx::PptxWriter;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let assembler = Assembler::new(DeckMetadata::default(), Palette::brutalist());
//! let deck = assembler.run(
//!     builtin_pages(),
//!     &PptxWriter::new(),
//!     Path::new("prezentacja.pptx"),
//!     &mut LogObserver,
//! )?;
//! println!("{} pages written", deck.page_count());
//! # Ok(())
//! # }
//! ```
//!
//! # Feature Flags
//!
//! - `pptx` (default): the PowerPoint writer and the `deckwright` binary

pub mod common;
pub mod config;
pub mod content;
pub mod deck;

#[cfg(feature = "pptx")]
pub mod ooxml;

pub use common::{Error, ErrorKind, Result};
pub use deck::{Assembler, Deck, DeckMetadata, DocumentWriter, Palette, Role, Theme};

#[cfg(feature = "pptx")]
pub use ooxml::pptx::PptxWriter;
