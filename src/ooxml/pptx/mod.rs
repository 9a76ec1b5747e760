//! PowerPoint (.pptx) output.
//!
//! [`PptxWriter`] turns a finished [`Deck`](crate::deck::Deck) into an OPC
//! package with one slide per page, a single blank layout and a theme built
//! from the deck palette and fonts.

pub mod package;
pub mod template;
pub mod writer;

pub use package::PptxWriter;
