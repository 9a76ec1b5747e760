//! The presentation assembly engine.
//!
//! Data flows one way: [`palette`] → [`render`] → [`template`] and [`blocks`]
//! → page builders → [`assembler`] → a [`writer::DocumentWriter`]. Every stage
//! receives the [`theme::Theme`] explicitly.

pub mod assembler;
pub mod blocks;
pub mod geometry;
pub mod model;
pub mod page;
pub mod palette;
pub mod render;
pub mod table;
pub mod template;
pub mod text;
pub mod theme;
pub mod writer;

pub use assembler::{Assembler, AssemblyObserver, LogObserver, PageBuilder, PageDescriptor};
pub use geometry::{Frame, Rect};
pub use model::{Deck, DeckMetadata, FontPair, PageNumber, SlideLayout};
pub use page::{Canvas, Element, Page, PageKind, Side};
pub use palette::{Paint, Palette, Role};
pub use table::{CellStyle, Table, TableCell, TableRow, TableStyle};
pub use text::{Emphasis, HAlign, RichText, TextRun, TextStyle, VAnchor};
pub use theme::Theme;
pub use writer::DocumentWriter;
