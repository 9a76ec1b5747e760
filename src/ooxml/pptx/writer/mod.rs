//! Part serializers for generated presentations.
//!
//! Each function renders one XML part from the finished deck model. Nothing
//! here decides layout: frames, colours and fonts arrive fully resolved.

pub mod pres;
pub(crate) mod shape;
pub mod slide;
pub(crate) mod table;
pub(crate) mod text;

pub use pres::presentation_xml;
pub use slide::slide_xml;
