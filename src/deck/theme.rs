//! The theme every renderer and builder receives explicitly.

use crate::deck::model::{DeckMetadata, FontPair, SlideLayout};
use crate::deck::palette::{Palette, Role};
use crate::deck::text::TextStyle;

/// Palette, font faces and page size of one deck.
///
/// Passed by reference into every renderer call so that decks with different
/// themes can be built side by side.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub palette: Palette,
    pub fonts: FontPair,
    pub layout: SlideLayout,
}

impl Theme {
    pub fn new(palette: Palette, fonts: FontPair, layout: SlideLayout) -> Self {
        Self {
            palette,
            fonts,
            layout,
        }
    }

    /// Theme for the fonts and layout named in `metadata`.
    pub fn for_metadata(palette: Palette, metadata: &DeckMetadata) -> Self {
        Self::new(palette, metadata.fonts.clone(), metadata.layout)
    }

    #[inline]
    pub fn page_width(&self) -> f64 {
        self.layout.width_in()
    }

    #[inline]
    pub fn page_height(&self) -> f64 {
        self.layout.height_in()
    }

    /// Text style in the heading (monospaced) face.
    pub fn heading(&self, size_pt: f64, color: Role) -> TextStyle {
        TextStyle::new(&self.fonts.heading, size_pt, color)
    }

    /// Text style in the body face.
    pub fn body(&self, size_pt: f64, color: Role) -> TextStyle {
        TextStyle::new(&self.fonts.body, size_pt, color)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(Palette::default(), FontPair::default(), SlideLayout::default())
    }
}
