//! Deck-level model: metadata, slide layout and the finished deck.

use crate::common::unit::{EMUS_PER_INCH, inches_to_emu};
use crate::deck::page::Page;
use crate::deck::theme::Theme;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a page within the deck, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageNumber {
    pub index: usize,
    pub total: usize,
}

impl PageNumber {
    pub const fn new(index: usize, total: usize) -> Self {
        Self { index, total }
    }

    #[inline]
    pub fn is_first(&self) -> bool {
        self.index == 1
    }

    #[inline]
    pub fn is_last(&self) -> bool {
        self.index == self.total
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.index, self.total)
    }
}

/// Slide aspect ratio. All layouts are ten inches wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SlideLayout {
    #[default]
    #[serde(rename = "16x9")]
    Wide16x9,
    #[serde(rename = "16x10")]
    Wide16x10,
    #[serde(rename = "4x3")]
    Standard4x3,
}

impl SlideLayout {
    pub fn width_in(&self) -> f64 {
        10.0
    }

    pub fn height_in(&self) -> f64 {
        match self {
            SlideLayout::Wide16x9 => 5.625,
            SlideLayout::Wide16x10 => 6.25,
            SlideLayout::Standard4x3 => 7.5,
        }
    }

    pub fn width_emu(&self) -> i64 {
        10 * EMUS_PER_INCH
    }

    pub fn height_emu(&self) -> i64 {
        inches_to_emu(self.height_in())
    }

    /// Value of the `type` attribute of `p:sldSz`.
    pub fn ooxml_type(&self) -> &'static str {
        match self {
            SlideLayout::Wide16x9 => "screen16x9",
            SlideLayout::Wide16x10 => "screen16x10",
            SlideLayout::Standard4x3 => "screen4x3",
        }
    }

    /// Human readable format name, as shown in document properties.
    pub fn format_name(&self) -> &'static str {
        match self {
            SlideLayout::Wide16x9 => "On-screen Show (16:9)",
            SlideLayout::Wide16x10 => "On-screen Show (16:10)",
            SlideLayout::Standard4x3 => "On-screen Show (4:3)",
        }
    }
}

/// Heading and body font faces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontPair {
    /// Monospaced face used for titles, figures and snippets
    pub heading: String,
    /// Face used for running text
    pub body: String,
}

impl Default for FontPair {
    fn default() -> Self {
        Self {
            heading: "Courier New".to_string(),
            body: "Verdana".to_string(),
        }
    }
}

/// Document metadata, fixed before the first page is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckMetadata {
    pub title: String,
    pub author: String,
    pub subject: String,
    #[serde(default)]
    pub layout: SlideLayout,
    #[serde(default)]
    pub fonts: FontPair,
}

impl Default for DeckMetadata {
    fn default() -> Self {
        Self {
            title: "Przydział pracowników do projektu IT".to_string(),
            author: "Student".to_string(),
            subject: "Metody Optymalizacji".to_string(),
            layout: SlideLayout::default(),
            fonts: FontPair::default(),
        }
    }
}

/// A finished presentation: metadata, the theme it was built with, and its
/// pages in presentation order.
///
/// Only the assembler creates decks, and a deck cannot be changed afterwards.
#[derive(Debug, Clone)]
pub struct Deck {
    metadata: DeckMetadata,
    theme: Theme,
    pages: Vec<Page>,
}

impl Deck {
    pub(crate) fn new(metadata: DeckMetadata, theme: Theme, pages: Vec<Page>) -> Self {
        Self {
            metadata,
            theme,
            pages,
        }
    }

    pub fn metadata(&self) -> &DeckMetadata {
        &self.metadata
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_number_display() {
        let n = PageNumber::new(4, 12);
        assert_eq!(n.to_string(), "4/12");
        assert!(!n.is_first());
        assert!(PageNumber::new(12, 12).is_last());
    }

    #[test]
    fn test_layout_dimensions() {
        assert_eq!(SlideLayout::Wide16x9.width_emu(), 9_144_000);
        assert_eq!(SlideLayout::Wide16x9.height_emu(), 5_143_500);
        assert_eq!(SlideLayout::Standard4x3.height_emu(), 6_858_000);
        assert_eq!(SlideLayout::Wide16x10.ooxml_type(), "screen16x10");
    }
}
