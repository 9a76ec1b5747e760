//! Placed elements and the append-only page they are placed on.
//!
//! A [`Canvas`] is a page under construction. Renderers append to it and
//! nothing else can touch its element list; [`Canvas::finish`] seals it into an
//! immutable [`Page`]. Elements are kept in placement order, which is also the
//! drawing order: later elements cover earlier ones.

use crate::common::Result;
use crate::deck::geometry::{Frame, Rect};
use crate::deck::model::PageNumber;
use crate::deck::palette::{Paint, Role};
use crate::deck::table::PlacedTable;
use crate::deck::text::{HAlign, ResolvedRun, VAnchor};
use crate::deck::theme::Theme;

/// Shape outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outline {
    pub weight_pt: f64,
    pub paint: Paint,
}

/// A filled rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub rect: Rect,
    pub frame: Frame,
    pub fill: Paint,
    pub outline: Option<Outline>,
}

/// A positioned block of styled runs.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    pub rect: Rect,
    pub frame: Frame,
    pub runs: Vec<ResolvedRun>,
    pub align: HAlign,
    pub anchor: VAnchor,
    pub line_spacing_pt: Option<f64>,
}

impl TextBlock {
    /// Text of all runs joined.
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Shape(Shape),
    Text(TextBlock),
    Table(PlacedTable),
}

impl Element {
    pub fn frame(&self) -> Frame {
        match self {
            Element::Shape(shape) => shape.frame,
            Element::Text(text) => text.frame,
            Element::Table(table) => table.frame,
        }
    }

    pub fn as_shape(&self) -> Option<&Shape> {
        match self {
            Element::Shape(shape) => Some(shape),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&TextBlock> {
        match self {
            Element::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_table(&self) -> Option<&PlacedTable> {
        match self {
            Element::Table(table) => Some(table),
            _ => None,
        }
    }
}

/// Which side of a cover page carries the block panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Standard,
    Cover(Side),
}

/// A page under construction.
#[derive(Debug)]
pub struct Canvas<'t> {
    theme: &'t Theme,
    kind: PageKind,
    number: PageNumber,
    title: Option<String>,
    background: Paint,
    elements: Vec<Element>,
}

impl<'t> Canvas<'t> {
    /// An empty page filled with `background`.
    pub fn new(theme: &'t Theme, kind: PageKind, number: PageNumber, background: Role) -> Result<Self> {
        Ok(Self {
            theme,
            kind,
            number,
            title: None,
            background: theme.palette.paint(background)?,
            elements: Vec::new(),
        })
    }

    #[inline]
    pub fn theme(&self) -> &'t Theme {
        self.theme
    }

    #[inline]
    pub fn number(&self) -> PageNumber {
        self.number
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub(crate) fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    pub(crate) fn set_title(&mut self, title: &str) {
        self.title = Some(title.to_string());
    }

    /// Seal the page.
    pub fn finish(self) -> Page {
        Page {
            kind: self.kind,
            number: self.number,
            title: self.title,
            background: self.background,
            elements: self.elements,
        }
    }
}

/// A finished page.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    kind: PageKind,
    number: PageNumber,
    title: Option<String>,
    background: Paint,
    elements: Vec<Element>,
}

impl Page {
    pub fn kind(&self) -> PageKind {
        self.kind
    }

    pub fn number(&self) -> PageNumber {
        self.number
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn background(&self) -> Paint {
        self.background
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn shapes(&self) -> impl Iterator<Item = &Shape> {
        self.elements.iter().filter_map(Element::as_shape)
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextBlock> {
        self.elements.iter().filter_map(Element::as_text)
    }

    pub fn tables(&self) -> impl Iterator<Item = &PlacedTable> {
        self.elements.iter().filter_map(Element::as_table)
    }

    /// Position of the first text block whose text equals `text`.
    pub fn position_of_text(&self, text: &str) -> Option<usize> {
        self.elements
            .iter()
            .position(|e| e.as_text().is_some_and(|t| t.text() == text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Error;
    use crate::deck::palette::Palette;
    use crate::deck::model::{FontPair, SlideLayout};

    #[test]
    fn test_canvas_background_requires_role() {
        let theme = Theme::new(Palette::empty(), FontPair::default(), SlideLayout::default());
        let err = Canvas::new(&theme, PageKind::Standard, PageNumber::new(1, 1), Role::Background).unwrap_err();
        assert!(matches!(err, Error::UndefinedRole(Role::Background)));
    }

    #[test]
    fn test_finish_keeps_number_and_kind() {
        let theme = Theme::default();
        let canvas = Canvas::new(&theme, PageKind::Cover(Side::Right), PageNumber::new(4, 4), Role::SecondaryAccent).unwrap();
        let page = canvas.finish();
        assert_eq!(page.number(), PageNumber::new(4, 4));
        assert_eq!(page.kind(), PageKind::Cover(Side::Right));
        assert_eq!(page.background().role, Role::SecondaryAccent);
        assert!(page.elements().is_empty());
        assert_eq!(page.title(), None);
    }
}
