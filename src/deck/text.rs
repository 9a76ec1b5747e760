//! Styled text: block defaults, runs with per-run overrides, and rich text.
//!
//! A text block is drawn from a [`TextStyle`] holding the defaults and a
//! [`RichText`] holding one or more [`TextRun`]s. Each run may override face,
//! size, colour role and individual emphasis flags; everything it leaves unset
//! falls through to the block style. A literal `'\n'` inside a run is a line
//! break.

use crate::common::{Error, Result};
use crate::deck::palette::{Paint, Palette, Role};
use bitflags::bitflags;
use smallvec::SmallVec;

bitflags! {
    /// Character emphasis.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Emphasis: u8 {
        const BOLD = 0x01;
        const ITALIC = 0x02;
        const UNDERLINE = 0x04;
    }
}

/// Horizontal paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HAlign {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

/// Vertical anchoring of text inside its box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VAnchor {
    #[default]
    Top,
    Middle,
    Bottom,
}

/// Block-level text defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub font: String,
    pub size_pt: f64,
    pub color: Role,
    pub emphasis: Emphasis,
    pub align: HAlign,
    pub anchor: VAnchor,
    /// Exact line pitch in points; `None` keeps single spacing
    pub line_spacing_pt: Option<f64>,
}

impl TextStyle {
    pub fn new(font: &str, size_pt: f64, color: Role) -> Self {
        Self {
            font: font.to_string(),
            size_pt,
            color,
            emphasis: Emphasis::empty(),
            align: HAlign::Left,
            anchor: VAnchor::Top,
            line_spacing_pt: None,
        }
    }

    pub fn bold(mut self) -> Self {
        self.emphasis |= Emphasis::BOLD;
        self
    }

    pub fn italic(mut self) -> Self {
        self.emphasis |= Emphasis::ITALIC;
        self
    }

    pub fn align(mut self, align: HAlign) -> Self {
        self.align = align;
        self
    }

    pub fn anchor(mut self, anchor: VAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn line_spacing(mut self, pt: f64) -> Self {
        self.line_spacing_pt = Some(pt);
        self
    }

    pub fn color(mut self, color: Role) -> Self {
        self.color = color;
        self
    }
}

/// Per-run formatting overrides. Unset fields inherit from the block.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RunStyle {
    pub font: Option<String>,
    pub size_pt: Option<f64>,
    pub color: Option<Role>,
    /// Flag values for the bits present in `emphasis_mask`
    pub emphasis: Emphasis,
    pub emphasis_mask: Emphasis,
}

impl RunStyle {
    fn set(mut self, flag: Emphasis, on: bool) -> Self {
        self.emphasis_mask |= flag;
        self.emphasis.set(flag, on);
        self
    }

    pub fn bold(self, on: bool) -> Self {
        self.set(Emphasis::BOLD, on)
    }

    pub fn italic(self, on: bool) -> Self {
        self.set(Emphasis::ITALIC, on)
    }

    pub fn underline(self, on: bool) -> Self {
        self.set(Emphasis::UNDERLINE, on)
    }

    pub fn color(mut self, role: Role) -> Self {
        self.color = Some(role);
        self
    }

    pub fn font(mut self, font: &str) -> Self {
        self.font = Some(font.to_string());
        self
    }

    pub fn size(mut self, size_pt: f64) -> Self {
        self.size_pt = Some(size_pt);
        self
    }

    /// Effective emphasis given the block default.
    pub fn apply_emphasis(&self, base: Emphasis) -> Emphasis {
        (base - self.emphasis_mask) | (self.emphasis & self.emphasis_mask)
    }
}

/// A run of text sharing one set of overrides.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub style: RunStyle,
}

impl TextRun {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: RunStyle::default(),
        }
    }

    pub fn styled(text: impl Into<String>, style: RunStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// A run forced bold regardless of the block default.
    pub fn bold(text: impl Into<String>) -> Self {
        Self::styled(text, RunStyle::default().bold(true))
    }
}

/// Ordered runs making up one text block.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RichText {
    runs: SmallVec<[TextRun; 4]>,
}

impl RichText {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: append a run.
    pub fn run(mut self, run: TextRun) -> Self {
        self.runs.push(run);
        self
    }

    /// Builder method: append an unstyled run.
    pub fn plain(self, text: impl Into<String>) -> Self {
        self.run(TextRun::new(text))
    }

    /// Builder method: append a bold run.
    pub fn bold(self, text: impl Into<String>) -> Self {
        self.run(TextRun::bold(text))
    }

    pub fn runs(&self) -> &[TextRun] {
        &self.runs
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Concatenated text of all runs.
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    /// Resolve every run against the block style and palette.
    pub(crate) fn resolve(&self, style: &TextStyle, palette: &Palette) -> Result<Vec<ResolvedRun>> {
        self.runs
            .iter()
            .map(|run| ResolvedRun::resolve(run, style, palette))
            .collect()
    }
}

impl From<&str> for RichText {
    fn from(text: &str) -> Self {
        RichText::new().plain(text)
    }
}

impl From<String> for RichText {
    fn from(text: String) -> Self {
        RichText::new().plain(text)
    }
}

impl From<TextRun> for RichText {
    fn from(run: TextRun) -> Self {
        RichText::new().run(run)
    }
}

impl From<Vec<TextRun>> for RichText {
    fn from(runs: Vec<TextRun>) -> Self {
        Self {
            runs: SmallVec::from_vec(runs),
        }
    }
}

/// A font size must come out as a positive, finite number of points.
pub(crate) fn checked_size(size_pt: f64) -> Result<f64> {
    if size_pt.is_finite() && size_pt > 0.0 {
        Ok(size_pt)
    } else {
        Err(Error::layout(format!("font size {}pt is not positive", size_pt)))
    }
}

/// A run with every property fixed, ready for serialization.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRun {
    pub text: String,
    pub font: String,
    pub size_pt: f64,
    pub color: Paint,
    pub emphasis: Emphasis,
}

impl ResolvedRun {
    fn resolve(run: &TextRun, style: &TextStyle, palette: &Palette) -> Result<Self> {
        Ok(Self {
            text: run.text.clone(),
            font: run.style.font.clone().unwrap_or_else(|| style.font.clone()),
            size_pt: checked_size(run.style.size_pt.unwrap_or(style.size_pt))?,
            color: palette.paint(run.style.color.unwrap_or(style.color))?,
            emphasis: run.style.apply_emphasis(style.emphasis),
        })
    }

    #[inline]
    pub fn is_bold(&self) -> bool {
        self.emphasis.contains(Emphasis::BOLD)
    }

    #[inline]
    pub fn is_italic(&self) -> bool {
        self.emphasis.contains(Emphasis::ITALIC)
    }
}
