//! Content blocks: fixed rectangle-plus-text composites reused across pages.
use crate::common::Result;
use crate::deck::geometry::Rect;
use crate::deck::page::Canvas;
use crate::deck::palette::Role;
use crate::deck::render::{place_rectangle, place_text};
use crate::deck::table::BorderSpec;
use crate::deck::text::{HAlign, RichText, VAnchor};

pub const CARD_BORDER_PT: f64 = 3.0;
pub const BLOCK_BORDER_PT: f64 = 2.0;
pub const CODE_INSET_X: f64 = 0.15;
pub const CODE_INSET_Y: f64 = 0.1;
pub const CODE_SIZE_PT: f64 = 11.0;
pub const HIGHLIGHT_SIZE_PT: f64 = 18.0;

/// Bordered panel on the surface colour. Callers overlay it with content.
pub fn add_card(canvas: &mut Canvas<'_>, rect: Rect, border: Role) -> Result<()> {
    place_rectangle(
        canvas,
        rect,
        Role::Surface,
        Some(BorderSpec {
            weight_pt: CARD_BORDER_PT,
            role: border,
        }),
    )
}

/// Dark panel with inset, top-anchored monospaced text.
pub fn add_code_block(canvas: &mut Canvas<'_>, text: impl Into<RichText>, rect: Rect) -> Result<()> {
    // Resolve the inset before placing anything so a collapsed rect leaves the page as is.
    let inner = rect.inset(CODE_INSET_X, CODE_INSET_Y)?;
    inner.resolve(canvas.theme().layout)?;

    place_rectangle(
        canvas,
        rect,
        Role::SecondaryAccent,
        Some(BorderSpec {
            weight_pt: BLOCK_BORDER_PT,
            role: Role::Border,
        }),
    )?;
    let style = canvas
        .theme()
        .heading(CODE_SIZE_PT, Role::InverseText)
        .anchor(VAnchor::Top);
    place_text(canvas, text, inner, &style)
}

/// Highlight-filled box with bold text centred over the whole rect.
pub fn add_highlight_box(canvas: &mut Canvas<'_>, text: impl Into<RichText>, rect: Rect) -> Result<()> {
    place_rectangle(
        canvas,
        rect,
        Role::Highlight,
        Some(BorderSpec {
            weight_pt: BLOCK_BORDER_PT,
            role: Role::Border,
        }),
    )?;
    let style = canvas
        .theme()
        .heading(HIGHLIGHT_SIZE_PT, Role::BodyText)
        .bold()
        .align(HAlign::Center)
        .anchor(VAnchor::Middle);
    place_text(canvas, text, rect, &style)
}
