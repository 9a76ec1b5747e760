//! Page skeletons: the standard content page and the cover/closer page.
//!
//! Both return an open [`Canvas`] with the fixed layer already placed, so
//! anything the caller adds afterwards is drawn on top of it.

use crate::common::Result;
use crate::common::unit::Length;
use crate::deck::geometry::Rect;
use crate::deck::model::PageNumber;
use crate::deck::page::{Canvas, PageKind, Side};
use crate::deck::palette::Role;
use crate::deck::render::{place_rectangle, place_text};
use crate::deck::text::HAlign;
use crate::deck::theme::Theme;

pub const ACCENT_BAR_HEIGHT: f64 = 0.15;
pub const SIDEBAR_WIDTH: f64 = 0.08;
pub const TITLE_SIZE_PT: f64 = 28.0;
pub const FOOTER_SIZE_PT: f64 = 12.0;

/// Distance from the footer top to the bottom page edge.
const FOOTER_OFFSET: f64 = 0.425;
/// Cover panel width as a share of the page width.
const COVER_PANEL_SHARE: f64 = 0.4;
const STRIPE_WIDTH: f64 = 0.3;

pub fn title_rect() -> Rect {
    Rect::inches(0.4, 0.3, 9.2, 0.6)
}

pub fn underline_rect() -> Rect {
    Rect::inches(0.4, 0.85, 3.5, 0.06)
}

pub fn accent_bar_rect() -> Rect {
    Rect::new(0.0, 0.0, Length::Pct(100.0), ACCENT_BAR_HEIGHT)
}

pub fn sidebar_rect(theme: &Theme) -> Rect {
    Rect::inches(
        0.0,
        ACCENT_BAR_HEIGHT,
        SIDEBAR_WIDTH,
        theme.page_height() - ACCENT_BAR_HEIGHT,
    )
}

pub fn footer_rect(theme: &Theme) -> Rect {
    Rect::inches(9.0, theme.page_height() - FOOTER_OFFSET, 0.8, 0.3)
}

/// Start a standard page.
///
/// Layers in order: background, top accent bar, left sidebar, then the title
/// and its underline when `title` is non-empty, then the `i/N` footer.
pub fn standard_page<'t>(theme: &'t Theme, title: Option<&str>, number: PageNumber) -> Result<Canvas<'t>> {
    let mut canvas = Canvas::new(theme, PageKind::Standard, number, Role::Background)?;

    place_rectangle(&mut canvas, accent_bar_rect(), Role::PrimaryAccent, None)?;
    place_rectangle(&mut canvas, sidebar_rect(theme), Role::SecondaryAccent, None)?;

    if let Some(title) = title.filter(|t| !t.is_empty()) {
        let style = theme.heading(TITLE_SIZE_PT, Role::BodyText).bold();
        place_text(&mut canvas, title, title_rect(), &style)?;
        place_rectangle(&mut canvas, underline_rect(), Role::PrimaryAccent, None)?;
        canvas.set_title(title);
    }

    let footer = theme
        .heading(FOOTER_SIZE_PT, Role::SecondaryAccent)
        .align(HAlign::Right);
    place_text(&mut canvas, number.to_string(), footer_rect(theme), &footer)?;

    Ok(canvas)
}

/// Horizontal extent of the cover panel on `side`, as (x, w).
pub fn cover_panel_span(theme: &Theme, side: Side) -> (f64, f64) {
    let w = theme.page_width() * COVER_PANEL_SHARE;
    match side {
        Side::Left => (0.0, w),
        Side::Right => (theme.page_width() - w, w),
    }
}

/// Start a cover or closing page: dark background, a block panel on `side`
/// and a highlight stripe at the panel's inner edge.
pub fn cover_page<'t>(theme: &'t Theme, side: Side, number: PageNumber) -> Result<Canvas<'t>> {
    let mut canvas = Canvas::new(theme, PageKind::Cover(side), number, Role::SecondaryAccent)?;

    let (panel_x, panel_w) = cover_panel_span(theme, side);
    place_rectangle(
        &mut canvas,
        Rect::new(panel_x, 0.0, panel_w, Length::Pct(100.0)),
        Role::PrimaryAccent,
        None,
    )?;

    let stripe_x = match side {
        Side::Left => panel_x + panel_w - STRIPE_WIDTH / 2.0,
        Side::Right => panel_x - STRIPE_WIDTH,
    };
    place_rectangle(
        &mut canvas,
        Rect::inches(stripe_x, 1.5, STRIPE_WIDTH, 2.5),
        Role::Highlight,
        None,
    )?;

    Ok(canvas)
}

/// Centred `i/N` marker near the bottom of the cover panel.
pub fn place_panel_marker(canvas: &mut Canvas<'_>, side: Side) -> Result<()> {
    let theme = canvas.theme();
    let (panel_x, panel_w) = cover_panel_span(theme, side);
    let rect = Rect::inches(
        panel_x + 0.3,
        theme.page_height() - FOOTER_OFFSET - 0.1,
        panel_w - 0.6,
        0.3,
    );
    let style = theme
        .heading(FOOTER_SIZE_PT, Role::InverseText)
        .align(HAlign::Center);
    let label = canvas.number().to_string();
    place_text(canvas, label, rect, &style)
}
