//! Primitive renderers: one element per call, appended to a canvas.
//!
//! Every renderer resolves its rect against the canvas layout and its roles
//! against the canvas palette before touching the canvas, so a failed call
//! leaves the page unchanged.

use crate::common::{Error, Result};
use crate::deck::geometry::Rect;
use crate::deck::page::{Canvas, Element, Outline, Shape, TextBlock};
use crate::deck::palette::Role;
use crate::deck::table::{BorderSpec, Table, TableStyle};
use crate::deck::text::{RichText, TextStyle};
use log::trace;

/// Append a filled rectangle. A border with zero weight is not drawn.
pub fn place_rectangle(canvas: &mut Canvas<'_>, rect: Rect, fill: Role, border: Option<BorderSpec>) -> Result<()> {
    let theme = canvas.theme();
    let frame = rect.resolve(theme.layout)?;
    let fill = theme.palette.paint(fill)?;
    let outline = match border {
        Some(spec) if spec.weight_pt > 0.0 => Some(Outline {
            weight_pt: spec.weight_pt,
            paint: theme.palette.paint(spec.role)?,
        }),
        _ => None,
    };

    trace!("rectangle {:?} fill {}", frame, fill.role);
    canvas.push(Element::Shape(Shape {
        rect,
        frame,
        fill,
        outline,
    }));
    Ok(())
}

/// Append a text block drawn with `style` as the defaults for every run.
pub fn place_text(canvas: &mut Canvas<'_>, text: impl Into<RichText>, rect: Rect, style: &TextStyle) -> Result<()> {
    let text = text.into();
    if text.is_empty() {
        return Err(Error::layout("text block has no runs"));
    }
    let theme = canvas.theme();
    let frame = rect.resolve(theme.layout)?;
    let runs = text.resolve(style, &theme.palette)?;

    trace!("text {:?} ({} runs)", frame, runs.len());
    canvas.push(Element::Text(TextBlock {
        rect,
        frame,
        runs,
        align: style.align,
        anchor: style.anchor,
        line_spacing_pt: style.line_spacing_pt,
    }));
    Ok(())
}

/// Append a table. Column widths come from the table's hints or are spread
/// evenly across `rect`.
pub fn place_table(canvas: &mut Canvas<'_>, table: &Table, rect: Rect, style: &TableStyle) -> Result<()> {
    let theme = canvas.theme();
    let frame = rect.resolve(theme.layout)?;
    let placed = table.place(frame, style, &theme.palette)?;

    trace!("table {:?} {}x{}", frame, placed.row_count(), placed.column_count());
    canvas.push(Element::Table(placed));
    Ok(())
}
