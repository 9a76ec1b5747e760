//! Tables: cells, rows, per-cell style overrides and placement.
use crate::common::unit::{EMUS_PER_INCH, inches_to_emu};
use crate::common::{Error, Result};
use crate::deck::geometry::Frame;
use crate::deck::palette::{Paint, Palette, Role};
use crate::deck::text::{Emphasis, HAlign, TextStyle, VAnchor, checked_size};

/// Tolerance for explicit column widths against the table width.
const WIDTH_TOLERANCE_EMU: i64 = EMUS_PER_INCH / 100;

/// Overrides a single cell applies on top of the table style.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CellStyle {
    pub fill: Option<Role>,
    pub color: Option<Role>,
    pub emphasis: Option<Emphasis>,
    pub align: Option<HAlign>,
}

impl CellStyle {
    /// Header convention used by the shipped deck: dark fill, inverse bold text.
    pub fn header() -> Self {
        Self {
            fill: Some(Role::HeaderFill),
            color: Some(Role::InverseText),
            emphasis: Some(Emphasis::BOLD),
            align: None,
        }
    }

    pub fn fill(mut self, role: Role) -> Self {
        self.fill = Some(role);
        self
    }

    pub fn color(mut self, role: Role) -> Self {
        self.color = Some(role);
        self
    }

    pub fn bold(mut self) -> Self {
        self.emphasis = Some(self.emphasis.unwrap_or(Emphasis::empty()) | Emphasis::BOLD);
        self
    }

    pub fn align(mut self, align: HAlign) -> Self {
        self.align = Some(align);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TableCell {
    Plain(String),
    Styled { value: String, style: CellStyle },
}

impl TableCell {
    pub fn styled(value: impl Into<String>, style: CellStyle) -> Self {
        TableCell::Styled {
            value: value.into(),
            style,
        }
    }

    pub fn header(value: impl Into<String>) -> Self {
        Self::styled(value, CellStyle::header())
    }

    pub fn value(&self) -> &str {
        match self {
            TableCell::Plain(value) => value,
            TableCell::Styled { value, .. } => value,
        }
    }

    pub fn style(&self) -> Option<&CellStyle> {
        match self {
            TableCell::Plain(_) => None,
            TableCell::Styled { style, .. } => Some(style),
        }
    }
}

impl From<&str> for TableCell {
    fn from(value: &str) -> Self {
        TableCell::Plain(value.to_string())
    }
}

impl From<String> for TableCell {
    fn from(value: String) -> Self {
        TableCell::Plain(value)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
}

impl TableRow {
    pub fn new(cells: Vec<TableCell>) -> Self {
        Self { cells }
    }

    /// Row of plain cells.
    pub fn plain<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(values.into_iter().map(|v| TableCell::Plain(v.into())).collect())
    }

    /// Row where every cell uses the same style.
    pub fn styled<I, S>(values: I, style: CellStyle) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            values
                .into_iter()
                .map(|v| TableCell::styled(v, style))
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Uniform border drawn on every cell edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BorderSpec {
    pub weight_pt: f64,
    pub role: Role,
}

/// Table-wide defaults that cells may override.
#[derive(Debug, Clone, PartialEq)]
pub struct TableStyle {
    pub text: TextStyle,
    pub border: Option<BorderSpec>,
}

impl TableStyle {
    pub fn new(text: TextStyle) -> Self {
        Self { text, border: None }
    }

    pub fn border(mut self, weight_pt: f64, role: Role) -> Self {
        self.border = Some(BorderSpec { weight_pt, role });
        self
    }
}

/// Rows of cells plus optional column width hints in inches.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    rows: Vec<TableRow>,
    col_widths: Option<Vec<f64>>,
}

impl Table {
    pub fn new(rows: Vec<TableRow>) -> Self {
        Self {
            rows,
            col_widths: None,
        }
    }

    /// Builder method: explicit column widths in inches.
    pub fn col_widths(mut self, widths: impl Into<Vec<f64>>) -> Self {
        self.col_widths = Some(widths.into());
        self
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.rows.first().map_or(0, TableRow::len)
    }

    /// Check that the table is non-empty and rectangular.
    pub fn validate(&self) -> Result<()> {
        let cols = self.column_count();
        if cols == 0 {
            return Err(Error::layout("table has no rows or no columns"));
        }
        if let Some((i, row)) = self.rows.iter().enumerate().find(|(_, r)| r.len() != cols) {
            return Err(Error::layout(format!(
                "table row {} has {} cells, expected {}",
                i + 1,
                row.len(),
                cols
            )));
        }
        Ok(())
    }

    /// Column widths in EMU for a table `width` EMU wide.
    ///
    /// Rounding remainders go to the last column so the grid always sums to
    /// the table width exactly.
    pub(crate) fn column_widths_emu(&self, width: i64) -> Result<Vec<i64>> {
        let cols = self.column_count();
        let mut widths = match &self.col_widths {
            Some(hints) => {
                if hints.len() != cols {
                    return Err(Error::layout(format!(
                        "{} column widths given for {} columns",
                        hints.len(),
                        cols
                    )));
                }
                if hints.iter().any(|w| !w.is_finite() || *w <= 0.0) {
                    return Err(Error::layout("column widths must be positive"));
                }
                let widths: Vec<i64> = hints.iter().map(|w| inches_to_emu(*w)).collect();
                let total: i64 = widths.iter().sum();
                if (total - width).abs() > WIDTH_TOLERANCE_EMU {
                    return Err(Error::layout(format!(
                        "column widths sum to {} EMU, table is {} EMU wide",
                        total, width
                    )));
                }
                widths
            },
            None => vec![width / cols as i64; cols],
        };
        let total: i64 = widths.iter().sum();
        if let Some(last) = widths.last_mut() {
            *last += width - total;
        }
        Ok(widths)
    }

    /// Validate and resolve every cell against `style` and `palette`.
    pub(crate) fn place(&self, frame: Frame, style: &TableStyle, palette: &Palette) -> Result<PlacedTable> {
        self.validate()?;
        checked_size(style.text.size_pt)?;
        let col_widths_emu = self.column_widths_emu(frame.cx)?;
        let row_height_emu = frame.cy / self.rows.len() as i64;
        if row_height_emu <= 0 {
            return Err(Error::layout("table is too short for its rows"));
        }

        let border = style
            .border
            .filter(|b| b.weight_pt > 0.0)
            .map(|b| -> Result<(f64, Paint)> { Ok((b.weight_pt, palette.paint(b.role)?)) })
            .transpose()?;

        let rows = self
            .rows
            .iter()
            .map(|row| {
                row.cells
                    .iter()
                    .map(|cell| PlacedCell::resolve(cell, &style.text, palette))
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(PlacedTable {
            frame,
            col_widths_emu,
            row_height_emu,
            rows,
            border,
            anchor: style.text.anchor,
            line_spacing_pt: style.text.line_spacing_pt,
        })
    }
}

/// A cell with its final style.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedCell {
    pub text: String,
    pub fill: Option<Paint>,
    pub font: String,
    pub size_pt: f64,
    pub color: Paint,
    pub emphasis: Emphasis,
    pub align: HAlign,
}

impl PlacedCell {
    fn resolve(cell: &TableCell, base: &TextStyle, palette: &Palette) -> Result<Self> {
        let overrides = cell.style().copied().unwrap_or_default();
        Ok(Self {
            text: cell.value().to_string(),
            fill: overrides.fill.map(|role| palette.paint(role)).transpose()?,
            font: base.font.clone(),
            size_pt: base.size_pt,
            color: palette.paint(overrides.color.unwrap_or(base.color))?,
            emphasis: overrides.emphasis.unwrap_or(base.emphasis),
            align: overrides.align.unwrap_or(base.align),
        })
    }

    #[inline]
    pub fn is_bold(&self) -> bool {
        self.emphasis.contains(Emphasis::BOLD)
    }
}

/// A table resolved to EMU and concrete colours.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedTable {
    pub frame: Frame,
    pub col_widths_emu: Vec<i64>,
    pub row_height_emu: i64,
    pub rows: Vec<Vec<PlacedCell>>,
    /// Border weight in points and colour
    pub border: Option<(f64, Paint)>,
    pub anchor: VAnchor,
    pub line_spacing_pt: Option<f64>,
}

impl PlacedTable {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.col_widths_emu.len()
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&PlacedCell> {
        self.rows.get(row).and_then(|r| r.get(col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(w_in: f64, h_in: f64) -> Frame {
        Frame {
            x: 0,
            y: 0,
            cx: inches_to_emu(w_in),
            cy: inches_to_emu(h_in),
        }
    }

    fn style() -> TableStyle {
        TableStyle::new(TextStyle::new("Verdana", 10.0, Role::BodyText)).border(1.0, Role::Border)
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let table = Table::new(vec![
            TableRow::plain(["a", "b"]),
            TableRow::plain(["c"]),
        ]);
        assert!(matches!(table.validate(), Err(Error::InvalidLayout(_))));
        assert!(Table::new(vec![]).validate().is_err());
        assert!(Table::new(vec![TableRow::default()]).validate().is_err());
    }

    #[test]
    fn test_even_column_widths_fill_table() {
        let table = Table::new(vec![TableRow::plain(["a", "b", "c"])]);
        let widths = table.column_widths_emu(1_000_001).unwrap();
        assert_eq!(widths.len(), 3);
        assert_eq!(widths.iter().sum::<i64>(), 1_000_001);
    }

    #[test]
    fn test_explicit_widths_must_match_table() {
        let table = Table::new(vec![TableRow::plain(["Pracownik", "Stawka"])]).col_widths([1.5, 2.5]);
        assert!(table.column_widths_emu(inches_to_emu(4.0)).is_ok());
        assert!(table.column_widths_emu(inches_to_emu(4.5)).is_err());

        let wrong_count = Table::new(vec![TableRow::plain(["a", "b"])]).col_widths([4.0]);
        assert!(wrong_count.column_widths_emu(inches_to_emu(4.0)).is_err());
    }

    #[test]
    fn test_cell_override_does_not_leak() {
        let table = Table::new(vec![
            TableRow::new(vec![TableCell::header("Zadanie"), "Opis".into()]),
            TableRow::plain(["T1", "Backend API"]),
        ]);
        let placed = table.place(frame(4.0, 1.0), &style(), &Palette::brutalist()).unwrap();

        let header = placed.cell(0, 0).unwrap();
        assert_eq!(header.fill.map(|p| p.role), Some(Role::HeaderFill));
        assert_eq!(header.color.role, Role::InverseText);
        assert!(header.is_bold());

        let sibling = placed.cell(0, 1).unwrap();
        assert_eq!(sibling.fill, None);
        assert_eq!(sibling.color.role, Role::BodyText);
        assert!(!sibling.is_bold());

        assert_eq!(placed.row_count(), 2);
        assert_eq!(placed.column_count(), 2);
        assert_eq!(placed.cell(1, 1).unwrap().text, "Backend API");
    }

    #[test]
    fn test_zero_weight_border_is_dropped() {
        let table = Table::new(vec![TableRow::plain(["x"])]);
        let style = TableStyle::new(TextStyle::new("Verdana", 10.0, Role::BodyText)).border(0.0, Role::Border);
        let placed = table.place(frame(1.0, 1.0), &style, &Palette::brutalist()).unwrap();
        assert!(placed.border.is_none());
    }
}
