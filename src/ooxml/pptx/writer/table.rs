//! DrawingML tables inside a `p:graphicFrame`.
use super::shape::write_solid_fill;
use super::text::{RunProps, anchor_attr, write_paragraphs};
use crate::common::unit::pt_to_emu_f64;
use crate::deck::palette::Paint;
use crate::deck::table::{PlacedCell, PlacedTable};
use crate::ooxml::error::Result;
use crate::ooxml::opc::constants::namespace;
use std::fmt::Write as FmtWrite;

const CELL_EDGES: [&str; 4] = ["lnL", "lnR", "lnT", "lnB"];

fn write_cell_borders(xml: &mut String, border: Option<&(f64, Paint)>) -> Result<()> {
    match border {
        Some((weight_pt, paint)) => {
            let hex = paint.color.to_hex();
            let w = pt_to_emu_f64(*weight_pt);
            for edge in CELL_EDGES {
                write!(xml, r#"<a:{} w="{}" cmpd="sng">"#, edge, w)?;
                write_solid_fill(xml, &hex);
                write!(xml, "</a:{}>", edge)?;
            }
        },
        None => {
            for edge in CELL_EDGES {
                write!(xml, "<a:{}><a:noFill/></a:{}>", edge, edge)?;
            }
        },
    }
    Ok(())
}

fn write_cell(xml: &mut String, cell: &PlacedCell, table: &PlacedTable) -> Result<()> {
    xml.push_str("<a:tc>");
    xml.push_str("<a:txBody><a:bodyPr/><a:lstStyle/>");
    let props = RunProps {
        font: &cell.font,
        size_pt: cell.size_pt,
        color: cell.color.color,
        emphasis: cell.emphasis,
    };
    write_paragraphs(xml, &[(cell.text.as_str(), props)], cell.align, table.line_spacing_pt)?;
    xml.push_str("</a:txBody>");

    write!(xml, r#"<a:tcPr anchor="{}">"#, anchor_attr(table.anchor))?;
    write_cell_borders(xml, table.border.as_ref())?;
    match &cell.fill {
        Some(paint) => write_solid_fill(xml, &paint.color.to_hex()),
        None => xml.push_str("<a:noFill/>"),
    }
    xml.push_str("</a:tcPr>");
    xml.push_str("</a:tc>");
    Ok(())
}

/// Write a placed table as a graphic frame.
pub(crate) fn write_table(xml: &mut String, id: u32, table: &PlacedTable) -> Result<()> {
    let mut buf = itoa::Buffer::new();

    xml.push_str("<p:graphicFrame>");
    xml.push_str("<p:nvGraphicFramePr>");
    write!(xml, r#"<p:cNvPr id="{}" name="Table {}"/>"#, id, id)?;
    xml.push_str(r#"<p:cNvGraphicFramePr><a:graphicFrameLocks noGrp="1"/></p:cNvGraphicFramePr>"#);
    xml.push_str("<p:nvPr/>");
    xml.push_str("</p:nvGraphicFramePr>");

    let frame = &table.frame;
    write!(
        xml,
        r#"<p:xfrm><a:off x="{}" y="{}"/><a:ext cx="{}" cy="{}"/></p:xfrm>"#,
        frame.x, frame.y, frame.cx, frame.cy
    )?;

    xml.push_str("<a:graphic>");
    write!(xml, r#"<a:graphicData uri="{}">"#, namespace::DML_TABLE)?;
    xml.push_str("<a:tbl>");
    xml.push_str("<a:tblPr/>");

    xml.push_str("<a:tblGrid>");
    for width in &table.col_widths_emu {
        xml.push_str(r#"<a:gridCol w=""#);
        xml.push_str(buf.format(*width));
        xml.push_str(r#""/>"#);
    }
    xml.push_str("</a:tblGrid>");

    for row in &table.rows {
        xml.push_str(r#"<a:tr h=""#);
        xml.push_str(buf.format(table.row_height_emu));
        xml.push_str(r#"">"#);
        for cell in row {
            write_cell(xml, cell, table)?;
        }
        xml.push_str("</a:tr>");
    }

    xml.push_str("</a:tbl>");
    xml.push_str("</a:graphicData>");
    xml.push_str("</a:graphic>");
    xml.push_str("</p:graphicFrame>");
    Ok(())
}
