//! `p:sp` serialization for filled rectangles and text boxes.
use super::text::{RunProps, anchor_attr, write_paragraphs};
use crate::deck::geometry::Frame;
use crate::deck::page::{Outline, Shape, TextBlock};
use crate::ooxml::error::Result;
use std::fmt::Write as FmtWrite;

/// Write `<a:xfrm>` for a frame.
pub(crate) fn write_xfrm(xml: &mut String, frame: &Frame) {
    let mut buf = itoa::Buffer::new();
    xml.push_str(r#"<a:xfrm><a:off x=""#);
    xml.push_str(buf.format(frame.x));
    xml.push_str(r#"" y=""#);
    xml.push_str(buf.format(frame.y));
    xml.push_str(r#""/><a:ext cx=""#);
    xml.push_str(buf.format(frame.cx));
    xml.push_str(r#"" cy=""#);
    xml.push_str(buf.format(frame.cy));
    xml.push_str(r#""/></a:xfrm>"#);
}

pub(crate) fn write_solid_fill(xml: &mut String, hex: &str) {
    xml.push_str(r#"<a:solidFill><a:srgbClr val=""#);
    xml.push_str(hex);
    xml.push_str(r#""/></a:solidFill>"#);
}

fn write_outline(xml: &mut String, outline: Option<&Outline>) -> Result<()> {
    match outline {
        Some(outline) => {
            write!(
                xml,
                r#"<a:ln w="{}">"#,
                crate::common::unit::pt_to_emu_f64(outline.weight_pt)
            )?;
            write_solid_fill(xml, &outline.paint.color.to_hex());
            xml.push_str("</a:ln>");
        },
        None => xml.push_str("<a:ln><a:noFill/></a:ln>"),
    }
    Ok(())
}

fn write_nv_sp_pr(xml: &mut String, id: u32, name: &str, text_box: bool) -> Result<()> {
    xml.push_str("<p:nvSpPr>");
    write!(xml, r#"<p:cNvPr id="{}" name="{} {}"/>"#, id, name, id)?;
    if text_box {
        xml.push_str(r#"<p:cNvSpPr txBox="1"/>"#);
    } else {
        xml.push_str("<p:cNvSpPr/>");
    }
    xml.push_str("<p:nvPr/>");
    xml.push_str("</p:nvSpPr>");
    Ok(())
}

/// A filled rectangle with an optional outline.
pub(crate) fn write_rectangle(xml: &mut String, id: u32, shape: &Shape) -> Result<()> {
    xml.push_str("<p:sp>");
    write_nv_sp_pr(xml, id, "Rectangle", false)?;

    xml.push_str("<p:spPr>");
    write_xfrm(xml, &shape.frame);
    xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
    write_solid_fill(xml, &shape.fill.color.to_hex());
    write_outline(xml, shape.outline.as_ref())?;
    xml.push_str("</p:spPr>");

    // Empty body keeps the shape editable as a text container.
    xml.push_str(r#"<p:txBody><a:bodyPr rtlCol="0" anchor="ctr"/><a:lstStyle/><a:p/></p:txBody>"#);
    xml.push_str("</p:sp>");
    Ok(())
}

/// A transparent, borderless text box.
pub(crate) fn write_text_box(xml: &mut String, id: u32, block: &TextBlock) -> Result<()> {
    xml.push_str("<p:sp>");
    write_nv_sp_pr(xml, id, "TextBox", true)?;

    xml.push_str("<p:spPr>");
    write_xfrm(xml, &block.frame);
    xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
    xml.push_str("<a:noFill/>");
    xml.push_str("</p:spPr>");

    xml.push_str("<p:txBody>");
    write!(
        xml,
        r#"<a:bodyPr wrap="square" rtlCol="0" anchor="{}"><a:noAutofit/></a:bodyPr>"#,
        anchor_attr(block.anchor)
    )?;
    xml.push_str("<a:lstStyle/>");
    let runs: Vec<(&str, RunProps<'_>)> = block
        .runs
        .iter()
        .map(|run| (run.text.as_str(), RunProps::from(run)))
        .collect();
    write_paragraphs(xml, &runs, block.align, block.line_spacing_pt)?;
    xml.push_str("</p:txBody>");

    xml.push_str("</p:sp>");
    Ok(())
}
