//! Slide part serialization.
use super::shape::{write_rectangle, write_solid_fill, write_text_box};
use super::table::write_table;
use crate::common::xml::escape_xml;
use crate::deck::page::{Element, Page};
use crate::ooxml::error::Result;
use crate::ooxml::opc::constants::namespace;
use std::fmt::Write as FmtWrite;

/// Id of the group shape that roots every shape tree.
const TREE_ROOT_ID: u32 = 1;

/// Serialize one page as `ppt/slides/slideN.xml`.
///
/// Elements are written in placement order, so later elements paint over
/// earlier ones. Shape ids start after the tree root and increase by one.
pub fn slide_xml(page: &Page) -> Result<String> {
    let mut xml = String::with_capacity(8192);

    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    write!(
        xml,
        r#"<p:sld xmlns:a="{}" xmlns:r="{}" xmlns:p="{}">"#,
        namespace::DML_MAIN,
        namespace::OFC_RELATIONSHIPS,
        namespace::PML_MAIN
    )?;

    match page.title() {
        Some(title) => write!(xml, r#"<p:cSld name="{}">"#, escape_xml(title))?,
        None => xml.push_str("<p:cSld>"),
    }

    xml.push_str("<p:bg><p:bgPr>");
    write_solid_fill(&mut xml, &page.background().color.to_hex());
    xml.push_str("<a:effectLst/></p:bgPr></p:bg>");

    xml.push_str("<p:spTree>");
    xml.push_str("<p:nvGrpSpPr>");
    write!(xml, r#"<p:cNvPr id="{}" name=""/>"#, TREE_ROOT_ID)?;
    xml.push_str("<p:cNvGrpSpPr/>");
    xml.push_str("<p:nvPr/>");
    xml.push_str("</p:nvGrpSpPr>");
    xml.push_str("<p:grpSpPr>");
    xml.push_str(r#"<a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/><a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm>"#);
    xml.push_str("</p:grpSpPr>");

    for (id, element) in (TREE_ROOT_ID + 1..).zip(page.elements()) {
        match element {
            Element::Shape(shape) => write_rectangle(&mut xml, id, shape)?,
            Element::Text(block) => write_text_box(&mut xml, id, block)?,
            Element::Table(table) => write_table(&mut xml, id, table)?,
        }
    }

    xml.push_str("</p:spTree>");
    xml.push_str("</p:cSld>");
    xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>");
    xml.push_str("</p:sld>");

    Ok(xml)
}
