//! `ppt/presentation.xml` serialization.
use crate::deck::model::SlideLayout;
use crate::ooxml::error::Result;
use crate::ooxml::opc::constants::namespace;
use std::fmt::Write as FmtWrite;

/// First id of the master/layout id space.
pub(crate) const FIRST_MASTER_ID: u32 = 2_147_483_648;

/// First slide id; ids below 256 are reserved.
pub(crate) const FIRST_SLIDE_ID: u32 = 256;

/// Portrait letter-size notes page.
const NOTES_SIZE: (i64, i64) = (6_858_000, 9_144_000);

/// Generate `presentation.xml`.
///
/// `slide_rel_ids` are the presentation part's relationship ids for the
/// slides, in page order.
pub fn presentation_xml(layout: SlideLayout, master_rel_id: &str, slide_rel_ids: &[String]) -> Result<String> {
    let mut xml = String::with_capacity(1024 + 48 * slide_rel_ids.len());

    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    write!(
        xml,
        r#"<p:presentation xmlns:a="{}" xmlns:r="{}" xmlns:p="{}" saveSubsetFonts="1">"#,
        namespace::DML_MAIN,
        namespace::OFC_RELATIONSHIPS,
        namespace::PML_MAIN
    )?;

    xml.push_str("<p:sldMasterIdLst>");
    write!(
        xml,
        r#"<p:sldMasterId id="{}" r:id="{}"/>"#,
        FIRST_MASTER_ID, master_rel_id
    )?;
    xml.push_str("</p:sldMasterIdLst>");

    if !slide_rel_ids.is_empty() {
        xml.push_str("<p:sldIdLst>");
        for (slide_id, rel_id) in (FIRST_SLIDE_ID..).zip(slide_rel_ids) {
            write!(xml, r#"<p:sldId id="{}" r:id="{}"/>"#, slide_id, rel_id)?;
        }
        xml.push_str("</p:sldIdLst>");
    }

    write!(
        xml,
        r#"<p:sldSz cx="{}" cy="{}" type="{}"/>"#,
        layout.width_emu(),
        layout.height_emu(),
        layout.ooxml_type()
    )?;
    write!(xml, r#"<p:notesSz cx="{}" cy="{}"/>"#, NOTES_SIZE.0, NOTES_SIZE.1)?;
    xml.push_str("</p:presentation>");

    Ok(xml)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slide_ids_and_size() {
        let rels = vec!["rId2".to_string(), "rId3".to_string()];
        let xml = presentation_xml(SlideLayout::Wide16x9, "rId1", &rels).unwrap();
        assert!(xml.contains(r#"<p:sldMasterId id="2147483648" r:id="rId1"/>"#));
        assert!(xml.contains(r#"<p:sldId id="256" r:id="rId2"/><p:sldId id="257" r:id="rId3"/>"#));
        assert!(xml.contains(r#"<p:sldSz cx="9144000" cy="5143500" type="screen16x9"/>"#));
    }

    #[test]
    fn test_no_slide_list_for_empty_deck() {
        let xml = presentation_xml(SlideLayout::Standard4x3, "rId1", &[]).unwrap();
        assert!(!xml.contains("sldIdLst"));
        assert!(xml.contains(r#"cy="6858000" type="screen4x3""#));
    }
}
