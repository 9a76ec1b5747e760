//! Fixed presentation parts: slide master, blank layout, theme and the
//! document property parts.
//!
//! Only the theme and the property parts depend on the deck; the master and
//! layout carry no placeholders since every slide positions its own shapes.

use crate::common::RGBColor;
use crate::common::xml::escape_xml;
use crate::deck::model::DeckMetadata;
use crate::deck::palette::Role;
use crate::deck::theme::Theme;
use crate::ooxml::error::Result;
use crate::ooxml::opc::constants::namespace;
use chrono::{DateTime, Utc};
use std::fmt::Write as FmtWrite;

/// Id of the single slide layout, continuing the master id space.
pub(crate) const LAYOUT_ID: u32 = 2_147_483_649;

/// Id of the built-in "Medium Style 2 - Accent 1" table style.
const DEFAULT_TABLE_STYLE: &str = "{5C22544A-7EE6-4342-B048-85BDC9FD1C3A}";

const SP_TREE_ROOT: &str = concat!(
    r#"<p:spTree><p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>"#,
    r#"<p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/><a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr>"#,
    r#"</p:spTree>"#
);

fn write_root_open(xml: &mut String, tag: &str, extra: &str) -> Result<()> {
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    write!(
        xml,
        r#"<{} xmlns:a="{}" xmlns:r="{}" xmlns:p="{}"{}>"#,
        tag,
        namespace::DML_MAIN,
        namespace::OFC_RELATIONSHIPS,
        namespace::PML_MAIN,
        extra
    )?;
    Ok(())
}

fn write_level_style(xml: &mut String, tag: &str, size_pt: u32, font_ref: &str) -> Result<()> {
    write!(
        xml,
        r#"<p:{tag}><a:lvl1pPr><a:defRPr sz="{}"><a:solidFill><a:schemeClr val="tx1"/></a:solidFill><a:latin typeface="{font_ref}"/><a:ea typeface="{font_ref}"/><a:cs typeface="{font_ref}"/></a:defRPr></a:lvl1pPr></p:{tag}>"#,
        size_pt * 100
    )?;
    Ok(())
}

/// `ppt/slideMasters/slideMaster1.xml`, pointing at the layout through
/// `layout_rel_id`.
pub fn slide_master_xml(layout_rel_id: &str) -> Result<String> {
    let mut xml = String::with_capacity(2048);
    write_root_open(&mut xml, "p:sldMaster", "")?;

    xml.push_str("<p:cSld>");
    xml.push_str(r#"<p:bg><p:bgRef idx="1001"><a:schemeClr val="bg1"/></p:bgRef></p:bg>"#);
    xml.push_str(SP_TREE_ROOT);
    xml.push_str("</p:cSld>");

    xml.push_str(concat!(
        r#"<p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" "#,
        r#"accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" hlink="hlink" folHlink="folHlink"/>"#
    ));

    xml.push_str("<p:sldLayoutIdLst>");
    write!(
        xml,
        r#"<p:sldLayoutId id="{}" r:id="{}"/>"#,
        LAYOUT_ID, layout_rel_id
    )?;
    xml.push_str("</p:sldLayoutIdLst>");

    xml.push_str("<p:txStyles>");
    write_level_style(&mut xml, "titleStyle", 44, "+mj-lt")?;
    write_level_style(&mut xml, "bodyStyle", 18, "+mn-lt")?;
    write_level_style(&mut xml, "otherStyle", 18, "+mn-lt")?;
    xml.push_str("</p:txStyles>");

    xml.push_str("</p:sldMaster>");
    Ok(xml)
}

/// `ppt/slideLayouts/slideLayout1.xml`: a blank layout.
pub fn slide_layout_xml() -> Result<String> {
    let mut xml = String::with_capacity(1024);
    write_root_open(&mut xml, "p:sldLayout", r#" type="blank" preserve="1""#)?;
    xml.push_str(r#"<p:cSld name="Blank">"#);
    xml.push_str(SP_TREE_ROOT);
    xml.push_str("</p:cSld>");
    xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>");
    xml.push_str("</p:sldLayout>");
    Ok(xml)
}

/// Theme colour slots and the palette role feeding each one.
///
/// Roles the palette leaves undefined fall back to black for the dark slots
/// and white for everything else.
const COLOR_SCHEME: [(&str, Role, RGBColor); 12] = [
    ("dk1", Role::BodyText, RGBColor::BLACK),
    ("lt1", Role::Background, RGBColor::WHITE),
    ("dk2", Role::HeaderFill, RGBColor::BLACK),
    ("lt2", Role::AltRowFill, RGBColor::WHITE),
    ("accent1", Role::PrimaryAccent, RGBColor::WHITE),
    ("accent2", Role::SecondaryAccent, RGBColor::WHITE),
    ("accent3", Role::Highlight, RGBColor::WHITE),
    ("accent4", Role::Success, RGBColor::WHITE),
    ("accent5", Role::Border, RGBColor::WHITE),
    ("accent6", Role::Surface, RGBColor::WHITE),
    ("hlink", Role::PrimaryAccent, RGBColor::WHITE),
    ("folHlink", Role::SecondaryAccent, RGBColor::WHITE),
];

const FORMAT_SCHEME: &str = concat!(
    r#"<a:fmtScheme name="Office">"#,
    r#"<a:fillStyleLst><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:fillStyleLst>"#,
    r#"<a:lnStyleLst>"#,
    r#"<a:ln w="6350" cap="flat" cmpd="sng" algn="ctr"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:prstDash val="solid"/></a:ln>"#,
    r#"<a:ln w="12700" cap="flat" cmpd="sng" algn="ctr"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:prstDash val="solid"/></a:ln>"#,
    r#"<a:ln w="19050" cap="flat" cmpd="sng" algn="ctr"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:prstDash val="solid"/></a:ln>"#,
    r#"</a:lnStyleLst>"#,
    r#"<a:effectStyleLst><a:effectStyle><a:effectLst/></a:effectStyle><a:effectStyle><a:effectLst/></a:effectStyle><a:effectStyle><a:effectLst/></a:effectStyle></a:effectStyleLst>"#,
    r#"<a:bgFillStyleLst><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:bgFillStyleLst>"#,
    r#"</a:fmtScheme>"#
);

/// `ppt/theme/theme1.xml` with the colour scheme taken from the palette and
/// the font scheme from the deck fonts.
pub fn theme_xml(theme: &Theme) -> Result<String> {
    let mut xml = String::with_capacity(4096);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    write!(xml, r#"<a:theme xmlns:a="{}" name="Deck">"#, namespace::DML_MAIN)?;
    xml.push_str("<a:themeElements>");

    xml.push_str(r#"<a:clrScheme name="Deck">"#);
    for (slot, role, fallback) in COLOR_SCHEME {
        let color = theme.palette.get(role).unwrap_or(fallback);
        write!(
            xml,
            r#"<a:{slot}><a:srgbClr val="{}"/></a:{slot}>"#,
            color.to_hex()
        )?;
    }
    xml.push_str("</a:clrScheme>");

    let heading = escape_xml(&theme.fonts.heading);
    let body = escape_xml(&theme.fonts.body);
    xml.push_str(r#"<a:fontScheme name="Deck">"#);
    write!(
        xml,
        r#"<a:majorFont><a:latin typeface="{heading}"/><a:ea typeface=""/><a:cs typeface=""/></a:majorFont>"#
    )?;
    write!(
        xml,
        r#"<a:minorFont><a:latin typeface="{body}"/><a:ea typeface=""/><a:cs typeface=""/></a:minorFont>"#
    )?;
    xml.push_str("</a:fontScheme>");

    xml.push_str(FORMAT_SCHEME);
    xml.push_str("</a:themeElements>");
    xml.push_str("<a:objectDefaults/><a:extraClrSchemeLst/>");
    xml.push_str("</a:theme>");
    Ok(xml)
}

/// `ppt/presProps.xml`.
pub fn pres_props_xml() -> Result<String> {
    let mut xml = String::with_capacity(256);
    write_root_open(&mut xml, "p:presentationPr", "")?;
    xml.push_str("</p:presentationPr>");
    Ok(xml)
}

/// `ppt/tableStyles.xml`.
pub fn table_styles_xml() -> Result<String> {
    let mut xml = String::with_capacity(256);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    write!(
        xml,
        r#"<a:tblStyleLst xmlns:a="{}" def="{}"/>"#,
        namespace::DML_MAIN,
        DEFAULT_TABLE_STYLE
    )?;
    Ok(xml)
}

/// `docProps/core.xml`. Creation and modification times are both `now`.
pub fn core_props_xml(metadata: &DeckMetadata, now: DateTime<Utc>) -> Result<String> {
    let timestamp = now.format("%Y-%m-%dT%H:%M:%SZ");
    let mut xml = String::with_capacity(1024);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(concat!(
        r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" "#,
        r#"xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" "#,
        r#"xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#
    ));
    write!(xml, "<dc:title>{}</dc:title>", escape_xml(&metadata.title))?;
    write!(xml, "<dc:subject>{}</dc:subject>", escape_xml(&metadata.subject))?;
    write!(xml, "<dc:creator>{}</dc:creator>", escape_xml(&metadata.author))?;
    write!(
        xml,
        "<cp:lastModifiedBy>{}</cp:lastModifiedBy>",
        escape_xml(&metadata.author)
    )?;
    xml.push_str("<cp:revision>1</cp:revision>");
    write!(
        xml,
        r#"<dcterms:created xsi:type="dcterms:W3CDTF">{timestamp}</dcterms:created>"#
    )?;
    write!(
        xml,
        r#"<dcterms:modified xsi:type="dcterms:W3CDTF">{timestamp}</dcterms:modified>"#
    )?;
    xml.push_str("</cp:coreProperties>");
    Ok(xml)
}

/// `docProps/app.xml`.
pub fn app_props_xml(metadata: &DeckMetadata, slide_count: usize) -> Result<String> {
    let mut xml = String::with_capacity(1024);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(concat!(
        r#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" "#,
        r#"xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">"#
    ));
    xml.push_str("<TotalTime>0</TotalTime>");
    write!(
        xml,
        "<Application>{} {}</Application>",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    )?;
    write!(
        xml,
        "<PresentationFormat>{}</PresentationFormat>",
        escape_xml(metadata.layout.format_name())
    )?;
    write!(xml, "<Slides>{}</Slides>", slide_count)?;
    xml.push_str("<Notes>0</Notes><HiddenSlides>0</HiddenSlides><MMClips>0</MMClips>");
    xml.push_str("<ScaleCrop>false</ScaleCrop>");
    xml.push_str("<LinksUpToDate>false</LinksUpToDate>");
    xml.push_str("<SharedDoc>false</SharedDoc>");
    xml.push_str("<HyperlinksChanged>false</HyperlinksChanged>");
    xml.push_str("<AppVersion>16.0000</AppVersion>");
    xml.push_str("</Properties>");
    Ok(xml)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::palette::Palette;
    use chrono::TimeZone;

    #[test]
    fn test_theme_colors_follow_palette() {
        let metadata = DeckMetadata::default();
        let palette = Palette::brutalist().with(Role::PrimaryAccent, RGBColor::from_u32(0x123456));
        let theme = Theme::for_metadata(palette, &metadata);
        let xml = theme_xml(&theme).unwrap();
        assert!(xml.contains(r#"<a:accent1><a:srgbClr val="123456"/></a:accent1>"#));
        assert!(xml.contains(r#"<a:majorFont><a:latin typeface="Courier New"/>"#));
        assert!(xml.contains(r#"<a:minorFont><a:latin typeface="Verdana"/>"#));
    }

    #[test]
    fn test_core_props_timestamp_and_escape() {
        let metadata = DeckMetadata {
            title: "Koszty & czas".to_string(),
            ..DeckMetadata::default()
        };
        let now = Utc.with_ymd_and_hms(2024, 5, 6, 7, 8, 9).unwrap();
        let xml = core_props_xml(&metadata, now).unwrap();
        assert!(xml.contains("<dc:title>Koszty &amp; czas</dc:title>"));
        assert!(xml.contains(">2024-05-06T07:08:09Z</dcterms:created>"));
    }

    #[test]
    fn test_master_references_layout() {
        let xml = slide_master_xml("rId1").unwrap();
        assert!(xml.contains(r#"<p:sldLayoutId id="2147483649" r:id="rId1"/>"#));
    }
}
