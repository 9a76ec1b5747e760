//! DrawingML text: paragraphs, runs and their properties.
use crate::common::RGBColor;
use crate::common::unit::pt_to_centipoints;
use crate::common::xml::escape_xml;
use crate::deck::text::{Emphasis, HAlign, ResolvedRun, VAnchor};
use crate::ooxml::error::Result;
use std::fmt::Write as FmtWrite;

/// Language tag written on every run.
const LANG: &str = "pl-PL";

pub(crate) fn align_attr(align: HAlign) -> &'static str {
    match align {
        HAlign::Left => "l",
        HAlign::Center => "ctr",
        HAlign::Right => "r",
        HAlign::Justify => "just",
    }
}

pub(crate) fn anchor_attr(anchor: VAnchor) -> &'static str {
    match anchor {
        VAnchor::Top => "t",
        VAnchor::Middle => "ctr",
        VAnchor::Bottom => "b",
    }
}

/// Character formatting of one run.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RunProps<'a> {
    pub font: &'a str,
    pub size_pt: f64,
    pub color: RGBColor,
    pub emphasis: Emphasis,
}

impl<'a> From<&'a ResolvedRun> for RunProps<'a> {
    fn from(run: &'a ResolvedRun) -> Self {
        Self {
            font: &run.font,
            size_pt: run.size_pt,
            color: run.color.color,
            emphasis: run.emphasis,
        }
    }
}

/// Write `<a:rPr>` (or `<a:endParaRPr>` when `tag` says so).
pub(crate) fn write_run_props(xml: &mut String, tag: &str, props: &RunProps<'_>) -> Result<()> {
    write!(
        xml,
        r#"<a:{} lang="{}" sz="{}""#,
        tag,
        LANG,
        pt_to_centipoints(props.size_pt)
    )?;
    if props.emphasis.contains(Emphasis::BOLD) {
        xml.push_str(r#" b="1""#);
    }
    if props.emphasis.contains(Emphasis::ITALIC) {
        xml.push_str(r#" i="1""#);
    }
    if props.emphasis.contains(Emphasis::UNDERLINE) {
        xml.push_str(r#" u="sng""#);
    }
    xml.push_str(r#" dirty="0">"#);

    write!(
        xml,
        r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
        props.color.to_hex()
    )?;
    let face = escape_xml(props.font);
    write!(
        xml,
        r#"<a:latin typeface="{face}"/><a:ea typeface="{face}"/><a:cs typeface="{face}"/>"#
    )?;
    write!(xml, "</a:{}>", tag)?;
    Ok(())
}

fn write_paragraph_props(xml: &mut String, align: HAlign, line_spacing_pt: Option<f64>) -> Result<()> {
    write!(xml, r#"<a:pPr algn="{}">"#, align_attr(align))?;
    if let Some(pt) = line_spacing_pt {
        write!(
            xml,
            r#"<a:lnSpc><a:spcPts val="{}"/></a:lnSpc>"#,
            pt_to_centipoints(pt)
        )?;
    }
    xml.push_str("</a:pPr>");
    Ok(())
}

/// Split runs into paragraphs at every `'\n'`, keeping each piece's run
/// properties.
pub(crate) fn split_paragraphs<'a, P>(runs: &'a [(&'a str, P)]) -> Vec<Vec<(&'a str, &'a P)>> {
    let mut paragraphs = vec![Vec::new()];
    for (text, props) in runs {
        for (i, piece) in text.split('\n').enumerate() {
            if i > 0 {
                paragraphs.push(Vec::new());
            }
            if !piece.is_empty() {
                if let Some(current) = paragraphs.last_mut() {
                    current.push((piece, props));
                }
            }
        }
    }
    paragraphs
}

/// Write the paragraphs of a text body.
///
/// An empty paragraph keeps the size of the run that ended the previous one
/// through `a:endParaRPr`, so blank lines keep their height.
pub(crate) fn write_paragraphs(
    xml: &mut String,
    runs: &[(&str, RunProps<'_>)],
    align: HAlign,
    line_spacing_pt: Option<f64>,
) -> Result<()> {
    let Some((_, fallback)) = runs.first() else {
        xml.push_str("<a:p/>");
        return Ok(());
    };

    let mut last = fallback;
    for paragraph in split_paragraphs(runs) {
        xml.push_str("<a:p>");
        write_paragraph_props(xml, align, line_spacing_pt)?;
        for (text, props) in &paragraph {
            xml.push_str("<a:r>");
            write_run_props(xml, "rPr", props)?;
            write!(xml, "<a:t>{}</a:t>", escape_xml(text))?;
            xml.push_str("</a:r>");
            last = *props;
        }
        write_run_props(xml, "endParaRPr", last)?;
        xml.push_str("</a:p>");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(emphasis: Emphasis) -> RunProps<'static> {
        RunProps {
            font: "Verdana",
            size_pt: 11.0,
            color: RGBColor::from_u32(0x212529),
            emphasis,
        }
    }

    #[test]
    fn test_split_keeps_run_boundaries() {
        let runs = [("Najwyższa stawka:\n", 1), ("Anna (180 zł/h)\n\n", 2), ("Celina", 3)];
        let paragraphs = split_paragraphs(&runs);
        let shape: Vec<Vec<(&str, i32)>> = paragraphs
            .iter()
            .map(|p| p.iter().map(|(t, n)| (*t, **n)).collect())
            .collect();
        assert_eq!(
            shape,
            vec![
                vec![("Najwyższa stawka:", 1)],
                vec![("Anna (180 zł/h)", 2)],
                vec![],
                vec![("Celina", 3)],
            ]
        );
    }

    #[test]
    fn test_run_props_xml() {
        let mut xml = String::new();
        write_run_props(&mut xml, "rPr", &props(Emphasis::BOLD | Emphasis::ITALIC)).unwrap();
        assert!(xml.starts_with(r#"<a:rPr lang="pl-PL" sz="1100" b="1" i="1""#));
        assert!(xml.contains(r#"<a:srgbClr val="212529"/>"#));
        assert!(xml.contains(r#"<a:latin typeface="Verdana"/>"#));
        assert!(xml.ends_with("</a:rPr>"));
    }

    #[test]
    fn test_paragraphs_with_spacing_and_escape() {
        let mut xml = String::new();
        let runs = [("a < b\nc & d", props(Emphasis::empty()))];
        write_paragraphs(&mut xml, &runs, HAlign::Center, Some(16.0)).unwrap();
        assert_eq!(xml.matches("<a:p>").count(), 2);
        assert!(xml.contains(r#"<a:pPr algn="ctr"><a:lnSpc><a:spcPts val="1600"/></a:lnSpc></a:pPr>"#));
        assert!(xml.contains("<a:t>a &lt; b</a:t>"));
        assert!(xml.contains("<a:t>c &amp; d</a:t>"));
    }
}
