//! PPTX package assembly and the file-backed document writer.
use super::template;
use super::writer::{presentation_xml, slide_xml};
use crate::common::Result as DeckResult;
use crate::deck::model::Deck;
use crate::deck::writer::DocumentWriter;
use crate::ooxml::error::Result;
use crate::ooxml::opc::constants::{content_type as ct, relationship_type as rt};
use crate::ooxml::opc::{OpcPackage, PackURI, PackageWriter, Part};
use chrono::{DateTime, Utc};
use log::{debug, info};
use std::io::Write;
use std::path::Path;

const PRESENTATION: &str = "/ppt/presentation.xml";
const SLIDE_MASTER: &str = "/ppt/slideMasters/slideMaster1.xml";
const SLIDE_LAYOUT: &str = "/ppt/slideLayouts/slideLayout1.xml";
const THEME: &str = "/ppt/theme/theme1.xml";
const PRES_PROPS: &str = "/ppt/presProps.xml";
const TABLE_STYLES: &str = "/ppt/tableStyles.xml";
const CORE_PROPS: &str = "/docProps/core.xml";
const APP_PROPS: &str = "/docProps/app.xml";

/// Writes decks as PowerPoint (.pptx) files.
///
/// # Examples
///
/// ```no_run
/// use deckwright::content::builtin_pages;
/// use deckwright::deck::{Assembler, DeckMetadata, LogObserver, Palette};
/// use deckwright::ooxml::pptx::PptxWriter;
/// use std::path::Path;
///
/// let assembler = Assembler::new(DeckMetadata::default(), Palette::brutalist());
/// assembler.run(builtin_pages(), &PptxWriter::new(), Path::new("deck.pptx"), &mut LogObserver)?;
/// # Ok::<(), deckwright::common::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct PptxWriter {
    timestamp: Option<DateTime<Utc>>,
}

impl PptxWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: fixed creation time instead of the current time.
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Build the OPC package for `deck`.
    pub fn to_package(&self, deck: &Deck) -> Result<OpcPackage> {
        let metadata = deck.metadata();
        let mut package = OpcPackage::new();

        let pres_uri = PackURI::new(PRESENTATION)?;
        let master_uri = PackURI::new(SLIDE_MASTER)?;
        let layout_uri = PackURI::new(SLIDE_LAYOUT)?;
        let theme_uri = PackURI::new(THEME)?;
        let pres_props_uri = PackURI::new(PRES_PROPS)?;
        let table_styles_uri = PackURI::new(TABLE_STYLES)?;
        let core_uri = PackURI::new(CORE_PROPS)?;
        let app_uri = PackURI::new(APP_PROPS)?;

        package.relate_to(rt::OFFICE_DOCUMENT, &pres_uri);
        package.relate_to(rt::CORE_PROPERTIES, &core_uri);
        package.relate_to(rt::EXTENDED_PROPERTIES, &app_uri);

        let mut pres = Part::new(pres_uri, ct::PML_PRESENTATION_MAIN, Vec::new());
        let master_rel_id = pres.relate_to(rt::SLIDE_MASTER, &master_uri);

        let mut slides = Vec::with_capacity(deck.page_count());
        let mut slide_rel_ids = Vec::with_capacity(deck.page_count());
        for page in deck.pages() {
            let uri = PackURI::new(format!("/ppt/slides/slide{}.xml", page.number().index))?;
            slide_rel_ids.push(pres.relate_to(rt::SLIDE, &uri));

            let mut slide = Part::new(uri, ct::PML_SLIDE, slide_xml(page)?);
            slide.relate_to(rt::SLIDE_LAYOUT, &layout_uri);
            debug!(
                "slide {} serialized with {} elements",
                page.number(),
                page.elements().len()
            );
            slides.push(slide);
        }

        pres.relate_to(rt::PRES_PROPS, &pres_props_uri);
        pres.relate_to(rt::TABLE_STYLES, &table_styles_uri);
        pres.relate_to(rt::THEME, &theme_uri);
        pres.set_blob(presentation_xml(metadata.layout, &master_rel_id, &slide_rel_ids)?);
        package.add_part(pres)?;

        let mut master = Part::new(master_uri.clone(), ct::PML_SLIDE_MASTER, Vec::new());
        let layout_rel_id = master.relate_to(rt::SLIDE_LAYOUT, &layout_uri);
        master.relate_to(rt::THEME, &theme_uri);
        master.set_blob(template::slide_master_xml(&layout_rel_id)?);
        package.add_part(master)?;

        let mut layout = Part::new(layout_uri, ct::PML_SLIDE_LAYOUT, template::slide_layout_xml()?);
        layout.relate_to(rt::SLIDE_MASTER, &master_uri);
        package.add_part(layout)?;

        package.add_part(Part::new(theme_uri, ct::OFC_THEME, template::theme_xml(deck.theme())?))?;
        package.add_part(Part::new(pres_props_uri, ct::PML_PRES_PROPS, template::pres_props_xml()?))?;
        package.add_part(Part::new(
            table_styles_uri,
            ct::PML_TABLE_STYLES,
            template::table_styles_xml()?,
        ))?;

        for slide in slides {
            package.add_part(slide)?;
        }

        let now = self.timestamp.unwrap_or_else(Utc::now);
        package.add_part(Part::new(
            core_uri,
            ct::OPC_CORE_PROPERTIES,
            template::core_props_xml(metadata, now)?,
        ))?;
        package.add_part(Part::new(
            app_uri,
            ct::OFC_EXTENDED_PROPERTIES,
            template::app_props_xml(metadata, deck.page_count())?,
        ))?;

        Ok(package)
    }

    /// Serialize `deck` to the bytes of a .pptx file.
    pub fn to_bytes(&self, deck: &Deck) -> Result<Vec<u8>> {
        let package = self.to_package(deck)?;
        Ok(PackageWriter::to_bytes(&package)?)
    }
}

impl DocumentWriter for PptxWriter {
    /// Serialize in memory, then replace `destination` through a temporary
    /// file in the same directory.
    fn write(&self, deck: &Deck, destination: &Path) -> DeckResult<()> {
        let bytes = self.to_bytes(deck)?;

        let parent = match destination.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        let mut file = tempfile::NamedTempFile::new_in(parent)?;
        file.write_all(&bytes)?;
        file.as_file().sync_all()?;
        file.persist(destination).map_err(|e| e.error)?;

        info!("wrote {} ({} bytes)", destination.display(), bytes.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ErrorKind;
    use crate::content::builtin_pages;
    use crate::deck::assembler::{Assembler, AssemblyObserver};
    use crate::deck::model::{DeckMetadata, PageNumber};
    use crate::deck::page::Page;
    use crate::deck::palette::Palette;
    use chrono::TimeZone;
    use quick_xml::Reader;
    use quick_xml::events::Event;
    use std::io::{Cursor, Read};

    struct Quiet;

    impl AssemblyObserver for Quiet {
        fn page_built(&mut self, _number: PageNumber, _name: &str, _page: &Page) {}
        fn saved(&mut self, _destination: &Path, _deck: &Deck) {}
    }

    fn builtin_deck() -> Deck {
        Assembler::new(DeckMetadata::default(), Palette::brutalist())
            .assemble(builtin_pages(), &mut Quiet)
            .unwrap()
    }

    fn read_entries(bytes: Vec<u8>) -> Vec<(String, String)> {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        (0..archive.len())
            .map(|i| {
                let mut entry = archive.by_index(i).unwrap();
                let mut body = String::new();
                entry.read_to_string(&mut body).unwrap();
                (entry.name().to_string(), body)
            })
            .collect()
    }

    fn assert_well_formed(name: &str, xml: &str) {
        let mut reader = Reader::from_str(xml);
        let mut depth = 0i32;
        loop {
            match reader.read_event() {
                Ok(Event::Start(_)) => depth += 1,
                Ok(Event::End(_)) => depth -= 1,
                Ok(Event::Eof) => break,
                Ok(_) => {},
                Err(e) => panic!("{name} is not well-formed: {e}"),
            }
        }
        assert_eq!(depth, 0, "{name} has unbalanced elements");
    }

    #[test]
    fn test_package_parts() {
        let deck = builtin_deck();
        let entries = read_entries(PptxWriter::new().to_bytes(&deck).unwrap());
        let names: Vec<&str> = entries.iter().map(|(n, _)| n.as_str()).collect();

        assert_eq!(names[0], "[Content_Types].xml");
        for required in [
            "_rels/.rels",
            "docProps/core.xml",
            "docProps/app.xml",
            "ppt/presentation.xml",
            "ppt/_rels/presentation.xml.rels",
            "ppt/slideMasters/slideMaster1.xml",
            "ppt/slideLayouts/slideLayout1.xml",
            "ppt/theme/theme1.xml",
            "ppt/presProps.xml",
            "ppt/tableStyles.xml",
            "ppt/slides/slide1.xml",
            "ppt/slides/_rels/slide12.xml.rels",
        ] {
            assert!(names.contains(&required), "missing {required}");
        }
        let slide_count = names
            .iter()
            .filter(|n| n.starts_with("ppt/slides/slide"))
            .count();
        assert_eq!(slide_count, 12);

        for (name, body) in &entries {
            assert_well_formed(name, body);
        }
    }

    #[test]
    fn test_slides_carry_content_in_order() {
        let deck = builtin_deck();
        let entries = read_entries(PptxWriter::new().to_bytes(&deck).unwrap());
        let body = |name: &str| {
            entries
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, b)| b.clone())
                .unwrap()
        };

        let pres = body("ppt/presentation.xml");
        assert!(pres.contains(r#"<p:sldId id="256" r:id="rId2"/>"#));
        assert!(pres.contains(r#"<p:sldSz cx="9144000" cy="5143500""#));

        let types = body("[Content_Types].xml");
        assert_eq!(types.matches(ct::PML_SLIDE).count(), 12);

        let cost = body("ppt/slides/slide5.xml");
        assert!(cost.contains("<a:tbl>"));
        assert!(cost.contains("<a:t>5/12</a:t>"));

        let app = body("docProps/app.xml");
        assert!(app.contains("<Slides>12</Slides>"));
    }

    #[test]
    fn test_fixed_timestamp_in_core_properties() {
        let deck = builtin_deck();
        let created = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
        let writer = PptxWriter::new().with_timestamp(created);

        let entries = read_entries(writer.to_bytes(&deck).unwrap());
        let core = entries
            .iter()
            .find(|(n, _)| n == "docProps/core.xml")
            .map(|(_, b)| b.as_str())
            .unwrap();

        assert_eq!(core, template::core_props_xml(deck.metadata(), created).unwrap());
        assert!(core.contains(
            r#"<dcterms:created xsi:type="dcterms:W3CDTF">2024-03-01T09:30:00Z</dcterms:created>"#
        ));
        assert!(core.contains(
            r#"<dcterms:modified xsi:type="dcterms:W3CDTF">2024-03-01T09:30:00Z</dcterms:modified>"#
        ));
    }

    #[test]
    fn test_write_replaces_destination() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.pptx");
        std::fs::write(&path, b"stale").unwrap();

        let deck = builtin_deck();
        PptxWriter::new().write(&deck, &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..2], b"PK");
        let leftovers = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(leftovers, 1);
    }

    #[test]
    fn test_write_into_missing_directory_fails_cleanly() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("deck.pptx");

        let err = PptxWriter::new().write(&builtin_deck(), &path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(!path.exists());
    }
}
