//! Deck assembly: run page builders in order and hand the deck to a writer.
use crate::common::{Error, Result};
use crate::deck::model::{Deck, DeckMetadata, PageNumber};
use crate::deck::page::Page;
use crate::deck::palette::Palette;
use crate::deck::theme::Theme;
use crate::deck::writer::DocumentWriter;
use log::{debug, info};
use std::path::Path;

/// Builds one page from the theme and its position in the deck.
pub trait PageBuilder {
    fn name(&self) -> &str;
    fn build(&self, theme: &Theme, number: PageNumber) -> Result<Page>;
}

pub type BuildFn = fn(&Theme, PageNumber) -> Result<Page>;

/// A named page builder function.
#[derive(Debug, Clone, Copy)]
pub struct PageDescriptor {
    pub name: &'static str,
    pub build: BuildFn,
}

impl PageDescriptor {
    pub const fn new(name: &'static str, build: BuildFn) -> Self {
        Self { name, build }
    }
}

impl PageBuilder for PageDescriptor {
    fn name(&self) -> &str {
        self.name
    }

    fn build(&self, theme: &Theme, number: PageNumber) -> Result<Page> {
        (self.build)(theme, number)
    }
}

/// Progress side channel.
pub trait AssemblyObserver {
    fn page_built(&mut self, number: PageNumber, name: &str, page: &Page);
    fn saved(&mut self, destination: &Path, deck: &Deck);
}

/// Observer that reports progress through `log`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl AssemblyObserver for LogObserver {
    fn page_built(&mut self, number: PageNumber, name: &str, page: &Page) {
        info!("[{}] {}", number, name);
        debug!("page {} has {} elements", number.index, page.elements().len());
    }

    fn saved(&mut self, destination: &Path, deck: &Deck) {
        info!(
            "Presentation saved to: {} ({} pages)",
            destination.display(),
            deck.page_count()
        );
    }
}

/// Runs page builders against a fixed theme and metadata.
#[derive(Debug, Clone)]
pub struct Assembler {
    metadata: DeckMetadata,
    theme: Theme,
}

impl Assembler {
    pub fn new(metadata: DeckMetadata, palette: Palette) -> Self {
        let theme = Theme::for_metadata(palette, &metadata);
        Self { metadata, theme }
    }

    pub fn metadata(&self) -> &DeckMetadata {
        &self.metadata
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Build every page once, in order, and collect them into a deck.
    ///
    /// Stops at the first failing builder; the error carries the page number
    /// and builder name.
    pub fn assemble<B>(&self, builders: &[B], observer: &mut dyn AssemblyObserver) -> Result<Deck>
    where
        B: PageBuilder,
    {
        if builders.is_empty() {
            return Err(Error::Config("deck has no pages".to_string()));
        }

        let total = builders.len();
        let mut pages = Vec::with_capacity(total);
        for (i, builder) in builders.iter().enumerate() {
            let number = PageNumber::new(i + 1, total);
            let page = builder
                .build(&self.theme, number)
                .map_err(|e| e.in_page(number, builder.name()))?;
            observer.page_built(number, builder.name(), &page);
            pages.push(page);
        }

        Ok(Deck::new(self.metadata.clone(), self.theme.clone(), pages))
    }

    /// Hand a finished deck to `writer`. `saved` is reported only on success.
    pub fn publish<W>(&self, deck: &Deck, writer: &W, destination: &Path, observer: &mut dyn AssemblyObserver) -> Result<()>
    where
        W: DocumentWriter + ?Sized,
    {
        writer.write(deck, destination)?;
        observer.saved(destination, deck);
        Ok(())
    }

    /// Assemble and publish in one go.
    pub fn run<B, W>(
        &self,
        builders: &[B],
        writer: &W,
        destination: &Path,
        observer: &mut dyn AssemblyObserver,
    ) -> Result<Deck>
    where
        B: PageBuilder,
        W: DocumentWriter + ?Sized,
    {
        let deck = self.assemble(builders, observer)?;
        self.publish(&deck, writer, destination, observer)?;
        Ok(deck)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ErrorKind;
    use crate::deck::blocks::add_highlight_box;
    use crate::deck::geometry::Rect;
    use crate::deck::page::{PageKind, Side};
    use crate::deck::palette::Role;
    use crate::deck::render::place_table;
    use crate::deck::table::{Table, TableCell, TableRow, TableStyle};
    use crate::deck::template::{cover_page, place_panel_marker, standard_page};
    use proptest::prelude::*;
    use std::cell::{Cell, RefCell};
    use std::path::PathBuf;

    #[derive(Default)]
    struct Recorder {
        built: Vec<(PageNumber, String)>,
        saved: Vec<PathBuf>,
    }

    impl AssemblyObserver for Recorder {
        fn page_built(&mut self, number: PageNumber, name: &str, _page: &Page) {
            self.built.push((number, name.to_string()));
        }

        fn saved(&mut self, destination: &Path, _deck: &Deck) {
            self.saved.push(destination.to_path_buf());
        }
    }

    #[derive(Default)]
    struct MemoryWriter {
        calls: Cell<usize>,
        pages: RefCell<Vec<usize>>,
    }

    impl DocumentWriter for MemoryWriter {
        fn write(&self, deck: &Deck, _destination: &Path) -> Result<()> {
            self.calls.set(self.calls.get() + 1);
            self.pages.borrow_mut().push(deck.page_count());
            Ok(())
        }
    }

    struct FailingWriter;

    impl DocumentWriter for FailingWriter {
        fn write(&self, _deck: &Deck, _destination: &Path) -> Result<()> {
            Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only destination",
            )))
        }
    }

    fn cover(theme: &Theme, number: PageNumber) -> Result<Page> {
        Ok(cover_page(theme, Side::Left, number)?.finish())
    }

    fn content(theme: &Theme, number: PageNumber) -> Result<Page> {
        let mut canvas = standard_page(theme, Some("WYNIKI"), number)?;
        let table = Table::new(vec![
            TableRow::new(vec![TableCell::header("Zadanie"), TableCell::header("Koszt")]),
            TableRow::plain(["T1", "4 800 zł"]),
        ]);
        let style = TableStyle::new(theme.body(10.0, Role::BodyText)).border(1.0, Role::Border);
        place_table(&mut canvas, &table, Rect::inches(0.4, 1.2, 5.0, 1.0), &style)?;
        add_highlight_box(&mut canvas, "100", Rect::inches(6.0, 1.2, 3.0, 1.0))?;
        Ok(canvas.finish())
    }

    fn closer(theme: &Theme, number: PageNumber) -> Result<Page> {
        let mut canvas = cover_page(theme, Side::Right, number)?;
        place_panel_marker(&mut canvas, Side::Right)?;
        Ok(canvas.finish())
    }

    fn broken(theme: &Theme, number: PageNumber) -> Result<Page> {
        let mut canvas = standard_page(theme, None, number)?;
        crate::deck::render::place_rectangle(&mut canvas, Rect::inches(1.0, 1.0, 0.0, 1.0), Role::Surface, None)?;
        Ok(canvas.finish())
    }

    fn three_pages() -> [PageDescriptor; 3] {
        [
            PageDescriptor::new("cover", cover),
            PageDescriptor::new("results", content),
            PageDescriptor::new("closer", closer),
        ]
    }

    #[test]
    fn test_three_page_deck_end_to_end() {
        let assembler = Assembler::new(DeckMetadata::default(), Palette::brutalist());
        let writer = MemoryWriter::default();
        let mut recorder = Recorder::default();

        let deck = assembler
            .run(&three_pages(), &writer, Path::new("out.pptx"), &mut recorder)
            .unwrap();

        assert_eq!(deck.page_count(), 3);
        assert_eq!(deck.metadata(), assembler.metadata());
        assert_eq!(deck.pages()[0].kind(), PageKind::Cover(Side::Left));
        assert_eq!(deck.pages()[1].kind(), PageKind::Standard);
        assert_eq!(deck.pages()[2].kind(), PageKind::Cover(Side::Right));

        let content = &deck.pages()[1];
        let table = content.tables().next().unwrap();
        assert_eq!((table.row_count(), table.column_count()), (2, 2));
        let highlight = content.position_of_text("100").unwrap();
        assert_eq!(
            content.elements()[highlight - 1].as_shape().unwrap().fill.role,
            Role::Highlight
        );

        assert_eq!(writer.calls.get(), 1);
        assert_eq!(*writer.pages.borrow(), vec![3]);
        let names: Vec<_> = recorder.built.iter().map(|(_, n)| n.as_str()).collect();
        assert_eq!(names, ["cover", "results", "closer"]);
        assert_eq!(recorder.saved, vec![PathBuf::from("out.pptx")]);
    }

    #[test]
    fn test_writer_failure_reports_no_save() {
        let assembler = Assembler::new(DeckMetadata::default(), Palette::brutalist());
        let mut recorder = Recorder::default();

        let err = assembler
            .run(&three_pages(), &FailingWriter, Path::new("out.pptx"), &mut recorder)
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Io);
        assert_eq!(recorder.built.len(), 3);
        assert!(recorder.saved.is_empty());
    }

    #[test]
    fn test_builder_failure_aborts_before_writing() {
        let assembler = Assembler::new(DeckMetadata::default(), Palette::brutalist());
        let writer = MemoryWriter::default();
        let mut recorder = Recorder::default();
        let pages = [
            PageDescriptor::new("cover", cover),
            PageDescriptor::new("broken", broken),
            PageDescriptor::new("closer", closer),
        ];

        let err = assembler
            .run(&pages, &writer, Path::new("out.pptx"), &mut recorder)
            .unwrap_err();

        match &err {
            Error::Page { number, name, .. } => {
                assert_eq!(*number, PageNumber::new(2, 3));
                assert_eq!(name, "broken");
            },
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert_eq!(writer.calls.get(), 0);
        assert_eq!(recorder.built.len(), 1);
        assert!(recorder.saved.is_empty());
    }

    #[test]
    fn test_undefined_role_is_configuration_error() {
        let full = Palette::brutalist();
        let mut sparse = Palette::empty();
        for (role, color) in full.defined().filter(|(r, _)| *r != Role::Highlight) {
            sparse = sparse.with(role, color);
        }
        let assembler = Assembler::new(DeckMetadata::default(), sparse);
        let err = assembler
            .assemble(&three_pages(), &mut Recorder::default())
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Page { ref source, .. } if matches!(**source, Error::UndefinedRole(Role::Highlight))
        ));
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn test_empty_page_list_rejected() {
        let assembler = Assembler::new(DeckMetadata::default(), Palette::brutalist());
        let pages: [PageDescriptor; 0] = [];
        assert!(matches!(
            assembler.assemble(&pages, &mut Recorder::default()),
            Err(Error::Config(_))
        ));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_page_numbers_are_consecutive(count in 1usize..20) {
            fn plain(theme: &Theme, number: PageNumber) -> Result<Page> {
                Ok(standard_page(theme, Some("STRONA"), number)?.finish())
            }
            let pages = vec![PageDescriptor::new("plain", plain); count];
            let assembler = Assembler::new(DeckMetadata::default(), Palette::brutalist());
            let deck = assembler.assemble(&pages, &mut Recorder::default()).unwrap();

            prop_assert_eq!(deck.page_count(), count);
            for (i, page) in deck.pages().iter().enumerate() {
                prop_assert_eq!(page.number(), PageNumber::new(i + 1, count));
                let footer = page.texts().last().unwrap();
                prop_assert_eq!(footer.text(), format!("{}/{}", i + 1, count));
            }
        }
    }
}
