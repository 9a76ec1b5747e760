//! The shipped deck: twelve pages on assigning IT staff to project tasks.
//!
//! Every figure on these pages is literal content. Nothing here is computed.

mod analysis;
mod data;
mod opening;
mod outcome;

use crate::common::Result;
use crate::deck::assembler::PageDescriptor;
use crate::deck::geometry::Rect;
use crate::deck::page::Canvas;
use crate::deck::palette::Role;
use crate::deck::render::place_text;
use crate::deck::table::{CellStyle, TableStyle};
use crate::deck::text::{HAlign, RichText, TextStyle, VAnchor};
use crate::deck::theme::Theme;

static BUILTIN_PAGES: [PageDescriptor; 12] = [
    PageDescriptor::new("Title slide", opening::title),
    PageDescriptor::new("Problem description", opening::scenario),
    PageDescriptor::new("Team data", opening::team),
    PageDescriptor::new("Tasks data", opening::tasks),
    PageDescriptor::new("Cost matrix", data::cost_matrix),
    PageDescriptor::new("Mathematical model", data::model),
    PageDescriptor::new("Solution method", data::method),
    PageDescriptor::new("Manual solution", analysis::manual),
    PageDescriptor::new("Results", analysis::results),
    PageDescriptor::new("Interpretation", analysis::interpretation),
    PageDescriptor::new("Sensitivity analysis", outcome::sensitivity),
    PageDescriptor::new("Conclusions", outcome::conclusions),
];

/// Page descriptors of the shipped deck, in presentation order.
pub fn builtin_pages() -> &'static [PageDescriptor] {
    &BUILTIN_PAGES
}

/// Bold heading-face label.
fn label(canvas: &mut Canvas<'_>, text: &str, rect: Rect, size_pt: f64, color: Role) -> Result<()> {
    let style = canvas.theme().heading(size_pt, color).bold();
    place_text(canvas, text, rect, &style)
}

/// Body-face paragraph text.
fn body(
    canvas: &mut Canvas<'_>,
    text: impl Into<RichText>,
    rect: Rect,
    size_pt: f64,
    line_spacing_pt: Option<f64>,
) -> Result<()> {
    let mut style = canvas.theme().body(size_pt, Role::BodyText);
    style.line_spacing_pt = line_spacing_pt;
    place_text(canvas, text, rect, &style)
}

/// Centred grid style shared by every data table.
fn grid(text: TextStyle, border_pt: f64) -> TableStyle {
    TableStyle::new(text.align(HAlign::Center).anchor(VAnchor::Middle)).border(border_pt, Role::Border)
}

/// Header cell without emphasis, as used by the small matrices.
fn quiet_header() -> CellStyle {
    CellStyle::default().fill(Role::HeaderFill).color(Role::InverseText)
}

fn theme_grid(theme: &Theme, mono: bool, size_pt: f64, border_pt: f64) -> TableStyle {
    let text = if mono {
        theme.heading(size_pt, Role::BodyText)
    } else {
        theme.body(size_pt, Role::BodyText)
    };
    grid(text, border_pt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::assembler::{Assembler, AssemblyObserver, PageBuilder};
    use crate::deck::model::{Deck, DeckMetadata, PageNumber};
    use crate::deck::page::{Page, PageKind, Side};
    use crate::deck::palette::Palette;
    use crate::deck::template::footer_rect;
    use std::path::Path;

    struct Silent;

    impl AssemblyObserver for Silent {
        fn page_built(&mut self, _number: PageNumber, _name: &str, _page: &Page) {}
        fn saved(&mut self, _destination: &Path, _deck: &Deck) {}
    }

    fn builtin_deck() -> Deck {
        Assembler::new(DeckMetadata::default(), Palette::brutalist())
            .assemble(builtin_pages(), &mut Silent)
            .unwrap()
    }

    /// Text of the single block sitting in the template's footer frame.
    fn footer_text(theme: &Theme, page: &Page) -> String {
        let frame = footer_rect(theme).resolve(theme.layout).unwrap();
        let footers: Vec<String> = page
            .texts()
            .filter(|t| t.frame == frame)
            .map(|t| t.text())
            .collect();
        assert_eq!(footers.len(), 1, "page {} has no single footer", page.number());
        footers.into_iter().next().unwrap()
    }

    #[test]
    fn test_builtin_deck_builds() {
        let deck = builtin_deck();
        assert_eq!(deck.page_count(), 12);
        assert_eq!(deck.pages()[0].kind(), PageKind::Cover(Side::Left));
        assert_eq!(deck.pages()[11].kind(), PageKind::Cover(Side::Right));
        for page in &deck.pages()[1..11] {
            assert_eq!(page.kind(), PageKind::Standard);
            assert!(page.title().is_some());
            assert_eq!(footer_text(deck.theme(), page), page.number().to_string());
        }
    }

    #[test]
    fn test_builtin_titles_in_order() {
        let deck = builtin_deck();
        let titles: Vec<_> = deck.pages()[1..11].iter().filter_map(Page::title).collect();
        assert_eq!(
            titles,
            [
                "SCENARIUSZ BIZNESOWY",
                "ZESPÓŁ PROJEKTOWY",
                "ZADANIA PROJEKTOWE",
                "MACIERZ KOSZTÓW (zł)",
                "MODEL MATEMATYCZNY",
                "METODA ROZWIĄZANIA",
                "ROZWIĄZANIE RĘCZNE (3×3)",
                "WYNIKI OPTYMALIZACJI",
                "INTERPRETACJA",
                "ANALIZA WRAŻLIWOŚCI",
            ]
        );
    }

    #[test]
    fn test_builtin_tables_keep_shape() {
        let deck = builtin_deck();
        let shapes: Vec<(usize, usize)> = deck
            .pages()
            .iter()
            .flat_map(Page::tables)
            .map(|t| (t.row_count(), t.column_count()))
            .collect();
        assert_eq!(shapes, [(7, 4), (7, 4), (7, 7), (4, 4), (4, 4), (8, 4)]);
    }

    #[test]
    fn test_closer_carries_its_own_marker() {
        let deck = builtin_deck();
        let closer = &deck.pages()[11];
        assert_eq!(closer.texts().last().unwrap().text(), "12/12");
        assert!(deck.pages()[0].texts().all(|t| t.text() != "1/12"));
    }

    #[test]
    fn test_builders_are_independent_of_position() {
        let theme = Theme::default();
        let team = &builtin_pages()[2];
        let page = team.build(&theme, PageNumber::new(7, 9)).unwrap();
        assert_eq!(footer_text(&theme, &page), "7/9");
        assert_eq!(team.name(), "Team data");
    }
}
