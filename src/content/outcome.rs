//! Sensitivity analysis and the closing page.
use super::{body, label};
use crate::common::Result;
use crate::deck::blocks::add_card;
use crate::deck::geometry::Rect;
use crate::deck::model::PageNumber;
use crate::deck::page::{Page, Side};
use crate::deck::palette::Role;
use crate::deck::render::{place_rectangle, place_text};
use crate::deck::table::BorderSpec;
use crate::deck::template::{cover_page, place_panel_marker, standard_page};
use crate::deck::text::{HAlign, RichText, VAnchor};
use crate::deck::theme::Theme;

const SCENARIOS: [(&str, &str); 3] = [
    (
        "Anna niedostępna?",
        "Potrzeba zewnętrznego wykonawcy lub nadgodziny innego pracownika",
    ),
    (
        "Stawki +10%?",
        "Proporcjonalny wzrost kosztu o 10% (36 950 → 40 645 zł)",
    ),
    ("Nowe zadanie?", "Rozszerzenie do problemu 6×7 lub zatrudnienie"),
];

pub(super) fn sensitivity(theme: &Theme, number: PageNumber) -> Result<Page> {
    let mut canvas = standard_page(theme, Some("ANALIZA WRAŻLIWOŚCI"), number)?;

    for (i, (question, answer)) in SCENARIOS.into_iter().enumerate() {
        let y = 1.15 + i as f64 * 1.1;
        place_rectangle(&mut canvas, Rect::inches(0.4, y, 0.08, 0.9), Role::PrimaryAccent, None)?;
        label(&mut canvas, question, Rect::inches(0.6, y, 3.5, 0.35), 13.0, Role::BodyText)?;
        body(&mut canvas, answer, Rect::inches(0.6, y + 0.35, 4.5, 0.5), 10.0, None)?;
    }

    add_card(&mut canvas, Rect::inches(5.5, 1.15, 4.1, 2.1), Role::SecondaryAccent)?;
    label(
        &mut canvas,
        "Ograniczenia modelu:",
        Rect::inches(5.65, 1.3, 3.8, 0.35),
        12.0,
        Role::SecondaryAccent,
    )?;
    body(
        &mut canvas,
        RichText::new()
            .plain("• 1 pracownik = 1 zadanie\n")
            .plain("• Brak zależności czasowych\n")
            .plain("• Stałe stawki godzinowe\n")
            .plain("• Brak preferencji pracowników"),
        Rect::inches(5.65, 1.7, 3.8, 1.4),
        10.0,
        Some(16.0),
    )?;

    label(
        &mut canvas,
        "Porównanie przydziałów:",
        Rect::inches(0.4, 4.4, 9.0, 0.3),
        12.0,
        Role::BodyText,
    )?;

    let bars = [
        (4.8, 3.7, Role::Success, Role::InverseText, "Optymalny: 36 950 zł"),
        (5.2, 3.9, Role::AltRowFill, Role::BodyText, "Intuicyjny: 38 930 zł (+5.1%)"),
    ];
    for (y, w, fill, ink, caption) in bars {
        place_rectangle(
            &mut canvas,
            Rect::inches(0.4, y, w, 0.35),
            fill,
            Some(BorderSpec {
                weight_pt: 1.0,
                role: Role::Border,
            }),
        )?;
        let style = theme.body(10.0, ink).anchor(VAnchor::Middle);
        place_text(&mut canvas, caption, Rect::inches(0.5, y, w - 0.2, 0.35), &style)?;
    }

    Ok(canvas.finish())
}

pub(super) fn conclusions(theme: &Theme, number: PageNumber) -> Result<Page> {
    let mut canvas = cover_page(theme, Side::Right, number)?;

    label(&mut canvas, "PODSUMOWANIE", Rect::inches(0.5, 0.5, 5.0, 0.6), 28.0, Role::InverseText)?;

    let points = [
        "✓ Model matematyczny zdefiniowany",
        "✓ Metoda węgierska dla małych problemów",
        "✓ PuLP dla pełnego rozwiązania",
        "✓ Interpretacja biznesowa",
    ];
    let point_style = theme.body(14.0, Role::InverseText);
    for (i, point) in points.into_iter().enumerate() {
        let y = 1.3 + i as f64 * 0.55;
        place_text(&mut canvas, point, Rect::inches(0.5, y, 5.0, 0.5), &point_style)?;
    }

    let caption = theme
        .heading(20.0, Role::InverseText)
        .bold()
        .align(HAlign::Center)
        .line_spacing(24.0);
    place_text(&mut canvas, "KOSZT\nMINIMALNY", Rect::inches(6.3, 1.3, 3.4, 1.0), &caption)?;
    let figure = theme.heading(32.0, Role::Highlight).bold().align(HAlign::Center);
    place_text(&mut canvas, "36 950 zł", Rect::inches(6.3, 2.4, 3.4, 0.8), &figure)?;

    label(&mut canvas, "Technologie:", Rect::inches(0.5, 4.0, 5.0, 0.35), 12.0, Role::Highlight)?;
    place_text(
        &mut canvas,
        "Python | PuLP | CBC Solver",
        Rect::inches(0.5, 4.4, 5.0, 0.35),
        &theme.body(12.0, Role::InverseText),
    )?;

    place_panel_marker(&mut canvas, Side::Right)?;

    Ok(canvas.finish())
}
