//! Title page, business scenario, team and task listings.
use super::{body, label, theme_grid};
use crate::common::Result;
use crate::deck::blocks::{add_card, add_highlight_box};
use crate::deck::geometry::Rect;
use crate::deck::model::PageNumber;
use crate::deck::page::{Page, Side};
use crate::deck::palette::Role;
use crate::deck::render::{place_table, place_text};
use crate::deck::table::{CellStyle, Table, TableCell, TableRow};
use crate::deck::template::{cover_page, standard_page};
use crate::deck::text::{HAlign, RichText, RunStyle, TextRun};
use crate::deck::theme::Theme;

pub(super) fn title(theme: &Theme, number: PageNumber) -> Result<Page> {
    let mut canvas = cover_page(theme, Side::Left, number)?;

    let heading = theme.heading(26.0, Role::InverseText).bold().line_spacing(36.0);
    place_text(
        &mut canvas,
        "PRZYDZIAŁ\nPRACOWNIKÓW\nDO PROJEKTU IT",
        Rect::inches(0.4, 1.2, 3.2, 2.5),
        &heading,
    )?;

    let subtitle = theme.body(20.0, Role::InverseText).line_spacing(28.0);
    place_text(
        &mut canvas,
        "Minimalizacja kosztów\nrealizacji oprogramowania ABC",
        Rect::inches(4.5, 1.5, 5.0, 1.2),
        &subtitle,
    )?;

    place_text(
        &mut canvas,
        "> python assignment_model.py\n> Status: Optimal\n> Min cost: 36,950 PLN",
        Rect::inches(4.5, 3.0, 4.5, 1.2),
        &theme.heading(14.0, Role::Highlight),
    )?;

    place_text(
        &mut canvas,
        "Metody Optymalizacji | Problem Przydziału (ILP)",
        Rect::inches(4.5, 4.8, 5.0, 0.4),
        &theme.body(12.0, Role::InverseText),
    )?;

    Ok(canvas.finish())
}

pub(super) fn scenario(theme: &Theme, number: PageNumber) -> Result<Page> {
    let mut canvas = standard_page(theme, Some("SCENARIUSZ BIZNESOWY"), number)?;

    add_card(&mut canvas, Rect::inches(0.4, 1.1, 5.8, 2.8), Role::SecondaryAccent)?;
    label(&mut canvas, "TechFlow Solutions", Rect::inches(0.6, 1.25, 5.4, 0.4), 18.0, Role::SecondaryAccent)?;
    body(
        &mut canvas,
        RichText::new()
            .plain("Polska firma IT z Warszawy realizuje projekt\n")
            .plain("oprogramowania ABC dla klienta e-commerce.\n\n")
            .plain("Kierownik projektu musi optymalnie przydzielić\n")
            .plain("pracowników do zadań, minimalizując koszty."),
        Rect::inches(0.6, 1.7, 5.4, 2.0),
        13.0,
        Some(20.0),
    )?;

    for (x, color, caption) in [(6.5, Role::PrimaryAccent, "pracowników"), (8.0, Role::SecondaryAccent, "zadań")] {
        let figure = theme.heading(48.0, color).bold().align(HAlign::Center);
        place_text(&mut canvas, "6", Rect::inches(x, 1.3, 1.2, 1.0), &figure)?;
        let note = theme.body(11.0, Role::BodyText).align(HAlign::Center);
        place_text(&mut canvas, caption, Rect::inches(x - 0.2, 2.2, 1.6, 0.4), &note)?;
    }

    add_highlight_box(
        &mut canvas,
        "CEL: Minimalizacja kosztu projektu",
        Rect::inches(6.3, 2.8, 3.3, 0.6),
    )?;

    label(&mut canvas, "Ograniczenia:", Rect::inches(0.4, 4.1, 9.0, 0.35), 14.0, Role::BodyText)?;
    body(
        &mut canvas,
        RichText::new()
            .plain("• Każdy pracownik = dokładnie 1 zadanie\n")
            .plain("• Każde zadanie = dokładnie 1 pracownik\n")
            .plain("• Różne stawki i efektywności"),
        Rect::inches(0.4, 4.5, 9.0, 1.0),
        12.0,
        Some(18.0),
    )?;

    Ok(canvas.finish())
}

pub(super) fn team(theme: &Theme, number: PageNumber) -> Result<Page> {
    let mut canvas = standard_page(theme, Some("ZESPÓŁ PROJEKTOWY"), number)?;

    let table = Table::new(vec![
        TableRow::styled(["ID", "Pracownik", "Rola", "Stawka (zł/h)"], CellStyle::header()),
        TableRow::plain(["P1", "Anna", "Senior Developer", "180"]),
        TableRow::plain(["P2", "Bartek", "Mid Developer", "120"]),
        TableRow::plain(["P3", "Celina", "Junior Developer", "80"]),
        TableRow::plain(["P4", "Dawid", "DevOps Engineer", "150"]),
        TableRow::plain(["P5", "Ewa", "QA Engineer", "100"]),
        TableRow::plain(["P6", "Filip", "UI/UX Designer", "130"]),
    ])
    .col_widths([0.6, 1.4, 2.2, 1.3]);
    place_table(
        &mut canvas,
        &table,
        Rect::inches(0.4, 1.2, 5.5, 3.2),
        &theme_grid(theme, false, 11.0, 2.0),
    )?;

    add_card(&mut canvas, Rect::inches(6.2, 1.2, 3.4, 2.0), Role::PrimaryAccent)?;
    label(&mut canvas, "Kluczowe różnice", Rect::inches(6.4, 1.35, 3.0, 0.35), 14.0, Role::PrimaryAccent)?;
    body(
        &mut canvas,
        RichText::new()
            .bold("Najwyższa stawka:\n")
            .plain("Anna (180 zł/h)\n\n")
            .bold("Najniższa stawka:\n")
            .plain("Celina (80 zł/h)"),
        Rect::inches(6.4, 1.75, 3.0, 1.3),
        11.0,
        Some(16.0),
    )?;

    let note = theme.body(12.0, Role::SecondaryAccent).italic();
    place_text(
        &mut canvas,
        "Stawka ≠ efektywność dla każdego zadania",
        Rect::inches(0.4, 4.6, 9.0, 0.35),
        &note,
    )?;

    Ok(canvas.finish())
}

pub(super) fn tasks(theme: &Theme, number: PageNumber) -> Result<Page> {
    let mut canvas = standard_page(theme, Some("ZADANIA PROJEKTOWE"), number)?;

    let critical = CellStyle::default().color(Role::PrimaryAccent).bold();
    let table = Table::new(vec![
        TableRow::styled(["ID", "Zadanie", "Czas bazowy (h)", "Priorytet"], CellStyle::header()),
        TableRow::new(vec![
            "Z1".into(),
            "Architektura systemu".into(),
            "40".into(),
            TableCell::styled("KRYTYCZNY", critical),
        ]),
        TableRow::plain(["Z2", "Backend API", "80", "Wysoki"]),
        TableRow::plain(["Z3", "Frontend aplikacji", "60", "Wysoki"]),
        TableRow::plain(["Z4", "Baza danych", "30", "Średni"]),
        TableRow::plain(["Z5", "Testy automatyczne", "50", "Średni"]),
        TableRow::plain(["Z6", "Wdrożenie CI/CD", "25", "Niski"]),
    ])
    .col_widths([0.6, 2.4, 1.6, 1.5]);
    place_table(
        &mut canvas,
        &table,
        Rect::inches(0.4, 1.2, 6.1, 3.2),
        &theme_grid(theme, false, 11.0, 2.0),
    )?;

    let total = theme.heading(32.0, Role::SecondaryAccent).bold().align(HAlign::Center);
    place_text(&mut canvas, "Σ = 285h", Rect::inches(7.5, 1.5, 2.0, 0.8), &total)?;
    let caption = theme.body(10.0, Role::BodyText).align(HAlign::Center);
    place_text(&mut canvas, "łączny czas bazowy", Rect::inches(7.5, 2.2, 2.0, 0.4), &caption)?;

    place_text(
        &mut canvas,
        TextRun::styled("Koszt = Stawka × Czas × Efektywność", RunStyle::default().bold(true)),
        Rect::inches(0.4, 4.6, 9.0, 0.35),
        &theme.heading(14.0, Role::PrimaryAccent),
    )?;

    Ok(canvas.finish())
}
