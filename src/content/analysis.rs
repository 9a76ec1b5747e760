//! Manual 3x3 walkthrough, optimisation results and their interpretation.
use super::{body, label, quiet_header, theme_grid};
use crate::common::Result;
use crate::deck::blocks::{add_card, add_code_block, add_highlight_box};
use crate::deck::geometry::Rect;
use crate::deck::model::PageNumber;
use crate::deck::page::Page;
use crate::deck::palette::Role;
use crate::deck::render::{place_table, place_text};
use crate::deck::table::{CellStyle, Table, TableCell, TableRow};
use crate::deck::template::standard_page;
use crate::deck::text::{HAlign, RichText};
use crate::deck::theme::Theme;

const TASKS_3X3: [&str; 3] = ["Arch.", "Backend", "Frontend"];

/// A 3x3 matrix with header row and column. Cells listed in `marked` get the
/// highlight fill.
fn small_matrix(values: [(&str, [&str; 3]); 3], marked: &[(usize, usize)]) -> Table {
    let mark = CellStyle::default().fill(Role::Highlight).bold();
    let mut rows = vec![TableRow::new(
        std::iter::once(TableCell::styled("", CellStyle::default().fill(Role::HeaderFill)))
            .chain(TASKS_3X3.map(|t| TableCell::styled(t, quiet_header())))
            .collect(),
    )];
    for (i, (name, row)) in values.into_iter().enumerate() {
        let mut cells = vec![TableCell::styled(name, quiet_header())];
        cells.extend(row.into_iter().enumerate().map(|(j, v)| {
            if marked.contains(&(i, j)) {
                TableCell::styled(v, mark)
            } else {
                TableCell::from(v)
            }
        }));
        rows.push(TableRow::new(cells));
    }
    Table::new(rows)
}

pub(super) fn manual(theme: &Theme, number: PageNumber) -> Result<Page> {
    let mut canvas = standard_page(theme, Some("ROZWIĄZANIE RĘCZNE (3×3)"), number)?;
    let style = theme_grid(theme, true, 10.0, 1.0);

    label(
        &mut canvas,
        "Macierz kosztów (uproszczona):",
        Rect::inches(0.4, 1.15, 4.0, 0.3),
        12.0,
        Role::BodyText,
    )?;
    let initial = small_matrix(
        [
            ("Anna", ["7.2", "15.8", "16.2"]),
            ("Bartek", ["7.2", "9.6", "9.4"]),
            ("Celina", ["8.0", "9.0", "4.8"]),
        ],
        &[],
    );
    place_table(&mut canvas, &initial, Rect::inches(0.4, 1.5, 4.0, 1.4), &style)?;

    let arrow = theme.heading(20.0, Role::PrimaryAccent).align(HAlign::Center);
    place_text(&mut canvas, "→", Rect::inches(4.5, 1.9, 0.5, 0.5), &arrow)?;

    label(&mut canvas, "Po redukcji:", Rect::inches(5.2, 1.15, 4.0, 0.3), 12.0, Role::BodyText)?;
    let reduced = small_matrix(
        [
            ("Anna", ["0", "6.2", "9.0"]),
            ("Bartek", ["0", "0", "2.2"]),
            ("Celina", ["3.2", "1.8", "0"]),
        ],
        &[(0, 0), (1, 1), (2, 2)],
    );
    place_table(&mut canvas, &reduced, Rect::inches(5.2, 1.5, 4.0, 1.4), &style)?;

    add_card(&mut canvas, Rect::inches(0.4, 3.2, 9.2, 1.8), Role::Success)?;
    label(&mut canvas, "Optymalny przydział:", Rect::inches(0.6, 3.35, 8.8, 0.35), 14.0, Role::Success)?;
    body(
        &mut canvas,
        RichText::new()
            .plain("Anna → Architektura (7 200 zł)  |  ")
            .plain("Bartek → Backend (9 600 zł)  |  ")
            .plain("Celina → Frontend (4 800 zł)"),
        Rect::inches(0.6, 3.8, 8.8, 0.4),
        12.0,
        None,
    )?;
    label(&mut canvas, "Koszt 3×3: 21 600 zł", Rect::inches(0.6, 4.3, 8.8, 0.4), 18.0, Role::SecondaryAccent)?;

    Ok(canvas.finish())
}

pub(super) fn results(theme: &Theme, number: PageNumber) -> Result<Page> {
    let mut canvas = standard_page(theme, Some("WYNIKI OPTYMALIZACJI"), number)?;

    let table = Table::new(vec![
        TableRow::styled(["Pracownik", "Rola", "Zadanie", "Koszt (zł)"], CellStyle::header()),
        TableRow::plain(["Anna", "Senior Developer", "Architektura systemu", "7 200"]),
        TableRow::plain(["Bartek", "Mid Developer", "Backend API", "9 600"]),
        TableRow::plain(["Celina", "Junior Developer", "Frontend aplikacji", "4 800"]),
        TableRow::plain(["Dawid", "DevOps Engineer", "Baza danych", "4 500"]),
        TableRow::plain(["Ewa", "QA Engineer", "Testy automatyczne", "5 000"]),
        TableRow::plain(["Filip", "UI/UX Designer", "Wdrożenie CI/CD", "5 850"]),
        TableRow::new(vec![
            TableCell::styled("SUMA", CellStyle::default().bold()),
            "".into(),
            "".into(),
            TableCell::styled("36 950", CellStyle::default().fill(Role::Highlight).bold()),
        ]),
    ])
    .col_widths([1.2, 1.8, 2.2, 1.3]);
    place_table(
        &mut canvas,
        &table,
        Rect::inches(0.4, 1.15, 6.5, 3.2),
        &theme_grid(theme, false, 11.0, 2.0),
    )?;

    add_highlight_box(&mut canvas, "36 950 zł", Rect::inches(7.2, 1.3, 2.4, 0.9))?;
    let caption = theme.heading(10.0, Role::BodyText).bold().align(HAlign::Center);
    place_text(&mut canvas, "MINIMALNY KOSZT", Rect::inches(7.2, 2.25, 2.4, 0.35), &caption)?;

    add_card(&mut canvas, Rect::inches(7.2, 2.8, 2.4, 1.5), Role::Success)?;
    label(&mut canvas, "Oszczędność", Rect::inches(7.35, 2.95, 2.1, 0.3), 11.0, Role::Success)?;
    let savings = theme.heading(14.0, Role::BodyText).bold().align(HAlign::Center);
    place_text(&mut canvas, "1 980 zł\n(5.1%)", Rect::inches(7.35, 3.3, 2.1, 0.8), &savings)?;

    add_code_block(
        &mut canvas,
        "> Status: Optimal\n> Solver: CBC\n> Time: < 0.01s",
        Rect::inches(0.4, 4.5, 3.0, 0.65),
    )?;

    Ok(canvas.finish())
}

pub(super) fn interpretation(theme: &Theme, number: PageNumber) -> Result<Page> {
    let mut canvas = standard_page(theme, Some("INTERPRETACJA"), number)?;

    add_card(&mut canvas, Rect::inches(0.4, 1.15, 9.2, 1.5), Role::PrimaryAccent)?;
    label(
        &mut canvas,
        "Rekomendacja dla kierownika projektu:",
        Rect::inches(0.6, 1.3, 8.8, 0.35),
        14.0,
        Role::PrimaryAccent,
    )?;
    body(
        &mut canvas,
        RichText::new()
            .plain("Aby zminimalizować koszty realizacji projektu ABC, należy przydzielić:\n")
            .plain("• Senior Developer (Anna) do architektury (zadanie krytyczne)\n")
            .plain("• DevOps (Dawid) do bazy danych (nie CI/CD!) - niższy koszt przy tej samej efektywności"),
        Rect::inches(0.6, 1.7, 8.8, 0.85),
        11.0,
        Some(16.0),
    )?;

    label(
        &mut canvas,
        "Kluczowe spostrzeżenia:",
        Rect::inches(0.4, 2.85, 9.0, 0.35),
        14.0,
        Role::SecondaryAccent,
    )?;

    let insights = [
        ("Dawid", "DevOps przy bazie\n(nie CI/CD!)", Role::PrimaryAccent),
        ("Celina", "Junior → Frontend\n(najniższy koszt)", Role::SecondaryAccent),
        ("Filip", "UI/UX → CI/CD\n(zaskoczenie!)", Role::Success),
    ];
    for (i, (name, desc, accent)) in insights.into_iter().enumerate() {
        let x = 0.4 + i as f64 * 3.1;
        add_card(&mut canvas, Rect::inches(x, 3.3, 2.9, 1.3), accent)?;
        label(&mut canvas, name, Rect::inches(x + 0.15, 3.45, 2.6, 0.35), 14.0, accent)?;
        body(&mut canvas, desc, Rect::inches(x + 0.15, 3.85, 2.6, 0.6), 10.0, Some(14.0))?;
    }

    Ok(canvas.finish())
}
