//! Cost matrix, mathematical model and solution method.
use super::{body, label, theme_grid};
use crate::common::Result;
use crate::deck::blocks::{add_card, add_code_block};
use crate::deck::geometry::Rect;
use crate::deck::model::PageNumber;
use crate::deck::page::Page;
use crate::deck::palette::Role;
use crate::deck::render::{place_rectangle, place_table, place_text};
use crate::deck::table::{BorderSpec, CellStyle, Table, TableCell, TableRow};
use crate::deck::template::standard_page;
use crate::deck::text::{HAlign, RichText};
use crate::deck::theme::Theme;

/// Costs per employee and task, with the optimal cell of each row.
const COSTS: [(&str, [&str; 6], usize); 6] = [
    ("Anna", ["7 200", "15 840", "16 200", "6 480", "16 200", "6 300"], 0),
    ("Bartek", ["7 200", "9 600", "9 360", "3 960", "9 600", "4 500"], 1),
    ("Celina", ["8 000", "8 960", "4 800", "4 320", "5 600", "4 000"], 2),
    ("Dawid", ["7 800", "18 000", "18 000", "4 500", "11 250", "3 750"], 3),
    ("Ewa", ["8 000", "14 400", "9 600", "5 100", "5 000", "4 000"], 4),
    ("Filip", ["11 440", "20 800", "8 580", "8 580", "12 350", "5 850"], 5),
];

pub(super) fn cost_matrix(theme: &Theme, number: PageNumber) -> Result<Page> {
    let mut canvas = standard_page(theme, Some("MACIERZ KOSZTÓW (zł)"), number)?;

    let optimal = CellStyle::default().fill(Role::Success).bold();
    let mut rows = vec![TableRow::new(
        std::iter::once(TableCell::styled("", CellStyle::default().fill(Role::HeaderFill)))
            .chain(["Z1", "Z2", "Z3", "Z4", "Z5", "Z6"].map(TableCell::header))
            .collect(),
    )];
    for (name, costs, best) in COSTS {
        let mut cells = vec![TableCell::header(name)];
        cells.extend(costs.iter().enumerate().map(|(j, cost)| {
            if j == best {
                TableCell::styled(*cost, optimal)
            } else {
                TableCell::from(*cost)
            }
        }));
        rows.push(TableRow::new(cells));
    }

    let table = Table::new(rows).col_widths([1.1, 1.35, 1.35, 1.35, 1.35, 1.35, 1.35]);
    place_table(
        &mut canvas,
        &table,
        Rect::inches(0.4, 1.15, 9.2, 3.0),
        &theme_grid(theme, true, 11.0, 2.0),
    )?;

    place_rectangle(
        &mut canvas,
        Rect::inches(0.4, 4.4, 0.3, 0.3),
        Role::Success,
        Some(BorderSpec {
            weight_pt: 1.0,
            role: Role::Border,
        }),
    )?;
    body(&mut canvas, "= optymalny przydział", Rect::inches(0.8, 4.4, 3.0, 0.3), 11.0, None)?;
    place_text(
        &mut canvas,
        "c_ij = stawka_i × czas_j × efektywność_ij",
        Rect::inches(5.0, 4.4, 4.5, 0.3),
        &theme.heading(11.0, Role::SecondaryAccent),
    )?;

    Ok(canvas.finish())
}

pub(super) fn model(theme: &Theme, number: PageNumber) -> Result<Page> {
    let mut canvas = standard_page(theme, Some("MODEL MATEMATYCZNY"), number)?;

    label(&mut canvas, "Zmienne decyzyjne", Rect::inches(0.4, 1.15, 4.5, 0.35), 14.0, Role::PrimaryAccent)?;
    add_code_block(
        &mut canvas,
        "x_ij ∈ {0, 1}\n\nx_ij = 1  jeśli pracownik i\n          przydzielony do zadania j\nx_ij = 0  w przeciwnym przypadku",
        Rect::inches(0.4, 1.55, 4.5, 1.4),
    )?;

    label(&mut canvas, "Funkcja celu", Rect::inches(5.2, 1.15, 4.5, 0.35), 14.0, Role::PrimaryAccent)?;
    add_code_block(
        &mut canvas,
        "min Z = Σᵢ Σⱼ cᵢⱼ · xᵢⱼ\n\nMinimalizacja całkowitego\nkosztu przydziału",
        Rect::inches(5.2, 1.55, 4.4, 1.4),
    )?;

    label(&mut canvas, "Ograniczenia", Rect::inches(0.4, 3.15, 9.0, 0.35), 14.0, Role::PrimaryAccent)?;
    let constraints = [
        (0.4, "Każdy pracownik → 1 zadanie", "Σⱼ xᵢⱼ = 1   ∀i ∈ {1,...,6}"),
        (5.1, "Każde zadanie → 1 pracownik", "Σᵢ xᵢⱼ = 1   ∀j ∈ {1,...,6}"),
    ];
    for (x, caption, formula) in constraints {
        add_card(&mut canvas, Rect::inches(x, 3.55, 4.5, 1.5), Role::SecondaryAccent)?;
        let caption_style = theme.body(11.0, Role::SecondaryAccent).bold();
        place_text(&mut canvas, caption, Rect::inches(x + 0.15, 3.65, 4.2, 0.35), &caption_style)?;
        place_text(
            &mut canvas,
            formula,
            Rect::inches(x + 0.15, 4.1, 4.2, 0.4),
            &theme.heading(14.0, Role::BodyText),
        )?;
    }

    Ok(canvas.finish())
}

pub(super) fn method(theme: &Theme, number: PageNumber) -> Result<Page> {
    let mut canvas = standard_page(theme, Some("METODA ROZWIĄZANIA"), number)?;

    add_card(&mut canvas, Rect::inches(0.4, 1.15, 4.5, 2.3), Role::PrimaryAccent)?;
    label(&mut canvas, "01 METODA WĘGIERSKA", Rect::inches(0.55, 1.3, 4.2, 0.35), 14.0, Role::PrimaryAccent)?;
    body(
        &mut canvas,
        RichText::new()
            .plain("Algorytm dla problemu przydziału\n\n")
            .bold("Kroki:\n")
            .plain("1. Redukcja wierszy\n")
            .plain("2. Redukcja kolumn\n")
            .plain("3. Pokrycie zer liniami\n")
            .plain("4. Optymalizacja\n\n")
            .bold("Złożoność: O(n³)"),
        Rect::inches(0.55, 1.75, 4.2, 2.0),
        11.0,
        Some(16.0),
    )?;

    add_card(&mut canvas, Rect::inches(5.1, 1.15, 4.5, 2.3), Role::SecondaryAccent)?;
    label(&mut canvas, "02 PuLP (ILP SOLVER)", Rect::inches(5.25, 1.3, 4.2, 0.35), 14.0, Role::SecondaryAccent)?;
    body(
        &mut canvas,
        RichText::new()
            .plain("Python + CBC Solver\n\n")
            .bold("Zalety:\n")
            .plain("• Szybkie rozwiązanie\n")
            .plain("• Zmienne binarne\n")
            .plain("• Analiza wrażliwości\n")
            .plain("• Skalowalne\n\n")
            .bold("Czas: < 1 sekunda"),
        Rect::inches(5.25, 1.75, 4.2, 2.0),
        11.0,
        Some(16.0),
    )?;

    let manual = theme.heading(10.0, Role::PrimaryAccent).align(HAlign::Center);
    place_text(&mut canvas, "RĘCZNIE", Rect::inches(1.8, 3.6, 1.5, 0.3), &manual)?;
    let arrow = theme.heading(24.0, Role::BodyText).align(HAlign::Center);
    place_text(&mut canvas, "→", Rect::inches(4.6, 3.5, 0.8, 0.5), &arrow)?;
    let programmatic = theme.heading(10.0, Role::SecondaryAccent).align(HAlign::Center);
    place_text(&mut canvas, "PROGRAMOWO", Rect::inches(6.5, 3.6, 1.8, 0.3), &programmatic)?;

    add_code_block(
        &mut canvas,
        "from pulp import *\nmodel = LpProblem(\"Assignment\", LpMinimize)\nx = LpVariable.dicts(\"x\", [...], cat=\"Binary\")\nmodel.solve()",
        Rect::inches(0.4, 4.1, 9.2, 0.95),
    )?;

    Ok(canvas.finish())
}
