use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use synastry::chart::{Element, Person};
use synastry::optimizer::TeamFormation;
use synastry::scorer::{MatrixResult, ScoreMatrix};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn member_names(persons: &[Person]) -> String {
    persons
        .iter()
        .map(|p| p.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn print_teams(formation: &TeamFormation) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("Members").add_attribute(Attribute::Bold),
        Cell::new("Size"),
        Cell::new("Score").fg(Color::Cyan),
    ]);
    if let Some(col) = table.column_mut(3) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    for (i, team) in formation.teams.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(member_names(&team.members)),
            Cell::new(team.members.len()),
            Cell::new(format!("{:.2}", team.score)).fg(Color::Cyan),
        ]);
    }
    println!("\n{}", table);

    if !formation.leftover.is_empty() {
        println!("Leftover: {}", member_names(&formation.leftover));
    }
    println!(
        "Best of iteration {} (seed {})",
        formation.iteration, formation.seed
    );
    println!("Total Score: {:.2}", formation.total_score);
}

pub fn print_comparison(first: &str, second: &str, result: &MatrixResult, score: f64) {
    println!("\n{} x {}", first, second);

    let mut stats = new_table();
    stats.add_row(vec![
        Cell::new("Point").add_attribute(Attribute::Bold),
        Cell::new("Positive").fg(Color::Green),
        Cell::new("Negative").fg(Color::Red),
    ]);
    let points: Vec<Element> = result
        .positive
        .keys()
        .chain(result.negative.keys())
        .copied()
        .collect::<std::collections::BTreeSet<_>>()
        .into_iter()
        .collect();
    for point in points {
        stats.add_row(vec![
            Cell::new(point),
            Cell::new(format!("{:.2}", result.positive_of(point))).fg(Color::Green),
            Cell::new(format!("{:.2}", result.negative_of(point))).fg(Color::Red),
        ]);
    }
    println!("{}", stats);

    if !result.aspects.is_empty() {
        let mut aspects = new_table();
        aspects.add_row(vec![
            Cell::new("Aspect").add_attribute(Attribute::Bold),
            Cell::new(first),
            Cell::new(second),
            Cell::new("Orb"),
            Cell::new("Mod"),
            Cell::new("Stat"),
            Cell::new("Nature"),
        ]);
        for hit in &result.aspects {
            aspects.add_row(vec![
                Cell::new(hit.aspect),
                Cell::new(hit.first),
                Cell::new(hit.second),
                Cell::new(format!("{:.2}", hit.orb)),
                Cell::new(format!("x{:.0}", hit.modifier)),
                Cell::new(format!("{:.2}", hit.contribution)),
                Cell::new(format!("{:?}", hit.nature)),
            ]);
        }
        println!("{}", aspects);
    }

    if !result.overlays.is_empty() {
        let mut overlays = new_table();
        overlays.add_row(vec![
            Cell::new("House of").add_attribute(Attribute::Bold),
            Cell::new("House"),
            Cell::new("Placement of"),
            Cell::new("Point"),
            Cell::new("Stat"),
        ]);
        for o in &result.overlays {
            overlays.add_row(vec![
                Cell::new(&o.house_owner),
                Cell::new(format!("{} ({})", o.house.number(), o.house.element())),
                Cell::new(&o.placement_owner),
                Cell::new(o.element),
                Cell::new(format!("{:.2}", o.stat)),
            ]);
        }
        println!("{}", overlays);
    }

    println!("Pair Score: {:.2}", score);
}

pub fn print_matrix(persons: &[Person], matrix: &ScoreMatrix) {
    let mut table = new_table();

    let mut header = vec![Cell::new("").add_attribute(Attribute::Bold)];
    header.extend(
        persons
            .iter()
            .map(|p| Cell::new(&p.name).add_attribute(Attribute::Bold)),
    );
    table.add_row(header);

    for (i, row) in matrix.rows().iter().enumerate() {
        let mut cells = vec![Cell::new(&persons[i].name).add_attribute(Attribute::Bold)];
        cells.extend(row.iter().map(|v| {
            Cell::new(format!("{:.1}", v)).set_alignment(CellAlignment::Right)
        }));
        table.add_row(cells);
    }
    println!("\n{}", table);
}
