use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use swimreg_model::{Provenance, Reconciliation};

pub fn print_reconciliation(result: &Reconciliation) {
    println!("Class: {}", result.descriptor.full_name);
    println!("Program: {}", result.descriptor.program);
    if !result.descriptor.day.is_empty() || !result.descriptor.time.is_empty() {
        println!(
            "Schedule: {} {}",
            result.descriptor.day, result.descriptor.time
        );
    }
    match result.stage {
        Some(stage) => println!("Stage: {stage}"),
        None => println!("Stage: (none detected)"),
    }
    if result.roster.provenance == Provenance::Synthetic {
        println!("WARNING: {}", Provenance::Synthetic.description());
    }

    let mut table = Table::new();
    let mut header = vec![header_cell("Student"), header_cell("Match")];
    for skill_header in result.skills.headers() {
        header.push(header_cell(skill_header));
    }
    table.set_header(header);
    apply_table_style(&mut table);

    for student in &result.roster.students {
        let name = format!("{} {}", student.first_name, student.last_name);
        let name_cell = if student.provenance == Provenance::Synthetic {
            Cell::new(name).fg(Color::Yellow)
        } else {
            Cell::new(name)
        };
        let mut row = vec![name_cell, Cell::new(student.reason.to_string())];
        for skill_header in result.skills.headers() {
            let value = student
                .skills
                .get(skill_header)
                .map(String::as_str)
                .unwrap_or_default();
            row.push(Cell::new(value));
        }
        table.add_row(row);
    }
    println!("{table}");
    println!(
        "{} student(s), {} skill column(s)",
        result.roster.students.len(),
        result.skills.len()
    );
}

pub fn print_classes(classes: &[(String, usize)]) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Class"), header_cell("Enrolled")]);
    apply_table_style(&mut table);
    for (name, count) in classes {
        table.add_row(vec![Cell::new(name), Cell::new(count)]);
    }
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold).fg(Color::Cyan)
}
