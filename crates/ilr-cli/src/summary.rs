use std::fmt::Display;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use ilr_model::{Severity, ValidationIssue};

use ilr_cli::types::ValidationRunResult;

/// Issue rows printed before the table is cut short.
const MAX_ISSUE_ROWS: usize = 200;

pub fn print_summary(result: &ValidationRunResult) {
    println!("Message: {}", result.message_path.display());
    println!("UKPRN: {}", result.ukprn);
    println!("Academic year: {}", result.academic_year);
    println!(
        "Reference: {}{}",
        result.reference_dir.display(),
        if result.checksums_verified {
            ""
        } else {
            " (checksums not verified)"
        }
    );
    match &result.report_path {
        Some(path) => println!("Report: {}", path.display()),
        None => println!("Report: not written (dry run)"),
    }
    println!(
        "Learners: {} | Rules run: {}",
        result.report.learner_count, result.rule_count
    );
    print_rule_table(result);
    print_issue_table(&result.report.issues);
}

fn print_rule_table(result: &ValidationRunResult) {
    let report = &result.report;
    if report.issues.is_empty() {
        println!("No issues raised.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rule"),
        header_cell("Category"),
        header_cell("Severity"),
        header_cell("Issues"),
        header_cell("Learners"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Center);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);

    for (rule, count) in report.rule_counts() {
        let mut learners: Vec<&str> = report
            .issues
            .iter()
            .filter(|issue| issue.rule_name == rule)
            .map(|issue| issue.learn_ref_number.as_str())
            .collect();
        learners.sort_unstable();
        learners.dedup();
        let Some(first) = report.issues.iter().find(|issue| issue.rule_name == rule) else {
            continue;
        };
        table.add_row(vec![
            Cell::new(&rule)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            category_cell(first.category.as_deref()),
            severity_cell(first.severity),
            count_cell(count, severity_color(first.severity)),
            Cell::new(learners.len()),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
        Cell::new(report.issues.len()).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    println!("{table}");
    println!(
        "Fails: {} | Errors: {} | Warnings: {}",
        report.fail_count(),
        report.error_count(),
        report.warning_count()
    );
}

fn print_issue_table(issues: &[ValidationIssue]) {
    if issues.is_empty() {
        return;
    }
    let mut ordered: Vec<&ValidationIssue> = issues.iter().collect();
    ordered.sort_by(|a, b| {
        a.severity
            .cmp(&b.severity)
            .then_with(|| a.learn_ref_number.cmp(&b.learn_ref_number))
            .then_with(|| a.aim_seq_number.cmp(&b.aim_seq_number))
            .then_with(|| a.rule_name.cmp(&b.rule_name))
    });

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Severity"),
        header_cell("Learner"),
        header_cell("Aim"),
        header_cell("Rule"),
        header_cell("Message"),
        header_cell("Parameters"),
    ]);
    apply_issue_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Center);
    align_column(&mut table, 2, CellAlignment::Right);
    for issue in ordered.iter().take(MAX_ISSUE_ROWS) {
        let aim = match issue.aim_seq_number {
            Some(seq) => Cell::new(seq),
            None => dim_cell("-"),
        };
        table.add_row(vec![
            severity_cell(issue.severity),
            Cell::new(&issue.learn_ref_number),
            aim,
            Cell::new(&issue.rule_name),
            Cell::new(&issue.message),
            parameters_cell(issue),
        ]);
    }
    println!();
    println!("Issues:");
    println!("{table}");
    if ordered.len() > MAX_ISSUE_ROWS {
        println!(
            "... {} more issues in the JSON report",
            ordered.len() - MAX_ISSUE_ROWS
        );
    }
}

fn parameters_cell(issue: &ValidationIssue) -> Cell {
    if issue.parameters.is_empty() {
        return dim_cell("-");
    }
    let rendered = issue
        .parameters
        .iter()
        .map(|parameter| format!("{}={}", parameter.property_name, parameter.value))
        .collect::<Vec<_>>()
        .join(", ");
    Cell::new(rendered).fg(Color::DarkGrey)
}

fn category_cell(category: Option<&str>) -> Cell {
    match category {
        Some(label) => Cell::new(label),
        None => dim_cell("-"),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(120);
}

fn apply_issue_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(180);
    if table.column_count() >= 6 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Fixed(9)),
            ColumnConstraint::UpperBoundary(Width::Fixed(14)),
            ColumnConstraint::LowerBoundary(Width::Fixed(5)),
            ColumnConstraint::UpperBoundary(Width::Fixed(20)),
            ColumnConstraint::UpperBoundary(Width::Percentage(45)),
            ColumnConstraint::UpperBoundary(Width::Percentage(30)),
        ]);
    }
}

pub fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn severity_cell(severity: Severity) -> Cell {
    match severity {
        Severity::Fail => Cell::new("FAIL")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        Severity::Error => Cell::new("ERROR").fg(Color::Red),
        Severity::Warning => Cell::new("WARN").fg(Color::Yellow),
    }
}

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Fail | Severity::Error => Color::Red,
        Severity::Warning => Color::Yellow,
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

pub fn dim_cell<T: Display>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
