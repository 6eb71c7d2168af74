//! Console table rendering

use crate::output::Table;

/// Formats a table with borders, left-aligned cells and a header separator
///
/// ```text
/// +----------+--------+
/// | Status   | Amount |
/// +----------+--------+
/// | Accepted | 1      |
/// +----------+--------+
/// ```
pub fn format_pretty(table: &Table) -> String {
    let widths = table.column_widths();
    let border = border_line(&widths);

    let mut out = String::new();
    out.push_str(&border);
    out.push_str(&row_line(table.header(), &widths));
    out.push_str(&border);
    for row in table.rows() {
        out.push_str(&row_line(row, &widths));
    }
    if !table.rows().is_empty() {
        out.push_str(&border);
    }
    out
}

fn border_line(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
    }
    line.push('\n');
    line
}

fn row_line(row: &[String], widths: &[usize]) -> String {
    let mut line = String::from("|");
    for (i, width) in widths.iter().enumerate() {
        let cell = row.get(i).map(String::as_str).unwrap_or("");
        let padding = width - cell.chars().count();
        line.push(' ');
        line.push_str(cell);
        line.push_str(&" ".repeat(padding + 1));
        line.push('|');
    }
    line.push('\n');
    line
}

/// Writes the pretty table to stdout
pub fn print_pretty(table: &Table) {
    print!("{}", format_pretty(table));
}
