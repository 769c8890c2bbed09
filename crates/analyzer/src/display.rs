//! Tabular rendering of pattern groups for duplicate/collision diagnostics.

use crate::pattern::{Pattern, PatternId};

// Column names when printing offending pattern groups.
const NAME_COL: &str = "NAME";
const VALUE_COL: &str = "LITERAL VALUE";
const ONES_COL: &str = "ONES VALUE";
const TEMPLATE_COL: &str = "TEMPLATE";

/// Number of hex digits used for the values of a `bits`-wide table: enough
/// digits for the width, rounded up to an even count.
pub fn hex_width(bits: usize) -> usize {
    let digits = (bits + 3) / 4;
    digits + digits % 2
}

/// Render a group of patterns as an aligned table: one row per pattern with
/// its name, literal value, all-variable-bits-set value, and template.
/// Column widths are measured from the rows and headers involved, so the
/// table never depends on state outside this call.
pub fn constraint_table(patterns: &[Pattern], members: &[PatternId], bits: usize) -> String {
    let hexw = hex_width(bits);
    let rows: Vec<[String; 4]> = members
        .iter()
        .map(|id| {
            let pat = &patterns[id.index()];
            [
                pat.name.to_string(),
                format!("0x{:01$X}", pat.value, hexw),
                format!("0x{:01$X}", pat.ones, hexw),
                pat.template.to_string(),
            ]
        })
        .collect();

    let headers = [NAME_COL, VALUE_COL, ONES_COL, TEMPLATE_COL];
    let mut widths = [0usize; 4];
    for (col, width) in widths.iter_mut().enumerate() {
        *width = rows
            .iter()
            .map(|row| row[col].len())
            .fold(headers[col].len(), usize::max);
    }

    let mut lines = vec![format_row(headers.map(String::from), &widths)];
    lines.extend(rows.into_iter().map(|row| format_row(row, &widths)));
    lines.join("\n")
}

fn format_row(cells: [String; 4], widths: &[usize; 4]) -> String {
    let [name, value, ones, template] = cells;
    format!(
        "{:<4$} {:<5$} {:<6$} {:<7$}",
        name, value, ones, template, widths[0], widths[1], widths[2], widths[3]
    )
    .trim_end()
    .to_string()
}
