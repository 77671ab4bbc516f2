//! Plain-text table rendering for `show table`

use tabulet::Table;

/// Render a table as a width-aligned text grid with a leading `Row` column.
pub fn render_table(table: &Table) -> String {
    let mut header: Vec<&str> = Vec::with_capacity(table.column_count() + 1);
    header.push("Row");
    header.extend(table.columns().iter().map(String::as_str));

    let width = table.column_count();
    let mut grid: Vec<Vec<&str>> = vec![header];
    for (name, cells) in table.rows() {
        let mut line = Vec::with_capacity(width + 1);
        line.push(name);
        for i in 0..width {
            line.push(cells.get(i).map(String::as_str).unwrap_or(""));
        }
        grid.push(line);
    }

    let mut widths = vec![0usize; width + 1];
    for line in &grid {
        for (i, cell) in line.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut out = String::new();
    for line in &grid {
        let mut rendered = String::new();
        for (i, cell) in line.iter().enumerate() {
            if i > 0 {
                rendered.push_str("  ");
            }
            rendered.push_str(cell);
            // pad every column but the last
            if i + 1 < line.len() {
                for _ in cell.chars().count()..widths[i] {
                    rendered.push(' ');
                }
            }
        }
        out.push_str(rendered.trim_end());
        out.push('\n');
    }
    out
}
