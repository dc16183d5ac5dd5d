//! Plain-text tables for `--format table`.

const GAP: &str = "  ";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Align {
    Left,
    Right,
}

#[derive(Debug)]
struct Column {
    width: usize,
    align: Align,
}

impl Column {
    /// Width is the widest of header and cells; coordinates and counts align right.
    fn measure(header: &str, cells: &[&str]) -> Self {
        let width = cells
            .iter()
            .map(|cell| cell.chars().count())
            .chain(std::iter::once(header.chars().count()))
            .max()
            .unwrap_or(0);

        let mut values = cells.iter().filter(|cell| **cell != "-").peekable();
        let numeric = values.peek().is_some() && values.all(|cell| is_number(cell));

        Self {
            width,
            align: if numeric { Align::Right } else { Align::Left },
        }
    }

    fn pad(&self, text: &str) -> String {
        // Room names carry umlauts, so pad by chars rather than bytes.
        let fill = " ".repeat(self.width.saturating_sub(text.chars().count()));
        match self.align {
            Align::Left => format!("{text}{fill}"),
            Align::Right => format!("{fill}{text}"),
        }
    }
}

/// Render `rows` under `headers`; a row shorter than the header shows `-`.
///
/// With `color` set, confidence ratings and highlight flags are wrapped in
/// ANSI color after padding so the escapes never count towards the width.
#[must_use]
pub fn render_rows(headers: &[&str], rows: &[Vec<String>], color: bool) -> String {
    let grid: Vec<Vec<&str>> = rows
        .iter()
        .map(|row| {
            (0..headers.len())
                .map(|index| row.get(index).map_or("-", String::as_str))
                .collect()
        })
        .collect();

    let columns: Vec<Column> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            let cells: Vec<&str> = grid.iter().map(|row| row[index]).collect();
            Column::measure(header, &cells)
        })
        .collect();

    let total = columns.iter().map(|c| c.width).sum::<usize>()
        + GAP.len() * columns.len().saturating_sub(1);

    let mut lines = Vec::with_capacity(grid.len() + 2);
    lines.push(join_line(headers, &columns, false));
    lines.push("-".repeat(total));
    lines.extend(grid.iter().map(|row| join_line(row, &columns, color)));
    lines.join("\n")
}

fn join_line(cells: &[&str], columns: &[Column], color: bool) -> String {
    let line = cells
        .iter()
        .zip(columns)
        .map(|(cell, column)| {
            let padded = column.pad(cell);
            match color_code(cell) {
                Some(code) if color => format!("\u{1b}[{code}m{padded}\u{1b}[0m"),
                _ => padded,
            }
        })
        .collect::<Vec<_>>()
        .join(GAP);
    line.trim_end().to_string()
}

fn is_number(cell: &str) -> bool {
    cell.chars().any(|ch| ch.is_ascii_digit()) && cell.parse::<f64>().is_ok()
}

fn color_code(cell: &str) -> Option<&'static str> {
    match cell {
        "CONFIRMED" | "true" => Some("32"),
        "LIKELY" => Some("33"),
        "UNKNOWN" => Some("31"),
        _ => None,
    }
}
