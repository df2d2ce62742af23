//! Fixed-width markdown tables.

use std::fmt::Write;

/// A markdown table whose cells are left-padded to per-column widths.
pub(crate) struct Table<'a> {
    columns: &'a [(&'a str, usize)],
    out: String,
}

impl<'a> Table<'a> {
    pub(crate) fn new(columns: &'a [(&'a str, usize)]) -> Self {
        let mut out = String::new();
        let header: Vec<_> = columns.iter().map(|(title, width)| pad(title, *width)).collect();
        let rule: Vec<_> = columns.iter().map(|(_, width)| format!(":{}", "-".repeat(width.saturating_sub(1)))).collect();
        push_row(&mut out, &header);
        push_row(&mut out, &rule);
        Self { columns, out }
    }

    pub(crate) fn row<S: AsRef<str>>(&mut self, cells: &[S]) {
        let cells: Vec<_> = self
            .columns
            .iter()
            .zip(cells)
            .map(|((_, width), cell)| pad(cell.as_ref(), *width))
            .collect();
        push_row(&mut self.out, &cells);
    }

    pub(crate) fn finish(self) -> String {
        self.out
    }
}

fn pad(cell: &str, width: usize) -> String {
    format!("{cell:<width$}")
}

fn push_row(out: &mut String, cells: &[String]) {
    let _ = writeln!(out, "| {} |", cells.join(" | "));
}

/// `["a", "b", "c"]` → `a, b, and c`.
pub(crate) fn join_series(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{first} and {second}"),
        [head @ .., last] => format!("{}, and {last}", head.join(", ")),
    }
}
