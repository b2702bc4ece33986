//! Box-drawn tables for listings and comparisons.

use console::{measure_text_width, pad_str, Alignment};

/// A simple table for formatted output.
///
/// Widths are measured in terminal columns, so styled cells and the rupee
/// sign line up.
#[derive(Debug)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    column_widths: Vec<usize>,
}

impl Table {
    /// Create a new table with the given headers.
    pub fn new<S: AsRef<str>>(headers: impl IntoIterator<Item = S>) -> Self {
        let headers: Vec<String> = headers
            .into_iter()
            .map(|h| h.as_ref().to_string())
            .collect();
        let column_widths = headers.iter().map(|h| measure_text_width(h)).collect();

        Self {
            headers,
            rows: Vec::new(),
            column_widths,
        }
    }

    /// Add a row. Cells past the header count are dropped.
    pub fn add_row<S: AsRef<str>>(&mut self, row: impl IntoIterator<Item = S>) {
        let row: Vec<String> = row
            .into_iter()
            .take(self.headers.len())
            .map(|c| c.as_ref().to_string())
            .collect();

        for (width, cell) in self.column_widths.iter_mut().zip(&row) {
            *width = (*width).max(measure_text_width(cell));
        }

        self.rows.push(row);
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render the table as a string.
    pub fn render(&self) -> String {
        let mut lines = vec![
            self.render_border('┌', '┬', '┐'),
            self.render_row(&self.headers),
            self.render_border('├', '┼', '┤'),
        ];
        lines.extend(self.rows.iter().map(|row| self.render_row(row)));
        lines.push(self.render_border('└', '┴', '┘'));
        lines.join("\n")
    }

    fn render_border(&self, left: char, mid: char, right: char) -> String {
        let segments: Vec<String> = self
            .column_widths
            .iter()
            .map(|w| "─".repeat(w + 2))
            .collect();
        format!("{}{}{}", left, segments.join(&mid.to_string()), right)
    }

    fn render_row(&self, row: &[String]) -> String {
        let mut s = String::from("│");
        for (i, width) in self.column_widths.iter().enumerate() {
            let cell = row.get(i).map(String::as_str).unwrap_or("");
            s.push(' ');
            s.push_str(&pad_str(cell, *width, Alignment::Left, None));
            s.push_str(" │");
        }
        s
    }
}
