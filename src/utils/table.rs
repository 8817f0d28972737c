//! Table rendering utilities for CLI outputs.

use super::formatting::pad_right;
use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    pub fn new(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width: width.max(UnicodeWidthStr::width(header)),
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
    pub separator: char,
}

impl Table {
    pub fn new(columns: Vec<Column>, separator: char) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            separator,
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Render a single row with the table's column widths.
    pub fn render_row(&self, row: &[String]) -> String {
        let mut out = String::new();
        for (i, col) in self.columns.iter().enumerate() {
            let cell = row.get(i).map(String::as_str).unwrap_or("");
            out.push_str(&pad_right(cell, col.width));
            out.push(' ');
        }
        out.trim_end().to_string()
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        let header: Vec<String> = self.columns.iter().map(|c| c.header.clone()).collect();
        out.push_str(&self.render_row(&header));
        out.push('\n');

        let total: usize = self.columns.iter().map(|c| c.width + 1).sum();
        out.push_str(
            &self
                .separator
                .to_string()
                .repeat(total.saturating_sub(1)),
        );
        out.push('\n');

        for row in &self.rows {
            out.push_str(&self.render_row(row));
            out.push('\n');
        }

        out
    }
}
