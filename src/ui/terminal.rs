//! Terminal row container: draws the entry table and single-row refreshes.

use crate::core::presenter::{RowSink, RowView};
use crate::errors::AppResult;
use crate::models::field::EntryField;
use crate::utils::formatting::{bold, pad_left};
use crate::utils::table::{Column, Table};
use std::io::Write;

const DATE_W: usize = 12; // "Sep 15, 2025"
const TIME_W: usize = 8; // "12:00 PM"
const INDEX_W: usize = 3;
const MIN_OFFICE_W: usize = 8;

fn office_width(office: &str) -> usize {
    unicode_width::UnicodeWidthStr::width(office)
}

pub struct TerminalSink<W: Write> {
    out: W,
    separator: char,
    office_w: usize,
    styled: bool,
}

impl<W: Write> TerminalSink<W> {
    pub fn new(out: W, separator: char) -> Self {
        Self {
            out,
            separator,
            office_w: MIN_OFFICE_W,
            styled: false,
        }
    }

    /// Bold headers (for a real terminal).
    pub fn styled(mut self, styled: bool) -> Self {
        self.styled = styled;
        self
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn table(&self) -> Table {
        Table::new(
            vec![
                Column::new("#", INDEX_W),
                Column::new("Office", self.office_w),
                Column::new("Date", DATE_W),
                Column::new("In", TIME_W),
                Column::new("Out", TIME_W),
            ],
            self.separator,
        )
    }

    fn cells(index: usize, row: &RowView) -> Vec<String> {
        let mut cells = vec![pad_left(&index.to_string(), 2)];
        cells.extend(EntryField::ALL.iter().map(|f| row.cell(*f).to_string()));
        cells
    }

    fn write_table(&mut self, table: &Table) -> AppResult<()> {
        let rendered = table.render();
        let mut lines = rendered.lines();
        if let Some(header) = lines.next() {
            if self.styled {
                writeln!(self.out, "{}", bold(header))?;
            } else {
                writeln!(self.out, "{header}")?;
            }
        }
        for line in lines {
            writeln!(self.out, "{line}")?;
        }
        Ok(())
    }
}

impl<W: Write> RowSink for TerminalSink<W> {
    fn reload_all(&mut self, rows: &[RowView]) -> AppResult<()> {
        self.office_w = rows
            .iter()
            .map(|r| office_width(&r.office))
            .max()
            .unwrap_or(0)
            .max(MIN_OFFICE_W);

        let mut table = self.table();
        for (i, row) in rows.iter().enumerate() {
            table.add_row(Self::cells(i, row));
        }
        self.write_table(&table)?;

        if rows.is_empty() {
            writeln!(self.out, "(no work entries)")?;
        }
        Ok(())
    }

    fn reload_row(&mut self, index: usize, row: &RowView) -> AppResult<()> {
        // a longer office widens the column: restate the header at the new width
        let width = office_width(&row.office);
        if width > self.office_w {
            self.office_w = width;
            let header = self.table();
            self.write_table(&header)?;
        }

        let line = self.table().render_row(&Self::cells(index, row));
        writeln!(self.out, "{line}")?;
        Ok(())
    }
}
