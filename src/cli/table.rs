use std::io::{self, Write};

use crate::ledger::Expense;

use super::output::Output;

const RULE_WIDTH: usize = 50;

/// Declarative description of a table column. A width of zero leaves the cell unpadded.
#[derive(Debug, Clone)]
pub struct TableColumn {
    pub header: String,
    pub width: usize,
}

impl TableColumn {
    pub fn new(header: impl Into<String>, width: usize) -> Self {
        Self {
            header: header.into(),
            width,
        }
    }
}

/// Simple fixed-width table model.
#[derive(Debug, Clone)]
pub struct Table {
    pub columns: Vec<TableColumn>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<TableColumn>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row<S: Into<String>>(&mut self, cells: Vec<S>) {
        self.rows
            .push(cells.into_iter().map(|value| value.into()).collect());
    }

    fn format_line<'a>(&self, cells: impl Iterator<Item = &'a str>) -> String {
        let mut line = String::new();
        for (column, cell) in self.columns.iter().zip(cells) {
            line.push_str(&format!("{:<width$}", cell, width = column.width));
        }
        line.trim_end().to_string()
    }
}

/// Renders [`Table`] instances using padded columns under a dashed rule.
pub struct TableRenderer;

impl TableRenderer {
    pub fn render<W: Write>(table: &Table, out: &mut Output<W>) -> io::Result<()> {
        let header = table.format_line(table.columns.iter().map(|col| col.header.as_str()));
        out.blank_line()?;
        out.title(header)?;
        out.line("-".repeat(RULE_WIDTH))?;
        for row in &table.rows {
            let cells = table
                .columns
                .iter()
                .enumerate()
                .map(|(idx, _)| row.get(idx).map(String::as_str).unwrap_or(""));
            out.line(table.format_line(cells))?;
        }
        Ok(())
    }
}

/// Two-decimal amount prefixed with the currency symbol.
pub fn format_amount(currency: &str, amount: f64) -> String {
    format!("{currency}{amount:.2}")
}

/// Builds the date/category/amount/note listing shown by the list operation.
pub fn expense_table(expenses: &[&Expense], currency: &str) -> Table {
    let mut table = Table::new(vec![
        TableColumn::new("Date", 12),
        TableColumn::new("Category", 15),
        TableColumn::new("Amount", 11),
        TableColumn::new("Note", 0),
    ]);
    for expense in expenses {
        table.add_row(vec![
            expense.date().to_string(),
            expense.category().to_string(),
            format_amount(currency, expense.amount()),
            expense.note().to_string(),
        ]);
    }
    table
}
