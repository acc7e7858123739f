//! Table rendering utilities for CLI outputs.

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    pub fn new(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width: width.max(header.len()),
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn render_cells<'a>(&self, cells: impl Iterator<Item = &'a str>) -> String {
        let mut out = String::new();
        for (col, cell) in self.columns.iter().zip(cells) {
            out.push_str(&format!("{:<width$} ", cell, width = col.width));
        }
        out.trim_end().to_string()
    }

    pub fn render_header(&self) -> String {
        self.render_cells(self.columns.iter().map(|c| c.header.as_str()))
    }

    pub fn render_row(&self, row: &[String]) -> String {
        self.render_cells(row.iter().map(String::as_str))
    }
}
