//! Table rendering utilities for CLI outputs.
//!
//! Column widths follow the content: every column is as wide as its
//! widest cell or header, measured in terminal columns with ANSI escape
//! sequences ignored.

use regex::Regex;
use std::sync::LazyLock;
use unicode_width::UnicodeWidthStr;

static ANSI_ESCAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("ANSI pattern is a valid regex"));

pub fn strip_ansi(s: &str) -> String {
    ANSI_ESCAPE.replace_all(s, "").into_owned()
}

/// Visible width of a cell.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}

pub struct Column {
    pub header: String,
    pub width: usize,
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
    pub max_width: Option<usize>,
}

impl Table {
    pub fn new<S: AsRef<str>>(headers: &[S]) -> Self {
        let columns = headers
            .iter()
            .map(|h| Column {
                header: h.as_ref().to_string(),
                width: display_width(h.as_ref()),
            })
            .collect();

        Self {
            columns,
            rows: Vec::new(),
            max_width: None,
        }
    }

    /// Cap every column at `width` characters; longer cells are cut with "…".
    pub fn with_max_width(mut self, width: usize) -> Self {
        self.max_width = Some(width.max(2));
        self
    }

    pub fn add_row(&mut self, mut row: Vec<String>) {
        row.resize(self.columns.len(), String::new());

        if let Some(max) = self.max_width {
            for cell in row.iter_mut() {
                if display_width(cell) > max {
                    *cell = truncate(&strip_ansi(cell), max);
                }
            }
        }

        for (col, cell) in self.columns.iter_mut().zip(&row) {
            col.width = col.width.max(display_width(cell));
        }
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        let header: Vec<String> = self.columns.iter().map(|c| c.header.clone()).collect();
        self.push_line(&mut out, &header);

        let rule: Vec<String> = self.columns.iter().map(|c| "─".repeat(c.width)).collect();
        self.push_line(&mut out, &rule);

        // Rows
        for row in &self.rows {
            self.push_line(&mut out, row);
        }

        out
    }

    fn push_line(&self, out: &mut String, cells: &[String]) {
        let mut line = String::new();
        for (col, cell) in self.columns.iter().zip(cells) {
            let pad = col.width.saturating_sub(display_width(cell));
            line.push_str(cell);
            line.push_str(&" ".repeat(pad + 2));
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
}

fn truncate(s: &str, max: usize) -> String {
    let mut out = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if width + w > max - 1 {
            break;
        }
        width += w;
        out.push(ch);
    }
    out.push('…');
    out
}
