//! Declarative rendering of the results panel.

use super::model::Model;
use crate::field::Input;
use unicode_width::UnicodeWidthStr;

/// Columns in front of each row's text: left padding on plain rows, border
/// plus padding on the highlighted row.
pub const ROW_INDENT: usize = 2;

/// One visible result row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Position in the visible results.
    pub index: usize,
    /// The candidate text.
    pub text: String,
    /// Whether this is the highlighted row.
    pub highlighted: bool,
}

impl<I: Input> Model<I> {
    /// The rows to display, in result order. Empty while closed.
    ///
    /// At most one row is marked highlighted.
    pub fn rows(&self) -> Vec<Row> {
        if !self.state.open {
            return Vec::new();
        }
        self.results
            .iter()
            .enumerate()
            .map(|(index, text)| Row {
                index,
                text: text.clone(),
                highlighted: self.state.highlighted == Some(index),
            })
            .collect()
    }

    /// Widest visible result, in terminal columns. Zero while closed.
    pub(super) fn text_width(&self) -> usize {
        if !self.state.open {
            return 0;
        }
        self.results
            .iter()
            .map(|text| UnicodeWidthStr::width(text.as_str()))
            .max()
            .unwrap_or(0)
    }

    /// Width of a rendered row line, including its indent. Zero while closed.
    pub fn row_width(&self) -> usize {
        if !self.state.open {
            return 0;
        }
        ROW_INDENT + self.text_width()
    }

    /// Renders the input line followed, while open, by one line per row.
    ///
    /// Rows are padded to the widest result so the panel reads as a block.
    pub fn view(&self) -> String {
        let mut lines = vec![self.input.view()];

        let width = self.text_width();
        for row in self.rows() {
            let pad = width - UnicodeWidthStr::width(row.text.as_str());
            let text = format!("{}{}", row.text, " ".repeat(pad));
            let style = if row.highlighted {
                &self.styles.highlighted_row
            } else {
                &self.styles.row
            };
            lines.push(style.render(&text));
        }

        lines.join("\n")
    }
}
