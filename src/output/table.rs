//! Indented table formatter
//!
//! Renders the visible rows as a flat table: the first column is indented by
//! hierarchy depth and carries a caret for folders, the header line marks the
//! active sort column, and a count summary closes the listing.

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::document::ColumnSpec;
use crate::report::Report;
use crate::sort::SortDirection;

use super::config::OutputConfig;

const CARET_EXPANDED: &str = "\u{25be} "; // ▾
const CARET_COLLAPSED: &str = "\u{25b8} "; // ▸
const CARET_NONE: &str = "  ";

/// Formatter for the visible slice of a report.
pub struct TableFormatter {
    config: OutputConfig,
}

struct DisplayRow {
    cells: Vec<String>,
    is_folder: bool,
}

impl TableFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Build header texts, display rows, and per-column widths for the
    /// currently visible rows.
    fn layout(
        &self,
        report: &Report,
        columns: &[ColumnSpec],
    ) -> (Vec<String>, Vec<DisplayRow>, Vec<usize>) {
        let headers: Vec<String> = columns
            .iter()
            .enumerate()
            .map(|(pos, column)| match report.sort_state() {
                Some(state) if state.column == pos => {
                    let arrow = match state.direction {
                        SortDirection::Ascending => "\u{2191}",  // ↑
                        SortDirection::Descending => "\u{2193}", // ↓
                    };
                    format!("{} {}", column.name, arrow)
                }
                _ => column.name.clone(),
            })
            .collect();

        let mut rows = Vec::new();
        for node in report.nodes().iter().filter(|n| n.visible) {
            let caret = if node.is_folder() {
                if node.expanded {
                    CARET_EXPANDED
                } else {
                    CARET_COLLAPSED
                }
            } else {
                CARET_NONE
            };
            let indent = " ".repeat(report.depth(&node.id) * self.config.indent_width);

            let width = headers.len().max(node.cells.len());
            let mut cells = Vec::with_capacity(width);
            for column in 0..width {
                let text = node.cell_text(column);
                if column == 0 {
                    cells.push(format!("{}{}{}", indent, caret, text));
                } else {
                    cells.push(text.to_string());
                }
            }
            rows.push(DisplayRow {
                cells,
                is_folder: node.is_folder(),
            });
        }

        let column_count = headers
            .len()
            .max(rows.iter().map(|r| r.cells.len()).max().unwrap_or(0));
        let mut widths = vec![0usize; column_count];
        for (pos, header) in headers.iter().enumerate() {
            widths[pos] = widths[pos].max(header.chars().count());
        }
        for row in &rows {
            for (pos, cell) in row.cells.iter().enumerate() {
                widths[pos] = widths[pos].max(cell.chars().count());
            }
        }

        (headers, rows, widths)
    }

    fn pad(text: &str, width: usize) -> String {
        let len = text.chars().count();
        format!("{}{}", text, " ".repeat(width.saturating_sub(len)))
    }

    fn summary(report: &Report) -> String {
        let mut folders = 0;
        let mut files = 0;
        for node in report.nodes().iter().filter(|n| n.visible) {
            if node.is_folder() {
                folders += 1;
            } else {
                files += 1;
            }
        }
        format!("{} folders, {} files shown", folders, files)
    }

    /// Render the visible rows to a plain string.
    pub fn format(&self, report: &Report, columns: &[ColumnSpec]) -> String {
        let (headers, rows, widths) = self.layout(report, columns);
        let mut output = String::new();

        if !headers.is_empty() {
            let line: Vec<String> = headers
                .iter()
                .enumerate()
                .map(|(pos, h)| Self::pad(h, widths[pos]))
                .collect();
            output.push_str(line.join("  ").trim_end());
            output.push('\n');
        }

        for row in &rows {
            let line: Vec<String> = row
                .cells
                .iter()
                .enumerate()
                .map(|(pos, cell)| Self::pad(cell, widths[pos]))
                .collect();
            output.push_str(line.join("  ").trim_end());
            output.push('\n');
        }

        output.push('\n');
        output.push_str(&Self::summary(report));
        output.push('\n');
        output
    }

    /// Render the visible rows to stdout, with colors when configured.
    pub fn print(&self, report: &Report, columns: &[ColumnSpec]) -> io::Result<()> {
        let choice = if self.config.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);
        let (headers, rows, widths) = self.layout(report, columns);

        if !headers.is_empty() {
            stdout.set_color(ColorSpec::new().set_bold(true))?;
            let line: Vec<String> = headers
                .iter()
                .enumerate()
                .map(|(pos, h)| Self::pad(h, widths[pos]))
                .collect();
            write!(stdout, "{}", line.join("  ").trim_end())?;
            stdout.reset()?;
            writeln!(stdout)?;
        }

        for row in &rows {
            for (pos, cell) in row.cells.iter().enumerate() {
                if pos > 0 {
                    write!(stdout, "  ")?;
                }
                if pos == 0 && row.is_folder {
                    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
                } else {
                    stdout.reset()?;
                }
                let padded = Self::pad(cell, widths[pos]);
                if pos + 1 == row.cells.len() {
                    write!(stdout, "{}", padded.trim_end())?;
                } else {
                    write!(stdout, "{}", padded)?;
                }
            }
            stdout.reset()?;
            writeln!(stdout)?;
        }

        writeln!(stdout)?;
        writeln!(stdout, "{}", Self::summary(report))?;
        Ok(())
    }
}
