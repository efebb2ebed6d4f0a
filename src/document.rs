//! Report document loading: the JSON hand-off from the node producer
//!
//! The core never fetches or constructs rows itself; a producer ships them as
//! a document of column declarations plus the flattened node list, and the
//! CLI adopts that document into a live report.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::node::{CellKind, Node};
use crate::report::Report;

/// Declared table column: header label plus the semantic type its cells
/// sort as by default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub name: String,
    #[serde(default)]
    pub kind: CellKind,
}

/// The hand-off format: column declarations plus the flattened rows.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportDocument {
    #[serde(default)]
    pub columns: Vec<ColumnSpec>,
    #[serde(default)]
    pub nodes: Vec<Node>,
}

impl ReportDocument {
    /// Read and parse a report document from disk.
    pub fn load(path: &Path) -> io::Result<Self> {
        let text = fs::read_to_string(path)?;
        serde_json::from_str(&text).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Semantic type declared for `column`, defaulting to plain text.
    pub fn column_kind(&self, column: usize) -> CellKind {
        self.columns.get(column).map(|c| c.kind).unwrap_or_default()
    }

    /// Split into the column declarations and an adopted report.
    pub fn into_parts(self) -> (Vec<ColumnSpec>, Report) {
        (self.columns, Report::from_nodes(self.nodes))
    }
}
