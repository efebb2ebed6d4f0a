//! Test utilities for building in-memory reports.
//!
//! This module is only compiled for tests and benchmarks.

use crate::node::{Cell, CellKind, Node, NodeKind};
use crate::report::Report;

/// Builder assembling rows for a report fixture.
///
/// Helper methods put the row's id into its first cell, which is enough for
/// most ordering and filtering assertions; the `*_named`/`*_with_*` variants
/// give the cell text explicitly.
#[derive(Debug, Default)]
pub struct ReportBuilder {
    nodes: Vec<Node>,
}

impl ReportBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(
        mut self,
        id: &str,
        parent: Option<&str>,
        kind: NodeKind,
        expanded: bool,
        cells: Vec<Cell>,
    ) -> Self {
        self.nodes.push(Node {
            id: id.to_string(),
            parent: parent.map(str::to_string),
            kind,
            cells,
            expanded,
            visible: false,
        });
        self
    }

    /// Add a collapsed folder whose first cell is its id.
    pub fn folder(self, id: &str, parent: Option<&str>) -> Self {
        self.push(id, parent, NodeKind::Folder, false, vec![Cell::new(id)])
    }

    /// Add an already expanded folder.
    pub fn expanded_folder(self, id: &str, parent: Option<&str>) -> Self {
        self.push(id, parent, NodeKind::Folder, true, vec![Cell::new(id)])
    }

    /// Add a file whose first cell is its id.
    pub fn file(self, id: &str, parent: Option<&str>) -> Self {
        self.push(id, parent, NodeKind::File, false, vec![Cell::new(id)])
    }

    /// Add a file with an explicit name cell.
    pub fn file_named(self, id: &str, parent: Option<&str>, name: &str) -> Self {
        self.push(id, parent, NodeKind::File, false, vec![Cell::new(name)])
    }

    /// Add a file with a name cell and a size cell.
    pub fn file_with_size(self, id: &str, parent: Option<&str>, name: &str, size: &str) -> Self {
        self.push(
            id,
            parent,
            NodeKind::File,
            false,
            vec![Cell::new(name), Cell::with_kind(size, CellKind::Size)],
        )
    }

    /// Add a file with a name cell and a date cell.
    pub fn file_with_date(self, id: &str, parent: Option<&str>, name: &str, date: &str) -> Self {
        self.push(
            id,
            parent,
            NodeKind::File,
            false,
            vec![Cell::new(name), Cell::with_kind(date, CellKind::Date)],
        )
    }

    /// Add a fully custom row.
    pub fn node(mut self, node: Node) -> Self {
        self.nodes.push(node);
        self
    }

    /// The raw rows, for document-level fixtures.
    pub fn into_nodes(self) -> Vec<Node> {
        self.nodes
    }

    /// Adopt the rows into a report.
    pub fn build(self) -> Report {
        Report::from_nodes(self.nodes)
    }
}

/// A deep single chain of expanded folders with a fan of sized files at each
/// level, for benchmarks and stress-style tests.
pub fn synthetic_tree(depth: usize, fanout: usize) -> Report {
    let mut builder = ReportBuilder::new().expanded_folder("dir-0", None);
    for level in 1..depth {
        let id = format!("dir-{}", level);
        let parent = format!("dir-{}", level - 1);
        builder = builder.expanded_folder(&id, Some(&parent));
        for leaf in 0..fanout {
            let file_id = format!("file-{}-{}", level, leaf);
            builder = builder.file_with_size(
                &file_id,
                Some(&id),
                &format!("entry-{:04}.dat", leaf),
                &format!("{} KB", (leaf % 97) + 1),
            );
        }
    }
    builder.build()
}
