//! Row model types for report tables

use serde::{Deserialize, Serialize};

/// Kind of a report row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// May contain children and carries an expand/collapse state.
    Folder,
    /// Terminal entry with no children.
    File,
}

/// Semantic type of a cell, deciding how its text turns into a sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellKind {
    #[default]
    Text,
    Size,
    Date,
}

/// A single table cell: raw text plus its declared semantic type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cell {
    pub text: String,
    #[serde(default)]
    pub kind: CellKind,
}

impl Cell {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: CellKind::Text,
        }
    }

    pub fn with_kind(text: impl Into<String>, kind: CellKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }
}

/// A row in the report table.
///
/// `id`, `parent`, `kind` and `cells` are fixed when the report is produced;
/// only `expanded`, `visible` and the row's position in the report change
/// during interaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// Unique row identifier.
    pub id: String,
    /// Parent row id; `None` for root rows.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    pub kind: NodeKind,
    #[serde(default)]
    pub cells: Vec<Cell>,
    /// Expand/collapse state; meaningful for folders only.
    #[serde(default)]
    pub expanded: bool,
    /// Derived display state. Recomputed by the visibility engine, never
    /// authoritative on its own.
    #[serde(default)]
    pub visible: bool,
}

impl Node {
    pub fn is_folder(&self) -> bool {
        matches!(self.kind, NodeKind::Folder)
    }

    pub fn is_file(&self) -> bool {
        matches!(self.kind, NodeKind::File)
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Text of the cell at `column`, or empty text when the row has fewer
    /// cells than the table declares.
    pub fn cell_text(&self, column: usize) -> &str {
        self.cells.get(column).map(|c| c.text.as_str()).unwrap_or("")
    }

    /// The row's cells joined into one string, the form text filtering
    /// matches against.
    pub fn rendered_text(&self) -> String {
        let mut text = String::new();
        for cell in &self.cells {
            if !text.is_empty() {
                text.push(' ');
            }
            text.push_str(&cell.text);
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node_with_cells(cells: Vec<Cell>) -> Node {
        Node {
            id: "n".to_string(),
            parent: None,
            kind: NodeKind::File,
            cells,
            expanded: false,
            visible: false,
        }
    }

    #[test]
    fn test_rendered_text_joins_cells() {
        let node = node_with_cells(vec![
            Cell::new("notes.txt"),
            Cell::with_kind("10 KB", CellKind::Size),
        ]);
        assert_eq!(node.rendered_text(), "notes.txt 10 KB");
    }

    #[test]
    fn test_cell_text_out_of_range_is_empty() {
        let node = node_with_cells(vec![Cell::new("only")]);
        assert_eq!(node.cell_text(0), "only");
        assert_eq!(node.cell_text(5), "");
    }

    #[test]
    fn test_node_deserializes_with_defaults() {
        let node: Node =
            serde_json::from_str(r#"{"id": "a", "kind": "folder"}"#).expect("valid node");
        assert_eq!(node.id, "a");
        assert!(node.is_folder());
        assert!(node.parent.is_none());
        assert!(node.cells.is_empty());
        assert!(!node.expanded);
        assert!(!node.visible);
    }

    #[test]
    fn test_cell_kind_round_trip() {
        let cell = Cell::with_kind("1.5 MB", CellKind::Size);
        let json = serde_json::to_string(&cell).expect("serializable");
        assert!(json.contains("\"size\""));
        let back: Cell = serde_json::from_str(&json).expect("parseable");
        assert_eq!(back.kind, CellKind::Size);
    }
}
