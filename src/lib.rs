//! Trellis - a tree-table state engine for hierarchical file reports

pub mod document;
pub mod event;
pub mod node;
pub mod output;
pub mod report;
pub mod search;
pub mod sort;
pub mod toggle;
pub mod visibility;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use document::{ColumnSpec, ReportDocument};
pub use event::{Event, Scope, apply};
pub use node::{Cell, CellKind, Node, NodeKind};
pub use output::{OutputConfig, TableFormatter, print_json};
pub use report::{IntegrityWarning, Report};
pub use search::search;
pub use sort::{SortDirection, SortState, sort};
pub use toggle::{toggle_all, toggle_one};
pub use visibility::refresh;
