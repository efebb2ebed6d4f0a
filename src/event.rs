//! External event surface: the wire-shaped triggers the controllers consume

use serde::{Deserialize, Serialize};

use crate::node::CellKind;
use crate::report::Report;
use crate::{search, sort, toggle};

/// Whether an operation targets the hierarchical tree or a flat list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    #[default]
    Tree,
    Flat,
}

/// A discrete interaction trigger, as delivered by the embedding surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum Event {
    #[serde(rename_all = "camelCase")]
    ToggleOne { node_id: String },
    ToggleAll {
        expand: bool,
    },
    Search {
        query: String,
        #[serde(default)]
        scope: Scope,
    },
    #[serde(rename_all = "camelCase")]
    Sort {
        column_index: usize,
        semantic_type: CellKind,
        #[serde(default)]
        scope: Scope,
    },
}

/// Apply one event to the report.
///
/// Each event runs to completion before the next; the report is the only
/// state the controllers touch.
pub fn apply(report: &mut Report, event: &Event) {
    match event {
        Event::ToggleOne { node_id } => toggle::toggle_one(report, node_id),
        Event::ToggleAll { expand } => toggle::toggle_all(report, *expand),
        Event::Search { query, scope } => search::search(report, query, *scope),
        Event::Sort {
            column_index,
            semantic_type,
            scope,
        } => sort::sort(report, *column_index, *semantic_type, *scope),
    }
}
