//! Expand/collapse controller

use tracing::debug;

use crate::report::Report;
use crate::visibility;

/// Flip one folder's expand state and rederive visibility.
///
/// Unknown ids and non-folder rows are ignored: a stale or malformed trigger
/// is not worth failing over. Collapsing hides the whole subtree but leaves
/// every descendant's own `expanded` flag untouched, so re-expanding restores
/// the previously chosen sub-state.
pub fn toggle_one(report: &mut Report, node_id: &str) {
    let Some(pos) = report.position(node_id) else {
        debug!("ignoring toggle for unknown row '{}'", node_id);
        return;
    };
    if !report.nodes()[pos].is_folder() {
        debug!("ignoring toggle for non-folder row '{}'", node_id);
        return;
    }
    let expanded = !report.nodes()[pos].expanded;
    report.nodes_mut()[pos].expanded = expanded;
    visibility::refresh(report);
}

/// Set every folder's expand state at once.
///
/// `expand=false` is the collapse-to-roots baseline: only roots stay visible.
/// `expand=true` opens every chain, so every row becomes visible.
pub fn toggle_all(report: &mut Report, expand: bool) {
    for node in report.nodes_mut() {
        if node.is_folder() {
            node.expanded = expand;
        }
    }
    visibility::refresh(report);
}
