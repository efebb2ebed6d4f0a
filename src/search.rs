//! Hierarchy-aware text filtering

use std::collections::HashSet;

use crate::event::Scope;
use crate::report::Report;
use crate::toggle;

/// Apply a substring filter to the report.
///
/// An empty query resets the view: flat targets show every row, tree targets
/// fall back to the collapsed baseline. A non-empty query matches
/// case-insensitively against each row's concatenated cell text; in tree
/// scope visibility goes to the matches plus all their ancestors, and every
/// folder on a path down to a match is forced open so the match can be seen
/// without further clicks. The match set is computed fresh on every call.
pub fn search(report: &mut Report, query: &str, scope: Scope) {
    if query.is_empty() {
        match scope {
            Scope::Flat => {
                for node in report.nodes_mut() {
                    node.visible = true;
                }
            }
            Scope::Tree => toggle::toggle_all(report, false),
        }
        return;
    }

    let needle = query.to_lowercase();
    let matches: Vec<usize> = report
        .nodes()
        .iter()
        .enumerate()
        .filter(|(_, node)| node.rendered_text().to_lowercase().contains(&needle))
        .map(|(pos, _)| pos)
        .collect();

    match scope {
        Scope::Flat => {
            let keep: HashSet<usize> = matches.into_iter().collect();
            for (pos, node) in report.nodes_mut().iter_mut().enumerate() {
                node.visible = keep.contains(&pos);
            }
        }
        Scope::Tree => {
            // close the match set over "include all ancestors"; folders on
            // the way down to a match open up, nothing else does
            let mut keep: HashSet<usize> = HashSet::new();
            for pos in matches {
                keep.insert(pos);
                let mut parent = report.nodes()[pos].parent.clone();
                while let Some(parent_id) = parent {
                    let Some(parent_pos) = report.position(&parent_id) else {
                        break;
                    };
                    if !keep.insert(parent_pos) {
                        // this ancestor's own chain was already walked
                        break;
                    }
                    report.nodes_mut()[parent_pos].expanded = true;
                    parent = report.nodes()[parent_pos].parent.clone();
                }
            }
            for (pos, node) in report.nodes_mut().iter_mut().enumerate() {
                node.visible = keep.contains(&pos);
            }
        }
    }
}
