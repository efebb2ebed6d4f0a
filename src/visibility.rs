//! Visibility engine: derives per-row display state from the expanded chain

use crate::report::Report;

/// Recompute `visible` for every row from collapse state alone.
///
/// Roots are always visible. Any other row is visible exactly when its parent
/// is visible and expanded, so a collapsed folder hides its whole subtree no
/// matter what the nested `expanded` flags say; those flags are left alone
/// and take effect again once the chain above them reopens.
pub fn refresh(report: &mut Report) {
    let index = report.child_index();
    for node in report.nodes_mut() {
        node.visible = false;
    }

    // iterative depth-first walk from the roots
    let mut stack: Vec<(usize, bool)> = index.roots().iter().map(|&pos| (pos, true)).collect();
    while let Some((pos, shown)) = stack.pop() {
        let reveals_children = {
            let node = &mut report.nodes_mut()[pos];
            node.visible = shown;
            shown && node.is_folder() && node.expanded
        };
        for &child in index.children(pos) {
            stack.push((child, reveals_children));
        }
    }
}
