//! Column sorting with hierarchy-aware sibling ordering

use std::cmp::Ordering;
use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::event::Scope;
use crate::node::CellKind;
use crate::report::Report;

/// Leading "number, optional binary unit" shape of a size cell.
static SIZE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([0-9]+(?:[.,][0-9]+)?)\s*((?i:B|KB|MB|GB))?")
        .expect("SIZE_PATTERN regex is invalid")
});

/// Fixed textual layout of a date cell (`dd-MM-yyyy HH:mm`).
const DATE_LAYOUT: &str = "%d-%m-%Y %H:%M";

/// Direction of the active sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// The direction a repeated sort on the same column switches to.
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// The single active sort column and its direction.
///
/// Only one column is active at a time; sorting another column replaces this
/// state wholesale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub column: usize,
    pub direction: SortDirection,
}

/// Comparable key extracted from one cell.
#[derive(Debug, Clone, PartialEq)]
enum SortKey {
    Text(String),
    Size(f64),
    Date(i64),
}

impl SortKey {
    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            (SortKey::Size(a), SortKey::Size(b)) => a.total_cmp(b),
            (SortKey::Date(a), SortKey::Date(b)) => a.cmp(b),
            // one semantic type per sort pass, so mixed pairs cannot occur
            _ => Ordering::Equal,
        }
    }
}

fn sort_key(text: &str, kind: CellKind) -> SortKey {
    match kind {
        CellKind::Text => SortKey::Text(text.trim().to_lowercase()),
        CellKind::Size => SortKey::Size(parse_size(text)),
        CellKind::Date => SortKey::Date(parse_date(text)),
    }
}

/// Parse a size cell ("1.5 MB", "200KB", "512 B") into bytes.
///
/// Accepts a decimal comma or dot and the binary units B/KB/MB/GB
/// (1 KB = 1024 B). Text that does not start with a number counts as zero,
/// so one bad cell cannot abort the sort.
///
/// # Example
///
/// ```
/// use trellis::sort::parse_size;
///
/// assert_eq!(parse_size("200 KB"), 204800.0);
/// assert_eq!(parse_size("1,5 MB"), 1572864.0);
/// assert_eq!(parse_size("corrupt"), 0.0);
/// ```
pub fn parse_size(text: &str) -> f64 {
    let Some(captures) = SIZE_PATTERN.captures(text) else {
        return 0.0;
    };
    let number = captures[1].replace(',', ".");
    let Ok(value) = number.parse::<f64>() else {
        return 0.0;
    };
    let multiplier = match captures
        .get(2)
        .map(|m| m.as_str().to_ascii_uppercase())
        .as_deref()
    {
        Some("KB") => 1024.0,
        Some("MB") => 1024.0 * 1024.0,
        Some("GB") => 1024.0 * 1024.0 * 1024.0,
        _ => 1.0,
    };
    value * multiplier
}

/// Parse a date cell in the report's fixed `dd-MM-yyyy HH:mm` layout into
/// seconds since the epoch. Unparseable text keys at the origin, below every
/// real report date.
pub fn parse_date(text: &str) -> i64 {
    NaiveDateTime::parse_from_str(text.trim(), DATE_LAYOUT)
        .map(|dt| dt.and_utc().timestamp())
        .unwrap_or(0)
}

/// Sort the report by `column`, comparing cell text as `kind`.
///
/// Repeating the previously sorted column flips its direction; choosing a new
/// column starts ascending and drops the old column's state. Tree scope sorts
/// every sibling group independently and re-emits the rows in pre-order, so a
/// subtree always stays contiguous directly under its parent; flat scope
/// sorts the whole list. The sort is stable: equal keys keep their relative
/// order.
pub fn sort(report: &mut Report, column: usize, kind: CellKind, scope: Scope) {
    let direction = match report.sort_state() {
        Some(state) if state.column == column => state.direction.flipped(),
        _ => SortDirection::Ascending,
    };
    report.set_sort_state(SortState { column, direction });

    let keys: Vec<SortKey> = report
        .nodes()
        .iter()
        .map(|node| sort_key(node.cell_text(column), kind))
        .collect();
    let compare = |a: usize, b: usize| {
        let ordering = keys[a].compare(&keys[b]);
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    };

    let order = match scope {
        Scope::Flat => {
            let mut order: Vec<usize> = (0..report.len()).collect();
            order.sort_by(|x, y| compare(*x, *y));
            order
        }
        Scope::Tree => {
            // sort each sibling group, then re-emit depth-first with an
            // explicit work stack
            let index = report.child_index();
            let mut roots = index.roots().to_vec();
            roots.sort_by(|x, y| compare(*x, *y));

            let mut order = Vec::with_capacity(report.len());
            let mut stack: Vec<usize> = roots.into_iter().rev().collect();
            while let Some(pos) = stack.pop() {
                order.push(pos);
                let mut children = index.children(pos).to_vec();
                children.sort_by(|x, y| compare(*x, *y));
                for child in children.into_iter().rev() {
                    stack.push(child);
                }
            }
            order
        }
    };

    report.reorder(order);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Cell;
    use crate::test_utils::ReportBuilder;

    fn ids(report: &Report) -> Vec<&str> {
        report.nodes().iter().map(|n| n.id.as_str()).collect()
    }

    #[test]
    fn test_parse_size_binary_multiples() {
        assert_eq!(parse_size("200 KB"), 204800.0);
        assert_eq!(parse_size("1.5 MB"), 1572864.0);
        assert_eq!(parse_size("3 GB"), 3221225472.0);
        assert_eq!(parse_size("512 B"), 512.0);
        assert_eq!(parse_size("512"), 512.0);
    }

    #[test]
    fn test_parse_size_decimal_comma() {
        assert_eq!(parse_size("1,5 MB"), 1572864.0);
    }

    #[test]
    fn test_parse_size_tolerates_garbage() {
        assert_eq!(parse_size(""), 0.0);
        assert_eq!(parse_size("n/a"), 0.0);
        assert_eq!(parse_size("- "), 0.0);
        // unknown unit falls back to plain bytes
        assert_eq!(parse_size("12 XB"), 12.0);
    }

    #[test]
    fn test_parse_date_layout() {
        let jan = parse_date("15-01-2023 09:00");
        let feb = parse_date("01-02-2023 10:00");
        assert!(jan < feb);
        assert_eq!(parse_date("not a date"), 0);
        assert_eq!(parse_date(""), 0);
    }

    #[test]
    fn test_flat_sort_by_size_ascending() {
        let mut report = ReportBuilder::new()
            .file_with_size("big", None, "big.iso", "3 GB")
            .file_with_size("small", None, "small.txt", "200 KB")
            .file_with_size("mid", None, "mid.bin", "1.5 MB")
            .build();
        sort(&mut report, 1, CellKind::Size, Scope::Flat);
        assert_eq!(ids(&report), ["small", "mid", "big"]);
    }

    #[test]
    fn test_repeat_sort_flips_direction() {
        let mut report = ReportBuilder::new()
            .file_with_size("a", None, "a", "1 KB")
            .file_with_size("b", None, "b", "2 KB")
            .build();
        sort(&mut report, 1, CellKind::Size, Scope::Flat);
        assert_eq!(
            report.sort_state(),
            Some(SortState {
                column: 1,
                direction: SortDirection::Ascending
            })
        );
        sort(&mut report, 1, CellKind::Size, Scope::Flat);
        assert_eq!(ids(&report), ["b", "a"]);
        assert_eq!(
            report.sort_state(),
            Some(SortState {
                column: 1,
                direction: SortDirection::Descending
            })
        );
    }

    #[test]
    fn test_new_column_resets_to_ascending() {
        let mut report = ReportBuilder::new()
            .file_with_size("a", None, "zeta", "1 KB")
            .file_with_size("b", None, "alpha", "2 KB")
            .build();
        sort(&mut report, 1, CellKind::Size, Scope::Flat);
        sort(&mut report, 1, CellKind::Size, Scope::Flat); // now descending
        sort(&mut report, 0, CellKind::Text, Scope::Flat); // fresh column
        assert_eq!(ids(&report), ["b", "a"]);
        assert_eq!(
            report.sort_state(),
            Some(SortState {
                column: 0,
                direction: SortDirection::Ascending
            })
        );
    }

    #[test]
    fn test_sort_by_date_ascending() {
        let mut report = ReportBuilder::new()
            .file_with_date("feb", None, "feb.txt", "01-02-2023 10:00")
            .file_with_date("jan", None, "jan.txt", "15-01-2023 09:00")
            .build();
        sort(&mut report, 1, CellKind::Date, Scope::Flat);
        assert_eq!(ids(&report), ["jan", "feb"]);
    }

    #[test]
    fn test_malformed_date_sorts_first() {
        let mut report = ReportBuilder::new()
            .file_with_date("ok", None, "ok.txt", "15-01-2023 09:00")
            .file_with_date("bad", None, "bad.txt", "yesterday-ish")
            .build();
        sort(&mut report, 1, CellKind::Date, Scope::Flat);
        assert_eq!(ids(&report), ["bad", "ok"]);
    }

    #[test]
    fn test_equal_keys_keep_original_order() {
        let mut report = ReportBuilder::new()
            .file_with_size("first", None, "first", "1 KB")
            .file_with_size("second", None, "second", "1 KB")
            .file_with_size("third", None, "third", "1 KB")
            .build();
        sort(&mut report, 1, CellKind::Size, Scope::Flat);
        assert_eq!(ids(&report), ["first", "second", "third"]);
        // repeated same-direction sorts must not shuffle ties either
        sort(&mut report, 1, CellKind::Size, Scope::Flat);
        sort(&mut report, 1, CellKind::Size, Scope::Flat);
        assert_eq!(ids(&report), ["first", "second", "third"]);
    }

    #[test]
    fn test_tree_sort_keeps_subtrees_contiguous() {
        let mut report = ReportBuilder::new()
            .folder("zoo", None)
            .file_named("z2", Some("zoo"), "lion.txt")
            .file_named("z1", Some("zoo"), "ant.txt")
            .folder("arc", None)
            .file_named("a1", Some("arc"), "beta.txt")
            .build();
        sort(&mut report, 0, CellKind::Text, Scope::Tree);
        // root group sorted (arc before zoo), children re-emitted under their
        // parent, each group internally sorted
        assert_eq!(ids(&report), ["arc", "a1", "zoo", "z1", "z2"]);
    }

    #[test]
    fn test_tree_sort_descending_keeps_parent_before_children() {
        let mut report = ReportBuilder::new()
            .folder("arc", None)
            .file_named("a1", Some("arc"), "beta.txt")
            .folder("zoo", None)
            .file_named("z1", Some("zoo"), "ant.txt")
            .build();
        sort(&mut report, 0, CellKind::Text, Scope::Tree);
        sort(&mut report, 0, CellKind::Text, Scope::Tree);
        assert_eq!(ids(&report), ["zoo", "z1", "arc", "a1"]);
    }

    #[test]
    fn test_tree_sort_recurses_into_grandchildren() {
        let mut report = ReportBuilder::new()
            .folder("root", None)
            .folder("sub", Some("root"))
            .file_named("g2", Some("sub"), "zz.txt")
            .file_named("g1", Some("sub"), "aa.txt")
            .build();
        sort(&mut report, 0, CellKind::Text, Scope::Tree);
        assert_eq!(ids(&report), ["root", "sub", "g1", "g2"]);
    }

    #[test]
    fn test_sort_out_of_range_column_is_stable_noop() {
        let mut report = ReportBuilder::new()
            .file_named("a", None, "a")
            .file_named("b", None, "b")
            .build();
        sort(&mut report, 9, CellKind::Text, Scope::Flat);
        assert_eq!(ids(&report), ["a", "b"]);
    }

    #[test]
    fn test_sort_does_not_touch_visibility() {
        let mut report = ReportBuilder::new()
            .folder("root", None)
            .file_with_size("f1", Some("root"), "one", "2 KB")
            .file_with_size("f2", Some("root"), "two", "1 KB")
            .build();
        sort(&mut report, 1, CellKind::Size, Scope::Tree);
        // children reordered but still hidden under the collapsed root
        assert_eq!(ids(&report), ["root", "f2", "f1"]);
        assert_eq!(report.visible_ids(), ["root"]);
    }

    #[test]
    fn test_missing_cell_keys_as_minimal() {
        let mut report = ReportBuilder::new()
            .file_with_size("has", None, "has", "1 KB")
            .node(crate::node::Node {
                id: "bare".to_string(),
                parent: None,
                kind: crate::node::NodeKind::File,
                cells: vec![Cell::new("bare")],
                expanded: false,
                visible: false,
            })
            .build();
        sort(&mut report, 1, CellKind::Size, Scope::Flat);
        assert_eq!(ids(&report), ["bare", "has"]);
    }
}
