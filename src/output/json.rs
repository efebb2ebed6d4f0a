//! JSON state output

use std::io;

use serde::Serialize;

use crate::node::Node;
use crate::report::Report;
use crate::sort::SortState;

/// Wire form of the state hand-off: the active sort plus the rows in their
/// current order, each carrying its `visible`/`expanded` flags.
#[derive(Serialize)]
struct StateDump<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    sort: Option<SortState>,
    nodes: &'a [Node],
}

/// Print the report state as pretty-printed JSON to stdout.
pub fn print_json(report: &Report) -> io::Result<()> {
    let dump = StateDump {
        sort: report.sort_state(),
        nodes: report.nodes(),
    };
    let json = serde_json::to_string_pretty(&dump)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    println!("{}", json);
    Ok(())
}
