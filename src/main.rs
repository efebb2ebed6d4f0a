//! CLI entry point for trellis

use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::process;

use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, ValueEnum};
use trellis::{
    CellKind, ColumnSpec, Event, OutputConfig, ReportDocument, Scope, TableFormatter, print_json,
};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            // Respect FORCE_COLOR environment variable
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            // Respect TERM=dumb
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            // Check if stdout is a TTY
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "trellis")]
#[command(about = "Render and interact with hierarchical file reports")]
#[command(version)]
struct Args {
    /// Report document to load (JSON: column declarations plus rows)
    report: PathBuf,

    /// Treat the report as a flat list: search and sort ignore hierarchy
    #[arg(long)]
    flat: bool,

    /// Expand every folder
    #[arg(long = "expand-all", conflicts_with = "collapse_all")]
    expand_all: bool,

    /// Collapse back to the roots-only baseline
    #[arg(long = "collapse-all")]
    collapse_all: bool,

    /// Toggle one folder by row id (can be used multiple times)
    #[arg(short = 't', long = "toggle", value_name = "ID")]
    toggle: Vec<String>,

    /// Filter rows by case-insensitive substring; an empty query resets
    #[arg(short = 's', long = "search", value_name = "QUERY")]
    search: Vec<String>,

    /// Sort by a column, as INDEX[:TYPE] with TYPE one of text, size, date
    /// (default: the column's declared type). Repeating the same column
    /// flips the direction.
    #[arg(short = 'o', long = "sort", value_name = "COLUMN")]
    sort: Vec<String>,

    /// Apply a JSON array of interaction events before any flag events
    #[arg(long = "events", value_name = "FILE")]
    events: Option<PathBuf>,

    /// Output the resulting state as JSON instead of a table
    #[arg(long = "json")]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

/// Parse a sort flag value like "1:size" or "0" into column index and an
/// optional explicit type.
fn parse_sort_spec(spec: &str) -> Result<(usize, Option<CellKind>), String> {
    let (column_str, kind_str) = match spec.split_once(':') {
        Some((column, kind)) => (column, Some(kind)),
        None => (spec, None),
    };
    let column: usize = column_str
        .trim()
        .parse()
        .map_err(|_| format!("invalid column index: {}", column_str))?;
    let kind = match kind_str.map(|k| k.trim().to_ascii_lowercase()).as_deref() {
        None => None,
        Some("text") | Some("string") => Some(CellKind::Text),
        Some("size") => Some(CellKind::Size),
        Some("date") => Some(CellKind::Date),
        Some(other) => return Err(format!("unknown column type: {}", other)),
    };
    Ok((column, kind))
}

/// Turn the interaction flags into events, ordered the way they appeared on
/// the command line.
fn collect_flag_events(
    matches: &ArgMatches,
    args: &Args,
    columns: &[ColumnSpec],
    scope: Scope,
) -> Vec<(usize, Event)> {
    let mut events: Vec<(usize, Event)> = Vec::new();

    if args.expand_all {
        if let Some(index) = matches.index_of("expand_all") {
            events.push((index, Event::ToggleAll { expand: true }));
        }
    }
    if args.collapse_all {
        if let Some(index) = matches.index_of("collapse_all") {
            events.push((index, Event::ToggleAll { expand: false }));
        }
    }

    if let Some(indices) = matches.indices_of("toggle") {
        for (index, id) in indices.zip(&args.toggle) {
            events.push((
                index,
                Event::ToggleOne {
                    node_id: id.clone(),
                },
            ));
        }
    }

    if let Some(indices) = matches.indices_of("search") {
        for (index, query) in indices.zip(&args.search) {
            events.push((
                index,
                Event::Search {
                    query: query.clone(),
                    scope,
                },
            ));
        }
    }

    if let Some(indices) = matches.indices_of("sort") {
        for (index, spec) in indices.zip(&args.sort) {
            let (column, kind) = parse_sort_spec(spec).unwrap_or_else(|e| {
                eprintln!("trellis: invalid --sort '{}': {}", spec, e);
                process::exit(1);
            });
            let semantic_type =
                kind.unwrap_or_else(|| columns.get(column).map(|c| c.kind).unwrap_or_default());
            events.push((
                index,
                Event::Sort {
                    column_index: column,
                    semantic_type,
                    scope,
                },
            ));
        }
    }

    events.sort_by_key(|(index, _)| *index);
    events
}

/// Read a JSON array of events from disk.
fn load_events(path: &Path) -> io::Result<Vec<Event>> {
    let text = std::fs::read_to_string(path)?;
    serde_json::from_str(&text).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

fn main() {
    let matches = Args::command().get_matches();
    let args = Args::from_arg_matches(&matches).unwrap_or_else(|e| {
        eprintln!("trellis: argument parsing error: {}", e);
        process::exit(1);
    });

    let document = ReportDocument::load(&args.report).unwrap_or_else(|e| {
        eprintln!("trellis: cannot read '{}': {}", args.report.display(), e);
        process::exit(1);
    });

    let scope = if args.flat { Scope::Flat } else { Scope::Tree };
    let (columns, mut report) = document.into_parts();
    for warning in report.warnings() {
        eprintln!("trellis: warning: {}", warning);
    }

    if let Some(path) = &args.events {
        let events = load_events(path).unwrap_or_else(|e| {
            eprintln!("trellis: cannot read events '{}': {}", path.display(), e);
            process::exit(1);
        });
        for event in &events {
            trellis::apply(&mut report, event);
        }
    }

    for (_, event) in collect_flag_events(&matches, &args, &columns, scope) {
        trellis::apply(&mut report, &event);
    }

    let result = if args.json {
        print_json(&report)
    } else {
        let formatter = TableFormatter::new(OutputConfig {
            use_color: should_use_color(args.color),
            ..Default::default()
        });
        formatter.print(&report, &columns)
    };

    if let Err(e) = result {
        eprintln!("trellis: error writing output: {}", e);
        process::exit(1);
    }
}
