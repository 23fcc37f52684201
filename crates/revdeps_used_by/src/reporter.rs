use std::{
    io::{self, Write},
    path::{Path, PathBuf},
};

use colored::Colorize;
use log::{debug, trace};

use crate::graph::UsedByGraph;

/// Formats one report line: `<file> <- <dep> <dep> ...`.
///
/// Spaces inside dependent paths are escaped with a backslash so the list
/// stays splittable on plain spaces. The file itself is printed as is.
pub fn format_line(file: &Path, dependents: &[PathBuf]) -> String {
    let escaped: Vec<String> =
        dependents.iter().map(|d| d.to_string_lossy().replace(' ', "\\ ")).collect();
    format!("{} <- {}", file.display(), escaped.join(" "))
}

/// Renders the whole graph: one line per file in discovery order, then one
/// line per unreadable file. Lines are joined with `\n`, no trailing newline.
pub fn render_report(graph: &UsedByGraph) -> String {
    let mut lines: Vec<String> = graph.iter().map(|(file, deps)| format_line(file, deps)).collect();
    for file in graph.unreadable() {
        trace!("Reporting unreadable file: {}", file.display());
        lines.push(format!("Cannot read file '{}'", file.display()));
    }
    debug!("Rendered {} report lines", lines.len());
    lines.join("\n")
}

pub fn print_report<W: Write>(writer: &mut W, graph: &UsedByGraph) -> io::Result<()> {
    writeln!(writer, "{}", render_report(graph))?;
    writer.flush()?;
    Ok(())
}

pub fn print_summary<W: Write>(
    writer: &mut W,
    elapsed_ms: u128,
    files_analyzed: usize,
    unreadable: usize,
    num_threads: usize,
) -> io::Result<()> {
    let unreadable_note = if unreadable > 0 {
        format!(" ({} unreadable)", unreadable.to_string().yellow())
    } else {
        String::new()
    };
    writeln!(
        writer,
        "\n{} Finished in {}ms on {} files{} (using {} threads).",
        "●".bright_blue(),
        elapsed_ms.to_string().cyan(),
        files_analyzed.to_string().cyan(),
        unreadable_note,
        num_threads.to_string().cyan()
    )?;
    writer.flush()?;
    Ok(())
}
