use anyhow::Result;
use clap::Parser;
use log::{debug, info};
use revdeps_used_by::Config;
use std::io::{self, BufWriter, Write};
use std::time::Instant;

fn main() -> Result<()> {
    env_logger::init();

    // stdio is blocked by LineWriter, use a BufWriter to reduce syscalls.
    // See https://github.com/rust-lang/rust/issues/60673
    let mut stdout = BufWriter::new(io::stdout());

    let cfg = Config::parse();
    debug!("Parsed CLI arguments: {:?}", cfg.files);

    let start = Instant::now();
    let num_threads = rayon::current_num_threads();
    info!("Resolving {} files (using {} threads)", cfg.files.len(), num_threads);

    let result = revdeps_used_by::run_used_by_check(cfg)?;
    debug!("Graph has {} files", result.graph.len());

    revdeps_used_by::print_report(&mut stdout, &result.graph)?;
    stdout.flush()?;

    let elapsed_ms = start.elapsed().as_millis();
    // The report owns stdout; the footer goes to stderr.
    revdeps_used_by::print_summary(
        &mut io::stderr(),
        elapsed_ms,
        result.files_analyzed,
        result.graph.unreadable().len(),
        num_threads,
    )?;

    Ok(())
}
