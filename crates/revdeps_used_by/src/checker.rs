use anyhow::Result;
use log::{debug, info, warn};
use revdeps_core::{FileReader, FsReader};

use crate::{
    config::Config,
    graph::{resolve_used_by, resolve_used_by_parallel},
    types::CheckResult,
};

/// Resolves the reverse dependency graph for the configured files on disk.
pub fn run_used_by_check(cfg: Config) -> Result<CheckResult> {
    run_used_by_check_with(cfg, &FsReader)
}

/// Like [`run_used_by_check`], reading files through `reader`.
///
/// Reads fan out over the rayon pool when it has more than one thread.
pub fn run_used_by_check_with<R: FileReader + ?Sized>(
    mut cfg: Config,
    reader: &R,
) -> Result<CheckResult> {
    info!("Starting used-by resolution");

    cfg.initialize()?;
    let entries = cfg.entries()?;

    let num_threads = rayon::current_num_threads();
    let graph = if num_threads > 1 {
        debug!("Reading files in parallel on {} threads", num_threads);
        resolve_used_by_parallel(entries, reader)
    } else {
        debug!("Reading files sequentially");
        resolve_used_by(entries, reader)
    };

    if !graph.unreadable().is_empty() {
        warn!("{} files could not be read", graph.unreadable().len());
    }
    info!("Used-by resolution complete. {} files in graph", graph.len());

    let files_analyzed = graph.files_read();
    Ok(CheckResult { graph, files_analyzed })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporter::render_report;
    use std::{
        fs,
        path::{Path, PathBuf},
    };
    use tempfile::TempDir;

    fn create_test_file(dir: &Path, path: &str, content: &str) -> PathBuf {
        let file_path = dir.join(path);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&file_path, content).expect("Failed to write test file");
        file_path
    }

    #[test]
    fn test_check_on_disk() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        let entry = create_test_file(
            root,
            "src/index.ts",
            "import a = require('./a');\nimport gone = require('./gone');",
        );
        let a = create_test_file(root, "src/a.ts", "import u = require('../lib/util.ts');");
        let util = create_test_file(root, "lib/util.ts", "// leaf");

        let result = run_used_by_check(Config::new(vec![entry.clone()])).unwrap();
        assert_eq!(result.files_analyzed, 3);

        let gone = root.join("src/gone.ts");
        let expected = [
            format!("{} <- {}", a.display(), entry.display()),
            format!("{} <- {}", gone.display(), entry.display()),
            format!("{} <- ", entry.display()),
            format!("{} <- {}", util.display(), a.display()),
            format!("Cannot read file '{}'", gone.display()),
        ];
        assert_eq!(render_report(&result.graph), expected.join("\n"));
    }

    #[test]
    fn test_check_with_memory_reader() {
        let reader = revdeps_core::MemoryReader::new()
            .with_file("/r/a.ts", "import b = require('./b');")
            .with_file("/r/b.ts", "");
        let result =
            run_used_by_check_with(Config::new(vec![PathBuf::from("/r/./a.ts")]), &reader).unwrap();
        assert_eq!(render_report(&result.graph), "/r/b.ts <- /r/a.ts\n/r/a.ts <- ");
        assert_eq!(result.files_analyzed, 2);
    }
}
