use indexmap::IndexMap;
use log::{debug, trace};
use rayon::prelude::*;
use std::{
    collections::{HashSet, VecDeque},
    path::{Path, PathBuf},
};

use revdeps_core::{FileReader, extract_imports, normalize};

/// Reverse dependency graph: for every file reached, the files that import it.
///
/// Keys keep their first-insertion order so the rendered report is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsedByGraph {
    dependents: IndexMap<PathBuf, Vec<PathBuf>>,
    unreadable: Vec<PathBuf>,
    files_read: usize,
}

impl UsedByGraph {
    /// Direct importers of `file`, in the order they were discovered.
    pub fn dependents(&self, file: &Path) -> Option<&[PathBuf]> {
        self.dependents.get(file).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PathBuf, &[PathBuf])> {
        self.dependents.iter().map(|(file, deps)| (file, deps.as_slice()))
    }

    /// Files that could not be read, in the order they were first attempted.
    pub fn unreadable(&self) -> &[PathBuf] {
        &self.unreadable
    }

    pub fn len(&self) -> usize {
        self.dependents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dependents.is_empty()
    }

    pub fn files_read(&self) -> usize {
        self.files_read
    }

    /// Records the imports of a file that was read successfully and returns the
    /// normalized targets to visit next, in declaration order.
    fn expand(&mut self, file: &Path, text: &str) -> Vec<PathBuf> {
        self.files_read += 1;
        let dir = file.parent().unwrap_or(Path::new(""));

        let targets: Vec<PathBuf> = extract_imports(text)
            .iter()
            .map(|target| {
                let dep = normalize(dir, target);
                trace!("{} imports {}", file.display(), dep.display());
                self.dependents.entry(dep.clone()).or_default().push(file.to_path_buf());
                dep
            })
            .collect();

        // Every expanded file is reported, even with no importers.
        self.dependents.entry(file.to_path_buf()).or_default();
        debug!("Expanded {} ({} imports)", file.display(), targets.len());
        targets
    }

    fn record_unreadable(&mut self, file: PathBuf) {
        self.unreadable.push(file);
    }
}

/// Walks the import graph breadth-first from `entries` and builds the
/// reverse dependency graph.
///
/// Each distinct path is read at most once; cycles terminate because a path
/// that was already visited is dropped when it comes off the queue. Files the
/// reader cannot provide are collected in [`UsedByGraph::unreadable`] and
/// never expanded.
pub fn resolve_used_by<R: FileReader + ?Sized>(entries: &[PathBuf], reader: &R) -> UsedByGraph {
    let mut queue: VecDeque<PathBuf> = entries.iter().cloned().collect();
    let mut visited: HashSet<PathBuf> = HashSet::new();
    let mut graph = UsedByGraph::default();

    while let Some(file) = queue.pop_front() {
        if !visited.insert(file.clone()) {
            trace!("Already visited: {}", file.display());
            continue;
        }

        match reader.read(&file) {
            Ok(text) => queue.extend(graph.expand(&file, &text)),
            Err(e) => {
                debug!("Unreadable: {}", e);
                graph.record_unreadable(file);
            }
        }
    }

    debug!(
        "Resolved {} files ({} unreadable) from {} entries",
        graph.len(),
        graph.unreadable.len(),
        entries.len()
    );
    graph
}

/// Same traversal as [`resolve_used_by`], reading each breadth-first level in
/// parallel.
///
/// A level is the queue as it stands when the previous level is done. Its
/// unvisited paths are read concurrently and then merged one by one in queue
/// order, so the graph is identical to the sequential one.
pub fn resolve_used_by_parallel<R: FileReader + ?Sized>(
    entries: &[PathBuf],
    reader: &R,
) -> UsedByGraph {
    let mut frontier: Vec<PathBuf> = entries.to_vec();
    let mut visited: HashSet<PathBuf> = HashSet::new();
    let mut graph = UsedByGraph::default();
    let mut depth = 0usize;

    while !frontier.is_empty() {
        let level: Vec<PathBuf> =
            frontier.drain(..).filter(|file| visited.insert(file.clone())).collect();
        trace!("Level {}: reading {} files", depth, level.len());

        let contents: Vec<_> = level.par_iter().map(|file| reader.read(file)).collect();

        let mut next = Vec::new();
        for (file, content) in level.into_iter().zip(contents) {
            match content {
                Ok(text) => next.extend(graph.expand(&file, &text)),
                Err(e) => {
                    debug!("Unreadable: {}", e);
                    graph.record_unreadable(file);
                }
            }
        }

        frontier = next;
        depth += 1;
    }

    debug!(
        "Resolved {} files ({} unreadable) over {} levels",
        graph.len(),
        graph.unreadable.len(),
        depth
    );
    graph
}
