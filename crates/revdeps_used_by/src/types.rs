use crate::graph::UsedByGraph;

#[derive(Debug, Clone)]
pub struct CheckResult {
    pub graph: UsedByGraph,
    /// Files that were read and scanned for imports
    pub files_analyzed: usize,
}
