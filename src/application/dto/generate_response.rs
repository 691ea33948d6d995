use std::path::PathBuf;

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every requested view was written
    Completed,
    /// The operator stopped the run; remaining views were skipped
    Interrupted,
}

/// One artifact produced by the run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenView {
    pub view_id: String,
    pub path: PathBuf,
    /// Emitted tree nodes, excluding the synthetic view root
    pub node_count: usize,
    /// Records that were never reached from a root
    pub unreachable_count: usize,
}

/// GenerateResponse - Internal response DTO from the view generation use case
#[derive(Debug, Clone)]
pub struct GenerateResponse {
    pub outcome: RunOutcome,
    pub written: Vec<WrittenView>,
}

impl GenerateResponse {
    pub fn new(outcome: RunOutcome, written: Vec<WrittenView>) -> Self {
        Self { outcome, written }
    }

    pub fn is_interrupted(&self) -> bool {
        self.outcome == RunOutcome::Interrupted
    }
}
