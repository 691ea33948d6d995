use cwe_tree::prelude::*;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Mock ArtifactWriter that keeps written artifacts in memory
#[derive(Default, Clone)]
pub struct MockArtifactWriter {
    artifacts: Arc<Mutex<BTreeMap<String, String>>>,
    order: Arc<Mutex<Vec<String>>>,
}

impl MockArtifactWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(&self, file_name: &str) -> Option<String> {
        self.artifacts.lock().unwrap().get(file_name).cloned()
    }

    /// File names in the order they were written
    pub fn written(&self) -> Vec<String> {
        self.order.lock().unwrap().clone()
    }
}

impl ArtifactWriter for MockArtifactWriter {
    fn write_artifact(&self, file_name: &str, content: &str) -> Result<PathBuf> {
        self.artifacts
            .lock()
            .unwrap()
            .insert(file_name.to_string(), content.to_string());
        self.order.lock().unwrap().push(file_name.to_string());
        Ok(PathBuf::from("memory").join(file_name))
    }
}
