use crate::shared::Result;
use crate::taxonomy::domain::{TreeNode, ViewDefinition};

/// ViewFormatter port for rendering a view hierarchy as an artifact
pub trait ViewFormatter {
    /// File name of the artifact for `view` (e.g. `699.js`)
    fn file_name(&self, view: &ViewDefinition) -> String;

    /// Renders the hierarchy rooted at `root`
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, view: &ViewDefinition, root: &TreeNode) -> Result<String>;
}
