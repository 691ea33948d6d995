use crate::ports::outbound::ViewFormatter;
use crate::shared::Result;
use crate::taxonomy::domain::{TreeNode, ViewDefinition};

const VARIABLE_PREFIX: &str = "var view_";
const ASSIGNMENT: &str = " = ";

/// JsAssignmentFormatter renders a view as `var view_<id> = <json>`
///
/// The viewer page loads one such script per view, so the JSON is compact
/// and there is no trailing newline or semicolon.
pub struct JsAssignmentFormatter;

impl JsAssignmentFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Splits an artifact back into its view id and tree
    pub fn decode(content: &str) -> Result<(String, TreeNode)> {
        let Some(rest) = content.strip_prefix(VARIABLE_PREFIX) else {
            anyhow::bail!("Artifact does not start with '{}'", VARIABLE_PREFIX);
        };
        let Some((view_id, json)) = rest.split_once(ASSIGNMENT) else {
            anyhow::bail!("Artifact has no '{}' assignment", ASSIGNMENT.trim());
        };

        let root: TreeNode = serde_json::from_str(json)
            .map_err(|e| anyhow::anyhow!("Failed to decode view_{} JSON: {}", view_id, e))?;
        Ok((view_id.to_string(), root))
    }
}

impl Default for JsAssignmentFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewFormatter for JsAssignmentFormatter {
    fn file_name(&self, view: &ViewDefinition) -> String {
        format!("{}.js", view.id())
    }

    fn format(&self, view: &ViewDefinition, root: &TreeNode) -> Result<String> {
        let json = serde_json::to_string(root)
            .map_err(|e| anyhow::anyhow!("Failed to serialize view {}: {}", view.id(), e))?;
        Ok(format!("{}{}{}{}", VARIABLE_PREFIX, view.id(), ASSIGNMENT, json))
    }
}
