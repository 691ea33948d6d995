use super::TreeNode;

/// ViewDefinition - a CWE view identifier and the title shown at the tree root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewDefinition {
    id: String,
    title: String,
}

impl ViewDefinition {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Name of the XML document inside the view archive
    pub fn xml_file_name(&self) -> String {
        format!("{}.xml", self.id)
    }

    /// Name of the zipped view archive
    pub fn archive_file_name(&self) -> String {
        format!("{}.xml.zip", self.id)
    }
}

/// ViewTree aggregate - the built hierarchy of one view plus build statistics
#[derive(Debug, Clone)]
pub struct ViewTree {
    root: TreeNode,
    node_count: usize,
    unreachable_ids: Vec<String>,
}

impl ViewTree {
    pub fn new(root: TreeNode, node_count: usize, unreachable_ids: Vec<String>) -> Self {
        Self {
            root,
            node_count,
            unreachable_ids,
        }
    }

    pub fn root(&self) -> &TreeNode {
        &self.root
    }

    /// Emitted nodes, excluding the synthetic view root; multi-parent copies count once per copy
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Records never reached from any root, in collection order
    pub fn unreachable_ids(&self) -> &[String] {
        &self.unreachable_ids
    }
}
