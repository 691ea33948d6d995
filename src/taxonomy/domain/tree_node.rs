use serde::{Deserialize, Serialize};

/// TreeNode - one node of a view hierarchy as consumed by the browser viewer
///
/// `children` is `None` for leaves so the serialized node omits the field
/// entirely. The synthetic view root is the exception: it always carries an
/// array, possibly empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    pub cid: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<TreeNode>>,
}

impl TreeNode {
    /// Creates a node whose `children` is absent when the list is empty
    pub fn new(cid: impl Into<String>, name: impl Into<String>, children: Vec<TreeNode>) -> Self {
        Self {
            cid: cid.into(),
            name: name.into(),
            children: if children.is_empty() {
                None
            } else {
                Some(children)
            },
        }
    }

    pub fn leaf(cid: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(cid, name, Vec::new())
    }

    /// Creates the synthetic root of a view, which keeps an explicit children array
    pub fn view_root(cid: impl Into<String>, name: impl Into<String>, children: Vec<TreeNode>) -> Self {
        Self {
            cid: cid.into(),
            name: name.into(),
            children: Some(children),
        }
    }

    pub fn children(&self) -> &[TreeNode] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// Number of nodes in this subtree, including `self`
    pub fn subtree_size(&self) -> usize {
        1 + self.children().iter().map(TreeNode::subtree_size).sum::<usize>()
    }
}
