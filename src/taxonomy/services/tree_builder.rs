use crate::shared::error::CweTreeError;
use crate::shared::Result;
use crate::taxonomy::domain::{TreeNode, ViewDefinition, ViewTree, WeaknessCollection, WeaknessRecord};
use std::collections::{HashMap, HashSet};

/// parent id → child records, each list in collection order
type ChildIndex<'a> = HashMap<&'a str, Vec<&'a WeaknessRecord>>;

/// TreeBuilder service turning a weakness collection into a view hierarchy
///
/// A record with N parents is emitted as N independent subtree copies, so the
/// result is a tree even though ChildOf edges form a DAG. Records whose
/// parents are all missing from the collection are never emitted.
///
/// Recursion tracks the current ancestor path and fails with
/// [`CweTreeError::CycleDetected`] when an id reappears on it.
pub struct TreeBuilder;

impl TreeBuilder {
    /// Builds the hierarchy of one view under a synthetic root node
    ///
    /// # Arguments
    /// * `collection` - Normalized records of the view
    /// * `view` - Id and title used for the synthetic root
    ///
    /// # Errors
    /// Returns `CweTreeError::CycleDetected` if ChildOf edges reachable from a
    /// root form a loop
    pub fn build(collection: &WeaknessCollection, view: &ViewDefinition) -> Result<ViewTree> {
        let index = Self::index_children(collection);
        let mut ancestors = Vec::new();
        let mut reached = HashSet::new();

        let roots = collection
            .roots()
            .map(|root| Self::build_subtree(root, &index, &mut ancestors, &mut reached))
            .collect::<Result<Vec<_>>>()?;

        let node_count = roots.iter().map(TreeNode::subtree_size).sum();
        let unreachable_ids = collection
            .iter()
            .filter(|record| !reached.contains(record.id()))
            .map(|record| record.id().to_string())
            .collect();

        Ok(ViewTree::new(
            TreeNode::view_root(view.id(), view.title(), roots),
            node_count,
            unreachable_ids,
        ))
    }

    /// Builds every subtree whose record names `parent_id` as a parent, in collection order
    pub fn build_children(collection: &WeaknessCollection, parent_id: &str) -> Result<Vec<TreeNode>> {
        let index = Self::index_children(collection);
        let mut ancestors = vec![parent_id];
        let mut reached = HashSet::new();
        Self::children_of(parent_id, &index, &mut ancestors, &mut reached)
    }

    fn index_children(collection: &WeaknessCollection) -> ChildIndex<'_> {
        let mut index: ChildIndex<'_> = HashMap::new();
        for record in collection.iter() {
            for parent_id in record.parents() {
                index.entry(parent_id.as_str()).or_default().push(record);
            }
        }
        index
    }

    fn build_subtree<'a>(
        record: &'a WeaknessRecord,
        index: &ChildIndex<'a>,
        ancestors: &mut Vec<&'a str>,
        reached: &mut HashSet<&'a str>,
    ) -> Result<TreeNode> {
        if let Some(start) = ancestors.iter().position(|id| *id == record.id()) {
            let mut path: Vec<String> = ancestors[start..].iter().map(|id| id.to_string()).collect();
            path.push(record.id().to_string());
            return Err(CweTreeError::CycleDetected { path }.into());
        }

        reached.insert(record.id());
        ancestors.push(record.id());
        let children = Self::children_of(record.id(), index, ancestors, reached);
        ancestors.pop();

        Ok(TreeNode::new(record.id(), record.name(), children?))
    }

    fn children_of<'a>(
        parent_id: &str,
        index: &ChildIndex<'a>,
        ancestors: &mut Vec<&'a str>,
        reached: &mut HashSet<&'a str>,
    ) -> Result<Vec<TreeNode>> {
        let Some(children) = index.get(parent_id) else {
            return Ok(Vec::new());
        };

        children
            .iter()
            .map(|child| Self::build_subtree(child, index, ancestors, reached))
            .collect()
    }
}
