pub mod raw_weakness;
pub mod tree_node;
pub mod view;
pub mod weakness_collection;

pub use raw_weakness::{RawWeakness, RelatedWeakness, CHILD_OF};
pub use tree_node::TreeNode;
pub use view::{ViewDefinition, ViewTree};
pub use weakness_collection::{WeaknessCollection, WeaknessRecord};
