mod record_extractor;
mod tree_builder;

pub use record_extractor::RecordExtractor;
pub use tree_builder::TreeBuilder;
