use crate::taxonomy::domain::{RawWeakness, WeaknessCollection, WeaknessRecord};
use std::collections::BTreeSet;

/// RecordExtractor service for normalizing raw catalog entries
///
/// This service contains pure business logic with no I/O dependencies.
pub struct RecordExtractor;

impl RecordExtractor {
    /// Builds the per-view collection from raw weakness entries
    ///
    /// Only `ChildOf` relationships become parents. Parent ids are not checked
    /// against the collection, and a repeated id replaces the earlier record.
    pub fn extract(raw_weaknesses: impl IntoIterator<Item = RawWeakness>) -> WeaknessCollection {
        raw_weaknesses
            .into_iter()
            .map(Self::normalize)
            .collect()
    }

    fn normalize(raw: RawWeakness) -> WeaknessRecord {
        let parents: BTreeSet<String> = raw
            .related
            .unwrap_or_default()
            .into_iter()
            .filter(|related| related.is_child_of())
            .map(|related| related.cwe_id)
            .collect();

        WeaknessRecord::new(raw.id, raw.name, parents)
    }
}
