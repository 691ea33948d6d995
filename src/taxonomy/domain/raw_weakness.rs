/// Relationship nature that marks the target weakness as a parent
pub const CHILD_OF: &str = "ChildOf";

/// One `Related_Weakness` entry as it appears in the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedWeakness {
    pub cwe_id: String,
    pub nature: String,
}

impl RelatedWeakness {
    pub fn new(cwe_id: impl Into<String>, nature: impl Into<String>) -> Self {
        Self {
            cwe_id: cwe_id.into(),
            nature: nature.into(),
        }
    }

    pub fn is_child_of(&self) -> bool {
        self.nature == CHILD_OF
    }
}

/// RawWeakness - a `Weakness` element as produced by a taxonomy source
///
/// `related` is `None` when the element has no `Related_Weaknesses` child.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawWeakness {
    pub id: String,
    pub name: String,
    pub related: Option<Vec<RelatedWeakness>>,
}

impl RawWeakness {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        related: Option<Vec<RelatedWeakness>>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            related,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_related_weakness_child_of_is_exact_match() {
        assert!(RelatedWeakness::new("20", "ChildOf").is_child_of());
        assert!(!RelatedWeakness::new("20", "childof").is_child_of());
        assert!(!RelatedWeakness::new("20", "ParentOf").is_child_of());
        assert!(!RelatedWeakness::new("20", "CanPrecede").is_child_of());
    }
}
