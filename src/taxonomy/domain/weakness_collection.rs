use std::collections::{BTreeSet, HashMap};

/// WeaknessRecord - a normalized weakness with its ChildOf parents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeaknessRecord {
    id: String,
    name: String,
    parents: BTreeSet<String>,
}

impl WeaknessRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>, parents: BTreeSet<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            parents,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parents(&self) -> &BTreeSet<String> {
        &self.parents
    }

    /// A record without parents hangs directly under the view root
    pub fn is_root(&self) -> bool {
        self.parents.is_empty()
    }
}

/// WeaknessCollection - identifier → record mapping that remembers insertion order
///
/// Enumeration order is the order in which identifiers were first inserted.
/// Re-inserting an existing identifier replaces the record in place.
#[derive(Debug, Clone, Default)]
pub struct WeaknessCollection {
    records: Vec<WeaknessRecord>,
    index: HashMap<String, usize>,
}

impl WeaknessCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record, returning the record it replaced if the id was already present
    pub fn insert(&mut self, record: WeaknessRecord) -> Option<WeaknessRecord> {
        match self.index.get(record.id()) {
            Some(&position) => Some(std::mem::replace(&mut self.records[position], record)),
            None => {
                self.index.insert(record.id().to_string(), self.records.len());
                self.records.push(record);
                None
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&WeaknessRecord> {
        self.index.get(id).map(|&position| &self.records[position])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &WeaknessRecord> {
        self.records.iter()
    }

    pub fn roots(&self) -> impl Iterator<Item = &WeaknessRecord> {
        self.records.iter().filter(|record| record.is_root())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<WeaknessRecord> for WeaknessCollection {
    fn from_iter<T: IntoIterator<Item = WeaknessRecord>>(iter: T) -> Self {
        let mut collection = Self::new();
        for record in iter {
            collection.insert(record);
        }
        collection
    }
}
