//! Concept: an entity node in the semantic network.
//!
//! Concepts are immutable value objects addressed by a unique string id.
//! Equality and hashing are id-only: two `Concept` values sharing an id are
//! the same entity, possibly at different revisions. "Editing" a concept
//! means constructing a replacement with the same id and handing it to
//! `SemanticNetwork::replace_concept`.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// An entity in the semantic network, identified by a unique id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Concept {
    /// Unique string key. Identity in the store is by id alone.
    pub id: String,
    /// Optional human-readable display text.
    pub label: Option<String>,
    /// Unordered classification tags.
    pub tags: BTreeSet<String>,
    /// Opaque key-value annotations.
    pub meta: BTreeMap<String, String>,
}

impl Concept {
    /// Create a concept with just an id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: None,
            tags: BTreeSet::new(),
            meta: BTreeMap::new(),
        }
    }

    /// Create a concept with an id and display label.
    pub fn labeled(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: Some(label.into()),
            tags: BTreeSet::new(),
            meta: BTreeMap::new(),
        }
    }

    /// Return a copy with the given label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Return a copy with the given tags added.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Return a copy with a meta entry added.
    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.meta.insert(key.into(), value.into());
        self
    }

    /// The label if present, else the id.
    pub fn display_name(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.id)
    }
}

// Identity is by id alone; label/tags/meta are revisable payload.
impl PartialEq for Concept {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Concept {}

impl std::hash::Hash for Concept {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl std::fmt::Display for Concept {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "concept:{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_id_only() {
        let plain = Concept::new("sun");
        let rich = Concept::labeled("sun", "The Sun").with_tags(["star"]);
        assert_eq!(plain, rich);

        let other = Concept::new("moon");
        assert_ne!(plain, other);
    }

    #[test]
    fn hash_agrees_with_equality() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(Concept::new("sun"));
        // Same id, different payload: must not create a second member.
        assert!(!set.insert(Concept::labeled("sun", "The Sun")));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn builders_accumulate() {
        let c = Concept::new("sun")
            .with_label("The Sun")
            .with_tags(["star", "hot"])
            .with_meta("spectral_class", "G2V");
        assert_eq!(c.label.as_deref(), Some("The Sun"));
        assert!(c.tags.contains("star"));
        assert_eq!(c.meta.get("spectral_class").map(String::as_str), Some("G2V"));
    }

    #[test]
    fn display_name_falls_back_to_id() {
        assert_eq!(Concept::new("sun").display_name(), "sun");
        assert_eq!(Concept::labeled("sun", "The Sun").display_name(), "The Sun");
    }
}
