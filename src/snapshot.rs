//! JSON snapshots of networks and contexts.
//!
//! The snapshot types are the persisted representation: concepts and
//! predicates in full, facts with concept arguments referenced by id.
//! Restoring replays the snapshot through the public mutation API, so every
//! network invariant is re-validated on load and a tampered or stale file
//! surfaces a diagnostic instead of a corrupt store.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{Concept, Predicate, SemanticNetwork, Value};
use crate::error::{SnapshotError, SnapshotResult};
use crate::param::{Context, Variable};

/// Serialized fact argument: a concept reference by id, or a literal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ValueSnapshot {
    ConceptRef { concept: String },
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl ValueSnapshot {
    fn capture(value: &Value) -> Self {
        match value {
            Value::Concept(c) => ValueSnapshot::ConceptRef {
                concept: c.id.clone(),
            },
            Value::Str(s) => ValueSnapshot::Str(s.clone()),
            Value::Int(i) => ValueSnapshot::Int(*i),
            Value::Float(f) => ValueSnapshot::Float(*f),
            Value::Bool(b) => ValueSnapshot::Bool(*b),
        }
    }

    fn restore(&self, net: &SemanticNetwork) -> SnapshotResult<Value> {
        Ok(match self {
            ValueSnapshot::ConceptRef { concept } => {
                let resolved = net.concept(concept).ok_or_else(|| {
                    SnapshotError::UnresolvedConcept {
                        id: concept.clone(),
                    }
                })?;
                Value::Concept(resolved.clone())
            }
            ValueSnapshot::Str(s) => Value::Str(s.clone()),
            ValueSnapshot::Int(i) => Value::Int(*i),
            ValueSnapshot::Float(f) => Value::Float(*f),
            ValueSnapshot::Bool(b) => Value::Bool(*b),
        })
    }
}

/// Serialized fact: predicate name plus argument tuple.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactSnapshot {
    pub predicate: String,
    pub args: Vec<ValueSnapshot>,
}

/// Persisted representation of a whole network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSnapshot {
    pub concepts: Vec<Concept>,
    pub predicates: Vec<Predicate>,
    pub facts: Vec<FactSnapshot>,
}

impl NetworkSnapshot {
    /// Capture the current state of a network.
    pub fn capture(net: &SemanticNetwork) -> Self {
        Self {
            concepts: net.concepts().cloned().collect(),
            predicates: net.predicates().cloned().collect(),
            facts: net
                .facts()
                .iter()
                .map(|st| FactSnapshot {
                    predicate: st.predicate.clone(),
                    args: st.args.iter().map(ValueSnapshot::capture).collect(),
                })
                .collect(),
        }
    }

    /// Rebuild a network by replaying the snapshot through the mutation API.
    pub fn restore(&self) -> SnapshotResult<SemanticNetwork> {
        let mut net = SemanticNetwork::new();
        for concept in &self.concepts {
            net.add_concept(concept.clone())?;
        }
        for predicate in &self.predicates {
            net.add_predicate(predicate.clone())?;
        }
        for fact in &self.facts {
            let args = fact
                .args
                .iter()
                .map(|a| a.restore(&net))
                .collect::<SnapshotResult<Vec<Value>>>()?;
            net.assert_fact(&fact.predicate, args)?;
        }
        tracing::debug!(
            concepts = net.concept_count(),
            predicates = net.predicate_count(),
            facts = net.fact_count(),
            "network restored from snapshot"
        );
        Ok(net)
    }

    /// Encode as pretty-printed JSON.
    pub fn to_json(&self) -> SnapshotResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| SnapshotError::Json {
            message: e.to_string(),
        })
    }

    /// Decode from JSON.
    pub fn from_json(json: &str) -> SnapshotResult<Self> {
        serde_json::from_str(json).map_err(|e| SnapshotError::Json {
            message: e.to_string(),
        })
    }

    /// Write the JSON form to a file.
    pub fn save(&self, path: impl AsRef<Path>) -> SnapshotResult<()> {
        std::fs::write(path, self.to_json()?).map_err(|source| SnapshotError::Io { source })
    }

    /// Read the JSON form from a file.
    pub fn load(path: impl AsRef<Path>) -> SnapshotResult<Self> {
        let json =
            std::fs::read_to_string(path).map_err(|source| SnapshotError::Io { source })?;
        Self::from_json(&json)
    }
}

/// Persisted representation of a context's bindings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextSnapshot {
    pub values: std::collections::BTreeMap<String, ValueSnapshot>,
}

impl ContextSnapshot {
    /// Capture the current bindings of a context.
    pub fn capture(ctx: &Context) -> Self {
        Self {
            values: ctx
                .as_map()
                .iter()
                .map(|(name, value)| (name.clone(), ValueSnapshot::capture(value)))
                .collect(),
        }
    }

    /// Rebuild a context, re-validating every binding against the domains of
    /// the supplied variables and resolving concept references against the
    /// network.
    pub fn restore(
        &self,
        variables: &[Variable],
        net: &SemanticNetwork,
    ) -> SnapshotResult<Context> {
        let mut ctx = Context::new();
        for (name, snap) in &self.values {
            let var = variables
                .iter()
                .find(|v| v.name() == name)
                .ok_or_else(|| SnapshotError::UnknownVariable { name: name.clone() })?;
            let value = snap.restore(net)?;
            ctx.set(var, value)?;
        }
        Ok(ctx)
    }

    /// Encode as pretty-printed JSON.
    pub fn to_json(&self) -> SnapshotResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| SnapshotError::Json {
            message: e.to_string(),
        })
    }

    /// Decode from JSON.
    pub fn from_json(json: &str) -> SnapshotResult<Self> {
        serde_json::from_str(json).map_err(|e| SnapshotError::Json {
            message: e.to_string(),
        })
    }
}
