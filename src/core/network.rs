//! Semantic network: the mutable fact store.
//!
//! Owns the concept and predicate tables plus the asserted facts. Facts live
//! in an arena keyed by stable [`FactId`]; the predicate and concept indices
//! map keys to sets of fact ids, so every mutation touches one owning slot
//! and id sets rather than re-deriving full statement copies. Invariants,
//! enforced on every mutation:
//!
//! - every fact's predicate exists in the predicate table;
//! - every fact's arity equals its predicate's declared arity;
//! - the indices are exact derivations of the arena (a fact is indexed under
//!   its predicate and under every concept-typed argument it contains).
//!
//! Mutators validate before touching anything, so a rejected operation
//! leaves the network exactly as it was. The store is not internally
//! synchronized; embedders serialize writes per network instance.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::num::NonZeroU64;

use serde::{Deserialize, Serialize};

use crate::core::concept::Concept;
use crate::core::predicate::Predicate;
use crate::core::statement::{Statement, Value};
use crate::error::{CoreError, CoreResult};

/// Stable identifier of an asserted fact.
///
/// Uses `NonZeroU64` so that `Option<FactId>` is the same size as `FactId`.
/// Ids are never reused within one network's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(transparent)]
pub struct FactId(NonZeroU64);

impl FactId {
    /// Create a `FactId` from a raw `u64`. Returns `None` if `raw` is zero.
    pub fn new(raw: u64) -> Option<Self> {
        NonZeroU64::new(raw).map(FactId)
    }

    /// Get the underlying `u64` value.
    pub fn get(self) -> u64 {
        self.0.get()
    }
}

impl std::fmt::Display for FactId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "fact:{}", self.0)
    }
}

/// The in-memory fact store: concepts, predicates, facts, and indices.
#[derive(Debug, Clone, Default)]
pub struct SemanticNetwork {
    concepts: BTreeMap<String, Concept>,
    predicates: BTreeMap<String, Predicate>,
    facts: BTreeMap<FactId, Statement>,
    by_predicate: HashMap<String, BTreeSet<FactId>>,
    by_concept: HashMap<String, BTreeSet<FactId>>,
    next_fact: u64,
}

impl SemanticNetwork {
    /// Create an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    // -- concepts -----------------------------------------------------------

    /// Register a concept. Fails if the id is already taken.
    pub fn add_concept(&mut self, concept: Concept) -> CoreResult<()> {
        if self.concepts.contains_key(&concept.id) {
            return Err(CoreError::DuplicateConcept { id: concept.id });
        }
        tracing::debug!(id = %concept.id, "add concept");
        self.concepts.insert(concept.id.clone(), concept);
        Ok(())
    }

    /// Look up a concept by id.
    pub fn concept(&self, id: &str) -> Option<&Concept> {
        self.concepts.get(id)
    }

    /// Whether a concept with this id is registered.
    pub fn contains_concept(&self, id: &str) -> bool {
        self.concepts.contains_key(id)
    }

    /// Iterate over all registered concepts in id order.
    pub fn concepts(&self) -> impl Iterator<Item = &Concept> {
        self.concepts.values()
    }

    /// Number of registered concepts.
    pub fn concept_count(&self) -> usize {
        self.concepts.len()
    }

    // -- predicates ---------------------------------------------------------

    /// Register a predicate. Fails if the name is already taken.
    pub fn add_predicate(&mut self, predicate: Predicate) -> CoreResult<()> {
        if self.predicates.contains_key(&predicate.name) {
            return Err(CoreError::DuplicatePredicate {
                name: predicate.name,
            });
        }
        tracing::debug!(predicate = %predicate, "add predicate");
        self.predicates.insert(predicate.name.clone(), predicate);
        Ok(())
    }

    /// Look up a predicate by name.
    pub fn predicate(&self, name: &str) -> Option<&Predicate> {
        self.predicates.get(name)
    }

    /// Whether a predicate with this name is registered.
    pub fn contains_predicate(&self, name: &str) -> bool {
        self.predicates.contains_key(name)
    }

    /// Iterate over all registered predicates in name order.
    pub fn predicates(&self) -> impl Iterator<Item = &Predicate> {
        self.predicates.values()
    }

    /// Number of registered predicates.
    pub fn predicate_count(&self) -> usize {
        self.predicates.len()
    }

    // -- facts --------------------------------------------------------------

    /// Assert a fact. Idempotent: re-asserting an existing fact returns its
    /// original id and changes nothing.
    pub fn assert_fact(&mut self, predicate: &str, args: Vec<Value>) -> CoreResult<FactId> {
        let declared = self
            .predicates
            .get(predicate)
            .ok_or_else(|| CoreError::UnknownPredicate {
                name: predicate.to_owned(),
            })?;
        if args.len() != declared.arity {
            return Err(CoreError::ArityMismatch {
                predicate: predicate.to_owned(),
                expected: declared.arity,
                actual: args.len(),
            });
        }
        let statement = Statement::new(predicate, args)?;

        if let Some(existing) = self.find_fact(&statement) {
            return Ok(existing);
        }

        self.next_fact += 1;
        let id = FactId::new(self.next_fact).expect("fact counter starts at 1");
        tracing::debug!(%id, fact = %statement, "assert fact");

        self.by_predicate
            .entry(statement.predicate.clone())
            .or_default()
            .insert(id);
        for cid in statement.concept_ids() {
            self.by_concept.entry(cid.to_owned()).or_default().insert(id);
        }
        self.facts.insert(id, statement);
        Ok(id)
    }

    /// Look up a fact by id.
    pub fn fact(&self, id: FactId) -> Option<&Statement> {
        self.facts.get(&id)
    }

    /// The id of an exactly matching fact, if asserted.
    pub fn find_fact(&self, statement: &Statement) -> Option<FactId> {
        self.by_predicate
            .get(&statement.predicate)?
            .iter()
            .copied()
            .find(|id| self.facts.get(id) == Some(statement))
    }

    /// Snapshot of every asserted fact.
    pub fn facts(&self) -> Vec<Statement> {
        self.facts.values().cloned().collect()
    }

    /// Snapshot of the facts asserted for one predicate.
    pub fn facts_for(&self, predicate: &str) -> Vec<Statement> {
        self.iter_facts_for(predicate).cloned().collect()
    }

    /// Borrowing iterator over the facts of one predicate, via the index.
    pub fn iter_facts_for<'a>(
        &'a self,
        predicate: &str,
    ) -> impl Iterator<Item = &'a Statement> {
        self.by_predicate
            .get(predicate)
            .into_iter()
            .flatten()
            .filter_map(|id| self.facts.get(id))
    }

    /// Number of asserted facts.
    pub fn fact_count(&self) -> usize {
        self.facts.len()
    }

    /// Remove a fact by exact match on predicate and arguments.
    pub fn remove_fact(&mut self, statement: &Statement) -> CoreResult<()> {
        let id = self
            .find_fact(statement)
            .ok_or_else(|| CoreError::FactNotFound {
                statement: statement.to_string(),
            })?;
        self.unlink_fact(id);
        Ok(())
    }

    // -- removal cascades ---------------------------------------------------

    /// Remove a concept and every fact that references it.
    ///
    /// Returns the removed facts so callers can report cascading effects.
    pub fn remove_concept(&mut self, id: &str) -> CoreResult<Vec<Statement>> {
        if !self.concepts.contains_key(id) {
            return Err(CoreError::UnknownConcept { id: id.to_owned() });
        }
        self.concepts.remove(id);
        let referencing = self.by_concept.remove(id).unwrap_or_default();
        let removed: Vec<Statement> = referencing
            .into_iter()
            .filter_map(|fid| self.unlink_fact(fid))
            .collect();
        tracing::debug!(id, cascaded = removed.len(), "remove concept");
        Ok(removed)
    }

    /// Remove a predicate and every fact asserted for it.
    pub fn remove_predicate(&mut self, name: &str) -> CoreResult<Vec<Statement>> {
        if !self.predicates.contains_key(name) {
            return Err(CoreError::UnknownPredicate {
                name: name.to_owned(),
            });
        }
        self.predicates.remove(name);
        let referencing = self.by_predicate.remove(name).unwrap_or_default();
        let removed: Vec<Statement> = referencing
            .into_iter()
            .filter_map(|fid| self.unlink_fact(fid))
            .collect();
        tracing::debug!(name, cascaded = removed.len(), "remove predicate");
        Ok(removed)
    }

    // -- structural replacement ---------------------------------------------

    /// Replace a concept value in place, rewriting every fact that
    /// references it. The new concept must carry the same id.
    pub fn replace_concept(&mut self, old_id: &str, new_concept: Concept) -> CoreResult<()> {
        if !self.concepts.contains_key(old_id) {
            return Err(CoreError::UnknownConcept {
                id: old_id.to_owned(),
            });
        }
        if new_concept.id != old_id {
            return Err(CoreError::ConceptIdMismatch {
                expected: old_id.to_owned(),
                actual: new_concept.id,
            });
        }
        // Fact ids and index membership are keyed by the (unchanged) id, so
        // the rewrite only swaps the stored concept value inside each fact.
        if let Some(referencing) = self.by_concept.get(old_id) {
            for fid in referencing {
                if let Some(st) = self.facts.get_mut(fid) {
                    for arg in &mut st.args {
                        if let Value::Concept(c) = arg
                            && c.id == old_id
                        {
                            *c = new_concept.clone();
                        }
                    }
                }
            }
        }
        self.concepts.insert(old_id.to_owned(), new_concept);
        Ok(())
    }

    /// Replace a predicate schema in place. The new predicate must carry the
    /// same name, and may not change arity while facts for it exist.
    pub fn replace_predicate(&mut self, old_name: &str, new_predicate: Predicate) -> CoreResult<()> {
        let current = self
            .predicates
            .get(old_name)
            .ok_or_else(|| CoreError::UnknownPredicate {
                name: old_name.to_owned(),
            })?;
        if new_predicate.name != old_name {
            return Err(CoreError::PredicateNameMismatch {
                expected: old_name.to_owned(),
                actual: new_predicate.name,
            });
        }
        let fact_count = self.by_predicate.get(old_name).map_or(0, BTreeSet::len);
        if fact_count > 0 && new_predicate.arity != current.arity {
            return Err(CoreError::ArityChangeWithFacts {
                name: old_name.to_owned(),
                from: current.arity,
                to: new_predicate.arity,
                fact_count,
            });
        }
        self.predicates.insert(old_name.to_owned(), new_predicate);
        Ok(())
    }

    // -- consistency --------------------------------------------------------

    /// Walk every fact and fail on the first inconsistency: a reference to
    /// an unregistered predicate, or an arity mismatch against the declared
    /// schema. A checking entry point, not invoked automatically by mutators.
    pub fn validate(&self) -> CoreResult<()> {
        for st in self.facts.values() {
            let declared = self.predicates.get(&st.predicate).ok_or_else(|| {
                CoreError::UnknownPredicate {
                    name: st.predicate.clone(),
                }
            })?;
            if st.arity() != declared.arity {
                return Err(CoreError::ArityMismatch {
                    predicate: st.predicate.clone(),
                    expected: declared.arity,
                    actual: st.arity(),
                });
            }
        }
        Ok(())
    }

    /// Detach a fact from the arena and both indices.
    fn unlink_fact(&mut self, id: FactId) -> Option<Statement> {
        let statement = self.facts.remove(&id)?;
        if let Some(bucket) = self.by_predicate.get_mut(&statement.predicate) {
            bucket.remove(&id);
            if bucket.is_empty() {
                self.by_predicate.remove(&statement.predicate);
            }
        }
        for cid in statement.concept_ids() {
            if let Some(bucket) = self.by_concept.get_mut(cid) {
                bucket.remove(&id);
                if bucket.is_empty() {
                    self.by_concept.remove(cid);
                }
            }
        }
        Some(statement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn knows_network() -> SemanticNetwork {
        let mut net = SemanticNetwork::new();
        net.add_concept(Concept::labeled("alice", "Alice")).unwrap();
        net.add_concept(Concept::labeled("bob", "Bob")).unwrap();
        net.add_predicate(
            Predicate::new("knows", 2)
                .unwrap()
                .with_roles(["who", "whom"])
                .unwrap(),
        )
        .unwrap();
        net
    }

    fn knows_args(net: &SemanticNetwork) -> Vec<Value> {
        vec![
            net.concept("alice").unwrap().into(),
            net.concept("bob").unwrap().into(),
        ]
    }

    #[test]
    fn duplicate_adds_are_rejected() {
        let mut net = knows_network();
        assert!(matches!(
            net.add_concept(Concept::new("alice")).unwrap_err(),
            CoreError::DuplicateConcept { .. }
        ));
        assert!(matches!(
            net.add_predicate(Predicate::new("knows", 3).unwrap())
                .unwrap_err(),
            CoreError::DuplicatePredicate { .. }
        ));
        // Rejected adds commit nothing.
        assert_eq!(net.concept_count(), 2);
        assert_eq!(net.predicate("knows").unwrap().arity, 2);
    }

    #[test]
    fn assert_requires_known_predicate_and_matching_arity() {
        let mut net = knows_network();
        assert!(matches!(
            net.assert_fact("likes", knows_args(&net)).unwrap_err(),
            CoreError::UnknownPredicate { .. }
        ));
        assert!(matches!(
            net.assert_fact("knows", vec![Value::from("alice")])
                .unwrap_err(),
            CoreError::ArityMismatch {
                expected: 2,
                actual: 1,
                ..
            }
        ));
        assert_eq!(net.fact_count(), 0);
    }

    #[test]
    fn assert_is_idempotent() {
        let mut net = knows_network();
        let args = knows_args(&net);
        let first = net.assert_fact("knows", args.clone()).unwrap();
        let second = net.assert_fact("knows", args).unwrap();
        assert_eq!(first, second);
        assert_eq!(net.fact_count(), 1);
        assert_eq!(net.facts_for("knows").len(), 1);
    }

    #[test]
    fn facts_returns_a_snapshot() {
        let mut net = knows_network();
        net.assert_fact("knows", knows_args(&net)).unwrap();
        let snapshot = net.facts();
        net.remove_predicate("knows").unwrap();
        // The snapshot is unaffected by later mutation.
        assert_eq!(snapshot.len(), 1);
        assert_eq!(net.fact_count(), 0);
    }

    #[test]
    fn remove_concept_cascades_and_reports() {
        let mut net = knows_network();
        net.add_concept(Concept::new("carol")).unwrap();
        net.add_predicate(Predicate::new("likes", 2).unwrap())
            .unwrap();
        let alice: Value = net.concept("alice").unwrap().into();
        let bob: Value = net.concept("bob").unwrap().into();
        let carol: Value = net.concept("carol").unwrap().into();
        net.assert_fact("knows", vec![alice.clone(), bob.clone()])
            .unwrap();
        net.assert_fact("likes", vec![bob.clone(), alice.clone()])
            .unwrap();
        net.assert_fact("likes", vec![carol.clone(), bob.clone()])
            .unwrap();

        let removed = net.remove_concept("bob").unwrap();
        assert_eq!(removed.len(), 3);
        assert!(!net.contains_concept("bob"));
        assert_eq!(net.fact_count(), 0);
        // The other concepts' index entries for the removed facts are gone too:
        // re-removing alice cascades nothing.
        assert!(net.remove_concept("alice").unwrap().is_empty());
    }

    #[test]
    fn remove_predicate_cascades_only_its_facts() {
        let mut net = knows_network();
        net.add_predicate(Predicate::new("likes", 2).unwrap())
            .unwrap();
        let args = knows_args(&net);
        net.assert_fact("knows", args.clone()).unwrap();
        net.assert_fact("likes", args).unwrap();

        let removed = net.remove_predicate("likes").unwrap();
        assert_eq!(removed.len(), 1);
        assert_eq!(removed[0].predicate, "likes");
        assert_eq!(net.fact_count(), 1);
        assert!(net.contains_predicate("knows"));
    }

    #[test]
    fn remove_fact_requires_exact_match() {
        let mut net = knows_network();
        net.assert_fact("knows", knows_args(&net)).unwrap();

        let reversed = Statement::new(
            "knows",
            vec![
                net.concept("bob").unwrap().into(),
                net.concept("alice").unwrap().into(),
            ],
        )
        .unwrap();
        assert!(matches!(
            net.remove_fact(&reversed).unwrap_err(),
            CoreError::FactNotFound { .. }
        ));

        let exact = Statement::new("knows", knows_args(&net)).unwrap();
        net.remove_fact(&exact).unwrap();
        assert_eq!(net.fact_count(), 0);
        assert!(net.facts_for("knows").is_empty());
    }

    #[test]
    fn replace_concept_rewrites_facts_in_place() {
        let mut net = knows_network();
        let id = net.assert_fact("knows", knows_args(&net)).unwrap();

        net.replace_concept("alice", Concept::labeled("alice", "Alice Liddell"))
            .unwrap();
        assert_eq!(
            net.concept("alice").unwrap().label.as_deref(),
            Some("Alice Liddell")
        );
        // Same fact id, rewritten payload.
        let st = net.fact(id).unwrap();
        let arg = st.args[0].as_concept().unwrap();
        assert_eq!(arg.label.as_deref(), Some("Alice Liddell"));
        assert_eq!(net.fact_count(), 1);
    }

    #[test]
    fn replace_concept_rejects_renames() {
        let mut net = knows_network();
        assert!(matches!(
            net.replace_concept("alice", Concept::new("alyce"))
                .unwrap_err(),
            CoreError::ConceptIdMismatch { .. }
        ));
        assert!(net.contains_concept("alice"));
    }

    #[test]
    fn replace_predicate_guards_arity_under_live_facts() {
        let mut net = knows_network();
        net.assert_fact("knows", knows_args(&net)).unwrap();

        assert!(matches!(
            net.replace_predicate("knows", Predicate::new("knows", 3).unwrap())
                .unwrap_err(),
            CoreError::ArityChangeWithFacts { from: 2, to: 3, .. }
        ));

        // Same arity with new roles is fine.
        net.replace_predicate(
            "knows",
            Predicate::new("knows", 2)
                .unwrap()
                .with_roles(["subject", "object"])
                .unwrap(),
        )
        .unwrap();
        assert_eq!(net.predicate("knows").unwrap().role(0), Some("subject"));

        // With no facts, arity may change.
        net.remove_fact(&Statement::new("knows", knows_args(&net)).unwrap())
            .unwrap();
        net.replace_predicate("knows", Predicate::new("knows", 3).unwrap())
            .unwrap();
        assert_eq!(net.predicate("knows").unwrap().arity, 3);
    }

    #[test]
    fn validate_walks_all_facts() {
        let mut net = knows_network();
        net.assert_fact("knows", knows_args(&net)).unwrap();
        net.validate().unwrap();
    }

    #[test]
    fn fact_ids_are_not_reused() {
        let mut net = knows_network();
        let args = knows_args(&net);
        let first = net.assert_fact("knows", args.clone()).unwrap();
        net.remove_fact(&Statement::new("knows", args.clone()).unwrap())
            .unwrap();
        let second = net.assert_fact("knows", args).unwrap();
        assert_ne!(first, second);
    }
}
