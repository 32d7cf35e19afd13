//! Search strategies: candidate assignments for undetermined goals.
//!
//! When `force` lands on an unknown verdict, it consults a [`Strategy`] for
//! candidate extensions of the context over the unassigned free variables.
//! A strategy's enumeration must be finite (bounded by its own branch cap)
//! and restartable: each `candidates` call starts a fresh enumeration.
//! Ordering is implementation-defined.

use crate::core::Value;
use crate::param::{Context, Variable};

/// One candidate: variable → value bindings to try on top of a context.
pub type CandidateAssignment = Vec<(Variable, Value)>;

/// A pluggable search policy over free-variable assignments.
pub trait Strategy {
    /// Enumerate candidate assignments for the given unassigned variables.
    ///
    /// The engine applies each candidate to a copy of `ctx` and re-tests the
    /// goal; the iterator must terminate within the strategy's own budget.
    fn candidates<'a>(
        &'a self,
        ctx: &Context,
        vars_to_assign: &'a [Variable],
    ) -> Box<dyn Iterator<Item = CandidateAssignment> + 'a>;
}

/// Default strategy: bounded brute enumeration.
///
/// `max_branch` caps how many candidates may be produced per call.
/// Enumeration of actual domain combinations is not implemented yet; the
/// engine currently sees a single empty candidate and reports the search as
/// inconclusive.
// TODO: enumerate EnumDomain cross products up to max_branch.
#[derive(Debug, Clone)]
pub struct BruteEnumStrategy {
    /// Upper bound on candidates produced per `candidates` call.
    pub max_branch: usize,
}

impl BruteEnumStrategy {
    pub fn new(max_branch: usize) -> Self {
        Self { max_branch }
    }
}

impl Default for BruteEnumStrategy {
    fn default() -> Self {
        Self { max_branch: 2000 }
    }
}

impl Strategy for BruteEnumStrategy {
    fn candidates<'a>(
        &'a self,
        _ctx: &Context,
        _vars_to_assign: &'a [Variable],
    ) -> Box<dyn Iterator<Item = CandidateAssignment> + 'a> {
        Box::new(std::iter::once(CandidateAssignment::new()).take(self.max_branch))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::param::EnumDomain;
    use std::sync::Arc;

    #[test]
    fn brute_enum_yields_one_empty_candidate() {
        let strategy = BruteEnumStrategy::default();
        let ctx = Context::new();
        let vars = [Variable::new("x", Arc::new(EnumDomain::new(["a"]))).unwrap()];

        let produced: Vec<CandidateAssignment> = strategy.candidates(&ctx, &vars).collect();
        assert_eq!(produced.len(), 1);
        assert!(produced[0].is_empty());
    }

    #[test]
    fn enumeration_is_restartable() {
        let strategy = BruteEnumStrategy::default();
        let ctx = Context::new();
        let vars: [Variable; 0] = [];

        assert_eq!(strategy.candidates(&ctx, &vars).count(), 1);
        // A second call starts over rather than resuming an exhausted iterator.
        assert_eq!(strategy.candidates(&ctx, &vars).count(), 1);
    }

    #[test]
    fn zero_branch_budget_yields_nothing() {
        let strategy = BruteEnumStrategy::new(0);
        let ctx = Context::new();
        let vars: [Variable; 0] = [];
        assert_eq!(strategy.candidates(&ctx, &vars).count(), 0);
    }
}
