//! The forcing engine: check, forces, force.
//!
//! Composes the evaluator, a guard, and a search strategy into the forcing
//! protocol. `check` and `forces` are pure reads; `force` may explore
//! speculative contexts, always through copies; the caller's context is
//! never mutated.

use crate::core::SemanticNetwork;
use crate::error::HekaResult;
use crate::forcing::conditions::Conditions;
use crate::forcing::result::{CheckResult, ForceResult};
use crate::forcing::strategy::{BruteEnumStrategy, Strategy};
use crate::logic::{Formula, evaluate};
use crate::param::{Context, Variable};
use crate::tribool::TriBool;

/// Reasoning facade over one semantic network.
pub struct ForcingEngine<'n> {
    net: &'n SemanticNetwork,
}

impl<'n> ForcingEngine<'n> {
    /// Create an engine reading the given network.
    pub fn new(net: &'n SemanticNetwork) -> Self {
        Self { net }
    }

    /// Evaluate every guard condition.
    ///
    /// False conditions are violations; unknown conditions are reported
    /// separately and do not fail the check.
    pub fn check(&self, ctx: &Context, conditions: &Conditions) -> CheckResult {
        let mut violated = Vec::new();
        let mut unknown = Vec::new();
        for (index, condition) in conditions.items().iter().enumerate() {
            match evaluate(condition, self.net, ctx) {
                TriBool::False => violated.push(index),
                TriBool::Unknown => unknown.push(index),
                TriBool::True => {}
            }
        }
        CheckResult {
            ok: violated.is_empty(),
            violated,
            unknown,
        }
    }

    /// Does the context force the goal under the guard?
    ///
    /// A violated guard forces the goal to not hold. Otherwise the verdict
    /// is the goal's own, weakened to unknown while any condition is still
    /// unknown.
    pub fn forces(&self, ctx: &Context, phi: &Formula, conditions: &Conditions) -> TriBool {
        let chk = self.check(ctx, conditions);
        if !chk.ok {
            return TriBool::False;
        }
        match evaluate(phi, self.net, ctx) {
            TriBool::False => TriBool::False,
            TriBool::True if chk.unknown.is_empty() => TriBool::True,
            _ => TriBool::Unknown,
        }
    }

    /// Determine the goal's status, searching with the default strategy if
    /// it is undetermined.
    pub fn force(
        &self,
        ctx: &Context,
        phi: &Formula,
        conditions: &Conditions,
    ) -> HekaResult<ForceResult> {
        self.force_with(ctx, phi, conditions, &BruteEnumStrategy::default())
    }

    /// Determine the goal's status, searching with the given strategy if it
    /// is undetermined.
    ///
    /// Candidate contexts are built with `Context::extend`, so neither the
    /// caller's context nor any sibling candidate is ever mutated.
    pub fn force_with(
        &self,
        ctx: &Context,
        phi: &Formula,
        conditions: &Conditions,
        strategy: &dyn Strategy,
    ) -> HekaResult<ForceResult> {
        let chk = self.check(ctx, conditions);
        if !chk.ok {
            let indices: Vec<String> = chk.violated.iter().map(usize::to_string).collect();
            return Ok(ForceResult {
                status: TriBool::False,
                context: None,
                explanation: format!("Condition(s) violated: [{}]", indices.join(", ")),
            });
        }
        match evaluate(phi, self.net, ctx) {
            TriBool::False => {
                return Ok(ForceResult {
                    status: TriBool::False,
                    context: None,
                    explanation: "Goal evaluates to false".into(),
                });
            }
            TriBool::True if chk.unknown.is_empty() => {
                return Ok(ForceResult {
                    status: TriBool::True,
                    context: Some(ctx.clone()),
                    explanation: "Already forced".into(),
                });
            }
            _ => {}
        }

        self.search(ctx, phi, conditions, strategy)
    }

    /// The unknown path: try strategy candidates until one forces the goal.
    fn search(
        &self,
        ctx: &Context,
        phi: &Formula,
        conditions: &Conditions,
        strategy: &dyn Strategy,
    ) -> HekaResult<ForceResult> {
        let vars = self.unassigned_variables(ctx, phi, conditions);
        tracing::debug!(
            unassigned = vars.len(),
            "goal undetermined, consulting search strategy"
        );

        let mut tried = 0usize;
        for candidate in strategy.candidates(ctx, &vars) {
            tried += 1;
            let speculative =
                ctx.extend(candidate.iter().map(|(var, value)| (var, value.clone())))?;
            if self.forces(&speculative, phi, conditions).is_true() {
                let bindings: Vec<String> = candidate
                    .iter()
                    .map(|(var, value)| format!("{}={}", var.name(), value))
                    .collect();
                tracing::debug!(tried, "search found a witness");
                return Ok(ForceResult {
                    status: TriBool::True,
                    explanation: format!("Forced by assignment {{{}}}", bindings.join(", ")),
                    context: Some(speculative),
                });
            }
        }

        tracing::debug!(tried, "search exhausted without a witness");
        Ok(ForceResult {
            status: TriBool::Unknown,
            context: None,
            explanation: format!("Search exhausted after {tried} candidate(s) without a witness"),
        })
    }

    /// The distinct unassigned variables of the goal and every condition,
    /// in order of first appearance.
    fn unassigned_variables(
        &self,
        ctx: &Context,
        phi: &Formula,
        conditions: &Conditions,
    ) -> Vec<Variable> {
        let mut vars: Vec<Variable> = Vec::new();
        for formula in std::iter::once(phi).chain(conditions.items()) {
            for var in formula.free_variables() {
                if !ctx.is_assigned(&var) && !vars.iter().any(|v| v.name() == var.name()) {
                    vars.push(var);
                }
            }
        }
        vars
    }
}
