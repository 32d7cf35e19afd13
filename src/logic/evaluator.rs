//! Three-valued formula evaluation.
//!
//! [`evaluate`] is pure: it only reads the network and the context. A
//! variable without a binding makes its enclosing atom [`TriBool::Unknown`],
//! and unknowns propagate through the connectives by the strong Kleene
//! tables in [`TriBool`].

use crate::core::{SemanticNetwork, Value};
use crate::logic::formula::Formula;
use crate::logic::term::Term;
use crate::param::Context;
use crate::tribool::TriBool;

/// Evaluate a formula against a network under a partial assignment.
pub fn evaluate(formula: &Formula, net: &SemanticNetwork, ctx: &Context) -> TriBool {
    match formula {
        Formula::Fact { predicate, args } => {
            let mut resolved: Vec<&Value> = Vec::with_capacity(args.len());
            for term in args {
                match resolve(term, ctx) {
                    Some(v) => resolved.push(v),
                    None => return TriBool::Unknown,
                }
            }
            let found = net.iter_facts_for(predicate).any(|fact| {
                fact.arity() == resolved.len()
                    && fact.args.iter().zip(&resolved).all(|(fa, ra)| fa == *ra)
            });
            found.into()
        }

        Formula::Eq { left, right } => match (resolve(left, ctx), resolve(right, ctx)) {
            (Some(l), Some(r)) => (l == r).into(),
            _ => TriBool::Unknown,
        },

        Formula::Not(inner) => evaluate(inner, net, ctx).negate(),

        Formula::And(items) => items
            .iter()
            .map(|item| evaluate(item, net, ctx))
            .fold(TriBool::True, TriBool::and),

        Formula::Or(items) => items
            .iter()
            .map(|item| evaluate(item, net, ctx))
            .fold(TriBool::False, TriBool::or),

        Formula::Implies(left, right) => {
            evaluate(left, net, ctx).implies(evaluate(right, net, ctx))
        }
    }
}

/// Resolve a term: ground terms are themselves, variables come from the
/// context. `None` means the variable is unassigned.
fn resolve<'a>(term: &'a Term, ctx: &'a Context) -> Option<&'a Value> {
    match term {
        Term::Ground(v) => Some(v),
        Term::Var(var) => ctx.get(var),
    }
}
