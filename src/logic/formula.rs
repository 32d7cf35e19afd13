//! The formula algebra.
//!
//! A closed sum type: fact and equality atoms combined with negation,
//! conjunction, disjunction, and implication. The evaluator matches
//! exhaustively, so adding a variant is a compile-time obligation for every
//! consumer rather than a silent fallthrough.

use crate::logic::term::Term;
use crate::param::Variable;

/// A logical expression over the semantic network.
#[derive(Debug, Clone)]
pub enum Formula {
    /// The named predicate holds for the argument tuple.
    Fact { predicate: String, args: Vec<Term> },
    /// The two terms resolve to equal values.
    Eq { left: Term, right: Term },
    Not(Box<Formula>),
    And(Vec<Formula>),
    Or(Vec<Formula>),
    Implies(Box<Formula>, Box<Formula>),
}

impl Formula {
    /// Atom: `predicate(args...)`.
    pub fn fact<I, T>(predicate: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Term>,
    {
        Formula::Fact {
            predicate: predicate.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Atom: `left = right`.
    pub fn eq(left: impl Into<Term>, right: impl Into<Term>) -> Self {
        Formula::Eq {
            left: left.into(),
            right: right.into(),
        }
    }

    /// Negation.
    pub fn not(inner: Formula) -> Self {
        Formula::Not(Box::new(inner))
    }

    /// Conjunction over any number of formulas (empty is vacuously true).
    pub fn and(items: impl IntoIterator<Item = Formula>) -> Self {
        Formula::And(items.into_iter().collect())
    }

    /// Disjunction over any number of formulas (empty is vacuously false).
    pub fn or(items: impl IntoIterator<Item = Formula>) -> Self {
        Formula::Or(items.into_iter().collect())
    }

    /// Implication.
    pub fn implies(left: Formula, right: Formula) -> Self {
        Formula::Implies(Box::new(left), Box::new(right))
    }

    /// The distinct variables of the formula, in order of first appearance.
    pub fn free_variables(&self) -> Vec<Variable> {
        let mut seen: Vec<Variable> = Vec::new();
        self.collect_variables(&mut seen);
        seen
    }

    fn collect_variables(&self, seen: &mut Vec<Variable>) {
        let mut push = |var: &Variable, seen: &mut Vec<Variable>| {
            if !seen.iter().any(|v| v.name() == var.name()) {
                seen.push(var.clone());
            }
        };
        match self {
            Formula::Fact { args, .. } => {
                for term in args {
                    if let Some(var) = term.as_var() {
                        push(var, seen);
                    }
                }
            }
            Formula::Eq { left, right } => {
                for term in [left, right] {
                    if let Some(var) = term.as_var() {
                        push(var, seen);
                    }
                }
            }
            Formula::Not(inner) => inner.collect_variables(seen),
            Formula::And(items) | Formula::Or(items) => {
                for item in items {
                    item.collect_variables(seen);
                }
            }
            Formula::Implies(left, right) => {
                left.collect_variables(seen);
                right.collect_variables(seen);
            }
        }
    }
}

impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn join(f: &mut std::fmt::Formatter<'_>, items: &[Formula], sep: &str) -> std::fmt::Result {
            write!(f, "(")?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    write!(f, " {sep} ")?;
                }
                write!(f, "{item}")?;
            }
            write!(f, ")")
        }
        match self {
            Formula::Fact { predicate, args } => {
                write!(f, "{predicate}(")?;
                for (i, a) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{a}")?;
                }
                write!(f, ")")
            }
            Formula::Eq { left, right } => write!(f, "({left} = {right})"),
            Formula::Not(inner) => write!(f, "!{inner}"),
            Formula::And(items) => join(f, items, "&"),
            Formula::Or(items) => join(f, items, "|"),
            Formula::Implies(left, right) => write!(f, "({left} -> {right})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::param::EnumDomain;
    use std::sync::Arc;

    fn var(name: &str) -> Variable {
        Variable::new(name, Arc::new(EnumDomain::new(["a", "b"]))).unwrap()
    }

    #[test]
    fn free_variables_dedup_in_appearance_order() {
        let x = var("x");
        let y = var("y");
        let phi = Formula::and([
            Formula::fact("knows", [Term::from(&x), Term::from(&y)]),
            Formula::not(Formula::fact("blocked", [Term::from(&y), Term::from(&x)])),
            Formula::eq(&x, "a"),
        ]);
        let vars = phi.free_variables();
        let names: Vec<&str> = vars.iter().map(|v| v.name()).collect();
        assert_eq!(names, ["x", "y"]);
    }

    #[test]
    fn ground_formulas_have_no_free_variables() {
        let phi = Formula::implies(
            Formula::fact("edge", ["h", "A", "F"]),
            Formula::or([Formula::eq(1i64, 1i64), Formula::fact("edge", ["s"])]),
        );
        assert!(phi.free_variables().is_empty());
    }

    #[test]
    fn display_is_readable() {
        let x = var("x");
        let phi = Formula::implies(
            Formula::fact("knows", [Term::from(&x), Term::from("bob")]),
            Formula::not(Formula::eq(&x, 3i64)),
        );
        assert_eq!(phi.to_string(), "(knows(?x, \"bob\") -> !(?x = 3))");
    }
}
