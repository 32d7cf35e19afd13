//! Terms: the leaves of formulas.
//!
//! A term is either ground (a concept or literal [`Value`]) or a
//! [`Variable`] to be resolved against a context at evaluation time.

use crate::core::{Concept, Value};
use crate::param::Variable;

/// A formula leaf: a ground value or a variable.
#[derive(Debug, Clone)]
pub enum Term {
    Ground(Value),
    Var(Variable),
}

impl Term {
    /// The variable inside, if this term is one.
    pub fn as_var(&self) -> Option<&Variable> {
        match self {
            Term::Var(v) => Some(v),
            Term::Ground(_) => None,
        }
    }
}

impl From<Value> for Term {
    fn from(v: Value) -> Self {
        Term::Ground(v)
    }
}

impl From<Variable> for Term {
    fn from(v: Variable) -> Self {
        Term::Var(v)
    }
}

impl From<&Variable> for Term {
    fn from(v: &Variable) -> Self {
        Term::Var(v.clone())
    }
}

impl From<Concept> for Term {
    fn from(c: Concept) -> Self {
        Term::Ground(Value::Concept(c))
    }
}

impl From<&Concept> for Term {
    fn from(c: &Concept) -> Self {
        Term::Ground(Value::Concept(c.clone()))
    }
}

impl From<&str> for Term {
    fn from(s: &str) -> Self {
        Term::Ground(Value::from(s))
    }
}

impl From<String> for Term {
    fn from(s: String) -> Self {
        Term::Ground(Value::from(s))
    }
}

impl From<i64> for Term {
    fn from(i: i64) -> Self {
        Term::Ground(Value::from(i))
    }
}

impl From<f64> for Term {
    fn from(f: f64) -> Self {
        Term::Ground(Value::from(f))
    }
}

impl From<bool> for Term {
    fn from(b: bool) -> Self {
        Term::Ground(Value::from(b))
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Term::Ground(v) => write!(f, "{v}"),
            Term::Var(v) => write!(f, "{v}"),
        }
    }
}
