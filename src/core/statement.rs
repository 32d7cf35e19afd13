//! Ground values and statements (facts).
//!
//! A [`Value`] is anything that can sit in a fact's argument tuple or be
//! bound to a variable: a concept or a scalar literal. A [`Statement`]
//! asserts that a predicate holds for a specific argument tuple. Two
//! statements are the same fact iff predicate and all arguments compare
//! equal by value (concepts by id, numbers numerically).

use serde::{Deserialize, Serialize};

use crate::core::concept::Concept;
use crate::error::{CoreError, CoreResult};

/// A ground term: a concept or a scalar literal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Value {
    Concept(Concept),
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl Value {
    /// Numeric view of the value, if it has one.
    ///
    /// Integers and floats coerce directly, booleans as 0/1, and strings
    /// are parsed. Concepts have no numeric view.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Value::Str(s) => s.trim().parse().ok(),
            Value::Concept(_) => None,
        }
    }

    /// The concept inside, if this value is one.
    pub fn as_concept(&self) -> Option<&Concept> {
        match self {
            Value::Concept(c) => Some(c),
            _ => None,
        }
    }
}

// Concepts compare by id (see `Concept`); numbers compare numerically across
// the Int/Float representations; everything else by variant and value.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Concept(a), Value::Concept(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Int(a), Value::Float(b)) | (Value::Float(b), Value::Int(a)) => {
                *a as f64 == *b
            }
            (Value::Bool(a), Value::Bool(b)) => a == b,
            _ => false,
        }
    }
}

impl From<Concept> for Value {
    fn from(c: Concept) -> Self {
        Value::Concept(c)
    }
}

impl From<&Concept> for Value {
    fn from(c: &Concept) -> Self {
        Value::Concept(c.clone())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Concept(c) => write!(f, "{}", c.id),
            Value::Str(s) => write!(f, "\"{s}\""),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// A ground fact: a predicate name applied to an argument tuple.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    /// Name of the predicate this statement instantiates.
    pub predicate: String,
    /// Argument tuple (never empty).
    pub args: Vec<Value>,
}

impl Statement {
    /// Create a statement, validating non-empty predicate and arguments.
    pub fn new(predicate: impl Into<String>, args: Vec<Value>) -> CoreResult<Self> {
        let predicate = predicate.into();
        if predicate.is_empty() {
            return Err(CoreError::EmptyPredicateName);
        }
        if args.is_empty() {
            return Err(CoreError::NoArguments { predicate });
        }
        Ok(Self { predicate, args })
    }

    /// Number of arguments.
    pub fn arity(&self) -> usize {
        self.args.len()
    }

    /// Iterate over the ids of every concept-typed argument.
    pub fn concept_ids(&self) -> impl Iterator<Item = &str> {
        self.args.iter().filter_map(|a| match a {
            Value::Concept(c) => Some(c.id.as_str()),
            _ => None,
        })
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}(", self.predicate)?;
        for (i, a) in self.args.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{a}")?;
        }
        write!(f, ")")
    }
}
