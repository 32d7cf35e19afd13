//! Contexts: partial assignments of variables to values.
//!
//! A context is built up with [`Context::set`] (in-place, domain-validated)
//! and branched with [`Context::extend`], which copies, so speculative
//! assignments during search never touch the caller's context or any
//! sibling candidate.

use std::collections::BTreeMap;

use crate::core::Value;
use crate::error::{ParamError, ParamResult};
use crate::param::variable::Variable;

/// A mutable partial map from variable name to value.
#[derive(Debug, Clone, Default)]
pub struct Context {
    values: BTreeMap<String, Value>,
}

impl Context {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a variable, inserting or overwriting.
    ///
    /// Fails with a domain violation if the value is outside the variable's
    /// domain; the context is unchanged on failure.
    pub fn set(&mut self, var: &Variable, value: impl Into<Value>) -> ParamResult<()> {
        let value = value.into();
        if !var.domain().contains(&value) {
            return Err(ParamError::DomainViolation {
                variable: var.name().to_owned(),
                value: value.to_string(),
                domain: var.domain().describe(),
            });
        }
        self.values.insert(var.name().to_owned(), value);
        Ok(())
    }

    /// The value bound to a variable, if assigned.
    pub fn get(&self, var: &Variable) -> Option<&Value> {
        self.values.get(var.name())
    }

    /// Whether the variable has a binding.
    pub fn is_assigned(&self, var: &Variable) -> bool {
        self.values.contains_key(var.name())
    }

    /// Return a new context: a copy of this one with the given assignments
    /// applied on top. Each assignment is domain-validated like `set`.
    pub fn extend<'a, I>(&self, assignments: I) -> ParamResult<Context>
    where
        I: IntoIterator<Item = (&'a Variable, Value)>,
    {
        let mut out = self.clone();
        for (var, value) in assignments {
            out.set(var, value)?;
        }
        Ok(out)
    }

    /// Snapshot of the bindings as a name → value map.
    pub fn as_map(&self) -> BTreeMap<String, Value> {
        self.values.clone()
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no variable is bound.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl std::fmt::Display for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, (name, value)) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name}={value}")?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::param::domain::{EnumDomain, RangeDomain};
    use std::sync::Arc;

    fn season_var() -> Variable {
        Variable::new("season", Arc::new(EnumDomain::new(["spring", "autumn"]))).unwrap()
    }

    #[test]
    fn set_validates_against_domain() {
        let v = season_var();
        let mut ctx = Context::new();
        assert!(matches!(
            ctx.set(&v, "winter").unwrap_err(),
            ParamError::DomainViolation { .. }
        ));
        assert!(!ctx.is_assigned(&v));

        ctx.set(&v, "spring").unwrap();
        assert_eq!(ctx.get(&v), Some(&Value::from("spring")));
    }

    #[test]
    fn set_overwrites_existing_binding() {
        let v = season_var();
        let mut ctx = Context::new();
        ctx.set(&v, "spring").unwrap();
        ctx.set(&v, "autumn").unwrap();
        assert_eq!(ctx.get(&v), Some(&Value::from("autumn")));
        assert_eq!(ctx.len(), 1);
    }

    #[test]
    fn range_boundaries_follow_inclusiveness() {
        let closed = Variable::new("t", Arc::new(RangeDomain::new(0.0, 10.0, true))).unwrap();
        let open = Variable::new("t", Arc::new(RangeDomain::new(0.0, 10.0, false))).unwrap();
        let mut ctx = Context::new();

        assert!(ctx.set(&closed, 15i64).is_err());
        ctx.set(&closed, 10i64).unwrap();
        assert!(ctx.set(&open, 10i64).is_err());
    }

    #[test]
    fn extend_copies_rather_than_mutating() {
        let v = season_var();
        let w = Variable::new("other", Arc::new(EnumDomain::new(["x"]))).unwrap();

        let mut base = Context::new();
        base.set(&v, "spring").unwrap();

        let branched = base.extend([(&w, Value::from("x"))]).unwrap();
        assert!(branched.is_assigned(&w));
        assert!(branched.is_assigned(&v));
        // The receiver is untouched.
        assert!(!base.is_assigned(&w));
        assert_eq!(base.len(), 1);
    }

    #[test]
    fn extend_validates_each_assignment() {
        let v = season_var();
        let base = Context::new();
        assert!(base.extend([(&v, Value::from("winter"))]).is_err());
    }

    #[test]
    fn as_map_is_a_snapshot() {
        let v = season_var();
        let mut ctx = Context::new();
        ctx.set(&v, "spring").unwrap();
        let map = ctx.as_map();
        ctx.set(&v, "autumn").unwrap();
        assert_eq!(map.get("season"), Some(&Value::from("spring")));
    }
}
