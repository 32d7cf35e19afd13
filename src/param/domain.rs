//! Domains: the legal value set of a variable.
//!
//! A domain is a capability, not a value: anything that can answer
//! `contains` and describe itself. Three built-ins cover the common cases;
//! [`PredicateDomain`] accepts an arbitrary boxed closure for the rest.

use std::sync::Arc;

use crate::core::Value;

/// The legal value set of a [`Variable`](crate::param::Variable).
pub trait Domain: Send + Sync {
    /// Whether the value is a legal binding.
    fn contains(&self, value: &Value) -> bool;

    /// Human-readable description of the legal value set.
    fn describe(&self) -> String;
}

/// Shared handle to a domain, cloned freely across variables.
pub type DomainRef = Arc<dyn Domain>;

/// A fixed tuple of allowed values.
pub struct EnumDomain {
    values: Vec<Value>,
}

impl EnumDomain {
    pub fn new<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// The allowed values, in declaration order.
    pub fn values(&self) -> &[Value] {
        &self.values
    }
}

impl Domain for EnumDomain {
    fn contains(&self, value: &Value) -> bool {
        self.values.iter().any(|v| v == value)
    }

    fn describe(&self) -> String {
        let items: Vec<String> = self.values.iter().map(|v| v.to_string()).collect();
        format!("Enum({})", items.join(", "))
    }
}

/// A numeric interval, inclusive or exclusive at both bounds.
///
/// The candidate is coerced through [`Value::as_f64`], so integers, floats,
/// booleans, and numeric strings all participate; anything without a numeric
/// view is outside the domain.
pub struct RangeDomain {
    min: f64,
    max: f64,
    inclusive: bool,
}

impl RangeDomain {
    pub fn new(min: f64, max: f64, inclusive: bool) -> Self {
        Self {
            min,
            max,
            inclusive,
        }
    }
}

impl Domain for RangeDomain {
    fn contains(&self, value: &Value) -> bool {
        match value.as_f64() {
            Some(v) if self.inclusive => self.min <= v && v <= self.max,
            Some(v) => self.min < v && v < self.max,
            None => false,
        }
    }

    fn describe(&self) -> String {
        if self.inclusive {
            format!("Range[{}, {}]", self.min, self.max)
        } else {
            format!("Range({}, {})", self.min, self.max)
        }
    }
}

/// An arbitrary membership predicate with a display name.
pub struct PredicateDomain {
    name: String,
    test: Box<dyn Fn(&Value) -> bool + Send + Sync>,
}

impl PredicateDomain {
    pub fn new<F>(name: impl Into<String>, test: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            test: Box::new(test),
        }
    }
}

impl Domain for PredicateDomain {
    fn contains(&self, value: &Value) -> bool {
        (self.test)(value)
    }

    fn describe(&self) -> String {
        self.name.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Concept;

    #[test]
    fn enum_domain_membership() {
        let d = EnumDomain::new([Value::from("spring"), Value::from("autumn")]);
        assert!(d.contains(&Value::from("spring")));
        assert!(!d.contains(&Value::from("winter")));
        assert_eq!(d.describe(), "Enum(\"spring\", \"autumn\")");
    }

    #[test]
    fn enum_domain_over_concepts() {
        let alice = Concept::new("alice");
        let d = EnumDomain::new([Value::from(&alice)]);
        // Concept membership is id-based, like all concept equality.
        assert!(d.contains(&Value::from(Concept::labeled("alice", "Alice"))));
        assert!(!d.contains(&Value::from(Concept::new("bob"))));
    }

    #[test]
    fn range_domain_inclusive_bounds() {
        let d = RangeDomain::new(0.0, 10.0, true);
        assert!(d.contains(&Value::Int(10)));
        assert!(d.contains(&Value::Int(0)));
        assert!(!d.contains(&Value::Int(15)));
        assert_eq!(d.describe(), "Range[0, 10]");
    }

    #[test]
    fn range_domain_exclusive_bounds() {
        let d = RangeDomain::new(0.0, 10.0, false);
        assert!(!d.contains(&Value::Int(10)));
        assert!(!d.contains(&Value::Int(0)));
        assert!(d.contains(&Value::Float(9.99)));
        assert_eq!(d.describe(), "Range(0, 10)");
    }

    #[test]
    fn range_domain_coerces_candidates() {
        let d = RangeDomain::new(0.0, 10.0, true);
        assert!(d.contains(&Value::Str("3.5".into())));
        assert!(d.contains(&Value::Bool(true)));
        assert!(!d.contains(&Value::Str("eleven".into())));
        assert!(!d.contains(&Value::from(Concept::new("sun"))));
    }

    #[test]
    fn predicate_domain_wraps_closures() {
        let d = PredicateDomain::new("even integers", |v| {
            matches!(v, Value::Int(i) if i % 2 == 0)
        });
        assert!(d.contains(&Value::Int(4)));
        assert!(!d.contains(&Value::Int(3)));
        assert!(!d.contains(&Value::Float(4.0)));
        assert_eq!(d.describe(), "even integers");
    }
}
