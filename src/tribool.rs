//! Three-valued truth type with strong Kleene semantics.
//!
//! Every result in the reasoning layer is a [`TriBool`]: `True`, `False`, or
//! `Unknown`. There is deliberately no `Into<bool>`: collapsing `Unknown`
//! into either native boolean silently discards the fact that evidence was
//! incomplete. Call sites that really want a `bool` must go through
//! [`TriBool::known`], which panics on `Unknown`.

use serde::{Deserialize, Serialize};

/// A three-valued truth value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriBool {
    /// Definitively true.
    True,
    /// Definitively false.
    False,
    /// Indeterminate: some input was unassigned or itself unknown.
    Unknown,
}

impl TriBool {
    /// Returns true if the value is `True`.
    pub const fn is_true(self) -> bool {
        matches!(self, TriBool::True)
    }

    /// Returns true if the value is `False`.
    pub const fn is_false(self) -> bool {
        matches!(self, TriBool::False)
    }

    /// Returns true if the value is `Unknown`.
    pub const fn is_unknown(self) -> bool {
        matches!(self, TriBool::Unknown)
    }

    /// Collapse to a native boolean.
    ///
    /// # Panics
    ///
    /// Panics on `Unknown`. This is a programming error, not a data error:
    /// the caller failed to handle the three-valued case. Match on the value
    /// instead of coercing it.
    pub fn known(self) -> bool {
        match self {
            TriBool::True => true,
            TriBool::False => false,
            TriBool::Unknown => {
                panic!("TriBool::Unknown cannot be coerced to bool; handle the Unknown case explicitly")
            }
        }
    }

    /// Kleene negation: `Unknown` stays `Unknown`.
    pub const fn negate(self) -> TriBool {
        match self {
            TriBool::True => TriBool::False,
            TriBool::False => TriBool::True,
            TriBool::Unknown => TriBool::Unknown,
        }
    }

    /// Kleene conjunction: `False` dominates, then `Unknown`.
    pub const fn and(self, other: TriBool) -> TriBool {
        match (self, other) {
            (TriBool::False, _) | (_, TriBool::False) => TriBool::False,
            (TriBool::Unknown, _) | (_, TriBool::Unknown) => TriBool::Unknown,
            _ => TriBool::True,
        }
    }

    /// Kleene disjunction: `True` dominates, then `Unknown`.
    pub const fn or(self, other: TriBool) -> TriBool {
        match (self, other) {
            (TriBool::True, _) | (_, TriBool::True) => TriBool::True,
            (TriBool::Unknown, _) | (_, TriBool::Unknown) => TriBool::Unknown,
            _ => TriBool::False,
        }
    }

    /// Kleene implication: `¬a ∨ b`.
    ///
    /// A false antecedent or a true consequent settles the implication;
    /// otherwise an `Unknown` on either side leaves it `Unknown`.
    pub const fn implies(self, other: TriBool) -> TriBool {
        self.negate().or(other)
    }
}

impl From<bool> for TriBool {
    fn from(value: bool) -> Self {
        if value { TriBool::True } else { TriBool::False }
    }
}

impl std::fmt::Display for TriBool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TriBool::True => write!(f, "true"),
            TriBool::False => write!(f, "false"),
            TriBool::Unknown => write!(f, "unknown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use TriBool::{False, True, Unknown};

    #[test]
    fn false_dominates_and() {
        assert_eq!(False.and(Unknown), False);
        assert_eq!(Unknown.and(False), False);
        assert_eq!(False.and(True), False);
    }

    #[test]
    fn true_dominates_or() {
        assert_eq!(True.or(Unknown), True);
        assert_eq!(Unknown.or(True), True);
        assert_eq!(True.or(False), True);
    }

    #[test]
    fn unknown_propagates() {
        assert_eq!(True.and(Unknown), Unknown);
        assert_eq!(False.or(Unknown), Unknown);
        assert_eq!(Unknown.negate(), Unknown);
        assert_eq!(Unknown.and(Unknown), Unknown);
        assert_eq!(Unknown.or(Unknown), Unknown);
    }

    #[test]
    fn kleene_implication_table() {
        assert_eq!(False.implies(Unknown), True);
        assert_eq!(Unknown.implies(True), True);
        assert_eq!(Unknown.implies(False), Unknown);
        assert_eq!(Unknown.implies(Unknown), Unknown);
        assert_eq!(True.implies(True), True);
        assert_eq!(True.implies(False), False);
        assert_eq!(True.implies(Unknown), Unknown);
    }

    #[test]
    fn known_collapses_definite_values() {
        assert!(True.known());
        assert!(!False.known());
    }

    #[test]
    #[should_panic(expected = "cannot be coerced to bool")]
    fn known_panics_on_unknown() {
        let _ = Unknown.known();
    }

    #[test]
    fn from_bool_round_trip() {
        assert_eq!(TriBool::from(true), True);
        assert_eq!(TriBool::from(false), False);
    }

    #[test]
    fn display_forms() {
        assert_eq!(True.to_string(), "true");
        assert_eq!(Unknown.to_string(), "unknown");
    }
}
