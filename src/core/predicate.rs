//! Predicate: a named relation of fixed arity.
//!
//! Every relation declares how many arguments it takes, optionally with a
//! role label per argument position. Arity is validated at construction and
//! enforced at assertion time by the network.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// A named relation schema with a fixed, positive arity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Predicate {
    /// Unique relation name.
    pub name: String,
    /// Number of argument positions (always > 0).
    pub arity: usize,
    /// Optional per-position role labels; when present, one per argument.
    pub roles: Vec<String>,
}

impl Predicate {
    /// Create a predicate, validating that arity is positive.
    pub fn new(name: impl Into<String>, arity: usize) -> CoreResult<Self> {
        let name = name.into();
        if arity == 0 {
            return Err(CoreError::InvalidArity { name });
        }
        Ok(Self {
            name,
            arity,
            roles: Vec::new(),
        })
    }

    /// Attach role labels, validating that there is exactly one per position.
    pub fn with_roles<I, S>(mut self, roles: I) -> CoreResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let roles: Vec<String> = roles.into_iter().map(Into::into).collect();
        if roles.len() != self.arity {
            return Err(CoreError::RoleCountMismatch {
                name: self.name,
                arity: self.arity,
                roles: roles.len(),
            });
        }
        self.roles = roles;
        Ok(self)
    }

    /// The role label for an argument position, if declared.
    pub fn role(&self, position: usize) -> Option<&str> {
        self.roles.get(position).map(String::as_str)
    }
}

impl std::fmt::Display for Predicate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.name, self.arity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_arity_is_rejected() {
        let err = Predicate::new("exists", 0).unwrap_err();
        assert!(matches!(err, CoreError::InvalidArity { .. }));
    }

    #[test]
    fn roles_must_match_arity() {
        let err = Predicate::new("knows", 2)
            .unwrap()
            .with_roles(["who"])
            .unwrap_err();
        assert!(matches!(err, CoreError::RoleCountMismatch { roles: 1, .. }));
    }

    #[test]
    fn roles_are_positional() {
        let p = Predicate::new("knows", 2)
            .unwrap()
            .with_roles(["who", "whom"])
            .unwrap();
        assert_eq!(p.role(0), Some("who"));
        assert_eq!(p.role(1), Some("whom"));
        assert_eq!(p.role(2), None);
    }

    #[test]
    fn display_shows_name_and_arity() {
        let p = Predicate::new("knows", 2).unwrap();
        assert_eq!(p.to_string(), "knows/2");
    }
}
