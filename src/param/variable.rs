//! Variables: named placeholders with a domain.

use crate::error::{ParamError, ParamResult};
use crate::param::domain::DomainRef;

/// A named placeholder whose bindings are constrained by a domain.
///
/// Identity for context lookups is by name. The domain handle is shared, so
/// variables clone cheaply into formulas and candidate assignments.
#[derive(Clone)]
pub struct Variable {
    name: String,
    domain: DomainRef,
    type_tag: Option<String>,
}

impl Variable {
    /// Create a variable, validating that the name is non-empty.
    pub fn new(name: impl Into<String>, domain: DomainRef) -> ParamResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(ParamError::InvalidVariableName);
        }
        Ok(Self {
            name,
            domain,
            type_tag: None,
        })
    }

    /// Attach a free-form classification tag.
    pub fn with_type_tag(mut self, tag: impl Into<String>) -> Self {
        self.type_tag = Some(tag.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn domain(&self) -> &DomainRef {
        &self.domain
    }

    pub fn type_tag(&self) -> Option<&str> {
        self.type_tag.as_deref()
    }
}

impl std::fmt::Debug for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Variable")
            .field("name", &self.name)
            .field("domain", &self.domain.describe())
            .field("type_tag", &self.type_tag)
            .finish()
    }
}

impl std::fmt::Display for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "?{}", self.name)
    }
}
