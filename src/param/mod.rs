//! Parameterization: domains, variables, and partial assignments.

pub mod context;
pub mod domain;
pub mod variable;

pub use context::Context;
pub use domain::{Domain, DomainRef, EnumDomain, PredicateDomain, RangeDomain};
pub use variable::Variable;
