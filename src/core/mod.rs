//! Core entities and the fact store.
//!
//! - [`Concept`]: entity nodes addressed by unique id
//! - [`Predicate`]: relation schemas with validated arity and role labels
//! - [`Statement`] / [`Value`]: ground facts over concepts and literals
//! - [`SemanticNetwork`]: the indexed, consistency-preserving store

pub mod concept;
pub mod network;
pub mod predicate;
pub mod statement;

pub use concept::Concept;
pub use network::{FactId, SemanticNetwork};
pub use predicate::Predicate;
pub use statement::{Statement, Value};
