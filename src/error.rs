//! Rich diagnostic error types for the heka engine.
//!
//! Each subsystem defines its own error type with miette `#[diagnostic]` derives,
//! providing error codes and help text so callers know exactly what went wrong
//! and how to fix it. Every failure is reported once, at the point of violation,
//! with no partial mutation committed; there are no internal retries anywhere.

use miette::Diagnostic;
use thiserror::Error;

/// Top-level error type for the heka engine.
///
/// Each variant wraps a subsystem-specific error, preserving the full
/// diagnostic chain (error codes, help text) through to the caller.
#[derive(Debug, Error, Diagnostic)]
pub enum HekaError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Param(#[from] ParamError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Snapshot(#[from] SnapshotError),
}

// ---------------------------------------------------------------------------
// Core errors (concepts, predicates, statements, network)
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum CoreError {
    #[error("concept '{id}' already exists")]
    #[diagnostic(
        code(heka::core::duplicate_concept),
        help(
            "Concept ids are unique keys. To change an existing concept's label, \
             tags, or meta, use `replace_concept()`; to rename it, remove the old \
             concept and add a new one."
        )
    )]
    DuplicateConcept { id: String },

    #[error("predicate '{name}' already exists")]
    #[diagnostic(
        code(heka::core::duplicate_predicate),
        help(
            "Predicate names are unique keys. Use `replace_predicate()` to update \
             role labels, or remove the predicate first to redefine it."
        )
    )]
    DuplicatePredicate { name: String },

    #[error("unknown concept '{id}'")]
    #[diagnostic(
        code(heka::core::unknown_concept),
        help("No concept with this id is registered in the network. Add it with `add_concept()` first.")
    )]
    UnknownConcept { id: String },

    #[error("unknown predicate '{name}'")]
    #[diagnostic(
        code(heka::core::unknown_predicate),
        help("No predicate with this name is registered in the network. Add it with `add_predicate()` first.")
    )]
    UnknownPredicate { name: String },

    #[error("fact not found: {statement}")]
    #[diagnostic(
        code(heka::core::fact_not_found),
        help(
            "`remove_fact()` requires an exact match on predicate and every argument. \
             Check the network with `facts_for()` to see what is actually asserted."
        )
    )]
    FactNotFound { statement: String },

    #[error("arity mismatch: predicate '{predicate}' expects {expected} argument(s), got {actual}")]
    #[diagnostic(
        code(heka::core::arity_mismatch),
        help("The argument tuple must match the predicate's declared arity exactly.")
    )]
    ArityMismatch {
        predicate: String,
        expected: usize,
        actual: usize,
    },

    #[error("predicate '{name}' declared with arity 0")]
    #[diagnostic(
        code(heka::core::invalid_arity),
        help("Predicate arity must be a positive integer: a relation relates at least one argument.")
    )]
    InvalidArity { name: String },

    #[error("predicate '{name}' has {roles} role label(s) but arity {arity}")]
    #[diagnostic(
        code(heka::core::role_count),
        help("When role labels are provided, there must be exactly one per argument position.")
    )]
    RoleCountMismatch {
        name: String,
        arity: usize,
        roles: usize,
    },

    #[error("statement predicate name is empty")]
    #[diagnostic(
        code(heka::core::empty_predicate_name),
        help("A statement must name the predicate it instantiates.")
    )]
    EmptyPredicateName,

    #[error("statement for '{predicate}' has no arguments")]
    #[diagnostic(
        code(heka::core::no_arguments),
        help("A statement asserts a predicate over at least one argument.")
    )]
    NoArguments { predicate: String },

    #[error("replace_concept id mismatch: replacing '{expected}' with '{actual}'")]
    #[diagnostic(
        code(heka::core::concept_id_mismatch),
        help(
            "`replace_concept()` swaps the value behind an existing id. \
             Renaming is modeled as `remove_concept()` followed by `add_concept()`."
        )
    )]
    ConceptIdMismatch { expected: String, actual: String },

    #[error("replace_predicate name mismatch: replacing '{expected}' with '{actual}'")]
    #[diagnostic(
        code(heka::core::predicate_name_mismatch),
        help("`replace_predicate()` keeps the name fixed; remove and re-add to rename.")
    )]
    PredicateNameMismatch { expected: String, actual: String },

    #[error(
        "cannot change arity of '{name}' from {from} to {to}: {fact_count} fact(s) exist"
    )]
    #[diagnostic(
        code(heka::core::arity_change_with_facts),
        help(
            "Changing a predicate's arity under live data is rejected, not migrated. \
             Remove the predicate (cascading its facts) and re-add it, or keep the arity."
        )
    )]
    ArityChangeWithFacts {
        name: String,
        from: usize,
        to: usize,
        fact_count: usize,
    },
}

/// Convenience alias for core results.
pub type CoreResult<T> = std::result::Result<T, CoreError>;

// ---------------------------------------------------------------------------
// Parameter errors (domains, variables, contexts)
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum ParamError {
    #[error("variable name is empty")]
    #[diagnostic(
        code(heka::param::invalid_variable_name),
        help("Variables are identified by name in contexts and formulas; the name must be non-empty.")
    )]
    InvalidVariableName,

    #[error("value '{value}' not in domain of '{variable}': {domain}")]
    #[diagnostic(
        code(heka::param::domain_violation),
        help(
            "Every binding is validated against the variable's domain. \
             Check the domain's `describe()` output for the legal value set."
        )
    )]
    DomainViolation {
        variable: String,
        value: String,
        domain: String,
    },
}

/// Convenience alias for parameter results.
pub type ParamResult<T> = std::result::Result<T, ParamError>;

// ---------------------------------------------------------------------------
// Snapshot errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum SnapshotError {
    #[error("snapshot I/O error: {source}")]
    #[diagnostic(
        code(heka::snapshot::io),
        help(
            "A filesystem operation on the snapshot file failed. Check that the \
             path exists, has correct permissions, and that the disk is not full."
        )
    )]
    Io {
        #[source]
        source: std::io::Error,
    },

    #[error("snapshot JSON error: {message}")]
    #[diagnostic(
        code(heka::snapshot::json),
        help(
            "The snapshot could not be encoded or decoded as JSON. \
             If decoding, the file may be truncated or from an incompatible version."
        )
    )]
    Json { message: String },

    #[error("snapshot fact references unknown concept '{id}'")]
    #[diagnostic(
        code(heka::snapshot::unresolved_concept),
        help(
            "Fact arguments reference concepts by id; every referenced id must \
             appear in the snapshot's concept table."
        )
    )]
    UnresolvedConcept { id: String },

    #[error("snapshot context binds unknown variable '{name}'")]
    #[diagnostic(
        code(heka::snapshot::unknown_variable),
        help(
            "Restoring a context requires a variable (with its domain) for every \
             bound name. Pass the full variable set used when the context was captured."
        )
    )]
    UnknownVariable { name: String },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Param(#[from] ParamError),
}

/// Convenience alias for snapshot results.
pub type SnapshotResult<T> = std::result::Result<T, SnapshotError>;

/// Convenience alias for functions returning heka results.
pub type HekaResult<T> = std::result::Result<T, HekaError>;
