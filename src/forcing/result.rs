//! Result types for the forcing protocol.

use crate::param::Context;
use crate::tribool::TriBool;

/// Outcome of evaluating a guard against a context.
///
/// `ok` is true iff no condition evaluated to false; unknown conditions are
/// reported but are not violations.
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// Whether the guard passes (no condition is definitively false).
    pub ok: bool,
    /// Indices of conditions that evaluated to false.
    pub violated: Vec<usize>,
    /// Indices of conditions that evaluated to unknown.
    pub unknown: Vec<usize>,
}

/// Outcome of [`ForcingEngine::force`](crate::forcing::ForcingEngine::force).
#[derive(Debug, Clone)]
pub struct ForceResult {
    /// Final verdict: forced, refuted, or undetermined after search.
    pub status: TriBool,
    /// The context under which the goal is forced (the caller's own context
    /// when already forced, a search witness otherwise). `None` unless
    /// `status` is true.
    pub context: Option<Context>,
    /// Human-readable account of how the verdict was reached.
    pub explanation: String,
}
