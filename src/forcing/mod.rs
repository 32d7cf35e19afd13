//! The forcing protocol: guards, search strategies, and the engine.

pub mod conditions;
pub mod engine;
pub mod result;
pub mod strategy;

pub use conditions::Conditions;
pub use engine::ForcingEngine;
pub use result::{CheckResult, ForceResult};
pub use strategy::{BruteEnumStrategy, CandidateAssignment, Strategy};
