//! # heka
//!
//! A small symbolic-reasoning engine: a semantic-network fact store over
//! typed entities and relations, a three-valued (strong Kleene) evaluator
//! for formulas referencing that store, and a forcing protocol that checks
//! guard conditions and determines whether a goal formula holds under a
//! possibly partial variable assignment.
//!
//! ## Architecture
//!
//! - **Core** (`core`): concepts, predicates, statements, and the indexed
//!   [`SemanticNetwork`](core::SemanticNetwork) fact store
//! - **Parameters** (`param`): domains, variables, and partial-assignment
//!   [`Context`](param::Context)s
//! - **Logic** (`logic`): the closed formula algebra and its pure
//!   three-valued [`evaluate`](logic::evaluate)
//! - **Forcing** (`forcing`): guard checking, the `forces` relation, and
//!   strategy-driven search for witnesses
//! - **Snapshots** (`snapshot`): JSON capture/restore of networks and
//!   contexts
//!
//! The engine is single-threaded and purely computational: evaluation and
//! checking only read their inputs, and speculative search branches through
//! context copies. Embedders serialize mutations per network instance.
//!
//! ## Library usage
//!
//! ```
//! use std::sync::Arc;
//!
//! use heka::core::{Concept, Predicate, SemanticNetwork, Value};
//! use heka::forcing::{Conditions, ForcingEngine};
//! use heka::logic::{Formula, Term};
//! use heka::param::{Context, EnumDomain, Variable};
//! use heka::tribool::TriBool;
//!
//! # fn main() -> heka::error::HekaResult<()> {
//! let mut net = SemanticNetwork::new();
//! net.add_concept(Concept::labeled("alice", "Alice"))?;
//! net.add_concept(Concept::labeled("bob", "Bob"))?;
//! net.add_predicate(Predicate::new("knows", 2)?.with_roles(["who", "whom"])?)?;
//! let alice: Value = net.concept("alice").unwrap().into();
//! let bob: Value = net.concept("bob").unwrap().into();
//! net.assert_fact("knows", vec![alice.clone(), bob.clone()])?;
//!
//! let people = Arc::new(EnumDomain::new([alice, bob]));
//! let x = Variable::new("x", people.clone())?;
//! let y = Variable::new("y", people)?;
//! let mut ctx = Context::new();
//! ctx.set(&x, Value::from(net.concept("alice").unwrap()))?;
//! ctx.set(&y, Value::from(net.concept("bob").unwrap()))?;
//!
//! let phi = Formula::fact("knows", [Term::from(&x), Term::from(&y)]);
//! let engine = ForcingEngine::new(&net);
//! assert_eq!(engine.forces(&ctx, &phi, &Conditions::new()), TriBool::True);
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod error;
pub mod forcing;
pub mod logic;
pub mod param;
pub mod snapshot;
pub mod tribool;
