//! # hornet
//!
//! `hornet` is a small Prolog interpreter: it loads a database of Horn
//! clauses (facts and rules) from source text and answers queries by
//! logical resolution, enumerating proofs together with the variable
//! bindings that justify each one.
//!
//! Facts and rules look like standard Prolog:
//!
//! <pre>father(alfred, edward).
//! grandfather(X, Y) :- father(X, Z), father(Z, Y).</pre>
//!
//! Variables start with an uppercase letter or `_`; `_` alone is the
//! anonymous variable, a fresh one on every occurrence. `!` is the cut
//! control operator.
//!
//! ## Usage
//!
//! ```
//! use hornet::knowledge_base::KnowledgeBase;
//! use hornet::parser::{parse_program, parse_query};
//! use hornet::resolver::query;
//! use hornet::substitution::variable_assignments;
//!
//! let rules = parse_program(
//!     "father(alfred, edward). father(edward, aethelstan)."
//! ).unwrap();
//! let mut kb = KnowledgeBase::new();
//! kb.add_rules(rules);
//!
//! let q = parse_query("father(alfred, Who)").unwrap();
//! for proof in query(&kb, q.clone()) {
//!     for (var, value) in variable_assignments(&q, &proof) {
//!         println!("{} = {}", var.name, value);
//!     }
//! }
//! // Prints: Who = edward
//! ```
//!
//! This crate does not cover numeric arithmetic, I/O predicates, operator
//! precedence parsing, negation-as-failure beyond cut+fail patterns,
//! module systems, assert/retract, tabling, constraint logic programming,
//! or full ISO-Prolog conformance.
// Adapted from suiron-rust's lib.rs (Cleve Lendon, 2023) — a Prolog-like
// inference engine this crate's resolver core, parser and cut semantics
// are adapted from.

pub mod error;
pub mod knowledge_base;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod predicate;
pub mod resolver;
pub mod rule;
pub mod substitution;
pub mod term;
pub mod token;
pub mod unify;
pub mod var_id;
