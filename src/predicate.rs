//! Predicates and the cut control operator.
//!
//! A `Predicate` is structurally identical to a [`crate::term::Function`]
//! but belongs to a different part of the Symbol family: predicates occur
//! as goals and rule heads, functions occur inside argument positions.
//! Keeping them as distinct types (rather than reusing `Function`) is what
//! lets the resolver's pattern matches stay exhaustive and obviously
//! correct about which positions it is looking at.
// Adapted from suiron-rust's goal.rs/operator.rs, cross-checked against
// brolog/objects.py's Predicate/Cut split.

use std::fmt;

use crate::term::Term;
use crate::var_id::{next_id, Id};

/// A goal or rule head: `name(arg1, .., argN)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    pub name: String,
    pub args: Vec<Term>,
}

impl Predicate {
    pub fn new(name: impl Into<String>, args: Vec<Term>) -> Predicate {
        Predicate { name: name.into(), args }
    }

    pub fn arity(&self) -> usize {
        self.args.len()
    }

    /// The `name/arity` string used to index the knowledge base.
    pub fn key(&self) -> String {
        format!("{}/{}", self.name, self.arity())
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let args: Vec<String> = self.args.iter().map(|a| a.to_string()).collect();
        write!(f, "{}({})", self.name, args.join(", "))
    }
}

/// The cut (`!`) control predicate.
///
/// Each `Cut` carries its own identity, distinct from every other `Cut`
/// ever constructed — including other cuts that came from the *same*
/// source rule, once that rule has been relabelled for a fresh
/// invocation. The resolver's `active_cuts` barrier set is keyed on this
/// identity, never on the fact that two cuts look the same syntactically.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cut {
    pub id: Id,
}

impl Cut {
    pub fn fresh() -> Cut {
        Cut { id: next_id() }
    }
}

impl fmt::Display for Cut {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "!")
    }
}

/// A goal in a clause body: either an ordinary predicate call, or cut.
#[derive(Debug, Clone, PartialEq)]
pub enum Goal {
    Call(Predicate),
    Cut(Cut),
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Goal::Call(p) => write!(f, "{}", p),
            Goal::Cut(c) => write!(f, "{}", c),
        }
    }
}
