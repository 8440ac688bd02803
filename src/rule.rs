//! A fact or rule: `head :- body.`
//!
//! A fact is a rule with an empty body.
// Adapted from suiron-rust's rule.rs (Cleve Lendon, 2023).

use std::fmt;

use crate::predicate::{Goal, Predicate};

/// `head :- goal1, goal2, .., goalN.` A fact is a `Rule` whose `body` is empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub head: Predicate,
    pub body: Vec<Goal>,
}

impl Rule {
    pub fn fact(head: Predicate) -> Rule {
        Rule { head, body: Vec::new() }
    }

    pub fn new(head: Predicate, body: Vec<Goal>) -> Rule {
        Rule { head, body }
    }

    /// The `name/arity` key this rule is filed under in the knowledge base.
    pub fn key(&self) -> String {
        self.head.key()
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.body.is_empty() {
            write!(f, "{}.", self.head)
        } else {
            let body: Vec<String> = self.body.iter().map(|g| g.to_string()).collect();
            write!(f, "{} :- {}.", self.head, body.join(", "))
        }
    }
}
