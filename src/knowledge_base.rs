//! An ordered, name/arity-indexed store of rules.
//!
//! Rules are filed under a `name/arity` key (see [`Rule::key`]), preserving
//! source order within each key's clause list — the resolver relies on
//! this order both for deterministic proof enumeration and for cut's
//! "remaining clauses of this predicate" semantics.
// Adapted from suiron-rust's knowledge_base.rs (Cleve Lendon, 2023).

use std::collections::HashMap;

use tracing::debug;

use crate::rule::Rule;

/// `name/arity -> clauses, in source order`.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    rules: HashMap<String, Vec<Rule>>,
}

impl KnowledgeBase {
    pub fn new() -> KnowledgeBase {
        KnowledgeBase { rules: HashMap::new() }
    }

    /// Adds one rule, appending it to its key's clause list. Never
    /// reorders or removes existing rules (no assert/retract).
    pub fn add_rule(&mut self, rule: Rule) {
        debug!(clause = %rule, "clause loaded");
        self.rules.entry(rule.key()).or_default().push(rule);
    }

    pub fn add_rules(&mut self, rules: impl IntoIterator<Item = Rule>) {
        for rule in rules {
            self.add_rule(rule);
        }
    }

    /// The clauses filed under `name/arity`, in source order — exactly
    /// the slice the resolver iterates in its rule-selection loop.
    pub fn rules_for(&self, key: &str) -> &[Rule] {
        self.rules.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.rules.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Formats the knowledge base for display (debugging aid): keys sorted,
/// clauses listed in source order under each.
pub fn format_kb(kb: &KnowledgeBase) -> String {
    let mut out = "_____ Contents of Knowledge Base _____\n".to_string();

    let mut keys: Vec<&String> = kb.rules.keys().collect();
    keys.sort();

    for key in keys {
        out += &format!("{}\n", key);
        for rule in kb.rules_for(key) {
            out += &format!("\t{}\n", rule);
        }
    }

    out += "______________________________________";
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::{Goal, Predicate};
    use crate::term::{Term, Variable};

    fn fact(name: &str, args: Vec<Term>) -> Rule {
        Rule::fact(Predicate::new(name, args))
    }

    #[test]
    fn add_rule_appends_in_source_order() {
        let mut kb = KnowledgeBase::new();
        kb.add_rule(fact("father", vec![Term::Atom("alfred".into()), Term::Atom("edward".into())]));
        kb.add_rule(fact("father", vec![Term::Atom("edward".into()), Term::Atom("aethelstan".into())]));

        let clauses = kb.rules_for("father/2");
        assert_eq!(clauses.len(), 2);
        assert_eq!(clauses[0].to_string(), "father(alfred, edward).");
        assert_eq!(clauses[1].to_string(), "father(edward, aethelstan).");
    }

    #[test]
    fn unknown_key_returns_empty_slice() {
        let kb = KnowledgeBase::new();
        assert!(kb.rules_for("nothing/3").is_empty());
    }

    #[test]
    fn format_kb_sorts_keys() {
        let mut kb = KnowledgeBase::new();
        kb.add_rule(fact("loves", vec![Term::Atom("leonard".into()), Term::Atom("penny".into())]));
        kb.add_rule(fact("father", vec![Term::Atom("alfred".into()), Term::Atom("edward".into())]));
        let s = format_kb(&kb);
        assert!(s.find("father/2").unwrap() < s.find("loves/2").unwrap());
    }

    #[test]
    fn rule_with_body_is_filed_under_its_head_key() {
        let x = Variable::fresh("X");
        let y = Variable::fresh("Y");
        let z = Variable::fresh("Z");
        let rule = Rule::new(
            Predicate::new("grandfather", vec![Term::Variable(x.clone()), Term::Variable(y.clone())]),
            vec![
                Goal::Call(Predicate::new("father", vec![Term::Variable(x), Term::Variable(z.clone())])),
                Goal::Call(Predicate::new("father", vec![Term::Variable(z), Term::Variable(y)])),
            ],
        );
        let mut kb = KnowledgeBase::new();
        kb.add_rule(rule);
        assert_eq!(kb.rules_for("grandfather/2").len(), 1);
    }
}
