//! Applying variable bindings to terms, goals and rules, and fresh-variable
//! relabelling of a rule for a new invocation.
// Adapted from suiron-rust's substitution_set.rs (chain-walking a bound
// variable) and unifiable.rs's recreate_variables(), cross-checked against
// brolog/solver.py's substitute()/relabel().

use std::collections::HashMap;
use std::rc::Rc;

use crate::predicate::{Cut, Goal, Predicate};
use crate::rule::Rule;
use crate::term::{Function, List, Term, Variable};
use crate::var_id::Id;

/// One unification step's worth of bindings, `Variable id -> Term`.
///
/// A full proof is an ordered `Vec<Substitution>`: one entry per successful
/// unification along the branch that proved the query, in the order they
/// were made.
pub type Substitution = HashMap<Id, Rc<Term>>;

/// Applies a single substitution map to a term, walking variable chains
/// and resolving fully into any bound Function/List structure.
pub fn substitute_term(term: &Term, sigma: &Substitution) -> Term {
    match term {
        Term::Atom(_) => term.clone(),
        Term::Variable(v) => resolve_variable(v, sigma),
        Term::Function(func) => {
            let args = func.args.iter().map(|a| substitute_term(a, sigma)).collect();
            Term::Function(Function::new(func.name.clone(), args))
        }
        Term::List(List::Empty) => term.clone(),
        Term::List(List::Cons(head, tail)) => Term::List(List::cons(
            substitute_term(head, sigma),
            substitute_term(tail, sigma),
        )),
    }
}

fn resolve_variable(v: &Variable, sigma: &Substitution) -> Term {
    let mut current = v.clone();
    loop {
        match sigma.get(&current.id) {
            None => return Term::Variable(current),
            Some(bound) => match bound.as_ref() {
                Term::Variable(next) => current = next.clone(),
                other => return substitute_term(other, sigma),
            },
        }
    }
}

/// Applies a substitution to a goal predicate. Cut is returned unchanged:
/// substitution never touches cut identity.
pub fn substitute_predicate(pred: &Predicate, sigma: &Substitution) -> Predicate {
    let args = pred.args.iter().map(|a| substitute_term(a, sigma)).collect();
    Predicate::new(pred.name.clone(), args)
}

/// Applies a substitution across an entire goal stack.
pub fn substitute_goals(goals: &[Goal], sigma: &Substitution) -> Vec<Goal> {
    goals
        .iter()
        .map(|g| match g {
            Goal::Call(p) => Goal::Call(substitute_predicate(p, sigma)),
            Goal::Cut(c) => Goal::Cut(c.clone()),
        })
        .collect()
}

/// Folds a proof's substitutions left-to-right across a predicate,
/// producing it with every resolvable variable replaced by its final term.
pub fn instantiate(pred: &Predicate, proof: &[Substitution]) -> Predicate {
    let mut current = pred.clone();
    for sigma in proof {
        current = substitute_predicate(&current, sigma);
    }
    current
}

/// Computes `{v: instantiate(v, proof) for v in free_variables(q)}`,
/// preserving the first-seen order of `q`'s variables and excluding the
/// anonymous variable `_` from the result (it is never meaningful to a
/// caller — every occurrence is a distinct, unrelated binding).
pub fn variable_assignments(query: &Predicate, proof: &[Substitution]) -> Vec<(Variable, Term)> {
    let mut vars = Vec::new();
    for arg in &query.args {
        crate::term::free_variables(arg, &mut vars);
    }
    vars.into_iter()
        .filter(|v| v.name != "_")
        .map(|v| {
            let value = instantiate_term(&Term::Variable(v.clone()), proof);
            (v, value)
        })
        .collect()
}

fn instantiate_term(term: &Term, proof: &[Substitution]) -> Term {
    let mut current = term.clone();
    for sigma in proof {
        current = substitute_term(&current, sigma);
    }
    current
}

/// A display-name-to-fresh-variable map used while relabelling one rule
/// instantiation, so repeated occurrences of the same source variable
/// still map to a single fresh identity.
pub struct Relabeller {
    vars: HashMap<Id, Variable>,
    cuts: HashMap<Id, Cut>,
}

impl Relabeller {
    pub fn new() -> Relabeller {
        Relabeller { vars: HashMap::new(), cuts: HashMap::new() }
    }

    fn relabel_term(&mut self, term: &Term) -> Term {
        match term {
            Term::Atom(_) => term.clone(),
            Term::Variable(v) => Term::Variable(self.relabel_variable(v)),
            Term::Function(func) => {
                let args = func.args.iter().map(|a| self.relabel_term(a)).collect();
                Term::Function(Function::new(func.name.clone(), args))
            }
            Term::List(List::Empty) => term.clone(),
            Term::List(List::Cons(head, tail)) => {
                Term::List(List::cons(self.relabel_term(head), self.relabel_term(tail)))
            }
        }
    }

    fn relabel_variable(&mut self, v: &Variable) -> Variable {
        self.vars.entry(v.id).or_insert_with(|| Variable::fresh(v.name.clone())).clone()
    }

    fn relabel_predicate(&mut self, pred: &Predicate) -> Predicate {
        let args = pred.args.iter().map(|a| self.relabel_term(a)).collect();
        Predicate::new(pred.name.clone(), args)
    }

    fn relabel_goal(&mut self, goal: &Goal) -> Goal {
        match goal {
            Goal::Call(p) => Goal::Call(self.relabel_predicate(p)),
            Goal::Cut(c) => Goal::Cut(self.cuts.entry(c.id).or_insert_with(Cut::fresh).clone()),
        }
    }
}

/// Produces a copy of `rule` with every variable and every cut replaced by
/// a fresh identity. Repeated occurrences of the same source variable (or
/// the same source cut) within the rule still map to a single fresh copy
/// each, so the rule's internal sharing structure is preserved.
pub fn relabel(rule: &Rule) -> Rule {
    let mut r = Relabeller::new();
    let head = r.relabel_predicate(&rule.head);
    let body = rule.body.iter().map(|g| r.relabel_goal(g)).collect();
    Rule { head, body }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::Predicate;

    fn bind(v: &Variable, t: Term) -> Substitution {
        let mut s = Substitution::new();
        s.insert(v.id, Rc::new(t));
        s
    }

    #[test]
    fn substitute_resolves_bound_variable() {
        let x = Variable::fresh("X");
        let sigma = bind(&x, Term::Atom("harold".into()));
        let result = substitute_term(&Term::Variable(x), &sigma);
        assert_eq!(result, Term::Atom("harold".into()));
    }

    #[test]
    fn substitute_walks_variable_chain() {
        let x = Variable::fresh("X");
        let y = Variable::fresh("Y");
        let mut sigma = Substitution::new();
        sigma.insert(x.id, Rc::new(Term::Variable(y.clone())));
        sigma.insert(y.id, Rc::new(Term::Atom("harold".into())));
        let result = substitute_term(&Term::Variable(x), &sigma);
        assert_eq!(result, Term::Atom("harold".into()));
    }

    #[test]
    fn substitute_leaves_unbound_variable_alone() {
        let x = Variable::fresh("X");
        let sigma = Substitution::new();
        let result = substitute_term(&Term::Variable(x.clone()), &sigma);
        assert_eq!(result, Term::Variable(x));
    }

    #[test]
    fn relabel_preserves_shape_and_changes_identity() {
        let x = Variable::fresh("X");
        let rule = Rule {
            head: Predicate::new("p", vec![Term::Variable(x.clone())]),
            body: vec![Goal::Call(Predicate::new("q", vec![Term::Variable(x.clone())]))],
        };
        let relabelled = relabel(&rule);
        assert_eq!(relabelled.head.name, "p");
        assert_eq!(relabelled.body.len(), 1);
        match (&relabelled.head.args[0], &relabelled.body[0]) {
            (Term::Variable(a), Goal::Call(p)) => match &p.args[0] {
                Term::Variable(b) => {
                    assert_eq!(a, b, "same source variable relabels to one shared fresh copy");
                    assert_ne!(a, &x);
                }
                _ => panic!("expected variable"),
            },
            _ => panic!("unexpected shape"),
        }
    }

    #[test]
    fn variable_assignments_excludes_anonymous_and_preserves_order() {
        let y = Variable::fresh("Y");
        let x = Variable::fresh("X");
        let underscore = Variable::fresh("_");
        let q = Predicate::new(
            "p",
            vec![Term::Variable(y.clone()), Term::Variable(x.clone()), Term::Variable(underscore)],
        );
        let proof = vec![bind(&x, Term::Atom("harold".into()))];
        let assignments = variable_assignments(&q, &proof);
        assert_eq!(assignments.len(), 2);
        assert_eq!(assignments[0].0, y);
        assert_eq!(assignments[1].0, x);
        assert_eq!(assignments[1].1, Term::Atom("harold".into()));
    }

    #[test]
    fn relabel_gives_fresh_cut_identity() {
        let rule = Rule {
            head: Predicate::new("p", vec![]),
            body: vec![Goal::Cut(Cut::fresh())],
        };
        let relabelled = relabel(&rule);
        match (&rule.body[0], &relabelled.body[0]) {
            (Goal::Cut(original), Goal::Cut(fresh)) => assert_ne!(original, fresh),
            _ => panic!("expected cut"),
        }
    }
}
