//! Structural unification with the occurs-check.
// Adapted from suiron-rust's unifiable.rs `.unify()` method; adds the
// occurs-check the teacher's version omits, matching brolog/solver.py's
// `unify()`/`contains()`.

use std::rc::Rc;

use crate::predicate::Predicate;
use crate::substitution::{substitute_term, Substitution};
use crate::term::{contains, Term};

/// Unifies two predicates: succeeds iff names and arities match, then
/// unifies their argument lists exactly as [`unify`] would for two
/// [`crate::term::Function`]s of the same shape.
pub fn unify_predicates(a: &Predicate, b: &Predicate) -> Option<Substitution> {
    if a.name != b.name || a.arity() != b.arity() {
        return None;
    }
    unify_args(&a.args, &b.args)
}

/// Finds the most general unifier of `x` and `y`, or reports failure.
///
/// Returns `Some(sigma)` — `sigma` empty on trivial success — or `None`
/// if the two terms cannot be made syntactically equal.
pub fn unify(x: &Term, y: &Term) -> Option<Substitution> {
    match (x, y) {
        (Term::Atom(a), Term::Atom(b)) if a == b => Some(Substitution::new()),

        (Term::Function(f), Term::Function(g)) if f.name == g.name && f.arity() == g.arity() => {
            unify_args(&f.args, &g.args)
        }

        (Term::List(a), Term::List(b)) => unify_lists(a, b),

        (Term::Variable(a), Term::Variable(b)) => {
            if a == b {
                Some(Substitution::new())
            } else {
                let mut sigma = Substitution::new();
                sigma.insert(a.id, Rc::new(Term::Variable(b.clone())));
                Some(sigma)
            }
        }

        (Term::Variable(v), term) | (term, Term::Variable(v)) => {
            if contains(term, v) {
                None
            } else {
                let mut sigma = Substitution::new();
                sigma.insert(v.id, Rc::new(term.clone()));
                Some(sigma)
            }
        }

        _ => None,
    }
}

fn unify_lists(a: &crate::term::List, b: &crate::term::List) -> Option<Substitution> {
    use crate::term::List;
    match (a, b) {
        (List::Empty, List::Empty) => Some(Substitution::new()),
        (List::Cons(h1, t1), List::Cons(h2, t2)) => unify_args(
            std::slice::from_ref(h1.as_ref()),
            std::slice::from_ref(h2.as_ref()),
        )
        .and_then(|head_sigma| {
            let t1s = substitute_term(t1, &head_sigma);
            let t2s = substitute_term(t2, &head_sigma);
            let tail_sigma = unify(&t1s, &t2s)?;
            Some(merge(head_sigma, tail_sigma))
        }),
        _ => None,
    }
}

/// Unifies two argument lists pairwise, folding the running substitution
/// left to right: before each pairwise unification, both operands are
/// resolved against everything unified so far.
fn unify_args(xs: &[Term], ys: &[Term]) -> Option<Substitution> {
    if xs.len() != ys.len() {
        return None;
    }
    let mut current = Substitution::new();
    for (a, b) in xs.iter().zip(ys.iter()) {
        let a_resolved = substitute_term(a, &current);
        let b_resolved = substitute_term(b, &current);
        let step = unify(&a_resolved, &b_resolved)?;
        current = merge(current, step);
    }
    Some(current)
}

/// Right-biased union: `new`'s bindings win on key collision. The
/// occurs-check rules out real collisions for well-formed inputs; this
/// only matters in the rare degenerate case the spec allows for.
fn merge(mut base: Substitution, new: Substitution) -> Substitution {
    base.extend(new);
    base
}
