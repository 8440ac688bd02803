//! Depth-first SLD proof search over a goal stack, with cut-aware pruning
//! of alternatives.
//!
//! This is the resolver core: everything else in the crate exists to feed
//! it a [`KnowledgeBase`] and a query [`Predicate`], and to read back the
//! proofs it yields.
// The general shape (recursive descent over a goal stack, a knowledge base
// consulted in source order) is grounded on suiron-rust's solution_node.rs
// `next_solution()` driver. The cut mechanism is NOT grounded on that
// file's `set_no_backtracking()`, which propagates a flag through the
// entire ancestor chain via an unsafe raw-pointer walk — broader-scoped
// than the per-invocation barrier this crate needs. The cut controller
// below is grounded directly on brolog/solver.py's `_query()` generator:
// an `active_cuts` set mutated in place and restored after each branch.

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::knowledge_base::KnowledgeBase;
use crate::predicate::{Goal, Predicate};
use crate::substitution::{relabel, substitute_goals, Substitution};
use crate::unify::unify_predicates;
use crate::var_id::Id;

/// Runs the depth-first SLD search for `goal` against `kb` and returns
/// every proof it finds, in the deterministic order depth-first
/// left-to-right search with source-order clause selection produces.
///
/// The search runs to completion before this function returns (see
/// SPEC_FULL.md §5 for why: the host language has no native generators,
/// so the "lazy sequence" of the original design is realised here as an
/// eagerly-collected buffer handed back as an iterator). Logical failure
/// to prove `goal` is not an error: it simply yields zero proofs.
pub fn query(kb: &KnowledgeBase, goal: Predicate) -> impl Iterator<Item = Vec<Substitution>> {
    debug!(query = %goal, "query submitted");
    let mut proofs = Vec::new();
    let mut active_cuts = HashSet::new();
    let stack = vec![Goal::Call(goal)];
    search(kb, &stack, &mut active_cuts, &[], &mut proofs);
    debug!(count = proofs.len(), "query finished");
    proofs.into_iter()
}

fn search(
    kb: &KnowledgeBase,
    stack: &[Goal],
    active_cuts: &mut HashSet<Id>,
    assignments: &[Substitution],
    proofs: &mut Vec<Vec<Substitution>>,
) {
    let Some((goal, rest)) = stack.split_first() else {
        // Empty stack: every goal proved. Emit the accumulated proof.
        debug!(proof_number = proofs.len() + 1, "proof emitted");
        proofs.push(assignments.to_vec());
        return;
    };

    trace!(%goal, "goal popped");

    if let Goal::Cut(cut) = goal {
        active_cuts.insert(cut.id);
        search(kb, rest, active_cuts, assignments, proofs);
        return;
    }

    let Goal::Call(pred) = goal else { unreachable!() };
    let clauses = kb.rules_for(&pred.key()).to_vec();

    let mut skip_alternatives = false;
    for rule in &clauses {
        // Barrier: a cut further down the current branch already fired,
        // so no more alternatives for this goal are tried.
        if cut_active(rest, active_cuts) {
            break;
        }
        // A cut fired inside a previous clause's body for this same
        // goal: the remaining clauses are not alternatives any more.
        if skip_alternatives {
            break;
        }

        let relabelled = relabel(rule);
        trace!(%pred, rule = %rule, "rule attempted");
        let Some(sigma) = unify_predicates(pred, &relabelled.head) else {
            trace!(%pred, rule = %rule, "unification failed");
            continue;
        };
        trace!(%pred, rule = %rule, "unification succeeded");

        let stack_tail = substitute_goals(rest, &sigma);

        let mut next_assignments = assignments.to_vec();
        next_assignments.push(sigma.clone());

        if relabelled.body.is_empty() {
            search(kb, &stack_tail, active_cuts, &next_assignments, proofs);
        } else {
            let body = substitute_goals(&relabelled.body, &sigma);
            let cuts_in_body = cut_ids(&body);

            let mut next_stack = body;
            next_stack.extend(stack_tail);

            search(kb, &next_stack, active_cuts, &next_assignments, proofs);

            if cuts_in_body.iter().any(|id| active_cuts.contains(id)) {
                skip_alternatives = true;
            }
            for id in &cuts_in_body {
                active_cuts.remove(id);
            }
        }
    }
}

/// True iff a cut appearing literally in `stack` is currently an active
/// barrier — i.e. some goal still pending on the stack is itself a cut
/// that has already fired.
fn cut_active(stack: &[Goal], active_cuts: &HashSet<Id>) -> bool {
    stack.iter().any(|g| matches!(g, Goal::Cut(c) if active_cuts.contains(&c.id)))
}

fn cut_ids(goals: &[Goal]) -> Vec<Id> {
    goals
        .iter()
        .filter_map(|g| match g {
            Goal::Cut(c) => Some(c.id),
            Goal::Call(_) => None,
        })
        .collect()
}
