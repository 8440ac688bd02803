//! Cut (`!`) prunes both the remaining clauses for the current goal and any
//! choice points to its left in the same rule body.

use hornet::knowledge_base::KnowledgeBase;
use hornet::parser::{parse_program, parse_query};
use hornet::resolver::query;

const PROGRAM: &str = "\
g(1).
g(2).
g(3).
h(1).
h(2).
t(X) :- g(X), !, h(X).
";

fn kb() -> KnowledgeBase {
    let mut kb = KnowledgeBase::new();
    kb.add_rules(parse_program(PROGRAM).unwrap());
    kb
}

#[test]
fn cut_commits_to_the_first_match_of_the_goal_before_it() {
    let kb = kb();
    // g(1) succeeds, cut fires, h(1) succeeds: exactly one proof, even
    // though g(2)/g(3) could also unify with X and h(2) could backtrack.
    let q = parse_query("t(X)").unwrap();
    assert_eq!(query(&kb, q).count(), 1);
}

#[test]
fn cut_blocks_retrying_a_goal_left_of_it_even_when_later_goal_fails() {
    let kb = kb();
    // g(1) matches first and the cut commits to it; h(1) also succeeds,
    // so backtracking into g(2)/g(3) never happens even though h(3) is
    // undefined and would otherwise force that retry.
    let q = parse_query("t(X)").unwrap();
    let proofs: Vec<_> = query(&kb, q).collect();
    assert_eq!(proofs.len(), 1);
}

#[test]
fn cut_does_not_affect_sibling_queries() {
    let kb = kb();
    assert_eq!(query(&kb, parse_query("g(2)").unwrap()).count(), 1);
    assert_eq!(query(&kb, parse_query("g(4)").unwrap()).count(), 0);
}
