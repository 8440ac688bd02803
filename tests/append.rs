//! `append/3`: the classic list-concatenation relation, run forwards
//! (both inputs bound) and backwards (output bound, inputs free).

use hornet::knowledge_base::KnowledgeBase;
use hornet::parser::{parse_program, parse_query};
use hornet::resolver::query;
use hornet::substitution::variable_assignments;
use hornet::term::Term;

const PROGRAM: &str = "\
append([], L, L).
append([H|T], L, [H|R]) :- append(T, L, R).
";

fn kb() -> KnowledgeBase {
    let mut kb = KnowledgeBase::new();
    kb.add_rules(parse_program(PROGRAM).unwrap());
    kb
}

#[test]
fn appends_two_proper_lists() {
    let kb = kb();
    let q = parse_query("append([a,b], [c,d], Out)").unwrap();
    let proof = query(&kb, q.clone()).next().expect("a proof exists");
    let assignments = variable_assignments(&q, &proof);
    let (_, out) = &assignments[0];
    assert_eq!(out.to_string(), "[a,b,c,d]");
}

#[test]
fn appending_empty_list_is_identity() {
    let kb = kb();
    let q = parse_query("append([], [x,y], Out)").unwrap();
    let proof = query(&kb, q.clone()).next().unwrap();
    let (_, out) = &variable_assignments(&q, &proof)[0];
    assert_eq!(out.to_string(), "[x,y]");
}

#[test]
fn runs_backwards_to_enumerate_splits() {
    let kb = kb();
    let q = parse_query("append(A, B, [1,2,3])").unwrap();
    let proofs: Vec<_> = query(&kb, q.clone()).collect();
    // [], [1,2,3] / [1], [2,3] / [1,2], [3] / [1,2,3], []
    assert_eq!(proofs.len(), 4);
    let first = variable_assignments(&q, &proofs[0]);
    assert_eq!(first[0].1, Term::List(hornet::term::List::Empty));
}
