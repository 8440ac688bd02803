//! Resolver throughput on a recursive `path/2` transitive-closure program
//! over a 50-node chain, matching the shape of SPEC_FULL.md's transitivity
//! scenario.
// Adapted from suiron-rust's benches/suiron_benchmark.rs, which benchmarked
// a single opaque `benchmark()` call; this instead exercises the public
// resolver API directly on a sized program.

use criterion::{criterion_group, criterion_main, Criterion};

use hornet::knowledge_base::KnowledgeBase;
use hornet::parser::{parse_program, parse_query};
use hornet::resolver::query;

const NODES: usize = 50;

fn build_chain_kb() -> KnowledgeBase {
    let mut source = String::new();
    for i in 0..NODES {
        source.push_str(&format!("edge(n{}, n{}).\n", i, i + 1));
    }
    source.push_str("path(X, Y) :- edge(X, Y).\n");
    source.push_str("path(X, Y) :- edge(X, Z), path(Z, Y).\n");

    let rules = parse_program(&source).expect("benchmark program parses");
    let mut kb = KnowledgeBase::new();
    kb.add_rules(rules);
    kb
}

pub fn resolve_benchmark(c: &mut Criterion) {
    let kb = build_chain_kb();
    let q = parse_query("path(n0, n49)").unwrap();

    c.bench_function("path over a 50-node chain", |b| {
        b.iter(|| query(&kb, q.clone()).count())
    });
}

criterion_group!(benches, resolve_benchmark);
criterion_main!(benches);
