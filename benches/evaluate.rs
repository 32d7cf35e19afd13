//! Criterion benchmarks for formula evaluation.

use std::sync::Arc;

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use heka::core::{Concept, Predicate, SemanticNetwork, Value};
use heka::logic::{Formula, Term, evaluate};
use heka::param::{Context, EnumDomain, Variable};

/// A chain graph with `n` concepts and `n - 1` `linked` facts.
fn chain_network(n: usize) -> SemanticNetwork {
    let mut net = SemanticNetwork::new();
    net.add_predicate(Predicate::new("linked", 2).unwrap())
        .unwrap();
    for i in 0..n {
        net.add_concept(Concept::new(format!("n{i}"))).unwrap();
    }
    for i in 0..n - 1 {
        let a: Value = net.concept(&format!("n{i}")).unwrap().into();
        let b: Value = net.concept(&format!("n{}", i + 1)).unwrap().into();
        net.assert_fact("linked", vec![a, b]).unwrap();
    }
    net
}

fn bench_fact_atom(c: &mut Criterion) {
    let net = chain_network(1000);
    let ctx = Context::new();
    // Worst case for the linear bucket scan: the last asserted fact.
    let phi = Formula::fact("linked", [Concept::new("n998"), Concept::new("n999")]);

    c.bench_function("fact_atom_hit_1000", |b| {
        b.iter(|| evaluate(black_box(&phi), black_box(&net), black_box(&ctx)))
    });
}

fn bench_nested_formula(c: &mut Criterion) {
    let net = chain_network(100);
    let domain = Arc::new(EnumDomain::new(
        (0..100).map(|i| Value::from(net.concept(&format!("n{i}")).unwrap())),
    ));
    let x = Variable::new("x", domain).unwrap();
    let mut ctx = Context::new();
    ctx.set(&x, Value::from(net.concept("n50").unwrap())).unwrap();

    let phi = Formula::and((0..99).map(|i| {
        Formula::implies(
            Formula::fact(
                "linked",
                [
                    Term::from(Concept::new(format!("n{i}"))),
                    Term::from(Concept::new(format!("n{}", i + 1))),
                ],
            ),
            Formula::or([
                Formula::eq(&x, Concept::new(format!("n{i}"))),
                Formula::not(Formula::eq(&x, Concept::new(format!("n{i}")))),
            ]),
        )
    }));

    c.bench_function("nested_formula_100", |b| {
        b.iter(|| evaluate(black_box(&phi), black_box(&net), black_box(&ctx)))
    });
}

criterion_group!(benches, bench_fact_atom, bench_nested_formula);
criterion_main!(benches);
