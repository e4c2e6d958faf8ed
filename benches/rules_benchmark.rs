//! Benchmark for rule compilation and evaluation passes

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use derivation_rules_core::lexer::tokenize;
use derivation_rules_core::rule::{compile_rule, parse};
use derivation_rules_core::{BoundRules, EvaluationContext, Literal};

/// A model-sized batch of rules over 20 parameters and 20 attributes
fn create_test_rules() -> Vec<String> {
    (0..100)
        .map(|i| {
            if i % 2 == 0 {
                format!(
                    "if p{} > {} and p{} <= {} then a{} = {}",
                    i % 20,
                    i,
                    (i + 1) % 20,
                    i * 2,
                    i % 20,
                    i
                )
            } else {
                format!("если p{} равно choice{} то a{} = \"value {}\"", i % 20, i % 3, i % 20, i)
            }
        })
        .collect()
}

fn create_context() -> EvaluationContext {
    let mut ctx = EvaluationContext::new();
    for i in 0..20 {
        if i % 2 == 0 {
            ctx.set_parameter(&format!("p{}", i), Literal::Number(f64::from(i * 5)));
        } else {
            ctx.set_parameter(&format!("p{}", i), Literal::Text(format!("choice{}", i % 3)));
        }
        ctx.declare_attribute(&format!("a{}", i));
    }
    ctx
}

fn benchmark_compile(c: &mut Criterion) {
    let rules = create_test_rules();

    c.bench_function("tokenize_rule", |b| {
        b.iter(|| tokenize(black_box(&rules[0])).unwrap())
    });

    c.bench_function("parse_rule", |b| b.iter(|| parse(black_box(&rules[1])).unwrap()));

    c.bench_function("compile_100_rules", |b| {
        b.iter(|| {
            for rule in &rules {
                black_box(compile_rule(rule).unwrap());
            }
        })
    });
}

fn benchmark_run(c: &mut Criterion) {
    let storables: Vec<_> = create_test_rules()
        .iter()
        .map(|r| compile_rule(r).unwrap())
        .collect();
    let bound = BoundRules::bind(&storables).unwrap();
    let ctx = create_context();

    c.bench_function("bind_100_rules", |b| {
        b.iter(|| BoundRules::bind(black_box(&storables)).unwrap())
    });

    c.bench_function("run_100_rules", |b| {
        b.iter(|| {
            let mut ctx = ctx.clone();
            black_box(bound.run(&mut ctx))
        })
    });
}

criterion_group!(benches, benchmark_compile, benchmark_run);
criterion_main!(benches);
