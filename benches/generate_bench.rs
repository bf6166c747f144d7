use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use querygen::{Generator, GeneratorConfig, MatchOperator, Query};

fn build_tree(width: usize, depth: usize) -> Query {
    let mut node = Query::bool_query();
    for i in 0..width {
        node = node.should(
            &Query::match_query("content", format!("rust programming {i}"))
                .operator(MatchOperator::And)
                .build()
                .unwrap(),
        );
        node = node.must_not(&Query::term("status", format!("draft-{i}")).build().unwrap());
    }
    let mut query = node.build().unwrap();

    for level in 0..depth {
        query = Query::function_score()
            .query(&query)
            .function(&Query::random_score(level as i64).build().unwrap())
            .build()
            .unwrap();
    }
    query
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    let generator = Generator::new(GeneratorConfig::default());

    for width in [1usize, 10, 100] {
        let query = build_tree(width, 4);
        group.bench_with_input(BenchmarkId::new("bool_width", width), &query, |b, query| {
            b.iter(|| black_box(generator.generate(query).unwrap()))
        });
    }

    for depth in [1usize, 8, 32] {
        let query = build_tree(4, depth);
        group.bench_with_input(BenchmarkId::new("nesting_depth", depth), &query, |b, query| {
            b.iter(|| black_box(generator.generate(query).unwrap()))
        });
    }

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let query = build_tree(10, 4);
    c.bench_function("to_json_string", |b| {
        b.iter(|| black_box(query.to_json_string().unwrap()))
    });
}

criterion_group!(benches, bench_generate, bench_render);
criterion_main!(benches);
