//! Benchmarks for delimiter sizing and whole-formula layout.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use mathbox_layout::node::FracSize;
use mathbox_layout::{RenderingContext, SemanticNode, build_tree, custom_sized_delim};
use mathbox_metrics::{FontData, Mode};

fn ord(value: &str) -> SemanticNode {
    SemanticNode::MathOrd {
        value: value.to_string(),
        mode: Mode::Math,
    }
}

/// `\left( ... \right)` around `depth` nested display fractions.
fn nested_fraction(depth: usize) -> SemanticNode {
    let mut node = ord("x");
    for _ in 0..depth {
        node = SemanticNode::Frac {
            numer: Box::new(node),
            denom: Box::new(ord("y")),
            size: FracSize::Dfrac,
        };
    }
    SemanticNode::LeftRight {
        left: "(".to_string(),
        right: "\\}".to_string(),
        body: vec![node],
        mode: Mode::Math,
    }
}

fn bench_custom_sized(c: &mut Criterion) {
    let mut group = c.benchmark_group("custom_sized_delim");
    let data = FontData::shared();
    let ctx = RenderingContext::default();

    for height in [0.5, 1.5, 3.0, 12.0] {
        for delim in ["(", "\\{", "|"] {
            group.bench_with_input(
                BenchmarkId::new(delim, format!("{height}em")),
                &height,
                |b, &height| {
                    b.iter(|| custom_sized_delim(data, delim, height, true, &ctx, Mode::Math));
                },
            );
        }
    }

    group.finish();
}

fn bench_left_right_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("left_right_layout");
    let data = FontData::shared();
    let ctx = RenderingContext::default();

    for depth in [1, 4, 8] {
        let nodes = [nested_fraction(depth)];
        group.bench_with_input(
            BenchmarkId::new("build_tree", format!("{depth}_fractions")),
            &nodes,
            |b, nodes| {
                b.iter(|| build_tree(nodes, &ctx, data));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_custom_sized, bench_left_right_layout);
criterion_main!(benches);
