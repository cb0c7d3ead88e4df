// Copyright 2025 the Flow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use flow_patch::{HitTargets, LayoutConstants, Node, Patch};
use kurbo::Point;

/// An `n` x `n` grid of nodes with four inputs and two outputs each.
fn grid_patch(n: usize, layout: &LayoutConstants) -> Patch {
    let mut nodes = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            let position = Point::new(
                x as f64 * layout.column_pitch(),
                y as f64 * (layout.node_title_height + 6.0 * layout.port_pitch()),
            );
            nodes.push(
                Node::new("node")
                    .with_position(position)
                    .with_inputs(["a", "b", "c", "d"])
                    .with_outputs(["out", "aux"]),
            );
        }
    }
    Patch::new(nodes, [])
}

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn random_points(count: usize, max_w: f64, max_h: f64) -> Vec<Point> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|_| Point::new(rng.next_f64() * max_w, rng.next_f64() * max_h))
        .collect()
}

fn bench_hit_test(c: &mut Criterion) {
    let layout = LayoutConstants::default();
    let mut group = c.benchmark_group("hit_test");
    for &n in &[8usize, 16, 32] {
        let patch = grid_patch(n, &layout);
        let extent = patch
            .nodes
            .iter()
            .map(|node| node.rect(&layout))
            .fold(kurbo::Rect::ZERO, |acc, r| acc.union(r));
        let points = random_points(1024, extent.width(), extent.height());
        group.throughput(Throughput::Elements(points.len() as u64));
        group.bench_function(format!("all_targets_n{}", n), |b| {
            b.iter(|| {
                for &p in &points {
                    black_box(patch.hit_test(p, &layout));
                }
            });
        });
        group.bench_function(format!("inputs_only_n{}", n), |b| {
            b.iter(|| {
                for &p in &points {
                    black_box(patch.hit_test_filtered(p, &layout, HitTargets::INPUTS));
                }
            });
        });
        group.bench_function(format!("find_input_n{}", n), |b| {
            b.iter(|| {
                for &p in &points {
                    black_box(patch.find_input(p, &layout, None));
                }
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hit_test);
criterion_main!(benches);
