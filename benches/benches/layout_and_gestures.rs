// Copyright 2025 the Flow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use flow_editor::NodeEditor;
use flow_patch::{InputID, LayoutConstants, Node, OutputID, Patch};
use kurbo::{Point, Vec2};

/// A complete binary tree of `depth` levels feeding node 0.
fn binary_tree(depth: u32) -> Patch {
    let count = (1usize << depth) - 1;
    let nodes = (0..count)
        .map(|_| Node::new("mix").with_inputs(["l", "r"]).with_outputs(["out"]))
        .collect();
    let mut patch = Patch::new(nodes, []);
    for child in 1..count {
        let parent = (child - 1) / 2;
        let port = (child - 1) % 2;
        let _ = patch.connect(OutputID::new(child, 0), InputID::new(parent, port));
    }
    patch
}

fn bench_recursive_layout(c: &mut Criterion) {
    let layout = LayoutConstants::default();
    let mut group = c.benchmark_group("recursive_layout");
    for &depth in &[6u32, 8, 10] {
        let patch = binary_tree(depth);
        group.throughput(Throughput::Elements(patch.nodes.len() as u64));
        group.bench_function(format!("binary_tree_depth{}", depth), |b| {
            b.iter_batched(
                || patch.clone(),
                |mut patch| {
                    black_box(patch.recursive_layout(0, Point::new(10_000.0, 0.0), &layout));
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_node_drag(c: &mut Criterion) {
    let layout = LayoutConstants::default();
    let mut patch = binary_tree(8);
    patch.recursive_layout(0, Point::new(10_000.0, 0.0), &layout);
    let grab = patch.nodes[0].position + Vec2::new(layout.node_width / 2.0, 5.0);
    let mut group = c.benchmark_group("gesture");
    group.bench_function("node_drag_64_moves", |b| {
        b.iter_batched(
            || NodeEditor::new(patch.clone()),
            |mut editor| {
                editor.begin_drag(grab);
                for step in 1..=64 {
                    black_box(editor.update_drag(grab + Vec2::new(step as f64, 0.0)));
                }
                black_box(editor.end_drag(grab + Vec2::new(64.0, 0.0)));
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_recursive_layout, bench_node_drag);
criterion_main!(benches);
