// Copyright 2025 the Flow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lay out an upstream tree, then snapshot a frame and track hover.
//!
//! Run:
//! - `cargo run -p flow_demos --example layout_and_scene`

use flow_editor::{HoverEvent, HoverState, HoverTarget, NodeEditor, Scene};
use flow_patch::{InputID, Node, OutputID, Patch};
use kurbo::{Point, Rect};

fn main() {
    env_logger::init();

    let mut patch = Patch::new(
        vec![
            Node::new("Output").with_inputs(["left", "right"]),
            Node::new("Mixer")
                .with_inputs(["a", "b"])
                .with_outputs(["out"]),
            Node::new("Osc A").with_outputs(["out"]),
            Node::new("Osc B").with_outputs(["out"]),
            Node::new("Noise").with_outputs(["out"]),
        ],
        [],
    );
    let _ = patch.connect(OutputID::new(1, 0), InputID::new(0, 0));
    let _ = patch.connect(OutputID::new(4, 0), InputID::new(0, 1));
    let _ = patch.connect(OutputID::new(2, 0), InputID::new(1, 0));
    let _ = patch.connect(OutputID::new(3, 0), InputID::new(1, 1));

    let mut editor = NodeEditor::new(patch);
    let height = editor.recursive_layout(0, Point::new(800.0, 0.0));
    for node in &editor.patch().nodes {
        println!("{:>8} at {:?}", node.name, node.position);
    }
    println!("Tree height: {height}");

    let nodes = &editor.patch().nodes;
    assert!(nodes[1].position.x < nodes[0].position.x);
    assert!(nodes[2].position.x < nodes[1].position.x);
    assert_eq!(nodes[2].position.x, nodes[3].position.x);
    assert!(nodes[2].position.y < nodes[3].position.y);
    // Noise stacks below the whole Mixer subtree.
    assert_eq!(nodes[4].position.x, nodes[1].position.x);
    assert!(nodes[4].position.y > nodes[3].position.y);

    let viewport = Rect::new(0.0, 0.0, 1200.0, 800.0);
    let scene = Scene::build(&editor, viewport);
    println!(
        "Scene: {} node(s), {} wire(s)",
        scene.nodes.len(),
        scene.wires.len()
    );
    assert_eq!(scene.wires.len(), 4);

    let mut hover = HoverState::new();
    let layout = *editor.layout();
    let over_port = editor.patch().nodes[0].input_rect(1, &layout).center();
    let events = hover.update(editor.patch().hit_test(over_port, &layout));
    println!("Hover: {events:?}");
    assert_eq!(
        events,
        vec![
            HoverEvent::Enter(HoverTarget::Node(0)),
            HoverEvent::Enter(HoverTarget::Input(InputID::new(0, 1))),
        ]
    );
    let events = hover.clear();
    assert_eq!(events.len(), 2);
}
