// Copyright 2025 the Flow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drive an editor session with pointer gestures: connect, reroute, disconnect,
//! box-select and group move.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p flow_demos --example gesture_connect`

use flow_editor::{DragInfo, NodeEditor, PatchObserver};
use flow_patch::{InputID, Node, NodeIndex, OutputID, Patch, Wire};
use kurbo::{Point, Vec2};

/// Stands in for the host's own document model.
#[derive(Default)]
struct HostModel {
    wires: Vec<Wire>,
    moves: Vec<(NodeIndex, Point)>,
}

impl PatchObserver for HostModel {
    fn node_moved(&mut self, index: NodeIndex, position: Point) {
        self.moves.push((index, position));
    }
    fn wire_added(&mut self, wire: Wire) {
        self.wires.push(wire);
    }
    fn wire_removed(&mut self, wire: Wire) {
        self.wires.retain(|w| *w != wire);
    }
}

fn drag(editor: &mut NodeEditor, host: &mut HostModel, from: Point, to: Point) {
    editor.begin_drag(from);
    // A few intermediate moves, as a pointer would deliver them.
    for step in 1..=4 {
        let t = f64::from(step) / 4.0;
        let live = *editor.update_drag(from.lerp(to, t));
        if step == 2 {
            println!("  live: {live:?}");
        }
    }
    let events = editor.end_drag_with(to, host);
    println!("  committed: {events:?}");
}

fn main() {
    env_logger::init();

    let patch = Patch::new(
        vec![
            Node::new("Osc").with_outputs(["out"]),
            Node::new("Amp")
                .with_position(Point::new(400.0, 0.0))
                .with_inputs(["in"])
                .with_outputs(["out"]),
            Node::new("Reverb")
                .with_position(Point::new(400.0, 200.0))
                .with_inputs(["in"]),
        ],
        [],
    );
    let mut editor = NodeEditor::new(patch);
    let mut host = HostModel::default();
    let layout = *editor.layout();

    let osc_out = editor.patch().nodes[0].output_rect(0, &layout).center();
    let amp_in = editor.patch().nodes[1].input_rect(0, &layout).center();
    let reverb_in = editor.patch().nodes[2].input_rect(0, &layout).center();

    println!("Connect Osc -> Amp");
    drag(&mut editor, &mut host, osc_out, amp_in);
    assert_eq!(host.wires, vec![Wire::new(OutputID::new(0, 0), InputID::new(1, 0))]);

    println!("Reroute the wire from Amp to Reverb");
    editor.begin_drag(amp_in);
    let live = *editor.update_drag(reverb_in);
    assert!(matches!(live, DragInfo::Wire { hidden_wire: Some(_), .. }));
    let _ = editor.end_drag_with(reverb_in, &mut host);
    assert_eq!(host.wires, vec![Wire::new(OutputID::new(0, 0), InputID::new(2, 0))]);

    println!("Pull the wire off Reverb into empty space");
    drag(&mut editor, &mut host, reverb_in, Point::new(300.0, 400.0));
    assert!(host.wires.is_empty());
    assert!(editor.patch().wires().is_empty());

    println!("Box-select Amp and Reverb");
    drag(
        &mut editor,
        &mut host,
        Point::new(350.0, -20.0),
        Point::new(450.0, 260.0),
    );
    assert_eq!(editor.selection().iter().copied().collect::<Vec<_>>(), vec![1, 2]);

    println!("Move both by dragging Amp");
    let amp_title = Point::new(500.0, 10.0);
    drag(&mut editor, &mut host, amp_title, amp_title + Vec2::new(50.0, 30.0));
    assert_eq!(editor.patch().nodes[1].position, Point::new(450.0, 30.0));
    assert_eq!(editor.patch().nodes[2].position, Point::new(450.0, 230.0));
    assert_eq!(host.moves.len(), 2);

    println!("Click the background to clear the selection");
    drag(&mut editor, &mut host, Point::new(300.0, 400.0), Point::new(301.0, 400.0));
    assert!(editor.selection().is_empty());
}
