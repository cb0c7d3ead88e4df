// Copyright 2025 the Flow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Build a small patch, wire it up, and query rects and hits.
//!
//! Run:
//! - `cargo run -p flow_demos --example patch_basics`

use flow_patch::{
    HitTestResult, InputID, LayoutConstants, Node, OutputID, Patch, PatchEvent, Port, PortType,
    Wire,
};
use kurbo::Point;

fn main() {
    env_logger::init();
    let layout = LayoutConstants::default();

    let mut patch = Patch::new(
        vec![
            Node::new("Oscillator")
                .with_position(Point::new(0.0, 0.0))
                .with_outputs(["out"]),
            Node::new("LFO")
                .with_position(Point::new(0.0, 150.0))
                .with_outputs([Port::typed("out", PortType::Control)]),
            Node::new("Filter")
                .with_position(Point::new(400.0, 100.0))
                .with_inputs([Port::new("in"), Port::typed("cutoff", PortType::Control)])
                .with_outputs(["out"]),
        ],
        [],
    );

    let filter = &patch.nodes[2];
    println!("Filter rect: {:?}", filter.rect(&layout));
    println!("Filter input 0: {:?}", filter.input_rect(0, &layout));
    println!("Filter output 0: {:?}", filter.output_rect(0, &layout));

    let osc_to_filter = Wire::new(OutputID::new(0, 0), InputID::new(2, 0));
    let events = patch.connect(osc_to_filter.output, osc_to_filter.input);
    assert_eq!(events, vec![PatchEvent::WireAdded(osc_to_filter)]);

    // Plug the LFO into the audio input: the oscillator's wire is replaced.
    let events = patch.connect(OutputID::new(1, 0), InputID::new(2, 0));
    println!("Reconnect events: {events:?}");
    assert_eq!(events.len(), 2);
    assert_eq!(events[0], PatchEvent::WireRemoved(osc_to_filter));
    assert_eq!(patch.wires().len(), 1);
    assert!(!patch.is_output_connected(OutputID::new(0, 0)));

    let cutoff = patch.nodes[2].input_rect(1, &layout).center();
    let hit = patch.hit_test(cutoff, &layout);
    println!("Hit at {cutoff:?}: {hit:?}");
    assert_eq!(hit, HitTestResult::Input(InputID::new(2, 1)));
    assert_eq!(
        patch.hit_test(Point::new(300.0, 0.0), &layout),
        HitTestResult::Background
    );

    assert!(patch.validate().is_ok());

    // Delete the LFO; the filter becomes node 1 and the wire goes with the LFO.
    let smaller = patch.without_nodes([1]);
    assert_eq!(smaller.nodes[1].name, "Filter");
    assert!(smaller.wires().is_empty());
    println!("After deleting the LFO: {} node(s)", smaller.nodes.len());
}
