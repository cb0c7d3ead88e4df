// Copyright 2025 the Flow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The patch document and its structural mutations.

use alloc::collections::BTreeSet;
use alloc::vec;
use alloc::vec::Vec;
use kurbo::{Rect, Vec2};

use crate::error::PatchError;
use crate::event::PatchEvent;
use crate::geometry::rects_intersect;
use crate::layout::LayoutConstants;
use crate::node::Node;
use crate::types::{InputID, NodeIndex, OutputID, Wire};

/// A node graph: positioned nodes plus the wires between their ports.
///
/// Write a function that generates a `Patch` from your own data model, and mirror the
/// [`PatchEvent`]s returned by mutations back into it. The patch is not meant to be the
/// data model itself; indices are only stable until the next structural edit.
///
/// ## Invariant
///
/// At most one wire terminates at any [`InputID`]. Outputs may fan out freely.
/// [`Patch::new`] and [`Patch::connect`] both maintain this; the wire set is only
/// readable from outside the crate.
///
/// With the `serde` feature, deserialization goes through [`Patch::new`], so a document
/// listing two wires into one input keeps only the later one.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "PatchDocument"))]
pub struct Patch {
    /// Nodes in draw order: later nodes are drawn on top of earlier ones.
    pub nodes: Vec<Node>,
    pub(crate) wires: BTreeSet<Wire>,
}

/// Serialized shape of a [`Patch`], before the single-writer rule is applied.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct PatchDocument {
    nodes: Vec<Node>,
    #[serde(default)]
    wires: Vec<Wire>,
}

#[cfg(feature = "serde")]
impl From<PatchDocument> for Patch {
    fn from(doc: PatchDocument) -> Self {
        Self::new(doc.nodes, doc.wires)
    }
}

impl Patch {
    /// Build a patch from nodes and wires.
    ///
    /// Wires are added in iteration order with [`Patch::connect`] semantics, so when two
    /// wires share an input the later one wins.
    pub fn new(nodes: Vec<Node>, wires: impl IntoIterator<Item = Wire>) -> Self {
        let mut patch = Self {
            nodes,
            wires: BTreeSet::new(),
        };
        for wire in wires {
            let _ = patch.connect(wire.output, wire.input);
        }
        patch
    }

    /// All wires, ordered by output then input.
    pub fn wires(&self) -> &BTreeSet<Wire> {
        &self.wires
    }

    /// Checked node lookup.
    pub fn node(&self, index: NodeIndex) -> Option<&Node> {
        self.nodes.get(index)
    }

    /// Connect `output` to `input`.
    ///
    /// Any wire already terminating at `input` is removed first. The returned events list
    /// the removal (if any) before the addition. Connecting a wire that already exists
    /// yields no events.
    pub fn connect(&mut self, output: OutputID, input: InputID) -> Vec<PatchEvent> {
        let wire = Wire::new(output, input);
        match self.attached_wire(input) {
            Some(existing) if existing == wire => Vec::new(),
            Some(existing) => {
                self.wires.remove(&existing);
                self.wires.insert(wire);
                vec![PatchEvent::WireRemoved(existing), PatchEvent::WireAdded(wire)]
            }
            None => {
                self.wires.insert(wire);
                vec![PatchEvent::WireAdded(wire)]
            }
        }
    }

    /// Remove `wire`. Returns `None` if it was not present.
    pub fn disconnect(&mut self, wire: Wire) -> Option<PatchEvent> {
        self.wires
            .remove(&wire)
            .then_some(PatchEvent::WireRemoved(wire))
    }

    /// Move node `index` by `offset`.
    ///
    /// Locked nodes do not move and produce no event. Otherwise the event carries the new
    /// absolute position.
    ///
    /// Panics if `index` is out of range.
    pub fn move_node(&mut self, index: NodeIndex, offset: Vec2) -> Option<PatchEvent> {
        let node = &mut self.nodes[index];
        if node.locked {
            return None;
        }
        node.position += offset;
        Some(PatchEvent::NodeMoved {
            index,
            position: node.position,
        })
    }

    /// The wire terminating at `input`, if any.
    pub fn attached_wire(&self, input: InputID) -> Option<Wire> {
        self.wires.iter().find(|w| w.input == input).copied()
    }

    /// Whether a wire terminates at `input`.
    pub fn is_input_connected(&self, input: InputID) -> bool {
        self.wires.iter().any(|w| w.input == input)
    }

    /// Whether at least one wire starts at `output`.
    pub fn is_output_connected(&self, output: OutputID) -> bool {
        // Wires are ordered by output first, so the first candidate decides.
        self.wires
            .range(Wire::new(output, InputID::new(0, 0))..)
            .next()
            .is_some_and(|w| w.output == output)
    }

    /// Every input that has a wire.
    pub fn connected_inputs(&self) -> BTreeSet<InputID> {
        self.wires.iter().map(|w| w.input).collect()
    }

    /// Every output that has at least one wire.
    pub fn connected_outputs(&self) -> BTreeSet<OutputID> {
        self.wires.iter().map(|w| w.output).collect()
    }

    /// Nodes whose rect intersects `rect`, in index order.
    pub fn selected_in<'a>(
        &'a self,
        rect: Rect,
        layout: &'a LayoutConstants,
    ) -> impl Iterator<Item = NodeIndex> + 'a {
        self.nodes
            .iter()
            .enumerate()
            .filter(move |(_, node)| rects_intersect(rect, node.rect(layout)))
            .map(|(index, _)| index)
    }

    /// A copy of this patch with the given nodes deleted.
    ///
    /// Wires touching a deleted node are dropped; every remaining wire endpoint is
    /// renumbered to the compacted node indices. Indices that are out of range are ignored.
    #[must_use]
    pub fn without_nodes(&self, removed: impl IntoIterator<Item = NodeIndex>) -> Self {
        let removed: BTreeSet<NodeIndex> = removed.into_iter().collect();
        let mut remap: Vec<Option<NodeIndex>> = Vec::with_capacity(self.nodes.len());
        let mut next = 0;
        for index in 0..self.nodes.len() {
            if removed.contains(&index) {
                remap.push(None);
            } else {
                remap.push(Some(next));
                next += 1;
            }
        }

        let nodes = self
            .nodes
            .iter()
            .enumerate()
            .filter(|(index, _)| remap[*index].is_some())
            .map(|(_, node)| node.clone())
            .collect();
        let wires = self
            .wires
            .iter()
            .filter_map(|w| {
                let from = (*remap.get(w.output.node_index)?)?;
                let to = (*remap.get(w.input.node_index)?)?;
                Some(Wire::new(
                    OutputID::new(from, w.output.port_index),
                    InputID::new(to, w.input.port_index),
                ))
            })
            .collect();
        Self { nodes, wires }
    }

    /// Check that every wire addresses existing ports and that no input has two wires.
    ///
    /// Reports the first problem found, scanning wires in order.
    pub fn validate(&self) -> Result<(), PatchError> {
        let mut seen = BTreeSet::new();
        for &wire in &self.wires {
            let source_ok = self
                .node(wire.output.node_index)
                .is_some_and(|n| wire.output.port_index < n.outputs.len());
            if !source_ok {
                return Err(PatchError::WireOutputOutOfRange { wire });
            }
            let dest_ok = self
                .node(wire.input.node_index)
                .is_some_and(|n| wire.input.port_index < n.inputs.len());
            if !dest_ok {
                return Err(PatchError::WireInputOutOfRange { wire });
            }
            if !seen.insert(wire.input) {
                return Err(PatchError::InputHasMultipleWires { input: wire.input });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;

    fn two_node_patch() -> Patch {
        Patch::new(
            vec![
                Node::new("osc").with_outputs(["out"]),
                Node::new("amp").with_inputs(["in"]).with_outputs(["out"]),
            ],
            [],
        )
    }

    fn assert_single_writer(patch: &Patch) {
        let mut inputs = BTreeSet::new();
        for w in patch.wires() {
            assert!(inputs.insert(w.input), "input {:?} has two wires", w.input);
        }
    }

    #[test]
    fn connect_adds_wire_and_reports_it() {
        let mut patch = two_node_patch();
        let events = patch.connect(OutputID::new(0, 0), InputID::new(1, 0));
        let wire = Wire::new(OutputID::new(0, 0), InputID::new(1, 0));
        assert_eq!(events, vec![PatchEvent::WireAdded(wire)]);
        assert!(patch.wires().contains(&wire));
        assert!(patch.is_input_connected(InputID::new(1, 0)));
        assert!(patch.is_output_connected(OutputID::new(0, 0)));
        assert!(!patch.is_output_connected(OutputID::new(1, 0)));
    }

    #[test]
    fn connect_replaces_wire_on_occupied_input() {
        let mut patch = Patch::new(
            vec![
                Node::new("a").with_outputs(["out"]),
                Node::new("b").with_outputs(["out"]),
                Node::new("sink").with_inputs(["in"]),
            ],
            [],
        );
        let input = InputID::new(2, 0);
        let first = Wire::new(OutputID::new(0, 0), input);
        let second = Wire::new(OutputID::new(1, 0), input);
        let _ = patch.connect(first.output, input);
        let events = patch.connect(second.output, input);

        assert_eq!(
            events,
            vec![PatchEvent::WireRemoved(first), PatchEvent::WireAdded(second)],
            "removal is reported before addition"
        );
        let into_sink: Vec<_> = patch.wires().iter().filter(|w| w.input == input).collect();
        assert_eq!(into_sink, vec![&second]);
        assert_single_writer(&patch);
    }

    #[test]
    fn reconnecting_the_same_wire_is_silent() {
        let mut patch = two_node_patch();
        let _ = patch.connect(OutputID::new(0, 0), InputID::new(1, 0));
        let events = patch.connect(OutputID::new(0, 0), InputID::new(1, 0));
        assert!(events.is_empty());
        assert_eq!(patch.wires().len(), 1);
    }

    #[test]
    fn outputs_fan_out() {
        let mut patch = Patch::new(
            vec![
                Node::new("osc").with_outputs(["out"]),
                Node::new("l").with_inputs(["in"]),
                Node::new("r").with_inputs(["in"]),
            ],
            [],
        );
        let _ = patch.connect(OutputID::new(0, 0), InputID::new(1, 0));
        let _ = patch.connect(OutputID::new(0, 0), InputID::new(2, 0));
        assert_eq!(patch.wires().len(), 2);
        assert_single_writer(&patch);
    }

    #[test]
    fn new_enforces_single_writer() {
        let input = InputID::new(1, 0);
        let patch = Patch::new(
            vec![
                Node::new("a").with_outputs(["x", "y"]),
                Node::new("b").with_inputs(["in"]),
            ],
            [
                Wire::new(OutputID::new(0, 0), input),
                Wire::new(OutputID::new(0, 1), input),
            ],
        );
        assert_eq!(patch.attached_wire(input).map(|w| w.output), Some(OutputID::new(0, 1)));
        assert_eq!(patch.validate(), Ok(()));
    }

    #[test]
    fn disconnect_removes_only_existing_wires() {
        let mut patch = two_node_patch();
        let wire = Wire::new(OutputID::new(0, 0), InputID::new(1, 0));
        assert_eq!(patch.disconnect(wire), None);
        let _ = patch.connect(wire.output, wire.input);
        assert_eq!(patch.disconnect(wire), Some(PatchEvent::WireRemoved(wire)));
        assert!(patch.wires().is_empty());
    }

    #[test]
    fn move_node_translates_and_reports_position() {
        let mut patch = two_node_patch();
        patch.nodes[1].position = Point::new(10.0, 10.0);
        let event = patch.move_node(1, Vec2::new(5.0, -2.0));
        assert_eq!(
            event,
            Some(PatchEvent::NodeMoved {
                index: 1,
                position: Point::new(15.0, 8.0)
            })
        );
        assert_eq!(patch.nodes[1].position, Point::new(15.0, 8.0));
    }

    #[test]
    fn locked_nodes_do_not_move() {
        let mut patch = two_node_patch();
        patch.nodes[0].locked = true;
        let before = patch.nodes[0].position;
        assert_eq!(patch.move_node(0, Vec2::new(100.0, 100.0)), None);
        assert_eq!(patch.nodes[0].position, before);
    }

    #[test]
    fn selected_in_uses_node_rects() {
        let layout = LayoutConstants::default();
        let mut patch = two_node_patch();
        patch.nodes[1].position = Point::new(500.0, 0.0);
        let hits: Vec<_> = patch
            .selected_in(Rect::new(150.0, 10.0, 250.0, 20.0), &layout)
            .collect();
        assert_eq!(hits, vec![0]);
        let hits: Vec<_> = patch
            .selected_in(Rect::new(-10.0, -10.0, 1000.0, 1000.0), &layout)
            .collect();
        assert_eq!(hits, vec![0, 1]);
    }

    #[test]
    fn without_nodes_renumbers_wires() {
        let patch = Patch::new(
            vec![
                Node::new("a").with_outputs(["out"]),
                Node::new("gone").with_inputs(["in"]).with_outputs(["out"]),
                Node::new("b").with_outputs(["out"]),
                Node::new("sink").with_inputs(["l", "r"]),
            ],
            [
                Wire::new(OutputID::new(0, 0), InputID::new(1, 0)),
                Wire::new(OutputID::new(1, 0), InputID::new(3, 0)),
                Wire::new(OutputID::new(2, 0), InputID::new(3, 1)),
            ],
        );
        let trimmed = patch.without_nodes([1]);
        assert_eq!(trimmed.nodes.len(), 3);
        assert_eq!(trimmed.nodes[1].name, "b");
        let wires: Vec<_> = trimmed.wires().iter().copied().collect();
        assert_eq!(
            wires,
            vec![Wire::new(OutputID::new(1, 0), InputID::new(2, 1))]
        );
        assert_eq!(trimmed.validate(), Ok(()));
    }

    #[test]
    fn validate_reports_dangling_endpoints() {
        let mut patch = two_node_patch();
        let bad_input = Wire::new(OutputID::new(0, 0), InputID::new(1, 3));
        let _ = patch.connect(bad_input.output, bad_input.input);
        assert_eq!(
            patch.validate(),
            Err(PatchError::WireInputOutOfRange { wire: bad_input })
        );

        let mut patch = two_node_patch();
        let bad_output = Wire::new(OutputID::new(7, 0), InputID::new(1, 0));
        let _ = patch.connect(bad_output.output, bad_output.input);
        assert_eq!(
            patch.validate(),
            Err(PatchError::WireOutputOutOfRange { wire: bad_output })
        );
    }

    #[test]
    fn validate_reports_shared_inputs() {
        let mut patch = two_node_patch();
        let input = InputID::new(1, 0);
        patch.wires.insert(Wire::new(OutputID::new(0, 0), input));
        patch.wires.insert(Wire::new(OutputID::new(1, 0), input));
        assert_eq!(
            patch.validate(),
            Err(PatchError::InputHasMultipleWires { input })
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializing_keeps_one_wire_per_input() {
        let patch = two_node_patch();
        let first = Wire::new(OutputID::new(0, 0), InputID::new(1, 0));
        let second = Wire::new(OutputID::new(1, 0), InputID::new(1, 0));
        let mut doc = serde_json::to_value(&patch).expect("serialize patch");
        doc["wires"] = serde_json::to_value([first, second]).expect("serialize wires");

        let loaded: Patch = serde_json::from_value(doc).expect("deserialize patch");
        assert_eq!(loaded.wires().iter().copied().collect::<Vec<_>>(), vec![second]);
        assert_eq!(loaded.validate(), Ok(()));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip_preserves_wires() {
        let mut patch = two_node_patch();
        let _ = patch.connect(OutputID::new(0, 0), InputID::new(1, 0));
        let json = serde_json::to_string(&patch).expect("serialize patch");
        let loaded: Patch = serde_json::from_str(&json).expect("deserialize patch");
        assert_eq!(loaded, patch);
    }
}
