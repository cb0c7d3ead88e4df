// Copyright 2025 the Flow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render snapshot of an editor session.
//!
//! [`Scene::build`] resolves everything a renderer needs for one frame: node rects with the
//! live drag offset applied, port rects with their connected flags, wire endpoints, the
//! wire being dragged, and the rubber band. Elements entirely outside the viewport are
//! skipped. Nodes come out in draw order (lowest index first), so later nodes paint over
//! earlier ones exactly as hit testing expects.

use alloc::string::String;
use alloc::vec::Vec;

use flow_patch::geometry::{bounding_rect, rects_intersect};
use flow_patch::{Color, InputID, NodeIndex, OutputID, PortType, Wire};
use kurbo::{Point, Rect, Vec2};

use crate::editor::NodeEditor;
use crate::gesture::output_center;
use crate::types::DragInfo;

/// One port as drawn.
#[derive(Clone, Debug, PartialEq)]
pub struct PortVisual {
    /// Port label.
    pub name: String,
    /// Port rect, drag offset applied.
    pub rect: Rect,
    /// Whether a wire is attached.
    pub connected: bool,
    /// Port type, for colouring.
    pub port_type: PortType,
}

/// One node as drawn.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeVisual {
    /// Index in the patch.
    pub index: NodeIndex,
    /// Title text.
    pub name: String,
    /// Body rect, drag offset applied.
    pub rect: Rect,
    /// Corner radius for the body.
    pub corner_radius: f64,
    /// Height of the title bar at the top of `rect`.
    pub title_height: f64,
    /// Title-bar fill.
    pub title_bar_color: Color,
    /// Selected, or inside the live rubber band.
    pub highlighted: bool,
    /// Locked nodes cannot be moved.
    pub locked: bool,
    /// Inputs in port order.
    pub inputs: Vec<PortVisual>,
    /// Outputs in port order.
    pub outputs: Vec<PortVisual>,
}

/// One committed wire as drawn.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WireVisual {
    /// The wire.
    pub wire: Wire,
    /// Centre of the output port.
    pub from: Point,
    /// Centre of the input port.
    pub to: Point,
}

/// The wire following the pointer during a wire drag.
#[derive(Clone, Debug, PartialEq)]
pub struct DraggedWire {
    /// Source output.
    pub output: OutputID,
    /// Centre of the source output.
    pub from: Point,
    /// Free end under the pointer.
    pub to: Point,
    /// Type of the source output.
    pub port_type: PortType,
}

/// Everything to draw for one frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    /// Visible nodes, bottom to top.
    pub nodes: Vec<NodeVisual>,
    /// Visible committed wires, minus any wire picked up by the current drag.
    pub wires: Vec<WireVisual>,
    /// The wire being dragged, if any.
    pub dragged_wire: Option<DraggedWire>,
    /// The live rubber band, if any.
    pub selection_rect: Option<Rect>,
}

impl Scene {
    /// Snapshot `editor` for drawing the part of the patch inside `viewport`.
    pub fn build(editor: &NodeEditor, viewport: Rect) -> Self {
        let patch = editor.patch();
        let layout = editor.layout();
        let connected_inputs = patch.connected_inputs();
        let connected_outputs = patch.connected_outputs();

        let mut nodes = Vec::new();
        for (index, node) in patch.nodes.iter().enumerate() {
            let offset = editor.node_offset(index);
            let rect = node.rect(layout) + offset;
            if !rects_intersect(rect, viewport) {
                continue;
            }
            let inputs = node
                .inputs
                .iter()
                .enumerate()
                .map(|(port, p)| PortVisual {
                    name: p.name.clone(),
                    rect: node.input_rect(port, layout) + offset,
                    connected: connected_inputs.contains(&InputID::new(index, port)),
                    port_type: p.port_type.clone(),
                })
                .collect();
            let outputs = node
                .outputs
                .iter()
                .enumerate()
                .map(|(port, p)| PortVisual {
                    name: p.name.clone(),
                    rect: node.output_rect(port, layout) + offset,
                    connected: connected_outputs.contains(&OutputID::new(index, port)),
                    port_type: p.port_type.clone(),
                })
                .collect();
            nodes.push(NodeVisual {
                index,
                name: node.name.clone(),
                rect,
                corner_radius: layout.node_corner_radius,
                title_height: layout.node_title_height,
                title_bar_color: node.title_bar_color,
                highlighted: editor.is_node_highlighted(index),
                locked: node.locked,
                inputs,
                outputs,
            });
        }

        let hidden = match editor.drag_info() {
            DragInfo::Wire { hidden_wire, .. } => *hidden_wire,
            _ => None,
        };
        let wires = patch
            .wires()
            .iter()
            .filter(|&&wire| Some(wire) != hidden)
            .filter_map(|&wire| {
                let from = port_center(editor, wire.output.node_index, |n| {
                    n.outputs
                        .get(wire.output.port_index)
                        .map(|_| n.output_rect(wire.output.port_index, layout))
                })?;
                let to = port_center(editor, wire.input.node_index, |n| {
                    n.inputs
                        .get(wire.input.port_index)
                        .map(|_| n.input_rect(wire.input.port_index, layout))
                })?;
                Some(WireVisual { wire, from, to })
            })
            .filter(|w| rects_intersect(bounding_rect(w.from, w.to), viewport))
            .collect();

        let dragged_wire = match *editor.drag_info() {
            DragInfo::Wire { output, offset, .. } => {
                output_center(patch, output, layout).map(|from| DraggedWire {
                    output,
                    from,
                    to: from + offset,
                    port_type: patch.nodes[output.node_index].outputs[output.port_index]
                        .port_type
                        .clone(),
                })
            }
            _ => None,
        };

        let selection_rect = match *editor.drag_info() {
            DragInfo::Selection { rect } => Some(rect),
            _ => None,
        };

        Self {
            nodes,
            wires,
            dragged_wire,
            selection_rect,
        }
    }

    /// The visual for node `index`, if it was visible.
    pub fn node(&self, index: NodeIndex) -> Option<&NodeVisual> {
        self.nodes.iter().find(|n| n.index == index)
    }
}

/// Centre of a port rect on node `index`, shifted by the node's live offset.
fn port_center(
    editor: &NodeEditor,
    index: NodeIndex,
    port_rect: impl FnOnce(&flow_patch::Node) -> Option<Rect>,
) -> Option<Point> {
    let node = editor.patch().node(index)?;
    let offset: Vec2 = editor.node_offset(index);
    port_rect(node).map(|rect| rect.center() + offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use flow_patch::{Node, Patch};

    const VIEW: Rect = Rect::new(-1000.0, -1000.0, 1000.0, 1000.0);

    fn editor() -> NodeEditor {
        NodeEditor::new(Patch::new(
            vec![
                Node::new("A").with_outputs(["out"]),
                Node::new("B")
                    .with_position(Point::new(400.0, 0.0))
                    .with_inputs(["in", "mod"]),
                Node::new("far").with_position(Point::new(5000.0, 5000.0)),
            ],
            [Wire::new(OutputID::new(0, 0), InputID::new(1, 0))],
        ))
    }

    #[test]
    fn culls_nodes_outside_viewport() {
        let scene = Scene::build(&editor(), VIEW);
        let shown: Vec<_> = scene.nodes.iter().map(|n| n.index).collect();
        assert_eq!(shown, vec![0, 1]);
        assert!(scene.node(2).is_none());
    }

    #[test]
    fn ports_report_connection() {
        let scene = Scene::build(&editor(), VIEW);
        let b = scene.node(1).expect("B visible");
        assert!(b.inputs[0].connected);
        assert!(!b.inputs[1].connected);
        assert!(scene.node(0).expect("A visible").outputs[0].connected);
        assert_eq!(b.inputs[1].port_type, PortType::Signal);
    }

    #[test]
    fn wire_endpoints_follow_node_drag() {
        let mut ed = editor();
        ed.begin_drag(Point::new(100.0, 10.0));
        let _ = ed.update_drag(Point::new(100.0, 110.0));
        let scene = Scene::build(&ed, VIEW);
        let layout = ed.layout();
        let expected_from = ed.patch().nodes[0].output_rect(0, layout).center() + Vec2::new(0.0, 100.0);
        assert_eq!(scene.wires.len(), 1);
        assert_eq!(scene.wires[0].from, expected_from);
        assert_eq!(
            scene.wires[0].to,
            ed.patch().nodes[1].input_rect(0, layout).center()
        );
        assert_eq!(
            scene.node(0).expect("A visible").rect,
            ed.patch().nodes[0].rect(layout) + Vec2::new(0.0, 100.0)
        );
    }

    #[test]
    fn picked_up_wire_is_hidden_and_dragged() {
        let mut ed = editor();
        let input = ed.patch().nodes[1].input_rect(0, ed.layout()).center();
        ed.begin_drag(input);
        let pointer = Point::new(300.0, 300.0);
        let _ = ed.update_drag(pointer);
        let scene = Scene::build(&ed, VIEW);
        assert!(scene.wires.is_empty());
        let dragged = scene.dragged_wire.expect("wire in flight");
        assert_eq!(dragged.output, OutputID::new(0, 0));
        assert_eq!(dragged.to, pointer);
        assert_eq!(
            dragged.from,
            ed.patch().nodes[0].output_rect(0, ed.layout()).center()
        );
    }

    #[test]
    fn rubber_band_is_reported_and_highlights() {
        let mut ed = editor();
        ed.begin_drag(Point::new(350.0, -50.0));
        let _ = ed.update_drag(Point::new(450.0, 20.0));
        let scene = Scene::build(&ed, VIEW);
        assert_eq!(
            scene.selection_rect,
            Some(Rect::new(350.0, -50.0, 450.0, 20.0))
        );
        assert!(scene.node(1).expect("B visible").highlighted);
        assert!(!scene.node(0).expect("A visible").highlighted);
        assert!(scene.dragged_wire.is_none());
    }
}
