// Copyright 2025 the Flow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout constants and the two automatic placement algorithms.
//!
//! Both algorithms only write [`Node::position`](crate::Node::position); they never touch
//! wires, ports, or the node count.
//!
//! - [`Patch::recursive_layout`] places a sink node and then walks its incoming wires,
//!   stacking each upstream subtree one column to the left.
//! - [`Patch::stacked_layout`] places caller-chosen columns of nodes with no graph analysis.

use alloc::collections::{BTreeMap, BTreeSet};
use alloc::vec::Vec;
use kurbo::{Point, Size};

use crate::patch::Patch;
use crate::types::{NodeIndex, Wire};

/// Geometry used to size nodes and ports and to space them apart.
///
/// This is per-render configuration, not persisted state. Pass the same value to
/// geometry, hit testing, and layout so they agree.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutConstants {
    /// Size of a port dot.
    pub port_size: Size,
    /// Gap between port rows and between a port and the node edge.
    pub port_spacing: f64,
    /// Width of every node.
    pub node_width: f64,
    /// Height of the title bar.
    pub node_title_height: f64,
    /// Gap between nodes placed by the layout algorithms.
    pub node_spacing: f64,
    /// Corner radius renderers should use for node bodies.
    pub node_corner_radius: f64,
}

impl Default for LayoutConstants {
    fn default() -> Self {
        Self {
            port_size: Size::new(20.0, 20.0),
            port_spacing: 10.0,
            node_width: 200.0,
            node_title_height: 40.0,
            node_spacing: 40.0,
            node_corner_radius: 5.0,
        }
    }
}

impl LayoutConstants {
    /// Vertical distance between consecutive port rows.
    pub fn port_pitch(&self) -> f64 {
        self.port_size.height + self.port_spacing
    }

    /// Horizontal distance between consecutive layout columns.
    pub fn column_pitch(&self) -> f64 {
        self.node_width + self.node_spacing
    }
}

impl Patch {
    /// Lay out `root` and everything upstream of it.
    ///
    /// `root` is placed with its top-left corner at `anchor`. The source nodes of the wires
    /// entering `root`, ordered by input port, are laid out recursively one column to the
    /// left and stacked top to bottom, separated by [`LayoutConstants::node_spacing`].
    ///
    /// Every node is placed at most once per call: a node feeding several consumers keeps
    /// the position of its first visit, and cycles terminate.
    ///
    /// Returns the height consumed by the subtree: the larger of `root`'s own height and
    /// the stacked height of its upstream subtrees. Spacing goes between sibling subtrees
    /// only; no trailing gap follows the last one, so a returned height can be stacked
    /// directly under a neighbour plus one `node_spacing`.
    ///
    /// Panics if `root` is out of range.
    pub fn recursive_layout(
        &mut self,
        root: NodeIndex,
        anchor: Point,
        layout: &LayoutConstants,
    ) -> f64 {
        let incoming = self.incoming_by_node();
        let mut visited = BTreeSet::new();
        self.layout_upstream(root, anchor, layout, &incoming, &mut visited)
    }

    fn layout_upstream(
        &mut self,
        node: NodeIndex,
        anchor: Point,
        layout: &LayoutConstants,
        incoming: &BTreeMap<NodeIndex, Vec<Wire>>,
        visited: &mut BTreeSet<NodeIndex>,
    ) -> f64 {
        self.nodes[node].position = anchor;
        visited.insert(node);

        let mut stacked = 0.0;
        let mut placed_any = false;
        for wire in incoming.get(&node).into_iter().flatten() {
            let source = wire.output.node_index;
            if visited.contains(&source) {
                continue;
            }
            if placed_any {
                stacked += layout.node_spacing;
            }
            let at = Point::new(anchor.x - layout.column_pitch(), anchor.y + stacked);
            stacked += self.layout_upstream(source, at, layout, incoming, visited);
            placed_any = true;
        }

        stacked.max(self.nodes[node].rect(layout).height())
    }

    /// Incoming wires per destination node, each list ordered by input port.
    fn incoming_by_node(&self) -> BTreeMap<NodeIndex, Vec<Wire>> {
        let mut incoming: BTreeMap<NodeIndex, Vec<Wire>> = BTreeMap::new();
        for wire in &self.wires {
            incoming.entry(wire.input.node_index).or_default().push(*wire);
        }
        for wires in incoming.values_mut() {
            wires.sort_by_key(|w| (w.input.port_index, w.output));
        }
        incoming
    }

    /// Place explicit columns of nodes in a grid.
    ///
    /// Column `c` is placed at `origin.x + c * (node width + node spacing)`. Within a column
    /// nodes are stacked from `origin.y` downwards, each followed by
    /// [`LayoutConstants::node_spacing`], except in the last column where nodes sit flush
    /// against each other. Nodes not mentioned keep their position; a node mentioned twice
    /// ends up at its last slot.
    ///
    /// Panics if any index is out of range.
    pub fn stacked_layout<C: AsRef<[NodeIndex]>>(
        &mut self,
        origin: Point,
        columns: &[C],
        layout: &LayoutConstants,
    ) {
        let last = columns.len().saturating_sub(1);
        let mut x = origin.x;
        for (column_index, column) in columns.iter().enumerate() {
            let gap = if column_index == last {
                0.0
            } else {
                layout.node_spacing
            };
            let mut y = origin.y;
            for &index in column.as_ref() {
                let node = &mut self.nodes[index];
                node.position = Point::new(x, y);
                y += node.rect(layout).height() + gap;
            }
            x += layout.column_pitch();
        }
    }
}
