// Copyright 2025 the Flow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Nodes and their port geometry.

use alloc::string::String;
use alloc::vec::Vec;
use kurbo::{Point, Rect, Vec2};

use crate::layout::LayoutConstants;
use crate::types::{Color, Port, PortIndex};

/// A positioned graph entity with typed input and output ports.
///
/// A node's identity is its index in [`Patch::nodes`](crate::Patch::nodes).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    /// Title shown in the title bar.
    pub name: String,
    /// Top-left corner in patch coordinates.
    pub position: Point,
    /// Locked nodes cannot be moved by gestures.
    pub locked: bool,
    /// Fill for the title bar.
    pub title_bar_color: Color,
    /// Inputs, drawn top to bottom down the left edge.
    pub inputs: Vec<Port>,
    /// Outputs, drawn top to bottom down the right edge.
    pub outputs: Vec<Port>,
}

impl Node {
    /// An unlocked node at the origin with no ports.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position: Point::ZERO,
            locked: false,
            title_bar_color: Color::TRANSPARENT,
            inputs: Vec::new(),
            outputs: Vec::new(),
        }
    }

    /// Set the position.
    #[must_use]
    pub fn with_position(mut self, position: Point) -> Self {
        self.position = position;
        self
    }

    /// Replace the inputs. Accepts [`Port`]s or plain names (signal ports).
    #[must_use]
    pub fn with_inputs<P: Into<Port>>(mut self, inputs: impl IntoIterator<Item = P>) -> Self {
        self.inputs = inputs.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the outputs. Accepts [`Port`]s or plain names (signal ports).
    #[must_use]
    pub fn with_outputs<P: Into<Port>>(mut self, outputs: impl IntoIterator<Item = P>) -> Self {
        self.outputs = outputs.into_iter().map(Into::into).collect();
        self
    }

    /// Set the locked flag.
    #[must_use]
    pub fn locked(mut self, locked: bool) -> Self {
        self.locked = locked;
        self
    }

    /// Set the title bar color.
    #[must_use]
    pub fn with_title_bar_color(mut self, color: Color) -> Self {
        self.title_bar_color = color;
        self
    }

    /// A copy of this node moved by `offset`. Ignores [`Node::locked`].
    #[must_use]
    pub fn translated(&self, offset: Vec2) -> Self {
        let mut out = self.clone();
        out.position += offset;
        out
    }

    /// Bounding rectangle of the node.
    ///
    /// Width is [`LayoutConstants::node_width`]. Height is
    /// `max(inputs, outputs) * (port height + port spacing) + title height + port spacing`,
    /// so the last port row keeps the same gap below it as the first row has above it.
    pub fn rect(&self, layout: &LayoutConstants) -> Rect {
        let rows = self.inputs.len().max(self.outputs.len()) as f64;
        let height = rows * layout.port_pitch() + layout.node_title_height + layout.port_spacing;
        Rect::from_origin_size(self.position, (layout.node_width, height))
    }

    /// Bounding rectangle of input `port` (the dot only, not its label).
    pub fn input_rect(&self, port: PortIndex, layout: &LayoutConstants) -> Rect {
        let offset = Vec2::new(layout.port_spacing, port_row_y(port, layout));
        Rect::from_origin_size(self.position + offset, layout.port_size)
    }

    /// Bounding rectangle of output `port` (the dot only, not its label).
    pub fn output_rect(&self, port: PortIndex, layout: &LayoutConstants) -> Rect {
        let x = layout.node_width - layout.port_spacing - layout.port_size.width;
        let offset = Vec2::new(x, port_row_y(port, layout));
        Rect::from_origin_size(self.position + offset, layout.port_size)
    }
}

/// Vertical offset of port row `port` from the node's top edge.
fn port_row_y(port: PortIndex, layout: &LayoutConstants) -> f64 {
    let row = port as f64;
    layout.node_title_height + row * layout.port_pitch() + layout.port_spacing
}
