// Copyright 2025 the Flow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the editor: live drag state and gesture configuration.

use flow_patch::{NodeIndex, OutputID, Wire};
use kurbo::{Rect, Vec2};

/// What the current pointer drag is manipulating.
///
/// This is transient per-gesture state. It is reset to [`DragInfo::None`] on every
/// pointer-down, recomputed on every pointer move from the gesture's start hit and the
/// live pointer location, and dropped (never committed) when a gesture is cancelled.
/// Renderers read it to draw the in-flight gesture.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DragInfo {
    /// No drag in progress, or a press on an unconnected input.
    #[default]
    None,
    /// A node body is being dragged.
    Node {
        /// The pressed node.
        index: NodeIndex,
        /// Translation since the press.
        offset: Vec2,
    },
    /// A wire is being dragged from `output`.
    ///
    /// The free end is drawn at the output port's centre plus `offset`.
    Wire {
        /// Fixed end of the dragged wire.
        output: OutputID,
        /// Free end, relative to the output port's centre.
        offset: Vec2,
        /// Existing wire picked up from its input; hide it while dragging.
        hidden_wire: Option<Wire>,
    },
    /// A rubber-band selection is being drawn.
    Selection {
        /// Normalized rect between the press and the pointer.
        rect: Rect,
    },
}

/// Tuning for how pointer gestures are interpreted.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GestureConfig {
    /// Pointer travel (patch units) above which a release counts as a drag, not a tap.
    pub drag_threshold: f64,
    /// When set, a dragged wire only drops onto inputs whose port type matches the
    /// source output's type.
    pub match_port_types: bool,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            drag_threshold: 5.0,
            match_port_types: false,
        }
    }
}
