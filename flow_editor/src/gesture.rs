// Copyright 2025 the Flow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drag gesture state machine.
//!
//! ## Overview
//!
//! A [`DragGesture`] is created on pointer-down. It hit-tests the press point once and
//! keeps that result for the whole gesture: live updates and the final commit are both
//! derived from it plus the current pointer location, never from a fresh hit test of the
//! start point. The patch is assumed not to change under a gesture.
//!
//! ## Live state
//!
//! [`DragGesture::drag_info`] maps the start hit to a [`DragInfo`]:
//!
//! | start hit         | live state |
//! |-------------------|------------|
//! | background        | [`DragInfo::Selection`] spanning press and pointer |
//! | node body         | [`DragInfo::Node`] with the translation |
//! | output            | [`DragInfo::Wire`] from that output |
//! | connected input   | [`DragInfo::Wire`] from the wire's output, hiding the wire |
//! | unconnected input | [`DragInfo::None`] |
//!
//! ## Commit
//!
//! [`DragGesture::end`] compares the press-to-release distance to
//! [`GestureConfig::drag_threshold`]:
//!
//! - Tap: background clears the selection, a node body selects just that node, ports do nothing.
//! - Drag from background: select every node whose rect meets the rubber band.
//! - Drag from a node: move it; if it was selected, move the rest of the selection too.
//! - Drag from an output: connect it to the input under the release point, if any.
//! - Drag from a connected input: remove its wire, then reconnect the wire's output to the
//!   input under the release point, if any.

use alloc::vec::Vec;

use flow_patch::geometry::{bounding_rect, distance};
use flow_patch::{
    HitTestResult, InputID, LayoutConstants, OutputID, Patch, PatchEvent, PortType, Wire,
};
use kurbo::{Point, Vec2};

use crate::selection::Selection;
use crate::types::{DragInfo, GestureConfig};

/// One pointer gesture from press to release.
#[derive(Clone, Debug, PartialEq)]
pub struct DragGesture {
    start: Point,
    start_hit: HitTestResult,
    picked_up: Option<Wire>,
}

/// The result of ending a gesture.
///
/// `patch` and `selection` are `Some` only when the gesture replaced them. `events`
/// lists the patch changes in the order they were applied.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Commit {
    /// Replacement patch.
    pub patch: Option<Patch>,
    /// Replacement selection.
    pub selection: Option<Selection>,
    /// Patch changes to mirror into the host model.
    pub events: Vec<PatchEvent>,
}

impl Commit {
    /// Whether the gesture changed nothing.
    pub fn is_empty(&self) -> bool {
        self.patch.is_none() && self.selection.is_none()
    }
}

impl DragGesture {
    /// Start a gesture with a press at `start`.
    pub fn begin(patch: &Patch, start: Point, layout: &LayoutConstants) -> Self {
        let start_hit = patch.hit_test(start, layout);
        let picked_up = match start_hit {
            HitTestResult::Input(input) => patch.attached_wire(input),
            _ => None,
        };
        Self {
            start,
            start_hit,
            picked_up,
        }
    }

    /// Where the press happened.
    pub fn start(&self) -> Point {
        self.start
    }

    /// What the press landed on.
    pub fn start_hit(&self) -> HitTestResult {
        self.start_hit
    }

    /// Pointer translation since the press.
    pub fn translation(&self, location: Point) -> Vec2 {
        location - self.start
    }

    /// Whether releasing at `location` counts as a drag rather than a tap.
    pub fn is_drag(&self, location: Point, config: &GestureConfig) -> bool {
        distance(self.start, location) > config.drag_threshold
    }

    /// Live drag state with the pointer at `location`.
    pub fn drag_info(&self, patch: &Patch, location: Point, layout: &LayoutConstants) -> DragInfo {
        let translation = self.translation(location);
        match self.start_hit {
            HitTestResult::Background => DragInfo::Selection {
                rect: bounding_rect(self.start, location),
            },
            HitTestResult::Node(index) => DragInfo::Node {
                index,
                offset: translation,
            },
            HitTestResult::Output(output) => DragInfo::Wire {
                output,
                offset: translation,
                hidden_wire: None,
            },
            HitTestResult::Input(_) => match self.picked_up {
                Some(wire) => match output_center(patch, wire.output, layout) {
                    Some(source) => DragInfo::Wire {
                        output: wire.output,
                        offset: location - source,
                        hidden_wire: Some(wire),
                    },
                    None => DragInfo::None,
                },
                None => DragInfo::None,
            },
        }
    }

    /// Finish the gesture with the pointer released at `location`.
    ///
    /// `patch` and `selection` are left untouched; replacements come back in the [`Commit`].
    pub fn end(
        &self,
        patch: &Patch,
        selection: &Selection,
        location: Point,
        layout: &LayoutConstants,
        config: &GestureConfig,
    ) -> Commit {
        if !self.is_drag(location, config) {
            return self.tap();
        }
        let translation = self.translation(location);
        match self.start_hit {
            HitTestResult::Background => {
                let rect = bounding_rect(self.start, location);
                Commit {
                    selection: Some(patch.selected_in(rect, layout).collect()),
                    ..Commit::default()
                }
            }
            HitTestResult::Node(index) => {
                let mut next = patch.clone();
                let mut events: Vec<PatchEvent> =
                    next.move_node(index, translation).into_iter().collect();
                if selection.contains(index) {
                    // Stale entries from an older patch are skipped.
                    let in_range = next.nodes.len();
                    for &other in selection.iter().filter(|&&i| i != index && i < in_range) {
                        events.extend(next.move_node(other, translation));
                    }
                }
                changed(next, events)
            }
            HitTestResult::Output(output) => {
                match drop_target(patch, output, location, layout, config) {
                    Some(input) => {
                        let mut next = patch.clone();
                        let events = next.connect(output, input);
                        changed(next, events)
                    }
                    None => Commit::default(),
                }
            }
            HitTestResult::Input(_) => {
                let Some(wire) = self.picked_up else {
                    return Commit::default();
                };
                let mut next = patch.clone();
                let mut events: Vec<PatchEvent> = next.disconnect(wire).into_iter().collect();
                if let Some(input) = drop_target(patch, wire.output, location, layout, config) {
                    events.extend(next.connect(wire.output, input));
                }
                changed(next, events)
            }
        }
    }

    fn tap(&self) -> Commit {
        let selection = match self.start_hit {
            HitTestResult::Background => Some(Selection::new()),
            HitTestResult::Node(index) => Some(Selection::single(index)),
            HitTestResult::Input(_) | HitTestResult::Output(_) => None,
        };
        Commit {
            selection,
            ..Commit::default()
        }
    }
}

/// Replace the patch only when something was actually applied.
fn changed(next: Patch, events: Vec<PatchEvent>) -> Commit {
    Commit {
        patch: (!events.is_empty()).then_some(next),
        selection: None,
        events,
    }
}

/// The input a wire from `output` would connect to if dropped at `location`.
fn drop_target(
    patch: &Patch,
    output: OutputID,
    location: Point,
    layout: &LayoutConstants,
    config: &GestureConfig,
) -> Option<InputID> {
    let port_type: Option<&PortType> = if config.match_port_types {
        let source = patch
            .node(output.node_index)
            .and_then(|node| node.outputs.get(output.port_index))?;
        Some(&source.port_type)
    } else {
        None
    };
    patch.find_input(location, layout, port_type)
}

/// Centre of an output port, or `None` if `output` does not exist in `patch`.
pub(crate) fn output_center(
    patch: &Patch,
    output: OutputID,
    layout: &LayoutConstants,
) -> Option<Point> {
    let node = patch.node(output.node_index)?;
    (output.port_index < node.outputs.len())
        .then(|| node.output_rect(output.port_index, layout).center())
}
