// Copyright 2025 the Flow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The editor session: one patch, its selection, and the gesture in flight.
//!
//! ## Usage
//!
//! 1) Build a [`NodeEditor`] from the patch generated from your model.
//! 2) Feed pointer input in patch coordinates: [`NodeEditor::begin_drag`] on press,
//!    [`NodeEditor::update_drag`] on every move, [`NodeEditor::end_drag`] on release.
//! 3) Apply the returned [`PatchEvent`]s to your model, or pass an observer to
//!    [`NodeEditor::end_drag_with`].
//! 4) Render from [`NodeEditor::patch`], [`NodeEditor::drag_info`],
//!    [`NodeEditor::node_offset`] and [`NodeEditor::is_node_highlighted`], or build a
//!    [`Scene`](crate::scene::Scene).
//!
//! ```
//! use flow_editor::{DragInfo, NodeEditor};
//! use flow_patch::{Node, Patch, PatchEvent};
//! use kurbo::{Point, Vec2};
//!
//! let patch = Patch::new(vec![Node::new("osc").with_outputs(["out"])], []);
//! let mut editor = NodeEditor::new(patch);
//!
//! // Drag the node body 40 units right.
//! editor.begin_drag(Point::new(100.0, 10.0));
//! let live = *editor.update_drag(Point::new(140.0, 10.0));
//! assert_eq!(live, DragInfo::Node { index: 0, offset: Vec2::new(40.0, 0.0) });
//! assert_eq!(editor.node_offset(0), Vec2::new(40.0, 0.0));
//!
//! let events = editor.end_drag(Point::new(140.0, 10.0));
//! assert_eq!(events, vec![PatchEvent::NodeMoved { index: 0, position: Point::new(40.0, 0.0) }]);
//! assert_eq!(editor.node_offset(0), Vec2::ZERO);
//! ```

use alloc::vec::Vec;

use flow_patch::geometry::rects_intersect;
use flow_patch::{LayoutConstants, NodeIndex, Patch, PatchEvent, PatchObserver, deliver_all};
use kurbo::{Point, Vec2};

use crate::gesture::{Commit, DragGesture};
use crate::selection::Selection;
use crate::types::{DragInfo, GestureConfig};

/// A node-graph editing session.
#[derive(Clone, Debug, Default)]
pub struct NodeEditor {
    patch: Patch,
    selection: Selection,
    layout: LayoutConstants,
    config: GestureConfig,
    gesture: Option<DragGesture>,
    drag_info: DragInfo,
}

impl NodeEditor {
    /// A session over `patch` with default layout and gesture settings.
    pub fn new(patch: Patch) -> Self {
        Self {
            patch,
            ..Self::default()
        }
    }

    /// Use `layout` for every rect, hit test and layout computed by this session.
    #[must_use]
    pub fn with_layout(mut self, layout: LayoutConstants) -> Self {
        self.layout = layout;
        self
    }

    /// Use `config` to interpret gestures.
    #[must_use]
    pub fn with_config(mut self, config: GestureConfig) -> Self {
        self.config = config;
        self
    }

    /// The current patch.
    pub fn patch(&self) -> &Patch {
        &self.patch
    }

    /// The current selection.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Layout constants in use.
    pub fn layout(&self) -> &LayoutConstants {
        &self.layout
    }

    /// Gesture settings in use.
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Live drag state for rendering.
    pub fn drag_info(&self) -> &DragInfo {
        &self.drag_info
    }

    /// The gesture in flight, if any.
    pub fn gesture(&self) -> Option<&DragGesture> {
        self.gesture.as_ref()
    }

    /// Replace the patch, e.g. after regenerating it from the host model.
    ///
    /// Any gesture in flight is cancelled: its start hit refers to the old patch.
    pub fn set_patch(&mut self, patch: Patch) {
        self.cancel_drag();
        self.patch = patch;
    }

    /// Replace the selection.
    pub fn set_selection(&mut self, selection: Selection) {
        self.selection = selection;
    }

    /// Pointer pressed at `start`.
    pub fn begin_drag(&mut self, start: Point) {
        let gesture = DragGesture::begin(&self.patch, start, &self.layout);
        log::trace!("drag began at {start:?} on {:?}", gesture.start_hit());
        self.gesture = Some(gesture);
        self.drag_info = DragInfo::None;
    }

    /// Pointer moved to `location`. Without a gesture in flight the state stays `None`.
    pub fn update_drag(&mut self, location: Point) -> &DragInfo {
        self.drag_info = match &self.gesture {
            Some(gesture) => gesture.drag_info(&self.patch, location, &self.layout),
            None => DragInfo::None,
        };
        &self.drag_info
    }

    /// Pointer released at `location`: commit the gesture.
    ///
    /// Returns the patch changes in the order they were applied. Selection changes are
    /// visible through [`NodeEditor::selection`] and produce no event.
    pub fn end_drag(&mut self, location: Point) -> Vec<PatchEvent> {
        self.drag_info = DragInfo::None;
        let Some(gesture) = self.gesture.take() else {
            return Vec::new();
        };
        let Commit {
            patch,
            selection,
            events,
        } = gesture.end(
            &self.patch,
            &self.selection,
            location,
            &self.layout,
            &self.config,
        );
        if let Some(patch) = patch {
            self.patch = patch;
        }
        if let Some(selection) = selection {
            log::debug!("selection replaced: {} node(s)", selection.len());
            self.selection = selection;
        }
        for event in &events {
            log::debug!("committed {event:?}");
        }
        events
    }

    /// Like [`NodeEditor::end_drag`], forwarding every event to `observer` in order.
    pub fn end_drag_with<O: PatchObserver + ?Sized>(
        &mut self,
        location: Point,
        observer: &mut O,
    ) -> Vec<PatchEvent> {
        let events = self.end_drag(location);
        deliver_all(&events, observer);
        events
    }

    /// Abandon the gesture in flight without committing anything.
    pub fn cancel_drag(&mut self) {
        if self.gesture.take().is_some() {
            log::trace!("drag cancelled");
        }
        self.drag_info = DragInfo::None;
    }

    /// Offset at which to draw node `index` during the live drag.
    ///
    /// Zero for locked nodes and outside a node drag. The dragged node follows the
    /// pointer; other selected nodes follow it only when the dragged node is selected too.
    pub fn node_offset(&self, index: NodeIndex) -> Vec2 {
        let DragInfo::Node {
            index: dragged,
            offset,
        } = self.drag_info
        else {
            return Vec2::ZERO;
        };
        if self.patch.node(index).is_none_or(|node| node.locked) {
            return Vec2::ZERO;
        }
        let follows = index == dragged
            || (self.selection.contains(dragged) && self.selection.contains(index));
        if follows { offset } else { Vec2::ZERO }
    }

    /// Whether node `index` should be drawn highlighted.
    ///
    /// During a rubber-band drag this previews the selection the release would produce;
    /// otherwise it reflects the current selection.
    pub fn is_node_highlighted(&self, index: NodeIndex) -> bool {
        match self.drag_info {
            DragInfo::Selection { rect } => self
                .patch
                .node(index)
                .is_some_and(|node| rects_intersect(rect, node.rect(&self.layout))),
            _ => self.selection.contains(index),
        }
    }

    /// Lay out the upstream tree of `root` with `root` at `anchor`.
    ///
    /// See [`Patch::recursive_layout`]. No events are produced; read the new positions
    /// from [`NodeEditor::patch`].
    pub fn recursive_layout(&mut self, root: NodeIndex, anchor: Point) -> f64 {
        self.cancel_drag();
        let mut next = self.patch.clone();
        let height = next.recursive_layout(root, anchor, &self.layout);
        self.patch = next;
        height
    }

    /// Place nodes in explicit columns starting at `origin`. See [`Patch::stacked_layout`].
    pub fn stacked_layout<C: AsRef<[NodeIndex]>>(&mut self, origin: Point, columns: &[C]) {
        self.cancel_drag();
        let mut next = self.patch.clone();
        next.stacked_layout(origin, columns, &self.layout);
        self.patch = next;
    }
}
