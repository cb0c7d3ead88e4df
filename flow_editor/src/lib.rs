// Copyright 2025 the Flow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flow Editor: pointer interaction for a [`flow_patch`] node graph.
//!
//! This crate turns a stream of pointer presses, moves, and releases (already in patch
//! coordinates) into live drag feedback and committed patch edits.
//!
//! - [`DragGesture`] is the pure state machine: it hit-tests the press point once, derives
//!   a [`DragInfo`] for every pointer move, and produces a [`Commit`] on release.
//! - [`NodeEditor`] is a session that owns a patch, a [`Selection`], and the gesture in
//!   flight, and replaces the patch and selection as gestures commit.
//! - [`HoverState`] reports enter/leave transitions over nodes and ports.
//! - [`Scene`] is a per-frame snapshot with every rect a renderer needs.
//!
//! ## Gestures
//!
//! A press on empty canvas draws a rubber band; a press on a node body moves the node
//! (and the rest of the selection, if it was selected); a press on an output drags a new
//! wire; a press on a connected input picks its wire up so it can be dropped elsewhere or
//! removed. Releasing within [`GestureConfig::drag_threshold`] of the press is a tap
//! instead: it selects the node under the press, or clears the selection.
//!
//! ## Events
//!
//! Committed edits come back as [`PatchEvent`]s in application order; a wire replaced by
//! a new connection is reported as removed before the new wire is reported as added.
//!
//! ## Logging
//!
//! Commits are logged at `debug` and gesture begin/cancel at `trace` through the `log`
//! facade. No logger is installed.
//!
//! # Example
//!
//! ```rust
//! use flow_editor::NodeEditor;
//! use flow_patch::{InputID, Node, OutputID, Patch, PatchEvent, Wire};
//! use kurbo::Point;
//!
//! let patch = Patch::new(
//!     vec![
//!         Node::new("osc").with_outputs(["out"]),
//!         Node::new("amp").with_position(Point::new(400.0, 0.0)).with_inputs(["in"]),
//!     ],
//!     [],
//! );
//! let mut editor = NodeEditor::new(patch);
//!
//! let from = editor.patch().nodes[0].output_rect(0, editor.layout()).center();
//! let to = editor.patch().nodes[1].input_rect(0, editor.layout()).center();
//! editor.begin_drag(from);
//! editor.update_drag(to);
//! let events = editor.end_drag(to);
//!
//! let wire = Wire::new(OutputID::new(0, 0), InputID::new(1, 0));
//! assert_eq!(events, vec![PatchEvent::WireAdded(wire)]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub use flow_patch;

pub mod editor;
pub mod gesture;
pub mod hover;
pub mod scene;
pub mod selection;
pub mod types;

pub use editor::NodeEditor;
pub use gesture::{Commit, DragGesture};
pub use hover::{HoverEvent, HoverState, HoverTarget, hover_path};
pub use scene::{DraggedWire, NodeVisual, PortVisual, Scene, WireVisual};
pub use selection::Selection;
pub use types::{DragInfo, GestureConfig};

pub use flow_patch::{PatchEvent, PatchObserver};
