// Copyright 2025 the Flow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flow Patch: a Kurbo-native node-graph document with hit testing and tree layout.
//!
//! Flow Patch is the model half of a node-graph (patch) editor.
//!
//! - Represents a graph of positioned nodes with typed input/output ports and the wires
//!   between them.
//! - Keeps the single-writer invariant: at most one wire per input.
//! - Computes node and port rectangles from a set of [`LayoutConstants`].
//! - Resolves a point to the top-most node body or port.
//! - Lays out an upstream tree of nodes, or explicit columns of nodes.
//!
//! Pointer gestures, selection, and render snapshots live in `flow_editor`, which drives
//! this crate.
//!
//! ## Identity
//!
//! Nodes are identified by index in [`Patch::nodes`] and ports by index within a node.
//! Indices are only valid for the patch value they came from. Generate the patch from
//! your own model, apply the [`PatchEvent`]s that mutations return back to that model,
//! and regenerate the patch after deleting or reordering nodes
//! ([`Patch::without_nodes`] does the renumbering).
//!
//! ## Not a renderer
//!
//! This crate draws nothing. It produces rectangles, positions, and connectivity that a
//! renderer consumes. Pan and zoom are also out of scope: every coordinate here is in the
//! patch's own space.
//!
//! ## API overview
//!
//! - [`Patch`]: nodes plus wires.
//! - [`Node`], [`Port`], [`PortType`], [`Wire`], [`InputID`], [`OutputID`].
//! - [`LayoutConstants`]: port size and spacing, node width, title height, node spacing.
//! - [`HitTestResult`] and [`HitTargets`] for [`Patch::hit_test`] and
//!   [`Patch::hit_test_filtered`].
//! - [`PatchEvent`] and [`PatchObserver`] for change notification.
//! - [`PatchError`] from [`Patch::validate`].
//!
//! Key operations:
//! - [`Patch::connect`] / [`Patch::disconnect`] / [`Patch::move_node`] → [`PatchEvent`]s
//! - [`Node::rect`], [`Node::input_rect`], [`Node::output_rect`]
//! - [`Patch::hit_test`] → [`HitTestResult`]
//! - [`Patch::recursive_layout`] and [`Patch::stacked_layout`]
//!
//! # Example
//!
//! ```rust
//! use flow_patch::{HitTestResult, InputID, LayoutConstants, Node, OutputID, Patch};
//! use kurbo::Point;
//!
//! let layout = LayoutConstants::default();
//! let mut patch = Patch::new(
//!     vec![
//!         Node::new("osc").with_outputs(["out"]),
//!         Node::new("amp").with_inputs(["in"]).with_outputs(["out"]),
//!         Node::new("speaker").with_inputs(["in"]),
//!     ],
//!     [],
//! );
//!
//! let _ = patch.connect(OutputID::new(0, 0), InputID::new(1, 0));
//! let _ = patch.connect(OutputID::new(1, 0), InputID::new(2, 0));
//!
//! // Lay the chain out leftwards from the speaker.
//! patch.recursive_layout(2, Point::new(600.0, 0.0), &layout);
//! assert!(patch.nodes[0].position.x < patch.nodes[1].position.x);
//!
//! // The centre of the amp's input resolves to that input.
//! let center = patch.nodes[1].input_rect(0, &layout).center();
//! assert_eq!(patch.hit_test(center, &layout), HitTestResult::Input(InputID::new(1, 0)));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod error;
pub mod event;
pub mod geometry;
pub mod layout;
pub mod node;
pub mod patch;
pub mod types;

pub use error::PatchError;
pub use event::{NoObserver, PatchEvent, PatchObserver, deliver_all};
pub use hit_test::{HitTargets, HitTestResult};
pub use layout::LayoutConstants;
pub use node::Node;
pub use patch::Patch;
pub use types::{Color, InputID, NodeIndex, OutputID, Port, PortIndex, PortType, Wire};
