// Copyright 2025 the Flow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover tracking: enter/leave transitions as the pointer moves over a patch.
//!
//! A hit is turned into an outer→inner path: `[Node(i)]` over a node body, and
//! `[Node(i), Input(..)]` or `[Node(i), Output(..)]` over a port. Moving from one port to
//! a sibling port of the same node leaves only the port; the node stays hovered.
//!
//! ```
//! use flow_editor::hover::{HoverEvent, HoverState, HoverTarget};
//! use flow_patch::{HitTestResult, InputID};
//!
//! let mut hover = HoverState::new();
//! assert_eq!(hover.update(HitTestResult::Node(0)), vec![HoverEvent::Enter(HoverTarget::Node(0))]);
//! assert_eq!(
//!     hover.update(HitTestResult::Input(InputID::new(0, 1))),
//!     vec![HoverEvent::Enter(HoverTarget::Input(InputID::new(0, 1)))]
//! );
//! assert_eq!(
//!     hover.update(HitTestResult::Background),
//!     vec![
//!         HoverEvent::Leave(HoverTarget::Input(InputID::new(0, 1))),
//!         HoverEvent::Leave(HoverTarget::Node(0)),
//!     ]
//! );
//! ```

use alloc::vec::Vec;

use flow_patch::{HitTestResult, InputID, NodeIndex, OutputID};

/// Something the pointer can hover.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum HoverTarget {
    /// A node, hovered whenever the pointer is anywhere over it, ports included.
    Node(NodeIndex),
    /// An input port.
    Input(InputID),
    /// An output port.
    Output(OutputID),
}

/// A hover transition.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum HoverEvent {
    /// The pointer entered the target (outer→inner).
    Enter(HoverTarget),
    /// The pointer left the target (inner→outer).
    Leave(HoverTarget),
}

/// The outer→inner hover path for a hit.
pub fn hover_path(hit: HitTestResult) -> Vec<HoverTarget> {
    match hit {
        HitTestResult::Background => Vec::new(),
        HitTestResult::Node(index) => alloc::vec![HoverTarget::Node(index)],
        HitTestResult::Input(input) => {
            alloc::vec![HoverTarget::Node(input.node_index), HoverTarget::Input(input)]
        }
        HitTestResult::Output(output) => {
            alloc::vec![HoverTarget::Node(output.node_index), HoverTarget::Output(output)]
        }
    }
}

/// The currently hovered path and the transitions between successive paths.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HoverState {
    current: Vec<HoverTarget>,
}

impl HoverState {
    /// Nothing hovered.
    pub fn new() -> Self {
        Self::default()
    }

    /// The hovered path, outer→inner.
    pub fn current_path(&self) -> &[HoverTarget] {
        &self.current
    }

    /// The innermost hovered target.
    pub fn current(&self) -> Option<HoverTarget> {
        self.current.last().copied()
    }

    /// Move the pointer onto `hit`.
    pub fn update(&mut self, hit: HitTestResult) -> Vec<HoverEvent> {
        self.update_path(&hover_path(hit))
    }

    /// Replace the hovered path, returning leaves (inner→outer) then enters (outer→inner).
    pub fn update_path(&mut self, new_path: &[HoverTarget]) -> Vec<HoverEvent> {
        let shared = self
            .current
            .iter()
            .zip(new_path)
            .take_while(|(old, new)| old == new)
            .count();

        let mut out: Vec<HoverEvent> = self.current[shared..]
            .iter()
            .rev()
            .map(|&t| HoverEvent::Leave(t))
            .collect();
        out.extend(new_path[shared..].iter().map(|&t| HoverEvent::Enter(t)));

        self.current.clear();
        self.current.extend_from_slice(new_path);
        out
    }

    /// Drop the hover, returning leaves inner→outer.
    pub fn clear(&mut self) -> Vec<HoverEvent> {
        self.update_path(&[])
    }
}
