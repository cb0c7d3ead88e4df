// Copyright 2025 the Flow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Change notifications produced by patch mutations.
//!
//! Mutations return [`PatchEvent`]s instead of calling back into the host, so the model
//! itself stays free of side effects. Hosts either consume the returned values directly
//! or forward them to a [`PatchObserver`] with [`PatchEvent::deliver`].
//!
//! ```
//! use flow_patch::{InputID, Node, OutputID, Patch, PatchEvent, Wire};
//!
//! let mut patch = Patch::new(
//!     vec![Node::new("osc").with_outputs(["out"]), Node::new("amp").with_inputs(["in"])],
//!     [],
//! );
//! let events = patch.connect(OutputID::new(0, 0), InputID::new(1, 0));
//! assert_eq!(
//!     events,
//!     vec![PatchEvent::WireAdded(Wire::new(OutputID::new(0, 0), InputID::new(1, 0)))]
//! );
//! ```

use kurbo::Point;

use crate::types::{NodeIndex, Wire};

/// A committed change to a [`Patch`](crate::Patch).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PatchEvent {
    /// A node was moved; `position` is its new absolute top-left corner.
    NodeMoved {
        /// The moved node.
        index: NodeIndex,
        /// New position.
        position: Point,
    },
    /// A wire was inserted.
    WireAdded(Wire),
    /// A wire was removed, either explicitly or because a new wire replaced it.
    WireRemoved(Wire),
}

impl PatchEvent {
    /// Forward this event to the matching observer method.
    pub fn deliver<O: PatchObserver + ?Sized>(&self, observer: &mut O) {
        match *self {
            Self::NodeMoved { index, position } => observer.node_moved(index, position),
            Self::WireAdded(wire) => observer.wire_added(wire),
            Self::WireRemoved(wire) => observer.wire_removed(wire),
        }
    }
}

/// Host-side receiver for patch changes.
///
/// All methods default to doing nothing, so implementors only override what they mirror.
pub trait PatchObserver {
    /// Called after a node moved.
    fn node_moved(&mut self, _index: NodeIndex, _position: Point) {}
    /// Called after a wire was inserted.
    fn wire_added(&mut self, _wire: Wire) {}
    /// Called after a wire was removed.
    fn wire_removed(&mut self, _wire: Wire) {}
}

/// An observer that ignores every notification.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoObserver;

impl PatchObserver for NoObserver {}

/// Deliver a batch of events in order.
pub fn deliver_all<'a, O: PatchObserver + ?Sized>(
    events: impl IntoIterator<Item = &'a PatchEvent>,
    observer: &mut O,
) {
    for event in events {
        event.deliver(observer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{InputID, OutputID};
    use alloc::vec;
    use alloc::vec::Vec;

    #[derive(Default)]
    struct Recorder(Vec<&'static str>);

    impl PatchObserver for Recorder {
        fn node_moved(&mut self, _index: NodeIndex, _position: Point) {
            self.0.push("moved");
        }
        fn wire_added(&mut self, _wire: Wire) {
            self.0.push("added");
        }
        fn wire_removed(&mut self, _wire: Wire) {
            self.0.push("removed");
        }
    }

    #[test]
    fn deliver_all_preserves_order() {
        let wire = Wire::new(OutputID::new(0, 0), InputID::new(1, 0));
        let events = vec![
            PatchEvent::WireRemoved(wire),
            PatchEvent::WireAdded(wire),
            PatchEvent::NodeMoved {
                index: 0,
                position: Point::new(1.0, 2.0),
            },
        ];
        let mut rec = Recorder::default();
        deliver_all(&events, &mut rec);
        assert_eq!(rec.0, vec!["removed", "added", "moved"]);
    }

    #[test]
    fn default_methods_are_no_ops() {
        let mut quiet = NoObserver;
        PatchEvent::WireAdded(Wire::new(OutputID::new(0, 0), InputID::new(0, 0)))
            .deliver(&mut quiet);
    }
}
