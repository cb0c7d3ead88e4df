// Copyright 2025 the Flow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Structural problems reported by [`Patch::validate`](crate::Patch::validate).
//!
//! Patch operations themselves never fail; these errors exist for hosts that build
//! patches by hand and want to check them before handing them to the editor.

use thiserror::Error;

use crate::types::{InputID, Wire};

/// A structural precondition a [`Patch`](crate::Patch) does not meet.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum PatchError {
    /// The wire's source node or output port does not exist.
    #[error("wire {wire:?} starts at a missing output")]
    WireOutputOutOfRange {
        /// The offending wire.
        wire: Wire,
    },
    /// The wire's destination node or input port does not exist.
    #[error("wire {wire:?} ends at a missing input")]
    WireInputOutOfRange {
        /// The offending wire.
        wire: Wire,
    },
    /// More than one wire terminates at the same input.
    #[error("input {input:?} has more than one wire")]
    InputHasMultipleWires {
        /// The shared input.
        input: InputID,
    },
}
