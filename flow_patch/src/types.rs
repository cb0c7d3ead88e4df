// Copyright 2025 the Flow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public identifier and value types: node/port addresses, port types, wires, colors.

use alloc::string::String;

/// Nodes are identified by their index in [`Patch::nodes`](crate::Patch::nodes).
///
/// ## Semantics
///
/// - An index is only meaningful for the [`Patch`](crate::Patch) value it was obtained from.
/// - Inserting or removing nodes renumbers everything after the edit point; callers that
///   delete or reorder nodes regenerate the patch (see [`Patch::without_nodes`](crate::Patch::without_nodes))
///   rather than keeping indices alive across the edit.
pub type NodeIndex = usize;

/// Ports are identified by their index within a node's input or output list.
pub type PortIndex = usize;

/// Address of an input port: `(node, port)` in the input namespace.
///
/// An [`InputID`] and an [`OutputID`] with equal fields name different ports, because
/// input and output lists are independent per node.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InputID {
    /// Index of the node owning the port.
    pub node_index: NodeIndex,
    /// Index into the node's inputs.
    pub port_index: PortIndex,
}

impl InputID {
    /// Address input `port_index` of node `node_index`.
    pub const fn new(node_index: NodeIndex, port_index: PortIndex) -> Self {
        Self {
            node_index,
            port_index,
        }
    }
}

/// Address of an output port: `(node, port)` in the output namespace.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OutputID {
    /// Index of the node owning the port.
    pub node_index: NodeIndex,
    /// Index into the node's outputs.
    pub port_index: PortIndex,
}

impl OutputID {
    /// Address output `port_index` of node `node_index`.
    pub const fn new(node_index: NodeIndex, port_index: PortIndex) -> Self {
        Self {
            node_index,
            port_index,
        }
    }
}

/// Kind of data a port carries.
///
/// Renderers pick wire colors per type, and the editor can optionally refuse to drop a
/// wire onto an input whose type differs from the dragged output's.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PortType {
    /// Low-rate control values.
    Control,
    /// Audio-rate or other continuous signal.
    #[default]
    Signal,
    /// MIDI event streams.
    Midi,
    /// Application-defined type, compared by name.
    Custom(String),
}

/// A named, typed connection point on a node.
///
/// Ports carry no connection state; connectivity is derived from the patch's wires.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Port {
    /// Label shown next to the port.
    pub name: String,
    /// Data kind.
    pub port_type: PortType,
}

impl Port {
    /// A [`PortType::Signal`] port.
    pub fn new(name: impl Into<String>) -> Self {
        Self::typed(name, PortType::Signal)
    }

    /// A port of the given type.
    pub fn typed(name: impl Into<String>, port_type: PortType) -> Self {
        Self {
            name: name.into(),
            port_type,
        }
    }
}

impl From<&str> for Port {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Port {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

/// A directed connection from one node's output to another node's input.
///
/// Wires are compared by value. Ordering is by output, then input, which keeps
/// iteration over [`Patch::wires`](crate::Patch::wires) deterministic.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Wire {
    /// Source port.
    pub output: OutputID,
    /// Destination port.
    pub input: InputID,
}

impl Wire {
    /// Wire from `output` to `input`.
    pub const fn new(output: OutputID, input: InputID) -> Self {
        Self { output, input }
    }
}

/// Straight (non-premultiplied) RGBA color with `f32` components in `0.0..=1.0`.
///
/// The core only carries this value through to the renderer.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    /// Red.
    pub r: f32,
    /// Green.
    pub g: f32,
    /// Blue.
    pub b: f32,
    /// Alpha.
    pub a: f32,
}

impl Color {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Color from components.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from components.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }
}
