// Copyright 2026 the Beziertool Authors
// SPDX-License-Identifier: Apache-2.0

//! Structured input values for the editing state machine.
//!
//! The embedder translates raw device events into these types: positions
//! arrive already in the editing surface's local coordinate space, timestamps
//! are plain milliseconds that are only ever compared as values, and
//! modifiers are named for the behavior they request rather than the key that
//! produces them.

use kurbo::Point;

/// Input modifiers sampled at pointer-event time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Drag a tangent handle instead of the point itself
    pub drag_tangent: bool,
    /// Quantize point drags down to the grid cell origin
    pub snap_to_grid: bool,
}

/// A pointer event in local surface coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub pos: Point,
    pub mods: Modifiers,
    /// Milliseconds on the embedder's clock
    pub timestamp_ms: u64,
}

impl PointerEvent {
    /// An event with no modifiers held
    pub fn new(pos: Point, timestamp_ms: u64) -> Self {
        Self {
            pos,
            mods: Modifiers::default(),
            timestamp_ms,
        }
    }

    pub fn with_modifiers(pos: Point, mods: Modifiers, timestamp_ms: u64) -> Self {
        Self {
            pos,
            mods,
            timestamp_ms,
        }
    }
}

/// Keyboard input the editor reacts to.
///
/// Mapping a device key code onto this is the embedder's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum EditKey {
    /// Remove the selected point
    Delete,
}
