// Copyright 2026 the Beziertool Authors
// SPDX-License-Identifier: Apache-2.0

//! Selection state - at most one anchor point and one of its handles.
//!
//! A handle is only ever selected together with its owning point, so the
//! selected handle is stored as a side of the selected point; the pair is
//! cleared as one. The selection is plain data owned by the session, which
//! keeps the state machine testable without a render surface.

use crate::model::EntityId;
use crate::spline::HandleSide;

/// The current selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    point: Option<EntityId>,
    handle: Option<HandleSide>,
}

impl Selection {
    /// Create an empty selection
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.point.is_none()
    }

    /// The selected point, if any
    pub fn point(&self) -> Option<EntityId> {
        self.point
    }

    /// The selected handle, addressed as (owner, side)
    pub fn handle(&self) -> Option<(EntityId, HandleSide)> {
        match (self.point, self.handle) {
            (Some(owner), Some(side)) => Some((owner, side)),
            _ => None,
        }
    }

    /// Select a point, dropping any handle selection
    pub fn select_point(&mut self, id: EntityId) {
        self.point = Some(id);
        self.handle = None;
    }

    /// Select a point together with one of its handles
    pub fn select_handle(&mut self, owner: EntityId, side: HandleSide) {
        self.point = Some(owner);
        self.handle = Some(side);
    }

    /// Clear both the point and the handle selection
    pub fn clear(&mut self) {
        self.point = None;
        self.handle = None;
    }
}
