// Copyright 2026 the Beziertool Authors
// SPDX-License-Identifier: Apache-2.0

//! Anchor points and their tangent handles.
//!
//! An `AnchorPoint` is a point the curve passes through exactly; its two
//! `Handle`s are the off-curve control points governing the curve direction
//! arriving at (left) and leaving (right) the point. Points link into a chain
//! via `previous`/`next` ids; the records themselves live in the
//! [`Spline`](crate::spline::Spline) arena.

use crate::model::EntityId;
use kurbo::Point;

/// Which of an anchor point's two tangent handles is addressed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleSide {
    /// Controls the curve arriving at the point
    Left,
    /// Controls the curve leaving the point
    Right,
}

/// A tangent handle owned by one anchor point.
///
/// A handle is born on top of its owner (zero-length tangent) and is carried
/// along when the owner moves; dragging the handle itself repositions it
/// absolutely, independent of the owner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Handle {
    /// Position in local surface coordinates
    pub point: Point,
    /// Whether the renderer should draw this handle
    pub visible: bool,
}

impl Handle {
    fn at(point: Point) -> Self {
        Self {
            point,
            visible: true,
        }
    }
}

/// A user-placed point the spline passes through exactly
#[derive(Debug, Clone)]
pub struct AnchorPoint {
    /// Stable identity, never reused within a session
    pub id: EntityId,
    /// Position in local surface coordinates
    pub point: Point,
    /// Drawn emphasized while selected
    pub highlighted: bool,
    /// Set while the current drag gesture has moved this point
    pub moved: bool,
    pub left_handle: Handle,
    pub right_handle: Handle,
    /// Chain neighbor toward the head
    pub previous: Option<EntityId>,
    /// Chain neighbor toward the tail
    pub next: Option<EntityId>,
}

impl AnchorPoint {
    /// Create an unlinked point with both handles sitting on it
    pub fn new(point: Point) -> Self {
        Self {
            id: EntityId::next(),
            point,
            highlighted: false,
            moved: false,
            left_handle: Handle::at(point),
            right_handle: Handle::at(point),
            previous: None,
            next: None,
        }
    }

    /// Move this point to `pos`, translating both handles by the same delta
    pub fn move_to(&mut self, pos: Point) {
        let delta = pos - self.point;
        self.point = pos;
        self.left_handle.point += delta;
        self.right_handle.point += delta;
    }

    /// The handle on the given side
    pub fn handle(&self, side: HandleSide) -> &Handle {
        match side {
            HandleSide::Left => &self.left_handle,
            HandleSide::Right => &self.right_handle,
        }
    }

    /// Mutable access to the handle on the given side
    pub fn handle_mut(&mut self, side: HandleSide) -> &mut Handle {
        match side {
            HandleSide::Left => &mut self.left_handle,
            HandleSide::Right => &mut self.right_handle,
        }
    }
}
