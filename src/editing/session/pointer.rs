// Copyright 2026 the Beziertool Authors
// SPDX-License-Identifier: Apache-2.0

//! Pointer event handlers - the editing state machine.
//!
//! Pointer-down resolves what the gesture is about (a handle, a point, or
//! empty surface), pointer-move carries out the drag, and pointer-up either
//! completes the drag or interprets the gesture as a click that creates a new
//! point. All transitions are plain value updates; the click-vs-drag decision
//! compares embedder-supplied timestamps, no timer is ever scheduled.

use super::EditSession;
use crate::editing::mouse::PointerEvent;
use crate::spline::HandleSide;
use kurbo::Point;

/// Quantize a position down to the origin of the grid cell containing it
fn snap_point_to_grid(pos: Point, cell: f64) -> Point {
    if cell <= 0.0 {
        return pos;
    }
    Point::new((pos.x / cell).floor() * cell, (pos.y / cell).floor() * cell)
}

impl EditSession {
    /// Handle a pointer press.
    ///
    /// Clears the previous selection, then looks for a target under the
    /// pointer: handles first (selectable only while the drag-tangent
    /// modifier is held), points second. A handle hit without the modifier
    /// falls through to the point search.
    pub fn pointer_down(&mut self, event: &PointerEvent) {
        tracing::debug!(
            "pointer down at ({}, {}), mods {:?}",
            event.pos.x,
            event.pos.y,
            event.mods
        );
        self.pointer_held = true;
        self.down_time_ms = event.timestamp_ms;
        self.down_pos = event.pos;
        self.last_pos = event.pos;

        self.reset_selected_point_flags();
        self.selection.clear();

        if event.mods.drag_tangent
            && let Some((owner, side)) = self.search_handle_at(event.pos)
        {
            // The head's left handle trails no segment and stays pinned to
            // the head itself; redirect the drag to its right handle.
            let side = if self.spline.head().map(|p| p.id) == Some(owner) {
                HandleSide::Right
            } else {
                side
            };
            self.selection.select_handle(owner, side);
            if let Some(point) = self.spline.point_mut(owner) {
                point.highlighted = true;
            }
        } else if let Some(id) = self.search_point_at(event.pos) {
            self.selection.select_point(id);
            if let Some(point) = self.spline.point_mut(id) {
                point.highlighted = true;
            }
        }
    }

    /// Handle pointer movement while a drag may be in progress.
    ///
    /// With the drag-tangent modifier held and a handle selected, the handle
    /// follows the pointer absolutely and the owning point stays put; that
    /// branch applies only while the point has not yet been moved in this
    /// gesture. Otherwise the selected point is dragged, optionally snapped
    /// down to the grid.
    pub fn pointer_move(&mut self, event: &PointerEvent) {
        self.last_pos = event.pos;
        if !self.pointer_held {
            return;
        }
        let Some(selected) = self.selection.point() else {
            return;
        };

        let point_moved = self.spline.point(selected).is_some_and(|p| p.moved);
        if !point_moved && event.mods.drag_tangent {
            if let Some((owner, side)) = self.selection.handle()
                && let Some(point) = self.spline.point_mut(owner)
            {
                point.handle_mut(side).point = event.pos;
                point.highlighted = true;
            }
        } else {
            let pos = if event.mods.snap_to_grid {
                snap_point_to_grid(event.pos, self.settings.grid_cell_size)
            } else {
                event.pos
            };
            if let Some(point) = self.spline.point_mut(selected) {
                point.move_to(pos);
                point.moved = true;
            }
        }
    }

    /// Handle a pointer release: complete a drag, or interpret the gesture
    /// as a click that creates a new point.
    ///
    /// Creation requires empty surface under the release, a release within
    /// the click budget, and a release position exactly equal to the press
    /// position; anything else is an abandoned gesture.
    pub fn pointer_up(&mut self, event: &PointerEvent) {
        self.pointer_held = false;
        self.last_pos = event.pos;

        let dragged = self
            .selection
            .point()
            .and_then(|id| self.spline.point(id))
            .is_some_and(|p| p.moved);
        if dragged {
            if let Some(id) = self.selection.point()
                && let Some(point) = self.spline.point_mut(id)
            {
                point.moved = false;
            }
            return;
        }

        if self.search_point_at(event.pos).is_some() {
            return;
        }
        if event.timestamp_ms >= self.down_time_ms + self.settings.click_delay_ms {
            return;
        }
        if event.pos != self.down_pos {
            return;
        }

        if let Some(id) = self.selection.point()
            && let Some(previous) = self.spline.point_mut(id)
        {
            previous.highlighted = false;
        }

        if self.spline.len() < self.settings.max_points {
            if let Some(id) = self.spline.add_point(event.pos) {
                tracing::info!("created point {:?} at ({}, {})", id, event.pos.x, event.pos.y);
                self.selection.select_point(id);
                if let Some(point) = self.spline.point_mut(id) {
                    point.highlighted = true;
                }
            }
        } else {
            self.selection.clear();
        }
    }

    /// Drop the highlight and gesture flags of the selected point
    fn reset_selected_point_flags(&mut self) {
        if let Some(id) = self.selection.point()
            && let Some(point) = self.spline.point_mut(id)
        {
            point.highlighted = false;
            point.moved = false;
        }
    }
}
