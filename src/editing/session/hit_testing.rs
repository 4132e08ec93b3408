// Copyright 2026 the Beziertool Authors
// SPDX-License-Identifier: Apache-2.0

//! Hit testing for anchor points and tangent handles.
//!
//! Both searches walk the chain from the head and take the first hit, so
//! overlapping targets resolve to the earliest point in chain order. The hit
//! shape is an axis-aligned box of half-width `radius` around the target;
//! points use a larger radius than handles.

use super::EditSession;
use crate::model::EntityId;
use crate::spline::HandleSide;
use kurbo::Point;

impl EditSession {
    /// Find the first point (in chain order) whose hit box contains `pos`
    pub fn search_point_at(&self, pos: Point) -> Option<EntityId> {
        let radius = self.settings.point_radius;
        self.spline
            .iter()
            .find(|p| hit_box_contains(p.point, radius, pos))
            .map(|p| p.id)
    }

    /// Find the first handle whose hit box contains `pos`; each point's left
    /// handle is tested before its right
    pub fn search_handle_at(&self, pos: Point) -> Option<(EntityId, HandleSide)> {
        let radius = self.settings.handle_radius;
        for point in self.spline.iter() {
            if hit_box_contains(point.left_handle.point, radius, pos) {
                return Some((point.id, HandleSide::Left));
            }
            if hit_box_contains(point.right_handle.point, radius, pos) {
                return Some((point.id, HandleSide::Right));
            }
        }
        None
    }
}

fn hit_box_contains(center: Point, radius: f64, pos: Point) -> bool {
    pos.x <= center.x + radius
        && pos.x >= center.x - radius
        && pos.y <= center.y + radius
        && pos.y >= center.y - radius
}
