// Copyright 2026 the Beziertool Authors
// SPDX-License-Identifier: Apache-2.0

//! The spline - a bounded, ordered chain of anchor points, and its sampler.
//!
//! Points live in an arena `Vec` and chain together through `previous`/`next`
//! [`EntityId`] links; `head` and `tail` name the ends. Growth is append-only
//! (new points always become the tail), removal may happen anywhere. Each
//! consecutive pair of points spans one cubic Bezier segment whose inner
//! control points are the first point's right handle and the second point's
//! left handle. [`Spline::sample`] flattens the whole chain into a
//! [`SampledPath`] polyline for rendering and measurement.

pub mod point;
pub mod sampled_path;

pub use point::{AnchorPoint, Handle, HandleSide};
pub use sampled_path::{SamplePosition, SampledPath};

use crate::model::EntityId;
use crate::settings::Settings;
use kurbo::Point;

/// Binomial coefficients of the degree-3 Bernstein basis
const BERNSTEIN_BINOMIALS: [f64; 4] = [1.0, 3.0, 3.0, 1.0];

/// A bounded chain of anchor points forming a piecewise cubic Bezier curve
#[derive(Debug, Clone)]
pub struct Spline {
    /// Arena of live points; chain order is maintained by the id links
    points: Vec<AnchorPoint>,
    head: Option<EntityId>,
    tail: Option<EntityId>,
    /// Capacity; adds past it are ignored
    max_points: usize,
    /// Parameter step used by `sample`
    curve_resolution: f64,
}

impl Spline {
    /// Create an empty spline with the capacity and sampling resolution
    /// fixed from `settings`
    pub fn new(settings: &Settings) -> Self {
        Self {
            points: Vec::new(),
            head: None,
            tail: None,
            max_points: settings.max_points,
            curve_resolution: settings.curve_resolution,
        }
    }

    /// Number of anchor points on the spline
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The first point of the chain, if any
    pub fn head(&self) -> Option<&AnchorPoint> {
        self.head.and_then(|id| self.point(id))
    }

    /// The last point of the chain, if any
    pub fn tail(&self) -> Option<&AnchorPoint> {
        self.tail.and_then(|id| self.point(id))
    }

    /// Look up a point by id
    pub fn point(&self, id: EntityId) -> Option<&AnchorPoint> {
        self.points.iter().find(|p| p.id == id)
    }

    /// Look up a point by id, mutably
    pub fn point_mut(&mut self, id: EntityId) -> Option<&mut AnchorPoint> {
        self.points.iter_mut().find(|p| p.id == id)
    }

    /// Iterate points in chain order, head to tail
    pub fn iter(&self) -> PointIter<'_> {
        PointIter {
            spline: self,
            cursor: self.head,
        }
    }

    /// Append a new point at the tail.
    ///
    /// Returns the new point's id, or `None` when the spline is already at
    /// capacity (the add is ignored).
    pub fn add_point(&mut self, pos: Point) -> Option<EntityId> {
        if self.points.len() >= self.max_points {
            tracing::debug!("spline at capacity ({}), ignoring add", self.max_points);
            return None;
        }

        let mut point = AnchorPoint::new(pos);
        let id = point.id;
        point.previous = self.tail;

        if let Some(tail_id) = self.tail
            && let Some(old_tail) = self.point_mut(tail_id)
        {
            old_tail.next = Some(id);
        }
        if self.head.is_none() {
            self.head = Some(id);
        }
        self.tail = Some(id);
        self.points.push(point);

        tracing::debug!("added point {:?} at ({}, {})", id, pos.x, pos.y);
        Some(id)
    }

    /// Remove the first point (in chain order) whose position equals `pos`
    /// exactly. Absent positions are a no-op.
    pub fn remove_point(&mut self, pos: Point) {
        let mut cursor = self.head;
        while let Some(id) = cursor {
            let Some(found) = self.point(id) else { break };
            if found.point == pos {
                self.unlink(found.previous, found.next);
                self.points.retain(|p| p.id != id);
                tracing::debug!("removed point {:?} at ({}, {})", id, pos.x, pos.y);
                return;
            }
            cursor = found.next;
        }
    }

    /// Relink the chain around a point about to be removed
    fn unlink(&mut self, previous: Option<EntityId>, next: Option<EntityId>) {
        match (previous, next) {
            (Some(prev_id), Some(next_id)) => {
                if let Some(prev) = self.point_mut(prev_id) {
                    prev.next = Some(next_id);
                }
                if let Some(next) = self.point_mut(next_id) {
                    next.previous = Some(prev_id);
                }
            }
            (Some(prev_id), None) => {
                self.tail = Some(prev_id);
                if let Some(prev) = self.point_mut(prev_id) {
                    prev.next = None;
                }
            }
            (None, Some(next_id)) => {
                self.head = Some(next_id);
                if let Some(next) = self.point_mut(next_id) {
                    next.previous = None;
                    // The new head's left handle must not trail the removed
                    // predecessor; pin it onto the head itself.
                    next.left_handle.point = next.point;
                }
            }
            (None, None) => {
                self.head = None;
                self.tail = None;
            }
        }
    }

    /// Move a point (and, with it, both its handles) to `pos`.
    /// Unknown ids are a no-op.
    pub fn move_point(&mut self, id: EntityId, pos: Point) {
        if let Some(point) = self.point_mut(id) {
            point.move_to(pos);
        }
    }

    /// Flatten the spline into a polyline.
    ///
    /// Each segment start is emitted at the anchor's exact position, tagged
    /// with its id; the segment interior is walked at the configured
    /// resolution; the final position is the tail's exact position rather
    /// than a floating-point evaluation at t = 1. A spline with fewer than
    /// two points produces an empty path.
    pub fn sample(&self) -> SampledPath {
        let mut path = SampledPath::new();
        if self.len() < 2 {
            return path;
        }

        let mut cursor = self.head;
        while let Some(id) = cursor {
            let Some(current) = self.point(id) else { break };
            let Some(next) = current.next.and_then(|n| self.point(n)) else {
                break;
            };
            path.append(SamplePosition::anchored(current.point, current.id));
            self.sample_segment(current, next, &mut path);
            cursor = current.next;
        }

        if let Some(tail) = self.tail() {
            path.append_xy(tail.point.x, tail.point.y);
        }
        path
    }

    /// Walk one cubic segment from t = resolution up to and including 1.0.
    /// t = 0 is skipped; the segment start has already been emitted.
    fn sample_segment(&self, start: &AnchorPoint, end: &AnchorPoint, path: &mut SampledPath) {
        let control = [
            start.point,
            start.right_handle.point,
            end.left_handle.point,
            end.point,
        ];
        let mut t = self.curve_resolution;
        while t <= 1.0 {
            let m = 1.0 - t;
            let mut x = 0.0;
            let mut y = 0.0;
            for (i, cp) in control.iter().enumerate() {
                let factor = BERNSTEIN_BINOMIALS[i] * t.powi(i as i32) * m.powi((3 - i) as i32);
                x += factor * cp.x;
                y += factor * cp.y;
            }
            path.append_xy(x, y);
            t += self.curve_resolution;
        }
    }
}

/// Chain-order iterator over a spline's points
pub struct PointIter<'a> {
    spline: &'a Spline,
    cursor: Option<EntityId>,
}

impl<'a> Iterator for PointIter<'a> {
    type Item = &'a AnchorPoint;

    fn next(&mut self) -> Option<Self::Item> {
        let point = self.spline.point(self.cursor?)?;
        self.cursor = point.next;
        Some(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spline_with_resolution(resolution: f64) -> Spline {
        let settings = Settings {
            curve_resolution: resolution,
            ..Settings::default()
        };
        Spline::new(&settings)
    }

    fn spline() -> Spline {
        Spline::new(&Settings::default())
    }

    #[test]
    fn add_tracks_len_head_and_tail() {
        let mut spline = spline();
        let a = spline.add_point(Point::new(0.0, 0.0)).unwrap();
        let b = spline.add_point(Point::new(10.0, 0.0)).unwrap();
        let c = spline.add_point(Point::new(20.0, 0.0)).unwrap();

        assert_eq!(spline.len(), 3);
        assert_eq!(spline.head().unwrap().id, a);
        assert_eq!(spline.tail().unwrap().id, c);
        assert_eq!(spline.point(a).unwrap().next, Some(b));
        assert_eq!(spline.point(b).unwrap().previous, Some(a));
        assert_eq!(spline.point(b).unwrap().next, Some(c));
        assert_eq!(spline.point(c).unwrap().previous, Some(b));
    }

    #[test]
    fn add_past_capacity_is_a_noop() {
        let settings = Settings {
            max_points: 2,
            ..Settings::default()
        };
        let mut spline = Spline::new(&settings);
        let a = spline.add_point(Point::new(0.0, 0.0)).unwrap();
        let b = spline.add_point(Point::new(10.0, 0.0)).unwrap();

        assert!(spline.add_point(Point::new(20.0, 0.0)).is_none());
        assert_eq!(spline.len(), 2);
        assert_eq!(spline.head().unwrap().id, a);
        assert_eq!(spline.tail().unwrap().id, b);
        assert_eq!(spline.point(b).unwrap().next, None);
    }

    #[test]
    fn remove_middle_point_splices_neighbors() {
        let mut spline = spline();
        let a = spline.add_point(Point::new(0.0, 0.0)).unwrap();
        spline.add_point(Point::new(10.0, 0.0)).unwrap();
        let c = spline.add_point(Point::new(20.0, 0.0)).unwrap();

        spline.remove_point(Point::new(10.0, 0.0));

        assert_eq!(spline.len(), 2);
        assert_eq!(spline.point(a).unwrap().next, Some(c));
        assert_eq!(spline.point(c).unwrap().previous, Some(a));
    }

    #[test]
    fn remove_tail_retargets_tail() {
        let mut spline = spline();
        let a = spline.add_point(Point::new(0.0, 0.0)).unwrap();
        spline.add_point(Point::new(10.0, 0.0)).unwrap();

        spline.remove_point(Point::new(10.0, 0.0));

        assert_eq!(spline.len(), 1);
        assert_eq!(spline.tail().unwrap().id, a);
        assert_eq!(spline.point(a).unwrap().next, None);
    }

    #[test]
    fn remove_head_snaps_new_heads_left_handle() {
        let mut spline = spline();
        spline.add_point(Point::new(0.0, 0.0)).unwrap();
        let b = spline.add_point(Point::new(10.0, 20.0)).unwrap();

        // Give the second point a trailing tangent, then remove the head.
        spline.point_mut(b).unwrap().left_handle.point = Point::new(-5.0, -5.0);
        spline.remove_point(Point::new(0.0, 0.0));

        let head = spline.head().unwrap();
        assert_eq!(head.id, b);
        assert_eq!(head.previous, None);
        assert_eq!(head.left_handle.point, Point::new(10.0, 20.0));
        assert_eq!(head.left_handle.point, head.point);
    }

    #[test]
    fn remove_sole_point_empties_the_spline() {
        let mut spline = spline();
        spline.add_point(Point::new(5.0, 5.0)).unwrap();

        spline.remove_point(Point::new(5.0, 5.0));

        assert_eq!(spline.len(), 0);
        assert!(spline.head().is_none());
        assert!(spline.tail().is_none());
    }

    #[test]
    fn remove_absent_position_is_a_noop() {
        let mut spline = spline();
        spline.add_point(Point::new(0.0, 0.0)).unwrap();

        spline.remove_point(Point::new(99.0, 99.0));

        assert_eq!(spline.len(), 1);
    }

    #[test]
    fn remove_matches_by_position_not_identity() {
        let mut spline = spline();
        spline.add_point(Point::new(0.0, 0.0)).unwrap();
        let b = spline.add_point(Point::new(10.0, 0.0)).unwrap();

        // Move the second point onto the first's old spot, then remove by
        // that position: the scan from the head removes the first match.
        spline.move_point(b, Point::new(0.0, 0.0));
        spline.remove_point(Point::new(0.0, 0.0));

        assert_eq!(spline.len(), 1);
        assert_eq!(spline.head().unwrap().id, b);
    }

    #[test]
    fn sample_is_empty_below_two_points() {
        let mut spline = spline();
        assert!(spline.sample().is_empty());

        spline.add_point(Point::new(0.0, 0.0)).unwrap();
        assert!(spline.sample().is_empty());
    }

    #[test]
    fn sample_endpoints_are_exact() {
        let mut spline = spline();
        let a = spline.add_point(Point::new(100.0, 100.0)).unwrap();
        spline.add_point(Point::new(200.0, 100.0)).unwrap();

        let path = spline.sample();
        assert!(path.len() >= 2);

        let first = path.first().unwrap();
        assert_eq!(first.point, Point::new(100.0, 100.0));
        assert_eq!(first.anchor, Some(a));

        let last = path.last().unwrap();
        assert_eq!(last.point, Point::new(200.0, 100.0));
        assert_eq!(last.anchor, None);
    }

    #[test]
    fn sample_count_matches_resolution() {
        // With a step of 0.25 each segment walks t = 0.25, 0.5, 0.75, 1.0
        // (0.25 is exact in binary), so one segment yields the anchor, four
        // interior samples, and the exact tail.
        let mut spline = spline_with_resolution(0.25);
        spline.add_point(Point::new(0.0, 0.0)).unwrap();
        spline.add_point(Point::new(8.0, 0.0)).unwrap();

        assert_eq!(spline.sample().len(), 6);
    }

    #[test]
    fn sample_tags_every_segment_start() {
        let mut spline = spline_with_resolution(0.5);
        let a = spline.add_point(Point::new(0.0, 0.0)).unwrap();
        let b = spline.add_point(Point::new(10.0, 0.0)).unwrap();
        spline.add_point(Point::new(20.0, 0.0)).unwrap();

        let path = spline.sample();
        let tags: Vec<EntityId> = path.iter().filter_map(|s| s.anchor).collect();
        assert_eq!(tags, vec![a, b]);
    }

    #[test]
    fn straight_segment_samples_lie_on_the_chord() {
        // Handles sit on their owners, so the cubic degenerates to the
        // straight chord between the two anchors.
        let mut spline = spline_with_resolution(0.25);
        spline.add_point(Point::new(0.0, 0.0)).unwrap();
        spline.add_point(Point::new(100.0, 0.0)).unwrap();

        let path = spline.sample();
        for sample in path.iter() {
            assert_eq!(sample.point.y, 0.0);
            assert!(sample.point.x >= 0.0 && sample.point.x <= 100.0);
        }
    }

    #[test]
    fn move_point_translates_handles_with_it() {
        let mut spline = spline();
        let a = spline.add_point(Point::new(10.0, 10.0)).unwrap();
        spline.point_mut(a).unwrap().right_handle.point = Point::new(30.0, 10.0);

        spline.move_point(a, Point::new(15.0, 20.0));

        let point = spline.point(a).unwrap();
        assert_eq!(point.point, Point::new(15.0, 20.0));
        assert_eq!(point.left_handle.point, Point::new(15.0, 20.0));
        assert_eq!(point.right_handle.point, Point::new(35.0, 20.0));
    }

    #[test]
    fn iter_walks_chain_order() {
        let mut spline = spline();
        let ids: Vec<EntityId> = (0..4)
            .map(|i| spline.add_point(Point::new(i as f64 * 10.0, 0.0)).unwrap())
            .collect();
        spline.remove_point(Point::new(10.0, 0.0));

        let walked: Vec<EntityId> = spline.iter().map(|p| p.id).collect();
        assert_eq!(walked, vec![ids[0], ids[2], ids[3]]);
    }
}
