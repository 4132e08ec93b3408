// Copyright 2026 the Beziertool Authors
// SPDX-License-Identifier: Apache-2.0

//! The flattened polyline produced by sampling a spline.
//!
//! A `SampledPath` is recomputed on demand from the current spline state and
//! never stored between frames. Positions emitted exactly at a segment-start
//! anchor carry that anchor's id, so consumers can map polyline runs back to
//! the points that produced them.

use crate::model::EntityId;
use kurbo::Point;

/// One sampled position along the flattened curve
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplePosition {
    pub point: Point,
    /// Set when this sample sits exactly on an anchor point
    pub anchor: Option<EntityId>,
}

impl SamplePosition {
    /// An untagged sample
    pub fn new(point: Point) -> Self {
        Self {
            point,
            anchor: None,
        }
    }

    /// A sample sitting exactly on `anchor`
    pub fn anchored(point: Point, anchor: EntityId) -> Self {
        Self {
            point,
            anchor: Some(anchor),
        }
    }
}

/// An ordered run of sampled positions.
///
/// Rendering contract: with more than one sample, consecutive samples are
/// joined by line segments in order; with one or none there is nothing to
/// draw.
#[derive(Debug, Clone, Default)]
pub struct SampledPath {
    positions: Vec<SamplePosition>,
}

impl SampledPath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sample to the end of the path
    pub fn append(&mut self, position: SamplePosition) {
        self.positions.push(position);
    }

    /// Append an untagged sample by its coordinates
    pub fn append_xy(&mut self, x: f64, y: f64) {
        self.append(SamplePosition::new(Point::new(x, y)));
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn first(&self) -> Option<&SamplePosition> {
        self.positions.first()
    }

    pub fn last(&self) -> Option<&SamplePosition> {
        self.positions.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SamplePosition> {
        self.positions.iter()
    }

    pub fn positions(&self) -> &[SamplePosition] {
        &self.positions
    }

    /// Total Euclidean length of the polyline; 0.0 with fewer than two samples
    pub fn length(&self) -> f64 {
        self.positions
            .windows(2)
            .map(|pair| pair[0].point.distance(pair[1].point))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_path_has_zero_length() {
        assert_eq!(SampledPath::new().length(), 0.0);
    }

    #[test]
    fn single_sample_has_zero_length() {
        let mut path = SampledPath::new();
        path.append_xy(3.0, 4.0);
        assert_eq!(path.length(), 0.0);
    }

    #[test]
    fn length_sums_consecutive_distances() {
        let mut path = SampledPath::new();
        path.append_xy(0.0, 0.0);
        path.append_xy(3.0, 4.0);
        path.append_xy(3.0, 14.0);
        assert_eq!(path.length(), 15.0);
    }

    #[test]
    fn append_keeps_order_and_tags() {
        let mut path = SampledPath::new();
        let id = EntityId::next();
        path.append(SamplePosition::anchored(Point::new(1.0, 1.0), id));
        path.append_xy(2.0, 2.0);

        assert_eq!(path.len(), 2);
        assert_eq!(path.first().unwrap().anchor, Some(id));
        assert_eq!(path.last().unwrap().anchor, None);
        assert_eq!(path.last().unwrap().point, Point::new(2.0, 2.0));
    }
}
