// Copyright 2026 the Beziertool Authors
// SPDX-License-Identifier: Apache-2.0

//! Edit session - owns the spline and interprets input into edits.
//!
//! All mutation happens synchronously inside the event handlers in the
//! `pointer` and `keyboard` submodules, so a frame rendered between events
//! always observes a consistent post-edit snapshot. The session never
//! schedules frames itself: the embedding render loop pulls
//! [`EditSession::frame_state`] each tick and polls the refresh flag to know
//! whether to keep ticking.

mod hit_testing;
mod keyboard;
mod pointer;

use crate::editing::selection::Selection;
use crate::settings::Settings;
use crate::spline::{AnchorPoint, SampledPath, Spline};
use kurbo::Point;

/// Everything the renderer needs to draw one frame
#[derive(Debug)]
pub struct FrameState<'a> {
    /// Anchor points in chain order
    pub points: Vec<&'a AnchorPoint>,
    /// The selected point, whose tangent handles are drawn
    pub selected: Option<&'a AnchorPoint>,
    /// The flattened curve polyline
    pub path: SampledPath,
}

/// Editing session for a single spline
#[derive(Debug, Clone)]
pub struct EditSession {
    /// The spline being edited
    pub spline: Spline,
    /// Currently selected point and handle
    pub selection: Selection,
    /// Policy knobs fixed at construction
    settings: Settings,
    /// Whether a pointer button is currently held
    pointer_held: bool,
    /// Timestamp of the last pointer press
    down_time_ms: u64,
    /// Position of the last pointer press
    down_pos: Point,
    /// Most recent pointer position seen by any handler
    last_pos: Point,
    /// Whether the external scheduler should keep ticking frames
    refresh_active: bool,
}

impl EditSession {
    /// Create an empty session
    pub fn new(settings: Settings) -> Self {
        Self {
            spline: Spline::new(&settings),
            selection: Selection::new(),
            settings,
            pointer_held: false,
            down_time_ms: 0,
            down_pos: Point::ZERO,
            last_pos: Point::ZERO,
            refresh_active: true,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Snapshot the state the renderer draws from
    pub fn frame_state(&self) -> FrameState<'_> {
        FrameState {
            points: self.spline.iter().collect(),
            selected: self.selection.point().and_then(|id| self.spline.point(id)),
            path: self.spline.sample(),
        }
    }

    /// Last pointer position seen, for cursor-tracking overlays
    pub fn last_pointer_position(&self) -> Point {
        self.last_pos
    }

    /// Whether continuous redraw is requested
    pub fn refresh_activated(&self) -> bool {
        self.refresh_active
    }

    /// Ask the external scheduler to keep ticking (`true`) or halt (`false`)
    pub fn set_refresh_activated(&mut self, active: bool) {
        self.refresh_active = active;
    }
}
