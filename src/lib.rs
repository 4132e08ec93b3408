// Copyright 2026 the Beziertool Authors
// SPDX-License-Identifier: Apache-2.0

//! Beziertool: the editing core of an interactive cubic Bezier spline editor.
//!
//! A spline is a bounded chain of anchor points; each consecutive pair spans
//! one cubic segment controlled by the pair's tangent handles. This crate
//! owns the data structure ([`Spline`]), the sampling that flattens it into a
//! renderable polyline ([`SampledPath`]), and the pointer-driven state
//! machine that turns raw input into edits ([`EditSession`]). Drawing and
//! frame scheduling belong to the embedding renderer, which pulls
//! [`EditSession::frame_state`] each tick and never mutates core state.

pub mod editing;
pub mod model;
pub mod settings;
pub mod spline;

pub use editing::{EditKey, EditSession, FrameState, Modifiers, PointerEvent, Selection};
pub use model::EntityId;
pub use settings::{Settings, SettingsError};
pub use spline::{AnchorPoint, Handle, HandleSide, SamplePosition, SampledPath, Spline};
