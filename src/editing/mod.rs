// Copyright 2026 the Beziertool Authors
// SPDX-License-Identifier: Apache-2.0

//! Editing model and interaction

pub mod mouse;
pub mod selection;
pub mod session;

pub use mouse::{EditKey, Modifiers, PointerEvent};
pub use selection::Selection;
pub use session::{EditSession, FrameState};
