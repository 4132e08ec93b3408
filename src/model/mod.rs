// Copyright 2026 the Beziertool Authors
// SPDX-License-Identifier: Apache-2.0

//! Core model types

pub mod entity_id;

pub use entity_id::EntityId;
