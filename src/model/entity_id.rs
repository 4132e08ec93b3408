// Copyright 2026 the Beziertool Authors
// SPDX-License-Identifier: Apache-2.0

//! Unique identifiers for anchor points.
//!
//! Each `EntityId` is a monotonically increasing `u64` generated from a global
//! atomic counter. IDs link anchor points to their chain neighbors, name the
//! current selection, and label hit-test results. They are never reused within
//! a session, so deleted points leave no dangling references.

use std::sync::atomic::{AtomicU64, Ordering};

/// A unique identifier for an anchor point
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityId(u64);

static ENTITY_COUNTER: AtomicU64 = AtomicU64::new(1);

impl EntityId {
    /// Create a new unique entity ID
    pub fn next() -> Self {
        Self(ENTITY_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::next()
    }
}
