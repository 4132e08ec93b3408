// Copyright 2026 the Beziertool Authors
// SPDX-License-Identifier: Apache-2.0

//! Keyboard event handler

use super::EditSession;
use crate::editing::mouse::EditKey;

impl EditSession {
    /// Handle a key release
    pub fn key_up(&mut self, key: EditKey) {
        match key {
            EditKey::Delete => self.delete_selected_point(),
        }
    }

    /// Remove the selected point from the spline and clear the selection,
    /// point and handle both. No-op without a selection.
    fn delete_selected_point(&mut self) {
        let Some(id) = self.selection.point() else {
            return;
        };
        let Some(pos) = self.spline.point(id).map(|p| p.point) else {
            self.selection.clear();
            return;
        };
        tracing::info!("deleting point {:?}", id);
        self.spline.remove_point(pos);
        self.selection.clear();
    }
}
