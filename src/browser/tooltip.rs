// SPDX-License-Identifier: PMPL-1.0-or-later

//! Hover tooltip for entry controls.

use crate::types::Target;
use serde::{Deserialize, Serialize};

/// Distance between the pointer and the tooltip's top-left corner.
pub const POINTER_OFFSET: (f32, f32) = (12.0, 12.0);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tooltip {
    hovered: Option<Target>,
    text: String,
    position: (f32, f32),
}

impl Tooltip {
    /// Pointer entered an entry control whose tip is `text`.
    pub fn enter(&mut self, target: Target, text: impl Into<String>, pointer: (f32, f32)) {
        self.hovered = Some(target);
        self.text = text.into();
        self.track(pointer);
    }

    /// Pointer moved; ignored while hidden.
    pub fn track(&mut self, pointer: (f32, f32)) {
        if self.hovered.is_some() {
            self.position = (pointer.0 + POINTER_OFFSET.0, pointer.1 + POINTER_OFFSET.1);
        }
    }

    pub fn leave(&mut self) {
        self.hovered = None;
        self.text.clear();
    }

    pub fn is_visible(&self) -> bool {
        self.hovered.is_some()
    }

    pub fn hovered(&self) -> Option<&Target> {
        self.hovered.as_ref()
    }

    pub fn text(&self) -> Option<&str> {
        self.hovered.as_ref().map(|_| self.text.as_str())
    }

    pub fn position(&self) -> Option<(f32, f32)> {
        self.hovered.as_ref().map(|_| self.position)
    }
}
