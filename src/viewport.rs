//! Pan/zoom transform between screen and document space.
//!
//! The viewport is per-session transient state; it is never part of the
//! persisted document.

use egui::{Pos2, Vec2};

pub const MIN_SCALE: f32 = 0.1;
pub const MAX_SCALE: f32 = 5.0;

/// Multiplicative step per wheel notch.
pub const WHEEL_ZOOM_FACTOR: f32 = 1.05;
/// Multiplicative step for the toolbar zoom buttons.
pub const BUTTON_ZOOM_FACTOR: f32 = 1.2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub scale: f32,
    pub offset: Vec2,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            scale: 1.0,
            offset: Vec2::ZERO,
        }
    }
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen_to_doc(&self, screen: Pos2) -> Pos2 {
        Pos2::new(
            (screen.x - self.offset.x) / self.scale,
            (screen.y - self.offset.y) / self.scale,
        )
    }

    pub fn doc_to_screen(&self, doc: Pos2) -> Pos2 {
        Pos2::new(
            doc.x * self.scale + self.offset.x,
            doc.y * self.scale + self.offset.y,
        )
    }

    /// Wheel zoom toward the pointer: the document point under the cursor
    /// stays under the cursor. A positive `delta_y` (scroll down) zooms out.
    pub fn wheel_zoom(&mut self, pointer: Pos2, delta_y: f32) {
        let factor = if delta_y > 0.0 {
            1.0 / WHEEL_ZOOM_FACTOR
        } else {
            WHEEL_ZOOM_FACTOR
        };
        self.zoom_about(pointer, self.scale * factor);
    }

    /// Set an absolute scale while keeping the document point currently at
    /// `anchor` (screen space) fixed on screen.
    pub fn zoom_about(&mut self, anchor: Pos2, new_scale: f32) {
        let doc_point = self.screen_to_doc(anchor);
        self.scale = new_scale.clamp(MIN_SCALE, MAX_SCALE);
        self.offset = Vec2::new(
            anchor.x - doc_point.x * self.scale,
            anchor.y - doc_point.y * self.scale,
        );
    }

    /// Toolbar zoom-in; scales about the screen origin like the original
    /// buttons, so the offset is left alone.
    pub fn zoom_in_step(&mut self) {
        self.scale = (self.scale * BUTTON_ZOOM_FACTOR).clamp(MIN_SCALE, MAX_SCALE);
    }

    pub fn zoom_out_step(&mut self) {
        self.scale = (self.scale / BUTTON_ZOOM_FACTOR).clamp(MIN_SCALE, MAX_SCALE);
    }

    pub fn pan(&mut self, delta: Vec2) {
        self.offset += delta;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_identity(&self) -> bool {
        self.scale == 1.0 && self.offset == Vec2::ZERO
    }
}

/// Two-finger pinch state: zoom toward the finger midpoint combined with a
/// pan by the midpoint's movement between frames.
#[derive(Debug, Default)]
pub struct PinchTracker {
    last_center: Option<Pos2>,
    last_distance: f32,
}

impl PinchTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the current two touch points (screen space). The first frame of
    /// a gesture only seeds the tracker.
    pub fn update(&mut self, viewport: &mut Viewport, p1: Pos2, p2: Pos2) {
        let center = Pos2::new((p1.x + p2.x) / 2.0, (p1.y + p2.y) / 2.0);
        let distance = (p2 - p1).length();

        let Some(last_center) = self.last_center else {
            self.last_center = Some(center);
            self.last_distance = distance;
            return;
        };
        if self.last_distance <= 0.0 {
            self.last_center = Some(center);
            self.last_distance = distance;
            return;
        }

        let doc_point = viewport.screen_to_doc(center);
        let new_scale =
            (viewport.scale * distance / self.last_distance).clamp(MIN_SCALE, MAX_SCALE);
        let center_delta = center - last_center;

        viewport.scale = new_scale;
        viewport.offset = Vec2::new(
            center.x - doc_point.x * new_scale + center_delta.x,
            center.y - doc_point.y * new_scale + center_delta.y,
        );

        self.last_center = Some(center);
        self.last_distance = distance;
    }

    /// Fingers lifted; the next update seeds a fresh gesture.
    pub fn end(&mut self) {
        self.last_center = None;
        self.last_distance = 0.0;
    }
}
