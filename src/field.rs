//! Blob field parameters and the derivations that tie them to the viewport.

use glam::{Vec2, Vec4};

use crate::config::{BlendMode, Modes, SizeMode};

/// Fixed loop bound shared with the fragment shader.
pub const MAX_BLOBS: u32 = 20;

/// Smallest radius a blob is drawn with; keeps the edge fade finite.
pub const MIN_BLOB_RADIUS: f32 = 1.0e-3;

/// Color phase drift for [`BlendMode::Hue`], radians per second.
pub const COLOR_DRIFT_RATE: f32 = 0.5;

/// Size phase drift for [`SizeMode::Accumulated`], radians per second.
pub const SIZE_PHASE_RATE: f32 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    pub fn min_side(&self) -> f32 {
        self.width.min(self.height)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// Viewport-relative sizes. `outer` is a fraction of the viewport's short
/// side; `min` and `max` are fractions of the resulting outer radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiusFractions {
    pub outer: f32,
    pub min: f32,
    pub max: f32,
}

impl Default for RadiusFractions {
    fn default() -> Self {
        Self {
            outer: 0.25,
            min: 0.15,
            max: 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlobFieldParameters {
    pub viewport: Viewport,
    pub fractions: RadiusFractions,
    pub center: Vec2,
    pub outer_radius: f32,
    /// `(min, max)` blob radius in pixels.
    pub radius_range: Vec2,
    blob_count: u32,
    pub spin_speed: f32,
    pub color_a: Vec4,
    pub color_b: Vec4,
    pub color_mod: f32,
    pub size_phase: f32,
    /// Seconds since the first frame.
    pub time: f32,
    /// Center velocity in px/s when drifting.
    drift: Option<Vec2>,
}

impl BlobFieldParameters {
    pub fn new(viewport: Viewport, fractions: RadiusFractions) -> Self {
        let mut params = Self {
            viewport,
            fractions,
            center: Vec2::ZERO,
            outer_radius: 0.0,
            radius_range: Vec2::ZERO,
            blob_count: 6,
            spin_speed: 0.2,
            color_a: Vec4::new(1.0, 0.5, 0.0, 1.0),
            color_b: Vec4::new(0.0, 0.5, 1.0, 1.0),
            color_mod: 0.0,
            size_phase: 0.0,
            time: 0.0,
            drift: None,
        };
        params.resize(viewport);
        params
    }

    pub fn blob_count(&self) -> u32 {
        self.blob_count
    }

    /// Set the blob count, clamped to `[1, MAX_BLOBS]`.
    pub fn set_blob_count(&mut self, count: u32) {
        self.blob_count = count.clamp(1, MAX_BLOBS);
    }

    /// Adopt a new viewport: recenter and recompute every derived radius.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.center = viewport.center();
        if let Some(v) = self.drift {
            self.drift = Some(drift_velocity(viewport) * v.signum());
        }
        self.recompute_radii();
    }

    pub fn recompute_radii(&mut self) {
        let f = self.fractions;
        self.outer_radius = self.viewport.min_side() * f.outer.max(0.0);
        self.radius_range = Vec2::new(
            self.outer_radius * f.min.max(0.0),
            self.outer_radius * f.max.max(0.0),
        );
    }

    pub fn set_drift(&mut self, enabled: bool) {
        self.drift = enabled.then(|| drift_velocity(self.viewport));
    }

    /// Move the time-dependent state forward to `elapsed` seconds, `dt`
    /// seconds after the previous frame.
    pub fn advance(&mut self, elapsed: f64, dt: f32, modes: &Modes) {
        use std::f32::consts::TAU;

        self.time = elapsed as f32;
        if modes.blend == BlendMode::Hue {
            self.color_mod = (self.color_mod + COLOR_DRIFT_RATE * dt) % TAU;
        }
        if modes.size == SizeMode::Accumulated {
            self.size_phase = (self.size_phase + SIZE_PHASE_RATE * dt) % TAU;
        }
        if self.drift.is_some() {
            self.step_drift(dt);
        }
    }

    fn step_drift(&mut self, dt: f32) {
        let Some(mut v) = self.drift else { return };
        // The ring plus its smallest blob must stay on screen.
        let margin = self.outer_radius + self.radius_range.x;
        let size = self.viewport.size();
        for axis in 0..2 {
            let next = self.center[axis] + v[axis] * dt;
            if next + margin > size[axis] || next < margin {
                v[axis] = -v[axis];
            } else {
                self.center[axis] = next;
            }
        }
        self.drift = Some(v);
    }
}

fn drift_velocity(viewport: Viewport) -> Vec2 {
    Vec2::new(viewport.width / 5.0, viewport.height / 7.0)
}
