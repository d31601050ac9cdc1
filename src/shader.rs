//! Shader assets and a CPU evaluation of the blob fragment shader.
//!
//! The GLSL lives in `static/shaders/` so it ships with the site as-is; the
//! same files are embedded here and specialised per [`Modes`] with `#define`s.
//! The functions below mirror the fragment shader line for line, which lets
//! the ring geometry be checked without a GPU.

use glam::{Vec2, Vec4};

use crate::color::hue;
use crate::config::{Background, BlendMode, Modes, SizeMode};
use crate::field::{BlobFieldParameters, MAX_BLOBS, MIN_BLOB_RADIUS};

/// Bumped whenever the uniform interface of the shader files changes.
pub const SHADER_ASSET_VERSION: u32 = 1;

const GLSL_VERSION: &str = "#version 300 es\n";
const QUAD_VERT: &str = include_str!("../static/shaders/quad.vert");
const BLOBS_FRAG: &str = include_str!("../static/shaders/blobs.frag");

/// Quad covering NDC as a 4-vertex triangle strip.
pub const QUAD_VERTICES: [f32; 8] = [
    1.0, 1.0, //
    -1.0, 1.0, //
    1.0, -1.0, //
    -1.0, -1.0,
];

/// Attribute the vertex stage reads the quad from.
pub const POSITION_ATTRIBUTE: &str = "a_position";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderAssets {
    pub version: u32,
    pub vertex: String,
    pub fragment: String,
}

impl ShaderAssets {
    /// Assemble both stages for the given modes.
    pub fn load(modes: &Modes) -> Self {
        let mut defines = String::new();
        if modes.blend == BlendMode::Hue {
            defines.push_str("#define BLEND_HUE\n");
        }
        if modes.size == SizeMode::Accumulated {
            defines.push_str("#define SIZE_ACCUMULATED\n");
        }
        if modes.background == Background::Dark {
            defines.push_str("#define BACKGROUND_DARK\n");
        }

        Self {
            version: SHADER_ASSET_VERSION,
            vertex: format!("{GLSL_VERSION}{QUAD_VERT}"),
            fragment: format!("{GLSL_VERSION}{defines}{BLOBS_FRAG}"),
        }
    }
}

/// Angular position of blob `i` around the ring, in revolutions.
pub fn blob_percent(p: &BlobFieldParameters, i: u32) -> f32 {
    i as f32 / p.blob_count() as f32 + p.time * p.spin_speed
}

pub fn blob_center(p: &BlobFieldParameters, i: u32) -> Vec2 {
    let a = std::f32::consts::TAU * blob_percent(p, i);
    p.center + Vec2::new(a.cos(), a.sin()) * p.outer_radius
}

fn wave(percent: f32, phase: f32) -> f32 {
    ((std::f32::consts::TAU * percent + phase).cos() + 1.0) / 2.0
}

pub fn blob_radius(p: &BlobFieldParameters, modes: &Modes, i: u32) -> f32 {
    let percent = blob_percent(p, i);
    let w = match modes.size {
        SizeMode::Travelling => wave(percent, 2.0 * p.time),
        SizeMode::Accumulated => (std::f32::consts::PI * percent + p.size_phase).cos().abs(),
    };
    let (min, max) = (p.radius_range.x, p.radius_range.y);
    (min + (max - min) * w).max(MIN_BLOB_RADIUS)
}

pub fn blob_color(p: &BlobFieldParameters, modes: &Modes, percent: f32) -> Vec4 {
    match modes.blend {
        BlendMode::TwoColor => p.color_a.lerp(p.color_b, wave(percent, -2.0 * p.time)),
        BlendMode::Hue => hue(percent, p.color_mod),
    }
}

/// Indices of the blobs whose disc contains `frag`, in shader loop order.
pub fn blobs_covering(p: &BlobFieldParameters, modes: &Modes, frag: Vec2) -> Vec<u32> {
    (0..MAX_BLOBS)
        .take_while(|&i| i < p.blob_count())
        .filter(|&i| frag.distance(blob_center(p, i)) < blob_radius(p, modes, i))
        .collect()
}

/// Color of the pixel at `frag` (window coordinates).
pub fn shade(p: &BlobFieldParameters, modes: &Modes, frag: Vec2) -> Vec4 {
    let background = modes.background.color();
    let mut color = background;

    for i in blobs_covering(p, modes, frag) {
        let r = blob_radius(p, modes, i);
        let d = frag.distance(blob_center(p, i));
        let faded = blob_color(p, modes, blob_percent(p, i)).lerp(background, d / r);
        color = match modes.background {
            Background::Light => color * faded,
            Background::Dark => Vec4::ONE - (Vec4::ONE - color) * (Vec4::ONE - faded),
        };
    }
    color
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Variant;

    #[test]
    fn defines_follow_modes() {
        let duo = ShaderAssets::load(&Variant::Duo.modes());
        assert!(duo.fragment.starts_with("#version 300 es\n"));
        assert!(!duo.fragment.lines().any(|l| l.starts_with("#define ")));

        let clicker = ShaderAssets::load(&Variant::Clicker.modes());
        for define in ["BLEND_HUE", "SIZE_ACCUMULATED", "BACKGROUND_DARK"] {
            assert!(clicker.fragment.contains(&format!("#define {define}\n")));
        }
        assert!(clicker.vertex.starts_with("#version 300 es\n"));
        assert_eq!(clicker.version, SHADER_ASSET_VERSION);
    }

    #[test]
    fn shader_declares_every_uniform() {
        let assets = ShaderAssets::load(&Variant::Duo.modes());
        for u in crate::bridge::Uniform::ALL {
            assert!(
                assets.fragment.contains(&format!(" {};", u.name())),
                "{} missing from fragment shader",
                u.name()
            );
        }
        assert!(assets.vertex.contains(POSITION_ATTRIBUTE));
    }
}
