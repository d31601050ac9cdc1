//! Maps page controls and viewport changes onto shader uniforms.

use crate::color::hex_to_rgba;
use crate::error::VizError;
use crate::field::{BlobFieldParameters, Viewport};

/// Every uniform the fragment shader reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Uniform {
    Center,
    RadiusRange,
    Time,
    SpinSpeed,
    OuterRadius,
    BlobCount,
    View,
    ColorA,
    ColorB,
    ColorMod,
    SizePhase,
}

impl Uniform {
    pub const ALL: [Uniform; 11] = [
        Uniform::Center,
        Uniform::RadiusRange,
        Uniform::Time,
        Uniform::SpinSpeed,
        Uniform::OuterRadius,
        Uniform::BlobCount,
        Uniform::View,
        Uniform::ColorA,
        Uniform::ColorB,
        Uniform::ColorMod,
        Uniform::SizePhase,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Uniform::Center => "u_center",
            Uniform::RadiusRange => "u_radius_range",
            Uniform::Time => "u_time",
            Uniform::SpinSpeed => "u_spin_speed",
            Uniform::OuterRadius => "u_outer_radius",
            Uniform::BlobCount => "u_blob_count",
            Uniform::View => "u_view",
            Uniform::ColorA => "u_color_a",
            Uniform::ColorB => "u_color_b",
            Uniform::ColorMod => "u_color_mod",
            Uniform::SizePhase => "u_size_phase",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Uniforms that depend on viewport geometry.
pub const GEOMETRY_UNIFORMS: &[Uniform] = &[
    Uniform::View,
    Uniform::Center,
    Uniform::OuterRadius,
    Uniform::RadiusRange,
];

/// Uniforms that change every frame.
pub const FRAME_UNIFORMS: &[Uniform] = &[
    Uniform::Time,
    Uniform::Center,
    Uniform::ColorMod,
    Uniform::SizePhase,
];

/// The page's input elements, by DOM id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlId {
    SpinSpeed,
    ColorA,
    ColorB,
    BlobCount,
    MinRadius,
    MaxRadius,
    OuterRadius,
}

impl ControlId {
    pub const ALL: [ControlId; 7] = [
        ControlId::SpinSpeed,
        ControlId::ColorA,
        ControlId::ColorB,
        ControlId::BlobCount,
        ControlId::MinRadius,
        ControlId::MaxRadius,
        ControlId::OuterRadius,
    ];

    pub fn element_id(self) -> &'static str {
        match self {
            ControlId::SpinSpeed => "spinSpeed",
            ControlId::ColorA => "colorA",
            ControlId::ColorB => "colorB",
            ControlId::BlobCount => "blobCount",
            ControlId::MinRadius => "minRadius",
            ControlId::MaxRadius => "maxRadius",
            ControlId::OuterRadius => "outerRadius",
        }
    }
}

/// A single parsed control change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Control {
    SpinSpeed(f32),
    ColorA(glam::Vec4),
    ColorB(glam::Vec4),
    BlobCount(u32),
    MinRadiusFraction(f32),
    MaxRadiusFraction(f32),
    OuterRadiusFraction(f32),
}

impl Control {
    /// Parse the raw `value` of the input element `id`.
    pub fn parse(id: ControlId, raw: &str) -> Result<Self, VizError> {
        let invalid = || VizError::InvalidControl {
            control: id.element_id(),
            value: raw.to_owned(),
        };
        let number = || -> Result<f32, VizError> {
            raw.trim()
                .parse::<f32>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(invalid)
        };

        Ok(match id {
            ControlId::SpinSpeed => Control::SpinSpeed(number()?),
            ControlId::ColorA => Control::ColorA(hex_to_rgba(raw.trim())?),
            ControlId::ColorB => Control::ColorB(hex_to_rgba(raw.trim())?),
            // Range inputs may report "7.0"; round rather than reject.
            ControlId::BlobCount => Control::BlobCount(number()?.round().max(0.0) as u32),
            ControlId::MinRadius => Control::MinRadiusFraction(number()?.max(0.0)),
            ControlId::MaxRadius => Control::MaxRadiusFraction(number()?.max(0.0)),
            ControlId::OuterRadius => Control::OuterRadiusFraction(number()?.max(0.0)),
        })
    }
}

impl BlobFieldParameters {
    /// Apply one control change and return the uniforms that must be re-sent.
    pub fn apply(&mut self, control: Control) -> &'static [Uniform] {
        match control {
            Control::SpinSpeed(v) => {
                self.spin_speed = v;
                &[Uniform::SpinSpeed]
            }
            Control::ColorA(c) => {
                self.color_a = c;
                &[Uniform::ColorA]
            }
            Control::ColorB(c) => {
                self.color_b = c;
                &[Uniform::ColorB]
            }
            Control::BlobCount(n) => {
                self.set_blob_count(n);
                &[Uniform::BlobCount]
            }
            Control::MinRadiusFraction(f) => {
                self.fractions.min = f;
                self.recompute_radii();
                GEOMETRY_UNIFORMS
            }
            Control::MaxRadiusFraction(f) => {
                self.fractions.max = f;
                self.recompute_radii();
                GEOMETRY_UNIFORMS
            }
            Control::OuterRadiusFraction(f) => {
                self.fractions.outer = f;
                self.recompute_radii();
                GEOMETRY_UNIFORMS
            }
        }
    }

    /// Adopt a resized viewport and return the uniforms that must be re-sent.
    pub fn apply_viewport(&mut self, viewport: Viewport) -> &'static [Uniform] {
        self.resize(viewport);
        GEOMETRY_UNIFORMS
    }
}
