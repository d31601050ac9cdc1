use glam::Vec4;

use crate::error::VizError;

/// Parse a `#rrggbb` color picker value into normalized RGBA. Alpha is always 1.
pub fn hex_to_rgba(hex: &str) -> Result<Vec4, VizError> {
    let digits = hex
        .strip_prefix('#')
        .filter(|d| d.len() == 6 && d.bytes().all(|b| b.is_ascii_hexdigit()))
        .ok_or_else(|| VizError::InvalidColor(hex.to_owned()))?;

    let mut rgb = [0.0f32; 3];
    for (i, channel) in rgb.iter_mut().enumerate() {
        let byte = u8::from_str_radix(&digits[i * 2..i * 2 + 2], 16)
            .map_err(|_| VizError::InvalidColor(hex.to_owned()))?;
        *channel = byte as f32 / 255.0;
    }
    Ok(Vec4::new(rgb[0], rgb[1], rgb[2], 1.0))
}

/// Position on a hue wheel for `percent` around the ring, rotated by `phase` radians.
pub fn hue(percent: f32, phase: f32) -> Vec4 {
    use std::f32::consts::{PI, TAU};
    let a = TAU * percent + phase;
    Vec4::new(
        0.5 + 0.5 * a.sin(),
        0.5 + 0.5 * (a + 2.0 * PI / 3.0).sin(),
        0.5 + 0.5 * (a + 4.0 * PI / 3.0).sin(),
        1.0,
    )
}
