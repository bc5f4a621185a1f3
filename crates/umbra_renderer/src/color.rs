//! Mapping raw pixel colors to display values.

use umbra_math::{Color, RED};

/// Rescale so the largest channel is at most one, preserving hue.
pub fn max_to_one(c: Color) -> Color {
    let max_value = c.max_element();

    if max_value > 1.0 {
        c / max_value
    } else {
        c
    }
}

/// Replace the whole color with pure red if any channel exceeds one.
pub fn clamp_to_color(c: Color) -> Color {
    if c.x > 1.0 || c.y > 1.0 || c.z > 1.0 {
        RED
    } else {
        c
    }
}

/// Bring a raw color into gamut, then apply display gamma.
///
/// Takes the inverse gamma as cached by the view plane; 1 disables it.
pub fn tone_map(raw: Color, show_out_of_gamut: bool, inv_gamma: f32) -> Color {
    let mapped = if show_out_of_gamut {
        clamp_to_color(raw)
    } else {
        max_to_one(raw)
    };

    if inv_gamma != 1.0 {
        mapped.powf(inv_gamma)
    } else {
        mapped
    }
}

/// Quantize a mapped color to 8 bits per channel with `floor(c * 255)`.
///
/// No rounding and no dithering. Values outside `[0, 1]` and NaN saturate.
pub fn to_display(c: Color) -> [u8; 3] {
    let quantize = |v: f32| (v * 255.0).floor().clamp(0.0, 255.0) as u8;
    [quantize(c.x), quantize(c.y), quantize(c.z)]
}
