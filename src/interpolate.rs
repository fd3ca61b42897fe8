//! Integer per-channel color blending.

use crate::color::Color;

/// Blends `from` towards `to` at `step` out of `total_steps`.
///
/// Red, green and blue are interpolated linearly and rounded to the nearest integer.
/// Alpha comes from `from`, except that a fully transparent source is forced opaque so an
/// alpha-less palette entry never produces an invisible border.
///
/// `step == 0` returns `from` and `step >= total_steps` returns `to`, both exactly.
pub fn blend(from: Color, to: Color, step: u32, total_steps: u32) -> Color {
    if step == 0 {
        return from;
    }
    if step >= total_steps {
        return to;
    }

    let alpha = match from.alpha() {
        0 => 0xFF,
        alpha => alpha,
    };

    Color::from_argb(
        alpha,
        blend_channel(from.red(), to.red(), step, total_steps),
        blend_channel(from.green(), to.green(), step, total_steps),
        blend_channel(from.blue(), to.blue(), step, total_steps),
    )
}

/// Rounds `from + (to - from) * step / total` half-up using only integer math.
///
/// Requires `0 < step < total`.
#[inline]
fn blend_channel(from: u8, to: u8, step: u32, total: u32) -> u8 {
    let from = i64::from(from);
    let delta = i64::from(to) - from;
    let (step, total) = (i64::from(step), i64::from(total));

    // floor(x + 1/2) with x = from + delta * step / total, scaled by 2 * total
    let numerator = 2 * (from * total + delta * step) + total;
    numerator.div_euclid(2 * total).clamp(0, 255) as u8
}
