//! Border styles and the UI sink they are published to.

use crate::color::Color;

/// Direction of a two-color border gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GradientDirection {
    /// `color1` at the top-left corner, `color2` at the bottom-right.
    #[default]
    TopLeftToBottomRight,

    /// `color1` at the top-right corner, `color2` at the bottom-left.
    TopRightToBottomLeft,
}

/// How a border is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BorderStyle {
    /// Single flat color.
    Solid(Color),

    /// Single color with a soft glow.
    Glow(Color),

    /// Two-color gradient.
    Gradient {
        color1: Color,
        color2: Color,
        direction: GradientDirection,
    },
}

impl BorderStyle {
    /// Top-left to bottom-right gradient, the only direction the animation emits.
    #[inline]
    pub const fn diagonal_gradient(color1: Color, color2: Color) -> Self {
        BorderStyle::Gradient {
            color1,
            color2,
            direction: GradientDirection::TopLeftToBottomRight,
        }
    }

    /// True when every color of the style is fully transparent.
    pub const fn is_transparent(&self) -> bool {
        match self {
            BorderStyle::Solid(color) | BorderStyle::Glow(color) => color.alpha() == 0,
            BorderStyle::Gradient { color1, color2, .. } => {
                color1.alpha() == 0 && color2.alpha() == 0
            }
        }
    }
}

impl Default for BorderStyle {
    fn default() -> Self {
        BorderStyle::Solid(Color(0xFFE1_E3E4))
    }
}

/// Whether a border is drawn above or below its window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BorderOrder {
    #[default]
    Above,
    Below,
}

/// Corner shape of a border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CornerStyle {
    #[default]
    Round,
    Square,
    /// Rounded with the same radius inside and out.
    Uniform,
}

/// Trait for the component that repaints window borders.
///
/// Implement this for your windowing layer. Both methods are only ever called from the
/// single consumer thread draining published frames, never from the tick thread.
pub trait BorderSink {
    /// Replaces the style used for the active window's border.
    fn apply_active_style(&mut self, style: BorderStyle);

    /// Repaints the border of whichever window is currently active.
    fn update_active(&mut self);
}

impl<S: BorderSink + ?Sized> BorderSink for &mut S {
    fn apply_active_style(&mut self, style: BorderStyle) {
        (**self).apply_active_style(style);
    }

    fn update_active(&mut self) {
        (**self).update_active();
    }
}
