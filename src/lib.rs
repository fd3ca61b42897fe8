#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Color`**: Packed `0xAARRGGBB` color, decoded from hex palette strings
//! - **`blend`**: Integer per-channel interpolation between two colors
//! - **`pick_pair`**: Random draw of two distinct palette indices
//! - **`AnimationState`**: Current/next color pairs, step progress and time accumulator
//! - **`GradientAnimation`**: Tick-driven state machine producing border styles
//! - **`BorderSink`**: Trait to implement for your window border renderer
//! - **`TickSource`**: Trait to implement for your frame timer (`std` only)
//! - **`GradientController`**: Starts and stops an animation from `BorderSettings` (`std` only)
//!
//! The core (everything up to `GradientAnimation`) is `no_std`. Colors are blended in 8-bit
//! integer ARGB space; convert to `palette::Srgb` with [`Color::to_srgb`] if your renderer
//! works in floating point.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod animation;
pub mod color;
pub mod interpolate;
pub mod selector;
pub mod state;
pub mod style;
pub mod time;

#[cfg(feature = "std")]
pub mod config;
#[cfg(feature = "std")]
pub mod controller;
#[cfg(feature = "std")]
pub mod publish;
#[cfg(feature = "std")]
pub mod ticker;

pub use animation::{AnimationError, GradientAnimation};
pub use color::{Color, ColorError};
pub use interpolate::blend;
pub use selector::{MAX_PALETTE_COLORS, Palette, pick_colors, pick_pair};
pub use state::{AnimationState, ColorPair};
pub use style::{BorderOrder, BorderSink, BorderStyle, CornerStyle, GradientDirection};
pub use time::{TimeDuration, TimeInstant, TimeSource};

#[cfg(feature = "std")]
pub use config::{BorderSettings, ConfigError, GradientConfig, ParseReport, UpdateMask};
#[cfg(feature = "std")]
pub use controller::{BorderAnimation, DEFAULT_STEP_DURATION, GradientController, MIN_STEP_DURATION};
#[cfg(feature = "std")]
pub use publish::{FrameConsumer, FramePublisher, publish_channel};
#[cfg(feature = "std")]
pub use ticker::{DEFAULT_TICK_INTERVAL, IntervalTicker, TickCallback, TickError, TickSource};
#[cfg(feature = "std")]
pub use time::StdTimeSource;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn black_pair_is_opaque() {
        assert_eq!(ColorPair::BLACK.top_left.alpha(), 0xFF);
        assert_eq!(ColorPair::BLACK.bottom_right, Color::BLACK);
        assert_eq!(GradientDirection::default(), GradientDirection::TopLeftToBottomRight);
    }
}
