//! Mutable animation progress record.

use crate::color::Color;
use crate::time::TimeDuration;

/// The two gradient endpoint colors of a border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ColorPair {
    pub top_left: Color,
    pub bottom_right: Color,
}

impl ColorPair {
    /// Opaque black on both ends, used when no pair can be drawn.
    pub const BLACK: ColorPair = ColorPair::new(Color::BLACK, Color::BLACK);

    #[inline]
    pub const fn new(top_left: Color, bottom_right: Color) -> Self {
        Self {
            top_left,
            bottom_right,
        }
    }
}

/// Progress of one animation run.
///
/// `step` stays within `0..=total_steps`. `total_steps` and `step_duration` are fixed for the
/// run. `accumulator` holds elapsed time not yet consumed by whole steps and may exceed
/// `step_duration` between ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationState<D: TimeDuration> {
    /// Colors interpolated from.
    pub current: ColorPair,
    /// Colors interpolated to.
    pub next: ColorPair,
    pub step: u32,
    pub total_steps: u32,
    pub step_duration: D,
    pub accumulator: D,
}

impl<D: TimeDuration> AnimationState<D> {
    /// Creates a zero-progress state with both pairs black.
    ///
    /// `total_steps` is raised to at least 1.
    pub fn new(total_steps: u32, step_duration: D) -> Self {
        Self {
            current: ColorPair::BLACK,
            next: ColorPair::BLACK,
            step: 0,
            total_steps: total_steps.max(1),
            step_duration,
            accumulator: D::ZERO,
        }
    }

    /// Returns to the all-black, zero-progress error state. Timing configuration is kept.
    pub fn reset(&mut self) {
        self.current = ColorPair::BLACK;
        self.next = ColorPair::BLACK;
        self.step = 0;
        self.accumulator = D::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::time::Duration;

    #[test]
    fn new_state_clamps_total_steps() {
        let state = AnimationState::new(0, Duration::from_millis(10));
        assert_eq!(state.total_steps, 1);
        assert_eq!(state.step, 0);
        assert_eq!(state.accumulator, Duration::ZERO);
        assert_eq!(state.current, ColorPair::BLACK);
    }

    #[test]
    fn reset_keeps_timing() {
        let mut state = AnimationState::new(4, Duration::from_millis(25));
        state.step = 3;
        state.accumulator = Duration::from_millis(7);
        state.current = ColorPair::new(Color(0xFFFF0000), Color(0xFF0000FF));
        state.reset();
        assert_eq!(state.step, 0);
        assert_eq!(state.accumulator, Duration::ZERO);
        assert_eq!(state.current, ColorPair::BLACK);
        assert_eq!(state.total_steps, 4);
        assert_eq!(state.step_duration, Duration::from_millis(25));
    }
}
