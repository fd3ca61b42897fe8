//! Tick-driven gradient animation state machine.
//!
//! Provides [`GradientAnimation`], which turns an irregular stream of elapsed-time deltas into
//! a fixed cadence of discrete interpolation steps. Each step blends the current color pair a
//! little further towards the next pair; once a transition completes, the next pair becomes
//! current and a fresh pair is drawn from the palette at random.

use crate::color::Color;
use crate::interpolate::blend;
use crate::selector::{MAX_PALETTE_COLORS, Palette, pick_colors};
use crate::state::{AnimationState, ColorPair};
use crate::style::BorderStyle;
use crate::time::TimeDuration;
use rand::RngCore;

/// Errors that can occur when configuring an animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AnimationError {
    /// Fewer than two colors to animate between.
    InsufficientPalette { len: usize },
}

impl core::fmt::Display for AnimationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            AnimationError::InsufficientPalette { len } => {
                write!(f, "palette needs at least 2 colors, got {}", len)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AnimationError {}

/// Animated two-color gradient.
///
/// Owns its progress record, a private copy of the palette (read-only for the whole run) and
/// the random generator used to draw color pairs.
///
/// # Type Parameters
/// * `D` - The duration type ticks are measured in
/// * `R` - The random generator used for pair selection
#[derive(Debug, Clone)]
pub struct GradientAnimation<D: TimeDuration, R: RngCore> {
    state: AnimationState<D>,
    palette: Palette,
    rng: R,
    transitions: u64,
}

impl<D: TimeDuration, R: RngCore> GradientAnimation<D, R> {
    /// Creates an animation and draws its first transition.
    ///
    /// Colors beyond [`MAX_PALETTE_COLORS`] are ignored.
    ///
    /// A pair is drawn and promoted to current, then a second pair is drawn as the target, so
    /// the first published frame is a settled color rather than a partial blend.
    ///
    /// # Errors
    /// * `InsufficientPalette` - `palette` has fewer than two colors
    pub fn new(
        palette: &[Color],
        total_steps: u32,
        step_duration: D,
        rng: R,
    ) -> Result<Self, AnimationError> {
        if palette.len() < 2 {
            return Err(AnimationError::InsufficientPalette { len: palette.len() });
        }

        let mut animation = Self {
            state: AnimationState::new(total_steps, step_duration),
            palette: palette.iter().copied().take(MAX_PALETTE_COLORS).collect(),
            rng,
            transitions: 0,
        };
        if let (Some(first), Some(second)) = (animation.draw_pair(), animation.draw_pair()) {
            animation.begin_transition(first, second);
        }
        Ok(animation)
    }

    /// Restarts progress with an explicit transition from `from` to `to`.
    pub fn begin_transition(&mut self, from: ColorPair, to: ColorPair) {
        self.state.current = from;
        self.state.next = to;
        self.state.step = 0;
        self.state.accumulator = D::ZERO;
    }

    /// Advances the animation by `dt`.
    ///
    /// Consumes as many whole steps from the accumulated time as fit, rolling over to a new
    /// color pair whenever a transition completes. Returns the style to publish when a step
    /// fired or the animation sits at the start of a transition, `None` otherwise.
    pub fn tick(&mut self, dt: D) -> Option<BorderStyle> {
        self.state.accumulator = self.state.accumulator.saturating_add(dt);

        let mut update_pending = false;
        while self.state.step_duration > D::ZERO
            && self.state.accumulator >= self.state.step_duration
        {
            self.state.accumulator = self.state.accumulator.saturating_sub(self.state.step_duration);
            self.state.step += 1;
            update_pending = true;

            if self.state.step > self.state.total_steps {
                self.roll_over();
            }
        }

        if update_pending || self.state.step == 0 {
            Some(self.frame())
        } else {
            None
        }
    }

    /// Style for the current progress, without advancing.
    pub fn frame(&self) -> BorderStyle {
        let state = &self.state;
        BorderStyle::diagonal_gradient(
            blend(
                state.current.top_left,
                state.next.top_left,
                state.step,
                state.total_steps,
            ),
            blend(
                state.current.bottom_right,
                state.next.bottom_right,
                state.step,
                state.total_steps,
            ),
        )
    }

    /// Returns the progress record.
    pub fn state(&self) -> &AnimationState<D> {
        &self.state
    }

    /// Number of rollovers since creation.
    pub fn completed_transitions(&self) -> u64 {
        self.transitions
    }

    fn roll_over(&mut self) {
        self.transitions += 1;
        match self.draw_pair() {
            Some(next) => {
                self.state.step = 0;
                self.state.current = self.state.next;
                self.state.next = next;
            }
            None => self.state.reset(),
        }
    }

    fn draw_pair(&mut self) -> Option<ColorPair> {
        pick_colors(&self.palette, &mut self.rng)
    }
}
