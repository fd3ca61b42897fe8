//! Start/stop orchestration of the gradient animation.
//!
//! [`GradientController`] validates settings, builds a [`GradientAnimation`] for the run and
//! wires it to a [`TickSource`]. The controller is the sole owner of the animation state; the
//! tick callback only holds a weak reference, and stopping tears down the subscription without
//! touching the state. Once a run is subscribed, only the tick thread mutates it; other threads
//! read copies through [`GradientController::snapshot`].

use std::sync::{Arc, OnceLock, Weak};
use std::time::Duration;

use parking_lot::Mutex;
use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};

use crate::animation::GradientAnimation;
use crate::config::GradientConfig;
use crate::publish::FramePublisher;
use crate::state::{AnimationState, ColorPair};
use crate::ticker::{TickError, TickSource};

/// Step duration used when no positive transition duration is configured.
pub const DEFAULT_STEP_DURATION: Duration = Duration::from_secs(1);

/// Shortest step a run will use. Keeps the work done per tick bounded.
pub const MIN_STEP_DURATION: Duration = Duration::from_millis(1);

/// The animation type driven by the controller.
pub type BorderAnimation = GradientAnimation<Duration, SmallRng>;

/// Process-wide random source, seeded from entropy on first use.
fn shared_rng() -> &'static Mutex<SmallRng> {
    static SHARED: OnceLock<Mutex<SmallRng>> = OnceLock::new();
    SHARED.get_or_init(|| {
        tracing::debug!("seeding shared gradient rng");
        Mutex::new(SmallRng::from_entropy())
    })
}

/// Computes the duration of one step from an optional total transition duration.
///
/// Unset or non-positive durations give [`DEFAULT_STEP_DURATION`]; anything shorter than
/// [`MIN_STEP_DURATION`] per step is raised to it.
pub fn step_duration(total_steps: u32, duration_secs: Option<f64>) -> Duration {
    let Some(secs) = duration_secs.filter(|secs| *secs > 0.0) else {
        return DEFAULT_STEP_DURATION;
    };
    match Duration::try_from_secs_f64(secs / f64::from(total_steps.max(1))) {
        Ok(step) if step < MIN_STEP_DURATION => {
            tracing::debug!(?step, min = ?MIN_STEP_DURATION, "step duration clamped");
            MIN_STEP_DURATION
        }
        Ok(step) => step,
        Err(_) => DEFAULT_STEP_DURATION,
    }
}

/// Drives one animated gradient at a time.
///
/// # Type Parameters
/// * `T` - The tick source delivering frame ticks
pub struct GradientController<T: TickSource> {
    ticker: T,
    publisher: FramePublisher,
    animation: Option<Arc<Mutex<BorderAnimation>>>,
    rng_seed: Option<u64>,
    runs: u64,
}

impl<T: TickSource> GradientController<T> {
    /// Creates an idle controller publishing frames through `publisher`.
    pub fn new(ticker: T, publisher: FramePublisher) -> Self {
        Self {
            ticker,
            publisher,
            animation: None,
            rng_seed: None,
            runs: 0,
        }
    }

    /// Uses a deterministic seed instead of the shared entropy-seeded source.
    ///
    /// Each run derives its generator from the seed and the run number.
    #[must_use]
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    /// Starts animating with `config`.
    ///
    /// Returns `Ok(false)` without touching a running animation when the animation is
    /// disabled or the palette has fewer than two colors. A running animation is stopped
    /// before the new one starts.
    ///
    /// # Errors
    /// Returns the tick source error if subscribing fails; the controller is then stopped.
    pub fn start(&mut self, config: &GradientConfig) -> Result<bool, TickError> {
        self.launch(config, None)
    }

    /// Like [`start`](Self::start), but the first transition runs from `from` to `to` instead
    /// of a randomly drawn pair. Later transitions draw from the palette as usual.
    ///
    /// # Errors
    /// Returns the tick source error if subscribing fails.
    pub fn start_from(
        &mut self,
        config: &GradientConfig,
        from: ColorPair,
        to: ColorPair,
    ) -> Result<bool, TickError> {
        self.launch(config, Some((from, to)))
    }

    fn launch(
        &mut self,
        config: &GradientConfig,
        first_transition: Option<(ColorPair, ColorPair)>,
    ) -> Result<bool, TickError> {
        if !config.enabled {
            tracing::debug!("gradient animation disabled");
            return Ok(false);
        }
        let Some(palette) = config.colors.as_ref().filter(|colors| colors.len() >= 2) else {
            tracing::debug!(colors = config.palette_len(), "not enough gradient colors");
            return Ok(false);
        };

        self.stop();

        let total_steps = config.steps.max(1);
        let step_duration = step_duration(total_steps, config.duration_secs);
        let rng = self.next_rng();
        let mut animation = match GradientAnimation::new(palette, total_steps, step_duration, rng) {
            Ok(animation) => animation,
            Err(error) => {
                tracing::warn!(%error, "gradient animation not started");
                return Ok(false);
            }
        };
        if let Some((from, to)) = first_transition {
            animation.begin_transition(from, to);
        }

        let animation = Arc::new(Mutex::new(animation));
        let on_tick = tick_callback(Arc::downgrade(&animation), self.publisher.clone());
        self.animation = Some(animation);
        self.ticker.subscribe(on_tick)?;
        self.runs += 1;

        tracing::info!(
            colors = palette.len(),
            total_steps,
            ?step_duration,
            "gradient animation started"
        );
        Ok(true)
    }

    /// Stops delivering ticks. No frame is published after this returns, except one the tick
    /// thread had already queued. Safe to call repeatedly; the animation state is kept.
    pub fn stop(&mut self) {
        if self.ticker.is_subscribed() {
            self.ticker.unsubscribe();
            tracing::info!("gradient animation stopped");
        }
    }

    /// Returns true while ticks are being delivered.
    pub fn is_running(&self) -> bool {
        self.ticker.is_subscribed()
    }

    /// Copy of the progress record of the current or most recent run.
    pub fn snapshot(&self) -> Option<AnimationState<Duration>> {
        self.animation
            .as_ref()
            .map(|animation| *animation.lock().state())
    }

    /// Rollovers completed by the current or most recent run.
    pub fn completed_transitions(&self) -> Option<u64> {
        self.animation
            .as_ref()
            .map(|animation| animation.lock().completed_transitions())
    }

    fn next_rng(&self) -> SmallRng {
        match self.rng_seed {
            Some(seed) => SmallRng::seed_from_u64(seed.wrapping_add(self.runs)),
            None => SmallRng::seed_from_u64(shared_rng().lock().next_u64()),
        }
    }
}

impl<T: TickSource> Drop for GradientController<T> {
    fn drop(&mut self) {
        self.stop();
    }
}

fn tick_callback(
    animation: Weak<Mutex<BorderAnimation>>,
    publisher: FramePublisher,
) -> Box<dyn FnMut(Duration) + Send + 'static> {
    Box::new(move |dt| {
        let Some(animation) = animation.upgrade() else {
            return;
        };
        let frame = animation.lock().tick(dt);
        if let Some(style) = frame {
            publisher.publish(style);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_duration_divides_total() {
        assert_eq!(step_duration(4, Some(2.0)), Duration::from_millis(500));
        assert_eq!(step_duration(0, Some(2.0)), Duration::from_secs(2));
    }

    #[test]
    fn step_duration_falls_back_to_one_second() {
        assert_eq!(step_duration(10, None), DEFAULT_STEP_DURATION);
        assert_eq!(step_duration(10, Some(-5.0)), DEFAULT_STEP_DURATION);
        assert_eq!(step_duration(10, Some(f64::NAN)), DEFAULT_STEP_DURATION);
    }

    #[test]
    fn tiny_durations_are_clamped_to_minimum() {
        assert_eq!(step_duration(1, Some(0.000_000_001)), MIN_STEP_DURATION);
        assert_eq!(step_duration(10, Some(1e-30)), MIN_STEP_DURATION);
        assert_eq!(step_duration(1000, Some(0.5)), MIN_STEP_DURATION);
        assert_eq!(step_duration(100, Some(1.0)), Duration::from_millis(10));
    }

    #[test]
    fn shared_rng_is_initialized_once() {
        let first = shared_rng() as *const _;
        let second = shared_rng() as *const _;
        assert_eq!(first, second);
    }
}
