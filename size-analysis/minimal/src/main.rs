#![no_std]
#![no_main]

use cortex_m_rt::entry;
use gradient_animator::{BorderSink, BorderStyle, Color, GradientAnimation, TimeDuration};
use panic_halt as _;
use rand::SeedableRng;
use rand::rngs::SmallRng;

// ============================================================================
// Minimal Time Types
// ============================================================================

/// Minimal 32-bit microsecond duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Micros32(u32);

impl TimeDuration for Micros32 {
    const ZERO: Self = Micros32(0);

    fn saturating_add(self, other: Self) -> Self {
        Micros32(self.0.saturating_add(other.0))
    }

    fn saturating_sub(self, other: Self) -> Self {
        Micros32(self.0.saturating_sub(other.0))
    }
}

// ============================================================================
// Minimal Sink Implementation
// ============================================================================

/// Zero-size sink for measuring library overhead
pub struct MinimalSink;

impl BorderSink for MinimalSink {
    fn apply_active_style(&mut self, style: BorderStyle) {
        core::hint::black_box(style);
    }

    fn update_active(&mut self) {
        core::hint::black_box(());
    }
}

// ============================================================================
// Exercise
// ============================================================================

// This function uses the library to prevent optimizer from removing code
#[inline(never)]
fn run_animation() {
    let palette = [
        Color(0xFFFF0000),
        Color(0xFF00FF00),
        Color(0xFF0000FF),
        Color(0xFFFFFFFF),
    ];
    let mut sink = MinimalSink;

    if let Ok(mut animation) = GradientAnimation::new(
        &palette,
        30,
        Micros32(33_333),
        SmallRng::seed_from_u64(0x5EED),
    ) {
        for _ in 0..120 {
            if let Some(style) = animation.tick(Micros32(16_667)) {
                sink.apply_active_style(style);
                sink.update_active();
            }
        }
        core::hint::black_box(animation);
    }

    core::hint::black_box(Color::from_hex("80ff8000"));
}

#[entry]
fn main() -> ! {
    run_animation();
    loop {
        cortex_m::asm::nop();
    }
}
