//! Shared test infrastructure for gradient-animator integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use std::sync::Arc;
use std::time::Duration;

use gradient_animator::{BorderSink, BorderStyle, Color, TickCallback, TickError, TickSource};
use parking_lot::Mutex;

// ============================================================================
// Colors
// ============================================================================

pub const RED: Color = Color(0xFFFF0000);
pub const GREEN: Color = Color(0xFF00FF00);
pub const BLUE: Color = Color(0xFF0000FF);

// ============================================================================
// Mock Tick Source
// ============================================================================

/// Tick source driven by hand from the test thread
#[derive(Clone, Default)]
pub struct ManualTicker {
    callback: Arc<Mutex<Option<TickCallback>>>,
    subscriptions: Arc<Mutex<usize>>,
}

impl ManualTicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver one tick; returns false if nothing is subscribed
    pub fn tick(&self, dt: Duration) -> bool {
        match self.callback.lock().as_mut() {
            Some(callback) => {
                callback(dt);
                true
            }
            None => false,
        }
    }

    pub fn subscriptions(&self) -> usize {
        *self.subscriptions.lock()
    }
}

impl TickSource for ManualTicker {
    fn subscribe(&mut self, on_tick: TickCallback) -> Result<(), TickError> {
        let mut slot = self.callback.lock();
        if slot.is_some() {
            return Err(TickError::AlreadySubscribed);
        }
        *slot = Some(on_tick);
        *self.subscriptions.lock() += 1;
        Ok(())
    }

    fn unsubscribe(&mut self) {
        self.callback.lock().take();
    }

    fn is_subscribed(&self) -> bool {
        self.callback.lock().is_some()
    }
}

// ============================================================================
// Mock Sink
// ============================================================================

/// Sink that records every style and repaint request
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub styles: Vec<BorderStyle>,
    pub repaints: usize,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<BorderStyle> {
        self.styles.last().copied()
    }
}

impl BorderSink for RecordingSink {
    fn apply_active_style(&mut self, style: BorderStyle) {
        self.styles.push(style);
    }

    fn update_active(&mut self) {
        self.repaints += 1;
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Extract the two gradient colors from a published style
pub fn gradient_colors(style: BorderStyle) -> (Color, Color) {
    match style {
        BorderStyle::Gradient { color1, color2, .. } => (color1, color2),
        other => panic!("expected gradient, got {:?}", other),
    }
}
