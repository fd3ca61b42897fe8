//! Runs an animated gradient against a sink that prints each frame.
//!
//! Arguments are border options (`animated_gradient_colors=...`) plus `--seconds=N`.

use std::thread;
use std::time::Duration;

use gradient_animator::{
    BorderSettings, BorderSink, BorderStyle, GradientController, IntervalTicker, publish_channel,
};
use tracing_subscriber::EnvFilter;

struct PrintSink {
    frames: usize,
}

impl BorderSink for PrintSink {
    fn apply_active_style(&mut self, style: BorderStyle) {
        if let BorderStyle::Gradient { color1, color2, .. } = style {
            let (a, b) = (color1.to_srgba(), color2.to_srgba());
            println!(
                "top_left=#{:02x}{:02x}{:02x} bottom_right=#{:02x}{:02x}{:02x}",
                a.red, a.green, a.blue, b.red, b.green, b.blue
            );
        }
    }

    fn update_active(&mut self) {
        self.frames += 1;
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut seconds = 5u64;
    let mut options = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.strip_prefix("--seconds=") {
            Some(value) => seconds = value.parse()?,
            None => options.push(arg),
        }
    }

    let mut settings = BorderSettings::default();
    let report = settings.apply_args(&options);
    if !report.errors.is_empty() {
        tracing::warn!(count = report.errors.len(), "some options were ignored");
    }

    let (publisher, consumer) = publish_channel();
    let printer = consumer.spawn(PrintSink { frames: 0 })?;

    let mut controller = GradientController::new(IntervalTicker::default(), publisher);
    if !controller.start(&settings.gradient)? {
        tracing::warn!("animation not started; enable it and give at least two colors");
    }
    thread::sleep(Duration::from_secs(seconds));
    controller.stop();
    drop(controller);

    let sink = printer.join().map_err(|_| "publish thread panicked")?;
    tracing::info!(frames = sink.frames, "demo finished");
    Ok(())
}
