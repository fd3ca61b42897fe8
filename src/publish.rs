//! Hand-off of computed frames from the tick thread to the UI thread.
//!
//! The tick thread owns a [`FramePublisher`] and never blocks on it. A single
//! [`FrameConsumer`] applies frames to a [`BorderSink`] in the order they were published.
//! Every frame is a by-value snapshot, so later ticks cannot alter a frame already queued.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread::{self, JoinHandle};

use crate::style::{BorderSink, BorderStyle};

/// Creates a connected publisher / consumer pair.
pub fn publish_channel() -> (FramePublisher, FrameConsumer) {
    let (tx, rx) = mpsc::channel();
    (FramePublisher { tx }, FrameConsumer { rx })
}

/// Producer half, held by the tick thread.
#[derive(Debug, Clone)]
pub struct FramePublisher {
    tx: Sender<BorderStyle>,
}

impl FramePublisher {
    /// Queues a frame without blocking.
    ///
    /// Returns false when the consumer is gone; the frame is dropped.
    pub fn publish(&self, style: BorderStyle) -> bool {
        self.tx.send(style).is_ok()
    }
}

/// Consumer half, drained on the designated UI thread.
#[derive(Debug)]
pub struct FrameConsumer {
    rx: Receiver<BorderStyle>,
}

impl FrameConsumer {
    /// Applies every queued frame to `sink` and returns how many were applied.
    ///
    /// Never blocks. Suited to hosts that pump this from their own main loop.
    pub fn apply_pending<S: BorderSink>(&self, sink: &mut S) -> usize {
        let mut applied = 0;
        loop {
            match self.rx.try_recv() {
                Ok(style) => {
                    apply(sink, style);
                    applied += 1;
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => return applied,
            }
        }
    }

    /// Applies frames as they arrive until every publisher has been dropped.
    pub fn run<S: BorderSink>(self, mut sink: S) -> S {
        for style in self.rx.iter() {
            apply(&mut sink, style);
        }
        sink
    }

    /// Runs the consumer on a dedicated thread, returning the sink once all publishers are gone.
    pub fn spawn<S>(self, sink: S) -> std::io::Result<JoinHandle<S>>
    where
        S: BorderSink + Send + 'static,
    {
        thread::Builder::new()
            .name("gradient-publish".into())
            .spawn(move || {
                tracing::debug!("publish thread started");
                let sink = self.run(sink);
                tracing::debug!("publish thread exiting");
                sink
            })
    }
}

fn apply<S: BorderSink>(sink: &mut S, style: BorderStyle) {
    tracing::trace!(?style, "applying border style");
    sink.apply_active_style(style);
    sink.update_active();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[derive(Default)]
    struct Recorder {
        styles: Vec<BorderStyle>,
        repaints: usize,
    }

    impl BorderSink for Recorder {
        fn apply_active_style(&mut self, style: BorderStyle) {
            self.styles.push(style);
        }

        fn update_active(&mut self) {
            self.repaints += 1;
        }
    }

    #[test]
    fn frames_arrive_in_publish_order() {
        let (publisher, consumer) = publish_channel();
        for i in 0..5u32 {
            assert!(publisher.publish(BorderStyle::Solid(Color(i))));
        }

        let mut sink = Recorder::default();
        assert_eq!(consumer.apply_pending(&mut sink), 5);
        assert_eq!(sink.repaints, 5);
        let expected: Vec<_> = (0..5u32).map(|i| BorderStyle::Solid(Color(i))).collect();
        assert_eq!(sink.styles, expected);
        assert_eq!(consumer.apply_pending(&mut sink), 0);
    }

    #[test]
    fn spawned_consumer_returns_sink_after_publishers_drop() {
        let (publisher, consumer) = publish_channel();
        let handle = consumer.spawn(Recorder::default()).unwrap();
        publisher.publish(BorderStyle::Glow(Color::BLACK));
        drop(publisher);

        let sink = handle.join().unwrap();
        assert_eq!(sink.styles, vec![BorderStyle::Glow(Color::BLACK)]);
    }

    #[test]
    fn publish_fails_without_consumer() {
        let (publisher, consumer) = publish_channel();
        drop(consumer);
        assert!(!publisher.publish(BorderStyle::Solid(Color::BLACK)));
    }
}
