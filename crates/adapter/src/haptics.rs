//! Haptic boundary: plays buzz patterns.
//!
//! A terminal has no vibration motor, so [`HapticsRuntime`] plays each
//! pattern on a background tokio runtime and reports the buzz segments as
//! [`HapticSignal`]s. The host drains them between frames, rings the bell on
//! `On` and flashes the card border until `Off`.

use std::time::Duration;

use anyhow::{Context, Result};
use tokio::runtime::{Builder, Runtime};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::types::Buzz;

/// Sink for buzz requests.
pub trait Haptics {
    /// Play `buzz` once, replacing anything still playing.
    fn buzz(&mut self, buzz: Buzz);
}

/// Haptics that ignores every request (`CHARADES_HAPTICS_DISABLED`).
#[derive(Debug, Default, Clone, Copy)]
pub struct NoHaptics;

impl Haptics for NoHaptics {
    fn buzz(&mut self, _buzz: Buzz) {}
}

impl<H: Haptics> Haptics for Option<H> {
    fn buzz(&mut self, buzz: Buzz) {
        if let Some(haptics) = self {
            haptics.buzz(buzz);
        }
    }
}

/// Start or end of a buzz segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HapticSignal {
    On(Buzz),
    Off,
}

/// Play one pattern: even entries are pauses, odd entries are buzz segments.
///
/// Returns early if the receiving side has gone away.
pub async fn play_pattern(buzz: Buzz, tx: mpsc::UnboundedSender<HapticSignal>) {
    for (i, &ms) in buzz.pattern().iter().enumerate() {
        let segment = Duration::from_millis(ms);
        if i % 2 == 0 {
            tokio::time::sleep(segment).await;
            continue;
        }

        if tx.send(HapticSignal::On(buzz)).is_err() {
            return;
        }
        tokio::time::sleep(segment).await;
        if tx.send(HapticSignal::Off).is_err() {
            return;
        }
    }
}

/// Background pattern player.
pub struct HapticsRuntime {
    rt: Runtime,
    signal_tx: mpsc::UnboundedSender<HapticSignal>,
    signal_rx: mpsc::UnboundedReceiver<HapticSignal>,
    playing: Option<JoinHandle<()>>,
}

impl HapticsRuntime {
    pub fn new() -> Result<Self> {
        let rt = Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("haptics")
            .enable_time()
            .build()
            .context("failed to create haptics runtime")?;
        let (signal_tx, signal_rx) = mpsc::unbounded_channel();

        Ok(Self {
            rt,
            signal_tx,
            signal_rx,
            playing: None,
        })
    }

    /// Next pending signal, without blocking.
    pub fn try_recv(&mut self) -> Option<HapticSignal> {
        self.signal_rx.try_recv().ok()
    }

    /// Stop the pattern in flight, if any.
    pub fn stop(&mut self) {
        if let Some(handle) = self.playing.take() {
            if !handle.is_finished() {
                handle.abort();
                // The aborted task may have left a segment switched on.
                let _ = self.signal_tx.send(HapticSignal::Off);
            }
        }
    }
}

impl Haptics for HapticsRuntime {
    fn buzz(&mut self, buzz: Buzz) {
        self.stop();
        if buzz.is_none() {
            return;
        }
        tracing::debug!(buzz = buzz.as_str(), pattern = ?buzz.pattern(), "playing buzz");
        let tx = self.signal_tx.clone();
        self.playing = Some(self.rt.spawn(play_pattern(buzz, tx)));
    }
}

impl Drop for HapticsRuntime {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    async fn timeline(buzz: Buzz) -> Vec<(u64, HapticSignal)> {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let start = Instant::now();
        tokio::spawn(play_pattern(buzz, tx));

        let mut out = Vec::new();
        while let Some(signal) = rx.recv().await {
            out.push((start.elapsed().as_millis() as u64, signal));
        }
        out
    }

    #[tokio::test(start_paused = true)]
    async fn panic_buzzes_immediately_for_200ms() {
        assert_eq!(
            timeline(Buzz::Panic).await,
            vec![(0, HapticSignal::On(Buzz::Panic)), (200, HapticSignal::Off)]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn correct_buzzes_three_times() {
        let on = HapticSignal::On(Buzz::Correct);
        assert_eq!(
            timeline(Buzz::Correct).await,
            vec![
                (100, on),
                (200, HapticSignal::Off),
                (300, on),
                (400, HapticSignal::Off),
                (500, on),
                (600, HapticSignal::Off),
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn game_over_is_one_long_buzz() {
        assert_eq!(
            timeline(Buzz::GameOver).await,
            vec![
                (0, HapticSignal::On(Buzz::GameOver)),
                (2000, HapticSignal::Off)
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn none_pattern_is_silent() {
        assert!(timeline(Buzz::None).await.is_empty());
    }

    #[test]
    fn runtime_plays_and_replaces_patterns() {
        let mut haptics = HapticsRuntime::new().unwrap();
        haptics.buzz(Buzz::GameOver);
        std::thread::sleep(Duration::from_millis(50));

        // Replacing a long buzz switches it off right away.
        haptics.buzz(Buzz::None);
        std::thread::sleep(Duration::from_millis(50));

        let mut signals = Vec::new();
        while let Some(s) = haptics.try_recv() {
            signals.push(s);
        }
        assert_eq!(
            signals,
            vec![HapticSignal::On(Buzz::GameOver), HapticSignal::Off]
        );
    }
}
