//! Ticker: Dedicated thread for frame pacing.
//!
//! Effects have no notion of wall-clock time. The ticker supplies it: a
//! background thread sends a [`Tick`] every interval, and the player pulls
//! one frame per tick. Pacing stays accurate however long a frame takes to
//! draw, because sleeping happens off the drawing thread.

use crossbeam_channel::{bounded, Receiver, RecvTimeoutError, Sender, TrySendError};
use std::io;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// A tick event sent at regular intervals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    /// Frame number. Ticks dropped while the consumer lagged still count.
    pub frame: u64,
    /// Time elapsed since the ticker was started.
    pub elapsed: Duration,
}

/// Background thread generating regular timing events.
///
/// Between ticks the thread blocks on a stop channel with the time left
/// until the next tick as timeout, so it sleeps whole intervals and still
/// wakes at once on [`shutdown`](Self::shutdown).
#[derive(Debug)]
pub struct Ticker {
    handle: Option<JoinHandle<()>>,
    stop_tx: Sender<()>,
    tick_rx: Receiver<Tick>,
}

impl Ticker {
    /// Spawn a ticker firing every `interval`.
    ///
    /// # Errors
    ///
    /// Returns an error if the OS fails to spawn the ticker thread.
    pub fn spawn(interval: Duration) -> io::Result<Self> {
        let (stop_tx, stop_rx) = bounded(1);
        // Room for two ticks: a slow consumer gets the latest, not a backlog.
        let (tick_tx, tick_rx) = bounded(2);

        let handle = thread::Builder::new()
            .name("termanim-ticker".to_string())
            .spawn(move || Self::run_loop(&tick_tx, &stop_rx, interval))?;

        Ok(Self {
            handle: Some(handle),
            stop_tx,
            tick_rx,
        })
    }

    /// The tick receiver.
    #[inline]
    pub const fn receiver(&self) -> &Receiver<Tick> {
        &self.tick_rx
    }

    /// Ask the ticker thread to stop. Idempotent.
    pub fn shutdown(&self) {
        let _ = self.stop_tx.try_send(());
    }

    /// Stop the ticker and wait for its thread to finish.
    pub fn join(mut self) {
        self.shutdown();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    fn run_loop(tick_tx: &Sender<Tick>, stop_rx: &Receiver<()>, interval: Duration) {
        let start = Instant::now();
        let mut next_tick = start + interval;

        for frame in 0u64.. {
            let wait = next_tick.saturating_duration_since(Instant::now());
            match stop_rx.recv_timeout(wait) {
                Err(RecvTimeoutError::Timeout) => {}
                Ok(()) | Err(RecvTimeoutError::Disconnected) => return,
            }

            let now = Instant::now();
            let tick = Tick {
                frame,
                elapsed: now - start,
            };
            // A full channel means the consumer is behind: drop the tick.
            if let Err(TrySendError::Disconnected(_)) = tick_tx.try_send(tick) {
                return;
            }

            next_tick += interval;
            if next_tick < now {
                next_tick = now + interval;
            }
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.shutdown();
    }
}
