//! Player: the frame loop tying effects, the screen and the terminal together.
//!
//! Each tick the player asks for the next frame, draws it onto the screen
//! and paints once. It stops when the frames run out, when the caller says
//! so, or when the shutdown flag is raised (by Ctrl-C when interrupt
//! handling is on). The terminal is restored however the loop ends.

use super::{Tick, Ticker};
use crate::buffer::{Color, Screen};
use crate::drawable::Shape;
use crate::error::{Error, Result};
use crate::terminal::TerminalSession;
use crossbeam_channel::RecvTimeoutError;
use signal_hook::SigId;
use std::io::{self, Stdout, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// How long to wait for a tick before checking the shutdown flag again.
const TICK_TIMEOUT: Duration = Duration::from_millis(100);

/// Configuration for the [`Player`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerConfig {
    /// Frames per second.
    pub frame_rate: f64,
    /// Whether to clear the screen when the player is dropped.
    pub clear_on_exit: bool,
    /// Whether Ctrl-C stops playback instead of killing the process.
    pub handle_interrupt: bool,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            frame_rate: 30.0,
            clear_on_exit: true,
            handle_interrupt: true,
        }
    }
}

impl PlayerConfig {
    /// Check the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFrameRate`] unless the frame rate is finite
    /// and positive.
    pub fn validate(&self) -> Result<()> {
        if self.frame_rate.is_finite() && self.frame_rate > 0.0 {
            Ok(())
        } else {
            Err(Error::InvalidFrameRate(self.frame_rate))
        }
    }

    /// Time between frames.
    pub fn interval(&self) -> Duration {
        Duration::from_secs_f64(self.frame_rate.recip())
    }
}

/// Totals for one playback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayStats {
    /// Frames painted.
    pub frames: u64,
    /// Cells emitted across all frames.
    pub cells: usize,
    /// Bytes written to the terminal across all frames.
    pub bytes: usize,
}

/// Plays animations on a screen.
pub struct Player<C: Color, W: Write> {
    screen: Screen<C>,
    session: TerminalSession<W>,
    config: PlayerConfig,
    shutdown: Arc<AtomicBool>,
    signal: Option<SigId>,
}

impl<C: Color> Player<C, Stdout> {
    /// A player drawing to standard output.
    ///
    /// # Errors
    ///
    /// See [`Player::new`].
    pub fn stdout(screen: Screen<C>, config: PlayerConfig) -> Result<Self> {
        Self::new(screen, io::stdout(), config)
    }
}

impl<C: Color, W: Write> Player<C, W> {
    /// Take over `out` and prepare to play on `screen`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, the SIGINT handler
    /// cannot be installed, or the terminal cannot be set up.
    pub fn new(screen: Screen<C>, out: W, config: PlayerConfig) -> Result<Self> {
        config.validate()?;

        // Registered last: a failure past this point would leak the SigId.
        let session = TerminalSession::enter(out, false, config.clear_on_exit)?;
        let shutdown = Arc::new(AtomicBool::new(false));
        let signal = if config.handle_interrupt {
            Some(signal_hook::flag::register(
                signal_hook::consts::SIGINT,
                Arc::clone(&shutdown),
            )?)
        } else {
            None
        };

        Ok(Self {
            screen,
            session,
            config,
            shutdown,
            signal,
        })
    }

    /// The screen being painted.
    pub const fn screen(&self) -> &Screen<C> {
        &self.screen
    }

    /// Mutable access to the screen.
    pub fn screen_mut(&mut self) -> &mut Screen<C> {
        &mut self.screen
    }

    /// The writer frames are painted to.
    pub const fn writer(&self) -> &W {
        self.session.writer()
    }

    /// The configuration.
    pub const fn config(&self) -> &PlayerConfig {
        &self.config
    }

    /// A handle that stops playback when set, from any thread.
    pub fn shutdown_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.shutdown)
    }

    /// Whether playback has been asked to stop.
    pub fn is_shutdown(&self) -> bool {
        self.shutdown.load(Ordering::Relaxed)
    }

    /// Play a stream of frames, each a list of shapes drawn bottom to top.
    ///
    /// Returns when the stream ends or playback is stopped.
    ///
    /// # Errors
    ///
    /// Returns an error if a frame cannot be written.
    pub fn play<S>(&mut self, scene: S) -> Result<PlayStats>
    where
        S: IntoIterator,
        S::Item: IntoIterator<Item = Shape<C>>,
    {
        let mut frames = scene.into_iter();
        self.play_with(|_, screen| {
            let Some(shapes) = frames.next() else {
                return false;
            };
            for shape in shapes {
                screen.draw_shape(&shape);
            }
            true
        })
    }

    /// Call `step` once per tick to draw the next frame.
    ///
    /// Playback stops when `step` returns `false`; nothing is painted for
    /// that tick.
    ///
    /// # Errors
    ///
    /// Returns an error if the ticker cannot start or a frame cannot be
    /// written.
    pub fn play_with<F>(&mut self, mut step: F) -> Result<PlayStats>
    where
        F: FnMut(&Tick, &mut Screen<C>) -> bool,
    {
        let ticker = Ticker::spawn(self.config.interval())?;
        let mut stats = PlayStats::default();
        info!(frame_rate = self.config.frame_rate, "playback started");

        while !self.is_shutdown() {
            let tick = match ticker.receiver().recv_timeout(TICK_TIMEOUT) {
                Ok(tick) => tick,
                Err(RecvTimeoutError::Timeout) => continue,
                Err(RecvTimeoutError::Disconnected) => break,
            };

            if !step(&tick, &mut self.screen) {
                break;
            }

            let result = self.screen.paint(self.session.writer_mut())?;
            let bytes = self.screen.last_output().len();
            stats.frames += 1;
            stats.cells += result.cells_changed;
            stats.bytes += bytes;
            debug!(
                frame = tick.frame,
                cells = result.cells_changed,
                bytes,
                "frame painted"
            );
        }

        ticker.join();
        info!(
            frames = stats.frames,
            bytes = stats.bytes,
            interrupted = self.is_shutdown(),
            "playback finished"
        );
        Ok(stats)
    }
}

impl<C: Color, W: Write> Drop for Player<C, W> {
    fn drop(&mut self) {
        if let Some(id) = self.signal.take() {
            signal_hook::low_level::unregister(id);
        }
    }
}

impl<C: Color, W: Write> std::fmt::Debug for Player<C, W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Player")
            .field("screen", &self.screen)
            .field("config", &self.config)
            .field("shutdown", &self.is_shutdown())
            .finish_non_exhaustive()
    }
}
