//! Frame clock producing global millisecond timestamps

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

enum ClockSource {
    /// Real time: epoch milliseconds captured at creation plus monotonic elapsed
    Wall { epoch_ms: f64, origin: Instant },
    /// Fixed interval per tick, starting at `start_ms`
    Simulated { start_ms: f64 },
}

/// Tracks global time in milliseconds and paces a fixed frame rate
pub struct FrameClock {
    /// Global time of the latest tick in milliseconds
    pub now_ms: f64,
    /// Time since the previous tick in milliseconds
    pub delta_ms: f64,
    /// Target interval between frames (default: 1000/60 ms)
    pub frame_interval_ms: f64,
    /// Number of ticks taken so far
    pub frames: u64,
    source: ClockSource,
    last_tick: Instant,
    first_tick: bool,
}

impl FrameClock {
    /// Wall clock at the given frame rate
    pub fn wall(fps: f64) -> Self {
        let epoch_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs_f64() * 1000.0)
            .unwrap_or(0.0);
        Self::with_source(
            fps,
            ClockSource::Wall {
                epoch_ms,
                origin: Instant::now(),
            },
        )
    }

    /// Deterministic clock that advances exactly one frame interval per tick
    pub fn simulated(fps: f64, start_ms: f64) -> Self {
        Self::with_source(fps, ClockSource::Simulated { start_ms })
    }

    fn with_source(fps: f64, source: ClockSource) -> Self {
        let fps = if fps.is_finite() && fps > 0.0 { fps } else { 60.0 };
        Self {
            now_ms: 0.0,
            delta_ms: 0.0,
            frame_interval_ms: 1000.0 / fps,
            frames: 0,
            source,
            last_tick: Instant::now(),
            first_tick: true,
        }
    }

    pub fn is_simulated(&self) -> bool {
        matches!(self.source, ClockSource::Simulated { .. })
    }

    /// Advance the clock. Call once per frame. Returns the new global time.
    pub fn tick(&mut self) -> f64 {
        let now = match &self.source {
            ClockSource::Wall { epoch_ms, origin } => {
                epoch_ms + origin.elapsed().as_secs_f64() * 1000.0
            }
            ClockSource::Simulated { start_ms } => {
                start_ms + self.frames as f64 * self.frame_interval_ms
            }
        };
        self.last_tick = Instant::now();
        self.frames += 1;

        if self.first_tick {
            self.first_tick = false;
            self.delta_ms = 0.0;
        } else {
            self.delta_ms = now - self.now_ms;
        }
        self.now_ms = now;
        now
    }

    /// How long a real-time loop should sleep before the next frame is due.
    /// Always zero for a simulated clock.
    pub fn time_until_next_frame(&self) -> Duration {
        if self.is_simulated() || self.first_tick {
            return Duration::ZERO;
        }
        let interval = Duration::from_secs_f64(self.frame_interval_ms / 1000.0);
        interval.saturating_sub(self.last_tick.elapsed())
    }
}
