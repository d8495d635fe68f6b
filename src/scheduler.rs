use std::time::{Duration, Instant};

/// Source of the current time for the game loop.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall clock backed by [`Instant::now`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// One periodic trigger.
///
/// A poll that arrives late fires once and reschedules from the poll time, so
/// a stalled loop never produces a burst of catch-up ticks.
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    next_due: Option<Instant>,
}

impl Ticker {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_due: None,
        }
    }

    /// Arms the ticker; the first fire is one interval after `now`.
    pub fn start(&mut self, now: Instant) {
        self.next_due = Some(now + self.interval);
    }

    pub fn stop(&mut self) {
        self.next_due = None;
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns true when the ticker is due at `now` and re-arms it.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                self.next_due = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }

    /// Time left until the next fire, or `None` while stopped.
    #[must_use]
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }
}

/// Which triggers fired during one poll.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct Fired {
    /// The game ticker fired: advance the session, then redraw.
    pub advance: bool,
    /// Something changed on screen and needs a redraw.
    pub redraw: bool,
}

/// The fast game ticker and the slow clock-refresh ticker, started and
/// stopped together.
#[derive(Debug, Clone)]
pub struct Schedule {
    game: Ticker,
    clock: Ticker,
}

impl Schedule {
    #[must_use]
    pub fn new(tick_interval: Duration, clock_interval: Duration) -> Self {
        Self {
            game: Ticker::new(tick_interval),
            clock: Ticker::new(clock_interval),
        }
    }

    pub fn start(&mut self, now: Instant) {
        self.game.start(now);
        self.clock.start(now);
    }

    pub fn stop(&mut self) {
        self.game.stop();
        self.clock.stop();
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.game.is_running() || self.clock.is_running()
    }

    pub fn poll(&mut self, now: Instant) -> Fired {
        let advance = self.game.poll(now);
        let clock = self.clock.poll(now);

        Fired {
            advance,
            redraw: advance || clock,
        }
    }

    /// How long the loop may wait for input before a trigger is due.
    ///
    /// Falls back to the game interval while both tickers are stopped.
    #[must_use]
    pub fn next_wakeup(&self, now: Instant) -> Duration {
        match (self.game.time_until_due(now), self.clock.time_until_due(now)) {
            (Some(game), Some(clock)) => game.min(clock),
            (Some(only), None) | (None, Some(only)) => only,
            (None, None) => self.game.interval(),
        }
    }

    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        self.game.interval()
    }
}
