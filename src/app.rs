use std::io;
use std::time::Duration;

use log::info;

use crate::food::RandomSource;
use crate::game::{Session, TickOutcome};
use crate::input::GameInput;
use crate::scheduler::{Clock, Schedule};

/// Blocking modal notice, e.g. the game-over dialog.
pub trait Notifier {
    /// Shows `message` and returns once the player acknowledged it.
    fn announce(&mut self, message: &str) -> io::Result<()>;
}

/// Presentation collaborator: draws the session and delivers key input.
pub trait Frontend: Notifier {
    /// Waits up to `timeout` for one input event.
    fn next_input(&mut self, timeout: Duration) -> io::Result<Option<GameInput>>;

    /// Draws the whole screen from `session`. `elapsed` feeds the clock.
    fn redraw<R>(&mut self, session: &Session<R>, elapsed: Duration) -> io::Result<()>;
}

/// Whether the loop keeps going after one iteration.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Owns the session, its two periodic triggers and the time source.
#[derive(Debug)]
pub struct App<C, R> {
    session: Session<R>,
    schedule: Schedule,
    clock: C,
}

impl<C: Clock, R: RandomSource> App<C, R> {
    /// Wraps `session` and starts both triggers.
    #[must_use]
    pub fn new(session: Session<R>, mut schedule: Schedule, clock: C) -> Self {
        schedule.start(clock.now());
        Self {
            session,
            schedule,
            clock,
        }
    }

    #[must_use]
    pub fn session(&self) -> &Session<R> {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session<R> {
        &mut self.session
    }

    #[must_use]
    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Runs until the player quits.
    pub fn run<F: Frontend>(&mut self, frontend: &mut F) -> io::Result<()> {
        info!(
            "game loop started, tick every {} ms",
            self.schedule.tick_interval().as_millis()
        );
        self.redraw(frontend)?;

        while self.pump(frontend)? == Flow::Continue {}

        info!("player quit with score {}", self.session.score);
        Ok(())
    }

    /// One loop iteration: wait for input until the next trigger is due,
    /// then service whichever triggers fired.
    pub fn pump<F: Frontend>(&mut self, frontend: &mut F) -> io::Result<Flow> {
        let timeout = self.schedule.next_wakeup(self.clock.now());

        match frontend.next_input(timeout)? {
            Some(GameInput::Quit) => return Ok(Flow::Quit),
            Some(GameInput::Direction(direction)) => {
                self.session.steer(direction);
            }
            None => {}
        }

        let fired = self.schedule.poll(self.clock.now());
        if fired.advance && matches!(self.session.advance(), TickOutcome::GameOver(_)) {
            self.game_over(frontend)?;
        }
        if fired.redraw {
            self.redraw(frontend)?;
        }

        Ok(Flow::Continue)
    }

    /// Stops both triggers, blocks on the notice, then starts over.
    ///
    /// Triggers restart only after the session is fully reset so no redraw
    /// sees a half-initialized state.
    fn game_over<F: Frontend>(&mut self, frontend: &mut F) -> io::Result<()> {
        self.schedule.stop();
        frontend.announce(&self.session.game_over_message())?;

        let now = self.clock.now();
        self.session.restart(now);
        self.schedule.start(now);
        Ok(())
    }

    fn redraw<F: Frontend>(&self, frontend: &mut F) -> io::Result<()> {
        frontend.redraw(&self.session, self.session.elapsed(self.clock.now()))
    }
}
