//! Driver: owns a session plus the gravity timer and the pause gate.
//!
//! The driver is the input boundary. Front ends hand it discrete commands and
//! elapsed time; it decides which of them reach the session. Everything runs
//! on the caller's thread, one command at a time.

use tracing::{debug, info};

use blockfall_core::{ConfigError, GameSnapshot, Session};
use blockfall_types::{GameAction, MoveOutcome};

use crate::config::DriverConfig;

/// What a dispatch did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dispatch {
    /// Outcome of the last command that reached the session, `None` if the
    /// command was suppressed (or no tick was due).
    pub outcome: Option<MoveOutcome>,
    /// New score, set only when it changed.
    pub score: Option<u32>,
    /// Gravity ticks issued by [`Driver::advance`].
    pub ticks: u32,
}

impl Dispatch {
    pub fn suppressed(&self) -> bool {
        self.outcome.is_none()
    }
}

pub struct Driver {
    session: Session,
    gravity_ms: u32,
    /// Time accumulated toward the next tick.
    elapsed_ms: u32,
    last_score: u32,
}

impl Driver {
    pub fn new(config: &DriverConfig, seed: u32) -> Result<Self, ConfigError> {
        let session = Session::with_config(config.board, seed)?;
        Ok(Self::from_session(session, config.gravity_ms))
    }

    pub fn from_session(session: Session, gravity_ms: u32) -> Self {
        let last_score = session.score();
        Self {
            session,
            gravity_ms: gravity_ms.max(1),
            elapsed_ms: 0,
            last_score,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn gravity_ms(&self) -> u32 {
        self.gravity_ms
    }

    /// True when gravity is active: not paused and not game over.
    pub fn running(&self) -> bool {
        !self.session.paused() && !self.session.game_over()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.session.snapshot()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.session.snapshot_into(out);
    }

    /// Deliver one command from the input source
    ///
    /// While paused, everything except `TogglePause` and `Restart` is dropped.
    pub fn dispatch(&mut self, action: GameAction) -> Dispatch {
        if self.session.paused() && !action.allowed_while_paused() {
            debug!(action = action.as_str(), "suppressed while paused");
            return Dispatch::default();
        }

        let was_over = self.session.game_over();
        let outcome = self.session.apply(action);

        match action {
            GameAction::Restart => {
                self.elapsed_ms = 0;
                info!(episode = self.session.episode_id(), "restarted");
            }
            GameAction::TogglePause => {
                debug!(paused = self.session.paused(), "pause toggled");
            }
            _ => {}
        }

        if let MoveOutcome::Locked { lines_cleared } = outcome {
            if lines_cleared > 0 {
                debug!(lines_cleared, score = self.session.score(), "lines cleared");
            }
        }

        if !was_over && self.session.game_over() {
            self.elapsed_ms = 0;
            info!(score = self.session.score(), "game over");
        }

        Dispatch {
            outcome: Some(outcome),
            score: self.take_score_change(),
            ticks: 0,
        }
    }

    /// Feed elapsed wall time to the gravity timer
    ///
    /// Issues one `Tick` per full gravity interval. Time does not accumulate
    /// while paused or after game over.
    pub fn advance(&mut self, elapsed_ms: u32) -> Dispatch {
        let mut result = Dispatch::default();
        if !self.running() {
            return result;
        }

        self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms);
        while self.running() && self.elapsed_ms >= self.gravity_ms {
            self.elapsed_ms -= self.gravity_ms;
            let d = self.dispatch(GameAction::Tick);
            result.outcome = d.outcome;
            if d.score.is_some() {
                result.score = d.score;
            }
            result.ticks += 1;
        }
        result
    }

    /// Milliseconds until the next tick is due, `None` while the timer is stopped.
    pub fn until_next_tick(&self) -> Option<u32> {
        if !self.running() {
            return None;
        }
        Some(self.gravity_ms.saturating_sub(self.elapsed_ms))
    }

    fn take_score_change(&mut self) -> Option<u32> {
        let score = self.session.score();
        if score == self.last_score {
            return None;
        }
        self.last_score = score;
        Some(score)
    }
}

/// Score display fed only by [`Dispatch::score`] pushes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreDisplay {
    shown: u32,
}

impl ScoreDisplay {
    /// Start from the driver's current score.
    pub fn new(driver: &Driver) -> Self {
        Self {
            shown: driver.session().score(),
        }
    }

    /// Take the score push from a dispatch, if any. Returns true when the
    /// shown value changed.
    pub fn observe(&mut self, dispatch: &Dispatch) -> bool {
        match dispatch.score {
            Some(score) if score != self.shown => {
                self.shown = score;
                true
            }
            _ => false,
        }
    }

    pub fn shown(&self) -> u32 {
        self.shown
    }
}
