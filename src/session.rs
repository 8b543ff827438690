//! Drives a [`GameEngine`] in real time: the human countdown and the bot's
//! thinking delay run as cancelable tokio tasks.

use std::ops::ControlFlow;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::time::Duration;

use crate::{
    common::{BoardError, GameMode, MoveError},
    config::{BOT_THINKING_DELAY_MS, TIME_UNIT_MS},
    game::{CountdownTick, GameEngine, GameState, MoveReport, NextTurn, TurnToken},
    observer::GameObserver,
    timer::{self, TaskHandle},
};

/// Real-time pacing of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Length of one countdown unit.
    pub time_unit: Duration,
    /// Pause before the bot's move is applied; zero for headless play.
    pub bot_delay: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            time_unit: Duration::from_millis(TIME_UNIT_MS),
            bot_delay: Duration::from_millis(BOT_THINKING_DELAY_MS),
        }
    }
}

struct Shared {
    engine: GameEngine,
    pending: Option<TaskHandle>,
}

/// Shared handle to a running game. Cloning yields another handle to the
/// same game. All methods must be called from within a tokio runtime.
#[derive(Clone)]
pub struct GameSession {
    shared: Arc<Mutex<Shared>>,
    config: SessionConfig,
}

impl GameSession {
    pub fn new(engine: GameEngine, config: SessionConfig) -> Self {
        Self {
            shared: Arc::new(Mutex::new(Shared {
                engine,
                pending: None,
            })),
            config,
        }
    }

    pub fn config(&self) -> SessionConfig {
        self.config
    }

    /// Register an observer on the underlying engine.
    pub fn subscribe(&self, observer: Box<dyn GameObserver + Send>) {
        lock(&self.shared).engine.subscribe(observer);
    }

    /// Start a fresh game, cancelling whatever the previous game had pending.
    pub fn start_new_game(&self, mode: GameMode) -> GameState {
        let mut guard = lock(&self.shared);
        cancel_pending(&mut guard);
        let state = guard.engine.start_new_game(mode);
        let next = guard.engine.next_turn();
        dispatch(&self.shared, &mut guard, self.config, next);
        state
    }

    /// Restore a snapshot and schedule whatever its turn calls for. On error
    /// the current game and its timers are left alone.
    pub fn load_state(&self, state: GameState) -> Result<(), BoardError> {
        let mut guard = lock(&self.shared);
        guard.engine.load_state(state)?;
        let next = guard.engine.next_turn();
        dispatch(&self.shared, &mut guard, self.config, next);
        Ok(())
    }

    /// Forward a human move. Rejections leave the game and its timers as
    /// they were.
    pub fn attempt_move(&self, row: usize, col: usize) -> Result<MoveReport, MoveError> {
        let mut guard = lock(&self.shared);
        let report = guard.engine.attempt_move(row, col)?;
        dispatch(&self.shared, &mut guard, self.config, report.next);
        Ok(report)
    }

    pub fn state(&self) -> GameState {
        lock(&self.shared).engine.state()
    }

    /// Whether a countdown or bot move is currently scheduled.
    pub fn has_pending_task(&self) -> bool {
        lock(&self.shared)
            .pending
            .as_ref()
            .is_some_and(|task| !task.is_finished())
    }

    /// Cancel any scheduled callback without touching the game.
    pub fn cancel_timers(&self) {
        cancel_pending(&mut lock(&self.shared));
    }
}

fn lock(shared: &Mutex<Shared>) -> MutexGuard<'_, Shared> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

fn cancel_pending(shared: &mut Shared) {
    if let Some(task) = shared.pending.take() {
        task.cancel();
    }
}

/// Replace the pending task with whatever `next` calls for.
fn dispatch(shared: &Arc<Mutex<Shared>>, guard: &mut Shared, config: SessionConfig, next: NextTurn) {
    cancel_pending(guard);
    let token = guard.engine.turn_token();
    match next {
        NextTurn::Finished => {
            log::debug!("no further turns scheduled");
        }
        NextTurn::BotThinking => {
            let shared = Arc::clone(shared);
            guard.pending = Some(timer::schedule_once(config.bot_delay, move || {
                run_bot_turn(&shared, config, token)
            }));
        }
        NextTurn::Countdown(start) => {
            log::debug!("countdown started at {}", start);
            let shared = Arc::clone(shared);
            guard.pending = Some(timer::schedule_every(config.time_unit, move || {
                run_countdown_tick(&shared, config, token)
            }));
        }
    }
}

fn run_bot_turn(shared: &Arc<Mutex<Shared>>, config: SessionConfig, token: TurnToken) {
    let mut guard = lock(shared);
    if guard.engine.turn_token() != token {
        log::debug!("dropping stale bot move for {:?}", token);
        return;
    }
    // This task is the pending one; detach it rather than abort itself.
    guard.pending = None;
    match guard.engine.play_bot_move() {
        Ok(report) => dispatch(shared, &mut guard, config, report.next),
        Err(e) => log::warn!("bot move rejected: {}", e),
    }
}

fn run_countdown_tick(shared: &Arc<Mutex<Shared>>, config: SessionConfig, token: TurnToken) -> ControlFlow<()> {
    let mut guard = lock(shared);
    if guard.engine.turn_token() != token {
        return ControlFlow::Break(());
    }
    match guard.engine.tick_countdown() {
        CountdownTick::Remaining(_) => ControlFlow::Continue(()),
        CountdownTick::Expired(report) => {
            guard.pending = None;
            dispatch(shared, &mut guard, config, report.next);
            ControlFlow::Break(())
        }
        CountdownTick::Idle => {
            guard.pending = None;
            ControlFlow::Break(())
        }
    }
}
