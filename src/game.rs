use alloc::boxed::Box;
use alloc::vec::Vec;
use rand::{rngs::SmallRng, Rng, SeedableRng};

use crate::{
    board::Board,
    bot,
    common::{BoardError, Cell, GameMode, MoveError, Outcome, Player},
    config::{DrawRule, EngineConfig, BOT_PLAYER, INITIAL_WIN_LENGTH},
    observer::{GameEvent, GameObserver},
};

/// Serializable snapshot of a game.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub mode: GameMode,
    pub current_player: Player,
    pub board: Board,
    pub win_length: usize,
    pub outcome: Outcome,
    pub active: bool,
    /// Remaining countdown units on a human turn, `None` when no countdown runs.
    pub time_left: Option<u32>,
}

/// Who moves next and how the turn is driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextTurn {
    /// A human turn with a countdown starting at the given value.
    Countdown(u32),
    /// The bot moves after its thinking delay.
    BotThinking,
    /// Nothing more to schedule.
    Finished,
}

/// Origin of a placed mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    Human,
    Bot,
    /// Random move forced by an expired countdown.
    Forced,
}

/// Summary of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    pub row: usize,
    pub col: usize,
    pub player: Player,
    pub kind: MoveKind,
    pub outcome: Outcome,
    /// The move filled the board and triggered an expansion.
    pub expanded: bool,
    pub next: NextTurn,
}

/// Result of one countdown step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownTick {
    /// No countdown is running.
    Idle,
    Remaining(u32),
    /// The countdown hit zero and a random move was played.
    Expired(MoveReport),
}

/// Identifies the turn a scheduled callback was created for. Any new game or
/// accepted move produces a different token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TurnToken {
    pub game: u64,
    pub turn: u64,
}

/// Core game logic holding the board and turn state.
pub struct GameEngine {
    config: EngineConfig,
    mode: GameMode,
    board: Board,
    current_player: Player,
    win_length: usize,
    outcome: Outcome,
    active: bool,
    time_left: Option<u32>,
    game_id: u64,
    turn: u64,
    rng: SmallRng,
    observers: Vec<Box<dyn GameObserver + Send>>,
}

impl GameEngine {
    /// Create an idle engine with default configuration, seeded from the
    /// thread RNG.
    #[cfg(feature = "std")]
    pub fn new() -> Self {
        let mut seed_rng = rand::rng();
        Self::with_config(EngineConfig::default(), SmallRng::from_rng(&mut seed_rng))
    }

    /// Create an idle engine with a fixed seed for reproducible games.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_config(EngineConfig::default(), SmallRng::seed_from_u64(seed))
    }

    pub fn with_config(config: EngineConfig, rng: SmallRng) -> Self {
        Self {
            config,
            mode: GameMode::PlayerVsPlayer,
            board: Board::new(),
            current_player: Player::X,
            win_length: INITIAL_WIN_LENGTH,
            outcome: Outcome::InProgress,
            active: false,
            time_left: None,
            game_id: 0,
            turn: 0,
            rng,
            observers: Vec::new(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Register an observer notified after every state change.
    pub fn subscribe(&mut self, observer: Box<dyn GameObserver + Send>) {
        self.observers.push(observer);
    }

    /// Reset to an empty 3x3 board and pick the starting player.
    pub fn start_new_game(&mut self, mode: GameMode) -> GameState {
        let first = match self.config.first_player {
            Some(p) => p,
            None if self.rng.random_bool(0.5) => Player::X,
            None => Player::O,
        };
        self.mode = mode;
        self.board = Board::new();
        self.current_player = first;
        self.win_length = INITIAL_WIN_LENGTH;
        self.outcome = Outcome::InProgress;
        self.active = true;
        self.game_id += 1;
        self.turn = 0;
        self.begin_turn();
        log::info!("game {} started: {:?}, {} moves first", self.game_id, mode, first);
        self.notify(GameEvent::GameStarted { mode, first });
        self.state()
    }

    /// Replace the current game with a snapshot. A snapshot still in
    /// progress must leave a move to play and must not already be won.
    pub fn load_state(&mut self, state: GameState) -> Result<(), BoardError> {
        let size = state.board.size();
        let cap = self.config.max_win_length.max(INITIAL_WIN_LENGTH);
        if state.win_length < INITIAL_WIN_LENGTH || state.win_length > cap.min(size) {
            return Err(BoardError::WinLengthOutOfRange {
                win_length: state.win_length,
                size,
            });
        }
        if state.outcome == Outcome::InProgress {
            if let Some(p) = state.board.winner(state.win_length) {
                return Err(BoardError::WinnerInProgress(p));
            }
            if state.board.is_full() {
                return Err(BoardError::FullBoardInProgress);
            }
        }
        self.mode = state.mode;
        self.board = state.board;
        self.current_player = state.current_player;
        self.win_length = state.win_length;
        self.outcome = state.outcome;
        self.active = state.active;
        self.game_id += 1;
        self.turn = 0;
        self.time_left = None;
        if self.is_in_progress() {
            self.begin_turn();
        }
        log::info!("game {} loaded: {}x{}, {} to move", self.game_id, size, size, self.current_player);
        self.notify(GameEvent::StateLoaded);
        Ok(())
    }

    /// Place the current player's mark at (row, col).
    pub fn attempt_move(&mut self, row: usize, col: usize) -> Result<MoveReport, MoveError> {
        self.check_playable()?;
        if self.is_bot_turn() {
            return Err(MoveError::BotTurn);
        }
        self.apply_move(row, col, MoveKind::Human)
    }

    /// Play a uniformly random empty cell for whoever is to move.
    pub fn force_random_move(&mut self) -> Result<MoveReport, MoveError> {
        self.check_playable()?;
        let (row, col) = bot::random_empty_cell(&self.board, &mut self.rng).ok_or(MoveError::BoardFull)?;
        log::debug!("forcing random move at ({}, {})", row, col);
        self.apply_move(row, col, MoveKind::Forced)
    }

    /// Play the heuristic bot's choice.
    pub fn play_bot_move(&mut self) -> Result<MoveReport, MoveError> {
        self.check_playable()?;
        if !self.is_bot_turn() {
            return Err(MoveError::NotBotTurn);
        }
        let (row, col) = bot::select_move(&mut self.board, BOT_PLAYER, self.win_length, &mut self.rng)
            .ok_or(MoveError::BoardFull)?;
        self.apply_move(row, col, MoveKind::Bot)
    }

    /// Advance the countdown by one time unit, forcing a random move at zero.
    pub fn tick_countdown(&mut self) -> CountdownTick {
        if !self.is_in_progress() {
            self.time_left = None;
            return CountdownTick::Idle;
        }
        let Some(left) = self.time_left else {
            return CountdownTick::Idle;
        };
        let remaining = left.saturating_sub(1);
        if remaining > 0 {
            self.time_left = Some(remaining);
            self.notify(GameEvent::CountdownTicked { remaining });
            return CountdownTick::Remaining(remaining);
        }
        self.time_left = Some(0);
        self.notify(GameEvent::CountdownTicked { remaining: 0 });
        self.time_left = None;
        match self.force_random_move() {
            Ok(report) => CountdownTick::Expired(report),
            Err(e) => {
                log::warn!("countdown expired but no move was possible: {}", e);
                CountdownTick::Idle
            }
        }
    }

    /// Snapshot of the current game.
    pub fn state(&self) -> GameState {
        GameState {
            mode: self.mode,
            current_player: self.current_player,
            board: self.board.clone(),
            win_length: self.win_length,
            outcome: self.outcome,
            active: self.active,
            time_left: self.time_left,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn win_length(&self) -> usize {
        self.win_length
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn time_left(&self) -> Option<u32> {
        self.time_left
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn turn_token(&self) -> TurnToken {
        TurnToken {
            game: self.game_id,
            turn: self.turn,
        }
    }

    /// How the pending turn should be driven.
    pub fn next_turn(&self) -> NextTurn {
        if !self.is_in_progress() {
            NextTurn::Finished
        } else if self.is_bot_turn() {
            NextTurn::BotThinking
        } else {
            NextTurn::Countdown(self.time_left.unwrap_or(self.config.countdown_start))
        }
    }

    fn is_in_progress(&self) -> bool {
        self.active && self.outcome == Outcome::InProgress
    }

    fn is_bot_turn(&self) -> bool {
        self.mode == GameMode::PlayerVsBot && self.current_player == BOT_PLAYER
    }

    fn check_playable(&self) -> Result<(), MoveError> {
        if !self.active {
            return Err(MoveError::NotActive);
        }
        if self.outcome != Outcome::InProgress {
            return Err(MoveError::GameOver);
        }
        Ok(())
    }

    fn begin_turn(&mut self) -> NextTurn {
        if self.is_bot_turn() {
            self.time_left = None;
            NextTurn::BotThinking
        } else {
            self.time_left = Some(self.config.countdown_start);
            NextTurn::Countdown(self.config.countdown_start)
        }
    }

    fn apply_move(&mut self, row: usize, col: usize, kind: MoveKind) -> Result<MoveReport, MoveError> {
        let size = self.board.size();
        match self.board.get(row, col) {
            None => return Err(MoveError::OutOfBounds { row, col, size }),
            Some(Cell::Occupied(_)) => return Err(MoveError::CellOccupied { row, col }),
            Some(Cell::Empty) => {}
        }
        let player = self.current_player;
        self.board.set(row, col, Cell::Occupied(player));
        self.turn += 1;
        self.time_left = None;
        log::debug!("{} played ({}, {}) [{:?}]", player, row, col, kind);
        let played = GameEvent::MovePlayed { row, col, player, kind };

        if self.board.wins_through(row, col, self.win_length) {
            self.outcome = Outcome::Won(player);
            log::info!("game {}: {} wins", self.game_id, player);
            self.notify(played);
            self.notify(GameEvent::GameWon(player));
            return Ok(self.report(row, col, player, kind, false, NextTurn::Finished));
        }

        let mut expanded = false;
        if self.board.is_full() {
            match self.config.draw_rule {
                DrawRule::End => {
                    self.outcome = Outcome::Draw;
                    log::info!("game {}: draw", self.game_id);
                    self.notify(played);
                    self.notify(GameEvent::GameDrawn);
                    return Ok(self.report(row, col, player, kind, false, NextTurn::Finished));
                }
                DrawRule::Expand => {
                    self.expand();
                    expanded = true;
                }
            }
        }

        self.current_player = player.opponent();
        let next = self.begin_turn();
        self.notify(played);
        if expanded {
            let size = self.board.size();
            let win_length = self.win_length;
            self.notify(GameEvent::BoardExpanded { size, win_length });
        }
        Ok(self.report(row, col, player, kind, expanded, next))
    }

    fn expand(&mut self) {
        self.board.expand();
        if self.win_length < self.config.max_win_length {
            self.win_length += 1;
        }
        let size = self.board.size();
        log::info!("board full, expanded to {}x{} (win length {})", size, size, self.win_length);
    }

    fn report(
        &self,
        row: usize,
        col: usize,
        player: Player,
        kind: MoveKind,
        expanded: bool,
        next: NextTurn,
    ) -> MoveReport {
        MoveReport {
            row,
            col,
            player,
            kind,
            outcome: self.outcome,
            expanded,
            next,
        }
    }

    fn notify(&mut self, event: GameEvent) {
        if self.observers.is_empty() {
            return;
        }
        let state = self.state();
        for observer in self.observers.iter_mut() {
            observer.on_event(&event, &state);
        }
    }
}

#[cfg(feature = "std")]
impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
