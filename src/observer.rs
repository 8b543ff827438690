use crate::{
    common::{GameMode, Player},
    game::{GameState, MoveKind},
};

/// Notifications emitted by the engine after each state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    GameStarted { mode: GameMode, first: Player },
    /// A snapshot replaced the current game.
    StateLoaded,
    MovePlayed { row: usize, col: usize, player: Player, kind: MoveKind },
    BoardExpanded { size: usize, win_length: usize },
    CountdownTicked { remaining: u32 },
    GameWon(Player),
    GameDrawn,
}

/// Receives engine events together with a snapshot of the resulting state.
///
/// Observers run while the engine is borrowed (and, inside a
/// [`GameSession`](crate::GameSession), while its lock is held), so they
/// must not call back into the engine or session.
pub trait GameObserver {
    fn on_event(&mut self, event: &GameEvent, state: &GameState);
}

impl<F> GameObserver for F
where
    F: FnMut(&GameEvent, &GameState),
{
    fn on_event(&mut self, event: &GameEvent, state: &GameState) {
        self(event, state)
    }
}
