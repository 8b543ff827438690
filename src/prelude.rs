//! Commonly used types and utilities for ease of import.

pub use crate::{
    Board, Cell, DrawRule, EngineConfig, GameEngine, GameEvent, GameMode, GameObserver, GameState,
    MoveError, MoveReport, NextTurn, Outcome, Player,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, GameSession, SessionConfig, TaskHandle};
