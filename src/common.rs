//! Common types for tic-tac-toe: players, cells, modes, outcomes and errors.

/// One of the two symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Player {
    X,
    O,
}

impl Player {
    /// The other symbol.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl core::fmt::Display for Player {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A single square of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Player),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// Who sits on the O side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameMode {
    #[default]
    PlayerVsPlayer,
    PlayerVsBot,
}

impl GameMode {
    pub fn display_name(self) -> &'static str {
        match self {
            GameMode::PlayerVsPlayer => "2 Players",
            GameMode::PlayerVsBot => "vs Computer",
        }
    }
}

/// Result of the game so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    InProgress,
    Won(Player),
    /// Only reachable with [`DrawRule::End`](crate::DrawRule::End).
    Draw,
}

/// Reasons a move request was rejected. State is untouched in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// No game has been started yet.
    NotActive,
    /// The game already has an outcome.
    GameOver,
    /// Coordinates fall outside the current board.
    OutOfBounds { row: usize, col: usize, size: usize },
    /// Target cell already holds a mark.
    CellOccupied { row: usize, col: usize },
    /// A human tried to move while the bot is to play.
    BotTurn,
    /// Bot move requested outside the bot's turn.
    NotBotTurn,
    /// No empty cell left to choose from.
    BoardFull,
}

impl core::fmt::Display for MoveError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MoveError::NotActive => write!(f, "No game is active"),
            MoveError::GameOver => write!(f, "The game is already over"),
            MoveError::OutOfBounds { row, col, size } => {
                write!(f, "Cell ({}, {}) is outside the {}x{} board", row, col, size, size)
            }
            MoveError::CellOccupied { row, col } => {
                write!(f, "Cell ({}, {}) is already taken", row, col)
            }
            MoveError::BotTurn => write!(f, "It is the computer's turn"),
            MoveError::NotBotTurn => write!(f, "It is not the computer's turn"),
            MoveError::BoardFull => write!(f, "No empty cell is left"),
        }
    }
}

/// Errors building or restoring a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Rows have differing lengths or do not match the row count.
    NotSquare,
    /// Side length is even or smaller than three.
    InvalidSize(usize),
    /// Unknown character in a textual board.
    InvalidCell(char),
    /// Win length below the initial value or above the cap or board size.
    WinLengthOutOfRange { win_length: usize, size: usize },
    /// Snapshot is in progress but its board has no empty cell.
    FullBoardInProgress,
    /// Snapshot is in progress but the player already holds a winning run.
    WinnerInProgress(Player),
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::NotSquare => write!(f, "Board is not square"),
            BoardError::InvalidSize(size) => {
                write!(f, "Board size {} must be odd and at least 3", size)
            }
            BoardError::InvalidCell(ch) => write!(f, "Unknown cell symbol '{}'", ch),
            BoardError::WinLengthOutOfRange { win_length, size } => {
                write!(f, "Win length {} is not valid for a {}x{} board", win_length, size, size)
            }
            BoardError::FullBoardInProgress => write!(f, "A game in progress cannot have a full board"),
            BoardError::WinnerInProgress(p) => {
                write!(f, "{} already has a winning line but the game is in progress", p)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MoveError {}
#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
