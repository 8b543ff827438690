use crate::common::Player;

/// Side length of a freshly started board.
pub const INITIAL_BOARD_SIZE: usize = 3;
/// Run length required to win on a freshly started board.
pub const INITIAL_WIN_LENGTH: usize = 3;
/// Upper bound for the win length after expansions.
pub const MAX_WIN_LENGTH: usize = 4;
/// Cells added to each dimension when a full board expands.
pub const BOARD_GROWTH: usize = 2;
/// Time units a human gets before a random move is forced.
pub const TURN_COUNTDOWN: u32 = 5;
/// Pause before the bot's move is applied.
pub const BOT_THINKING_DELAY_MS: u64 = 500;
/// Length of one countdown unit.
pub const TIME_UNIT_MS: u64 = 1000;

/// Symbol played by the bot in [`GameMode::PlayerVsBot`](crate::GameMode).
pub const BOT_PLAYER: Player = Player::O;

/// What happens when the board fills up without a winner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum DrawRule {
    /// Grow the board and keep playing.
    #[default]
    Expand,
    /// End the game as a draw.
    End,
}

/// Tunables for a [`GameEngine`](crate::GameEngine).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub countdown_start: u32,
    pub max_win_length: usize,
    pub draw_rule: DrawRule,
    /// Pin the starting player; `None` picks one at random each game.
    pub first_player: Option<Player>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            countdown_start: TURN_COUNTDOWN,
            max_win_length: MAX_WIN_LENGTH,
            draw_rule: DrawRule::Expand,
            first_player: None,
        }
    }
}
