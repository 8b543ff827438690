//! Terminal rendering and input parsing.

use std::fmt::Write as _;
use std::string::String;

use crate::{
    common::{Cell, GameMode, Outcome},
    config::BOT_PLAYER,
    game::GameState,
    observer::{GameEvent, GameObserver},
};

/// Format a coordinate as column letter plus 1-based row, e.g. `B3`.
pub fn coord_to_string(r: usize, c: usize) -> String {
    match column_letter(c) {
        Some(letter) => std::format!("{}{}", letter, r + 1),
        None => std::format!("{},{}", r + 1, c + 1),
    }
}

fn column_letter(c: usize) -> Option<char> {
    u8::try_from(c).ok().filter(|c| *c < 26).map(|c| (b'A' + c) as char)
}

/// Parse `B3` (column letter, 1-based row) or `3 2` / `3,2` (1-based row
/// then column) into zero-based (row, col).
pub fn parse_coord(input: &str) -> Option<(usize, usize)> {
    let input = input.trim();
    let mut chars = input.chars();
    let first = chars.next()?;
    if first.is_ascii_alphabetic() {
        let col = (first.to_ascii_uppercase() as u8 - b'A') as usize;
        let row: usize = chars.as_str().trim().parse().ok()?;
        return row.checked_sub(1).map(|r| (r, col));
    }
    let mut parts = input.split(|c: char| c == ',' || c.is_whitespace()).filter(|p| !p.is_empty());
    let row: usize = parts.next()?.parse().ok()?;
    let col: usize = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((row.checked_sub(1)?, col.checked_sub(1)?))
}

/// Render the board with column letters and row numbers.
pub fn render_board(state: &GameState) -> String {
    let size = state.board.size();
    let mut out = String::new();
    out.push_str("   ");
    for c in 0..size {
        match column_letter(c) {
            Some(letter) => {
                let _ = write!(out, " {}", letter);
            }
            None => {
                let _ = write!(out, " {}", (c + 1) % 10);
            }
        }
    }
    out.push('\n');
    for (r, row) in state.board.rows().enumerate() {
        let _ = write!(out, "{:2} ", r + 1);
        for cell in row {
            let ch = match cell {
                Cell::Empty => '.',
                Cell::Occupied(p) => p.symbol(),
            };
            let _ = write!(out, " {}", ch);
        }
        out.push('\n');
    }
    out
}

/// One-line summary of whose turn it is or how the game ended.
pub fn status_line(state: &GameState) -> String {
    if !state.active {
        return String::from("No game in progress");
    }
    match state.outcome {
        Outcome::Won(p) => std::format!("{} wins!", p),
        Outcome::Draw => String::from("Draw"),
        Outcome::InProgress => {
            let mut line = std::format!(
                "{} to move ({} in a row, {})",
                state.current_player,
                state.win_length,
                state.mode.display_name()
            );
            if is_bot_to_move(state) {
                line.push_str(" - computer is thinking");
            } else if let Some(t) = state.time_left {
                let _ = write!(line, " - {}s left", t);
            }
            line
        }
    }
}

/// Input should be refused while this is true.
pub fn input_locked(state: &GameState) -> bool {
    !state.active || state.outcome != Outcome::InProgress || is_bot_to_move(state)
}

/// Switching mode restarts the game, so it is only offered before the first
/// mark or once the game is over.
pub fn mode_change_allowed(state: &GameState) -> bool {
    !state.active || state.outcome != Outcome::InProgress || state.board.mark_count() == 0
}

fn is_bot_to_move(state: &GameState) -> bool {
    state.mode == GameMode::PlayerVsBot && state.current_player == BOT_PLAYER
}

/// Observer that prints the board and status to stdout.
pub struct TerminalView;

impl GameObserver for TerminalView {
    fn on_event(&mut self, event: &GameEvent, state: &GameState) {
        match event {
            GameEvent::CountdownTicked { remaining } => {
                if *remaining <= 2 {
                    std::println!("{} has {}s left", state.current_player, remaining);
                }
                return;
            }
            GameEvent::MovePlayed { row, col, player, kind } => {
                std::println!("{} -> {} ({:?})", player, coord_to_string(*row, *col), kind);
            }
            GameEvent::GameStarted { mode, first } => {
                std::println!("New game: {}. {} starts.", mode.display_name(), first);
            }
            GameEvent::StateLoaded => {
                std::println!("Position loaded ({}).", state.mode.display_name());
            }
            GameEvent::BoardExpanded { size, win_length } => {
                std::println!("Board full! Expanded to {}x{}, {} in a row wins.", size, size, win_length);
                return;
            }
            GameEvent::GameWon(p) => {
                std::println!("*** {} wins! Type `new` to play again. ***", p);
                return;
            }
            GameEvent::GameDrawn => {
                std::println!("*** Draw. Type `new` to play again. ***");
                return;
            }
        }
        std::print!("\n{}", render_board(state));
        std::println!("{}", status_line(state));
    }
}
