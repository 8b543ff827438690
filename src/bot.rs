// Greedy one-ply opponent: win, block, center, then random.
// Trial marks are placed on the live board and removed again before returning.

use crate::{
    board::Board,
    common::{Cell, Player},
};
use rand::Rng;

/// Choose the bot's move. Returns `None` only when the board has no empty cell.
///
/// Priority, each scan in row-major order:
/// 1. a cell that wins immediately for `bot`;
/// 2. a cell where the opponent would win immediately (block);
/// 3. the center;
/// 4. a uniformly random empty cell.
pub fn select_move<R: Rng + ?Sized>(
    board: &mut Board,
    bot: Player,
    win_length: usize,
    rng: &mut R,
) -> Option<(usize, usize)> {
    if let Some(cell) = find_winning_cell(board, bot, win_length) {
        return Some(cell);
    }
    if let Some(cell) = find_winning_cell(board, bot.opponent(), win_length) {
        return Some(cell);
    }
    let (cr, cc) = board.center();
    if board.get(cr, cc) == Some(Cell::Empty) {
        return Some((cr, cc));
    }
    random_empty_cell(board, rng)
}

/// First empty cell (row-major) where placing `player` completes a run of
/// `win_length`.
pub fn find_winning_cell(board: &mut Board, player: Player, win_length: usize) -> Option<(usize, usize)> {
    for (r, c) in board.empty_cells() {
        board.set(r, c, Cell::Occupied(player));
        let wins = board.wins_through(r, c, win_length);
        board.set(r, c, Cell::Empty);
        if wins {
            return Some((r, c));
        }
    }
    None
}

/// Uniformly random empty cell.
pub fn random_empty_cell<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<(usize, usize)> {
    let empty = board.empty_cells();
    if empty.is_empty() {
        return None;
    }
    Some(empty[rng.random_range(0..empty.len())])
}
