use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};
use tictactoe::{
    Board, Cell, EngineConfig, GameEngine, GameMode, GameState, MoveError, Outcome, Player,
    MAX_WIN_LENGTH,
};

fn pvp_engine(seed: u64) -> GameEngine {
    let config = EngineConfig {
        first_player: Some(Player::X),
        ..EngineConfig::default()
    };
    let mut e = GameEngine::with_config(config, SmallRng::seed_from_u64(seed));
    e.start_new_game(GameMode::PlayerVsPlayer);
    e
}

/// Four cells of a straight line on a 5x5 board.
fn segment(dir: usize, a: usize, b: usize) -> [(usize, usize); 4] {
    let (start, step): ((usize, usize), (isize, isize)) = match dir {
        0 => ((a, b), (0, 1)),
        1 => ((b, a), (1, 0)),
        2 => ((b, a.min(1)), (1, 1)),
        _ => ((b, 3 + a.min(1)), (1, -1)),
    };
    core::array::from_fn(|k| {
        let r = start.0 as isize + step.0 * k as isize;
        let c = start.1 as isize + step.1 * k as isize;
        (r as usize, c as usize)
    })
}

fn cell_strategy() -> impl Strategy<Value = Cell> {
    prop_oneof![
        Just(Cell::Empty),
        Just(Cell::Occupied(Player::X)),
        Just(Cell::Occupied(Player::O)),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Accepted moves add exactly one mark and hand the turn over unless the game ended;
    /// rejected moves change nothing. Board invariants hold throughout.
    #[test]
    fn moves_keep_invariants(seed in any::<u64>(), moves in prop::collection::vec((0..9usize, 0..9usize), 1..120)) {
        let mut e = pvp_engine(seed);
        for (row, col) in moves {
            let before = e.state();
            match e.attempt_move(row, col) {
                Ok(report) => {
                    prop_assert_eq!(e.board().mark_count(), before.board.mark_count() + 1);
                    prop_assert_eq!(report.player, before.current_player);
                    match report.outcome {
                        Outcome::InProgress => {
                            prop_assert_eq!(e.current_player(), before.current_player.opponent());
                        }
                        _ => {
                            prop_assert_eq!(e.current_player(), before.current_player);
                        }
                    }
                    if report.expanded {
                        prop_assert_eq!(e.board().size(), before.board.size() + 2);
                        prop_assert!(e.win_length() >= before.win_length);
                    }
                }
                Err(_) => {
                    prop_assert_eq!(e.state(), before);
                }
            }
            let size = e.board().size();
            prop_assert!(size >= 3 && size % 2 == 1);
            prop_assert!(e.win_length() <= MAX_WIN_LENGTH && e.win_length() <= size);
        }
    }

    /// Rejecting a move twice is the same as rejecting it once.
    #[test]
    fn occupied_rejection_is_idempotent(seed in any::<u64>(), row in 0..3usize, col in 0..3usize) {
        let mut e = pvp_engine(seed);
        e.attempt_move(row, col).unwrap();
        let after_first = e.state();
        let err1 = e.attempt_move(row, col).unwrap_err();
        let once = e.state();
        let err2 = e.attempt_move(row, col).unwrap_err();
        prop_assert_eq!(err1, MoveError::CellOccupied { row, col });
        prop_assert_eq!(err1, err2);
        prop_assert_eq!(&once, &after_first);
        prop_assert_eq!(e.state(), once);
    }

    /// A run of win_length - 1 is completed from either end.
    #[test]
    fn win_detected_at_either_end(dir in 0..4usize, a in 0..5usize, b in 0..2usize, at_start in any::<bool>()) {
        let cells = segment(dir, a, b);
        let (winning, run) = if at_start {
            (cells[0], &cells[1..])
        } else {
            (cells[3], &cells[..3])
        };
        let mut rows = vec![vec![Cell::Empty; 5]; 5];
        for &(r, c) in run {
            rows[r][c] = Cell::Occupied(Player::X);
        }
        let mut e = pvp_engine(0);
        e.load_state(GameState {
            mode: GameMode::PlayerVsPlayer,
            current_player: Player::X,
            board: Board::from_rows(&rows).unwrap(),
            win_length: 4,
            outcome: Outcome::InProgress,
            active: true,
            time_left: None,
        }).unwrap();
        let report = e.attempt_move(winning.0, winning.1).unwrap();
        prop_assert_eq!(report.outcome, Outcome::Won(Player::X));
    }

    /// Expansion shifts every mark by one row and column and leaves a blank border.
    #[test]
    fn expansion_preserves_relative_positions(cells in prop::collection::vec(cell_strategy(), 25)) {
        let rows: Vec<Vec<Cell>> = cells.chunks(5).map(|c| c.to_vec()).collect();
        let original = Board::from_rows(&rows).unwrap();
        let mut grown = original.clone();
        grown.expand();
        prop_assert_eq!(grown.size(), 7);
        prop_assert_eq!(grown.mark_count(), original.mark_count());
        for r in 0..7 {
            for c in 0..7 {
                let expected = if (1..6).contains(&r) && (1..6).contains(&c) {
                    original.get(r - 1, c - 1)
                } else {
                    Some(Cell::Empty)
                };
                prop_assert_eq!(grown.get(r, c), expected);
            }
        }
    }

    /// New games always come back to a clean 3x3 regardless of history.
    #[test]
    fn new_game_resets(seed in any::<u64>(), forced in 0..40usize) {
        let mut e = pvp_engine(seed);
        for _ in 0..forced {
            if e.force_random_move().is_err() {
                break;
            }
        }
        let state = e.start_new_game(GameMode::PlayerVsBot);
        prop_assert_eq!(state.board, Board::new());
        prop_assert_eq!(state.win_length, 3);
        prop_assert_eq!(state.outcome, Outcome::InProgress);
    }
}
