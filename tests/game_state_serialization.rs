use proptest::prelude::*;
use tictactoe::{GameEngine, GameMode, GameState};

proptest! {
    #[test]
    fn game_state_roundtrip(seed in any::<u64>(), moves in 0..30usize) {
        let mut engine = GameEngine::with_seed(seed);
        engine.start_new_game(GameMode::PlayerVsPlayer);
        for _ in 0..moves {
            if engine.force_random_move().is_err() {
                break;
            }
        }
        let state = engine.state();
        let json = serde_json::to_string(&state).unwrap();
        let decoded: GameState = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(&state, &decoded);

        let mut restored = GameEngine::with_seed(seed.wrapping_add(1));
        restored.load_state(decoded).unwrap();
        prop_assert_eq!(restored.board(), engine.board());
        prop_assert_eq!(restored.current_player(), engine.current_player());
        prop_assert_eq!(restored.outcome(), engine.outcome());
        prop_assert_eq!(restored.win_length(), engine.win_length());
    }
}

fn snapshot_json() -> serde_json::Value {
    let mut engine = GameEngine::with_seed(4);
    engine.start_new_game(GameMode::PlayerVsPlayer);
    serde_json::to_value(engine.state()).unwrap()
}

#[test]
fn malformed_boards_fail_to_deserialize() {
    let cases = [
        (3, 5),  // too few cells for the side
        (3, 10), // too many
        (4, 16), // even side
        (1, 1),  // below the minimum
        (0, 0),
    ];
    for (size, cells) in cases {
        let mut v = snapshot_json();
        v["board"]["size"] = serde_json::json!(size);
        v["board"]["cells"] = serde_json::json!(vec!["Empty"; cells]);
        let decoded = serde_json::from_value::<GameState>(v);
        assert!(decoded.is_err(), "size {} with {} cells was accepted", size, cells);
    }
}

#[test]
fn valid_board_json_still_restores() {
    let mut v = snapshot_json();
    v["board"]["size"] = serde_json::json!(5);
    v["board"]["cells"] = serde_json::json!(vec!["Empty"; 25]);
    v["win_length"] = serde_json::json!(4);
    let decoded: GameState = serde_json::from_value(v).unwrap();

    let mut engine = GameEngine::with_seed(5);
    engine.load_state(decoded).unwrap();
    assert_eq!(engine.board().size(), 5);
    assert!(engine.attempt_move(4, 4).is_ok());
}

#[test]
fn full_board_in_progress_is_rejected_after_decoding() {
    let mut v = snapshot_json();
    v["board"] = serde_json::to_value("XOX\nXOO\nOXX".parse::<tictactoe::Board>().unwrap()).unwrap();
    let decoded: GameState = serde_json::from_value(v).unwrap();
    let mut engine = GameEngine::with_seed(6);
    assert_eq!(
        engine.load_state(decoded),
        Err(tictactoe::BoardError::FullBoardInProgress)
    );
    assert!(!engine.is_active());
}
