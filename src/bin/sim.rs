//! Headless PlayerVsBot games where the human side always times out.
//! Prints a JSON summary on stdout.

use serde_json::json;
use tictactoe::{CountdownTick, GameEngine, GameMode, NextTurn, Outcome};

/// Safety valve against a game that never finishes.
const MAX_MOVES: usize = 10_000;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <seed> [games]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let games: usize = match args.get(2) {
        Some(n) => n.parse()?,
        None => 1,
    };

    let mut engine = GameEngine::with_seed(seed);
    let mut x_wins = 0usize;
    let mut o_wins = 0usize;
    let mut unfinished = 0usize;
    let mut expansions = 0usize;
    let mut results = Vec::with_capacity(games);

    for game in 0..games {
        engine.start_new_game(GameMode::PlayerVsBot);
        let mut moves = 0usize;
        while moves < MAX_MOVES {
            let report = match engine.next_turn() {
                NextTurn::Finished => break,
                NextTurn::BotThinking => engine.play_bot_move()?,
                NextTurn::Countdown(_) => loop {
                    match engine.tick_countdown() {
                        CountdownTick::Remaining(_) => continue,
                        CountdownTick::Expired(report) => break report,
                        CountdownTick::Idle => anyhow::bail!("countdown stalled in game {}", game),
                    }
                },
            };
            moves += 1;
            if report.expanded {
                expansions += 1;
            }
        }
        let winner = match engine.outcome() {
            Outcome::Won(p) => {
                match p {
                    tictactoe::Player::X => x_wins += 1,
                    tictactoe::Player::O => o_wins += 1,
                }
                Some(p.to_string())
            }
            Outcome::Draw | Outcome::InProgress => {
                unfinished += 1;
                None
            }
        };
        results.push(json!({
            "winner": winner,
            "moves": moves,
            "board_size": engine.board().size(),
            "win_length": engine.win_length(),
        }));
    }

    let summary = json!({
        "seed": seed,
        "games": results,
        "x_wins": x_wins,
        "o_wins": o_wins,
        "unfinished": unfinished,
        "expansions": expansions,
    });
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
