#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use tictactoe::{
    init_logging,
    ui::{mode_change_allowed, parse_coord, status_line, TerminalView},
    DrawRule, EngineConfig, GameEngine, GameMode, GameSession, Player, SessionConfig,
    BOT_THINKING_DELAY_MS, TIME_UNIT_MS, TURN_COUNTDOWN,
};
#[cfg(feature = "std")]
use tokio::io::{AsyncBufReadExt, BufReader};
#[cfg(feature = "std")]
use tokio::time::Duration;

#[derive(ValueEnum, Clone, Copy, Debug)]
#[cfg(feature = "std")]
enum ModeArg {
    /// Two humans sharing the terminal.
    Pvp,
    /// Human (X) against the computer (O).
    Bot,
}

#[cfg(feature = "std")]
impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Pvp => GameMode::PlayerVsPlayer,
            ModeArg::Bot => GameMode::PlayerVsBot,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
#[cfg(feature = "std")]
enum FirstArg {
    X,
    O,
    Random,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
#[cfg(feature = "std")]
enum DrawArg {
    /// Grow the board when it fills up.
    Expand,
    /// A full board ends the game in a draw.
    End,
}

/// Tic-tac-toe on a board that grows instead of ending in a draw.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, value_enum, default_value_t = ModeArg::Bot)]
    mode: ModeArg,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, value_enum, default_value_t = FirstArg::Random)]
    first: FirstArg,
    #[arg(long, default_value_t = TURN_COUNTDOWN, help = "Time units per human turn")]
    countdown: u32,
    #[arg(long, default_value_t = TIME_UNIT_MS)]
    time_unit_ms: u64,
    #[arg(long, default_value_t = BOT_THINKING_DELAY_MS)]
    bot_delay_ms: u64,
    #[arg(long, value_enum, default_value_t = DrawArg::Expand)]
    draw_rule: DrawArg,
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let rng = match cli.seed {
        Some(s) => {
            println!("Using fixed seed: {} (game will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        }
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    };
    let config = EngineConfig {
        countdown_start: cli.countdown.max(1),
        draw_rule: match cli.draw_rule {
            DrawArg::Expand => DrawRule::Expand,
            DrawArg::End => DrawRule::End,
        },
        first_player: match cli.first {
            FirstArg::X => Some(Player::X),
            FirstArg::O => Some(Player::O),
            FirstArg::Random => None,
        },
        ..EngineConfig::default()
    };
    let mut engine = GameEngine::with_config(config, rng);
    engine.subscribe(Box::new(TerminalView));
    let session = GameSession::new(
        engine,
        SessionConfig {
            time_unit: Duration::from_millis(cli.time_unit_ms),
            bot_delay: Duration::from_millis(cli.bot_delay_ms),
        },
    );

    println!("Commands: a cell like B2 or `2 2`, `new`, `mode pvp|bot`, `status`, `quit`.");
    let mut mode = GameMode::from(cli.mode);
    session.start_new_game(mode);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        match line {
            "" => continue,
            "quit" | "exit" => break,
            "new" => {
                session.start_new_game(mode);
            }
            "status" => println!("{}", status_line(&session.state())),
            "mode pvp" | "mode bot" => {
                if !mode_change_allowed(&session.state()) {
                    println!("Finish this game or type `new` before switching mode.");
                    continue;
                }
                mode = if line.ends_with("pvp") {
                    GameMode::PlayerVsPlayer
                } else {
                    GameMode::PlayerVsBot
                };
                session.start_new_game(mode);
            }
            other => match parse_coord(other) {
                Some((r, c)) => {
                    if let Err(e) = session.attempt_move(r, c) {
                        println!("Move rejected: {}", e);
                    }
                }
                None => println!("Unrecognised input: {}", other),
            },
        }
    }
    session.cancel_timers();
    Ok(())
}
