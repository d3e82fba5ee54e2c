use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;

use ray_chess::game_state::chess_rules::{RulesConfig, STARTING_POSITION};
use ray_chess::game_state::chess_types::Position;
use ray_chess::turn::turn_controller::{SelectionOutcome, TurnController};
use ray_chess::utils::board_parser::parse_board_text;
use ray_chess::utils::random_playout::random_playout;
use ray_chess::utils::render_game_state::render_game_state;

#[derive(Parser, Debug)]
#[command(author, version, about = "Text front end for the ray-cast chess rules engine")]
struct Cli {
    /// Board description file, one row per line. Defaults to the standard setup.
    #[arg(long)]
    board: Option<PathBuf>,

    /// Rules configuration (TOML).
    #[arg(long)]
    rules: Option<PathBuf>,

    /// Play this many random plies instead of reading squares from stdin.
    #[arg(long)]
    random_plies: Option<usize>,

    /// Seed for --random-plies.
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();
    let mut controller = build_controller(&cli)?;

    if let Some(plies) = cli.random_plies {
        let played = random_playout(&mut controller, plies, cli.seed);
        for applied in &played {
            println!(
                "{} {:?}: {} -> {} ({})",
                applied.piece.color, applied.piece.kind, applied.from, applied.to, applied.effect
            );
        }
        info!("played {} of {plies} plies with seed {}", played.len(), cli.seed);
        println!("{}", render_game_state(controller.game_state()));
        return Ok(());
    }

    run_interactive(&mut controller)
}

fn build_controller(cli: &Cli) -> Result<TurnController> {
    let rules = match &cli.rules {
        Some(path) => RulesConfig::from_toml_file(path)?,
        None => RulesConfig::default(),
    };

    let controller = match &cli.board {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading board file {}", path.display()))?;
            TurnController::new(parse_board_text(&text)?, rules)
        }
        None => TurnController::from_rows(&STARTING_POSITION, rules)?,
    };
    Ok(controller)
}

fn run_interactive(controller: &mut TurnController) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("{}", render_game_state(controller.game_state()));
    prompt(&mut stdout, controller)?;

    for line in stdin.lock().lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed == "quit" {
            break;
        }

        let position = match parse_square(trimmed) {
            Ok(position) => position,
            Err(e) => {
                println!("{e}");
                prompt(&mut stdout, controller)?;
                continue;
            }
        };

        match controller.select_square(position) {
            SelectionOutcome::Ignored => println!("nothing to select at {position}"),
            SelectionOutcome::Selected { from, moves } => {
                println!("selected {from}, {} destinations", moves.len())
            }
            SelectionOutcome::Deselected => println!("deselected"),
            SelectionOutcome::Aborted => println!("not a legal destination, selection cleared"),
            SelectionOutcome::Moved(applied) => {
                println!("moved {} -> {} ({})", applied.from, applied.to, applied.effect)
            }
        }
        println!("{}", render_game_state(controller.game_state()));
        prompt(&mut stdout, controller)?;
    }

    Ok(())
}

fn prompt(stdout: &mut io::Stdout, controller: &TurnController) -> Result<()> {
    write!(stdout, "{} to move> ", controller.side_to_move())?;
    stdout.flush()?;
    Ok(())
}

fn parse_square(text: &str) -> Result<Position> {
    let mut fields = text
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty());
    let (Some(row), Some(col), None) = (fields.next(), fields.next(), fields.next()) else {
        bail!("expected `row col`, got `{text}`");
    };
    let row = row.parse::<i32>().with_context(|| format!("bad row `{row}`"))?;
    let col = col.parse::<i32>().with_context(|| format!("bad column `{col}`"))?;
    Ok(Position::new(row, col))
}
