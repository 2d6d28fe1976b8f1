// Sokoban puzzle generator.
// `generate` prints a fresh puzzle, `solve` runs the solver on an ASCII level,
// `play` opens a generated puzzle in the terminal (WASD or arrows, R restarts, Q quits).

use std::path::{Path, PathBuf};
use std::time::Duration;
use clap::{Parser, Subcommand};
use log::warn;
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::io;
use sokogen::config::GeneratorConfig;
use sokogen::console_interface::ConsoleInput::*;
use sokogen::console_interface::{
    cleanup_terminal, handle_input, parse_level, render_game, render_maze_to_string, run_then_cleanup,
    setup_terminal,
};
use sokogen::core::{step, GameState, GameUpdate, SharedGameState};
use sokogen::generator::{GeneratedPuzzle, PuzzleGenerator, DEFAULT_TIME_TO_SOLVE};
use sokogen::maze::TemplateCatalog;
use sokogen::models::GameRenderState;
use sokogen::solver::solve;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate a puzzle and print it.
    Generate {
        #[command(flatten)]
        window: WindowArgs,

        /// Run attempts on this many worker threads. Ignores --seed.
        #[arg(long, value_name = "N")]
        jobs: Option<usize>,

        /// Time limit in seconds written into the JSON payload.
        #[arg(long, value_name = "SECS", default_value_t = DEFAULT_TIME_TO_SOLVE.as_secs())]
        time_to_solve: u64,

        /// JSON template catalog to build from instead of the built-in one.
        #[arg(long, value_name = "FILE")]
        templates: Option<PathBuf>,

        /// Print the `[time_ms, maze]` payload instead of ASCII.
        #[arg(long)]
        json: bool,
    },
    /// Solve an ASCII level file.
    Solve {
        level: PathBuf,

        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
    /// Play a freshly generated puzzle.
    Play {
        #[command(flatten)]
        window: WindowArgs,
    },
}

#[derive(Debug, clap::Args)]
struct WindowArgs {
    #[arg(long, value_name = "N")]
    min_moves: Option<usize>,

    #[arg(long, value_name = "N")]
    max_moves: Option<usize>,

    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// JSON generator configuration. Flags take precedence.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    match args.command {
        Command::Generate { window, jobs, time_to_solve, templates, json } => {
            let catalog = match &templates {
                Some(path) => TemplateCatalog::from_json_file(path)?,
                None => TemplateCatalog::builtin(),
            };
            let puzzle = generate_puzzle(&window, catalog, jobs)?;
            if json {
                println!("{}", puzzle.payload_json(Duration::from_secs(time_to_solve))?);
            } else {
                print!("{}", render_maze_to_string(&puzzle.maze));
                println!("moves: {}", puzzle.moves);
            }
        }
        Command::Solve { level, config } => {
            let config = load_config(config.as_deref())?;
            let maze = parse_level(&std::fs::read_to_string(&level)?);
            let solution = solve(&maze, &config.solver)?;
            println!(
                "moves: {}, pushes: {}, iterations: {}",
                solution.moves, solution.pushes, solution.iterations
            );
        }
        Command::Play { window } => {
            let puzzle = generate_puzzle(&window, TemplateCatalog::builtin(), None)?;
            let (shared, boxes, players) = SharedGameState::from_maze(&puzzle.maze);
            let player = players.first().copied().ok_or("generated puzzle has no player")?;
            let mut terminal = setup_terminal()?;
            run_then_cleanup(
                || run_interactive(&shared, GameState::new(player, boxes), Some(puzzle.moves), &mut terminal),
                cleanup_terminal,
            )?;
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<GeneratorConfig, Box<dyn std::error::Error>> {
    Ok(match path {
        Some(path) => GeneratorConfig::from_json_file(path)?,
        None => GeneratorConfig::default(),
    })
}

fn generate_puzzle(
    window: &WindowArgs,
    catalog: TemplateCatalog,
    jobs: Option<usize>,
) -> Result<GeneratedPuzzle, Box<dyn std::error::Error>> {
    let mut config = load_config(window.config.as_deref())?;
    if let Some(min) = window.min_moves {
        config.min_moves = min;
    }
    if let Some(max) = window.max_moves {
        config.max_moves = max;
    }

    let generator = PuzzleGenerator::new(config, catalog);
    let puzzle = match (jobs, window.seed) {
        (Some(jobs), seed) => {
            if seed.is_some() {
                warn!("--seed has no effect together with --jobs");
            }
            generator.generate_parallel(jobs)?
        }
        (None, Some(seed)) => generator.generate(&mut StdRng::seed_from_u64(seed))?,
        (None, None) => generator.generate(&mut rand::rng())?,
    };
    Ok(puzzle)
}

fn run_interactive(
    shared: &SharedGameState,
    initial: GameState,
    par: Option<usize>,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut state = GameRenderState::new(initial.clone(), par);
    render_game(terminal, shared, &state)?;

    loop {
        match handle_input() {
            Ok(Quit) => break,
            Ok(Restart) => {
                state = GameRenderState::new(initial.clone(), par);
                render_game(terminal, shared, &state)?;
            }
            Ok(UserAction(user_action)) => {
                match step(shared, &state.game, user_action) {
                    GameUpdate::NextState(new_state, change_type) => {
                        state.game = new_state;
                        state.moves += 1;
                        state.last_change = Some(change_type);
                        state.error = None;
                    }
                    GameUpdate::Error(err) => {
                        state.error = Some(err.to_string());
                    }
                }
                state.won = shared.is_won(&state.game);
                render_game(terminal, shared, &state)?;

                if state.won {
                    // Keep showing the win screen until user inputs
                    loop {
                        match handle_input() {
                            Ok(Timeout) => {}
                            Ok(_) => break,
                            Err(_) => {
                                println!("error reading input");
                                break;
                            }
                        }
                    }
                    break;
                }
            }
            Ok(_) => {
                // No input, continue polling
            }
            Err(_) => {
                println!("error reading input");
                break;
            }
        }
    }

    Ok(())
}
