//! Command line front end: argument definitions and the subcommand handlers.
//!
//! Handlers load a game through the `GameStore`, hand the parsed move path
//! to the core and print the resulting board. Every failure is returned to
//! `main`, which prints it; nothing here panics on user input.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::debug;
use uuid::Uuid;

use plum_checkers::game_state::game_state::GameState;
use plum_checkers::persistence::config::Config;
use plum_checkers::persistence::game_store::{Game, GameStore};
use plum_checkers::rule_sets::rule_set_registry::RuleSetKind;
use plum_checkers::utils::move_path::parse_move_path;

#[derive(Parser)]
#[command(name = "plum_checkers", version, about = "A checkers game with a command line interface")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new game and make it the current one.
    #[command(name = "new-game")]
    NewGame {
        /// Rule set to play with; defaults to the configured one.
        #[arg(short, long = "rule-set")]
        rule_set: Option<String>,
    },

    /// Show the state of a game. Without a game id, show the current game.
    Show {
        #[arg(short, long = "game-id")]
        game_id: Option<Uuid>,
    },

    /// List all saved games.
    List,

    /// Delete all saved games and settings.
    Clear {
        /// Do not ask for confirmation.
        #[arg(short, long)]
        yes: bool,
    },

    /// Move a piece along MOVE_PATH.
    ///
    /// MOVE_PATH is a space separated list of positions "<row>,<column>" the
    /// piece moves through. The first position is the starting position and
    /// must hold a piece of the player to move.
    Move {
        #[arg(short, long = "game-id")]
        game_id: Option<Uuid>,

        #[arg(value_name = "MOVE_PATH", required = true, num_args = 1..)]
        move_path: Vec<String>,
    },
}

pub fn run(cli: Cli, config: &Config) -> Result<()> {
    let store = GameStore::from_config(config);
    debug!("using cache directory {}", store.cache_dir().display());

    match cli.command {
        Commands::NewGame { rule_set } => {
            let name = rule_set.as_deref().unwrap_or(&config.default_rule_set);
            let rule_set = RuleSetKind::from_name(name)?;
            let game = store.initialize_new_game(rule_set)?;
            println!(" New game: {}", game.game_id);
            print_state(&game.game_state);
        }
        Commands::Show { game_id } => {
            let game = store.load_game_or_default(game_id)?;
            print_game(&game);
        }
        Commands::List => {
            let games = store.list_games()?;
            if games.is_empty() {
                println!("Currently no saved games");
            }
            for game in games {
                let marker = if game.is_current { "*" } else { " " };
                println!(
                    "{marker} {}  saved {}  {} to play",
                    game.game_id,
                    game.saved_at.format("%Y-%m-%d %H:%M:%S UTC"),
                    game.whose_turn
                );
            }
        }
        Commands::Clear { yes } => {
            if yes || confirm(&format!("Confirm deletion of all files within {}", store.cache_dir().display()))? {
                let removed = store.clear_games()?;
                println!("Removed {removed} files");
            }
        }
        Commands::Move { game_id, move_path } => {
            let moves = parse_move_path(&move_path)?;
            let game = store.load_game_or_default(game_id)?;
            let game_state = game.game_state.try_make_moves(&moves)?;
            store.save_game_state(game.game_id, &game_state)?;
            print_game(&Game {
                game_id: game.game_id,
                game_state,
            });
        }
    }

    Ok(())
}

fn print_game(game: &Game) {
    println!(" Game: {}", game.game_id);
    print_state(&game.game_state);
}

fn print_state(game_state: &GameState) {
    println!("{}", game_state.board_state);
    println!("  -> {} to play", game_state.whose_turn);
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{prompt} [y/N]: ");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}
