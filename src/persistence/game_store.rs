//! On-disk storage of games and of the "current game" setting.
//!
//! Every game lives in `<cache_dir>/<game_id>.json`; the id of the current
//! (default) game lives in `<cache_dir>/settings.json`. Files are written to
//! a temporary sibling and renamed into place, so a reader never sees a
//! half-written save. Concurrent writers to the same game are not
//! arbitrated.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use log::{info, warn};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::checkers_errors::CheckersError;
use crate::game_state::game_state::GameState;
use crate::game_state::pieces::Color;
use crate::persistence::config::Config;
use crate::rule_sets::rule_set_registry::RuleSetKind;

const SETTINGS_FILE_STEM: &str = "settings";
const SAVE_EXTENSION: &str = "json";
const TEMP_EXTENSION: &str = "tmp";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("could not encode or decode {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("invalid config file {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("Settings file {} does not exist", .0.display())]
    SettingsNotFound(PathBuf),

    #[error("Expected game state file {} does not exist", .0.display())]
    GameNotFound(PathBuf),

    #[error("saved game {} holds an invalid board: {source}", .path.display())]
    CorruptGame {
        path: PathBuf,
        source: CheckersError,
    },
}

/// Settings shared by every invocation of the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalSettings {
    pub current_game_identifier: Uuid,
}

/// A game and its identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub game_id: Uuid,
    pub game_state: GameState,
}

/// Layout of a save file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedGame {
    pub game_id: Uuid,
    pub saved_at: DateTime<Utc>,
    pub game_state: GameState,
}

/// One line of the saved game listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    pub game_id: Uuid,
    pub saved_at: DateTime<Utc>,
    pub whose_turn: Color,
    pub is_current: bool,
}

#[derive(Debug, Clone)]
pub struct GameStore {
    cache_dir: PathBuf,
}

impl GameStore {
    pub fn new(cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            cache_dir: cache_dir.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.cache_dir.clone())
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    fn settings_path(&self) -> PathBuf {
        self.cache_dir.join(format!("{SETTINGS_FILE_STEM}.{SAVE_EXTENSION}"))
    }

    fn game_path(&self, game_id: Uuid) -> PathBuf {
        self.cache_dir.join(format!("{game_id}.{SAVE_EXTENSION}"))
    }

    pub fn load_settings(&self) -> Result<GlobalSettings, StorageError> {
        let path = self.settings_path();
        if !path.exists() {
            return Err(StorageError::SettingsNotFound(path));
        }
        read_json(&path)
    }

    pub fn update_settings(&self, settings: &GlobalSettings) -> Result<(), StorageError> {
        write_json(&self.settings_path(), settings)?;
        info!("current game set to {}", settings.current_game_identifier);
        Ok(())
    }

    /// Create, save and select a new game under `rule_set`.
    pub fn initialize_new_game(&self, rule_set: RuleSetKind) -> Result<Game, StorageError> {
        let game = Game {
            game_id: Uuid::new_v4(),
            game_state: GameState::new_game(rule_set),
        };
        self.save_game_state(game.game_id, &game.game_state)?;
        self.update_settings(&GlobalSettings {
            current_game_identifier: game.game_id,
        })?;
        Ok(game)
    }

    pub fn save_game_state(&self, game_id: Uuid, game_state: &GameState) -> Result<SavedGame, StorageError> {
        let saved = SavedGame {
            game_id,
            saved_at: Utc::now(),
            game_state: game_state.clone(),
        };
        write_json(&self.game_path(game_id), &saved)?;
        info!("saved game {game_id}");
        Ok(saved)
    }

    pub fn load_game(&self, game_id: Uuid) -> Result<Game, StorageError> {
        let saved = self.load_saved_game(&self.game_path(game_id))?;
        Ok(Game {
            game_id,
            game_state: saved.game_state,
        })
    }

    /// Load the game recorded as current in the settings file.
    pub fn load_default_game(&self) -> Result<Game, StorageError> {
        let settings = self.load_settings()?;
        self.load_game(settings.current_game_identifier)
    }

    /// Load `game_id`, or the current game when `None`.
    pub fn load_game_or_default(&self, game_id: Option<Uuid>) -> Result<Game, StorageError> {
        match game_id {
            Some(id) => self.load_game(id),
            None => self.load_default_game(),
        }
    }

    fn load_saved_game(&self, path: &Path) -> Result<SavedGame, StorageError> {
        if !path.exists() {
            return Err(StorageError::GameNotFound(path.to_path_buf()));
        }
        let saved: SavedGame = read_json(path)?;
        saved
            .game_state
            .board_state
            .validate()
            .map_err(|source| StorageError::CorruptGame {
                path: path.to_path_buf(),
                source,
            })?;
        info!("loaded game {}", saved.game_id);
        Ok(saved)
    }

    /// Every saved game, oldest save first.
    pub fn list_games(&self) -> Result<Vec<GameSummary>, StorageError> {
        if !self.cache_dir.exists() {
            warn!(
                "No games found because cache directory {} does not exist",
                self.cache_dir.display()
            );
            return Ok(Vec::new());
        }

        let current = self.load_settings().ok().map(|s| s.current_game_identifier);
        let mut games = Vec::new();
        for path in self.dir_entries()? {
            let Some(game_id) = game_id_from_path(&path) else {
                continue;
            };
            match self.load_saved_game(&path) {
                Ok(saved) => games.push(GameSummary {
                    game_id,
                    saved_at: saved.saved_at,
                    whose_turn: saved.game_state.whose_turn,
                    is_current: current == Some(game_id),
                }),
                Err(e) => warn!("skipping unreadable save {}: {e}", path.display()),
            }
        }
        games.sort_by_key(|g| (g.saved_at, g.game_id));
        Ok(games)
    }

    /// Delete every file in the cache directory, settings included.
    ///
    /// Returns how many files were removed. Asking the user first is up to
    /// the caller.
    pub fn clear_games(&self) -> Result<usize, StorageError> {
        if !self.cache_dir.exists() {
            return Ok(0);
        }
        let paths = self.dir_entries()?;
        for path in &paths {
            fs::remove_file(path).map_err(|source| StorageError::Io {
                path: path.clone(),
                source,
            })?;
        }
        info!("removed {} files from {}", paths.len(), self.cache_dir.display());
        Ok(paths.len())
    }

    fn dir_entries(&self) -> Result<Vec<PathBuf>, StorageError> {
        let io_err = |source| StorageError::Io {
            path: self.cache_dir.clone(),
            source,
        };
        let mut paths = Vec::new();
        for entry in fs::read_dir(&self.cache_dir).map_err(io_err)? {
            let path = entry.map_err(io_err)?.path();
            if path.is_file() {
                paths.push(path);
            }
        }
        paths.sort();
        Ok(paths)
    }
}

fn game_id_from_path(path: &Path) -> Option<Uuid> {
    if path.extension().and_then(|e| e.to_str()) != Some(SAVE_EXTENSION) {
        return None;
    }
    let stem = path.file_stem()?.to_str()?;
    if stem == SETTINGS_FILE_STEM {
        return None;
    }
    Uuid::parse_str(stem).ok()
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, StorageError> {
    let content = fs::read_to_string(path).map_err(|source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| StorageError::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), StorageError> {
    let io_err = |source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    };
    let content = serde_json::to_string_pretty(value).map_err(|source| StorageError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    let temp_path = path.with_extension(TEMP_EXTENSION);
    fs::write(&temp_path, content).map_err(io_err)?;
    fs::rename(&temp_path, path).map_err(io_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::position::Position;
    use crate::utils::move_path::parse_move_path;

    struct TempStore {
        store: GameStore,
    }

    impl TempStore {
        fn new() -> Self {
            let dir = std::env::temp_dir().join(format!("plum_checkers_store_{}", Uuid::new_v4()));
            Self {
                store: GameStore::new(dir),
            }
        }
    }

    impl Drop for TempStore {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(self.store.cache_dir());
        }
    }

    #[test]
    fn new_game_is_saved_and_becomes_current() {
        let temp = TempStore::new();
        let game = temp
            .store
            .initialize_new_game(RuleSetKind::StandardRuleSet)
            .expect("new game");

        let settings = temp.store.load_settings().expect("settings written");
        assert_eq!(settings.current_game_identifier, game.game_id);

        let loaded = temp.store.load_default_game().expect("default game");
        assert_eq!(loaded, game);
        assert_eq!(temp.store.load_game_or_default(Some(game.game_id)).expect("by id"), game);
    }

    #[test]
    fn saved_turns_round_trip() {
        let temp = TempStore::new();
        let game = temp
            .store
            .initialize_new_game(RuleSetKind::StandardRuleSet)
            .expect("new game");
        let next = game
            .game_state
            .try_make_moves(&parse_move_path(&["2,0", "3,1"]).expect("path"))
            .expect("legal opening");

        temp.store.save_game_state(game.game_id, &next).expect("save");
        let loaded = temp.store.load_game(game.game_id).expect("load");
        assert_eq!(loaded.game_state, next);
        assert_eq!(loaded.game_state.whose_turn, Color::Black);
    }

    #[test]
    fn missing_files_are_reported() {
        let temp = TempStore::new();
        assert!(matches!(temp.store.load_settings(), Err(StorageError::SettingsNotFound(_))));
        assert!(matches!(temp.store.load_default_game(), Err(StorageError::SettingsNotFound(_))));
        assert!(matches!(
            temp.store.load_game(Uuid::new_v4()),
            Err(StorageError::GameNotFound(_))
        ));
        assert!(temp.store.list_games().expect("missing dir lists nothing").is_empty());
        assert_eq!(temp.store.clear_games().expect("nothing to clear"), 0);
    }

    #[test]
    fn list_skips_settings_and_foreign_files() {
        let temp = TempStore::new();
        let first = temp
            .store
            .initialize_new_game(RuleSetKind::StandardRuleSet)
            .expect("first game");
        let second = temp
            .store
            .initialize_new_game(RuleSetKind::StandardRuleSet)
            .expect("second game");
        fs::write(temp.store.cache_dir().join("notes.txt"), "hello").expect("foreign file");

        let listed = temp.store.list_games().expect("list");
        let ids: Vec<Uuid> = listed.iter().map(|g| g.game_id).collect();
        assert_eq!(ids.len(), 2);
        assert!(ids.contains(&first.game_id));
        assert!(ids.contains(&second.game_id));
        let current: Vec<Uuid> = listed.iter().filter(|g| g.is_current).map(|g| g.game_id).collect();
        assert_eq!(current, vec![second.game_id]);
        assert!(listed.iter().all(|g| g.whose_turn == Color::White));
    }

    #[test]
    fn clear_removes_everything() {
        let temp = TempStore::new();
        temp.store
            .initialize_new_game(RuleSetKind::StandardRuleSet)
            .expect("new game");
        assert_eq!(temp.store.clear_games().expect("clear"), 2);
        assert!(temp.store.list_games().expect("list").is_empty());
        assert!(temp.store.load_default_game().is_err());
    }

    #[test]
    fn boards_with_off_board_pieces_are_rejected_on_load() {
        let temp = TempStore::new();
        let game = temp
            .store
            .initialize_new_game(RuleSetKind::StandardRuleSet)
            .expect("new game");
        let path = temp.store.game_path(game.game_id);
        let tampered = fs::read_to_string(&path)
            .expect("read save")
            .replacen(&format!("\"{}\"", Position::new(0, 0)), "\"9,9\"", 1);
        fs::write(&path, tampered).expect("write save");

        assert!(matches!(
            temp.store.load_game(game.game_id),
            Err(StorageError::CorruptGame { .. })
        ));
    }
}
