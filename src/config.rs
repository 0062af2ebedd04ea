//! Application configuration, loadable from TOML.
//!
//! The configuration is a plain value handed to the presentation layer.
//! The rules, evaluation and search take no configuration at all.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::board::{Party, MAX_BOARD_SIZE, MAX_PARTIES, MIN_BOARD_SIZE, MIN_PARTIES};
use crate::engine::Strategy;
use crate::error::ConfigError;

/// Top-level application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Board size used when setup prompts are skipped
    pub board_size: usize,
    /// Strategy driving every AI party
    pub strategy: Strategy,
    /// Pause before an AI move in the text menu
    pub ai_delay_ms: u64,
    /// Roster used when setup prompts are skipped
    pub players: Vec<Party>,
    /// User-facing texts keyed by message id
    pub messages: Messages,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            board_size: 3,
            strategy: Strategy::AlphaBeta,
            ai_delay_ms: 0,
            players: vec![Party::human('X'), Party::ai('O')],
            messages: Messages::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    ///
    /// Messages missing from the file keep their built-in text.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let mut config: AppConfig = toml::from_str(&content)?;
        config.messages = Messages::default().merged(config.messages);
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(ConfigError::Validation(format!(
                "board_size must be between {MIN_BOARD_SIZE} and {MAX_BOARD_SIZE}"
            )));
        }
        if !(MIN_PARTIES..=MAX_PARTIES).contains(&self.players.len()) {
            return Err(ConfigError::Validation(format!(
                "players must list {MIN_PARTIES} or {MAX_PARTIES} entries"
            )));
        }
        for (i, player) in self.players.iter().enumerate() {
            if self.players[..i].iter().any(|p| p.mark == player.mark) {
                return Err(ConfigError::Validation(format!(
                    "player mark '{}' is used twice",
                    player.mark
                )));
            }
        }
        Ok(())
    }
}

/// Message table. Placeholders `{0}`, `{1}`, ... are filled by [`Messages::format`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Messages(BTreeMap<String, String>);

const DEFAULT_MESSAGES: &[(&str, &str)] = &[
    ("banner", "=== Tic-Tac-Toe ===\nN x N board, 2 or 3 players, first full line wins."),
    ("player.count.input", "How many players? (2-3)"),
    ("board.size.input", "Board size? (3-10)"),
    ("player.symbol.input", "Player {0}, pick a mark (one character):"),
    ("player.type.input", "Who plays it? 1 = human, 2 = AI"),
    ("player.created.message", "Player created: {0}"),
    ("player.turn.message", "Turn of {0}"),
    ("player.move.input", "Your move as row,column:"),
    ("player.wins", "{0} wins!"),
    ("game.over", "Game over, no moves left. It's a draw."),
    ("ai.thinking.message", "AI is thinking..."),
    ("ai.move.message", "AI plays {0}"),
    ("ai.failed.message", "AI could not find a move"),
    ("invalid.input", "Invalid input, try again."),
];

impl Default for Messages {
    fn default() -> Self {
        Self(
            DEFAULT_MESSAGES
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }
}

impl Messages {
    /// Text for `key`; unknown keys are returned as-is.
    pub fn get<'a>(&'a self, key: &'a str) -> &'a str {
        self.0.get(key).map(String::as_str).unwrap_or(key)
    }

    /// Text for `key` with `{i}` replaced by `args[i]`.
    pub fn format(&self, key: &str, args: &[&str]) -> String {
        let mut text = self.get(key).to_string();
        for (i, arg) in args.iter().enumerate() {
            text = text.replace(&format!("{{{i}}}"), arg);
        }
        text
    }

    /// Entries of `overrides` replace ours, the rest are kept.
    pub fn merged(mut self, overrides: Messages) -> Self {
        self.0.extend(overrides.0);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Role;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.board_size, 3);
        assert_eq!(config.strategy, Strategy::AlphaBeta);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
board_size = 4
strategy = "nearest_center"

[[players]]
mark = "A"
role = "human"

[[players]]
mark = "B"
role = "ai"

[[players]]
mark = "C"
role = "search"

[messages]
"player.wins" = "Victory for {{0}}"
"#
        )
        .unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.board_size, 4);
        assert_eq!(config.strategy, Strategy::NearestCenter);
        assert_eq!(config.players.len(), 3);
        assert_eq!(config.players[1], Party::new(Role::Search, 'B'));
        assert_eq!(config.messages.format("player.wins", &["A"]), "Victory for A");
        // untouched keys keep the built-in text
        assert_eq!(config.messages.get("board.size.input"), "Board size? (3-10)");
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_or_default(&dir.path().join("missing.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::load(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::FileRead { .. }));
    }

    #[test]
    fn test_load_rejects_bad_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "board_size = \"big\"").unwrap();
        let err = AppConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));
    }

    #[test]
    fn test_validation_errors() {
        let config = AppConfig {
            board_size: 11,
            ..AppConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));

        let config = AppConfig {
            players: vec![Party::human('X')],
            ..AppConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));

        let config = AppConfig {
            players: vec![Party::human('X'), Party::ai('X')],
            ..AppConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_message_format() {
        let messages = Messages::default();
        assert_eq!(messages.format("player.turn.message", &["X (Human)"]), "Turn of X (Human)");
        assert_eq!(messages.get("no.such.key"), "no.such.key");
        assert_eq!(messages.format("no.such.key", &["x"]), "no.such.key");
    }

    #[test]
    fn test_config_roundtrips_through_toml() {
        let config = AppConfig::default();
        let text = toml::to_string(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
