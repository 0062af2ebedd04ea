//! Error types for the tic-tac-toe engine

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the game core and its setup layer.
///
/// None of these are faults: they describe a request the current game
/// state cannot satisfy.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// No legal cell is left, or there is nobody to move for
    #[error("no possible move left")]
    NoPossibleMove,

    #[error("illegal move: ({row}, {col}) is occupied or off the board")]
    IllegalMove { row: i32, col: i32 },

    #[error("cannot change the roster after the game has started")]
    RosterFrozen,

    #[error("there is no party in this game")]
    EmptyRoster,

    #[error("board size must be between 3 and 10, got {0}")]
    InvalidBoardSize(usize),

    #[error("a game needs 2 or 3 parties, got {0}")]
    InvalidPartyCount(usize),

    #[error("mark '{0}' is already taken")]
    DuplicateMark(char),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Errors that end a text-menu session.
#[derive(Debug, Error)]
pub enum MenuError {
    #[error("input closed before the game finished")]
    InputClosed,

    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Game(#[from] GameError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_illegal_move_display() {
        let err = GameError::IllegalMove { row: 3, col: -1 };
        assert_eq!(err.to_string(), "illegal move: (3, -1) is occupied or off the board");
    }

    #[test]
    fn test_setup_error_display() {
        assert_eq!(
            GameError::InvalidBoardSize(11).to_string(),
            "board size must be between 3 and 10, got 11"
        );
        assert_eq!(GameError::DuplicateMark('X').to_string(), "mark 'X' is already taken");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("board_size must be between 3 and 10".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: board_size must be between 3 and 10"
        );
    }

    #[test]
    fn test_menu_error_wraps_game_error() {
        let err: MenuError = GameError::NoPossibleMove.into();
        assert_eq!(err.to_string(), "no possible move left");
        assert!(matches!(err, MenuError::Game(GameError::NoPossibleMove)));
    }
}
