//! Game state management for the tic-tac-toe GUI

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use tracing::error;

use crate::board::{Party, PartyId, Pos, Role};
use crate::config::AppConfig;
use crate::engine::{AIEngine, MoveResult, Strategy};
use crate::error::GameError;
use crate::game::{Game, Outcome};
use crate::rules::is_legal;

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<Result<MoveResult, GameError>>,
        start_time: Instant,
    },
}

/// Finished game, as shown in the side panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    pub winner: Option<Party>,
    pub winning_line: Vec<Pos>,
}

/// Main game state
pub struct GameState {
    pub game: Game,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub ai_thinking_time: Option<Duration>,
    pub message: Option<String>,
    size: usize,
    parties: Vec<Party>,
    strategy: Strategy,
}

impl GameState {
    pub fn new(config: &AppConfig) -> Result<Self, GameError> {
        let game = Game::new(
            config.board_size,
            &config.players,
            AIEngine::new(config.strategy),
        )?;
        Ok(Self {
            game,
            last_ai_result: None,
            ai_state: AiState::Idle,
            ai_thinking_time: None,
            message: None,
            size: config.board_size,
            parties: config.players.clone(),
            strategy: config.strategy,
        })
    }

    pub fn reset(&mut self) {
        if self.is_ai_thinking() {
            // the worker's answer is dropped with the receiver
            self.ai_state = AiState::Idle;
        }
        self.game.reset();
        self.last_ai_result = None;
        self.ai_thinking_time = None;
        self.message = None;
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn parties(&self) -> &[Party] {
        &self.parties
    }

    #[inline]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Party to move, if the game is still running
    pub fn current_party(&self) -> Option<(PartyId, Party)> {
        if self.is_game_over() {
            return None;
        }
        self.game.current_party().ok()
    }

    pub fn is_game_over(&self) -> bool {
        self.game.outcome().is_over()
    }

    /// Winner and highlighted line once the game is over
    pub fn result(&self) -> Option<GameResult> {
        match self.game.outcome() {
            Outcome::InProgress => None,
            Outcome::Draw => Some(GameResult {
                winner: None,
                winning_line: Vec::new(),
            }),
            Outcome::Won(id) => Some(GameResult {
                winner: self.game.position().party(id).copied(),
                winning_line: self
                    .game
                    .winning_line()
                    .map(|(_, line)| line)
                    .unwrap_or_default(),
            }),
        }
    }

    /// Check if it's a human's turn
    pub fn is_human_turn(&self) -> bool {
        matches!(self.current_party(), Some((_, p)) if p.role == Role::External)
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        matches!(self.current_party(), Some((_, p)) if p.role == Role::Search)
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Whether a click on `pos` would be accepted
    pub fn can_play(&self, pos: Pos) -> bool {
        self.is_human_turn() && !self.is_ai_thinking() && is_legal(self.game.position(), pos)
    }

    /// Attempt to place the current human's mark at the given cell
    pub fn try_play(&mut self, pos: Pos) -> Result<(), String> {
        if self.is_game_over() {
            return Err("Game is over".to_string());
        }

        if self.is_ai_thinking() {
            return Err("AI is thinking".to_string());
        }

        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }

        self.game.play(pos).map_err(|e| e.to_string())?;
        self.message = None;
        Ok(())
    }

    /// Start AI thinking on a worker thread
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() {
            return;
        }

        let position = self.game.position().clone();
        let strategy = self.strategy;
        let (tx, rx) = channel();

        thread::spawn(move || {
            let mut engine = AIEngine::new(strategy);
            let result = engine.get_move_with_stats(&position);
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if AI has finished thinking
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking {
                receiver,
                start_time,
            } => match receiver.try_recv() {
                Ok(result) => Some((result, start_time.elapsed())),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => {
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        let Some((result, elapsed)) = result else {
            return;
        };
        self.ai_state = AiState::Idle;
        self.ai_thinking_time = Some(elapsed);

        match result {
            Ok(move_result) => {
                let pos = move_result.best_move;
                self.last_ai_result = Some(move_result);
                if let Err(e) = self.game.play(pos) {
                    error!(error = %e, "AI move rejected");
                    self.message = Some(e.to_string());
                }
            }
            Err(e) => {
                error!(error = %e, "AI could not find a move");
                self.message = Some("AI could not find a move".to_string());
            }
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Undo back to the previous human turn
    pub fn undo(&mut self) {
        if self.game.history().is_empty() || self.is_ai_thinking() {
            return;
        }

        self.game.undo(1);
        while !self.game.history().is_empty() && self.is_ai_turn() {
            self.game.undo(1);
        }
        self.message = None;
    }
}
