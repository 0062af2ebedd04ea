//! Text menu for playing in a terminal
//!
//! [`CommandLineMenu`] is generic over its input and output streams, so a
//! whole session can be scripted from a string in tests.

use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;

use tracing::{debug, error};

use crate::board::{
    Party, Pos, Position, Role, MAX_BOARD_SIZE, MAX_PARTIES, MIN_BOARD_SIZE, MIN_PARTIES,
};
use crate::config::{AppConfig, Messages};
use crate::engine::AIEngine;
use crate::error::MenuError;
use crate::game::{render_board, Game, Outcome};
use crate::rules::is_legal;

/// Prompts, reads and prints through the configured message table.
pub struct CommandLineMenu<R, W> {
    input: R,
    output: W,
    messages: Messages,
}

impl<R: BufRead, W: Write> CommandLineMenu<R, W> {
    pub fn new(input: R, output: W, messages: Messages) -> Self {
        Self {
            input,
            output,
            messages,
        }
    }

    /// Print the message `key` with its placeholders filled.
    pub fn show_message(&mut self, key: &str, args: &[&str]) -> Result<(), MenuError> {
        let text = self.messages.format(key, args);
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Next non-blank input line, trimmed.
    fn read_line(&mut self) -> Result<String, MenuError> {
        let mut line = String::new();
        loop {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Err(MenuError::InputClosed);
            }
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                return Ok(trimmed.to_string());
            }
        }
    }

    /// Ask until the answer parses and passes `validate`.
    ///
    /// Rejected answers print `invalid.input` and repeat the prompt.
    pub fn prompt<T>(
        &mut self,
        key: &str,
        args: &[&str],
        parse: impl Fn(&str) -> Option<T>,
        validate: impl Fn(&T) -> bool,
    ) -> Result<T, MenuError> {
        loop {
            self.show_message(key, args)?;
            let line = self.read_line()?;
            match parse(&line) {
                Some(value) if validate(&value) => return Ok(value),
                _ => {
                    debug!(input = %line, prompt = key, "rejected input");
                    self.show_message("invalid.input", &[])?;
                }
            }
        }
    }

    /// Print the grid framed by blank lines.
    pub fn update_board(&mut self, position: &Position) -> Result<(), MenuError> {
        writeln!(self.output)?;
        write!(self.output, "{}", render_board(position))?;
        writeln!(self.output)?;
        self.output.flush()?;
        Ok(())
    }

    /// Ask for party count, board size, then every party's mark and role.
    pub fn setup(&mut self, engine: AIEngine) -> Result<Game, MenuError> {
        let count = self.prompt(
            "player.count.input",
            &[],
            |s| s.parse::<usize>().ok(),
            |n| (MIN_PARTIES..=MAX_PARTIES).contains(n),
        )?;
        let size = self.prompt(
            "board.size.input",
            &[],
            |s| s.parse::<usize>().ok(),
            |n| (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(n),
        )?;

        let mut parties: Vec<Party> = Vec::with_capacity(count);
        for i in 0..count {
            let number = i.to_string();
            let mark = self.prompt(
                "player.symbol.input",
                &[&number],
                |s| s.chars().next(),
                |c| !parties.iter().any(|p| p.mark == *c),
            )?;
            let role = self.prompt(
                "player.type.input",
                &[],
                |s| Some(if s == "1" { Role::External } else { Role::Search }),
                |_| true,
            )?;
            let party = Party::new(role, mark);
            parties.push(party);
            self.show_message("player.created.message", &[&party.to_string()])?;
        }

        Ok(Game::new(size, &parties, engine)?)
    }

    /// Play until someone wins or the board is full.
    pub fn play(&mut self, game: &mut Game, ai_delay: Duration) -> Result<Outcome, MenuError> {
        loop {
            let (_, party) = game.current_party()?;
            let name = party.to_string();
            self.show_message("player.turn.message", &[&name])?;
            self.update_board(game.position())?;

            let outcome = match party.role {
                Role::External => {
                    let position = game.position();
                    let size = position.size();
                    let pos = self.prompt(
                        "player.move.input",
                        &[],
                        |s| parse_move(s, size),
                        |pos| is_legal(position, *pos),
                    )?;
                    game.play(pos)?
                }
                Role::Search => {
                    self.show_message("ai.thinking.message", &[])?;
                    if !ai_delay.is_zero() {
                        thread::sleep(ai_delay);
                    }
                    match game.play_ai() {
                        Ok((result, outcome)) => {
                            self.show_message("ai.move.message", &[&result.best_move.to_string()])?;
                            outcome
                        }
                        Err(e) => {
                            error!(party = %party, error = %e, "AI failed to move");
                            self.show_message("ai.failed.message", &[])?;
                            return Err(e.into());
                        }
                    }
                }
            };

            match outcome {
                Outcome::InProgress => {}
                Outcome::Won(_) => {
                    self.update_board(game.position())?;
                    self.show_message("player.wins", &[&name])?;
                    return Ok(outcome);
                }
                Outcome::Draw => {
                    self.update_board(game.position())?;
                    self.show_message("game.over", &[&name])?;
                    return Ok(outcome);
                }
            }
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

/// Parse `row,col` into an on-board cell.
pub fn parse_move(input: &str, size: usize) -> Option<Pos> {
    let (row, col) = input.split_once(',')?;
    let row: i32 = row.trim().parse().ok()?;
    let col: i32 = col.trim().parse().ok()?;
    if !Pos::is_valid(row, col, size) {
        return None;
    }
    Some(Pos::new(row as u8, col as u8))
}

/// Run one text session: banner, setup (or the configured game), play.
pub fn run<R: BufRead, W: Write>(
    config: &AppConfig,
    input: R,
    output: W,
    use_defaults: bool,
) -> Result<Outcome, MenuError> {
    let mut menu = CommandLineMenu::new(input, output, config.messages.clone());
    menu.show_message("banner", &[])?;

    let engine = AIEngine::new(config.strategy);
    let mut game = if use_defaults {
        let game = Game::new(config.board_size, &config.players, engine)?;
        for party in game.position().roster() {
            menu.show_message("player.created.message", &[&party.to_string()])?;
        }
        game
    } else {
        menu.setup(engine)?
    };

    menu.play(&mut game, Duration::from_millis(config.ai_delay_ms))
}
