//! End-to-end games through the public API

use std::io::Cursor;
use std::path::Path;

use tictactoe::board::MAX_BOARD_SIZE;
use tictactoe::config::AppConfig;
use tictactoe::game::{Game, Outcome};
use tictactoe::rules::{is_terminal, is_winning_move, legal_moves, play};
use tictactoe::search::best_move;
use tictactoe::{AIEngine, GameError, Party, PartyId, Pos, Position, Strategy};

fn human_vs_ai(moves: &[(u8, u8)]) -> Position {
    let mut position = Position::with_roster(3, vec![Party::human('H'), Party::ai('R')]);
    for &(r, c) in moves {
        play(&mut position, Pos::new(r, c)).unwrap();
    }
    position
}

#[test]
fn ai_blocks_the_column() {
    let position = human_vs_ai(&[(0, 0), (2, 2), (1, 0)]);
    assert_eq!(best_move(&position), Ok(Pos::new(2, 0)));
}

#[test]
fn ai_blocks_the_row() {
    let position = human_vs_ai(&[(0, 0), (2, 2), (0, 1)]);
    assert_eq!(best_move(&position), Ok(Pos::new(0, 2)));
}

#[test]
fn alternating_game_without_line_is_a_draw() {
    let mut position = Position::with_roster(3, vec![Party::human('X'), Party::human('O')]);
    let moves = [(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)];
    let mut last_won = true;
    for (r, c) in moves {
        last_won = play(&mut position, Pos::new(r, c)).unwrap();
    }
    assert!(!last_won);
    assert!(is_terminal(&position));
    assert!(legal_moves(&position).is_empty());
    assert_eq!(best_move(&position), Err(GameError::NoPossibleMove));
}

#[test]
fn full_row_wins_from_every_cell() {
    let mut position = Position::with_roster(4, vec![Party::human('X'), Party::human('O')]);
    for c in 0..4 {
        play(&mut position, Pos::new(2, c)).unwrap();
        if c < 3 {
            play(&mut position, Pos::new(0, c)).unwrap();
        }
    }
    for c in 0..4 {
        assert!(is_winning_move(&position, Pos::new(2, c), PartyId(0)));
    }
    assert!(is_terminal(&position));
}

#[test]
fn alpha_beta_finishes_games_against_random() {
    // Alpha-beta as O against a seeded random X on 3x3
    for seed in 0..5 {
        let mut random = AIEngine::with_seed(Strategy::Random, seed);
        let mut game = Game::new(
            3,
            &[Party::human('X'), Party::ai('O')],
            AIEngine::new(Strategy::AlphaBeta),
        )
        .unwrap();

        let outcome = loop {
            let pos = random.get_move(game.position()).unwrap();
            let outcome = game.play(pos).unwrap();
            if outcome.is_over() {
                break outcome;
            }
            let (_, outcome) = game.play_ai().unwrap();
            if outcome.is_over() {
                break outcome;
            }
        };
        assert!(game.history().len() >= 5);
        assert!(matches!(outcome, Outcome::Won(_) | Outcome::Draw));
    }
}

#[test]
fn largest_board_plays_with_cheap_strategies() {
    for strategy in [Strategy::Random, Strategy::NearestCenter] {
        let mut game = Game::new(
            MAX_BOARD_SIZE,
            &[Party::ai('A'), Party::ai('B'), Party::ai('C')],
            AIEngine::with_seed(strategy, 11),
        )
        .unwrap();
        let mut outcome = Outcome::InProgress;
        while !outcome.is_over() {
            outcome = game.play_ai().unwrap().1;
        }
        assert!(game.history().len() <= MAX_BOARD_SIZE * MAX_BOARD_SIZE);
    }
}

#[test]
fn shipped_config_loads() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("config/tictactoe.toml");
    let config = AppConfig::load(&path).unwrap();
    assert_eq!(config.board_size, 3);
    assert_eq!(config.strategy, Strategy::AlphaBeta);
    assert_eq!(config.players, vec![Party::human('X'), Party::ai('O')]);
    assert_eq!(config.messages.format("player.wins", &["X (Human)"]), "X (Human) wins!");
}

#[test]
fn text_menu_hotseat_game() {
    let script = "2\n3\nX\n1\nO\n1\n1,1\n0,0\n2,2\n0,2\n0,1\n2,1\n1,0\n1,2\n2,0\n";
    let mut output = Vec::new();
    let outcome =
        tictactoe::cli::run(&AppConfig::default(), Cursor::new(script), &mut output, false)
            .unwrap();

    let out = String::from_utf8(output).unwrap();
    assert_eq!(outcome, Outcome::Draw);
    assert!(out.contains("It's a draw."));
    assert!(!out.contains("wins!"));
}
