//! Main application for the tic-tac-toe GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel};

use super::board_view::BoardView;
use super::game_state::{GameResult, GameState};
use super::theme::*;
use crate::board::Role;
use crate::config::AppConfig;
use crate::error::GameError;

/// Main tic-tac-toe application
pub struct TicTacToeApp {
    state: GameState,
    board_view: BoardView,
    show_debug: bool,
}

impl TicTacToeApp {
    /// Create the app for the configured board and roster
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &AppConfig) -> Result<Self, GameError> {
        Ok(Self {
            state: GameState::new(config)?,
            board_view: BoardView::default(),
            show_debug: true,
        })
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.state.reset();
                        ui.close_menu();
                    }
                    if ui.button("Undo (U)").clicked() {
                        self.state.undo();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let n = self.state.size();
                    ui.label(format!("{n}x{n} - {} players", self.state.parties().len()));
                });
            });
        });
    }

    /// Render the side panel with game info and debug
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_players_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(result) = self.state.result() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, &result);
                }

                if let Some(msg) = &self.state.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("TIC-TAC-TOE").size(22.0).strong().color(TEXT_PRIMARY));
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let Some((id, party)) = self.state.current_party() else {
                ui.label(RichText::new("Game Over").size(18.0).strong().color(WIN_HIGHLIGHT));
                return;
            };

            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(party.mark.to_string())
                        .size(36.0)
                        .strong()
                        .color(party_color(id.index())),
                );
                ui.add_space(12.0);
                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(party.to_string()).size(16.0).strong().color(TEXT_PRIMARY));

                    let status = if self.state.is_ai_thinking() {
                        let secs = self
                            .state
                            .ai_thinking_elapsed()
                            .map_or(0.0, |d| d.as_secs_f32());
                        (format!("AI thinking... {secs:.1}s"), STATUS_BUSY)
                    } else if party.role == Role::External {
                        ("Your turn".to_string(), STATUS_READY)
                    } else {
                        ("AI to move".to_string(), STATUS_BUSY)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    /// Roster with marks and roles
    fn render_players_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("PLAYERS").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);
            for (i, party) in self.state.parties().iter().enumerate() {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(party.mark.to_string())
                            .size(18.0)
                            .strong()
                            .color(party_color(i)),
                    );
                    ui.label(RichText::new(party.to_string()).size(12.0).color(TEXT_SECONDARY));
                });
            }
        });
    }

    /// Render actions card
    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui.button("Undo").clicked() {
                    self.state.undo();
                }
                if ui.button("New Game").clicked() {
                    self.state.reset();
                }
            });

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Move #{}", self.state.game.history().len()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Render debug card
    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("AI DEBUG").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let Some(result) = &self.state.last_ai_result else {
                ui.label(
                    RichText::new(format!("{} - waiting for AI...", self.state.strategy()))
                        .size(10.0)
                        .color(TEXT_MUTED),
                );
                return;
            };

            ui.label(RichText::new(result.strategy.to_string()).size(11.0).strong().color(STATUS_READY));
            if let Some(score) = result.score {
                ui.label(RichText::new(format!("Score: {score}")).size(10.0).color(TEXT_SECONDARY));
            }
            ui.label(
                RichText::new(format!("{}ms, {} nodes", result.time_ms, result.nodes))
                    .size(10.0)
                    .color(TEXT_SECONDARY),
            );
            if let Some(time) = self.state.ai_thinking_time {
                ui.label(
                    RichText::new(format!("Wall time: {:.3}s", time.as_secs_f32()))
                        .size(10.0)
                        .color(TEXT_MUTED),
                );
            }
            ui.add_space(4.0);
            ui.label(
                RichText::new(format!("-> {}", result.best_move))
                    .size(12.0)
                    .strong()
                    .color(WIN_HIGHLIGHT),
            );
        });
    }

    /// Render game over card
    fn render_game_over_card(&mut self, ui: &mut egui::Ui, result: &GameResult) {
        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(TEXT_SECONDARY));
                    ui.add_space(8.0);

                    let text = match result.winner {
                        Some(party) => format!("{party} wins!"),
                        None => "Draw".to_string(),
                    };
                    ui.label(RichText::new(text).size(18.0).strong().color(TEXT_PRIMARY));

                    ui.add_space(12.0);
                    if ui.button("New Game").clicked() {
                        self.state.reset();
                    }
                });
            });
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let winning_line = self
                .state
                .result()
                .map(|r| r.winning_line)
                .unwrap_or_default();
            let state = &self.state;

            let clicked = self.board_view.show(
                ui,
                state.game.position(),
                state.game.last_move(),
                &winning_line,
                |pos| state.can_play(pos),
            );

            if let Some(pos) = clicked {
                if let Err(msg) = self.state.try_play(pos) {
                    self.state.message = Some(msg);
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            // D - Toggle debug panel
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }

            // U - Undo
            if i.key_pressed(egui::Key::U) {
                self.state.undo();
            }

            // N - New game
            if i.key_pressed(egui::Key::N) {
                self.state.reset();
            }
        });
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.state.check_ai_result();

        if self.state.is_ai_turn() && !self.state.is_ai_thinking() {
            self.state.start_ai_thinking();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.state.is_ai_thinking() {
            ctx.request_repaint();
        }
    }
}
