//! Main application for the tic-tac-toe GUI

use std::time::Instant;

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel};
use tracing::debug;

use super::board_view::BoardView;
use super::theme::*;
use super::view_state::ViewState;
use crate::config::GameConfig;
use crate::game::Game;
use crate::Mark;

/// Main tic-tac-toe application
pub struct TicTacToeApp {
    game: Game,
    view: ViewState,
    board_view: BoardView,
    show_debug: bool,
    /// Why the last click was rejected
    notice: Option<String>,
}

impl TicTacToeApp {
    /// Create a new app with the given settings
    pub fn new(_cc: &eframe::CreationContext<'_>, config: GameConfig) -> Self {
        Self {
            game: Game::new(config),
            view: ViewState::default(),
            board_view: BoardView::default(),
            show_debug: false,
            notice: None,
        }
    }

    fn new_game(&mut self) {
        self.game.reset(&mut self.view);
        self.notice = None;
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.new_game();
                        ui.close_menu();
                    }
                    if ui.button("Quit").clicked() {
                        ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label("You: O  -  AI: X");
                });
            });
        });
    }

    /// Render the side panel with game info and debug
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(220.0)
            .max_width(260.0)
            .frame(Frame::new().fill(PANEL_BG).inner_margin(8.0))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_status_card(ui);
                ui.add_space(10.0);

                self.render_tally_card(ui);
                ui.add_space(10.0);

                self.render_moves_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(msg) = &self.notice {
                    ui.add_space(10.0);
                    Self::render_notice_card(ui, msg);
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
            ui.label(RichText::new("X").size(22.0).strong().color(X_MARK));
            ui.label(RichText::new("O").size(22.0).strong().color(O_MARK));
            ui.add_space(4.0);
            ui.label(RichText::new("TIC-TAC-TOE").size(20.0).strong().color(TEXT_PRIMARY));
        });
    }

    /// Turn indicator, or the result while the restart is pending
    fn render_status_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            match self.view.message_text() {
                Some((text, color)) => {
                    ui.label(RichText::new(text).size(20.0).strong().color(color));
                    if let Some(left) = self.game.restart_remaining(Instant::now()) {
                        let countdown = format!("New game in {:.1}s", left.as_secs_f32());
                        ui.label(RichText::new(countdown).size(11.0).color(TEXT_SECONDARY));
                    }
                }
                None => {
                    ui.label(RichText::new("Your turn").size(18.0).strong().color(TEXT_PRIMARY));
                    ui.label(RichText::new("Click an empty cell").size(11.0).color(TEXT_SECONDARY));
                }
            }
        });
    }

    /// Session score
    fn render_tally_card(&self, ui: &mut egui::Ui) {
        let tally = self.game.tally();
        Self::card_frame().show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.label(RichText::new("SCORE").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);
            for (label, count, color) in [
                ("You", tally.human_wins, HUMAN_WIN),
                ("AI", tally.ai_wins, AI_WIN),
                ("Ties", tally.draws, TIE),
            ] {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(label).size(13.0).color(TEXT_PRIMARY));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(RichText::new(count.to_string()).size(13.0).strong().color(color));
                    });
                });
            }
            ui.add_space(4.0);
            let played = format!("{} played", tally.games());
            ui.label(RichText::new(played).size(10.0).color(TEXT_SECONDARY));
        });
    }

    fn render_moves_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.label(RichText::new("MOVES").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);
            if self.view.move_log.is_empty() {
                ui.label(RichText::new("-").size(11.0).color(TEXT_SECONDARY));
            }
            for (i, (pos, mark)) in self.view.move_log.iter().enumerate() {
                let color = if *mark == Mark::X { X_MARK } else { O_MARK };
                ui.horizontal(|ui| {
                    ui.label(RichText::new(format!("{}.", i + 1)).size(11.0).color(TEXT_MUTED));
                    let symbol = mark.symbol().to_string();
                    ui.label(RichText::new(symbol).size(11.0).strong().color(color));
                    ui.label(RichText::new(pos.to_string()).size(11.0).color(TEXT_SECONDARY));
                });
            }
        });
    }

    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.label(RichText::new("AI DEBUG").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            match self.game.last_ai_result() {
                Some(result) => {
                    let search_type = format!("{:?}", result.search_type);
                    let score = format!("Score: {}", result.score);
                    let stats = format!("{} nodes, {}ms", result.nodes, result.time_ms);
                    ui.label(RichText::new(search_type).size(11.0).strong().color(WIN_HIGHLIGHT));
                    ui.label(RichText::new(score).size(10.0).color(TEXT_SECONDARY));
                    ui.label(RichText::new(stats).size(10.0).color(TEXT_SECONDARY));
                    if let Some(pos) = result.best_move {
                        let best = format!("-> {}", pos);
                        ui.label(RichText::new(best).size(12.0).strong().color(X_MARK));
                    }
                }
                None => {
                    ui.label(RichText::new("Waiting for first move").size(10.0).color(TEXT_MUTED));
                }
            }
        });
    }

    fn render_notice_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(WARNING));
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(BOARD_BG).inner_margin(10.0))
            .show(ctx, |ui| {
                let winning_line = self.game.game_over().and_then(|r| r.winning_line);
                let accepting_input = self.game.game_over().is_none();

                let clicked = self.board_view.show(
                    ui,
                    &self.view.board,
                    self.view.last_move,
                    winning_line,
                    accepting_input,
                );

                if let Some(pos) = clicked {
                    match self.game.play_human(pos, Instant::now(), &mut self.view) {
                        Ok(()) => self.notice = None,
                        Err(err) => {
                            debug!(%err, "move rejected");
                            self.notice = Some(err.to_string());
                        }
                    }
                }
            });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (new_game, toggle_debug) =
            ctx.input(|i| (i.key_pressed(egui::Key::N), i.key_pressed(egui::Key::D)));

        if new_game {
            self.new_game();
        }
        if toggle_debug {
            self.show_debug = !self.show_debug;
        }
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        if self.game.tick(Instant::now(), &mut self.view) {
            self.notice = None;
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        // Wake up for the countdown and the restart itself
        if self.game.restart_remaining(Instant::now()).is_some() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
