//! Main application for the Gomoku GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};
use tracing::debug;

use super::board_view::BoardView;
use super::theme::*;
use crate::{GameState, MoveResult, Player, Status};

/// Main Gomoku application. Owns the one game instance it renders.
pub struct GomokuApp {
    game: GameState,
    board_view: BoardView,
    /// Why the last click was refused, cleared by the next accepted move
    message: Option<String>,
}

impl GomokuApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, game: GameState) -> Self {
        Self::with_game(game)
    }

    fn with_game(game: GameState) -> Self {
        Self {
            game,
            board_view: BoardView::default(),
            message: None,
        }
    }

    fn restart(&mut self) {
        self.game.reset();
        self.message = None;
    }

    /// Forward a board click to the engine and keep the status message in sync
    fn play(&mut self, row: i32, col: i32) {
        match self.game.place_move(row, col) {
            MoveResult::Rejected(err) => self.message = Some(err.to_string()),
            outcome => {
                debug!(?outcome, "board updated");
                self.message = None;
            }
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.restart();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let size = self.game.size();
                    ui.label(format!("{size}x{size} - Hotseat"));
                });
            });
        });
    }

    /// Render the side panel with status and actions
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                Self::render_title_card(ui);
                ui.add_space(12.0);

                self.render_status_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if let Some(msg) = &self.message {
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

    fn render_title_card(ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("GOMOKU").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("five in a row").size(11.0).color(TEXT_MUTED));
        });
    }

    /// Stone of the side to move (or the winner) next to the status line
    fn render_status_card(&self, ui: &mut egui::Ui) {
        let status = self.game.status();
        let shown = match status {
            Status::InProgress { to_move } => Some(to_move),
            Status::Won(winner) => Some(winner),
            Status::Drawn => None,
        };

        Self::card_frame().show(ui, |ui| {
            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                match shown {
                    Some(Player::Black) => {
                        ui.painter().circle_filled(rect.center(), 20.0, BLACK_STONE);
                    }
                    Some(Player::White) => {
                        ui.painter().circle_filled(rect.center(), 20.0, WHITE_STONE);
                    }
                    None => {
                        ui.painter().circle_stroke(rect.center(), 20.0, egui::Stroke::new(2.0, TEXT_MUTED));
                    }
                }

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    let color = if self.game.is_over() { WIN_HIGHLIGHT } else { STATUS_ACTIVE };
                    ui.label(RichText::new(status.to_string()).size(15.0).strong().color(color));
                    ui.label(
                        RichText::new(format!("Move #{}", self.game.move_count()))
                            .size(11.0)
                            .color(TEXT_SECONDARY),
                    );
                });
            });
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            if ui.button(RichText::new("Restart").size(13.0).color(TEXT_PRIMARY)).clicked() {
                self.restart();
            }
        });
    }

    /// Render status message card
    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(STATUS_WARNING));
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(BOARD_AREA_BG).inner_margin(10.0))
            .show(ctx, |ui| {
                if let Some(pos) = self.board_view.show(ui, &self.game) {
                    self.play(pos.row as i32, pos.col as i32);
                }
            });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        // N or R - New game
        if ctx.input(|i| i.key_pressed(egui::Key::N) || i.key_pressed(egui::Key::R)) {
            self.restart();
        }
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);
    }
}
