//! Main application for the Connect Four GUI

use eframe::egui;
use egui::{CentralPanel, Context, Frame, RichText, TopBottomPanel};

use super::board_view::BoardView;
use super::session::{Outcome, Session, HUMAN};
use super::theme::*;

/// Main Connect Four application
#[derive(Default)]
pub struct ConnectFourApp {
    session: Session,
    board_view: BoardView,
    /// Column under the pointer during the last frame
    hovered_column: Option<u8>,
}

impl ConnectFourApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Render the status line
    fn render_status(&self, ctx: &Context) {
        TopBottomPanel::top("status")
            .frame(Frame::new().fill(WINDOW_BG).inner_margin(10.0))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(self.session.belief_text())
                            .size(16.0)
                            .color(TEXT_PRIMARY),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if let Some(elapsed) = self.session.ai_thinking_elapsed() {
                            ui.label(
                                RichText::new(format!(
                                    "AI thinking... {:.1}s",
                                    elapsed.as_secs_f32()
                                ))
                                .size(14.0)
                                .color(TEXT_DRAW),
                            );
                        } else if let Some(ai_move) = &self.session.last_ai_move {
                            ui.label(
                                RichText::new(format!(
                                    "AI: ({}, {})  {} nodes  {}ms",
                                    ai_move.pos.x,
                                    ai_move.pos.y,
                                    ai_move.stats.nodes,
                                    ai_move.time_ms
                                ))
                                .size(12.0)
                                .color(TEXT_DRAW),
                            );
                        }
                    });
                });
                if let Some(msg) = &self.session.message {
                    ui.label(RichText::new(msg).size(12.0).color(PLAYER_A_STONE));
                }
            });
    }

    /// Render the board and the result banner
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(WINDOW_BG))
            .show(ctx, |ui| {
                let winning_line = self.session.winning_line();
                let (hovered, clicked) = self.board_view.show(
                    ui,
                    self.session.game.board(),
                    self.session.game.last_move(),
                    winning_line.as_deref(),
                    self.session.accepts_human_move(),
                );
                self.hovered_column = hovered;

                if clicked {
                    if let Some(column) = hovered {
                        self.session.drop_human_stone(column);
                    }
                }

                if let Some(text) = self.session.outcome_text() {
                    let color = match self.session.outcome {
                        Some(Outcome::Win(player)) if player == HUMAN => PLAYER_A_STONE,
                        Some(Outcome::Win(_)) => PLAYER_B_STONE,
                        _ => TEXT_DRAW,
                    };
                    ui.painter().text(
                        ui.max_rect().center(),
                        egui::Align2::CENTER_CENTER,
                        text,
                        egui::FontId::proportional(36.0),
                        color,
                    );
                }
            });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (space, escape, new_game) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::Space),
                i.key_pressed(egui::Key::Escape),
                i.key_pressed(egui::Key::N),
            )
        });

        // Space drops into the column under the pointer
        if space {
            if let Some(column) = self.hovered_column {
                self.session.drop_human_stone(column);
            }
        }
        if new_game && !self.session.is_ai_thinking() {
            self.session.reset();
        }
        if escape {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}

impl eframe::App for ConnectFourApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);
        self.session.check_ai_result();

        self.render_status(ctx);
        self.render_board(ctx);

        if self.session.is_ai_thinking() {
            ctx.request_repaint();
        }
    }
}
