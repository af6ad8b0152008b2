//! Main application for the Caro GUI

use eframe::egui;
use egui::{CentralPanel, Color32, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel};

use crate::rules::Outcome;
use crate::Stone;

use super::board_view::{BoardFrame, BoardView};
use super::game_state::{EngineTask, GameMode, GameState, BOARD_SIZES};
use super::theme::*;

/// Main Caro application
pub struct CaroApp {
    state: GameState,
    board_view: BoardView,
    show_stats: bool,
}

impl Default for CaroApp {
    fn default() -> Self {
        let state = GameState::new(GameMode::default());
        log::info!("starting in {:?} mode", state.mode);
        Self {
            state,
            board_view: BoardView::default(),
            show_stats: true,
        }
    }
}

fn stone_name(stone: Stone) -> &'static str {
    match stone {
        Stone::X => "X",
        Stone::O => "O",
        Stone::Empty => "-",
    }
}

impl CaroApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.state.new_game();
                        ui.close_menu();
                    }
                    if ui.button("Undo (U)").clicked() {
                        self.state.undo();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Play as X vs Engine").clicked() {
                        self.state.set_mode(GameMode::VsEngine { human: Stone::X });
                        ui.close_menu();
                    }
                    if ui.button("Play as O vs Engine").clicked() {
                        self.state.set_mode(GameMode::VsEngine { human: Stone::O });
                        ui.close_menu();
                    }
                    if ui.button("Two Players").clicked() {
                        self.state.set_mode(GameMode::TwoPlayers);
                        ui.close_menu();
                    }
                });

                ui.menu_button("Board", |ui| {
                    for size in BOARD_SIZES {
                        let selected = self.state.board.size() == size;
                        if ui.radio(selected, format!("{size} x {size}")).clicked() && !selected {
                            self.state.set_board_size(size);
                            ui.close_menu();
                        }
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_stats, "Engine Statistics");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode_text = match self.state.mode {
                        GameMode::VsEngine { human } => format!("vs Engine - You: {}", stone_name(human)),
                        GameMode::TwoPlayers => "Two Players".to_string(),
                    };
                    ui.label(mode_text);
                });
            });
        });
    }

    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(220.0)
            .max_width(260.0)
            .frame(Frame::new().fill(Color32::from_rgb(25, 27, 31)).inner_margin(10.0))
            .show(ctx, |ui| {
                ui.add_space(8.0);
                ui.label(RichText::new("CARO").size(22.0).strong().color(TEXT_PRIMARY));
                ui.label(RichText::new("five in a row").size(11.0).color(TEXT_MUTED));
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_score_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.show_stats {
                    ui.add_space(10.0);
                    self.render_stats_card(ui);
                }

                if let Some(outcome) = self.state.outcome {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, outcome);
                }

                if let Some(msg) = self.state.message.clone() {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, &msg);
                }
            });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(Color32::from_rgb(35, 38, 43))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let turn = self.state.current_turn;
            ui.horizontal(|ui| {
                ui.label(RichText::new(stone_name(turn)).size(32.0).strong().color(mark_color(turn)));
                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.label(RichText::new(format!("{} to move", stone_name(turn))).size(16.0).color(TEXT_PRIMARY));

                    let status = if let Some(task) = self.state.engine_task() {
                        let secs = self
                            .state
                            .engine_thinking_elapsed()
                            .map_or(0.0, |d| d.as_secs_f32());
                        let color = if secs < 0.5 {
                            TIMER_NORMAL
                        } else if secs < 2.0 {
                            TIMER_WARNING
                        } else {
                            TIMER_CRITICAL
                        };
                        let label = match task {
                            EngineTask::Move => "Engine thinking...",
                            EngineTask::Hint => "Finding a hint...",
                        };
                        (format!("{label} {secs:.1}s"), color)
                    } else if self.state.is_game_over() {
                        ("Game over".to_string(), WIN_HIGHLIGHT)
                    } else if self.state.is_human_turn() {
                        ("Your turn".to_string(), TIMER_NORMAL)
                    } else {
                        ("Engine's turn".to_string(), TIMER_WARNING)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    fn render_score_card(&self, ui: &mut egui::Ui) {
        let score = self.state.scoreboard;
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("SCORE").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.label(RichText::new(format!("X {}", score.x_wins)).size(18.0).strong().color(X_MARK));
                ui.add_space(10.0);
                ui.label(RichText::new(format!("O {}", score.o_wins)).size(18.0).strong().color(O_MARK));
                ui.add_space(10.0);
                ui.label(RichText::new(format!("Draws {}", score.draws)).size(12.0).color(TEXT_SECONDARY));
            });
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui.button("New (N)").clicked() {
                    self.state.new_game();
                }
                if ui.button("Undo (U)").clicked() {
                    self.state.undo();
                }
                if ui.button("Hint (H)").clicked() {
                    self.state.request_hint();
                }
            });

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!(
                    "Move #{} on {}x{}",
                    self.state.move_history.len(),
                    self.state.board.size(),
                    self.state.board.size()
                ))
                .size(11.0)
                .color(TEXT_SECONDARY),
            );
        });
    }

    fn render_stats_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ENGINE").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            match &self.state.last_engine_result {
                Some(result) => {
                    ui.label(RichText::new(format!("Score: {}", result.score)).size(11.0).color(TEXT_SECONDARY));
                    ui.label(
                        RichText::new(format!("Depth {} / {} nodes / {}ms", result.depth, result.nodes, result.time_ms))
                            .size(10.0)
                            .color(TEXT_MUTED),
                    );
                    if let Some(pos) = result.best_move {
                        let col = (b'A' + pos.col) as char;
                        ui.label(
                            RichText::new(format!("-> {}{}", col, pos.row + 1))
                                .size(12.0)
                                .strong()
                                .color(WIN_HIGHLIGHT),
                        );
                    }
                }
                None => {
                    ui.label(RichText::new("No search yet").size(10.0).color(TEXT_MUTED));
                }
            }
        });
    }

    fn render_game_over_card(&mut self, ui: &mut egui::Ui, outcome: Outcome) {
        let (headline, accent) = match outcome {
            Outcome::Win(stone) => (format!("{} WINS!", stone_name(stone)), mark_color(stone)),
            Outcome::Draw => ("DRAW".to_string(), TEXT_PRIMARY),
        };

        Frame::new()
            .fill(Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(Color32::from_rgb(180, 255, 180)));
                    ui.add_space(6.0);
                    ui.label(RichText::new(headline).size(20.0).strong().color(accent));
                    ui.add_space(10.0);
                    if ui.button("Play Again").clicked() {
                        self.state.new_game();
                    }
                });
            });
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let frame = BoardFrame {
                board: &self.state.board,
                current_turn: self.state.current_turn,
                last_move: self.state.last_move,
                suggested_move: self.state.suggested_move,
                winning_line: self.state.winning_line,
                accepts_input: !self.state.is_game_over()
                    && self.state.is_human_turn()
                    && !self.state.is_engine_moving(),
            };

            if let Some(pos) = self.board_view.show(ui, &frame) {
                if let Err(err) = self.state.try_place_stone(pos) {
                    log::warn!("move at {pos} rejected: {err}");
                    self.state.message = Some(err.to_string());
                }
            }
        });
    }

    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            if i.key_pressed(egui::Key::N) {
                self.state.new_game();
            }
            if i.key_pressed(egui::Key::U) {
                self.state.undo();
            }
            if i.key_pressed(egui::Key::H) {
                self.state.request_hint();
            }
        });
    }
}

impl eframe::App for CaroApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.state.poll_engine();

        if self.state.is_engine_turn() && !self.state.is_engine_thinking() && !self.state.is_game_over() {
            self.state.start_engine_thinking();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.state.is_engine_thinking() {
            ctx.request_repaint();
        }
    }
}
