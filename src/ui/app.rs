//! Main application for the sandbox GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel};

use super::board_view::{BoardAction, BoardView, Overlays};
use super::game_state::SandboxState;
use super::theme::*;
use crate::board::PieceKind;
use crate::rules::{CannonRule, SliderRule};
use crate::search::Selection;
use crate::{EngineConfig, MoveOptions};

/// Number of ranked candidates listed in the side panel
const CANDIDATE_LIST_LEN: usize = 8;

/// Main sandbox application
pub struct SandboxApp {
    state: SandboxState,
    board_view: BoardView,
    show_candidates: bool,
}

impl Default for SandboxApp {
    fn default() -> Self {
        Self {
            state: SandboxState::new(EngineConfig::default()),
            board_view: BoardView::default(),
            show_candidates: true,
        }
    }
}

impl SandboxApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Board", |ui| {
                    if ui.button("New Board (N)").clicked() {
                        self.state.new_board();
                        ui.close_menu();
                    }
                    if ui.button("Clear Enemies (C)").clicked() {
                        self.state.clear_enemies();
                        ui.close_menu();
                    }
                });

                ui.menu_button("Rules", |ui| {
                    let mut config = self.state.config();
                    ui.label(RichText::new("Preset").color(TEXT_MUTED));
                    ui.radio_value(&mut config, EngineConfig::default(), "Refined");
                    ui.radio_value(&mut config, EngineConfig::simple(), "Simple");
                    ui.separator();
                    ui.label(RichText::new("Rook").color(TEXT_MUTED));
                    ui.radio_value(&mut config.rules.rook, SliderRule::Blocking, "Stops at first piece");
                    ui.radio_value(&mut config.rules.rook, SliderRule::Unobstructed, "Unobstructed");
                    ui.label(RichText::new("Cannon").color(TEXT_MUTED));
                    ui.radio_value(&mut config.rules.cannon, CannonRule::Strict, "Lands on a piece only");
                    ui.radio_value(&mut config.rules.cannon, CannonRule::Lenient, "Covers past the screen");
                    self.state.set_config(config);
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.state.show_zones, "Danger Zones (Z)");
                    ui.checkbox(&mut self.state.show_safe, "Safe Squares");
                    ui.checkbox(&mut self.show_candidates, "Candidate List");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("{} enemies", self.state.board.enemy_count()));
                });
            });
        });
    }

    /// Render the side panel with palette, items and recommendation
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(250.0)
            .max_width(290.0)
            .frame(Frame::new().fill(egui::Color32::from_rgb(25, 27, 31)))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    ui.add_space(8.0);
                    ui.label(RichText::new("ROOK SANDBOX").size(20.0).strong().color(TEXT_PRIMARY));
                });
                ui.add_space(12.0);

                self.render_palette_card(ui);
                ui.add_space(10.0);

                self.render_items_card(ui);
                ui.add_space(10.0);

                self.render_recommendation_card(ui);

                if self.show_candidates {
                    ui.add_space(10.0);
                    self.render_candidates_card(ui);
                }

                if let Some(msg) = self.state.message.clone() {
                    ui.add_space(10.0);
                    self.render_message_card(ui, &msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(egui::Color32::from_rgb(35, 38, 43))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_palette_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ENEMY PIECES").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);
            ui.horizontal_wrapped(|ui| {
                for kind in PieceKind::ALL {
                    let selected = self.state.selected_kind == kind;
                    if ui.selectable_label(selected, format!("{} {}", kind.letter(), kind.name())).clicked() {
                        self.state.selected_kind = kind;
                    }
                }
            });
            ui.add_space(6.0);
            if ui.button("Add Random (A)").clicked() {
                self.state.add_random();
            }
            ui.label(
                RichText::new("Click a square to place, drag to move, right-click to remove")
                    .size(10.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    fn render_items_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ITEMS").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);
            let mut options: MoveOptions = self.state.options;
            ui.checkbox(&mut options.remove_cross, "Kill general: clear row & column");
            ui.checkbox(&mut options.remove_path, "Use item: clear path, fly through");
            self.state.set_options(options);
        });
    }

    fn render_recommendation_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("RECOMMENDATION").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let attackers = &self.state.analysis.mobile_attackers;
            if !attackers.is_empty() {
                let names: Vec<String> = attackers.iter().map(|p| format!("{} {}", p.kind.name(), p.pos)).collect();
                ui.label(
                    RichText::new(format!("Rook under attack by {}", names.join(", ")))
                        .size(11.0)
                        .color(STATUS_WARNING),
                );
                ui.add_space(4.0);
            }

            match &self.state.analysis.result {
                Ok(result) => {
                    let mv = &result.best_move;
                    ui.label(
                        RichText::new(format!("→ {}", mv.destination))
                            .size(18.0)
                            .strong()
                            .color(BEST_MOVE),
                    );
                    let how = match result.selection {
                        Selection::GeneralCapture => "captures the general",
                        Selection::TopScore => "highest score",
                    };
                    ui.label(RichText::new(format!("Score {:.1} ({})", mv.score, how)).size(11.0).color(TEXT_SECONDARY));
                    if !mv.pieces_removed.is_empty() {
                        ui.label(
                            RichText::new(format!("Removes {} piece(s)", mv.pieces_removed.len()))
                                .size(11.0)
                                .color(STATUS_WARNING),
                        );
                    }
                    if let Some(next) = result.follow_up {
                        ui.label(RichText::new(format!("Then {}", next)).size(11.0).color(FOLLOW_UP));
                    }
                    ui.label(
                        RichText::new(format!("{} safe squares", result.safe_moves))
                            .size(10.0)
                            .color(STATUS_GOOD),
                    );
                }
                Err(err) => {
                    ui.label(RichText::new(err.to_string()).size(13.0).color(STATUS_WARNING));
                }
            }

            ui.add_space(6.0);
            if ui.button("Play Best Move (B)").clicked() {
                self.state.play_best();
            }
        });
    }

    fn render_candidates_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("SAFE CANDIDATES").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);
            if self.state.analysis.safe_moves.is_empty() {
                ui.label(RichText::new("None").size(11.0).color(TEXT_MUTED));
            }
            for mv in self.state.analysis.safe_moves.iter().take(CANDIDATE_LIST_LEN) {
                ui.horizontal(|ui| {
                    let marker = if mv.is_capture { "x" } else { "-" };
                    ui.label(
                        RichText::new(format!("{} {}", marker, mv.destination))
                            .size(11.0)
                            .color(TEXT_PRIMARY),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(RichText::new(format!("{:.1}", mv.score)).size(11.0).color(TEXT_SECONDARY));
                    });
                });
            }
        });
    }

    /// Render status message card
    fn render_message_card(&self, ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("⚠").size(14.0));
                    ui.add_space(4.0);
                    ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
                });
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let analysis = &self.state.analysis;
            let result = analysis.result.as_ref().ok();
            let overlays = Overlays {
                danger_zones: self.state.show_zones.then_some(analysis.danger_zones),
                safe_squares: self.state.show_safe.then(|| analysis.safe_squares()),
                best_move: result.map(|r| r.best_move.destination),
                follow_up: result.and_then(|r| r.follow_up),
                last_move: self.state.last_move,
                capture_animation: self.state.capture_animation.as_ref(),
            };

            let action = self.board_view.show(ui, &self.state.board, &overlays);

            match action {
                Some(BoardAction::Place(pos)) => self.state.place_selected(pos),
                Some(BoardAction::Remove(pos)) => self.state.remove_at(pos),
                Some(BoardAction::Drop { from, to }) => self.state.drop_piece(from, to),
                None => {}
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (new_board, clear, random, best, zones) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::N),
                i.key_pressed(egui::Key::C),
                i.key_pressed(egui::Key::A),
                i.key_pressed(egui::Key::B),
                i.key_pressed(egui::Key::Z),
            )
        });

        if new_board {
            self.state.new_board();
        }
        if clear {
            self.state.clear_enemies();
        }
        if random {
            self.state.add_random();
        }
        if best {
            self.state.play_best();
        }
        if zones {
            self.state.show_zones = !self.state.show_zones;
        }
    }
}

impl eframe::App for SandboxApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        // Purge pieces whose capture animation has finished
        self.state.tick();

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.state.capture_animation.is_some() {
            ctx.request_repaint();
        }
    }
}
