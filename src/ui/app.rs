//! Main application for the tic-tac-toe GUI

use eframe::egui;
use egui::{Align2, CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, Vec2};
use tracing::info;

use crate::config::GameConfig;
use crate::game::{GameMode, GameStatus, Outcome, TurnCoordinator};
use crate::rules::find_winning_line;
use crate::Player;

use super::board_view::BoardView;
use super::menu::{MenuState, Screen};
use super::theme::*;

/// Button pressed on the end-of-round banner
enum BannerAction {
    PlayAgain,
    MainMenu,
}

/// Main tic-tac-toe application
pub struct TicTacToeApp {
    game: TurnCoordinator,
    menu: MenuState,
    board_view: BoardView,
}

impl TicTacToeApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &GameConfig) -> Self {
        Self::with_config(config)
    }

    pub fn with_config(config: &GameConfig) -> Self {
        Self {
            game: TurnCoordinator::new(config.players.one.clone(), config.players.two.clone()),
            menu: MenuState::default(),
            board_view: BoardView::default(),
        }
    }

    /// Mode button handler
    fn start(&mut self, mode: GameMode) {
        match self.game.select_mode(mode) {
            Ok(()) => self.menu.enter_game(),
            Err(err) => self.menu.notice = Some(err.to_string()),
        }
    }

    fn play_again(&mut self) {
        self.game.reset();
        self.menu.play_again();
    }

    fn back_to_menu(&mut self) {
        info!("returning to main menu");
        self.game.full_reset();
        self.menu.main_menu();
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    /// Title plus one button per mode
    fn render_main_menu(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(ui.available_height() * 0.2);
                    ui.label(RichText::new("TIC-TAC-TOE").size(36.0).strong().color(TEXT_PRIMARY));
                    ui.add_space(24.0);

                    let mut chosen = None;
                    for mode in GameMode::ALL {
                        let button = egui::Button::new(RichText::new(mode.label()).size(18.0));
                        if ui.add_sized([220.0, 40.0], button).clicked() {
                            chosen = Some(mode);
                        }
                        ui.add_space(8.0);
                    }
                    if let Some(mode) = chosen {
                        self.start(mode);
                    }

                    if let Some(notice) = &self.menu.notice {
                        ui.add_space(12.0);
                        Frame::new()
                            .fill(NOTICE_BG)
                            .corner_radius(CornerRadius::same(8))
                            .inner_margin(10.0)
                            .show(ui, |ui| {
                                ui.label(RichText::new(notice).size(12.0).color(TEXT_PRIMARY));
                            });
                    }
                });
            });
    }

    /// Player names, tallies and whose turn it is
    fn render_side_panel(&self, ctx: &Context) {
        SidePanel::right("score_panel")
            .min_width(160.0)
            .frame(Frame::new().fill(PANEL_BG).inner_margin(12.0))
            .show(ctx, |ui| {
                ui.label(RichText::new("SCORE").size(10.0).color(TEXT_MUTED));
                ui.add_space(6.0);

                for profile in self.game.players() {
                    let is_turn = !self.game.status().is_over() && self.game.current_player() == profile.id();
                    Self::card_frame().show(ui, |ui| {
                        ui.horizontal(|ui| {
                            let (mark, color) = match profile.id() {
                                Player::PlayerOne => ("X", CROSS_COLOR),
                                Player::PlayerTwo => ("O", RING_COLOR),
                            };
                            ui.label(RichText::new(mark).size(20.0).color(color));
                            ui.vertical(|ui| {
                                let name = RichText::new(profile.name()).size(14.0).color(TEXT_PRIMARY);
                                ui.label(if is_turn { name.strong() } else { name });
                                ui.label(
                                    RichText::new(format!("{} wins", profile.wins()))
                                        .size(11.0)
                                        .color(TEXT_SECONDARY),
                                );
                            });
                        });
                    });
                    ui.add_space(8.0);
                }

                ui.add_space(8.0);
                ui.label(
                    RichText::new(format!("Move #{}", self.game.board().move_count()))
                        .size(11.0)
                        .color(TEXT_SECONDARY),
                );
                ui.add_space(4.0);
                ui.label(RichText::new("N: new round   Esc: menu").size(10.0).color(TEXT_MUTED));
            });
    }

    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(PANEL_BG).inner_margin(10.0))
            .show(ctx, |ui| {
                let winning_line = match self.game.status() {
                    GameStatus::Won(_) => find_winning_line(self.game.board()),
                    _ => None,
                };

                let clicked = self.board_view.show(
                    ui,
                    self.game.board(),
                    self.game.current_player(),
                    self.menu.last_move,
                    winning_line,
                    self.game.status().is_over(),
                );

                if let Some(pos) = clicked {
                    self.game.on_cell_activated(pos, &mut self.menu);
                }
            });
    }

    /// Banner message and its colour; only a win is highlighted
    fn banner_text(&self, outcome: Outcome) -> (String, egui::Color32) {
        match outcome {
            Outcome::Won(winner) => (
                format!(
                    "CONGRATULATIONS!\n{} HAS WON!",
                    self.game.player(winner).name().to_uppercase()
                ),
                WIN_HIGHLIGHT,
            ),
            Outcome::Draw => ("IT'S A DRAW!".to_string(), TEXT_PRIMARY),
        }
    }

    /// Win or draw banner with the two end-of-round actions
    fn render_banner(&mut self, ctx: &Context) {
        let Some(outcome) = self.menu.banner else {
            return;
        };

        let (message, color) = self.banner_text(outcome);

        let mut action = None;
        egui::Window::new("Round over")
            .collapsible(false)
            .resizable(false)
            .title_bar(false)
            .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(8.0);
                    ui.label(RichText::new(message).size(20.0).strong().color(color));
                    ui.add_space(12.0);
                    ui.horizontal(|ui| {
                        if ui.button("Play again").clicked() {
                            action = Some(BannerAction::PlayAgain);
                        }
                        if ui.button("Main menu").clicked() {
                            action = Some(BannerAction::MainMenu);
                        }
                    });
                });
            });

        match action {
            Some(BannerAction::PlayAgain) => self.play_again(),
            Some(BannerAction::MainMenu) => self.back_to_menu(),
            None => {}
        }
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        if self.menu.screen != Screen::Playing {
            return;
        }

        let (new_round, to_menu) =
            ctx.input(|i| (i.key_pressed(egui::Key::N), i.key_pressed(egui::Key::Escape)));

        if to_menu {
            self.back_to_menu();
        } else if new_round {
            self.play_again();
        }
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        match self.menu.screen {
            Screen::MainMenu => self.render_main_menu(ctx),
            Screen::Playing => {
                self.render_side_panel(ctx);
                self.render_board(ctx);
                self.render_banner(ctx);
            }
        }
    }
}
