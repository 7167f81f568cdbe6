use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::Instant;

use chrono::{DateTime, Local};
use eframe::{egui, App, CreationContext, Frame};
use egui::{Align, Align2, Color32, Layout, RichText, ScrollArea, Ui};

use workout_board::cards::RenderedCard;
use workout_board::grid;
use workout_board::loader::{self, LoadError, WorkoutSource};
use workout_board::logging;
use workout_board::models::{Filter, WorkoutDataset};
use workout_board::ui_util::ScrollTopButton;

const LOAD_ERROR_MESSAGE: &str =
    "Failed to load workouts. Please check that workouts.json is available.";

fn main() -> Result<(), eframe::Error> {
    logging::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1280 as f32, 860 as f32]),
        ..Default::default()
    };

    eframe::run_native(
        "Workout Board",
        options,
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            let mut style = (*cc.egui_ctx.style()).clone();
            style.text_styles.insert(
                egui::TextStyle::Body,
                egui::FontId::new(16.0, egui::FontFamily::Proportional),
            );
            style.text_styles.insert(
                egui::TextStyle::Heading,
                egui::FontId::new(28.0, egui::FontFamily::Proportional),
            );
            cc.egui_ctx.set_style(style);
            Ok(Box::new(WorkoutApp::new(cc)))
        }),
    )
}

enum LoadState {
    Loading(Receiver<Result<WorkoutDataset, LoadError>>),
    Ready,
    Failed,
}

struct WorkoutApp {
    dataset: WorkoutDataset,
    load_state: LoadState,
    active_filter: Filter,
    cards: Vec<RenderedCard>,
    /// Set on every grid rebuild; drives the entrance stagger.
    render_epoch: Instant,
    loaded_at: Option<DateTime<Local>>,
    scroll_button: ScrollTopButton,
}

impl WorkoutApp {
    fn new(_cc: &CreationContext) -> Self {
        let source = WorkoutSource::detect(loader::DEFAULT_SOURCE);
        let receiver = loader::spawn_fetch(source);

        WorkoutApp {
            dataset: WorkoutDataset::default(),
            load_state: LoadState::Loading(receiver),
            active_filter: Filter::All,
            cards: Vec::new(),
            render_epoch: Instant::now(),
            loaded_at: None,
            scroll_button: ScrollTopButton::default(),
        }
    }

    fn rebuild_grid(&mut self) {
        self.cards = grid::build_grid(&self.dataset, self.active_filter);
        self.render_epoch = Instant::now();
    }

    fn poll_loader(&mut self) {
        let LoadState::Loading(receiver) = &self.load_state else {
            return;
        };
        match receiver.try_recv() {
            Ok(Ok(dataset)) => {
                self.dataset = dataset;
                self.loaded_at = Some(Local::now());
                self.load_state = LoadState::Ready;
                self.rebuild_grid();
            }
            Ok(Err(_)) | Err(TryRecvError::Disconnected) => {
                // Cause already logged by the loader thread.
                self.cards.clear();
                self.load_state = LoadState::Failed;
            }
            Err(TryRecvError::Empty) => {}
        }
    }

    fn show_tabs(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            for filter in Filter::TABS {
                if ui
                    .selectable_label(self.active_filter == filter, filter.label())
                    .clicked()
                {
                    self.active_filter = filter;
                    self.rebuild_grid();
                }
            }
        });
    }

    fn show_status_line(&self, ui: &mut Ui) {
        match &self.load_state {
            LoadState::Loading(_) => {
                ui.label(RichText::new("Loading workouts...").weak());
            }
            LoadState::Ready => {
                if let Some(loaded_at) = self.loaded_at {
                    ui.label(
                        RichText::new(format!(
                            "{} workouts, loaded at {}",
                            self.dataset.len(),
                            loaded_at.format("%H:%M:%S")
                        ))
                        .weak(),
                    );
                }
            }
            LoadState::Failed => {}
        }
    }

    fn show_grid_area(&mut self, ui: &mut Ui) {
        let mut scroll = ScrollArea::vertical();
        if let Some(offset) = self.scroll_button.animated_offset() {
            scroll = scroll.vertical_scroll_offset(offset);
        }

        let elapsed = self.render_epoch.elapsed().as_secs_f32();
        let output = scroll.show(ui, |ui| {
            ui.set_width(ui.available_width());
            match &self.load_state {
                LoadState::Failed => {
                    ui.add_space(40.0);
                    ui.label(
                        RichText::new(LOAD_ERROR_MESSAGE)
                            .size(20.0)
                            .color(Color32::from_rgb(220, 80, 80)),
                    );
                }
                _ => grid::draw_grid(ui, &self.cards, elapsed),
            }
        });

        self.scroll_button.observe(output.state.offset.y);
    }

    fn show_scroll_to_top(&mut self, ctx: &egui::Context) {
        if !self.scroll_button.visible {
            return;
        }
        egui::Area::new(egui::Id::new("scroll_to_top"))
            .anchor(Align2::RIGHT_BOTTOM, egui::vec2(-30.0, -30.0))
            .show(ctx, |ui| {
                if ui.button(RichText::new("\u{2191}").size(22.0)).clicked() {
                    self.scroll_button.start_scroll_to_top();
                }
            });
    }
}

impl App for WorkoutApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        let current_time = Local::now().format("%H:%M:%S").to_string();

        self.poll_loader();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.with_layout(Layout::top_down_justified(Align::Center), |ui| {
                ui.add_space(10.0);

                ui.horizontal(|ui| {
                    ui.label(RichText::new("Workout Board").heading().strong());
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.label(RichText::new(current_time).size(20.0));
                    });
                });

                ui.add_space(10.0);
                self.show_tabs(ui);
                self.show_status_line(ui);
                ui.add_space(10.0);

                self.show_grid_area(ui);
            });
        });

        self.show_scroll_to_top(ctx);

        ctx.request_repaint();
    }
}
