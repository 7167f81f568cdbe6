//grid.rs
use eframe::egui::{self, Align, Color32, Layout, RichText, Ui};
use egui_extras::{Size, StripBuilder};

use crate::cards::{format_card, LineStyle, RenderedCard};
use crate::models::{Category, Filter, WorkoutDataset};

/// Entrance delay step between neighbouring cards of the same category.
pub const STAGGER_STEP: f32 = 0.05;

/// Seconds a card takes to fade in once its delay has elapsed.
const FADE_SECS: f32 = 0.3;

const GRID_COLUMNS: usize = 3;

/// Builds the display list for one render pass. Crossfit cards keep
/// their original order and precede engine cards when the filter is
/// `All`. The stagger delay is indexed within each category's own
/// sequence, not the merged grid.
pub fn build_grid(dataset: &WorkoutDataset, filter: Filter) -> Vec<RenderedCard> {
    let mut cards = Vec::new();

    let mut add_items = |records: &[crate::models::WorkoutRecord], category: Category| {
        for (index, record) in records.iter().enumerate() {
            let mut card = format_card(record, category);
            card.delay = index as f32 * STAGGER_STEP;
            cards.push(card);
        }
    };

    if filter.includes(Category::Crossfit) {
        add_items(&dataset.crossfit, Category::Crossfit);
    }
    if filter.includes(Category::Engine) {
        add_items(&dataset.engine, Category::Engine);
    }

    cards
}

fn badge_color(category: Category) -> Color32 {
    match category {
        Category::Crossfit => Color32::from_rgb(180, 60, 60),
        Category::Engine => Color32::from_rgb(60, 110, 180),
    }
}

fn line_widget(ui: &mut Ui, text: &str, style: LineStyle) {
    match style {
        LineStyle::Plain => {
            ui.label(RichText::new(text).size(16.0));
        }
        LineStyle::Bold => {
            ui.label(RichText::new(text).size(16.0).strong());
        }
        LineStyle::TimeCap => {
            ui.label(
                RichText::new(text)
                    .size(16.0)
                    .italics()
                    .color(Color32::from_rgb(230, 160, 60)),
            );
        }
    }
}

fn draw_card(ui: &mut Ui, card: &RenderedCard, elapsed: f32) {
    let opacity = ((elapsed - card.delay) / FADE_SECS).clamp(0.0, 1.0);
    ui.set_opacity(opacity);

    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());

            ui.horizontal(|ui| {
                ui.label(RichText::new(&card.title).size(20.0).strong());
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.label(
                        RichText::new(card.badge())
                            .size(13.0)
                            .strong()
                            .color(Color32::WHITE)
                            .background_color(badge_color(card.category)),
                    );
                });
            });

            for section in &card.sections {
                ui.add_space(8.0);
                ui.label(
                    RichText::new(section.heading)
                        .size(13.0)
                        .strong()
                        .color(ui.visuals().weak_text_color()),
                );
                for line in &section.lines {
                    line_widget(ui, &line.text, line.style);
                }
            }
        });
}

/// Lays the cards out in fixed-column rows. `elapsed` is the time in
/// seconds since the grid was last rebuilt and drives the entrance fade.
pub fn draw_grid(ui: &mut Ui, cards: &[RenderedCard], elapsed: f32) {
    for row in cards.chunks(GRID_COLUMNS) {
        StripBuilder::new(ui)
            .sizes(Size::remainder(), GRID_COLUMNS)
            .horizontal(|mut strip| {
                for slot in 0..GRID_COLUMNS {
                    strip.cell(|ui| {
                        if let Some(card) = row.get(slot) {
                            draw_card(ui, card, elapsed);
                        }
                    });
                }
            });
        ui.add_space(12.0);
    }
}
