use eframe::egui::{self, RichText, ScrollArea, Ui};

use crate::data::filter::IncomeBracket;
use crate::state::AppState;
use crate::ui::{chart, map, overview, table};

pub const TITLE: &str = "California Housing Data (1990)";

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the sidebar filters: location types and income level.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Location type (multi-select) ----
            let categories = state.dataset().proximity_values.clone();
            let header_text = format!(
                "Location type  ({}/{})",
                state.criteria.categories.len(),
                categories.len()
            );
            ui.strong(header_text);
            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("All").clicked() {
                    state.select_all_categories();
                }
                if ui.small_button("None").clicked() {
                    state.select_no_categories();
                }
            });
            for category in &categories {
                let mut checked = state.criteria.categories.contains(category);
                let text = RichText::new(category).color(state.color_map.color_for(category));
                if ui.checkbox(&mut checked, text).changed() {
                    state.toggle_category(category);
                }
            }
            ui.separator();

            // ---- Income level (radio) ----
            ui.strong("Income level");
            let mut bracket = state.criteria.income_bracket;
            for option in IncomeBracket::ALL {
                ui.radio_value(&mut bracket, option, option.label());
            }
            if bracket != state.criteria.income_bracket {
                state.set_income_bracket(bracket);
            }
            ui.separator();

            ui.label(format!("Filtered points: {}", state.summary().record_count));
            if ui.button("Reset filters").clicked() {
                state.reset_filters();
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar – title and price range
// ---------------------------------------------------------------------------

/// Render the title and the median house value range sliders.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    ui.heading(TITLE);
    ui.add_space(4.0);

    ui.strong("Median house value");
    let (lo, hi) = state.price_bounds();
    let mut min = state.criteria.price_min;
    let mut max = state.criteria.price_max;

    let mut changed = false;
    ui.horizontal(|ui: &mut Ui| {
        changed |= ui
            .add(egui::Slider::new(&mut min, lo..=hi).step_by(1.0).prefix("$").text("from"))
            .changed();
        changed |= ui
            .add(egui::Slider::new(&mut max, lo..=hi).step_by(1.0).prefix("$").text("to"))
            .changed();
    });
    if changed {
        state.set_price_range(min, max);
    }

    ui.label("More filters in the sidebar.");
    ui.add_space(4.0);
}

// ---------------------------------------------------------------------------
// Central panel – outputs
// ---------------------------------------------------------------------------

/// Render every output for the current filter result.
pub fn dashboard(ui: &mut Ui, state: &AppState) {
    let view = state.view();
    let summary = state.summary();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.columns(2, |columns: &mut [Ui]| {
                map::location_map(&mut columns[0], &view, &state.color_map);
                overview::metrics(&mut columns[1], summary);
            });
            ui.separator();
            chart::value_distribution(ui, summary);
            ui.separator();
            table::preview(ui, &view, state.config.preview_rows);
        });
}
