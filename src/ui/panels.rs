use std::sync::Arc;

use eframe::egui::{self, Color32, DragValue, RichText, ScrollArea, Slider, Ui};

use happiness_dashboard::data::aggregate::SummaryMetric;
use happiness_dashboard::data::filter::TOP_N_RANGE;
use happiness_dashboard::state::AppState;

use super::{fmt_delta, fmt_stat};

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("World Happiness Analytics");
    ui.separator();

    // Cheap handle so region names can be read while state is mutated.
    let dataset = Arc::clone(&state.dataset);

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Regions ----
            let n_selected = state.criteria.regions.len();
            let n_total = dataset.regions().len();
            egui::CollapsingHeader::new(
                RichText::new(format!("Regions  ({n_selected}/{n_total})")).strong(),
            )
            .id_salt("regions")
            .default_open(true)
            .show(ui, |ui: &mut Ui| {
                ui.horizontal(|ui: &mut Ui| {
                    if ui.small_button("All").clicked() {
                        state.select_all_regions();
                    }
                    if ui.small_button("None").clicked() {
                        state.select_no_regions();
                    }
                });

                for region in dataset.regions() {
                    let mut checked = state.criteria.regions.contains(region);
                    let text = RichText::new(region).color(state.color_map.color_for(region));
                    if ui.checkbox(&mut checked, text).changed() {
                        state.toggle_region(region);
                    }
                }
            });
            ui.separator();

            // ---- GDP range ----
            ui.strong("GDP Range");
            let mut gdp = state.criteria.gdp;
            let gdp_changed = range_inputs(ui, "gdp", &mut gdp.min, &mut gdp.max);
            if gdp_changed {
                state.set_gdp_range(gdp.min, gdp.max);
            }

            // ---- Happiness score range ----
            ui.strong("Happiness Score Range");
            let mut score = state.criteria.score;
            if range_inputs(ui, "score", &mut score.min, &mut score.max) {
                state.set_score_range(score.min, score.max);
            }
            ui.separator();

            // ---- Top N ----
            let mut top_n = state.criteria.top_n();
            if ui
                .add(Slider::new(&mut top_n, TOP_N_RANGE).text("Show Top N Countries"))
                .changed()
            {
                state.set_top_n(top_n);
            }
            ui.separator();

            if ui.button("Reset filters").clicked() {
                state.reset_filters();
            }
            ui.separator();

            // ---- Export ----
            ui.strong("Download Data");
            if ui.button("Download Full Dataset").clicked() {
                if let Some(path) = save_file_dialog(&state.export_file_name) {
                    state.export_dataset(&path);
                }
            }
            if ui.button("Download Filtered Data").clicked() {
                if let Some(path) = save_file_dialog(&state.export_file_name) {
                    state.export_filtered(&path);
                }
            }
        });
}

/// Min / max drag values on one row. Returns whether either changed.
fn range_inputs(ui: &mut Ui, id: &str, min: &mut f64, max: &mut f64) -> bool {
    ui.push_id(id, |ui: &mut Ui| {
        ui.horizontal(|ui: &mut Ui| {
            ui.label("Min");
            let a = ui.add(DragValue::new(min).speed(0.1).max_decimals(3)).changed();
            ui.label("Max");
            let b = ui.add(DragValue::new(max).speed(0.1).max_decimals(3)).changed();
            a || b
        })
        .inner
    })
    .inner
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Export filtered…").clicked() {
                if let Some(path) = save_file_dialog(&state.export_file_name) {
                    state.export_filtered(&path);
                }
                ui.close_menu();
            }
            if ui.button("Export full dataset…").clicked() {
                if let Some(path) = save_file_dialog(&state.export_file_name) {
                    state.export_dataset(&path);
                }
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} countries loaded, {} visible",
            state.dataset.len(),
            state.views.filtered.len()
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            let color = if msg.starts_with("Error") {
                Color32::RED
            } else {
                Color32::LIGHT_GREEN
            };
            ui.label(RichText::new(msg).color(color));
        }
    });
}

// ---------------------------------------------------------------------------
// Metrics and text blocks
// ---------------------------------------------------------------------------

/// The five headline metrics.
pub fn metrics_row(ui: &mut Ui, state: &AppState) {
    let metrics = &state.views.metrics;
    ui.columns(5, |cols| {
        metric(&mut cols[0], "Average Happiness", &metrics.happiness);

        cols[1].label("Highest Score");
        match &metrics.highest {
            Some(top) => {
                cols[1].heading(format!("{:.2}", top.score));
                cols[1].label(format!("Top: {}", top.country));
            }
            None => {
                cols[1].heading(fmt_stat(None));
            }
        }

        metric(&mut cols[2], "Average GDP", &metrics.gdp);
        metric(&mut cols[3], "Social Support", &metrics.social_support);
        metric(&mut cols[4], "Life Expectancy", &metrics.life_expectancy);
    });
}

fn metric(ui: &mut Ui, title: &str, value: &SummaryMetric) {
    ui.label(title);
    ui.heading(fmt_stat(value.mean));
    let color = match value.delta {
        Some(d) if d > 0.0 => Color32::LIGHT_GREEN,
        Some(d) if d < 0.0 => Color32::LIGHT_RED,
        _ => Color32::GRAY,
    };
    ui.label(RichText::new(fmt_delta(value.delta)).color(color));
}

pub fn gdp_correlation(ui: &mut Ui, state: &AppState) {
    ui.strong("GDP and Happiness Correlation");
    ui.label(format!(
        "The correlation coefficient between GDP per capita and Happiness Score is: {}",
        fmt_stat(state.views.gdp_correlation)
    ));
}

pub fn variable_glossary(ui: &mut Ui) {
    ui.separator();
    egui::CollapsingHeader::new("Variable Explanation").show(ui, |ui: &mut Ui| {
        for (name, text) in [
            ("Ladder score", "Country happiness score (0-10)"),
            ("GDP per capita", "Gross Domestic Product per capita (in log form)"),
            ("Social support", "Perceived level of social support"),
            (
                "Healthy life expectancy",
                "Average number of years a person is expected to live in good health",
            ),
            ("Freedom", "Freedom to make life choices"),
            ("Generosity", "Level of generosity"),
            ("Corruption", "Perception of corruption"),
        ] {
            ui.horizontal(|ui: &mut Ui| {
                ui.strong(name);
                ui.label(text);
            });
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

fn save_file_dialog(file_name: &str) -> Option<std::path::PathBuf> {
    rfd::FileDialog::new()
        .set_title("Save data as CSV")
        .set_file_name(file_name)
        .add_filter("CSV", &["csv"])
        .save_file()
}
