use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use happiness_dashboard::color::diverging;
use happiness_dashboard::data::aggregate::RankedCountry;
use happiness_dashboard::data::model::Attribute;
use happiness_dashboard::state::AppState;

use super::{fmt_stat, plot};

const ROW_HEIGHT: f32 = 18.0;
const HEADER_HEIGHT: f32 = 20.0;
const TABLE_HEIGHT: f32 = 280.0;

// ---------------------------------------------------------------------------
// Correlation heatmap
// ---------------------------------------------------------------------------

/// The correlation matrix as a grid of coloured cells.
pub fn correlation_heatmap(ui: &mut Ui, state: &AppState) {
    let matrix = &state.views.correlation;
    egui::Grid::new("correlation_heatmap")
        .striped(false)
        .spacing([6.0, 4.0])
        .show(ui, |ui: &mut Ui| {
            ui.label("");
            for a in &matrix.attributes {
                ui.strong(a.label());
            }
            ui.end_row();

            for (a, row) in matrix.attributes.iter().zip(matrix.rows()) {
                ui.strong(a.label());
                for &cell in row {
                    let text = RichText::new(fmt_stat(cell))
                        .monospace()
                        .color(Color32::WHITE)
                        .background_color(cell.map_or(Color32::DARK_GRAY, diverging));
                    ui.label(text);
                }
                ui.end_row();
            }
        });
}

// ---------------------------------------------------------------------------
// Country table with search
// ---------------------------------------------------------------------------

const COUNTRY_COLUMNS: [Attribute; 4] = [
    Attribute::LadderScore,
    Attribute::LogGdpPerCapita,
    Attribute::SocialSupport,
    Attribute::HealthyLifeExpectancy,
];

pub fn country_table(ui: &mut Ui, state: &mut AppState) {
    let mut search = state.search.clone();
    ui.horizontal(|ui: &mut Ui| {
        ui.label("Search for a country:");
        if ui.text_edit_singleline(&mut search).changed() {
            state.set_search(search);
        }
    });

    let view = state.views.displayed_view(&state.dataset);
    let rows: Vec<_> = view.iter().collect();

    ui.push_id("country_table", |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .max_scroll_height(TABLE_HEIGHT)
            .column(Column::auto().at_least(140.0))
            .column(Column::auto().at_least(180.0))
            .columns(Column::auto().at_least(90.0), COUNTRY_COLUMNS.len())
            .header(HEADER_HEIGHT, |mut header| {
                header.col(|ui| {
                    ui.strong("Country name");
                });
                header.col(|ui| {
                    ui.strong("Regional indicator");
                });
                for a in COUNTRY_COLUMNS {
                    header.col(|ui| {
                        ui.strong(a.column());
                    });
                }
            })
            .body(|body| {
                body.rows(ROW_HEIGHT, rows.len(), |mut row| {
                    let r = rows[row.index()];
                    row.col(|ui| {
                        ui.label(&r.country_name);
                    });
                    row.col(|ui| {
                        let color = state.color_map.color_for(&r.region);
                        ui.label(RichText::new(&r.region).color(color));
                    });
                    for a in COUNTRY_COLUMNS {
                        row.col(|ui| {
                            ui.label(format!("{:.3}", a.value(r)));
                        });
                    }
                });
            });
    });
}

// ---------------------------------------------------------------------------
// Rankings
// ---------------------------------------------------------------------------

pub fn rankings(ui: &mut Ui, state: &AppState) {
    let n = state.criteria.top_n();
    ui.columns(2, |cols| {
        cols[0].heading(format!("Top {n} Happiest Countries"));
        ranking_table(&mut cols[0], "top_table", &state.views.top);
        plot::ranking_bars(&mut cols[0], "top_bars", state, false);

        cols[1].heading(format!("Bottom {n} Countries"));
        ranking_table(&mut cols[1], "bottom_table", &state.views.bottom);
        plot::ranking_bars(&mut cols[1], "bottom_bars", state, true);
    });
}

fn ranking_table(ui: &mut Ui, id: &str, ranking: &[RankedCountry]) {
    ui.push_id(id, |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .column(Column::auto().at_least(140.0))
            .column(Column::auto().at_least(80.0))
            .column(Column::remainder())
            .header(HEADER_HEIGHT, |mut header| {
                for title in ["Country name", "Ladder score", "Regional indicator"] {
                    header.col(|ui| {
                        ui.strong(title);
                    });
                }
            })
            .body(|mut body| {
                for c in ranking {
                    body.row(ROW_HEIGHT, |mut row| {
                        row.col(|ui| {
                            ui.label(&c.country);
                        });
                        row.col(|ui| {
                            ui.label(format!("{:.3}", c.score));
                        });
                        row.col(|ui| {
                            ui.label(&c.region);
                        });
                    });
                }
            });
    });
}

// ---------------------------------------------------------------------------
// Regional statistics
// ---------------------------------------------------------------------------

pub fn regional_stats(ui: &mut Ui, state: &AppState) {
    ui.strong("Regional Statistics");
    ui.push_id("regional_stats", |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .column(Column::auto().at_least(200.0))
            .columns(Column::auto().at_least(60.0), 5)
            .header(HEADER_HEIGHT, |mut header| {
                for title in ["Regional indicator", "mean", "std", "min", "max", "count"] {
                    header.col(|ui| {
                        ui.strong(title);
                    });
                }
            })
            .body(|mut body| {
                for s in &state.views.regional {
                    body.row(ROW_HEIGHT, |mut row| {
                        row.col(|ui| {
                            ui.label(&s.region);
                        });
                        for value in [s.mean, s.std_dev, s.min, s.max] {
                            row.col(|ui| {
                                ui.label(fmt_stat(value));
                            });
                        }
                        row.col(|ui| {
                            ui.label(s.count.to_string());
                        });
                    });
                }
            });
    });
}
