use eframe::egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, BoxElem, BoxPlot, BoxSpread, Legend, Plot, PlotPoints, Points};

use happiness_dashboard::color::{diverging, generate_palette};
use happiness_dashboard::state::AppState;

const PLOT_HEIGHT: f32 = 320.0;

// ---------------------------------------------------------------------------
// Scatter plots
// ---------------------------------------------------------------------------

/// Happiness against GDP, one series per region. Marker size follows social
/// support.
pub fn gdp_scatter(ui: &mut Ui, state: &AppState) {
    Plot::new("gdp_scatter")
        .legend(Legend::default())
        .height(PLOT_HEIGHT)
        .x_axis_label("Logged GDP per capita")
        .y_axis_label("Ladder score")
        .show(ui, |plot_ui| {
            for series in &state.views.scatter {
                let color = state.color_map.color_for(&series.region);
                // Bucket social support so each bucket can be one Points item.
                for bucket in 0..4 {
                    let points: PlotPoints = series
                        .points
                        .iter()
                        .filter(|p| support_bucket(p.social_support) == bucket)
                        .map(|p| [p.gdp, p.score])
                        .collect();
                    plot_ui.points(
                        Points::new(points)
                            .name(&series.region)
                            .color(color)
                            .radius(2.5 + bucket as f32 * 1.5),
                    );
                }
            }
        });
}

fn support_bucket(social_support: f64) -> usize {
    ((social_support.clamp(0.0, 0.999) * 4.0) as usize).min(3)
}

/// Each factor against the ladder score.
pub fn factor_scatter(ui: &mut Ui, state: &AppState) {
    let palette = generate_palette(state.views.factor_series.len());
    Plot::new("factor_scatter")
        .legend(Legend::default())
        .height(PLOT_HEIGHT)
        .x_axis_label("Ladder score")
        .y_axis_label("Factor value")
        .show(ui, |plot_ui| {
            for (series, color) in state.views.factor_series.iter().zip(palette) {
                let points: PlotPoints = series.points.iter().copied().collect();
                plot_ui.points(
                    Points::new(points)
                        .name(series.factor.column())
                        .color(color)
                        .radius(3.0),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Box plot
// ---------------------------------------------------------------------------

pub fn regional_box_plot(ui: &mut Ui, state: &AppState) {
    let boxes: Vec<BoxElem> = state
        .views
        .distributions
        .iter()
        .enumerate()
        .map(|(i, d)| {
            let color = state.color_map.color_for(&d.region);
            BoxElem::new(
                i as f64,
                BoxSpread::new(d.lower_whisker, d.q1, d.median, d.q3, d.upper_whisker),
            )
            .name(&d.region)
            .fill(color.gamma_multiply(0.4))
            .stroke((1.5, color))
        })
        .collect();

    Plot::new("regional_box_plot")
        .height(PLOT_HEIGHT)
        .y_axis_label("Ladder score")
        .show_x(false)
        .show(ui, |plot_ui| {
            plot_ui.box_plot(BoxPlot::new(boxes).name("Regions"));
        });
}

// ---------------------------------------------------------------------------
// Bar charts
// ---------------------------------------------------------------------------

/// Ladder score bars of a ranking, coloured by region.
pub fn ranking_bars(ui: &mut Ui, id: &str, state: &AppState, bottom: bool) {
    let ranking = if bottom {
        &state.views.bottom
    } else {
        &state.views.top
    };
    let bars: Vec<Bar> = ranking
        .iter()
        .enumerate()
        .map(|(i, c)| {
            Bar::new(i as f64, c.score)
                .name(&c.country)
                .fill(state.color_map.color_for(&c.region))
        })
        .collect();

    Plot::new(id)
        .height(PLOT_HEIGHT * 0.75)
        .y_axis_label("Ladder score")
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}

/// Correlation of each factor with the ladder score.
pub fn factor_correlation_bars(ui: &mut Ui, state: &AppState) {
    ui.strong("Correlation of Factors with Happiness Score");
    let bars: Vec<Bar> = state
        .views
        .factor_correlations
        .iter()
        .enumerate()
        .map(|(i, fc)| {
            let value = fc.correlation.unwrap_or(0.0);
            let fill = fc.correlation.map_or(Color32::GRAY, diverging);
            Bar::new(i as f64, value)
                .name(fc.factor.label())
                .fill(fill)
        })
        .collect();

    Plot::new("factor_correlations")
        .height(PLOT_HEIGHT * 0.75)
        .include_y(-1.0)
        .include_y(1.0)
        .y_axis_label("Correlation Coefficient")
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}
