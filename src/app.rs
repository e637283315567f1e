use eframe::egui;

use happiness_dashboard::state::AppState;

use crate::ui::{panels, plot, tables};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct HappinessApp {
    pub state: AppState,
}

impl HappinessApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for HappinessApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: metrics, charts and tables ----
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    panels::metrics_row(ui, &self.state);
                    ui.separator();

                    ui.heading("Happiness Score vs GDP per Capita");
                    plot::gdp_scatter(ui, &self.state);

                    ui.heading("Regional Happiness Distribution");
                    plot::regional_box_plot(ui, &self.state);

                    ui.heading("Factors Affecting Happiness");
                    tables::correlation_heatmap(ui, &self.state);

                    ui.heading("Factor Contribution to Happiness");
                    plot::factor_scatter(ui, &self.state);

                    ui.heading("Detailed Country Data");
                    tables::country_table(ui, &mut self.state);

                    tables::rankings(ui, &self.state);

                    ui.heading("Key Insights");
                    tables::regional_stats(ui, &self.state);
                    panels::gdp_correlation(ui, &self.state);
                    plot::factor_correlation_bars(ui, &self.state);

                    panels::variable_glossary(ui);
                });
        });
    }
}
