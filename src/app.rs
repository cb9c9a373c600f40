use std::path::Path;

use eframe::egui;

use crate::config::WindowConfig;
use crate::data::loader::load_series;
use crate::error::{Result, VacancyError};
use crate::state::ChartState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct ChartApp {
    pub state: ChartState,
}

impl ChartApp {
    pub fn new(state: ChartState) -> Self {
        Self { state }
    }
}

impl eframe::App for ChartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Central panel: chart ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::vacancy_plot(ui, &self.state);
        });
    }
}

/// Load `csv_path` and show it in a chart window until the user closes it.
///
/// The file is parsed before the window opens, so a bad date or value fails
/// here with a typed error instead of an empty chart.
pub fn render(csv_path: &Path, window: WindowConfig) -> Result<()> {
    let series = load_series(csv_path)?;
    log::info!("Charting {} periods from {}", series.len(), csv_path.display());
    let state = ChartState::with_series(csv_path, series);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([window.width, window.height])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };

    eframe::run_native(
        plot::CHART_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(ChartApp::new(state)))),
    )
    .map_err(|e| VacancyError::Window(e.to_string()))
}
