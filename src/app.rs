use eframe::egui::{self, Color32, RichText, Ui};

use crate::config::{DashboardConfig, DATA_PATH_ENV};
use crate::data::loader::LoadError;
use crate::data::model::HousingDataset;
use crate::state::AppState;
use crate::ui::panels;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

/// Either a ready dashboard or the terminal screen for a failed load.
pub enum HousingDashboardApp {
    Ready(Box<AppState>),
    Failed(LoadError),
}

impl HousingDashboardApp {
    pub fn new(loaded: Result<HousingDataset, LoadError>, config: DashboardConfig) -> Self {
        match loaded {
            Ok(dataset) => Self::Ready(Box::new(AppState::new(dataset, config))),
            Err(e) => Self::Failed(e),
        }
    }
}

impl eframe::App for HousingDashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let state = match self {
            Self::Ready(state) => state,
            Self::Failed(error) => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    error_screen(ui, error);
                });
                return;
            }
        };

        // ---- Top panel: title and price range ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, state);
            });

        // ---- Central panel: map, metrics, chart, table ----
        egui::CentralPanel::default().show(ctx, |ui| {
            panels::dashboard(ui, state);
        });
    }
}

fn error_screen(ui: &mut Ui, error: &LoadError) {
    ui.centered_and_justified(|ui: &mut Ui| {
        ui.vertical_centered(|ui: &mut Ui| {
            ui.heading(RichText::new(format!("Error: {error}")).color(Color32::RED));
            ui.add_space(8.0);
            if let LoadError::DataUnavailable { .. } = error {
                ui.label(format!(
                    "Place housing.csv in the working directory, point {DATA_PATH_ENV} at it, \
                     or run `cargo run --bin generate_sample`."
                ));
            }
            ui.label("The dashboard cannot run without its dataset.");
        });
    });
}
