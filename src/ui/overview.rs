use eframe::egui::{RichText, Ui};

use crate::data::summary::{format_currency, format_income, Summary, NO_DATA};

/// Render the three headline metrics. Means read "no data" for an empty result.
pub fn metrics(ui: &mut Ui, summary: &Summary) {
    ui.heading("Overview");

    metric(ui, "Total records", &summary.record_count.to_string());
    metric(
        ui,
        "Average price",
        &summary
            .mean_price
            .map(format_currency)
            .unwrap_or_else(|| NO_DATA.to_string()),
    );
    metric(
        ui,
        "Average income",
        &summary
            .mean_income
            .map(format_income)
            .unwrap_or_else(|| NO_DATA.to_string()),
    );
}

fn metric(ui: &mut Ui, label: &str, value: &str) {
    ui.label(RichText::new(label).weak());
    ui.label(RichText::new(value).size(26.0).strong());
    ui.add_space(8.0);
}
