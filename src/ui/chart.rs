use eframe::egui::{self, Color32, Ui};
use egui_plot::{Bar, BarChart, Plot};

use crate::data::summary::{format_currency, Summary};

const CHART_HEIGHT: f32 = 300.0;

// ---------------------------------------------------------------------------
// Median house value distribution
// ---------------------------------------------------------------------------

/// Bar chart of record counts per distinct price, plus min / median / max.
pub fn value_distribution(ui: &mut Ui, summary: &Summary) {
    ui.heading("Median house value distribution");

    if summary.is_empty() {
        ui.colored_label(Color32::YELLOW, "No data available for the chart");
        return;
    }

    // Bars sit at 0, 1, 2, ...; the axis shows the price of each bucket.
    let labels: Vec<String> = summary
        .value_histogram
        .iter()
        .map(|&(price, _)| format_currency(price))
        .collect();
    let bars: Vec<Bar> = summary
        .value_histogram
        .iter()
        .zip(&labels)
        .enumerate()
        .map(|(i, (&(_, count), label))| {
            Bar::new(i as f64, count as f64).name(label).width(0.8)
        })
        .collect();

    Plot::new("value_distribution")
        .height(CHART_HEIGHT)
        .x_axis_label("Median house value")
        .y_axis_label("Records")
        .x_axis_formatter(move |mark, _range| {
            let idx = mark.value.round();
            if (mark.value - idx).abs() > f64::EPSILON || idx < 0.0 {
                return String::new();
            }
            labels.get(idx as usize).cloned().unwrap_or_default()
        })
        .allow_drag(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(
                BarChart::new(bars)
                    .name("Records")
                    .color(Color32::LIGHT_BLUE),
            );
        });

    egui::CollapsingHeader::new("Detailed statistics")
        .id_salt("price_stats")
        .default_open(false)
        .show(ui, |ui: &mut Ui| match &summary.price_stats {
            Some(stats) => {
                ui.label(format!(
                    "Price range: {} - {}",
                    format_currency(stats.min),
                    format_currency(stats.max)
                ));
                ui.label(format!("Median price: {}", format_currency(stats.median)));
            }
            None => {
                ui.label("No data to summarise");
            }
        });
}
