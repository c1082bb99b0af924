use eframe::egui::{self, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::filter::FilteredView;

const ROW_HEIGHT: f32 = 18.0;
const MAX_TABLE_HEIGHT: f32 = 320.0;

/// Collapsible table with the first `limit` visible records, every column in
/// file order.
pub fn preview(ui: &mut Ui, view: &FilteredView<'_>, limit: usize) {
    egui::CollapsingHeader::new("Filtered data")
        .id_salt("filtered_data")
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            if view.is_empty() {
                ui.label("No data to display");
                return;
            }

            let rows = view.preview(limit);
            let columns = &view.dataset().column_names;
            ui.label(format!("Showing {} of {} records", rows.len(), view.len()));

            TableBuilder::new(ui)
                .striped(true)
                .resizable(true)
                .max_scroll_height(MAX_TABLE_HEIGHT)
                .columns(Column::auto().at_least(60.0), columns.len())
                .header(ROW_HEIGHT + 2.0, |mut header| {
                    for name in columns {
                        header.col(|ui: &mut Ui| {
                            ui.strong(name);
                        });
                    }
                })
                .body(|body| {
                    body.rows(ROW_HEIGHT, rows.len(), |mut row| {
                        let record = rows[row.index()];
                        for name in columns {
                            row.col(|ui: &mut Ui| {
                                ui.label(record.display_value(name));
                            });
                        }
                    });
                });
        });
}
