use eframe::egui::{Color32, Ui};
use egui_plot::{Legend, Plot, PlotPoints, Points};

use crate::color::ColorMap;
use crate::data::filter::FilteredView;

const MAP_HEIGHT: f32 = 420.0;

// ---------------------------------------------------------------------------
// Location scatter map
// ---------------------------------------------------------------------------

/// Plot each visible block at (longitude, latitude), coloured by location type.
pub fn location_map(ui: &mut Ui, view: &FilteredView<'_>, colors: &ColorMap) {
    ui.heading("House locations");

    if view.is_empty() {
        ui.colored_label(Color32::YELLOW, "No records match the current filters");
        return;
    }

    Plot::new("location_map")
        .height(MAP_HEIGHT)
        .data_aspect(1.0)
        .legend(Legend::default())
        .x_axis_label("Longitude")
        .y_axis_label("Latitude")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (category, points) in view.points_by_category() {
                let points = Points::new(PlotPoints::from(points))
                    .name(category)
                    .color(colors.color_for(category))
                    .radius(1.5);
                plot_ui.points(points);
            }
        });
}
