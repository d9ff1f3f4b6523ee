//! Chart Plotter Module
//! Builds the choropleth tile map and the state history chart using egui_plot.

use crate::charts::us_grid::{StateTile, GRID_ROWS, US_TILE_GRID};
use crate::data::format_count;
use egui::{Color32, RichText, Stroke};
use egui_plot::{Line, Plot, PlotPoint, PlotPoints, Points, Polygon, Text};

/// Continuous rainbow color scale for the choropleth, low to high.
pub const RAINBOW_RAMP: [Color32; 9] = [
    Color32::from_rgb(150, 0, 90),
    Color32::from_rgb(0, 0, 200),
    Color32::from_rgb(0, 25, 255),
    Color32::from_rgb(0, 152, 255),
    Color32::from_rgb(44, 255, 150),
    Color32::from_rgb(151, 255, 0),
    Color32::from_rgb(255, 234, 0),
    Color32::from_rgb(255, 111, 0),
    Color32::from_rgb(255, 0, 0),
];

/// Fill for states present on the grid but absent from the selected year.
const EMPTY_TILE_COLOR: Color32 = Color32::from_rgb(60, 60, 66);
const TILE_STROKE: Color32 = Color32::from_rgb(30, 30, 34);
const SELECTION_COLOR: Color32 = Color32::WHITE;

/// Fraction of a grid cell left as spacing around each tile.
const TILE_GAP: f64 = 0.06;

/// Hover/click outcome of one choropleth frame.
#[derive(Default)]
pub struct MapResponse {
    /// Tile code and value currently under the pointer.
    pub hovered: Option<(&'static str, u64)>,
    /// Tile code clicked this frame.
    pub clicked: Option<&'static str>,
}

/// Creates the dashboard's visualizations using egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Sample the rainbow ramp at `t` in [0, 1].
    pub fn ramp_color(t: f64) -> Color32 {
        let t = t.clamp(0.0, 1.0);
        let scaled = t * (RAINBOW_RAMP.len() - 1) as f64;
        let low = scaled.floor() as usize;
        let high = (low + 1).min(RAINBOW_RAMP.len() - 1);
        let frac = scaled - low as f64;

        let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * frac).round() as u8;
        let (a, b) = (RAINBOW_RAMP[low], RAINBOW_RAMP[high]);
        Color32::from_rgb(lerp(a.r(), b.r()), lerp(a.g(), b.g()), lerp(a.b(), b.b()))
    }

    /// Fill color for a value normalized against the year's range.
    fn tile_fill(value: u64, min: u64, max: u64) -> Color32 {
        let t = if max > min {
            (value - min) as f64 / (max - min) as f64
        } else {
            0.5
        };
        Self::ramp_color(t)
    }

    /// Corner points of a tile's square in plot coordinates. Row 0 of the
    /// grid is the top of the map; plot y grows upward.
    fn tile_corners(tile: &StateTile) -> Vec<[f64; 2]> {
        let x0 = tile.col as f64 + TILE_GAP;
        let x1 = tile.col as f64 + 1.0 - TILE_GAP;
        let y0 = (GRID_ROWS - 1 - tile.row) as f64 + TILE_GAP;
        let y1 = (GRID_ROWS - 1 - tile.row) as f64 + 1.0 - TILE_GAP;
        vec![[x0, y0], [x1, y0], [x1, y1], [x0, y1]]
    }

    /// Tile whose grid cell contains a plot-space pointer position.
    fn tile_at(pointer: PlotPoint) -> Option<&'static StateTile> {
        if pointer.x < 0.0 || pointer.y < 0.0 {
            return None;
        }
        let col = pointer.x.floor() as i64;
        let row = GRID_ROWS as i64 - 1 - pointer.y.floor() as i64;
        US_TILE_GRID
            .iter()
            .find(|t| t.col as i64 == col && t.row as i64 == row)
    }

    /// Draw the US tile choropleth for one year's (state, population) pairs.
    /// Tiles without a value for the year stay neutral and inert.
    pub fn draw_choropleth(
        ui: &mut egui::Ui,
        year_data: &[(String, u64)],
        selected_state: Option<&str>,
    ) -> MapResponse {
        let value_for = |code: &str| {
            year_data
                .iter()
                .find(|(state, _)| state == code)
                .map(|&(_, population)| population)
        };
        let min = year_data.iter().map(|&(_, p)| p).min().unwrap_or(0);
        let max = year_data.iter().map(|&(_, p)| p).max().unwrap_or(0);

        let mut response = MapResponse::default();

        Plot::new("us_choropleth")
            .height(340.0)
            .data_aspect(1.0)
            .show_axes(false)
            .show_grid(false)
            .show_x(false)
            .show_y(false)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .show(ui, |plot_ui| {
                for tile in US_TILE_GRID {
                    let value = value_for(tile.code);
                    let fill = match value {
                        Some(population) => Self::tile_fill(population, min, max),
                        None => EMPTY_TILE_COLOR,
                    };
                    let is_selected = selected_state == Some(tile.code);
                    let stroke = if is_selected {
                        Stroke::new(2.5, SELECTION_COLOR)
                    } else {
                        Stroke::new(1.0, TILE_STROKE)
                    };

                    plot_ui.polygon(
                        Polygon::new(PlotPoints::new(Self::tile_corners(tile)))
                            .fill_color(fill)
                            .stroke(stroke),
                    );

                    // Code label, dark on bright fills for contrast.
                    let label_color = match value {
                        Some(_) => Color32::BLACK,
                        None => Color32::GRAY,
                    };
                    let center = PlotPoint::new(
                        tile.col as f64 + 0.5,
                        (GRID_ROWS - 1 - tile.row) as f64 + 0.5,
                    );
                    plot_ui.text(Text::new(
                        center,
                        RichText::new(tile.code).size(10.0).color(label_color),
                    ));
                }

                if let Some(pointer) = plot_ui.pointer_coordinate() {
                    if let Some(tile) = Self::tile_at(pointer) {
                        if let Some(population) = value_for(tile.code) {
                            response.hovered = Some((tile.code, population));
                            if plot_ui.response().clicked() {
                                response.clicked = Some(tile.code);
                            }
                        }
                    }
                }
            });

        response
    }

    /// Draw the horizontal gradient color bar with min/max captions.
    pub fn draw_colorbar(ui: &mut egui::Ui, min: u64, max: u64) {
        ui.horizontal(|ui| {
            ui.label(
                RichText::new(format_count(min))
                    .size(11.0)
                    .color(Color32::GRAY),
            );

            let (rect, _) = ui.allocate_exact_size(egui::vec2(220.0, 14.0), egui::Sense::hover());
            let painter = ui.painter();
            let steps = 64;
            let step_width = rect.width() / steps as f32;
            for i in 0..steps {
                let t = i as f64 / (steps - 1) as f64;
                let slice = egui::Rect::from_min_size(
                    egui::pos2(rect.left() + i as f32 * step_width, rect.top()),
                    egui::vec2(step_width + 0.5, rect.height()),
                );
                painter.rect_filled(slice, 0.0, Self::ramp_color(t));
            }
            painter.rect_stroke(rect, 2.0, Stroke::new(1.0, TILE_STROKE));

            ui.label(
                RichText::new(format_count(max))
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        });
    }

    /// Draw the population-over-time line chart for one state.
    pub fn draw_history_chart(ui: &mut egui::Ui, state: &str, history: &[(u32, u64)]) {
        let points_vec: Vec<[f64; 2]> = history
            .iter()
            .map(|&(year, population)| [year as f64, population as f64])
            .collect();

        Plot::new(format!("history_{}", state))
            .height(260.0)
            .allow_scroll(false)
            .x_axis_label("year")
            .y_axis_label("population")
            .x_axis_formatter(|mark, _range| {
                let v = mark.value;
                if v >= 0.0 && (v - v.round()).abs() < 1e-6 {
                    format!("{}", v.round() as i64)
                } else {
                    String::new()
                }
            })
            .y_axis_formatter(|mark, _range| {
                let v = mark.value;
                if v >= 0.0 && (v - v.round()).abs() < 1e-6 {
                    format_count(v.round() as u64)
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new(PlotPoints::from_iter(points_vec.iter().copied()))
                        .color(Color32::from_rgb(52, 152, 219))
                        .width(2.0)
                        .name(state),
                );
                plot_ui.points(
                    Points::new(PlotPoints::from_iter(points_vec.iter().copied()))
                        .radius(3.5)
                        .color(Color32::from_rgb(52, 152, 219)),
                );
            });
    }
}
