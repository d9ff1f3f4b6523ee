//! Dashboard View Widget
//! Central panel: the choropleth map on top, the state history chart below.

use crate::charts::ChartPlotter;
use crate::data::format_count;
use egui::{Color32, RichText, ScrollArea};

/// Central display area. Holds the query results the app pushed in after
/// the last triggering event; never queries on its own.
pub struct DashboardView {
    /// Year the map currently shows.
    pub year: u32,
    /// (state, population) pairs for that year.
    pub year_data: Vec<(String, u64)>,
    /// State picked by the last map click, if any.
    pub selected_state: Option<String>,
    /// (year, population) history for the selected state, oldest first.
    pub history: Vec<(u32, u64)>,
}

impl DashboardView {
    pub fn new(year: u32, year_data: Vec<(String, u64)>) -> Self {
        Self {
            year,
            year_data,
            selected_state: None,
            history: Vec::new(),
        }
    }

    /// Replace the map's data after a year change.
    pub fn set_year_data(&mut self, year: u32, year_data: Vec<(String, u64)>) {
        self.year = year;
        self.year_data = year_data;
    }

    /// Replace the history chart's data after a map click.
    pub fn set_selection(&mut self, state: String, history: Vec<(u32, u64)>) {
        self.selected_state = Some(state);
        self.history = history;
    }

    /// Draw the dashboard. Returns the state code clicked this frame.
    pub fn show(&mut self, ui: &mut egui::Ui) -> Option<String> {
        let mut clicked = None;

        ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
            // ===== Choropleth =====
            ui.vertical_centered(|ui| {
                ui.add_space(5.0);
                ui.label(
                    RichText::new(format!("US Population by State in {}", self.year))
                        .size(16.0)
                        .strong(),
                );
            });
            ui.add_space(5.0);

            let map = ChartPlotter::draw_choropleth(
                ui,
                &self.year_data,
                self.selected_state.as_deref(),
            );

            // Hover caption under the map, blank when nothing is hovered.
            let caption = match map.hovered {
                Some((code, population)) => format!("{}: {}", code, format_count(population)),
                None => String::new(),
            };
            ui.label(RichText::new(caption).size(12.0).color(Color32::GRAY));

            if !self.year_data.is_empty() {
                let min = self.year_data.iter().map(|&(_, p)| p).min().unwrap_or(0);
                let max = self.year_data.iter().map(|&(_, p)| p).max().unwrap_or(0);
                ChartPlotter::draw_colorbar(ui, min, max);
            }

            if let Some(code) = map.clicked {
                clicked = Some(code.to_string());
            }

            ui.add_space(10.0);
            ui.separator();
            ui.add_space(10.0);

            // ===== History chart =====
            match &self.selected_state {
                Some(state) => {
                    ui.vertical_centered(|ui| {
                        ui.label(
                            RichText::new(format!("Population History of {}", state))
                                .size(16.0)
                                .strong(),
                        );
                    });
                    ui.add_space(5.0);
                    ChartPlotter::draw_history_chart(ui, state, &self.history);
                }
                None => {
                    ui.vertical_centered(|ui| {
                        ui.add_space(40.0);
                        ui.label(
                            RichText::new("Click on a state to see its population history")
                                .size(14.0)
                                .color(Color32::GRAY),
                        );
                    });
                }
            }
        });

        clicked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_no_selection() {
        let view = DashboardView::new(2020, vec![("CA".to_string(), 39_500_000)]);
        assert!(view.selected_state.is_none());
        assert!(view.history.is_empty());
    }

    #[test]
    fn test_year_change_keeps_selection() {
        let mut view = DashboardView::new(2020, vec![("CA".to_string(), 39_500_000)]);
        view.set_selection("CA".to_string(), vec![(1990, 29_760_021), (2020, 39_500_000)]);

        view.set_year_data(1990, vec![("CA".to_string(), 29_760_021)]);
        assert_eq!(view.year, 1990);
        assert_eq!(view.selected_state.as_deref(), Some("CA"));
        assert_eq!(view.history.len(), 2);
    }
}
