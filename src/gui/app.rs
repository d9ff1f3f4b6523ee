//! Main Application
//! Main window wiring the control panel and dashboard view to the query
//! engine. The table is loaded before the window opens and never changes.

use crate::charts::tile_for;
use crate::data::PopulationTable;
use crate::gui::{ControlPanel, ControlPanelAction, DashboardView};
use crate::query::{answer_question, QueryEngine};
use egui::SidePanel;
use tracing::{debug, info, warn};

/// Main application window.
pub struct PopDashApp {
    table: PopulationTable,
    control_panel: ControlPanel,
    dashboard: DashboardView,
}

impl PopDashApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, table: PopulationTable) -> Self {
        let years = table.years();
        let states = table.states();

        // States with no map tile (territories, stray codes) stay fully
        // queryable through the question box; they just never render.
        let unmapped: Vec<&str> = states
            .iter()
            .map(String::as_str)
            .filter(|code| tile_for(code).is_none())
            .collect();
        if !unmapped.is_empty() {
            warn!(states = ?unmapped, "states absent from the map grid");
        }

        let initial_year = table.latest_year().unwrap_or(0);
        let year_data = QueryEngine::by_year(&table, initial_year);
        info!(
            year = initial_year,
            states = year_data.len(),
            "dashboard ready"
        );

        let control_panel = ControlPanel::new(years, table.len(), states.len());
        let dashboard = DashboardView::new(initial_year, year_data);

        Self {
            table,
            control_panel,
            dashboard,
        }
    }

    fn handle_year_changed(&mut self, year: u32) {
        let year_data = QueryEngine::by_year(&self.table, year);
        debug!(year, states = year_data.len(), "map year changed");
        self.dashboard.set_year_data(year, year_data);
    }

    fn handle_state_clicked(&mut self, state: String) {
        let history = QueryEngine::by_state(&self.table, &state);
        debug!(%state, points = history.len(), "state selected");
        self.dashboard.set_selection(state, history);
    }

    fn handle_question(&mut self, text: String) {
        let answer = answer_question(&self.table, &text);
        info!(question = %text, answer = %answer, "question answered");
        self.control_panel.set_answer(answer);
    }
}

impl eframe::App for PopDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Left panel - controls
        SidePanel::left("control_panel")
            .min_width(300.0)
            .max_width(350.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    match self.control_panel.show(ui) {
                        ControlPanelAction::YearChanged(year) => self.handle_year_changed(year),
                        ControlPanelAction::QuestionSubmitted(text) => self.handle_question(text),
                        ControlPanelAction::None => {}
                    }
                });
            });

        // Central panel - map and history chart
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(state) = self.dashboard.show(ui) {
                self.handle_state_clicked(state);
            }
        });
    }
}
