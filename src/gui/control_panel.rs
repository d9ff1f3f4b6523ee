//! Control Panel Widget
//! Left side panel with the year selector, question box, and dataset summary.

use crate::data::format_count;
use egui::{Color32, ComboBox, Key, RichText};

/// Left side control panel. Holds input state only; query results are
/// pushed in by the app after it runs the engine.
pub struct ControlPanel {
    /// Distinct dataset years, newest first.
    pub years: Vec<u32>,
    pub selected_year: u32,
    pub question_input: String,
    /// Last answer string, if a question was ever submitted.
    pub answer: Option<String>,

    // Dataset summary, fixed after load.
    pub record_count: usize,
    pub state_count: usize,
    pub year_span: Option<(u32, u32)>,
}

impl ControlPanel {
    pub fn new(years: Vec<u32>, record_count: usize, state_count: usize) -> Self {
        // years come newest-first; default the selector to the latest.
        let selected_year = years.first().copied().unwrap_or(0);
        let year_span = match (years.last(), years.first()) {
            (Some(&oldest), Some(&newest)) => Some((oldest, newest)),
            _ => None,
        };

        Self {
            years,
            selected_year,
            question_input: String::new(),
            answer: None,
            record_count,
            state_count,
            year_span,
        }
    }

    /// Store the answer for display under the question box.
    pub fn set_answer(&mut self, answer: String) {
        self.answer = Some(answer);
    }

    /// Draw the control panel.
    pub fn show(&mut self, ui: &mut egui::Ui) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        // Title
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("US State Historic Population Dashboard")
                    .size(18.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Year Section =====
        ui.label(RichText::new("Year").size(14.0).strong());
        ui.add_space(5.0);

        ui.horizontal(|ui| {
            ui.add_sized([80.0, 20.0], egui::Label::new("Map year:"));
            ComboBox::from_id_salt("year_select")
                .width(100.0)
                .selected_text(self.selected_year.to_string())
                .show_ui(ui, |ui| {
                    for &year in &self.years {
                        if ui
                            .selectable_label(self.selected_year == year, year.to_string())
                            .clicked()
                            && self.selected_year != year
                        {
                            self.selected_year = year;
                            action = ControlPanelAction::YearChanged(year);
                        }
                    }
                });
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Question Section =====
        ui.label(RichText::new("Ask about the data").size(14.0).strong());
        ui.add_space(5.0);

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                let edit = egui::TextEdit::singleline(&mut self.question_input)
                    .hint_text("Q: What was the population of [ST] in [YYYY]?")
                    .desired_width(f32::INFINITY);
                let response = ui.add(edit);

                let submitted_by_enter =
                    response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));

                ui.add_space(5.0);
                let submitted_by_button = ui.button("Ask").clicked();

                if submitted_by_enter || submitted_by_button {
                    action = ControlPanelAction::QuestionSubmitted(self.question_input.clone());
                }
            });

        // Nothing shows until the first submission.
        if let Some(answer) = &self.answer {
            ui.add_space(8.0);
            ui.label(RichText::new(answer).size(13.0).strong());
        }

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Dataset Summary =====
        ui.label(RichText::new("Dataset").size(14.0).strong());
        ui.add_space(5.0);

        ui.label(
            RichText::new(format!("{} records", format_count(self.record_count as u64)))
                .size(12.0)
                .color(Color32::GRAY),
        );
        ui.label(
            RichText::new(format!("{} states", self.state_count))
                .size(12.0)
                .color(Color32::GRAY),
        );
        if let Some((oldest, newest)) = self.year_span {
            ui.label(
                RichText::new(format!("years {} to {}", oldest, newest))
                    .size(12.0)
                    .color(Color32::GRAY),
            );
        }

        action
    }
}

/// Actions triggered by control panel.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPanelAction {
    None,
    YearChanged(u32),
    QuestionSubmitted(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_latest_year() {
        let panel = ControlPanel::new(vec![2020, 2010, 1990], 150, 50);
        assert_eq!(panel.selected_year, 2020);
        assert_eq!(panel.year_span, Some((1990, 2020)));
    }

    #[test]
    fn test_empty_dataset_has_no_span() {
        let panel = ControlPanel::new(Vec::new(), 0, 0);
        assert_eq!(panel.selected_year, 0);
        assert_eq!(panel.year_span, None);
    }

    #[test]
    fn test_answer_hidden_until_first_submission() {
        let mut panel = ControlPanel::new(vec![2020], 1, 1);
        assert!(panel.answer.is_none());
        panel.set_answer("A: ...".to_string());
        assert_eq!(panel.answer.as_deref(), Some("A: ..."));
    }
}
