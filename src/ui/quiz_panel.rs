//! Quiz page: one question, its choices, and the running score.

use crate::app::AppState;
use crate::ui::panel_manager::PanelInteraction;
use crate::ui::widgets::{card_frame, page_heading};
use comete::quiz::Outcome;
use comete::{MessageKey, ThemeColors};
use egui::RichText;

pub fn render_quiz(ui: &mut egui::Ui, state: &AppState, colors: &ThemeColors) -> Option<PanelInteraction> {
    let mut interaction = None;
    let t = state.prefs.translator();
    let session = state.quiz.session();

    page_heading(ui, t.t(MessageKey::QuizTitle), None, colors);
    ui.label(
        RichText::new(t.fmt(
            MessageKey::QuizScore,
            &[
                ("score", session.score().to_string().as_str()),
                ("rounds", session.rounds().to_string().as_str()),
            ],
        ))
        .strong(),
    );
    ui.add_space(8.0);

    let Some(round) = state.quiz.round() else {
        return interaction;
    };
    let title_of = |id: &str| {
        state
            .period(id)
            .map(|p| p.title.clone())
            .unwrap_or_else(|| id.to_string())
    };

    card_frame(colors).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(
            RichText::new(t.fmt(MessageKey::QuizQuestion, &[("event", round.event.as_str())]))
                .size(18.0)
                .strong(),
        );
        ui.add_space(10.0);

        let answered = state.quiz.outcome().is_some();
        for (index, id) in round.choices.iter().enumerate() {
            let mut button = egui::Button::new(title_of(id)).min_size(egui::vec2(220.0, 28.0));
            if answered && round.is_correct(index) {
                button = button.fill(colors.success);
            }
            if ui.add_enabled(!answered, button).clicked() {
                interaction = Some(PanelInteraction::QuizAnswer(index));
            }
        }

        if let Some(outcome) = state.quiz.outcome() {
            ui.add_space(10.0);
            match outcome {
                Outcome::Correct => {
                    ui.colored_label(colors.success, t.t(MessageKey::QuizCorrect));
                }
                Outcome::Wrong { answer_id } => {
                    let answer = title_of(answer_id);
                    ui.colored_label(
                        colors.error,
                        t.fmt(MessageKey::QuizWrong, &[("answer", answer.as_str())]),
                    );
                }
            }
            ui.add_space(6.0);
            if ui.button(t.t(MessageKey::QuizNext)).clicked() {
                interaction = Some(PanelInteraction::QuizNext);
            }
        }
    });

    interaction
}
