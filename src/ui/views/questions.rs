use crate::app::{BancoApp, QuestionCard};
use crate::ui::helpers::{alternative_row, badge};
use crate::ui::layout::card;
use egui::{Color32, RichText, Ui};

pub fn ui_question_list(app: &mut BancoApp, ui: &mut Ui) {
    if app.is_loading() {
        ui.vertical_centered(|ui| {
            ui.add_space(24.0);
            ui.spinner();
            ui.label("Carregando questões...");
        });
        return;
    }

    let cards = app.question_cards();
    if cards.is_empty() {
        ui.vertical_centered(|ui| {
            ui.add_space(24.0);
            ui.label(RichText::new("Nenhuma questão encontrada com os filtros aplicados").weak());
        });
        return;
    }

    for question in &cards {
        ui_question_card(app, ui, question);
        ui.add_space(12.0);
    }
}

fn ui_question_card(app: &mut BancoApp, ui: &mut Ui, question: &QuestionCard) {
    card(ui, |ui| {
        ui.horizontal_wrapped(|ui| {
            for (i, text) in question.badges.iter().enumerate() {
                badge(ui, text, i == 0);
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(RichText::new(question.number_label()).weak());
            });
        });

        ui.add_space(8.0);
        ui.label(&question.statement);
        ui.add_space(8.0);

        for row in &question.alternatives {
            if alternative_row(ui, &row.id, &row.text, row.highlight).clicked() {
                app.toggle_alternative(question.question_id, &row.id);
            }
            ui.add_space(4.0);
        }

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if ui.button(question.reveal_label()).clicked() {
                app.toggle_explanation(question.question_id);
            }
            if let Some(verdict) = &question.verdict {
                let color = if verdict.correct {
                    Color32::from_rgb(22, 163, 74)
                } else {
                    Color32::from_rgb(220, 38, 38)
                };
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(RichText::new(verdict.label()).strong().size(16.0).color(color));
                });
            }
        });

        if let Some(verdict) = &question.verdict {
            ui.add_space(8.0);
            card(ui, |ui| {
                ui.label(RichText::new("Explicação").strong().size(16.0));
                ui.add_space(4.0);
                ui.label(format!("Resposta Correta: {}", verdict.answer_summary));
                if !verdict.explanation.is_empty() {
                    ui.add_space(4.0);
                    ui.label(&verdict.explanation);
                }
            });
        }
    });
}
