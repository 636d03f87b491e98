use crate::app::BancoApp;
use crate::model::FilterField;
use crate::ui::helpers::select_filter;
use crate::ui::layout::card;
use egui::{Button, Grid, TextEdit, Ui};

const COLUMNS: usize = 3;

pub fn ui_filters(app: &mut BancoApp, ui: &mut Ui) {
    card(ui, |ui| {
        ui.label(egui::RichText::new("🔍 Filtros de Busca").heading());
        ui.add_space(8.0);

        let spacing = 16.0;
        let cell_w = ((ui.available_width() - spacing * (COLUMNS as f32 - 1.0)) / COLUMNS as f32)
            .max(140.0);

        // Cópias locais; cada mudança volta pelo `set_filter`.
        let mut criteria = app.criteria().clone();
        let options = app.options().clone();
        let years: Vec<String> = options.years.iter().map(i32::to_string).collect();
        let mut clear = false;

        Grid::new("filters_grid")
            .num_columns(COLUMNS)
            .spacing([spacing, 12.0])
            .show(ui, |ui| {
                ui.vertical(|ui| {
                    ui.label("Buscar no enunciado");
                    ui.add(
                        TextEdit::singleline(&mut criteria.search)
                            .hint_text("Digite palavras-chave...")
                            .desired_width(cell_w),
                    );
                });
                ui.vertical(|ui| {
                    ui.label("Matéria");
                    select_filter(ui, "filtro_materia", "Todas as matérias", cell_w, &mut criteria.subject, &options.subjects);
                });
                ui.vertical(|ui| {
                    ui.label("Assunto");
                    select_filter(ui, "filtro_assunto", "Todos os assuntos", cell_w, &mut criteria.topic, &options.topics);
                });
                ui.end_row();

                ui.vertical(|ui| {
                    ui.label("Ano");
                    select_filter(ui, "filtro_ano", "Todos os anos", cell_w, &mut criteria.year, &years);
                });
                ui.vertical(|ui| {
                    ui.label("Vestibular");
                    select_filter(ui, "filtro_vestibular", "Todos os vestibulares", cell_w, &mut criteria.exam, &options.exams);
                });
                ui.vertical(|ui| {
                    ui.label(" ");
                    clear = ui.add_sized([cell_w, 24.0], Button::new("Limpar Filtros")).clicked();
                });
                ui.end_row();
            });

        if clear {
            app.clear_filters();
        } else {
            app.set_filter(FilterField::Search, criteria.search);
            app.set_filter(FilterField::Subject, criteria.subject);
            app.set_filter(FilterField::Topic, criteria.topic);
            app.set_filter(FilterField::Year, criteria.year);
            app.set_filter(FilterField::Exam, criteria.exam);
        }

        ui.add_space(8.0);
        ui.label(egui::RichText::new(app.results_label()).weak());
    });
}
