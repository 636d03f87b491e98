// src/ui/helpers.rs
use crate::model::Highlight;
use egui::{Color32, ComboBox, CornerRadius, Frame, Margin, Response, RichText, Sense, Ui};

/// Seletor com uma primeira opção "todas" que grava string vazia.
pub fn select_filter(
    ui: &mut Ui,
    id: &str,
    all_label: &str,
    width: f32,
    current: &mut String,
    options: &[String],
) {
    let selected_text = if current.is_empty() {
        all_label.to_string()
    } else {
        current.clone()
    };

    ComboBox::from_id_salt(id)
        .selected_text(selected_text)
        .width(width)
        .show_ui(ui, |ui| {
            ui.selectable_value(current, String::new(), all_label);
            for option in options {
                ui.selectable_value(current, option.clone(), option.as_str());
            }
        });
}

pub fn badge(ui: &mut Ui, text: &str, strong: bool) {
    let fill = if strong {
        ui.visuals().selection.bg_fill
    } else {
        ui.visuals().faint_bg_color
    };
    Frame::default()
        .fill(fill)
        .corner_radius(CornerRadius::same(10))
        .inner_margin(Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.label(RichText::new(text).small());
        });
}

fn highlight_fill(ui: &Ui, highlight: Highlight) -> Color32 {
    match highlight {
        Highlight::Neutral => ui.visuals().faint_bg_color,
        Highlight::Selected => Color32::from_rgba_unmultiplied(59, 130, 246, 70),
        Highlight::Correct => Color32::from_rgba_unmultiplied(34, 197, 94, 70),
        Highlight::Incorrect => Color32::from_rgba_unmultiplied(239, 68, 68, 70),
    }
}

/// Linha clicável de uma alternativa: "01) texto".
pub fn alternative_row(ui: &mut Ui, id: &str, text: &str, highlight: Highlight) -> Response {
    Frame::default()
        .fill(highlight_fill(ui, highlight))
        .corner_radius(CornerRadius::same(6))
        .inner_margin(Margin::same(10))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal_wrapped(|ui| {
                ui.strong(format!("{id})"));
                ui.label(text);
            });
        })
        .response
        .interact(Sense::click())
        .on_hover_cursor(egui::CursorIcon::PointingHand)
}
