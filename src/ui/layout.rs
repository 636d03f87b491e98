use egui::{Context, CornerRadius, Frame, Margin, Stroke, Ui, Visuals};

pub const MAX_CONTENT_WIDTH: f32 = 960.0;

pub fn top_panel(ctx: &Context) {
    egui::TopBottomPanel::top("header_panel").show(ctx, |ui| {
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.heading("📖 Banco de Questões");
        });
        ui.add_space(6.0);
    });
}

pub fn bottom_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        // ----------- BOTÕES DE TEMA -----------
        ui.with_layout(
            egui::Layout::right_to_left(egui::Align::Center),
            |ui| {
                if ui.button("🌙 Modo escuro").clicked() {
                    ctx.set_visuals(Visuals::dark());
                }
                if ui.button("☀ Modo claro").clicked() {
                    ctx.set_visuals(Visuals::light());
                }
            },
        );
    });
}

/// Moldura de cartão com borda fina, usada no painel de filtros e
/// em cada questão.
pub fn card(ui: &mut Ui, inner: impl FnOnce(&mut Ui)) {
    Frame::default()
        .fill(ui.visuals().window_fill())
        .stroke(Stroke::new(1.0, ui.visuals().widgets.noninteractive.bg_stroke.color))
        .corner_radius(CornerRadius::same(8))
        .inner_margin(Margin::symmetric(16, 12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            inner(ui);
        });
}
