mod helpers;
pub mod layout;
pub mod views;

use crate::app::BancoApp;
use eframe::{App, Frame};
use egui::{CentralPanel, Context, ScrollArea};
use layout::{bottom_panel, top_panel};
use std::time::Duration;

impl App for BancoApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        self.poll_load();
        if self.is_loading() {
            // a busca roda fora do frame; segue pintando até ela voltar
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        // CABEÇALHO
        top_panel(ctx);

        // PAINEL INFERIOR TEMA ESCURO OU CLARO
        bottom_panel(ctx);

        CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    let width = ui.available_width().min(layout::MAX_CONTENT_WIDTH);
                    ui.set_max_width(width);
                    ui.heading("Questões");
                    ui.add_space(12.0);
                    views::filters::ui_filters(self, ui);
                    ui.add_space(16.0);
                    views::questions::ui_question_list(self, ui);
                });
        });
    }
}
