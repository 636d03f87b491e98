use super::*;
use crate::model::FilterField;

impl BancoApp {
    /// Atualiza um critério e recalcula a lista visível.
    pub fn set_filter(&mut self, field: FilterField, value: impl Into<String>) {
        let value = value.into();
        let slot = self.criteria.field_mut(field);
        if *slot == value {
            return;
        }
        *slot = value;
        self.refresh_visible();
    }

    /// "Limpar Filtros": zera os cinco critérios de uma vez.
    pub fn clear_filters(&mut self) {
        self.criteria.clear();
        self.refresh_visible();
    }

    pub fn toggle_alternative(&mut self, question_id: u64, alternative_id: &str) {
        self.answers.toggle(question_id, alternative_id);
    }

    pub fn toggle_explanation(&mut self, question_id: u64) {
        self.answers.toggle_reveal(question_id);
    }

    /// Confere a seleção atual com o gabarito, no modo configurado.
    pub fn check_answer(&self, question_id: u64) -> bool {
        self.question(question_id)
            .map(|q| {
                self.answers
                    .is_correct(question_id, &q.correct_ids, self.config.correctness)
            })
            .unwrap_or(false)
    }
}
