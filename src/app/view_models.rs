use super::*;

impl BancoApp {
    /// Cartões das questões visíveis, prontos para desenhar.
    pub fn question_cards(&self) -> Vec<QuestionCard> {
        self.visible_questions().map(|q| self.card_for(q)).collect()
    }

    fn card_for(&self, q: &Question) -> QuestionCard {
        let mut badges = vec![
            format!("{} {}", q.exam, q.year),
            q.subject.clone(),
        ];
        if !q.topic.is_empty() {
            badges.push(q.topic.clone());
        }
        badges.extend(q.stage.iter().cloned());
        badges.extend(q.difficulty.iter().cloned());

        let alternatives = q
            .numbered_alternatives()
            .map(|(id, text)| AlternativeRow {
                id: id.to_string(),
                text: text.to_string(),
                highlight: self.answers.highlight(q, id),
            })
            .collect();

        let verdict = self.answers.is_revealed(q.id).then(|| Verdict {
            selection: self.answers.selection(q.id).to_vec(),
            correct: self.check_answer(q.id),
            answer_summary: q.answer_summary.clone(),
            explanation: q.explanation.clone(),
        });

        QuestionCard {
            question_id: q.id,
            badges,
            number: q.number,
            statement: q.statement.clone(),
            alternatives,
            verdict,
        }
    }

    pub fn results_label(&self) -> String {
        crate::view_models::results_label(self.loading, self.visible.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::tests::question;
    use crate::model::{CorrectnessMode, Highlight};

    #[test]
    fn card_reflects_selection_and_reveal() {
        let mut app = BancoApp::new(AppConfig::new("x", CorrectnessMode::Sum));
        let mut q = question(1, "Matemática", "Funções", 2020, "Enunciado");
        q.difficulty = Some("Média".into());
        app.finish_load(Ok(vec![q]));

        app.toggle_alternative(1, "2");
        let card = &app.question_cards()[0];
        assert_eq!(card.badges, vec!["PAS-UEM 2020", "Matemática", "Funções", "Média"]);
        assert_eq!(card.number_label(), "Questão 1");
        assert_eq!(card.alternatives[1].highlight, Highlight::Selected);
        assert!(card.verdict.is_none());
        assert_eq!(card.reveal_label(), "Verificar Resposta e Explicação");

        app.toggle_alternative(1, "3");
        app.toggle_explanation(1);
        let card = &app.question_cards()[0];
        let verdict = card.verdict.as_ref().unwrap();
        assert_eq!(verdict.label(), "Sua Resposta: 2 + 3 (Incorreta)");
        assert_eq!(card.alternatives[1].highlight, Highlight::Correct);
        assert_eq!(card.alternatives[2].highlight, Highlight::Incorrect);
        assert_eq!(card.reveal_label(), "Esconder Explicação");
    }

    #[test]
    fn results_label_tracks_loading() {
        let mut app = BancoApp::new(AppConfig::new("x", CorrectnessMode::Sum));
        assert_eq!(app.results_label(), "Carregando...");
        app.finish_load(Ok(Vec::new()));
        assert_eq!(app.results_label(), "0 questão(ões) encontrada(s)");
    }
}
