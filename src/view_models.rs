// src/view_models.rs

use crate::model::Highlight;

#[derive(Clone, Debug)]
pub struct AlternativeRow {
    pub id: String,
    pub text: String,
    pub highlight: Highlight,
}

/// Resultado mostrado depois de "Verificar Resposta".
#[derive(Clone, Debug)]
pub struct Verdict {
    pub selection: Vec<String>,
    pub correct: bool,
    pub answer_summary: String,
    pub explanation: String,
}

#[derive(Clone, Debug)]
pub struct QuestionCard {
    pub question_id: u64,
    pub badges: Vec<String>,
    pub number: u32,
    pub statement: String,
    pub alternatives: Vec<AlternativeRow>,
    pub verdict: Option<Verdict>, // só depois de revelar
}

impl QuestionCard {
    pub fn number_label(&self) -> String {
        format!("Questão {}", self.number)
    }

    pub fn reveal_label(&self) -> &'static str {
        if self.verdict.is_some() {
            "Esconder Explicação"
        } else {
            "Verificar Resposta e Explicação"
        }
    }
}

impl Verdict {
    pub fn label(&self) -> String {
        let answer = if self.selection.is_empty() {
            "Nenhuma".to_string()
        } else {
            self.selection.join(" + ")
        };
        let outcome = if self.correct { "Correta" } else { "Incorreta" };
        format!("Sua Resposta: {answer} ({outcome})")
    }
}

pub fn results_label(loading: bool, count: usize) -> String {
    if loading {
        "Carregando...".to_string()
    } else {
        format!("{count} questão(ões) encontrada(s)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verdict(selection: &[&str], correct: bool) -> Verdict {
        Verdict {
            selection: selection.iter().map(|s| s.to_string()).collect(),
            correct,
            answer_summary: "05".into(),
            explanation: String::new(),
        }
    }

    #[test]
    fn verdict_label_joins_selection() {
        assert_eq!(verdict(&["01", "04"], true).label(), "Sua Resposta: 01 + 04 (Correta)");
        assert_eq!(verdict(&[], false).label(), "Sua Resposta: Nenhuma (Incorreta)");
    }

    #[test]
    fn results_label_reports_loading_then_count() {
        assert_eq!(results_label(true, 0), "Carregando...");
        assert_eq!(results_label(false, 3), "3 questão(ões) encontrada(s)");
    }
}
