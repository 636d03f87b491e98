// src/answers.rs

use crate::model::{CorrectnessMode, Highlight, Question};
use std::collections::HashMap;

/// Estado efêmero por questão: alternativas marcadas e explicação visível.
/// Vive só durante a sessão.
#[derive(Clone, Debug, Default)]
pub struct AnswerTracker {
    selected: HashMap<u64, Vec<String>>,
    revealed: HashMap<u64, bool>,
}

impl AnswerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marca ou desmarca `alternative_id`. A seleção fica sempre ordenada.
    pub fn toggle(&mut self, question_id: u64, alternative_id: &str) {
        let current = self.selected.entry(question_id).or_default();
        if let Some(pos) = current.iter().position(|a| a == alternative_id) {
            current.remove(pos);
        } else {
            current.push(alternative_id.to_string());
            current.sort();
        }
    }

    pub fn toggle_reveal(&mut self, question_id: u64) {
        let flag = self.revealed.entry(question_id).or_insert(false);
        *flag = !*flag;
    }

    pub fn selection(&self, question_id: u64) -> &[String] {
        self.selected
            .get(&question_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn is_selected(&self, question_id: u64, alternative_id: &str) -> bool {
        self.selection(question_id).iter().any(|a| a == alternative_id)
    }

    pub fn is_revealed(&self, question_id: u64) -> bool {
        self.revealed.get(&question_id).copied().unwrap_or(false)
    }

    pub fn is_correct(&self, question_id: u64, correct_ids: &[String], mode: CorrectnessMode) -> bool {
        let user = self.selection(question_id);
        match mode {
            CorrectnessMode::Sum => match (sum_ids(user), sum_ids(correct_ids)) {
                (Some(a), Some(b)) => a == b,
                // numeração não numérica: nunca confere (NaN)
                _ => false,
            },
            CorrectnessMode::ExactSet => {
                user.len() == correct_ids.len() && user.iter().all(|a| correct_ids.contains(a))
            }
        }
    }

    /// Realce de uma alternativa: antes de revelar só mostra a marcação;
    /// depois, corretas em verde e marcadas erradas em vermelho.
    pub fn highlight(&self, question: &Question, alternative_id: &str) -> Highlight {
        let selected = self.is_selected(question.id, alternative_id);
        if self.is_revealed(question.id) {
            if question.is_correct_alternative(alternative_id) {
                Highlight::Correct
            } else if selected {
                Highlight::Incorrect
            } else {
                Highlight::Neutral
            }
        } else if selected {
            Highlight::Selected
        } else {
            Highlight::Neutral
        }
    }
}

/// Soma das numerações. `None` se alguma não for número ou se a conta estourar.
fn sum_ids(ids: &[String]) -> Option<i128> {
    ids.iter()
        .try_fold(0i128, |acc, id| acc.checked_add(leading_int(id)?))
}

/// Lê o inteiro do começo do texto, como `parseInt`: aceita espaços e sinal
/// à frente e ignora o que vier depois dos dígitos ("01)" vale 1).
fn leading_int(text: &str) -> Option<i128> {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let value = digits[..end].parse::<i128>().ok()?;
    Some(if negative { -value } else { value })
}
