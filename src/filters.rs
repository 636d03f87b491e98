// src/filters.rs

use crate::model::{FilterCriteria, FilterOptions, Question};
use std::collections::BTreeSet;

/// Devolve as questões visíveis para `criteria`, na ordem original.
/// Cada critério não vazio é um filtro independente (E lógico).
pub fn apply<'a>(questions: &'a [Question], criteria: &FilterCriteria) -> Vec<&'a Question> {
    apply_indices(questions, criteria)
        .into_iter()
        .map(|i| &questions[i])
        .collect()
}

/// Mesmo que `apply`, mas devolve as posições em `questions`.
pub fn apply_indices(questions: &[Question], criteria: &FilterCriteria) -> Vec<usize> {
    let mut visible: Vec<usize> = (0..questions.len()).collect();

    if !criteria.search.is_empty() {
        let needle = criteria.search.to_lowercase();
        visible.retain(|&i| {
            let q = &questions[i];
            q.statement.to_lowercase().contains(&needle) || q.topic.to_lowercase().contains(&needle)
        });
    }

    if !criteria.subject.is_empty() {
        visible.retain(|&i| questions[i].subject == criteria.subject);
    }

    if !criteria.topic.is_empty() {
        visible.retain(|&i| questions[i].topic == criteria.topic);
    }

    if !criteria.year.is_empty() {
        visible.retain(|&i| questions[i].year.to_string() == criteria.year);
    }

    if !criteria.exam.is_empty() {
        visible.retain(|&i| questions[i].exam == criteria.exam);
    }

    visible
}

impl FilterOptions {
    /// Projeta as quatro dimensões, sem repetidos.
    /// Textos em ordem crescente; anos em ordem decrescente.
    pub fn from_questions(questions: &[Question]) -> Self {
        let mut years: Vec<i32> = questions
            .iter()
            .map(|q| q.year)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        years.reverse();

        FilterOptions {
            subjects: distinct(questions, |q| q.subject.as_str()),
            topics: distinct(questions, |q| q.topic.as_str()),
            years,
            exams: distinct(questions, |q| q.exam.as_str()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
            && self.topics.is_empty()
            && self.years.is_empty()
            && self.exams.is_empty()
    }
}

fn distinct(questions: &[Question], project: impl Fn(&Question) -> &str) -> Vec<String> {
    questions
        .iter()
        .map(|q| project(q))
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn question(id: u64, subject: &str, topic: &str, year: i32, statement: &str) -> Question {
        Question {
            id,
            subject: subject.into(),
            topic: topic.into(),
            year,
            exam: "PAS-UEM".into(),
            number: id as u32,
            statement: statement.into(),
            alternatives: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            alternative_ids: vec!["1".into(), "2".into(), "3".into(), "4".into()],
            correct_ids: vec!["2".into()],
            answer_summary: "02".into(),
            explanation: String::new(),
            stage: None,
            difficulty: None,
        }
    }

    fn sample() -> Vec<Question> {
        vec![
            question(1, "Matemática", "Funções", 2020, "Considere a função f."),
            question(2, "Física", "Cinemática", 2020, "Um carro parte do repouso."),
            question(3, "Matemática", "Geometria", 2019, "Um triângulo retângulo."),
            question(4, "Química", "Funções orgânicas", 2021, "Assinale o composto."),
            question(5, "Matemática", "Funções", 2021, "O gráfico da FUNÇÃO g."),
        ]
    }

    fn ids(visible: &[&Question]) -> Vec<u64> {
        visible.iter().map(|q| q.id).collect()
    }

    #[test]
    fn empty_criteria_keeps_everything_in_order() {
        let questions = sample();
        let visible = apply(&questions, &FilterCriteria::default());
        assert_eq!(ids(&visible), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn search_matches_statement_or_topic_ignoring_case() {
        let questions = sample();
        let criteria = FilterCriteria {
            search: "funç".into(),
            ..Default::default()
        };
        let visible = apply(&questions, &criteria);
        // 1 e 5 pelo assunto/enunciado, 4 só pelo assunto
        assert_eq!(ids(&visible), vec![1, 4, 5]);
        for q in &visible {
            assert!(
                q.statement.to_lowercase().contains("funç") || q.topic.to_lowercase().contains("funç")
            );
        }
    }

    #[test]
    fn combined_criteria_is_the_intersection() {
        let questions = sample();
        let by_subject = FilterCriteria {
            subject: "Matemática".into(),
            ..Default::default()
        };
        let by_year = FilterCriteria {
            year: "2020".into(),
            ..Default::default()
        };
        let both = FilterCriteria {
            subject: "Matemática".into(),
            year: "2020".into(),
            ..Default::default()
        };

        let a = ids(&apply(&questions, &by_subject));
        let b = ids(&apply(&questions, &by_year));
        let expected: Vec<u64> = a.iter().copied().filter(|id| b.contains(id)).collect();
        assert_eq!(ids(&apply(&questions, &both)), expected);
        assert_eq!(expected, vec![1]);
    }

    #[test]
    fn topic_and_exam_use_exact_equality() {
        let questions = sample();
        let criteria = FilterCriteria {
            topic: "Funções".into(),
            ..Default::default()
        };
        assert_eq!(ids(&apply(&questions, &criteria)), vec![1, 5]);

        let criteria = FilterCriteria {
            exam: "PAS".into(),
            ..Default::default()
        };
        assert!(apply(&questions, &criteria).is_empty());
    }

    #[test]
    fn cleared_criteria_behaves_like_default() {
        let questions = sample();
        let mut criteria = FilterCriteria {
            search: "carro".into(),
            subject: "Física".into(),
            topic: "x".into(),
            year: "1999".into(),
            exam: "ENEM".into(),
        };
        criteria.clear();
        assert_eq!(
            ids(&apply(&questions, &criteria)),
            ids(&apply(&questions, &FilterCriteria::default()))
        );
    }

    #[test]
    fn options_are_distinct_and_ordered() {
        let options = FilterOptions::from_questions(&sample());
        assert_eq!(options.years, vec![2021, 2020, 2019]);
        assert_eq!(options.subjects, vec!["Física", "Matemática", "Química"]);
        assert_eq!(
            options.topics,
            vec!["Cinemática", "Funções", "Funções orgânicas", "Geometria"]
        );
        assert_eq!(options.exams, vec!["PAS-UEM"]);

        // assunto nulo chega como "" e não vira opção
        let mut questions = sample();
        questions.push(question(6, "Física", "", 2020, "Sem assunto."));
        let options = FilterOptions::from_questions(&questions);
        assert_eq!(
            options.topics,
            vec!["Cinemática", "Funções", "Funções orgânicas", "Geometria"]
        );
        assert_eq!(options.subjects, vec!["Física", "Matemática", "Química"]);
    }

    #[test]
    fn options_of_empty_collection_are_empty() {
        assert!(FilterOptions::from_questions(&[]).is_empty());
    }
}
