use crate::answers::AnswerTracker;
use crate::config::AppConfig;
use crate::error::LoadError;
use crate::model::{FilterCriteria, FilterOptions, Question};
use std::sync::mpsc::Receiver;

// Submódulos
pub mod actions;
pub mod loading;
pub mod view_models;

pub use crate::view_models::{AlternativeRow, QuestionCard, Verdict};

type LoadResult = Result<Vec<Question>, LoadError>;

/// Estado único da aplicação: coleção, filtros e respostas da sessão.
pub struct BancoApp {
    pub config: AppConfig,
    questions: Vec<Question>,
    options: FilterOptions,
    criteria: FilterCriteria,
    visible: Vec<usize>, // índices em `questions`, na ordem original
    answers: AnswerTracker,
    loading: bool,
    load_rx: Option<Receiver<LoadResult>>,
}

impl BancoApp {
    /// Estado inicial: coleção vazia, filtros vazios, `loading` ligado.
    /// A busca só começa com `start_load`.
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            questions: Vec::new(),
            options: FilterOptions::default(),
            criteria: FilterCriteria::default(),
            visible: Vec::new(),
            answers: AnswerTracker::new(),
            loading: true,
            load_rx: None,
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn answers(&self) -> &AnswerTracker {
        &self.answers
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn visible_questions(&self) -> impl Iterator<Item = &Question> {
        self.visible.iter().map(|&i| &self.questions[i])
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    pub fn question(&self, question_id: u64) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == question_id)
    }

    /// Recalcula a lista visível do zero.
    fn refresh_visible(&mut self) {
        self.visible = crate::filters::apply_indices(&self.questions, &self.criteria);
        log::debug!(
            "filtros aplicados: {} de {} questões visíveis",
            self.visible.len(),
            self.questions.len()
        );
    }
}
