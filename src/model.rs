use serde::{Deserialize, Deserializer, Serialize};

/// Questão tal como chega do endpoint `/api/questoes_pas_uem`.
/// Imutável depois da carga.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Question {
    pub id: u64,
    #[serde(rename = "materia")]
    pub subject: String,
    #[serde(rename = "assunto", default, deserialize_with = "null_as_empty")]
    pub topic: String,
    #[serde(rename = "ano")]
    pub year: i32,
    #[serde(rename = "vestibular")]
    pub exam: String,
    #[serde(rename = "numero")]
    pub number: u32,
    #[serde(rename = "enunciado")]
    pub statement: String,
    #[serde(rename = "alternativas")]
    pub alternatives: Vec<String>,
    #[serde(rename = "alternativas_numeracao")]
    pub alternative_ids: Vec<String>, // paralelo a `alternatives` (01, 02, 04, 08, 16)
    #[serde(rename = "alternativas_corretas", default, deserialize_with = "null_as_default")]
    pub correct_ids: Vec<String>,
    #[serde(rename = "resposta_correta", default, deserialize_with = "null_as_empty")]
    pub answer_summary: String, // soma das corretas, p.ex. "21"
    #[serde(rename = "explicacao", default, deserialize_with = "null_as_empty")]
    pub explanation: String,
    #[serde(rename = "etapa", default)]
    pub stage: Option<String>,
    #[serde(rename = "dificuldade", default)]
    pub difficulty: Option<String>,
}

impl Question {
    /// Pares (numeração, texto) na ordem de exibição.
    /// Se as listas vierem com tamanhos diferentes, corta na menor.
    pub fn numbered_alternatives(&self) -> impl Iterator<Item = (&str, &str)> {
        self.alternative_ids
            .iter()
            .zip(self.alternatives.iter())
            .map(|(id, text)| (id.as_str(), text.as_str()))
    }

    pub fn is_correct_alternative(&self, alternative_id: &str) -> bool {
        self.correct_ids.iter().any(|c| c == alternative_id)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Os cinco critérios de filtro. String vazia = sem restrição.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub search: String,  // busca
    pub subject: String, // materia
    pub topic: String,   // assunto
    pub year: String,    // ano, como texto
    pub exam: String,    // vestibular
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        self.search.is_empty()
            && self.subject.is_empty()
            && self.topic.is_empty()
            && self.year.is_empty()
            && self.exam.is_empty()
    }

    /// Zera os cinco campos de uma vez.
    pub fn clear(&mut self) {
        *self = FilterCriteria::default();
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FilterField {
    Search,
    Subject,
    Topic,
    Year,
    Exam,
}

impl FilterCriteria {
    pub fn field_mut(&mut self, field: FilterField) -> &mut String {
        match field {
            FilterField::Search => &mut self.search,
            FilterField::Subject => &mut self.subject,
            FilterField::Topic => &mut self.topic,
            FilterField::Year => &mut self.year,
            FilterField::Exam => &mut self.exam,
        }
    }
}

/// Opções distintas oferecidas por cada seletor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub subjects: Vec<String>,
    pub topics: Vec<String>,
    pub years: Vec<i32>, // decrescente
    pub exams: Vec<String>,
}

/// Como comparar a seleção do usuário com o gabarito.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CorrectnessMode {
    /// Compara a soma numérica das numerações (somatória estilo UEM).
    #[default]
    Sum,
    /// Compara os conjuntos de numerações.
    ExactSet,
}

impl CorrectnessMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "soma" | "sum" => Some(CorrectnessMode::Sum),
            "conjunto" | "set" | "exact" => Some(CorrectnessMode::ExactSet),
            _ => None,
        }
    }
}

/// Realce de uma alternativa no cartão.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Highlight {
    Neutral,
    Selected,
    Correct,
    Incorrect,
}
