use thiserror::Error;

/// Falha na carga inicial das questões.
/// É registrada e absorvida: a lista segue vazia.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("erro de rede ao buscar {endpoint}: {message}")]
    Network { endpoint: String, message: String },

    #[error("endpoint {endpoint} devolveu HTTP {status}")]
    HttpStatus { endpoint: String, status: u16 },

    #[error("resposta JSON inválida: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("erro do navegador: {0}")]
    Browser(String),

    #[error("a tarefa de carga terminou sem devolver resultado")]
    WorkerGone,
}
