use super::*;
use crate::data::fetch_questions;
use std::sync::mpsc::TryRecvError;

impl BancoApp {
    /// Dispara a única busca da coleção. Chamadas repetidas são ignoradas.
    pub fn start_load(&mut self) {
        if self.load_rx.is_some() || !self.loading {
            return;
        }

        let (tx, rx) = std::sync::mpsc::channel::<LoadResult>();
        self.load_rx = Some(rx);
        let endpoint = self.config.endpoint.clone();
        log::info!("carregando questões de {endpoint}");

        #[cfg(not(target_arch = "wasm32"))]
        std::thread::spawn(move || {
            let _ = tx.send(fetch_questions(&endpoint));
        });

        #[cfg(target_arch = "wasm32")]
        wasm_bindgen_futures::spawn_local(async move {
            let _ = tx.send(fetch_questions(&endpoint).await);
        });
    }

    /// Consulta o canal sem bloquear; chamado a cada frame.
    pub fn poll_load(&mut self) {
        let maybe_result = match self.load_rx.as_ref().map(|rx| rx.try_recv()) {
            Some(Ok(result)) => Some(result),
            // a tarefa morreu sem enviar (p.ex. panic na thread)
            Some(Err(TryRecvError::Disconnected)) => Some(Err(LoadError::WorkerGone)),
            Some(Err(TryRecvError::Empty)) | None => None,
        };

        if let Some(result) = maybe_result {
            self.load_rx = None;
            self.finish_load(result);
        }
    }

    /// Encerra a carga: popula coleção e vocabulário, ou registra a falha
    /// e segue com tudo vazio. `loading` só desliga uma vez.
    pub fn finish_load(&mut self, result: Result<Vec<Question>, LoadError>) {
        if !self.loading {
            log::warn!("resultado de carga ignorado: a carga já terminou");
            return;
        }

        match result {
            Ok(questions) => {
                log::info!("{} questões carregadas", questions.len());
                self.options = FilterOptions::from_questions(&questions);
                self.questions = questions;
            }
            Err(err) => {
                log::error!("Erro ao carregar questões: {err}");
                self.questions.clear();
                self.options = FilterOptions::default();
            }
        }

        self.loading = false;
        self.refresh_visible();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::tests::question;
    use crate::model::CorrectnessMode;

    fn app() -> BancoApp {
        BancoApp::new(AppConfig::new("http://localhost/api", CorrectnessMode::Sum))
    }

    #[test]
    fn starts_loading_with_empty_state() {
        let app = app();
        assert!(app.is_loading());
        assert!(app.questions().is_empty());
        assert!(app.options().is_empty());
        assert_eq!(app.visible_count(), 0);
    }

    #[test]
    fn successful_load_populates_collection_and_options() {
        let mut app = app();
        app.finish_load(Ok(vec![
            question(1, "Matemática", "Funções", 2019, "a"),
            question(2, "Física", "Óptica", 2021, "b"),
        ]));
        assert!(!app.is_loading());
        assert_eq!(app.visible_count(), 2);
        assert_eq!(app.options().years, vec![2021, 2019]);
    }

    #[test]
    fn failed_load_leaves_everything_empty() {
        let mut app = app();
        app.finish_load(Err(LoadError::HttpStatus {
            endpoint: "http://localhost/api".into(),
            status: 500,
        }));
        assert!(!app.is_loading());
        assert!(app.questions().is_empty());
        assert!(app.options().is_empty());
        assert_eq!(app.visible_count(), 0);
    }

    #[test]
    fn second_result_is_ignored() {
        let mut app = app();
        app.finish_load(Err(LoadError::Browser("sem rede".into())));
        app.finish_load(Ok(vec![question(1, "Matemática", "Funções", 2019, "a")]));
        assert!(!app.is_loading());
        assert!(app.questions().is_empty());
    }

    #[test]
    fn poll_delivers_a_sent_result() {
        let mut app = app();
        let (tx, rx) = std::sync::mpsc::channel::<LoadResult>();
        app.load_rx = Some(rx);

        app.poll_load();
        assert!(app.is_loading());

        tx.send(Ok(vec![question(3, "Química", "Soluções", 2020, "c")]))
            .unwrap();
        app.poll_load();
        assert!(!app.is_loading());
        assert_eq!(app.visible_count(), 1);
        assert!(app.load_rx.is_none());
    }

    #[test]
    fn worker_exiting_without_result_ends_loading() {
        let mut app = app();
        let (tx, rx) = std::sync::mpsc::channel::<LoadResult>();
        app.load_rx = Some(rx);
        drop(tx);

        app.poll_load();
        assert!(!app.is_loading());
        assert!(app.questions().is_empty());
        assert!(app.load_rx.is_none());

        app.poll_load();
        assert!(!app.is_loading());
    }
}
