use banco_questoes::{AppConfig, BancoApp};

fn build_app() -> BancoApp {
    let config = AppConfig::resolve();
    log::info!(
        "endpoint: {} | correção: {:?}",
        config.endpoint,
        config.correctness
    );
    let mut app = BancoApp::new(config);
    app.start_load();
    app
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    let mut logger = pretty_env_logger::formatted_builder();
    logger.filter_level(log::LevelFilter::Info);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        logger.parse_filters(&filters);
    }
    logger.init();

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Banco de Questões",
        options,
        Box::new(|_cc| Ok(Box::new(build_app()))),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {
    use wasm_bindgen::JsCast;

    eframe::WebLogger::init(log::LevelFilter::Info).ok();
    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("sem window/document: não é possível iniciar");
            return;
        };
        let canvas = match document
            .get_element_by_id("the_canvas_id")
            .and_then(|el| el.dyn_into::<web_sys::HtmlCanvasElement>().ok())
        {
            Some(canvas) => canvas,
            None => {
                log::error!("canvas #the_canvas_id não encontrado");
                return;
            }
        };

        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|_cc| Ok(Box::new(build_app()))),
            )
            .await;

        if let Err(err) = start_result {
            log::error!("falha ao iniciar eframe: {err:?}");
        }
    });
}
