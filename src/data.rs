// src/data.rs

use crate::error::LoadError;
use crate::model::Question;

/// Converte o corpo da resposta na coleção. `null` vira lista vazia.
pub fn parse_questions(body: &str) -> Result<Vec<Question>, LoadError> {
    let questions: Option<Vec<Question>> = serde_json::from_str(body)?;
    Ok(questions.unwrap_or_default())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn fetch_questions(endpoint: &str) -> Result<Vec<Question>, LoadError> {
    let network = |err: reqwest::Error| LoadError::Network {
        endpoint: endpoint.to_string(),
        message: err.to_string(),
    };

    let response = reqwest::blocking::Client::new()
        .get(endpoint)
        .header(reqwest::header::ACCEPT, "application/json")
        .send()
        .map_err(network)?;

    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::HttpStatus {
            endpoint: endpoint.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response.text().map_err(network)?;
    parse_questions(&body)
}

#[cfg(target_arch = "wasm32")]
pub async fn fetch_questions(endpoint: &str) -> Result<Vec<Question>, LoadError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let network = |err: wasm_bindgen::JsValue| LoadError::Network {
        endpoint: endpoint.to_string(),
        message: format!("{:?}", err),
    };

    let window = web_sys::window()
        .ok_or_else(|| LoadError::Browser("não existe window no ambiente WASM".into()))?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(endpoint, &opts)
        .map_err(|err| LoadError::Browser(format!("não foi possível criar o request: {:?}", err)))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|err| LoadError::Browser(format!("headers inválidos: {:?}", err)))?;

    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(network)?;
    let response: Response = resp_value
        .dyn_into()
        .map_err(|_| LoadError::Browser("a resposta do fetch não é um Response".into()))?;

    if !response.ok() {
        return Err(LoadError::HttpStatus {
            endpoint: endpoint.to_string(),
            status: response.status(),
        });
    }

    let promise = response.text().map_err(network)?;
    let text = JsFuture::from(promise)
        .await
        .map_err(network)?
        .as_string()
        .ok_or_else(|| LoadError::Browser("response.text() não devolveu string".into()))?;

    parse_questions(&text)
}
