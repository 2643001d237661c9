//! Dataset fetch over the browser `fetch` API.

use tagdex_core::{parse_dataset, DatasetError, ElementRecord};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

/// Fetch and decode the dataset at `url`.
///
/// Transport and HTTP failures map to [`DatasetError::Fetch`]; payload
/// failures come out of [`parse_dataset`]. Either way the caller sees
/// one error type and one user-visible failure path.
pub async fn load_dataset(url: &str) -> Result<Vec<ElementRecord>, DatasetError> {
    let window = web_sys::window().ok_or_else(|| DatasetError::Fetch("no window".into()))?;

    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(fetch_err)?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| DatasetError::Fetch("fetch did not yield a Response".into()))?;
    if !response.ok() {
        return Err(DatasetError::Fetch(format!("HTTP {}", response.status())));
    }

    let text = JsFuture::from(response.text().map_err(fetch_err)?)
        .await
        .map_err(fetch_err)?;
    parse_dataset(&text.as_string().unwrap_or_default())
}

fn fetch_err(value: JsValue) -> DatasetError {
    DatasetError::Fetch(format!("{value:?}"))
}
