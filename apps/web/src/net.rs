//! The one network operation: `POST /api/suggest`.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::domain::{SuggestionRequest, SuggestionResponse};
use crate::error::SuggestError;

pub const SUGGEST_ENDPOINT: &str = "/api/suggest";

/// Sends one suggestion request. Non-2xx statuses map to [`SuggestError::Http`]
/// without reading the body; connection-level and decode failures map to
/// [`SuggestError::Transport`].
pub async fn post_suggest(payload: SuggestionRequest) -> Result<SuggestionResponse, SuggestError> {
    let window = web_sys::window().ok_or_else(|| transport("no window"))?;

    let body = serde_json::to_string(&payload)
        .map_err(|error| transport(&format!("could not encode request: {error}")))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::SameOrigin);
    opts.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(SUGGEST_ENDPOINT, &opts)
        .map_err(|error| transport(&js_error_message(&error)))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|error| transport(&js_error_message(&error)))?;

    let response_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|error| transport(&js_error_message(&error)))?;
    let response: Response = response_value
        .dyn_into()
        .map_err(|_| transport("unexpected fetch result"))?;

    if !response.ok() {
        return Err(SuggestError::Http {
            status: response.status(),
        });
    }

    let json_promise = response
        .json()
        .map_err(|error| transport(&js_error_message(&error)))?;
    let json = JsFuture::from(json_promise)
        .await
        .map_err(|error| transport(&js_error_message(&error)))?;

    serde_wasm_bindgen::from_value(json)
        .map_err(|error| transport(&format!("could not decode response: {error}")))
}

fn transport(message: &str) -> SuggestError {
    SuggestError::Transport {
        message: message.to_string(),
    }
}

/// Best-effort human-readable text out of a thrown JS value.
pub(crate) fn js_error_message(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value
        .as_string()
        .unwrap_or_else(|| format!("{value:?}"))
}
