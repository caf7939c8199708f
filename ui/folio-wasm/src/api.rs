//! HTTP client for the contact endpoint.
//!
//! Wraps `fetch`. The base URL defaults to same-origin; a `data-api-base`
//! attribute on `<body>` overrides it.

use crate::dom;
use folio_api_types::{ContactResponse, ContactSubmission};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

pub const CONTACT_PATH: &str = "/api/contact";

pub fn base_url() -> String {
    dom::body_data("api-base")
        .map(|base| base.trim_end_matches('/').to_owned())
        .unwrap_or_default()
}

/// POST a submission. `Ok` only for a 2xx reply whose body says `success: true`.
pub async fn post_contact(submission: &ContactSubmission) -> Result<ContactResponse, String> {
    let url = format!("{}{}", base_url(), CONTACT_PATH);
    let body = serde_json::to_string(submission).map_err(|e| e.to_string())?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);

    let headers = Headers::new().map_err(|e| format!("{:?}", e))?;
    headers
        .set("Content-Type", "application/json")
        .map_err(|e| format!("{:?}", e))?;
    opts.set_headers(&headers);
    opts.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("{:?}", e))?;

    let resp_value = JsFuture::from(dom::window().fetch_with_request(&request))
        .await
        .map_err(|e| format!("fetch error: {:?}", e))?;

    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| "response is not a Response".to_string())?;

    let text = JsFuture::from(resp.text().map_err(|e| format!("{:?}", e))?)
        .await
        .map_err(|e| format!("text error: {:?}", e))?;
    let text = text.as_string().unwrap_or_default();

    if !resp.ok() {
        return Err(format!("{} {}: {}", resp.status(), resp.status_text(), text));
    }

    let parsed: ContactResponse =
        serde_json::from_str(&text).map_err(|e| format!("JSON parse error: {} (raw: {})", e, text))?;

    if parsed.success {
        Ok(parsed)
    } else {
        Err(parsed.message)
    }
}
