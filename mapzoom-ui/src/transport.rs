//! POST transport for zoom requests.

use gloo_utils::format::JsValueSerdeExt;
use mapzoom_core::messages::WireResponse;
use mapzoom_core::{ZoomError, ZoomRequest, ZoomResponse};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

/// Convert a rejected promise or thrown value into a transport error.
pub(crate) fn js_error(value: JsValue) -> ZoomError {
    let message = value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value));
    ZoomError::Transport(message)
}

fn build_request(endpoint: &str, request: &ZoomRequest) -> Result<Request, ZoomError> {
    let headers = Headers::new().map_err(js_error)?;
    headers
        .set("Content-Type", "application/json")
        .map_err(js_error)?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_headers(&headers);
    init.set_body(&JsValue::from_str(&request.to_json()?));

    Request::new_with_str_and_init(endpoint, &init).map_err(js_error)
}

/// Send one zoom request and parse the reply.
///
/// Anything other than HTTP 200 with a JSON body comes back as an error.
pub async fn post_zoom(endpoint: &str, request: &ZoomRequest) -> Result<ZoomResponse, ZoomError> {
    let window =
        web_sys::window().ok_or_else(|| ZoomError::Transport("no window available".into()))?;
    let request = build_request(endpoint, request)?;

    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?
        .dyn_into()
        .map_err(js_error)?;

    if response.status() != 200 {
        return Err(ZoomError::HttpStatus(response.status()));
    }

    let body = JsFuture::from(response.json().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    let wire: WireResponse = body.into_serde()?;
    ZoomResponse::try_from(wire)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn js_error_keeps_error_message() {
        let err = js_error(js_sys::Error::new("Failed to fetch").into());
        assert!(matches!(err, ZoomError::Transport(ref m) if m == "Failed to fetch"));

        let err = js_error(JsValue::from_str("aborted"));
        assert!(matches!(err, ZoomError::Transport(ref m) if m == "aborted"));
    }

    #[wasm_bindgen_test]
    fn request_is_json_post() {
        let request = ZoomRequest {
            zoom: Some(1.0),
            x: None,
            y: None,
            offset_x: 12.0,
            offset_y: 34.0,
            is_increased_map: true,
        };

        let built = build_request("/zoom", &request).unwrap();
        assert_eq!(built.method(), "POST");
        assert_eq!(
            built.headers().get("Content-Type").unwrap().as_deref(),
            Some("application/json")
        );
        assert!(built.url().ends_with("/zoom"));
    }

    #[wasm_bindgen_test]
    async fn missing_endpoint_reports_http_status() {
        let request = ZoomRequest {
            zoom: None,
            x: None,
            y: None,
            offset_x: 5.0,
            offset_y: 5.0,
            is_increased_map: false,
        };

        let result = post_zoom("/__mapzoom_missing_endpoint", &request).await;
        assert!(matches!(result, Err(ZoomError::HttpStatus(404))));
    }
}
