pub mod config;
pub mod dom;
pub mod hooks;
pub mod transport;

#[cfg(all(test, target_arch = "wasm32"))]
mod test_support;

use mapzoom_core::{ResponseOrdering, ZoomError};
use wasm_bindgen::prelude::*;

use crate::config::{default_config, get_config, get_response_ordering, ZoomConfig};
use crate::dom::MapElements;
use crate::hooks::{use_zoom_interaction, ZoomInteractionHandle};

fn to_js_error(err: ZoomError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

/// Bind the zoom interaction to the already rendered map page.
pub fn mount_with_config(config: &ZoomConfig) -> Result<ZoomInteractionHandle, JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document available"))?;
    let elements = MapElements::lookup(&document, config).map_err(to_js_error)?;
    let ordering = get_response_ordering(config);

    log::info!(
        "Map zoom bound to #{} (endpoint {}, {})",
        config.container_id,
        config.endpoint,
        ordering.as_str()
    );
    use_zoom_interaction(elements, *config, ordering)
}

/// Entry point for a page using the named configuration.
#[wasm_bindgen]
pub fn mount_page(config_id: &str) -> Result<(), JsValue> {
    let config = get_config(config_id)
        .ok_or_else(|| JsValue::from_str(&format!("unknown map configuration: {}", config_id)))?;

    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(config.log_level);

    mount_with_config(config)?;
    Ok(())
}

#[wasm_bindgen]
pub fn mount() -> Result<(), JsValue> {
    mount_page(default_config().id)
}

/// Persist a response-ordering override for this browser. Takes effect on
/// the next mount.
#[wasm_bindgen]
pub fn set_response_ordering(value: &str) -> Result<(), JsValue> {
    let ordering = ResponseOrdering::parse(value)
        .ok_or_else(|| JsValue::from_str(&format!("unknown response ordering: {}", value)))?;
    config::set_response_ordering(ordering);
    Ok(())
}
