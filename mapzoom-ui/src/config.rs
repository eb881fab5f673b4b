//! Zoom interaction configuration registry.
//!
//! Defines the page contract (element ids, classes, endpoint) for each known
//! map page. Also provides the response-ordering setting, which can be
//! overridden per browser through localStorage.

use mapzoom_core::ResponseOrdering;
use std::cell::Cell;

#[cfg(target_arch = "wasm32")]
const RESPONSE_ORDERING_STORAGE_KEY: &str = "mapzoom_response_ordering";

thread_local! {
    /// Cached ordering override. None = not yet loaded from localStorage.
    static RESPONSE_ORDERING_CACHE: Cell<Option<ResponseOrdering>> = const { Cell::new(None) };
}

/// Load the response-ordering override from localStorage.
fn load_response_ordering_from_storage() -> Option<ResponseOrdering> {
    #[cfg(target_arch = "wasm32")]
    {
        let window = web_sys::window()?;
        let storage = window.local_storage().ok()??;
        let value = storage.get_item(RESPONSE_ORDERING_STORAGE_KEY).ok()??;
        ResponseOrdering::parse(&value)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Save the response-ordering override to localStorage.
fn save_response_ordering_to_storage(value: ResponseOrdering) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(RESPONSE_ORDERING_STORAGE_KEY, value.as_str());
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = value;
    }
}

/// Get the raw ordering override (None if using the config default).
pub fn get_response_ordering_override() -> Option<ResponseOrdering> {
    RESPONSE_ORDERING_CACHE.with(|cell| {
        if cell.get().is_none() {
            cell.set(load_response_ordering_from_storage());
        }
        cell.get()
    })
}

/// Get the effective response ordering, falling back to the config default.
pub fn get_response_ordering(config: &ZoomConfig) -> ResponseOrdering {
    get_response_ordering_override().unwrap_or(config.response_ordering)
}

/// Set the ordering override and persist it to localStorage.
pub fn set_response_ordering(value: ResponseOrdering) {
    RESPONSE_ORDERING_CACHE.with(|cell| cell.set(Some(value)));
    save_response_ordering_to_storage(value);
}

/// Configuration for one map page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomConfig {
    /// Unique identifier
    pub id: &'static str,
    /// URL the zoom request is POSTed to
    pub endpoint: &'static str,
    /// Element holding the SVG map; receives double-clicks
    pub container_id: &'static str,
    /// "Zoom in" control
    pub increase_id: &'static str,
    /// "Zoom out" control
    pub decrease_id: &'static str,
    /// Class marking the selected direction control
    pub selected_class: &'static str,
    /// Container cursor once a direction is selected
    pub armed_cursor: &'static str,
    /// Console log level installed at mount
    pub log_level: log::Level,
    /// Default policy for overlapping responses
    pub response_ordering: ResponseOrdering,
}

/// Registry of available page configurations.
pub static ZOOM_CONFIGS: &[ZoomConfig] = &[ZoomConfig {
    id: "osm_map",
    endpoint: "/zoom",
    container_id: "svg_container",
    increase_id: "increase_zoom",
    decrease_id: "decrease_zoom",
    selected_class: "checked_map_settings",
    armed_cursor: "crosshair",
    log_level: log::Level::Info,
    response_ordering: ResponseOrdering::LastArrivalWins,
}];

/// Look up a page configuration by ID.
pub fn get_config(id: &str) -> Option<&'static ZoomConfig> {
    ZOOM_CONFIGS.iter().find(|c| c.id == id)
}

/// Get the default page configuration.
pub fn default_config() -> &'static ZoomConfig {
    &ZOOM_CONFIGS[0]
}
