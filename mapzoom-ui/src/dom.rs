// mapzoom-ui/src/dom.rs
use mapzoom_core::{
    ButtonSelection, ClickOffset, ResponseEffect, ViewportState, ZoomButton, ZoomError,
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, MouseEvent};

use crate::config::ZoomConfig;

/// The three page elements the zoom interaction binds to.
#[derive(Clone, Debug)]
pub struct MapElements {
    pub container: HtmlElement,
    pub increase: HtmlElement,
    pub decrease: HtmlElement,
}

fn require_element(document: &Document, id: &str) -> Result<HtmlElement, ZoomError> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| ZoomError::MissingElement(id.to_string()))
}

/// Read `clientX`/`clientY` as a JS number. web-sys types them as `i32`,
/// which drops the fractional part.
fn client_coord(event: &MouseEvent, property: &str, fallback: i32) -> f64 {
    js_sys::Reflect::get(event, &JsValue::from_str(property))
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(fallback as f64)
}

impl MapElements {
    /// Find all elements named by `config`. Fails on the first missing one.
    pub fn lookup(document: &Document, config: &ZoomConfig) -> Result<Self, ZoomError> {
        Ok(Self {
            container: require_element(document, config.container_id)?,
            increase: require_element(document, config.increase_id)?,
            decrease: require_element(document, config.decrease_id)?,
        })
    }

    pub fn button(&self, button: ZoomButton) -> &HtmlElement {
        match button {
            ZoomButton::Increase => &self.increase,
            ZoomButton::Decrease => &self.decrease,
        }
    }

    /// Click position relative to the container's top-left corner.
    pub fn click_offset(&self, event: &MouseEvent) -> ClickOffset {
        let rect = self.container.get_bounding_client_rect();
        ClickOffset::from_client(
            client_coord(event, "clientX", event.client_x()),
            client_coord(event, "clientY", event.client_y()),
            rect.left(),
            rect.top(),
        )
    }

    /// Initial viewport from the container's `data-zoom`, `data-x` and
    /// `data-y` attributes.
    pub fn initial_viewport(&self) -> ViewportState {
        let attr = |name: &str| self.container.get_attribute(name);
        ViewportState::from_page_values(
            attr("data-zoom").as_deref(),
            attr("data-x").as_deref(),
            attr("data-y").as_deref(),
        )
    }

    /// Mark the selected control, clear the other, and switch the container
    /// cursor to signal that double-click now zooms.
    pub fn show_selection(
        &self,
        selection: ButtonSelection,
        config: &ZoomConfig,
    ) -> Result<(), JsValue> {
        self.button(selection.selected)
            .class_list()
            .add_1(config.selected_class)?;
        self.button(selection.cleared)
            .class_list()
            .remove_1(config.selected_class)?;
        self.container
            .style()
            .set_property("cursor", config.armed_cursor)
    }

    pub fn apply_effect(&self, effect: ResponseEffect) {
        match effect {
            ResponseEffect::ReplaceContent(svg) => self.container.set_inner_html(&svg),
            ResponseEffect::Diagnostic(message) => log::info!("{}", message),
            ResponseEffect::Ignored | ResponseEffect::Stale => {}
        }
    }
}
