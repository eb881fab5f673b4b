// mapzoom-ui/src/hooks/use_zoom_interaction.rs
use mapzoom_core::{ResponseOrdering, ViewportState, ZoomButton, ZoomController, ZoomDirection};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::MouseEvent;

use crate::config::ZoomConfig;
use crate::dom::MapElements;
use crate::transport::post_zoom;

/// Handle returned by the hook
pub struct ZoomInteractionHandle {
    controller: Rc<RefCell<ZoomController>>,
}

impl ZoomInteractionHandle {
    pub fn direction(&self) -> ZoomDirection {
        self.controller.borrow().direction()
    }

    pub fn viewport(&self) -> ViewportState {
        self.controller.borrow().viewport()
    }

    pub fn requests_issued(&self) -> u32 {
        self.controller.borrow().requests_issued()
    }

    pub fn responses_handled(&self) -> u32 {
        self.controller.borrow().responses_handled()
    }
}

/// Bind the double-click and direction-button listeners.
///
/// The listeners live for the rest of the page session. Each armed
/// double-click spawns its own request; responses are applied as they
/// arrive, subject to `ordering`.
pub fn use_zoom_interaction(
    elements: MapElements,
    config: ZoomConfig,
    ordering: ResponseOrdering,
) -> Result<ZoomInteractionHandle, JsValue> {
    let controller = Rc::new(RefCell::new(ZoomController::new(
        elements.initial_viewport(),
        ordering,
    )));
    let elements = Rc::new(elements);

    let on_dblclick = {
        let elements = Rc::clone(&elements);
        let controller = Rc::clone(&controller);
        move |ev: MouseEvent| {
            let offset = elements.click_offset(&ev);
            let Some(pending) = controller.borrow_mut().on_double_click(offset) else {
                return;
            };

            log::info!("send: zoom request {} to {}", pending.seq, config.endpoint);

            let elements = Rc::clone(&elements);
            let controller = Rc::clone(&controller);
            spawn_local(async move {
                let outcome = post_zoom(config.endpoint, &pending.request).await;
                let effect = controller.borrow_mut().on_response(pending.seq, outcome);
                elements.apply_effect(effect);
            });
        }
    };

    let dblclick_handler = Closure::wrap(Box::new(on_dblclick) as Box<dyn FnMut(MouseEvent)>);
    elements.container.add_event_listener_with_callback(
        "dblclick",
        dblclick_handler.as_ref().unchecked_ref(),
    )?;
    dblclick_handler.forget();

    for button in [ZoomButton::Increase, ZoomButton::Decrease] {
        let target = elements.button(button).clone();
        let elements = Rc::clone(&elements);
        let controller = Rc::clone(&controller);

        let click_handler = Closure::wrap(Box::new(move |_: MouseEvent| {
            let selection = controller.borrow_mut().select(button);
            if let Err(e) = elements.show_selection(selection, &config) {
                log::warn!("Failed to update zoom controls: {:?}", e);
            }
        }) as Box<dyn FnMut(MouseEvent)>);

        target
            .add_event_listener_with_callback("click", click_handler.as_ref().unchecked_ref())?;
        click_handler.forget();
    }

    Ok(ZoomInteractionHandle { controller })
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::test_support::{sleep_ms, Fixture};
    use wasm_bindgen_test::*;
    use web_sys::MouseEventInit;

    wasm_bindgen_test_configure!(run_in_browser);

    fn dblclick(elements: &MapElements) {
        let init = MouseEventInit::new();
        init.set_client_x(100);
        init.set_client_y(100);
        let event = MouseEvent::new_with_mouse_event_init_dict("dblclick", &init).unwrap();
        elements.container.dispatch_event(&event).unwrap();
    }

    #[wasm_bindgen_test]
    fn starts_unset_with_page_viewport() {
        let fixture = Fixture::new(["init_map", "init_inc", "init_dec"]);
        let handle = use_zoom_interaction(
            fixture.elements(),
            fixture.config,
            ResponseOrdering::LastArrivalWins,
        )
        .unwrap();

        assert_eq!(handle.direction(), ZoomDirection::Unset);
        assert_eq!(handle.viewport().zoom, Some(1.0));
    }

    #[wasm_bindgen_test]
    fn unarmed_double_click_sends_no_request() {
        let fixture = Fixture::new(["idle_map", "idle_inc", "idle_dec"]);
        let elements = fixture.elements();
        let before = elements.container.inner_html();
        let handle = use_zoom_interaction(
            elements.clone(),
            fixture.config,
            ResponseOrdering::LastArrivalWins,
        )
        .unwrap();

        dblclick(&elements);
        dblclick(&elements);

        assert_eq!(handle.requests_issued(), 0);
        assert_eq!(elements.container.inner_html(), before);
    }

    #[wasm_bindgen_test]
    fn button_clicks_arm_and_switch_direction() {
        let fixture = Fixture::new(["arm_map", "arm_inc", "arm_dec"]);
        let elements = fixture.elements();
        let class = fixture.config.selected_class;
        let handle = use_zoom_interaction(
            elements.clone(),
            fixture.config,
            ResponseOrdering::LastArrivalWins,
        )
        .unwrap();

        elements.increase.click();
        assert_eq!(handle.direction(), ZoomDirection::Increase);
        assert!(elements.increase.class_list().contains(class));
        assert!(!elements.decrease.class_list().contains(class));

        elements.decrease.click();
        assert_eq!(handle.direction(), ZoomDirection::Decrease);
        assert!(!elements.increase.class_list().contains(class));
        assert!(elements.decrease.class_list().contains(class));
        assert_eq!(
            elements.container.style().get_property_value("cursor").unwrap(),
            fixture.config.armed_cursor
        );
    }

    #[wasm_bindgen_test]
    fn armed_double_click_issues_one_request_each() {
        let mut fixture = Fixture::new(["armed_map", "armed_inc", "armed_dec"]);
        fixture.config.endpoint = "/__mapzoom_missing_endpoint";
        let elements = fixture.elements();
        let handle = use_zoom_interaction(
            elements.clone(),
            fixture.config,
            ResponseOrdering::LastArrivalWins,
        )
        .unwrap();

        elements.increase.click();
        dblclick(&elements);
        assert_eq!(handle.requests_issued(), 1);

        dblclick(&elements);
        assert_eq!(handle.requests_issued(), 2);
    }

    #[wasm_bindgen_test]
    async fn failed_reply_leaves_page_and_viewport_untouched() {
        let mut fixture = Fixture::new(["reply_map", "reply_inc", "reply_dec"]);
        fixture.config.endpoint = "/__mapzoom_missing_endpoint";
        let elements = fixture.elements();
        let before = elements.container.inner_html();
        let handle = use_zoom_interaction(
            elements.clone(),
            fixture.config,
            ResponseOrdering::LastArrivalWins,
        )
        .unwrap();
        let initial = handle.viewport();

        elements.increase.click();
        dblclick(&elements);
        for _ in 0..100 {
            if handle.responses_handled() == 1 {
                break;
            }
            sleep_ms(20).await;
        }

        assert_eq!(handle.responses_handled(), 1);
        assert_eq!(elements.container.inner_html(), before);
        assert_eq!(handle.viewport(), initial);
    }
}
