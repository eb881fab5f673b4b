//! DOM fixtures shared by the browser tests.

use web_sys::{Document, Element};

use crate::config::{default_config, ZoomConfig};
use crate::dom::MapElements;

/// Resolve after `ms` milliseconds, letting pending fetches complete.
pub async fn sleep_ms(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    wasm_bindgen_futures::JsFuture::from(promise).await.unwrap();
}

pub fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// A map container at a fixed position plus the two direction buttons,
/// appended to the body and removed on drop. Each test passes its own ids.
pub struct Fixture {
    pub config: ZoomConfig,
    root: Element,
}

impl Fixture {
    pub fn new(ids: [&'static str; 3]) -> Self {
        let document = document();
        let root = document.create_element("div").unwrap();
        root.set_inner_html(&format!(
            r#"<div id="{}" style="position:fixed;left:30px;top:40px;width:700px;height:500px" data-zoom="1" data-x="55.75"><svg></svg></div>
               <button id="{}"></button>
               <button id="{}"></button>"#,
            ids[0], ids[1], ids[2]
        ));
        document.body().unwrap().append_child(&root).unwrap();

        let config = ZoomConfig {
            container_id: ids[0],
            increase_id: ids[1],
            decrease_id: ids[2],
            ..*default_config()
        };
        Self { config, root }
    }

    pub fn elements(&self) -> MapElements {
        MapElements::lookup(&document(), &self.config).unwrap()
    }
}

impl Drop for Fixture {
    fn drop(&mut self) {
        self.root.remove();
    }
}
