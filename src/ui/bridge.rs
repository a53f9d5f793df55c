/// JS bridge: the browser-backed tab capability

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::controller::TabHost;
use crate::tab_data::{RawTab, TabId};

// Import JS bridge functions
#[wasm_bindgen(module = "/popup.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn queryAllTabs() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn activateTab(tab_id: i32) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    async fn removeTab(tab_id: i32) -> Result<(), JsValue>;
}

/// Host capability backed by the real browser. Every call hops onto the
/// JS event loop; completions come back through the supplied callbacks.
pub struct BrowserHost;

impl TabHost for BrowserHost {
    fn query_all(&self, done: Box<dyn FnOnce(Result<Vec<RawTab>, String>)>) {
        spawn_local(async move {
            let result = match queryAllTabs().await {
                Ok(tabs_js) => serde_wasm_bindgen::from_value(tabs_js)
                    .map_err(|e| format!("Failed to parse tabs: {:?}", e)),
                Err(e) => Err(format!("Failed to query tabs: {:?}", e)),
            };
            done(result);
        });
    }

    fn activate(&self, id: TabId) {
        spawn_local(async move {
            if let Err(e) = activateTab(id).await {
                log::error!("Failed to activate tab {}: {:?}", id, e);
            }
        });
    }

    fn remove(&self, id: TabId, done: Box<dyn FnOnce(Result<(), String>)>) {
        spawn_local(async move {
            let result = removeTab(id)
                .await
                .map_err(|e| format!("Failed to close tab {}: {:?}", id, e));
            done(result);
        });
    }
}
