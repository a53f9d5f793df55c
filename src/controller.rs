/// Host wiring: the tab capability trait and the controller over it

use std::rc::Rc;

use crate::tab_data::{RawTab, TabId};

/// Browser tab capability, injected so tests can substitute a double.
///
/// Completions are callback-shaped to mirror the chrome.tabs bridge the
/// real implementation wraps. There is no retry, timeout, or cancellation;
/// the popup is short-lived enough not to need them.
pub trait TabHost {
    /// One-shot snapshot of every open tab.
    fn query_all(&self, done: Box<dyn FnOnce(Result<Vec<RawTab>, String>)>);

    /// Bring a tab to the foreground. Fire-and-forget.
    fn activate(&self, id: TabId);

    /// Close a tab, reporting completion.
    fn remove(&self, id: TabId, done: Box<dyn FnOnce(Result<(), String>)>);
}

/// Connects the pure session pipeline to the host capability.
#[derive(Clone)]
pub struct Controller {
    host: Rc<dyn TabHost>,
}

impl Controller {
    pub fn new(host: Rc<dyn TabHost>) -> Controller {
        Controller { host }
    }

    /// Query the host's one-shot snapshot and deliver it untouched.
    /// Ingesting it (sorting, categorizing) is the session's job.
    pub fn load(&self, done: Box<dyn FnOnce(Result<Vec<RawTab>, String>)>) {
        self.host.query_all(done);
    }

    pub fn activate(&self, id: TabId) {
        self.host.activate(id);
    }

    /// Ask the host to close the tab, then run `after` whatever the
    /// outcome: the local record goes away even when the browser call
    /// fails, and the failure is only logged.
    pub fn remove(&self, id: TabId, after: Box<dyn FnOnce()>) {
        self.host.remove(
            id,
            Box::new(move |result| {
                if let Err(e) = result {
                    log::warn!("Failed to close tab {}: {}", id, e);
                }
                after();
            }),
        );
    }
}
