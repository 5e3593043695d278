use std::time::Duration;

use leptos::prelude::*;
use wasm_bindgen::JsValue;

/// One-shot delayed callback owned by the component that created it.
///
/// Starting again replaces the pending callback. Unmounting the component
/// clears anything still pending.
#[derive(Clone, Copy)]
pub struct OneShotTimer {
    handle: StoredValue<Option<TimeoutHandle>>,
}

impl OneShotTimer {
    pub fn new() -> Self {
        let handle = StoredValue::new(None::<TimeoutHandle>);
        on_cleanup(move || {
            if let Some(pending) = handle.try_update_value(Option::take).flatten() {
                pending.clear();
            }
        });
        Self { handle }
    }

    /// On `Err` the callback will never run, so callers must undo whatever
    /// they set up in anticipation of it.
    pub fn start(
        &self,
        delay: Duration,
        callback: impl FnOnce() + 'static,
    ) -> Result<(), JsValue> {
        self.cancel();
        let pending = set_timeout_with_handle(callback, delay).inspect_err(|err| {
            leptos::logging::warn!("failed to schedule timer: {:?}", err);
        })?;
        self.handle.set_value(Some(pending));
        Ok(())
    }

    pub fn cancel(&self) {
        if let Some(pending) = self.handle.try_update_value(Option::take).flatten() {
            pending.clear();
        }
    }
}

impl Default for OneShotTimer {
    fn default() -> Self {
        Self::new()
    }
}
