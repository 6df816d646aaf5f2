use log::debug;

pub const PAYMENT_POLL_INTERVAL_MS: u32 = 10_000;

/// Repeating callback tied to an owner's lifetime. Ticks are skipped while
/// the tab is hidden; becoming visible again runs one immediately.
/// Dropping the task cancels it.
pub struct PollingTask {
    active: bool,
    #[cfg(target_arch = "wasm32")]
    interval: Option<gloo_timers::callback::Interval>,
    #[cfg(target_arch = "wasm32")]
    visibility: Option<browser::VisibilityListener>,
}

impl PollingTask {
    pub fn start(period_ms: u32, tick: impl Fn() + 'static) -> Self {
        debug!("polling started every {} ms", period_ms);
        Self::spawn(period_ms, tick)
    }

    #[cfg(target_arch = "wasm32")]
    fn spawn(period_ms: u32, tick: impl Fn() + 'static) -> Self {
        use std::rc::Rc;

        let tick: Rc<dyn Fn()> = Rc::new(tick);
        let on_interval = tick.clone();
        let interval = gloo_timers::callback::Interval::new(period_ms, move || {
            if browser::page_visible() {
                on_interval();
            }
        });
        let visibility = browser::VisibilityListener::attach(move || tick());
        Self {
            active: true,
            interval: Some(interval),
            visibility,
        }
    }

    // no timers outside the browser; the handle still tracks its state
    #[cfg(not(target_arch = "wasm32"))]
    fn spawn(_period_ms: u32, _tick: impl Fn() + 'static) -> Self {
        Self { active: true }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn cancel(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(interval) = self.interval.take() {
                interval.cancel();
            }
            self.visibility = None;
        }
        debug!("polling cancelled");
    }
}

impl Drop for PollingTask {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Polling continues only while something is still pending.
pub fn keep_polling(pending_count: usize) -> bool {
    pending_count > 0
}

/// A new proof may not be submitted while an earlier one awaits review.
pub fn submit_disabled(pending_count: usize, uploading: bool) -> bool {
    uploading || pending_count > 0
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use wasm_bindgen::{closure::Closure, JsCast};
    use web_sys::{Document, VisibilityState};

    fn document() -> Option<Document> {
        web_sys::window().and_then(|w| w.document())
    }

    pub fn page_visible() -> bool {
        document()
            .map(|d| d.visibility_state() == VisibilityState::Visible)
            .unwrap_or(true)
    }

    /// `visibilitychange` handler removed again on drop.
    pub struct VisibilityListener {
        document: Document,
        callback: Closure<dyn FnMut()>,
    }

    impl VisibilityListener {
        pub fn attach(on_visible: impl Fn() + 'static) -> Option<Self> {
            let document = document()?;
            let callback = Closure::<dyn FnMut()>::new(move || {
                if page_visible() {
                    on_visible();
                }
            });
            document
                .add_event_listener_with_callback(
                    "visibilitychange",
                    callback.as_ref().unchecked_ref(),
                )
                .ok()?;
            Some(Self { document, callback })
        }
    }

    impl Drop for VisibilityListener {
        fn drop(&mut self) {
            let _ = self.document.remove_event_listener_with_callback(
                "visibilitychange",
                self.callback.as_ref().unchecked_ref(),
            );
        }
    }
}
