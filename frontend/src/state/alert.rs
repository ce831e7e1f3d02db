#[cfg(target_arch = "wasm32")]
use gloo_timers::callback::Timeout;
use leptos::*;

pub const ALERT_TIMEOUT_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertMessage {
    pub kind: AlertKind,
    pub message: String,
}

#[cfg_attr(not(test), allow(dead_code))]
struct PendingDismiss {
    generation: u64,
    delay_ms: u32,
    // Dropping the handle clears the browser timer.
    #[cfg(target_arch = "wasm32")]
    _timer: Timeout,
}

/// Page-scoped alert slot. Showing an alert replaces the previous one and
/// reschedules the auto-dismiss; the pending timer is dropped with the page.
#[derive(Clone, Copy)]
pub struct AlertController {
    current: RwSignal<Option<AlertMessage>>,
    generation: StoredValue<u64>,
    pending: StoredValue<Option<PendingDismiss>>,
}

impl Default for AlertController {
    fn default() -> Self {
        Self::new()
    }
}

impl AlertController {
    pub fn new() -> Self {
        let pending = store_value(None::<PendingDismiss>);
        on_cleanup(move || {
            pending.try_update_value(|slot| slot.take());
        });
        Self {
            current: create_rw_signal(None),
            generation: store_value(0),
            pending,
        }
    }

    pub fn signal(&self) -> Signal<Option<AlertMessage>> {
        self.current.into()
    }

    pub fn current(&self) -> Option<AlertMessage> {
        self.current.get_untracked()
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(AlertKind::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(AlertKind::Error, message);
    }

    /// No-op once the owning page has been disposed.
    pub fn show(&self, kind: AlertKind, message: impl Into<String>) {
        let Some(previous) = self.generation.try_get_value() else {
            return;
        };
        let generation = previous.wrapping_add(1);
        self.generation.set_value(generation);
        self.current.set(Some(AlertMessage {
            kind,
            message: message.into(),
        }));
        let _ = self
            .pending
            .try_set_value(Some(self.schedule_dismiss(generation, ALERT_TIMEOUT_MS)));
    }

    pub fn dismiss(&self) {
        self.current.set(None);
        let _ = self.pending.try_set_value(None);
    }

    #[cfg(target_arch = "wasm32")]
    fn schedule_dismiss(&self, generation: u64, delay_ms: u32) -> PendingDismiss {
        let controller = *self;
        PendingDismiss {
            generation,
            delay_ms,
            _timer: Timeout::new(delay_ms, move || controller.expire(generation)),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn schedule_dismiss(&self, generation: u64, delay_ms: u32) -> PendingDismiss {
        PendingDismiss {
            generation,
            delay_ms,
        }
    }

    // Runs inside the timer callback, so the pending handle is left in place
    // and released by the next show/dismiss or by page cleanup.
    fn expire(&self, generation: u64) {
        let is_current = self
            .generation
            .try_get_value()
            .map(|current| current == generation)
            .unwrap_or(false);
        if is_current {
            let _ = self.current.try_set(None);
        }
    }

    #[cfg(all(test, not(target_arch = "wasm32")))]
    pub fn pending_delay_ms(&self) -> Option<u32> {
        self.pending
            .with_value(|slot| slot.as_ref().map(|pending| pending.delay_ms))
    }

    #[cfg(all(test, not(target_arch = "wasm32")))]
    pub fn fire_pending(&self) {
        if let Some(generation) = self
            .pending
            .with_value(|slot| slot.as_ref().map(|pending| pending.generation))
        {
            self.expire(generation);
        }
    }

    #[cfg(all(test, not(target_arch = "wasm32")))]
    pub fn fire_stale(&self, generation: u64) {
        self.expire(generation);
    }

    #[cfg(all(test, not(target_arch = "wasm32")))]
    pub fn generation(&self) -> u64 {
        self.generation.get_value()
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn alert_clears_after_timeout_in_browser() {
        let runtime = create_runtime();
        let alerts = AlertController::new();
        alerts.success("saved");
        TimeoutFuture::new(ALERT_TIMEOUT_MS - 500).await;
        assert!(alerts.current().is_some());
        TimeoutFuture::new(1_000).await;
        assert!(alerts.current().is_none());
        runtime.dispose();
    }
}
