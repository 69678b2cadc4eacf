use std::sync::Mutex;

use event_emitter_rs::EventEmitter;

use super::ChangeEvent;

const CHANGED: &str = "changed";

/// Fans `ChangeEvent`s out to subscribers.
///
/// `EventEmitter` runs each listener on its own thread, so a listener may call
/// back into the store that notified it.
pub(crate) struct ChangeNotifier {
    emitter: Mutex<EventEmitter>,
}

impl ChangeNotifier {
    pub(crate) fn new() -> Self {
        Self {
            emitter: Mutex::new(EventEmitter::new()),
        }
    }

    pub(crate) fn subscribe<F>(&self, listener: F) -> String
    where
        F: Fn(ChangeEvent) + Send + Sync + 'static,
    {
        let mut emitter = self.emitter.lock().unwrap_or_else(|e| e.into_inner());
        emitter.on(CHANGED, listener)
    }

    pub(crate) fn unsubscribe(&self, listener_id: &str) -> bool {
        let mut emitter = self.emitter.lock().unwrap_or_else(|e| e.into_inner());
        emitter.remove_listener(listener_id).is_some()
    }

    pub(crate) fn emit(&self, event: ChangeEvent) {
        let mut emitter = self.emitter.lock().unwrap_or_else(|e| e.into_inner());
        emitter.emit(CHANGED, event);
    }
}
