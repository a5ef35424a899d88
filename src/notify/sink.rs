use std::sync::{Arc, Mutex};

use tracing::{info, warn};

use super::{Toast, ToastKind, ToastSink};

/// Writes toasts to `tracing`, or into a shared buffer when one is given.
#[derive(Default)]
pub struct LogSink {
    buffer: Option<Arc<Mutex<Vec<Toast>>>>,
}

impl LogSink {
    pub fn new() -> Self {
        LogSink { buffer: None }
    }

    pub fn with_buffer(buffer: Arc<Mutex<Vec<Toast>>>) -> Self {
        LogSink {
            buffer: Some(buffer),
        }
    }
}

impl ToastSink for LogSink {
    fn show(&self, toast: Toast) {
        match toast.kind {
            ToastKind::Success => info!(resource = %toast.resource, "{}", toast.message),
            ToastKind::Error => warn!(resource = %toast.resource, "{}", toast.message),
        }
        if let Some(buffer) = &self.buffer {
            match buffer.lock() {
                Ok(mut buffer) => buffer.push(toast),
                Err(_) => warn!("toast buffer poisoned"),
            }
        }
    }
}

#[cfg(feature = "emitter")]
pub use emitter::EmitterSink;

#[cfg(feature = "emitter")]
mod emitter {
    use std::sync::Mutex;

    use event_emitter_rs::EventEmitter;
    use tracing::warn;

    use super::super::{Toast, ToastSink};

    /// Re-emits toasts as JSON strings on an in-process `EventEmitter`.
    ///
    /// Listeners run on their own threads, so delivery is asynchronous.
    pub struct EmitterSink {
        emitter: Mutex<EventEmitter>,
    }

    impl Default for EmitterSink {
        fn default() -> Self {
            Self::new(EventEmitter::new())
        }
    }

    impl EmitterSink {
        pub const EVENT: &'static str = "toast";

        pub fn new(emitter: EventEmitter) -> Self {
            EmitterSink {
                emitter: Mutex::new(emitter),
            }
        }

        /// Register a listener that receives each toast's JSON encoding.
        pub fn on<F>(&self, listener: F) -> Option<String>
        where
            F: Fn(String) + Send + Sync + 'static,
        {
            match self.emitter.lock() {
                Ok(mut emitter) => Some(emitter.on(Self::EVENT, listener)),
                Err(_) => {
                    warn!("toast emitter poisoned");
                    None
                }
            }
        }
    }

    impl ToastSink for EmitterSink {
        fn show(&self, toast: Toast) {
            let payload = match serde_json::to_string(&toast) {
                Ok(payload) => payload,
                Err(err) => {
                    warn!(error = %err, "could not encode toast");
                    return;
                }
            };
            match self.emitter.lock() {
                Ok(mut emitter) => {
                    emitter.emit(Self::EVENT, payload);
                }
                Err(_) => warn!("toast emitter poisoned"),
            }
        }
    }
}
