//! Toast notifications derived from store events.
//!
//! The operation wrapper never notifies anyone directly. A [`Toaster`] is a
//! store [`Subscriber`] that turns terminal phases into [`Toast`]s and hands
//! them to a [`ToastSink`]:
//!
//! ```text
//! ResourceClient ──▶ Store::dispatch ──▶ StoreEvent ──▶ Toaster ──▶ ToastSink
//!                                                                  ├─ LogSink
//!                                                                  ├─ EmitterSink
//!                                                                  └─ Fn(Toast)
//! ```

mod sink;

use serde::{Deserialize, Serialize};

use crate::store::{Phase, StoreEvent, Subscriber};

#[cfg(feature = "emitter")]
pub use sink::EmitterSink;
pub use sink::LogSink;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    /// Resource name the toast is about, e.g. "agents".
    pub resource: String,
}

impl Toast {
    pub fn success(resource: &str, message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            message: message.into(),
            resource: resource.to_string(),
        }
    }

    pub fn error(resource: &str, message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            message: message.into(),
            resource: resource.to_string(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == ToastKind::Error
    }
}

/// Where toasts end up.
pub trait ToastSink: Send + Sync {
    fn show(&self, toast: Toast);
}

impl<F> ToastSink for F
where
    F: Fn(Toast) + Send + Sync,
{
    fn show(&self, toast: Toast) {
        self(toast)
    }
}

/// Subscriber that maps store events to toasts.
pub struct Toaster<S> {
    sink: S,
    quiet_reads: bool,
}

impl<S: ToastSink> Toaster<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            quiet_reads: false,
        }
    }

    /// Skip success toasts for list and fetch; failures are still shown.
    pub fn quiet_reads(mut self) -> Self {
        self.quiet_reads = true;
        self
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn toast_for(&self, event: &StoreEvent) -> Option<Toast> {
        let kind = event.kind();
        match &event.phase {
            Phase::Requested => None,
            Phase::Succeeded { .. } if self.quiet_reads && kind.is_read() => None,
            Phase::Succeeded { message } => {
                let message = message
                    .clone()
                    .unwrap_or_else(|| kind.success_message(event.label));
                Some(Toast::success(event.resource, message))
            }
            Phase::Failed { message } | Phase::Rejected { message } => {
                Some(Toast::error(event.resource, message.clone()))
            }
        }
    }
}

impl<S: ToastSink> Subscriber for Toaster<S> {
    fn on_event(&self, event: &StoreEvent) {
        if let Some(toast) = self.toast_for(event) {
            self.sink.show(toast);
        }
    }
}
