//! What subscribers observe after each dispatch.

use crate::operation::{OperationId, OperationKind, Outcome};
use crate::resource::Resource;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Requested,
    Succeeded { message: Option<String> },
    Failed { message: String },
    /// Blocked by client-side validation; never reached a container.
    Rejected { message: String },
}

impl Phase {
    pub(crate) fn of<R: Resource>(outcome: &Outcome<R>) -> Self {
        match outcome {
            Outcome::Requested { .. } => Phase::Requested,
            Outcome::Succeeded { message, .. } => Phase::Succeeded {
                message: message.clone(),
            },
            Outcome::Failed { message, .. } => Phase::Failed {
                message: message.clone(),
            },
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, Phase::Requested)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreEvent {
    pub resource: &'static str,
    /// Human-readable resource name, e.g. "Agent".
    pub label: &'static str,
    pub op: OperationId,
    pub phase: Phase,
    /// `false` when the container discarded a superseded completion.
    pub applied: bool,
}

impl StoreEvent {
    pub fn kind(&self) -> OperationKind {
        self.op.kind
    }
}

/// Observer notified after every dispatch, outside the store lock.
pub trait Subscriber: Send + Sync {
    fn on_event(&self, event: &StoreEvent);
}

impl<F> Subscriber for F
where
    F: Fn(&StoreEvent) + Send + Sync,
{
    fn on_event(&self, event: &StoreEvent) {
        self(event)
    }
}
