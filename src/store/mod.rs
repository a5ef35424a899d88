//! Store - one container per resource, one dispatch entry point.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                         Store (clone = handle)               │
//! │  dispatch(Action) ──tag──▶ "agents"     → Container<Agent>    │
//! │                           "properties" → Container<Property> │
//! │                           ...                                │
//! └──────────────────────────────────────────────────────────────┘
//!                            │ StoreEvent (after the lock is released)
//!                            ▼
//!                 Subscribers (Toaster, views, tests)
//! ```
//!
//! Containers share nothing: deleting a property does not touch the
//! appointments container.
//!
//! ## Example
//!
//! ```ignore
//! let store = Store::new().register::<Agent>().register::<Office>();
//! store.subscribe(Arc::new(|event: &StoreEvent| println!("{:?}", event.phase)));
//!
//! let op = store.begin::<Agent>(OperationKind::List, None);
//! store.dispatch_outcome::<Agent>(Outcome::Requested { op })?;
//! let count = store.select::<Agent, _>(|agents| agents.len())?;
//! ```

mod action;
mod event;

pub use action::Action;
pub use event::{Phase, StoreEvent, Subscriber};

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use tracing::{debug, warn};

use self::action::Slice;
use crate::container::{Consistency, Container, Status};
use crate::error::{StoreError, ValidationError};
use crate::operation::{OperationId, OperationKind, Outcome};
use crate::resource::Resource;

/// Handle returned by [`Store::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Inner {
    slices: RwLock<HashMap<&'static str, Box<dyn Slice>>>,
    subscribers: RwLock<Vec<(SubscriptionId, Arc<dyn Subscriber>)>>,
    next_seq: AtomicU64,
    next_subscription: AtomicU64,
    consistency: Consistency,
}

/// Root of the client state tree. Cloning yields another handle to the
/// same state.
#[derive(Clone)]
pub struct Store {
    inner: Arc<Inner>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    pub fn new() -> Self {
        Self::with_consistency(Consistency::default())
    }

    /// Containers registered afterwards use `consistency`.
    pub fn with_consistency(consistency: Consistency) -> Self {
        Self {
            inner: Arc::new(Inner {
                slices: RwLock::new(HashMap::new()),
                subscribers: RwLock::new(Vec::new()),
                next_seq: AtomicU64::new(0),
                next_subscription: AtomicU64::new(0),
                consistency,
            }),
        }
    }

    pub fn consistency(&self) -> Consistency {
        self.inner.consistency
    }

    /// Register a container for `R`. Builder form of [`add`](Self::add).
    pub fn register<R: Resource>(self) -> Self {
        if let Err(err) = self.add::<R>() {
            warn!(resource = R::NAME, error = %err, "failed to register container");
        }
        self
    }

    /// Register a container for `R`. Returns `false` if one already exists.
    pub fn add<R: Resource>(&self) -> Result<bool, StoreError> {
        let mut slices = self
            .inner
            .slices
            .write()
            .map_err(|_| StoreError::LockPoisoned("register"))?;
        if slices.contains_key(R::NAME) {
            return Ok(false);
        }
        let container = Container::<R>::with_consistency(self.inner.consistency);
        slices.insert(R::NAME, Box::new(container));
        Ok(true)
    }

    pub fn is_registered(&self, resource: &str) -> bool {
        self.inner
            .slices
            .read()
            .map(|slices| slices.contains_key(resource))
            .unwrap_or(false)
    }

    /// Registered resource names, sorted.
    pub fn resources(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self
            .inner
            .slices
            .read()
            .map(|slices| slices.keys().copied().collect())
            .unwrap_or_default();
        names.sort_unstable();
        names
    }

    /// Allocate the identity of a new operation on `R`.
    pub fn begin<R: Resource>(&self, kind: OperationKind, target: Option<String>) -> OperationId {
        OperationId {
            resource: R::NAME,
            kind,
            seq: self.inner.next_seq.fetch_add(1, Ordering::SeqCst) + 1,
            target,
        }
    }

    /// Route an action to its container by resource tag, then notify
    /// subscribers.
    pub fn dispatch(&self, action: Action) -> Result<StoreEvent, StoreError> {
        let (resource, op, phase, payload) = action.into_parts();
        let (label, applied) = {
            let mut slices = self
                .inner
                .slices
                .write()
                .map_err(|_| StoreError::LockPoisoned("dispatch"))?;
            let slice = slices
                .get_mut(resource)
                .ok_or_else(|| StoreError::UnknownResource(resource.to_string()))?;
            (slice.label(), slice.apply_any(&*payload)?)
        };
        debug!(op = %op, ?phase, applied, "dispatched");

        let event = StoreEvent {
            resource,
            label,
            op,
            phase,
            applied,
        };
        self.publish(&event);
        Ok(event)
    }

    pub fn dispatch_outcome<R: Resource>(&self, outcome: Outcome<R>) -> Result<StoreEvent, StoreError> {
        self.dispatch(Action::new(outcome))
    }

    /// Publish a validation failure. No container is touched.
    pub fn reject<R: Resource>(
        &self,
        kind: OperationKind,
        target: Option<String>,
        error: &ValidationError,
    ) -> StoreEvent {
        let event = StoreEvent {
            resource: R::NAME,
            label: R::LABEL,
            op: self.begin::<R>(kind, target),
            phase: Phase::Rejected {
                message: error.to_string(),
            },
            applied: false,
        };
        debug!(op = %event.op, error = %error, "rejected before request");
        self.publish(&event);
        event
    }

    pub fn subscribe(&self, subscriber: Arc<dyn Subscriber>) -> SubscriptionId {
        let id = SubscriptionId(self.inner.next_subscription.fetch_add(1, Ordering::SeqCst));
        match self.inner.subscribers.write() {
            Ok(mut subscribers) => subscribers.push((id, subscriber)),
            Err(_) => warn!("subscriber list poisoned; subscription dropped"),
        }
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        match self.inner.subscribers.write() {
            Ok(mut subscribers) => {
                let before = subscribers.len();
                subscribers.retain(|(existing, _)| *existing != id);
                subscribers.len() != before
            }
            Err(_) => false,
        }
    }

    fn publish(&self, event: &StoreEvent) {
        let subscribers: Vec<Arc<dyn Subscriber>> = match self.inner.subscribers.read() {
            Ok(subscribers) => subscribers.iter().map(|(_, s)| Arc::clone(s)).collect(),
            Err(_) => return,
        };
        for subscriber in subscribers {
            subscriber.on_event(event);
        }
    }

    /// Read `R`'s container through `f`.
    pub fn select<R: Resource, T>(&self, f: impl FnOnce(&Container<R>) -> T) -> Result<T, StoreError> {
        let slices = self
            .inner
            .slices
            .read()
            .map_err(|_| StoreError::LockPoisoned("select"))?;
        let slice = slices
            .get(R::NAME)
            .ok_or_else(|| StoreError::UnknownResource(R::NAME.to_string()))?;
        let container = slice
            .as_any()
            .downcast_ref::<Container<R>>()
            .ok_or(StoreError::TypeMismatch(R::NAME))?;
        Ok(f(container))
    }

    /// Copy of `R`'s container.
    pub fn snapshot<R: Resource>(&self) -> Result<Container<R>, StoreError> {
        self.select::<R, _>(Container::clone)
    }

    pub fn status(&self, resource: &str) -> Result<Status, StoreError> {
        let slices = self
            .inner
            .slices
            .read()
            .map_err(|_| StoreError::LockPoisoned("status"))?;
        slices
            .get(resource)
            .map(|slice| slice.status())
            .ok_or_else(|| StoreError::UnknownResource(resource.to_string()))
    }

    /// Item counts per resource, sorted by name.
    pub fn counts(&self) -> Result<Vec<(&'static str, usize)>, StoreError> {
        let slices = self
            .inner
            .slices
            .read()
            .map_err(|_| StoreError::LockPoisoned("counts"))?;
        let mut counts: Vec<_> = slices.iter().map(|(name, slice)| (*name, slice.len())).collect();
        counts.sort_unstable_by_key(|(name, _)| *name);
        Ok(counts)
    }
}
