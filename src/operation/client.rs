//! ResourceClient - the operation wrapper for one resource.

use std::marker::PhantomData;
use std::sync::Arc;

use serde_json::Value;
use tracing::warn;

use super::{Completion, OperationKind, Outcome};
use crate::error::{TransportError, ValidationError};
use crate::resource::{Encode, Query, Resource};
use crate::store::Store;
use crate::transport::{body_message, Request, Transport};

/// Issues operations for `R` and feeds their outcomes to the store.
///
/// Every call dispatches `Requested`, performs one transport call, then
/// dispatches and returns the terminal outcome. Transport failures become
/// `Outcome::Failed`; they are never returned as `Err`.
///
/// ```ignore
/// let agents = ResourceClient::<Agent>::new(store.clone(), transport.clone());
/// agents.list().await;
/// let outcome = agents.create(&draft).await?; // Err only for validation
/// ```
pub struct ResourceClient<R> {
    store: Store,
    transport: Arc<dyn Transport>,
    _marker: PhantomData<fn() -> R>,
}

impl<R> Clone for ResourceClient<R> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            transport: Arc::clone(&self.transport),
            _marker: PhantomData,
        }
    }
}

impl<R: Resource> ResourceClient<R> {
    /// Bind to `store`, registering `R`'s container if needed.
    pub fn new(store: Store, transport: Arc<dyn Transport>) -> Self {
        if let Err(err) = store.add::<R>() {
            warn!(resource = R::NAME, error = %err, "could not register container");
        }
        Self {
            store,
            transport,
            _marker: PhantomData,
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub async fn list(&self) -> Outcome<R> {
        self.list_with(Query::new()).await
    }

    /// Filtered list; replaces `items`. Lists with different queries do not
    /// supersede one another.
    pub async fn list_with(&self, query: Query) -> Outcome<R> {
        let routes = R::routes();
        let request = routes.list_request(&query);
        let target = (!query.is_empty()).then(|| query.to_string());
        self.run(OperationKind::List, target, Ok(request), |body| {
            routes.decode_list(body).map(Completion::Listed)
        })
        .await
    }

    /// List into the container's `results`, leaving `items` alone.
    pub async fn search(&self, query: Query) -> Outcome<R> {
        let routes = R::routes();
        let request = routes.list_request(&query);
        self.run(OperationKind::Search, Some(query.to_string()), Ok(request), |body| {
            routes.decode_list(body).map(Completion::Searched)
        })
        .await
    }

    pub async fn fetch_one(&self, key: &R::Key) -> Outcome<R> {
        let routes = R::routes();
        let request = routes.fetch_request(key);
        self.run(OperationKind::FetchOne, Some(key.to_string()), Ok(request), |body| {
            routes.decode_item(body).map(Completion::Fetched)
        })
        .await
    }

    pub async fn create(&self, draft: &R::Draft) -> Result<Outcome<R>, ValidationError> {
        self.check(OperationKind::Create, None, draft.validate())?;
        let routes = R::routes();
        let request = draft.encode().map(|body| routes.create_request(body));
        Ok(self
            .run(OperationKind::Create, None, request, |body| {
                routes.decode_item(body).map(Completion::Created)
            })
            .await)
    }

    pub async fn update(&self, key: &R::Key, draft: &R::Draft) -> Result<Outcome<R>, ValidationError> {
        let target = Some(key.to_string());
        self.check(OperationKind::Update, target.clone(), draft.validate())?;
        let routes = R::routes();
        let request = draft.encode().map(|body| routes.update_request(key, body));
        Ok(self
            .run(OperationKind::Update, target, request, |body| {
                routes.decode_item(body).map(Completion::Updated)
            })
            .await)
    }

    /// `PUT <resource>/status`; only for resources with a status endpoint.
    pub async fn update_status(&self, key: &R::Key, status: &str) -> Result<Outcome<R>, ValidationError> {
        let target = Some(key.to_string());
        let routes = R::routes();
        let request = if status.trim().is_empty() {
            Err(ValidationError::MissingField("status"))
        } else {
            routes.status_request(key, status).ok_or_else(|| {
                ValidationError::Unsupported(format!("{} does not support status updates", R::LABEL))
            })
        };
        let request = match request {
            Ok(request) => request,
            Err(err) => {
                self.store.reject::<R>(OperationKind::Update, target, &err);
                return Err(err);
            }
        };
        Ok(self
            .run(OperationKind::Update, target, Ok(request), |body| {
                routes.decode_item(body).map(Completion::Updated)
            })
            .await)
    }

    pub async fn delete(&self, key: &R::Key) -> Outcome<R> {
        let routes = R::routes();
        let request = routes.delete_request(key);
        let deleted = key.clone();
        self.run(OperationKind::Delete, Some(key.to_string()), Ok(request), move |_| {
            Ok(Completion::Deleted(deleted))
        })
        .await
    }

    fn check(
        &self,
        kind: OperationKind,
        target: Option<String>,
        validation: Result<(), ValidationError>,
    ) -> Result<(), ValidationError> {
        validation.map_err(|err| {
            self.store.reject::<R>(kind, target, &err);
            err
        })
    }

    async fn run<F>(
        &self,
        kind: OperationKind,
        target: Option<String>,
        request: Result<Request, TransportError>,
        decode: F,
    ) -> Outcome<R>
    where
        F: FnOnce(Value) -> Result<Completion<R>, TransportError>,
    {
        let op = self.store.begin::<R>(kind, target);
        self.dispatch(Outcome::Requested { op: op.clone() });

        let response = match request {
            Ok(request) => self.transport.send(request).await,
            Err(err) => Err(err),
        };
        let decoded = response.and_then(|body| {
            let message = body_message(&body);
            decode(body).map(|completion| (completion, message))
        });

        let outcome = match decoded {
            Ok((completion, message)) => Outcome::Succeeded {
                op,
                completion,
                message,
            },
            Err(err) => {
                warn!(op = %op, error = %err, "operation failed");
                let message = err
                    .server_message()
                    .map(str::to_string)
                    .unwrap_or_else(|| kind.failure_message(R::LABEL));
                Outcome::Failed { op, message }
            }
        };
        self.dispatch(outcome.clone());
        outcome
    }

    fn dispatch(&self, outcome: Outcome<R>) {
        if let Err(err) = self.store.dispatch_outcome(outcome) {
            warn!(resource = R::NAME, error = %err, "outcome not applied");
        }
    }
}
