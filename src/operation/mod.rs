//! Operations and their outcomes.
//!
//! Each invocation of an operation produces exactly two outcomes: a
//! `Requested` when it is issued, then one terminal `Succeeded` or `Failed`.
//! Both are dispatched to the store, which routes them to the resource's
//! container and then to subscribers.

mod client;

pub use client::ResourceClient;

use std::fmt;

use crate::resource::Resource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OperationKind {
    List,
    /// A list whose results are kept apart from `items`.
    Search,
    FetchOne,
    Create,
    Update,
    Delete,
}

impl OperationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::List => "list",
            OperationKind::Search => "search",
            OperationKind::FetchOne => "fetchOne",
            OperationKind::Create => "create",
            OperationKind::Update => "update",
            OperationKind::Delete => "delete",
        }
    }

    pub fn is_read(&self) -> bool {
        matches!(
            self,
            OperationKind::List | OperationKind::Search | OperationKind::FetchOne
        )
    }

    /// "Failed to create agent", "Failed to load agent list".
    pub fn failure_message(&self, label: &str) -> String {
        let label = label.to_lowercase();
        match self {
            OperationKind::List => format!("Failed to load {label} list"),
            OperationKind::Search => format!("Failed to search {label} list"),
            OperationKind::FetchOne => format!("Failed to load {label}"),
            OperationKind::Create => format!("Failed to create {label}"),
            OperationKind::Update => format!("Failed to update {label}"),
            OperationKind::Delete => format!("Failed to delete {label}"),
        }
    }

    /// "Agent created successfully", "Agent list loaded".
    pub fn success_message(&self, label: &str) -> String {
        match self {
            OperationKind::List => format!("{label} list loaded"),
            OperationKind::Search => format!("{label} search complete"),
            OperationKind::FetchOne => format!("{label} loaded"),
            OperationKind::Create => format!("{label} created successfully"),
            OperationKind::Update => format!("{label} updated successfully"),
            OperationKind::Delete => format!("{label} deleted successfully"),
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity of one operation invocation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OperationId {
    pub resource: &'static str,
    pub kind: OperationKind,
    /// Store-wide issue order; strictly increasing.
    pub seq: u64,
    /// Stringified key for fetch, update and delete; the query for
    /// filtered lists and searches.
    pub target: Option<String>,
}

impl fmt::Display for OperationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}#{}", self.resource, self.kind, self.seq)?;
        if let Some(target) = &self.target {
            write!(f, "({target})")?;
        }
        Ok(())
    }
}

/// Data carried by a successful operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Completion<R: Resource> {
    Listed(Vec<R>),
    /// List results kept apart from `items`, e.g. a property search.
    Searched(Vec<R>),
    Fetched(R),
    Created(R),
    Updated(R),
    /// The key that was deleted; the backend's body is not used.
    Deleted(R::Key),
}

impl<R: Resource> Completion<R> {
    pub fn kind(&self) -> OperationKind {
        match self {
            Completion::Listed(_) => OperationKind::List,
            Completion::Searched(_) => OperationKind::Search,
            Completion::Fetched(_) => OperationKind::FetchOne,
            Completion::Created(_) => OperationKind::Create,
            Completion::Updated(_) => OperationKind::Update,
            Completion::Deleted(_) => OperationKind::Delete,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<R: Resource> {
    Requested {
        op: OperationId,
    },
    Succeeded {
        op: OperationId,
        completion: Completion<R>,
        /// Success text from the backend, if it sent one.
        message: Option<String>,
    },
    Failed {
        op: OperationId,
        message: String,
    },
}

impl<R: Resource> Outcome<R> {
    pub fn op(&self) -> &OperationId {
        match self {
            Outcome::Requested { op } | Outcome::Succeeded { op, .. } | Outcome::Failed { op, .. } => op,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Succeeded { .. })
    }

    pub fn completion(&self) -> Option<&Completion<R>> {
        match self {
            Outcome::Succeeded { completion, .. } => Some(completion),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Outcome::Failed { message, .. } => Some(message),
            _ => None,
        }
    }
}
