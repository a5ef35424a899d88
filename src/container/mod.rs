//! Container - the local mirror of one resource's collection.
//!
//! A [`Container`] is a reducer: it folds [`Outcome`]s into `items`,
//! `results`, `selected`, `last_error` and a request status. It is the only place those
//! fields change, and it never performs I/O.
//!
//! ## Merge rules
//!
//! | outcome              | effect                                                |
//! |----------------------|-------------------------------------------------------|
//! | `Requested(*)`       | status → pending; `list` also clears `last_error`     |
//! | `Succeeded(list)`    | replace `items` wholesale                             |
//! | `Succeeded(search)`  | replace `results` wholesale; `items` untouched        |
//! | `Succeeded(fetch)`   | set `selected`                                        |
//! | `Succeeded(create)`  | append                                                |
//! | `Succeeded(update)`  | replace by key in place (no insert on miss), and `selected` |
//! | `Succeeded(delete)`  | remove by key from `items` and `results`              |
//! | `Failed(*)`          | status → failed; set `last_error`; data untouched     |

use std::collections::{BTreeMap, HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::operation::{Completion, OperationId, OperationKind, Outcome};
use crate::resource::Resource;

/// How concurrent operations on one container are reconciled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Consistency {
    /// One status flag overwritten by every transition; every completion is
    /// applied in arrival order. Reproduces the deployed client's behavior,
    /// including its lost-update race.
    Legacy,
    /// Status is pending while any operation is outstanding; superseded read
    /// and same-key update completions are discarded.
    #[default]
    Tracked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Idle,
    Pending,
    Failed,
}

/// Completions that supersede one another. Lists are keyed by their query.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Watermark {
    List(Option<String>),
    Search,
    Fetch,
    Item(String),
}

impl Watermark {
    fn of(op: &OperationId) -> Option<Self> {
        match op.kind {
            OperationKind::List => Some(Watermark::List(op.target.clone())),
            OperationKind::Search => Some(Watermark::Search),
            OperationKind::FetchOne => Some(Watermark::Fetch),
            OperationKind::Update => op.target.clone().map(Watermark::Item),
            OperationKind::Create | OperationKind::Delete => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Container<R: Resource> {
    items: Vec<R>,
    results: Vec<R>,
    selected: Option<R>,
    last_error: Option<String>,
    consistency: Consistency,
    /// Legacy: the current status. Tracked: the last settled status.
    flag: Status,
    in_flight: BTreeMap<u64, OperationKind>,
    watermarks: HashMap<Watermark, u64>,
}

impl<R: Resource> Default for Container<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Resource> Container<R> {
    pub fn new() -> Self {
        Self::with_consistency(Consistency::default())
    }

    pub fn with_consistency(consistency: Consistency) -> Self {
        Self {
            items: Vec::new(),
            results: Vec::new(),
            selected: None,
            last_error: None,
            consistency,
            flag: Status::Idle,
            in_flight: BTreeMap::new(),
            watermarks: HashMap::new(),
        }
    }

    pub fn items(&self) -> &[R] {
        &self.items
    }

    /// Latest search results, separate from the full `items` mirror.
    pub fn results(&self) -> &[R] {
        &self.results
    }

    pub fn selected(&self) -> Option<&R> {
        self.selected.as_ref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn consistency(&self) -> Consistency {
        self.consistency
    }

    pub fn status(&self) -> Status {
        match self.consistency {
            Consistency::Legacy => self.flag,
            Consistency::Tracked if !self.in_flight.is_empty() => Status::Pending,
            Consistency::Tracked => self.flag,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status() == Status::Pending
    }

    /// Number of operations issued but not yet resolved.
    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }

    pub fn get(&self, key: &R::Key) -> Option<&R> {
        self.items.iter().find(|item| &item.key() == key)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pure form of [`apply`](Self::apply).
    pub fn reduce(mut self, outcome: &Outcome<R>) -> Self {
        self.apply(outcome);
        self
    }

    /// Fold one outcome into the container. Returns `false` when a completion
    /// was discarded as superseded.
    pub fn apply(&mut self, outcome: &Outcome<R>) -> bool {
        match outcome {
            Outcome::Requested { op } => {
                self.in_flight.insert(op.seq, op.kind);
                if self.consistency == Consistency::Legacy {
                    self.flag = Status::Pending;
                }
                if op.kind == OperationKind::List {
                    self.last_error = None;
                }
                true
            }
            Outcome::Succeeded { op, completion, .. } => {
                if !self.settle(op) {
                    return false;
                }
                self.flag = Status::Idle;
                self.merge(completion);
                true
            }
            Outcome::Failed { op, message } => {
                if !self.settle(op) {
                    return false;
                }
                self.flag = Status::Failed;
                self.last_error = Some(message.clone());
                true
            }
        }
    }

    /// Retire `op` from the in-flight set and decide whether its completion
    /// still applies.
    fn settle(&mut self, op: &OperationId) -> bool {
        self.in_flight.remove(&op.seq);
        let Some(mark) = Watermark::of(op) else {
            return true;
        };
        let seen = self.watermarks.get(&mark).copied().unwrap_or(0);
        if self.consistency == Consistency::Tracked && seen > op.seq {
            warn!(op = %op, superseded_by = seen, "discarding stale completion");
            return false;
        }
        self.watermarks.insert(mark, seen.max(op.seq));
        true
    }

    fn merge(&mut self, completion: &Completion<R>) {
        match completion {
            Completion::Listed(items) => self.items = dedup(items),
            Completion::Searched(items) => self.results = dedup(items),
            Completion::Fetched(item) => {
                self.selected = Some(item.clone());
            }
            Completion::Created(item) => {
                let key = item.key();
                self.items.retain(|existing| existing.key() != key);
                self.items.push(item.clone());
            }
            Completion::Updated(item) => {
                let key = item.key();
                if let Some(slot) = self.items.iter_mut().find(|existing| existing.key() == key) {
                    *slot = item.clone();
                }
                if let Some(selected) = self.selected.as_mut() {
                    if selected.key() == key {
                        *selected = item.clone();
                    }
                }
            }
            Completion::Deleted(key) => {
                self.items.retain(|existing| &existing.key() != key);
                self.results.retain(|existing| &existing.key() != key);
                self.watermarks.remove(&Watermark::Item(key.to_string()));
            }
        }
    }
}

/// First occurrence wins for repeated keys.
fn dedup<R: Resource>(items: &[R]) -> Vec<R> {
    let mut seen = HashSet::with_capacity(items.len());
    items
        .iter()
        .filter(|item| seen.insert(item.key()))
        .cloned()
        .collect()
}
