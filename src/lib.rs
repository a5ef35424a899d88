mod client;
mod config;
mod container;
mod cookies;
mod error;
mod operation;
mod resource;
mod store;

pub mod entities;
pub mod notify;
pub mod storage;
pub mod transport;


pub use client::RealtyClient;
pub use config::ClientConfig;
pub use container::{Consistency, Container, Status};
pub use cookies::CookieJar;
pub use error::{ConfigError, Error, StorageError, StoreError, TransportError, ValidationError};
pub use operation::{Completion, OperationId, OperationKind, Outcome, ResourceClient};
pub use resource::{require, Access, Encode, Query, ReadOnly, Resource, ResourceKey, Routes, Shape};
pub use store::{Action, Phase, Store, StoreEvent, Subscriber, SubscriptionId};

// Re-export the EventEmitter used by `notify::EmitterSink`
#[cfg(feature = "emitter")]
pub use event_emitter_rs::EventEmitter;
