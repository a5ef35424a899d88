//! Resources - the per-entity adapters behind the generic container.
//!
//! Every backend entity implements [`Resource`]: its store tag, its key, the
//! draft type used for create/update, and a [`Routes`] entry describing the
//! endpoint conventions the backend uses for it. The generic client and
//! container never branch on the entity.
//!
//! ## Example
//!
//! ```ignore
//! #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
//! pub struct Video { pub id: u64, pub title: String }
//!
//! realty_client::impl_resource!(Video, "videos", "Video", id: u64, VideoDraft,
//!     Routes::new("videos").update_with(Verb::Put).public_reads());
//! ```

mod draft;
mod routes;

pub use draft::{require, Encode, ReadOnly};
pub use routes::{Access, Query, Routes, Shape};

use std::fmt::{Debug, Display};
use std::hash::Hash;

use serde::{de::DeserializeOwned, Serialize};

/// Key type of a resource (`id` for most entities).
pub trait ResourceKey:
    Clone + Eq + Hash + Display + Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
}

impl<T> ResourceKey for T where
    T: Clone + Eq + Hash + Display + Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
}

/// An entity type managed through the REST backend.
pub trait Resource: Serialize + DeserializeOwned + Clone + Debug + Send + Sync + 'static {
    /// Store tag for this resource's container (e.g. "agents").
    const NAME: &'static str;

    /// Human-readable singular name used in notifications (e.g. "Agent").
    const LABEL: &'static str;

    type Key: ResourceKey;

    /// Payload for create and update.
    type Draft: Encode;

    fn key(&self) -> Self::Key;

    /// Endpoint conventions. Defaults to `Routes::new(Self::NAME)`.
    fn routes() -> Routes {
        Routes::new(Self::NAME)
    }
}

/// Implement [`Resource`] for a record with a plain key field.
#[macro_export]
macro_rules! impl_resource {
    ($ty:ty, $name:literal, $label:literal, $key_field:ident: $key:ty, $draft:ty) => {
        $crate::impl_resource!($ty, $name, $label, $key_field: $key, $draft, $crate::Routes::new($name));
    };
    ($ty:ty, $name:literal, $label:literal, $key_field:ident: $key:ty, $draft:ty, $routes:expr) => {
        impl $crate::Resource for $ty {
            const NAME: &'static str = $name;
            const LABEL: &'static str = $label;

            type Key = $key;
            type Draft = $draft;

            fn key(&self) -> Self::Key {
                self.$key_field.clone()
            }

            fn routes() -> $crate::Routes {
                $routes
            }
        }
    };
}
