use serde::{Deserialize, Serialize};

use crate::resource::{ReadOnly, Routes, Shape};

/// A dashboard counter, keyed by name ("properties", "agents", ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistic {
    pub name: String,
    pub value: f64,
}

crate::impl_resource!(
    Statistic,
    "statistics",
    "Statistic",
    name: String,
    ReadOnly,
    Routes::new("statistics").list_shape(Shape::Envelope("statistics"))
);
