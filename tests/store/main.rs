//! Store integration tests: routing, consistency and observers.

mod support;

mod events;
mod registry;
