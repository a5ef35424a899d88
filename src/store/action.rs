use std::any::Any;

use super::event::Phase;
use crate::container::{Container, Status};
use crate::error::StoreError;
use crate::operation::{OperationId, Outcome};
use crate::resource::Resource;

/// A type-erased outcome tagged with the resource it belongs to.
pub struct Action {
    resource: &'static str,
    op: OperationId,
    phase: Phase,
    payload: Box<dyn Any + Send>,
}

impl Action {
    pub fn new<R: Resource>(outcome: Outcome<R>) -> Self {
        Self {
            resource: R::NAME,
            op: outcome.op().clone(),
            phase: Phase::of(&outcome),
            payload: Box::new(outcome),
        }
    }

    pub fn resource(&self) -> &'static str {
        self.resource
    }

    pub fn op(&self) -> &OperationId {
        &self.op
    }

    pub(crate) fn into_parts(self) -> (&'static str, OperationId, Phase, Box<dyn Any + Send>) {
        (self.resource, self.op, self.phase, self.payload)
    }
}

impl std::fmt::Debug for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Action")
            .field("resource", &self.resource)
            .field("op", &self.op)
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}

/// A registered container, seen through its resource-agnostic surface.
pub(crate) trait Slice: Send + Sync {
    fn label(&self) -> &'static str;
    fn apply_any(&mut self, payload: &(dyn Any + Send)) -> Result<bool, StoreError>;
    fn status(&self) -> Status;
    fn len(&self) -> usize;
    fn as_any(&self) -> &dyn Any;
}

impl<R: Resource> Slice for Container<R> {
    fn label(&self) -> &'static str {
        R::LABEL
    }

    fn apply_any(&mut self, payload: &(dyn Any + Send)) -> Result<bool, StoreError> {
        let outcome = payload
            .downcast_ref::<Outcome<R>>()
            .ok_or(StoreError::TypeMismatch(R::NAME))?;
        Ok(self.apply(outcome))
    }

    fn status(&self) -> Status {
        Container::status(self)
    }

    fn len(&self) -> usize {
        Container::len(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
