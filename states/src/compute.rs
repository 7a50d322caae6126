use std::any::{Any, TypeId, type_name};

use log::error;

use crate::{Dep, Updater};

/// `(state ids, compute ids)` a compute reads.
pub type ComputeDeps = (Vec<TypeId>, Vec<TypeId>);

/// A cached value stored in [`StateCtx`](crate::StateCtx).
///
/// Derived computes recalculate in [`compute`](Compute::compute) whenever one of their
/// dependencies changed and publish the new value through the [`Updater`]. Computes that
/// only cache command results declare no dependencies and keep `compute` a no-op.
pub trait Compute: Any + Send {
    fn deps(&self) -> ComputeDeps;

    fn compute(&self, deps: Dep<'_>, updater: Updater);

    fn as_any(&self) -> &dyn Any;

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>);
}

/// Replace `target` with the boxed value if it has the same concrete type.
pub fn assign_impl<T: Compute>(target: &mut T, new_self: Box<dyn Any + Send>) {
    match new_self.downcast::<T>() {
        Ok(value) => *target = *value,
        Err(_) => error!("assign_impl: value is not a {}", type_name::<T>()),
    }
}
