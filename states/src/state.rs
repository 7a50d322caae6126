use std::any::{Any, type_name};

use log::error;

/// A value owned by the UI thread and stored in [`StateCtx`](crate::StateCtx).
pub trait State: Any + Send {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Clone of this state handed to commands when they are dispatched.
    ///
    /// States no command reads can keep the default `None`.
    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        None
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>);
}

/// Replace `target` with the boxed value if it has the same concrete type.
pub fn state_assign_impl<T: State>(target: &mut T, new_self: Box<dyn Any + Send>) {
    match new_self.downcast::<T>() {
        Ok(value) => *target = *value,
        Err(_) => error!("state_assign_impl: value is not a {}", type_name::<T>()),
    }
}
