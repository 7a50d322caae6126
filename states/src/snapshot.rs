use std::{
    any::{Any, TypeId},
    collections::BTreeMap,
};

use crate::Error;

/// Owned copies of the states that opted into [`State::snapshot`](crate::State::snapshot),
/// taken at dispatch time.
#[derive(Default)]
pub struct CommandSnapshot {
    states: BTreeMap<TypeId, Box<dyn Any + Send>>,
}

impl CommandSnapshot {
    pub(crate) fn new(states: BTreeMap<TypeId, Box<dyn Any + Send>>) -> Self {
        Self { states }
    }

    pub fn state<T: Any>(&self) -> Result<&T, Error> {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_ref::<T>())
            .ok_or_else(Error::state_not_found::<T>)
    }
}

impl std::fmt::Debug for CommandSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandSnapshot")
            .field("states", &self.states.len())
            .finish()
    }
}
