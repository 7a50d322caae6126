use std::{any::Any, future::Future, pin::Pin};

use crate::{CommandSnapshot, Updater};

pub type CommandFuture = Pin<Box<dyn Future<Output = ()> + Send>>;

/// Manual-only side effect.
///
/// Commands never run implicitly: they execute only after
/// [`StateCtx::dispatch`](crate::StateCtx::dispatch). `run` reads what it needs from the
/// snapshot synchronously, then returns the future doing the IO. Results are published
/// through the updater and land in the context on the next `sync_computes`.
pub trait Command: Any + Send + Sync {
    fn run(&self, snap: CommandSnapshot, updater: Updater) -> CommandFuture;
}
