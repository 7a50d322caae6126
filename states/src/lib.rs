//! Explicit application state for Holocron.
//!
//! Everything the UI renders lives in a [`StateCtx`]:
//! - [`State`]: plain values owned and mutated by the UI thread (config, grid settings).
//! - [`Compute`]: cached values, either derived from other entries or written by commands.
//! - [`Command`]: explicitly dispatched async side effects (network IO) that publish their
//!   results through an [`Updater`].
//!
//! Updates sent from commands are buffered in a channel and applied on the UI thread by
//! [`StateCtx::sync_computes`], so there is never concurrent mutation of the context.

mod command;
mod compute;
mod ctx;
mod dep;
mod error;
mod snapshot;
mod state;
mod updater;

pub use command::{Command, CommandFuture};
pub use compute::{Compute, ComputeDeps, assign_impl};
pub use ctx::StateCtx;
pub use dep::Dep;
pub use error::Error;
pub use snapshot::CommandSnapshot;
pub use state::{State, state_assign_impl};
pub use updater::{Notifier, Updater};
