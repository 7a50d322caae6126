use std::{
    any::{Any, TypeId, type_name},
    sync::Arc,
};

use flume::Sender;
use log::warn;

/// Callback fired after every update, used by the UI to request a repaint.
pub type Notifier = Arc<dyn Fn() + Send + Sync>;

pub(crate) type Update = (TypeId, Box<dyn Any + Send>);

/// Send-safe handle that publishes new values for states or computes.
///
/// Values are queued and applied by [`StateCtx::sync_computes`](crate::StateCtx::sync_computes).
#[derive(Clone)]
pub struct Updater {
    send: Sender<Update>,
    notify: Option<Notifier>,
}

impl Updater {
    pub(crate) fn new(send: Sender<Update>, notify: Option<Notifier>) -> Self {
        Self { send, notify }
    }

    pub fn set<T: Any + Send>(&self, value: T) {
        if self
            .send
            .send((TypeId::of::<T>(), Box::new(value)))
            .is_err()
        {
            warn!(
                "Updater::set: state context dropped, discarding {}",
                type_name::<T>()
            );
            return;
        }

        if let Some(notify) = &self.notify {
            notify();
        }
    }
}

impl std::fmt::Debug for Updater {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Updater")
            .field("pending", &self.send.len())
            .field("notify", &self.notify.is_some())
            .finish()
    }
}
