use std::{
    any::{TypeId, type_name},
    collections::{BTreeMap, BTreeSet},
    sync::Arc,
};

use flume::{Receiver, Sender};
use log::{debug, error, warn};

use crate::{
    Command, CommandSnapshot, Compute, Dep, Error, Notifier, State, Updater, updater::Update,
};

/// Owner of every state, compute and command the application uses.
///
/// Frame loop contract (see the UI `App::update`):
/// 1. `sync_computes()` applies values published since the last frame.
/// 2. Widgets read via `state()` / `cached()` and write via `state_mut()` / `dispatch()`.
/// 3. `run_computed()` recalculates computes whose dependencies changed.
pub struct StateCtx {
    states: BTreeMap<TypeId, Box<dyn State>>,
    computes: BTreeMap<TypeId, Box<dyn Compute>>,
    commands: BTreeMap<TypeId, Arc<dyn Command>>,

    /// Entries changed since the last `run_computed`.
    dirty: BTreeSet<TypeId>,
    /// Computes recorded but never run.
    fresh: BTreeSet<TypeId>,
    queued_commands: Vec<(TypeId, &'static str)>,

    send: Sender<Update>,
    recv: Receiver<Update>,
    notify: Option<Notifier>,

    #[cfg(not(target_arch = "wasm32"))]
    tasks: tokio::task::JoinSet<()>,
}

impl Default for StateCtx {
    fn default() -> Self {
        Self::new()
    }
}

impl StateCtx {
    pub fn new() -> Self {
        let (send, recv) = flume::unbounded();

        Self {
            states: BTreeMap::new(),
            computes: BTreeMap::new(),
            commands: BTreeMap::new(),
            dirty: BTreeSet::new(),
            fresh: BTreeSet::new(),
            queued_commands: Vec::new(),
            send,
            recv,
            notify: None,
            #[cfg(not(target_arch = "wasm32"))]
            tasks: tokio::task::JoinSet::new(),
        }
    }

    pub fn add_state<T: State>(&mut self, state: T) {
        let id = TypeId::of::<T>();
        self.dirty.insert(id);
        self.states.insert(id, Box::new(state));
    }

    pub fn record_compute<T: Compute>(&mut self, compute: T) {
        let id = TypeId::of::<T>();
        self.fresh.insert(id);
        self.dirty.insert(id);
        self.computes.insert(id, Box::new(compute));
    }

    pub fn record_command<T: Command>(&mut self, command: T) {
        self.commands.insert(TypeId::of::<T>(), Arc::new(command));
    }

    /// Install the callback fired whenever an update is published.
    pub fn set_notifier(&mut self, notify: impl Fn() + Send + Sync + 'static) {
        self.notify = Some(Arc::new(notify));
    }

    pub fn updater(&self) -> Updater {
        Updater::new(self.send.clone(), self.notify.clone())
    }

    pub fn try_state<T: State>(&self) -> Result<&T, Error> {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|state| state.as_any().downcast_ref::<T>())
            .ok_or_else(Error::state_not_found::<T>)
    }

    /// # Panics
    /// Panics if `T` was never added; registration happens once at startup.
    pub fn state<T: State>(&self) -> &T {
        self.try_state::<T>().unwrap_or_else(|err| panic!("{err}"))
    }

    /// Mutable access; marks `T` dirty so dependent computes rerun.
    ///
    /// # Panics
    /// Panics if `T` was never added.
    pub fn state_mut<T: State>(&mut self) -> &mut T {
        let id = TypeId::of::<T>();
        self.dirty.insert(id);
        self.states
            .get_mut(&id)
            .and_then(|state| state.as_any_mut().downcast_mut::<T>())
            .unwrap_or_else(|| panic!("{}", Error::state_not_found::<T>()))
    }

    pub fn cached<T: Compute>(&self) -> Option<&T> {
        self.computes
            .get(&TypeId::of::<T>())
            .and_then(|compute| compute.as_any().downcast_ref::<T>())
    }

    /// Queue a command; it starts on the next [`flush_commands`](Self::flush_commands).
    pub fn enqueue_command<T: Command>(&mut self) {
        self.queued_commands
            .push((TypeId::of::<T>(), type_name::<T>()));
    }

    /// Queue and immediately start a command.
    pub fn dispatch<T: Command>(&mut self) {
        self.enqueue_command::<T>();
        self.flush_commands();
    }

    pub fn flush_commands(&mut self) {
        for (id, name) in std::mem::take(&mut self.queued_commands) {
            let Some(command) = self.commands.get(&id).cloned() else {
                error!("{}", Error::CommandNotFound { name });
                continue;
            };

            debug!("Dispatching command {name}");
            let future = command.run(self.snapshot(), self.updater());
            self.spawn(name, future);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn spawn(&mut self, name: &'static str, future: crate::CommandFuture) {
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                self.tasks.spawn_on(future, &handle);
            }
            Err(err) => error!("Cannot start command {name} outside a tokio runtime: {err}"),
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn spawn(&mut self, _name: &'static str, future: crate::CommandFuture) {
        wasm_bindgen_futures::spawn_local(future);
    }

    fn snapshot(&self) -> CommandSnapshot {
        let states = self
            .states
            .iter()
            .filter_map(|(id, state)| state.snapshot().map(|snap| (*id, snap)))
            .collect();
        CommandSnapshot::new(states)
    }

    /// Apply every value published through an [`Updater`] since the last call.
    pub fn sync_computes(&mut self) {
        #[cfg(not(target_arch = "wasm32"))]
        while let Some(joined) = self.tasks.try_join_next() {
            if let Err(err) = joined {
                error!("Command task failed: {err}");
            }
        }

        while let Ok((id, value)) = self.recv.try_recv() {
            if let Some(compute) = self.computes.get_mut(&id) {
                compute.assign_box(value);
            } else if let Some(state) = self.states.get_mut(&id) {
                state.assign_box(value);
            } else {
                warn!("sync_computes: dropping update for unregistered entry {id:?}");
                continue;
            }
            self.dirty.insert(id);
        }
    }

    /// Run every compute that was just recorded or whose dependencies changed.
    pub fn run_computed(&mut self) {
        if self.dirty.is_empty() {
            return;
        }

        let dirty = std::mem::take(&mut self.dirty);
        let updater = self.updater();

        for (id, compute) in &self.computes {
            let (state_ids, compute_ids) = compute.deps();
            let should_run = self.fresh.contains(id)
                || state_ids
                    .iter()
                    .chain(compute_ids.iter())
                    .any(|dep| dirty.contains(dep));

            if should_run {
                compute.compute(Dep::new(&self.states, &self.computes), updater.clone());
            }
        }

        self.fresh.clear();
    }

    /// Number of command tasks that have not been reaped yet.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Await every running command, applying its updates as each one finishes.
    #[cfg(not(target_arch = "wasm32"))]
    pub async fn settle(&mut self) {
        self.flush_commands();

        while let Some(joined) = self.tasks.join_next().await {
            if let Err(err) = joined {
                error!("Command task failed: {err}");
            }
            self.sync_computes();
        }

        self.sync_computes();
    }
}

impl std::fmt::Debug for StateCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateCtx")
            .field("states", &self.states.len())
            .field("computes", &self.computes.len())
            .field("commands", &self.commands.len())
            .field("dirty", &self.dirty.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::any::Any;

    use super::*;
    use crate::{CommandFuture, ComputeDeps, assign_impl, state_assign_impl};

    #[derive(Debug, Default, Clone, PartialEq, Eq)]
    struct Counter {
        value: i32,
    }

    impl State for Counter {
        fn as_any(&self) -> &dyn Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }

        fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
            Some(Box::new(self.clone()))
        }

        fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
            state_assign_impl(self, new_self);
        }
    }

    #[derive(Debug, Default, Clone, PartialEq, Eq)]
    struct Doubled {
        value: i32,
    }

    impl Compute for Doubled {
        fn deps(&self) -> ComputeDeps {
            (vec![TypeId::of::<Counter>()], Vec::new())
        }

        fn compute(&self, deps: Dep<'_>, updater: Updater) {
            let Ok(counter) = deps.get_state_ref::<Counter>() else {
                return;
            };
            updater.set(Self {
                value: counter.value * 2,
            });
        }

        fn as_any(&self) -> &dyn Any {
            self
        }

        fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
            assign_impl(self, new_self);
        }
    }

    #[derive(Debug, Default, Clone, PartialEq, Eq)]
    struct Echoed {
        value: Option<i32>,
    }

    impl Compute for Echoed {
        fn deps(&self) -> ComputeDeps {
            (Vec::new(), Vec::new())
        }

        fn compute(&self, _deps: Dep<'_>, _updater: Updater) {}

        fn as_any(&self) -> &dyn Any {
            self
        }

        fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
            assign_impl(self, new_self);
        }
    }

    struct EchoCommand;

    impl Command for EchoCommand {
        fn run(&self, snap: CommandSnapshot, updater: Updater) -> CommandFuture {
            let value = snap.state::<Counter>().map(|c| c.value).ok();
            Box::pin(async move {
                tokio::task::yield_now().await;
                updater.set(Echoed { value });
            })
        }
    }

    fn ctx() -> StateCtx {
        let mut ctx = StateCtx::new();
        ctx.add_state(Counter { value: 2 });
        ctx.record_compute(Doubled::default());
        ctx.record_compute(Echoed::default());
        ctx.record_command(EchoCommand);
        ctx
    }

    #[test]
    fn fresh_compute_runs_once_recorded() {
        let mut ctx = ctx();
        ctx.run_computed();
        ctx.sync_computes();

        assert_eq!(ctx.cached::<Doubled>(), Some(&Doubled { value: 4 }));
    }

    #[test]
    fn compute_reruns_only_when_dependency_changes() {
        let mut ctx = ctx();
        ctx.run_computed();
        ctx.sync_computes();
        ctx.run_computed();
        ctx.sync_computes();
        assert_eq!(ctx.cached::<Doubled>(), Some(&Doubled { value: 4 }));

        ctx.state_mut::<Counter>().value = 5;
        ctx.run_computed();
        ctx.sync_computes();
        assert_eq!(ctx.cached::<Doubled>(), Some(&Doubled { value: 10 }));
    }

    #[test]
    fn reading_state_does_not_mark_dirty() {
        let mut ctx = ctx();
        ctx.run_computed();
        ctx.sync_computes();
        ctx.run_computed();

        assert_eq!(ctx.state::<Counter>().value, 2);
        assert!(ctx.dirty.is_empty(), "reading a state must not mark it dirty");
    }

    #[test]
    fn missing_state_is_reported() {
        let ctx = StateCtx::new();
        assert_eq!(
            ctx.try_state::<Counter>().err(),
            Some(Error::state_not_found::<Counter>())
        );
    }

    #[test]
    fn updates_fire_notifier() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let mut ctx = ctx();
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        ctx.set_notifier(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        ctx.updater().set(Echoed { value: Some(1) });
        assert_eq!(hits.load(Ordering::SeqCst), 1);

        ctx.sync_computes();
        assert_eq!(ctx.cached::<Echoed>(), Some(&Echoed { value: Some(1) }));
    }

    #[tokio::test]
    async fn dispatched_command_reads_snapshot_and_publishes() {
        let mut ctx = ctx();
        ctx.dispatch::<EchoCommand>();
        assert_eq!(ctx.task_count(), 1);

        ctx.settle().await;

        assert_eq!(ctx.task_count(), 0);
        assert_eq!(ctx.cached::<Echoed>(), Some(&Echoed { value: Some(2) }));
    }

    #[tokio::test]
    async fn unregistered_command_is_skipped() {
        let mut ctx = StateCtx::new();
        ctx.dispatch::<EchoCommand>();
        assert_eq!(ctx.task_count(), 0);
        ctx.settle().await;
    }
}
