//! People list compute + load command.
//!
//! - `PeopleCompute` is a compute-shaped cache holding the status/result of the last load.
//! - `LoadPeopleCommand` is manual-only: it runs the fetch pipeline and publishes into
//!   `PeopleCompute` via `Updater::set()`.
//!
//! Network IO never lives in `Compute::compute`, since computes run implicitly.

use std::any::Any;
use std::sync::Arc;

use chrono::{DateTime, TimeDelta, Utc};
use holocron_states::{
    Command, CommandFuture, CommandSnapshot, Compute, ComputeDeps, Dep, Updater, assign_impl,
};
use log::{error, info};

use crate::SwapiConfig;
use crate::people::{Person, api};

#[derive(Debug, Clone, Default)]
pub enum PeopleResult {
    /// Nothing requested yet.
    #[default]
    Idle,

    Loading { started_at: DateTime<Utc> },

    Loaded {
        people: Arc<[Person]>,
        loaded_at: DateTime<Utc>,
        elapsed: TimeDelta,
    },

    /// The load failed; nothing is displayed.
    Error(String),
}

#[derive(Debug, Clone, Default)]
pub struct PeopleCompute {
    pub result: PeopleResult,
}

impl PeopleCompute {
    pub fn is_loading(&self) -> bool {
        matches!(self.result, PeopleResult::Loading { .. })
    }

    pub fn people(&self) -> Option<&Arc<[Person]>> {
        match &self.result {
            PeopleResult::Loaded { people, .. } => Some(people),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.result {
            PeopleResult::Error(msg) => Some(msg.as_str()),
            _ => None,
        }
    }
}

impl Compute for PeopleCompute {
    fn deps(&self) -> ComputeDeps {
        // Cache written by `LoadPeopleCommand`; nothing to derive from.
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

/// Fetch every page of people, resolve homeworlds, publish the list.
///
/// Dispatch explicitly via `ctx.dispatch::<LoadPeopleCommand>()`. There is no cancellation:
/// once started the load runs to completion or fails.
#[derive(Default, Debug)]
pub struct LoadPeopleCommand;

impl Command for LoadPeopleCommand {
    fn run(&self, snap: CommandSnapshot, updater: Updater) -> CommandFuture {
        let start_url = match snap.state::<SwapiConfig>() {
            Ok(config) => config.people_url(),
            Err(err) => {
                error!("LoadPeopleCommand: {err}");
                updater.set(PeopleCompute {
                    result: PeopleResult::Error(err.to_string()),
                });
                return Box::pin(async {});
            }
        };

        // Published before spawning: the next sync must already see the load in flight.
        let started_at = Utc::now();
        info!("LoadPeopleCommand: loading people from {start_url}");
        updater.set(PeopleCompute {
            result: PeopleResult::Loading { started_at },
        });

        Box::pin(async move {
            let result = match api::load_people(&start_url).await {
                Ok(people) => {
                    let loaded_at = Utc::now();
                    let elapsed = loaded_at.signed_duration_since(started_at);
                    info!(
                        "LoadPeopleCommand: loaded {} people in {}ms",
                        people.len(),
                        elapsed.num_milliseconds()
                    );
                    PeopleResult::Loaded {
                        people: people.into(),
                        loaded_at,
                        elapsed,
                    }
                }
                Err(err) => {
                    error!("LoadPeopleCommand: {err}");
                    PeopleResult::Error(err.to_string())
                }
            };

            updater.set(PeopleCompute { result });
        })
    }
}
