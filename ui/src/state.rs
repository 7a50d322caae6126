use holocron_business::{
    GridState, LoadPeopleCommand, PeopleCompute, SwapiConfig, VisibleRowsCompute,
};
use holocron_states::StateCtx;

/// The main application state.
#[derive(Debug)]
pub struct State {
    /// The state context for business logic.
    pub ctx: StateCtx,
}

impl Default for State {
    fn default() -> Self {
        Self::with_config(SwapiConfig::default(), GridState::default())
    }
}

impl State {
    /// State pointed at a mock server, e.g. `http://127.0.0.1:4000`.
    pub fn test(base_url: String) -> Self {
        Self::with_config(
            SwapiConfig::new(format!("{base_url}/api")),
            GridState::default(),
        )
    }

    /// State for a run that restored its grid settings from storage.
    pub fn restored(grid: GridState) -> Self {
        Self::with_config(SwapiConfig::default(), grid)
    }

    fn with_config(config: SwapiConfig, grid: GridState) -> Self {
        let mut ctx = StateCtx::new();

        ctx.add_state(config);
        ctx.add_state(grid);
        ctx.record_compute(PeopleCompute::default());
        ctx.record_compute(VisibleRowsCompute::default());
        ctx.record_command(LoadPeopleCommand);

        Self { ctx }
    }
}
