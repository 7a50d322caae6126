use holocron_business::{GridState, LoadPeopleCommand};

use crate::{state::State, widgets};

/// Storage key of the persisted grid settings.
pub const GRID_STATE_KEY: &str = "holocron_grid_state";

pub struct HolocronApp {
    state: State,
    /// Set once the repaint notifier is installed and the first load dispatched.
    started: bool,
}

impl HolocronApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self {
            state,
            started: false,
        }
    }

    /// Restore grid settings saved by a previous run, falling back to defaults.
    pub fn with_storage(storage: Option<&dyn eframe::Storage>) -> Self {
        let state = match storage.and_then(|s| eframe::get_value::<GridState>(s, GRID_STATE_KEY)) {
            Some(grid) => {
                log::info!(
                    "Restored grid settings ({} active filters)",
                    grid.active_filter_count()
                );
                State::restored(grid)
            }
            None => State::default(),
        };
        Self::new(state)
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }

    fn start(&mut self, ctx: &egui::Context) {
        let egui_ctx = ctx.clone();
        self.state
            .ctx
            .set_notifier(move || egui_ctx.request_repaint());
        self.state.ctx.dispatch::<LoadPeopleCommand>();
        self.started = true;
    }
}

impl eframe::App for HolocronApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.started {
            self.start(ctx);
        }

        // Sync Compute for render
        self.state.ctx.sync_computes();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.strong("Holocron");
                ui.separator();
                widgets::load_status(&self.state.ctx, ui);
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            widgets::people_panel(&mut self.state.ctx, ui);
        });

        // Recalculate derived rows after this frame's edits
        self.state.ctx.run_computed();
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, GRID_STATE_KEY, self.state.ctx.state::<GridState>());
    }
}
