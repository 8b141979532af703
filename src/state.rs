use leptos::prelude::*;
use leptos::task::spawn_local;
use rand::rngs::SmallRng;
use web_sys::File;

use truthlens_core::report::{report_json, REPORT_FILENAME};
use truthlens_core::runner::{self, CancelToken, Progress, RunPlan, Scheduler};
use truthlens_core::theme::{self, ThemePreference};
use truthlens_core::{AnalyzerConfig, InputMode, MockGenerator, Session};

use crate::browser::{self, BrowserScheduler, BrowserStorage};

#[derive(Clone, Copy)]
pub struct AppState {
    pub config: StoredValue<AnalyzerConfig>,
    pub session: RwSignal<Session<File>, LocalStorage>,
    /// `Some` while a run is in flight.
    pub progress: RwSignal<Option<Progress>>,
    /// Flips true shortly after results appear so bars animate.
    pub bars_revealed: RwSignal<bool>,
    pub preview_url: RwSignal<Option<String>>,
    pub theme: RwSignal<ThemePreference>,
    running: Memo<bool>,
    generator: StoredValue<Option<MockGenerator>>,
    rng: StoredValue<SmallRng>,
    cancel: StoredValue<CancelToken>,
}

impl AppState {
    pub fn new(config: AnalyzerConfig, cancel: CancelToken) -> Self {
        let generator = match MockGenerator::builtin(config.variant) {
            Ok(g) => Some(g),
            Err(e) => {
                log::error!("Failed to load {} catalog: {e}", config.variant);
                None
            }
        };
        let theme = if config.theme_toggle {
            theme::load_theme(&BrowserStorage, browser::prefers_dark())
        } else {
            ThemePreference::Light
        };
        let session = RwSignal::new_local(Session::new());
        Self {
            config: StoredValue::new(config),
            session,
            progress: RwSignal::new(None),
            bars_revealed: RwSignal::new(false),
            preview_url: RwSignal::new(None),
            theme: RwSignal::new(theme),
            running: Memo::new(move |_| session.with(|s| s.is_running())),
            generator: StoredValue::new(generator),
            rng: StoredValue::new(browser::seeded_rng()),
            cancel: StoredValue::new(cancel),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    pub fn select_mode(&self, mode: InputMode) {
        let mut result = Ok(());
        self.session.update(|s| result = s.select_mode(mode));
        match result {
            Ok(()) => {
                self.set_preview(None);
                self.bars_revealed.set(false);
            }
            Err(e) => log::debug!("mode switch ignored: {e}"),
        }
    }

    pub fn set_text(&self, text: String) {
        self.session.update(|s| s.set_text(text));
    }

    /// Picker and drop both land here.
    pub fn stage_file(&self, file: File) {
        let staged = browser::staged_file(file);
        let wants_preview = matches!(self.session.with_untracked(|s| s.mode()), InputMode::Image | InputMode::Video);
        let url = if wants_preview { browser::object_url(&staged.blob) } else { None };

        let mut result = Ok(());
        self.session.update(|s| result = s.stage_file(staged));
        match result {
            Ok(()) => self.set_preview(url),
            Err(e) => {
                if let Some(url) = url {
                    browser::revoke_object_url(&url);
                }
                browser::alert(&e.to_string());
            }
        }
    }

    pub fn remove_file(&self) {
        self.session.update(|s| {
            s.remove_file();
        });
        self.set_preview(None);
    }

    pub fn new_analysis(&self) {
        let mut result = Ok(());
        self.session.update(|s| result = s.reset());
        if result.is_ok() {
            self.set_preview(None);
            self.bars_revealed.set(false);
        }
    }

    fn set_preview(&self, url: Option<String>) {
        if let Some(old) = self.preview_url.get_untracked() {
            browser::revoke_object_url(&old);
        }
        self.preview_url.set(url);
    }

    /// Validate, play the simulated run, then generate and show a result.
    /// Input problems are reported with an alert and change nothing.
    pub fn start_analysis(&self) {
        if let Err(e) = self.session.with_untracked(|s| s.validate_ready_to_analyze()) {
            browser::alert(&e.to_string());
            return;
        }
        if self.generator.with_value(|g| g.is_none()) {
            browser::alert("Result catalog failed to load; see the console for details.");
            return;
        }
        let Some(Ok(input)) = self.session.try_update(|s| s.begin_analysis()) else {
            return;
        };
        let run_id = self.session.with_untracked(|s| s.run_id());
        self.bars_revealed.set(false);

        let config = self.config.get_value();
        let mut plan = None;
        self.rng.update_value(|rng| plan = Some(RunPlan::new(&config.progress, rng)));
        let Some(plan) = plan else { return };
        let cancel = self.cancel.get_value();
        let state = *self;

        spawn_local(async move {
            let result = runner::run(plan, &BrowserScheduler, &cancel, |p| state.progress.set(Some(p))).await;
            state.progress.set(None);
            if let Err(e) = result {
                log::info!("{e}");
                state.session.update(|s| s.abort());
                return;
            }

            let mut outcome = None;
            state.generator.with_value(|g| {
                if let Some(g) = g {
                    state.rng.update_value(|rng| outcome = Some(g.generate(&input, rng)));
                }
            });
            let Some(outcome) = outcome else {
                state.session.update(|s| s.abort());
                return;
            };
            log::info!(
                "{} / {}",
                outcome.authenticity.verdict,
                outcome.credibility.verdict
            );
            state.session.update(|s| {
                s.complete(outcome);
            });

            BrowserScheduler.sleep(config.reveal_delay_ms).await;
            // a newer run may have started during the delay
            if !cancel.is_cancelled() && state.session.with_untracked(|s| s.shows_run(run_id)) {
                state.bars_revealed.set(true);
            }
        });
    }

    pub fn toggle_theme(&self) {
        let next = theme::toggle_theme(&BrowserStorage, self.theme.get_untracked());
        self.theme.set(next);
    }

    pub fn export_report(&self) {
        let variant = self.config.with_value(|c| c.variant);
        let json = self.session.with_untracked(|s| match (s.submitted(), s.outcome()) {
            (Some(input), Some(outcome)) => Some(report_json(variant, browser::now_iso(), input, outcome)),
            _ => None,
        });
        match json {
            Some(Ok(json)) => {
                if let Err(e) = browser::download_json(REPORT_FILENAME, &json) {
                    log::error!("Report download failed: {e}");
                }
            }
            Some(Err(e)) => log::error!("Failed to serialize report: {e}"),
            None => log::warn!("No result to export"),
        }
    }
}
