//! Input state for one page: the active mode, what the user has typed or
//! staged, and where the analysis stands.

use crate::error::InputError;
use crate::types::{AnalysisInput, AnalysisOutcome, InputMode, StagedFile};

#[derive(Clone, Debug, Default, PartialEq)]
pub enum Phase {
    #[default]
    Idle,
    Running,
    Complete(AnalysisOutcome),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Session<B> {
    mode: InputMode,
    text: String,
    staged: Option<StagedFile<B>>,
    submitted: Option<AnalysisInput>,
    phase: Phase,
    run_id: u64,
}

impl<B> Default for Session<B> {
    fn default() -> Self {
        Self {
            mode: InputMode::default(),
            text: String::new(),
            staged: None,
            submitted: None,
            phase: Phase::Idle,
            run_id: 0,
        }
    }
}

impl<B> Session<B> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn staged(&self) -> Option<&StagedFile<B>> {
        self.staged.as_ref()
    }

    /// Snapshot of the last submitted input, kept alongside its outcome.
    pub fn submitted(&self) -> Option<&AnalysisInput> {
        self.submitted.as_ref()
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, Phase::Running)
    }

    /// Bumped by every `begin_analysis`.
    pub fn run_id(&self) -> u64 {
        self.run_id
    }

    /// True while the outcome of run `run_id` is the one on screen.
    pub fn shows_run(&self, run_id: u64) -> bool {
        self.run_id == run_id && self.outcome().is_some()
    }

    /// Only set once a run has completed.
    pub fn outcome(&self) -> Option<&AnalysisOutcome> {
        match &self.phase {
            Phase::Complete(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Switch input mode, dropping any staged file, typed text and shown
    /// result. Refused while a run is in flight.
    pub fn select_mode(&mut self, mode: InputMode) -> Result<(), InputError> {
        if self.is_running() {
            return Err(InputError::Busy);
        }
        log::debug!("mode {} -> {}", self.mode, mode);
        self.mode = mode;
        self.clear_inputs();
        Ok(())
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Stage a file from the picker or a drop. A rejected file leaves the
    /// current staging untouched.
    pub fn stage_file(&mut self, file: StagedFile<B>) -> Result<(), InputError> {
        if self.is_running() {
            return Err(InputError::Busy);
        }
        let Some(prefix) = self.mode.media_prefix() else {
            return Err(InputError::FilesNotAccepted);
        };
        if !file.media_type.to_ascii_lowercase().starts_with(prefix) {
            log::warn!("rejected {} ({:?}) in {} mode", file.name, file.media_type, self.mode);
            return Err(InputError::WrongMediaType {
                mode: self.mode,
                media_type: file.media_type,
            });
        }
        log::debug!("staged {} ({} bytes, {})", file.name, file.size, file.media_type);
        self.staged = Some(file);
        Ok(())
    }

    /// Manual removal. Returns the file so the caller can release any
    /// preview resources tied to it.
    pub fn remove_file(&mut self) -> Option<StagedFile<B>> {
        self.staged.take()
    }

    pub fn is_ready(&self) -> bool {
        self.validate_ready_to_analyze().is_ok()
    }

    pub fn validate_ready_to_analyze(&self) -> Result<(), InputError> {
        match self.mode {
            InputMode::Text if self.text.trim().is_empty() => Err(InputError::EmptyText),
            InputMode::Text => Ok(()),
            _ if self.staged.is_none() => Err(InputError::NoFile),
            _ => Ok(()),
        }
    }

    /// Validate and move to `Running`, hiding any previous result.
    /// Returns the snapshot the generator works from.
    pub fn begin_analysis(&mut self) -> Result<AnalysisInput, InputError> {
        if self.is_running() {
            return Err(InputError::Busy);
        }
        self.validate_ready_to_analyze()?;
        let input = match (&self.staged, self.mode) {
            (Some(file), mode) if mode.accepts_files() => AnalysisInput::Media {
                mode,
                name: file.name.clone(),
                size: file.size,
                media_type: file.media_type.clone(),
            },
            _ => AnalysisInput::Text { text: self.text.trim().to_string() },
        };
        self.phase = Phase::Running;
        self.run_id += 1;
        self.submitted = Some(input.clone());
        Ok(input)
    }

    /// Finish a run. Ignored unless one is in flight, so a stale
    /// completion can never show up after a reset.
    pub fn complete(&mut self, outcome: AnalysisOutcome) -> bool {
        if !self.is_running() {
            return false;
        }
        self.phase = Phase::Complete(outcome);
        true
    }

    /// Abandon a run without a result (teardown only).
    pub fn abort(&mut self) {
        if self.is_running() {
            self.phase = Phase::Idle;
        }
    }

    /// "New analysis": keep the mode, clear everything else.
    pub fn reset(&mut self) -> Result<(), InputError> {
        if self.is_running() {
            return Err(InputError::Busy);
        }
        self.clear_inputs();
        Ok(())
    }

    fn clear_inputs(&mut self) {
        self.text.clear();
        self.staged = None;
        self.submitted = None;
        self.phase = Phase::Idle;
    }
}
