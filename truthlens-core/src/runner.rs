//! Simulated processing latency.
//!
//! A run is planned up front (so the random duration is drawn once), then
//! played back against a [`Scheduler`]. The browser schedules with
//! `setTimeout`; tests use a scheduler that resolves immediately and
//! records what it was asked to wait for.

use rand::Rng;
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::RunError;

pub type Sleep = Pin<Box<dyn Future<Output = ()>>>;

pub trait Scheduler {
    fn sleep(&self, ms: u32) -> Sleep;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProgressStyle {
    /// Indeterminate spinner held for a duration uniform in `[min_ms, max_ms)`.
    Spinner { min_ms: u32, max_ms: u32 },
    /// One caption per step, bar filling linearly to 100%.
    Stepped { captions: Vec<String>, step_ms: u32 },
}

/// What the progress view should show right now.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Progress {
    pub caption: Option<String>,
    /// `None` for the indeterminate spinner.
    pub percent: Option<u8>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Step {
    wait_ms: u32,
    after: Progress,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunPlan {
    initial: Progress,
    steps: Vec<Step>,
}

impl RunPlan {
    pub fn new<R: Rng + ?Sized>(style: &ProgressStyle, rng: &mut R) -> Self {
        match style {
            ProgressStyle::Spinner { min_ms, max_ms } => {
                let wait_ms = if max_ms > min_ms { rng.gen_range(*min_ms..*max_ms) } else { *min_ms };
                let spinning = Progress { caption: None, percent: None };
                Self {
                    initial: spinning.clone(),
                    steps: vec![Step { wait_ms, after: spinning }],
                }
            }
            ProgressStyle::Stepped { captions, step_ms } => {
                let n = captions.len();
                let caption = |i: usize| captions.get(i.min(n.saturating_sub(1))).cloned();
                let steps = (1..=n)
                    .map(|i| Step {
                        wait_ms: *step_ms,
                        after: Progress {
                            caption: caption(i),
                            percent: Some((i * 100 / n) as u8),
                        },
                    })
                    .collect();
                Self {
                    initial: Progress { caption: caption(0), percent: Some(0) },
                    steps,
                }
            }
        }
    }

    pub fn total_ms(&self) -> u32 {
        self.steps.iter().map(|s| s.wait_ms).sum()
    }

    pub fn initial(&self) -> &Progress {
        &self.initial
    }
}

/// Shared flag checked between steps.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Play back a plan. Emits the initial progress immediately, then one
/// update after each wait. Returns early with `Cancelled` if the token is
/// set before or during a wait.
pub async fn run<S, F>(plan: RunPlan, scheduler: &S, cancel: &CancelToken, mut on_progress: F) -> Result<(), RunError>
where
    S: Scheduler + ?Sized,
    F: FnMut(Progress),
{
    log::info!("simulated run started ({} ms)", plan.total_ms());
    on_progress(plan.initial);
    for step in plan.steps {
        if cancel.is_cancelled() {
            return Err(RunError::Cancelled);
        }
        scheduler.sleep(step.wait_ms).await;
        if cancel.is_cancelled() {
            return Err(RunError::Cancelled);
        }
        on_progress(step.after);
    }
    log::info!("simulated run finished");
    Ok(())
}
