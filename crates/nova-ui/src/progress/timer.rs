use std::sync::{Arc, Mutex};
use std::time::Duration;

use nova_config::ProgressConfig;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, trace};

use crate::surface::ProgressSurface;

use super::fill::fill_percent;

/// Shortest sampling period; a zero period would stall the interval.
const MIN_TICK: Duration = Duration::from_millis(1);

/// Generation counter shared with the sampling tasks.
///
/// `abort` only lands at a task's next `.await`, so a sample already running
/// on another worker could still write after a newer `show`. Tasks write
/// while holding the lock and only if their generation is current.
#[derive(Default)]
pub(super) struct Epoch {
    current: Mutex<u64>,
}

impl Epoch {
    /// Invalidate every running generation and return the new one.
    pub(super) fn advance(&self) -> u64 {
        match self.current.lock() {
            Ok(mut g) => {
                *g += 1;
                *g
            }
            Err(_) => 0,
        }
    }

    /// Run `write` only if `generation` is still current.
    pub(super) fn run_if(&self, generation: u64, write: impl FnOnce()) -> bool {
        match self.current.lock() {
            Ok(g) if *g == generation => {
                write();
                true
            }
            _ => false,
        }
    }
}

/// Owns the single active progress animation.
///
/// Starting a new animation or hiding the bar aborts the previous sampling
/// task, including a pending post-completion hide. A stale task that is
/// mid-sample when that happens makes no further surface writes.
pub struct ProgressTimer {
    surface: Arc<dyn ProgressSurface>,
    runtime: Handle,
    epoch: Arc<Epoch>,
    tick: Duration,
    grace: Duration,
    active: Option<ActiveProgress>,
}

struct ActiveProgress {
    label: String,
    task: JoinHandle<()>,
}

impl ProgressTimer {
    pub fn new(surface: Arc<dyn ProgressSurface>, runtime: Handle, config: &ProgressConfig) -> Self {
        Self {
            surface,
            runtime,
            epoch: Arc::new(Epoch::default()),
            tick: config.tick().max(MIN_TICK),
            grace: config.grace(),
            active: None,
        }
    }

    /// Show the bar with `label` and animate it over `duration_ms`.
    pub fn show(&mut self, label: &str, duration_ms: f64) {
        let generation = self.cancel();

        self.surface.set_label(label);
        self.surface.set_fill(0.0);
        self.surface.set_visible(true);

        let started = Instant::now();
        debug!(label, duration_ms, "progress started");
        let task = self.runtime.spawn(animate(
            Arc::clone(&self.surface),
            Arc::clone(&self.epoch),
            generation,
            started,
            duration_ms,
            self.tick,
            self.grace,
        ));
        self.active = Some(ActiveProgress {
            label: label.to_string(),
            task,
        });
    }

    /// Cancel any running animation and hide the bar immediately.
    ///
    /// The fill is left where it was.
    pub fn hide(&mut self) {
        self.cancel();
        self.surface.set_visible(false);
    }

    /// Whether an animation (or its completion delay) is still pending.
    pub fn is_running(&self) -> bool {
        self.active
            .as_ref()
            .is_some_and(|active| !active.task.is_finished())
    }

    /// Label of the animation that is still pending, if any.
    pub fn label(&self) -> Option<&str> {
        self.active
            .as_ref()
            .filter(|active| !active.task.is_finished())
            .map(|active| active.label.as_str())
    }

    /// Stop the current animation and return the next generation.
    fn cancel(&mut self) -> u64 {
        let generation = self.epoch.advance();
        if let Some(active) = self.active.take() {
            if !active.task.is_finished() {
                debug!(label = %active.label, "progress cancelled");
            }
            active.task.abort();
        }
        generation
    }
}

impl Drop for ProgressTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

pub(super) async fn animate(
    surface: Arc<dyn ProgressSurface>,
    epoch: Arc<Epoch>,
    generation: u64,
    started: Instant,
    duration_ms: f64,
    tick: Duration,
    grace: Duration,
) {
    let mut interval = tokio::time::interval_at(started + tick, tick);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        interval.tick().await;
        let progress = fill_percent(started.elapsed(), duration_ms);
        trace!(progress, "progress sample");
        if !epoch.run_if(generation, || surface.set_fill(progress)) {
            return;
        }
        if progress >= 100.0 {
            break;
        }
    }

    tokio::time::sleep(grace).await;
    let hidden = epoch.run_if(generation, || {
        surface.set_visible(false);
        surface.set_fill(0.0);
    });
    if hidden {
        debug!("progress completed");
    }
}
