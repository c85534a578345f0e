//! Polling scheduler for the two periodic controller tasks.
//!
//! The scheduler never sleeps or spawns anything. The host loop passes in
//! the current instant and gets back the tasks that are due. Arming always
//! clears both tasks first, so a task can never be scheduled twice.

use std::time::{Duration, Instant};

/// Periodic task owned by a controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollTask {
    /// Stop playback at the segment end
    Boundary,
    /// Refresh the progress bar and time label
    Progress,
}

/// Periods for the two tasks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PollSettings {
    pub progress_interval: Duration,
    pub boundary_interval: Duration,
    /// Distance before the end time at which playback stops
    pub end_padding: f64,
}

impl Default for PollSettings {
    fn default() -> Self {
        Self {
            progress_interval: Duration::from_millis(500),
            boundary_interval: Duration::from_millis(300),
            end_padding: crate::segment::boundary::END_TIME_PADDING,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Timer {
    period: Duration,
    next: Instant,
}

impl Timer {
    fn new(period: Duration, now: Instant) -> Self {
        Self {
            period,
            next: now + period,
        }
    }

    fn fire_if_due(&mut self, now: Instant) -> bool {
        if now < self.next {
            return false;
        }
        self.next += self.period;
        // Fell behind by more than a period: resync instead of bursting
        if self.next <= now {
            self.next = now + self.period;
        }
        true
    }
}

/// Named periodic tasks with an idempotent start/stop contract.
#[derive(Debug)]
pub struct PollingScheduler {
    settings: PollSettings,
    progress: Option<Timer>,
    boundary: Option<Timer>,
}

impl PollingScheduler {
    pub fn new(settings: PollSettings) -> Self {
        Self {
            settings,
            progress: None,
            boundary: None,
        }
    }

    pub fn settings(&self) -> &PollSettings {
        &self.settings
    }

    /// Clear both tasks, then arm progress (and boundary when requested).
    ///
    /// # Arguments
    /// * `with_boundary` - Also arm the boundary check
    /// * `now` - Reference instant; first ticks fire one period later
    pub fn start(&mut self, with_boundary: bool, now: Instant) {
        self.stop();
        self.progress = Some(Timer::new(self.settings.progress_interval, now));
        if with_boundary {
            self.boundary = Some(Timer::new(self.settings.boundary_interval, now));
        }
    }

    /// Clear both tasks. Safe to call when nothing is armed.
    pub fn stop(&mut self) {
        self.progress = None;
        self.boundary = None;
    }

    pub fn is_armed(&self, task: PollTask) -> bool {
        match task {
            PollTask::Progress => self.progress.is_some(),
            PollTask::Boundary => self.boundary.is_some(),
        }
    }

    pub fn is_idle(&self) -> bool {
        self.progress.is_none() && self.boundary.is_none()
    }

    /// Tasks due at `now`, boundary first.
    ///
    /// Each returned task has its deadline advanced by one period.
    pub fn due(&mut self, now: Instant) -> Vec<PollTask> {
        let mut tasks = Vec::with_capacity(2);
        if let Some(timer) = self.boundary.as_mut() {
            if timer.fire_if_due(now) {
                tasks.push(PollTask::Boundary);
            }
        }
        if let Some(timer) = self.progress.as_mut() {
            if timer.fire_if_due(now) {
                tasks.push(PollTask::Progress);
            }
        }
        tasks
    }

    /// Earliest pending deadline, if anything is armed.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.progress, self.boundary) {
            (Some(p), Some(b)) => Some(p.next.min(b.next)),
            (Some(p), None) => Some(p.next),
            (None, Some(b)) => Some(b.next),
            (None, None) => None,
        }
    }
}
