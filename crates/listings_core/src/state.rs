use crate::view_model::SweepView;
use crate::{PageRange, StopReason};

/// Shape of one sweep. All three values are clamped to at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepSettings {
    per_page: u64,
    concurrent: u64,
    max_waves: u64,
}

impl SweepSettings {
    pub fn new(per_page: u64, concurrent: u64, max_waves: u64) -> Self {
        Self {
            per_page: per_page.max(1),
            concurrent: concurrent.max(1),
            max_waves: max_waves.max(1),
        }
    }

    pub fn per_page(&self) -> u64 {
        self.per_page
    }

    pub fn concurrent(&self) -> u64 {
        self.concurrent
    }

    pub fn max_waves(&self) -> u64 {
        self.max_waves
    }
}

impl Default for SweepSettings {
    fn default() -> Self {
        Self::new(20, 30, 2000)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Running,
    Stopped(StopReason),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepState {
    settings: SweepSettings,
    phase: Phase,
    next_page: u64,
    waves_started: u64,
    wave_in_flight: bool,
    total_emitted: u64,
}

impl SweepState {
    pub fn new(settings: SweepSettings) -> Self {
        Self {
            settings,
            phase: Phase::Idle,
            next_page: 0,
            waves_started: 0,
            wave_in_flight: false,
            total_emitted: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn total_emitted(&self) -> u64 {
        self.total_emitted
    }

    pub fn view(&self) -> SweepView {
        SweepView {
            phase: self.phase,
            waves_started: self.waves_started,
            next_page: self.next_page,
            total_emitted: self.total_emitted,
        }
    }

    pub(crate) fn is_awaiting_wave(&self) -> bool {
        self.phase == Phase::Running && self.wave_in_flight
    }

    pub(crate) fn start(&mut self) {
        self.phase = Phase::Running;
    }

    pub(crate) fn stop(&mut self, reason: StopReason) {
        self.phase = Phase::Stopped(reason);
        self.wave_in_flight = false;
    }

    pub(crate) fn can_start_wave(&self) -> bool {
        self.waves_started < self.settings.max_waves
    }

    /// Claims the next `concurrent` page indices and returns the 1-based wave
    /// number with its ranges in page order.
    pub(crate) fn begin_wave(&mut self) -> (u64, Vec<PageRange>) {
        let first = self.next_page;
        let ranges = (first..first + self.settings.concurrent)
            .map(|page| PageRange::for_page(page, self.settings.per_page))
            .collect();
        self.next_page += self.settings.concurrent;
        self.waves_started += 1;
        self.wave_in_flight = true;
        (self.waves_started, ranges)
    }

    pub(crate) fn settle_wave(&mut self, yielded: u64) {
        self.wave_in_flight = false;
        self.total_emitted += yielded;
    }
}

impl Default for SweepState {
    fn default() -> Self {
        Self::new(SweepSettings::default())
    }
}
