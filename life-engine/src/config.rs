use std::time::Duration;

const DEFAULT_TICK_MILLIS: u64 = 70;
const DEFAULT_PARALLEL_THRESHOLD: usize = 4096;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    pub tick_period: Duration,
    pub parallel_threshold: usize,
}

impl EngineConfig {
    pub fn with_tick_period(mut self, tick_period: Duration) -> Self {
        self.tick_period = tick_period;
        self
    }

    pub fn with_parallel_threshold(mut self, parallel_threshold: usize) -> Self {
        self.parallel_threshold = parallel_threshold;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tick_period: Duration::from_millis(DEFAULT_TICK_MILLIS),
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}
