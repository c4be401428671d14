use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TickToken(u64);

impl TickToken {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Single-shot deferred ticks.
///
/// When a scheduled delay elapses, whoever drives the scheduler passes the token back
/// to `Controller::on_tick`. Cancelling is best effort: a token that was already on
/// its way is still rejected by the controller.
pub trait Scheduler {
    fn schedule_once(&mut self, token: TickToken, delay: Duration);
    fn cancel(&mut self, token: TickToken);
}

#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    pending: Vec<(Duration, TickToken)>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn num_pending(&self) -> usize {
        self.pending.len()
    }

    pub fn is_scheduled(&self, token: TickToken) -> bool {
        self.pending.iter().any(|&(_, pending)| pending == token)
    }

    pub fn pop_due(&mut self, until: Duration) -> Option<TickToken> {
        let (index, &(due, token)) = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, (due, _))| *due <= until)
            .min_by_key(|(_, (due, token))| (*due, *token))?;
        self.pending.remove(index);
        self.now = self.now.max(due);
        Some(token)
    }

    pub fn advance_to(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }
}

impl Scheduler for ManualScheduler {
    fn schedule_once(&mut self, token: TickToken, delay: Duration) {
        self.pending.push((self.now + delay, token));
    }

    fn cancel(&mut self, token: TickToken) {
        self.pending.retain(|&(_, pending)| pending != token);
    }
}
