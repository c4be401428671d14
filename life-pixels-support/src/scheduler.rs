use life_engine::{Scheduler, TickToken};
use std::time::{Duration, Instant};

// Holds at most one tick; the controller never schedules a second one before the
// first is delivered or cancelled.
#[derive(Debug, Default)]
pub struct DeadlineScheduler {
    next: Option<(TickToken, Instant)>,
}

impl DeadlineScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.next.map(|(_, deadline)| deadline)
    }

    pub fn take_due(&mut self, now: Instant) -> Option<TickToken> {
        match self.next {
            Some((token, deadline)) if deadline <= now => {
                self.next = None;
                Some(token)
            }
            _ => None,
        }
    }
}

impl Scheduler for DeadlineScheduler {
    fn schedule_once(&mut self, token: TickToken, delay: Duration) {
        self.next = Some((token, Instant::now() + delay));
    }

    fn cancel(&mut self, token: TickToken) {
        if self.next.is_some_and(|(pending, _)| pending == token) {
            self.next = None;
        }
    }
}
