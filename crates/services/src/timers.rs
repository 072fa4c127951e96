//! Per-game virtual timeline for cancellable delays and repeating ticks.
//!
//! A game owns one `Timeline`; the host advances it with real elapsed time. At most one
//! one-shot delay and one repeating interval exist at any moment; scheduling a new one
//! replaces the old one. After `dispose` nothing ever fires again.

use std::time::Duration;

/// What became due while advancing the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fired<A> {
    Delay(A),
    Tick,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Repeating {
    period: Duration,
    next_due: Duration,
}

const MIN_PERIOD: Duration = Duration::from_millis(1);

#[derive(Debug)]
pub struct Timeline<A> {
    now: Duration,
    pending: Option<(Duration, A)>,
    repeating: Option<Repeating>,
    disposed: bool,
}

impl<A> Default for Timeline<A> {
    fn default() -> Self {
        Self {
            now: Duration::ZERO,
            pending: None,
            repeating: None,
            disposed: false,
        }
    }
}

impl<A> Timeline<A> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed since the timeline was created.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Run `action` after `after`, replacing any pending one-shot.
    pub fn schedule(&mut self, after: Duration, action: A) {
        if self.disposed {
            return;
        }
        self.pending = Some((self.now + after, action));
    }

    pub fn cancel(&mut self) -> Option<A> {
        self.pending.take().map(|(_, action)| action)
    }

    #[must_use]
    pub fn pending(&self) -> Option<&A> {
        self.pending.as_ref().map(|(_, action)| action)
    }

    /// Start ticking every `period` from now, replacing any running interval.
    pub fn start_interval(&mut self, period: Duration) {
        if self.disposed {
            return;
        }
        let period = period.max(MIN_PERIOD);
        self.repeating = Some(Repeating {
            period,
            next_due: self.now + period,
        });
    }

    pub fn stop_interval(&mut self) {
        self.repeating = None;
    }

    #[must_use]
    pub fn interval(&self) -> Option<Duration> {
        self.repeating.map(|repeating| repeating.period)
    }

    /// Drop everything scheduled and refuse new work.
    pub fn dispose(&mut self) {
        self.pending = None;
        self.repeating = None;
        self.disposed = true;
    }

    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Pop the earliest callback due at or before `until`, moving the clock to its due time.
    ///
    /// On a tie the one-shot fires before the tick.
    pub fn pop_due(&mut self, until: Duration) -> Option<Fired<A>> {
        if self.disposed {
            return None;
        }
        let delay_due = self
            .pending
            .as_ref()
            .map(|(due, _)| *due)
            .filter(|due| *due <= until);
        let tick_due = self
            .repeating
            .map(|repeating| repeating.next_due)
            .filter(|due| *due <= until);

        match (delay_due, tick_due) {
            (Some(delay), tick) if tick.is_none_or(|tick| delay <= tick) => {
                self.now = self.now.max(delay);
                self.pending.take().map(|(_, action)| Fired::Delay(action))
            }
            (_, Some(tick)) => {
                self.now = self.now.max(tick);
                if let Some(repeating) = self.repeating.as_mut() {
                    repeating.next_due += repeating.period;
                }
                Some(Fired::Tick)
            }
            _ => None,
        }
    }

    /// Move the clock to `until` once everything due has been popped.
    pub fn settle(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn drain(timeline: &mut Timeline<&'static str>, until: Duration) -> Vec<Fired<&'static str>> {
        let mut fired = Vec::new();
        while let Some(event) = timeline.pop_due(until) {
            fired.push(event);
        }
        timeline.settle(until);
        fired
    }

    #[test]
    fn delay_fires_once_at_its_due_time() {
        let mut timeline = Timeline::new();
        timeline.schedule(ms(1500), "advance");
        assert!(drain(&mut timeline, ms(1499)).is_empty());
        assert_eq!(drain(&mut timeline, ms(1500)), vec![Fired::Delay("advance")]);
        assert!(drain(&mut timeline, ms(5000)).is_empty());
    }

    #[test]
    fn scheduling_replaces_the_pending_delay() {
        let mut timeline = Timeline::new();
        timeline.schedule(ms(1000), "first");
        timeline.schedule(ms(500), "second");
        assert_eq!(drain(&mut timeline, ms(2000)), vec![Fired::Delay("second")]);
    }

    #[test]
    fn interval_ticks_in_order_with_delays() {
        let mut timeline = Timeline::new();
        timeline.start_interval(ms(1000));
        timeline.schedule(ms(1000), "retry");
        assert_eq!(
            drain(&mut timeline, ms(2500)),
            vec![Fired::Delay("retry"), Fired::Tick, Fired::Tick]
        );
        assert_eq!(timeline.now(), ms(2500));
    }

    #[test]
    fn restarting_an_interval_restarts_its_phase() {
        let mut timeline: Timeline<&'static str> = Timeline::new();
        timeline.start_interval(ms(100));
        drain(&mut timeline, ms(150));
        timeline.start_interval(ms(300));
        assert!(drain(&mut timeline, ms(449)).is_empty());
        assert_eq!(drain(&mut timeline, ms(450)), vec![Fired::Tick]);
    }

    #[test]
    fn disposed_timeline_never_fires() {
        let mut timeline = Timeline::new();
        timeline.schedule(ms(10), "late");
        timeline.start_interval(ms(10));
        timeline.dispose();
        timeline.schedule(ms(10), "after");
        assert!(drain(&mut timeline, ms(1000)).is_empty());
        assert!(timeline.pending().is_none());
        assert!(timeline.is_disposed());
    }
}
