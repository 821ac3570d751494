/// Where a count-up run currently is. Transitions only go forward:
/// `Idle -> Animating -> Settled`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    /// Not seen yet, value stays at 0.
    Idle,
    /// Seen. `started_at` is filled in by the first frame after that.
    Animating { started_at: Option<f64> },
    /// Reached the target, nothing changes from here on.
    Settled,
}

/// Whether the frame driver should ask for another frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Continue,
    Done,
}

/// State of one count-up display: counts from 0 to `target` over
/// `duration_ms` once it has been triggered.
#[derive(Debug, Clone, PartialEq)]
pub struct CountUp {
    target: u64,
    suffix: String,
    duration_ms: u32,
    value: u64,
    phase: Phase,
}

impl CountUp {
    pub fn new(target: u64, suffix: impl Into<String>, duration_ms: u32) -> Self {
        Self {
            target,
            suffix: suffix.into(),
            duration_ms,
            value: 0,
            phase: Phase::Idle,
        }
    }

    /// Handle a visibility signal. Returns true only when this call started
    /// the run and frames are now needed; later calls are no-ops.
    pub fn trigger(&mut self) -> bool {
        if self.phase != Phase::Idle {
            return false;
        }
        if self.target == 0 {
            // Nothing to count, show the final value right away
            self.phase = Phase::Settled;
            return false;
        }
        self.phase = Phase::Animating { started_at: None };
        true
    }

    /// Advance to the frame at `timestamp` (milliseconds, monotonic).
    pub fn advance(&mut self, timestamp: f64) -> Tick {
        let started_at = match self.phase {
            Phase::Idle | Phase::Settled => return Tick::Done,
            Phase::Animating { started_at: Some(t) } => t,
            Phase::Animating { started_at: None } => {
                self.phase = Phase::Animating { started_at: Some(timestamp) };
                timestamp
            }
        };

        let progress = self.progress(timestamp - started_at);
        if progress >= 1.0 {
            self.settle();
            return Tick::Done;
        }

        let next = (progress * self.target as f64).floor() as u64;
        self.value = next.clamp(self.value, self.target);
        Tick::Continue
    }

    /// Jump straight to the final value.
    pub fn settle(&mut self) {
        self.value = self.target;
        self.phase = Phase::Settled;
    }

    fn progress(&self, elapsed: f64) -> f64 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        (elapsed / self.duration_ms as f64).clamp(0.0, 1.0)
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_settled(&self) -> bool {
        self.phase == Phase::Settled
    }

    pub fn display(&self) -> String {
        format!("{}{}", self.value, self.suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to(counter: &mut CountUp, start: f64, elapsed: &[f64]) -> Vec<u64> {
        elapsed
            .iter()
            .map(|e| {
                counter.advance(start + e);
                counter.value()
            })
            .collect()
    }

    #[test]
    fn test_halfway_and_final_value() {
        let mut counter = CountUp::new(100, "+", 2000);
        assert!(counter.trigger());
        assert_eq!(counter.advance(500.0), Tick::Continue);
        assert_eq!(counter.advance(1500.0), Tick::Continue);
        assert_eq!(counter.value(), 50);
        assert_eq!(counter.advance(2500.0), Tick::Done);
        assert_eq!(counter.display(), "100+");
        assert!(counter.is_settled());
    }

    #[test]
    fn test_start_time_comes_from_first_frame() {
        let mut counter = CountUp::new(10, "", 1000);
        counter.trigger();
        assert_eq!(counter.phase(), Phase::Animating { started_at: None });
        counter.advance(42_000.0);
        assert_eq!(counter.phase(), Phase::Animating { started_at: Some(42_000.0) });
        assert_eq!(counter.value(), 0);
    }

    #[test]
    fn test_never_visible_stays_at_zero() {
        let mut counter = CountUp::new(5000, "+", 2000);
        assert_eq!(counter.advance(10_000.0), Tick::Done);
        assert_eq!(counter.advance(99_000.0), Tick::Done);
        assert_eq!(counter.display(), "0+");
        assert_eq!(counter.phase(), Phase::Idle);
    }

    #[test]
    fn test_zero_target_settles_immediately() {
        let mut counter = CountUp::new(0, " M+", 2000);
        assert!(!counter.trigger());
        assert!(counter.is_settled());
        assert_eq!(counter.display(), "0 M+");
    }

    #[test]
    fn test_exact_target_for_awkward_values() {
        for target in [1, 3, 7, 25, 999, 5000, 123_456_789] {
            let mut counter = CountUp::new(target, "", 2000);
            counter.trigger();
            counter.advance(0.0);
            counter.advance(1999.999);
            assert!(counter.value() < target);
            assert_eq!(counter.advance(2000.0), Tick::Done);
            assert_eq!(counter.value(), target);
        }
    }

    #[test]
    fn test_values_never_decrease() {
        let mut counter = CountUp::new(1000, "", 2000);
        counter.trigger();
        let elapsed: Vec<f64> = (0..140).map(|i| i as f64 * 16.7).collect();
        let values = run_to(&mut counter, 300.0, &elapsed);
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(values.last().copied(), Some(1000));
    }

    #[test]
    fn test_retrigger_after_settle_is_ignored() {
        let mut counter = CountUp::new(25, "+", 2000);
        counter.trigger();
        counter.advance(0.0);
        counter.advance(2000.0);
        assert!(!counter.trigger());
        assert_eq!(counter.advance(5000.0), Tick::Done);
        assert_eq!(counter.display(), "25+");
    }

    #[test]
    fn test_retrigger_mid_run_keeps_start() {
        let mut counter = CountUp::new(100, "", 2000);
        counter.trigger();
        counter.advance(1000.0);
        assert!(!counter.trigger());
        counter.advance(2000.0);
        assert_eq!(counter.value(), 50);
    }

    #[test]
    fn test_zero_duration_finishes_on_first_frame() {
        let mut counter = CountUp::new(40, "", 0);
        counter.trigger();
        assert_eq!(counter.advance(12.0), Tick::Done);
        assert_eq!(counter.value(), 40);
    }
}
