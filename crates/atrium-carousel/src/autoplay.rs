//! Auto-advance timer bookkeeping for the hero banner.
//!
//! The platform timer lives in the UI layer; this type decides when it should be armed,
//! and tags every arming with a generation so that ticks from a replaced or cancelled
//! timer are dropped.

use std::time::Duration;

use crate::controller::CarouselController;

/// Default hero rotation period.
pub const DEFAULT_HERO_INTERVAL: Duration = Duration::from_millis(6_000);

/// Instruction for the platform timer after a [`AutoAdvance::sync`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rearm {
    /// Drop any running timer and start a new one with this period.
    Start {
        /// Tick period.
        interval: Duration,
        /// Generation to pass back with each tick.
        generation: u64,
    },
    /// Drop any running timer.
    Stop,
    /// Leave the running timer alone.
    Keep,
}

/// Tracks whether the hero timer should run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AutoAdvance {
    armed: Option<(usize, Duration)>,
    generation: u64,
}

impl AutoAdvance {
    /// Idle bookkeeping.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            armed: None,
            generation: 0,
        }
    }

    /// Reconcile with the current slide count and interval.
    ///
    /// The timer runs only with at least two slides and a non-zero interval; any change in
    /// either input re-arms it.
    pub const fn sync(&mut self, item_count: usize, interval: Duration) -> Rearm {
        let wanted = item_count >= 2 && !interval.is_zero();
        let armed = self.armed;
        match armed {
            Some((count, period))
                if wanted && count == item_count && period.as_nanos() == interval.as_nanos() =>
            {
                Rearm::Keep
            }
            _ if wanted => {
                self.generation = self.generation.wrapping_add(1);
                self.armed = Some((item_count, interval));
                Rearm::Start {
                    interval,
                    generation: self.generation,
                }
            }
            None => Rearm::Keep,
            Some(_) => {
                self.cancel();
                Rearm::Stop
            }
        }
    }

    /// Forget the running timer (teardown). Pending ticks become stale.
    pub const fn cancel(&mut self) {
        self.armed = None;
        self.generation = self.generation.wrapping_add(1);
    }

    /// Whether a timer is expected to be running.
    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    /// Generation of the most recent arming.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether a tick tagged with `generation` belongs to the running timer.
    #[must_use]
    pub const fn is_current(&self, generation: u64) -> bool {
        self.armed.is_some() && generation == self.generation
    }

    /// Deliver a tick. Stale generations are ignored; live ones advance the carousel.
    pub const fn tick(&self, generation: u64, carousel: &mut CarouselController) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        carousel.next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atrium_i18n::TextDirection;

    fn started(rearm: Rearm) -> u64 {
        match rearm {
            Rearm::Start { generation, .. } => generation,
            other => panic!("expected start, got {other:?}"),
        }
    }

    #[test]
    fn ticks_wrap_the_hero() {
        let mut hero = CarouselController::hero(3, TextDirection::Ltr);
        let mut timer = AutoAdvance::new();
        let generation = started(timer.sync(3, DEFAULT_HERO_INTERVAL));
        for expected in [1, 2, 0, 1] {
            assert!(timer.tick(generation, &mut hero));
            assert_eq!(hero.index(), expected);
        }
    }

    #[test]
    fn single_slide_never_arms() {
        let mut timer = AutoAdvance::new();
        assert_eq!(timer.sync(1, DEFAULT_HERO_INTERVAL), Rearm::Keep);
        assert_eq!(timer.sync(0, DEFAULT_HERO_INTERVAL), Rearm::Keep);
        assert!(!timer.is_armed());
    }

    #[test]
    fn unchanged_inputs_keep_the_timer() {
        let mut timer = AutoAdvance::new();
        started(timer.sync(3, DEFAULT_HERO_INTERVAL));
        assert_eq!(timer.sync(3, DEFAULT_HERO_INTERVAL), Rearm::Keep);
    }

    #[test]
    fn changed_inputs_rearm_and_orphan_old_ticks() {
        let mut hero = CarouselController::hero(4, TextDirection::Ltr);
        let mut timer = AutoAdvance::new();
        let first = started(timer.sync(3, DEFAULT_HERO_INTERVAL));
        let second = started(timer.sync(4, DEFAULT_HERO_INTERVAL));
        assert_ne!(first, second);
        assert!(!timer.is_current(first));
        assert!(timer.is_current(second));
        assert!(!timer.tick(first, &mut hero));
        assert_eq!(hero.index(), 0);
        assert!(timer.tick(second, &mut hero));
    }

    #[test]
    fn cancel_and_shrink_stop_the_timer() {
        let mut hero = CarouselController::hero(3, TextDirection::Ltr);
        let mut timer = AutoAdvance::new();
        let generation = started(timer.sync(3, DEFAULT_HERO_INTERVAL));
        timer.cancel();
        assert!(!timer.tick(generation, &mut hero));
        assert_eq!(hero.index(), 0);

        started(timer.sync(3, DEFAULT_HERO_INTERVAL));
        assert_eq!(timer.sync(1, DEFAULT_HERO_INTERVAL), Rearm::Stop);
        assert!(!timer.is_armed());
    }
}
