use std::sync::{
    atomic::{AtomicU32, Ordering},
    Arc,
};

use primitives::Day;

/// The virtual day counter the whole exchange runs on.
///
/// Starts at [`Day::ZERO`] and only ever moves through [`VirtualClock::set`],
/// wall-clock time never advances it. Cloning yields a handle over the same
/// counter.
#[derive(Debug, Clone, Default)]
pub struct VirtualClock {
    today: Arc<AtomicU32>,
}

impl VirtualClock {
    pub fn new(today: Day) -> Self {
        Self {
            today: Arc::new(AtomicU32::new(today.to_u32())),
        }
    }

    pub fn today(&self) -> Day {
        Day::new(self.today.load(Ordering::SeqCst))
    }

    /// Jumps to the given day, moving backwards is allowed.
    pub fn set(&self, today: Day) {
        self.today.store(today.to_u32(), Ordering::SeqCst);
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn starts_at_day_zero_and_clones_share_the_counter() {
        let clock = VirtualClock::default();
        assert_eq!(Day::ZERO, clock.today());

        let handle = clock.clone();
        clock.set(Day::new(5));
        assert_eq!(Day::new(5), handle.today());

        handle.set(Day::new(2));
        assert_eq!(Day::new(2), clock.today());
    }
}
