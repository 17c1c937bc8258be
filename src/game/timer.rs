//! Logical-time scheduler for the game's delayed state changes.
//!
//! Timers are keyed by the simulation time passed into [`crate::game::Game::tick`], never
//! by wall-clock time. A timer only flips a mode flag when it fires; it never moves an
//! entity. Every timer records the game generation it was scheduled in so that
//! timers outliving a reset can be recognised and dropped.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::time::Duration;

/// What happens when a timer fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TimerKind {
    /// Ends the frightening identified by `epoch`.
    FrightenedExpired { ghost: usize, epoch: u32 },
    /// Moves a ghost on to its next patrol corner and re-arms itself.
    PatrolRotation { ghost: usize },
    /// Lets an eaten ghost back into play.
    GhostRespawn { ghost: usize, epoch: u32 },
    /// Ends Pac-Man's death spin.
    DyingFinished,
}

/// A scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timer {
    pub due: Duration,
    pub generation: u32,
    pub kind: TimerKind,
}

/// Min-heap of pending timers. Timers due at the same instant fire in scheduling order.
#[derive(Debug, Default)]
pub struct Scheduler {
    queue: BinaryHeap<Reverse<(Duration, u64, u32, TimerKind)>>,
    sequence: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, due: Duration, generation: u32, kind: TimerKind) {
        self.queue.push(Reverse((due, self.sequence, generation, kind)));
        self.sequence += 1;
    }

    /// Removes and returns the earliest timer due at or before `now`.
    pub fn pop_due(&mut self, now: Duration) -> Option<Timer> {
        let Reverse((due, ..)) = self.queue.peek()?;
        if *due > now {
            return None;
        }
        self.queue.pop().map(|Reverse((due, _, generation, kind))| Timer { due, generation, kind })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pop_due_respects_time_and_order() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(Duration::from_secs(2), 0, TimerKind::DyingFinished);
        scheduler.schedule(Duration::from_secs(1), 0, TimerKind::PatrolRotation { ghost: 1 });
        scheduler.schedule(Duration::from_secs(1), 0, TimerKind::PatrolRotation { ghost: 0 });

        assert_eq!(scheduler.pop_due(Duration::from_millis(500)), None);

        let first = scheduler.pop_due(Duration::from_secs(1)).unwrap();
        assert_eq!(first.kind, TimerKind::PatrolRotation { ghost: 1 });
        let second = scheduler.pop_due(Duration::from_secs(1)).unwrap();
        assert_eq!(second.kind, TimerKind::PatrolRotation { ghost: 0 });
        assert_eq!(scheduler.pop_due(Duration::from_secs(1)), None);

        let last = scheduler.pop_due(Duration::from_secs(5)).unwrap();
        assert_eq!(last.kind, TimerKind::DyingFinished);
        assert_eq!(scheduler.pop_due(Duration::from_secs(5)), None);
    }
}
