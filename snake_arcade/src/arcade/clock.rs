use std::thread;
use std::time::{Duration, Instant};

/// Paces the loop to a fixed frame rate by sleeping until the next boundary.
#[derive(Debug)]
pub struct FrameClock {
    frame: Duration,
    last: Instant,
    next: Instant,
}

impl FrameClock {
    pub fn new(frame: Duration) -> Self {
        let now = Instant::now();
        Self {
            frame,
            last: now,
            next: now + frame,
        }
    }

    pub fn frame(&self) -> Duration {
        self.frame
    }

    /// Suspends until the next frame boundary and returns the time since the
    /// previous tick. A late frame re-anchors the schedule instead of
    /// catching up in a burst.
    pub fn tick(&mut self) -> Duration {
        let before = Instant::now();
        let late = before >= self.next;
        if !late {
            thread::sleep(self.next - before);
        }
        let now = Instant::now();
        if late {
            self.next = now + self.frame;
        } else {
            self.next += self.frame;
        }
        let elapsed = now - self.last;
        self.last = now;
        elapsed
    }
}
