//! Delayed actions owned by the character

#[derive(Debug, Clone)]
struct Timer<A> {
    remaining: f32,
    action: A,
}

/// Countdown timers advanced by simulation time
#[derive(Debug, Clone)]
pub struct TimerQueue<A> {
    timers: Vec<Timer<A>>,
}

impl<A> TimerQueue<A> {
    pub fn new() -> Self {
        Self { timers: Vec::new() }
    }

    /// Run `action` once `delay` seconds have elapsed
    pub fn schedule(&mut self, delay: f32, action: A) {
        self.timers.push(Timer {
            remaining: delay.max(0.0),
            action,
        });
    }

    /// Drop every pending timer
    pub fn cancel_all(&mut self) {
        if !self.timers.is_empty() {
            log::debug!("Cancelled {} pending timers", self.timers.len());
        }
        self.timers.clear();
    }

    /// Advance time and return the actions that came due, in the order they
    /// were scheduled
    pub fn advance(&mut self, delta_time: f32) -> Vec<A> {
        let mut due = Vec::new();
        let mut pending = Vec::with_capacity(self.timers.len());

        for mut timer in self.timers.drain(..) {
            timer.remaining -= delta_time;
            if timer.remaining <= 0.0 {
                due.push(timer.action);
            } else {
                pending.push(timer);
            }
        }

        self.timers = pending;
        due
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }
}

impl<A> Default for TimerQueue<A> {
    fn default() -> Self {
        Self::new()
    }
}
