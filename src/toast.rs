//! Transient "Copied" notification.
//!
//! Each copy bumps a generation counter and arms a dismissal timer stamped
//! with it. A timer only hides the toast if no newer copy happened since, so
//! copying the same name twice never hides the second toast early.

use std::time::{Duration, Instant};

use crate::model::TOAST_DURATION;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DismissTimer {
    deadline: Instant,
    generation: u64,
}

#[derive(Debug, Clone)]
pub struct ToastState {
    current: Option<String>,
    generation: u64,
    timers: Vec<DismissTimer>,
    duration: Duration,
}

impl Default for ToastState {
    fn default() -> Self {
        Self::new(TOAST_DURATION)
    }
}

impl ToastState {
    pub fn new(duration: Duration) -> Self {
        Self {
            current: None,
            generation: 0,
            timers: Vec::new(),
            duration,
        }
    }

    /// Shows `name` and arms a dismissal timer.
    pub fn show(&mut self, name: &str, now: Instant) {
        self.generation += 1;
        self.current = Some(name.to_string());
        self.timers.push(DismissTimer {
            deadline: now + self.duration,
            generation: self.generation,
        });
    }

    /// Fires every timer due at `now`. Returns true if the toast was hidden.
    pub fn tick(&mut self, now: Instant) -> bool {
        let generation = self.generation;
        let mut hide = false;
        self.timers.retain(|timer| {
            if timer.deadline > now {
                return true;
            }
            hide |= timer.generation == generation;
            false
        });
        if hide && self.current.is_some() {
            self.current = None;
            return true;
        }
        false
    }

    /// Earliest pending timer, for scheduling a repaint.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.iter().map(|t| t.deadline).min()
    }

    /// The name currently shown.
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// The displayed text, e.g. `Copied: star.fill`.
    pub fn message(&self) -> Option<String> {
        self.current.as_ref().map(|name| format!("Copied: {}", name))
    }

    /// Hides the toast and drops pending timers.
    pub fn clear(&mut self) {
        self.current = None;
        self.timers.clear();
    }
}
