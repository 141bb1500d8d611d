// File: src/core/playback.rs
use crate::core::types::GestureStep;
use std::time::Duration;

pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(800);

/// What the player shows for a single tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame<'a> {
    pub image_ref: &'a str,
    /// Caption under the image. Blank for space steps.
    pub caption: &'a str,
    /// 1-based position of this frame.
    pub position: usize,
    pub total: usize,
    /// Captions of every frame shown so far, this one included.
    pub completed: String,
}

/// A cursor that walks a step sequence one frame at a time.
///
/// The caller owns the timer; `interval` is just the pace it should use.
pub struct Playback<'a> {
    steps: &'a [GestureStep],
    next: usize,
    completed: String,
    interval: Duration,
}

impl<'a> Playback<'a> {
    pub fn new(steps: &'a [GestureStep]) -> Self {
        Self::with_interval(steps, DEFAULT_INTERVAL)
    }

    pub fn with_interval(steps: &'a [GestureStep], interval: Duration) -> Self {
        Self {
            steps,
            next: 0,
            completed: String::new(),
            interval,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_finished(&self) -> bool {
        self.next >= self.steps.len()
    }

    /// Starts over from the first step.
    pub fn reset(&mut self) {
        self.next = 0;
        self.completed.clear();
    }
}

impl<'a> Iterator for Playback<'a> {
    type Item = Frame<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let steps = self.steps;
        let step = steps.get(self.next)?;
        self.next += 1;

        if step.is_space {
            self.completed.push(' ');
        } else {
            self.completed.push_str(&step.label);
        }

        Some(Frame {
            image_ref: &step.image_ref,
            caption: if step.is_space { "" } else { &step.label },
            position: self.next,
            total: self.steps.len(),
            completed: self.completed.clone(),
        })
    }
}
