use crate::animation::{
    ease::Ease,
    value::{ValueTree, interpolate},
};

/// Frame-stepped tween between two value trees.
///
/// The tween itself holds no clock; callers pass the time elapsed since the run started and
/// get back the state to apply for that frame.
#[derive(Clone, Debug)]
pub struct Tween {
    from: ValueTree,
    to: ValueTree,
    delay_ms: f64,
    duration_ms: f64,
    ease: Ease,
}

/// What a tween produces for one point in time.
#[derive(Clone, Debug, PartialEq)]
pub enum TweenSample {
    /// Still inside the delay window; nothing to apply.
    Pending,
    /// State for this frame. `done` is set on the final frame, whose state equals `to`.
    Frame { state: ValueTree, done: bool },
}

impl Tween {
    pub fn new(from: ValueTree, to: ValueTree, delay_ms: f64, duration_ms: f64, ease: Ease) -> Self {
        Self {
            from,
            to,
            delay_ms: delay_ms.max(0.0),
            duration_ms: duration_ms.max(0.0),
            ease,
        }
    }

    /// Total span of the run including the delay.
    pub fn total_ms(&self) -> f64 {
        self.delay_ms + self.duration_ms
    }

    /// Linear progress in `[0, 1]`, or `None` while the delay has not elapsed or `elapsed_ms`
    /// is not finite.
    pub fn fraction(&self, elapsed_ms: f64) -> Option<f64> {
        let active = elapsed_ms - self.delay_ms;
        if !active.is_finite() || active < 0.0 {
            return None;
        }
        if self.duration_ms <= 0.0 {
            return Some(1.0);
        }
        Some((active / self.duration_ms).min(1.0))
    }

    pub fn sample(&self, elapsed_ms: f64) -> TweenSample {
        match self.fraction(elapsed_ms) {
            None => TweenSample::Pending,
            Some(t) if t >= 1.0 => TweenSample::Frame {
                state: self.to.clone(),
                done: true,
            },
            Some(t) => TweenSample::Frame {
                state: interpolate(&self.from, &self.to, t, self.ease),
                done: false,
            },
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;
