//! Cross-fade between two slides
//!
//! The carousel flips its index instantly; this only decides how opaque
//! each layer is while the switch is still settling on screen.

use std::time::{Duration, Instant};

/// Length of a cross-fade
pub const FADE_DURATION: Duration = Duration::from_millis(300);

/// Cubic ease-in-out over `t` in [0, 1]
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// A running cross-fade from slide `from` to slide `to`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fade {
    pub from: usize,
    pub to: usize,
    started: Instant,
}

impl Fade {
    pub fn new(from: usize, to: usize, started: Instant) -> Self {
        Self { from, to, started }
    }

    /// Eased progress, 0.0 at start and 1.0 once the fade is over
    pub fn progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started);
        ease_in_out(elapsed.as_secs_f32() / FADE_DURATION.as_secs_f32())
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= FADE_DURATION
    }

    /// Opacity of layer `index` at `now`. Layers not taking part are hidden.
    pub fn opacity(&self, index: usize, now: Instant) -> f32 {
        let progress = self.progress(now);
        if index == self.to {
            progress
        } else if index == self.from {
            1.0 - progress
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_endpoints() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(1.0), 1.0);
        assert!((ease_in_out(0.5) - 0.5).abs() < 1e-6);
        assert_eq!(ease_in_out(-1.0), 0.0);
        assert_eq!(ease_in_out(2.0), 1.0);
    }

    #[test]
    fn test_easing_is_monotonic() {
        let mut last = 0.0;
        for step in 0..=100 {
            let value = ease_in_out(step as f32 / 100.0);
            assert!(value >= last);
            last = value;
        }
    }

    #[test]
    fn test_opacity_over_time() {
        let start = Instant::now();
        let fade = Fade::new(0, 1, start);

        assert_eq!(fade.opacity(1, start), 0.0);
        assert_eq!(fade.opacity(0, start), 1.0);

        let middle = start + FADE_DURATION / 2;
        assert!((fade.opacity(1, middle) - 0.5).abs() < 1e-3);
        assert!((fade.opacity(0, middle) - 0.5).abs() < 1e-3);

        let end = start + FADE_DURATION;
        assert_eq!(fade.opacity(1, end), 1.0);
        assert_eq!(fade.opacity(0, end), 0.0);
        assert!(fade.is_finished(end));
        assert!(!fade.is_finished(middle));
    }

    #[test]
    fn test_bystanders_stay_hidden() {
        let start = Instant::now();
        let fade = Fade::new(2, 3, start);
        assert_eq!(fade.opacity(0, start + FADE_DURATION / 3), 0.0);
    }
}
