//! Eased scroll animation for in-page anchor navigation

use std::time::{Duration, Instant};

/// Easing curve applied to a normalized time `t` in `0..=1`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseOutCubic,
    EaseInOutCubic,
}

impl Easing {
    pub fn sample(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseOutCubic => {
                let u = 1.0 - t;
                1.0 - u * u * u
            }
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - (u * u * u) / 2.0
                }
            }
        }
    }
}

/// Scroll tween between two document offsets
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SmoothScroll {
    from: u32,
    to: u32,
    started: Instant,
    duration: Duration,
    easing: Easing,
}

impl SmoothScroll {
    pub fn new(from: u32, to: u32, started: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            started,
            duration: duration.max(Duration::from_millis(1)),
            easing: Easing::EaseInOutCubic,
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn target(&self) -> u32 {
        self.to
    }

    pub fn is_done(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.duration
    }

    /// Offset at `now`
    pub fn sample(&self, now: Instant) -> u32 {
        if self.is_done(now) {
            return self.to;
        }
        let elapsed = now.saturating_duration_since(self.started);
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        let eased = self.easing.sample(t);

        let from = self.from as f32;
        let to = self.to as f32;
        (from + (to - from) * eased).round().max(0.0) as u32
    }

    /// Redirect a running animation from its current position
    pub fn retarget(&mut self, now: Instant, to: u32) {
        let current = self.sample(now);
        *self = Self::new(current, to, now, self.duration).with_easing(self.easing);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_endpoints() {
        for easing in [Easing::Linear, Easing::EaseOutCubic, Easing::EaseInOutCubic] {
            assert_eq!(easing.sample(0.0), 0.0);
            assert_eq!(easing.sample(1.0), 1.0);
        }
        assert_eq!(Easing::EaseInOutCubic.sample(0.5), 0.5);
        assert!(Easing::EaseOutCubic.sample(0.5) > 0.5);
    }

    #[test]
    fn test_scroll_reaches_target() {
        let start = Instant::now();
        let scroll = SmoothScroll::new(0, 200, start, Duration::from_millis(400));

        assert_eq!(scroll.sample(start), 0);
        assert_eq!(scroll.sample(start + Duration::from_millis(200)), 100);
        assert!(!scroll.is_done(start + Duration::from_millis(399)));
        assert_eq!(scroll.sample(start + Duration::from_millis(400)), 200);
        assert!(scroll.is_done(start + Duration::from_secs(1)));
    }

    #[test]
    fn test_scroll_upwards_and_retarget() {
        let start = Instant::now();
        let mut scroll = SmoothScroll::new(300, 0, start, Duration::from_millis(100))
            .with_easing(Easing::Linear);
        let mid = start + Duration::from_millis(50);
        assert_eq!(scroll.sample(mid), 150);

        scroll.retarget(mid, 400);
        assert_eq!(scroll.sample(mid), 150);
        assert_eq!(scroll.target(), 400);
        assert_eq!(scroll.sample(mid + Duration::from_millis(100)), 400);
    }
}
