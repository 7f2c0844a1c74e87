//! Section reveal animations
//!
//! Each section owns a [`ViewportObserver`]; when its signal flips on, the
//! section's entrance transition starts. Child elements (skill cards,
//! project cards) follow with a fixed stagger.

use std::time::{Duration, Instant};

use tracing::debug;

use super::navigation::Easing;
use super::{Bounds, ObserverOptions, Section, SectionLayout, ViewportObserver};
use crate::constants::page::{REVEAL_DURATION, STAGGER_STEP};

/// Entrance transition tied to one observed element
#[derive(Debug, Clone)]
pub struct Reveal {
    observer: ViewportObserver,
    delay: Duration,
    duration: Duration,
    children: usize,
    shown_at: Option<Instant>,
}

impl Reveal {
    pub fn new(options: ObserverOptions) -> Self {
        Self {
            observer: ViewportObserver::new(options),
            delay: Duration::ZERO,
            duration: REVEAL_DURATION,
            children: 0,
            shown_at: None,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Number of staggered children, used to know when the animation settles
    pub fn set_children(&mut self, children: usize) {
        self.children = children;
    }

    pub fn is_revealed(&self) -> bool {
        self.observer.in_view()
    }

    pub fn observer(&self) -> &ViewportObserver {
        &self.observer
    }

    /// Feed the element's box; returns whether the revealed flag flipped
    pub fn update(&mut self, target: Option<Bounds>, root: Bounds, now: Instant) -> bool {
        let was = self.observer.in_view();
        let is = self.observer.observe(target, root);

        if is && !was {
            self.shown_at = Some(now);
        } else if !is && was {
            self.shown_at = None;
        }
        is != was
    }

    /// Eased progress of the element itself, `0.0..=1.0`
    pub fn progress(&self, now: Instant) -> f32 {
        self.progress_after(now, Duration::ZERO)
    }

    /// Eased progress of the `index`-th staggered child
    pub fn staggered_progress(&self, now: Instant, index: usize) -> f32 {
        self.progress_after(now, stagger(index))
    }

    /// Some transition (own or child) is still running
    pub fn is_animating(&self, now: Instant) -> bool {
        match self.shown_at {
            Some(start) => {
                let settle = self.delay + stagger(self.children) + self.duration;
                now.saturating_duration_since(start) < settle
            }
            None => false,
        }
    }

    /// Restart the transition if currently revealed
    pub fn replay(&mut self, now: Instant) {
        if self.observer.in_view() {
            self.shown_at = Some(now);
        }
    }

    pub fn teardown(&mut self) {
        self.observer.disconnect();
    }

    fn progress_after(&self, now: Instant, extra: Duration) -> f32 {
        let Some(start) = self.shown_at else {
            return 0.0;
        };
        let elapsed = now.saturating_duration_since(start);
        let wait = self.delay + extra;
        if elapsed < wait {
            return 0.0;
        }
        let t = (elapsed - wait).as_secs_f32() / self.duration.as_secs_f32().max(f32::EPSILON);
        Easing::EaseOutCubic.sample(t)
    }
}

fn stagger(index: usize) -> Duration {
    STAGGER_STEP * u32::try_from(index).unwrap_or(u32::MAX)
}

/// Reveal state for every section of the page
#[derive(Debug, Clone)]
pub struct RevealController {
    reveals: Vec<(Section, Reveal)>,
}

impl Default for RevealController {
    fn default() -> Self {
        Self::new()
    }
}

impl RevealController {
    /// Per-section defaults: the hero plays once on load, the rest replay on re-entry
    pub fn new() -> Self {
        let reveal =
            |threshold: f64| Reveal::new(ObserverOptions::new(threshold).unwrap_or_default());
        let hero = Reveal::new(ObserverOptions::new(0.0).unwrap_or_default().once())
            .with_delay(Duration::from_millis(200));

        Self {
            reveals: vec![
                (Section::Hero, hero),
                (Section::About, reveal(0.2)),
                (Section::Skills, reveal(0.1).with_delay(Duration::from_millis(200))),
                (Section::Projects, reveal(0.1)),
                (Section::Contact, reveal(0.1)),
            ],
        }
    }

    pub fn get(&self, section: Section) -> Option<&Reveal> {
        self.reveals
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, r)| r)
    }

    pub fn get_mut(&mut self, section: Section) -> Option<&mut Reveal> {
        self.reveals
            .iter_mut()
            .find(|(s, _)| *s == section)
            .map(|(_, r)| r)
    }

    pub fn is_revealed(&self, section: Section) -> bool {
        self.get(section).is_some_and(Reveal::is_revealed)
    }

    /// Poll every section against the layout; returns whether any flag flipped
    pub fn update<L: SectionLayout + ?Sized>(&mut self, layout: &L, now: Instant) -> bool {
        let root = layout.viewport_bounds();
        let mut changed = false;
        for (section, reveal) in &mut self.reveals {
            if reveal.update(layout.section_bounds(*section), root, now) {
                debug!(section = %section, revealed = reveal.is_revealed(), "Reveal toggled");
                changed = true;
            }
        }
        changed
    }

    pub fn replay(&mut self, section: Section, now: Instant) {
        if let Some(reveal) = self.get_mut(section) {
            reveal.replay(now);
        }
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.reveals.iter().any(|(_, r)| r.is_animating(now))
    }

    pub fn teardown(&mut self) {
        for (_, reveal) in &mut self.reveals {
            reveal.teardown();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{ScrollHost, StackedDocument};

    const ROOT: Bounds = Bounds::new(0.0, 0.0, 80.0, 40.0);

    #[test]
    fn test_progress_waits_for_delay_and_stagger() {
        let start = Instant::now();
        let mut reveal = Reveal::new(ObserverOptions::default())
            .with_delay(Duration::from_millis(100))
            .with_duration(Duration::from_millis(200));
        reveal.set_children(3);

        assert!(reveal.update(Some(Bounds::new(0.0, 0.0, 80.0, 10.0)), ROOT, start));
        assert_eq!(reveal.progress(start + Duration::from_millis(50)), 0.0);
        assert_eq!(reveal.progress(start + Duration::from_millis(300)), 1.0);

        // Child 2 waits an extra 200ms
        assert_eq!(
            reveal.staggered_progress(start + Duration::from_millis(250), 2),
            0.0
        );
        assert!(reveal.staggered_progress(start + Duration::from_millis(350), 2) > 0.0);
        assert!(reveal.is_animating(start + Duration::from_millis(500)));
        assert!(!reveal.is_animating(start + Duration::from_millis(700)));
    }

    #[test]
    fn test_hiding_resets_progress() {
        let start = Instant::now();
        let mut reveal = Reveal::new(ObserverOptions::default());
        reveal.update(Some(Bounds::new(0.0, 0.0, 80.0, 10.0)), ROOT, start);
        assert!(reveal.update(Some(Bounds::new(0.0, 90.0, 80.0, 10.0)), ROOT, start));
        assert!(!reveal.is_revealed());
        assert_eq!(reveal.progress(start + Duration::from_secs(5)), 0.0);
    }

    #[test]
    fn test_controller_follows_document() {
        let now = Instant::now();
        let mut doc = StackedDocument::new(80, 40);
        for section in Section::ALL {
            doc.mount(section, 40);
        }
        let mut reveals = RevealController::new();

        reveals.update(&doc, now);
        assert!(reveals.is_revealed(Section::Hero));
        assert!(!reveals.is_revealed(Section::About));

        doc.scroll_to(80);
        reveals.update(&doc, now);
        assert!(reveals.is_revealed(Section::Skills));
        // Hero plays once and stays revealed
        assert!(reveals.is_revealed(Section::Hero));
        assert!(!reveals.is_revealed(Section::About));
    }

    #[test]
    fn test_replay_restarts_visible_section() {
        let start = Instant::now();
        let mut doc = StackedDocument::new(80, 40);
        doc.mount(Section::Projects, 40);
        let mut reveals = RevealController::new();
        reveals.update(&doc, start);

        let later = start + Duration::from_secs(10);
        assert!(!reveals.is_animating(later));
        reveals.replay(Section::Projects, later);
        assert!(reveals.is_animating(later));
        assert_eq!(
            reveals.get(Section::Projects).unwrap().progress(later),
            0.0
        );
    }

    #[test]
    fn test_teardown_disconnects_observers() {
        let mut reveals = RevealController::new();
        reveals.teardown();
        for section in Section::ALL {
            assert!(reveals.get(section).unwrap().observer().is_disconnected());
        }
    }
}
