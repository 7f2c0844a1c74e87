//! Viewport observation
//!
//! Bounding-box polling behind a boolean "in view" signal. Each frame the
//! host hands the observer the target's current box and the viewport; the
//! observer grows the viewport by its root margin and compares the visible
//! fraction of the target against its threshold.

use std::fmt;
use std::str::FromStr;

use tracing::trace;

use super::Bounds;
use crate::error::{FolioError, Result};

/// One side of a root margin
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MarginLength {
    Px(f64),
    Percent(f64),
}

impl MarginLength {
    fn resolve(self, basis: f64) -> f64 {
        match self {
            MarginLength::Px(v) => v,
            MarginLength::Percent(p) => basis * p / 100.0,
        }
    }
}

impl FromStr for MarginLength {
    type Err = FolioError;

    fn from_str(token: &str) -> Result<Self> {
        let invalid = || FolioError::InvalidRootMargin(token.to_string());
        let parse = |n: &str| n.parse::<f64>().ok().filter(|v| v.is_finite());

        if token == "0" {
            return Ok(MarginLength::Px(0.0));
        }
        if let Some(n) = token.strip_suffix("px") {
            return parse(n).map(MarginLength::Px).ok_or_else(invalid);
        }
        if let Some(n) = token.strip_suffix('%') {
            return parse(n).map(MarginLength::Percent).ok_or_else(invalid);
        }
        Err(invalid())
    }
}

impl fmt::Display for MarginLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarginLength::Px(v) => write!(f, "{v}px"),
            MarginLength::Percent(p) => write!(f, "{p}%"),
        }
    }
}

/// Margin around the viewport, in CSS shorthand order
///
/// Negative values shrink the root. Percentages resolve against the root's
/// height for top/bottom and its width for left/right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootMargin {
    pub top: MarginLength,
    pub right: MarginLength,
    pub bottom: MarginLength,
    pub left: MarginLength,
}

impl Default for RootMargin {
    fn default() -> Self {
        let zero = MarginLength::Px(0.0);
        Self {
            top: zero,
            right: zero,
            bottom: zero,
            left: zero,
        }
    }
}

impl FromStr for RootMargin {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self> {
        let tokens = s
            .split_whitespace()
            .map(MarginLength::from_str)
            .collect::<Result<Vec<_>>>()?;

        let (top, right, bottom, left) = match tokens.as_slice() {
            [all] => (*all, *all, *all, *all),
            [vertical, horizontal] => (*vertical, *horizontal, *vertical, *horizontal),
            [top, horizontal, bottom] => (*top, *horizontal, *bottom, *horizontal),
            [top, right, bottom, left] => (*top, *right, *bottom, *left),
            _ => return Err(FolioError::InvalidRootMargin(s.to_string())),
        };
        Ok(Self {
            top,
            right,
            bottom,
            left,
        })
    }
}

impl RootMargin {
    /// Grow (or shrink) a root box by this margin
    pub fn expand(&self, root: Bounds) -> Bounds {
        let top = self.top.resolve(root.height);
        let bottom = self.bottom.resolve(root.height);
        let left = self.left.resolve(root.width);
        let right = self.right.resolve(root.width);

        Bounds::new(
            root.left - left,
            root.top - top,
            (root.width + left + right).max(0.0),
            (root.height + top + bottom).max(0.0),
        )
    }
}

/// Visible fraction of `target` inside `root`
///
/// `None` when the boxes do not touch at all. A zero-area target that touches
/// the root counts as fully visible.
pub fn intersection_ratio(target: Bounds, root: Bounds) -> Option<f64> {
    let overlap = target.intersection(&root)?;
    let area = target.area();
    if area <= 0.0 {
        return Some(1.0);
    }
    Some((overlap.area() / area).clamp(0.0, 1.0))
}

/// Observation parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverOptions {
    threshold: f64,
    root_margin: RootMargin,
    once: bool,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: RootMargin::default(),
            once: false,
        }
    }
}

impl ObserverOptions {
    /// Options with a visibility threshold in `0..=1`
    pub fn new(threshold: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(FolioError::InvalidThreshold(threshold));
        }
        Ok(Self {
            threshold,
            ..Self::default()
        })
    }

    /// Set the root margin from CSS shorthand (`"0px"`, `"-10% 0px"`, ...)
    pub fn root_margin(mut self, margin: &str) -> Result<Self> {
        self.root_margin = margin.parse()?;
        Ok(self)
    }

    /// Stop observing after the first time the target becomes visible
    pub fn once(mut self) -> Self {
        self.once = true;
        self
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn margin(&self) -> &RootMargin {
        &self.root_margin
    }

    pub fn is_once(&self) -> bool {
        self.once
    }

    /// Whether a ratio (or no intersection) passes the threshold
    fn passes(&self, ratio: Option<f64>) -> bool {
        match ratio {
            None => false,
            Some(_) if self.threshold == 0.0 => true,
            Some(r) => r >= self.threshold,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ObserverState {
    /// Target not yet in the document
    Waiting,
    Observing,
    /// Torn down, or frozen after a `once` hit
    Disconnected,
}

/// Per-element visibility signal
#[derive(Debug, Clone)]
pub struct ViewportObserver {
    options: ObserverOptions,
    state: ObserverState,
    in_view: bool,
}

impl ViewportObserver {
    pub fn new(options: ObserverOptions) -> Self {
        Self {
            options,
            state: ObserverState::Waiting,
            in_view: false,
        }
    }

    pub fn options(&self) -> &ObserverOptions {
        &self.options
    }

    pub fn in_view(&self) -> bool {
        self.in_view
    }

    /// Observation has started and not yet ended
    pub fn is_observing(&self) -> bool {
        self.state == ObserverState::Observing
    }

    pub fn is_disconnected(&self) -> bool {
        self.state == ObserverState::Disconnected
    }

    /// Feed the target's current box; returns the signal after the update
    ///
    /// A `None` target before the first sighting keeps the observer waiting;
    /// afterwards it is ignored and the last signal holds.
    pub fn observe(&mut self, target: Option<Bounds>, root: Bounds) -> bool {
        match self.state {
            ObserverState::Disconnected => return self.in_view,
            ObserverState::Waiting if target.is_some() => {
                trace!("Observation started");
                self.state = ObserverState::Observing;
            }
            ObserverState::Waiting | ObserverState::Observing => {}
        }
        let Some(target) = target else {
            return self.in_view;
        };

        let root = self.options.root_margin.expand(root);
        let visible = self.options.passes(intersection_ratio(target, root));

        if visible {
            self.in_view = true;
            if self.options.once {
                self.state = ObserverState::Disconnected;
            }
        } else {
            self.in_view = false;
        }
        self.in_view
    }

    /// Stop observing; the current signal is kept
    pub fn disconnect(&mut self) {
        self.state = ObserverState::Disconnected;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOT: Bounds = Bounds::new(0.0, 0.0, 100.0, 100.0);

    fn at(top: f64) -> Option<Bounds> {
        Some(Bounds::new(0.0, top, 100.0, 50.0))
    }

    #[test]
    fn test_root_margin_shorthand() {
        let one: RootMargin = "10px".parse().unwrap();
        assert_eq!(one.left, MarginLength::Px(10.0));

        let two: RootMargin = "-10% 5px".parse().unwrap();
        assert_eq!(two.top, MarginLength::Percent(-10.0));
        assert_eq!(two.bottom, MarginLength::Percent(-10.0));
        assert_eq!(two.right, MarginLength::Px(5.0));

        let three: RootMargin = "1px 2px 3px".parse().unwrap();
        assert_eq!(three.left, MarginLength::Px(2.0));
        assert_eq!(three.bottom, MarginLength::Px(3.0));

        assert_eq!("0".parse::<RootMargin>().unwrap(), RootMargin::default());
        assert!("".parse::<RootMargin>().is_err());
        assert!("10em".parse::<RootMargin>().is_err());
        assert!("1px 2px 3px 4px 5px".parse::<RootMargin>().is_err());
    }

    #[test]
    fn test_margin_expands_root() {
        let margin: RootMargin = "-10% 0px".parse().unwrap();
        let root = margin.expand(ROOT);
        assert_eq!(root, Bounds::new(0.0, 10.0, 100.0, 80.0));
    }

    #[test]
    fn test_intersection_ratio() {
        assert_eq!(intersection_ratio(at(0.0).unwrap(), ROOT), Some(1.0));
        assert_eq!(intersection_ratio(at(75.0).unwrap(), ROOT), Some(0.5));
        assert_eq!(intersection_ratio(at(100.0).unwrap(), ROOT), Some(0.0));
        assert_eq!(intersection_ratio(at(101.0).unwrap(), ROOT), None);
    }

    #[test]
    fn test_threshold_validation() {
        assert!(ObserverOptions::new(-0.1).is_err());
        assert!(ObserverOptions::new(1.5).is_err());
        assert!(ObserverOptions::new(f64::NAN).is_err());
        assert!(ObserverOptions::new(1.0).is_ok());
    }

    #[test]
    fn test_repeatable_tracks_both_directions() {
        let mut observer = ViewportObserver::new(ObserverOptions::new(0.2).unwrap());
        assert!(!observer.observe(at(200.0), ROOT));
        assert!(observer.observe(at(80.0), ROOT));
        assert!(!observer.observe(at(95.0), ROOT));
        assert!(observer.observe(at(10.0), ROOT));
        assert!(!observer.observe(at(-60.0), ROOT));
    }

    #[test]
    fn test_once_never_reverts() {
        let mut observer = ViewportObserver::new(ObserverOptions::new(0.1).unwrap().once());
        assert!(!observer.observe(at(150.0), ROOT));
        assert!(observer.observe(at(50.0), ROOT));
        assert!(observer.is_disconnected());
        assert!(observer.observe(at(500.0), ROOT));
    }

    #[test]
    fn test_zero_threshold_counts_edge_contact() {
        let mut observer = ViewportObserver::new(ObserverOptions::new(0.0).unwrap());
        assert!(observer.observe(at(100.0), ROOT));
        assert!(!observer.observe(at(100.5), ROOT));

        let mut strict = ViewportObserver::new(ObserverOptions::new(0.1).unwrap());
        assert!(!strict.observe(at(100.0), ROOT));
    }

    #[test]
    fn test_waits_for_target() {
        let mut observer = ViewportObserver::new(ObserverOptions::default());
        assert!(!observer.observe(None, ROOT));
        assert!(!observer.is_observing());
        observer.observe(at(0.0), ROOT);
        assert!(observer.is_observing());

        // Target unmounted mid-observation
        assert!(observer.observe(None, ROOT));
    }

    #[test]
    fn test_disconnect_freezes_signal() {
        let mut observer = ViewportObserver::new(ObserverOptions::default());
        observer.observe(at(0.0), ROOT);
        observer.disconnect();
        assert!(observer.observe(at(900.0), ROOT));
    }

    #[test]
    fn test_margin_delays_visibility() {
        let options = ObserverOptions::new(0.5)
            .unwrap()
            .root_margin("0px 0px -20% 0px")
            .unwrap();
        let mut observer = ViewportObserver::new(options);
        // Half inside the viewport but only 10 of 50 rows inside the shrunk root
        assert!(!observer.observe(at(70.0), ROOT));
        assert!(observer.observe(at(50.0), ROOT));
    }
}
