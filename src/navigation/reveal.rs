//! One-way fade-in of page sections.
//!
//! A section is revealed the first time at least [`REVEAL_THRESHOLD`] of it
//! is visible. The flag is never cleared, and observing a revealed section
//! again changes nothing.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use super::scroll::{SectionLayout, Viewport, ease_in_out_cubic};

pub const REVEAL_THRESHOLD: f32 = 0.1;
pub const FADE_DURATION: Duration = Duration::from_millis(600);
/// Opacity of a section that has not been revealed yet.
pub const HIDDEN_OPACITY: f32 = 0.2;

#[derive(Debug, Clone)]
pub struct RevealTracker {
    observed: Vec<String>,
    revealed: HashMap<String, Instant>,
}

impl RevealTracker {
    pub fn new<I, S>(observed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            observed: observed.into_iter().map(Into::into).collect(),
            revealed: HashMap::new(),
        }
    }

    pub fn is_observed(&self, anchor: &str) -> bool {
        self.observed.iter().any(|a| a == anchor)
    }

    pub fn is_revealed(&self, anchor: &str) -> bool {
        self.revealed.contains_key(anchor)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }

    /// Feed one intersection event. Returns `true` only when this call revealed the section.
    pub fn observe(&mut self, anchor: &str, ratio: f32, now: Instant) -> bool {
        if ratio < REVEAL_THRESHOLD || !self.is_observed(anchor) || self.is_revealed(anchor) {
            return false;
        }
        tracing::debug!(anchor, ratio, "section revealed");
        self.revealed.insert(anchor.to_string(), now);
        true
    }

    /// Observe every measured section against `viewport`. Returns how many were newly revealed.
    pub fn observe_layout(&mut self, layout: &SectionLayout, viewport: Viewport, now: Instant) -> usize {
        layout
            .intersections(viewport)
            .into_iter()
            .filter(|(anchor, ratio)| self.observe(anchor, *ratio, now))
            .count()
    }

    /// Current text opacity for `anchor`. Sections outside the observed set are always opaque.
    pub fn opacity(&self, anchor: &str, now: Instant) -> f32 {
        if !self.is_observed(anchor) {
            return 1.0;
        }
        match self.revealed.get(anchor) {
            None => HIDDEN_OPACITY,
            Some(at) => {
                let t = now.saturating_duration_since(*at).as_secs_f32() / FADE_DURATION.as_secs_f32();
                HIDDEN_OPACITY + (1.0 - HIDDEN_OPACITY) * ease_in_out_cubic(t)
            }
        }
    }

    /// Whether any fade is still in progress.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.revealed
            .values()
            .any(|at| now.saturating_duration_since(*at) < FADE_DURATION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> RevealTracker {
        RevealTracker::new(["about", "projects"])
    }

    #[test]
    fn below_threshold_stays_hidden() {
        let mut reveal = tracker();
        assert!(!reveal.observe("projects", 0.05, Instant::now()));
        assert!(!reveal.is_revealed("projects"));
    }

    #[test]
    fn reveal_is_idempotent() {
        let mut reveal = tracker();
        let first = Instant::now();
        assert!(reveal.observe("about", 0.5, first));
        let later = first + Duration::from_millis(100);
        assert!(!reveal.observe("about", 0.9, later));
        assert!(reveal.is_revealed("about"));
        assert_eq!(reveal.revealed_count(), 1);
        // the fade keeps its original start time
        assert!((reveal.opacity("about", first + FADE_DURATION) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn reveal_is_never_removed() {
        let mut reveal = tracker();
        let now = Instant::now();
        reveal.observe("about", 1.0, now);
        reveal.observe("about", 0.0, now);
        assert!(reveal.is_revealed("about"));
    }

    #[test]
    fn unobserved_sections_are_ignored() {
        let mut reveal = tracker();
        assert!(!reveal.observe("contact", 1.0, Instant::now()));
        assert_eq!(reveal.opacity("contact", Instant::now()), 1.0);
    }

    #[test]
    fn fade_runs_from_hidden_to_opaque() {
        let mut reveal = tracker();
        let start = Instant::now();
        assert_eq!(reveal.opacity("about", start), HIDDEN_OPACITY);
        reveal.observe("about", 0.2, start);
        assert!(reveal.is_animating(start));
        let mid = reveal.opacity("about", start + FADE_DURATION / 2);
        assert!(mid > HIDDEN_OPACITY && mid < 1.0);
        assert!(!reveal.is_animating(start + FADE_DURATION));
    }
}
