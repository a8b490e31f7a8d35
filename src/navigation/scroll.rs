//! Smooth scrolling to in-page anchors.
//!
//! The GUI measures each section as it is laid out and feeds the heights
//! into a [`SectionLayout`]; [`ScrollController`] turns an anchor into an
//! eased animation over the page offset.

use std::time::{Duration, Instant};

use crate::document::{Node, Tag};

pub const SCROLL_DURATION: Duration = Duration::from_millis(450);

/// Cubic ease-in-out over `t` in `[0, 1]`.
pub fn ease_in_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Visible window over the scrollable page content.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub offset: f32,
    pub height: f32,
}

#[derive(Debug, Clone, PartialEq)]
struct Section {
    anchor: String,
    height: Option<f32>,
}

/// Vertical layout of the page's anchored sections, in document order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SectionLayout {
    sections: Vec<Section>,
    padding: f32,
    spacing: f32,
}

impl SectionLayout {
    /// Collect every `section` element with an id, unmeasured.
    pub fn from_document(root: &Node) -> Self {
        let sections = root
            .as_element()
            .map(|element| {
                element
                    .find_all(Tag::Section)
                    .into_iter()
                    .filter_map(|section| section.id.clone())
                    .map(|anchor| Section {
                        anchor,
                        height: None,
                    })
                    .collect()
            })
            .unwrap_or_default();
        Self {
            sections,
            padding: 0.0,
            spacing: 0.0,
        }
    }

    /// Padding above the first and below the last section, and the gap between sections.
    pub fn with_spacing(mut self, padding: f32, spacing: f32) -> Self {
        self.padding = padding;
        self.spacing = spacing;
        self
    }

    /// Record a section's laid-out height. Returns whether anything changed.
    pub fn measure(&mut self, anchor: &str, height: f32) -> bool {
        match self.sections.iter_mut().find(|s| s.anchor == anchor) {
            Some(section) if section.height != Some(height) => {
                section.height = Some(height);
                true
            }
            _ => false,
        }
    }

    /// Top edge and height of `anchor`, if it and everything above it is measured.
    pub fn bounds_of(&self, anchor: &str) -> Option<(f32, f32)> {
        let mut top = self.padding;
        for section in &self.sections {
            let height = section.height?;
            if section.anchor == anchor {
                return Some((top, height));
            }
            top += height + self.spacing;
        }
        None
    }

    pub fn offset_of(&self, anchor: &str) -> Option<f32> {
        self.bounds_of(anchor).map(|(top, _)| top)
    }

    /// Full scrollable height, once every section has been measured.
    pub fn content_height(&self) -> Option<f32> {
        let mut total = 2.0 * self.padding;
        for (i, section) in self.sections.iter().enumerate() {
            if i > 0 {
                total += self.spacing;
            }
            total += section.height?;
        }
        Some(total)
    }

    /// Fraction of `anchor`'s height inside `viewport`.
    pub fn visible_ratio(&self, anchor: &str, viewport: Viewport) -> Option<f32> {
        let (top, height) = self.bounds_of(anchor)?;
        if height <= 0.0 {
            return Some(0.0);
        }
        let visible = (top + height).min(viewport.offset + viewport.height)
            - top.max(viewport.offset);
        Some((visible.max(0.0) / height).min(1.0))
    }

    /// Visible ratio of every measured section.
    pub fn intersections(&self, viewport: Viewport) -> Vec<(&str, f32)> {
        self.sections
            .iter()
            .filter_map(|s| {
                self.visible_ratio(&s.anchor, viewport)
                    .map(|ratio| (s.anchor.as_str(), ratio))
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollAnimation {
    from: f32,
    to: f32,
    start: Instant,
    duration: Duration,
}

impl ScrollAnimation {
    pub fn new(from: f32, to: f32, start: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            start,
            duration,
        }
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.start) >= self.duration
    }

    pub fn offset_at(&self, now: Instant) -> f32 {
        if self.is_finished(now) {
            return self.to;
        }
        let elapsed = now.saturating_duration_since(self.start).as_secs_f32();
        let t = elapsed / self.duration.as_secs_f32();
        self.from + (self.to - self.from) * ease_in_out_cubic(t)
    }
}

/// Owns the page offset and any running scroll animation.
#[derive(Debug, Clone, Default)]
pub struct ScrollController {
    position: f32,
    animation: Option<ScrollAnimation>,
}

impl ScrollController {
    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Offset reported by the host after the page moved.
    pub fn set_position(&mut self, offset: f32) {
        self.position = offset;
    }

    /// Start animating towards `anchor`. Missing or unmeasured anchors are ignored.
    pub fn scroll_to(
        &mut self,
        layout: &SectionLayout,
        viewport: Viewport,
        anchor: &str,
        now: Instant,
    ) -> bool {
        let Some(mut target) = layout.offset_of(anchor) else {
            tracing::debug!(anchor, "scroll target not found");
            return false;
        };
        if let Some(content) = layout.content_height() {
            target = target.min((content - viewport.height).max(0.0));
        }
        let from = match &self.animation {
            Some(animation) => animation.offset_at(now),
            None => self.position,
        };
        tracing::debug!(anchor, from, to = target, "smooth scroll");
        self.animation = Some(ScrollAnimation::new(from, target.max(0.0), now, SCROLL_DURATION));
        true
    }

    /// Advance the animation; returns the offset to apply this frame.
    pub fn tick(&mut self, now: Instant) -> Option<f32> {
        let animation = self.animation?;
        let offset = animation.offset_at(now);
        if animation.is_finished(now) {
            self.animation = None;
        }
        self.position = offset;
        Some(offset)
    }

    /// Cancel any animation and go straight to the top.
    pub fn reset(&mut self) {
        self.animation = None;
        self.position = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentStore;
    use crate::document::home;

    fn measured_layout() -> SectionLayout {
        let mut layout =
            SectionLayout::from_document(&home::render(&ContentStore::builtin())).with_spacing(20.0, 40.0);
        layout.measure(home::ABOUT_ANCHOR, 600.0);
        layout.measure(home::PROJECTS_ANCHOR, 900.0);
        layout
    }

    #[test]
    fn easing_hits_endpoints() {
        assert_eq!(ease_in_out_cubic(0.0), 0.0);
        assert_eq!(ease_in_out_cubic(1.0), 1.0);
        assert!((ease_in_out_cubic(0.5) - 0.5).abs() < 1e-6);
        assert_eq!(ease_in_out_cubic(2.0), 1.0);
    }

    #[test]
    fn offsets_stack_sections() {
        let layout = measured_layout();
        assert_eq!(layout.offset_of(home::ABOUT_ANCHOR), Some(20.0));
        assert_eq!(layout.offset_of(home::PROJECTS_ANCHOR), Some(660.0));
        assert_eq!(layout.content_height(), Some(20.0 + 600.0 + 40.0 + 900.0 + 20.0));
    }

    #[test]
    fn unmeasured_predecessor_hides_anchor() {
        let mut layout = SectionLayout::from_document(&home::render(&ContentStore::builtin()));
        layout.measure(home::PROJECTS_ANCHOR, 900.0);
        assert_eq!(layout.offset_of(home::PROJECTS_ANCHOR), None);
    }

    #[test]
    fn measure_ignores_unknown_anchor() {
        let mut layout = measured_layout();
        assert!(!layout.measure("contact", 100.0));
        assert!(!layout.measure(home::ABOUT_ANCHOR, 600.0));
        assert!(layout.measure(home::ABOUT_ANCHOR, 610.0));
    }

    #[test]
    fn visible_ratio_tracks_viewport() {
        let layout = measured_layout();
        let top = Viewport {
            offset: 0.0,
            height: 700.0,
        };
        assert_eq!(layout.visible_ratio(home::ABOUT_ANCHOR, top), Some(1.0));
        // projects starts at 660, so 40 of 900 pixels show.
        let ratio = layout
            .visible_ratio(home::PROJECTS_ANCHOR, top)
            .expect("measured");
        assert!((ratio - 40.0 / 900.0).abs() < 1e-6);
    }

    #[test]
    fn missing_anchor_is_a_no_op() {
        let layout = measured_layout();
        let mut scroll = ScrollController::default();
        let now = Instant::now();
        assert!(!scroll.scroll_to(&layout, Viewport::default(), "contact", now));
        assert!(!scroll.is_animating());
        assert_eq!(scroll.tick(now), None);
    }

    #[test]
    fn animation_lands_on_target() {
        let layout = measured_layout();
        let viewport = Viewport {
            offset: 0.0,
            height: 700.0,
        };
        let mut scroll = ScrollController::default();
        let start = Instant::now();
        assert!(scroll.scroll_to(&layout, viewport, home::PROJECTS_ANCHOR, start));

        let midway = scroll
            .tick(start + SCROLL_DURATION / 2)
            .expect("animating");
        assert!(midway > 0.0 && midway < 660.0);
        assert!(scroll.is_animating());

        assert_eq!(scroll.tick(start + SCROLL_DURATION), Some(660.0));
        assert!(!scroll.is_animating());
        assert_eq!(scroll.position(), 660.0);
    }

    #[test]
    fn target_is_clamped_to_scrollable_range() {
        let layout = measured_layout();
        let viewport = Viewport {
            offset: 0.0,
            height: 1200.0,
        };
        let mut scroll = ScrollController::default();
        let start = Instant::now();
        scroll.scroll_to(&layout, viewport, home::PROJECTS_ANCHOR, start);
        // content is 1580 tall, so the furthest reachable offset is 380.
        assert_eq!(scroll.tick(start + SCROLL_DURATION), Some(380.0));
    }
}
