// Navigation state - active section tracking, route fragment, programmatic scroll
use log::warn;
use std::time::{Duration, Instant};

/// How long passive visibility tracking stays suppressed after an explicit
/// navigation. Longer than the scroll animation so the highlight never
/// jumps mid-flight.
pub const SUPPRESS_WINDOW_MS: u64 = 1500;

/// Gap kept between the header and the section heading after a scroll.
pub const SCROLL_MARGIN: f32 = 20.0;

/// Re-issue delays for the startup scroll. Section geometry is not final
/// until a few frames have painted, so the offset is recomputed each time.
pub const STARTUP_SCROLL_RETRIES_MS: [u64; 3] = [0, 100, 300];

// The "reading band" of the viewport: a section counts as visible while it
// intersects the region below the top 20% and above the bottom 60%.
pub const BAND_TOP_FRACTION: f32 = 0.20;
pub const BAND_BOTTOM_FRACTION: f32 = 0.60;

/// Measured placement of a section, in page coordinates (y from the top of
/// the document at zero scroll). Supplied by the render surface each frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionGeometry {
    pub top: f32,
    pub height: f32,
}

/// Keeps exactly one nav link active, matching the section closest to the
/// reading position, and reconciles that with explicit navigation (link
/// clicks, restored route on startup).
///
/// Handlers are plain synchronous methods; the caller's frame loop is the
/// scheduler. Suppression and the startup retries are `Instant` deadlines
/// that the pump methods compare against a caller-supplied now, so tests
/// never sleep.
pub struct NavigationSync {
    section_ids: Vec<String>,
    geometry: Vec<Option<SectionGeometry>>,
    active: Option<usize>,
    fragment: String,
    /// While set and in the future, visibility events are discarded.
    /// Overwritten (cancel-and-replace) by every new explicit navigation.
    suppress_until: Option<Instant>,
    /// Pending scroll re-issues for a restored route, soonest first.
    retries: Vec<Instant>,
    retry_section: Option<usize>,
}

impl NavigationSync {
    pub fn new<S: Into<String>>(section_ids: impl IntoIterator<Item = S>) -> Self {
        let section_ids: Vec<String> = section_ids.into_iter().map(Into::into).collect();
        if section_ids.is_empty() {
            warn!("no sections registered; navigation highlighting disabled");
        }
        let active = if section_ids.is_empty() { None } else { Some(0) };
        let fragment = active.map(|i| section_ids[i].clone()).unwrap_or_default();
        let geometry = vec![None; section_ids.len()];
        Self {
            section_ids,
            geometry,
            active,
            fragment,
            suppress_until: None,
            retries: Vec::new(),
            retry_section: None,
        }
    }

    pub fn active_section(&self) -> Option<&str> {
        self.active.map(|i| self.section_ids[i].as_str())
    }

    /// Whether the nav link for `id` should be highlighted. A link whose id
    /// matches no section is simply never active.
    pub fn is_active(&self, id: &str) -> bool {
        self.active_section() == Some(id)
    }

    /// The route fragment mirroring the active section. Persisted by the
    /// host so the next launch can restore the reading position.
    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    pub fn is_suppressed(&self, now: Instant) -> bool {
        self.suppress_until.is_some_and(|t| now < t)
    }

    fn section_index(&self, id: &str) -> Option<usize> {
        self.section_ids.iter().position(|s| s == id)
    }

    /// Record where a section currently sits, in page coordinates. Ignores
    /// ids that were never registered.
    pub fn set_geometry(&mut self, id: &str, geometry: SectionGeometry) {
        if let Some(idx) = self.section_index(id) {
            self.geometry[idx] = Some(geometry);
        }
    }

    fn scroll_target(&self, idx: usize, header_height: f32) -> Option<f32> {
        let geo = self.geometry[idx]?;
        Some((geo.top - header_height - SCROLL_MARGIN).max(0.0))
    }

    /// Passive tracking: given the sections currently intersecting the
    /// reading band with their intersection ratios, activate the one with
    /// the highest ratio. Ties keep the first in document order. Discarded
    /// wholesale while an explicit navigation's suppression window is open.
    pub fn on_visibility_change(&mut self, visible: &[(&str, f32)], now: Instant) {
        if self.is_suppressed(now) {
            return;
        }
        let mut winner: Option<(usize, f32)> = None;
        for (id, ratio) in visible {
            let Some(idx) = self.section_index(id) else {
                continue;
            };
            // Strict comparison plus the index check keeps document order
            // authoritative on ties, whatever order the caller iterates in.
            match winner {
                Some((best_idx, best)) => {
                    if *ratio > best || (*ratio == best && idx < best_idx) {
                        winner = Some((idx, *ratio));
                    }
                }
                None => winner = Some((idx, *ratio)),
            }
        }
        let Some((idx, _)) = winner else { return };
        if self.active == Some(idx) {
            return;
        }
        self.active = Some(idx);
        self.fragment = self.section_ids[idx].clone();
    }

    /// Explicit navigation from a nav link (or the logo, which targets the
    /// first section). Activates immediately without waiting for the scroll,
    /// opens the suppression window, and returns the scroll offset to
    /// animate to, when the section's geometry is known.
    pub fn on_nav_link_activated(
        &mut self,
        id: &str,
        header_height: f32,
        now: Instant,
    ) -> Option<f32> {
        let Some(idx) = self.section_index(id) else {
            warn!("nav link targets unknown section {id:?}");
            return None;
        };
        self.active = Some(idx);
        self.fragment = self.section_ids[idx].clone();
        self.suppress_until = Some(now + Duration::from_millis(SUPPRESS_WINDOW_MS));
        // A fresh navigation supersedes any startup retry schedule.
        self.retries.clear();
        self.retry_section = None;
        let target = self.scroll_target(idx, header_height);
        if target.is_none() {
            warn!("section {id:?} has no measured geometry yet; scroll skipped");
        }
        target
    }

    /// Navigation from outside the component: the route restored at startup
    /// (or any externally supplied fragment). Behaves like a link click
    /// except the fragment is already correct, and the scroll is re-issued
    /// on a short schedule because layout settles over the first frames.
    /// An empty or unknown fragment falls back to the first section,
    /// without scrolling.
    pub fn on_external_route_change(
        &mut self,
        fragment: &str,
        header_height: f32,
        now: Instant,
    ) -> Option<f32> {
        let idx = match self.section_index(fragment) {
            Some(idx) => idx,
            None => {
                if !fragment.is_empty() {
                    warn!("route fragment {fragment:?} matches no section; keeping default");
                }
                if !self.section_ids.is_empty() {
                    self.active = Some(0);
                    self.fragment = self.section_ids[0].clone();
                }
                return None;
            }
        };
        self.active = Some(idx);
        self.fragment = self.section_ids[idx].clone();
        self.suppress_until = Some(now + Duration::from_millis(SUPPRESS_WINDOW_MS));
        self.retry_section = Some(idx);
        self.retries = STARTUP_SCROLL_RETRIES_MS
            .iter()
            .skip(1) // the first attempt happens right here
            .map(|ms| now + Duration::from_millis(*ms))
            .collect();
        self.scroll_target(idx, header_height)
    }

    /// Pump for the retry schedule: when a re-issue deadline has passed,
    /// consume it and recompute the scroll offset against current geometry.
    pub fn take_due_retry(&mut self, header_height: f32, now: Instant) -> Option<f32> {
        let due = self.retries.first().is_some_and(|t| *t <= now);
        if !due {
            return None;
        }
        self.retries.remove(0);
        let idx = self.retry_section?;
        if self.retries.is_empty() {
            self.retry_section = None;
        }
        self.scroll_target(idx, header_height)
    }

    /// Earliest instant at which a pump call will do something, so the host
    /// can schedule a repaint instead of polling.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.retries.first().copied(), self.suppress_until) {
            (Some(r), Some(s)) => Some(r.min(s)),
            (r, s) => r.or(s),
        }
    }
}

/// The reading band of a viewport, as a (top, bottom) pair in the same
/// coordinates as the viewport itself.
pub fn visibility_band(viewport_top: f32, viewport_height: f32) -> (f32, f32) {
    (
        viewport_top + viewport_height * BAND_TOP_FRACTION,
        viewport_top + viewport_height * (1.0 - BAND_BOTTOM_FRACTION),
    )
}

/// Fraction of a section's own height that overlaps the band. Zero for
/// degenerate sections.
pub fn intersection_ratio(band: (f32, f32), top: f32, height: f32) -> f32 {
    if height <= 0.0 {
        return 0.0;
    }
    let bottom = top + height;
    let overlap = (bottom.min(band.1) - top.max(band.0)).max(0.0);
    overlap / height
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nav() -> NavigationSync {
        let mut nav = NavigationSync::new(["home", "about", "contact"]);
        for (i, id) in ["home", "about", "contact"].iter().enumerate() {
            nav.set_geometry(
                id,
                SectionGeometry {
                    top: 100.0 + 600.0 * i as f32,
                    height: 600.0,
                },
            );
        }
        nav
    }

    #[test]
    fn test_first_section_active_by_default() {
        let nav = nav();
        assert_eq!(nav.active_section(), Some("home"));
        assert_eq!(nav.fragment(), "home");
    }

    #[test]
    fn test_click_activates_immediately_and_sets_fragment() {
        let mut nav = nav();
        let t0 = Instant::now();
        let target = nav.on_nav_link_activated("contact", 60.0, t0);
        assert_eq!(nav.active_section(), Some("contact"));
        assert_eq!(nav.fragment(), "contact");
        // top 1300 - header 60 - margin 20
        assert_eq!(target, Some(1220.0));
    }

    #[test]
    fn test_exactly_one_link_active() {
        let mut nav = nav();
        nav.on_nav_link_activated("about", 60.0, Instant::now());
        let flags: Vec<bool> = ["home", "about", "contact"]
            .iter()
            .map(|id| nav.is_active(id))
            .collect();
        assert_eq!(flags, [false, true, false]);
        // a link with no matching section is never active
        assert!(!nav.is_active("blog"));
    }

    #[test]
    fn test_visibility_suppressed_during_programmatic_scroll() {
        let mut nav = nav();
        let t0 = Instant::now();
        nav.on_nav_link_activated("contact", 60.0, t0);
        nav.on_visibility_change(&[("about", 0.9)], t0 + Duration::from_millis(500));
        assert_eq!(nav.active_section(), Some("contact"));
    }

    #[test]
    fn test_visibility_applies_after_suppression_expires() {
        let mut nav = nav();
        let t0 = Instant::now();
        nav.on_nav_link_activated("contact", 60.0, t0);
        nav.on_visibility_change(&[("about", 0.9)], t0 + Duration::from_millis(1600));
        assert_eq!(nav.active_section(), Some("about"));
    }

    #[test]
    fn test_max_ratio_wins() {
        let mut nav = nav();
        nav.on_visibility_change(&[("about", 0.4), ("contact", 0.6)], Instant::now());
        assert_eq!(nav.active_section(), Some("contact"));
    }

    #[test]
    fn test_document_order_breaks_ties() {
        let mut nav = nav();
        nav.on_nav_link_activated("contact", 60.0, Instant::now());
        let later = Instant::now() + Duration::from_millis(2000);
        nav.on_visibility_change(&[("about", 0.5), ("home", 0.5)], later);
        assert_eq!(nav.active_section(), Some("home"));
    }

    #[test]
    fn test_unknown_visible_ids_ignored() {
        let mut nav = nav();
        nav.on_visibility_change(&[("blog", 0.9), ("about", 0.3)], Instant::now());
        assert_eq!(nav.active_section(), Some("about"));
    }

    #[test]
    fn test_repeated_click_is_idempotent_and_restarts_window() {
        let mut nav = nav();
        let t0 = Instant::now();
        let first = nav.on_nav_link_activated("about", 60.0, t0);
        let second = nav.on_nav_link_activated("about", 60.0, t0 + Duration::from_millis(400));
        assert_eq!(first, second);
        assert_eq!(nav.active_section(), Some("about"));
        assert_eq!(nav.fragment(), "about");
        // the window now runs from the second click
        assert!(nav.is_suppressed(t0 + Duration::from_millis(1800)));
        assert!(!nav.is_suppressed(t0 + Duration::from_millis(2000)));
    }

    #[test]
    fn test_route_change_equivalent_to_click() {
        let mut a = nav();
        let mut b = nav();
        let t0 = Instant::now();
        let from_route = a.on_external_route_change("about", 60.0, t0);
        let from_click = b.on_nav_link_activated("about", 60.0, t0);
        assert_eq!(from_route, from_click);
        assert_eq!(a.active_section(), b.active_section());
        assert_eq!(a.fragment(), b.fragment());
    }

    #[test]
    fn test_route_change_schedules_three_attempts() {
        let mut nav = nav();
        let t0 = Instant::now();
        let immediate = nav.on_external_route_change("about", 60.0, t0);
        assert!(immediate.is_some());
        assert!(nav
            .take_due_retry(60.0, t0 + Duration::from_millis(50))
            .is_none());
        assert!(nav
            .take_due_retry(60.0, t0 + Duration::from_millis(100))
            .is_some());
        assert!(nav
            .take_due_retry(60.0, t0 + Duration::from_millis(150))
            .is_none());
        assert!(nav
            .take_due_retry(60.0, t0 + Duration::from_millis(300))
            .is_some());
        assert!(nav
            .take_due_retry(60.0, t0 + Duration::from_millis(400))
            .is_none());
    }

    #[test]
    fn test_retry_recomputes_against_fresh_geometry() {
        let mut nav = NavigationSync::new(["home", "about"]);
        let t0 = Instant::now();
        // geometry unknown at startup: no immediate scroll, but activation holds
        assert_eq!(nav.on_external_route_change("about", 60.0, t0), None);
        assert_eq!(nav.active_section(), Some("about"));
        nav.set_geometry("about", SectionGeometry { top: 900.0, height: 500.0 });
        let retried = nav.take_due_retry(60.0, t0 + Duration::from_millis(100));
        assert_eq!(retried, Some(820.0));
    }

    #[test]
    fn test_click_cancels_pending_retries() {
        let mut nav = nav();
        let t0 = Instant::now();
        nav.on_external_route_change("about", 60.0, t0);
        nav.on_nav_link_activated("contact", 60.0, t0 + Duration::from_millis(20));
        assert!(nav
            .take_due_retry(60.0, t0 + Duration::from_millis(400))
            .is_none());
        assert_eq!(nav.active_section(), Some("contact"));
    }

    #[test]
    fn test_empty_fragment_falls_back_to_first_section() {
        let mut nav = nav();
        nav.on_nav_link_activated("contact", 60.0, Instant::now());
        let target = nav.on_external_route_change("", 60.0, Instant::now());
        assert_eq!(target, None);
        assert_eq!(nav.active_section(), Some("home"));
    }

    #[test]
    fn test_unknown_fragment_falls_back_without_scroll() {
        let mut nav = nav();
        let target = nav.on_external_route_change("blog", 60.0, Instant::now());
        assert_eq!(target, None);
        assert_eq!(nav.active_section(), Some("home"));
    }

    #[test]
    fn test_zero_sections_no_ops() {
        let mut nav = NavigationSync::new(Vec::<String>::new());
        let t0 = Instant::now();
        assert_eq!(nav.active_section(), None);
        assert_eq!(nav.fragment(), "");
        assert_eq!(nav.on_nav_link_activated("home", 60.0, t0), None);
        assert_eq!(nav.on_external_route_change("home", 60.0, t0), None);
        nav.on_visibility_change(&[("home", 1.0)], t0);
        assert_eq!(nav.active_section(), None);
        assert!(nav.take_due_retry(60.0, t0).is_none());
    }

    #[test]
    fn test_scroll_target_clamped_at_zero() {
        let mut nav = NavigationSync::new(["home"]);
        nav.set_geometry("home", SectionGeometry { top: 30.0, height: 400.0 });
        let target = nav.on_nav_link_activated("home", 60.0, Instant::now());
        assert_eq!(target, Some(0.0));
    }

    #[test]
    fn test_visibility_band_excludes_top_and_bottom() {
        let (top, bottom) = visibility_band(0.0, 1000.0);
        assert_eq!(top, 200.0);
        assert_eq!(bottom, 400.0);
    }

    #[test]
    fn test_intersection_ratio() {
        let band = visibility_band(0.0, 1000.0);
        // fully inside the band
        assert_eq!(intersection_ratio(band, 250.0, 100.0), 1.0);
        // half overlapping the band's bottom edge
        assert_eq!(intersection_ratio(band, 350.0, 100.0), 0.5);
        // entirely outside
        assert_eq!(intersection_ratio(band, 500.0, 100.0), 0.0);
        // degenerate height
        assert_eq!(intersection_ratio(band, 250.0, 0.0), 0.0);
    }

    #[test]
    fn test_next_deadline_tracks_earliest_pending_work() {
        let mut nav = nav();
        let t0 = Instant::now();
        assert!(nav.next_deadline().is_none());
        nav.on_external_route_change("about", 60.0, t0);
        assert_eq!(nav.next_deadline(), Some(t0 + Duration::from_millis(100)));
    }
}
