//! Scroll-spy logic for the navigation bar.

/// Added to `scrollY` before matching so a section counts as active once it
/// reaches the bottom edge of the fixed header.
pub const SCROLL_SPY_OFFSET_PX: f64 = 100.0;

/// Header height subtracted from a section's top when scrolling to it.
pub const NAV_SCROLL_OFFSET_PX: f64 = 80.0;

/// Vertical extent of a page region, in document pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionSpan {
    pub top: f64,
    pub height: f64,
}

impl SectionSpan {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Half-open containment: `[top, top + height)`.
    pub fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }
}

/// Position compared against section spans for a given scroll offset.
pub fn scroll_position(scroll_y: f64) -> f64 {
    scroll_y + SCROLL_SPY_OFFSET_PX
}

/// First id, in the given order, whose span contains `position`.
///
/// Ids for which `lookup` finds no element are skipped.
pub fn find_active_section<'a, S, F>(ids: &'a [S], position: f64, lookup: F) -> Option<&'a str>
where
    S: AsRef<str>,
    F: Fn(&str) -> Option<SectionSpan>,
{
    ids.iter()
        .map(|id| id.as_ref())
        .find(|id| lookup(id).is_some_and(|span| span.contains(position)))
}

/// Window scroll offset that brings a section just under the header.
pub fn scroll_target(offset_top: f64) -> f64 {
    (offset_top - NAV_SCROLL_OFFSET_PX).max(0.0)
}

/// `"#features"` → `Some("features")`; absolute links yield `None`.
pub fn section_id_from_href(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Remembers the active section across scroll events.
///
/// When nothing matches, the previous value is kept.
#[derive(Debug, Clone, Default)]
pub struct ActiveSectionTracker {
    ids: Vec<String>,
    active: Option<String>,
}

impl ActiveSectionTracker {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
            active: None,
        }
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Re-evaluate for a new scroll offset. Returns `true` if the active id changed.
    pub fn update<F>(&mut self, scroll_y: f64, lookup: F) -> bool
    where
        F: Fn(&str) -> Option<SectionSpan>,
    {
        let Some(found) = find_active_section(&self.ids, scroll_position(scroll_y), lookup) else {
            return false;
        };
        if self.active.as_deref() == Some(found) {
            return false;
        }
        self.active = Some(found.to_string());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(id: &str) -> Option<SectionSpan> {
        match id {
            "a" => Some(SectionSpan::new(0.0, 100.0)),
            "b" => Some(SectionSpan::new(100.0, 150.0)),
            "c" => Some(SectionSpan::new(250.0, 400.0)),
            _ => None,
        }
    }

    #[test]
    fn test_span_is_half_open() {
        let span = SectionSpan::new(100.0, 150.0);
        assert!(span.contains(100.0));
        assert!(span.contains(249.9));
        assert!(!span.contains(250.0));
        assert!(!span.contains(99.9));
    }

    #[test]
    fn test_find_active_inside_section() {
        let ids = ["a", "b", "c"];
        assert_eq!(find_active_section(&ids, 150.0, layout), Some("b"));
    }

    #[test]
    fn test_find_active_on_boundary_prefers_start() {
        let ids = ["a", "b", "c"];
        assert_eq!(find_active_section(&ids, 100.0, layout), Some("b"));
    }

    #[test]
    fn test_missing_elements_are_skipped() {
        let ids = ["ghost", "a", "b"];
        assert_eq!(find_active_section(&ids, 10.0, layout), Some("a"));
        assert_eq!(find_active_section(&["ghost"], 10.0, layout), None);
    }

    #[test]
    fn test_scan_order_wins_overlaps() {
        let overlapping = |id: &str| match id {
            "first" => Some(SectionSpan::new(0.0, 200.0)),
            "second" => Some(SectionSpan::new(100.0, 200.0)),
            _ => None,
        };
        let ids = ["first", "second"];
        assert_eq!(find_active_section(&ids, 150.0, overlapping), Some("first"));
    }

    #[test]
    fn test_tracker_applies_offset() {
        let mut tracker = ActiveSectionTracker::new(["a", "b", "c"]);
        // scrollY 50 + 100 px offset = 150 → b
        assert!(tracker.update(50.0, layout));
        assert_eq!(tracker.active(), Some("b"));

        // Same section again is not a change
        assert!(!tracker.update(60.0, layout));
    }

    #[test]
    fn test_tracker_retains_previous_when_nothing_matches() {
        let mut tracker = ActiveSectionTracker::new(["a", "b", "c"]);
        tracker.update(0.0, layout);
        assert_eq!(tracker.active(), Some("b"));

        assert!(!tracker.update(10_000.0, layout));
        assert_eq!(tracker.active(), Some("b"));
    }

    #[test]
    fn test_tracker_starts_empty() {
        let mut tracker = ActiveSectionTracker::new(Vec::<String>::new());
        assert_eq!(tracker.active(), None);
        assert!(!tracker.update(0.0, layout));
        assert_eq!(tracker.active(), None);
    }

    #[test]
    fn test_scroll_target() {
        assert_eq!(scroll_target(500.0), 420.0);
        assert_eq!(scroll_target(30.0), 0.0);
    }

    #[test]
    fn test_section_id_from_href() {
        assert_eq!(section_id_from_href("#features"), Some("features"));
        assert_eq!(section_id_from_href("#"), None);
        assert_eq!(section_id_from_href("/pricing"), None);
    }
}
