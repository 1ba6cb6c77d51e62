#[cfg(test)]
mod tests {
    use crate::core::data::{NAVIGATION_ITEMS, SAMPLE_QUESTIONS};
    use crate::core::{
        ActiveSectionTracker, CarouselKey, CarouselState, IntersectionSample, SectionSpan,
        VisibilityOptions, VisibilityState,
    };

    const INTERVAL_MS: u32 = 6_000;

    /// Fires the autoplay timer for every full interval in `elapsed_ms`.
    fn run_clock(carousel: &mut CarouselState, elapsed_ms: u32, visible: bool) -> Vec<usize> {
        let mut seen = Vec::new();
        for _ in 0..elapsed_ms / INTERVAL_MS {
            if carousel.autoplay_tick(visible) {
                seen.push(carousel.index());
            }
        }
        seen
    }

    #[test]
    fn test_question_carousel_autoplay_three_firings() {
        let mut carousel = CarouselState::new(SAMPLE_QUESTIONS.len(), true);
        assert_eq!(carousel.len(), 8);

        let seen = run_clock(&mut carousel, 18_000, true);
        assert_eq!(seen, vec![1, 2, 3]);
        assert_eq!(carousel.index(), 3);
    }

    #[test]
    fn test_question_carousel_wraps_from_last() {
        let mut carousel = CarouselState::new(SAMPLE_QUESTIONS.len(), true);
        carousel.goto(7).unwrap();

        assert_eq!(run_clock(&mut carousel, INTERVAL_MS, true), vec![0]);
    }

    #[test]
    fn test_hover_pauses_for_any_duration() {
        let mut carousel = CarouselState::new(SAMPLE_QUESTIONS.len(), true);
        carousel.set_paused(true);

        assert!(run_clock(&mut carousel, 600_000, true).is_empty());
        assert_eq!(carousel.index(), 0);

        carousel.set_paused(false);
        assert_eq!(run_clock(&mut carousel, INTERVAL_MS, true), vec![1]);
    }

    #[test]
    fn test_carousel_waits_for_visibility() {
        let mut carousel = CarouselState::new(SAMPLE_QUESTIONS.len(), true);
        let mut section = VisibilityState::new(false);

        assert!(run_clock(&mut carousel, 30_000, section.is_visible()).is_empty());

        section.apply(IntersectionSample::at_ratio(0.3));
        assert_eq!(
            run_clock(&mut carousel, 12_000, section.is_visible()),
            vec![1, 2]
        );

        section.apply(IntersectionSample::at_ratio(0.0));
        assert!(run_clock(&mut carousel, 12_000, section.is_visible()).is_empty());
    }

    #[test]
    fn test_keyboard_toggle_stops_autoplay() {
        let mut carousel = CarouselState::new(SAMPLE_QUESTIONS.len(), true);
        run_clock(&mut carousel, 12_000, true);

        carousel.apply_key(CarouselKey::from_key(" ").unwrap());
        assert!(run_clock(&mut carousel, 60_000, true).is_empty());
        assert_eq!(carousel.index(), 2);

        carousel.apply_key(CarouselKey::from_key("ArrowLeft").unwrap());
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn test_reveal_options_freeze_section() {
        let options = VisibilityOptions::reveal(0.2);
        let mut state = VisibilityState::new(options.freeze_once_visible);

        state.apply(IntersectionSample::at_ratio(0.25));
        assert!(state.is_visible());

        state.apply(IntersectionSample::at_ratio(0.0));
        assert!(state.is_visible());
        assert!(!state.should_observe(true));
    }

    #[test]
    fn test_navigation_scroll_spy() {
        // home [0, 800), features [800, 1600), how-it-works [1600, 2400),
        // integrations missing, contact [2400, 3000)
        let layout = |id: &str| match id {
            "home" => Some(SectionSpan::new(0.0, 800.0)),
            "features" => Some(SectionSpan::new(800.0, 800.0)),
            "how-it-works" => Some(SectionSpan::new(1600.0, 800.0)),
            "contact" => Some(SectionSpan::new(2400.0, 600.0)),
            _ => None,
        };
        let mut tracker = ActiveSectionTracker::new(NAVIGATION_ITEMS.iter().map(|item| item.id));

        tracker.update(0.0, layout);
        assert_eq!(tracker.active(), Some("home"));

        tracker.update(700.0, layout);
        assert_eq!(tracker.active(), Some("features"));

        tracker.update(2350.0, layout);
        assert_eq!(tracker.active(), Some("contact"));

        // Past the end of the page: keep the last match
        tracker.update(5000.0, layout);
        assert_eq!(tracker.active(), Some("contact"));
    }
}
