//! Carousel cursor over a fixed list of items.
//!
//! Navigation wraps in both directions. Autoplay is gated by three flags
//! (enabled, section visible, not hovered); the browser timer in
//! `ui::hooks::carousel` only calls [`CarouselState::autoplay_tick`], which
//! re-checks the gate so a stale tick can never advance a paused carousel.

use super::error::{SiteError, SiteResult};

/// Interval used when a carousel does not configure its own.
pub const DEFAULT_AUTOPLAY_INTERVAL_MS: u32 = 5_000;

/// Keys the carousel reacts to while it is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselKey {
    Previous,
    Next,
    ToggleAutoplay,
}

impl CarouselKey {
    /// Map a `KeyboardEvent.key` value.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(CarouselKey::Previous),
            "ArrowRight" => Some(CarouselKey::Next),
            " " | "Spacebar" => Some(CarouselKey::ToggleAutoplay),
            _ => None,
        }
    }
}

/// Element that had focus when a key was pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyTarget {
    Page,
    /// Buttons and links, where Space means "press"
    Control,
    /// Inputs and editable regions, where every key is text editing
    TextEntry,
}

impl KeyTarget {
    /// Classify by `Element.tagName` (any case) and `isContentEditable`.
    pub fn from_element(tag: &str, content_editable: bool) -> Self {
        if content_editable {
            return KeyTarget::TextEntry;
        }
        match tag.to_ascii_lowercase().as_str() {
            "input" | "textarea" | "select" => KeyTarget::TextEntry,
            "button" | "a" | "summary" => KeyTarget::Control,
            _ => KeyTarget::Page,
        }
    }
}

/// Modifier keys held during a key press.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyModifiers {
    pub alt: bool,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
}

impl KeyModifiers {
    pub fn any(&self) -> bool {
        self.alt || self.ctrl || self.meta || self.shift
    }
}

impl CarouselKey {
    /// Map a full key press. Chorded keys and typing are left to the browser;
    /// Space on a focused control keeps its native "press" meaning.
    pub fn from_key_event(key: &str, modifiers: KeyModifiers, target: KeyTarget) -> Option<Self> {
        if modifiers.any() || target == KeyTarget::TextEntry {
            return None;
        }
        match Self::from_key(key)? {
            CarouselKey::ToggleAutoplay if target == KeyTarget::Control => None,
            key => Some(key),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselState {
    index: usize,
    len: usize,
    autoplay: bool,
    paused: bool,
}

impl CarouselState {
    pub fn new(len: usize, autoplay: bool) -> Self {
        Self {
            index: 0,
            len,
            autoplay,
            paused: false,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_autoplaying(&self) -> bool {
        self.autoplay
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn previous(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Jump to `index`. Out-of-range targets are rejected and leave the
    /// cursor where it was.
    pub fn goto(&mut self, index: usize) -> SiteResult<()> {
        if self.len == 0 {
            return Err(SiteError::EmptyCarousel);
        }
        if index >= self.len {
            return Err(SiteError::CarouselIndexOutOfRange {
                index,
                len: self.len,
            });
        }
        self.index = index;
        Ok(())
    }

    pub fn toggle_autoplay(&mut self) {
        self.autoplay = !self.autoplay;
    }

    /// Hover state; pausing never touches the index.
    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Whether the autoplay timer should be running.
    pub fn autoplay_active(&self, visible: bool) -> bool {
        self.autoplay && visible && !self.paused && self.len > 1
    }

    /// Called on every timer firing. Returns `true` if the cursor advanced.
    pub fn autoplay_tick(&mut self, visible: bool) -> bool {
        if !self.autoplay_active(visible) {
            return false;
        }
        self.next();
        true
    }

    pub fn apply_key(&mut self, key: CarouselKey) {
        match key {
            CarouselKey::Previous => self.previous(),
            CarouselKey::Next => self.next(),
            CarouselKey::ToggleAutoplay => self.toggle_autoplay(),
        }
    }

    /// Completed share of the list, in percent, counting the current item.
    pub fn progress_percent(&self) -> f64 {
        if self.len == 0 {
            return 0.0;
        }
        (self.index + 1) as f64 / self.len as f64 * 100.0
    }

    /// One-based position label, e.g. `"Question 3 of 8"`.
    pub fn position_label(&self, noun: &str) -> String {
        if self.len == 0 {
            return format!("No {}s", noun.to_lowercase());
        }
        format!("{} {} of {}", noun, self.index + 1, self.len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_wraps_around() {
        let mut carousel = CarouselState::new(3, false);
        carousel.next();
        carousel.next();
        assert_eq!(carousel.index(), 2);
        carousel.next();
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_n_nexts_return_to_start() {
        let mut carousel = CarouselState::new(8, true);
        for _ in 0..8 {
            carousel.next();
        }
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_previous_from_start_goes_to_last() {
        let mut carousel = CarouselState::new(8, true);
        carousel.previous();
        assert_eq!(carousel.index(), 7);
    }

    #[test]
    fn test_goto_in_range() {
        let mut carousel = CarouselState::new(5, false);
        assert!(carousel.goto(3).is_ok());
        assert_eq!(carousel.index(), 3);
    }

    #[test]
    fn test_goto_out_of_range_is_rejected() {
        let mut carousel = CarouselState::new(5, false);
        carousel.goto(2).unwrap();

        let err = carousel.goto(5).unwrap_err();
        assert_eq!(err, SiteError::CarouselIndexOutOfRange { index: 5, len: 5 });
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn test_empty_carousel() {
        let mut carousel = CarouselState::new(0, true);
        carousel.next();
        carousel.previous();
        assert_eq!(carousel.index(), 0);
        assert!(carousel.is_empty());
        assert_eq!(carousel.goto(0), Err(SiteError::EmptyCarousel));
        assert!(!carousel.autoplay_tick(true));
        assert_eq!(carousel.progress_percent(), 0.0);
    }

    #[test]
    fn test_paused_blocks_autoplay() {
        let mut carousel = CarouselState::new(4, true);
        carousel.set_paused(true);

        for _ in 0..100 {
            assert!(!carousel.autoplay_tick(true));
        }
        assert_eq!(carousel.index(), 0);

        carousel.set_paused(false);
        assert!(carousel.autoplay_tick(true));
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn test_invisible_blocks_autoplay() {
        let mut carousel = CarouselState::new(4, true);
        assert!(!carousel.autoplay_active(false));
        assert!(!carousel.autoplay_tick(false));
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_toggle_autoplay_keeps_index() {
        let mut carousel = CarouselState::new(4, true);
        carousel.autoplay_tick(true);
        carousel.autoplay_tick(true);
        assert_eq!(carousel.index(), 2);

        carousel.toggle_autoplay();
        assert!(!carousel.is_autoplaying());
        assert_eq!(carousel.index(), 2);
        assert!(!carousel.autoplay_tick(true));
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn test_single_item_never_autoplays() {
        let carousel = CarouselState::new(1, true);
        assert!(!carousel.autoplay_active(true));
    }

    #[test]
    fn test_keys() {
        assert_eq!(CarouselKey::from_key("ArrowLeft"), Some(CarouselKey::Previous));
        assert_eq!(CarouselKey::from_key("ArrowRight"), Some(CarouselKey::Next));
        assert_eq!(CarouselKey::from_key(" "), Some(CarouselKey::ToggleAutoplay));
        assert_eq!(CarouselKey::from_key("Enter"), None);

        let mut carousel = CarouselState::new(3, true);
        carousel.apply_key(CarouselKey::Previous);
        assert_eq!(carousel.index(), 2);
        carousel.apply_key(CarouselKey::Next);
        assert_eq!(carousel.index(), 0);
        carousel.apply_key(CarouselKey::ToggleAutoplay);
        assert!(!carousel.is_autoplaying());
    }

    #[test]
    fn test_key_events_leave_browser_shortcuts_alone() {
        let alt = KeyModifiers {
            alt: true,
            ..KeyModifiers::default()
        };
        assert_eq!(CarouselKey::from_key_event("ArrowLeft", alt, KeyTarget::Page), None);

        let shift = KeyModifiers {
            shift: true,
            ..KeyModifiers::default()
        };
        assert_eq!(CarouselKey::from_key_event(" ", shift, KeyTarget::Page), None);

        let plain = KeyModifiers::default();
        assert_eq!(
            CarouselKey::from_key_event("ArrowLeft", plain, KeyTarget::Page),
            Some(CarouselKey::Previous)
        );
        assert_eq!(
            CarouselKey::from_key_event(" ", plain, KeyTarget::Page),
            Some(CarouselKey::ToggleAutoplay)
        );
    }

    #[test]
    fn test_key_events_respect_focused_element() {
        let plain = KeyModifiers::default();
        let button = KeyTarget::from_element("BUTTON", false);
        assert_eq!(button, KeyTarget::Control);

        // Space presses the focused button; arrows still navigate
        assert_eq!(CarouselKey::from_key_event(" ", plain, button), None);
        assert_eq!(
            CarouselKey::from_key_event("ArrowRight", plain, button),
            Some(CarouselKey::Next)
        );

        for (tag, editable) in [("INPUT", false), ("textarea", false), ("DIV", true)] {
            let target = KeyTarget::from_element(tag, editable);
            assert_eq!(target, KeyTarget::TextEntry);
            assert_eq!(CarouselKey::from_key_event("ArrowLeft", plain, target), None);
            assert_eq!(CarouselKey::from_key_event(" ", plain, target), None);
        }

        assert_eq!(KeyTarget::from_element("BODY", false), KeyTarget::Page);
    }

    #[test]
    fn test_progress_and_label() {
        let mut carousel = CarouselState::new(8, true);
        assert_eq!(carousel.progress_percent(), 12.5);
        assert_eq!(carousel.position_label("Question"), "Question 1 of 8");

        carousel.goto(7).unwrap();
        assert_eq!(carousel.progress_percent(), 100.0);
        assert_eq!(carousel.position_label("Question"), "Question 8 of 8");
    }
}
