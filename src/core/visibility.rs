//! Viewport visibility model backing the scroll-triggered animations.
//!
//! The browser side (IntersectionObserver wiring) lives in
//! `ui::hooks::visibility`; this module holds the options and the state
//! machine so the freeze semantics can be tested without a DOM.

use serde::Serialize;

use super::error::{SiteError, SiteResult};

/// Intersection threshold accepted by the observer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Threshold {
    Single(f64),
    List(Vec<f64>),
}

impl Threshold {
    /// All ratios at which the observer should fire.
    pub fn values(&self) -> &[f64] {
        match self {
            Threshold::Single(value) => std::slice::from_ref(value),
            Threshold::List(values) => values,
        }
    }

    fn validate(&self) -> SiteResult<()> {
        match self.values().iter().find(|v| !(0.0..=1.0).contains(*v)) {
            Some(bad) => Err(SiteError::InvalidThreshold(*bad)),
            None => Ok(()),
        }
    }

    fn clamped(&self) -> Self {
        let clamp = |v: f64| if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) };
        match self {
            Threshold::Single(value) => Threshold::Single(clamp(*value)),
            Threshold::List(values) => Threshold::List(values.iter().copied().map(clamp).collect()),
        }
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Threshold::Single(0.0)
    }
}

impl From<f64> for Threshold {
    fn from(value: f64) -> Self {
        Threshold::Single(value)
    }
}

impl From<Vec<f64>> for Threshold {
    fn from(values: Vec<f64>) -> Self {
        Threshold::List(values)
    }
}

/// Configuration for a single visibility tracker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisibilityOptions {
    pub threshold: Threshold,
    /// CSS margin applied around the root, e.g. `"0px 0px -50px 0px"`
    pub root_margin: String,
    /// Keep reporting `true` once the element has been seen
    pub freeze_once_visible: bool,
}

impl Default for VisibilityOptions {
    fn default() -> Self {
        Self {
            threshold: Threshold::default(),
            root_margin: "0%".to_string(),
            freeze_once_visible: false,
        }
    }
}

impl VisibilityOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn threshold(mut self, threshold: impl Into<Threshold>) -> Self {
        self.threshold = threshold.into();
        self
    }

    pub fn root_margin(mut self, margin: impl Into<String>) -> Self {
        self.root_margin = margin.into();
        self
    }

    pub fn freeze_once_visible(mut self) -> Self {
        self.freeze_once_visible = true;
        self
    }

    /// Options used by the section reveal animations: fire once, then freeze.
    pub fn reveal(threshold: f64) -> Self {
        Self::new().threshold(threshold).freeze_once_visible()
    }

    pub fn validate(&self) -> SiteResult<()> {
        self.threshold.validate()
    }

    /// Copy of these options with every threshold forced into `[0, 1]`.
    pub fn sanitized(&self) -> Self {
        Self {
            threshold: self.threshold.clamped(),
            ..self.clone()
        }
    }
}

/// One observer callback entry, reduced to what the tracker needs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IntersectionSample {
    pub is_intersecting: bool,
    pub ratio: f64,
}

impl IntersectionSample {
    pub fn new(is_intersecting: bool, ratio: f64) -> Self {
        Self {
            is_intersecting,
            ratio,
        }
    }

    /// Sample as the browser reports it for a given visible ratio.
    pub fn at_ratio(ratio: f64) -> Self {
        Self::new(ratio > 0.0, ratio)
    }
}

/// Visibility signal owned by one tracked element.
///
/// Follows `is_intersecting` from the observer entry, which already reflects
/// the configured threshold.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VisibilityState {
    visible: bool,
    freeze_once_visible: bool,
    last_sample: Option<IntersectionSample>,
}

impl VisibilityState {
    pub fn new(freeze_once_visible: bool) -> Self {
        Self {
            freeze_once_visible,
            ..Self::default()
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Frozen trackers ignore further samples and hold `true`.
    pub fn is_frozen(&self) -> bool {
        self.freeze_once_visible && self.visible
    }

    pub fn last_sample(&self) -> Option<IntersectionSample> {
        self.last_sample
    }

    /// Whether an observer should be attached right now.
    pub fn should_observe(&self, observer_supported: bool) -> bool {
        observer_supported && !self.is_frozen()
    }

    /// Record an observer callback. Returns `true` if the signal changed.
    pub fn apply(&mut self, sample: IntersectionSample) -> bool {
        if self.is_frozen() {
            return false;
        }
        self.last_sample = Some(sample);
        let changed = self.visible != sample.is_intersecting;
        self.visible = sample.is_intersecting;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = VisibilityOptions::default();
        assert_eq!(options.threshold, Threshold::Single(0.0));
        assert_eq!(options.root_margin, "0%");
        assert!(!options.freeze_once_visible);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let options = VisibilityOptions::new()
            .threshold(vec![0.1, 0.5])
            .root_margin("0px 0px -50px 0px")
            .freeze_once_visible();

        assert_eq!(options.threshold.values(), &[0.1, 0.5]);
        assert_eq!(options.root_margin, "0px 0px -50px 0px");
        assert!(options.freeze_once_visible);
    }

    #[test]
    fn test_invalid_threshold_rejected() {
        let options = VisibilityOptions::new().threshold(vec![0.2, 1.4]);
        assert_eq!(options.validate(), Err(SiteError::InvalidThreshold(1.4)));

        let options = VisibilityOptions::new().threshold(-0.1);
        assert_eq!(options.validate(), Err(SiteError::InvalidThreshold(-0.1)));
    }

    #[test]
    fn test_sanitized_clamps() {
        let options = VisibilityOptions::new().threshold(vec![-1.0, 0.3, 2.0]).sanitized();
        assert_eq!(options.threshold.values(), &[0.0, 0.3, 1.0]);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_intersecting_flag_decides_visibility() {
        // The observer applies the threshold before calling back; the
        // reported ratio is informational only.
        let options = VisibilityOptions::new().threshold(0.3);
        let mut state = VisibilityState::new(options.freeze_once_visible);

        assert!(state.apply(IntersectionSample::new(true, 0.1)));
        assert!(state.is_visible());
        assert_eq!(state.last_sample().map(|s| s.ratio), Some(0.1));

        assert!(state.apply(IntersectionSample::new(false, 0.45)));
        assert!(!state.is_visible());
    }

    #[test]
    fn test_visible_after_single_callback() {
        let mut state = VisibilityState::new(false);
        assert!(!state.is_visible());

        let changed = state.apply(IntersectionSample::at_ratio(0.35));
        assert!(changed);
        assert!(state.is_visible());
        assert_eq!(state.last_sample().map(|s| s.ratio), Some(0.35));
    }

    #[test]
    fn test_unfrozen_follows_intersection() {
        let mut state = VisibilityState::new(false);
        state.apply(IntersectionSample::at_ratio(0.5));
        assert!(state.apply(IntersectionSample::at_ratio(0.0)));
        assert!(!state.is_visible());
        assert!(state.should_observe(true));
    }

    #[test]
    fn test_freeze_once_visible() {
        let mut state = VisibilityState::new(true);
        state.apply(IntersectionSample::at_ratio(0.0));
        assert!(!state.is_frozen());

        state.apply(IntersectionSample::at_ratio(0.4));
        assert!(state.is_frozen());
        assert!(!state.should_observe(true));

        assert!(!state.apply(IntersectionSample::at_ratio(0.0)));
        assert!(state.is_visible());
        assert_eq!(state.last_sample().map(|s| s.ratio), Some(0.4));
    }

    #[test]
    fn test_unsupported_never_observes() {
        let state = VisibilityState::new(false);
        assert!(!state.should_observe(false));
        assert!(!state.is_visible());
    }
}
