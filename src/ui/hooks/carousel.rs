//! `use_carousel`: reactive wrapper around [`CarouselState`] with autoplay
//! timer and keyboard control.

use leptos::logging::warn;
use leptos::prelude::*;

use crate::core::{CarouselState, SiteResult};

/// Copyable carousel handle. Reads are reactive except `len` and
/// `is_empty`, which never change.
#[derive(Clone, Copy)]
pub struct Carousel {
    state: RwSignal<CarouselState>,
    len: usize,
}

impl Carousel {
    pub fn index(&self) -> usize {
        self.state.with(CarouselState::index)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_autoplaying(&self) -> bool {
        self.state.with(CarouselState::is_autoplaying)
    }

    pub fn is_paused(&self) -> bool {
        self.state.with(CarouselState::is_paused)
    }

    pub fn progress_percent(&self) -> f64 {
        self.state.with(CarouselState::progress_percent)
    }

    pub fn position_label(&self, noun: &str) -> String {
        self.state.with(|s| s.position_label(noun))
    }

    pub fn next(&self) {
        self.state.update(CarouselState::next);
    }

    pub fn previous(&self) {
        self.state.update(CarouselState::previous);
    }

    /// Rejected jumps are logged and leave the index unchanged.
    pub fn goto(&self, index: usize) -> SiteResult<()> {
        let mut outcome = Ok(());
        self.state.maybe_update(|s| {
            outcome = s.goto(index);
            outcome.is_ok()
        });
        if let Err(err) = &outcome {
            warn!("carousel jump ignored: {err}");
        }
        outcome
    }

    pub fn toggle_autoplay(&self) {
        self.state.update(CarouselState::toggle_autoplay);
    }

    pub fn set_paused(&self, paused: bool) {
        self.state.maybe_update(|s| {
            let changed = s.is_paused() != paused;
            s.set_paused(paused);
            changed
        });
    }
}

/// Build a carousel over `len` items.
///
/// While `autoplay`, `visible` and not hovered, the cursor advances every
/// `interval_ms`. The timer is dropped and rebuilt whenever that gate flips.
/// Arrow keys and Space act on the carousel only while `visible`, never with
/// a modifier held or while typing; Space on a focused button presses it.
pub fn use_carousel(len: usize, autoplay: bool, interval_ms: u32, visible: Signal<bool>) -> Carousel {
    let state = RwSignal::new(CarouselState::new(len, autoplay));

    #[cfg(feature = "hydrate")]
    {
        use gloo_timers::callback::Interval;
        use leptos::ev::keydown;

        use wasm_bindgen::JsCast;

        use crate::core::{CarouselKey, KeyModifiers, KeyTarget};

        let gate = Memo::new(move |_| state.with(|s| s.autoplay_active(visible.get())));
        let timer = StoredValue::new_local(None::<Interval>);

        Effect::new(move |_| {
            timer.set_value(None);
            if gate.get() {
                let interval = Interval::new(interval_ms, move || {
                    state.maybe_update(|s| s.autoplay_tick(visible.get_untracked()));
                });
                timer.set_value(Some(interval));
            }
        });
        on_cleanup(move || {
            let _ = timer.try_update_value(|slot| slot.take());
        });

        let handle = window_event_listener(keydown, move |ev| {
            if !visible.get_untracked() {
                return;
            }
            let modifiers = KeyModifiers {
                alt: ev.alt_key(),
                ctrl: ev.ctrl_key(),
                meta: ev.meta_key(),
                shift: ev.shift_key(),
            };
            let target = ev
                .target()
                .and_then(|target| target.dyn_into::<web_sys::HtmlElement>().ok())
                .map(|element| KeyTarget::from_element(&element.tag_name(), element.is_content_editable()))
                .unwrap_or(KeyTarget::Page);
            if let Some(key) = CarouselKey::from_key_event(&ev.key(), modifiers, target) {
                ev.prevent_default();
                state.update(|s| s.apply_key(key));
            }
        });
        on_cleanup(move || handle.remove());
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (interval_ms, visible);

    Carousel { state, len }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[test]
    fn test_len_does_not_subscribe_to_index() {
        Owner::new().with(|| {
            let carousel = use_carousel(4, false, 6_000, RwSignal::new(false).into());
            let runs = Arc::new(AtomicUsize::new(0));

            let counted = Arc::clone(&runs);
            let len = Memo::new(move |_| {
                counted.fetch_add(1, Ordering::SeqCst);
                carousel.len()
        });

        assert_eq!(len.get(), 4);
        carousel.next();
        carousel.next();
        assert!(carousel.goto(3).is_ok());
        assert_eq!(len.get(), 4);
        assert!(!carousel.is_empty());
        assert_eq!(runs.load(Ordering::SeqCst), 1);
        });
    }

    #[test]
    fn test_index_reads_stay_reactive() {
        Owner::new().with(|| {
            let carousel = use_carousel(3, false, 6_000, RwSignal::new(false).into());
            let index = Memo::new(move |_| carousel.index());

            assert_eq!(index.get(), 0);
            carousel.previous();
            assert_eq!(index.get(), 2);
        });
    }
}
