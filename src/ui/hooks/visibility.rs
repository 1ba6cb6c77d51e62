//! `use_visibility`: reports whether an element has entered the viewport.
//!
//! One IntersectionObserver per tracked element. Browsers without the API
//! leave the element "never visible" and log a single warning per page.

#[cfg(any(feature = "hydrate", test))]
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::html;
use leptos::logging::warn;
use leptos::prelude::*;

use crate::core::{IntersectionSample, VisibilityOptions, VisibilityState};

#[cfg(feature = "hydrate")]
static UNSUPPORTED_WARNED: AtomicBool = AtomicBool::new(false);

/// True for the first caller only; later elements stay hidden silently.
#[cfg(any(feature = "hydrate", test))]
fn first_unsupported_warning(flag: &AtomicBool) -> bool {
    !flag.swap(true, Ordering::Relaxed)
}

/// Handle returned by [`use_visibility`]. Bind `node_ref` to the element.
#[derive(Clone, Copy)]
pub struct Visibility {
    pub node_ref: NodeRef<html::Div>,
    pub is_visible: Signal<bool>,
    /// Most recent observer entry, `None` until the first callback
    pub entry: Signal<Option<IntersectionSample>>,
}

pub fn use_visibility(options: VisibilityOptions) -> Visibility {
    let options = match options.validate() {
        Ok(()) => options,
        Err(err) => {
            warn!("{err}; clamping visibility threshold");
            options.sanitized()
        }
    };

    let node_ref = NodeRef::<html::Div>::new();
    let state = RwSignal::new(VisibilityState::new(options.freeze_once_visible));

    #[cfg(feature = "hydrate")]
    observe(node_ref, state, options);
    #[cfg(not(feature = "hydrate"))]
    let _ = options;

    let is_visible = Memo::new(move |_| state.with(VisibilityState::is_visible));
    let entry = Memo::new(move |_| state.with(VisibilityState::last_sample));

    Visibility {
        node_ref,
        is_visible: is_visible.into(),
        entry: entry.into(),
    }
}

/// Live observer plus the JS callback it calls into. Dropping disconnects.
#[cfg(feature = "hydrate")]
struct Observation {
    observer: web_sys::IntersectionObserver,
    _callback: wasm_bindgen::closure::Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>,
}

#[cfg(feature = "hydrate")]
impl Drop for Observation {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[cfg(feature = "hydrate")]
fn observer_supported() -> bool {
    web_sys::window()
        .map(|window| {
            js_sys::Reflect::has(&window, &wasm_bindgen::JsValue::from_str("IntersectionObserver"))
                .unwrap_or(false)
        })
        .unwrap_or(false)
}

#[cfg(feature = "hydrate")]
fn observe(
    node_ref: NodeRef<html::Div>,
    state: RwSignal<VisibilityState>,
    options: VisibilityOptions,
) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;
    use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    use crate::core::Threshold;

    let supported = observer_supported();
    if !supported {
        if first_unsupported_warning(&UNSUPPORTED_WARNED) {
            warn!("IntersectionObserver unavailable; elements stay hidden");
        }
        return;
    }

    let observation = StoredValue::new_local(None::<Observation>);
    let frozen = Memo::new(move |_| state.with(VisibilityState::is_frozen));

    Effect::new(move |_| {
        let element = node_ref.get();
        let frozen = frozen.get();

        // Tear down whatever was attached for the previous element/state
        observation.set_value(None);

        let Some(element) = element else {
            return;
        };
        if frozen || !state.with_untracked(|s| s.should_observe(supported)) {
            return;
        }

        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    let sample =
                        IntersectionSample::new(entry.is_intersecting(), entry.intersection_ratio());
                    state.update(|s| {
                        s.apply(sample);
                    });
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_root_margin(&options.root_margin);
        match &options.threshold {
            Threshold::Single(value) => init.set_threshold(&wasm_bindgen::JsValue::from_f64(*value)),
            Threshold::List(values) => {
                let list: js_sys::Array = values
                    .iter()
                    .map(|v| wasm_bindgen::JsValue::from_f64(*v))
                    .collect();
                init.set_threshold(&list);
            }
        }

        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => {
                observer.observe(&element);
                observation.set_value(Some(Observation {
                    observer,
                    _callback: callback,
                }));
            }
            Err(err) => warn!("failed to create IntersectionObserver: {err:?}"),
        }
    });

    on_cleanup(move || {
        let _ = observation.try_update_value(|slot| slot.take());
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_observer_warns_once() {
        let flag = AtomicBool::new(false);
        assert!(first_unsupported_warning(&flag));
        for _ in 0..5 {
            assert!(!first_unsupported_warning(&flag));
        }
    }
}
