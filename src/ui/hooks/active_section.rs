//! Scroll-spy for the navigation bar and the smooth-scroll helper it uses.

use leptos::prelude::*;

use crate::core::ActiveSectionTracker;

/// Id of the page region under the fixed header, updated on scroll.
///
/// Evaluated once after mount and on every window scroll event. Until the
/// first match the signal is `None`.
pub fn use_active_section<I, S>(ids: I) -> Signal<Option<String>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let tracker = StoredValue::new(ActiveSectionTracker::new(ids));
    let active = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    {
        use leptos::ev::scroll;

        let measure = move || {
            let Some(window) = web_sys::window() else {
                return;
            };
            let Some(document) = window.document() else {
                return;
            };
            let scroll_y = window.scroll_y().unwrap_or(0.0);
            let lookup = |id: &str| section_span(&document, id);

            let changed = tracker
                .try_update_value(|tracker| tracker.update(scroll_y, lookup))
                .unwrap_or(false);
            if changed {
                active.set(tracker.with_value(|tracker| tracker.active().map(str::to_string)));
            }
        };

        // Initial measurement once the DOM exists
        Effect::new(move |_| measure());

        let handle = window_event_listener(scroll, move |_| measure());
        on_cleanup(move || handle.remove());
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = tracker;

    active.into()
}

#[cfg(feature = "hydrate")]
fn section_span(document: &web_sys::Document, id: &str) -> Option<crate::core::SectionSpan> {
    use wasm_bindgen::JsCast;

    let element = document
        .get_element_by_id(id)?
        .dyn_into::<web_sys::HtmlElement>()
        .ok()?;
    Some(crate::core::SectionSpan::new(
        element.offset_top() as f64,
        element.offset_height() as f64,
    ))
}

/// Smooth-scroll so the section with `id` sits just below the header.
/// Unknown ids are ignored.
pub fn scroll_to_section(id: &str) {
    #[cfg(feature = "hydrate")]
    {
        use crate::core::sections::scroll_target;

        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(span) = window.document().and_then(|doc| section_span(&doc, id)) else {
            return;
        };

        let options = web_sys::ScrollToOptions::new();
        options.set_top(scroll_target(span.top));
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}

/// Follow an in-page `#id` link. Other hrefs are left to the browser.
pub fn follow_href(href: &str) {
    if let Some(id) = crate::core::sections::section_id_from_href(href) {
        scroll_to_section(id);
    }
}
