//! Scroll-triggered fade-in wrapper.

use leptos::prelude::*;

use crate::core::VisibilityOptions;
use crate::ui::common::class_list;
use crate::ui::hooks::use_visibility;

/// Fades and slides its children in the first time they enter the viewport.
///
/// With `animated = false` the content is shown immediately and no transition
/// classes are applied.
#[component]
pub fn Reveal(
    /// Visible share of the element needed to trigger
    #[prop(default = 0.1)]
    threshold: f64,
    /// Transition delay, used to stagger grid items
    #[prop(default = 0)]
    delay_ms: u32,
    #[prop(default = true)]
    animated: bool,
    #[prop(default = "")]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let visibility = use_visibility(VisibilityOptions::reveal(threshold));
    let shown = move || !animated || visibility.is_visible.get();

    view! {
        <div
            node_ref=visibility.node_ref
            class=class_list([class])
            class:reveal=animated
            class:is-visible=shown
            style=(delay_ms > 0).then(|| format!("transition-delay: {delay_ms}ms"))
        >
            {children()}
        </div>
    }
}
