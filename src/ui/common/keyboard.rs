//! Keyboard shortcut hints

use leptos::prelude::*;

/// Single keyboard shortcut hint item
#[derive(Clone, Debug, PartialEq)]
pub struct KeyboardHint {
    /// Key label (e.g. "←", "Space")
    pub key: &'static str,
    /// What the key does (e.g. "previous")
    pub action: &'static str,
}

impl KeyboardHint {
    pub const fn new(key: &'static str, action: &'static str) -> Self {
        Self { key, action }
    }
}

/// Keys understood by the question carousel while it is on screen.
pub const CAROUSEL_HINTS: &[KeyboardHint] = &[
    KeyboardHint::new("←", "previous"),
    KeyboardHint::new("→", "next"),
    KeyboardHint::new("Space", "play / pause"),
];

/// Row of `<kbd>` chips with their actions
#[component]
pub fn KeyboardHints(hints: &'static [KeyboardHint]) -> impl IntoView {
    view! {
        <div class="flex flex-wrap items-center justify-center gap-4 text-xs text-secondary-500">
            {hints
                .iter()
                .map(|hint| {
                    view! {
                        <div class="flex items-center gap-1">
                            <kbd class="kbd">{hint.key}</kbd>
                            <span>{hint.action}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
