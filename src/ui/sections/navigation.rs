//! Fixed top navigation with scroll-spy highlighting and the mobile menu.

use leptos::prelude::*;

use crate::core::{IconKind, NavigationItem};
use crate::ui::common::{Button, ButtonSize, Container, ContainerPadding};
use crate::ui::hooks::{follow_href, use_active_section};
use crate::ui::icon::Icon;

fn desktop_item_class(active: bool) -> &'static str {
    if active {
        "px-4 py-2 rounded-lg font-medium transition-all duration-200 focus:outline-none focus:ring-2 focus:ring-primary-500 focus:ring-offset-2 bg-primary-100 text-primary-700 font-semibold"
    } else {
        "px-4 py-2 rounded-lg font-medium transition-all duration-200 focus:outline-none focus:ring-2 focus:ring-primary-500 focus:ring-offset-2 text-secondary-700 hover:bg-primary-50 hover:text-primary-700"
    }
}

/// Full-screen panel under the header on small screens.
///
/// Escape and a click on the backdrop close it. While open, the document body
/// does not scroll.
#[component]
pub fn MobileMenu(
    open: RwSignal<bool>,
    items: &'static [NavigationItem],
    on_select: Callback<&'static NavigationItem>,
) -> impl IntoView {
    #[cfg(feature = "hydrate")]
    {
        use leptos::ev::keydown;

        let handle = window_event_listener(keydown, move |ev| {
            if ev.key() == "Escape" && open.get_untracked() {
                open.set(false);
            }
        });
        on_cleanup(move || handle.remove());

        Effect::new(move |_| set_body_scroll_locked(open.get()));
        on_cleanup(|| set_body_scroll_locked(false));
    }

    let close = move || open.set(false);

    view! {
        <Show when=move || open.get()>
            <div
                class="fixed inset-0 bg-black/50 backdrop-blur-sm z-40 md:hidden"
                aria-hidden="true"
                on:click=move |_| close()
            ></div>
            <div
                id="mobile-menu"
                class="fixed top-16 left-0 right-0 bottom-0 bg-white z-50 md:hidden"
                role="dialog"
                aria-modal="true"
                aria-label="Mobile navigation menu"
            >
                <div class="flex flex-col h-full">
                    <nav class="flex-1 px-4 py-6 space-y-2">
                        {items
                            .iter()
                            .map(|item| view! {
                                <button
                                    type="button"
                                    class="w-full text-left px-4 py-3 rounded-lg font-medium text-lg text-secondary-700 hover:bg-primary-50 hover:text-primary-700 focus:outline-none focus:ring-2 focus:ring-primary-500 transition-colors duration-200"
                                    on:click=move |_| on_select.run(item)
                                >
                                    {item.label}
                                </button>
                            })
                            .collect_view()}
                    </nav>
                    <div class="px-4 py-6 border-t border-secondary-200">
                        <Button
                            size=ButtonSize::Large
                            full_width=true
                            on_click=Callback::new(move |_| {
                                close();
                                follow_href("#contact");
                            })
                        >
                            "Get Started"
                        </Button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[cfg(feature = "hydrate")]
fn set_body_scroll_locked(locked: bool) {
    let Some(body) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
    else {
        return;
    };
    let value = if locked { "hidden" } else { "" };
    if let Err(err) = body.style().set_property("overflow", value) {
        leptos::logging::warn!("could not toggle body scrolling: {err:?}");
    }
}

#[component]
pub fn Navigation(items: &'static [NavigationItem]) -> impl IntoView {
    let menu_open = RwSignal::new(false);
    let active = use_active_section(items.iter().map(|item| item.id));

    let select = Callback::new(move |item: &'static NavigationItem| {
        follow_href(item.href);
        menu_open.set(false);
    });

    view! {
        <nav
            class="fixed top-0 left-0 right-0 w-full z-50 bg-white/95 backdrop-blur-md border-b border-secondary-200 shadow-lg transition-all duration-300"
            aria-label="Main navigation"
        >
            <Container padding=ContainerPadding::None>
                <div class="flex items-center justify-between h-16 px-4 md:px-6">
                    <a href="#home" class="flex items-center gap-2" on:click=move |ev| {
                        ev.prevent_default();
                        follow_href("#home");
                    }>
                        <span class="w-8 h-8 bg-gradient-primary rounded-lg flex items-center justify-center">
                            <Icon kind=IconKind::Zap class="w-5 h-5 text-white"/>
                        </span>
                        <span class="text-xl font-bold text-secondary-900">"JIRA Bot"</span>
                    </a>

                    <div class="hidden md:flex items-center gap-1">
                        {items
                            .iter()
                            .map(|item| {
                                let is_active = move || active.with(|id| id.as_deref() == Some(item.id));
                                view! {
                                    <button
                                        type="button"
                                        class=move || desktop_item_class(is_active())
                                        aria-current=move || is_active().then_some("page")
                                        on:click=move |_| select.run(item)
                                    >
                                        {item.label}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="hidden md:block">
                        <Button on_click=Callback::new(|_| follow_href("#contact"))>"Get Started"</Button>
                    </div>

                    <button
                        type="button"
                        class="md:hidden p-2 rounded-lg hover:bg-secondary-100 focus:outline-none focus:ring-2 focus:ring-primary-500"
                        aria-controls="mobile-menu"
                        aria-expanded=move || menu_open.get().to_string()
                        aria-label=move || if menu_open.get() { "Close menu" } else { "Open menu" }
                        on:click=move |_| menu_open.update(|open| *open = !*open)
                    >
                        {move || {
                            let kind = if menu_open.get() { IconKind::X } else { IconKind::Menu };
                            view! { <Icon kind=kind class="w-6 h-6 text-secondary-700"/> }
                        }}
                    </button>
                </div>
            </Container>
        </nav>

        <MobileMenu open=menu_open items=items on_select=select/>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_item_class() {
        assert!(desktop_item_class(true).contains("bg-primary-100"));
        assert!(!desktop_item_class(false).contains("bg-primary-100"));
    }
}
