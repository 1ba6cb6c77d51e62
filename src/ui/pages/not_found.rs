//! 404 page for any path other than `/`.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::core::IconKind;
use crate::ui::icon::Icon;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="Page Not Found | JIRA Bot"/>

        <main class="min-h-screen bg-gradient-to-br from-primary-50 via-white to-accent-50 flex flex-col items-center justify-center p-4">
            <div class="text-center">
                <div class="w-24 h-24 mx-auto mb-6 bg-primary-100 rounded-full flex items-center justify-center">
                    <Icon kind=IconKind::Search class="w-12 h-12 text-primary-600"/>
                </div>

                <h1 class="text-6xl font-bold text-secondary-900 mb-4">"404"</h1>
                <h2 class="text-2xl font-semibold text-secondary-900 mb-2">"Page Not Found"</h2>
                <p class="text-secondary-600 mb-8 max-w-md mx-auto">
                    "The page you're looking for doesn't exist or has been moved."
                </p>

                <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                    <A href="/" attr:class="btn-base btn-primary btn-md">"Back to Home"</A>
                    <A href="/#contact" attr:class="btn-base btn-outline btn-md">"Contact Us"</A>
                </div>
            </div>
        </main>
    }
}
