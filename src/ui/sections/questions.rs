//! `#sample-questions`: auto-advancing carousel of natural-language queries
//! and the bot's answers.
//!
//! The carousel tracks its own visibility (not frozen) so autoplay and the
//! keyboard bindings switch off whenever the section scrolls away.

use leptos::prelude::*;

use crate::core::{IconKind, SampleQuestion, VisibilityOptions};
use crate::ui::common::{
    Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, CAROUSEL_HINTS, Container,
    KeyboardHints, Section, SectionPadding, accent_classes, class_list,
};
use crate::ui::hooks::{Carousel, follow_href, use_carousel, use_visibility};
use crate::ui::icon::Icon;

/// Autoplay period for the question carousel.
pub const QUESTION_INTERVAL_MS: u32 = 6_000;

/// Share of the carousel that must be on screen for autoplay to run.
const CAROUSEL_VISIBILITY_THRESHOLD: f64 = 0.3;

/// `"child-welfare"` style ids rendered as words.
fn humanize(label: &str) -> String {
    label.replace('-', " ")
}

#[component]
pub fn QuestionCard(question: &'static SampleQuestion) -> impl IntoView {
    let palette = accent_classes(question.category.accent());
    let tile = class_list(["w-12 h-12 rounded-xl flex items-center justify-center flex-shrink-0", palette.tile, palette.fg]);
    let meta = format!(
        "{} • {}",
        humanize(&question.category.to_string()),
        question.complexity.level_label()
    );

    view! {
        <div class="space-y-8">
            <div class="bg-gradient-to-r from-blue-50 to-blue-100 rounded-2xl p-6">
                <div class="flex items-start gap-4">
                    <div class=tile>
                        <Icon kind=question.icon class="w-6 h-6"/>
                    </div>
                    <div class="flex-1">
                        <p class="text-sm text-blue-600 font-medium mb-2 uppercase tracking-wide">{meta}</p>
                        <h3 class="text-2xl font-bold text-secondary-900 leading-relaxed">
                            "\u{201c}" {question.question} "\u{201d}"
                        </h3>
                    </div>
                </div>
            </div>

            <div class="bg-gradient-to-r from-green-50 to-green-100 rounded-2xl p-6">
                <div class="flex items-start gap-4">
                    <div class="w-12 h-12 bg-green-500 rounded-full flex items-center justify-center flex-shrink-0">
                        <span class="text-white text-lg font-bold">"A"</span>
                    </div>
                    <div class="flex-1">
                        <p class="text-sm text-green-600 font-medium mb-2 uppercase tracking-wide">"AI Response"</p>
                        <p class="text-lg text-secondary-800 leading-relaxed">{question.answer}</p>
                    </div>
                </div>
            </div>

            <div class="flex flex-wrap gap-2 justify-center">
                <Badge variant=BadgeVariant::Info>"Natural Language Processing"</Badge>
                <Badge variant=BadgeVariant::Success>"Real-time Analysis"</Badge>
                <Badge variant=BadgeVariant::Primary>"Child Welfare Optimized"</Badge>
            </div>
        </div>
    }
}

/// Previous / next / play-pause controls, position dots and progress bar.
#[component]
pub fn CarouselNavigation(carousel: Carousel) -> impl IntoView {
    // Built once; only each dot's class and aria-current track the index
    let dots = (0..carousel.len())
        .map(|index| {
            let active = move || carousel.index() == index;
            view! {
                <button
                    type="button"
                    class=move || {
                        if active() {
                            "w-3 h-3 rounded-full transition-all duration-300 ease-out bg-primary-500 scale-125"
                        } else {
                            "w-3 h-3 rounded-full transition-all duration-300 ease-out bg-secondary-300 hover:bg-secondary-400 hover:scale-110"
                        }
                    }
                    aria-label=format!("Go to question {}", index + 1)
                    aria-current=move || active().then_some("true")
                    on:click=move |_| {
                        let _ = carousel.goto(index);
                    }
                ></button>
            }
        })
        .collect_view();
    let control = "p-3 rounded-full bg-primary-500 text-white hover:bg-primary-600 transition-all";

    view! {
        <div class="flex flex-col items-center gap-6">
            <div class="flex items-center gap-6 bg-white rounded-2xl px-8 py-4 shadow-lg border border-secondary-200">
                <button type="button" class=control aria-label="Previous question" on:click=move |_| carousel.previous()>
                    <Icon kind=IconKind::ChevronLeft/>
                </button>

                <div class="flex gap-2">{dots}</div>

                <button type="button" class=control aria-label="Next question" on:click=move |_| carousel.next()>
                    <Icon kind=IconKind::ChevronRight/>
                </button>

                <div class="w-px h-8 bg-secondary-300"></div>

                <button
                    type="button"
                    class=move || {
                        if carousel.is_autoplaying() {
                            "p-3 rounded-full text-white transition-all bg-error-500 hover:bg-error-600"
                        } else {
                            "p-3 rounded-full text-white transition-all bg-success-500 hover:bg-success-600"
                        }
                    }
                    aria-label=move || {
                        if carousel.is_autoplaying() { "Pause auto-advance" } else { "Start auto-advance" }
                    }
                    aria-pressed=move || carousel.is_autoplaying().to_string()
                    on:click=move |_| carousel.toggle_autoplay()
                >
                    {move || {
                        let kind = if carousel.is_autoplaying() { IconKind::Pause } else { IconKind::Play };
                        view! { <Icon kind=kind/> }
                    }}
                </button>
            </div>

            <div class="w-full max-w-md bg-secondary-200 rounded-full h-2">
                <div
                    class="bg-primary-500 h-2 rounded-full transition-all duration-300"
                    style=move || format!("width: {}%", carousel.progress_percent())
                ></div>
            </div>

            <KeyboardHints hints=CAROUSEL_HINTS/>
        </div>
    }
}

#[component]
pub fn QuestionCarousel(
    questions: &'static [SampleQuestion],
    #[prop(default = true)]
    autoplay: bool,
    #[prop(default = QUESTION_INTERVAL_MS)]
    interval_ms: u32,
) -> impl IntoView {
    let visibility = use_visibility(VisibilityOptions::new().threshold(CAROUSEL_VISIBILITY_THRESHOLD));
    let carousel = use_carousel(questions.len(), autoplay, interval_ms, visibility.is_visible);

    let current = move || questions.get(carousel.index());
    let seconds = interval_ms / 1_000;

    view! {
        <Section
            id="sample-questions"
            padding=SectionPadding::ExtraLarge
            class="bg-gradient-to-br from-blue-50 to-indigo-100"
        >
            <Container>
                <div class="text-center mb-12 space-y-6">
                    <div class="inline-flex items-center gap-2 px-4 py-2 bg-blue-100 text-blue-800 rounded-full text-sm font-medium">
                        <Icon kind=IconKind::Brain class="w-4 h-4"/>
                        "AI-Powered Natural Language Processing"
                    </div>
                    <h2 class="text-5xl font-bold text-secondary-900">"Ask Questions, Get Instant Insights"</h2>
                    <p class="text-xl text-secondary-600 max-w-3xl mx-auto leading-relaxed">
                        "See how our AI understands natural language and provides actionable insights for child welfare case management."
                    </p>
                    <div class="flex items-center justify-center gap-4 text-sm text-secondary-500">
                        <span class="bg-white px-3 py-1 rounded-full shadow-sm">
                            {format!("{} Sample Queries", questions.len())}
                        </span>
                        <span class="bg-white px-3 py-1 rounded-full shadow-sm" aria-live="polite">
                            {move || carousel.position_label("Question")}
                        </span>
                    </div>
                </div>

                <div
                    node_ref=visibility.node_ref
                    class="max-w-5xl mx-auto"
                    on:mouseenter=move |_| carousel.set_paused(true)
                    on:mouseleave=move |_| carousel.set_paused(false)
                >
                    <div class="bg-white rounded-3xl shadow-2xl p-8 mb-8 border-2 border-blue-100">
                        {move || match current() {
                            Some(question) => view! { <QuestionCard question=question/> }.into_any(),
                            None => view! {
                                <p class="text-center py-12 text-secondary-600">"No sample questions yet."</p>
                            }
                            .into_any(),
                        }}
                    </div>

                    <Show when=move || !carousel.is_empty()>
                        <CarouselNavigation carousel=carousel/>
                        <p class="mt-4 text-sm text-secondary-500 text-center">
                            {format!("Auto-advance every {seconds} seconds")}
                        </p>
                    </Show>
                </div>

                <div class="text-center mt-16 bg-white rounded-3xl p-12 shadow-xl border border-secondary-200">
                    <h3 class="text-3xl font-bold text-secondary-900 mb-4">"Ready to Transform Your Workflow?"</h3>
                    <p class="text-lg text-secondary-600 mb-8 max-w-2xl mx-auto">
                        "Experience AI-powered JIRA management designed specifically for child welfare agencies."
                    </p>
                    <div class="flex flex-col sm:flex-row gap-4 justify-center">
                        <Button
                            size=ButtonSize::Large
                            icon=IconKind::Zap
                            on_click=Callback::new(|_| follow_href("#contact"))
                        >
                            "Try Interactive Demo"
                        </Button>
                        <Button
                            variant=ButtonVariant::Outline
                            size=ButtonSize::Large
                            icon=IconKind::Calendar
                            on_click=Callback::new(|_| follow_href("#contact"))
                        >
                            "Schedule Live Demo"
                        </Button>
                    </div>
                </div>
            </Container>
        </Section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_humanize() {
        assert_eq!(humanize("child-welfare"), "child welfare");
        assert_eq!(humanize("reporting"), "reporting");
    }

    #[test]
    fn test_interval_and_threshold() {
        assert_eq!(QUESTION_INTERVAL_MS, 6_000);
        assert!(VisibilityOptions::new()
            .threshold(CAROUSEL_VISIBILITY_THRESHOLD)
            .validate()
            .is_ok());
    }
}
