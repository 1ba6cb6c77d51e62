//! `#home`: headline, calls to action and the animated product illustration.

use leptos::prelude::*;

use crate::core::data::{HERO_METRICS, HERO_TOASTS, TRUST_BADGES};
use crate::core::{IconKind, Metric, Trend, VisibilityOptions};
use crate::ui::common::{
    Button, ButtonSize, ButtonVariant, Card, CardPadding, CardVariant, Container,
    ContainerPadding, IconPosition, Reveal, Section, SectionElement, SectionPadding,
    accent_classes, class_list, trend_classes,
};
use crate::ui::hooks::{follow_href, use_visibility};
use crate::ui::icon::Icon;

/// Button label, icon and in-page target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CtaLink {
    pub label: &'static str,
    pub icon: IconKind,
    pub href: &'static str,
}

pub const GET_STARTED: CtaLink = CtaLink {
    label: "Get Started",
    icon: IconKind::ArrowRight,
    href: "#contact",
};

pub const WATCH_DEMO: CtaLink = CtaLink {
    label: "Watch Demo",
    icon: IconKind::Play,
    href: "#sample-questions",
};

/// Float timing (delay ms, duration ms) and placement for each hero toast.
const TOAST_LAYOUT: [(u32, u32, &str); 3] = [
    (500, 4000, "absolute top-0 left-4"),
    (1000, 3500, "absolute top-4 right-4"),
    (1500, 4500, "absolute bottom-0 left-1/2 -translate-x-1/2"),
];

fn trend_icon(trend: Trend) -> IconKind {
    match trend {
        Trend::Up => IconKind::TrendingUp,
        Trend::Down => IconKind::TrendingDown,
        Trend::Neutral => IconKind::Minus,
    }
}

/// Gently bobbing wrapper; `delay_ms` offsets the phase between siblings.
#[component]
pub fn FloatingElement(
    #[prop(default = 0)]
    delay_ms: u32,
    #[prop(default = 3000)]
    duration_ms: u32,
    #[prop(default = "")]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=class_list(["animate-float", class])
            style=format!("animation-delay: {delay_ms}ms; animation-duration: {duration_ms}ms")
        >
            {children()}
        </div>
    }
}

#[component]
pub fn MetricsCard(metric: &'static Metric) -> impl IntoView {
    let pill = class_list([
        "inline-flex items-center gap-1 px-2 py-1 rounded-full text-xs font-medium",
        trend_classes(metric.trend),
    ]);

    view! {
        <Card variant=CardVariant::Glass padding=CardPadding::Medium hover=true class="text-center">
            <div class="space-y-3">
                <div class="flex justify-center">
                    <div class="w-12 h-12 bg-primary-100 text-primary-600 rounded-xl flex items-center justify-center">
                        <Icon kind=metric.icon class="w-6 h-6"/>
                    </div>
                </div>
                <div class="text-3xl font-bold text-secondary-900">{metric.value}</div>
                <div class="text-sm font-medium text-secondary-600">{metric.label}</div>
                {metric.change.map(|change| view! {
                    <div class=pill>
                        <Icon kind=trend_icon(metric.trend) class="w-4 h-4"/>
                        <span>{change}</span>
                    </div>
                })}
            </div>
        </Card>
    }
}

#[component]
pub fn CtaButtons(
    primary: CtaLink,
    #[prop(optional)]
    secondary: Option<CtaLink>,
    #[prop(default = ButtonSize::Large)]
    size: ButtonSize,
) -> impl IntoView {
    view! {
        <div class="flex flex-col sm:flex-row gap-4">
            <Button
                size=size
                icon=primary.icon
                icon_position=IconPosition::Right
                class="transform hover:scale-105 transition-transform duration-200"
                on_click=Callback::new(move |_| follow_href(primary.href))
            >
                {primary.label}
            </Button>
            {secondary.map(|link| view! {
                <Button
                    variant=ButtonVariant::Outline
                    size=size
                    icon=link.icon
                    class="transform hover:scale-105 transition-transform duration-200"
                    on_click=Callback::new(move |_| follow_href(link.href))
                >
                    {link.label}
                </Button>
            })}
        </div>
    }
}

#[component]
pub fn HeroContent(
    headline: &'static str,
    subheadline: &'static str,
    #[prop(default = true)]
    animated: bool,
    #[prop(default = true)]
    show_metrics: bool,
) -> impl IntoView {
    let metrics = use_visibility(VisibilityOptions::reveal(0.2));
    let metrics_visible = metrics.is_visible;

    view! {
        <div class="grid lg:grid-cols-2 gap-12 items-center min-h-[calc(100vh-8rem)]">
            <Reveal threshold=0.3 animated=animated class="space-y-8">
                <div class="space-y-6">
                    <h1 class="text-5xl lg:text-6xl font-bold leading-tight">
                        <span class="text-gradient-primary">{headline}</span>
                    </h1>
                    <p class="text-xl lg:text-2xl text-secondary-600 leading-relaxed max-w-2xl">{subheadline}</p>
                </div>

                <CtaButtons primary=GET_STARTED secondary=WATCH_DEMO size=ButtonSize::ExtraLarge/>

                <div class="pt-8">
                    <p class="text-sm font-medium text-secondary-500 mb-4">
                        "Trusted by 100+ child welfare implementation teams"
                    </p>
                    <div class="flex flex-wrap items-center gap-6 opacity-60">
                        {TRUST_BADGES
                            .iter()
                            .map(|badge| view! {
                                <span class="text-xs font-semibold text-secondary-400 px-3 py-1 bg-secondary-100 rounded-full">
                                    {*badge}
                                </span>
                            })
                            .collect_view()}
                    </div>
                </div>
            </Reveal>

            <div
                node_ref=metrics.node_ref
                class="relative"
                class:reveal=animated
                class:is-visible=move || !animated || metrics_visible.get()
                style="transition-delay: 300ms"
            >
                <div class="relative bg-gradient-to-br from-primary-100 to-accent-100 rounded-3xl p-8 mb-8">
                    <div class="text-center space-y-6">
                        <FloatingElement>
                            <div class="w-24 h-24 bg-gradient-primary rounded-2xl flex items-center justify-center mx-auto mb-4">
                                <Icon kind=IconKind::Zap class="w-12 h-12 text-white"/>
                            </div>
                        </FloatingElement>
                        <div class="space-y-2">
                            <h3 class="text-2xl font-bold text-secondary-900">"JIRA Pipeline Bot"</h3>
                            <p class="text-secondary-600">"Intelligent workflow automation"</p>
                        </div>
                        <div class="relative h-32">
                            {HERO_TOASTS
                                .iter()
                                .zip(TOAST_LAYOUT)
                                .map(|((label, accent), (delay, duration, place))| {
                                    let dot = class_list(["w-2 h-2 rounded-full", accent_classes(*accent).dot]);
                                    view! {
                                        <FloatingElement delay_ms=delay duration_ms=duration class=place>
                                            <div class="bg-white shadow-lg rounded-lg p-3 text-sm">
                                                <div class="flex items-center gap-2">
                                                    <span class=dot></span>
                                                    <span class="font-medium">{*label}</span>
                                                </div>
                                            </div>
                                        </FloatingElement>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>

                {show_metrics.then(|| view! {
                    <div class="grid grid-cols-3 gap-4">
                        {HERO_METRICS.iter().map(|metric| view! { <MetricsCard metric=metric/> }).collect_view()}
                    </div>
                })}
            </div>
        </div>
    }
}

/// Full-height landing band with decorative gradient orbs behind `children`.
#[component]
pub fn Hero(children: Children) -> impl IntoView {
    view! {
        <Section
            id="home"
            element=SectionElement::Main
            padding=SectionPadding::None
            class="overflow-hidden min-h-screen bg-gradient-to-br from-primary-50 via-white to-accent-50"
        >
            <div class="absolute inset-0 overflow-hidden pointer-events-none" aria-hidden="true">
                <div class="absolute -top-40 -right-40 w-80 h-80 bg-gradient-to-br from-primary-200/40 to-accent-200/40 rounded-full blur-3xl"></div>
                <div class="absolute -bottom-32 -left-32 w-64 h-64 bg-gradient-to-tr from-accent-200/30 to-primary-200/30 rounded-full blur-2xl"></div>
                <div class="absolute top-1/3 right-1/4 w-32 h-32 bg-gradient-to-br from-primary-300/20 to-accent-300/20 rounded-full blur-xl"></div>
                <div class="absolute top-20 left-10 w-4 h-4 bg-primary-400/30 rounded rotate-45 animate-float"></div>
                <div class="absolute top-40 right-20 w-6 h-6 bg-accent-400/30 rounded-full animate-float" style="animation-delay: 1s"></div>
                <div class="absolute bottom-40 left-20 w-3 h-3 bg-primary-500/40 rounded rotate-12 animate-float" style="animation-delay: 2s"></div>
                <div class="absolute bottom-20 right-40 w-5 h-5 bg-accent-500/30 rounded -rotate-45 animate-float" style="animation-delay: 0.5s"></div>
            </div>

            <div class="relative z-10 flex items-center min-h-screen pt-16">
                <Container padding=ContainerPadding::Large>{children()}</Container>
            </div>
        </Section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_icons() {
        assert_eq!(trend_icon(Trend::Up), IconKind::TrendingUp);
        assert_eq!(trend_icon(Trend::Down), IconKind::TrendingDown);
        assert_eq!(trend_icon(Trend::Neutral), IconKind::Minus);
    }

    #[test]
    fn test_every_toast_has_a_layout() {
        assert_eq!(HERO_TOASTS.len(), TOAST_LAYOUT.len());
    }

    #[test]
    fn test_cta_targets_are_in_page() {
        for link in [GET_STARTED, WATCH_DEMO] {
            assert!(link.href.starts_with('#'));
        }
    }
}
