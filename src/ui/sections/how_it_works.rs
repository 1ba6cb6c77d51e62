//! `#how-it-works`: the implementation steps as a flow or a timeline, plus
//! the implementation-approach band.

use leptos::prelude::*;

use crate::core::{IconKind, ProcessStep, VisibilityOptions};
use crate::ui::common::{
    Badge, BadgeSize, BadgeVariant, Button, ButtonSize, ButtonVariant, Card, CardPadding,
    CardVariant, Container, Reveal, Section, SectionBackground, SectionHeader, SectionPadding,
    accent_classes, class_list,
};
use crate::ui::hooks::{follow_href, use_visibility};
use crate::ui::icon::Icon;

const STEP_STAGGER_MS: u32 = 200;
const TIMELINE_STAGGER_MS: u32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProcessLayout {
    #[default]
    Horizontal,
    Vertical,
    Timeline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StepVariant {
    #[default]
    Default,
    Compact,
    /// Also lists the step's details
    Detailed,
}

struct StepSizing {
    padding: CardPadding,
    number: &'static str,
    title: &'static str,
}

impl StepVariant {
    fn sizing(&self) -> StepSizing {
        match self {
            StepVariant::Default => StepSizing {
                padding: CardPadding::Large,
                number: "w-16 h-16 text-xl font-bold",
                title: "text-xl",
            },
            StepVariant::Compact => StepSizing {
                padding: CardPadding::Medium,
                number: "w-12 h-12 text-lg font-bold",
                title: "text-lg",
            },
            StepVariant::Detailed => StepSizing {
                padding: CardPadding::ExtraLarge,
                number: "w-20 h-20 text-2xl font-bold",
                title: "text-2xl",
            },
        }
    }
}

/// Height of the timeline progress line, in percent of the full line.
///
/// Steps up to and including `active` count as done.
pub fn timeline_progress_percent(active: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    ((active + 1) as f64 / total as f64 * 100.0).min(100.0)
}

/// Timeline cards alternate sides, starting on the left.
fn timeline_on_left(index: usize) -> bool {
    index % 2 == 0
}

#[component]
pub fn ProcessStepCard(
    step: &'static ProcessStep,
    #[prop(default = 0)]
    index: usize,
    #[prop(default = true)]
    animated: bool,
    #[prop(default = StepVariant::Default)]
    variant: StepVariant,
    #[prop(default = false)]
    active: bool,
) -> impl IntoView {
    let sizing = variant.sizing();
    let number_class = class_list([
        sizing.number,
        accent_classes(step.accent).solid,
        "rounded-full flex items-center justify-center shadow-lg transform transition-transform duration-300",
        if active { "scale-110" } else { "hover:scale-105" },
    ]);
    let title_class = class_list([sizing.title, "font-semibold text-secondary-900"]);
    let show_details = variant == StepVariant::Detailed && !step.details.is_empty();

    view! {
        <Reveal threshold=0.3 delay_ms={index as u32 * STEP_STAGGER_MS} animated=animated class="h-full">
            <Card
                variant={if active { CardVariant::Elevated } else { CardVariant::Default }}
                padding=sizing.padding
                hover=true
                class={if active { "h-full text-center ring-2 ring-primary-300" } else { "h-full text-center" }}
            >
                <div class="space-y-6">
                    <div class="flex flex-col items-center gap-4">
                        <div class=number_class>{step.number}</div>
                        <Icon kind=step.icon class="w-12 h-12 text-secondary-600"/>
                    </div>

                    <div class="space-y-4">
                        <h3 class=title_class>{step.title}</h3>
                        <p class="text-secondary-600 leading-relaxed">{step.description}</p>
                        <div class="flex justify-center gap-4">
                            {step.duration.map(|duration| view! {
                                <Badge variant=BadgeVariant::Primary size=BadgeSize::Medium>{duration}</Badge>
                            })}
                            {step.complexity.map(|complexity| view! {
                                <Badge variant=BadgeVariant::for_complexity(complexity) size=BadgeSize::Medium>
                                    {complexity.to_string()}
                                </Badge>
                            })}
                        </div>
                        {show_details.then(|| view! {
                            <ul class="text-sm text-secondary-500 space-y-2 text-left">
                                {step.details.iter().map(|detail| view! {
                                    <li class="flex items-start gap-2">
                                        <span class="w-1.5 h-1.5 bg-primary-400 rounded-full mt-2 flex-shrink-0"></span>
                                        <span>{*detail}</span>
                                    </li>
                                }).collect_view()}
                            </ul>
                        })}
                    </div>
                </div>
            </Card>
        </Reveal>
    }
}

/// Steps in a row (column on small screens) joined by arrows.
#[component]
pub fn ProcessFlow(
    steps: &'static [ProcessStep],
    #[prop(default = true)]
    horizontal: bool,
    #[prop(default = true)]
    animated: bool,
) -> impl IntoView {
    let container = if horizontal {
        "flex flex-col lg:flex-row items-center justify-center"
    } else {
        "flex flex-col items-center"
    };
    let item = if horizontal {
        "flex-1 max-w-sm flex flex-col lg:flex-row items-center"
    } else {
        "w-full max-w-md flex flex-col items-center"
    };
    let connector = class_list([
        "flex items-center justify-center",
        if horizontal { "lg:mx-6 my-4 lg:my-0" } else { "my-6" },
        if animated { "animate-pulse" } else { "" },
    ]);
    let last = steps.len().saturating_sub(1);

    view! {
        <div class=container>
            {steps
                .iter()
                .enumerate()
                .map(|(index, step)| {
                    let arrow = (index < last).then(|| {
                        let glyph = if horizontal {
                            view! {
                                <Icon kind=IconKind::ArrowDown class="w-6 h-6 text-primary-400 lg:hidden"/>
                                <Icon kind=IconKind::ArrowRight class="w-6 h-6 text-primary-400 hidden lg:block"/>
                            }
                            .into_any()
                        } else {
                            view! { <Icon kind=IconKind::ArrowDown class="w-6 h-6 text-primary-400"/> }.into_any()
                        };
                        view! { <div class={connector.clone()}>{glyph}</div> }
                    });
                    view! {
                        <div class=item>
                            <ProcessStepCard step=step index=index animated=animated/>
                            {arrow}
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Alternating vertical timeline with a progress line up to `active_step`.
#[component]
pub fn Timeline(
    steps: &'static [ProcessStep],
    #[prop(default = 0)]
    active_step: usize,
    #[prop(default = true)]
    animated: bool,
) -> impl IntoView {
    let container = use_visibility(VisibilityOptions::reveal(0.1));
    let progress = timeline_progress_percent(active_step, steps.len());
    let line_height = move || {
        let height = if container.is_visible.get() { progress } else { 0.0 };
        format!("height: {height}%")
    };

    view! {
        <div node_ref=container.node_ref class="relative">
            <div class="absolute left-1/2 -translate-x-1/2 w-0.5 bg-secondary-200 h-full">
                <div class="w-full bg-gradient-primary transition-all duration-1000 ease-out" style=line_height></div>
            </div>

            <div class="space-y-12">
                {steps
                    .iter()
                    .enumerate()
                    .map(|(index, step)| {
                        let left = timeline_on_left(index);
                        let active = index <= active_step;
                        let row = if left { "flex items-center flex-row-reverse" } else { "flex items-center flex-row" };
                        let (side, align) = if left { ("flex-1 pr-8", "text-right space-y-4") } else { ("flex-1 pl-8", "text-left space-y-4") };
                        let node = class_list([
                            "w-12 h-12 rounded-full flex items-center justify-center font-bold text-white transition-all duration-300 shadow-lg",
                            if active { "bg-gradient-primary scale-110" } else { "bg-secondary-400" },
                        ]);
                        view! {
                            <Reveal threshold=0.3 delay_ms={index as u32 * TIMELINE_STAGGER_MS} animated=animated>
                                <div class=row>
                                    <div class=side>
                                        <Card
                                            variant={if active { CardVariant::Elevated } else { CardVariant::Default }}
                                            padding=CardPadding::Large
                                            class={if active { "ring-2 ring-primary-200" } else { "" }}
                                        >
                                            <div class=align>
                                                <div class="flex items-center gap-2">
                                                    <Icon kind=step.icon class="w-8 h-8 text-primary-600"/>
                                                    <h3 class="text-xl font-semibold text-secondary-900">{step.title}</h3>
                                                </div>
                                                <p class="text-secondary-600 leading-relaxed">{step.description}</p>
                                                {step.duration.map(|duration| view! {
                                                    <Badge variant=BadgeVariant::Primary size=BadgeSize::Medium>{duration}</Badge>
                                                })}
                                            </div>
                                        </Card>
                                    </div>
                                    <div class="relative z-10">
                                        <div class=node>{step.number}</div>
                                    </div>
                                </div>
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn HowItWorks(
    title: &'static str,
    subtitle: &'static str,
    steps: &'static [ProcessStep],
    #[prop(default = ProcessLayout::Horizontal)]
    layout: ProcessLayout,
    #[prop(default = true)]
    animated: bool,
) -> impl IntoView {
    let content = use_visibility(VisibilityOptions::reveal(0.1));
    let content_visible = content.is_visible;

    let body = match layout {
        ProcessLayout::Horizontal => view! { <ProcessFlow steps=steps animated=animated/> }.into_any(),
        ProcessLayout::Vertical => {
            view! { <ProcessFlow steps=steps horizontal=false animated=animated/> }.into_any()
        }
        ProcessLayout::Timeline => view! {
            <Timeline steps=steps active_step={steps.len().saturating_sub(1)} animated=animated/>
        }
        .into_any(),
    };

    view! {
        <Section id="how-it-works" padding=SectionPadding::ExtraLarge background=SectionBackground::Secondary>
            <Container>
                <Reveal threshold=0.3 animated=animated>
                    <SectionHeader title=title subtitle=subtitle/>
                </Reveal>

                <div
                    node_ref=content.node_ref
                    class:reveal=animated
                    class:is-visible=move || !animated || content_visible.get()
                >
                    {body}
                </div>

                <Show when=move || animated && content_visible.get()>
                    <div class="text-center mt-16 animate-fade-in">
                        <p class="text-lg text-secondary-600 mb-6">
                            "Ready to streamline your child welfare JIRA workflows?"
                        </p>
                        <div class="flex flex-col sm:flex-row gap-4 justify-center">
                            <Button size=ButtonSize::Large on_click=Callback::new(|_| follow_href("#contact"))>
                                "Start Your Implementation"
                            </Button>
                            <Button
                                variant=ButtonVariant::Outline
                                size=ButtonSize::Large
                                on_click=Callback::new(|_| follow_href("#contact"))
                            >
                                "Schedule Demo"
                            </Button>
                        </div>
                    </div>
                </Show>
            </Container>
        </Section>
    }
}

struct ApproachCard {
    title: &'static str,
    icon: IconKind,
    points: &'static [&'static str],
}

const APPROACH: &[ApproachCard] = &[
    ApproachCard {
        title: "Process Components",
        icon: IconKind::Workflow,
        points: &[
            "Numbered steps that make the workflow easy to follow",
            "Connected flow showing how each phase hands off to the next",
            "Timeline view for detailed implementation tracking",
            "Duration and complexity indicators for planning",
            "Dedicated support at every stage of the rollout",
        ],
    },
    ApproachCard {
        title: "Key Benefits",
        icon: IconKind::Star,
        points: &[
            "Visual step-by-step workflow guidance",
            "Predictable rollout with clear milestones",
            "Works for county and state teams of any size",
            "Clear expectations with time and complexity indicators",
            "Proven methodology that builds team confidence",
        ],
    },
];

#[component]
pub fn ImplementationApproach() -> impl IntoView {
    view! {
        <Section background=SectionBackground::Accent padding=SectionPadding::ExtraLarge>
            <Container>
                <SectionHeader
                    title="Implementation Approach"
                    subtitle="Structured methodology ensuring smooth deployment and team adoption"
                />
                <div class="grid md:grid-cols-2 gap-8 max-w-4xl mx-auto">
                    {APPROACH
                        .iter()
                        .map(|card| view! {
                            <Card variant=CardVariant::Glass padding=CardPadding::Large>
                                <h3 class="flex items-center gap-2 text-xl font-semibold text-secondary-900 mb-4">
                                    <Icon kind=card.icon class="w-6 h-6"/>
                                    {card.title}
                                </h3>
                                <ul class="text-secondary-600 space-y-2 text-left">
                                    {card.points.iter().map(|point| view! { <li>"• " {*point}</li> }).collect_view()}
                                </ul>
                            </Card>
                        })
                        .collect_view()}
                </div>
            </Container>
        </Section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeline_progress() {
        assert_eq!(timeline_progress_percent(0, 4), 25.0);
        assert_eq!(timeline_progress_percent(3, 4), 100.0);
        assert_eq!(timeline_progress_percent(9, 4), 100.0);
        assert_eq!(timeline_progress_percent(0, 0), 0.0);
    }

    #[test]
    fn test_timeline_alternates() {
        assert!(timeline_on_left(0));
        assert!(!timeline_on_left(1));
        assert!(timeline_on_left(2));
    }

    #[test]
    fn test_step_variant_sizing() {
        assert_eq!(StepVariant::default(), StepVariant::Default);
        assert_eq!(StepVariant::Compact.sizing().padding, CardPadding::Medium);
        assert!(StepVariant::Detailed.sizing().number.contains("w-20"));
    }

    #[test]
    fn test_approach_cards() {
        assert_eq!(APPROACH.len(), 2);
        assert!(APPROACH.iter().all(|card| card.points.len() == 5));
    }
}
