//! `#integrations`: featured platforms, the filterable catalogue and the
//! custom-integration call to action.

use leptos::prelude::*;

use crate::core::integrations::{self, IntegrationFilter, capability_preview};
use crate::core::{IconKind, Integration, IntegrationStats, IntegrationStatus, VisibilityOptions};
use crate::ui::common::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardPadding, CardVariant, Container, Reveal,
    Section, SectionBackground, SectionHeader, SectionPadding, StatusBadge, accent_classes,
    class_list, status_surface, status_swatch,
};
use crate::ui::hooks::{follow_href, use_visibility};
use crate::ui::icon::Icon;

#[component]
pub fn IntegrationCard(
    integration: &'static Integration,
    #[prop(default = true)]
    animated: bool,
    /// List the first capabilities under the description
    #[prop(default = true)]
    detailed: bool,
    #[prop(default = false)]
    large: bool,
) -> impl IntoView {
    let palette = accent_classes(integration.category.accent());
    let card_class = class_list([
        "relative h-full min-h-[200px] overflow-hidden group transition-all duration-300 ease-out",
        status_surface(integration.status),
        if animated { "hover:scale-105 hover:shadow-xl" } else { "" },
        if integration.featured { "ring-2 ring-primary-200" } else { "" },
    ]);
    let tile = class_list([
        "w-12 h-12 rounded-xl flex items-center justify-center flex-shrink-0 transition-colors",
        palette.tile,
        palette.tile_hover,
        palette.fg,
    ]);
    let dot = class_list(["w-1.5 h-1.5 rounded-full flex-shrink-0", palette.dot]);
    let wash = class_list([
        "absolute inset-0 bg-gradient-to-br to-transparent opacity-0 group-hover:opacity-100 transition-opacity duration-300 pointer-events-none",
        palette.wash,
    ]);
    let (preview, hidden) = capability_preview(integration);

    view! {
        <Card variant=CardVariant::Elevated padding=CardPadding::None hover=true class=card_class>
            <div class={if large { "p-8" } else { "p-6" }}>
                <div class="absolute top-3 right-3">
                    <StatusBadge status=integration.status/>
                </div>
                {integration.featured.then(|| view! {
                    <div class="absolute top-3 left-3">
                        <Badge variant=BadgeVariant::Primary>"Featured"</Badge>
                    </div>
                })}

                <div class="flex items-start gap-4 mb-4 mt-6">
                    <div class=tile>
                        <Icon kind=integration.icon class="w-7 h-7"/>
                    </div>
                    <div class="flex-1 min-w-0">
                        <h3 class="text-lg font-semibold text-secondary-900 truncate">{integration.name}</h3>
                        <p class="text-sm text-secondary-600 capitalize">{integration.category.to_string()}</p>
                    </div>
                </div>

                <p class="text-secondary-700 text-sm leading-relaxed mb-4 line-clamp-2">{integration.description}</p>

                {(detailed && !integration.capabilities.is_empty()).then(|| view! {
                    <div class="space-y-3">
                        <h4 class="text-sm font-medium text-secondary-900">"Key Capabilities:"</h4>
                        <ul class="grid grid-cols-1 gap-1">
                            {preview.iter().map(|capability| view! {
                                <li class="flex items-center gap-2">
                                    <span class={dot.clone()}></span>
                                    <span class="text-xs text-secondary-600">{*capability}</span>
                                </li>
                            }).collect_view()}
                            {(hidden > 0).then(|| view! {
                                <li class="flex items-center gap-2">
                                    <span class={dot.clone()}></span>
                                    <span class="text-xs text-secondary-500">{format!("+{hidden} more")}</span>
                                </li>
                            })}
                        </ul>
                    </div>
                })}

                <div class=wash></div>

                {(integration.status == IntegrationStatus::ComingSoon).then(|| view! {
                    <div class="absolute inset-0 bg-white/80 backdrop-blur-sm flex items-center justify-center opacity-0 group-hover:opacity-100 transition-opacity duration-300">
                        <div class="text-center">
                            <p class="text-sm font-medium text-secondary-700">"Coming Soon"</p>
                            <p class="text-xs text-secondary-500">"Stay tuned for updates"</p>
                        </div>
                    </div>
                })}
                {(integration.status == IntegrationStatus::Beta).then(|| view! {
                    <div class="absolute inset-0 bg-blue-500/5 pointer-events-none"></div>
                })}
            </div>
        </Card>
    }
}

#[component]
fn StatsLine(stats: Signal<IntegrationStats>) -> impl IntoView {
    let entry = |status: IntegrationStatus, count: usize| {
        view! {
            <div class="flex items-center gap-2">
                <span class=format!("w-3 h-3 rounded border {}", status_swatch(status))></span>
                <span>{format!("{count} {status}")}</span>
            </div>
        }
    };

    view! {
        <div class="flex justify-center">
            <div class="flex flex-wrap items-center gap-6 text-sm text-secondary-600" aria-live="polite">
                {move || {
                    let stats = stats.get();
                    view! {
                        {entry(IntegrationStatus::Available, stats.available)}
                        {(stats.beta > 0).then(|| entry(IntegrationStatus::Beta, stats.beta))}
                        {(stats.coming_soon > 0).then(|| entry(IntegrationStatus::ComingSoon, stats.coming_soon))}
                        <span class="text-secondary-400">"•"</span>
                        <span class="font-medium">{format!("{} Total", stats.total)}</span>
                    }
                }}
            </div>
        </div>
    }
}

/// Category chips, statistics and the filtered grid.
#[component]
pub fn IntegrationGrid(
    integrations: &'static [Integration],
    #[prop(default = true)]
    show_filters: bool,
    #[prop(default = true)]
    animated: bool,
) -> impl IntoView {
    let selected = RwSignal::new(IntegrationFilter::All);
    let shown = Memo::new(move |_| integrations::filter(integrations, selected.get()));
    let stats = Memo::new(move |_| shown.with(|list| IntegrationStats::collect(list.iter().copied())));

    let chips = integrations::filter_options(integrations)
        .into_iter()
        .map(|option| {
            let active = move || selected.get() == option;
            view! {
                <button
                    type="button"
                    class=move || {
                        if active() {
                            "px-4 py-2 rounded-full text-sm font-medium transition-all duration-200 bg-primary-500 text-white shadow-md"
                        } else {
                            "px-4 py-2 rounded-full text-sm font-medium transition-all duration-200 bg-secondary-100 text-secondary-700 hover:bg-secondary-200"
                        }
                    }
                    aria-pressed=move || active().to_string()
                    on:click=move |_| selected.set(option)
                >
                    {option.to_string()}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="space-y-8">
            {show_filters.then(|| view! {
                <div class="flex flex-wrap justify-center gap-2 mb-8" role="group" aria-label="Filter integrations by category">
                    {chips}
                </div>
            })}

            <StatsLine stats=stats.into()/>

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                <For
                    each=move || shown.get()
                    key=|integration| integration.id
                    children=move |integration| view! { <IntegrationCard integration=integration animated=animated/> }
                />
            </div>

            <Show when=move || shown.with(Vec::is_empty)>
                <div class="text-center py-12">
                    <Icon kind=IconKind::Search class="w-10 h-10 mx-auto mb-4 text-secondary-400"/>
                    <h3 class="text-lg font-semibold text-secondary-900 mb-2">"No integrations found"</h3>
                    <p class="text-secondary-600">
                        "Try selecting a different category or check back later for new integrations."
                    </p>
                </div>
            </Show>

            <div class="text-center mt-12 p-8 bg-secondary-50 rounded-2xl">
                <h3 class="text-xl font-semibold text-secondary-900 mb-2">"Need a Custom Integration?"</h3>
                <p class="text-secondary-600 mb-6 max-w-2xl mx-auto">
                    "We can build custom integrations for your specific child welfare systems and workflows. Contact our team to discuss your integration requirements."
                </p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center">
                    <Button on_click=Callback::new(|_| follow_href("#contact"))>"Request Custom Integration"</Button>
                    <Button variant=ButtonVariant::Outline on_click=Callback::new(|_| follow_href("#contact"))>
                        "View API Documentation"
                    </Button>
                </div>
            </div>
        </div>
    }
}

const TRUST_FIGURES: &[(&str, &str)] = &[
    ("15+", "State Agencies"),
    ("50+", "Counties"),
    ("99.9%", "Uptime"),
    ("24/7", "Support"),
];

#[component]
pub fn Integrations(
    title: &'static str,
    subtitle: &'static str,
    integrations: &'static [Integration],
    #[prop(default = true)]
    animated: bool,
) -> impl IntoView {
    let featured = integrations::featured(integrations);
    let grid = use_visibility(VisibilityOptions::reveal(0.1));
    let grid_visible = grid.is_visible;

    view! {
        <Section id="integrations" padding=SectionPadding::ExtraLarge background=SectionBackground::Secondary>
            <Container>
                <Reveal threshold=0.3 animated=animated>
                    <SectionHeader title=title subtitle=subtitle/>
                </Reveal>

                {(!featured.is_empty()).then(|| view! {
                    <Reveal delay_ms=300 animated=animated class="mb-16">
                        <div class="text-center mb-8">
                            <h3 class="text-2xl font-bold text-secondary-900 mb-2">"Core Integrations"</h3>
                            <p class="text-secondary-600">
                                "Essential platforms that power your child welfare workflow automation"
                            </p>
                        </div>
                        <div class="grid md:grid-cols-3 gap-6 max-w-4xl mx-auto">
                            {featured
                                .into_iter()
                                .map(|integration| view! {
                                    <IntegrationCard integration=integration animated=animated large=true/>
                                })
                                .collect_view()}
                        </div>
                    </Reveal>
                })}

                <div
                    node_ref=grid.node_ref
                    class:reveal=animated
                    class:is-visible=move || !animated || grid_visible.get()
                >
                    <div class="text-center mb-12">
                        <h3 class="text-2xl font-bold text-secondary-900 mb-2">"Complete Integration Ecosystem"</h3>
                        <p class="text-secondary-600 max-w-2xl mx-auto">
                            "Explore our comprehensive suite of integrations designed specifically for child welfare agencies and implementation teams"
                        </p>
                    </div>
                    <IntegrationGrid integrations=integrations animated=animated/>
                </div>

                <Show when=move || animated && grid_visible.get()>
                    <div class="text-center mt-16 animate-fade-in">
                        <div class="bg-white/50 backdrop-blur-sm rounded-2xl p-8 max-w-4xl mx-auto">
                            <h3 class="text-xl font-semibold text-secondary-900 mb-6">
                                "Trusted by Child Welfare Agencies Nationwide"
                            </h3>
                            <div class="grid md:grid-cols-4 gap-6 text-center">
                                {TRUST_FIGURES
                                    .iter()
                                    .map(|(value, label)| view! {
                                        <div>
                                            <div class="text-3xl font-bold text-primary-600 mb-1">{*value}</div>
                                            <div class="text-sm text-secondary-600">{*label}</div>
                                        </div>
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                </Show>
            </Container>
        </Section>
    }
}
