//! Feature showcase: the highlighted core capabilities and the compact
//! "additional features" band below them.

use leptos::prelude::*;

use crate::core::{Accent, Feature, IconKind};
use crate::ui::common::{
    Card, CardPadding, CardVariant, Container, Reveal, Section, SectionBackground, SectionHeader,
    SectionPadding, accent_classes, class_list,
};
use crate::ui::icon::Icon;

/// Stagger between consecutive feature cards.
const CARD_STAGGER_MS: u32 = 150;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeatureLayout {
    #[default]
    Grid,
    List,
}

/// Column count for a grid of `count` features: more than three wrap into
/// two columns, smaller sets get one column each.
pub fn feature_columns(count: usize) -> usize {
    if count > 3 { 2 } else { count.clamp(1, 4) }
}

fn column_class(columns: usize) -> &'static str {
    match columns {
        1 => "grid-cols-1",
        2 => "grid-cols-1 md:grid-cols-2",
        3 => "grid-cols-1 md:grid-cols-2 lg:grid-cols-3",
        _ => "grid-cols-1 md:grid-cols-2 lg:grid-cols-4",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconTileSize {
    Small,
    Medium,
    #[default]
    Large,
    ExtraLarge,
}

impl IconTileSize {
    fn tile(&self) -> &'static str {
        match self {
            IconTileSize::Small => "w-12 h-12",
            IconTileSize::Medium => "w-16 h-16",
            IconTileSize::Large => "w-20 h-20",
            IconTileSize::ExtraLarge => "w-24 h-24",
        }
    }

    fn glyph(&self) -> &'static str {
        match self {
            IconTileSize::Small => "w-6 h-6",
            IconTileSize::Medium => "w-8 h-8",
            IconTileSize::Large => "w-10 h-10",
            IconTileSize::ExtraLarge => "w-12 h-12",
        }
    }
}

/// Rounded accent tile holding an icon.
#[component]
pub fn FeatureIcon(
    icon: IconKind,
    #[prop(default = Accent::Primary)]
    accent: Accent,
    #[prop(default = IconTileSize::Large)]
    size: IconTileSize,
    #[prop(default = true)]
    animated: bool,
) -> impl IntoView {
    let palette = accent_classes(accent);
    let classes = class_list([
        size.tile(),
        palette.tile,
        palette.fg,
        if animated { "transition-all duration-300 hover:scale-110 hover:shadow-lg" } else { "" },
        "rounded-2xl flex items-center justify-center shadow-sm",
    ]);

    view! {
        <div class=classes>
            <Icon kind=icon class=size.glyph()/>
        </div>
    }
}

#[component]
pub fn FeatureCard(
    feature: &'static Feature,
    #[prop(default = 0)]
    index: usize,
    #[prop(default = true)]
    animated: bool,
    #[prop(default = false)]
    compact: bool,
) -> impl IntoView {
    let (variant, card_class) = if feature.highlight {
        (
            CardVariant::Elevated,
            "h-full relative ring-2 ring-primary-200 hover:ring-primary-300",
        )
    } else {
        (CardVariant::Default, "h-full relative hover:shadow-xl")
    };
    let padding = if compact { CardPadding::Medium } else { CardPadding::Large };
    let delay_ms = if animated { index as u32 * CARD_STAGGER_MS } else { 0 };

    view! {
        <Reveal threshold=0.2 delay_ms=delay_ms animated=animated class="h-full">
            <Card variant=variant padding=padding hover=true class=card_class>
                <div class="space-y-6">
                    <div class="flex justify-center">
                        <FeatureIcon icon=feature.icon accent=feature.accent animated=animated/>
                    </div>

                    <div class="text-center space-y-4">
                        <h3 class="text-xl font-semibold text-secondary-900">{feature.title}</h3>
                        <p class="text-secondary-600 leading-relaxed">{feature.description}</p>
                        {(!feature.benefits.is_empty()).then(|| view! {
                            <ul class="text-sm text-secondary-500 space-y-2 text-left">
                                {feature.benefits.iter().map(|benefit| view! {
                                    <li class="flex items-start gap-2">
                                        <span class="w-1.5 h-1.5 bg-primary-400 rounded-full mt-2 flex-shrink-0"></span>
                                        <span>{*benefit}</span>
                                    </li>
                                }).collect_view()}
                            </ul>
                        })}
                    </div>

                    {feature.highlight.then(|| view! {
                        <div class="absolute top-4 right-4">
                            <span class="bg-gradient-primary text-white px-3 py-1 rounded-full text-xs font-medium">
                                "Popular"
                            </span>
                        </div>
                    })}
                </div>
            </Card>
        </Reveal>
    }
}

#[component]
pub fn FeatureGrid(
    features: &'static [Feature],
    #[prop(default = FeatureLayout::Grid)]
    layout: FeatureLayout,
    #[prop(default = true)]
    animated: bool,
) -> impl IntoView {
    let (columns, gap) = match layout {
        FeatureLayout::Grid => (feature_columns(features.len()), "gap-8"),
        FeatureLayout::List => (1, "gap-6"),
    };
    let classes = class_list(["grid items-stretch", column_class(columns), gap]);
    let compact = layout == FeatureLayout::List;

    view! {
        <div class=classes>
            {features
                .iter()
                .enumerate()
                .map(|(index, feature)| view! {
                    <FeatureCard feature=feature index=index animated=animated compact=compact/>
                })
                .collect_view()}
        </div>
    }
}

/// `#features` section.
#[component]
pub fn Features(
    title: &'static str,
    subtitle: &'static str,
    features: &'static [Feature],
    #[prop(default = FeatureLayout::Grid)]
    layout: FeatureLayout,
    #[prop(default = true)]
    animated: bool,
) -> impl IntoView {
    view! {
        <Section id="features" padding=SectionPadding::ExtraLarge>
            <Container>
                <Reveal threshold=0.3 animated=animated>
                    <SectionHeader title=title subtitle=subtitle/>
                </Reveal>
                <Reveal threshold=0.1 delay_ms=300 animated=animated>
                    <FeatureGrid features=features layout=layout animated=animated/>
                </Reveal>
            </Container>
        </Section>
    }
}

/// Four-column band of secondary features, no per-card animation.
#[component]
pub fn AdditionalFeatures(features: &'static [Feature]) -> impl IntoView {
    view! {
        <Section background=SectionBackground::Secondary padding=SectionPadding::ExtraLarge>
            <Container>
                <SectionHeader
                    title="Additional Features & Benefits"
                    subtitle="Comprehensive suite of tools to enhance your workflow management"
                />
                <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-6">
                    {features
                        .iter()
                        .map(|feature| view! {
                            <Card padding=CardPadding::Large hover=true>
                                <div class="text-center space-y-4">
                                    <div class="flex justify-center">
                                        <FeatureIcon
                                            icon=feature.icon
                                            accent=feature.accent
                                            size=IconTileSize::Medium
                                            animated=false
                                        />
                                    </div>
                                    <h3 class="text-lg font-semibold text-secondary-900">{feature.title}</h3>
                                    <p class="text-secondary-600 text-sm">{feature.description}</p>
                                </div>
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
    fn test_feature_columns() {
        assert_eq!(feature_columns(0), 1);
        assert_eq!(feature_columns(1), 1);
        assert_eq!(feature_columns(3), 3);
        assert_eq!(feature_columns(4), 2);
        assert_eq!(feature_columns(8), 2);
    }

    #[test]
    fn test_column_classes() {
        assert_eq!(column_class(1), "grid-cols-1");
        assert!(column_class(3).contains("lg:grid-cols-3"));
        assert!(column_class(9).contains("lg:grid-cols-4"));
    }

    #[test]
    fn test_icon_tile_sizes() {
        assert_eq!(IconTileSize::default(), IconTileSize::Large);
        assert_eq!(IconTileSize::Small.tile(), "w-12 h-12");
        assert_eq!(IconTileSize::ExtraLarge.glyph(), "w-12 h-12");
    }
}
