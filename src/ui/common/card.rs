use leptos::prelude::*;

use crate::ui::common::class_list;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardVariant {
    #[default]
    Default,
    Elevated,
    Outlined,
    Filled,
    /// Frosted translucent surface
    Glass,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardPadding {
    None,
    Small,
    #[default]
    Medium,
    Large,
    ExtraLarge,
}

impl CardVariant {
    fn class(&self) -> &'static str {
        match self {
            CardVariant::Default => "card-default",
            CardVariant::Elevated => "card-elevated",
            CardVariant::Outlined => "card-outlined",
            CardVariant::Filled => "card-filled",
            CardVariant::Glass => "card-glass",
        }
    }
}

impl CardPadding {
    fn class(&self) -> &'static str {
        match self {
            CardPadding::None => "",
            CardPadding::Small => "p-4",
            CardPadding::Medium => "p-6",
            CardPadding::Large => "p-8",
            CardPadding::ExtraLarge => "p-10",
        }
    }
}

/// Surface container. With `on_click` it becomes a focusable button-like
/// element that also activates on Enter and Space.
#[component]
pub fn Card(
    #[prop(default = CardVariant::Default)]
    variant: CardVariant,
    #[prop(default = CardPadding::Medium)]
    padding: CardPadding,
    /// Lift and shadow on hover
    #[prop(default = false)]
    hover: bool,
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    #[prop(into, optional)]
    class: String,
    children: Children,
) -> impl IntoView {
    let interactive = on_click.is_some();
    let classes = class_list([
        "card-base",
        variant.class(),
        padding.class(),
        if hover { "card-hover" } else { "" },
        if interactive { "card-interactive" } else { "" },
        &class,
    ]);

    let activate = move || {
        if let Some(on_click) = on_click {
            on_click.run(());
        }
    };

    view! {
        <div
            class=classes
            role=interactive.then_some("button")
            tabindex=interactive.then_some("0")
            on:click=move |_| activate()
            on:keydown=move |ev| {
                if interactive && matches!(ev.key().as_str(), "Enter" | " ") {
                    ev.prevent_default();
                    activate();
                }
            }
        >
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_classes() {
        assert_eq!(CardVariant::Glass.class(), "card-glass");
        assert_eq!(CardPadding::None.class(), "");
        assert_eq!(CardPadding::default(), CardPadding::Medium);
    }
}
