use leptos::prelude::*;

use crate::core::IconKind;
use crate::ui::common::class_list;
use crate::ui::icon::Icon;

/// Button variant types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    Primary,
    Secondary,
    Outline,
    Ghost,
}

/// Button size options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonSize {
    Small,
    Medium,
    Large,
    ExtraLarge,
}

/// Which side of the label an icon sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconPosition {
    #[default]
    Left,
    Right,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Secondary => "btn-secondary",
            ButtonVariant::Outline => "btn-outline",
            ButtonVariant::Ghost => "btn-ghost",
        }
    }
}

impl ButtonSize {
    fn class(&self) -> &'static str {
        match self {
            ButtonSize::Small => "btn-sm",
            ButtonSize::Medium => "btn-md",
            ButtonSize::Large => "btn-lg",
            ButtonSize::ExtraLarge => "btn-xl",
        }
    }

    fn icon_class(&self) -> &'static str {
        match self {
            ButtonSize::Small => "w-4 h-4",
            ButtonSize::Medium | ButtonSize::Large => "w-5 h-5",
            ButtonSize::ExtraLarge => "w-6 h-6",
        }
    }
}

/// Type-safe button component with variants and sizes
#[component]
pub fn Button(
    /// Button variant style
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    /// Button size
    #[prop(default = ButtonSize::Medium)]
    size: ButtonSize,
    /// Click handler
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    /// Whether button is disabled
    #[prop(default = false)]
    disabled: bool,
    /// Shows a spinner and swallows clicks
    #[prop(default = false)]
    loading: bool,
    /// Stretch to the container width
    #[prop(default = false)]
    full_width: bool,
    /// Optional icon next to the label
    #[prop(optional)]
    icon: Option<IconKind>,
    #[prop(default = IconPosition::Left)]
    icon_position: IconPosition,
    /// Accessible label when the content is not descriptive
    #[prop(optional)]
    aria_label: Option<&'static str>,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
    /// Button content
    children: Children,
) -> impl IntoView {
    let classes = class_list([
        "btn-base",
        variant.class(),
        size.class(),
        if full_width { "w-full" } else { "" },
        class,
    ]);
    let icon_class = size.icon_class();

    let leading = move || match (loading, icon, icon_position) {
        (true, _, _) => Some(view! { <Icon kind=IconKind::Loader class="w-5 h-5 animate-spin"/> }),
        (false, Some(kind), IconPosition::Left) => Some(view! { <Icon kind=kind class=icon_class/> }),
        _ => None,
    };
    let trailing = move || match (loading, icon, icon_position) {
        (false, Some(kind), IconPosition::Right) => Some(view! { <Icon kind=kind class=icon_class/> }),
        _ => None,
    };

    view! {
        <button
            type="button"
            class=classes
            disabled={disabled || loading}
            aria-busy=loading.then_some("true")
            aria-label=aria_label
            on:click=move |_| {
                if let (false, Some(on_click)) = (loading, on_click) {
                    on_click.run(());
                }
            }
        >
            {leading}
            <span>{children()}</span>
            {trailing}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_and_size_classes() {
        assert_eq!(ButtonVariant::Outline.class(), "btn-outline");
        assert_eq!(ButtonSize::ExtraLarge.class(), "btn-xl");
        assert_eq!(ButtonSize::Small.icon_class(), "w-4 h-4");
        assert_eq!(IconPosition::default(), IconPosition::Left);
    }
}
