//! Page-level layout primitives: `Section` bands and the `Container` that
//! constrains their width.

use leptos::prelude::*;

use crate::ui::common::class_list;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionPadding {
    None,
    Small,
    Medium,
    Large,
    ExtraLarge,
}

impl SectionPadding {
    fn class(&self) -> &'static str {
        match self {
            SectionPadding::None => "",
            SectionPadding::Small => "py-8",
            SectionPadding::Medium => "py-12",
            SectionPadding::Large => "py-16",
            SectionPadding::ExtraLarge => "py-20 lg:py-24",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionBackground {
    None,
    White,
    Secondary,
    Primary,
    Accent,
    Gradient,
}

impl SectionBackground {
    fn class(&self) -> &'static str {
        match self {
            SectionBackground::None => "",
            SectionBackground::White => "bg-white",
            SectionBackground::Secondary => "bg-secondary-50",
            SectionBackground::Primary => "bg-gradient-to-br from-primary-600 to-primary-800",
            SectionBackground::Accent => "bg-accent-50",
            SectionBackground::Gradient => "bg-gradient-to-br from-primary-50 via-white to-accent-50",
        }
    }
}

/// HTML element a `Section` renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionElement {
    Section,
    Main,
    Footer,
}

#[component]
pub fn Section(
    #[prop(optional)]
    id: Option<&'static str>,
    #[prop(default = SectionPadding::Large)]
    padding: SectionPadding,
    #[prop(default = SectionBackground::None)]
    background: SectionBackground,
    #[prop(default = SectionElement::Section)]
    element: SectionElement,
    #[prop(default = "")]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let classes = class_list(["relative", padding.class(), background.class(), class]);

    match element {
        SectionElement::Section => view! { <section id=id class=classes>{children()}</section> }.into_any(),
        SectionElement::Main => view! { <main id=id class=classes>{children()}</main> }.into_any(),
        SectionElement::Footer => view! { <footer id=id class=classes>{children()}</footer> }.into_any(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerSize {
    Small,
    Medium,
    Large,
    ExtraLarge,
    Full,
}

impl ContainerSize {
    fn class(&self) -> &'static str {
        match self {
            ContainerSize::Small => "max-w-3xl",
            ContainerSize::Medium => "max-w-5xl",
            ContainerSize::Large => "max-w-6xl",
            ContainerSize::ExtraLarge => "max-w-7xl",
            ContainerSize::Full => "max-w-full",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerPadding {
    None,
    Small,
    Medium,
    Large,
}

impl ContainerPadding {
    fn class(&self) -> &'static str {
        match self {
            ContainerPadding::None => "",
            ContainerPadding::Small => "px-4",
            ContainerPadding::Medium => "px-4 sm:px-6",
            ContainerPadding::Large => "px-4 sm:px-6 lg:px-8",
        }
    }
}

#[component]
pub fn Container(
    #[prop(default = ContainerSize::ExtraLarge)]
    size: ContainerSize,
    #[prop(default = ContainerPadding::Medium)]
    padding: ContainerPadding,
    #[prop(default = true)]
    centered: bool,
    #[prop(default = "")]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let classes = class_list([
        "w-full",
        size.class(),
        padding.class(),
        if centered { "mx-auto" } else { "" },
        class,
    ]);

    view! { <div class=classes>{children()}</div> }
}

/// Centered heading block used at the top of most sections.
#[component]
pub fn SectionHeader(
    title: &'static str,
    #[prop(optional)]
    subtitle: Option<&'static str>,
    /// Light text for dark backgrounds
    #[prop(default = false)]
    inverted: bool,
) -> impl IntoView {
    let (title_class, subtitle_class) = if inverted {
        ("text-white", "text-white/90")
    } else {
        ("text-secondary-900", "text-secondary-600")
    };

    view! {
        <div class="text-center mb-16 space-y-4">
            <h2 class=format!("text-4xl lg:text-5xl font-bold {title_class}")>{title}</h2>
            {subtitle.map(|text| view! {
                <p class=format!("text-xl max-w-3xl mx-auto leading-relaxed {subtitle_class}")>{text}</p>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_classes() {
        assert_eq!(SectionPadding::None.class(), "");
        assert_eq!(SectionBackground::Accent.class(), "bg-accent-50");
        assert_eq!(ContainerSize::Small.class(), "max-w-3xl");
        assert_eq!(ContainerPadding::Large.class(), "px-4 sm:px-6 lg:px-8");
    }
}
