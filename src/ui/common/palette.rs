//! Tailwind class sets per [`Accent`].
//!
//! Classes are spelled out in full so the Tailwind scanner can see them.

use crate::core::{Accent, IntegrationStatus, Trend};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccentClasses {
    /// Soft tile behind an icon
    pub tile: &'static str,
    /// Tile colour on group hover
    pub tile_hover: &'static str,
    /// Icon / text foreground
    pub fg: &'static str,
    /// Small bullet dot
    pub dot: &'static str,
    /// Solid background for numbered badges
    pub solid: &'static str,
    /// Low-opacity overlay gradient start
    pub wash: &'static str,
    /// Pill background + text
    pub pill: &'static str,
}

pub fn accent_classes(accent: Accent) -> AccentClasses {
    match accent {
        Accent::Primary => AccentClasses {
            tile: "bg-primary-100",
            tile_hover: "group-hover:bg-primary-200",
            fg: "text-primary-600",
            dot: "bg-primary-500",
            solid: "bg-primary-500 text-white",
            wash: "from-primary-500/5",
            pill: "bg-primary-100 text-primary-700",
        },
        Accent::Secondary => AccentClasses {
            tile: "bg-secondary-100",
            tile_hover: "group-hover:bg-secondary-200",
            fg: "text-secondary-600",
            dot: "bg-secondary-500",
            solid: "bg-secondary-600 text-white",
            wash: "from-secondary-500/5",
            pill: "bg-secondary-100 text-secondary-700",
        },
        Accent::Accent => AccentClasses {
            tile: "bg-accent-100",
            tile_hover: "group-hover:bg-accent-200",
            fg: "text-accent-600",
            dot: "bg-accent-500",
            solid: "bg-accent-500 text-white",
            wash: "from-accent-500/5",
            pill: "bg-accent-100 text-accent-700",
        },
        Accent::Success => AccentClasses {
            tile: "bg-success-100",
            tile_hover: "group-hover:bg-success-200",
            fg: "text-success-600",
            dot: "bg-success-500",
            solid: "bg-success-500 text-white",
            wash: "from-success-500/5",
            pill: "bg-success-100 text-success-700",
        },
        Accent::Warning => AccentClasses {
            tile: "bg-warning-100",
            tile_hover: "group-hover:bg-warning-200",
            fg: "text-warning-600",
            dot: "bg-warning-500",
            solid: "bg-warning-500 text-white",
            wash: "from-warning-500/5",
            pill: "bg-warning-100 text-warning-700",
        },
        Accent::Error => AccentClasses {
            tile: "bg-error-100",
            tile_hover: "group-hover:bg-error-200",
            fg: "text-error-600",
            dot: "bg-error-500",
            solid: "bg-error-500 text-white",
            wash: "from-error-500/5",
            pill: "bg-error-100 text-error-700",
        },
    }
}

/// Card tint for an integration's availability.
pub fn status_surface(status: IntegrationStatus) -> &'static str {
    match status {
        IntegrationStatus::Available => "border-green-200 bg-green-50/50",
        IntegrationStatus::ComingSoon => "border-yellow-200 bg-yellow-50/50",
        IntegrationStatus::Beta => "border-blue-200 bg-blue-50/50",
    }
}

/// Small square swatch used in the integration stats legend.
pub fn status_swatch(status: IntegrationStatus) -> &'static str {
    match status {
        IntegrationStatus::Available => "bg-green-100 border-green-200",
        IntegrationStatus::ComingSoon => "bg-yellow-100 border-yellow-200",
        IntegrationStatus::Beta => "bg-blue-100 border-blue-200",
    }
}

/// Text and background for a metric's change pill.
pub fn trend_classes(trend: Trend) -> &'static str {
    match trend {
        Trend::Up => "text-success-600 bg-success-50",
        Trend::Down => "text-error-600 bg-error-50",
        Trend::Neutral => "text-secondary-600 bg-secondary-50",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_accent_has_full_class_names() {
        for accent in [
            Accent::Primary,
            Accent::Secondary,
            Accent::Accent,
            Accent::Success,
            Accent::Warning,
            Accent::Error,
        ] {
            let classes = accent_classes(accent);
            let name = accent.to_string();
            for class in [classes.tile, classes.fg, classes.dot, classes.wash] {
                assert!(class.contains(&name), "{class} should mention {name}");
            }
        }
    }

    #[test]
    fn test_status_and_trend_classes() {
        assert!(status_surface(IntegrationStatus::Beta).contains("blue"));
        assert!(status_swatch(IntegrationStatus::ComingSoon).contains("yellow"));
        assert!(trend_classes(Trend::Down).contains("error"));
    }
}
