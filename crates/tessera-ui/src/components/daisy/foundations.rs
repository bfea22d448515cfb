/// Shared DaisyUI color tokens used by multiple components.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DaisyColor {
    Neutral,
    Primary,
    Secondary,
    Accent,
    Info,
    Success,
    Warning,
    Error,
}

impl DaisyColor {
    /// Returns the class suffix (e.g. `"primary"`) for the color.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Accent => "accent",
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// Common sizing tokens used by DaisyUI controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DaisySize {
    Xs,
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

impl DaisySize {
    /// Returns the suffix used by DaisyUI for the selected size.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
        }
    }

    /// Adds a prefix (e.g. `btn`) to the size suffix for class composition.
    /// The default size maps to no class at all.
    #[must_use]
    pub fn with_prefix(self, prefix: &str) -> Option<String> {
        match self {
            Self::Md => None,
            _ => Some(format!("{prefix}-{}", self.suffix())),
        }
    }
}

/// Variants used across button-like elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DaisyVariant {
    #[default]
    Solid,
    Outline,
    Dash,
    Soft,
    Ghost,
    Link,
}

impl DaisyVariant {
    /// Maps the variant to the DaisyUI class name.
    #[must_use]
    pub const fn as_class(self) -> Option<&'static str> {
        match self {
            Self::Solid => None,
            Self::Outline => Some("btn-outline"),
            Self::Dash => Some("btn-dash"),
            Self::Soft => Some("btn-soft"),
            Self::Ghost => Some("btn-ghost"),
            Self::Link => Some("btn-link"),
        }
    }
}

/// Convenience helper for composing class lists with an optional tone.
#[must_use]
pub fn tone_class(prefix: &str, tone: Option<DaisyColor>) -> Option<String> {
    tone.map(|color| format!("{prefix}-{}", color.as_str()))
}
