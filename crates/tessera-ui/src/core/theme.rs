//! Theme preference model and brand design tokens.
//!
//! # Design
//! - The stored preference is tri-state (`auto`/`light`/`dark`); the active
//!   theme is always binary and derived, never stored.
//! - A system theme change only moves the active theme while the preference
//!   is `Auto`; explicit choices pin the theme.
//! - The active theme is applied by setting `data-theme` on the document
//!   element, the convention our stylesheet keys off.

/// Stored theme preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemePreference {
    /// Follow the operating system preference.
    #[default]
    Auto,
    /// Always light.
    Light,
    /// Always dark.
    Dark,
}

impl ThemePreference {
    /// All preferences in selector order.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Auto, Self::Light, Self::Dark]
    }

    /// Storage identifier for the preference.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored identifier; unknown values fall back to `Auto`.
    #[must_use]
    pub fn from_str_or_auto(value: &str) -> Self {
        match value {
            "light" => Self::Light,
            "dark" => Self::Dark,
            _ => Self::Auto,
        }
    }

    /// Selector caption.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Auto => "Auto",
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }

    /// Resolve the active theme given the current system preference.
    #[must_use]
    pub const fn resolve(self, system_is_dark: bool) -> ThemeMode {
        match self {
            Self::Light => ThemeMode::Light,
            Self::Dark => ThemeMode::Dark,
            Self::Auto => {
                if system_is_dark {
                    ThemeMode::Dark
                } else {
                    ThemeMode::Light
                }
            }
        }
    }
}

/// Active (resolved) theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    /// Light theme mode.
    #[default]
    Light,
    /// Dark theme mode.
    Dark,
}

impl ThemeMode {
    /// Value written to the document's `data-theme` attribute.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Whether a system theme change should move the active theme.
///
/// Pinned preferences ignore system flips; `Auto` follows them, and the
/// caller re-applies only when the resolved mode actually changed.
#[must_use]
pub const fn system_change_applies(preference: ThemePreference) -> bool {
    matches!(preference, ThemePreference::Auto)
}

/// A single color token with a stable name and hex value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorToken {
    /// Semantic identifier for the shade (e.g., "500").
    pub name: &'static str,
    /// Hex RGB value for the shade.
    pub hex: &'static str,
}

/// Collection of related tokens (e.g., primary shades).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Palette identifier.
    pub id: &'static str,
    /// Ordered list of shades from lightest to darkest.
    pub shades: &'static [ColorToken],
}

/// Primary brand palette.
pub const PRIMARY: Palette = Palette {
    id: "primary",
    shades: &[
        ColorToken {
            name: "100",
            hex: "#D6E8E2",
        },
        ColorToken {
            name: "300",
            hex: "#8CC4B4",
        },
        ColorToken {
            name: "500",
            hex: "#2F8A6F",
        },
        ColorToken {
            name: "700",
            hex: "#1F5C4A",
        },
        ColorToken {
            name: "900",
            hex: "#102F26",
        },
    ],
};

/// Accent palette for interactive highlights.
pub const ACCENT: Palette = Palette {
    id: "accent",
    shades: &[
        ColorToken {
            name: "100",
            hex: "#FBE9D0",
        },
        ColorToken {
            name: "300",
            hex: "#F2C283",
        },
        ColorToken {
            name: "500",
            hex: "#E09A38",
        },
        ColorToken {
            name: "700",
            hex: "#9C6A22",
        },
        ColorToken {
            name: "900",
            hex: "#4E3511",
        },
    ],
};

/// Spacing scale in pixels.
pub const SPACING: [u8; 6] = [4, 8, 12, 16, 24, 32];
/// Corner radius tokens in pixels.
pub const RADII: [u8; 3] = [4, 8, 16];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preference_round_trips_through_storage() {
        for preference in ThemePreference::all() {
            assert_eq!(
                ThemePreference::from_str_or_auto(preference.as_str()),
                preference
            );
        }
        assert_eq!(
            ThemePreference::from_str_or_auto("mauve"),
            ThemePreference::Auto
        );
    }

    #[test]
    fn auto_follows_the_system() {
        assert_eq!(ThemePreference::Auto.resolve(true), ThemeMode::Dark);
        assert_eq!(ThemePreference::Auto.resolve(false), ThemeMode::Light);
    }

    #[test]
    fn explicit_preferences_pin_the_theme() {
        assert_eq!(ThemePreference::Dark.resolve(false), ThemeMode::Dark);
        assert_eq!(ThemePreference::Light.resolve(true), ThemeMode::Light);
        assert!(!system_change_applies(ThemePreference::Dark));
        assert!(system_change_applies(ThemePreference::Auto));
    }

    #[test]
    fn palettes_expose_ordered_shades() {
        assert_eq!(PRIMARY.shades.len(), 5);
        assert_eq!(PRIMARY.shades[0].name, "100");
        assert_eq!(ThemeMode::Dark.as_str(), "dark");
    }
}
