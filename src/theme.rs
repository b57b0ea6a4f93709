pub const DARK_BACKGROUND: &str = "#111827";
pub const LIGHT_BACKGROUND: &str = "#f9fafb";
pub const DARK_ROOT_CLASS: &str = "dark";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Picks the dark or light variant of a class string.
    pub fn pick(self, dark: &'static str, light: &'static str) -> &'static str {
        match self {
            Self::Dark => dark,
            Self::Light => light,
        }
    }

    pub fn background(self) -> &'static str {
        self.pick(DARK_BACKGROUND, LIGHT_BACKGROUND)
    }

    pub fn toggle_label(self) -> String {
        let next = self.toggled().as_str();
        format!("Switch to {next} theme")
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "☾",
            Self::Dark => "☀",
        }
    }

    /// Background and text classes for a full-width section surface.
    pub fn section_surface(self, tone: Surface) -> &'static str {
        match tone {
            Surface::Base => self.pick("surface-base-dark", "surface-base-light"),
            Surface::Raised => self.pick("surface-raised-dark", "surface-raised-light"),
        }
    }

    pub fn card(self) -> &'static str {
        self.pick("card-dark", "card-light")
    }

    pub fn muted_text(self) -> &'static str {
        self.pick("text-muted-dark", "text-muted-light")
    }

    pub fn chip(self) -> &'static str {
        self.pick("chip-dark", "chip-light")
    }

    pub fn field(self) -> &'static str {
        self.pick("field-dark", "field-light")
    }

    pub fn nav_link(self) -> &'static str {
        self.pick("nav-link-dark", "nav-link-light")
    }

    pub fn track(self) -> &'static str {
        self.pick("track-dark", "track-light")
    }
}

/// Alternating section backgrounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Surface {
    Base,
    Raised,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_classes(theme: Theme) -> Vec<&'static str> {
        vec![
            theme.section_surface(Surface::Base),
            theme.section_surface(Surface::Raised),
            theme.card(),
            theme.muted_text(),
            theme.chip(),
            theme.field(),
            theme.nav_link(),
            theme.track(),
        ]
    }

    #[test]
    fn default_theme_is_dark() {
        assert_eq!(Theme::default(), Theme::Dark);
        assert!(Theme::default().is_dark());
    }

    #[test]
    fn toggling_twice_restores_theme() {
        for theme in [Theme::Dark, Theme::Light] {
            assert_ne!(theme.toggled(), theme);
            assert_eq!(theme.toggled().toggled(), theme);
        }
    }

    #[test]
    fn derived_classes_follow_the_flag() {
        for class in all_classes(Theme::Dark) {
            assert!(class.ends_with("-dark"), "{class} should be a dark class");
        }
        for class in all_classes(Theme::Light) {
            assert!(class.ends_with("-light"), "{class} should be a light class");
        }
    }

    #[test]
    fn toggle_replaces_every_dark_class() {
        let dark = all_classes(Theme::Dark);
        let light = all_classes(Theme::Dark.toggled());

        for (before, after) in dark.iter().zip(light.iter()) {
            assert_ne!(before, after);
            assert_eq!(before.trim_end_matches("-dark"), after.trim_end_matches("-light"));
        }
    }

    #[test]
    fn background_matches_theme() {
        assert_eq!(Theme::Dark.background(), DARK_BACKGROUND);
        assert_eq!(Theme::Light.background(), LIGHT_BACKGROUND);
        assert_eq!(Theme::Light.toggle_label(), "Switch to dark theme");
    }
}
