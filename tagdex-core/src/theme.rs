//! Light/dark theme model.
//!
//! Pure half of the theme preference: parsing, the complement, and the
//! toggle control's face. The browser side (document attribute,
//! `localStorage`) lives in the web crate.

/// Storage key holding the persisted preference.
pub const STORAGE_KEY: &str = "tagdex-theme";

/// Color scheme the page renders with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    /// Light scheme - the default when nothing is stored.
    #[default]
    Light,
    /// Dark scheme.
    Dark,
}

impl Theme {
    /// The `data-theme` attribute and storage value.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a stored value; anything but `"dark"` is light.
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    /// The other theme.
    pub fn complement(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Toggle control label: names the switch it will perform next.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Dark => "Switch to light theme",
            Theme::Light => "Switch to dark theme",
        }
    }

    /// Icon glyph paired with [`Self::toggle_label`].
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Dark => "\u{2600}\u{fe0f}",
            Theme::Light => "\u{1f319}",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn complement_is_its_own_inverse() {
        assert_eq!(Theme::Light.complement(), Theme::Dark);
        assert_eq!(Theme::Dark.complement(), Theme::Light);
        assert_eq!(Theme::Light.complement().complement(), Theme::Light);
    }

    #[test]
    fn stored_value_round_trips() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(Theme::from_stored(Some(theme.as_str())), theme);
        }
    }

    #[test]
    fn unknown_or_missing_stored_value_defaults_to_light() {
        assert_eq!(Theme::from_stored(None), Theme::Light);
        assert_eq!(Theme::from_stored(Some("")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("solarized")), Theme::Light);
    }

    #[test]
    fn toggle_face_describes_the_opposite_theme() {
        assert_eq!(Theme::Dark.toggle_label(), "Switch to light theme");
        assert_eq!(Theme::Dark.toggle_icon(), "\u{2600}\u{fe0f}");
        assert_eq!(Theme::Light.toggle_label(), "Switch to dark theme");
        assert_eq!(Theme::Light.toggle_icon(), "\u{1f319}");
    }
}
