//! Light/dark visual theme.
//!
//! The theme only selects class names for the themed surfaces (the form
//! container and the free-text/select inputs) and the caption of the toggle
//! button. It is local to one form instance and never persisted.

use std::fmt;

/// Classes shared by every container variant.
const CONTAINER_BASE: &str = "w-full p-6 rounded-md shadow-md";
/// Classes shared by every themed input variant.
const INPUT_BASE: &str = "block w-full p-2 border rounded-md";

/// The two-valued theme flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    /// Light background, dark text. The initial theme.
    #[default]
    Light,
    /// Dark background, light text.
    Dark,
}

impl Theme {
    /// Returns the other theme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Flips this theme in place.
    pub fn toggle(&mut self) {
        *self = self.toggled();
    }

    /// Returns `true` for [`Theme::Dark`].
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Classes for the outer container (background and title surface).
    pub fn container_class(self) -> String {
        let colors = match self {
            Self::Light => "bg-gray-50 text-black",
            Self::Dark => "bg-gray-800 text-white",
        };
        format!("{CONTAINER_BASE} {colors}")
    }

    /// Classes for themed inputs.
    pub fn input_class(self) -> String {
        let colors = match self {
            Self::Light => "bg-white text-black",
            Self::Dark => "bg-gray-700 text-white",
        };
        format!("{INPUT_BASE} {colors}")
    }

    /// Caption of the toggle button: the theme a click switches to.
    pub const fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "Dark Theme",
            Self::Dark => "Light Theme",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}
