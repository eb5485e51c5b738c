/// Light or dark presentation of the whole page. Not persisted, every fresh
/// load starts dark.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DisplayMode {
    Light,
    #[default]
    Dark,
}

impl DisplayMode {
    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Light => DisplayMode::Dark,
            DisplayMode::Dark => DisplayMode::Light,
        }
    }

    pub fn toggle(&mut self) {
        *self = self.toggled();
    }

    pub fn page_class(self) -> &'static str {
        match self {
            DisplayMode::Light => "page theme-light",
            DisplayMode::Dark => "page theme-dark",
        }
    }

    /// Icon on the toggle button, showing the mode a click switches to.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            DisplayMode::Light => "🌙",
            DisplayMode::Dark => "🌞",
        }
    }

    pub fn toggle_label(self) -> &'static str {
        match self {
            DisplayMode::Light => "Switch to dark mode",
            DisplayMode::Dark => "Switch to light mode",
        }
    }
}
