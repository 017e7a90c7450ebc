use crate::config::MenuConfig;
use crate::gui::menu::ButtonSpec;
use gtk::gdk;
use gtk::prelude::*;
use gtk4 as gtk;
use palette::Srgba;

/// Resolved drawing style for the ring. Per-button overrides always win over
/// these config-level values; the hard-coded defaults live in
/// [`MenuConfig::default`] so there is a single fallback chain:
/// button field -> config field -> built-in default.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub background: Srgba<f64>,
    pub border: Srgba<f64>,
    pub text: Srgba<f64>,
    pub hover: Srgba<f64>,
    pub font_family: String,
    pub font_size: f64,
}

impl Theme {
    pub fn from_config(config: &MenuConfig) -> Self {
        let background = config.background_color.srgba();
        Self {
            background,
            border: config.border_color.srgba(),
            text: config.text_color.srgba(),
            hover: Self::hover_for(background),
            font_family: config.font_family.clone(),
            font_size: config.font_size,
        }
    }

    /// Hover highlight: the fill nudged toward white.
    fn hover_for(base: Srgba<f64>) -> Srgba<f64> {
        let lift = |c: f64| c + (1.0 - c) * 0.35;
        Srgba::new(lift(base.red), lift(base.green), lift(base.blue), base.alpha)
    }

    pub fn fill(&self, button: &ButtonSpec, hovered: bool) -> Srgba<f64> {
        if hovered {
            return self.hover;
        }
        button.background.unwrap_or(self.background)
    }

    pub fn border(&self, button: &ButtonSpec) -> Srgba<f64> {
        button.border.unwrap_or(self.border)
    }

    pub fn text(&self, button: &ButtonSpec) -> Srgba<f64> {
        button.text_color.unwrap_or(self.text)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&MenuConfig::default())
    }
}

pub fn load_css() {
    let provider = gtk::CssProvider::new();
    let css_data = "
.rondel-window, .rondel-drawing-area {
    background: none;
    background-color: transparent;
}
";
    provider.load_from_data(css_data);

    if let Some(display) = gdk::Display::default() {
        gtk::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}
