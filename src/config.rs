use crate::gui::menu::{
    DEFAULT_BUTTON_GAP, DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE, DEFAULT_INNER_RADIUS,
    DEFAULT_OUTER_RADIUS, DEFAULT_ROTATION, RingParams,
};
use derive_more::{AsRef, Deref, Display, From, Into};
use directories::ProjectDirs;
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use palette::{Srgb, Srgba, WithAlpha};
use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::fmt;
use std::str::FromStr;
use strum::{Display as StrumDisplay, EnumString};
use thiserror::Error;

/// Whether the menu triggers itself or is pinned by the caller.
///
/// `Floating` attaches the right-click / long-press triggers and dismisses on
/// any primary click. `Fixed` attaches no triggers at all: the menu comes up
/// at `pos_x`/`pos_y` and is driven entirely through [`crate::events::AppEvent`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    DeserializeFromStr,
    EnumString,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Floating,
    Fixed,
}

/// An sRGB color parsed from a `#RGB` or `#RRGGBB` hex string.
#[derive(Debug, Clone, Copy, PartialEq, SerializeDisplay, DeserializeFromStr)]
pub struct MenuColor(Srgba<f64>);

impl MenuColor {
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self(Srgba::new(r, g, b, 1.0))
    }

    pub fn srgba(&self) -> Srgba<f64> {
        self.0
    }
}

impl FromStr for MenuColor {
    type Err = palette::rgb::FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rgb: Srgb<u8> = s.parse()?;
        Ok(Self(rgb.into_format::<f64>().with_alpha(1.0)))
    }
}

impl fmt::Display for MenuColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rgb: Srgb<u8> = self.0.color.into_format();
        write!(f, "#{:02X}{:02X}{:02X}", rgb.red, rgb.green, rgb.blue)
    }
}

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct ExecCommand(String);

impl ExecCommand {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }
}

/// File-side button descriptor. The demo binary turns `exec` into the
/// button's activation callback; library users build
/// [`crate::gui::menu::ButtonSpec`] values directly instead.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ButtonConfig {
    pub text: String,
    pub exec: Option<ExecCommand>,
    pub background_color: Option<MenuColor>,
    pub border_color: Option<MenuColor>,
    pub text_color: Option<MenuColor>,
}

/// Menu configuration. Every field is optional in the file; missing fields
/// take the defaults below. Radii are pixels, `rotation` and `button_gap`
/// are radians. `outer_radius > inner_radius >= 0` is the caller's
/// responsibility and is not validated here.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MenuConfig {
    pub outer_radius: f64,
    pub inner_radius: f64,
    pub rotation: f64,
    pub button_gap: f64,
    pub font_family: String,
    pub font_size: f64,
    pub background_color: MenuColor,
    pub text_color: MenuColor,
    pub border_color: MenuColor,
    pub mode: Mode,
    pub pos_x: f64,
    pub pos_y: f64,
    pub buttons: Vec<ButtonConfig>,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            outer_radius: DEFAULT_OUTER_RADIUS,
            inner_radius: DEFAULT_INNER_RADIUS,
            rotation: DEFAULT_ROTATION,
            button_gap: DEFAULT_BUTTON_GAP,
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            font_size: DEFAULT_FONT_SIZE,
            background_color: MenuColor::new(0.933, 0.933, 0.933),
            text_color: MenuColor::new(0.0, 0.0, 0.0),
            border_color: MenuColor::new(1.0, 1.0, 1.0),
            mode: Mode::default(),
            pos_x: 0.0,
            pos_y: 0.0,
            buttons: Vec::new(),
        }
    }
}

impl From<&MenuConfig> for RingParams {
    fn from(config: &MenuConfig) -> Self {
        Self {
            outer_radius: config.outer_radius,
            inner_radius: config.inner_radius,
            rotation: config.rotation,
            gap: config.button_gap,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Notify error: {0}")]
    Notify(#[from] notify::Error),
}

pub fn get_config_path() -> Result<std::path::PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("org", "rondel", "rondel").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

pub fn load_config() -> Result<MenuConfig, ConfigError> {
    let config_path = get_config_path()?;

    let s = config::Config::builder()
        .add_source(config::File::from(config_path).required(false))
        .add_source(config::Environment::with_prefix("RONDEL"))
        .build()?;

    Ok(s.try_deserialize()?)
}

pub fn load_or_default() -> MenuConfig {
    match load_config() {
        Ok(c) => c,
        Err(e) => {
            log::warn!("Falling back to default config: {}", e);
            MenuConfig::default()
        }
    }
}

pub fn write_default_config() -> std::io::Result<std::path::PathBuf> {
    let path =
        get_config_path().map_err(|e| std::io::Error::new(std::io::ErrorKind::NotFound, e))?;
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(&path, DEFAULT_CONFIG)?;
    }
    Ok(path)
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

use crate::events::AppEvent;
use async_channel::Sender;

fn is_meaningful(kind: &EventKind) -> bool {
    matches!(
        kind,
        EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
    )
}

/// Watches the config file and emits `ConfigReload` on changes. Runs until
/// the receiving side of `tx` is dropped.
pub async fn run_async_watcher(tx: Sender<AppEvent>) {
    let config_path = match get_config_path() {
        Ok(p) => p,
        Err(e) => {
            log::error!("Config watcher error: {}", e);
            return;
        }
    };
    let Some(config_dir) = config_path.parent().map(|p| p.to_path_buf()) else {
        return;
    };

    if let Err(e) = fs_err::create_dir_all(&config_dir) {
        log::error!("Failed to create config directory for watching: {}", e);
        return;
    }

    let (bridge_tx, bridge_rx) = async_channel::unbounded();

    let mut watcher = match RecommendedWatcher::new(
        move |res| {
            let _ = bridge_tx.send_blocking(res);
        },
        notify::Config::default(),
    ) {
        Ok(w) => w,
        Err(e) => {
            log::error!("Failed to create watcher: {}", e);
            return;
        }
    };

    if let Err(e) = watcher.watch(&config_dir, RecursiveMode::NonRecursive) {
        log::error!("Failed to watch config directory: {}", e);
        return;
    }

    while let Ok(res) = bridge_rx.recv().await {
        match res {
            Ok(event) => {
                if is_meaningful(&event.kind)
                    && event.paths.iter().any(|p| p == &config_path)
                    && tx.send(AppEvent::ConfigReload).await.is_err()
                {
                    break;
                }
            }
            Err(e) => log::error!("Watch error: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_deserializes_case_insensitively() {
        let cases = vec![
            ("\"floating\"", Mode::Floating),
            ("\"Floating\"", Mode::Floating),
            ("\"FLOATING\"", Mode::Floating),
            ("\"fixed\"", Mode::Fixed),
            ("\"Fixed\"", Mode::Fixed),
        ];

        for (json, expected) in cases {
            let deserialized: Mode = serde_json::from_str(json).unwrap();
            assert_eq!(deserialized, expected);
        }
    }

    #[test]
    fn color_parses_short_and_long_hex() {
        let short: MenuColor = "#EEE".parse().unwrap();
        let long: MenuColor = "#EEEEEE".parse().unwrap();
        assert_eq!(short, long);
        assert_eq!(short.to_string(), "#EEEEEE");

        let red: MenuColor = "#FF0000".parse().unwrap();
        assert_eq!(red.srgba().red, 1.0);
        assert_eq!(red.srgba().alpha, 1.0);

        assert!("not-a-color".parse::<MenuColor>().is_err());
    }

    #[test]
    fn missing_fields_take_defaults() {
        let config: MenuConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.outer_radius, DEFAULT_OUTER_RADIUS);
        assert_eq!(config.inner_radius, DEFAULT_INNER_RADIUS);
        assert_eq!(config.rotation, DEFAULT_ROTATION);
        assert_eq!(config.button_gap, DEFAULT_BUTTON_GAP);
        assert_eq!(config.font_family, DEFAULT_FONT_FAMILY);
        assert_eq!(config.mode, Mode::Floating);
        assert!(config.buttons.is_empty());
    }

    #[test]
    fn buttons_deserialize_with_optional_styles() {
        let json = r##"{
            "buttons": [
                { "text": "Terminal", "exec": "foot" },
                { "text": "Web", "background_color": "#356", "text_color": "#FFF" }
            ]
        }"##;
        let config: MenuConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.buttons.len(), 2);
        assert_eq!(config.buttons[0].exec, Some(ExecCommand::new("foot")));
        assert!(config.buttons[0].background_color.is_none());
        assert!(config.buttons[1].exec.is_none());
        assert_eq!(
            config.buttons[1].background_color,
            Some("#335566".parse().unwrap())
        );
    }

    #[test]
    fn ring_params_mirror_the_config() {
        let mut config = MenuConfig::default();
        config.outer_radius = 140.0;
        config.button_gap = 0.04;
        let params = RingParams::from(&config);
        assert_eq!(params.outer_radius, 140.0);
        assert_eq!(params.inner_radius, config.inner_radius);
        assert_eq!(params.gap, 0.04);
    }
}
