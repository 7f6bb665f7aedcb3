use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use ratatui::style::Color;
use serde::{Deserialize, Deserializer};
use tracing::info;

use crate::error::{TridotError, TridotResult};
use crate::indicator::OriginState;

// ─── Embedded Default ────────────────────────────────────────────────────
/// Baked into the binary at compile time. The app can never crash due to a
/// missing config file — this is always available as the base layer.
const DEFAULT_CONFIG_TOML: &str = include_str!("../default_config.toml");

// ─── CLI Arguments (override layer) ─────────────────────────────────────
/// tridot — a three-dot pull-to-refresh indicator for the terminal
#[derive(Parser, Debug, Clone)]
#[command(name = "tridot", version, about, long_about = None)]
pub struct CliArgs {
    /// Path to a custom config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level filter (overrides config file)
    #[arg(short, long)]
    pub log_level: Option<String>,

    /// Log file path (logging disabled if not specified)
    #[arg(long)]
    pub log: Option<PathBuf>,

    /// Target FPS for the render loop (overrides config file)
    #[arg(long)]
    pub fps: Option<u16>,

    /// Animation period in milliseconds (overrides config file)
    #[arg(long)]
    pub period_ms: Option<u64>,

    /// Rest with the dots fully spread instead of stacked at the center
    #[arg(long)]
    pub prepared: bool,

    /// Print the default config to stdout and exit
    #[arg(long)]
    pub print_default_config: bool,
}

// ─── TOML Structs ───────────────────────────────────────────────────────

/// Root configuration — parsed from TOML, then overridden by CLI flags.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// One full appear/move/disappear cycle, in milliseconds
    #[serde(default = "default_period_ms")]
    pub period_ms: u64,

    /// Target FPS
    #[serde(default = "default_fps")]
    pub fps: u16,

    /// Dot radii in canvas dots
    #[serde(default = "default_min_radius")]
    pub min_radius: f64,
    #[serde(default = "default_max_radius")]
    pub max_radius: f64,

    /// Resting geometry: "origin" or "prepared"
    #[serde(default = "default_origin")]
    pub origin: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    #[serde(
        deserialize_with = "deserialize_color",
        default = "default_color_white"
    )]
    pub fg: Color,

    #[serde(
        deserialize_with = "deserialize_color",
        default = "default_color_darkgray"
    )]
    pub fg_dim: Color,

    #[serde(deserialize_with = "deserialize_color", default = "default_color_cyan")]
    pub accent: Color,

    #[serde(
        deserialize_with = "deserialize_color",
        default = "default_color_darkgray"
    )]
    pub border: Color,

    #[serde(deserialize_with = "deserialize_color", default = "default_color_red")]
    pub error: Color,

    #[serde(
        deserialize_with = "deserialize_color",
        default = "default_color_left_dot"
    )]
    pub dot_left: Color,

    #[serde(deserialize_with = "deserialize_color", default = "default_color_red")]
    pub dot_center: Color,

    #[serde(
        deserialize_with = "deserialize_color",
        default = "default_color_green"
    )]
    pub dot_right: Color,
}

// ─── Defaults ───────────────────────────────────────────────────────────

impl Default for Config {
    fn default() -> Self {
        // Parse the embedded TOML — this cannot fail since we control it
        toml::from_str(DEFAULT_CONFIG_TOML)
            .expect("BUG: embedded default_config.toml is invalid TOML")
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".into(),
        }
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            period_ms: 1500,
            fps: 30,
            min_radius: 5.0,
            max_radius: 7.0,
            origin: "origin".into(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            fg: Color::White,
            fg_dim: Color::DarkGray,
            accent: Color::Cyan,
            border: Color::DarkGray,
            error: Color::Red,
            dot_left: default_color_left_dot(),
            dot_center: Color::Red,
            dot_right: Color::Green,
        }
    }
}

// ─── Color Deserializer ─────────────────────────────────────────────────

fn deserialize_color<'de, D>(deserializer: D) -> std::result::Result<Color, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_color(&s).ok_or_else(|| serde::de::Error::custom(format!("invalid color: \"{s}\"")))
}

/// Parse a color string into a ratatui Color.
/// Supports: named colors, "reset", "#RRGGBB" hex.
pub fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim().to_lowercase();
    match s.as_str() {
        "reset" | "default" | "transparent" => Some(Color::Reset),
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "white" => Some(Color::White),
        "gray" | "grey" => Some(Color::Gray),
        "darkgray" | "darkgrey" | "dark_gray" | "dark_grey" => Some(Color::DarkGray),
        "lightred" | "light_red" => Some(Color::LightRed),
        "lightgreen" | "light_green" => Some(Color::LightGreen),
        "lightyellow" | "light_yellow" => Some(Color::LightYellow),
        "lightblue" | "light_blue" => Some(Color::LightBlue),
        "lightmagenta" | "light_magenta" => Some(Color::LightMagenta),
        "lightcyan" | "light_cyan" => Some(Color::LightCyan),
        hex if hex.starts_with('#') && hex.len() == 7 => {
            let r = u8::from_str_radix(&hex[1..3], 16).ok()?;
            let g = u8::from_str_radix(&hex[3..5], 16).ok()?;
            let b = u8::from_str_radix(&hex[5..7], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        _ => None,
    }
}

// ─── Serde Default Helpers ──────────────────────────────────────────────

fn default_log_level() -> String {
    "info".into()
}
fn default_period_ms() -> u64 {
    1500
}
fn default_fps() -> u16 {
    30
}
fn default_min_radius() -> f64 {
    5.0
}
fn default_max_radius() -> f64 {
    7.0
}
fn default_origin() -> String {
    "origin".into()
}
fn default_color_white() -> Color {
    Color::White
}
fn default_color_darkgray() -> Color {
    Color::DarkGray
}
fn default_color_cyan() -> Color {
    Color::Cyan
}
fn default_color_red() -> Color {
    Color::Red
}
fn default_color_green() -> Color {
    Color::Green
}
fn default_color_left_dot() -> Color {
    // orange
    Color::Rgb(0xff, 0x7f, 0x0a)
}

// ─── Path Resolution & Accessors ────────────────────────────────────────

impl Config {
    /// Standard config file path: ~/.config/tridot/config.toml
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tridot")
            .join("config.toml")
    }

    /// Convenience: tick interval from FPS
    pub fn tick_rate_ms(&self) -> u64 {
        let fps = self.animation.fps.max(1);
        1000 / fps as u64
    }

    /// One full animation cycle
    pub fn period(&self) -> Duration {
        Duration::from_millis(self.animation.period_ms.max(1))
    }

    /// Smallest dot radius, kept positive whatever the file says
    pub fn min_radius(&self) -> f64 {
        self.animation.min_radius.max(0.5)
    }

    /// Largest dot radius, never below the smallest
    pub fn max_radius(&self) -> f64 {
        self.animation.max_radius.max(self.min_radius())
    }

    /// Resting geometry. Anything other than "prepared" means origin.
    pub fn origin_state(&self) -> OriginState {
        if self.animation.origin.eq_ignore_ascii_case("prepared") {
            OriginState::Prepared
        } else {
            OriginState::Origin
        }
    }
}

// ─── Bootloader ─────────────────────────────────────────────────────────

/// The single entry point for configuration. Called exactly once at startup.
///
/// 1. Resolve config file path (CLI override or default)
/// 2. If the config file doesn't exist, create directory tree + write defaults
/// 3. Parse TOML from disk into Config
/// 4. Apply CLI overrides on top
pub fn load(cli: &CliArgs) -> TridotResult<Config> {
    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);

    // Bootstrap: ensure the file exists on disk
    if !config_path.exists() {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&config_path, DEFAULT_CONFIG_TOML)?;
        info!("Created default config at {}", config_path.display());
    }

    // Read and parse
    let toml_str = std::fs::read_to_string(&config_path)?;

    let mut config: Config = toml::from_str(&toml_str).map_err(|e| {
        TridotError::Config(format!(
            "{} in {}. Delete the file to regenerate defaults, or run: \
             tridot --print-default-config",
            e,
            config_path.display()
        ))
    })?;

    // ── CLI overrides ───────────────────────────────────────────────
    if let Some(ref level) = cli.log_level {
        config.general.log_level = level.clone();
    }
    if let Some(fps) = cli.fps {
        config.animation.fps = fps;
    }
    if let Some(period_ms) = cli.period_ms {
        config.animation.period_ms = period_ms;
    }
    if cli.prepared {
        config.animation.origin = "prepared".into();
    }

    Ok(config)
}

/// Returns the embedded default config TOML string.
pub fn default_config_toml() -> &'static str {
    DEFAULT_CONFIG_TOML
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_defaults_parse() {
        let config = Config::default();
        assert_eq!(config.animation.period_ms, 1500);
        assert_eq!(config.animation.fps, 30);
        assert_eq!(config.origin_state(), OriginState::Origin);
        assert_eq!(config.theme.dot_left, Color::Rgb(0xff, 0x7f, 0x0a));
    }

    #[test]
    fn colors_parse_names_and_hex() {
        assert_eq!(parse_color("red"), Some(Color::Red));
        assert_eq!(parse_color(" Light_Blue "), Some(Color::LightBlue));
        assert_eq!(parse_color("#FF7F0A"), Some(Color::Rgb(0xff, 0x7f, 0x0a)));
        assert_eq!(parse_color("reset"), Some(Color::Reset));
        assert_eq!(parse_color("#12345"), None);
        assert_eq!(parse_color("no-such-color"), None);
    }

    #[test]
    fn origin_state_is_lenient() {
        let mut config = Config::default();
        config.animation.origin = "PREPARED".into();
        assert_eq!(config.origin_state(), OriginState::Prepared);
        config.animation.origin = "anything-else".into();
        assert_eq!(config.origin_state(), OriginState::Origin);
    }

    #[test]
    fn accessors_clamp_degenerate_values() {
        let mut config = Config::default();
        config.animation.fps = 0;
        assert_eq!(config.tick_rate_ms(), 1000);
        config.animation.period_ms = 0;
        assert_eq!(config.period(), Duration::from_millis(1));
        config.animation.min_radius = -3.0;
        config.animation.max_radius = -5.0;
        assert_eq!(config.min_radius(), 0.5);
        assert_eq!(config.max_radius(), 0.5);
    }

    #[test]
    fn partial_files_fall_back_to_defaults() {
        let config: Config = toml::from_str("[animation]\nperiod_ms = 900\n").unwrap();
        assert_eq!(config.animation.period_ms, 900);
        assert_eq!(config.animation.fps, 30);
        assert_eq!(config.theme.accent, Color::Cyan);
    }
}
