use ratatui::style::{Color, Modifier, Style};

use crate::config::ThemeConfig;

/// Resolved UI colors, built once from the config layer.
#[derive(Debug, Clone)]
pub struct Theme {
    pub fg: Color,
    pub fg_dim: Color,
    pub accent: Color,
    pub border: Color,
    pub error: Color,
}

impl Theme {
    pub fn from_config(config: &ThemeConfig) -> Self {
        Self {
            fg: config.fg,
            fg_dim: config.fg_dim,
            accent: config.accent,
            border: config.border,
            error: config.error,
        }
    }

    // ── Style Constructors ────────────────────────────────────────────

    pub fn style_default(&self) -> Style {
        Style::default().fg(self.fg)
    }

    pub fn style_dim(&self) -> Style {
        Style::default().fg(self.fg_dim)
    }

    pub fn style_accent_bold(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn style_border(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn style_error(&self) -> Style {
        Style::default().fg(self.error)
    }

    pub fn style_key_hint(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn style_key_desc(&self) -> Style {
        Style::default().fg(self.fg_dim)
    }
}
