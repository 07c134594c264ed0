use std::fs;

use ratatui::style::Color;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};

#[derive(Embed)]
#[folder = "assets/themes/"]
struct ThemeAssets;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ThemeColors {
    pub bg: String,
    pub fg: String,
    pub text_dim: String,
    pub header_bg: String,
    pub header_fg: String,
    pub accent: String,
    pub accent_dim: String,
    pub border: String,
    pub border_focused: String,
    pub prompt_bg: String,
    pub prompt_fg: String,
    pub option_bg: String,
    pub option_fg: String,
    pub correct_bg: String,
    pub correct_fg: String,
    pub wrong_bg: String,
    pub wrong_fg: String,
    pub error: String,
}

impl Theme {
    pub fn load(name: &str) -> Option<Self> {
        // Try user themes dir
        if let Some(config_dir) = dirs::config_dir() {
            let user_theme_path = config_dir
                .join("quizling")
                .join("themes")
                .join(format!("{name}.toml"));
            if let Ok(content) = fs::read_to_string(&user_theme_path) {
                if let Ok(theme) = toml::from_str::<Theme>(&content) {
                    return Some(theme);
                }
            }
        }

        // Try bundled themes
        let filename = format!("{name}.toml");
        if let Some(file) = ThemeAssets::get(&filename) {
            if let Ok(content) = std::str::from_utf8(file.data.as_ref()) {
                if let Ok(theme) = toml::from_str::<Theme>(content) {
                    return Some(theme);
                }
            }
        }

        None
    }

    pub fn available_themes() -> Vec<String> {
        ThemeAssets::iter()
            .filter_map(|f| f.strip_suffix(".toml").map(|n| n.to_string()))
            .collect()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::load("classic").unwrap_or_else(|| Self {
            name: "classic".to_string(),
            colors: ThemeColors::default(),
        })
    }
}

impl Default for ThemeColors {
    // Gray canvas, powder-blue buttons, light green/pink reveal colors.
    fn default() -> Self {
        Self {
            bg: "#808080".to_string(),
            fg: "#ffffff".to_string(),
            text_dim: "#d3d3d3".to_string(),
            header_bg: "#000000".to_string(),
            header_fg: "#ffffff".to_string(),
            accent: "#add8e6".to_string(),
            accent_dim: "#5f7a85".to_string(),
            border: "#2e2e2e".to_string(),
            border_focused: "#ffffff".to_string(),
            prompt_bg: "#ffffff".to_string(),
            prompt_fg: "#000000".to_string(),
            option_bg: "#add8e6".to_string(),
            option_fg: "#000000".to_string(),
            correct_bg: "#90ee90".to_string(),
            correct_fg: "#000000".to_string(),
            wrong_bg: "#ffb6c1".to_string(),
            wrong_fg: "#000000".to_string(),
            error: "#8b0000".to_string(),
        }
    }
}

impl ThemeColors {
    pub fn parse_color(hex: &str) -> Color {
        let hex = hex.trim_start_matches('#');
        if hex.len() == 6 {
            if let (Ok(r), Ok(g), Ok(b)) = (
                u8::from_str_radix(&hex[0..2], 16),
                u8::from_str_radix(&hex[2..4], 16),
                u8::from_str_radix(&hex[4..6], 16),
            ) {
                return Color::Rgb(r, g, b);
            }
        }
        Color::White
    }

    pub fn bg(&self) -> Color { Self::parse_color(&self.bg) }
    pub fn fg(&self) -> Color { Self::parse_color(&self.fg) }
    pub fn text_dim(&self) -> Color { Self::parse_color(&self.text_dim) }
    pub fn header_bg(&self) -> Color { Self::parse_color(&self.header_bg) }
    pub fn header_fg(&self) -> Color { Self::parse_color(&self.header_fg) }
    pub fn accent(&self) -> Color { Self::parse_color(&self.accent) }
    pub fn accent_dim(&self) -> Color { Self::parse_color(&self.accent_dim) }
    pub fn border(&self) -> Color { Self::parse_color(&self.border) }
    pub fn border_focused(&self) -> Color { Self::parse_color(&self.border_focused) }
    pub fn prompt_bg(&self) -> Color { Self::parse_color(&self.prompt_bg) }
    pub fn prompt_fg(&self) -> Color { Self::parse_color(&self.prompt_fg) }
    pub fn option_bg(&self) -> Color { Self::parse_color(&self.option_bg) }
    pub fn option_fg(&self) -> Color { Self::parse_color(&self.option_fg) }
    pub fn correct_bg(&self) -> Color { Self::parse_color(&self.correct_bg) }
    pub fn correct_fg(&self) -> Color { Self::parse_color(&self.correct_fg) }
    pub fn wrong_bg(&self) -> Color { Self::parse_color(&self.wrong_bg) }
    pub fn wrong_fg(&self) -> Color { Self::parse_color(&self.wrong_fg) }
    pub fn error(&self) -> Color { Self::parse_color(&self.error) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color_hex() {
        assert_eq!(ThemeColors::parse_color("#90ee90"), Color::Rgb(144, 238, 144));
        assert_eq!(ThemeColors::parse_color("add8e6"), Color::Rgb(173, 216, 230));
    }

    #[test]
    fn test_parse_color_invalid_falls_back_to_white() {
        assert_eq!(ThemeColors::parse_color("nope"), Color::White);
        assert_eq!(ThemeColors::parse_color("#12"), Color::White);
    }

    #[test]
    fn test_bundled_themes_parse() {
        for name in Theme::available_themes() {
            assert!(Theme::load(&name).is_some(), "theme {name} failed to load");
        }
    }

    #[test]
    fn test_default_theme_is_classic() {
        let theme = Theme::default();
        assert_eq!(theme.name, "classic");
    }
}
