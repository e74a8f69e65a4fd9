use ratatui::style::Color;

use crate::model::UiConfig;

/// Parsed color theme for the TUI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    /// Title bar, selected filter, checked toggle-all
    pub accent: Color,
    pub dim: Color,
    /// Completed todo titles
    pub done: Color,
    pub check: Color,
    pub cursor_bg: Color,
    pub input_bg: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x14, 0x14, 0x14),
            text: Color::Rgb(0xD9, 0xD9, 0xD9),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            accent: Color::Rgb(0xB8, 0x3F, 0x45),
            dim: Color::Rgb(0x77, 0x77, 0x77),
            done: Color::Rgb(0x5D, 0x5D, 0x5D),
            check: Color::Rgb(0x5D, 0xC2, 0xAF),
            cursor_bg: Color::Rgb(0x2E, 0x22, 0x24),
            input_bg: Color::Rgb(0x1E, 0x1E, 0x1E),
            error: Color::Rgb(0xFF, 0x55, 0x55),
        }
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Create a theme from UI config, falling back to defaults.
    /// Unknown slots and malformed colors are ignored.
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();
        for (key, value) in &ui.colors {
            let Some(color) = parse_hex_color(value) else {
                tracing::warn!(slot = %key, value = %value, "ignoring malformed theme color");
                continue;
            };
            match key.as_str() {
                "background" => theme.background = color,
                "text" => theme.text = color,
                "text_bright" => theme.text_bright = color,
                "accent" => theme.accent = color,
                "dim" => theme.dim = color,
                "done" => theme.done = color,
                "check" => theme.check = color,
                "cursor_bg" => theme.cursor_bg = color,
                "input_bg" => theme.input_bg = color,
                "error" => theme.error = color,
                _ => {}
            }
        }
        theme
    }
}
