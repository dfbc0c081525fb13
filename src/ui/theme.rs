use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

/// 색상 테마
///
/// 헤더/탭/카드/상태바 색상을 한 곳에서 관리한다. `ColorDef`는 TOML에서
/// Hex 문자열("#1e3a8a") 또는 색상 이름("Red")으로 지정할 수 있다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    // 배경/전경
    pub bg_primary: ColorDef,
    pub fg_primary: ColorDef,
    pub fg_muted: ColorDef,

    // 헤더/탭
    pub header_bg: ColorDef,
    pub header_fg: ColorDef,
    pub tab_active_bg: ColorDef,
    pub tab_active_fg: ColorDef,
    pub tab_inactive_fg: ColorDef,

    // 카드/목록
    pub card_border: ColorDef,
    pub card_selected_border: ColorDef,
    pub item_selected_bg: ColorDef,
    pub heading: ColorDef,
    pub phone: ColorDef,

    // 하단 바
    pub status_bar_bg: ColorDef,
    pub status_bar_fg: ColorDef,
    pub command_bar_bg: ColorDef,
    pub command_bar_fg: ColorDef,

    // 강조
    pub accent: ColorDef,
    pub warning: ColorDef,
    pub error: ColorDef,
    pub success: ColorDef,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorDef {
    Hex(String),
    Named(String),
}

impl ColorDef {
    pub fn to_color(&self) -> Color {
        match self {
            ColorDef::Hex(hex) => parse_hex_color(hex),
            ColorDef::Named(name) => parse_named_color(name),
        }
    }
}

impl From<&str> for ColorDef {
    fn from(s: &str) -> Self {
        if s.starts_with('#') {
            ColorDef::Hex(s.to_string())
        } else {
            ColorDef::Named(s.to_string())
        }
    }
}

fn parse_hex_color(hex: &str) -> Color {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 && hex.is_ascii() {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color::Rgb(r, g, b)
    } else {
        Color::Reset
    }
}

fn parse_named_color(name: &str) -> Color {
    match name.to_lowercase().as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        "darkgray" | "darkgrey" => Color::DarkGray,
        "white" => Color::White,
        _ => Color::Reset,
    }
}

/// 설정 파일에서 고르는 테마 이름
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn named(name: ThemeName) -> Self {
        match name {
            ThemeName::Dark => Self::dark(),
            ThemeName::Light => Self::light(),
        }
    }

    /// Dark 테마 (기본)
    pub fn dark() -> Self {
        Theme {
            bg_primary: "#0f172a".into(),
            fg_primary: "#e2e8f0".into(),
            fg_muted: "#94a3b8".into(),

            header_bg: "#1e3a8a".into(),
            header_fg: "#ffffff".into(),
            tab_active_bg: "#2563eb".into(),
            tab_active_fg: "#ffffff".into(),
            tab_inactive_fg: "#94a3b8".into(),

            card_border: "#334155".into(),
            card_selected_border: "#f97316".into(),
            item_selected_bg: "#1e40af".into(),
            heading: "#60a5fa".into(),
            phone: "#4ade80".into(),

            status_bar_bg: "#1e3a8a".into(),
            status_bar_fg: "#ffffff".into(),
            command_bar_bg: "#1e293b".into(),
            command_bar_fg: "#cbd5e1".into(),

            accent: "#f97316".into(),
            warning: "#fbbf24".into(),
            error: "#f87171".into(),
            success: "#4ade80".into(),
        }
    }

    /// Light 테마
    pub fn light() -> Self {
        Theme {
            bg_primary: "#f8fafc".into(),
            fg_primary: "#1e293b".into(),
            fg_muted: "#64748b".into(),

            header_bg: "#1d4ed8".into(),
            header_fg: "#ffffff".into(),
            tab_active_bg: "#1d4ed8".into(),
            tab_active_fg: "#ffffff".into(),
            tab_inactive_fg: "#475569".into(),

            card_border: "#cbd5e1".into(),
            card_selected_border: "#ea580c".into(),
            item_selected_bg: "#bfdbfe".into(),
            heading: "#1d4ed8".into(),
            phone: "#15803d".into(),

            status_bar_bg: "#1d4ed8".into(),
            status_bar_fg: "#ffffff".into(),
            command_bar_bg: "#e2e8f0".into(),
            command_bar_fg: "#1e293b".into(),

            accent: "#ea580c".into(),
            warning: "#b45309".into(),
            error: "#dc2626".into(),
            success: "#15803d".into(),
        }
    }

    pub fn base(&self) -> Style {
        Style::default()
            .fg(self.fg_primary.to_color())
            .bg(self.bg_primary.to_color())
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

/// 뷰 렌더링 색상 묶음 (테마에서 한 번 변환)
#[derive(Debug, Clone, Copy)]
pub struct ViewColors {
    pub fg: Color,
    pub muted: Color,
    pub heading: Color,
    pub accent: Color,
    pub phone: Color,
    pub error: Color,
    pub border: Color,
    pub selected_border: Color,
    pub selected_bg: Color,
}

impl Default for ViewColors {
    fn default() -> Self {
        Self::from_theme(&Theme::default())
    }
}

impl ViewColors {
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            fg: theme.fg_primary.to_color(),
            muted: theme.fg_muted.to_color(),
            heading: theme.heading.to_color(),
            accent: theme.accent.to_color(),
            phone: theme.phone.to_color(),
            error: theme.error.to_color(),
            border: theme.card_border.to_color(),
            selected_border: theme.card_selected_border.to_color(),
            selected_bg: theme.item_selected_bg.to_color(),
        }
    }

    pub fn heading_style(&self) -> Style {
        Style::default()
            .fg(self.heading)
            .add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_theme_creation() {
        let theme = Theme::dark();
        assert_eq!(theme.bg_primary.to_color(), Color::Rgb(15, 23, 42));
    }

    #[test]
    fn test_named_theme_lookup() {
        let theme = Theme::named(ThemeName::Light);
        assert_eq!(theme.bg_primary.to_color(), Color::Rgb(248, 250, 252));
    }

    #[test]
    fn test_hex_color_parsing() {
        assert_eq!(parse_hex_color("#1e3a8a"), Color::Rgb(30, 58, 138));
        assert_eq!(parse_hex_color("#12"), Color::Reset);
    }

    #[test]
    fn test_named_color_parsing() {
        assert_eq!(parse_named_color("Red"), Color::Red);
        assert_eq!(parse_named_color("grey"), Color::Gray);
        assert_eq!(parse_named_color("unknown"), Color::Reset);
    }

    #[test]
    fn test_theme_toml_round_trip_keeps_colors() {
        let text = toml::to_string(&Theme::dark()).unwrap();
        let parsed: Theme = toml::from_str(&text).unwrap();
        assert_eq!(parsed.accent.to_color(), Theme::dark().accent.to_color());
    }
}
