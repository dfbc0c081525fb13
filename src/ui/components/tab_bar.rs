// Tab bar component - 뷰 탭 표시

use crate::models::ViewTab;
use crate::ui::{I18n, Language, Theme};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct TabBar {
    active: ViewTab,
    i18n: I18n,
    /// 폭이 좁으면 아이콘만 표시
    icons_only: bool,
    active_bg: Color,
    active_fg: Color,
    inactive_fg: Color,
}

impl Default for TabBar {
    fn default() -> Self {
        Self {
            active: ViewTab::Voice,
            i18n: I18n::new(Language::English),
            icons_only: false,
            active_bg: Color::Rgb(37, 99, 235),
            active_fg: Color::White,
            inactive_fg: Color::Rgb(148, 163, 184),
        }
    }
}

impl TabBar {
    pub fn new(active: ViewTab) -> Self {
        Self {
            active,
            ..Default::default()
        }
    }

    pub fn i18n(mut self, i18n: I18n) -> Self {
        self.i18n = i18n;
        self
    }

    pub fn icons_only(mut self, icons_only: bool) -> Self {
        self.icons_only = icons_only;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.active_bg = theme.tab_active_bg.to_color();
        self.active_fg = theme.tab_active_fg.to_color();
        self.inactive_fg = theme.tab_inactive_fg.to_color();
        self
    }

    fn line(&self) -> Line<'static> {
        let mut spans = Vec::new();
        for (i, tab) in ViewTab::ALL.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            let text = if self.icons_only {
                format!(" {} F{} ", tab.icon(), i + 1)
            } else {
                format!(" {} {} ", tab.icon(), self.i18n.tr(tab.label_key()))
            };
            let style = if tab == self.active {
                Style::default()
                    .fg(self.active_fg)
                    .bg(self.active_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(self.inactive_fg)
            };
            spans.push(Span::styled(text, style));
        }
        Line::from(spans)
    }
}

impl Widget for TabBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.line()).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_labels_follow_language() {
        let english = TabBar::new(ViewTab::Aid).line().to_string();
        assert!(english.contains("Voice Assistant"));
        assert!(english.contains("Legal Aid"));
        assert!(english.contains("Emergency"));

        let hindi = TabBar::new(ViewTab::Aid)
            .i18n(I18n::new(Language::Hindi))
            .line()
            .to_string();
        assert!(hindi.contains("कानूनी सहायता"));
    }

    #[test]
    fn test_active_tab_is_bold() {
        let line = TabBar::new(ViewTab::Emergency).line();
        let bold: Vec<String> = line
            .spans
            .iter()
            .filter(|s| s.style.add_modifier.contains(Modifier::BOLD))
            .map(|s| s.content.to_string())
            .collect();
        assert_eq!(bold.len(), 1);
        assert!(bold[0].contains("Emergency"));
    }

    #[test]
    fn test_icons_only_mode() {
        let text = TabBar::new(ViewTab::Voice).icons_only(true).line().to_string();
        assert!(text.contains("F1"));
        assert!(!text.contains("Voice Assistant"));
    }
}
