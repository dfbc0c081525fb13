// Header component - 상단 헤더
//
// 앱 제목, 부제, EN/हिं 언어 전환 표시. 하단 푸터도 여기서 그린다.

use crate::ui::{I18n, Language, TextKey, Theme};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

pub struct Header {
    i18n: I18n,
    /// 부제 표시 여부 (축약 모드에서는 숨김)
    show_tagline: bool,
    bg_color: Color,
    fg_color: Color,
    active_bg: Color,
    active_fg: Color,
    muted_color: Color,
}

impl Default for Header {
    fn default() -> Self {
        Self {
            i18n: I18n::new(Language::English),
            show_tagline: true,
            bg_color: Color::Rgb(30, 58, 138),
            fg_color: Color::White,
            active_bg: Color::White,
            active_fg: Color::Rgb(30, 58, 138),
            muted_color: Color::Rgb(191, 219, 254),
        }
    }
}

impl Header {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn i18n(mut self, i18n: I18n) -> Self {
        self.i18n = i18n;
        self
    }

    pub fn show_tagline(mut self, show: bool) -> Self {
        self.show_tagline = show;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.header_bg.to_color();
        self.fg_color = theme.header_fg.to_color();
        self.active_bg = theme.header_fg.to_color();
        self.active_fg = theme.header_bg.to_color();
        self.muted_color = theme.fg_muted.to_color();
        self
    }

    /// 언어 토글 스팬: 활성 언어를 반전 표시
    fn language_toggle(&self) -> Vec<Span<'static>> {
        let current = self.i18n.language();
        let mut spans = Vec::new();
        for (i, lang) in [Language::English, Language::Hindi].into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("|", Style::default().fg(self.fg_color)));
            }
            let style = if lang == current {
                Style::default()
                    .fg(self.active_fg)
                    .bg(self.active_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(self.fg_color)
            };
            spans.push(Span::styled(format!(" {} ", lang.toggle_label()), style));
        }
        spans.push(Span::raw(" "));
        spans
    }

    fn title_line(&self, width: u16) -> Line<'static> {
        let title = format!(" {}", self.i18n.tr(TextKey::AppTitle));
        let toggle = self.language_toggle();
        let toggle_width: usize = toggle.iter().map(|s| s.content.width()).sum();
        let padding = (width as usize).saturating_sub(title.width() + toggle_width);

        let mut spans = vec![
            Span::styled(
                title,
                Style::default()
                    .fg(self.fg_color)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" ".repeat(padding)),
        ];
        spans.extend(toggle);
        Line::from(spans)
    }

    fn lines(&self, width: u16) -> Vec<Line<'static>> {
        let mut lines = vec![self.title_line(width)];
        if self.show_tagline {
            lines.push(Line::from(Span::styled(
                format!(" {}", self.i18n.tr(TextKey::Tagline)),
                Style::default().fg(self.muted_color),
            )));
        }
        lines
    }
}

impl Widget for Header {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.bg_color));
        Paragraph::new(self.lines(area.width)).render(area, buf);
    }
}

/// 저작권 푸터
pub struct Footer {
    i18n: I18n,
    fg_color: Color,
}

impl Footer {
    pub fn new(i18n: I18n) -> Self {
        Self {
            i18n,
            fg_color: Color::Rgb(148, 163, 184),
        }
    }

    pub fn theme(mut self, theme: &Theme) -> Self {
        self.fg_color = theme.fg_muted.to_color();
        self
    }
}

impl Widget for Footer {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.i18n.tr(TextKey::Footer))
            .style(Style::default().fg(self.fg_color))
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
