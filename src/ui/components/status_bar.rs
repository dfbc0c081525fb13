// Status bar component - 상태바 컴포넌트
//
// 활성 뷰 요약, 토스트 메시지, 서비스 연결 상태 표시

use crate::ui::{I18n, Language, TextKey, Theme};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// 백엔드 서비스 상태 (시작 시 한 번 확인)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceStatus {
    Checking,
    Online,
    Offline,
}

impl ServiceStatus {
    pub fn label_key(self) -> TextKey {
        match self {
            ServiceStatus::Checking => TextKey::ServiceChecking,
            ServiceStatus::Online => TextKey::ServiceOnline,
            ServiceStatus::Offline => TextKey::ServiceOffline,
        }
    }

    fn indicator(self) -> &'static str {
        match self {
            ServiceStatus::Checking => "◌",
            ServiceStatus::Online => "●",
            ServiceStatus::Offline => "○",
        }
    }
}

pub struct StatusBar<'a> {
    /// 왼쪽 요약 텍스트
    summary: &'a str,
    /// 일시 메시지 (있으면 요약 대신 강조 표시)
    toast: Option<&'a str>,
    service: ServiceStatus,
    i18n: I18n,
    bg_color: Color,
    fg_color: Color,
    online_color: Color,
    offline_color: Color,
    toast_color: Color,
}

impl Default for StatusBar<'_> {
    fn default() -> Self {
        Self {
            summary: "",
            toast: None,
            service: ServiceStatus::Checking,
            i18n: I18n::new(Language::English),
            bg_color: Color::Rgb(30, 58, 138),
            fg_color: Color::White,
            online_color: Color::Green,
            offline_color: Color::Red,
            toast_color: Color::Yellow,
        }
    }
}

impl<'a> StatusBar<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn summary(mut self, summary: &'a str) -> Self {
        self.summary = summary;
        self
    }

    pub fn toast(mut self, toast: Option<&'a str>) -> Self {
        self.toast = toast;
        self
    }

    pub fn service(mut self, status: ServiceStatus) -> Self {
        self.service = status;
        self
    }

    pub fn i18n(mut self, i18n: I18n) -> Self {
        self.i18n = i18n;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.status_bar_bg.to_color();
        self.fg_color = theme.status_bar_fg.to_color();
        self.online_color = theme.success.to_color();
        self.offline_color = theme.error.to_color();
        self.toast_color = theme.warning.to_color();
        self
    }

    fn service_text(&self) -> String {
        format!(
            "{} {}: {} ",
            self.service.indicator(),
            self.i18n.tr(TextKey::ServiceLabel),
            self.i18n.tr(self.service.label_key())
        )
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.bg_color));

        let (left, left_style) = match self.toast {
            Some(toast) => (
                format!(" {}", toast),
                Style::default()
                    .fg(self.toast_color)
                    .add_modifier(Modifier::BOLD),
            ),
            None => (format!(" {}", self.summary), Style::default().fg(self.fg_color)),
        };

        let right = self.service_text();
        let right_color = match self.service {
            ServiceStatus::Online => self.online_color,
            ServiceStatus::Offline => self.offline_color,
            ServiceStatus::Checking => self.fg_color,
        };

        let padding_len = (area.width as usize).saturating_sub(left.width() + right.width());

        let line = Line::from(vec![
            Span::styled(left, left_style),
            Span::raw(" ".repeat(padding_len)),
            Span::styled(right, Style::default().fg(right_color)),
        ]);
        Paragraph::new(line).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(buf: &Buffer, width: u16) -> String {
        (0..width).map(|x| buf[(x, 0)].symbol().to_string()).collect()
    }

    #[test]
    fn test_status_bar_shows_summary_and_service() {
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);
        StatusBar::new()
            .summary("3 centers")
            .service(ServiceStatus::Online)
            .render(area, &mut buf);
        let text = row_text(&buf, 60);
        assert!(text.contains("3 centers"));
        assert!(text.contains("Service: online"));
    }

    #[test]
    fn test_toast_replaces_summary() {
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);
        StatusBar::new()
            .summary("3 centers")
            .toast(Some("Calling 100"))
            .service(ServiceStatus::Offline)
            .render(area, &mut buf);
        let text = row_text(&buf, 60);
        assert!(text.contains("Calling 100"));
        assert!(!text.contains("3 centers"));
        assert!(text.contains("offline"));
    }

    #[test]
    fn test_service_labels_localized() {
        let bar = StatusBar::new()
            .service(ServiceStatus::Checking)
            .i18n(I18n::new(Language::Hindi));
        assert!(bar.service_text().contains("जांच रहे हैं"));
    }
}
