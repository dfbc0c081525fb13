// Emergency view - 카테고리별 긴급 연락처
//
// 카테고리는 받은 순서 그대로, 선택은 카테고리 순서로 평탄화한 인덱스를 쓴다.

use crate::models::directory::{EmergencyContact, EmergencyDirectory};
use crate::models::LoadState;
use crate::ui::components::legal_aid_view::{failure_lines, scroll_offset};
use crate::ui::theme::ViewColors;
use crate::ui::{I18n, TextKey, Theme};
use crate::utils::text::{capitalize_first, spread};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// 연락처 한 건이 차지하는 줄 수
const CONTACT_HEIGHT: usize = 2;

fn contact_lines(
    contact: &EmergencyContact,
    selected: bool,
    width: usize,
    colors: &ViewColors,
) -> Vec<Line<'static>> {
    let marker = if selected { "▶ " } else { "  " };
    let name = format!("{}📞 {}", marker, contact.name);
    let number = format!("{} ", contact.number);
    // 번호는 오른쪽 정렬, 폭이 좁으면 두 칸 띄움
    let row = spread(&name, &number, width.max(name.width() + number.width() + 2));
    let gap = row.width() - name.width() - number.width();

    let name_style = if selected {
        Style::default()
            .fg(colors.selected_border)
            .bg(colors.selected_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(colors.fg)
    };

    vec![
        Line::from(vec![
            Span::styled(name, name_style),
            Span::raw(" ".repeat(gap)),
            Span::styled(
                number,
                Style::default()
                    .fg(colors.phone)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            format!("     {}", contact.description),
            Style::default().fg(colors.muted),
        )),
    ]
}

/// 목록 줄 목록과 선택 연락처의 시작 줄
pub fn directory_lines(
    state: LoadState,
    directory: Option<&EmergencyDirectory>,
    selected: usize,
    width: usize,
    i18n: I18n,
    colors: &ViewColors,
) -> (Vec<Line<'static>>, Option<usize>) {
    let muted = Style::default().fg(colors.muted);
    match (state, directory) {
        (LoadState::Failed, _) => (failure_lines(i18n, colors), None),
        (LoadState::Loaded, Some(directory)) if !directory.is_empty() => {
            let mut lines = Vec::new();
            let mut selected_row = None;
            let mut index = 0;

            for group in directory.groups() {
                lines.push(Line::from(Span::styled(
                    capitalize_first(&group.category),
                    colors.heading_style(),
                )));
                for contact in &group.contacts {
                    if index == selected {
                        selected_row = Some(lines.len());
                    }
                    lines.extend(contact_lines(contact, index == selected, width, colors));
                    index += 1;
                }
                lines.push(Line::from(""));
            }
            (lines, selected_row)
        }
        (LoadState::Loaded, _) => (
            vec![Line::from(Span::styled(i18n.tr(TextKey::NoContacts), muted))],
            None,
        ),
        (LoadState::Idle | LoadState::Loading, _) => (
            vec![Line::from(Span::styled(
                format!("⏳ {}", i18n.tr(TextKey::LoadingContacts)),
                muted,
            ))],
            None,
        ),
    }
}

pub struct EmergencyView<'a> {
    state: LoadState,
    directory: Option<&'a EmergencyDirectory>,
    selected: usize,
    i18n: I18n,
    colors: ViewColors,
}

impl<'a> EmergencyView<'a> {
    pub fn new(state: LoadState, directory: Option<&'a EmergencyDirectory>, i18n: I18n) -> Self {
        Self {
            state,
            directory,
            selected: 0,
            i18n,
            colors: ViewColors::default(),
        }
    }

    pub fn selected(mut self, index: usize) -> Self {
        self.selected = index;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.colors = ViewColors::from_theme(theme);
        self
    }
}

impl Widget for EmergencyView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        Paragraph::new(vec![
            Line::from(Span::styled(
                format!("🚨 {}", self.i18n.tr(TextKey::EmergencyTitle)),
                Style::default()
                    .fg(self.colors.error)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                self.i18n.tr(TextKey::EmergencySubtitle),
                Style::default().fg(self.colors.muted),
            )),
        ])
        .render(chunks[0], buf);

        let (lines, selected_row) = directory_lines(
            self.state,
            self.directory,
            self.selected,
            chunks[1].width as usize,
            self.i18n,
            &self.colors,
        );
        let offset = selected_row
            .map(|row| scroll_offset(row, CONTACT_HEIGHT, chunks[1].height as usize))
            .unwrap_or(0);

        Paragraph::new(lines).scroll((offset, 0)).render(chunks[1], buf);
    }
}
