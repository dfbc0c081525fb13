// Legal aid view - 법률 지원 센터 카드 목록
//
// 제목/부제/필터 줄은 고정, 카드 목록만 선택 위치를 따라 스크롤된다.

use crate::models::directory::LegalAidCenter;
use crate::models::{CenterFilter, LoadState};
use crate::ui::theme::ViewColors;
use crate::ui::{I18n, MessageKey, TextKey, Theme};
use crate::utils::text::truncate_end;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

/// 카드 한 장이 차지하는 줄 수 (빈 줄 포함)
const CARD_HEIGHT: usize = 6;

/// 제목, 부제, 필터/개수 줄
pub fn heading_lines(
    filter: &CenterFilter,
    visible: Option<usize>,
    i18n: I18n,
    colors: &ViewColors,
) -> Vec<Line<'static>> {
    let district = filter
        .district()
        .map(str::to_string)
        .unwrap_or_else(|| i18n.tr(TextKey::AllDistricts).to_string());

    let mut filter_spans = vec![Span::styled(
        i18n.fmt(MessageKey::DistrictFilter, &[("district", district)]),
        Style::default().fg(colors.accent),
    )];
    if let Some(count) = visible {
        filter_spans.push(Span::styled(
            format!("  ·  {}", i18n.fmt(MessageKey::CentersCount, &[("count", count.to_string())])),
            Style::default().fg(colors.muted),
        ));
    }

    vec![
        Line::from(Span::styled(
            format!("⚖️ {}", i18n.tr(TextKey::AidTitle)),
            colors.heading_style(),
        )),
        Line::from(Span::styled(
            i18n.tr(TextKey::AidSubtitle),
            Style::default().fg(colors.muted),
        )),
        Line::from(filter_spans),
    ]
}

/// 센터 카드 한 장
pub fn center_card_lines(
    center: &LegalAidCenter,
    selected: bool,
    width: usize,
    i18n: I18n,
    colors: &ViewColors,
) -> Vec<Line<'static>> {
    let marker = if selected { "▶ " } else { "  " };
    let title_style = if selected {
        Style::default()
            .fg(colors.selected_border)
            .bg(colors.selected_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(colors.fg).add_modifier(Modifier::BOLD)
    };
    let label = Style::default().fg(colors.muted);
    let value = Style::default().fg(colors.fg);

    let title = truncate_end(&format!("🏛️ {}", center.name), width.saturating_sub(2).max(1));

    vec![
        Line::from(vec![
            Span::styled(marker, Style::default().fg(colors.selected_border)),
            Span::styled(title, title_style),
        ]),
        Line::from(vec![
            Span::styled(format!("   📍 {} ", i18n.tr(TextKey::Address)), label),
            Span::styled(center.address.clone(), value),
        ]),
        Line::from(vec![
            Span::styled(format!("   📞 {} ", i18n.tr(TextKey::Phone)), label),
            Span::styled(
                center.phone.clone(),
                Style::default()
                    .fg(colors.phone)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(format!("   {} ", i18n.tr(TextKey::Services)), label),
            Span::styled(center.services.join(", "), value),
        ]),
        Line::from(vec![
            Span::styled(format!("   {} ", i18n.tr(TextKey::District)), label),
            Span::styled(center.district.clone(), value),
        ]),
        Line::from(""),
    ]
}

/// 목록 영역 줄 목록과 선택 카드의 시작 줄
///
/// 로딩/실패/빈 목록은 안내 한 줄(실패는 재시도 안내 포함)로 대신한다.
pub fn list_lines(
    state: LoadState,
    centers: &[&LegalAidCenter],
    selected: usize,
    width: usize,
    i18n: I18n,
    colors: &ViewColors,
) -> (Vec<Line<'static>>, Option<usize>) {
    match state {
        LoadState::Idle | LoadState::Loading => (
            vec![Line::from(Span::styled(
                format!("⏳ {}", i18n.tr(TextKey::LoadingCenters)),
                Style::default().fg(colors.muted),
            ))],
            None,
        ),
        LoadState::Failed => (failure_lines(i18n, colors), None),
        LoadState::Loaded if centers.is_empty() => (
            vec![Line::from(Span::styled(
                i18n.tr(TextKey::NoCenters),
                Style::default().fg(colors.muted),
            ))],
            None,
        ),
        LoadState::Loaded => {
            let lines = centers
                .iter()
                .enumerate()
                .flat_map(|(i, center)| center_card_lines(center, i == selected, width, i18n, colors))
                .collect();
            (lines, Some(selected.min(centers.len() - 1) * CARD_HEIGHT))
        }
    }
}

/// 로드 실패 안내 (두 목록 뷰 공용)
pub fn failure_lines(i18n: I18n, colors: &ViewColors) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            format!("❌ {}", i18n.tr(TextKey::LoadFailed)),
            Style::default()
                .fg(colors.error)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            i18n.tr(TextKey::RetryHint),
            Style::default().fg(colors.muted),
        )),
    ]
}

/// 선택 항목(start..start+height)이 보이도록 하는 스크롤 오프셋
pub fn scroll_offset(start: usize, item_height: usize, viewport: usize) -> u16 {
    let end = start + item_height;
    let offset = if end > viewport { end - viewport } else { 0 };
    offset.min(start) as u16
}

pub struct LegalAidView<'a> {
    state: LoadState,
    centers: Vec<&'a LegalAidCenter>,
    filter: &'a CenterFilter,
    selected: usize,
    i18n: I18n,
    colors: ViewColors,
}

impl<'a> LegalAidView<'a> {
    pub fn new(
        state: LoadState,
        centers: Option<&'a [LegalAidCenter]>,
        filter: &'a CenterFilter,
        i18n: I18n,
    ) -> Self {
        Self {
            state,
            centers: centers.map(|c| filter.apply(c)).unwrap_or_default(),
            filter,
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

impl Widget for LegalAidView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(0)])
            .split(area);

        let visible = (self.state == LoadState::Loaded).then_some(self.centers.len());
        Paragraph::new(heading_lines(self.filter, visible, self.i18n, &self.colors))
            .render(chunks[0], buf);

        let (lines, selected_row) = list_lines(
            self.state,
            &self.centers,
            self.selected,
            chunks[1].width as usize,
            self.i18n,
            &self.colors,
        );
        let offset = selected_row
            .map(|row| scroll_offset(row, CARD_HEIGHT - 1, chunks[1].height as usize))
            .unwrap_or(0);

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((offset, 0))
            .render(chunks[1], buf);
    }
}
