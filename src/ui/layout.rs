// Layout system - 반응형 레이아웃
//
// 터미널 크기에 따른 레이아웃 모드:
// - 60+ cols: 표준 모드 (헤더에 부제 표시)
// - 40-59 cols: 축약 모드 (헤더 한 줄)
// - <40 cols 또는 높이 부족: 경고 메시지 표시

use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub const MIN_WIDTH: u16 = 40;
pub const MIN_HEIGHT: u16 = 12;
pub const STANDARD_MIN_WIDTH: u16 = 60;
/// 이 높이 이상일 때만 하단 푸터 표시
pub const FOOTER_MIN_HEIGHT: u16 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// 표준 모드 (60+ cols)
    Standard,
    /// 축약 모드 (40-59 cols)
    Compact,
    /// 경고 모드 (터미널이 너무 작음)
    TooSmall,
}

/// 레이아웃 영역
#[derive(Debug, Clone, Default)]
pub struct LayoutAreas {
    /// 제목/부제/언어 전환
    pub header: Rect,
    /// 뷰 탭
    pub tab_bar: Rect,
    /// 활성 뷰 본문
    pub content: Rect,
    /// 저작권 푸터 (공간이 부족하면 높이 0)
    pub footer: Rect,
    pub status_bar: Rect,
    pub command_bar: Rect,
    /// 경고 메시지 영역 (TooSmall 모드에서 사용)
    pub warning: Rect,
}

#[derive(Debug, Clone)]
pub struct LayoutState {
    pub mode: LayoutMode,
    pub terminal_size: (u16, u16),
    pub areas: LayoutAreas,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self {
            mode: LayoutMode::Standard,
            terminal_size: (80, 24),
            areas: LayoutAreas::default(),
        }
    }
}

#[derive(Debug, Default)]
pub struct LayoutManager {
    state: LayoutState,
}

impl LayoutManager {
    pub fn new() -> Self {
        Self::default()
    }

    fn determine_mode(width: u16, height: u16) -> LayoutMode {
        if width < MIN_WIDTH || height < MIN_HEIGHT {
            LayoutMode::TooSmall
        } else if width < STANDARD_MIN_WIDTH {
            LayoutMode::Compact
        } else {
            LayoutMode::Standard
        }
    }

    /// 터미널 크기 업데이트 및 레이아웃 재계산
    pub fn update(&mut self, area: Rect) {
        self.state.terminal_size = (area.width, area.height);
        self.state.mode = Self::determine_mode(area.width, area.height);
        self.state.areas = self.calculate_areas(area);
    }

    fn calculate_areas(&self, area: Rect) -> LayoutAreas {
        let header_height = match self.state.mode {
            LayoutMode::TooSmall => {
                return LayoutAreas {
                    warning: area,
                    ..Default::default()
                }
            }
            LayoutMode::Compact => 1,
            LayoutMode::Standard => 2,
        };

        let footer_height = if self.state.mode == LayoutMode::Standard
            && area.height >= FOOTER_MIN_HEIGHT
        {
            1
        } else {
            0
        };

        // 헤더 | 탭 | 본문 | 푸터 | 상태바 | 커맨드바
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(header_height),
                Constraint::Length(1),
                Constraint::Min(3),
                Constraint::Length(footer_height),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(area);

        LayoutAreas {
            header: chunks[0],
            tab_bar: chunks[1],
            content: chunks[2],
            footer: chunks[3],
            status_bar: chunks[4],
            command_bar: chunks[5],
            warning: Rect::default(),
        }
    }

    pub fn mode(&self) -> LayoutMode {
        self.state.mode
    }

    pub fn areas(&self) -> &LayoutAreas {
        &self.state.areas
    }

    pub fn terminal_size(&self) -> (u16, u16) {
        self.state.terminal_size
    }

    pub fn is_too_small(&self) -> bool {
        matches!(self.mode(), LayoutMode::TooSmall)
    }

    pub fn is_compact(&self) -> bool {
        matches!(self.mode(), LayoutMode::Compact)
    }
}
