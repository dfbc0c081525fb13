use crate::models::directory::LegalAidCenter;

/// 목록 선택 상태
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListSelection {
    /// 선택된 항목 인덱스
    pub selected_index: usize,
}

impl ListSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn move_down(&mut self, len: usize) {
        if self.selected_index + 1 < len {
            self.selected_index += 1;
        }
    }

    pub fn reset(&mut self) {
        self.selected_index = 0;
    }
}

/// 법률 지원 센터 지역 필터 (클라이언트 측)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CenterFilter {
    district: Option<String>,
}

impl CenterFilter {
    pub fn district(&self) -> Option<&str> {
        self.district.as_deref()
    }

    /// 로드된 센터에 나타나는 지역 목록 (첫 등장 순서)
    pub fn districts(centers: &[LegalAidCenter]) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for center in centers {
            if !seen.contains(&center.district.as_str()) {
                seen.push(center.district.as_str());
            }
        }
        seen
    }

    /// 전체 → 첫 지역 → ... → 마지막 지역 → 전체
    pub fn cycle(&mut self, centers: &[LegalAidCenter]) {
        let districts = Self::districts(centers);
        let next = match self.district.as_deref() {
            None => districts.first(),
            Some(current) => districts
                .iter()
                .position(|d| *d == current)
                .and_then(|i| districts.get(i + 1)),
        };
        self.district = next.map(|d| d.to_string());
    }

    pub fn clear(&mut self) {
        self.district = None;
    }

    pub fn matches(&self, center: &LegalAidCenter) -> bool {
        self.district
            .as_deref()
            .map_or(true, |d| center.district == d)
    }

    pub fn apply<'a>(&self, centers: &'a [LegalAidCenter]) -> Vec<&'a LegalAidCenter> {
        centers.iter().filter(|c| self.matches(c)).collect()
    }
}
