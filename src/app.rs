use crate::core::actions::Action;
use crate::models::voice_capture::RandomPicker;
use crate::models::{
    CenterFilter, DirectoryModel, EmergencyDirectory, LegalAidCenter, ListSelection,
    OperationError, QueryModel, TabController, ViewTab, VoiceCapture,
};
use crate::system::{
    AdviceService, AppConfig, Dialer, DirectoryService, HealthService, HttpServiceClient,
    PendingRequest, ServiceHealth, SystemDialer,
};
use crate::ui::components::{DialogKind, ServiceStatus};
use crate::ui::{I18n, Language, LayoutManager, LocalizationProvider, TextKey, Theme};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

mod controllers;
mod dialogs;
mod navigation;
mod operations;
mod render;
mod text_edit;

/// 토스트 표시 시간 (초)
const TOAST_SECS: u64 = 3;

/// 앱이 사용하는 외부 경계 묶음
pub struct Services {
    pub advice: Arc<dyn AdviceService>,
    pub directory: Arc<dyn DirectoryService>,
    pub health: Arc<dyn HealthService>,
    pub dialer: Box<dyn Dialer>,
}

impl Services {
    /// 하나의 HTTP 클라이언트로 모든 원격 서비스 구성
    pub fn http(client: HttpServiceClient) -> Self {
        let client = Arc::new(client);
        Self {
            advice: client.clone(),
            directory: client.clone(),
            health: client,
            dialer: Box::new(SystemDialer::new()),
        }
    }
}

/// 앱 상태
pub struct App {
    /// 종료 플래그
    pub should_quit: bool,
    /// 레이아웃 매니저
    pub layout: LayoutManager,
    /// 활성 뷰
    pub tabs: TabController,
    /// 세션 언어 (하나만 존재)
    pub locale: LocalizationProvider,
    /// 어시스턴트 질문
    pub assistant: QueryModel,
    /// 법률 지원 센터 목록
    pub legal_aid: DirectoryModel<Vec<LegalAidCenter>>,
    /// 긴급 연락처 목록
    pub emergency: DirectoryModel<EmergencyDirectory>,
    pub aid_selection: ListSelection,
    pub aid_filter: CenterFilter,
    pub emergency_selection: ListSelection,
    /// 현재 표시 중인 다이얼로그
    pub dialog: Option<DialogKind>,
    /// 토스트 메시지 (3초 후 자동 소멸)
    pub toast_message: Option<(String, Instant)>,
    /// 시작 시 한 번 확인한 서비스 상태
    pub service_status: ServiceStatus,
    health_check: Option<PendingRequest<ServiceHealth>>,
    dialer: Box<dyn Dialer>,
    pub theme: Theme,
}

impl App {
    pub fn new(config: &AppConfig, services: Services) -> Self {
        let voice = VoiceCapture::new(config.voice_capture_delay(), Box::new(RandomPicker));
        let health = Arc::clone(&services.health);

        info!(
            language = config.language.code(),
            theme = ?config.theme,
            "app initialized"
        );

        Self {
            should_quit: false,
            layout: LayoutManager::new(),
            tabs: TabController::new(),
            locale: LocalizationProvider::new(config.language),
            assistant: QueryModel::new(services.advice, voice),
            legal_aid: DirectoryModel::legal_aid(Arc::clone(&services.directory)),
            emergency: DirectoryModel::emergency(services.directory),
            aid_selection: ListSelection::new(),
            aid_filter: CenterFilter::default(),
            emergency_selection: ListSelection::new(),
            dialog: None,
            toast_message: None,
            service_status: ServiceStatus::Checking,
            health_check: Some(PendingRequest::spawn("health", move || health.health())),
            dialer: services.dialer,
            theme: Theme::named(config.theme),
        }
    }

    /// 종료
    pub fn quit(&mut self) {
        info!("quit requested");
        self.should_quit = true;
    }

    /// 종료 상태 확인
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn language(&self) -> Language {
        self.locale.current()
    }

    pub fn i18n(&self) -> I18n {
        self.locale.i18n()
    }

    pub fn active_view(&self) -> ViewTab {
        self.tabs.active()
    }

    /// 필터가 적용된 센터 목록 (받은 순서 유지)
    pub fn visible_centers(&self) -> Vec<&LegalAidCenter> {
        self.legal_aid
            .data()
            .map(|centers| self.aid_filter.apply(centers))
            .unwrap_or_default()
    }

    /// 매 프레임 호출: 진행 중인 요청 결과 반영, 에러 알림, 토스트 만료
    pub fn tick(&mut self) {
        self.assistant.poll();

        if self.legal_aid.poll() {
            self.aid_filter.clear();
            self.aid_selection.reset();
        }
        if self.emergency.poll() {
            self.emergency_selection.reset();
        }

        self.poll_health();
        self.surface_next_error();
        self.clear_expired_toast();
    }

    fn poll_health(&mut self) {
        let Some(result) = self.health_check.as_ref().and_then(|p| p.poll()) else {
            return;
        };
        self.health_check = None;
        self.service_status = match result {
            Ok(health) if health.is_healthy() => {
                info!(
                    service = health.service.as_deref().unwrap_or("-"),
                    version = health.version.as_deref().unwrap_or("-"),
                    "service healthy"
                );
                ServiceStatus::Online
            }
            Ok(health) => {
                debug!(status = %health.status, "service reported unhealthy");
                ServiceStatus::Offline
            }
            Err(err) => {
                debug!(error = %err, "health check failed");
                ServiceStatus::Offline
            }
        };
        info!(status = ?self.service_status, "service status checked");
    }

    /// 대기 중인 작업 에러 하나를 다이얼로그로 표시 (다이얼로그가 비어 있을 때만)
    fn surface_next_error(&mut self) {
        if self.dialog.is_some() {
            return;
        }
        let next = self
            .assistant
            .take_error()
            .or_else(|| self.legal_aid.take_error())
            .or_else(|| self.emergency.take_error());
        if let Some(err) = next {
            self.show_operation_error(&err);
        }
    }

    pub(crate) fn show_operation_error(&mut self, err: &OperationError) {
        let i18n = self.i18n();
        self.dialog = Some(DialogKind::error(
            i18n.tr(TextKey::ErrorTitle),
            err.render(i18n),
        ));
    }
}

#[cfg(test)]
mod tests;
