// Directory model - 목록 조회 수명주기
//
// Idle → Loading → (Loaded | Failed). 뷰가 처음 활성화될 때 한 번만 로드한다.

use crate::models::directory::{EmergencyDirectory, LegalAidCenter};
use crate::models::operation::{Operation, OperationError};
use crate::system::{DirectoryService, PendingRequest};
use crate::utils::error::Result;
use std::sync::Arc;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
    Loaded,
    Failed,
}

type FetchFn<T> = Arc<dyn Fn() -> Result<T> + Send + Sync>;

pub struct DirectoryModel<T> {
    operation: Operation,
    fetch: FetchFn<T>,
    state: LoadState,
    data: Option<T>,
    pending: Option<PendingRequest<T>>,
    error: Option<OperationError>,
    /// 실제로 발행한 요청 수
    fetch_count: usize,
}

impl<T: Send + 'static> DirectoryModel<T> {
    pub fn new<F>(operation: Operation, fetch: F) -> Self
    where
        F: Fn() -> Result<T> + Send + Sync + 'static,
    {
        Self {
            operation,
            fetch: Arc::new(fetch),
            state: LoadState::Idle,
            data: None,
            pending: None,
            error: None,
            fetch_count: 0,
        }
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn fetch_count(&self) -> usize {
        self.fetch_count
    }

    pub fn error(&self) -> Option<&OperationError> {
        self.error.as_ref()
    }

    pub fn take_error(&mut self) -> Option<OperationError> {
        self.error.take()
    }

    /// 뷰 활성화 시 호출. 아직 한 번도 로드하지 않았을 때만 요청한다.
    pub fn mount(&mut self) -> bool {
        if self.state != LoadState::Idle {
            debug!(operation = self.operation.id(), state = ?self.state, "mount: already initialized");
            return false;
        }
        self.load()
    }

    /// 요청 시작. Idle 상태에서만 동작하고 그 외에는 무시한다.
    pub fn load(&mut self) -> bool {
        if self.state != LoadState::Idle {
            debug!(operation = self.operation.id(), state = ?self.state, "load ignored");
            return false;
        }

        info!(operation = self.operation.id(), "loading directory");
        let fetch = Arc::clone(&self.fetch);
        self.pending = Some(PendingRequest::spawn(self.operation.id(), move || fetch()));
        self.state = LoadState::Loading;
        self.fetch_count += 1;
        true
    }

    /// 실패 후 명시적 재시도
    pub fn retry(&mut self) -> bool {
        if self.state != LoadState::Failed {
            return false;
        }
        info!(operation = self.operation.id(), attempt = self.fetch_count() + 1, "retrying");
        self.state = LoadState::Idle;
        self.error = None;
        self.load()
    }

    /// 진행 중인 요청 결과 반영. 상태가 바뀌면 true.
    pub fn poll(&mut self) -> bool {
        let Some(result) = self.pending.as_ref().and_then(|p| p.poll()) else {
            return false;
        };
        self.pending = None;

        match result {
            Ok(data) => {
                info!(operation = self.operation.id(), "directory loaded");
                self.data = Some(data);
                self.error = None;
                self.state = LoadState::Loaded;
            }
            Err(err) => {
                warn!(operation = self.operation.id(), error = %err, "directory load failed");
                self.data = None;
                self.error = Some(OperationError::new(self.operation, &err));
                self.state = LoadState::Failed;
            }
        }
        true
    }
}

impl DirectoryModel<Vec<LegalAidCenter>> {
    pub fn legal_aid(service: Arc<dyn DirectoryService>) -> Self {
        Self::new(Operation::LoadCenters, move || service.legal_aid_centers())
    }
}

impl DirectoryModel<EmergencyDirectory> {
    pub fn emergency(service: Arc<dyn DirectoryService>) -> Self {
        Self::new(Operation::LoadContacts, move || service.emergency_contacts())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::NyayaError;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::mpsc;
    use std::sync::Mutex;
    use std::time::Duration;

    fn wait_until_settled<T: Send + 'static>(model: &mut DirectoryModel<T>) {
        for _ in 0..2000 {
            model.poll();
            if model.state() != LoadState::Loading {
                return;
            }
            std::thread::sleep(Duration::from_millis(1));
        }
        panic!("load did not settle");
    }

    #[test]
    fn test_load_success_stores_data() {
        let mut model = DirectoryModel::new(Operation::LoadCenters, || Ok(vec![1, 2, 3]));
        assert_eq!(model.state(), LoadState::Idle);
        assert!(model.load());
        assert_eq!(model.state(), LoadState::Loading);
        wait_until_settled(&mut model);
        assert_eq!(model.state(), LoadState::Loaded);
        assert_eq!(model.data(), Some(&vec![1, 2, 3]));
    }

    #[test]
    fn test_load_failure_records_error() {
        let mut model: DirectoryModel<Vec<u8>> = DirectoryModel::new(Operation::LoadContacts, || {
            Err(NyayaError::Service { status: 404 })
        });
        model.load();
        wait_until_settled(&mut model);
        assert_eq!(model.state(), LoadState::Failed);
        assert!(model.data().is_none());
        let err = model.take_error().unwrap();
        assert_eq!(err.operation, Operation::LoadContacts);
        assert!(err.message.contains("404"));
    }

    #[test]
    fn test_reentrant_load_ignored_while_loading() {
        let calls = Arc::new(AtomicUsize::new(0));
        let (gate_tx, gate_rx) = mpsc::channel::<()>();
        let gate = Mutex::new(gate_rx);
        let counter = Arc::clone(&calls);
        let mut model = DirectoryModel::new(Operation::LoadCenters, move || {
            counter.fetch_add(1, Ordering::SeqCst);
            let _ = gate.lock().unwrap().recv();
            Ok(Vec::<u32>::new())
        });

        assert!(model.mount());
        assert!(!model.load());
        assert!(!model.mount());
        assert_eq!(model.fetch_count(), 1);

        gate_tx.send(()).unwrap();
        wait_until_settled(&mut model);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_mount_after_loaded_does_not_refetch() {
        let mut model = DirectoryModel::new(Operation::LoadCenters, || Ok(7u32));
        model.mount();
        wait_until_settled(&mut model);
        assert!(!model.mount());
        assert!(!model.load());
        assert_eq!(model.fetch_count(), 1);
        assert_eq!(model.data(), Some(&7));
    }

    #[test]
    fn test_mount_after_failure_does_not_refetch_but_retry_does() {
        let attempts = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&attempts);
        let mut model = DirectoryModel::new(Operation::LoadContacts, move || {
            if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                Err(NyayaError::Transport("offline".into()))
            } else {
                Ok("ok")
            }
        });
        model.mount();
        wait_until_settled(&mut model);
        assert_eq!(model.state(), LoadState::Failed);

        assert!(!model.mount());
        assert_eq!(model.fetch_count(), 1);

        assert!(model.retry());
        wait_until_settled(&mut model);
        assert_eq!(model.state(), LoadState::Loaded);
        assert!(model.error().is_none());
        assert_eq!(model.fetch_count(), 2);
    }

    #[test]
    fn test_retry_only_after_failure() {
        let mut model = DirectoryModel::new(Operation::LoadCenters, || Ok(()));
        assert!(!model.retry());
        model.load();
        assert!(!model.retry());
        wait_until_settled(&mut model);
        assert!(!model.retry());
    }
}
