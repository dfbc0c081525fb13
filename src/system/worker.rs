// Request worker - 백그라운드 요청 워커
//
// 네트워크 호출 하나를 별도 스레드에서 실행하고, UI 루프가 매 프레임 결과를 확인한다.

use crate::utils::error::{NyayaError, Result};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

/// 진행 중인 요청 하나
#[derive(Debug)]
pub struct PendingRequest<T> {
    rx: Receiver<Result<T>>,
    started: Instant,
}

impl<T: Send + 'static> PendingRequest<T> {
    /// 작업을 워커 스레드에서 시작
    ///
    /// 수신 측이 먼저 사라지면 결과 전송은 조용히 무시된다.
    pub fn spawn<F>(name: &str, job: F) -> Self
    where
        F: FnOnce() -> Result<T> + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        let spawned = thread::Builder::new()
            .name(format!("nyayasathi-{}", name))
            .spawn(move || {
                let _ = tx.send(job());
            });

        if let Err(err) = spawned {
            // 클로저와 함께 송신자가 버려지므로 poll()에서 Worker 에러로 보고됨
            tracing::error!(worker = name, error = %err, "failed to spawn request worker");
        }

        Self {
            rx,
            started: Instant::now(),
        }
    }
}

impl<T> PendingRequest<T> {
    /// 결과 확인 (논블로킹)
    ///
    /// 아직 진행 중이면 None.
    pub fn poll(&self) -> Option<Result<T>> {
        match self.rx.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(NyayaError::Worker(
                "request worker exited without a result".to_string(),
            ))),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}
