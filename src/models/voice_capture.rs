// Voice capture simulation - 음성 입력 시뮬레이션
//
// 실제 오디오는 다루지 않는다. 고정 지연 후 예시 문장 하나를 입력으로 돌려준다.

use rand::Rng;
use std::time::{Duration, Instant};

/// 시뮬레이션 예시 문장
pub const SAMPLE_PHRASES: [&str; 3] = [
    "My landlord is threatening me",
    "My husband beats me",
    "I haven't been paid for 3 months",
];

pub const DEFAULT_CAPTURE_DELAY: Duration = Duration::from_secs(2);

/// 예시 문장 선택기 (테스트에서 고정값 주입)
pub trait PhrasePicker: Send {
    /// `0..count` 범위 인덱스 반환
    fn pick(&mut self, count: usize) -> usize;
}

#[derive(Debug, Default)]
pub struct RandomPicker;

impl PhrasePicker for RandomPicker {
    fn pick(&mut self, count: usize) -> usize {
        rand::thread_rng().gen_range(0..count.max(1))
    }
}

/// 항상 같은 인덱스를 고르는 선택기
#[derive(Debug, Clone, Copy)]
pub struct FixedPicker(pub usize);

impl PhrasePicker for FixedPicker {
    fn pick(&mut self, _count: usize) -> usize {
        self.0
    }
}

pub struct VoiceCapture {
    delay: Duration,
    started_at: Option<Instant>,
    picker: Box<dyn PhrasePicker>,
}

impl std::fmt::Debug for VoiceCapture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VoiceCapture")
            .field("delay", &self.delay)
            .field("started_at", &self.started_at)
            .finish()
    }
}

impl VoiceCapture {
    pub fn new(delay: Duration, picker: Box<dyn PhrasePicker>) -> Self {
        Self {
            delay,
            started_at: None,
            picker,
        }
    }

    pub fn is_recording(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// 녹음 시작. 이미 녹음 중이면 false (무시).
    pub fn start_at(&mut self, now: Instant) -> bool {
        if self.started_at.is_some() {
            return false;
        }
        self.started_at = Some(now);
        true
    }

    /// 지연이 지났으면 녹음을 끝내고 선택된 문장을 돌려준다.
    pub fn poll_at(&mut self, now: Instant) -> Option<&'static str> {
        let started = self.started_at?;
        if now.saturating_duration_since(started) < self.delay {
            return None;
        }
        self.started_at = None;
        let index = self.picker.pick(SAMPLE_PHRASES.len()) % SAMPLE_PHRASES.len();
        Some(SAMPLE_PHRASES[index])
    }
}

impl Default for VoiceCapture {
    fn default() -> Self {
        Self::new(DEFAULT_CAPTURE_DELAY, Box::new(RandomPicker))
    }
}
