//! 점수, 콤보, WPM, 정확도 계산

use std::time::Duration;

/// 키 하나당 기본 점수
const POINTS_PER_KEY: u32 = 10;
/// 콤보 보너스 단위 (이 수만큼 연속 입력마다 보너스 증가)
const COMBO_STEP: u32 = 5;
/// 콤보 단위당 보너스
const COMBO_BONUS: u32 = 5;
/// 단어 완료 보너스
const COMPLETION_BONUS: u32 = 100;

/// 점수판
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreBoard {
    pub score: u32,
    pub combo: u32,
    pub max_combo: u32,
    /// 맞게 입력한 키 수
    pub correct_keys: u32,
    /// 전체 입력한 키 수 (오타 포함)
    pub total_keys: u32,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// 맞는 키 입력: 콤보 증가 후 점수 가산
    pub fn record_correct(&mut self) {
        self.combo += 1;
        self.max_combo = self.max_combo.max(self.combo);
        self.correct_keys += 1;
        self.total_keys += 1;
        self.score += POINTS_PER_KEY + (self.combo / COMBO_STEP) * COMBO_BONUS;
    }

    /// 오타: 콤보 초기화
    pub fn record_mistake(&mut self) {
        self.combo = 0;
        self.total_keys += 1;
    }

    /// 단어 완료 보너스 가산
    pub fn record_completion(&mut self, wpm: u32) {
        self.score += COMPLETION_BONUS + wpm * 2;
    }

    /// 정확도 (%), 입력이 없으면 100
    pub fn accuracy(&self) -> u32 {
        if self.total_keys == 0 {
            return 100;
        }
        (self.correct_keys as f64 / self.total_keys as f64 * 100.0).round() as u32
    }
}

/// 입력 속도 (5글자 = 1단어 기준)
pub fn wpm(chars: usize, elapsed: Duration) -> u32 {
    let minutes = elapsed.as_secs_f64() / 60.0;
    if minutes <= 0.0 {
        return 0;
    }
    (chars as f64 / 5.0 / minutes).round() as u32
}
