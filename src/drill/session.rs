//! 단어 하나에 대한 타이핑 세션

use std::time::{Duration, Instant};

use crate::core::converter::romanize;
use crate::validation::analyze_input;

use super::score::{wpm, ScoreBoard};

/// 키 입력 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// 허용 표기의 접두사로 이어짐
    Accepted,
    /// 오타 (입력 버퍼에 추가되지 않음)
    Rejected,
    /// 단어 입력 완료
    Completed,
}

/// 타이핑 세션
///
/// 목표 히라가나(또는 홈포지션 패턴)와 입력 버퍼, 점수판을 관리한다.
#[derive(Debug, Clone)]
pub struct TypingSession {
    target: String,
    romaji: String,
    typed: String,
    board: ScoreBoard,
    started_at: Option<Instant>,
    completed: bool,
}

impl TypingSession {
    pub fn new(target: impl Into<String>) -> Self {
        Self::with_board(target, ScoreBoard::new())
    }

    /// 이전 단어의 점수판을 이어받아 세션 생성
    pub fn with_board(target: impl Into<String>, board: ScoreBoard) -> Self {
        let target = target.into();
        let romaji = romanize(&target);
        Self {
            target,
            romaji,
            typed: String::new(),
            board,
            started_at: None,
            completed: false,
        }
    }

    /// 입력 시간 측정 시작 (이미 시작했으면 무시)
    pub fn start(&mut self, at: Instant) {
        self.started_at.get_or_insert(at);
    }

    /// 키 하나 입력
    pub fn type_char(&mut self, c: char, now: Instant) -> KeyOutcome {
        if self.completed {
            return KeyOutcome::Rejected;
        }

        let started_at = *self.started_at.get_or_insert(now);

        let mut candidate = self.typed.clone();
        candidate.push(c);
        let check = analyze_input(&candidate, &self.target);

        if !check.accepted {
            log::debug!("오타: '{}' (목표 '{}')", candidate, self.romaji);
            self.board.record_mistake();
            return KeyOutcome::Rejected;
        }

        self.typed = candidate;
        self.board.record_correct();

        if check.complete {
            let speed = wpm(self.typed.chars().count(), now.duration_since(started_at));
            self.board.record_completion(speed);
            self.completed = true;
            log::debug!("완료: '{}' ({} WPM)", self.typed, speed);
            return KeyOutcome::Completed;
        }

        KeyOutcome::Accepted
    }

    /// 마지막 입력 한 글자 삭제 (점수에는 영향 없음)
    pub fn backspace(&mut self) -> Option<char> {
        if self.completed {
            return None;
        }
        self.typed.pop()
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// 표시용 헵번식 로마자
    pub fn romaji(&self) -> &str {
        &self.romaji
    }

    pub fn typed(&self) -> &str {
        &self.typed
    }

    /// 지금까지 입력이 끝난 목표 문자 수
    pub fn kana_typed(&self) -> usize {
        analyze_input(&self.typed, &self.target).kana_typed
    }

    pub fn board(&self) -> &ScoreBoard {
        &self.board
    }

    /// 세션을 끝내고 점수판 반환
    pub fn into_board(self) -> ScoreBoard {
        self.board
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// 첫 입력부터 `now`까지 경과 시간
    pub fn elapsed(&self, now: Instant) -> Duration {
        self.started_at
            .map(|start| now.duration_since(start))
            .unwrap_or(Duration::ZERO)
    }
}
