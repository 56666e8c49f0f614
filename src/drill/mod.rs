//! 타이핑 연습 모듈
//!
//! 단어 목록, 점수 계산, 단어별 세션, 랭킹 저장을 담당한다.
//! 입력 판정은 `validation` 모듈에 맡긴다.

pub mod rankings;
pub mod score;
pub mod session;
pub mod words;

pub use rankings::{RankingEntry, Rankings, RankingsError, DEFAULT_RANKING_LIMIT};
pub use score::{wpm, ScoreBoard};
pub use session::{KeyOutcome, TypingSession};
pub use words::{
    all_words, home_position_text, next_word, words, Difficulty, HomePositionLevel,
    HOME_POSITION_LEVELS, TIME_LIMIT_SECS,
};
