//! 연습용 단어 목록과 홈포지션 레벨

use serde::{Deserialize, Serialize};

/// 제한 시간 (초)
pub const TIME_LIMIT_SECS: u64 = 30;

/// 단어 난이도
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
    VeryHard,
}

impl Difficulty {
    /// 전체 난이도 (쉬운 순)
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::VeryHard,
    ];
}

const EASY_WORDS: &[&str] = &[
    "すし", "みそ", "さば", "いか", "たこ", "かに", "えび", "のり", "さけ", "とろ",
];
const MEDIUM_WORDS: &[&str] = &["さしみ", "たまご", "わさび", "かつお", "うどん"];
const HARD_WORDS: &[&str] = &["てんぷら", "やきそば", "とんかつ", "すきやき"];
const VERY_HARD_WORDS: &[&str] = &["おこのみやき", "きょうりゅう", "しゃぶしゃぶ", "じゅうどうぶ"];

/// 난이도별 단어 목록
pub fn words(difficulty: Difficulty) -> &'static [&'static str] {
    match difficulty {
        Difficulty::Easy => EASY_WORDS,
        Difficulty::Medium => MEDIUM_WORDS,
        Difficulty::Hard => HARD_WORDS,
        Difficulty::VeryHard => VERY_HARD_WORDS,
    }
}

/// 전체 단어 (글자 수 순, 같은 길이는 원래 순서 유지)
pub fn all_words() -> Vec<&'static str> {
    let mut all: Vec<&'static str> = Difficulty::ALL
        .iter()
        .flat_map(|d| words(*d).iter().copied())
        .collect();
    all.sort_by_key(|w| w.chars().count());
    all
}

/// 다음 단어 (마지막이거나 목록에 없으면 첫 단어로)
pub fn next_word<'a>(current: &str, list: &[&'a str]) -> Option<&'a str> {
    let first = list.first().copied()?;
    match list.iter().position(|w| *w == current) {
        Some(i) if i + 1 < list.len() => Some(list[i + 1]),
        _ => Some(first),
    }
}

/// 홈포지션 연습 레벨
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HomePositionLevel {
    /// 1부터 시작하는 레벨 번호
    pub level: u32,
    pub name: &'static str,
    /// 반복할 키 패턴
    pub pattern: &'static str,
    pub repeat: usize,
    pub description: &'static str,
}

#[rustfmt::skip]
pub const HOME_POSITION_LEVELS: [HomePositionLevel; 7] = [
    HomePositionLevel { level: 1, name: "レベル1: FとJ", pattern: "fj", repeat: 15, description: "人差し指の基本位置を覚えよう！" },
    HomePositionLevel { level: 2, name: "レベル2: F,J,D,K", pattern: "fjdk", repeat: 12, description: "中指のポジションを追加！" },
    HomePositionLevel { level: 3, name: "レベル3: F,J,D,K,L,S", pattern: "fjdkls", repeat: 10, description: "薬指のポジションを追加！" },
    HomePositionLevel { level: 4, name: "レベル4: F,J,D,K,L,S,A,;", pattern: "fjdklsa;", repeat: 8, description: "小指のポジションを追加してホームポジション完成！" },
    HomePositionLevel { level: 5, name: "レベル5: ホームポジション上段", pattern: "qwertyuiop", repeat: 6, description: "ホームポジションから指を上に伸ばす練習！" },
    HomePositionLevel { level: 6, name: "レベル6: ホームポジション下段", pattern: "zxcvbnm", repeat: 8, description: "ホームポジションから指を下に伸ばす練習！" },
    HomePositionLevel { level: 7, name: "レベル7: 数字", pattern: "1234567890", repeat: 6, description: "数字キーの練習！" },
];

/// 홈포지션 연습 문자열 (0부터 시작하는 인덱스, 범위 밖이면 None)
pub fn home_position_text(index: usize) -> Option<String> {
    let level = HOME_POSITION_LEVELS.get(index)?;
    Some(vec![level.pattern; level.repeat].join(" "))
}
