//! 랭킹 기록 로드/저장 (JSON)

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// 기본 보관 개수
pub const DEFAULT_RANKING_LIMIT: usize = 10;

/// 랭킹 로드/저장 에러
#[derive(Debug)]
pub enum RankingsError {
    /// 파일 읽기/쓰기 실패
    IoError(std::io::Error),
    /// JSON 파싱/직렬화 실패
    ParseError(String),
}

impl std::fmt::Display for RankingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RankingsError::IoError(e) => write!(f, "랭킹 파일 오류: {}", e),
            RankingsError::ParseError(s) => write!(f, "랭킹 JSON 오류: {}", s),
        }
    }
}

impl std::error::Error for RankingsError {}

impl From<std::io::Error> for RankingsError {
    fn from(e: std::io::Error) -> Self {
        RankingsError::IoError(e)
    }
}

/// 랭킹 항목
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct RankingEntry {
    /// 기록 시각 (유닉스 초)
    pub timestamp: u64,
    pub wpm: u32,
    /// 정확도 (%)
    pub accuracy: u32,
    pub score: u32,
    /// 연습 모드 표시 이름
    pub mode: String,
}

/// 점수 내림차순 랭킹
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Rankings {
    entries: Vec<RankingEntry>,
}

impl Rankings {
    pub fn new() -> Self {
        Self::default()
    }

    /// JSON 파일에서 로드 (파일이 없으면 빈 랭킹)
    pub fn load(path: &Path) -> Result<Self, RankingsError> {
        match fs::read_to_string(path) {
            Ok(content) => Self::from_json(&content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// JSON 문자열에서 로드
    pub fn from_json(json_str: &str) -> Result<Self, RankingsError> {
        serde_json::from_str(json_str).map_err(|e| RankingsError::ParseError(e.to_string()))
    }

    /// JSON 파일로 저장 (디렉토리가 없으면 생성)
    pub fn save(&self, path: &Path) -> Result<(), RankingsError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| RankingsError::ParseError(e.to_string()))?;
        fs::write(path, json)?;
        Ok(())
    }

    /// 기록 추가 후 점수순 정렬, `limit`개만 보관
    /// 반환: 추가된 기록의 순위 (0부터, 밀려났으면 None)
    pub fn insert(&mut self, entry: RankingEntry, limit: usize) -> Option<usize> {
        // 같은 점수면 먼저 세운 기록이 위
        let rank = self.entries.partition_point(|e| e.score >= entry.score);
        self.entries.insert(rank, entry);
        self.entries.truncate(limit);
        (rank < self.entries.len()).then_some(rank)
    }

    pub fn entries(&self) -> &[RankingEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
