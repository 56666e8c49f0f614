//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::drill::{Difficulty, DEFAULT_RANKING_LIMIT, TIME_LIMIT_SECS};

/// 연습 모드
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DrillMode {
    /// 히라가나 단어 로마자 입력
    #[default]
    Words,
    /// 홈포지션 키 패턴 입력
    HomePosition,
}

/// Kanatype 설정
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct KanatypeConfig {
    /// 한 판의 제한 시간 (초)
    #[serde(default = "default_time_limit_secs")]
    pub time_limit_secs: u64,
    /// 단어 모드 난이도
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub mode: DrillMode,
    /// 홈포지션 레벨 (0부터)
    #[serde(default)]
    pub home_position_level: usize,
    /// 랭킹 보관 개수
    #[serde(default = "default_ranking_limit")]
    pub ranking_limit: usize,
}

fn default_time_limit_secs() -> u64 {
    TIME_LIMIT_SECS
}

fn default_ranking_limit() -> usize {
    DEFAULT_RANKING_LIMIT
}

impl Default for KanatypeConfig {
    fn default() -> Self {
        Self {
            time_limit_secs: default_time_limit_secs(),
            difficulty: Difficulty::default(),
            mode: DrillMode::default(),
            home_position_level: 0,
            ranking_limit: default_ranking_limit(),
        }
    }
}

/// 설정 디렉토리: ~/.config/kanatype
pub fn config_dir() -> PathBuf {
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| {
            // HOME 미설정이거나 유효하지 않으면 /var/tmp 폴백
            PathBuf::from("/var/tmp")
        });
    home.join(".config").join("kanatype")
}

/// 설정 파일 경로
pub fn config_path() -> PathBuf {
    config_dir().join("config.json")
}

/// 랭킹 파일 경로
pub fn rankings_path() -> PathBuf {
    config_dir().join("rankings.json")
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> KanatypeConfig {
    load_config_from(&config_path())
}

/// 지정한 경로의 설정 파일 로드
pub fn load_config_from(path: &Path) -> KanatypeConfig {
    match fs::read_to_string(path) {
        Ok(content) => parse_config(&content),
        Err(_) => KanatypeConfig::default(),
    }
}

/// 설정 JSON 파싱 (실패 시 기본값)
pub fn parse_config(content: &str) -> KanatypeConfig {
    serde_json::from_str(content).unwrap_or_else(|e| {
        log::warn!("설정 파일 파싱 실패, 기본값 사용: {}", e);
        KanatypeConfig::default()
    })
}

/// 설정 파일 저장
pub fn save_config(config: &KanatypeConfig) -> Result<(), String> {
    save_config_to(config, &config_path())
}

/// 지정한 경로에 설정 파일 저장 (디렉토리 자동 생성)
pub fn save_config_to(config: &KanatypeConfig, path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("설정 디렉토리 생성 실패: {}", e))?;
    }
    let json = serde_json::to_string_pretty(config).map_err(|e| format!("직렬화 실패: {}", e))?;
    fs::write(path, json).map_err(|e| format!("설정 파일 저장 실패: {}", e))?;
    Ok(())
}
