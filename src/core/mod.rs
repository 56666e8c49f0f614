//! 히라가나 로마자 변환 핵심 모듈

pub mod converter;
pub mod kana_table;
pub mod segmenter;
pub mod unicode;
