//! 히라가나 -> 헵번식 로마자 변환기

use crate::core::segmenter::{segment, steps};

/// 히라가나 문자열을 헵번식 로마자로 변환
/// 변환할 수 없는 문자(가타카나, 숫자, 공백, 특수문자)는 그대로 유지
pub fn romanize(hiragana: &str) -> String {
    let graphemes = segment(hiragana);
    let mut result = String::with_capacity(hiragana.len());

    for step in steps(&graphemes) {
        result.push_str(step.reference());
    }

    result
}
