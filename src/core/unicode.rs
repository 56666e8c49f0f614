//! 히라가나 코드포인트 분류 유틸리티

/// 히라가나 블록 시작 (ぁ)
const HIRAGANA_START: u32 = 0x3041;
/// 히라가나 블록 끝 (ゖ)
const HIRAGANA_END: u32 = 0x3096;

/// 촉음 (작은 つ)
pub const SOKUON: char = 'っ';
/// 발음 (ん)
pub const HATSUON: char = 'ん';

/// 히라가나 블록 문자인지 확인
pub fn is_hiragana(c: char) -> bool {
    (HIRAGANA_START..=HIRAGANA_END).contains(&(c as u32))
}

/// 요음에 쓰이는 작은 や/ゆ/よ 인지 확인
pub fn is_small_y(c: char) -> bool {
    matches!(c, 'ゃ' | 'ゅ' | 'ょ')
}

/// 촉음인지 확인
pub fn is_sokuon(c: char) -> bool {
    c == SOKUON
}

/// 발음인지 확인
pub fn is_hatsuon(c: char) -> bool {
    c == HATSUON
}
