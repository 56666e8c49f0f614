//! 로마자 입력 검증 모듈
//!
//! 사용자가 입력 중인 로마자가 목표 히라가나의 허용 표기 중 하나의
//! 접두사(또는 전체)인지 판정한다. 헵번식/훈령식을 그래핌 단위로 섞어
//! 입력해도 허용된다.

use crate::core::converter::romanize;
use crate::core::segmenter::{steps_of, Step};

/// 입력 검증 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputCheck {
    /// 허용 표기의 접두사인지 (계속 입력 가능)
    pub accepted: bool,
    /// 허용 표기와 완전히 일치하는지
    pub complete: bool,
    /// 입력이 끝난 원문 코드포인트 수 (거부 시 0)
    pub kana_typed: usize,
    /// 표시용 헵번식 로마자
    pub canonical: String,
}

/// 접두사 매칭 진행 상태
#[derive(Debug, Clone, Copy)]
struct Walk {
    /// 완전히 입력된 원문 코드포인트 수
    kana_typed: usize,
    /// 남은 단계 없이 입력이 끝났는지
    complete: bool,
}

/// 입력이 목표 히라가나의 허용 표기 중 하나의 접두사인지 검사
///
/// 빈 입력은 항상 true.
///
/// # Examples
/// ```
/// use kanatype::is_valid_prefix;
///
/// assert!(is_valid_prefix("sus", "すし"));
/// assert!(is_valid_prefix("susi", "すし")); // し만 훈령식
/// assert!(!is_valid_prefix("shix", "し"));
/// ```
pub fn is_valid_prefix(typed: &str, target_hiragana: &str) -> bool {
    walk(&steps_of(target_hiragana), typed).is_some()
}

/// 입력이 허용 표기 중 하나와 완전히 일치하는지 검사
pub fn is_complete_match(typed: &str, target_hiragana: &str) -> bool {
    walk(&steps_of(target_hiragana), typed).is_some_and(|w| w.complete)
}

/// 입력 검증 결과를 한 번에 계산
pub fn analyze_input(typed: &str, target_hiragana: &str) -> InputCheck {
    let walked = walk(&steps_of(target_hiragana), typed);

    InputCheck {
        accepted: walked.is_some(),
        complete: walked.is_some_and(|w| w.complete),
        kana_typed: walked.map(|w| w.kana_typed).unwrap_or(0),
        canonical: romanize(target_hiragana),
    }
}

/// 단계 목록과 입력을 동시에 따라가며 매칭
///
/// 각 단계에서 기준 표기 -> 대체 표기 순으로 시도한다.
/// - 남은 입력이 표기의 접두사면 입력이 이 단계 안에서 끝난 것이므로 성공
/// - 표기가 남은 입력의 접두사면 소비하고 다음 단계로 진행
///
/// 다음 단계에서 실패하면 같은 단계의 다른 표기로 되돌아가서 다시 시도한다.
/// 기본 테이블에서는 두 표기가 동시에 진행 가능한 경우가 없어 선형 시간이다.
fn walk(steps: &[Step], typed: &str) -> Option<Walk> {
    if typed.is_empty() {
        return Some(Walk {
            kana_typed: 0,
            complete: steps.iter().all(Step::is_silent),
        });
    }

    let Some((step, rest)) = steps.split_first() else {
        log::trace!("입력 초과: 남은 입력 '{}'", typed);
        return None;
    };

    for spelling in &step.spellings {
        if let Some(remaining) = typed.strip_prefix(spelling.as_str()) {
            if let Some(mut walked) = walk(rest, remaining) {
                log::trace!("단계 매칭: '{}' (남은 입력 '{}')", spelling, remaining);
                walked.kana_typed += step.width;
                return Some(walked);
            }
        }

        if spelling.starts_with(typed) {
            log::trace!("단계 중간에서 입력 종료: '{}' <- '{}'", spelling, typed);
            return Some(Walk {
                kana_typed: 0,
                complete: false,
            });
        }
    }

    log::trace!("불일치: 허용 표기 {:?}, 남은 입력 '{}'", step.spellings, typed);
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert!(is_valid_prefix("", "すし"));
        assert!(is_valid_prefix("", "し"));
        assert!(is_valid_prefix("", ""));
    }

    #[test]
    fn test_hepburn_progressive() {
        for typed in ["s", "su", "sus", "sush", "sushi"] {
            assert!(is_valid_prefix(typed, "すし"), "{}", typed);
        }
        for typed in ["c", "ch", "chi"] {
            assert!(is_valid_prefix(typed, "ち"), "{}", typed);
        }
        for typed in ["t", "ts", "tsu"] {
            assert!(is_valid_prefix(typed, "つ"), "{}", typed);
        }
    }

    #[test]
    fn test_kunrei_progressive() {
        assert!(is_valid_prefix("t", "ち"));
        assert!(is_valid_prefix("ti", "ち"));
        assert!(is_valid_prefix("tu", "つ"));
        assert!(is_valid_prefix("h", "ふ"));
        assert!(is_valid_prefix("hu", "ふ"));
        assert!(is_valid_prefix("zi", "じ"));
        assert!(is_valid_prefix("sy", "しゃ"));
        assert!(is_valid_prefix("sya", "しゃ"));
    }

    #[test]
    fn test_mixed_conventions() {
        // す(헵번) + し(훈령)
        assert!(is_valid_prefix("susi", "すし"));
        // 요음 단위로도 섞을 수 있음
        assert!(is_valid_prefix("syabushabu", "しゃぶしゃぶ"));
        assert!(is_valid_prefix("shabusyabu", "しゃぶしゃぶ"));
        // ち(헵번) + つ(훈령)
        assert!(is_valid_prefix("chitu", "ちつ"));
    }

    #[test]
    fn test_rejects_wrong_input() {
        assert!(!is_valid_prefix("x", "すし"));
        assert!(!is_valid_prefix("x", "し"));
        assert!(!is_valid_prefix("abc", "し"));
        assert!(!is_valid_prefix("z", "すし"));
        assert!(!is_valid_prefix("wrong", "すし"));
        assert!(!is_valid_prefix("abc", "みそ"));
    }

    #[test]
    fn test_rejects_overrun() {
        assert!(!is_valid_prefix("shix", "し"));
        assert!(!is_valid_prefix("six", "し"));
        assert!(!is_valid_prefix("sushii", "すし"));
    }

    #[test]
    fn test_sokuon_input() {
        for typed in ["g", "ga", "gak", "gakk", "gakko", "gakkou"] {
            assert!(is_valid_prefix(typed, "がっこう"), "{}", typed);
        }
        assert!(!is_valid_prefix("gako", "がっこう"));

        // 겹자음은 기준 표기 첫 글자, 뒤 단위는 어느 표기든 허용
        assert!(is_complete_match("maccha", "まっちゃ"));
        assert!(is_complete_match("mactya", "まっちゃ"));
        assert!(!is_valid_prefix("mattya", "まっちゃ"));
        assert!(!is_valid_prefix("matcha", "まっちゃ"));
        assert!(is_complete_match("kaffu", "かっふ"));
        assert!(is_complete_match("kafhu", "かっふ"));
        assert!(!is_valid_prefix("kahhu", "かっふ"));
    }

    #[test]
    fn test_repeated_sokuon_input() {
        // 앞 촉음은 입력 없이 넘어감
        assert!(is_complete_match("kka", "っっか"));
        assert!(!is_valid_prefix("kkk", "っっか"));
        assert_eq!(analyze_input("kka", "っっか").kana_typed, 3);

        assert!(is_complete_match("nppa", "んっぱ"));
        assert!(!is_valid_prefix("m", "んっぱ"));
    }

    #[test]
    fn test_hatsuon_input() {
        assert!(is_valid_prefix("tempura", "てんぷら"));
        assert!(is_valid_prefix("tenpura", "てんぷら"));
        assert!(!is_valid_prefix("tomkatsu", "とんかつ"));
        assert!(is_valid_prefix("tonkatu", "とんかつ"));
    }

    #[test]
    fn test_passthrough_target() {
        assert!(is_valid_prefix("fj f", "fj fj"));
        assert!(is_valid_prefix("fj fj", "fj fj"));
        assert!(!is_valid_prefix("fjf", "fj fj"));
    }

    #[test]
    fn test_complete_match() {
        assert!(is_complete_match("sushi", "すし"));
        assert!(is_complete_match("susi", "すし"));
        assert!(!is_complete_match("sush", "すし"));
        assert!(!is_complete_match("", "すし"));
        assert!(is_complete_match("", ""));
        assert!(!is_complete_match("sushix", "すし"));
        // 끝의 촉음은 입력하지 않아도 완료
        assert!(is_complete_match("a", "あっ"));
    }

    #[test]
    fn test_analyze_input() {
        let check = analyze_input("sus", "すし");
        assert!(check.accepted);
        assert!(!check.complete);
        assert_eq!(check.kana_typed, 1);
        assert_eq!(check.canonical, "sushi");

        let check = analyze_input("gakk", "がっこう");
        assert_eq!(check.kana_typed, 1);
        let check = analyze_input("gakko", "がっこう");
        assert_eq!(check.kana_typed, 3);

        let check = analyze_input("susi", "すし");
        assert!(check.complete);
        assert_eq!(check.kana_typed, 2);

        let check = analyze_input("x", "すし");
        assert!(!check.accepted);
        assert!(!check.complete);
        assert_eq!(check.kana_typed, 0);
    }
}
