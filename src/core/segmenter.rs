//! 히라가나 문자열 -> 그래핌 단위 분할
//!
//! 요음(2글자)을 먼저 탐욕적으로 매칭하고, 실패하면 1글자 단위로 처리한다.
//! 입력 검증용으로는 촉음을 뒤 그래핌과 묶은 "타이핑 단계"로 다시 묶는다.

use crate::core::kana_table::{
    kunrei_alternative, lookup_digraph, lookup_single, starts_with_labial, HATSUON_DEFAULT,
    HATSUON_LABIAL,
};
use crate::core::unicode::{is_hatsuon, is_hiragana, is_small_y, is_sokuon};

/// 그래핌 단위
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grapheme {
    /// 테이블에 있는 가나 (width: 코드포인트 수, 요음이면 2)
    Kana { romaji: &'static str, width: usize },
    /// 촉음 (っ)
    Sokuon,
    /// 발음 (ん)
    Hatsuon,
    /// 매핑 없는 문자 (그대로 통과)
    Passthrough(char),
}

/// 탐욕적 2글자 -> 1글자 분할
pub fn segment(input: &str) -> Vec<Grapheme> {
    let chars: Vec<char> = input.chars().collect();
    let mut graphemes = Vec::with_capacity(chars.len());
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if let Some(&next) = chars.get(i + 1).filter(|n| is_small_y(**n)) {
            if let Some(romaji) = lookup_digraph(c, next) {
                graphemes.push(Grapheme::Kana { romaji, width: 2 });
                i += 2;
                continue;
            }
        }

        let grapheme = if is_sokuon(c) {
            Grapheme::Sokuon
        } else if is_hatsuon(c) {
            Grapheme::Hatsuon
        } else if let Some(romaji) = lookup_single(c) {
            Grapheme::Kana { romaji, width: 1 }
        } else {
            if is_hiragana(c) {
                log::debug!("매핑 없는 히라가나 통과: '{}'", c);
            }
            Grapheme::Passthrough(c)
        };
        graphemes.push(grapheme);
        i += 1;
    }

    graphemes
}

/// 타이핑 단계: 한 번에 입력되는 단위와 허용 표기 목록
///
/// `spellings[0]`은 항상 헵번식 기준 표기이고, 나머지는 훈령식 대체 표기다.
/// 촉음은 뒤 그래핌과 같은 단계로 묶인다. 겹치는 자음은 뒤 그래핌의 기준 표기
/// 첫 글자로 고정되고, 뒤 그래핌의 표기만 따로 고를 수 있다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// 이 단계가 덮는 원문 코드포인트 수
    pub width: usize,
    /// 허용 표기 (기준 표기 우선)
    pub spellings: Vec<String>,
}

impl Step {
    /// 기준(헵번식) 표기
    pub fn reference(&self) -> &str {
        self.spellings.first().map(String::as_str).unwrap_or("")
    }

    /// 아무것도 입력하지 않아도 되는 단계인지 (끝에 남은 촉음 등)
    pub fn is_silent(&self) -> bool {
        self.spellings.iter().any(String::is_empty)
    }
}

/// 그래핌 목록을 타이핑 단계로 묶음
pub fn steps(graphemes: &[Grapheme]) -> Vec<Step> {
    let mut result = Vec::with_capacity(graphemes.len());
    let mut i = 0;

    while i < graphemes.len() {
        let step = step_at(graphemes, i);
        i += step_len(graphemes, i);
        result.push(step);
    }

    result
}

/// 문자열을 바로 타이핑 단계로 분할
pub fn steps_of(input: &str) -> Vec<Step> {
    steps(&segment(input))
}

/// `i` 위치 단계가 소비하는 그래핌 수
fn step_len(graphemes: &[Grapheme], i: usize) -> usize {
    match graphemes[i] {
        Grapheme::Sokuon if doubles_next(graphemes, i) => 1 + step_len(graphemes, i + 1),
        _ => 1,
    }
}

/// 촉음 뒤에 겹칠 자음이 있는지 (뒤가 가나나 ん일 때만)
fn doubles_next(graphemes: &[Grapheme], i: usize) -> bool {
    matches!(
        graphemes.get(i + 1),
        Some(Grapheme::Kana { .. } | Grapheme::Hatsuon)
    )
}

/// 뒤 그래핌이 b/p/m으로 시작하는 가나인지
fn next_is_labial(graphemes: &[Grapheme], i: usize) -> bool {
    matches!(
        graphemes.get(i + 1),
        Some(Grapheme::Kana { romaji, .. }) if starts_with_labial(romaji)
    )
}

fn step_at(graphemes: &[Grapheme], i: usize) -> Step {
    match graphemes[i] {
        Grapheme::Kana { romaji, width } => {
            let mut spellings = vec![romaji.to_string()];
            if let Some(alt) = kunrei_alternative(romaji) {
                spellings.push(alt.to_string());
            }
            Step { width, spellings }
        }
        Grapheme::Sokuon if doubles_next(graphemes, i) => {
            let inner = step_at(graphemes, i + 1);
            // ん 은 앞뒤 문맥과 무관하게 테이블 표기(n)로 겹침
            let lead = match graphemes[i + 1] {
                Grapheme::Hatsuon => HATSUON_DEFAULT.chars().next(),
                _ => inner.reference().chars().next(),
            };
            let spellings = match lead {
                Some(lead) => inner
                    .spellings
                    .iter()
                    .map(|s| format!("{}{}", lead, s))
                    .collect(),
                None => vec![String::new()],
            };
            Step {
                width: 1 + inner.width,
                spellings,
            }
        }
        // 겹칠 대상이 없는 촉음은 아무것도 출력하지 않음
        Grapheme::Sokuon => Step {
            width: 1,
            spellings: vec![String::new()],
        },
        Grapheme::Hatsuon => {
            let spellings = if next_is_labial(graphemes, i) {
                vec![HATSUON_LABIAL.to_string(), HATSUON_DEFAULT.to_string()]
            } else {
                vec![HATSUON_DEFAULT.to_string()]
            };
            Step {
                width: 1,
                spellings,
            }
        }
        Grapheme::Passthrough(c) => Step {
            width: 1,
            spellings: vec![c.to_string()],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn references(input: &str) -> Vec<String> {
        steps_of(input)
            .iter()
            .map(|s| s.reference().to_string())
            .collect()
    }

    #[test]
    fn test_segment_single() {
        assert_eq!(
            segment("すし"),
            vec![
                Grapheme::Kana { romaji: "su", width: 1 },
                Grapheme::Kana { romaji: "shi", width: 1 },
            ]
        );
    }

    #[test]
    fn test_segment_digraph_greedy() {
        // しゃ는 し + ゃ가 아니라 한 단위
        assert_eq!(
            segment("しゃぶ"),
            vec![
                Grapheme::Kana { romaji: "sha", width: 2 },
                Grapheme::Kana { romaji: "bu", width: 1 },
            ]
        );
    }

    #[test]
    fn test_segment_special() {
        assert_eq!(
            segment("っん x"),
            vec![
                Grapheme::Sokuon,
                Grapheme::Hatsuon,
                Grapheme::Passthrough(' '),
                Grapheme::Passthrough('x'),
            ]
        );
        // 단독 작은 ゃ는 통과
        assert_eq!(segment("ゃ"), vec![Grapheme::Passthrough('ゃ')]);
    }

    #[test]
    fn test_segment_empty() {
        assert!(segment("").is_empty());
        assert!(steps_of("").is_empty());
    }

    #[test]
    fn test_step_alternatives() {
        let steps = steps_of("しち");
        assert_eq!(steps[0].spellings, vec!["shi", "si"]);
        assert_eq!(steps[1].spellings, vec!["chi", "ti"]);
        assert_eq!(steps_of("か")[0].spellings, vec!["ka"]);
    }

    #[test]
    fn test_sokuon_grouped_with_next() {
        let steps = steps_of("がっこう");
        assert_eq!(steps.len(), 3);
        assert_eq!(steps[1].width, 2);
        assert_eq!(steps[1].spellings, vec!["kko"]);

        // 겹자음은 기준 표기 첫 글자로 고정, 뒤 단위만 대체 표기 가능
        let steps = steps_of("まっちゃ");
        assert_eq!(steps[1].width, 3);
        assert_eq!(steps[1].spellings, vec!["ccha", "ctya"]);
        assert_eq!(steps_of("かっふ")[1].spellings, vec!["ffu", "fhu"]);
    }

    #[test]
    fn test_double_sokuon_and_nasal_before_sokuon() {
        // 앞 촉음은 뒤 촉음을 겹치지 않음
        let steps = steps_of("っっか");
        assert_eq!(steps.len(), 2);
        assert!(steps[0].is_silent());
        assert_eq!(steps[1].spellings, vec!["kka"]);

        // ん 바로 뒤가 촉음이면 순음 앞이 아님
        let steps = steps_of("んっぱ");
        assert_eq!(steps[0].spellings, vec!["n"]);
        assert_eq!(steps[1].spellings, vec!["ppa"]);

        // 촉음 + ん 은 n 으로 겹침
        assert_eq!(steps_of("っんぱ")[0].spellings, vec!["nm", "nn"]);
        assert_eq!(references("っんぱ"), vec!["nm", "pa"]);
    }

    #[test]
    fn test_sokuon_without_target() {
        assert_eq!(references("がっ"), vec!["ga", ""]);
        assert!(steps_of("がっ")[1].is_silent());
        assert_eq!(references("っa"), vec!["", "a"]);
    }

    #[test]
    fn test_hatsuon_before_labial() {
        assert_eq!(steps_of("てんぷら")[1].spellings, vec!["m", "n"]);
        assert_eq!(steps_of("うどん")[2].spellings, vec!["n"]);
        assert_eq!(steps_of("かんじ")[1].spellings, vec!["n"]);
        assert_eq!(steps_of("さんま")[1].spellings, vec!["m", "n"]);
    }

    #[test]
    fn test_step_widths_cover_input() {
        for word in ["きょうりゅう", "しゃぶしゃぶ", "がっこう", "てんぷら", "fj fj"] {
            let total: usize = steps_of(word).iter().map(|s| s.width).sum();
            assert_eq!(total, word.chars().count(), "{}", word);
        }
    }
}
