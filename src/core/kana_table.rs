//! 히라가나 -> 로마자 매핑 테이블
//!
//! 기준 표기는 헵번식, 대체 표기는 훈령식.

use std::collections::HashMap;
use std::sync::LazyLock;

/// 단일 가나 및 요음(2글자) -> 헵번식 로마자
#[rustfmt::skip]
const HEPBURN_PAIRS: &[(&str, &str)] = &[
    ("あ", "a"), ("い", "i"), ("う", "u"), ("え", "e"), ("お", "o"),
    ("か", "ka"), ("き", "ki"), ("く", "ku"), ("け", "ke"), ("こ", "ko"),
    ("さ", "sa"), ("し", "shi"), ("す", "su"), ("せ", "se"), ("そ", "so"),
    ("た", "ta"), ("ち", "chi"), ("つ", "tsu"), ("て", "te"), ("と", "to"),
    ("な", "na"), ("に", "ni"), ("ぬ", "nu"), ("ね", "ne"), ("の", "no"),
    ("は", "ha"), ("ひ", "hi"), ("ふ", "fu"), ("へ", "he"), ("ほ", "ho"),
    ("ま", "ma"), ("み", "mi"), ("む", "mu"), ("め", "me"), ("も", "mo"),
    ("や", "ya"), ("ゆ", "yu"), ("よ", "yo"),
    ("ら", "ra"), ("り", "ri"), ("る", "ru"), ("れ", "re"), ("ろ", "ro"),
    ("わ", "wa"), ("を", "wo"), ("ん", "n"),
    ("が", "ga"), ("ぎ", "gi"), ("ぐ", "gu"), ("げ", "ge"), ("ご", "go"),
    ("ざ", "za"), ("じ", "ji"), ("ず", "zu"), ("ぜ", "ze"), ("ぞ", "zo"),
    ("だ", "da"), ("ぢ", "ji"), ("づ", "zu"), ("で", "de"), ("ど", "do"),
    ("ば", "ba"), ("び", "bi"), ("ぶ", "bu"), ("べ", "be"), ("ぼ", "bo"),
    ("ぱ", "pa"), ("ぴ", "pi"), ("ぷ", "pu"), ("ぺ", "pe"), ("ぽ", "po"),
    // 요음
    ("きゃ", "kya"), ("きゅ", "kyu"), ("きょ", "kyo"),
    ("しゃ", "sha"), ("しゅ", "shu"), ("しょ", "sho"),
    ("ちゃ", "cha"), ("ちゅ", "chu"), ("ちょ", "cho"),
    ("にゃ", "nya"), ("にゅ", "nyu"), ("にょ", "nyo"),
    ("ひゃ", "hya"), ("ひゅ", "hyu"), ("ひょ", "hyo"),
    ("みゃ", "mya"), ("みゅ", "myu"), ("みょ", "myo"),
    ("りゃ", "rya"), ("りゅ", "ryu"), ("りょ", "ryo"),
    ("ぎゃ", "gya"), ("ぎゅ", "gyu"), ("ぎょ", "gyo"),
    ("じゃ", "ja"), ("じゅ", "ju"), ("じょ", "jo"),
    ("びゃ", "bya"), ("びゅ", "byu"), ("びょ", "byo"),
    ("ぴゃ", "pya"), ("ぴゅ", "pyu"), ("ぴょ", "pyo"),
];

/// 헵번식 출력 -> 훈령식 대체 표기
/// 여기 없는 출력은 두 표기법에서 동일
#[rustfmt::skip]
const KUNREI_PAIRS: &[(&str, &str)] = &[
    ("shi", "si"), ("chi", "ti"), ("tsu", "tu"), ("fu", "hu"), ("ji", "zi"),
    ("sha", "sya"), ("shu", "syu"), ("sho", "syo"),
    ("cha", "tya"), ("chu", "tyu"), ("cho", "tyo"),
    ("ja", "zya"), ("ju", "zyu"), ("jo", "zyo"),
];

/// 순음 앞 ん 의 헵번식 표기
pub const HATSUON_LABIAL: &str = "m";
/// ん 의 기본 표기 (훈령식은 항상 이 표기)
pub const HATSUON_DEFAULT: &str = "n";

static HEPBURN_TABLE: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| HEPBURN_PAIRS.iter().copied().collect());

static KUNREI_TABLE: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| KUNREI_PAIRS.iter().copied().collect());

/// 가나 한 글자의 헵번식 표기
/// 매핑에 없는 문자(가타카나, 숫자, 공백, 작은 가나 단독 등)는 None 반환
pub fn lookup_single(c: char) -> Option<&'static str> {
    let mut buf = [0u8; 4];
    HEPBURN_TABLE.get(&*c.encode_utf8(&mut buf)).copied()
}

/// 요음(기본 가나 + 작은 ゃゅょ)의 헵번식 표기
pub fn lookup_digraph(first: char, second: char) -> Option<&'static str> {
    let mut key = String::with_capacity(8);
    key.push(first);
    key.push(second);
    HEPBURN_TABLE.get(key.as_str()).copied()
}

/// 헵번식 출력의 훈령식 대체 표기 (없으면 None)
pub fn kunrei_alternative(hepburn: &str) -> Option<&'static str> {
    KUNREI_TABLE.get(hepburn).copied()
}

/// 로마자가 순음(b, p, m)으로 시작하는지 확인
pub fn starts_with_labial(romaji: &str) -> bool {
    matches!(romaji.as_bytes().first(), Some(b'b' | b'p' | b'm'))
}
