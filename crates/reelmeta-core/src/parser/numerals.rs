//! Character-class and numeral helpers shared by the classifiers.

/// Returns `true` if `s` contains at least one CJK ideograph.
pub fn is_chinese(s: &str) -> bool {
    s.chars()
        .any(|c| matches!(c, '\u{4e00}'..='\u{9fff}' | '\u{3400}'..='\u{4dbf}'))
}

/// Returns `true` if `s` is non-empty and made of ASCII digits only.
pub fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

const ROMAN: &[(u32, &str)] = &[
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Value of an upper-case roman numeral in canonical form (`IV`, not `IIII`).
pub fn roman_value(s: &str) -> Option<u32> {
    if s.is_empty() {
        return None;
    }
    let mut rest = s;
    let mut value = 0;
    for &(n, symbol) in ROMAN {
        while let Some(tail) = rest.strip_prefix(symbol) {
            value += n;
            rest = tail;
        }
    }
    if !rest.is_empty() {
        return None;
    }
    // Greedy decoding accepts non-canonical forms; re-encode to reject them.
    (to_roman(value) == s).then_some(value)
}

fn to_roman(mut value: u32) -> String {
    let mut out = String::new();
    for &(n, symbol) in ROMAN {
        while value >= n {
            out.push_str(symbol);
            value -= n;
        }
    }
    out
}

fn chinese_digit(c: char) -> Option<u32> {
    Some(match c {
        '零' | '〇' => 0,
        '一' => 1,
        '二' | '两' => 2,
        '三' => 3,
        '四' => 4,
        '五' => 5,
        '六' => 6,
        '七' => 7,
        '八' => 8,
        '九' => 9,
        _ => return None,
    })
}

/// Parses an Arabic or Chinese numeral (`12`, `十二`, `二十`, `一百零一`).
pub fn parse_number(s: &str) -> Option<u32> {
    let s = s.trim();
    if is_digits(s) {
        return s.parse().ok();
    }
    if s.is_empty() {
        return None;
    }
    let mut total = 0;
    let mut digit: Option<u32> = None;
    for c in s.chars() {
        let unit = match c {
            '十' => 10,
            '百' => 100,
            '千' => 1000,
            _ => {
                digit = Some(chinese_digit(c)?);
                continue;
            }
        };
        total += digit.take().unwrap_or(1) * unit;
    }
    Some(total + digit.unwrap_or(0))
}
