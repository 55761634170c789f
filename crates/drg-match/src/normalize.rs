//! Canonicalization of free-text diagnosis/procedure names.
//!
//! Catalog strings and hospital exports mix full-width and half-width
//! characters, qualifier noise ("未特指", "unspecified"), and Roman or
//! spelled-out Chinese numerals. [`normalize`] folds all of that into a
//! stable compare form. Each step is callable on its own and idempotent.
//!
//! Bracketed alias content (`[...]`) is deliberately left in place by
//! [`normalize`]; callers that need the display/compare form strip it with
//! [`main_name`], and [`extract_bracket_content`] returns exactly the alias
//! text.

use serde::{Deserialize, Serialize};

/// Modifier tokens stripped by default. Qualifiers that carry no grouping
/// signal in either catalog or patient text.
const DEFAULT_MODIFIERS: [&str; 7] = [
    "未特指",
    "非特指",
    "不伴并发症",
    "性质未定",
    "待查",
    "unspecified",
    "not otherwise specified",
];

/// Tokens that look like modifiers but are grouping-significant and must
/// survive stripping. Protection is configuration; the stripping step itself
/// has no knowledge of these.
const DEFAULT_PROTECTED: [&str; 6] = ["急性", "慢性", "原发性", "继发性", "恶性", "良性"];

/// Classifier characters that mark a numeral as a grade/stage/type value.
/// Numeral conversion only fires directly before one of these, so organ
/// names like 十二指肠 are left alone.
const NUMERAL_UNITS: [char; 6] = ['级', '期', '型', '度', '段', '区'];

/// Configuration for modifier stripping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizerConfig {
    /// Tokens removed wherever they occur.
    pub modifier_tokens: Vec<String>,
    /// Subset of modifier-like tokens that must never be removed.
    pub protected_tokens: Vec<String>,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            modifier_tokens: DEFAULT_MODIFIERS.iter().map(|s| (*s).to_string()).collect(),
            protected_tokens: DEFAULT_PROTECTED.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

impl NormalizerConfig {
    /// Modifier tokens with the protected subset removed, longest first so a
    /// longer token is stripped before any of its substrings.
    pub fn effective_modifiers(&self) -> Vec<&str> {
        let mut tokens: Vec<&str> = self
            .modifier_tokens
            .iter()
            .map(String::as_str)
            .filter(|token| !self.protected_tokens.iter().any(|p| p == token))
            .collect();
        tokens.sort_by_key(|token| std::cmp::Reverse(token.chars().count()));
        tokens
    }
}

/// Full canonicalization: half-width folding, whitespace collapse, modifier
/// stripping, numeral normalization. Bracket handling is the caller's
/// business. Empty input yields an empty string.
pub fn normalize(text: &str, config: &NormalizerConfig) -> String {
    let folded = to_half_width(text);
    let collapsed = collapse_whitespace(&folded);
    let stripped = strip_modifiers(&collapsed, config);
    let renumbered = normalize_numerals(&stripped);
    // Stripping can leave doubled spaces behind.
    collapse_whitespace(&renumbered)
}

/// Convert CJK full-width punctuation, letters and digits to their ASCII
/// equivalents. The ideographic space (U+3000) becomes an ASCII space.
pub fn to_half_width(text: &str) -> String {
    text.chars()
        .map(|ch| match ch {
            '\u{3000}' => ' ',
            '\u{FF01}'..='\u{FF5E}' => {
                char::from_u32(ch as u32 - 0xFEE0).unwrap_or(ch)
            }
            _ => ch,
        })
        .collect()
}

/// Collapse runs of whitespace (including the full-width space) to a single
/// ASCII space and trim the ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Remove configured modifier tokens. The protected subset never reaches
/// this step; see [`NormalizerConfig::effective_modifiers`].
pub fn strip_modifiers(text: &str, config: &NormalizerConfig) -> String {
    let tokens = config.effective_modifiers();
    let mut result = text.to_string();
    // Removing one token can expose an occurrence of another spanning the
    // cut, so iterate to a fixpoint; length strictly decreases each round.
    loop {
        let mut changed = false;
        for token in &tokens {
            if token.is_empty() {
                continue;
            }
            if result.contains(token) {
                result = result.replace(token, "");
                changed = true;
            }
        }
        if !changed {
            return result;
        }
    }
}

/// Normalize Roman numerals and spelled-out Chinese numerals to Arabic
/// digits, preserving adjacent text.
///
/// Conversion fires only when the numeral directly precedes a classifier
/// character (级, 期, 型, 度, 段, 区): "心功能Ⅲ级" → "心功能3级",
/// "房室传导阻滞二度" stays keyed as "…2度", while 十二指肠 and the `I` of
/// an ICD code are untouched. Dedicated Unicode Roman numeral characters
/// (Ⅰ–Ⅻ) are converted unconditionally since they never appear in codes.
pub fn normalize_numerals(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut idx = 0;

    while idx < chars.len() {
        let ch = chars[idx];

        if let Some(value) = unicode_roman_value(ch) {
            out.push_str(&value.to_string());
            idx += 1;
            continue;
        }

        if is_ascii_roman(ch) {
            let end = scan_while(&chars, idx, is_ascii_roman);
            let followed_by_unit = chars.get(end).is_some_and(|c| NUMERAL_UNITS.contains(c));
            let preceded_ok = idx == 0 || !chars[idx - 1].is_ascii_alphanumeric();
            let run: String = chars[idx..end].iter().collect();
            if followed_by_unit && preceded_ok {
                if let Some(value) = ascii_roman_value(&run) {
                    out.push_str(&value.to_string());
                    idx = end;
                    continue;
                }
            }
            out.push_str(&run);
            idx = end;
            continue;
        }

        if is_chinese_numeral(ch) {
            let end = scan_while(&chars, idx, is_chinese_numeral);
            let followed_by_unit = chars.get(end).is_some_and(|c| NUMERAL_UNITS.contains(c));
            let run: String = chars[idx..end].iter().collect();
            if followed_by_unit {
                if let Some(value) = chinese_numeral_value(&run) {
                    out.push_str(&value.to_string());
                    idx = end;
                    continue;
                }
            }
            out.push_str(&run);
            idx = end;
            continue;
        }

        out.push(ch);
        idx += 1;
    }

    out
}

/// The text inside the first `[...]` segment, or an empty string.
pub fn extract_bracket_content(text: &str) -> String {
    let Some(start) = text.find('[') else {
        return String::new();
    };
    match text[start + 1..].find(']') {
        Some(offset) => text[start + 1..start + 1 + offset].to_string(),
        None => String::new(),
    }
}

/// The text with every `[...]` segment removed and the ends trimmed.
pub fn main_name(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut depth = 0usize;
    for ch in text.chars() {
        match ch {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            _ if depth == 0 => out.push(ch),
            _ => {}
        }
    }
    out.trim().to_string()
}

fn scan_while(chars: &[char], start: usize, pred: fn(char) -> bool) -> usize {
    let mut end = start;
    while end < chars.len() && pred(chars[end]) {
        end += 1;
    }
    end
}

fn unicode_roman_value(ch: char) -> Option<u32> {
    match ch {
        '\u{2160}'..='\u{216B}' => Some(ch as u32 - 0x2160 + 1),
        '\u{2170}'..='\u{217B}' => Some(ch as u32 - 0x2170 + 1),
        _ => None,
    }
}

fn is_ascii_roman(ch: char) -> bool {
    matches!(ch, 'I' | 'V' | 'X')
}

fn ascii_roman_value(run: &str) -> Option<u32> {
    let mut total: i64 = 0;
    let mut prev = 0i64;
    for ch in run.chars().rev() {
        let value = match ch {
            'I' => 1,
            'V' => 5,
            'X' => 10,
            _ => return None,
        };
        if value < prev {
            total -= value;
        } else {
            total += value;
            prev = value;
        }
    }
    (total > 0).then_some(total as u32)
}

fn is_chinese_numeral(ch: char) -> bool {
    matches!(
        ch,
        '〇' | '零' | '一' | '二' | '三' | '四' | '五' | '六' | '七' | '八' | '九' | '十'
    )
}

fn chinese_digit(ch: char) -> Option<u32> {
    match ch {
        '〇' | '零' => Some(0),
        '一' => Some(1),
        '二' => Some(2),
        '三' => Some(3),
        '四' => Some(4),
        '五' => Some(5),
        '六' => Some(6),
        '七' => Some(7),
        '八' => Some(8),
        '九' => Some(9),
        _ => None,
    }
}

/// Values up to 99, the range that occurs in grades/stages.
fn chinese_numeral_value(run: &str) -> Option<u32> {
    let chars: Vec<char> = run.chars().collect();
    match chars.as_slice() {
        [single] if *single == '十' => Some(10),
        [single] => chinese_digit(*single),
        ['十', ones] => chinese_digit(*ones).map(|d| 10 + d),
        [tens, '十'] => chinese_digit(*tens).map(|d| d * 10),
        [tens, '十', ones] => match (chinese_digit(*tens), chinese_digit(*ones)) {
            (Some(t), Some(o)) => Some(t * 10 + o),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_width_folds_punctuation_and_digits() {
        assert_eq!(to_half_width("（Ｉ４８）"), "(I48)");
        assert_eq!(to_half_width("房颤　伴快速心室率"), "房颤 伴快速心室率");
    }

    #[test]
    fn whitespace_collapses_and_trims() {
        assert_eq!(collapse_whitespace("  心房  颤动\t "), "心房 颤动");
        assert_eq!(collapse_whitespace(""), "");
    }

    #[test]
    fn modifiers_strip_but_protected_survive() {
        let config = NormalizerConfig::default();
        assert_eq!(strip_modifiers("心房颤动，未特指", &config), "心房颤动，");
        // 原发性 resembles a qualifier but is grouping-significant.
        assert_eq!(strip_modifiers("原发性高血压", &config), "原发性高血压");
    }

    #[test]
    fn protected_token_wins_even_when_listed_as_modifier() {
        let config = NormalizerConfig {
            modifier_tokens: vec!["急性".to_string(), "未特指".to_string()],
            protected_tokens: vec!["急性".to_string()],
        };
        assert_eq!(strip_modifiers("急性心肌梗死未特指", &config), "急性心肌梗死");
    }

    #[test]
    fn unicode_roman_numerals_convert() {
        assert_eq!(normalize_numerals("心功能Ⅲ级"), "心功能3级");
        assert_eq!(normalize_numerals("NYHA分级Ⅱ"), "NYHA分级2");
    }

    #[test]
    fn ascii_roman_runs_convert_only_before_units() {
        assert_eq!(normalize_numerals("心功能III级"), "心功能3级");
        // The I of an ICD code is not a grade.
        assert_eq!(normalize_numerals("I48.000"), "I48.000");
        assert_eq!(normalize_numerals("NYHA IV级"), "NYHA 4级");
    }

    #[test]
    fn chinese_numerals_convert_only_before_units() {
        assert_eq!(normalize_numerals("房室传导阻滞二度"), "房室传导阻滞2度");
        assert_eq!(normalize_numerals("肿瘤三期"), "肿瘤3期");
        assert_eq!(normalize_numerals("二十一级"), "21级");
        // Organ name, not a numeral.
        assert_eq!(normalize_numerals("十二指肠溃疡"), "十二指肠溃疡");
    }

    #[test]
    fn bracket_content_extracts_and_strips() {
        assert_eq!(extract_bracket_content("心房颤动[房颤]"), "房颤");
        assert_eq!(extract_bracket_content("心房颤动"), "");
        assert_eq!(main_name("心房颤动[房颤]"), "心房颤动");
        assert_eq!(main_name("[房颤]心房颤动"), "心房颤动");
    }

    #[test]
    fn unclosed_bracket_yields_empty_alias() {
        assert_eq!(extract_bracket_content("心房颤动[房颤"), "");
    }

    #[test]
    fn normalize_composes_and_handles_empty() {
        let config = NormalizerConfig::default();
        assert_eq!(normalize("", &config), "");
        assert_eq!(
            normalize("　心功能Ⅲ级　未特指 ", &config),
            "心功能3级"
        );
    }

    #[test]
    fn normalize_is_idempotent() {
        let config = NormalizerConfig::default();
        for text in ["心房颤动[房颤]", "ＮＹＨＡ分级Ⅲ级", "原发性高血压 未特指"] {
            let once = normalize(text, &config);
            assert_eq!(normalize(&once, &config), once);
        }
    }
}
