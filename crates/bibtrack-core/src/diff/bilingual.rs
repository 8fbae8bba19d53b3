//! Chinese-to-English mapping of bibliographic markers.
//!
//! The reference output renders non-Chinese entries with English markers
//! (`Vol.`, `ed`, `et al.`) while the engine emits the Chinese GB/T 7714
//! forms. Rewriting the Chinese markers lets the `lang` transform erase
//! that class of difference. The behavior matched here is the
//! `bilingual-bibliography` function of the modern-nju-thesis typst
//! package.

use regex::{Captures, Regex};
use std::sync::OnceLock;

/// Marker characters stripped before deciding whether an entry is Chinese.
const MARKER_CHARS: &str = "等卷册和版本章期页篇译间者(不详)";

/// Characters after `等` that already separate it from what follows.
const TRAILING_SEPARATORS: &str = ".,;:[]/\\<>?() \"'";

fn han_run_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\p{Han}{2,}").unwrap())
}

fn volume_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(第\s?)?(\d+)\s?[卷册]").unwrap())
}

fn edition_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\.?)\s*第?\s*(\d+)\s*[版本]").unwrap())
}

fn deng_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"等.").unwrap())
}

/// Whether the entry is a Chinese reference: at least two consecutive Han
/// characters remain after stripping the marker characters.
fn is_chinese_entry(x: &str) -> bool {
    let stripped: String = x.chars().filter(|c| !MARKER_CHARS.contains(*c)).collect();
    han_run_re().is_match(&stripped)
}

/// English ordinal suffix for an edition number.
fn ordinal_suffix(num: &str) -> &'static str {
    // 10th through 19th, including 11/12/13.
    if num.len() == 2 && num.starts_with('1') {
        return "th";
    }
    match num.as_bytes().last() {
        Some(b'1') => "st",
        Some(b'2') => "nd",
        Some(b'3') => "rd",
        _ => "th",
    }
}

/// Rewrite Chinese bibliographic markers to their English forms.
///
/// Chinese references pass through unchanged; translator markers (`译`)
/// are deliberately left alone, as folding multiple translators is
/// ambiguous in both renderings.
pub fn map_to_bilingual(x: &str) -> String {
    if is_chinese_entry(x) {
        return x.to_string();
    }

    // 第○卷 / 第○册 → Vol. ○ / Bk. ○
    let x = volume_re().replace_all(x, |caps: &Captures<'_>| {
        let unit = if caps[0].contains('卷') { "Vol. " } else { "Bk. " };
        format!("{unit}{}", &caps[2])
    });

    // 第○版 / ○本 → ordinal ed, keeping a preceding full stop
    let x = edition_re().replace_all(&x, |caps: &Captures<'_>| {
        let num = &caps[2];
        let prefix = if caps[1].is_empty() { "" } else { ". " };
        format!("{prefix}{num}{} ed", ordinal_suffix(num))
    });

    // 等 → et al., patching the spacing around whatever follows it
    let x = deng_re().replace_all(&x, |caps: &Captures<'_>| {
        let mut out = String::from("et al.");
        if let Some(following) = caps[0].chars().nth(1) {
            if !TRAILING_SEPARATORS.contains(following) {
                out.push(' ');
            }
            if following != '.' {
                out.push(following);
            }
        }
        out
    });

    x.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chinese_entry_unchanged() {
        assert_eq!(map_to_bilingual("汉字. 第 3 卷"), "汉字. 第 3 卷");
    }

    #[test]
    fn test_volume_marker() {
        assert_eq!(map_to_bilingual("第 3 卷"), "Vol. 3");
    }

    #[test]
    fn test_book_marker() {
        assert_eq!(map_to_bilingual("第 2 册"), "Bk. 2");
    }

    #[test]
    fn test_edition_teens_use_th() {
        assert_eq!(map_to_bilingual("第13版"), "13th ed");
    }

    #[test]
    fn test_edition_ordinal_by_last_digit() {
        assert_eq!(map_to_bilingual("第23版"), "23rd ed");
    }

    #[test]
    fn test_edition_keeps_preceding_stop() {
        assert_eq!(map_to_bilingual(". 2 版"), ". 2nd ed");
    }

    #[test]
    fn test_et_al_before_text() {
        assert_eq!(map_to_bilingual("WONG D M, 等. Foo"), "WONG D M, et al. Foo");
    }

    #[test]
    fn test_et_al_before_separator() {
        assert_eq!(
            map_to_bilingual("WONG D M, 等 trans"),
            "WONG D M, et al. trans"
        );
    }
}
