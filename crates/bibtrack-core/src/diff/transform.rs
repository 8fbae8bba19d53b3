//! Ignore transforms.
//!
//! Each category except `Unknown` names a normalization that erases one
//! class of difference. Transforms are applied to *both* sides of a pair;
//! two lines "differ only by X" when applying X to both makes them equal.

use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

use crate::category::Category;
use crate::diff::bilingual::map_to_bilingual;

fn number_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r": [-\d]+(\p{P})").unwrap())
}

fn bracket_dot_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\]\.\s*").unwrap())
}

fn colon_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r":\s*").unwrap())
}

fn is_han(c: char) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\A\p{Han}\z").unwrap());
    let mut buf = [0u8; 4];
    re.is_match(c.encode_utf8(&mut buf))
}

/// Remove whitespace runs whose surrounding characters satisfy
/// `should_strip(previous, next)`. Runs at the start or end of the line
/// are kept.
fn strip_spaces_between(x: &str, should_strip: impl Fn(char, char) -> bool) -> String {
    let chars: Vec<char> = x.chars().collect();
    let mut out = String::with_capacity(x.len());
    let mut i = 0;
    while i < chars.len() {
        if !chars[i].is_whitespace() {
            out.push(chars[i]);
            i += 1;
            continue;
        }
        let start = i;
        while i < chars.len() && chars[i].is_whitespace() {
            i += 1;
        }
        let prev = start.checked_sub(1).map(|p| chars[p]);
        let next = chars.get(i).copied();
        let strip = matches!((prev, next), (Some(p), Some(n)) if should_strip(p, n));
        if !strip {
            out.extend(&chars[start..i]);
        }
    }
    out
}

/// Apply `actions` to `x` in order.
///
/// Sequencing constraints: `lang` must come first if present, and
/// `han_space`/`code_space` forbid any later `lang`/`num`/`卷` (those
/// assume the spaces still exist). Every subsequence of
/// [`Category::IGNORE_ORDER`] applied in order satisfies them; violating
/// the constraints is a caller bug and panics.
pub fn apply_ignores(x: &str, actions: &[Category]) -> String {
    let mut x = x.to_string();
    let mut forbidden: HashSet<Category> = HashSet::new();

    for &action in actions {
        assert!(
            !forbidden.contains(&action),
            "{action} is forbidden due to previous actions"
        );

        match action {
            Category::Num => {
                x = number_re().replace_all(&x, "$1").into_owned();
            }
            Category::Lang => {
                x = map_to_bilingual(&x);
            }
            Category::Case => {
                x = x.to_lowercase();
            }
            Category::Volume => {
                x = x.replace(": 卷 ", ": ");
            }
            Category::Escape => {
                x = x.replace(r"\-", "-");
            }
            Category::HanSpace => {
                x = strip_spaces_between(&x, |prev, next| is_han(prev) != is_han(next));
                forbidden.extend([Category::Lang, Category::Num, Category::Volume]);
            }
            Category::CodeSpace => {
                x = strip_spaces_between(&x, |prev, next| {
                    prev.is_ascii_alphanumeric() && next.is_ascii_alphanumeric()
                });
                forbidden.extend([Category::Lang, Category::Num, Category::Volume]);
            }
            Category::Punct => {
                x = bracket_dot_re().replace_all(&x, "]").into_owned();
                x = colon_re().replace_all(&x, "").into_owned();
            }
            Category::Unknown => panic!("Unknown is not a transform"),
        }
        // lang should be the first if it exists
        forbidden.insert(Category::Lang);
    }

    x
}

/// Whether `a` and `b` become equal after applying `actions` to both.
pub fn eq_ignore(a: &str, b: &str, actions: &[Category]) -> bool {
    apply_ignores(a, actions) == apply_ignores(b, actions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_num_drops_page_numbers_before_punctuation() {
        assert_eq!(apply_ignores("Title: 123.", &[Category::Num]), "Title.");
        assert_eq!(apply_ignores("Range: 12-45,", &[Category::Num]), "Range,");
    }

    #[test]
    fn test_volume_marker_dropped() {
        assert_eq!(
            apply_ignores("Records: 卷 2.", &[Category::Volume]),
            "Records: 2."
        );
    }

    #[test]
    fn test_escape_unescapes_hyphen() {
        assert_eq!(apply_ignores(r"a\-b", &[Category::Escape]), "a-b");
    }

    #[test]
    fn test_han_space_stripped_at_script_boundary() {
        assert_eq!(apply_ignores("汉字 abc", &[Category::HanSpace]), "汉字abc");
        assert_eq!(apply_ignores("abc 汉字", &[Category::HanSpace]), "abc汉字");
    }

    #[test]
    fn test_han_space_kept_between_han() {
        assert_eq!(apply_ignores("汉 字", &[Category::HanSpace]), "汉 字");
    }

    #[test]
    fn test_code_space_stripped_between_alphanumerics() {
        assert_eq!(apply_ignores("ab 12", &[Category::CodeSpace]), "ab12");
        assert_eq!(apply_ignores("ab, 12", &[Category::CodeSpace]), "ab, 12");
    }

    #[test]
    fn test_punct_drops_bracket_dot_and_colon() {
        assert_eq!(apply_ignores("[M]. 2000", &[Category::Punct]), "[M]2000");
        assert_eq!(apply_ignores("City: Press", &[Category::Punct]), "CityPress");
    }

    #[test]
    fn test_eq_ignore_applies_to_both_sides() {
        assert!(eq_ignore("X: 2000.", "X:2000.", &[Category::Punct]));
        assert!(!eq_ignore("X: 2000.", "Y:2000.", &[Category::Punct]));
    }

    #[test]
    #[should_panic(expected = "forbidden")]
    fn test_sequencing_constraint_enforced() {
        apply_ignores("x", &[Category::HanSpace, Category::Num]);
    }

    #[test]
    fn test_canonical_order_is_applicable() {
        // The full order must never trip the sequencing constraints.
        apply_ignores("[1] 汉字: 卷 2, 等. X\\-Y: 3.", &Category::IGNORE_ORDER);
    }
}
