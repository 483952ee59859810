use super::pattern::is_hangul;

/// The one glyph every grammatical-category annotation is replaced with.
pub const PLACEHOLDER: &str = "~";

/// Parenthesized grammatical-category annotations used by the book.
pub const CATEGORY_ANNOTATIONS: [&str; 12] = [
    "(동사원형)",
    "(동사)",
    "(명사)",
    "(형용사)",
    "(주어)",
    "(목적어)",
    "(평서문)",
    "(질문 어순)",
    "(날/날짜/요일)",
    "(날/요일)",
    "(기간)",
    "(장소)",
];

const SOURCE_PUNCT: &str = "+-()[]{}'\"/.,!?~’";

/// Bring a raw pattern line into the canonical "pattern : translation" shape.
///
/// 1. Category annotations become [`PLACEHOLDER`].
/// 2. Without a colon, the English run and the Hangul run are joined with " : ".
/// 3. Otherwise, unless some colon already has exactly one space on each
///    side, the first colon gets one.
///
/// Applying it to its own output returns the output unchanged.
pub fn clean_pattern(raw: &str) -> String {
    let mut pattern = raw.trim().to_string();

    for annotation in CATEGORY_ANNOTATIONS {
        pattern = pattern.replace(annotation, PLACEHOLDER);
    }

    match pattern.find(':') {
        None => {
            if let Some((source, translation)) = split_source_translation(&pattern) {
                pattern = format!("{source} : {translation}");
            }
        }
        Some(_) if has_separator(&pattern) => {}
        Some(idx) => {
            let before = pattern[..idx].trim_end();
            let after = pattern[idx + 1..].trim_start();
            pattern = format!("{before} : {after}");
        }
    }

    pattern.trim().to_string()
}

/// Split "English run <ws> Hangul-led run" at the whitespace preceding the
/// first Hangul word. The English side must consist of source-language
/// characters only.
fn split_source_translation(s: &str) -> Option<(&str, &str)> {
    let first_hangul = s.char_indices().find(|&(_, c)| is_hangul(c))?.0;
    let split = s[..first_hangul].rfind(char::is_whitespace)?;

    let source = s[..split].trim();
    let translation = s[split..].trim();
    if source.is_empty() || !source.chars().all(is_source_char) {
        return None;
    }
    Some((source, translation))
}

fn is_source_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c.is_whitespace() || SOURCE_PUNCT.contains(c)
}

/// Any colon already written as the canonical " : " separator.
fn has_separator(s: &str) -> bool {
    s.match_indices(':')
        .any(|(idx, _)| has_single_spaces_around(s, idx))
}

/// Exactly one space before and after the colon at byte `idx`, with text
/// on both sides.
fn has_single_spaces_around(s: &str, idx: usize) -> bool {
    let single_before = s[..idx]
        .strip_suffix(' ')
        .is_some_and(|b| !b.is_empty() && !b.ends_with(char::is_whitespace));
    let single_after = s[idx + 1..]
        .strip_prefix(' ')
        .is_some_and(|a| !a.is_empty() && !a.starts_with(char::is_whitespace));
    single_before && single_after
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annotation_replaced_and_colon_inserted() {
        assert_eq!(
            clean_pattern("Do you (동사원형) it? 그것을 합니까"),
            "Do you ~ it? : 그것을 합니까"
        );
    }

    #[test]
    fn test_all_annotations_use_one_placeholder() {
        assert_eq!(
            clean_pattern("(주어) + be + (형용사) : (주어)는 (형용사)해요"),
            "~ + be + ~ : ~는 ~해요"
        );
        assert_eq!(
            clean_pattern("on (날/날짜/요일) : (날/요일)에"),
            "on ~ : ~에"
        );
    }

    #[test]
    fn test_colon_spacing_normalized() {
        assert_eq!(clean_pattern("Can I ~?:~해도 돼요?"), "Can I ~? : ~해도 돼요?");
        assert_eq!(clean_pattern("Can I ~?   :  ~해도 돼요?"), "Can I ~? : ~해도 돼요?");
        assert_eq!(clean_pattern("Can I ~? : ~해도 돼요?"), "Can I ~? : ~해도 돼요?");
    }

    #[test]
    fn test_existing_separator_left_alone() {
        assert_eq!(clean_pattern("at 7:30 : 7시 30분에"), "at 7:30 : 7시 30분에");
        assert_eq!(
            clean_pattern("from (날/요일) 9:00 : ~ 9시부터"),
            "from ~ 9:00 : ~ 9시부터"
        );
    }

    #[test]
    fn test_only_first_colon_touched() {
        assert_eq!(clean_pattern("at 3:00:3시에"), "at 3 : 00:3시에");
    }

    #[test]
    fn test_tilde_led_translation() {
        assert_eq!(
            clean_pattern("I'm going to + (동사원형) ~할 예정이다"),
            "I'm going to + ~ : ~할 예정이다"
        );
    }

    #[test]
    fn test_unsplittable_left_alone() {
        // Hangul first: nothing to split
        assert_eq!(clean_pattern("그것을 합니까 (동사)"), "그것을 합니까 ~");
        // no whitespace before the Hangul run
        assert_eq!(clean_pattern("abc한국어"), "abc한국어");
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "Do you (동사원형) it? 그것을 합니까",
            "Can I ~?:~해도 돼요?",
            "Can I ~?   :  ~해도 돼요?",
            "trailing colon:",
            ": leading colon",
            "at 3:00 : 3시에",
            "at 3:00:3시에",
            "그것을 합니까 (동사)",
            "(주어) + be + (형용사) : (주어)는 (형용사)해요",
        ];
        for input in inputs {
            let once = clean_pattern(input);
            assert_eq!(clean_pattern(&once), once, "input: {input}");
        }
    }
}
