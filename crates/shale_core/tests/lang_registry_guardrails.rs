use std::collections::HashMap;

use shale_core::chars;
use shale_core::lang::keywords;
use shale_core::lang::punctuation::{self, MAX_PUNCTUATOR_LEN};

#[test]
fn keywords_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, keywords::KeywordId> = HashMap::new();

    for info in keywords::KEYWORDS {
        assert_eq!(
            keywords::from_str(info.canonical),
            Some(info.id),
            "keyword canonical spelling not resolvable: {}",
            info.canonical
        );
        assert_eq!(
            keywords::as_str(info.id),
            info.canonical,
            "keyword as_str mismatch for {:?}",
            info.id
        );
        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!(
                "duplicate keyword spelling {:?}: {:?} and {:?}",
                info.canonical, prev, info.id
            );
        }
    }
}

#[test]
fn keywords_are_identifier_shaped() {
    // The lexer only reclassifies words it scanned as identifiers, so every keyword must be one.
    for info in keywords::KEYWORDS {
        let mut it = info.canonical.chars();
        let first = it.next().expect("empty keyword spelling");
        assert!(chars::is_identifier_start(first), "{:?}", info.canonical);
        assert!(it.all(chars::is_identifier_part), "{:?}", info.canonical);
    }
}

#[test]
fn literal_words_are_not_keywords() {
    for word in ["true", "false", "null", "undefined", "let"] {
        assert_eq!(keywords::from_str(word), None, "{word} must not be a keyword");
    }
}

#[test]
fn punctuator_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, punctuation::PunctuatorId> = HashMap::new();

    for info in punctuation::PUNCTUATORS {
        assert_eq!(punctuation::from_str(info.canonical), Some(info.id));
        assert_eq!(punctuation::as_str(info.id), info.canonical);
        assert!(
            !info.canonical.is_empty() && info.canonical.len() <= MAX_PUNCTUATOR_LEN,
            "punctuator {:?} has length outside 1..={MAX_PUNCTUATOR_LEN}",
            info.canonical
        );
        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!(
                "duplicate punctuator spelling {:?}: {:?} and {:?}",
                info.canonical, prev, info.id
            );
        }
    }
}

#[test]
fn every_multi_char_punctuator_has_a_registered_prefix() {
    // Longest-match scanning falls back one character at a time, so each shorter prefix of a
    // punctuator must itself be a punctuator (except `..`, which is never produced).
    for info in punctuation::PUNCTUATORS {
        let s = info.canonical;
        for len in 1..s.len() {
            let prefix = &s[..len];
            if prefix == ".." {
                continue;
            }
            assert!(
                punctuation::from_str(prefix).is_some(),
                "prefix {prefix:?} of {s:?} is not a punctuator"
            );
        }
    }
}

#[test]
fn punctuators_never_start_with_identifier_or_quote_characters() {
    for info in punctuation::PUNCTUATORS {
        let first = info.canonical.chars().next().expect("empty punctuator spelling");
        assert!(!chars::is_identifier_start(first));
        assert!(!chars::is_numeric_digit(first));
        assert!(first != '\'' && first != '"');
    }
}
