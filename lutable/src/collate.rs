//! Locale-aware text ordering.
//!
//! Strings are ordered with the Unicode root collation at tertiary strength,
//! lowercase first: letters first, then accents, then case. Strings the
//! collator considers equal fall back to code point order so the result
//! stays total.

use std::cmp::Ordering;

use icu_collator::{CaseFirst, Collator, CollatorOptions, Strength};

thread_local! {
    static COLLATOR: Option<Collator> = root_collator();
}

fn root_collator() -> Option<Collator> {
    let mut options = CollatorOptions::new();
    options.strength = Some(Strength::Tertiary);
    options.case_first = Some(CaseFirst::LowerFirst);

    match Collator::try_new(&Default::default(), options) {
        Ok(collator) => Some(collator),
        Err(e) => {
            log::warn!("[collate] root collation unavailable, using code point order: {e:?}");
            None
        }
    }
}

/// Order two strings for display.
///
/// ```
/// use std::cmp::Ordering;
/// use lutable::compare_text;
///
/// assert_eq!(compare_text("apple", "Banana"), Ordering::Less);
/// assert_eq!(compare_text("éclair", "eclairs"), Ordering::Less);
/// assert_eq!(compare_text("Øst", "Paris"), Ordering::Less);
/// ```
pub fn compare_text(a: &str, b: &str) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }

    COLLATOR
        .with(|collator| match collator {
            Some(collator) => collator.compare(a, b),
            None => Ordering::Equal,
        })
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_is_secondary_to_letters() {
        assert_eq!(compare_text("apple", "Banana"), Ordering::Less);
        assert_eq!(compare_text("Banana", "cherry"), Ordering::Less);
        assert_eq!(compare_text("Zed", "ann"), Ordering::Greater);
    }

    #[test]
    fn test_lowercase_before_uppercase() {
        assert_eq!(compare_text("a", "A"), Ordering::Less);
        assert_eq!(compare_text("Mid", "mid"), Ordering::Greater);
    }

    #[test]
    fn test_diacritics_fold() {
        assert_eq!(compare_text("eclair", "éclair"), Ordering::Less);
        assert_eq!(compare_text("éclair", "eclairs"), Ordering::Less);
        assert_eq!(compare_text("Ångström", "Zulu"), Ordering::Less);
    }

    #[test]
    fn test_composed_and_decomposed_compare_by_code_point_last() {
        let composed = "\u{e9}";
        let decomposed = "e\u{301}";
        // Same letters, same accents, same case; only the raw encoding differs.
        assert_eq!(
            compare_text(composed, decomposed),
            composed.cmp(decomposed)
        );
        assert_ne!(compare_text(composed, decomposed), Ordering::Equal);
    }

    #[test]
    fn test_letters_without_decomposition() {
        assert_eq!(compare_text("Øst", "Paris"), Ordering::Less);
        assert_eq!(compare_text("Bjørn", "Bjorz"), Ordering::Less);
        assert_eq!(compare_text("Łódź", "Madrid"), Ordering::Less);
        assert_eq!(compare_text("æble", "zebra"), Ordering::Less);
        assert_eq!(compare_text("Straße", "Strassf"), Ordering::Less);
    }

    #[test]
    fn test_equal_strings() {
        assert_eq!(compare_text("same", "same"), Ordering::Equal);
    }
}
