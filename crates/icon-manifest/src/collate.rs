//! Japanese collation for icon and folder names.

use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions};
use icu_locid::locale;

use crate::error::{ManifestError, ManifestResult};

/// Orders names with the CLDR `ja` tailoring.
///
/// Names the collator treats as equal fall back to code-point order so that
/// the output never depends on directory listing order.
pub struct IconCollator {
    collator: Collator,
}

impl IconCollator {
    pub fn japanese() -> ManifestResult<Self> {
        let collator = Collator::try_new(&locale!("ja").into(), CollatorOptions::new())
            .map_err(|e| ManifestError::Collator(e.to_string()))?;
        Ok(Self { collator })
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        self.collator.compare(a, b).then_with(|| a.cmp(b))
    }

    pub fn sort(&self, names: &mut [String]) {
        names.sort_by(|a, b| self.compare(a, b));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(names: &[&str]) -> Vec<String> {
        let collator = IconCollator::japanese().unwrap();
        let mut names: Vec<String> = names.iter().map(|s| s.to_string()).collect();
        collator.sort(&mut names);
        names
    }

    #[test]
    fn test_ascii_order() {
        assert_eq!(sorted(&["b.svg", "a.svg", "c.svg"]), vec!["a.svg", "b.svg", "c.svg"]);
    }

    #[test]
    fn test_case_is_not_byte_order() {
        // Byte order would put "B" before "a".
        assert_eq!(sorted(&["B.svg", "a.svg"]), vec!["a.svg", "B.svg"]);
    }

    #[test]
    fn test_latin_before_kana() {
        assert_eq!(
            sorted(&["あ.svg", "b.svg", "a.svg"]),
            vec!["a.svg", "b.svg", "あ.svg"]
        );
    }

    #[test]
    fn test_voiced_kana_after_plain() {
        assert_eq!(sorted(&["が.svg", "か.svg"]), vec!["か.svg", "が.svg"]);
    }

    #[test]
    fn test_equal_names_are_equal() {
        let collator = IconCollator::japanese().unwrap();
        assert_eq!(collator.compare("icon.svg", "icon.svg"), Ordering::Equal);
    }
}
