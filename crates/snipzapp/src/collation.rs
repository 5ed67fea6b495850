//! Folder ordering.
//!
//! Folders are listed alphabetically the way a Spanish-speaking user expects,
//! using the ICU collator for the `es` locale at primary strength: case and
//! accents do not matter (in any script, composed or decomposed), and `ñ` is a
//! letter of its own between `n` and `o`. Names that compare equal under those
//! rules fall back to plain string order so the listing is deterministic.

use icu_collator::{Collator, CollatorOptions, Strength};
use icu_locid::locale;
use log::warn;
use std::cmp::Ordering;

thread_local! {
    static SPANISH: Option<Collator> = spanish_collator();
}

fn spanish_collator() -> Option<Collator> {
    let mut options = CollatorOptions::new();
    options.strength = Some(Strength::Primary);
    match Collator::try_new(&locale!("es").into(), options) {
        Ok(collator) => Some(collator),
        Err(e) => {
            warn!("Spanish collation unavailable, sorting by code point: {}", e);
            None
        }
    }
}

/// Compares two names for display.
pub fn compare(a: &str, b: &str) -> Ordering {
    let primary = SPANISH.with(|collator| {
        collator
            .as_ref()
            .map_or(Ordering::Equal, |collator| collator.compare(a, b))
    });
    primary.then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(names: &[&str]) -> Vec<String> {
        let mut v: Vec<String> = names.iter().map(|s| s.to_string()).collect();
        v.sort_by(|a, b| compare(a, b));
        v
    }

    #[test]
    fn ignores_case() {
        assert_eq!(sorted(&["beta", "Alpha", "Gamma"]), vec!["Alpha", "beta", "Gamma"]);
    }

    #[test]
    fn accents_sort_with_base_letter() {
        assert_eq!(sorted(&["Beta", "árbol", "Azul"]), vec!["árbol", "Azul", "Beta"]);
    }

    #[test]
    fn enye_sorts_after_n() {
        assert_eq!(
            sorted(&["Oso", "ñandú", "Beta", "nube", "árbol"]),
            vec!["árbol", "Beta", "nube", "ñandú", "Oso"]
        );
    }

    #[test]
    fn letters_beyond_latin1_sort_with_their_base() {
        assert_eq!(compare("Čaj", "Dama"), Ordering::Less);
        assert_eq!(compare("Łódź", "Madrid"), Ordering::Less);
        assert_eq!(compare("Ąbc", "Bcd"), Ordering::Less);
        assert_eq!(compare("Śląsk", "Tarragona"), Ordering::Less);
    }

    #[test]
    fn decomposed_accents_match_composed() {
        assert_eq!(compare("a\u{301}rbol", "azul"), Ordering::Less);
        assert_eq!(
            sorted(&["azul", "a\u{301}rbol", "Beta"]),
            vec!["a\u{301}rbol", "azul", "Beta"]
        );
    }

    #[test]
    fn equal_keys_fall_back_to_raw_order() {
        assert_eq!(compare("Utils", "utils"), Ordering::Less);
        assert_eq!(compare("utils", "utils"), Ordering::Equal);
    }
}
