//! Locale-aware name comparison.
//!
//! Uses the root Unicode collation: base letters first (so "Łukasz" sorts
//! with "L" and "ß" with "ss"), then accents, then lowercase before
//! uppercase. Raw code-point order breaks any remaining tie so the result
//! is a total order.

use icu_collator::CollatorBorrowed;
use log::warn;
use std::cmp::Ordering;

/// Root-locale collator, built once per sort.
pub struct NameCollator {
    collator: Option<CollatorBorrowed<'static>>,
}

impl NameCollator {
    pub fn new() -> Self {
        let collator = match CollatorBorrowed::try_new(Default::default(), Default::default()) {
            Ok(c) => Some(c),
            Err(e) => {
                warn!("collation data unavailable, sorting by code point: {}", e);
                None
            }
        };
        Self { collator }
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        let collated = match self.collator {
            Some(ref c) => c.compare(a, b),
            None => Ordering::Equal,
        };
        collated.then_with(|| a.cmp(b))
    }
}

impl Default for NameCollator {
    fn default() -> Self {
        Self::new()
    }
}

/// Compare two names the way a locale-aware sort would.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    NameCollator::new().compare(a, b)
}
