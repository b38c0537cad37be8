//! Title ordering by Unicode collation.
//!
//! Titles in the catalog and in notes are frequently Turkish or carry
//! accents, so plain code point order would push `Çiçek` or `Élite` past `Z`.
//! [`TitleCollator`] uses the root-locale Unicode Collation Algorithm from
//! `icu_collator`, which sorts `Ç` with `C`, `É` with `E` and `İ` with `I`.

use icu_collator::{Collator, CollatorOptions};
use std::cmp::Ordering;

/// Compares titles in locale-aware order.
///
/// Build one per sort pass; construction loads collation data.
///
/// # Example
///
/// ```rust
/// use filmbox::query::collation::TitleCollator;
/// use std::cmp::Ordering;
///
/// let collator = TitleCollator::new();
/// assert_eq!(collator.compare("Çiçek", "Dünya"), Ordering::Less);
/// assert_eq!(collator.compare("Élite", "Zorro"), Ordering::Less);
/// ```
pub struct TitleCollator {
    collator: Option<Collator>,
}

impl TitleCollator {
    /// Loads the root-locale collator.
    ///
    /// If the collation data cannot be loaded the collator falls back to
    /// comparing lowercased titles, and logs a warning.
    #[must_use]
    pub fn new() -> Self {
        let collator = Collator::try_new(&Default::default(), CollatorOptions::new())
            .map_err(|e| tracing::warn!(error = %e, "collation data unavailable, titles sort by lowercase form"))
            .ok();
        Self { collator }
    }

    /// Orders `a` against `b`.
    ///
    /// # Parameters
    ///
    /// * `a`, `b` - Titles to compare
    ///
    /// # Returns
    ///
    /// The collation order of the two titles. Titles the collator considers
    /// equal are ordered by their raw strings, so the result is a total order
    /// and only identical strings compare `Equal`.
    #[must_use]
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        let collated = match &self.collator {
            Some(collator) => collator.compare(a, b),
            None => a.to_lowercase().cmp(&b.to_lowercase()),
        };
        collated.then_with(|| a.cmp(b))
    }
}

impl Default for TitleCollator {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TitleCollator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TitleCollator")
            .field("loaded", &self.collator.is_some())
            .finish()
    }
}
