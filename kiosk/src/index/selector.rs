//! Key selectors: functions mapping a record to its ordering key.

use std::fmt;

/// Key substituted for an empty key so that the record sorts last.
///
/// Composite selectors also use it as the prefix of the fallback key.
///
/// This is U+10FFFF rather than U+FFFF. Keys compare as UTF-8 bytes, and
/// U+FFFF encodes below every supplementary-plane character (emoji, many
/// CJK extension ideographs), so it would not sort after such keys.
/// U+10FFFF encodes above every other scalar value.
pub const SENTINEL: char = char::MAX;

/// A function computing the ordering key of a record.
pub struct KeySelector<R> {
    select: Box<dyn Fn(&R) -> String>,
}

impl<R> KeySelector<R> {
    /// Wrap a plain key function.
    #[must_use]
    pub fn new(select: impl Fn(&R) -> String + 'static) -> Self {
        Self {
            select: Box::new(select),
        }
    }

    /// The ordering key of `record`.
    ///
    /// Returns [`SENTINEL`] as a one-character string when the selector
    /// yields an empty key.
    #[must_use]
    pub fn key(&self, record: &R) -> String {
        let key = self.raw(record);
        if key.is_empty() {
            SENTINEL.to_string()
        } else {
            key
        }
    }

    fn raw(&self, record: &R) -> String {
        (self.select)(record)
    }
}

impl<R: 'static> KeySelector<R> {
    /// Build the primary-or-fallback selector used when the catalog is
    /// re-keyed.
    ///
    /// The key is `primary(record)` when that is non-empty. Otherwise it is
    /// [`SENTINEL`] followed by `secondary(record)` (or nothing when there
    /// is no secondary), so records missing the primary key collect at the
    /// end, ordered among themselves by the secondary key.
    #[must_use]
    pub fn composite(
        primary: impl Fn(&R) -> String + 'static,
        secondary: Option<Self>,
    ) -> Self {
        Self::new(move |record| {
            let key = primary(record);
            if !key.is_empty() {
                return key;
            }
            let mut fallback = String::from(SENTINEL);
            if let Some(secondary) = &secondary {
                fallback.push_str(&secondary.raw(record));
            }
            fallback
        })
    }
}

impl<R> fmt::Debug for KeySelector<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeySelector").finish_non_exhaustive()
    }
}
